use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use dial::app::{App, AppEvent};
use dial::catalog::Catalog;
use dial::config::Config;
use dial::preferences::PreferenceManager;
use dial::storage::{Database, DatabaseError};
use dial::subscribe::SubscriptionForm;
use dial::theme::{system_theme_channel, ThemeManager, ThemePreference, THEME_PREF_KEY};
use dial::ui;

/// Get the config directory path (~/.config/dial/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("dial"))
}

#[derive(Parser, Debug)]
#[command(name = "dial", about = "Terminal podcast-catalog browser")]
struct Args {
    /// Load the catalog from a TOML file instead of the built-in data
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Theme preference for this session: light, dark or system (persisted)
    #[arg(long, value_name = "VALUE")]
    theme: Option<String>,

    /// Reset database (delete and recreate)
    #[arg(long)]
    reset_db: bool,

    /// Record a newsletter subscription and exit (requires --email and --name)
    #[arg(long)]
    subscribe: bool,

    /// Subscriber email address
    #[arg(long, requires = "subscribe")]
    email: Option<String>,

    /// Subscriber display name
    #[arg(long, requires = "subscribe")]
    name: Option<String>,

    /// Interest topic, repeatable (new-episodes, interviews, behind-scenes, news)
    #[arg(long = "interest", requires = "subscribe")]
    interests: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Set up config directory
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        println!("Created config directory: {}", config_dir.display());
    }

    // Restrict directory access on Unix (user-only access)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&config_dir) {
            Ok(metadata) => {
                let mut perms = metadata.permissions();
                perms.set_mode(0o700);
                if let Err(e) = std::fs::set_permissions(&config_dir, perms) {
                    tracing::warn!(
                        path = %config_dir.display(),
                        error = %e,
                        "Failed to set config directory permissions to 0700"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_dir.display(),
                    error = %e,
                    "Failed to read config directory metadata"
                );
            }
        }
    }

    let db_path = config_dir.join("dial.db");

    // Handle --reset-db flag
    if args.reset_db && db_path.exists() {
        std::fs::remove_file(&db_path).context("Failed to delete database")?;
        println!("Database reset.");
    }

    // Open database
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in database path"))?;
    let db = match Database::open(db_path_str).await {
        Ok(db) => db,
        Err(DatabaseError::InstanceLocked) => {
            eprintln!(
                "Error: Another instance of dial appears to be running. Please close it and try again."
            );
            std::process::exit(1);
        }
        Err(e) => {
            return Err(anyhow::anyhow!("Failed to open database: {}", e));
        }
    };

    // Handle --subscribe: validate, persist, exit
    if args.subscribe {
        let form = SubscriptionForm {
            email: args.email.clone().unwrap_or_default(),
            name: args.name.clone().unwrap_or_default(),
            interests: args.interests.clone(),
        };
        match form.validate() {
            Ok(valid) => {
                valid.submit(&db).await.context("Failed to save subscription")?;
                println!("Subscribed {} <{}>.", valid.name, valid.email);
                return Ok(());
            }
            Err(errors) => {
                eprintln!("Subscription not saved:");
                for (field, message) in errors.iter() {
                    eprintln!("  {}: {}", field, message);
                }
                std::process::exit(1);
            }
        }
    }

    // Load configuration, merge DB-side preference overrides on top
    let config = Config::load(&config_dir.join("config.toml"))
        .context("Failed to load configuration")?;
    let prefs = match PreferenceManager::load(&config, &db).await {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load preferences from DB, using config only");
            PreferenceManager::from_config(&config)
        }
    };

    // Catalog: CLI flag wins over preference, then the built-in data
    let catalog = match args.catalog.clone().or_else(|| prefs.catalog_path()) {
        Some(path) => {
            let catalog = Catalog::load(&path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
            println!(
                "Loaded catalog: {} categories, {} podcasts, {} episodes",
                catalog.categories().len(),
                catalog.podcasts().len(),
                catalog.episodes().len()
            );
            catalog
        }
        None => Catalog::builtin(),
    };

    // Theme: the OS signal feeds a watch channel; the manager reconciles it
    // with the stored preference.
    let (_system_tx, system_rx) = system_theme_channel();
    let persisted = prefs.theme_preference().to_string();
    let mut theme = ThemeManager::init(Some(&persisted), system_rx.clone());

    // --theme overrides and persists for future sessions
    if let Some(value) = &args.theme {
        match ThemePreference::from_str_name(value) {
            Some(preference) => {
                // Startup: no UI is up yet, so resolve the marker immediately.
                if let Some(token) = theme.set(preference, &db).await {
                    theme.clear_transition(token);
                }
                tracing::info!(preference = preference.name(), "Theme set from command line");
            }
            None => {
                eprintln!(
                    "Error: unknown theme '{}' (expected light, dark or system)",
                    value
                );
                std::process::exit(1);
            }
        }
    } else if prefs.get(THEME_PREF_KEY).is_none() {
        tracing::debug!("No stored theme preference, following the terminal");
    }

    // Create app state
    let mut app = App::new(catalog, db, theme, prefs.popular_limit());

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx, system_rx).await?;

    println!("Goodbye!");
    Ok(())
}
