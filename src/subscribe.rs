//! Newsletter subscription intake: validation plus persistence.
//!
//! Validation errors are keyed by field name so a caller can attach each
//! message to the input that produced it. All fields are checked in one pass
//! rather than stopping at the first failure.
use std::collections::BTreeMap;

use anyhow::Result;

use crate::storage::Database;
use crate::util::strip_control_chars;

/// Interest topics a subscriber can opt into.
pub const INTEREST_OPTIONS: &[(&str, &str)] = &[
    ("new-episodes", "New episode notifications"),
    ("interviews", "Special interview episodes"),
    ("behind-scenes", "Behind the scenes content"),
    ("news", "Podcast news and updates"),
];

// ============================================================================
// Form and Validation
// ============================================================================

/// Raw subscription form input, prior to validation.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionForm {
    pub email: String,
    pub name: String,
    pub interests: Vec<String>,
}

/// Per-field validation messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }
}

impl SubscriptionForm {
    /// Validate all fields, collecting every failure.
    ///
    /// Rules:
    /// - `email` must look like an address: one `@` with a non-empty local
    ///   part and a domain containing a dot
    /// - `name` must be non-empty after trimming
    /// - at least one interest must be selected
    pub fn validate(&self) -> Result<ValidSubscription, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let email = self.email.trim();
        if !is_valid_email(email) {
            errors.insert("email", "Please enter a valid email address");
        }

        // Names may come straight off a terminal; drop escapes before storing.
        let name = strip_control_chars(&self.name);
        let name = name.trim();
        if name.is_empty() {
            errors.insert("name", "Name is required");
        }

        if self.interests.is_empty() {
            errors.insert("interests", "Please select at least one interest");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidSubscription {
            email: email.to_lowercase(),
            name: name.to_string(),
            interests: self.interests.clone(),
        })
    }
}

/// A subscription that passed validation. Email is lowercased, name trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubscription {
    pub email: String,
    pub name: String,
    pub interests: Vec<String>,
}

impl ValidSubscription {
    /// Persist the subscription. Re-submitting an existing email refreshes
    /// the stored name and interests rather than failing.
    pub async fn submit(&self, db: &Database) -> Result<i64> {
        let id = db
            .upsert_subscriber(&self.email, &self.name, &self.interests)
            .await?;
        tracing::info!(email = %self.email, id, "Subscription recorded");
        Ok(id)
    }
}

/// Minimal structural email check: `local@domain.tld`.
///
/// Not RFC 5321; it only rejects obviously malformed input before it reaches
/// the store.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.contains(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    // Domain needs an interior dot
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
