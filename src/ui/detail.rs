//! Full-screen detail pages for a podcast or an episode.

use crate::app::App;
use crate::catalog::Podcast;
use crate::util::format_listen_count;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the podcast detail page for the current selection.
pub(super) fn render_podcast(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let Some(podcast) = app.selected_podcast() else {
        let msg = Paragraph::new("Podcast not found")
            .block(Block::default().borders(Borders::ALL))
            .style(palette.detail_body);
        f.render_widget(msg, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(podcast.title.clone(), palette.detail_heading)),
        Line::from(Span::styled(
            format!("by {}", podcast.creator),
            palette.detail_metadata,
        )),
        Line::default(),
    ];

    let mut meta = Vec::new();
    if let Some(rating) = podcast.rating {
        meta.push(format!("{:.1}/5", rating));
    }
    if let Some(count) = podcast.listen_count {
        meta.push(format!("{} listens", format_listen_count(count)));
    }
    if podcast.featured {
        meta.push("Featured".to_string());
    }
    if !meta.is_empty() {
        lines.push(Line::from(Span::styled(
            meta.join(" · "),
            palette.detail_metadata,
        )));
    }

    let category_names: Vec<&str> = podcast
        .categories
        .iter()
        .filter_map(|id| app.catalog.category(id))
        .map(|c| c.name.as_str())
        .collect();
    if !category_names.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Categories: {}", category_names.join(", ")),
            palette.tag,
        )));
    }

    lines.push(Line::default());
    for text_line in podcast.description.lines() {
        lines.push(Line::from(Span::styled(
            text_line.to_string(),
            palette.detail_body,
        )));
    }

    lines.extend(platform_lines(podcast, app));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.panel_border_focused)
                .title(" Podcast "),
        );

    f.render_widget(paragraph, area);
}

/// Platform link section, skipped entirely when no links exist.
fn platform_lines<'a>(podcast: &Podcast, app: &App) -> Vec<Line<'a>> {
    let palette = app.palette();
    let mut lines = Vec::new();

    let mut entries: Vec<(String, String)> = Vec::new();
    if let Some(url) = &podcast.website_url {
        entries.push(("Website".to_string(), url.clone()));
    }
    if let Some(links) = &podcast.links {
        for (name, url) in [
            ("Spotify", &links.spotify),
            ("Apple", &links.apple),
            ("Google", &links.google),
            ("Overcast", &links.overcast),
        ] {
            if let Some(url) = url {
                entries.push((name.to_string(), url.clone()));
            }
        }
        for link in &links.other {
            entries.push((link.name.clone(), link.url.clone()));
        }
    }

    if !entries.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Listen on".to_string(),
            palette.detail_heading,
        )));
        for (name, url) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", name), palette.detail_metadata),
                Span::styled(url, palette.detail_link),
            ]));
        }
    }

    lines
}

/// Render the episode detail page for the current selection.
pub(super) fn render_episode(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let Some(episode) = app.selected_episode() else {
        let msg = Paragraph::new("Episode not found")
            .block(Block::default().borders(Borders::ALL))
            .style(palette.detail_body);
        f.render_widget(msg, area);
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        episode.title.clone(),
        palette.detail_heading,
    ))];

    let mut meta = vec![
        episode.publish_date.format("%B %-d, %Y").to_string(),
        episode.duration.clone(),
    ];
    if let (Some(season), Some(number)) = (episode.season, episode.episode) {
        meta.push(format!("S{}E{}", season, number));
    }
    lines.push(Line::from(Span::styled(
        meta.join(" · "),
        palette.detail_metadata,
    )));

    if !episode.hosts.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Hosts: {}", episode.hosts.join(", ")),
            palette.detail_metadata,
        )));
    }
    if !episode.guests.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Guests: {}", episode.guests.join(", ")),
            palette.detail_metadata,
        )));
    }
    if !episode.tags.is_empty() {
        lines.push(Line::from(Span::styled(
            episode
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" "),
            palette.tag,
        )));
    }

    lines.push(Line::default());
    let body = episode
        .long_description
        .as_deref()
        .unwrap_or(&episode.description);
    for text_line in body.lines() {
        lines.push(Line::from(Span::styled(
            text_line.to_string(),
            palette.detail_body,
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.panel_border_focused)
                .title(" Episode "),
        );

    f.render_widget(paragraph, area);
}
