use crate::app::{App, Focus};
use crate::util::{format_listen_count, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the podcast list for the active query.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let is_focused = app.focus == Focus::Podcasts;
    let visible = app.visible_podcasts();

    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = if visible.is_empty() {
        vec![ListItem::new("No podcasts match")]
    } else {
        visible
            .iter()
            .enumerate()
            .map(|(i, podcast)| {
                let selected = i == app.selected_podcast;
                let title_style = if selected {
                    palette.list_selected
                } else {
                    palette.list_title
                };

                let mut spans = Vec::with_capacity(4);
                if podcast.featured {
                    spans.push(Span::styled("★ ", palette.featured_badge));
                }
                spans.push(Span::styled(
                    truncate_to_width(&podcast.title, inner_width.saturating_sub(16)).into_owned(),
                    title_style,
                ));
                if let Some(rating) = podcast.rating {
                    spans.push(Span::styled(format!("  {:.1}", rating), palette.rating));
                }
                if let Some(count) = podcast.listen_count {
                    spans.push(Span::styled(
                        format!("  {}", format_listen_count(count)),
                        palette.list_date,
                    ));
                }

                let title_line = Line::from(spans);
                let creator_line = Line::from(Span::styled(
                    format!("  {}", podcast.creator),
                    palette.list_creator,
                ));

                ListItem::new(vec![title_line, creator_line])
            })
            .collect()
    };

    let border_style = if is_focused {
        palette.panel_border_focused
    } else {
        palette.panel_border
    };

    let title = if app.show_popular {
        format!("Popular ({})", visible.len())
    } else if app.featured_only {
        format!("Featured ({})", visible.len())
    } else {
        format!("Podcasts ({}) · {}", visible.len(), app.podcast_query.sort.name())
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(list, area);
}
