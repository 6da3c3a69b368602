use crate::app::{App, Focus};
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the episode list for the active query.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let is_focused = app.focus == Focus::Episodes;
    let visible = app.visible_episodes();

    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = if visible.is_empty() {
        vec![ListItem::new("No episodes match")]
    } else {
        visible
            .iter()
            .enumerate()
            .map(|(i, episode)| {
                let selected = i == app.selected_episode;
                let title_style = if selected {
                    palette.list_selected
                } else {
                    palette.list_title
                };

                let mut spans = Vec::with_capacity(2);
                if episode.featured {
                    spans.push(Span::styled("★ ", palette.featured_badge));
                }
                spans.push(Span::styled(
                    truncate_to_width(&episode.title, inner_width).into_owned(),
                    title_style,
                ));

                let meta = format!(
                    "  {} · {}",
                    episode.publish_date.format("%Y-%m-%d"),
                    episode.duration
                );
                let meta_line = Line::from(Span::styled(meta, palette.list_date));

                ListItem::new(vec![Line::from(spans), meta_line])
            })
            .collect()
    };

    let border_style = if is_focused {
        palette.panel_border_focused
    } else {
        palette.panel_border
    };

    let title = if app.featured_only {
        format!("Featured episodes ({})", visible.len())
    } else if let Some(tag) = &app.episode_query.tag {
        format!("Episodes ({}) · #{}", visible.len(), tag)
    } else {
        format!("Episodes ({}) · {}", visible.len(), app.episode_query.sort.name())
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(list, area);
}
