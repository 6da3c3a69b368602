use crate::app::{App, Focus};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the category panel: "All" plus every category with its show count.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let is_focused = app.focus == Focus::Categories;

    let mut items = Vec::with_capacity(app.catalog.categories().len() + 1);

    let all_style = if app.selected_category == 0 {
        palette.category_selected
    } else {
        palette.category_normal
    };
    items.push(ListItem::new(Line::from(vec![
        Span::styled("All", all_style),
        Span::styled(
            format!(" ({})", app.catalog.podcasts().len()),
            palette.category_count,
        ),
    ])));

    for (i, category) in app.catalog.categories().iter().enumerate() {
        let style = if app.selected_category == i + 1 {
            palette.category_selected
        } else {
            palette.category_normal
        };
        let count = app.catalog.podcasts_in_category(&category.id).len();
        items.push(ListItem::new(Line::from(vec![
            Span::styled(category.name.clone(), style),
            Span::styled(format!(" ({})", count), palette.category_count),
        ])));
    }

    let border_style = if is_focused {
        palette.panel_border_focused
    } else {
        palette.panel_border
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Categories"),
    );

    f.render_widget(list, area);
}
