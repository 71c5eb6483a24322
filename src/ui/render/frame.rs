use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::ui::model::{TABLE_HEADER, TableLayout, UiRenderData};

use super::theme::{
    COLUMN_SPACING, COLUMN_WIDTHS, HEADER_BOTTOM_MARGIN, QUIT_HINT, TABLE_TITLE, border_style,
    header_style, status_color, style_color,
};

pub fn draw_frame<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, layout: TableLayout) {
    let size = f.size();
    let area = Rect::new(
        size.x,
        size.y,
        layout.width.min(size.width),
        layout.height.min(size.height),
    );
    if area.width == 0 || area.height == 0 {
        return;
    }

    let header = Row::new(TABLE_HEADER.iter().map(|label| Cell::from(*label)))
        .style(header_style(data.no_color))
        .bottom_margin(HEADER_BOTTOM_MARGIN);

    let rows = data.rows.iter().map(|row| {
        let [name, url, timeout, status, duration] = row.cells();
        Row::new(vec![
            Cell::from(name.to_owned()),
            Cell::from(url.to_owned()),
            Cell::from(timeout.to_owned()),
            Cell::from(status.to_owned())
                .style(style_color(data.no_color, status_color(row.class))),
            Cell::from(duration.to_owned()),
        ])
    });

    let title = format!(
        " {} | {} pending | {} ",
        TABLE_TITLE, data.pending, QUIT_HINT
    );
    let table = Table::new(rows)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(data.no_color))
                .title(title),
        )
        .widths(&COLUMN_WIDTHS)
        .column_spacing(COLUMN_SPACING);

    f.render_widget(table, area);
}
