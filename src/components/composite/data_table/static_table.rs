//! StaticTable Component
//!
//! Read-only table over caller rows. The row and header builders here are
//! shared by the sortable and selectable tables.

use std::sync::Arc;

use gpui::{
    AnyElement, App, Div, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window, div, px,
};

use super::column::Column;
use crate::constants::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::domain::row::Row;
use crate::theme::colors::DeskColors;

/// Bordered container holding header and body
pub(crate) fn table_frame() -> Div {
    div()
        .w_full()
        .flex()
        .flex_col()
        .bg(DeskColors::content_bg())
        .border_1()
        .border_color(DeskColors::border())
        .rounded_lg()
        .overflow_hidden()
}

/// Header row container
pub(crate) fn header_row() -> Div {
    div()
        .h(px(TABLE_HEADER_HEIGHT))
        .w_full()
        .flex()
        .items_center()
        .bg(DeskColors::table_header_bg())
        .border_b_1()
        .border_color(DeskColors::border())
}

/// Plain header label cell
pub(crate) fn header_cell(column: &Column) -> Div {
    column
        .width
        .apply(div())
        .px_3()
        .text_sm()
        .font_weight(FontWeight::MEDIUM)
        .text_color(DeskColors::text_secondary())
        .child(column.label.clone())
}

/// Body row container with zebra striping
pub(crate) fn body_row(index: usize) -> Div {
    let bg = if index % 2 == 0 {
        DeskColors::content_bg()
    } else {
        DeskColors::table_row_alt()
    };

    div()
        .min_h(px(TABLE_ROW_HEIGHT))
        .w_full()
        .flex()
        .items_center()
        .bg(bg)
        .hover(|s| s.bg(DeskColors::table_row_hover()))
        .border_b_1()
        .border_color(DeskColors::border())
}

/// Body cell showing the column's rendering of a row
pub(crate) fn body_cell(column: &Column, row: &Row) -> Div {
    column
        .width
        .apply(div())
        .px_3()
        .py_2()
        .text_sm()
        .text_color(DeskColors::text_primary())
        .overflow_hidden()
        .child(column.render_cell(row))
}

/// Centered message for a table without rows
pub(crate) fn empty_state(message: SharedString) -> Div {
    div()
        .h(px(TABLE_ROW_HEIGHT * 2.0))
        .w_full()
        .flex()
        .items_center()
        .justify_center()
        .text_sm()
        .text_color(DeskColors::text_muted())
        .child(message)
}

/// Render rows through their columns, in the given order
pub(crate) fn body_rows<'a>(
    columns: &'a [Column],
    rows: impl IntoIterator<Item = &'a Row> + 'a,
) -> impl Iterator<Item = AnyElement> + 'a {
    rows.into_iter().enumerate().map(move |(index, row)| {
        body_row(index)
            .children(columns.iter().map(|column| body_cell(column, row)))
            .into_any_element()
    })
}

/// Read-only table
#[derive(IntoElement)]
pub struct StaticTable {
    columns: Arc<[Column]>,
    rows: Vec<Row>,
    empty_message: SharedString,
}

impl StaticTable {
    pub fn new(columns: impl Into<Arc<[Column]>>, rows: Vec<Row>) -> Self {
        Self {
            columns: columns.into(),
            rows,
            empty_message: "No data".into(),
        }
    }

    /// Set the message shown when there are no rows
    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }
}

impl RenderOnce for StaticTable {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let header = header_row().children(self.columns.iter().map(header_cell));

        let frame = table_frame().child(header);
        if self.rows.is_empty() {
            return frame.child(empty_state(self.empty_message));
        }

        frame.children(body_rows(&self.columns, &self.rows).collect::<Vec<_>>())
    }
}
