//! SortableTable Component
//!
//! Read-only table that owns its sort column and direction. Sorting works on
//! a copy of the caller rows and compares values as strings.

use std::sync::Arc;

use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use super::column::Column;
use super::static_table::{body_rows, empty_state, header_cell, header_row, table_frame};
use crate::domain::row::Row;
use crate::state::sort_state::{SortDirection, SortState};
use crate::theme::colors::DeskColors;

/// Caption and empty-state strings
#[derive(Debug, Clone)]
pub struct SortLabels {
    pub sorted_by: SharedString,
    pub asc: SharedString,
    pub desc: SharedString,
    pub no_data: SharedString,
}

impl Default for SortLabels {
    fn default() -> Self {
        Self {
            sorted_by: "Sorted by".into(),
            asc: "ascending".into(),
            desc: "descending".into(),
            no_data: "No data".into(),
        }
    }
}

/// Table sorted by header clicks
pub struct SortableTable {
    id: SharedString,
    columns: Arc<[Column]>,
    rows: Vec<Row>,
    sort: SortState,
    labels: SortLabels,
}

impl SortableTable {
    /// Create a table with the caller's default sort
    pub fn new(
        id: impl Into<SharedString>,
        columns: impl Into<Arc<[Column]>>,
        rows: Vec<Row>,
        default_sort_column: Option<String>,
        default_sort_direction: SortDirection,
        _cx: &mut Context<Self>,
    ) -> Self {
        Self {
            id: id.into(),
            columns: columns.into(),
            rows,
            sort: SortState::new(default_sort_column, default_sort_direction),
            labels: SortLabels::default(),
        }
    }

    /// Replace the rows; the sort state is kept
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    /// Replace the columns (e.g. after a locale change)
    pub fn set_columns(&mut self, columns: impl Into<Arc<[Column]>>) {
        self.columns = columns.into();
    }

    pub fn set_labels(&mut self, labels: SortLabels) {
        self.labels = labels;
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    fn handle_sort(&mut self, key: &str, cx: &mut Context<Self>) {
        self.sort.toggle(key);
        cx.notify();
    }

    fn render_sort_header(&self, column: &Column, cx: &mut Context<Self>) -> impl IntoElement {
        let key = column.key.clone();
        let indicator = if self.sort.is_active(&column.key) {
            self.sort.direction.indicator()
        } else {
            "↕"
        };
        let text_color = if self.sort.is_active(&column.key) {
            DeskColors::accent()
        } else {
            DeskColors::text_secondary()
        };

        column
            .width
            .apply(div())
            .px_2()
            .child(
                div()
                    .id(SharedString::from(format!("{}-sort-{}", self.id, column.key)))
                    .flex()
                    .items_center()
                    .gap_1()
                    .px_1()
                    .py_1()
                    .rounded_md()
                    .cursor_pointer()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(text_color)
                    .hover(|s| s.bg(DeskColors::table_row_hover()))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.handle_sort(&key, cx);
                    }))
                    .child(column.label.clone())
                    .child(div().text_size(px(11.0)).child(indicator)),
            )
    }
}

/// "Sorted by: <label> (<direction>)", or `None` while unsorted.
///
/// A key with no matching column shows the key itself.
pub fn sort_caption(sort: &SortState, columns: &[Column], labels: &SortLabels) -> Option<String> {
    let key = sort.column.as_deref()?;
    let name = columns
        .iter()
        .find(|column| column.key.as_str() == key)
        .map(|column| column.label.to_string())
        .unwrap_or_else(|| key.to_string());
    let direction = match sort.direction {
        SortDirection::Asc => &labels.asc,
        SortDirection::Desc => &labels.desc,
    };
    Some(format!("{}: {} ({})", labels.sorted_by, name, direction))
}

impl Render for SortableTable {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let columns = self.columns.clone();
        let header = header_row().children(columns.iter().map(|column| {
            if column.sortable {
                self.render_sort_header(column, cx).into_any_element()
            } else {
                header_cell(column).into_any_element()
            }
        }));

        let mut frame = table_frame().child(header);
        if self.rows.is_empty() {
            frame = frame.child(empty_state(self.labels.no_data.clone()));
        } else {
            let sorted = self.sort.apply(&self.rows);
            frame = frame.children(body_rows(&columns, sorted).collect::<Vec<_>>());
        }

        let mut container = div().w_full().flex().flex_col().gap_3().child(frame);
        if let Some(caption) = sort_caption(&self.sort, &columns, &self.labels) {
            container = container.child(
                div()
                    .text_sm()
                    .text_color(DeskColors::text_muted())
                    .child(caption),
            );
        }
        container
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("address", "Address"),
            Column::new("price", "Price"),
        ]
    }

    #[test]
    fn test_caption_names_column_and_direction() {
        let labels = SortLabels::default();
        let mut sort = SortState::new(Some("address".to_string()), SortDirection::Asc);
        assert_eq!(
            sort_caption(&sort, &columns(), &labels).as_deref(),
            Some("Sorted by: Address (ascending)")
        );

        sort.toggle("address");
        assert_eq!(
            sort_caption(&sort, &columns(), &labels).as_deref(),
            Some("Sorted by: Address (descending)")
        );
    }

    #[test]
    fn test_caption_falls_back_to_key() {
        let sort = SortState::new(Some("closingDate".to_string()), SortDirection::Desc);
        assert_eq!(
            sort_caption(&sort, &columns(), &SortLabels::default()).as_deref(),
            Some("Sorted by: closingDate (descending)")
        );
    }

    #[test]
    fn test_no_caption_while_unsorted() {
        let sort = SortState::new(None, SortDirection::Asc);
        assert_eq!(sort_caption(&sort, &columns(), &SortLabels::default()), None);
    }

    #[test]
    fn test_caption_uses_localized_labels() {
        let labels = SortLabels {
            sorted_by: "Ordenado por".into(),
            asc: "ascendente".into(),
            desc: "descendente".into(),
            no_data: "Sin datos".into(),
        };
        let sort = SortState::new(Some("price".to_string()), SortDirection::Asc);
        assert_eq!(
            sort_caption(&sort, &columns(), &labels).as_deref(),
            Some("Ordenado por: Price (ascendente)")
        );
    }
}
