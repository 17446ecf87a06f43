//! SelectableTable Component
//!
//! Controlled checkbox selection. The caller owns the selected ids; this
//! table only proposes the next set through `on_selection_change`.

use std::rc::Rc;
use std::sync::Arc;

use gpui::{
    App, ClickEvent, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px,
};
use tracing::debug;

use super::column::Column;
use super::static_table::{body_cell, body_row, empty_state, header_cell, header_row, table_frame};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::checkbox::Checkbox;
use crate::constants::{CHECKBOX_COLUMN_WIDTH, DEFAULT_ID_KEY};
use crate::domain::row::Row;
use crate::state::selection_state::SelectionSet;
use crate::theme::colors::DeskColors;

type SelectionHandler = Rc<dyn Fn(Vec<String>, &mut Window, &mut App)>;
type NoticeHandler = Rc<dyn Fn(SharedString, &mut Window, &mut App)>;

/// Footer and empty-state strings
#[derive(Debug, Clone)]
pub struct SelectionLabels {
    pub clear: SharedString,
    pub cleared_notice: SharedString,
    /// Badge text; `{count}` is replaced with the selection size
    pub rows_selected: SharedString,
    pub no_data: SharedString,
}

impl Default for SelectionLabels {
    fn default() -> Self {
        Self {
            clear: "Clear Selection".into(),
            cleared_notice: "Selection cleared".into(),
            rows_selected: "{count} row(s) selected".into(),
            no_data: "No data".into(),
        }
    }
}

/// What the Clear button proposes: an empty selection and the notice to show
pub fn clear_selection(labels: &SelectionLabels) -> (Vec<String>, SharedString) {
    (Vec::new(), labels.cleared_notice.clone())
}

/// Table with a checkbox column
#[derive(IntoElement)]
pub struct SelectableTable {
    id: SharedString,
    columns: Arc<[Column]>,
    rows: Vec<Row>,
    selected: SelectionSet,
    id_key: SharedString,
    show_clear_button: bool,
    labels: SelectionLabels,
    on_selection_change: Option<SelectionHandler>,
    on_notice: Option<NoticeHandler>,
}

impl SelectableTable {
    pub fn new(
        id: impl Into<SharedString>,
        columns: impl Into<Arc<[Column]>>,
        rows: Vec<Row>,
        selected: SelectionSet,
    ) -> Self {
        Self {
            id: id.into(),
            columns: columns.into(),
            rows,
            selected,
            id_key: DEFAULT_ID_KEY.into(),
            show_clear_button: true,
            labels: SelectionLabels::default(),
            on_selection_change: None,
            on_notice: None,
        }
    }

    /// Field holding the row id
    pub fn id_key(mut self, id_key: impl Into<SharedString>) -> Self {
        self.id_key = id_key.into();
        self
    }

    pub fn show_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    pub fn labels(mut self, labels: SelectionLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Receive the proposed selection after each interaction
    pub fn on_selection_change(
        mut self,
        handler: impl Fn(Vec<String>, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_selection_change = Some(Rc::new(handler));
        self
    }

    /// Receive user-facing notices
    pub fn on_notice(mut self, handler: impl Fn(SharedString, &mut Window, &mut App) + 'static) -> Self {
        self.on_notice = Some(Rc::new(handler));
        self
    }

    fn checkbox_cell() -> gpui::Div {
        div()
            .w(px(CHECKBOX_COLUMN_WIDTH))
            .flex_none()
            .flex()
            .items_center()
            .justify_center()
    }

    fn propose(&self, next: Vec<String>) -> impl Fn(bool, &mut Window, &mut App) + 'static {
        let handler = self.on_selection_change.clone();
        move |_checked, window, cx| {
            debug!(count = next.len(), "Selection proposed");
            if let Some(handler) = &handler {
                handler(next.clone(), window, cx);
            }
        }
    }

    fn render_footer(&self) -> gpui::Div {
        let badge = self
            .labels
            .rows_selected
            .replace("{count}", &self.selected.len().to_string());

        let on_selection_change = self.on_selection_change.clone();
        let on_notice = self.on_notice.clone();
        let labels = self.labels.clone();

        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .px_2()
                    .py_0p5()
                    .rounded_md()
                    .bg(DeskColors::badge_bg())
                    .text_xs()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(DeskColors::text_primary())
                    .child(badge),
            )
            .child(
                Button::outline(
                    SharedString::from(format!("{}-clear-selection", self.id)),
                    self.labels.clear.clone(),
                )
                .size(ButtonSize::Small)
                .on_click(move |_event: &ClickEvent, window, cx| {
                    let (next, notice) = clear_selection(&labels);
                    if let Some(handler) = &on_selection_change {
                        handler(next, window, cx);
                    }
                    if let Some(handler) = &on_notice {
                        handler(notice, window, cx);
                    }
                }),
            )
    }
}

impl RenderOnce for SelectableTable {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let all_checked = self.selected.all_selected(self.rows.len());
        let header = header_row()
            .child(
                Self::checkbox_cell().child(
                    Checkbox::new(SharedString::from(format!("{}-select-all", self.id)))
                        .checked(all_checked)
                        .on_change(self.propose(self.selected.toggled_all(&self.rows, &self.id_key))),
                ),
            )
            .children(self.columns.iter().map(header_cell));

        let mut frame = table_frame().child(header);
        if self.rows.is_empty() {
            frame = frame.child(empty_state(self.labels.no_data.clone()));
        }

        for (index, row) in self.rows.iter().enumerate() {
            let row_id = row.id(&self.id_key);
            let checkbox = Checkbox::new(SharedString::from(format!("{}-row-{}", self.id, index)))
                .checked(self.selected.contains(&row_id))
                .on_change(self.propose(self.selected.toggled(&row_id)));

            frame = frame.child(
                body_row(index)
                    .child(Self::checkbox_cell().child(checkbox))
                    .children(self.columns.iter().map(|column| body_cell(column, row))),
            );
        }

        let mut container = div().w_full().flex().flex_col().gap_3().child(frame);
        if self.show_clear_button && !self.selected.is_empty() {
            container = container.child(self.render_footer());
        }
        container
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_proposes_empty_selection_with_notice() {
        let (next, notice) = clear_selection(&SelectionLabels::default());
        assert!(next.is_empty());
        assert_eq!(notice.to_string(), "Selection cleared");
    }

    #[test]
    fn test_clear_notice_follows_labels() {
        let labels = SelectionLabels {
            cleared_notice: "Selección borrada".into(),
            ..SelectionLabels::default()
        };
        assert_eq!(clear_selection(&labels).1.to_string(), "Selección borrada");
    }
}
