//! EditableTable Component
//!
//! Controlled grid with typed cells. The focused cell is edited through an
//! `InputState`; every change is reported upward through `on_update_row` and
//! the table keeps no draft of its own.

use std::rc::Rc;
use std::sync::Arc;

use gpui::{
    App, AppContext, ClickEvent, Context, Entity, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Render, SharedString, Styled, Subscription, Window,
    div, px,
};
use gpui_component::input::{Input, InputEvent, InputState};
use serde_json::Value;
use tracing::{debug, warn};

use super::column::Column;
use super::static_table::{header_cell, header_row};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::cell_input::CellInput;
use crate::constants::{BLANK_ROW_OPACITY, DEFAULT_ID_KEY, DELETE_COLUMN_WIDTH};
use crate::domain::row::{Row, js_number};
use crate::state::edit_state::{ActiveCell, CellValue, ColumnKind, is_blank_row, releases_focus};
use crate::utils::format::{CurrencyFormat, coerce_number};

type BlankFn = Arc<dyn Fn(&Row) -> bool + Send + Sync>;
type CurrencyFormatFn = Arc<dyn Fn(f64) -> String + Send + Sync>;
type CurrencyParseFn = Arc<dyn Fn(&str) -> f64 + Send + Sync>;
type UpdateHandler = Rc<dyn Fn(&str, &str, CellValue, &mut App)>;
type DeleteHandler = Rc<dyn Fn(&str, &mut App)>;

/// What one editable cell shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    pub placeholder: String,
    pub disabled: bool,
}

/// Display and write-back rules for an editable grid
#[derive(Clone)]
pub struct EditGrid {
    columns: Arc<[Column]>,
    id_key: SharedString,
    show_delete_button: bool,
    new_entry_placeholder: SharedString,
    currency: CurrencyFormat,
    is_blank: Option<BlankFn>,
    format_currency: Option<CurrencyFormatFn>,
    parse_currency: Option<CurrencyParseFn>,
}

impl EditGrid {
    pub fn new(columns: impl Into<Arc<[Column]>>) -> Self {
        Self {
            columns: columns.into(),
            id_key: DEFAULT_ID_KEY.into(),
            show_delete_button: true,
            new_entry_placeholder: "Add a new entry...".into(),
            currency: CurrencyFormat::default(),
            is_blank: None,
            format_currency: None,
            parse_currency: None,
        }
    }

    pub fn id_key(mut self, id_key: impl Into<SharedString>) -> Self {
        self.id_key = id_key.into();
        self
    }

    pub fn show_delete_button(mut self, show: bool) -> Self {
        self.show_delete_button = show;
        self
    }

    /// Placeholder for the first cell of a blank row
    pub fn new_entry_placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.new_entry_placeholder = placeholder.into();
        self
    }

    /// Settings for the default currency formatter and parser
    pub fn currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }

    /// Replace the blank-row test
    pub fn is_blank_row(mut self, is_blank: impl Fn(&Row) -> bool + Send + Sync + 'static) -> Self {
        self.is_blank = Some(Arc::new(is_blank));
        self
    }

    /// Replace the currency formatter
    pub fn format_currency(mut self, format: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.format_currency = Some(Arc::new(format));
        self
    }

    /// Replace the currency parser
    pub fn parse_currency(mut self, parse: impl Fn(&str) -> f64 + Send + Sync + 'static) -> Self {
        self.parse_currency = Some(Arc::new(parse));
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_id(&self, row: &Row) -> String {
        row.id(&self.id_key)
    }

    pub fn is_blank(&self, row: &Row) -> bool {
        match &self.is_blank {
            Some(is_blank) => is_blank(row),
            None => is_blank_row(row),
        }
    }

    fn format_amount(&self, amount: f64) -> String {
        match &self.format_currency {
            Some(format) => format(amount),
            None => self.currency.format(amount),
        }
    }

    fn parse_amount(&self, input: &str) -> f64 {
        match &self.parse_currency {
            Some(parse) => parse(input),
            None => self.currency.parse(input),
        }
    }

    /// Text a cell shows when it is not being typed into
    pub fn display_text(&self, column: &Column, row: &Row, blank: bool) -> String {
        let value = column.value(row);
        match column.kind {
            ColumnKind::Number => match value {
                Value::Number(n) => js_number(n),
                _ => String::new(),
            },
            ColumnKind::Currency => {
                if blank {
                    String::new()
                } else if let Some(text) = column.formatted(row) {
                    text
                } else {
                    self.format_amount(value.as_f64().unwrap_or(0.0))
                }
            }
            ColumnKind::Text => column.formatted(row).unwrap_or_else(|| match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => js_number(n),
                _ => String::new(),
            }),
        }
    }

    /// Everything a cell needs to draw itself
    pub fn cell_view(&self, index: usize, row: &Row, blank: bool) -> Option<CellView> {
        let column = self.columns.get(index)?;
        let mut placeholder = column
            .placeholder
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_default();
        if blank && index == 0 && placeholder.is_empty() {
            placeholder = self.new_entry_placeholder.to_string();
        }

        Some(CellView {
            text: self.display_text(column, row, blank),
            placeholder,
            disabled: column.is_disabled(row, blank),
        })
    }

    /// Convert typed text into the value reported for the cell
    pub fn write_back(&self, column: &Column, input: &str) -> CellValue {
        match column.kind {
            ColumnKind::Text => CellValue::Text(input.to_string()),
            ColumnKind::Number => CellValue::Number(coerce_number(input)),
            ColumnKind::Currency => match column.parsed(input) {
                Some(value) => CellValue::Json(value),
                None => CellValue::Number(self.parse_amount(input)),
            },
        }
    }

    /// Whether the row still holds what `raw` commits to
    pub fn echoes(&self, column: &Column, raw: &str, row: &Row) -> bool {
        let committed = self.write_back(column, raw).into_json();
        let current = column.value(row);
        match (committed.as_f64(), current.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => &committed == current,
        }
    }

    /// Value to report for `raw`, or `None` when the row already holds it
    pub fn commit(&self, column: &Column, raw: &str, row: &Row) -> Option<CellValue> {
        if self.echoes(column, raw, row) {
            None
        } else {
            Some(self.write_back(column, raw))
        }
    }
}

/// The focused cell and the input editing it
struct CellEditor {
    cell: ActiveCell,
    input: Entity<InputState>,
    _subscription: Subscription,
}

/// Editable grid entity
pub struct EditableTable {
    id: SharedString,
    grid: EditGrid,
    rows: Vec<Row>,
    focus_handle: FocusHandle,
    editor: Option<CellEditor>,
    on_update_row: Option<UpdateHandler>,
    on_delete_row: Option<DeleteHandler>,
}

impl EditableTable {
    pub fn new(id: impl Into<SharedString>, grid: EditGrid, rows: Vec<Row>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            grid,
            rows,
            focus_handle: cx.focus_handle(),
            editor: None,
            on_update_row: None,
            on_delete_row: None,
        }
    }

    /// Replace the rows with the caller's latest copy
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        if let Some(editor) = &self.editor {
            let id_key = self.grid.id_key.clone();
            if !rows.iter().any(|row| row.id(&id_key) == editor.cell.row_id) {
                self.editor = None;
            }
        }
        self.rows = rows;
    }

    /// Replace the grid rules (e.g. after a locale change)
    pub fn set_grid(&mut self, grid: EditGrid) {
        self.grid = grid;
    }

    /// Receive `(row_id, field, value)` for every edit
    pub fn on_update_row(&mut self, handler: impl Fn(&str, &str, CellValue, &mut App) + 'static) {
        self.on_update_row = Some(Rc::new(handler));
    }

    /// Receive the id of a row whose delete affordance was used
    pub fn on_delete_row(&mut self, handler: impl Fn(&str, &mut App) + 'static) {
        self.on_delete_row = Some(Rc::new(handler));
    }

    fn focus_cell(&mut self, row_id: String, key: SharedString, window: &mut Window, cx: &mut Context<Self>) {
        let Some((row, column)) = self.lookup(&row_id, &key) else {
            return;
        };
        let blank = self.grid.is_blank(row);
        let shown = self.grid.display_text(column, row, blank);
        let placeholder = self
            .grid
            .columns
            .iter()
            .position(|c| c.key == column.key)
            .and_then(|index| self.grid.cell_view(index, row, blank))
            .map(|view| view.placeholder)
            .unwrap_or_default();

        let input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder(placeholder)
                .default_value(shown)
        });
        let subscription = cx.subscribe(&input, |this, _input, event: &InputEvent, cx| match event {
            InputEvent::Change => this.commit_input(cx),
            InputEvent::PressEnter { .. } | InputEvent::Blur => this.release(cx),
            _ => {}
        });

        // Dropping the previous editor also drops its subscription
        self.editor = Some(CellEditor {
            cell: ActiveCell::new(row_id, key.to_string()),
            input: input.clone(),
            _subscription: subscription,
        });
        window.focus(&input.focus_handle(cx));
        cx.notify();
    }

    fn release(&mut self, cx: &mut Context<Self>) {
        if let Some(editor) = self.editor.take() {
            debug!(row_id = %editor.cell.row_id, key = %editor.cell.key, "Cell released");
            cx.notify();
        }
    }

    fn lookup(&self, row_id: &str, key: &str) -> Option<(&Row, &Column)> {
        let row = self.rows.iter().find(|row| self.grid.row_id(row) == row_id)?;
        let column = self.grid.columns.iter().find(|column| column.key.as_str() == key)?;
        Some((row, column))
    }

    /// Report the focused input's text to the caller
    fn commit_input(&mut self, cx: &mut Context<Self>) {
        let Some(editor) = &self.editor else {
            return;
        };
        let cell = editor.cell.clone();
        let raw = editor.input.read(cx).value().to_string();
        let Some((row, column)) = self.lookup(&cell.row_id, &cell.key) else {
            self.release(cx);
            return;
        };
        let Some(value) = self.grid.commit(column, &raw, row) else {
            return;
        };

        if value.is_nan() {
            warn!(row_id = %cell.row_id, key = %cell.key, input = %raw, "Cell input is not a number");
        }
        debug!(row_id = %cell.row_id, key = %cell.key, value = %value.to_display(), "Cell edited");

        if let Some(handler) = self.on_update_row.clone() {
            handler(&cell.row_id, &cell.key, value, cx);
        }
        cx.notify();
    }

    /// Show the row's value in the focused input once the caller stops echoing it
    fn sync_input(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(editor) = &self.editor else {
            return;
        };
        let input = editor.input.clone();
        let raw = input.read(cx).value().to_string();
        let target = self
            .lookup(&editor.cell.row_id, &editor.cell.key)
            .map(|(row, column)| {
                (!self.grid.echoes(column, &raw, row))
                    .then(|| self.grid.display_text(column, row, self.grid.is_blank(row)))
            });
        let shown = match target {
            Some(Some(shown)) => shown,
            Some(None) => return,
            None => {
                self.editor = None;
                return;
            }
        };
        input.update(cx, |state, cx| state.set_value(shown, window, cx));
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        if self.editor.is_some() && releases_focus(&event.keystroke.key) {
            self.release(cx);
            window.focus(&self.focus_handle);
            cx.stop_propagation();
        }
    }

    fn render_row(&self, row: &Row, cx: &mut Context<Self>) -> impl IntoElement {
        let blank = self.grid.is_blank(row);
        let row_id = self.grid.row_id(row);

        let mut line = div().w_full().flex().items_center().gap_4();
        if blank {
            line = line.opacity(BLANK_ROW_OPACITY);
        }

        for (index, column) in self.grid.columns.iter().enumerate() {
            let Some(view) = self.grid.cell_view(index, row, blank) else {
                continue;
            };
            let slot = column.width.apply(div());

            let editing = self
                .editor
                .as_ref()
                .filter(|editor| !view.disabled && editor.cell.is(&row_id, &column.key));
            if let Some(editor) = editing {
                line = line.child(slot.child(Input::new(&editor.input).w_full()));
                continue;
            }

            let mut input = CellInput::new(SharedString::from(format!(
                "{}-cell-{}-{}",
                self.id, row_id, column.key
            )))
            .value(view.text)
            .placeholder(view.placeholder)
            .disabled(view.disabled);

            if !view.disabled {
                let row_id = row_id.clone();
                let key = column.key.clone();
                input = input.on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                    this.focus_cell(row_id.clone(), key.clone(), window, cx);
                }));
            }

            line = line.child(slot.child(input));
        }

        if self.grid.show_delete_button {
            let mut slot = div()
                .w(px(DELETE_COLUMN_WIDTH))
                .flex_none()
                .flex()
                .justify_center();
            if !blank {
                let row_id = row_id.clone();
                slot = slot.child(
                    Button::danger(SharedString::from(format!("{}-delete-{}", self.id, row_id)), "✕")
                        .size(ButtonSize::Small)
                        .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                            this.delete_row(&row_id, cx);
                        })),
                );
            }
            line = line.child(slot);
        }

        line
    }

    fn delete_row(&mut self, row_id: &str, cx: &mut Context<Self>) {
        if self.editor.as_ref().is_some_and(|editor| editor.cell.row_id == row_id) {
            self.editor = None;
        }
        debug!(row_id, "Row delete requested");
        if let Some(handler) = self.on_delete_row.clone() {
            handler(row_id, cx);
        }
        cx.notify();
    }
}

impl Focusable for EditableTable {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for EditableTable {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_input(window, cx);

        let mut header = header_row()
            .gap_4()
            .children(self.grid.columns.iter().map(header_cell));
        if self.grid.show_delete_button {
            header = header.child(div().w(px(DELETE_COLUMN_WIDTH)).flex_none());
        }

        let rows: Vec<_> = self
            .rows
            .iter()
            .map(|row| self.render_row(row, cx).into_any_element())
            .collect();

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .capture_key_down(cx.listener(Self::handle_key_down))
            .w_full()
            .flex()
            .flex_col()
            .gap_3()
            .child(header)
            .child(div().w_full().flex().flex_col().gap_3().children(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn grid() -> EditGrid {
        EditGrid::new(vec![
            Column::new("name", "Name").disabled(|_| false),
            Column::new("percentage", "Percent").kind(ColumnKind::Number),
            Column::new("amount", "Amount").kind(ColumnKind::Currency),
        ])
    }

    fn cell(grid: &EditGrid, row: &Row, index: usize) -> CellView {
        let blank = grid.is_blank(row);
        grid.cell_view(index, row, blank).expect("column exists")
    }

    #[test]
    fn test_display_by_kind() {
        let grid = grid();
        let row = Row::new()
            .with("name", "Jordan")
            .with("percentage", 60)
            .with("amount", 1234.5);

        assert_eq!(cell(&grid, &row, 0).text, "Jordan");
        assert_eq!(cell(&grid, &row, 1).text, "60");
        assert_eq!(cell(&grid, &row, 2).text, "$1,234.50");
    }

    #[test]
    fn test_non_numeric_values_display() {
        let grid = grid();
        let row = Row::new()
            .with("name", json!({"first": "J"}))
            .with("percentage", "sixty")
            .with("amount", "lots")
            .with("flag", true);

        assert_eq!(cell(&grid, &row, 0).text, "");
        assert_eq!(cell(&grid, &row, 1).text, "");
        assert_eq!(cell(&grid, &row, 2).text, "$0.00");
    }

    #[test]
    fn test_blank_row_placeholder_and_disablement() {
        let grid = grid();
        let row = Row::new()
            .with("name", "")
            .with("percentage", Value::Null)
            .with("amount", Value::Null);
        assert!(grid.is_blank(&row));

        let first = cell(&grid, &row, 0);
        assert_eq!(first.placeholder, "Add a new entry...");
        assert!(!first.disabled);

        let amount = cell(&grid, &row, 2);
        assert_eq!(amount.text, "");
        assert_eq!(amount.placeholder, "");
        assert!(amount.disabled);
    }

    #[test]
    fn test_column_placeholder_wins() {
        let grid = EditGrid::new(vec![Column::new("name", "Name").placeholder("Recipient")]);
        let view = cell(&grid, &Row::new(), 0);
        assert_eq!(view.placeholder, "Recipient");
    }

    #[test]
    fn test_zero_row_is_not_blank() {
        let grid = grid();
        let row = Row::new().with("name", "").with("percentage", 0);
        assert!(!grid.is_blank(&row));
        assert!(!cell(&grid, &row, 1).disabled);
    }

    #[test]
    fn test_write_back_by_kind() {
        let grid = grid();
        let columns = grid.columns();

        assert_eq!(grid.write_back(&columns[0], "Ann"), CellValue::Text("Ann".into()));
        assert_eq!(grid.write_back(&columns[1], ""), CellValue::Number(0.0));
        assert!(grid.write_back(&columns[1], "1x").is_nan());
        assert_eq!(grid.write_back(&columns[2], "$1,200.50"), CellValue::Number(1200.5));
        assert_eq!(grid.write_back(&columns[2], "abc"), CellValue::Number(0.0));
    }

    #[test]
    fn test_currency_overrides() {
        let grid = EditGrid::new(vec![Column::new("amount", "Amount").kind(ColumnKind::Currency)])
            .format_currency(|n| format!("{n:.1} EUR"))
            .parse_currency(|s| s.trim_end_matches(" EUR").parse().unwrap_or(-1.0));
        let row = Row::new().with("amount", 3.5);

        assert_eq!(cell(&grid, &row, 0).text, "3.5 EUR");
        assert_eq!(grid.write_back(&grid.columns()[0], "7 EUR"), CellValue::Number(7.0));
    }

    #[test]
    fn test_column_parse_and_format_hooks() {
        let column = Column::new("amount", "Amount")
            .kind(ColumnKind::Currency)
            .format(|value, _| format!("~{}", value.as_f64().unwrap_or_default()))
            .parse(|input| json!(input.len()));
        let grid = EditGrid::new(vec![column]);
        let row = Row::new().with("amount", 5);

        assert_eq!(cell(&grid, &row, 0).text, "~5");
        assert_eq!(grid.write_back(&grid.columns()[0], "abc"), CellValue::Json(json!(3)));
    }

    #[test]
    fn test_custom_blank_predicate() {
        let grid = grid().is_blank_row(|row| row.value("name").as_str() == Some(""));
        let row = Row::new().with("id", "x").with("name", "");
        assert!(grid.is_blank(&row));
    }

    #[test]
    fn test_echo_tracks_partial_numbers() {
        let grid = grid();
        let columns = grid.columns();
        let row = Row::new().with("percentage", 1);

        assert!(grid.echoes(&columns[1], "1.", &row));
        assert!(grid.echoes(&columns[1], "1", &row));
        assert!(!grid.echoes(&columns[1], "12", &row));

        let nan_row = Row::new().with("percentage", Value::Null);
        assert!(grid.echoes(&columns[1], "1x", &nan_row));
    }

    #[test]
    fn test_commit_skips_values_the_row_already_holds() {
        let grid = grid();
        let columns = grid.columns();
        let row = Row::new()
            .with("name", "Jordan")
            .with("percentage", 60)
            .with("amount", 12500);

        assert_eq!(grid.commit(&columns[0], "Jordan", &row), None);
        assert_eq!(grid.commit(&columns[1], "60.", &row), None);
        assert_eq!(grid.commit(&columns[2], "$12,500.00", &row), None);

        // An edit in the middle of the formatted text
        assert_eq!(
            grid.commit(&columns[2], "$13,500.00", &row),
            Some(CellValue::Number(13500.0))
        );
        // Pasted text arrives whole
        assert_eq!(
            grid.commit(&columns[0], "Jordan Lee", &row),
            Some(CellValue::Text("Jordan Lee".into()))
        );
        assert!(grid.commit(&columns[1], "6o", &row).is_some_and(|v| v.is_nan()));
    }
}
