//! Column Definition
//!
//! Describes how one row field is labeled, laid out, shown and edited.

use std::sync::Arc;

use gpui::{AnyElement, Div, IntoElement, ParentElement, SharedString, Styled, div, px, relative};
use serde_json::Value;

use crate::constants::FLEX_COLUMN_MIN_WIDTH;
use crate::domain::row::{Row, cell_text};
use crate::state::edit_state::ColumnKind;

/// Custom cell renderer, given the field value and its row
pub type RenderFn = Arc<dyn Fn(&Value, &Row) -> AnyElement + Send + Sync>;
/// Display formatter, given the field value and its row
pub type FormatFn = Arc<dyn Fn(&Value, &Row) -> String + Send + Sync>;
/// Write-back parser for typed text
pub type ParseFn = Arc<dyn Fn(&str) -> Value + Send + Sync>;
/// Per-row disablement
pub type DisabledFn = Arc<dyn Fn(&Row) -> bool + Send + Sync>;

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
    /// Percentage of the table width
    Percent(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

impl ColumnWidth {
    /// Size a cell container
    pub fn apply(&self, cell: Div) -> Div {
        match *self {
            ColumnWidth::Fixed(w) => cell.w(px(w)).flex_none(),
            ColumnWidth::Flex { min, max } => {
                let cell = cell.flex_1().min_w(px(min.unwrap_or(FLEX_COLUMN_MIN_WIDTH)));
                match max {
                    Some(max) => cell.max_w(px(max)),
                    None => cell,
                }
            }
            ColumnWidth::Percent(p) => cell.w(relative(p / 100.0)).flex_none(),
        }
    }
}

/// Column definition shared by every table
#[derive(Clone)]
pub struct Column {
    /// Row field this column reads
    pub key: SharedString,
    /// Header label
    pub label: SharedString,
    pub width: ColumnWidth,
    /// Whether sortable tables react to header clicks; true unless opted out
    pub sortable: bool,
    /// Editing behavior in editable tables
    pub kind: ColumnKind,
    /// Placeholder for empty editable cells
    pub placeholder: Option<SharedString>,
    render: Option<RenderFn>,
    format: Option<FormatFn>,
    parse: Option<ParseFn>,
    disabled: Option<DisabledFn>,
}

impl Column {
    /// Create a new text column
    pub fn new(key: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: true,
            kind: ColumnKind::Text,
            placeholder: None,
            render: None,
            format: None,
            parse: None,
            disabled: None,
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Set percentage width
    pub fn percent_width(mut self, percent: f32) -> Self {
        self.width = ColumnWidth::Percent(percent);
        self
    }

    /// Opt out of header-click sorting
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Custom cell renderer; wins over `format` in read-only tables
    pub fn render(mut self, render: impl Fn(&Value, &Row) -> AnyElement + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Display formatter
    pub fn format(mut self, format: impl Fn(&Value, &Row) -> String + Send + Sync + 'static) -> Self {
        self.format = Some(Arc::new(format));
        self
    }

    /// Write-back parser for editable cells
    pub fn parse(mut self, parse: impl Fn(&str) -> Value + Send + Sync + 'static) -> Self {
        self.parse = Some(Arc::new(parse));
        self
    }

    /// Per-row disablement; replaces the "blank rows are disabled" default
    pub fn disabled(mut self, disabled: impl Fn(&Row) -> bool + Send + Sync + 'static) -> Self {
        self.disabled = Some(Arc::new(disabled));
        self
    }

    /// The field value, `null` when missing
    pub fn value<'a>(&self, row: &'a Row) -> &'a Value {
        row.value(&self.key)
    }

    /// Formatted display text, if a formatter is set
    pub fn formatted(&self, row: &Row) -> Option<String> {
        self.format.as_ref().map(|format| format(self.value(row), row))
    }

    /// Parse typed text, if a parser is set
    pub fn parsed(&self, input: &str) -> Option<Value> {
        self.parse.as_ref().map(|parse| parse(input))
    }

    /// Text shown for a read-only cell: the formatter's output, else the raw
    /// field text
    pub fn cell_text(&self, row: &Row) -> String {
        self.formatted(row)
            .unwrap_or_else(|| cell_text(self.value(row)))
    }

    /// Whether the cell is disabled, falling back to the row's blankness
    pub fn is_disabled(&self, row: &Row, blank: bool) -> bool {
        match &self.disabled {
            Some(disabled) => disabled(row),
            None => blank,
        }
    }

    /// Render a read-only cell
    pub fn render_cell(&self, row: &Row) -> AnyElement {
        match &self.render {
            Some(render) => render(self.value(row), row),
            None => div().child(self.cell_text(row)).into_any_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let col = Column::new("name", "Name");
        assert!(col.sortable);
        assert_eq!(col.kind, ColumnKind::Text);
        assert!(!Column::new("x", "X").unsortable().sortable);
    }

    #[test]
    fn test_width_builders() {
        assert_eq!(Column::new("a", "A").width, ColumnWidth::Flex { min: None, max: None });
        assert_eq!(Column::new("a", "A").fixed_width(80.0).width, ColumnWidth::Fixed(80.0));
        assert_eq!(Column::new("a", "A").percent_width(25.0).width, ColumnWidth::Percent(25.0));
    }

    #[test]
    fn test_cell_text_prefers_format() {
        let row = Row::new().with("price", 1500);
        let raw = Column::new("price", "Price");
        assert_eq!(raw.cell_text(&row), "1500");

        let formatted = Column::new("price", "Price").format(|value, _| {
            format!("{} USD", value.as_f64().unwrap_or_default())
        });
        assert_eq!(formatted.cell_text(&row), "1500 USD");
    }

    #[test]
    fn test_missing_key_renders_empty() {
        let row = Row::new().with("id", "1");
        let col = Column::new("nickname", "Nickname");
        assert_eq!(col.value(&row), &Value::Null);
        assert_eq!(col.cell_text(&row), "");
    }

    #[test]
    fn test_disabled_defaults_to_blankness() {
        let row = Row::new();
        let col = Column::new("name", "Name");
        assert!(col.is_disabled(&row, true));
        assert!(!col.is_disabled(&row, false));

        let always_enabled = col.disabled(|_| false);
        assert!(!always_enabled.is_disabled(&row, true));
    }

    #[test]
    fn test_parse_hook() {
        let col = Column::new("tags", "Tags")
            .parse(|input| json!(input.split(',').map(str::trim).collect::<Vec<_>>()));
        assert_eq!(col.parsed("a, b"), Some(json!(["a", "b"])));
        assert_eq!(Column::new("x", "X").parsed("1"), None);
    }
}
