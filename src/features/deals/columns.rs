//! Deals Columns
//!
//! Column sets and table labels for each dashboard section. Rebuilt whenever
//! the locale or the configured currency changes.

use gpui::{FontWeight, IntoElement, ParentElement, Styled, div};
use serde_json::Value;

use crate::components::composite::data_table::{Column, EditGrid, SelectionLabels, SortLabels};
use crate::domain::deal::TRANSACTION_STATUSES;
use crate::domain::row::{Row, cell_text};
use crate::guards::{is_date_string, is_email, is_enum_value, is_non_empty_string, is_number};
use crate::i18n::{Locale, t};
use crate::state::edit_state::{ColumnKind, is_blank_row_ignoring};
use crate::theme::colors::DeskColors;
use crate::utils::format::CurrencyFormat;

const EMPTY_CELL: &str = "—";

pub fn sort_labels(locale: Locale) -> SortLabels {
    SortLabels {
        sorted_by: t(locale, "table-sorted-by"),
        asc: t(locale, "table-asc"),
        desc: t(locale, "table-desc"),
        no_data: t(locale, "table-no-data"),
    }
}

pub fn selection_labels(locale: Locale) -> SelectionLabels {
    SelectionLabels {
        clear: t(locale, "table-clear-selection"),
        cleared_notice: t(locale, "table-selection-cleared"),
        rows_selected: t(locale, "table-rows-selected"),
        no_data: t(locale, "table-no-data"),
    }
}

/// Price text; non-numeric prices show a dash
pub fn price_text(value: &Value, currency: &CurrencyFormat) -> String {
    if is_number(value) {
        currency.format(value.as_f64().unwrap_or_default())
    } else {
        EMPTY_CELL.to_string()
    }
}

/// Date text; anything that does not parse as a date shows a dash
pub fn date_text(value: &Value) -> String {
    if is_date_string(value) {
        cell_text(value)
    } else {
        EMPTY_CELL.to_string()
    }
}

/// "First Last" from a party row
pub fn full_name(row: &Row) -> String {
    let first = cell_text(row.value("firstName"));
    let last = cell_text(row.value("lastName"));
    match (first.is_empty(), last.is_empty()) {
        (false, false) => format!("{first} {last}"),
        (false, true) => first,
        _ => last,
    }
}

fn status_color(status: &str) -> gpui::Rgba {
    match status {
        "Closed" => DeskColors::success(),
        "Under Contract" => DeskColors::accent(),
        _ => DeskColors::text_secondary(),
    }
}

/// Transactions: sortable, read-only
pub fn deal_columns(locale: Locale, currency: CurrencyFormat) -> Vec<Column> {
    vec![
        Column::new("address", t(locale, "col-address"))
            .flex_width(Some(220.0), None)
            .render(|value, row| {
                let place = format!(
                    "{}, {}",
                    cell_text(row.value("city")),
                    cell_text(row.value("state"))
                );
                div()
                    .flex()
                    .flex_col()
                    .child(div().font_weight(FontWeight::MEDIUM).child(cell_text(value)))
                    .child(div().text_xs().text_color(DeskColors::text_muted()).child(place))
                    .into_any_element()
            }),
        Column::new("type", t(locale, "col-type")).fixed_width(130.0),
        Column::new("status", t(locale, "col-status"))
            .fixed_width(140.0)
            .render(|value, _row| {
                if !is_enum_value(value, TRANSACTION_STATUSES) {
                    return div()
                        .text_color(DeskColors::text_muted())
                        .child(EMPTY_CELL)
                        .into_any_element();
                }
                let status = cell_text(value);
                div()
                    .px_2()
                    .py_0p5()
                    .rounded_md()
                    .bg(DeskColors::badge_bg())
                    .text_xs()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(status_color(&status))
                    .child(status)
                    .into_any_element()
            }),
        Column::new("price", t(locale, "col-price"))
            .fixed_width(140.0)
            .format(move |value, _row| price_text(value, &currency)),
        Column::new("closingDate", t(locale, "col-closing-date"))
            .fixed_width(130.0)
            .format(|value, _row| date_text(value)),
        Column::new("clientName", t(locale, "col-agent")).unsortable(),
    ]
}

/// Documents: selectable
pub fn document_columns(locale: Locale) -> Vec<Column> {
    vec![
        Column::new("name", t(locale, "col-document")).flex_width(Some(200.0), None),
        Column::new("type", t(locale, "col-category")).fixed_width(140.0),
        Column::new("modifiedDate", t(locale, "col-uploaded"))
            .fixed_width(130.0)
            .format(|value, _row| date_text(value)),
        Column::new("size", t(locale, "col-size"))
            .fixed_width(110.0)
            .format(|value, _row| {
                if is_non_empty_string(value) || is_number(value) {
                    cell_text(value)
                } else {
                    EMPTY_CELL.to_string()
                }
            }),
    ]
}

/// Parties: static
pub fn party_columns(locale: Locale) -> Vec<Column> {
    vec![
        Column::new("firstName", t(locale, "col-name"))
            .flex_width(Some(160.0), None)
            .format(|_value, row| full_name(row)),
        Column::new("role", t(locale, "col-role")).fixed_width(120.0),
        Column::new("email", t(locale, "col-email"))
            .flex_width(Some(180.0), None)
            .render(|value, _row| {
                let color = if is_email(value) {
                    DeskColors::accent()
                } else {
                    DeskColors::danger()
                };
                div().text_color(color).child(cell_text(value)).into_any_element()
            }),
        Column::new("phone", t(locale, "col-phone")).fixed_width(140.0),
    ]
}

/// Commission split: editable, with a trailing blank row
pub fn commission_columns(locale: Locale) -> Vec<Column> {
    vec![
        Column::new("name", t(locale, "col-recipient"))
            .flex_width(Some(160.0), None)
            .disabled(|_| false),
        Column::new("role", t(locale, "col-role")).fixed_width(140.0),
        Column::new("percentage", t(locale, "col-percent"))
            .fixed_width(100.0)
            .kind(ColumnKind::Number)
            .placeholder("0"),
        Column::new("amount", t(locale, "col-amount"))
            .fixed_width(140.0)
            .kind(ColumnKind::Currency),
    ]
}

/// Editing rules for the commission split
pub fn commission_grid(
    locale: Locale,
    currency: CurrencyFormat,
    id_key: &str,
    show_delete_button: bool,
) -> EditGrid {
    let blank_key = id_key.to_string();
    EditGrid::new(commission_columns(locale))
        .id_key(id_key.to_string())
        .show_delete_button(show_delete_button)
        .new_entry_placeholder(t(locale, "table-new-entry"))
        .currency(currency)
        .is_blank_row(move |row| is_blank_row_ignoring(row, &[blank_key.as_str()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_and_date_text() {
        let currency = CurrencyFormat::default();
        assert_eq!(price_text(&json!(485000), &currency), "$485,000.00");
        assert_eq!(price_text(&json!("n/a"), &currency), "—");
        assert_eq!(date_text(&json!("2026-11-14")), "2026-11-14");
        assert_eq!(date_text(&Value::Null), "—");
        assert_eq!(date_text(&json!("soon")), "—");
    }

    #[test]
    fn test_full_name() {
        let row = Row::new().with("firstName", "Ana").with("lastName", "Ruiz");
        assert_eq!(full_name(&row), "Ana Ruiz");
        assert_eq!(full_name(&Row::new().with("lastName", "Ruiz")), "Ruiz");
        assert_eq!(full_name(&Row::new()), "");
    }

    #[test]
    fn test_party_name_column_uses_full_name() {
        let columns = party_columns(Locale::EnUS);
        let row = Row::new().with("firstName", "Ana").with("lastName", "Ruiz");
        assert_eq!(columns[0].cell_text(&row), "Ana Ruiz");
    }

    #[test]
    fn test_commission_grid_ignores_id_for_blankness() {
        let grid = commission_grid(Locale::EnUS, CurrencyFormat::default(), "id", true);
        let blank = Row::new()
            .with("id", "new")
            .with("name", "")
            .with("amount", Value::Null);
        assert!(grid.is_blank(&blank));

        let view = grid.cell_view(0, &blank, true).expect("name column");
        assert_eq!(view.placeholder, "Add a new entry...");
        assert!(!view.disabled);
        assert!(grid.cell_view(3, &blank, true).expect("amount column").disabled);
    }

    #[test]
    fn test_labels_follow_locale() {
        assert_eq!(sort_labels(Locale::EsES).asc.to_string(), "ascendente");
        assert_eq!(selection_labels(Locale::EnUS).clear.to_string(), "Clear Selection");
    }
}
