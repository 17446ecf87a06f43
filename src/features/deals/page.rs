//! Deals Page
//!
//! One accordion section per table. Row data lives in `DealsState`; the page
//! pushes fresh copies into the table entities whenever the store changes.

use gpui::{
    AppContext, Context, Entity, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::composite::accordion::{AccordionSection, FormAccordion};
use crate::components::composite::data_table::{
    EditableTable, SelectableTable, SortableTable, StaticTable,
};
use crate::features::deals::columns;
use crate::features::deals::controller::DealsController;
use crate::i18n::t;
use crate::state::accordion_state::{AccordionMode, AccordionState};
use crate::state::deals_state::TableId;
use crate::theme::colors::DeskColors;

const SECTIONS: [&str; 4] = ["deals", "documents", "parties", "commission"];

/// Deals dashboard page
pub struct DealsPage {
    entities: AppEntities,
    controller: DealsController,
    accordion: AccordionState,
    deals_table: Entity<SortableTable>,
    commission_table: Entity<EditableTable>,
}

impl DealsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = DealsController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;
        let (tables, currency) = {
            let config = entities.config.read(cx);
            (config.tables().clone(), config.currency())
        };
        let (deal_rows, commission_rows) = {
            let deals = entities.deals.read(cx);
            (
                deals.rows(TableId::Deals).to_vec(),
                deals.rows(TableId::Commission).to_vec(),
            )
        };

        let deals_table = cx.new(|cx| {
            let mut table = SortableTable::new(
                "deals-table",
                columns::deal_columns(locale, currency.clone()),
                deal_rows,
                Some("address".to_string()),
                tables.default_sort_direction,
                cx,
            );
            table.set_labels(columns::sort_labels(locale));
            table
        });

        let commission_table = cx.new(|cx| {
            let grid = columns::commission_grid(
                locale,
                currency,
                &tables.id_key,
                tables.show_delete_button,
            );
            let mut table = EditableTable::new("commission-table", grid, commission_rows, cx);

            let on_update = controller.clone();
            table.on_update_row(move |row_id, key, value, cx| {
                on_update.update_row(TableId::Commission, row_id, key, value, cx);
            });
            let on_delete = controller.clone();
            table.on_delete_row(move |row_id, cx| {
                on_delete.delete_row(TableId::Commission, row_id, cx);
            });
            table
        });

        // Push store changes into the table entities
        cx.observe(&entities.deals, |this, deals, cx| {
            let (deal_rows, commission_rows) = {
                let deals = deals.read(cx);
                (
                    deals.rows(TableId::Deals).to_vec(),
                    deals.rows(TableId::Commission).to_vec(),
                )
            };
            this.deals_table.update(cx, |table, cx| {
                table.set_rows(deal_rows);
                cx.notify();
            });
            this.commission_table.update(cx, |table, cx| {
                table.set_rows(commission_rows);
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        cx.observe(&entities.i18n, |this, _, cx| this.rebuild_columns(cx))
            .detach();

        Self {
            entities,
            controller,
            accordion: AccordionState::new(AccordionMode::Multiple, SECTIONS),
            deals_table,
            commission_table,
        }
    }

    /// Recreate columns and labels for the current locale
    fn rebuild_columns(&mut self, cx: &mut Context<Self>) {
        let locale = self.entities.i18n.read(cx).locale;
        let (tables, currency) = {
            let config = self.entities.config.read(cx);
            (config.tables().clone(), config.currency())
        };
        debug!(locale = locale.display_name(), "Rebuilding table columns");

        let deal_currency = currency.clone();
        self.deals_table.update(cx, |table, cx| {
            table.set_columns(columns::deal_columns(locale, deal_currency));
            table.set_labels(columns::sort_labels(locale));
            cx.notify();
        });
        self.commission_table.update(cx, |table, cx| {
            table.set_grid(columns::commission_grid(
                locale,
                currency,
                &tables.id_key,
                tables.show_delete_button,
            ));
            cx.notify();
        });
        cx.notify();
    }
}

impl Render for DealsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (tables, currency) = {
            let config = self.entities.config.read(cx);
            (config.tables().clone(), config.currency())
        };
        let (document_rows, selection, party_rows, total, percent) = {
            let deals = self.entities.deals.read(cx);
            (
                deals.rows(TableId::Documents).to_vec(),
                deals.selection(TableId::Documents),
                deals.rows(TableId::Parties).to_vec(),
                deals.commission_total(),
                deals.commission_percent_text(),
            )
        };

        let select = self.controller.clone();
        let notify = self.controller.clone();
        let documents = SelectableTable::new(
            "documents-table",
            columns::document_columns(locale),
            document_rows,
            selection,
        )
        .id_key(tables.id_key.clone())
        .show_clear_button(tables.show_clear_button)
        .labels(columns::selection_labels(locale))
        .on_selection_change(move |ids, _window, cx| {
            select.change_selection(TableId::Documents, ids, cx);
        })
        .on_notice(move |message, _window, cx| {
            notify.notice(message, cx);
        });

        let parties = StaticTable::new(columns::party_columns(locale), party_rows)
            .empty_message(t(locale, "table-no-data"));

        let commission = div()
            .w_full()
            .flex()
            .flex_col()
            .gap_3()
            .child(self.commission_table.clone())
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .text_sm()
                    .text_color(DeskColors::text_secondary())
                    .child(format!("{}:", t(locale, "table-total")))
                    .child(
                        div()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(DeskColors::text_primary())
                            .child(currency.format(total)),
                    )
                    .child(format!("({percent})")),
            );

        let page = cx.entity().downgrade();
        let accordion = FormAccordion::new("deals-accordion", &self.accordion)
            .section(AccordionSection::new(
                SECTIONS[0],
                t(locale, "section-deals"),
                self.deals_table.clone(),
            ))
            .section(AccordionSection::new(
                SECTIONS[1],
                t(locale, "section-documents"),
                documents,
            ))
            .section(AccordionSection::new(
                SECTIONS[2],
                t(locale, "section-parties"),
                parties,
            ))
            .section(AccordionSection::new(
                SECTIONS[3],
                t(locale, "section-commission"),
                commission,
            ))
            .on_toggle(move |id, _window, cx| {
                let result = page.update(cx, |this, cx| {
                    this.accordion.toggle(id);
                    cx.notify();
                });
                if result.is_err() {
                    debug!(section = id, "Accordion toggled after page was released");
                }
            });

        div()
            .id("deals-page")
            .size_full()
            .overflow_y_scroll()
            .p_6()
            .bg(DeskColors::background())
            .child(accordion)
    }
}
