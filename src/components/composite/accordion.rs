//! FormAccordion Component
//!
//! Collapsible sections for grouping form content. Which sections are open
//! is kept in an `AccordionState` owned by the parent view; clicks on a
//! trigger are reported through `on_toggle`.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::state::accordion_state::AccordionState;
use crate::theme::colors::DeskColors;

type ToggleHandler = Rc<dyn Fn(&str, &mut Window, &mut App)>;

/// One accordion section
pub struct AccordionSection {
    id: SharedString,
    title: SharedString,
    content: AnyElement,
}

impl AccordionSection {
    pub fn new(id: impl Into<SharedString>, title: impl Into<SharedString>, content: impl IntoElement) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into_any_element(),
        }
    }
}

/// Accordion of form sections
#[derive(IntoElement)]
pub struct FormAccordion {
    id: SharedString,
    sections: Vec<AccordionSection>,
    open: Vec<String>,
    on_toggle: Option<ToggleHandler>,
}

impl FormAccordion {
    pub fn new(id: impl Into<SharedString>, state: &AccordionState) -> Self {
        Self {
            id: id.into(),
            sections: Vec::new(),
            open: state.open_ids(),
            on_toggle: None,
        }
    }

    pub fn section(mut self, section: AccordionSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Receive the id of a clicked section trigger
    pub fn on_toggle(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(handler));
        self
    }

    fn render_trigger(&self, section_id: &SharedString, title: SharedString, open: bool) -> impl IntoElement {
        let on_toggle = self.on_toggle.clone();
        let target = section_id.clone();

        div()
            .id(SharedString::from(format!("{}-trigger-{}", self.id, section_id)))
            .w_full()
            .px_4()
            .py_3()
            .flex()
            .items_center()
            .justify_between()
            .cursor_pointer()
            .hover(|s| s.bg(DeskColors::table_row_hover()))
            .on_click(move |_event: &ClickEvent, window, cx| {
                if let Some(handler) = &on_toggle {
                    handler(&target, window, cx);
                }
            })
            .child(
                div()
                    .text_base()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(DeskColors::text_primary())
                    .child(title),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(DeskColors::text_muted())
                    .child(if open { "▾" } else { "▸" }),
            )
    }
}

impl RenderOnce for FormAccordion {
    fn render(mut self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let sections = std::mem::take(&mut self.sections);
        let mut container = div().w_full().flex().flex_col().gap_3();

        for section in sections {
            let open = self.open.iter().any(|id| id.as_str() == section.id.as_str());
            let mut item = div()
                .w_full()
                .flex()
                .flex_col()
                .bg(DeskColors::content_bg())
                .border_1()
                .border_color(DeskColors::border())
                .rounded_lg()
                .overflow_hidden()
                .child(self.render_trigger(&section.id, section.title, open));

            if open {
                item = item.child(
                    div()
                        .w_full()
                        .px_4()
                        .pb_4()
                        .pt_1()
                        .border_t_1()
                        .border_color(DeskColors::border())
                        .child(section.content),
                );
            }
            container = container.child(item);
        }

        container
    }
}
