//! CellInput Component
//!
//! Input-styled cell for the editable table when it is not being edited.
//! A click hands the cell to the table, which swaps in a live input.

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::constants::EDITABLE_ROW_HEIGHT;
use crate::theme::colors::DeskColors;

/// A single editable cell
#[derive(IntoElement)]
pub struct CellInput {
    id: ElementId,
    value: SharedString,
    placeholder: SharedString,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl CellInput {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            value: SharedString::default(),
            placeholder: SharedString::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Text to draw and whether it is the placeholder
    fn shown(&self) -> (SharedString, bool) {
        if self.value.is_empty() {
            (self.placeholder.clone(), true)
        } else {
            (self.value.clone(), false)
        }
    }

    /// Set the handler that focuses this cell
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for CellInput {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (display_text, is_placeholder) = self.shown();
        let text_color = if is_placeholder {
            DeskColors::input_placeholder()
        } else {
            DeskColors::text_primary()
        };

        let bg = if self.disabled {
            DeskColors::input_disabled_bg()
        } else {
            DeskColors::input_bg()
        };

        let mut element = div()
            .id(self.id)
            .h(px(EDITABLE_ROW_HEIGHT))
            .w_full()
            .px_3()
            .flex()
            .items_center()
            .bg(bg)
            .border_1()
            .border_color(DeskColors::input_border())
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .overflow_hidden()
            .child(display_text);

        if self.disabled {
            element = element.opacity(0.5);
        } else {
            element = element.cursor_text();
            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_only_when_empty() {
        let empty = CellInput::new("cell").placeholder("Add a new entry...");
        assert_eq!(empty.shown(), ("Add a new entry...".into(), true));

        let filled = CellInput::new("cell").value("Jordan").placeholder("Add a new entry...");
        assert_eq!(filled.shown(), ("Jordan".into(), false));
    }
}
