//! Header Component
//!
//! The application header with logo, title, and language switcher.

use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::i18n::t;
use crate::theme::colors::DeskColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let next_locale = locale.toggled();
        let entities = self.entities.clone();

        div()
            .h(px(52.0))
            .w_full()
            .bg(DeskColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(DeskColors::header_bg())
                            .font_weight(FontWeight::BOLD)
                            .child("D"),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_color(DeskColors::text_light())
                                    .text_size(px(17.0))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .child(t(locale, "app-title")),
                            )
                            .child(
                                div()
                                    .text_color(gpui::rgba(0xffffffaa))
                                    .text_size(px(12.0))
                                    .child(t(locale, "app-subtitle")),
                            ),
                    ),
            )
            // Language switcher
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(gpui::rgba(0xffffff22))
                    .text_color(DeskColors::text_light())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        entities.dispatch(AppEvent::LocaleChanged { locale: next_locale }, cx);
                    })
                    .child(next_locale.display_name()),
            )
    }
}
