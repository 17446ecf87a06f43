//! Notice Panel Component
//!
//! Shows user notices at the bottom of the screen, newest first.

use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::constants::NOTICE_PANEL_VISIBLE;
use crate::i18n::t;
use crate::state::notice_state::Notice;
use crate::theme::colors::DeskColors;
use crate::utils::format::format_time;

/// Notice panel component
pub struct NoticePanel {
    entities: AppEntities,
    expanded: bool,
}

impl NoticePanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.notices, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: true,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn render_notice(notice: &Notice) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(DeskColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(64.0))
                    .child(format_time(&notice.timestamp)),
            )
            .child(
                div()
                    .text_color(notice.level.color())
                    .text_size(px(11.0))
                    .min_w(px(40.0))
                    .child(notice.level.label()),
            )
            .child(
                div()
                    .text_color(DeskColors::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(notice.message.clone()),
            )
    }

    fn header_button(id: &'static str) -> gpui::Stateful<gpui::Div> {
        div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_color(DeskColors::text_muted())
            .text_size(px(11.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
    }
}

impl Render for NoticePanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let notices = self.entities.notices.read(cx);
        let height = if self.expanded { px(140.0) } else { px(32.0) };
        let entities = self.entities.clone();

        let header = div()
            .h(px(32.0))
            .w_full()
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(gpui::rgba(0xffffff22))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_color(DeskColors::text_light())
                            .text_size(px(13.0))
                            .font_weight(FontWeight::MEDIUM)
                            .child(t(locale, "notice-title")),
                    )
                    .child(
                        div()
                            .text_color(DeskColors::text_muted())
                            .text_size(px(11.0))
                            .child(format!("({})", notices.len())),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Self::header_button("clear-notices")
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.notices.update(cx, |notices, cx| {
                                    notices.clear();
                                    cx.notify();
                                });
                            })
                            .child(t(locale, "notice-clear")),
                    )
                    .child(
                        Self::header_button("toggle-notices")
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.toggle_expanded(cx);
                            }))
                            .child(if self.expanded { "▼" } else { "▲" }),
                    ),
            );

        let mut panel = div()
            .h(height)
            .w_full()
            .bg(DeskColors::notice_panel_bg())
            .flex()
            .flex_col()
            .child(header);

        if self.expanded {
            panel = panel.child(
                div()
                    .id("notice-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_4()
                    .py_1()
                    .children(notices.latest(NOTICE_PANEL_VISIBLE).map(Self::render_notice)),
            );
        }

        panel
    }
}
