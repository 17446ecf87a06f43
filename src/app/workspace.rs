//! Workspace - Main Shell with Layout
//!
//! The workspace holds the header, the deals page, and the notice panel.

use gpui::{AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::notice_panel::NoticePanel;
use crate::features::deals::page::DealsPage;
use crate::theme::colors::DeskColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    page: Entity<DealsPage>,
    notice_panel: Entity<NoticePanel>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        Self {
            header: cx.new(|cx| Header::new(entities.clone(), cx)),
            page: cx.new(|cx| DealsPage::new(entities.clone(), cx)),
            notice_panel: cx.new(|cx| NoticePanel::new(entities, cx)),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(DeskColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.page.clone()),
            )
            .child(self.notice_panel.clone())
    }
}
