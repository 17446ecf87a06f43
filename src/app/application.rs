//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::i18n::t;

actions!(dealdesk, [Quit]);

/// Run the DealDesk application
pub fn run_app(config: AppConfig) {
    Application::new().run(move |cx: &mut App| {
        // Theme and key bindings for the input widgets
        gpui_component::init(cx);
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let title = t(config.effective_locale(), "app-title");
        let entities = AppEntities::init(config, cx);
        cx.set_global(entities.clone());

        let bounds = Bounds::centered(None, gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        match cx.open_window(window_options, |window, cx| {
            let workspace: AnyView = cx.new(|cx| Workspace::new(entities.clone(), cx)).into();
            cx.new(|cx| Root::new(workspace, window, cx))
        }) {
            Ok(_) => info!("Main window opened"),
            Err(e) => {
                error!(error = %e, "Failed to open main window");
                cx.quit();
                return;
            }
        }

        cx.activate(true);
    });
}
