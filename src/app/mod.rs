//! App module - contains the main application state and logic

mod dashboard;
mod views;

pub use dashboard::ResultWidget;

use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use crate::worker::SumWorker;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) plans: Vec<Plan>,
    pub(crate) view: View,
    /// Live only while the dashboard view is shown
    pub(crate) dashboard: Option<ResultWidget>,
    pub(crate) calculation_upper: u64,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let mut app = Self {
            plans: Plan::catalog(),
            view: View::Pricing,
            dashboard: None,
            calculation_upper: settings.calculation_upper,
            runtime,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        };
        app.switch_view(&cc.egui_ctx, settings.last_view);
        app
    }

    /// Change the visible view. Leaving the dashboard tears its widget down;
    /// entering it activates a fresh one.
    pub fn switch_view(&mut self, ctx: &egui::Context, view: View) {
        if view == self.view && (view != View::Dashboard || self.dashboard.is_some()) {
            return;
        }
        info!(from = ?self.view, to = ?view, "Switching view");
        self.view = view;

        match view {
            View::Dashboard => self.mount_dashboard(ctx),
            View::Pricing => self.dashboard = None,
        }
    }

    /// Replace the dashboard widget with a freshly mounted one
    pub fn mount_dashboard(&mut self, ctx: &egui::Context) {
        // Old instance is dropped (and unmounted) before the new one starts
        self.dashboard = None;

        let mut widget = ResultWidget::new();
        let repaint = ctx.clone();
        widget.mount(
            self.runtime.handle(),
            SumWorker::new(self.calculation_upper),
            move || repaint.request_repaint(),
        );
        info!(widget = widget.id(), upper = self.calculation_upper, "Dashboard activated");
        self.dashboard = Some(widget);
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            last_view: self.view,
            calculation_upper: self.calculation_upper,
        };
        settings.save(&self.data_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(upper: u64) -> App {
        App {
            plans: Plan::catalog(),
            view: View::Pricing,
            dashboard: None,
            calculation_upper: upper,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn entering_dashboard_mounts_a_widget() {
        let ctx = egui::Context::default();
        let mut app = test_app(10);
        app.switch_view(&ctx, View::Dashboard);
        let widget = app.dashboard.as_ref().unwrap();
        assert_ne!(widget.state(), CalcState::Idle);
    }

    #[test]
    fn leaving_dashboard_drops_the_widget() {
        let ctx = egui::Context::default();
        let mut app = test_app(u64::MAX);
        app.switch_view(&ctx, View::Dashboard);
        assert!(app.dashboard.is_some());
        app.switch_view(&ctx, View::Pricing);
        assert!(app.dashboard.is_none());
        assert_eq!(app.view, View::Pricing);
    }

    #[test]
    fn remount_creates_new_instance() {
        let ctx = egui::Context::default();
        let mut app = test_app(u64::MAX);
        app.switch_view(&ctx, View::Dashboard);
        let first = app.dashboard.as_ref().unwrap().id();
        app.mount_dashboard(&ctx);
        let second = app.dashboard.as_ref().unwrap().id();
        assert_ne!(first, second);
        assert_eq!(app.dashboard.as_ref().unwrap().state(), CalcState::Pending);
    }

    #[test]
    fn switching_to_same_view_keeps_widget() {
        let ctx = egui::Context::default();
        let mut app = test_app(u64::MAX);
        app.switch_view(&ctx, View::Dashboard);
        let first = app.dashboard.as_ref().unwrap().id();
        app.switch_view(&ctx, View::Dashboard);
        assert_eq!(app.dashboard.as_ref().unwrap().id(), first);
    }
}
