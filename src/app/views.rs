//! View rendering (sidebar, pricing, dashboard)

use super::App;
use crate::constants::APP_VERSION;
use crate::theme;
use crate::types::{CalcState, View};
use crate::ui::components::pricing_display;
use eframe::egui;

impl App {
    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .frame(theme::sidebar_frame())
            .show(ctx, |ui| {
                for view in View::ALL {
                    if theme::nav_item(ui, view.icon(), view.label(), self.view == view) {
                        self.switch_view(ctx, view);
                    }
                    ui.add_space(theme::SPACING_SM);
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.label(
                        egui::RichText::new(format!("v{}", APP_VERSION))
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_MUTED),
                    );
                });
            });
    }

    pub(crate) fn render_pricing_view(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                theme::page_frame().show(ui, |ui| {
                    pricing_display(ui, &self.plans);
                });
            });
    }

    pub(crate) fn render_dashboard_view(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let Some(widget) = self.dashboard.as_ref() else {
            return;
        };
        let text = widget.display_text();
        let working = widget.has_live_task();
        let finished = !matches!(widget.state(), CalcState::Idle | CalcState::Pending);

        let mut run_again = false;
        theme::page_frame().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(text)
                        .size(theme::FONT_RESULT)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.add_space(theme::SPACING_XL);
                if working {
                    ui.label(
                        egui::RichText::new("Worker running")
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_MUTED),
                    );
                }
                if finished && ui.button("Run again").clicked() {
                    run_again = true;
                }
            });
        });

        if run_again {
            self.mount_dashboard(ctx);
        }
    }
}
