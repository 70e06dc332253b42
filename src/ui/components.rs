//! Plan cards and the pricing layout that hosts them

use crate::constants::{STACK_BREAKPOINT, SUBSCRIBE_LABEL};
use crate::theme::{self, CardStyle};
use crate::types::Plan;
use eframe::egui;
use tracing::info;

/// One entry of a card's feature list
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow<'a> {
    pub text: &'a str,
    /// Draw a separator under this row. Every row but the last has one.
    pub separated: bool,
}

/// Everything a card shows, resolved from a plan before any painting happens
#[derive(Debug, Clone, PartialEq)]
pub struct PlanCardLayout<'a> {
    pub title: &'a str,
    pub price: &'a str,
    pub features: Vec<FeatureRow<'a>>,
    pub action: &'static str,
    pub style: CardStyle,
}

impl<'a> PlanCardLayout<'a> {
    pub fn for_plan(plan: &'a Plan) -> Self {
        let last = plan.features.len().saturating_sub(1);
        let features = plan
            .features
            .iter()
            .enumerate()
            .map(|(i, text)| FeatureRow {
                text: text.as_str(),
                separated: i < last,
            })
            .collect();

        Self {
            title: plan.name.as_str(),
            price: plan.price.as_str(),
            features,
            action: SUBSCRIBE_LABEL,
            style: CardStyle::for_featured(plan.featured),
        }
    }
}

/// Whether cards should stack vertically at this width
pub fn is_stacked(available_width: f32) -> bool {
    available_width < STACK_BREAKPOINT
}

/// Render one plan card `width` wide. The card itself takes keyboard focus
/// and shows a focus ring while it or its button is focused.
pub fn plan_card(ui: &mut egui::Ui, plan: &Plan, width: f32, elevate_on_hover: bool) -> egui::Response {
    let layout = PlanCardLayout::for_plan(plan);
    let style = layout.style;
    let card_id = ui.make_persistent_id(("plan_card", &plan.name));

    let hovered = elevate_on_hover
        && ui
            .ctx()
            .read_response(card_id)
            .is_some_and(|r| r.contains_pointer());

    let mut button_focused = false;
    let inner = theme::card_frame(&style, hovered).show(ui, |ui| {
        ui.set_width(width);
        ui.vertical_centered(|ui| {
            let content_margin = egui::Margin::symmetric(style.content_padding_x as i8, 0);

            egui::Frame::new().inner_margin(content_margin).show(ui, |ui| {
                ui.label(
                    egui::RichText::new(layout.title)
                        .size(theme::FONT_PLAN)
                        .strong()
                        .color(style.text),
                );
            });
            ui.add_space(theme::SPACING_XL);

            egui::Frame::new().inner_margin(content_margin).show(ui, |ui| {
                ui.label(
                    egui::RichText::new(layout.price)
                        .size(theme::FONT_PRICE)
                        .strong()
                        .color(style.text),
                );
            });
            ui.add_space(theme::SPACING_XL + theme::SPACING_MD);

            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(style.list_padding_x as i8, 0))
                .show(ui, |ui| {
                    for row in &layout.features {
                        feature_row(ui, row, &style);
                    }
                });
            ui.add_space(theme::SPACING_XL * 2.0);

            let button = egui::Button::new(
                egui::RichText::new(layout.action)
                    .strong()
                    .color(style.button_text),
            )
            .frame(false)
            .min_size(egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT));
            let response = ui.add(button);
            button_focused = response.has_focus();
            if response.clicked() {
                info!(plan = %plan.name, "Subscribe clicked");
            }
        });
    });

    let rect = inner.response.rect;
    let response = ui.interact(rect, card_id, egui::Sense::focusable_noninteractive());
    if response.has_focus() || button_focused {
        theme::paint_focus_ring(ui.painter(), rect);
    }
    response
}

fn feature_row(ui: &mut egui::Ui, row: &FeatureRow<'_>, style: &CardStyle) {
    let response = egui::Frame::new()
        .inner_margin(egui::Margin::symmetric(
            style.content_padding_x as i8,
            theme::FEATURE_ROW_PADDING as i8,
        ))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(row.text)
                        .size(theme::FONT_FEATURE)
                        .color(style.text),
                );
            });
        })
        .response;

    if row.separated {
        let rect = response.rect;
        ui.painter().hline(
            rect.x_range(),
            rect.bottom(),
            egui::Stroke::new(1.0, style.separator),
        );
    }
}

/// The pricing section: heading plus one card per plan, in order. Cards sit in
/// a centered bottom-aligned row on wide layouts and stack on narrow ones.
pub fn pricing_display(ui: &mut egui::Ui, plans: &[Plan]) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Pricing")
                .size(theme::FONT_PAGE_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
    });
    ui.add_space(theme::SPACING_PAGE);

    let available = ui.available_width();
    if is_stacked(available) {
        ui.vertical(|ui| {
            for plan in plans {
                plan_card(ui, plan, available, false);
            }
        });
    } else {
        let row_width = theme::CARD_WIDTH * plans.len() as f32;
        let lead = ((available - row_width) / 2.0).max(0.0);
        ui.with_layout(egui::Layout::left_to_right(egui::Align::Max), |ui| {
            ui.add_space(lead);
            for plan in plans {
                plan_card(ui, plan, theme::CARD_WIDTH, true);
            }
        });
    }
}
