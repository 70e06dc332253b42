//! Centralized theme constants for Pricing Dashboard
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_PAGE: Color32 = Color32::from_rgb(0x11, 0x18, 0x27); // gray-900
pub const BG_SIDEBAR: Color32 = Color32::from_rgb(0x0b, 0x10, 0x1a);
pub const BG_CARD_FEATURED: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37); // gray-800
pub const BG_CARD: Color32 = Color32::WHITE;
pub const BG_HOVER_SUBTLE: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37); // gray-800

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37); // gray-800
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf); // gray-400

// =============================================================================
// COLORS - Borders & focus
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37); // gray-800
pub const SEPARATOR_FEATURED: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63); // gray-600
pub const SEPARATOR: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb); // gray-300
pub const FOCUS_RING: Color32 = Color32::from_rgba_premultiplied(0x2b, 0x5f, 0xb3, 0xbf); // blue-500 @ 75%
pub const ACCENT: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6); // blue-500

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_PAGE_TITLE: f32 = 36.0; // text-4xl
pub const FONT_PRICE: f32 = 48.0; // text-5xl
pub const FONT_PLAN: f32 = 24.0; // text-2xl
pub const FONT_FEATURE: f32 = 18.0; // text-lg
pub const FONT_RESULT: f32 = 32.0;
pub const FONT_BODY: f32 = 14.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 180.0;
pub const CARD_WIDTH: f32 = 288.0; // w-72
pub const FEATURE_ROW_PADDING: f32 = 12.0; // py-3
pub const BUTTON_HEIGHT: f32 = 44.0;
pub const FOCUS_RING_WIDTH: f32 = 4.0;
pub const FOCUS_RING_OFFSET: f32 = 2.0;

// =============================================================================
// CORNER RADIUS / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_PAGE: f32 = 40.0; // py-10

/// Visual treatment of a plan card. Featured and standard are the only two
/// variants; every field differs only in looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub fill: Color32,
    pub text: Color32,
    pub padding_y: f32,
    pub content_padding_x: f32,
    pub list_padding_x: f32,
    pub separator: Color32,
    pub button_text: Color32,
}

impl CardStyle {
    pub const fn featured() -> Self {
        Self {
            fill: BG_CARD_FEATURED,
            text: TEXT_PRIMARY,
            padding_y: 40.0,
            content_padding_x: 24.0,
            list_padding_x: 0.0,
            separator: SEPARATOR_FEATURED,
            button_text: TEXT_PRIMARY,
        }
    }

    pub const fn standard() -> Self {
        Self {
            fill: BG_CARD,
            text: TEXT_DARK,
            padding_y: 32.0,
            content_padding_x: 8.0,
            list_padding_x: 8.0,
            separator: SEPARATOR,
            button_text: TEXT_DARK,
        }
    }

    pub const fn for_featured(featured: bool) -> Self {
        if featured {
            Self::featured()
        } else {
            Self::standard()
        }
    }
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_PAGE,
        window_fill: BG_CARD_FEATURED,
        extreme_bg_color: BG_SIDEBAR,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x37, 0x41, 0x51), // gray-700
            stroke: egui::Stroke::new(1.0, FOCUS_RING),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(0.0, 0.0);
        style.spacing.button_padding = egui::vec2(24.0, 12.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_SIDEBAR)
        .inner_margin(egui::Margin::symmetric(8, 16))
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
}

pub fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_PAGE)
        .inner_margin(egui::Margin::symmetric(16, SPACING_PAGE as i8))
}

/// Card frame for one plan. Hovered cards get a deeper shadow.
pub fn card_frame(style: &CardStyle, hovered: bool) -> egui::Frame {
    let shadow = if hovered {
        egui::epaint::Shadow {
            offset: [0, 12],
            blur: 40,
            spread: 2,
            color: Color32::from_black_alpha(140),
        }
    } else {
        egui::epaint::Shadow {
            offset: [0, 6],
            blur: 16,
            spread: 0,
            color: Color32::from_black_alpha(80),
        }
    };

    egui::Frame::new()
        .fill(style.fill)
        .shadow(shadow)
        .inner_margin(egui::Margin::symmetric(0, style.padding_y as i8))
}

/// Sidebar navigation entry. Returns true if clicked.
pub fn nav_item(ui: &mut egui::Ui, icon: &str, label: &str, active: bool) -> bool {
    let text = format!("{}  {}", icon, label);
    let w = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(w, 32.0), egui::Sense::click());
    if active {
        ui.painter().rect_filled(rect, RADIUS_DEFAULT, BG_HOVER_SUBTLE);
    } else if response.hovered() {
        ui.painter()
            .rect_filled(rect, RADIUS_DEFAULT, lighten(BG_SIDEBAR, 0.06));
    }
    if response.has_focus() {
        ui.painter().rect_stroke(
            rect,
            RADIUS_DEFAULT,
            egui::Stroke::new(1.5, ACCENT),
            egui::StrokeKind::Inside,
        );
    }
    ui.painter().text(
        rect.left_center() + egui::vec2(SPACING_MD, 0.0),
        egui::Align2::LEFT_CENTER,
        text,
        egui::FontId::proportional(FONT_BODY),
        if active { TEXT_PRIMARY } else { TEXT_MUTED },
    );
    response.clicked()
}

/// Focus ring around `rect`, drawn outside the card edge
pub fn paint_focus_ring(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_stroke(
        rect.expand(FOCUS_RING_OFFSET),
        RADIUS_DEFAULT,
        egui::Stroke::new(FOCUS_RING_WIDTH, FOCUS_RING),
        egui::StrokeKind::Outside,
    );
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_variants_never_share_treatment() {
        let featured = CardStyle::featured();
        let standard = CardStyle::standard();
        assert_ne!(featured.fill, standard.fill);
        assert_ne!(featured.text, standard.text);
        assert_ne!(featured.separator, standard.separator);
        assert_ne!(featured.button_text, standard.button_text);
        assert!(featured.padding_y > standard.padding_y);
    }

    #[test]
    fn variant_follows_flag() {
        assert_eq!(CardStyle::for_featured(true), CardStyle::featured());
        assert_eq!(CardStyle::for_featured(false), CardStyle::standard());
    }

    #[test]
    fn lighten_moves_toward_white() {
        assert_eq!(lighten(Color32::BLACK, 1.0), Color32::WHITE);
        assert_eq!(lighten(BG_SIDEBAR, 0.0), BG_SIDEBAR);
    }
}
