//! Dark theme shared by the GIF export and the interactive window.

use egui::Color32;

/// Fixed display palette and figure colors.
///
/// Body colors alias by `id mod 6`; datasets with more than six
/// particles repeat colors, which is intentional.
pub mod colors {
    // === Body palette (sun amber first, then planets) ===
    pub const PALETTE: [(u8, u8, u8); 6] = [
        (0xFD, 0xB8, 0x13), // #FDB813 - amber
        (0x4A, 0x90, 0xE2), // #4A90E2 - blue
        (0xE7, 0x4C, 0x3C), // #E74C3C - red
        (0x2E, 0xCC, 0x71), // #2ECC71 - green
        (0x9B, 0x59, 0xB6), // #9B59B6 - purple
        (0xF3, 0x9C, 0x12), // #F39C12 - orange
    ];

    // === Figure ===
    pub const BG_FIGURE: (u8, u8, u8) = (0x1A, 0x1A, 0x1A); // #1A1A1A - outer figure
    pub const BG_PLOT: (u8, u8, u8) = (0x0A, 0x0A, 0x0A); // #0A0A0A - plot area
    pub const BG_BOX: (u8, u8, u8) = (0x2A, 0x2A, 0x2A); // #2A2A2A - info/legend box
    pub const TEXT: (u8, u8, u8) = (0xFF, 0xFF, 0xFF); // #FFFFFF - labels and titles
    pub const GRID: (u8, u8, u8) = (0x4D, 0x4D, 0x4D); // #4D4D4D - dashed grid

    /// Trail lines are drawn at half opacity over the plot background.
    pub const TRAIL_ALPHA: u8 = 128;
}

/// Palette color for a particle id. Negative ids wrap the same way
/// Python's modulo does.
pub fn palette_color(id: i64) -> (u8, u8, u8) {
    let idx = id.rem_euclid(colors::PALETTE.len() as i64) as usize;
    colors::PALETTE[idx]
}

fn color32(rgb: (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Dark flat egui visuals matching the figure colors.
pub fn dark_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = color32(BG_FIGURE);
    visuals.window_fill = color32(BG_FIGURE);
    visuals.extreme_bg_color = color32(BG_PLOT);
    visuals.faint_bg_color = color32(BG_BOX);

    visuals.override_text_color = Some(color32(TEXT));

    visuals.widgets.noninteractive.bg_fill = color32(BG_FIGURE);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, color32(GRID));
    visuals.widgets.inactive.bg_fill = color32(BG_BOX);
    visuals.widgets.hovered.bg_fill = color32(GRID);
    visuals.widgets.active.bg_fill = color32(GRID);

    // Flat design, no shadows
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_aliases_by_modulo() {
        assert_eq!(palette_color(0), palette_color(6));
        assert_eq!(palette_color(1), palette_color(7));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn test_negative_id_wraps() {
        // -1 mod 6 = 5, matching Python's modulo
        assert_eq!(palette_color(-1), colors::PALETTE[5]);
    }
}
