//! SVG renderer - converts a bitmap and palette into an SVG string.
//!
//! The document always uses an 8×8 viewBox and is scaled through its
//! `width`/`height` attributes. Layers, back to front:
//! background square → primary cells → accent cells.
//! Each stored cell is drawn at its own column and at the mirrored column.

use crate::types::{Bitmap, Hsl, Palette, PaletteIndex, GRID_SIZE, HALF_WIDTH};

const SVG_OPEN: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 8 8" shape-rendering="optimizeSpeed""#;
const BACKGROUND_PATH: &str = "M0,0H8V8H0z";

/// Render an icon as an SVG document `size` pixels wide and high.
pub fn render_svg(bitmap: &Bitmap, palette: &Palette, size: u32) -> String {
    let mut primary = String::new();
    let mut accent = String::new();

    for (i, index) in bitmap.cells().iter().enumerate() {
        let target = match index {
            PaletteIndex::Background => continue,
            PaletteIndex::Primary => &mut primary,
            PaletteIndex::Accent => &mut accent,
        };
        let x = i % HALF_WIDTH;
        let y = i / HALF_WIDTH;
        target.push_str(&unit_square(x, y));
        target.push_str(&unit_square(GRID_SIZE - 1 - x, y));
    }

    let mut svg = format!(r#"{} width="{}" height="{}">"#, SVG_OPEN, size, size);
    svg.push_str(&render_path(&palette.background, BACKGROUND_PATH));
    svg.push_str(&render_path(&palette.primary, &primary));
    svg.push_str(&render_path(&palette.accent, &accent));
    svg.push_str("</svg>");
    svg
}

fn unit_square(x: usize, y: usize) -> String {
    format!("M{},{}h1v1h-1z", x, y)
}

fn render_path(color: &Hsl, data: &str) -> String {
    format!(r#"<path fill="{}" d="{}"/>"#, color, data)
}
