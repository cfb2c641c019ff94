//! Terminal rendering with ANSI truecolor background blocks.

use crate::types::{Icon, GRID_SIZE};

const RESET: &str = "\x1b[0m";

/// Render an icon as 8 lines of colored blocks, each cell `square_width`
/// spaces wide. Background cells are painted too.
pub fn render_term(icon: &Icon, square_width: usize) -> String {
    let blank = " ".repeat(square_width);
    let mut lines: Vec<String> = Vec::with_capacity(GRID_SIZE);

    for row in icon.bitmap.rows() {
        let mut line = String::new();
        for index in row {
            let (r, g, b) = icon.palette.color(index).to_rgb();
            line.push_str(&format!("\x1b[48;2;{};{};{}m{}{}", r, g, b, blank, RESET));
        }
        lines.push(line);
    }

    lines.join("\n")
}
