//! Palette and bitmap derivation.
//!
//! The draws must happen in this exact order:
//! 1. palette: primary color (6 draws)
//! 2. palette: background (6 draws)
//! 3. palette: accent color (6 draws)
//! 4. bitmap (32 draws)

use crate::random::SeedRandom;
use crate::types::{Bitmap, Hsl, Icon, Palette, PaletteIndex, BITMAP_LEN};

/// Derive the icon for an already resolved seed.
pub fn image(seed: &str) -> Icon {
    let mut random = SeedRandom::new(seed);
    let palette = random_palette(&mut random);
    let bitmap = random_bitmap(&mut random);
    log::trace!("palette {:?}, bitmap {:?}", palette, bitmap);
    Icon { bitmap, palette }
}

pub fn random_palette(random: &mut SeedRandom) -> Palette {
    let primary = random_color(random);
    let background = random_color(random);
    let accent = random_color(random);
    Palette { background, primary, accent }
}

/// One color from six draws. Each channel is truncated toward zero.
pub fn random_color(random: &mut SeedRandom) -> Hsl {
    // whole spectrum
    let hue = random.next_f64() * 360.0;
    // 40 to 100, avoids greyish colors
    let saturation = 40.0 + random.next_f64() * 60.0;
    // 0 to 100 on a bell curve around 50
    let lightness = (random.next_f64() + random.next_f64() + random.next_f64() + random.next_f64()) * 25.0;
    Hsl::new(hue as u16, saturation as u16, lightness as u16)
}

pub fn random_bitmap(random: &mut SeedRandom) -> Bitmap {
    let mut cells = [PaletteIndex::Background; BITMAP_LEN];
    for cell in cells.iter_mut() {
        // background ~43%, primary ~43%, accent ~13%
        *cell = PaletteIndex::from_draw((random.next_f64() * 2.3) as u8);
    }
    Bitmap::new(cells)
}
