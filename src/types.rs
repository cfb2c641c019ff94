//! Type definitions for icons, palettes and render options

use std::borrow::Cow;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BloError;

/// Number of stored cells: the left half of the 8×8 grid.
pub const BITMAP_LEN: usize = 32;
/// Stored columns per row. The other four are mirrored.
pub const HALF_WIDTH: usize = 4;
/// Width and height of the full icon, in cells.
pub const GRID_SIZE: usize = 8;
/// Default rendered size in pixels.
pub const DEFAULT_SIZE: u32 = 64;

/// A color in the HSL color space, quantized to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// 0-360
    pub hue: u16,
    /// 40-100
    pub saturation: u16,
    /// 0-100
    pub lightness: u16,
}

impl Hsl {
    pub const fn new(hue: u16, saturation: u16, lightness: u16) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Convert to 8-bit sRGB channels.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let h = f64::from(self.hue);
        let s = f64::from(self.saturation) / 100.0;
        let l = f64::from(self.lightness) / 100.0;
        let a = s * l.min(1.0 - l);
        let channel = |n: f64| -> u8 {
            let k = (n + h / 30.0) % 12.0;
            let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (c * 255.0).floor().clamp(0.0, 255.0) as u8
        };
        (channel(0.0), channel(8.0), channel(4.0))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Which palette color paints a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PaletteIndex {
    #[default]
    Background = 0,
    Primary = 1,
    Accent = 2,
}

impl PaletteIndex {
    /// Map a floored draw onto an index. Anything past 2 is clamped to accent.
    pub fn from_draw(value: u8) -> Self {
        match value {
            0 => PaletteIndex::Background,
            1 => PaletteIndex::Primary,
            _ => PaletteIndex::Accent,
        }
    }
}

impl From<PaletteIndex> for u8 {
    fn from(index: PaletteIndex) -> u8 {
        index as u8
    }
}

impl TryFrom<u8> for PaletteIndex {
    type Error = BloError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PaletteIndex::Background),
            1 => Ok(PaletteIndex::Primary),
            2 => Ok(PaletteIndex::Accent),
            other => Err(BloError::InvalidPaletteIndex(other)),
        }
    }
}

/// Colors used by a given icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    pub background: Hsl,
    pub primary: Hsl,
    pub accent: Hsl,
}

impl Palette {
    pub fn color(&self, index: PaletteIndex) -> Hsl {
        match index {
            PaletteIndex::Background => self.background,
            PaletteIndex::Primary => self.primary,
            PaletteIndex::Accent => self.accent,
        }
    }
}

/// Left half of the 8×8 grid, row by row: cell `i` sits at column `i % 4`,
/// row `i / 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bitmap([PaletteIndex; BITMAP_LEN]);

impl Bitmap {
    pub const fn new(cells: [PaletteIndex; BITMAP_LEN]) -> Self {
        Self(cells)
    }

    /// The stored half, in generation order.
    pub fn cells(&self) -> &[PaletteIndex; BITMAP_LEN] {
        &self.0
    }

    /// Cell at any column of the full grid. Columns 4..8 read the mirror.
    /// Returns `None` outside the 8×8 grid.
    pub fn get(&self, column: usize, row: usize) -> Option<PaletteIndex> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return None;
        }
        let column = if column < HALF_WIDTH { column } else { GRID_SIZE - 1 - column };
        Some(self.0[row * HALF_WIDTH + column])
    }

    /// Full mirrored rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = [PaletteIndex; GRID_SIZE]> + '_ {
        self.0.chunks_exact(HALF_WIDTH).map(|half| {
            let mut row = [PaletteIndex::Background; GRID_SIZE];
            for (column, index) in half.iter().enumerate() {
                row[column] = *index;
                row[GRID_SIZE - 1 - column] = *index;
            }
            row
        })
    }
}

/// `bitmap[(column, row)]`, panicking outside the 8×8 grid.
impl Index<(usize, usize)> for Bitmap {
    type Output = PaletteIndex;

    fn index(&self, (column, row): (usize, usize)) -> &PaletteIndex {
        assert!(column < GRID_SIZE && row < GRID_SIZE, "cell ({}, {}) outside grid", column, row);
        let column = if column < HALF_WIDTH { column } else { GRID_SIZE - 1 - column };
        &self.0[row * HALF_WIDTH + column]
    }
}

/// Bitmap and palette derived from one seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Icon {
    pub bitmap: Bitmap,
    pub palette: Palette,
}

/// How the input text is turned into the generator seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseMode {
    /// Seed with the input verbatim
    #[default]
    AsIs,
    Upper,
    Lower,
}

impl CaseMode {
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            CaseMode::AsIs => Cow::Borrowed(input),
            CaseMode::Upper => Cow::Owned(input.to_uppercase()),
            CaseMode::Lower => Cow::Owned(input.to_lowercase()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::AsIs => "as-is",
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
        }
    }
}

impl FromStr for CaseMode {
    type Err = BloError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mode = match value {
            "as-is" => CaseMode::AsIs,
            "upper" => CaseMode::Upper,
            "lower" => CaseMode::Lower,
            other => {
                return Err(BloError::invalid_option(
                    "case_mode",
                    format!("expected one of as-is, upper, lower, got {:?}", other),
                ))
            }
        };
        Ok(mode)
    }
}

/// Options accepted by the rendering entry points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloOptions {
    /// Rendered width and height in pixels. Default: 64
    pub size: u32,
    /// Replaces the input as seed source. `case_mode` is not applied to it.
    /// An empty override falls back to the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Case policy applied to the input before seeding. Default: as-is
    pub case_mode: CaseMode,
}

impl Default for BloOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            case_mode: CaseMode::AsIs,
        }
    }
}

impl BloOptions {
    pub fn validate(&self) -> Result<(), BloError> {
        if self.size == 0 {
            return Err(BloError::invalid_option("size", "must be greater than zero"));
        }
        Ok(())
    }

    /// The string actually fed to the generator for `input`.
    pub fn resolve_seed<'a>(&'a self, input: &'a str) -> Cow<'a, str> {
        match self.seed.as_deref() {
            Some(seed) if !seed.is_empty() => Cow::Borrowed(seed),
            _ => self.case_mode.apply(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_display() {
        assert_eq!(Hsl::new(300, 57, 48).to_string(), "hsl(300, 57%, 48%)");
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(Hsl::new(0, 100, 50).to_rgb(), (255, 0, 0));
        assert_eq!(Hsl::new(120, 100, 50).to_rgb(), (0, 255, 0));
        assert_eq!(Hsl::new(0, 40, 0).to_rgb(), (0, 0, 0));
        assert_eq!(Hsl::new(200, 50, 100).to_rgb(), (255, 255, 255));
    }

    #[test]
    fn test_bitmap_mirror_access() {
        let mut cells = [PaletteIndex::Background; BITMAP_LEN];
        cells[1] = PaletteIndex::Primary; // column 1, row 0
        cells[4 * 3 + 3] = PaletteIndex::Accent; // column 3, row 3
        let bitmap = Bitmap::new(cells);

        assert_eq!(bitmap.get(1, 0), Some(PaletteIndex::Primary));
        assert_eq!(bitmap.get(6, 0), Some(PaletteIndex::Primary));
        assert_eq!(bitmap.get(3, 3), Some(PaletteIndex::Accent));
        assert_eq!(bitmap[(4, 3)], PaletteIndex::Accent);
        assert_eq!(bitmap[(0, 0)], PaletteIndex::Background);
        assert_eq!(bitmap.get(8, 0), None);
        assert_eq!(bitmap.get(0, 8), None);

        let rows: Vec<_> = bitmap.rows().collect();
        assert_eq!(rows.len(), GRID_SIZE);
        for row in rows {
            for column in 0..GRID_SIZE {
                assert_eq!(row[column], row[GRID_SIZE - 1 - column]);
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn test_bitmap_index_out_of_grid() {
        let _ = Bitmap::default()[(8, 0)];
    }

    #[test]
    fn test_palette_index_from_draw_clamps() {
        assert_eq!(PaletteIndex::from_draw(0), PaletteIndex::Background);
        assert_eq!(PaletteIndex::from_draw(1), PaletteIndex::Primary);
        assert_eq!(PaletteIndex::from_draw(2), PaletteIndex::Accent);
        assert_eq!(PaletteIndex::from_draw(4), PaletteIndex::Accent);
    }

    #[test]
    fn test_palette_index_serializes_as_number() {
        assert_eq!(serde_json::to_string(&PaletteIndex::Accent).unwrap(), "2");
        let index: PaletteIndex = serde_json::from_str("1").unwrap();
        assert_eq!(index, PaletteIndex::Primary);
        assert!(serde_json::from_str::<PaletteIndex>("3").is_err());
        assert_eq!(PaletteIndex::try_from(7), Err(BloError::InvalidPaletteIndex(7)));
    }

    #[test]
    fn test_case_mode_parse() {
        assert_eq!("as-is".parse::<CaseMode>().unwrap(), CaseMode::AsIs);
        assert_eq!("upper".parse::<CaseMode>().unwrap(), CaseMode::Upper);
        assert_eq!("lower".parse::<CaseMode>().unwrap(), CaseMode::Lower);
        assert!(matches!(
            "title".parse::<CaseMode>(),
            Err(BloError::InvalidOption { name: "case_mode", .. }),
        ));
    }

    #[test]
    fn test_options_defaults_and_validation() {
        let options = BloOptions::default();
        assert_eq!(options.size, 64);
        assert_eq!(options.case_mode, CaseMode::AsIs);
        assert!(options.validate().is_ok());

        let zero = BloOptions { size: 0, ..Default::default() };
        assert!(matches!(zero.validate(), Err(BloError::InvalidOption { name: "size", .. })));

        let empty_seed = BloOptions { seed: Some(String::new()), ..Default::default() };
        assert!(empty_seed.validate().is_ok());
    }

    #[test]
    fn test_resolve_seed() {
        let lower = BloOptions { case_mode: CaseMode::Lower, ..Default::default() };
        assert_eq!(lower.resolve_seed("0xABc"), "0xabc");

        let upper = BloOptions { case_mode: CaseMode::Upper, ..Default::default() };
        assert_eq!(upper.resolve_seed("0xABc"), "0XABC");

        let overridden = BloOptions {
            seed: Some("Custom".to_string()),
            case_mode: CaseMode::Lower,
            ..Default::default()
        };
        assert_eq!(overridden.resolve_seed("0xABc"), "Custom");

        assert_eq!(BloOptions::default().resolve_seed("0xABc"), "0xABc");

        let empty = BloOptions {
            seed: Some(String::new()),
            case_mode: CaseMode::Lower,
            ..Default::default()
        };
        assert_eq!(empty.resolve_seed("0xABc"), "0xabc");
    }

    #[test]
    fn test_options_from_json() {
        let options: BloOptions = serde_json::from_str(r#"{"size": 32, "case_mode": "lower"}"#).unwrap();
        assert_eq!(options.size, 32);
        assert_eq!(options.case_mode, CaseMode::Lower);
        assert_eq!(options.seed, None);
    }
}
