//! blo - Deterministic blockies identicons as SVG
//!
//! An input string (usually a blockchain address) seeds a small generator
//! that picks a three-color palette and a mirrored 8×8 bitmap. The result is
//! rendered as SVG markup or as a base64 data URI.
//!
//! # Example
//!
//! ```rust
//! use blo::{data_uri, svg, BloOptions};
//!
//! let options = BloOptions::default();
//! let markup = svg("0xcb7147879011ea207df5b35a24ca6f0859dcfb14", &options).unwrap();
//! assert!(markup.starts_with("<svg"));
//!
//! let uri = data_uri("0xcb7147879011ea207df5b35a24ca6f0859dcfb14", &options).unwrap();
//! assert!(uri.starts_with("data:image/svg+xml;base64,"));
//! ```
//!
//! The same input and options always produce the same output.

pub mod error;
pub mod image;
pub mod random;
pub mod svg;
pub mod term;
pub mod types;

pub use error::BloError;
pub use random::SeedRandom;
pub use svg::{decode_data_uri, render_data_uri, render_svg};
pub use types::*;

/// Render the icon for `input` as SVG markup.
///
/// # Example
/// ```rust
/// let svg = blo::svg("0xabc", &blo::BloOptions { size: 32, ..Default::default() }).unwrap();
/// assert!(svg.contains(r#"width="32""#));
/// ```
pub fn svg(input: &str, options: &BloOptions) -> Result<String, BloError> {
    let icon = bitmap_and_palette(input, options)?;
    Ok(render_svg(&icon.bitmap, &icon.palette, options.size))
}

/// Render the icon for `input` as a `data:image/svg+xml;base64,` URI.
pub fn data_uri(input: &str, options: &BloOptions) -> Result<String, BloError> {
    let icon = bitmap_and_palette(input, options)?;
    Ok(render_data_uri(&icon.bitmap, &icon.palette, options.size))
}

/// Derive the raw bitmap and palette for `input`, for custom rendering.
pub fn bitmap_and_palette(input: &str, options: &BloOptions) -> Result<Icon, BloError> {
    options.validate()?;
    let seed = options.resolve_seed(input);
    log::debug!(
        "deriving icon for {:?} (seed {:?}, case {}, size {})",
        input,
        seed,
        options.case_mode.as_str(),
        options.size,
    );
    Ok(image::image(&seed))
}

/// A fresh generator for `input`, used verbatim as the seed.
pub fn seed(input: &str) -> SeedRandom {
    SeedRandom::new(input)
}
