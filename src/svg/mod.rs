//! SVG serializer - turns an icon into SVG markup or a data URI.
//!
//! Pure string building, no DOM manipulation.

mod data_uri;
mod renderer;

pub use data_uri::{decode_data_uri, render_data_uri, SVG_DATA_URI_PREFIX};
pub use renderer::render_svg;
