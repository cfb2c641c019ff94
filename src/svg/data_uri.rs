//! Base64 data URIs for rendered SVG documents.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::renderer::render_svg;
use crate::error::BloError;
use crate::types::{Bitmap, Palette};

pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Render an icon and embed it as `data:image/svg+xml;base64,...`.
pub fn render_data_uri(bitmap: &Bitmap, palette: &Palette, size: u32) -> String {
    let svg = render_svg(bitmap, palette, size);
    format!("{}{}", SVG_DATA_URI_PREFIX, STANDARD.encode(svg))
}

/// Recover the SVG text from a data URI produced by [`render_data_uri`].
pub fn decode_data_uri(uri: &str) -> Result<String, BloError> {
    let payload = uri
        .strip_prefix(SVG_DATA_URI_PREFIX)
        .ok_or_else(|| BloError::InvalidDataUri(format!("expected prefix {:?}", SVG_DATA_URI_PREFIX)))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|error| BloError::InvalidDataUri(error.to_string()))?;
    String::from_utf8(bytes).map_err(|error| BloError::InvalidDataUri(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Hsl;

    #[test]
    fn test_data_uri_prefix_and_payload() {
        let palette = Palette {
            background: Hsl::new(0, 40, 0),
            primary: Hsl::new(0, 40, 0),
            accent: Hsl::new(0, 40, 0),
        };
        let uri = render_data_uri(&Bitmap::default(), &palette, 64);
        assert!(uri.starts_with("data:image/svg+xml;base64,PHN2Zy"));
        assert_eq!(
            decode_data_uri(&uri).unwrap(),
            render_svg(&Bitmap::default(), &palette, 64),
        );
    }

    #[test]
    fn test_decode_rejects_other_uris() {
        assert!(matches!(
            decode_data_uri("data:image/png;base64,AAAA"),
            Err(BloError::InvalidDataUri(_)),
        ));
        assert!(matches!(
            decode_data_uri("data:image/svg+xml;base64,@@@"),
            Err(BloError::InvalidDataUri(_)),
        ));
        // "//79" decodes to 0xff 0xfe 0xfd
        assert!(matches!(
            decode_data_uri("data:image/svg+xml;base64,//79"),
            Err(BloError::InvalidDataUri(_)),
        ));
    }
}
