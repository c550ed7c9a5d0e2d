use crate::{Result as TokenErrorResult, TokenError};

use std::panic::Location;

use error_location::ErrorLocation;
use qrcode::{QrCode, render::svg};

const MIN_DIMENSION: u32 = 256;

/// Render `data` as an SVG QR code document.
#[track_caller]
pub fn render_svg(data: &str) -> TokenErrorResult<String> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| TokenError::QrRender {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#FFFFFF"))
        .build())
}
