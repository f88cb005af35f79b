//! QR codes for reservation confirmations

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;

use crate::error::{AppError, Result};

/// Render `payload` as a PNG QR code and return it as a data URI.
pub fn png_data_uri(payload: &str) -> Result<String> {
    let code = QrCode::new(payload.as_bytes())
        .map_err(|e| AppError::Internal(format!("QR encoding failed: {}", e)))?;

    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(240, 240)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| AppError::Internal(format!("QR image encoding failed: {}", e)))?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}
