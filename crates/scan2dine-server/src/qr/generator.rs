use std::io::Cursor;

use base64::Engine;
use image::{imageops, DynamicImage, ImageFormat, Rgba, RgbaImage};
use qrcode::QrCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encoding(String),
    #[error("Invalid color value: {0}")]
    InvalidColor(String),
    #[error("Invalid image width: {0}")]
    InvalidWidth(u32),
    #[error("PNG rendering failed: {0}")]
    Render(String),
}

/// Rendering knobs for the menu QR code.
#[derive(Debug, Clone)]
pub struct QrOptions {
    /// Output edge length in pixels.
    pub width: u32,
    /// Quiet zone thickness in modules.
    pub margin: u32,
    pub dark: String,
    pub light: String,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            width: 300,
            margin: 2,
            dark: "#000000".to_string(),
            light: "#FFFFFF".to_string(),
        }
    }
}

fn parse_color(value: &str) -> Result<Rgba<u8>, QrError> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(QrError::InvalidColor(value.to_string()));
    }

    let channel = |index: usize| {
        u8::from_str_radix(&hex[index..index + 2], 16)
            .map_err(|_| QrError::InvalidColor(value.to_string()))
    };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
}

/// Encodes `url` into a square PNG of exactly `options.width` pixels.
///
/// Modules are painted at an integer scale with the quiet zone included,
/// then the canvas is nearest-neighbor resized to the requested width so
/// the output dimensions never drift from the request.
pub fn render_png(url: &str, options: &QrOptions) -> Result<Vec<u8>, QrError> {
    if options.width == 0 {
        return Err(QrError::InvalidWidth(options.width));
    }

    let code = QrCode::new(url.as_bytes()).map_err(|e| QrError::Encoding(e.to_string()))?;
    let dark = parse_color(&options.dark)?;
    let light = parse_color(&options.light)?;

    let side = code.width() as u32;
    let modules = side + 2 * options.margin;
    let scale = (options.width / modules).max(1);
    let rendered = modules * scale;

    let mut canvas = RgbaImage::from_pixel(rendered, rendered, light);
    for (index, color) in code.to_colors().iter().enumerate() {
        if *color == qrcode::Color::Dark {
            let module_x = index as u32 % side + options.margin;
            let module_y = index as u32 / side + options.margin;
            for dy in 0..scale {
                for dx in 0..scale {
                    canvas.put_pixel(module_x * scale + dx, module_y * scale + dy, dark);
                }
            }
        }
    }

    let canvas = if rendered != options.width {
        imageops::resize(
            &canvas,
            options.width,
            options.width,
            imageops::FilterType::Nearest,
        )
    } else {
        canvas
    };

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| QrError::Render(e.to_string()))?;
    Ok(bytes)
}

/// Base64 data URL form for inline display.
pub fn data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

/// Attachment filename derived from the restaurant name. Characters that
/// do not survive in a filename collapse to hyphens, and a name with
/// nothing left falls back to "restaurant".
pub fn download_filename(restaurant_name: Option<&str>) -> String {
    let base = restaurant_name
        .map(sanitize_name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "restaurant".to_string());
    format!("{}-menu-qr.png", base)
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU_URL: &str = "https://scan2dine.example/menu/8f14e45f-ceea-4f31-a9ec-5b2f6d2f38a1";

    #[test]
    fn renders_default_width_png() {
        let png = render_png(MENU_URL, &QrOptions::default()).unwrap();

        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 300);
        assert_eq!(decoded.height(), 300);
    }

    #[test]
    fn honors_width_override() {
        let options = QrOptions {
            width: 240,
            ..Default::default()
        };
        let png = render_png(MENU_URL, &options).unwrap();

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 240);
        assert_eq!(decoded.height(), 240);
    }

    #[test]
    fn oversized_payload_is_an_encoding_error() {
        let payload = "a".repeat(8000);
        let err = render_png(&payload, &QrOptions::default()).unwrap_err();
        assert!(matches!(err, QrError::Encoding(_)));
    }

    #[test]
    fn zero_width_is_rejected() {
        let options = QrOptions {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            render_png(MENU_URL, &options),
            Err(QrError::InvalidWidth(0))
        ));
    }

    #[test]
    fn bad_color_is_rejected() {
        let options = QrOptions {
            dark: "#12345".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            render_png(MENU_URL, &options),
            Err(QrError::InvalidColor(_))
        ));
    }

    #[test]
    fn data_url_has_png_prefix() {
        let url = data_url(&[1, 2, 3]);
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn filename_sanitizes_the_restaurant_name() {
        assert_eq!(
            download_filename(Some("Mario's Pizza")),
            "Mario-s-Pizza-menu-qr.png"
        );
        assert_eq!(download_filename(None), "restaurant-menu-qr.png");
        assert_eq!(download_filename(Some("!!!")), "restaurant-menu-qr.png");
        assert_eq!(download_filename(Some("  ")), "restaurant-menu-qr.png");
    }
}
