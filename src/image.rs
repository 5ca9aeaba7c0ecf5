//! Mascot image decoding
//!
//! The website hands the exporter a `data:image/png;base64,...` URL; the CLI
//! hands it raw file bytes. Both end up here. JPEG is kept as-is and embedded
//! with `DCTDecode`. PNG goes through the `image` decoder so alpha can be
//! split into a soft mask.

use std::io::Cursor;

use ::image::codecs::png::PngDecoder;
use ::image::{DynamicImage, ImageDecoder, Limits};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Largest accepted width or height in pixels
pub const MAX_DIMENSION: u32 = 8192;

/// Errors raised while decoding an image
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("malformed data URL: {0}")]
    DataUrl(String),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("unsupported image format (expected PNG or JPEG)")]
    UnsupportedFormat,
    #[error("PNG: {0}")]
    Png(#[from] ::image::ImageError),
    #[error("JPEG: {0}")]
    Jpeg(String),
    #[error("unusable image dimensions {width}x{height}")]
    Dimensions { width: u32, height: u32 },
}

/// Sample data ready to embed
#[derive(Debug, Clone, PartialEq)]
pub enum Pixels {
    /// A baseline or progressive JPEG stream, embedded untouched
    Jpeg { data: Vec<u8>, components: u8 },
    /// Decoded 8-bit samples, one or three colour channels per pixel
    Raw {
        channels: u8,
        samples: Vec<u8>,
        alpha: Option<Vec<u8>>,
    },
}

/// A decoded raster image
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Pixels,
}

impl Image {
    /// Decode PNG, JPEG, or a base64 data URL wrapping either
    pub fn decode(input: &[u8]) -> Result<Self, ImageError> {
        let trimmed = input.trim_ascii();
        if trimmed.starts_with(b"data:") {
            let bytes = decode_data_url(trimmed)?;
            return Self::decode_binary(&bytes);
        }
        Self::decode_binary(input)
    }

    fn decode_binary(bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.starts_with(&PNG_SIGNATURE) {
            decode_png(bytes)
        } else if bytes.starts_with(&[0xFF, 0xD8]) {
            decode_jpeg(bytes)
        } else {
            Err(ImageError::UnsupportedFormat)
        }
    }
}

fn decode_data_url(url: &[u8]) -> Result<Vec<u8>, ImageError> {
    let text = std::str::from_utf8(url)
        .map_err(|_| ImageError::DataUrl("not valid UTF-8".to_string()))?;
    let (header, payload) = text
        .split_once(',')
        .ok_or_else(|| ImageError::DataUrl("missing ',' separator".to_string()))?;
    if !header.ends_with(";base64") {
        return Err(ImageError::DataUrl(format!(
            "only base64 payloads are supported, got '{}'",
            header
        )));
    }
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

fn decode_png(bytes: &[u8]) -> Result<Image, ImageError> {
    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_DIMENSION);
    limits.max_image_height = Some(MAX_DIMENSION);
    let decoder = PngDecoder::with_limits(Cursor::new(bytes), limits)?;

    let (width, height) = decoder.dimensions();
    check_dimensions(width, height)?;
    let decoded = DynamicImage::from_decoder(decoder)?;

    // Palette and 16-bit sources come out of the decoder expanded; only the
    // channel layout matters from here on.
    let color = decoded.color();
    let (channels, samples, alpha) = match (color.has_color(), color.has_alpha()) {
        (false, false) => (1, decoded.into_luma8().into_raw(), None),
        (true, false) => (3, decoded.into_rgb8().into_raw(), None),
        (false, true) => split_alpha(decoded.into_luma_alpha8().into_raw(), 1),
        (true, true) => split_alpha(decoded.into_rgba8().into_raw(), 3),
    };

    Ok(Image {
        width,
        height,
        pixels: Pixels::Raw {
            channels,
            samples,
            alpha,
        },
    })
}

fn check_dimensions(width: u32, height: u32) -> Result<(), ImageError> {
    let usable = |side: u32| (1..=MAX_DIMENSION).contains(&side);
    if usable(width) && usable(height) {
        Ok(())
    } else {
        Err(ImageError::Dimensions { width, height })
    }
}

/// Separate interleaved samples into colour channels and an alpha plane
fn split_alpha(interleaved: Vec<u8>, channels: u8) -> (u8, Vec<u8>, Option<Vec<u8>>) {
    let bpp = usize::from(channels) + 1;
    let pixels = interleaved.len() / bpp;
    let mut samples = Vec::with_capacity(pixels * usize::from(channels));
    let mut alpha = Vec::with_capacity(pixels);
    for px in interleaved.chunks_exact(bpp) {
        let (color, a) = px.split_at(usize::from(channels));
        samples.extend_from_slice(color);
        alpha.push(a[0]);
    }
    (channels, samples, Some(alpha))
}

fn decode_jpeg(bytes: &[u8]) -> Result<Image, ImageError> {
    let mut pos = 2;
    while pos + 4 <= bytes.len() {
        if bytes[pos] != 0xFF {
            return Err(ImageError::Jpeg(format!("expected marker at offset {}", pos)));
        }
        let marker = bytes[pos + 1];
        if marker == 0xFF {
            // Fill byte
            pos += 1;
            continue;
        }
        if (0xD0..=0xD7).contains(&marker) || marker == 0x01 {
            pos += 2;
            continue;
        }
        let len = u16::from_be_bytes([bytes[pos + 2], bytes[pos + 3]]) as usize;
        let segment = bytes
            .get(pos + 4..pos + 2 + len)
            .ok_or_else(|| ImageError::Jpeg("truncated segment".to_string()))?;

        let is_sof = matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC);
        if is_sof {
            if segment.len() < 6 {
                return Err(ImageError::Jpeg("short frame header".to_string()));
            }
            let height = u16::from_be_bytes([segment[1], segment[2]]) as u32;
            let width = u16::from_be_bytes([segment[3], segment[4]]) as u32;
            let components = segment[5];
            check_dimensions(width, height)?;
            if !matches!(components, 1 | 3 | 4) {
                return Err(ImageError::Jpeg(format!("{} components", components)));
            }
            return Ok(Image {
                width,
                height,
                pixels: Pixels::Jpeg {
                    data: bytes.to_vec(),
                    components,
                },
            });
        }
        if marker == 0xDA {
            break;
        }
        pos += 2 + len;
    }
    Err(ImageError::Jpeg("no frame header before scan data".to_string()))
}
