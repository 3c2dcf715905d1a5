//! Image decode dispatch, inline specs, and scaling.

use std::io::Cursor;

use tessera_types::color::{Color, parse_hex_color};
use tessera_types::error::{Result, TesseraError};

/// Largest edge an inline spec or a requested size may produce.
pub const MAX_DIM: u32 = 4096;

/// Largest pixel count a decoded file may have (64 MiB of RGBA).
const MAX_PIXELS: usize = 16 * 1024 * 1024;

/// Decoded image data (RGBA pixels).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, 4 bytes per pixel.
    pub pixels: Vec<u8>,
}

impl Surface {
    /// A surface filled with one color.
    pub fn solid(color: Color, width: u32, height: u32) -> Self {
        let pixels = color.to_array().repeat(width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// RGBA value at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Image format detected from magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
    Gif,
    Unknown,
}

/// Detect image format from the first few bytes.
pub fn detect_format(data: &[u8]) -> ImageFormat {
    if data.len() < 4 {
        return ImageFormat::Unknown;
    }

    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        ImageFormat::Jpeg
    } else if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        ImageFormat::Png
    } else if data.starts_with(b"BM") {
        ImageFormat::Bmp
    } else if data.starts_with(b"GIF8") {
        ImageFormat::Gif
    } else {
        ImageFormat::Unknown
    }
}

/// Decode an image from raw file bytes.
pub fn decode_image(data: &[u8]) -> Result<Surface> {
    match detect_format(data) {
        ImageFormat::Bmp => decode_bmp(data),
        ImageFormat::Png => decode_png(data),
        format => Err(TesseraError::Image(format!(
            "unsupported image format: {format:?}"
        ))),
    }
}

/// Decode a BMP image (uncompressed 24-bit or 32-bit).
fn decode_bmp(data: &[u8]) -> Result<Surface> {
    let bad = |why: &str| TesseraError::Image(format!("bad BMP: {why}"));
    if data.len() < 54 || &data[0..2] != b"BM" {
        return Err(bad("truncated header"));
    }

    let pixel_offset = u32::from_le_bytes([data[10], data[11], data[12], data[13]]) as usize;
    let width = i32::from_le_bytes([data[18], data[19], data[20], data[21]]);
    let height = i32::from_le_bytes([data[22], data[23], data[24], data[25]]);
    let bpp = u16::from_le_bytes([data[28], data[29]]);
    let compression = u32::from_le_bytes([data[30], data[31], data[32], data[33]]);

    if width <= 0 || height == 0 {
        return Err(bad("empty dimensions"));
    }
    if compression != 0 {
        return Err(bad("compressed"));
    }
    if bpp != 24 && bpp != 32 {
        return Err(bad("unsupported bit depth"));
    }

    let w = width as u32;
    let abs_h = height.unsigned_abs();
    let bottom_up = height > 0;
    let bytes_per_pixel = (bpp / 8) as usize;
    // Rows are padded to 4-byte boundaries.
    let row_size = (w as usize * bytes_per_pixel).div_ceil(4) * 4;

    let pixel_count = (w as usize)
        .checked_mul(abs_h as usize)
        .filter(|&n| n <= MAX_PIXELS)
        .ok_or_else(|| bad("too large"))?;
    let data_end = row_size
        .checked_mul(abs_h as usize)
        .and_then(|n| n.checked_add(pixel_offset))
        .ok_or_else(|| bad("too large"))?;
    if data_end > data.len() {
        return Err(bad("pixel data out of bounds"));
    }

    let mut pixels = vec![0u8; pixel_count * 4];

    for row in 0..abs_h {
        let src_row = if bottom_up { abs_h - 1 - row } else { row };
        let src_offset = pixel_offset + src_row as usize * row_size;

        for col in 0..w {
            let src = src_offset + col as usize * bytes_per_pixel;
            let dst = (row as usize * w as usize + col as usize) * 4;

            if src + bytes_per_pixel > data.len() {
                return Err(bad("pixel data out of bounds"));
            }

            // BMP stores BGR(A).
            pixels[dst] = data[src + 2];
            pixels[dst + 1] = data[src + 1];
            pixels[dst + 2] = data[src];
            pixels[dst + 3] = if bpp == 32 { data[src + 3] } else { 255 };
        }
    }

    Ok(Surface {
        width: w,
        height: abs_h,
        pixels,
    })
}

/// Decode a PNG image, normalizing every color type to 8-bit RGBA.
fn decode_png(data: &[u8]) -> Result<Surface> {
    let png_err = |e: png::DecodingError| TesseraError::Image(format!("bad PNG: {e}"));

    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(png_err)?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(png_err)?;
    buf.truncate(info.buffer_size());

    let pixels = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(TesseraError::Image("bad PNG: palette not expanded".into()));
        },
    };

    Ok(Surface {
        width: info.width,
        height: info.height,
        pixels,
    })
}

/// Build a surface from an inline spec: `[<W>x<H>]#RRGGBB[AA]`.
///
/// Without a size prefix the surface is 1x1. A non-zero `width`/`height`
/// request overrides the size from the spec.
pub fn render_inline(spec: &str, width: u32, height: u32) -> Result<Surface> {
    let bad = || TesseraError::Image(format!("bad inline spec: {spec}"));
    let hash = spec.find('#').ok_or_else(bad)?;
    let color = parse_hex_color(&spec[hash..]).ok_or_else(bad)?;

    let (spec_w, spec_h) = match &spec[..hash] {
        "" => (1, 1),
        size => {
            let (w, h) = size.split_once('x').ok_or_else(bad)?;
            let w: u32 = w.parse().map_err(|_| bad())?;
            let h: u32 = h.parse().map_err(|_| bad())?;
            if w == 0 || h == 0 {
                return Err(bad());
            }
            (w, h)
        },
    };

    let w = if width > 0 { width } else { spec_w };
    let h = if height > 0 { height } else { spec_h };
    if w > MAX_DIM || h > MAX_DIM {
        return Err(TesseraError::Image(format!(
            "inline spec too large: {w}x{h}"
        )));
    }
    Ok(Surface::solid(color, w, h))
}

/// Final size for a requested `width`x`height` (0 = unspecified).
///
/// If only one dimension is given, the other keeps the aspect ratio.
/// Either edge ending up above [`MAX_DIM`] is an error.
pub fn target_size(natural_w: u32, natural_h: u32, width: u32, height: u32) -> Result<(u32, u32)> {
    let proportional = |num: u32, scale: u32, den: u32| -> u64 {
        if den == 0 {
            return num as u64;
        }
        (num as u64 * scale as u64 / den as u64).max(1)
    };
    let (w, h) = match (width, height) {
        (0, 0) => return Ok((natural_w, natural_h)),
        (w, 0) => (w as u64, proportional(natural_h, w, natural_w)),
        (0, h) => (proportional(natural_w, h, natural_h), h as u64),
        (w, h) => (w as u64, h as u64),
    };
    if w > MAX_DIM as u64 || h > MAX_DIM as u64 {
        return Err(TesseraError::Image(format!("target size too large: {w}x{h}")));
    }
    Ok((w as u32, h as u32))
}

/// Scale to the requested size, or return the surface unchanged when no
/// scaling is needed.
pub fn fit(surface: Surface, width: u32, height: u32) -> Result<Surface> {
    let (w, h) = target_size(surface.width, surface.height, width, height)?;
    if (w, h) == (surface.width, surface.height) || surface.width == 0 || surface.height == 0 {
        return Ok(surface);
    }
    Ok(bilinear_scale(&surface, w, h))
}

/// Scale image to exact dimensions using bilinear interpolation.
pub fn bilinear_scale(image: &Surface, new_width: u32, new_height: u32) -> Surface {
    let mut pixels = vec![0u8; new_width as usize * new_height as usize * 4];

    let x_ratio = image.width as f32 / new_width as f32;
    let y_ratio = image.height as f32 / new_height as f32;

    for y in 0..new_height {
        for x in 0..new_width {
            let src_x = x as f32 * x_ratio;
            let src_y = y as f32 * y_ratio;

            let x0 = (src_x as u32).min(image.width - 1);
            let y0 = (src_y as u32).min(image.height - 1);
            let x1 = (x0 + 1).min(image.width - 1);
            let y1 = (y0 + 1).min(image.height - 1);

            let fx = src_x - x0 as f32;
            let fy = src_y - y0 as f32;

            let dst = (y as usize * new_width as usize + x as usize) * 4;

            for c in 0..4u32 {
                let p00 = get_pixel(image, x0, y0, c);
                let p10 = get_pixel(image, x1, y0, c);
                let p01 = get_pixel(image, x0, y1, c);
                let p11 = get_pixel(image, x1, y1, c);

                let top = p00 * (1.0 - fx) + p10 * fx;
                let bottom = p01 * (1.0 - fx) + p11 * fx;
                let value = top * (1.0 - fy) + bottom * fy;

                pixels[dst + c as usize] = value.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    Surface {
        width: new_width,
        height: new_height,
        pixels,
    }
}

fn get_pixel(image: &Surface, x: u32, y: u32, channel: u32) -> f32 {
    let idx = (y as usize * image.width as usize + x as usize) * 4 + channel as usize;
    image.pixels.get(idx).map_or(0.0, |&v| v as f32)
}
