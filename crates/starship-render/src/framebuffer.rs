use std::path::Path;

use starship_core::Color;

use crate::target::{DrawCommand, DrawTarget};

#[derive(Debug, thiserror::Error)]
pub enum FramebufferError {
    #[error("failed to write image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// CPU-side RGBA8 render target.
///
/// Rectangles overwrite the covered pixels with their color, alpha included.
/// There is no blending.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.to_array(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_array());
    }

    /// Color at (x, y), or None outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, a] = self.pixels[(y * self.width + x) as usize];
        Some(Color::new(r, g, b, a))
    }

    /// Raw RGBA bytes, row-major from the top-left.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    /// Write the current contents as a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), FramebufferError> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|source| FramebufferError::Image {
            path: path.display().to_string(),
            source,
        })
    }

    /// Pixel span [start, end) covered by an edge pair, clipped to `limit`.
    /// A non-empty extent always covers at least one pixel.
    fn span(start: f64, extent: f64, limit: u32) -> Option<(u32, u32)> {
        if !start.is_finite() || !extent.is_finite() || extent <= 0.0 {
            return None;
        }
        let lo = start.round();
        let hi = (start + extent).round().max(lo + 1.0);
        let lo = lo.max(0.0);
        let hi = hi.min(limit as f64);
        if lo >= hi {
            return None;
        }
        Some((lo as u32, hi as u32))
    }
}

impl DrawTarget for Framebuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, command: &DrawCommand) {
        let rect = command.rect;
        let Some((x0, x1)) = Self::span(rect.x, rect.width, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::span(rect.y, rect.height, self.height) else {
            return;
        };

        let rgba = command.color.to_array();
        for y in y0..y1 {
            let row = (y * self.width) as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(rgba);
        }
    }
}
