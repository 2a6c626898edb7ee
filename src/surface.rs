//! Pixel surfaces: the bounded RGB grids every algorithm reads and writes.
//!
//! [`PixelSurface`] is the seam between the raster core and whatever owns the
//! pixels. Implementors provide unchecked `pixel`/`copy_pixel`; the provided
//! `get`/`set` methods clip to the surface and are what the algorithms use,
//! so out-of-range coordinates are always skipped rather than reported.
//!
//! Two RGB24 (3 bytes per pixel) implementations are included:
//!
//! - [`RgbBuffer`]: owns its bytes. Convenient for tests, patterns, and
//!   off-screen canvases.
//! - [`RgbView`]: borrows a caller-supplied byte slice with an explicit row
//!   stride, e.g. a window framebuffer, without copying.

use crate::basics::{Point, RectI};
use crate::color::Rgb8;
use crate::error::{Error, Result};

/// Bytes per pixel for RGB24.
const BPP: usize = 3;

// ============================================================================
// PixelSurface trait
// ============================================================================

/// Rectangular grid of RGB colors with fixed dimensions.
pub trait PixelSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Color at (x, y). The caller guarantees `inbox(x, y)`.
    fn pixel(&self, x: i32, y: i32) -> Rgb8;

    /// Overwrite the pixel at (x, y). The caller guarantees `inbox(x, y)`.
    fn copy_pixel(&mut self, x: i32, y: i32, c: Rgb8);

    /// Whether (x, y) addresses a pixel of this surface.
    #[inline]
    fn inbox(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Clip box covering the whole surface (inclusive corners).
    fn bounds(&self) -> RectI {
        RectI::new(0, 0, self.width() as i32 - 1, self.height() as i32 - 1)
    }

    /// Clipped read: `None` outside the surface.
    #[inline]
    fn get(&self, x: i32, y: i32) -> Option<Rgb8> {
        if self.inbox(x, y) {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Clipped write. Returns `false` (and writes nothing) outside the surface.
    #[inline]
    fn set(&mut self, x: i32, y: i32, c: Rgb8) -> bool {
        if self.inbox(x, y) {
            self.copy_pixel(x, y, c);
            true
        } else {
            false
        }
    }

    /// Clipped read at a [`Point`].
    #[inline]
    fn get_at(&self, p: Point) -> Option<Rgb8> {
        self.get(p.x, p.y)
    }

    /// Clipped write at a [`Point`].
    #[inline]
    fn set_at(&mut self, p: Point, c: Rgb8) -> bool {
        self.set(p.x, p.y, c)
    }

    /// Blend `c` into the existing pixel with coverage `alpha` (clipped).
    fn blend_pixel(&mut self, x: i32, y: i32, c: Rgb8, alpha: f64) -> bool {
        match self.get(x, y) {
            Some(bg) => {
                self.copy_pixel(x, y, bg.blend(c, alpha));
                true
            }
            None => false,
        }
    }

    /// Overwrite the inclusive horizontal run `x1..=x2` on row `y` (clipped).
    fn copy_hline(&mut self, x1: i32, y: i32, x2: i32, c: Rgb8) {
        let (mut x1, mut x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        if y < 0 || y >= self.height() as i32 || x2 < 0 || x1 >= self.width() as i32 {
            return;
        }
        x1 = x1.max(0);
        x2 = x2.min(self.width() as i32 - 1);
        for x in x1..=x2 {
            self.copy_pixel(x, y, c);
        }
    }

    /// Fill the whole surface with one color.
    fn clear(&mut self, c: Rgb8) {
        let w = self.width() as i32;
        for y in 0..self.height() as i32 {
            self.copy_hline(0, y, w - 1, c);
        }
    }
}

impl<S: PixelSurface + ?Sized> PixelSurface for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }
    fn height(&self) -> u32 {
        (**self).height()
    }
    fn pixel(&self, x: i32, y: i32) -> Rgb8 {
        (**self).pixel(x, y)
    }
    fn copy_pixel(&mut self, x: i32, y: i32, c: Rgb8) {
        (**self).copy_pixel(x, y, c)
    }
}

fn check_dims(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::ZeroSized { width, height });
    }
    Ok(())
}

#[inline]
fn read_rgb(row: &[u8], x: i32) -> Rgb8 {
    let off = x as usize * BPP;
    Rgb8::new(row[off], row[off + 1], row[off + 2])
}

#[inline]
fn write_rgb(row: &mut [u8], x: i32, c: Rgb8) {
    let off = x as usize * BPP;
    row[off] = c.r;
    row[off + 1] = c.g;
    row[off + 2] = c.b;
}

// ============================================================================
// RgbBuffer: owned RGB24 pixels
// ============================================================================

/// Owned RGB24 surface, rows stored top-down with no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RgbBuffer {
    /// Create a black surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgb8::BLACK)
    }

    /// Create a surface cleared to `color`.
    pub fn filled(width: u32, height: u32, color: Rgb8) -> Result<Self> {
        check_dims(width, height)?;
        let n = width as usize * height as usize;
        let mut data = Vec::with_capacity(n * BPP);
        for _ in 0..n {
            data.extend_from_slice(&color.to_array());
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Wrap existing tightly packed RGB24 bytes.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_dims(width, height)?;
        let needed = width as usize * height as usize * BPP;
        if data.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: data.len(),
            });
        }
        let mut data = data;
        data.truncate(needed);
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a surface by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(i32, i32) -> Rgb8) -> Result<Self> {
        let mut buf = Self::new(width, height)?;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                buf.copy_pixel(x, y, f(x, y));
            }
        }
        Ok(buf)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Row `y` as a byte slice of `width * 3` bytes.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let stride = self.width as usize * BPP;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.width as usize * BPP;
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }
}

impl PixelSurface for RgbBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: i32, y: i32) -> Rgb8 {
        read_rgb(self.row(y as u32), x)
    }

    fn copy_pixel(&mut self, x: i32, y: i32, c: Rgb8) {
        write_rgb(self.row_mut(y as u32), x, c);
    }
}

// ============================================================================
// RgbView: borrowed RGB24 pixels with explicit stride
// ============================================================================

/// RGB24 surface over a caller-owned byte slice.
///
/// Rows start every `stride` bytes; bytes past `width * 3` in a row are
/// padding and never touched.
#[derive(Debug)]
pub struct RgbView<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a> RgbView<'a> {
    pub fn new(data: &'a mut [u8], width: u32, height: u32, stride: usize) -> Result<Self> {
        check_dims(width, height)?;
        let row_len = width as usize * BPP;
        if stride < row_len {
            return Err(Error::InvalidStride { stride, width });
        }
        let needed = (height as usize - 1) * stride + row_len;
        if data.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    fn row(&self, y: i32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * BPP]
    }

    fn row_mut(&mut self, y: i32) -> &mut [u8] {
        let start = y as usize * self.stride;
        let len = self.width as usize * BPP;
        &mut self.data[start..start + len]
    }
}

impl PixelSurface for RgbView<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: i32, y: i32) -> Rgb8 {
        read_rgb(self.row(y), x)
    }

    fn copy_pixel(&mut self, x: i32, y: i32, c: Rgb8) {
        write_rgb(self.row_mut(y), x, c);
    }
}

// ============================================================================
// Tests
// ============================================================================
