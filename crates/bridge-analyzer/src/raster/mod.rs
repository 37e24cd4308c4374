//! Image-like values the transform pipeline can operate on.
//!
//! The pipeline needs four things from a frame: a cheap deep copy, an affine
//! warp, a rectangular cut and a resize. [`Raster`] captures that set and is
//! implemented for every 8-bit [`ImageBuffer`], whatever its channel count.
//! [`AsRaster`] lets iterators accept both owned frames and references to
//! frames.

mod resize;
mod warp;

use image::{ImageBuffer, Pixel};

use crate::geometry::{Affine, Rect, Size};

/// Operations required from a frame flowing through the pipeline.
pub trait Raster: Clone {
    /// Width and height in pixels.
    fn size(&self) -> Size;

    /// Warp through the forward transform `matrix` onto a `size` canvas.
    fn warp_affine(&self, matrix: &Affine, size: Size) -> Self;

    /// Cut out `roi`; parts outside the frame read as zero.
    fn crop(&self, roi: Rect) -> Self;

    /// Bilinear resize to `size`.
    fn resize(&self, size: Size) -> Self;
}

/// Access to the raster behind a frame or a reference to one.
pub trait AsRaster {
    type Raster: Raster;

    fn as_raster(&self) -> &Self::Raster;
}

impl<T: AsRaster + ?Sized> AsRaster for &T {
    type Raster = T::Raster;

    fn as_raster(&self) -> &Self::Raster {
        (**self).as_raster()
    }
}

impl<P> AsRaster for ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    type Raster = Self;

    fn as_raster(&self) -> &Self {
        self
    }
}

impl<P> Raster for ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    fn warp_affine(&self, matrix: &Affine, size: Size) -> Self {
        let data = warp::warp_affine(
            self.as_raw(),
            Raster::size(self),
            channels::<P>(),
            matrix,
            size,
        );
        from_raw(size, data)
    }

    fn crop(&self, roi: Rect) -> Self {
        let data = crop(self.as_raw(), Raster::size(self), channels::<P>(), roi);
        from_raw(roi.size(), data)
    }

    fn resize(&self, size: Size) -> Self {
        let data = resize::resize_linear(self.as_raw(), Raster::size(self), channels::<P>(), size);
        from_raw(size, data)
    }
}

fn channels<P: Pixel>() -> usize {
    usize::from(P::CHANNEL_COUNT)
}

fn from_raw<P>(size: Size, data: Vec<u8>) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    // Kernels always return exactly `area * channels` bytes.
    ImageBuffer::from_raw(size.width, size.height, data)
        .unwrap_or_else(|| ImageBuffer::new(size.width, size.height))
}

/// Copy the overlap of `roi` and the source into a zeroed `roi`-sized buffer.
fn crop(src: &[u8], src_size: Size, channels: usize, roi: Rect) -> Vec<u8> {
    let mut dst = vec![0u8; roi.size().area() * channels];

    let left = i64::from(roi.x).max(0);
    let right = (i64::from(roi.x) + i64::from(roi.width)).min(i64::from(src_size.width));
    if left >= right {
        return dst;
    }

    let span = (right - left) as usize * channels;
    let src_stride = src_size.width as usize * channels;
    let dst_stride = roi.width as usize * channels;
    let dst_column = (left - i64::from(roi.x)) as usize * channels;

    for row in 0..i64::from(roi.height) {
        let sy = i64::from(roi.y) + row;
        if sy < 0 || sy >= i64::from(src_size.height) {
            continue;
        }
        let from = sy as usize * src_stride + left as usize * channels;
        let to = row as usize * dst_stride + dst_column;
        dst[to..to + span].copy_from_slice(&src[from..from + span]);
    }

    dst
}
