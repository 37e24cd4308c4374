//! Bilinear affine warp on interleaved 8-bit buffers.
//!
//! Coordinates are computed in 10-bit fixed point and snapped to a 1/32
//! pixel grid; interpolation weights use 15-bit fixed point. Samples outside
//! the source read as zero. This reproduces OpenCV's `warpAffine` with
//! `INTER_LINEAR` and a constant zero border bit for bit.

use crate::geometry::{Affine, Size};

const INTER_BITS: u32 = 5;
const INTER_TAB_SIZE: i64 = 1 << INTER_BITS;
const AB_BITS: u32 = 10;
const AB_SCALE: f64 = (1 << AB_BITS) as f64;
const REMAP_COEF_BITS: u32 = 15;

/// Warp `src` through the forward transform `matrix` onto a `dst_size`
/// canvas.
pub(crate) fn warp_affine(
    src: &[u8],
    src_size: Size,
    channels: usize,
    matrix: &Affine,
    dst_size: Size,
) -> Vec<u8> {
    let mut dst = vec![0u8; dst_size.area() * channels];
    if src_size.is_empty() || dst_size.is_empty() || channels == 0 {
        return dst;
    }

    let m = matrix.invert().0;
    let round_delta = (AB_SCALE as i64) / INTER_TAB_SIZE / 2;
    let dst_width = dst_size.width as usize;

    let adelta: Vec<i64> = (0..dst_width)
        .map(|x| fixed(m[0] * x as f64 * AB_SCALE))
        .collect();
    let bdelta: Vec<i64> = (0..dst_width)
        .map(|x| fixed(m[3] * x as f64 * AB_SCALE))
        .collect();

    let source = Source {
        data: src,
        width: i64::from(src_size.width),
        height: i64::from(src_size.height),
        channels,
    };

    for (y, row) in dst.chunks_exact_mut(dst_width * channels).enumerate() {
        let x0 = fixed((m[1] * y as f64 + m[2]) * AB_SCALE) + round_delta;
        let y0 = fixed((m[4] * y as f64 + m[5]) * AB_SCALE) + round_delta;

        for (x, out) in row.chunks_exact_mut(channels).enumerate() {
            let sx = (x0 + adelta[x]) >> (AB_BITS - INTER_BITS);
            let sy = (y0 + bdelta[x]) >> (AB_BITS - INTER_BITS);
            let weights = weights(sx & (INTER_TAB_SIZE - 1), sy & (INTER_TAB_SIZE - 1));
            source.sample(sx >> INTER_BITS, sy >> INTER_BITS, weights, out);
        }
    }

    dst
}

/// Round to the nearest integer (ties to even), saturating.
fn fixed(value: f64) -> i64 {
    i64::from(value.round_ties_even() as i32)
}

/// Fixed-point bilinear weights for a sub-pixel offset on the 1/32 grid.
///
/// The products are exact, so the four weights always sum to `1 << 15`.
fn weights(fx: i64, fy: i64) -> [i64; 4] {
    let scale = (1 << REMAP_COEF_BITS) / (INTER_TAB_SIZE * INTER_TAB_SIZE);
    [
        (INTER_TAB_SIZE - fy) * (INTER_TAB_SIZE - fx) * scale,
        (INTER_TAB_SIZE - fy) * fx * scale,
        fy * (INTER_TAB_SIZE - fx) * scale,
        fy * fx * scale,
    ]
}

struct Source<'a> {
    data: &'a [u8],
    width: i64,
    height: i64,
    channels: usize,
}

impl Source<'_> {
    fn pixel(&self, x: i64, y: i64, channel: usize) -> i64 {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return 0;
        }
        let index = (y * self.width + x) as usize * self.channels + channel;
        i64::from(self.data[index])
    }

    fn sample(&self, sx: i64, sy: i64, weights: [i64; 4], out: &mut [u8]) {
        for (channel, value) in out.iter_mut().enumerate() {
            let sum = self.pixel(sx, sy, channel) * weights[0]
                + self.pixel(sx + 1, sy, channel) * weights[1]
                + self.pixel(sx, sy + 1, channel) * weights[2]
                + self.pixel(sx + 1, sy + 1, channel) * weights[3];
            let rounded = (sum + (1 << (REMAP_COEF_BITS - 1))) >> REMAP_COEF_BITS;
            *value = rounded.clamp(0, 255) as u8;
        }
    }
}
