//! Bilinear resize on interleaved 8-bit buffers.
//!
//! Pixel centres sit at half-integer positions. Coefficients are 11-bit
//! fixed point, the horizontal pass keeps integer sums and the vertical pass
//! rounds once at the end, which matches OpenCV's `resize` with
//! `INTER_LINEAR` on 8-bit data. Edges clamp to the nearest source pixel.

use crate::geometry::Size;

const COEF_BITS: u32 = 11;
const COEF_SCALE: f32 = (1 << COEF_BITS) as f32;
const CAST_BITS: u32 = COEF_BITS * 2;

/// Resize `src` (of `src_size`) to `dst_size`.
///
/// Equal sizes copy; an empty source yields a black image; an empty target
/// yields an empty buffer.
pub(crate) fn resize_linear(
    src: &[u8],
    src_size: Size,
    channels: usize,
    dst_size: Size,
) -> Vec<u8> {
    if dst_size.is_empty() || channels == 0 {
        return vec![0; dst_size.area() * channels];
    }
    if src_size.is_empty() {
        return vec![0; dst_size.area() * channels];
    }
    if src_size == dst_size {
        return src.to_vec();
    }

    let columns = horizontal_taps(src_size.width, dst_size.width);
    let rows = vertical_taps(src_size.height, dst_size.height);

    let src_stride = src_size.width as usize * channels;
    let dst_stride = dst_size.width as usize * channels;

    let horizontal: Vec<Vec<i64>> = src
        .chunks_exact(src_stride)
        .map(|row| resize_row(row, &columns, channels))
        .collect();

    let last_row = src_size.height as i64 - 1;
    let mut dst = vec![0u8; dst_size.area() * channels];

    for (out, tap) in dst.chunks_exact_mut(dst_stride).zip(&rows) {
        let upper = &horizontal[tap.offset.clamp(0, last_row) as usize];
        let lower = &horizontal[(tap.offset + 1).clamp(0, last_row) as usize];
        let [b0, b1] = tap.coefficients;

        for ((value, &s0), &s1) in out.iter_mut().zip(upper).zip(lower) {
            let sum = s0 * b0 + s1 * b1 + (1 << (CAST_BITS - 1));
            *value = (sum >> CAST_BITS).clamp(0, 255) as u8;
        }
    }

    dst
}

/// Source offset and fixed-point coefficients for one output coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tap {
    offset: i64,
    coefficients: [i64; 2],
}

fn source_position(index: u32, scale: f64) -> (i64, f32) {
    let position = ((f64::from(index) + 0.5) * scale - 0.5) as f32;
    let offset = position.floor();
    (offset as i64, position - offset)
}

fn scale_between(src_len: u32, dst_len: u32) -> f64 {
    1.0 / (f64::from(dst_len) / f64::from(src_len))
}

/// Columns clamp the position itself at both edges.
fn horizontal_taps(src_len: u32, dst_len: u32) -> Vec<Tap> {
    let scale = scale_between(src_len, dst_len);
    let last = i64::from(src_len) - 1;

    (0..dst_len)
        .map(|index| {
            let (mut offset, mut fraction) = source_position(index, scale);
            if offset < 0 {
                offset = 0;
                fraction = 0.0;
            }
            if offset >= last {
                offset = last;
                fraction = 0.0;
            }
            Tap {
                offset,
                coefficients: coefficients(fraction),
            }
        })
        .collect()
}

/// Rows keep the raw position; out-of-range rows are clamped on fetch.
fn vertical_taps(src_len: u32, dst_len: u32) -> Vec<Tap> {
    let scale = scale_between(src_len, dst_len);

    (0..dst_len)
        .map(|index| {
            let (offset, fraction) = source_position(index, scale);
            Tap {
                offset,
                coefficients: coefficients(fraction),
            }
        })
        .collect()
}

fn coefficients(fraction: f32) -> [i64; 2] {
    [to_fixed((1.0 - fraction) * COEF_SCALE), to_fixed(fraction * COEF_SCALE)]
}

/// Round to the nearest `i16` (ties to even), saturating.
fn to_fixed(value: f32) -> i64 {
    let rounded = value.round_ties_even();
    i64::from(rounded.clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16)
}

fn resize_row(row: &[u8], columns: &[Tap], channels: usize) -> Vec<i64> {
    let last = row.len() / channels - 1;
    let mut out = Vec::with_capacity(columns.len() * channels);

    for tap in columns {
        let left = tap.offset as usize;
        let right = (left + 1).min(last);
        let [a0, a1] = tap.coefficients;
        for channel in 0..channels {
            let s0 = i64::from(row[left * channels + channel]);
            let s1 = i64::from(row[right * channels + channel]);
            out.push(s0 * a0 + s1 * a1);
        }
    }

    out
}
