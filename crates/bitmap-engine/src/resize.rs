//! Reflect-boundary resampling to a fixed resolution.
//!
//! Each axis is handled separately, vertical first. When an axis shrinks, it is
//! low-passed with a Gaussian of `sigma = (scale - 1) / 2` (truncated at 4 sigma)
//! so that point sampling a large image down to a few cells does not alias, and
//! then sampled bilinearly at output pixel centres. The low-pass is only
//! evaluated at the source positions the interpolation reads, so the cost scales
//! with the output size times the kernel width rather than with the source area.
//! Coordinates falling outside the source are mirrored back symmetrically:
//! `-1 -> 0`, `len -> len - 1`.

use std::borrow::Cow;

use tracing::debug;

use crate::pixel::{PixelArray, Resolution};

/// Gaussian kernel radius in multiples of sigma.
const TRUNCATE: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

/// Resample `image` to `target`, keeping its channel count.
///
/// Samples of the result stay within `[0, 1]`.
pub fn resample(image: &PixelArray, target: Resolution) -> PixelArray {
    let (orig_h, orig_w) = (image.height(), image.width());
    debug!(
        orig_h,
        orig_w,
        channels = image.channels(),
        new_h = target.height,
        new_w = target.width,
        "Resampling image"
    );

    let mut current = Cow::Borrowed(image);
    for (axis, len, out_len) in [
        (Axis::Vertical, orig_h, target.height),
        (Axis::Horizontal, orig_w, target.width),
    ] {
        let kernel = gaussian_kernel(antialias_sigma(len, out_len));
        current = Cow::Owned(map_axis(&current, axis, out_len, |src, dst| {
            resample_line(src, dst, &kernel)
        }));
    }

    // Keep samples inside the normalized range.
    let clamped = current.samples().iter().map(|v| v.clamp(0.0, 1.0)).collect();
    PixelArray::from_raw(target.height, target.width, current.channels(), clamped)
}

/// Low-pass width for shrinking `len` samples to `out_len`; zero when not shrinking.
fn antialias_sigma(len: usize, out_len: usize) -> f64 {
    let scale = len as f64 / out_len as f64;
    ((scale - 1.0) / 2.0).max(0.0)
}

/// Normalized, symmetric Gaussian taps. A non-positive `sigma` is the identity.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    if sigma <= 0.0 {
        return vec![1.0];
    }
    let radius = (TRUNCATE * sigma + 0.5) as isize;
    let taps: Vec<f64> = (-radius..=radius)
        .map(|k| {
            let x = k as f64 / sigma;
            (-0.5 * x * x).exp()
        })
        .collect();
    let sum: f64 = taps.iter().sum();
    taps.into_iter().map(|t| t / sum).collect()
}

/// Mirror an out-of-range index back into `0..len`, repeating the edge sample.
#[inline]
fn reflect_index(i: isize, len: usize) -> usize {
    let period = 2 * len as isize;
    let m = i.rem_euclid(period);
    if m < len as isize {
        m as usize
    } else {
        (period - 1 - m) as usize
    }
}

/// Low-passed value of `src` at index `i`, mirrored into range first.
#[inline]
fn filtered_at(src: &[f64], i: isize, kernel: &[f64]) -> f64 {
    let centre = reflect_index(i, src.len()) as isize;
    let radius = (kernel.len() / 2) as isize;
    kernel
        .iter()
        .enumerate()
        .map(|(k, w)| w * src[reflect_index(centre + k as isize - radius, src.len())])
        .sum()
}

/// Linear interpolation of the low-passed line at output pixel centres:
/// `src = (i + 0.5) * scale - 0.5`.
fn resample_line(src: &[f64], dst: &mut [f64], kernel: &[f64]) {
    let scale = src.len() as f64 / dst.len() as f64;
    for (i, out) in dst.iter_mut().enumerate() {
        let pos = (i as f64 + 0.5) * scale - 0.5;
        let lo = pos.floor();
        let t = pos - lo;
        let a = filtered_at(src, lo as isize, kernel);
        let b = filtered_at(src, lo as isize + 1, kernel);
        *out = a + (b - a) * t;
    }
}

/// Apply `line_fn` to every 1-D line of `image` along `axis`, producing lines of `out_len`.
fn map_axis(
    image: &PixelArray,
    axis: Axis,
    out_len: usize,
    mut line_fn: impl FnMut(&[f64], &mut [f64]),
) -> PixelArray {
    let (h, w, c) = (image.height(), image.width(), image.channels());
    let (len, across) = match axis {
        Axis::Vertical => (h, w),
        Axis::Horizontal => (w, h),
    };
    let (out_h, out_w) = match axis {
        Axis::Vertical => (out_len, w),
        Axis::Horizontal => (h, out_len),
    };

    let mut data = vec![0.0; out_h * out_w * c];
    let mut line = vec![0.0; len];
    let mut out_line = vec![0.0; out_len];

    for q in 0..across {
        for ch in 0..c {
            for (p, v) in line.iter_mut().enumerate() {
                *v = match axis {
                    Axis::Vertical => image.get(p, q, ch),
                    Axis::Horizontal => image.get(q, p, ch),
                };
            }
            line_fn(&line, &mut out_line);
            for (p, &v) in out_line.iter().enumerate() {
                let (y, x) = match axis {
                    Axis::Vertical => (p, q),
                    Axis::Horizontal => (q, p),
                };
                data[(y * out_w + x) * c + ch] = v;
            }
        }
    }

    PixelArray::from_raw(out_h, out_w, c, data)
}
