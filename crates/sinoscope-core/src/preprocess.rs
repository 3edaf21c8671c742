use ndarray::{s, Array2};

use crate::error::{Result, SinoscopeError};
use crate::frame::{Frame, Padding};
use crate::rotate::bilinear_sample;

/// Rescale a frame by a uniform factor using bilinear resampling.
///
/// The factor must be finite and positive, and the scaled dimensions must be
/// at least one pixel on each side.
pub fn rescale(frame: &Frame, factor: f32) -> Result<Frame> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(SinoscopeError::InvalidScaleFactor(factor));
    }

    let new_w = (frame.width() as f32 * factor).round() as usize;
    let new_h = (frame.height() as f32 * factor).round() as usize;
    if new_w == 0 || new_h == 0 {
        return Err(SinoscopeError::InvalidScaleFactor(factor));
    }

    let inv = 1.0 / factor as f64;
    let mut result = Array2::<f32>::zeros((new_h, new_w));
    for row in 0..new_h {
        let src_y = (row as f64 + 0.5) * inv - 0.5;
        for col in 0..new_w {
            let src_x = (col as f64 + 0.5) * inv - 0.5;
            result[[row, col]] = bilinear_sample(&frame.data, src_y, src_x);
        }
    }

    Ok(Frame::new(result))
}

/// Pad the short axis of a frame with zeros so the output is square with
/// side `max(width, height)`, content centered.
///
/// The first half of the pad is `floor(diff/2)`, the second `ceil(diff/2)`.
/// Square input comes back unchanged with `Padding::NONE`.
pub fn pad_to_square(frame: &Frame) -> (Frame, Padding) {
    let w = frame.width();
    let h = frame.height();

    if w == h {
        return (frame.clone(), Padding::NONE);
    }

    let side = w.max(h);
    let diff = w.abs_diff(h);
    let first = diff / 2;
    let second = diff - first;

    let padding = if w < h {
        Padding {
            left: first,
            right: second,
            ..Padding::NONE
        }
    } else {
        Padding {
            top: first,
            bottom: second,
            ..Padding::NONE
        }
    };

    let mut data = Array2::<f32>::zeros((side, side));
    data.slice_mut(s![
        padding.top..padding.top + h,
        padding.left..padding.left + w
    ])
    .assign(&frame.data);

    (Frame::new(data), padding)
}
