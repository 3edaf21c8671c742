use ndarray::Array2;

use crate::frame::Frame;

/// Rotate a frame by the given angle (degrees, counter-clockwise) about the
/// image center `((w-1)/2, (h-1)/2)`.
///
/// Each destination pixel is mapped back to source coordinates with the
/// inverse rotation and sampled bilinearly. Samples outside the source are
/// filled with 0.0. The output has the same dimensions as the input.
pub fn rotate(frame: &Frame, degrees: f32) -> Frame {
    let (h, w) = frame.data.dim();
    let theta = (degrees as f64).to_radians();
    let (sin_t, cos_t) = theta.sin_cos();
    let cx = (w as f64 - 1.0) * 0.5;
    let cy = (h as f64 - 1.0) * 0.5;

    let mut result = Array2::<f32>::zeros((h, w));
    for row in 0..h {
        let dy = row as f64 - cy;
        for col in 0..w {
            let dx = col as f64 - cx;
            let src_x = cos_t * dx - sin_t * dy + cx;
            let src_y = sin_t * dx + cos_t * dy + cy;
            result[[row, col]] = bilinear_sample(&frame.data, src_y, src_x);
        }
    }

    Frame::new(result)
}

pub fn bilinear_sample(data: &Array2<f32>, y: f64, x: f64) -> f32 {
    let (h, w) = data.dim();

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let fx = (x - x0 as f64) as f32;
    let fy = (y - y0 as f64) as f32;

    let sample = |r: i64, c: i64| -> f32 {
        if r >= 0 && r < h as i64 && c >= 0 && c < w as i64 {
            data[[r as usize, c as usize]]
        } else {
            0.0
        }
    };

    let v00 = sample(y0, x0);
    let v10 = sample(y0, x1);
    let v01 = sample(y1, x0);
    let v11 = sample(y1, x1);

    v00 * (1.0 - fx) * (1.0 - fy)
        + v10 * fx * (1.0 - fy)
        + v01 * (1.0 - fx) * fy
        + v11 * fx * fy
}
