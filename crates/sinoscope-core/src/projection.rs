use ndarray::{s, Array2, ArrayView1, Axis};
use rayon::prelude::*;

use crate::error::{Result, SinoscopeError};
use crate::frame::Frame;
use crate::rotate::rotate;

/// Number of angles in the standard half-turn sweep.
pub const SEMICIRCLE_ANGLE_COUNT: usize = 180;

/// Ordered sequence of projection angles in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleSet {
    degrees: Vec<f32>,
}

impl AngleSet {
    /// The standard sweep: 0° (inclusive) to 180° (exclusive), 1° step.
    /// Index `i` corresponds to angle `i` degrees exactly.
    pub fn semicircle() -> Self {
        Self {
            degrees: (0..SEMICIRCLE_ANGLE_COUNT).map(|i| i as f32).collect(),
        }
    }

    pub fn from_degrees(degrees: Vec<f32>) -> Self {
        Self { degrees }
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    pub fn degrees(&self) -> &[f32] {
        &self.degrees
    }
}

/// Forward Radon transform of one image: one line-integral profile per angle.
///
/// Rows are indexed `[angle][detector position]`; row `i` is the profile for
/// the i-th angle of the set it was computed from. Immutable once computed.
#[derive(Clone, Debug, PartialEq)]
pub struct Sinogram {
    data: Array2<f32>,
}

impl Sinogram {
    pub fn angle_count(&self) -> usize {
        self.data.nrows()
    }

    pub fn detector_count(&self) -> usize {
        self.data.ncols()
    }

    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn row(&self, angle_index: usize) -> ArrayView1<'_, f32> {
        self.data.row(angle_index)
    }

    /// Maximum value over the whole sinogram, for display normalization.
    pub fn max_value(&self) -> f32 {
        self.data.iter().cloned().fold(0.0f32, f32::max)
    }
}

/// Compute the sinogram of a square frame over the given angle set.
pub fn compute_sinogram(frame: &Frame, angles: &AngleSet) -> Result<Sinogram> {
    compute_sinogram_with_progress(frame, angles, || {})
}

/// Compute the sinogram, invoking `on_angle` once per completed angle.
///
/// The input must already be square (see `preprocess::pad_to_square`). The
/// image is embedded centered in a canvas spanning its diagonal extent, so
/// no content is clipped at any rotation; the detector count equals the
/// canvas side and depends only on the padded image's diagonal.
pub fn compute_sinogram_with_progress<F>(
    frame: &Frame,
    angles: &AngleSet,
    on_angle: F,
) -> Result<Sinogram>
where
    F: Fn() + Sync,
{
    if angles.is_empty() {
        return Err(SinoscopeError::Projection("empty angle set".into()));
    }
    if frame.is_empty() || !frame.is_square() {
        return Err(SinoscopeError::Projection(format!(
            "projection input must be a non-empty square image, got {}x{}",
            frame.width(),
            frame.height()
        )));
    }

    let canvas = embed_in_diagonal_canvas(frame);
    let detector_count = canvas.width();

    // One rotate-and-sum pass per angle; each profile is the per-column
    // line-integral of the canvas rotated to that angle.
    let rows: Vec<Vec<f32>> = angles
        .degrees()
        .par_iter()
        .map(|&deg| {
            let rotated = rotate(&canvas, deg);
            let sums = rotated.data.sum_axis(Axis(0)).to_vec();
            on_angle();
            sums
        })
        .collect();

    let data = Array2::from_shape_vec(
        (angles.len(), detector_count),
        rows.into_iter().flatten().collect(),
    )
    .expect("row length matches detector count");

    tracing::debug!(
        angles = angles.len(),
        detectors = detector_count,
        "sinogram computed"
    );

    Ok(Sinogram { data })
}

/// Embed a square frame centered in a zero canvas of side
/// `ceil(sqrt(2) * side)`, the diagonal extent of the input.
fn embed_in_diagonal_canvas(frame: &Frame) -> Frame {
    let side = frame.width();
    let canvas_side = (std::f64::consts::SQRT_2 * side as f64).ceil() as usize;

    let diff = canvas_side - side;
    let offset = diff / 2;

    let mut data = Array2::<f32>::zeros((canvas_side, canvas_side));
    data.slice_mut(s![offset..offset + side, offset..offset + side])
        .assign(&frame.data);

    Frame::new(data)
}

/// Offset at which a square frame of the given side lands inside the
/// diagonal projection canvas. Exposed so callers can map original pixel
/// coordinates onto the detector axis.
pub fn canvas_offset(side: usize) -> usize {
    let canvas_side = (std::f64::consts::SQRT_2 * side as f64).ceil() as usize;
    (canvas_side - side) / 2
}
