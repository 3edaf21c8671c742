use crate::error::{Result, SinoscopeError};
use crate::projection::Sinogram;

/// Axis-aligned box in plot coordinates. Used both for image placement
/// rectangles and for axis ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) * 0.5,
            (self.y_min + self.y_max) * 0.5,
        )
    }
}

/// Line segment in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Marker for the selected angle on the sinogram overview: a horizontal
/// segment spanning the full detector range.
///
/// The overview's Y axis is angle, inverted so angle 0 sits at the top:
/// `y = (angle_count - 1) - angle_index`.
pub fn marker_line(angle_index: usize, sinogram: &Sinogram) -> Result<LineSegment> {
    if angle_index >= sinogram.angle_count() {
        return Err(SinoscopeError::AngleOutOfRange {
            angle: angle_index as i32,
            angle_count: sinogram.angle_count(),
        });
    }

    let y = (sinogram.angle_count() - 1 - angle_index) as f64;
    Ok(LineSegment {
        x0: 0.0,
        y0: y,
        x1: sinogram.detector_count() as f64,
        y1: y,
    })
}

/// Placement of the sinogram image on the overview plot: anchored at
/// (0, angle_count), stretched over the full detector and angle ranges.
/// Aspect ratio is not preserved.
pub fn sinogram_overlay_rect(sinogram: &Sinogram) -> Rect {
    Rect {
        x_min: 0.0,
        x_max: sinogram.detector_count() as f64,
        y_min: 0.0,
        y_max: sinogram.angle_count() as f64,
    }
}

/// Placement of the rotated-image preview under the profile curve:
/// horizontally centered on the detector axis over the (square) image's
/// footprint, vertically spanning 0 up to the profile maximum.
pub fn profile_overlay_rect(padded_side: usize, sinogram: &Sinogram, max_value: f32) -> Rect {
    let x_min = sinogram.detector_count() as f64 / 2.0 - padded_side as f64 / 2.0;
    Rect {
        x_min,
        x_max: x_min + padded_side as f64,
        y_min: 0.0,
        y_max: max_value as f64,
    }
}

/// Axis bounds for the sinogram overview plot.
pub fn sinogram_axis_ranges(sinogram: &Sinogram) -> Rect {
    sinogram_overlay_rect(sinogram)
}

/// Axis bounds for the per-angle profile plot, with headroom above the
/// profile maximum.
pub fn profile_axis_ranges(sinogram: &Sinogram, max_value: f32) -> Rect {
    Rect {
        x_min: 0.0,
        x_max: sinogram.detector_count() as f64,
        y_min: 0.0,
        y_max: max_value as f64 * 1.05,
    }
}
