use serde::{Deserialize, Serialize};

use crate::error::{Result, SinoscopeError};
use crate::frame::Frame;
use crate::overlay::{self, LineSegment, Rect};
use crate::profile::ProfileIndex;
use crate::projection::Sinogram;
use crate::rotate::rotate;

/// Display options, overridable from `sinoscope.toml`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Angle selected when the UI opens.
    #[serde(default)]
    pub initial_angle: usize,

    /// Overlay the rotated source image under the profile curve.
    #[serde(default = "default_show_rotated_preview")]
    pub show_rotated_preview: bool,

    /// Uniform rescale factor applied to the input before padding.
    #[serde(default)]
    pub rescale: Option<f32>,
}

fn default_show_rotated_preview() -> bool {
    true
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            initial_angle: 0,
            show_rotated_preview: true,
            rescale: None,
        }
    }
}

/// Rotated source image plus its placement on the profile plot.
#[derive(Clone, Debug, PartialEq)]
pub struct RotatedPreview {
    pub frame: Frame,
    pub rect: Rect,
}

/// Render-ready description of all three views for one selected angle.
///
/// Rebuilt in full on every angle change; the rendering layer owns routing
/// these fields to display widgets.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub angle_index: usize,
    pub marker: LineSegment,
    pub profile: Vec<f32>,
    pub sinogram_rect: Rect,
    pub sinogram_axes: Rect,
    pub profile_axes: Rect,
    pub rotated_preview: Option<RotatedPreview>,
}

/// Derives ViewModels from the immutable padded image and sinogram.
///
/// Constructed once at startup; holds no mutable state. The selected angle
/// lives in the UI and is passed in on every change.
pub struct ViewController {
    padded: Frame,
    profiles: ProfileIndex,
    options: ViewOptions,
}

impl ViewController {
    pub fn new(padded: Frame, sinogram: Sinogram, options: ViewOptions) -> Self {
        Self {
            padded,
            profiles: ProfileIndex::new(sinogram),
            options,
        }
    }

    pub fn sinogram(&self) -> &Sinogram {
        self.profiles.sinogram()
    }

    pub fn padded(&self) -> &Frame {
        &self.padded
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn angle_count(&self) -> usize {
        self.profiles.angle_count()
    }

    /// Rebuild the complete ViewModel for a newly selected angle.
    ///
    /// The slider is expected to keep `angle` in range already; this
    /// re-validates rather than clamping, so a desynchronized caller fails
    /// loudly instead of rendering a view that disagrees with its slider.
    pub fn on_angle_changed(&self, angle: i32) -> Result<ViewModel> {
        let angle_count = self.profiles.angle_count();
        if angle < 0 || angle as usize >= angle_count {
            return Err(SinoscopeError::AngleOutOfRange { angle, angle_count });
        }
        let angle_index = angle as usize;

        let sinogram = self.profiles.sinogram();
        let marker = overlay::marker_line(angle_index, sinogram)?;
        let profile = self.profiles.profile_at(angle_index)?.to_vec();
        let max_value = self.profiles.max_value(angle_index)?;

        let rotated_preview = if self.options.show_rotated_preview {
            Some(RotatedPreview {
                frame: rotate(&self.padded, angle_index as f32),
                rect: overlay::profile_overlay_rect(self.padded.width(), sinogram, max_value),
            })
        } else {
            None
        };

        Ok(ViewModel {
            angle_index,
            marker,
            profile,
            sinogram_rect: overlay::sinogram_overlay_rect(sinogram),
            sinogram_axes: overlay::sinogram_axis_ranges(sinogram),
            profile_axes: overlay::profile_axis_ranges(sinogram, max_value),
            rotated_preview,
        })
    }
}
