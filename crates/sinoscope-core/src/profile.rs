use ndarray::ArrayView1;

use crate::error::{Result, SinoscopeError};
use crate::projection::Sinogram;

/// Angle-indexed access to the rows of a computed sinogram.
///
/// Owns the sinogram; rows are handed out as borrowed read-only views.
#[derive(Clone, Debug)]
pub struct ProfileIndex {
    sinogram: Sinogram,
}

impl ProfileIndex {
    pub fn new(sinogram: Sinogram) -> Self {
        Self { sinogram }
    }

    pub fn sinogram(&self) -> &Sinogram {
        &self.sinogram
    }

    pub fn angle_count(&self) -> usize {
        self.sinogram.angle_count()
    }

    /// The detector-position profile for one angle index, as a view into
    /// the sinogram row. No copy; callers must not hold it across mutation
    /// (there is none — the sinogram is immutable).
    pub fn profile_at(&self, angle_index: usize) -> Result<ArrayView1<'_, f32>> {
        self.check_bounds(angle_index)?;
        Ok(self.sinogram.row(angle_index))
    }

    /// Maximum value of one profile, used to scale the rotated-preview
    /// overlay to the profile's value range. 0.0 for an all-zero row.
    pub fn max_value(&self, angle_index: usize) -> Result<f32> {
        let row = self.profile_at(angle_index)?;
        Ok(row.iter().cloned().fold(0.0f32, f32::max))
    }

    fn check_bounds(&self, angle_index: usize) -> Result<()> {
        if angle_index >= self.sinogram.angle_count() {
            return Err(SinoscopeError::AngleOutOfRange {
                angle: angle_index as i32,
                angle_count: self.sinogram.angle_count(),
            });
        }
        Ok(())
    }
}
