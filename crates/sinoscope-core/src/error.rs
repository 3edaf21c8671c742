use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinoscopeError {
    #[error("Image format error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImage { width: usize, height: usize },

    #[error("Invalid rescale factor: {0}")]
    InvalidScaleFactor(f32),

    #[error("Projection error: {0}")]
    Projection(String),

    #[error("Angle index {angle} out of range (angle count: {angle_count})")]
    AngleOutOfRange { angle: i32, angle_count: usize },
}

pub type Result<T> = std::result::Result<T, SinoscopeError>;
