use ndarray::Array2;

/// A single grayscale image buffer.
/// Pixel values are f32 in [0.0, 1.0].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Zero-pixel border added to each side of a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Padding {
    pub const NONE: Padding = Padding {
        top: 0,
        bottom: 0,
        left: 0,
        right: 0,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}
