use sinoscope_core::frame::Frame;
use sinoscope_core::projection::Sinogram;

/// Convert a grayscale Frame (Array2<f32> in [0.0, 1.0]) to an egui ColorImage.
pub fn frame_to_color_image(frame: &Frame) -> egui::ColorImage {
    let h = frame.height();
    let w = frame.width();
    let mut pixels = Vec::with_capacity(h * w);

    for row in 0..h {
        for col in 0..w {
            let v = (frame.data[[row, col]].clamp(0.0, 1.0) * 255.0) as u8;
            pixels.push(egui::Color32::from_gray(v));
        }
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}

/// Convert a sinogram to an egui ColorImage, normalized by its global
/// maximum so the brightest projection maps to white.
pub fn sinogram_to_color_image(sinogram: &Sinogram) -> egui::ColorImage {
    let max = sinogram.max_value();
    let scale = if max > 0.0 { 1.0 / max } else { 1.0 };

    let h = sinogram.angle_count();
    let w = sinogram.detector_count();
    let mut pixels = Vec::with_capacity(h * w);

    for row in 0..h {
        for col in 0..w {
            let v = (sinogram.data()[[row, col]] * scale).clamp(0.0, 1.0);
            pixels.push(egui::Color32::from_gray((v * 255.0) as u8));
        }
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
