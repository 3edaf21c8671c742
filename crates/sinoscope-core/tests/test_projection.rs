use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::Array2;

use sinoscope_core::error::SinoscopeError;
use sinoscope_core::frame::Frame;
use sinoscope_core::preprocess::pad_to_square;
use sinoscope_core::projection::{
    canvas_offset, compute_sinogram, compute_sinogram_with_progress, AngleSet,
    SEMICIRCLE_ANGLE_COUNT,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_frame(h: usize, w: usize, fill: f32) -> Frame {
    Frame::new(Array2::from_elem((h, w), fill))
}

/// 100x60 scene: flat background 0.5 with a 1.0-valued 10x10 square at
/// rows 10..20, cols 30..40.
fn make_scene() -> Frame {
    let mut data = Array2::<f32>::from_elem((60, 100), 0.5);
    for row in 10..20 {
        for col in 30..40 {
            data[[row, col]] = 1.0;
        }
    }
    Frame::new(data)
}

fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    let mut best_val = f32::NEG_INFINITY;
    for (i, v) in values.iter().enumerate() {
        if *v > best_val {
            best_val = *v;
            best = i;
        }
    }
    best
}

// ---------------------------------------------------------------------------
// AngleSet
// ---------------------------------------------------------------------------

#[test]
fn test_semicircle_angle_set() {
    let angles = AngleSet::semicircle();
    assert_eq!(angles.len(), SEMICIRCLE_ANGLE_COUNT);
    assert_eq!(angles.len(), 180);
    // Index i corresponds to angle i degrees exactly
    for (i, deg) in angles.degrees().iter().enumerate() {
        assert_eq!(*deg, i as f32);
    }
}

// ---------------------------------------------------------------------------
// compute_sinogram: shape and preconditions
// ---------------------------------------------------------------------------

#[test]
fn test_sinogram_shape() {
    let (padded, _) = pad_to_square(&make_scene());
    let sinogram = compute_sinogram(&padded, &AngleSet::semicircle()).unwrap();

    assert_eq!(sinogram.angle_count(), 180);
    // Detector count = padded diagonal extent: ceil(100 * sqrt(2)) = 142
    assert_eq!(sinogram.detector_count(), 142);
}

#[test]
fn test_detector_count_depends_only_on_padded_side() {
    // Wide and tall inputs that both pad to 100x100
    let wide = make_frame(60, 100, 0.5);
    let tall = make_frame(100, 60, 0.5);
    let square = make_frame(100, 100, 0.5);

    let angles = AngleSet::from_degrees(vec![0.0, 90.0]);
    let mut detector_counts = Vec::new();
    for frame in [wide, tall, square] {
        let (padded, _) = pad_to_square(&frame);
        let sinogram = compute_sinogram(&padded, &angles).unwrap();
        detector_counts.push(sinogram.detector_count());
    }
    assert_eq!(detector_counts, vec![142, 142, 142]);
}

#[test]
fn test_empty_angle_set_is_rejected() {
    let frame = make_frame(8, 8, 0.5);
    let err = compute_sinogram(&frame, &AngleSet::from_degrees(vec![])).unwrap_err();
    assert!(matches!(err, SinoscopeError::Projection(_)));
}

#[test]
fn test_non_square_input_is_rejected() {
    let frame = make_frame(8, 10, 0.5);
    let err = compute_sinogram(&frame, &AngleSet::semicircle()).unwrap_err();
    assert!(matches!(err, SinoscopeError::Projection(_)));
}

#[test]
fn test_progress_callback_fires_once_per_angle() {
    let frame = make_frame(8, 8, 0.5);
    let angles = AngleSet::from_degrees(vec![0.0, 45.0, 90.0, 135.0]);
    let count = AtomicUsize::new(0);
    let _ = compute_sinogram_with_progress(&frame, &angles, || {
        count.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap();
    assert_eq!(count.load(Ordering::Relaxed), 4);
}

// ---------------------------------------------------------------------------
// compute_sinogram: projection values
// ---------------------------------------------------------------------------

#[test]
fn test_angle_zero_profile_is_column_sums() {
    let (padded, _) = pad_to_square(&make_scene());
    let sinogram = compute_sinogram(&padded, &AngleSet::semicircle()).unwrap();

    let offset = canvas_offset(padded.width());
    let profile = sinogram.row(0);

    // Angle 0 is the identity rotation: each detector bin is the sum of
    // one canvas column.
    for col in 0..padded.width() {
        let expected: f32 = (0..padded.height())
            .map(|row| padded.data[[row, col]])
            .sum();
        let got = profile[offset + col];
        assert!(
            (got - expected).abs() < 1e-3,
            "column {col}: expected {expected}, got {got}"
        );
    }
}

#[test]
fn test_angle_zero_peak_at_bright_square_columns() {
    let scene = make_scene();
    let (padded, _) = pad_to_square(&scene);
    let sinogram = compute_sinogram(&padded, &AngleSet::semicircle()).unwrap();

    let offset = canvas_offset(padded.width());
    let peak = argmax(sinogram.row(0).as_slice().unwrap());

    // The bright square spans source columns 30..40.
    assert!(
        (offset + 30..offset + 40).contains(&peak),
        "angle-0 peak at detector {peak}, expected within [{}, {})",
        offset + 30,
        offset + 40
    );
}

#[test]
fn test_angle_ninety_peak_at_bright_square_rows() {
    let scene = make_scene();
    let (padded, padding) = pad_to_square(&scene);
    let sinogram = compute_sinogram(&padded, &AngleSet::semicircle()).unwrap();

    let offset = canvas_offset(padded.width());
    let peak = argmax(sinogram.row(90).as_slice().unwrap());

    // The bright square spans source rows 10..20, shifted by the top pad.
    let lo = offset + padding.top + 10;
    let hi = offset + padding.top + 20;
    assert!(
        (lo..hi).contains(&peak),
        "angle-90 peak at detector {peak}, expected within [{lo}, {hi})"
    );
}

#[test]
fn test_row_index_matches_angle() {
    let mut frame = make_frame(16, 16, 0.0);
    frame.data[[4, 11]] = 1.0;

    let full = compute_sinogram(&frame, &AngleSet::semicircle()).unwrap();
    let single = compute_sinogram(&frame, &AngleSet::from_degrees(vec![45.0])).unwrap();

    // Row 45 of the full sweep is the same computation as a one-angle set
    // at 45 degrees.
    assert_eq!(full.row(45), single.row(0));
}

#[test]
fn test_projection_preserves_total_mass_at_identity_rotation() {
    let frame = make_frame(20, 20, 0.25);
    let sinogram = compute_sinogram(&frame, &AngleSet::from_degrees(vec![0.0])).unwrap();

    let image_total: f32 = frame.data.iter().sum();
    let profile_total: f32 = sinogram.row(0).iter().sum();
    assert!(
        (image_total - profile_total).abs() / image_total < 1e-4,
        "image mass {image_total} vs profile mass {profile_total}"
    );
}

#[test]
fn test_sinogram_max_value() {
    let frame = make_frame(8, 8, 0.5);
    let sinogram = compute_sinogram(&frame, &AngleSet::from_degrees(vec![0.0])).unwrap();
    // At angle 0 the brightest bins are full columns: 8 * 0.5
    assert!((sinogram.max_value() - 4.0).abs() < 1e-4);

    let zero = make_frame(8, 8, 0.0);
    let sinogram = compute_sinogram(&zero, &AngleSet::from_degrees(vec![0.0])).unwrap();
    assert_eq!(sinogram.max_value(), 0.0);
}
