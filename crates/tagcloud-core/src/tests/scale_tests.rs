use super::*;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn empty_weights_scale_to_nothing() {
    let scaler = WeightScaler::default();
    assert!(scaler.scale(&[]).is_empty());
    assert!(scaler.fit(std::iter::empty()).is_none());
}

#[test]
fn single_distinct_weight_maps_to_min_font_size() {
    let scaler = WeightScaler::default();
    assert_eq!(scaler.scale(&[42.0]), vec![MIN_FONT_SIZE]);
    assert_eq!(scaler.scale(&[3.5, 3.5, 3.5]), vec![MIN_FONT_SIZE; 3]);

    let scale = scaler.fit([-7.0, -7.0]).expect("non-empty");
    assert!(scale.is_degenerate());
    assert_eq!(scale.display_size(1000.0), MIN_FONT_SIZE);
}

#[test]
fn follows_logarithmic_curve() {
    // multiplier = 90 / 9 = 10
    let sizes = WeightScaler::default().scale(&[1.0, 5.0, 10.0]);
    assert_close(sizes[0], 10.0 + 0.01_f32.ln());
    assert_close(sizes[1], 10.0 + 40.01_f32.ln());
    assert_close(sizes[2], 10.0 + 90.01_f32.ln());
}

#[test]
fn output_order_matches_input_order() {
    let sizes = WeightScaler::default().scale(&[10.0, 1.0, 5.0]);
    assert!(sizes[0] > sizes[2]);
    assert!(sizes[2] > sizes[1]);
}

#[test]
fn sizes_are_weakly_monotonic_in_weight() {
    let weights: Vec<f32> = (0..64)
        .map(|i| ((i * 7919) % 257) as f32 * 0.37 - 20.0)
        .collect();
    let sizes = WeightScaler::default().scale(&weights);

    let mut pairs: Vec<(f32, f32)> = weights.into_iter().zip(sizes).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    for pair in pairs.windows(2) {
        assert!(pair[1].1 >= pair[0].1, "{:?} then {:?}", pair[0], pair[1]);
    }
}

#[test]
fn weight_below_fitted_minimum_is_clamped() {
    let scale = WeightScaler::default().fit([2.0, 4.0]).expect("non-empty");
    let size = scale.display_size(0.0);
    assert!(size.is_finite());
    assert_close(size, 10.0 + 0.01_f32.ln());
}

#[test]
fn custom_bounds_change_the_spread() {
    let scaler = WeightScaler::new(12.0, 30.0);
    let sizes = scaler.scale(&[0.0, 1.0]);
    assert_close(sizes[0], 12.0 + 0.01_f32.ln());
    assert_close(sizes[1], 12.0 + 18.01_f32.ln());
    assert_eq!(scaler.scale(&[5.0]), vec![12.0]);
}

#[test]
fn vanishing_spread_is_treated_as_degenerate() {
    let scaler = WeightScaler::default();
    let sizes = scaler.scale(&[0.0, 1e-38]);
    assert!(sizes.iter().all(|size| size.is_finite()), "{sizes:?}");
    assert_eq!(sizes, vec![MIN_FONT_SIZE; 2]);

    let scale = scaler.fit([0.0, 1e-38]).expect("non-empty");
    assert!(scale.is_degenerate());
}

#[test]
fn weight_far_above_fitted_maximum_stays_finite() {
    let scale = WeightScaler::default().fit([0.0, 1.0]).expect("non-empty");
    assert!(scale.display_size(f32::MAX).is_finite());
}
