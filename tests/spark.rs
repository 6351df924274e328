use sparkdeck::spark::{bounds, meter, quantize, sparkline, sparkline_with, BLOCK_GLYPHS};

#[test]
fn output_length_matches_input_length() {
    for n in 1..40 {
        let series: Vec<f64> = (0..n).map(|i| (i as f64).sin() * 10.0).collect();
        let glyphs = sparkline(&series);
        assert_eq!(
            glyphs.chars().count(),
            n,
            "sparkline must emit one glyph per sample"
        );
    }
}

#[test]
fn empty_series_renders_nothing() {
    assert_eq!(sparkline(&[]), "");
    assert!(quantize(&[], 8).is_empty());
}

#[test]
fn all_equal_series_renders_lowest_glyph() {
    let series = [3.25; 7];
    let glyphs = sparkline(&series);
    for c in glyphs.chars() {
        assert_eq!(c, BLOCK_GLYPHS[0], "zero-range series must map to level 0");
    }
}

#[test]
fn single_sample_renders_lowest_glyph() {
    assert_eq!(sparkline(&[42.0]), BLOCK_GLYPHS[0].to_string());
}

#[test]
fn boundary_saturation_on_eight_levels() {
    let levels = quantize(&[1.0, 2.0, 3.0, 4.0], 8);
    assert_eq!(levels[0], 0, "minimum must map to the lowest level");
    assert_eq!(levels[3], 7, "maximum must map to the highest level");
    for &level in &levels {
        assert!(level <= 7);
    }
}

#[test]
fn quantize_is_monotone_in_value() {
    let series = [0.0, 1.0, 2.0, 5.0, 9.0, 10.0];
    let levels = quantize(&series, 8);
    for pair in levels.windows(2) {
        assert!(pair[0] <= pair[1], "larger samples get equal-or-higher levels");
    }
}

#[test]
fn custom_palette_defines_level_count() {
    let palette = ['a', 'b', 'c'];
    let out = sparkline_with(&[0.0, 0.5, 1.0], &palette);
    assert_eq!(out, "abc");
}

#[test]
fn negative_values_are_handled() {
    let levels = quantize(&[-10.0, -5.0, 0.0], 8);
    assert_eq!(levels[0], 0);
    assert_eq!(levels[2], 7);
}

#[test]
fn meter_clamps_and_fills() {
    assert_eq!(meter(0.0, 4), "░░░░");
    assert_eq!(meter(1.0, 4), "████");
    assert_eq!(meter(2.5, 4), "████", "over-unity fractions clamp to full");
    assert_eq!(meter(-1.0, 4), "░░░░", "negative fractions clamp to empty");
    assert_eq!(meter(0.5, 1), "▌");
    assert_eq!(meter(0.5, 0), "");
}

#[test]
fn meter_width_is_stable() {
    for width in 1..24 {
        for step in 0..=10 {
            let bar = meter(step as f64 / 10.0, width);
            assert_eq!(bar.chars().count(), width, "meter must keep its width");
        }
    }
}

#[test]
fn bounds_reports_min_and_max() {
    assert_eq!(bounds(&[]), None);
    assert_eq!(bounds(&[2.0]), Some((2.0, 2.0)));
    assert_eq!(bounds(&[3.0, -1.0, 7.0]), Some((-1.0, 7.0)));
}
