use cell_contours::{get_code, CellCode, CodeParams, Threshold};

/// Classify cell `(x, y)` of a `width` x `height` grid
fn code_at(weights: &[f64], threshold: Threshold, x: usize, y: usize, size: [usize; 2]) -> CellCode {
    get_code(&CodeParams {
        cell_weights: weights,
        threshold,
        x,
        y,
        width: size[0],
        height: size[1],
    })
}

/// Classify the single cell of a 2x2 grid against the line threshold 6
fn line_code(weights: [f64; 4]) -> CellCode {
    code_at(&weights, Threshold::line(6.0), 0, 0, [2, 2])
}

fn band_code(weights: [f64; 4], lower: f64, upper: f64) -> CellCode {
    code_at(&weights, Threshold::band(lower, upper), 0, 0, [2, 2])
}

#[test]
fn test_single_corner_above() {
    // row-1: 5 10 / row-0: 5 5
    assert_eq!(line_code([5.0, 5.0, 5.0, 10.0]).code, 4);
}

#[test]
fn test_uniform_cells() {
    assert_eq!(line_code([5.0, 5.0, 5.0, 5.0]).code, 0);
    assert_eq!(line_code([10.0, 10.0, 10.0, 10.0]).code, 15);
}

#[test]
fn test_right_column_above() {
    assert_eq!(line_code([5.0, 10.0, 5.0, 10.0]).code, 6);
}

#[test]
fn test_weight_equal_to_threshold_counts_above() {
    assert_eq!(line_code([6.0, 6.0, 6.0, 6.0]).code, 15);
    assert_eq!(line_code([5.0, 5.0, 5.0, 6.0]).code, 4);
}

#[test]
fn test_non_zero_cell_index() {
    // row-2: 5 10 10 / row-1: 5 5 5 / row-0: 5 5 5
    let weights = [5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 10.0, 10.0];
    assert_eq!(code_at(&weights, Threshold::line(6.0), 1, 1, [3, 3]).code, 12);

    // row-2: 10 5 5 / row-1: 10 5 5 / row-0: 5 5 5
    let weights = [5.0, 5.0, 5.0, 10.0, 5.0, 5.0, 10.0, 5.0, 5.0];
    assert_eq!(code_at(&weights, Threshold::line(6.0), 0, 1, [3, 3]).code, 9);
}

#[test]
fn test_saddle_mean_code() {
    // row-2: 5 6 1 / row-1: 5 1 6 / row-0: 5 5 5, mean 3.5
    let weights = [5.0, 5.0, 5.0, 5.0, 1.0, 6.0, 5.0, 6.0, 1.0];
    let low = code_at(&weights, Threshold::line(6.0), 1, 1, [3, 3]);
    assert_eq!(low, CellCode { code: 10, mean_code: 0 });

    // row-2: 5 10 5 / row-1: 5 5 10 / row-0: 5 5 5, mean 7.5
    let weights = [5.0, 5.0, 5.0, 5.0, 5.0, 10.0, 5.0, 10.0, 5.0];
    let high = code_at(&weights, Threshold::line(6.0), 1, 1, [3, 3]);
    assert_eq!(high, CellCode { code: 10, mean_code: 1 });
}

#[test]
fn test_band_codes() {
    // tl(2) tr(1) br(2) bl(2)
    assert_eq!(band_code([5.0, 5.0, 5.0, 3.0], 2.0, 4.0).code, 154);
    // All above the band
    assert_eq!(band_code([5.0, 5.0, 5.0, 5.0], 2.0, 4.0).code, 170);
    // Triangle: bl sits on the lower bound
    assert_eq!(band_code([2.0, 5.0, 5.0, 5.0], 2.0, 4.0).code, 169);
    // Trapezoid
    assert_eq!(band_code([10.0, 1.0, 10.0, 10.0], 2.0, 9.0).code, 162);
    // Rectangle: tr sits on the upper bound
    assert_eq!(band_code([10.0, 10.0, 2.0, 9.0], 2.0, 9.0).code, 90);
    // Hexagon
    assert_eq!(band_code([3.0, 0.0, 9.0, 30.0], 2.0, 9.0).code, 97);
}

#[test]
fn test_band_mean_code_is_ternary() {
    assert_eq!(band_code([0.0, 0.0, 0.0, 0.0], 2.0, 4.0).mean_code, 0);
    assert_eq!(band_code([3.0, 3.0, 3.0, 3.0], 2.0, 4.0).mean_code, 1);
    assert_eq!(band_code([9.0, 9.0, 9.0, 9.0], 2.0, 4.0).mean_code, 2);
}

#[test]
fn test_repeated_calls_are_identical() {
    let weights = [5.0, 5.0, 5.0, 5.0, 1.0, 6.0, 5.0, 6.0, 1.0];
    let first = code_at(&weights, Threshold::line(6.0), 1, 1, [3, 3]);
    let second = code_at(&weights, Threshold::line(6.0), 1, 1, [3, 3]);
    assert_eq!(first, second);
}
