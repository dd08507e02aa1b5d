//! Trapezoidal AUC over (FPR, TPR) points.
//!
//! Points are integrated in the order given. Callers that need a
//! geometrically valid curve must sort by FPR first (see
//! [`CurveSample::sorted_by_fpr`](crate::confusion::CurveSample::sorted_by_fpr));
//! only the bootstrap path sorts on its own.

use rocstat_core::{Result, RocError};

/// Area under the curve through `(fpr[i], tpr[i])` by the trapezoidal rule.
///
/// Computes `Σ (x[i] - x[i-1]) * (y[i] + y[i-1]) / 2` for `i` in `1..n`
/// and clamps the result to `[0, 1]`. Segments with equal x contribute 0.
///
/// Returns `0.0` for fewer than two points; this is "not computable", not
/// "no discrimination".
///
/// # Errors
///
/// Returns an error if the slices have different lengths.
pub fn estimate_auc(fpr: &[f64], tpr: &[f64]) -> Result<f64> {
    if fpr.len() != tpr.len() {
        return Err(RocError::InvalidInput(format!(
            "fpr length {} != tpr length {}",
            fpr.len(),
            tpr.len()
        )));
    }
    Ok(trapezoidal_auc(fpr, tpr))
}

/// Trapezoidal sum over equal-length slices, clamped to `[0, 1]`.
pub(crate) fn trapezoidal_auc(x: &[f64], y: &[f64]) -> f64 {
    if x.len() < 2 {
        return 0.0;
    }
    let mut auc = 0.0;
    for i in 1..x.len() {
        auc += (x[i] - x[i - 1]) * (y[i] + y[i - 1]) / 2.0;
    }
    auc.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_is_half() {
        assert!((estimate_auc(&[0.0, 1.0], &[0.0, 1.0]).unwrap() - 0.5).abs() < 1e-12);

        for n in [3usize, 5, 11, 101] {
            let xs: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
            let auc = estimate_auc(&xs, &xs).unwrap();
            assert!((auc - 0.5).abs() < 1e-12, "n={n}: {auc}");
        }
    }

    #[test]
    fn perfect_classifier() {
        let auc = estimate_auc(&[0.0, 0.0, 1.0], &[0.0, 1.0, 1.0]).unwrap();
        assert!((auc - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_point_padded() {
        let auc = estimate_auc(&[0.0, 0.15, 1.0], &[0.0, 0.85, 1.0]).unwrap();
        assert!((auc - 0.85).abs() < 1e-12);
    }

    #[test]
    fn duplicate_x_contributes_nothing() {
        let base = estimate_auc(&[0.0, 0.3, 1.0], &[0.0, 0.7, 1.0]).unwrap();
        let dup = estimate_auc(&[0.0, 0.3, 0.3, 1.0], &[0.0, 0.6, 0.7, 1.0]).unwrap();
        // The vertical segment at x = 0.3 adds no area; only the endpoints
        // of the neighbouring trapezoids matter.
        let expected = 0.3 * (0.0 + 0.6) / 2.0 + 0.7 * (0.7 + 1.0) / 2.0;
        assert!((dup - expected).abs() < 1e-12);

        let repeated = estimate_auc(&[0.0, 0.3, 0.3, 1.0], &[0.0, 0.7, 0.7, 1.0]).unwrap();
        assert!((repeated - base).abs() < 1e-12);
    }

    #[test]
    fn fewer_than_two_points_is_zero() {
        assert_eq!(estimate_auc(&[], &[]).unwrap(), 0.0);
        assert_eq!(estimate_auc(&[0.4], &[0.9]).unwrap(), 0.0);
    }

    #[test]
    fn unsorted_input_is_not_reordered() {
        // Descending x gives negative signed area, clamped to 0.
        let auc = estimate_auc(&[1.0, 0.0], &[1.0, 0.0]).unwrap();
        assert_eq!(auc, 0.0);
    }

    #[test]
    fn length_mismatch_error() {
        assert!(estimate_auc(&[0.0, 1.0], &[0.0]).is_err());
    }
}
