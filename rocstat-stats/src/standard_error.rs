//! Hanley–McNeil (1982) standard error of a single AUC.

use rocstat_core::{Result, RocError};

/// Standard error of an AUC by the Hanley–McNeil approximation.
///
/// ```text
/// q1  = auc / (2 - auc)
/// q2  = 2 auc² / (1 + auc)
/// se² = [auc(1-auc) + (P-1)(q1-auc²) + (N-1)(q2-auc²)] / (P N)
/// ```
///
/// Negative variance from the approximation is clamped to zero, so `0.0` is
/// a valid (degenerate) result.
///
/// # Errors
///
/// Returns [`RocError::DegenerateInput`] if either class is empty and
/// [`RocError::InvalidInput`] if `auc` is outside `[0, 1]`.
///
/// # Example
///
/// ```
/// use rocstat_stats::standard_error::standard_error;
///
/// let se = standard_error(0.85, 100, 100).unwrap();
/// assert!((se - 0.0275).abs() < 1e-3);
/// ```
pub fn standard_error(auc: f64, positives: u64, negatives: u64) -> Result<f64> {
    if positives == 0 || negatives == 0 {
        return Err(RocError::DegenerateInput(format!(
            "standard error needs both classes (positives={positives}, negatives={negatives})"
        )));
    }
    if !(0.0..=1.0).contains(&auc) {
        return Err(RocError::InvalidInput(format!(
            "auc must be in [0, 1], got {auc}"
        )));
    }

    let p = positives as f64;
    let n = negatives as f64;
    let auc2 = auc * auc;
    let q1 = auc / (2.0 - auc);
    let q2 = 2.0 * auc2 / (1.0 + auc);

    let var = (auc * (1.0 - auc) + (p - 1.0) * (q1 - auc2) + (n - 1.0) * (q2 - auc2)) / (p * n);
    Ok(var.max(0.0).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hanley_mcneil_reference() {
        let se = standard_error(0.85, 100, 100).unwrap();
        assert!((se - 0.027520).abs() < 1e-5, "se = {se}");
    }

    #[test]
    fn chance_level() {
        let se = standard_error(0.5, 50, 50).unwrap();
        assert!((se - 0.058023).abs() < 1e-5, "se = {se}");
    }

    #[test]
    fn perfect_auc_has_zero_variance() {
        assert_eq!(standard_error(1.0, 30, 40).unwrap(), 0.0);
    }

    #[test]
    fn shrinks_with_sample_size() {
        let small = standard_error(0.75, 20, 20).unwrap();
        let large = standard_error(0.75, 200, 200).unwrap();
        assert!(large < small);
    }

    #[test]
    fn empty_class_is_degenerate() {
        assert!(matches!(
            standard_error(0.8, 0, 10),
            Err(RocError::DegenerateInput(_))
        ));
        assert!(matches!(
            standard_error(0.8, 10, 0),
            Err(RocError::DegenerateInput(_))
        ));
    }

    #[test]
    fn out_of_range_auc() {
        assert!(standard_error(1.2, 10, 10).is_err());
        assert!(standard_error(-0.1, 10, 10).is_err());
        assert!(standard_error(f64::NAN, 10, 10).is_err());
    }
}
