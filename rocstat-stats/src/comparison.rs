//! Two-curve AUC comparison under an independence assumption.
//!
//! Each AUC gets its own Hanley–McNeil standard error and the two variances
//! are summed. This ignores the covariance between curves measured on the
//! same subjects, so it is a conservative approximation and **not** the
//! DeLong test: for paired designs the reported p-value is too large.

use rocstat_core::{Result, Scored, Summarizable};

use crate::distribution::{two_sided_p, Z_95};
use crate::significance::RocInput;
use crate::standard_error::standard_error;

/// Method label carried by every [`CurveComparisonResult`].
pub const METHOD: &str = "independent-variance z-test (conservative DeLong approximation)";

/// Result of comparing two AUCs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveComparisonResult {
    /// AUC of the first curve.
    pub auc1: f64,
    /// AUC of the second curve.
    pub auc2: f64,
    /// `auc1 - auc2`.
    pub difference: f64,
    /// `sqrt(se1² + se2²)`.
    pub se_difference: f64,
    /// `difference / se_difference`.
    pub z_score: f64,
    /// Two-sided p-value against no difference.
    pub p_value: f64,
    /// `difference - 1.96 · se_difference` (not clamped).
    pub ci_difference_lower: f64,
    /// `difference + 1.96 · se_difference` (not clamped).
    pub ci_difference_upper: f64,
    /// Name of the test method.
    pub method: String,
}

impl Scored for CurveComparisonResult {
    fn score(&self) -> f64 {
        self.p_value
    }
}

impl Summarizable for CurveComparisonResult {
    fn summary(&self) -> String {
        format!(
            "ΔAUC={:.4} ({:.4} vs {:.4}, 95% CI {:.4} to {:.4}), z={:.4}, p={:.6}",
            self.difference,
            self.auc1,
            self.auc2,
            self.ci_difference_lower,
            self.ci_difference_upper,
            self.z_score,
            self.p_value,
        )
    }
}

/// Compare the AUCs of two curves assuming independent sampling.
///
/// AUCs are computed on the arrays as given (no sort). Identical curves give
/// `difference = 0`, `z = 0`, `p = 1`; two zero standard errors give a NaN
/// or infinite z-score, which is propagated.
///
/// # Errors
///
/// Returns an error if either curve has mismatched arrays or an empty class.
pub fn compare_curves_independent(
    curve1: &RocInput,
    curve2: &RocInput,
) -> Result<CurveComparisonResult> {
    let auc1 = curve1.auc()?;
    let auc2 = curve2.auc()?;
    let difference = auc1 - auc2;

    let se1 = standard_error(auc1, curve1.positives, curve1.negatives)?;
    let se2 = standard_error(auc2, curve2.positives, curve2.negatives)?;
    let se_difference = (se1 * se1 + se2 * se2).sqrt();

    let z_score = difference / se_difference;
    let p_value = two_sided_p(z_score);

    tracing::debug!(auc1, auc2, z_score, p_value, "compared ROC curves");

    Ok(CurveComparisonResult {
        auc1,
        auc2,
        difference,
        se_difference,
        z_score,
        p_value,
        ci_difference_lower: difference - Z_95 * se_difference,
        ci_difference_upper: difference + Z_95 * se_difference,
        method: METHOD.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong() -> RocInput {
        RocInput::new(vec![0.0, 0.85, 1.0], vec![0.0, 0.15, 1.0], 100, 100)
    }

    fn weak() -> RocInput {
        RocInput::new(vec![0.0, 0.5, 1.0], vec![0.0, 0.25, 1.0], 100, 100)
    }

    #[test]
    fn identical_curves() {
        let r = compare_curves_independent(&strong(), &strong()).unwrap();
        assert_eq!(r.difference, 0.0);
        assert_eq!(r.z_score, 0.0);
        assert!((r.p_value - 1.0).abs() < 1e-8);
        assert!(r.ci_difference_lower < 0.0 && r.ci_difference_upper > 0.0);
    }

    #[test]
    fn known_difference() {
        let r = compare_curves_independent(&strong(), &weak()).unwrap();
        assert!((r.auc1 - 0.85).abs() < 1e-12);
        assert!((r.auc2 - 0.625).abs() < 1e-12);
        assert!((r.difference - 0.225).abs() < 1e-12);
        assert!((r.se_difference - 0.048021).abs() < 1e-5);
        assert!((r.z_score - 4.68544).abs() < 1e-4);
        assert!(r.p_value < 1e-5);
        let half_width = 1.96 * r.se_difference;
        assert!((r.ci_difference_lower - (0.225 - half_width)).abs() < 1e-12);
        assert!((r.ci_difference_upper - (0.225 + half_width)).abs() < 1e-12);
    }

    #[test]
    fn swapping_curves_negates_difference() {
        let ab = compare_curves_independent(&strong(), &weak()).unwrap();
        let ba = compare_curves_independent(&weak(), &strong()).unwrap();
        assert!((ab.difference + ba.difference).abs() < 1e-12);
        assert!((ab.z_score + ba.z_score).abs() < 1e-12);
        assert!((ab.p_value - ba.p_value).abs() < 1e-12);
    }

    #[test]
    fn difference_ci_not_clamped() {
        let tiny = |tpr: Vec<f64>, fpr: Vec<f64>| RocInput::new(tpr, fpr, 2, 2);
        let r = compare_curves_independent(
            &tiny(vec![0.0, 0.9, 1.0], vec![0.0, 0.1, 1.0]),
            &tiny(vec![0.0, 0.1, 1.0], vec![0.0, 0.9, 1.0]),
        )
        .unwrap();
        assert!(r.ci_difference_upper > 1.0 || r.ci_difference_lower < -1.0);
    }

    #[test]
    fn perfect_curves_give_nan_z() {
        let perfect = RocInput::new(vec![0.0, 1.0, 1.0], vec![0.0, 0.0, 1.0], 10, 10);
        let r = compare_curves_independent(&perfect, &perfect).unwrap();
        assert_eq!(r.se_difference, 0.0);
        assert!(r.z_score.is_nan());
        assert!(r.p_value.is_nan());
    }

    #[test]
    fn degenerate_curve_errors() {
        let empty = RocInput::new(vec![0.0, 1.0], vec![0.0, 1.0], 0, 5);
        assert!(compare_curves_independent(&strong(), &empty).is_err());
    }

    #[test]
    fn method_is_labelled() {
        let r = compare_curves_independent(&strong(), &weak()).unwrap();
        assert!(r.method.contains("independent"));
        assert!(r.summary().starts_with("ΔAUC=0.2250"));
    }
}
