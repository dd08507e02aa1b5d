//! Single-curve AUC with normal-approximation CI and significance test.
//!
//! [`analyze_roc`] combines the trapezoidal AUC, the Hanley–McNeil standard
//! error, a fixed 95% interval, a two-sided z-test against AUC = 0.5, and the
//! Youden-optimal cutoff.

use rocstat_core::{Result, Scored, Summarizable};

use crate::auc::estimate_auc;
use crate::confusion::{checked_total, ConfusionMatrixRow, CurveSample};
use crate::cutoff::{find_optimal_cutoff, CutoffMethod, CutoffResult};
use crate::distribution::{two_sided_p, Z_95};
use crate::interpretation::AucGrade;
use crate::standard_error::standard_error;

/// One curve's parallel rate arrays and class totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocInput {
    /// True positive rates in threshold order.
    pub tpr: Vec<f64>,
    /// False positive rates in threshold order.
    pub fpr: Vec<f64>,
    /// Number of actual positives.
    pub positives: u64,
    /// Number of actual negatives.
    pub negatives: u64,
}

impl RocInput {
    /// Build an input from its parts.
    pub fn new(tpr: Vec<f64>, fpr: Vec<f64>, positives: u64, negatives: u64) -> Self {
        Self {
            tpr,
            fpr,
            positives,
            negatives,
        }
    }

    /// Trapezoidal AUC of this curve, in the order given.
    pub fn auc(&self) -> Result<f64> {
        estimate_auc(&self.fpr, &self.tpr)
    }

    /// Run [`analyze_roc`] on this input.
    pub fn analyze(&self) -> Result<RocSummary> {
        analyze_roc(&self.tpr, &self.fpr, self.positives, self.negatives)
    }
}

impl From<&CurveSample> for RocInput {
    fn from(sample: &CurveSample) -> Self {
        Self {
            tpr: sample.tpr(),
            fpr: sample.fpr(),
            positives: sample.positives,
            negatives: sample.negatives,
        }
    }
}

/// Summary statistics for one ROC curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocSummary {
    /// Trapezoidal AUC.
    pub auc: f64,
    /// Lower 95% bound, clamped to 0.
    pub ci_lower: f64,
    /// Upper 95% bound, clamped to 1.
    pub ci_upper: f64,
    /// Hanley–McNeil standard error.
    pub se_auc: f64,
    /// `(auc - 0.5) / se_auc`; infinite or NaN when `se_auc` is 0.
    pub z_score: f64,
    /// Two-sided p-value against AUC = 0.5.
    pub p_value: f64,
    /// Youden-optimal operating point.
    pub optimal_cutoff: CutoffResult,
    /// `positives + negatives`.
    pub sample_size: u64,
}

impl RocSummary {
    /// Qualitative band for the AUC.
    pub fn grade(&self) -> AucGrade {
        AucGrade::from_auc(self.auc)
    }
}

impl Scored for RocSummary {
    fn score(&self) -> f64 {
        self.p_value
    }
}

impl Summarizable for RocSummary {
    fn summary(&self) -> String {
        format!(
            "AUC={:.4} (95% CI {:.4}-{:.4}), SE={:.4}, p={:.6}, n={}",
            self.auc, self.ci_lower, self.ci_upper, self.se_auc, self.p_value, self.sample_size,
        )
    }
}

/// Analyze one ROC curve given parallel TPR/FPR arrays and class totals.
///
/// The arrays are integrated in the order given; no sort is applied.
/// A zero standard error is propagated into an infinite or NaN z-score.
///
/// # Errors
///
/// Returns an error for mismatched or empty arrays, an empty class, an
/// AUC outside `[0, 1]`, or class totals whose sum overflows `u64`.
pub fn analyze_roc(tpr: &[f64], fpr: &[f64], positives: u64, negatives: u64) -> Result<RocSummary> {
    let sample_size = checked_total(positives, negatives, "sample size")?;
    let auc = estimate_auc(fpr, tpr)?;
    let se_auc = standard_error(auc, positives, negatives)?;

    let ci_lower = (auc - Z_95 * se_auc).max(0.0);
    let ci_upper = (auc + Z_95 * se_auc).min(1.0);

    let z_score = (auc - 0.5) / se_auc;
    let p_value = two_sided_p(z_score);
    if se_auc == 0.0 {
        tracing::warn!(auc, "zero standard error; z-score is not finite");
    }

    let optimal_cutoff = find_optimal_cutoff(tpr, fpr, positives, negatives, CutoffMethod::Youden)?;

    tracing::debug!(auc, se_auc, p_value, "analyzed ROC curve");

    Ok(RocSummary {
        auc,
        ci_lower,
        ci_upper,
        se_auc,
        z_score,
        p_value,
        optimal_cutoff,
        sample_size,
    })
}

/// Analyze raw confusion-matrix rows.
///
/// Derives each row's rates, pads the (0, 0) and (1, 1) endpoints when
/// absent, and runs [`analyze_roc`] on the result in upload order. The
/// optimal cutoff index therefore refers to the padded curve.
///
/// # Errors
///
/// Returns an error if `rows` is empty or any row has an empty class.
pub fn analyze_rows(rows: &[ConfusionMatrixRow]) -> Result<RocSummary> {
    let sample = CurveSample::from_rows(rows)?.with_endpoints();
    RocInput::from(&sample).analyze()
}
