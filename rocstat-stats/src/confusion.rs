//! Confusion-matrix rows and the per-threshold rates derived from them.
//!
//! Each uploaded row is one decision threshold, pre-aggregated into
//! true/false positive/negative counts. Rates whose denominator is zero are
//! reported as `None` rather than NaN.

use rocstat_core::{Identified, Result, RocError};

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// One threshold's confusion-matrix counts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfusionMatrixRow {
    /// Caller-supplied row identifier.
    pub id: String,
    /// True positives.
    pub tp: u64,
    /// False positives.
    pub fp: u64,
    /// True negatives.
    pub tn: u64,
    /// False negatives.
    #[cfg_attr(feature = "serde", serde(rename = "fn"))]
    pub fn_: u64,
}

impl ConfusionMatrixRow {
    /// Build a row from its four counts.
    pub fn new(id: impl Into<String>, tp: u64, fp: u64, tn: u64, fn_: u64) -> Self {
        Self {
            id: id.into(),
            tp,
            fp,
            tn,
            fn_,
        }
    }

    /// Actual positives in this row (`tp + fn`).
    ///
    /// # Errors
    ///
    /// Returns an error if the sum does not fit in a `u64`.
    pub fn positives(&self) -> Result<u64> {
        checked_total(self.tp, self.fn_, "tp + fn")
    }

    /// Actual negatives in this row (`tn + fp`).
    ///
    /// # Errors
    ///
    /// Returns an error if the sum does not fit in a `u64`.
    pub fn negatives(&self) -> Result<u64> {
        checked_total(self.tn, self.fp, "tn + fp")
    }

    /// Derived rates for this row. Shorthand for [`row_metrics`].
    pub fn metrics(&self) -> DerivedPoint {
        row_metrics(self)
    }
}

impl Identified for ConfusionMatrixRow {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `a + b`, or [`RocError::InvalidInput`] naming `what` on overflow.
pub(crate) fn checked_total(a: u64, b: u64, what: &str) -> Result<u64> {
    a.checked_add(b)
        .ok_or_else(|| RocError::InvalidInput(format!("count overflow in {what}")))
}

/// `num / denom`, or `None` when `denom` is zero.
#[inline]
pub(crate) fn ratio(num: f64, denom: f64) -> Option<f64> {
    if denom == 0.0 {
        None
    } else {
        Some(num / denom)
    }
}

// ---------------------------------------------------------------------------
// Derived point
// ---------------------------------------------------------------------------

/// Rates derived from a single [`ConfusionMatrixRow`].
///
/// `tpr` always equals `sensitivity` and `fpr` equals `1 - specificity`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedPoint {
    /// `tp / (tp + fn)`.
    pub sensitivity: Option<f64>,
    /// `tn / (tn + fp)`.
    pub specificity: Option<f64>,
    /// True positive rate.
    pub tpr: Option<f64>,
    /// False positive rate.
    pub fpr: Option<f64>,
}

impl DerivedPoint {
    /// A point with fully defined rates, e.g. a curve endpoint.
    pub fn from_rates(tpr: f64, fpr: f64) -> Self {
        Self {
            sensitivity: Some(tpr),
            specificity: Some(1.0 - fpr),
            tpr: Some(tpr),
            fpr: Some(fpr),
        }
    }

    /// Whether both rates are defined.
    pub fn is_defined(&self) -> bool {
        self.tpr.is_some() && self.fpr.is_some()
    }

    /// Positive likelihood ratio `sens / (1 - spec)`.
    pub fn positive_likelihood_ratio(&self) -> Option<f64> {
        let sens = self.sensitivity?;
        let spec = self.specificity?;
        ratio(sens, 1.0 - spec)
    }

    /// Negative likelihood ratio `(1 - sens) / spec`.
    pub fn negative_likelihood_ratio(&self) -> Option<f64> {
        let sens = self.sensitivity?;
        let spec = self.specificity?;
        ratio(1.0 - sens, spec)
    }

    /// Diagnostic odds ratio `LR+ / LR-`.
    pub fn diagnostic_odds_ratio(&self) -> Option<f64> {
        let lr_pos = self.positive_likelihood_ratio()?;
        let lr_neg = self.negative_likelihood_ratio()?;
        ratio(lr_pos, lr_neg)
    }
}

/// Compute sensitivity, specificity, TPR, and FPR for one row.
pub fn row_metrics(row: &ConfusionMatrixRow) -> DerivedPoint {
    // Summed in f64; the u64 sum can overflow.
    let sensitivity = ratio(row.tp as f64, row.tp as f64 + row.fn_ as f64);
    let specificity = ratio(row.tn as f64, row.tn as f64 + row.fp as f64);
    DerivedPoint {
        sensitivity,
        specificity,
        tpr: sensitivity,
        fpr: specificity.map(|s| 1.0 - s),
    }
}

// ---------------------------------------------------------------------------
// Curve sample
// ---------------------------------------------------------------------------

/// The ordered points of one uploaded dataset plus its class totals.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSample {
    /// Points in upload (threshold) order.
    pub points: Vec<DerivedPoint>,
    /// `Σ (tp + fn)` over all rows.
    pub positives: u64,
    /// `Σ (tn + fp)` over all rows.
    pub negatives: u64,
}

impl CurveSample {
    /// Derive every row's point and sum the class totals.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is empty, any row has an undefined rate
    /// (zero positives or zero negatives), or a class total overflows `u64`.
    pub fn from_rows(rows: &[ConfusionMatrixRow]) -> Result<Self> {
        if rows.is_empty() {
            return Err(RocError::InvalidInput("no confusion-matrix rows".into()));
        }

        let mut points = Vec::with_capacity(rows.len());
        let mut positives = 0u64;
        let mut negatives = 0u64;
        for row in rows {
            let point = row_metrics(row);
            if !point.is_defined() {
                tracing::warn!(row = %row.id, "row has an empty class; rates undefined");
                return Err(RocError::DegenerateInput(format!(
                    "row '{}' has an empty class (tp={}, fn={}, tn={}, fp={})",
                    row.id, row.tp, row.fn_, row.tn, row.fp
                )));
            }
            points.push(point);
            positives = checked_total(positives, row.positives()?, "total positives")?;
            negatives = checked_total(negatives, row.negatives()?, "total negatives")?;
        }

        Ok(Self {
            points,
            positives,
            negatives,
        })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sample has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True positive rates in point order. Undefined rates become NaN.
    pub fn tpr(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.tpr.unwrap_or(f64::NAN))
            .collect()
    }

    /// False positive rates in point order. Undefined rates become NaN.
    pub fn fpr(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.fpr.unwrap_or(f64::NAN))
            .collect()
    }

    /// A copy with points ordered by ascending FPR (ties by ascending TPR).
    pub fn sorted_by_fpr(&self) -> Self {
        let mut points = self.points.clone();
        points.sort_by(|a, b| {
            let fa = a.fpr.unwrap_or(f64::NAN);
            let fb = b.fpr.unwrap_or(f64::NAN);
            let ta = a.tpr.unwrap_or(f64::NAN);
            let tb = b.tpr.unwrap_or(f64::NAN);
            fa.total_cmp(&fb).then(ta.total_cmp(&tb))
        });
        Self {
            points,
            positives: self.positives,
            negatives: self.negatives,
        }
    }

    /// A copy with the (0, 0) start and (1, 1) end points added when the
    /// first/last points are not already there.
    pub fn with_endpoints(&self) -> Self {
        let is_at = |p: Option<&DerivedPoint>, v: f64| {
            p.is_some_and(|p| p.tpr == Some(v) && p.fpr == Some(v))
        };

        let mut points = Vec::with_capacity(self.points.len() + 2);
        if !is_at(self.points.first(), 0.0) {
            points.push(DerivedPoint::from_rates(0.0, 0.0));
        }
        points.extend_from_slice(&self.points);
        if !is_at(self.points.last(), 1.0) {
            points.push(DerivedPoint::from_rates(1.0, 1.0));
        }
        Self {
            points,
            positives: self.positives,
            negatives: self.negatives,
        }
    }
}
