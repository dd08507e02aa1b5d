//! Optimal cutoff search over per-threshold (TPR, FPR) pairs.
//!
//! Three criteria are supported:
//!
//! - [`CutoffMethod::Youden`]: maximise `sensitivity + specificity - 1`
//! - [`CutoffMethod::Sensitivity`]: best specificity with sensitivity at or
//!   above a floor
//! - [`CutoffMethod::Specificity`]: best sensitivity with specificity at or
//!   above a floor
//!
//! Every criterion replaces the running best only on strict improvement, so
//! the first index wins ties. The reported `threshold` is the array index:
//! aggregated rows carry no raw decision-threshold values.

use std::fmt;
use std::str::FromStr;

use rocstat_core::{Result, RocError, Summarizable};

use crate::confusion::ratio;

/// Criterion used to pick the optimal cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "method", content = "target", rename_all = "lowercase"))]
pub enum CutoffMethod {
    /// Maximise the Youden index.
    #[default]
    Youden,
    /// Sensitivity must be at least the given floor; maximise specificity.
    Sensitivity(f64),
    /// Specificity must be at least the given floor; maximise sensitivity.
    Specificity(f64),
}

impl CutoffMethod {
    /// Build a method from its name and optional floor.
    ///
    /// `target` is ignored for `"youden"` and required for the floor methods.
    ///
    /// # Errors
    ///
    /// Returns [`RocError::Parse`] for an unknown name or a missing target,
    /// and [`RocError::InvalidInput`] for a target outside `[0, 1]`.
    pub fn from_parts(name: &str, target: Option<f64>) -> Result<Self> {
        let kind: MethodKind = name.parse()?;
        match kind {
            MethodKind::Youden => Ok(CutoffMethod::Youden),
            MethodKind::Sensitivity | MethodKind::Specificity => {
                let target = target.ok_or_else(|| {
                    RocError::Parse(format!("cutoff method '{name}' requires a target value"))
                })?;
                if !(0.0..=1.0).contains(&target) {
                    return Err(RocError::InvalidInput(format!(
                        "cutoff target must be in [0, 1], got {target}"
                    )));
                }
                Ok(if kind == MethodKind::Sensitivity {
                    CutoffMethod::Sensitivity(target)
                } else {
                    CutoffMethod::Specificity(target)
                })
            }
        }
    }

    /// Method name as accepted by [`CutoffMethod::from_parts`].
    pub fn name(&self) -> &'static str {
        match self {
            CutoffMethod::Youden => "youden",
            CutoffMethod::Sensitivity(_) => "sensitivity",
            CutoffMethod::Specificity(_) => "specificity",
        }
    }
}

impl fmt::Display for CutoffMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutoffMethod::Youden => write!(f, "youden"),
            CutoffMethod::Sensitivity(t) => write!(f, "sensitivity>={t}"),
            CutoffMethod::Specificity(t) => write!(f, "specificity>={t}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MethodKind {
    Youden,
    Sensitivity,
    Specificity,
}

impl FromStr for MethodKind {
    type Err = RocError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "youden" => Ok(MethodKind::Youden),
            "sensitivity" => Ok(MethodKind::Sensitivity),
            "specificity" => Ok(MethodKind::Specificity),
            _ => Err(RocError::Parse(format!(
                "unknown cutoff method: {s} (expected youden, sensitivity, or specificity)"
            ))),
        }
    }
}

/// The chosen cutoff and its operating characteristics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutoffResult {
    /// Index of the chosen point in the input arrays.
    pub threshold: usize,
    /// Sensitivity at the chosen point.
    pub sensitivity: f64,
    /// Specificity at the chosen point.
    pub specificity: f64,
    /// `sensitivity + specificity - 1`.
    pub youden_index: f64,
    /// Positive predictive value at the sample prevalence.
    pub ppv: Option<f64>,
    /// Negative predictive value at the sample prevalence.
    pub npv: Option<f64>,
}

impl Summarizable for CutoffResult {
    fn summary(&self) -> String {
        let fmt_opt = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"));
        format!(
            "cutoff #{}: sens={:.4}, spec={:.4}, J={:.4}, ppv={}, npv={}",
            self.threshold,
            self.sensitivity,
            self.specificity,
            self.youden_index,
            fmt_opt(self.ppv),
            fmt_opt(self.npv),
        )
    }
}

/// Find the optimal cutoff index according to `method`.
///
/// `tpr` and `fpr` are parallel arrays in threshold order; they need not be
/// sorted by FPR. `positives` and `negatives` set the prevalence used for
/// PPV/NPV.
///
/// # Errors
///
/// Returns [`RocError::InvalidInput`] for empty or mismatched arrays and
/// [`RocError::NoQualifyingCutoff`] when no index meets a floor.
pub fn find_optimal_cutoff(
    tpr: &[f64],
    fpr: &[f64],
    positives: u64,
    negatives: u64,
    method: CutoffMethod,
) -> Result<CutoffResult> {
    if tpr.is_empty() {
        return Err(RocError::InvalidInput("no points to search".into()));
    }
    if tpr.len() != fpr.len() {
        return Err(RocError::InvalidInput(format!(
            "tpr length {} != fpr length {}",
            tpr.len(),
            fpr.len()
        )));
    }

    let sens = |i: usize| tpr[i];
    let spec = |i: usize| 1.0 - fpr[i];

    let best = match method {
        CutoffMethod::Youden => argmax_first(0..tpr.len(), |i| sens(i) + spec(i) - 1.0),
        CutoffMethod::Sensitivity(target) => {
            argmax_first((0..tpr.len()).filter(|&i| sens(i) >= target), spec)
        }
        CutoffMethod::Specificity(target) => {
            argmax_first((0..tpr.len()).filter(|&i| spec(i) >= target), sens)
        }
    };

    let index = match (best, method) {
        (Some(i), _) => i,
        (None, CutoffMethod::Sensitivity(target)) | (None, CutoffMethod::Specificity(target)) => {
            tracing::debug!(%method, "no index meets the cutoff floor");
            return Err(RocError::NoQualifyingCutoff {
                criterion: method.name(),
                target,
            });
        }
        // Every Youden index is NaN; keep the first point.
        (None, CutoffMethod::Youden) => 0,
    };

    Ok(operating_point(index, sens(index), spec(index), positives, negatives))
}

/// Index of the strictly greatest key; the first index wins ties.
///
/// NaN keys are skipped: they never become or replace the running best, so
/// a leading NaN is passed over in favour of the first comparable key.
fn argmax_first<I, F>(indices: I, key: F) -> Option<usize>
where
    I: IntoIterator<Item = usize>,
    F: Fn(usize) -> f64,
{
    indices
        .into_iter()
        .fold(None, |best: Option<(usize, f64)>, i| {
            let k = key(i);
            match best {
                Some((_, bk)) if k > bk => Some((i, k)),
                Some(_) => best,
                None if k.is_nan() => None,
                None => Some((i, k)),
            }
        })
        .map(|(i, _)| i)
}

fn operating_point(
    index: usize,
    sensitivity: f64,
    specificity: f64,
    positives: u64,
    negatives: u64,
) -> CutoffResult {
    let (ppv, npv) = match ratio(positives as f64, positives as f64 + negatives as f64) {
        Some(prev) => (
            ratio(
                sensitivity * prev,
                sensitivity * prev + (1.0 - specificity) * (1.0 - prev),
            ),
            ratio(
                specificity * (1.0 - prev),
                (1.0 - sensitivity) * prev + specificity * (1.0 - prev),
            ),
        ),
        None => (None, None),
    };

    CutoffResult {
        threshold: index,
        sensitivity,
        specificity,
        youden_index: sensitivity + specificity - 1.0,
        ppv,
        npv,
    }
}
