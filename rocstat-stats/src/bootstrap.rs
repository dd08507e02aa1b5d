//! Percentile bootstrap confidence interval for the AUC.
//!
//! Rows are resampled with replacement, each resample is sorted by FPR and
//! integrated with the trapezoidal rule, and the interval is read off the
//! sorted bootstrap AUCs at indices `floor(alpha/2 · B)` and
//! `floor((1 - alpha/2) · B)`. There is no rounding or interpolation.
//!
//! The random source is always supplied by the caller; use
//! [`bootstrap_ci_seeded`] for reproducible output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rocstat_core::{Result, RocError, Summarizable};

use crate::auc::trapezoidal_auc;
use crate::confusion::{ratio, ConfusionMatrixRow};

// ── Configuration ──────────────────────────────────────────────────────────

/// Bootstrap settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BootstrapConfig {
    /// Number of resamples (B).
    pub iterations: usize,
    /// Two-sided confidence level, strictly between 0 and 1.
    pub confidence: f64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            confidence: 0.95,
        }
    }
}

impl BootstrapConfig {
    /// Sorted-sample indices of the lower and upper percentiles.
    ///
    /// With `alpha = 1 - confidence` these are `floor(alpha/2 · B)` and
    /// `floor((1 - alpha/2) · B)`.
    pub fn percentile_indices(&self) -> (usize, usize) {
        let alpha = 1.0 - self.confidence;
        let b = self.iterations as f64;
        (
            (alpha / 2.0 * b).floor() as usize,
            ((1.0 - alpha / 2.0) * b).floor() as usize,
        )
    }

    /// Check that the settings describe a usable interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `iterations` is zero, `confidence` is outside
    /// `(0, 1)`, or the upper percentile index falls off the sample.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(RocError::InvalidInput(
                "bootstrap: iterations must be > 0".into(),
            ));
        }
        // NaN fails `contains`.
        if !(0.0..1.0).contains(&self.confidence) || self.confidence == 0.0 {
            return Err(RocError::InvalidInput(format!(
                "bootstrap: confidence must be in (0, 1), got {}",
                self.confidence
            )));
        }
        let (_, upper) = self.percentile_indices();
        if upper >= self.iterations {
            return Err(RocError::InvalidInput(format!(
                "bootstrap: {} iterations are too few for confidence {}",
                self.iterations, self.confidence
            )));
        }
        Ok(())
    }
}

// ── Result ─────────────────────────────────────────────────────────────────

/// Percentile bootstrap interval for the AUC.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BootstrapInterval {
    /// AUC at the lower percentile index.
    pub ci_lower: f64,
    /// AUC at the upper percentile index.
    pub ci_upper: f64,
    /// Index of `ci_lower` in the sorted bootstrap AUCs.
    pub lower_index: usize,
    /// Index of `ci_upper` in the sorted bootstrap AUCs.
    pub upper_index: usize,
    /// Number of resamples drawn.
    pub iterations: usize,
    /// Confidence level used.
    pub confidence: f64,
}

impl Summarizable for BootstrapInterval {
    fn summary(&self) -> String {
        format!(
            "bootstrap {:.0}% CI {:.4}-{:.4} (B={})",
            self.confidence * 100.0,
            self.ci_lower,
            self.ci_upper,
            self.iterations,
        )
    }
}

// ── Resampling ─────────────────────────────────────────────────────────────

/// `(fpr, tpr)` for every row, using `fpr = fp / (fp + tn)`.
fn row_points(rows: &[ConfusionMatrixRow]) -> Result<Vec<(f64, f64)>> {
    if rows.is_empty() {
        return Err(RocError::InvalidInput("bootstrap: no rows".into()));
    }
    rows.iter()
        .map(|row| {
            let tpr = ratio(row.tp as f64, row.tp as f64 + row.fn_ as f64);
            let fpr = ratio(row.fp as f64, row.fp as f64 + row.tn as f64);
            match (fpr, tpr) {
                (Some(fpr), Some(tpr)) => Ok((fpr, tpr)),
                _ => Err(RocError::DegenerateInput(format!(
                    "bootstrap: row '{}' has an empty class",
                    row.id
                ))),
            }
        })
        .collect()
}

/// AUC of one resample of `points`, drawn with replacement from `rng`.
fn resample_auc<R: Rng + ?Sized>(points: &[(f64, f64)], rng: &mut R) -> f64 {
    let n = points.len();
    let mut sample: Vec<(f64, f64)> = (0..n).map(|_| points[rng.gen_range(0..n)]).collect();
    sample.sort_by(|a, b| a.0.total_cmp(&b.0));

    let x: Vec<f64> = sample.iter().map(|p| p.0).collect();
    let y: Vec<f64> = sample.iter().map(|p| p.1).collect();
    trapezoidal_auc(&x, &y)
}

fn percentile_interval(mut aucs: Vec<f64>, config: &BootstrapConfig) -> BootstrapInterval {
    aucs.sort_by(f64::total_cmp);
    let (lower_index, upper_index) = config.percentile_indices();
    BootstrapInterval {
        ci_lower: aucs[lower_index],
        ci_upper: aucs[upper_index],
        lower_index,
        upper_index,
        iterations: config.iterations,
        confidence: config.confidence,
    }
}

/// Percentile bootstrap CI for the AUC of `rows`, drawing from `rng`.
///
/// Each of `config.iterations` rounds draws `rows.len()` rows uniformly with
/// replacement, sorts them by FPR, and computes the trapezoidal AUC.
///
/// # Errors
///
/// Returns an error if `rows` is empty, a row has an empty class, or the
/// configuration is invalid.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rocstat_stats::bootstrap::{bootstrap_ci, BootstrapConfig};
/// use rocstat_stats::confusion::ConfusionMatrixRow;
///
/// let rows = vec![
///     ConfusionMatrixRow::new("t1", 95, 40, 60, 5),
///     ConfusionMatrixRow::new("t2", 80, 15, 85, 20),
///     ConfusionMatrixRow::new("t3", 50, 3, 97, 50),
/// ];
/// let mut rng = StdRng::seed_from_u64(7);
/// let ci = bootstrap_ci(&rows, &BootstrapConfig::default(), &mut rng).unwrap();
/// assert!(ci.ci_lower <= ci.ci_upper);
/// ```
pub fn bootstrap_ci<R: Rng + ?Sized>(
    rows: &[ConfusionMatrixRow],
    config: &BootstrapConfig,
    rng: &mut R,
) -> Result<BootstrapInterval> {
    config.validate()?;
    let points = row_points(rows)?;

    tracing::debug!(
        rows = rows.len(),
        iterations = config.iterations,
        confidence = config.confidence,
        "starting AUC bootstrap"
    );

    let aucs: Vec<f64> = (0..config.iterations)
        .map(|_| resample_auc(&points, &mut *rng))
        .collect();
    let interval = percentile_interval(aucs, config);

    tracing::debug!(
        ci_lower = interval.ci_lower,
        ci_upper = interval.ci_upper,
        "finished AUC bootstrap"
    );
    Ok(interval)
}

/// [`bootstrap_ci`] with a [`StdRng`] seeded from `seed`.
///
/// # Errors
///
/// Same as [`bootstrap_ci`].
pub fn bootstrap_ci_seeded(
    rows: &[ConfusionMatrixRow],
    config: &BootstrapConfig,
    seed: u64,
) -> Result<BootstrapInterval> {
    let mut rng = StdRng::seed_from_u64(seed);
    bootstrap_ci(rows, config, &mut rng)
}

/// Parallel bootstrap over the rayon thread pool.
///
/// Resample `i` draws from its own [`StdRng`] seeded with
/// `seed.wrapping_add(i)`, so the interval depends only on `seed`, not on
/// thread count or scheduling. It does not match [`bootstrap_ci_seeded`]
/// for the same seed.
///
/// # Errors
///
/// Same as [`bootstrap_ci`].
#[cfg(feature = "parallel")]
pub fn bootstrap_ci_parallel(
    rows: &[ConfusionMatrixRow],
    config: &BootstrapConfig,
    seed: u64,
) -> Result<BootstrapInterval> {
    use rayon::prelude::*;

    config.validate()?;
    let points = row_points(rows)?;

    let aucs: Vec<f64> = (0..config.iterations)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            resample_auc(&points, &mut rng)
        })
        .collect();

    tracing::debug!(iterations = config.iterations, "finished parallel AUC bootstrap");
    Ok(percentile_interval(aucs, config))
}
