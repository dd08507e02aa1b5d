//! ROC/AUC statistics for diagnostic tests reported as confusion-matrix rows.
//!
//! Every function is pure and synchronous. Modules, leaf-first:
//!
//! - [`distribution`]: Standard normal CDF (Abramowitz & Stegun `erf`), two-sided p-values
//! - [`confusion`]: Rows, per-threshold rates, curve samples
//! - [`auc`]: Trapezoidal AUC
//! - [`standard_error`]: Hanley–McNeil standard error
//! - [`cutoff`]: Youden and fixed-floor optimal cutoff search
//! - [`significance`]: Single-curve CI and z-test against AUC = 0.5
//! - [`comparison`]: Independent-variance two-curve comparison
//! - [`bootstrap`]: Percentile bootstrap CI with an injected RNG
//! - [`interpretation`]: Qualitative AUC bands
//!
//! # Example
//!
//! ```
//! use rocstat_stats::analyze_roc;
//!
//! let summary = analyze_roc(&[0.0, 0.85, 1.0], &[0.0, 0.15, 1.0], 100, 100).unwrap();
//! assert!((summary.auc - 0.85).abs() < 1e-12);
//! assert!(summary.ci_lower <= summary.auc && summary.auc <= summary.ci_upper);
//! ```

pub mod auc;
pub mod bootstrap;
pub mod comparison;
pub mod confusion;
pub mod cutoff;
pub mod distribution;
pub mod interpretation;
pub mod significance;
pub mod standard_error;

pub use auc::estimate_auc;
pub use bootstrap::{bootstrap_ci, bootstrap_ci_seeded, BootstrapConfig, BootstrapInterval};
#[cfg(feature = "parallel")]
pub use bootstrap::bootstrap_ci_parallel;
pub use comparison::{compare_curves_independent, CurveComparisonResult};
pub use confusion::{row_metrics, ConfusionMatrixRow, CurveSample, DerivedPoint};
pub use cutoff::{find_optimal_cutoff, CutoffMethod, CutoffResult};
pub use distribution::{erf, normal_cdf, two_sided_p};
pub use interpretation::AucGrade;
pub use significance::{analyze_roc, analyze_rows, RocInput, RocSummary};
pub use standard_error::standard_error;
