//! ROC/AUC operations with JSON input/output.
//!
//! Result types from `rocstat-stats` serialize directly; the `Js*` types
//! here add derived fields the browser renders alongside them. Non-finite
//! numbers (an infinite z-score, say) serialize as `null`.

use serde::Serialize;

use rocstat_stats::bootstrap::{self, BootstrapConfig};
use rocstat_stats::comparison;
use rocstat_stats::confusion::{self, ConfusionMatrixRow, DerivedPoint};
use rocstat_stats::cutoff::{self, CutoffMethod};
use rocstat_stats::significance::{self, RocInput, RocSummary};
use rocstat_stats::{auc, standard_error as se};

use crate::error::{parse_json, wasm_err, wasm_ok, wasm_result};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

// ── Wrapper types ────────────────────────────────────────────────────────

/// Per-row rates plus likelihood ratios.
#[derive(Debug, Serialize)]
pub struct JsRowMetrics {
    #[serde(flatten)]
    pub point: DerivedPoint,
    pub positive_likelihood_ratio: Option<f64>,
    pub negative_likelihood_ratio: Option<f64>,
    pub diagnostic_odds_ratio: Option<f64>,
}

impl From<DerivedPoint> for JsRowMetrics {
    fn from(point: DerivedPoint) -> Self {
        Self {
            positive_likelihood_ratio: point.positive_likelihood_ratio(),
            negative_likelihood_ratio: point.negative_likelihood_ratio(),
            diagnostic_odds_ratio: point.diagnostic_odds_ratio(),
            point,
        }
    }
}

/// A [`RocSummary`] with its qualitative grade.
#[derive(Debug, Serialize)]
pub struct JsRocSummary {
    #[serde(flatten)]
    pub summary: RocSummary,
    pub grade: &'static str,
}

impl From<RocSummary> for JsRocSummary {
    fn from(summary: RocSummary) -> Self {
        Self {
            grade: summary.grade().label(),
            summary,
        }
    }
}

// ── JSON boundary functions ──────────────────────────────────────────────

fn parse_f64_array(what: &str, json: &str) -> Result<Vec<f64>, String> {
    parse_json::<Vec<f64>>(what, json)
}

/// Sensitivity, specificity, TPR, FPR, and likelihood ratios for one row.
///
/// Input: `{"id": "t1", "tp": 85, "fp": 15, "tn": 85, "fn": 15}`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn row_metrics(row_json: &str) -> String {
    let row: ConfusionMatrixRow = match parse_json("row", row_json) {
        Ok(r) => r,
        Err(e) => return wasm_err(e),
    };
    wasm_ok(&JsRowMetrics::from(confusion::row_metrics(&row)))
}

/// Trapezoidal AUC of JSON `fpr` and `tpr` arrays, in the order given.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn estimate_auc(fpr_json: &str, tpr_json: &str) -> String {
    let fpr = match parse_f64_array("fpr array", fpr_json) {
        Ok(v) => v,
        Err(e) => return wasm_err(e),
    };
    let tpr = match parse_f64_array("tpr array", tpr_json) {
        Ok(v) => v,
        Err(e) => return wasm_err(e),
    };
    wasm_result(auc::estimate_auc(&fpr, &tpr))
}

/// Hanley–McNeil standard error.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn standard_error(auc: f64, positives: u32, negatives: u32) -> String {
    wasm_result(se::standard_error(auc, positives.into(), negatives.into()))
}

/// AUC, 95% CI, p-value, and Youden cutoff from JSON `tpr`/`fpr` arrays.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn analyze_roc(tpr_json: &str, fpr_json: &str, positives: u32, negatives: u32) -> String {
    let tpr = match parse_f64_array("tpr array", tpr_json) {
        Ok(v) => v,
        Err(e) => return wasm_err(e),
    };
    let fpr = match parse_f64_array("fpr array", fpr_json) {
        Ok(v) => v,
        Err(e) => return wasm_err(e),
    };
    wasm_result(
        significance::analyze_roc(&tpr, &fpr, positives.into(), negatives.into())
            .map(JsRocSummary::from),
    )
}

/// Full analysis of a JSON array of confusion-matrix rows.
///
/// Endpoints (0, 0) and (1, 1) are added before integration.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn analyze_rows(rows_json: &str) -> String {
    let rows: Vec<ConfusionMatrixRow> = match parse_json("rows", rows_json) {
        Ok(r) => r,
        Err(e) => return wasm_err(e),
    };
    wasm_result(significance::analyze_rows(&rows).map(JsRocSummary::from))
}

/// Optimal cutoff by `"youden"`, `"sensitivity"`, or `"specificity"`.
///
/// `target` is the floor for the latter two methods and ignored otherwise.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn find_optimal_cutoff(
    tpr_json: &str,
    fpr_json: &str,
    positives: u32,
    negatives: u32,
    method: &str,
    target: Option<f64>,
) -> String {
    let tpr = match parse_f64_array("tpr array", tpr_json) {
        Ok(v) => v,
        Err(e) => return wasm_err(e),
    };
    let fpr = match parse_f64_array("fpr array", fpr_json) {
        Ok(v) => v,
        Err(e) => return wasm_err(e),
    };
    let method = match CutoffMethod::from_parts(method, target) {
        Ok(m) => m,
        Err(e) => return wasm_err(e),
    };
    wasm_result(cutoff::find_optimal_cutoff(
        &tpr,
        &fpr,
        positives.into(),
        negatives.into(),
        method,
    ))
}

/// Independent-variance comparison of two curves.
///
/// Each curve is `{"tpr": [...], "fpr": [...], "positives": n, "negatives": n}`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn compare_curves(curve1_json: &str, curve2_json: &str) -> String {
    let a: RocInput = match parse_json("first curve", curve1_json) {
        Ok(c) => c,
        Err(e) => return wasm_err(e),
    };
    let b: RocInput = match parse_json("second curve", curve2_json) {
        Ok(c) => c,
        Err(e) => return wasm_err(e),
    };
    wasm_result(comparison::compare_curves_independent(&a, &b))
}

/// Seeded percentile bootstrap CI for a JSON array of rows.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn bootstrap_ci(rows_json: &str, iterations: u32, confidence: f64, seed: u32) -> String {
    let rows: Vec<ConfusionMatrixRow> = match parse_json("rows", rows_json) {
        Ok(r) => r,
        Err(e) => return wasm_err(e),
    };
    let config = BootstrapConfig {
        iterations: iterations as usize,
        confidence,
    };
    #[cfg(feature = "parallel")]
    let result = bootstrap::bootstrap_ci_parallel(&rows, &config, seed.into());
    #[cfg(not(feature = "parallel"))]
    let result = bootstrap::bootstrap_ci_seeded(&rows, &config, seed.into());
    wasm_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn row_metrics_known() {
        let v = parse(&row_metrics(r#"{"id":"t1","tp":80,"fp":10,"tn":90,"fn":20}"#));
        let ok = &v["ok"];
        assert!((ok["sensitivity"].as_f64().unwrap() - 0.8).abs() < 1e-12);
        assert!((ok["specificity"].as_f64().unwrap() - 0.9).abs() < 1e-12);
        assert!((ok["positive_likelihood_ratio"].as_f64().unwrap() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn row_metrics_undefined_rate_is_null() {
        let v = parse(&row_metrics(r#"{"id":"t1","tp":0,"fp":10,"tn":90,"fn":0}"#));
        assert!(v["ok"]["sensitivity"].is_null());
        assert!(v["ok"]["tpr"].is_null());
    }

    #[test]
    fn row_metrics_bad_json() {
        let v = parse(&row_metrics(r#"{"id":"t1","tp":-1}"#));
        assert!(v["error"].as_str().unwrap().starts_with("invalid row"));
    }

    #[test]
    fn row_metrics_accepts_full_u64_counts() {
        let json = format!(r#"{{"id":"big","tp":{},"fp":1,"tn":1,"fn":1}}"#, u64::MAX);
        let v = parse(&row_metrics(&json));
        assert!((v["ok"]["specificity"].as_f64().unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn estimate_auc_diagonal() {
        let v = parse(&estimate_auc("[0, 0.5, 1]", "[0, 0.5, 1]"));
        assert!((v["ok"].as_f64().unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn estimate_auc_mismatch() {
        let v = parse(&estimate_auc("[0, 1]", "[0]"));
        assert!(v["error"].is_string());
    }

    #[test]
    fn standard_error_known() {
        let v = parse(&standard_error(0.85, 100, 100));
        assert!((v["ok"].as_f64().unwrap() - 0.02752).abs() < 1e-5);
        let v = parse(&standard_error(0.85, 0, 100));
        assert!(v["error"].is_string());
    }

    #[test]
    fn analyze_roc_includes_grade() {
        let v = parse(&analyze_roc("[0, 0.85, 1]", "[0, 0.15, 1]", 100, 100));
        let ok = &v["ok"];
        assert!((ok["auc"].as_f64().unwrap() - 0.85).abs() < 1e-12);
        assert_eq!(ok["grade"], "good");
        assert_eq!(ok["optimal_cutoff"]["threshold"], 1);
        assert_eq!(ok["sample_size"], 200);
    }

    #[test]
    fn analyze_rows_pads_endpoints() {
        let v = parse(&analyze_rows(r#"[{"id":"t1","tp":85,"fp":15,"tn":85,"fn":15}]"#));
        assert!((v["ok"]["auc"].as_f64().unwrap() - 0.85).abs() < 1e-12);
    }

    #[test]
    fn cutoff_methods() {
        let tpr = "[0.95, 0.85, 0.60]";
        let fpr = "[0.50, 0.10, 0.05]";
        let v = parse(&find_optimal_cutoff(tpr, fpr, 100, 100, "youden", None));
        assert_eq!(v["ok"]["threshold"], 1);
        let v = parse(&find_optimal_cutoff(tpr, fpr, 100, 100, "sensitivity", Some(0.9)));
        assert_eq!(v["ok"]["threshold"], 0);
        let v = parse(&find_optimal_cutoff(tpr, fpr, 100, 100, "specificity", Some(0.99)));
        assert!(v["error"].as_str().unwrap().contains("no cutoff"));
        let v = parse(&find_optimal_cutoff(tpr, fpr, 100, 100, "specificity", None));
        assert!(v["error"].is_string());
    }

    #[test]
    fn compare_identical_curves() {
        let c = r#"{"tpr":[0,0.85,1],"fpr":[0,0.15,1],"positives":100,"negatives":100}"#;
        let v = parse(&compare_curves(c, c));
        let ok = &v["ok"];
        assert_eq!(ok["difference"], 0.0);
        assert!((ok["p_value"].as_f64().unwrap() - 1.0).abs() < 1e-8);
        assert!(ok["method"].as_str().unwrap().contains("independent"));
    }

    #[test]
    fn bootstrap_reproducible() {
        let rows = r#"[
            {"id":"a","tp":95,"fp":40,"tn":60,"fn":5},
            {"id":"b","tp":80,"fp":15,"tn":85,"fn":20},
            {"id":"c","tp":50,"fp":3,"tn":97,"fn":50}
        ]"#;
        let a = bootstrap_ci(rows, 500, 0.95, 11);
        let b = bootstrap_ci(rows, 500, 0.95, 11);
        assert_eq!(a, b);
        let v = parse(&a);
        assert_eq!(v["ok"]["lower_index"], 12);
        assert_eq!(v["ok"]["upper_index"], 487);
    }

    #[test]
    fn bootstrap_rejects_bad_confidence() {
        let rows = r#"[{"id":"a","tp":1,"fp":1,"tn":1,"fn":1}]"#;
        let v = parse(&bootstrap_ci(rows, 100, 1.5, 0));
        assert!(v["error"].is_string());
    }
}
