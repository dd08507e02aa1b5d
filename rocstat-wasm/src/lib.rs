//! JSON boundary and WASM bindings for rocstat.
//!
//! Every public function accepts simple types (`&str`, `f64`, `u32`) and
//! returns a JSON `String`:
//!
//! - Success: `{"ok": <value>}`
//! - Failure: `{"error": "<message>"}`
//!
//! Curves and rows travel as JSON text. Building with the `wasm` feature adds
//! `#[wasm_bindgen]` exports for `wasm32` targets.
//!
//! # Modules
//!
//! - [`roc`]: Row metrics, AUC, analysis, cutoffs, comparison, bootstrap
//!
//! # Example
//!
//! ```
//! let json = rocstat_wasm::analyze_roc("[0, 0.85, 1]", "[0, 0.15, 1]", 100, 100);
//! let v: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(v["ok"]["grade"], "good");
//! ```

pub mod error;
pub mod roc;

/// Crate version (set from Cargo.toml at compile time).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use roc::{
    analyze_roc, analyze_rows, bootstrap_ci, compare_curves, estimate_auc, find_optimal_cutoff,
    row_metrics, standard_error, JsRocSummary, JsRowMetrics,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn reexports_return_ok() {
        let row = r#"{"id":"a","tp":8,"fp":2,"tn":8,"fn":2}"#;
        let curve = r#"{"tpr":[0,0.8,1],"fpr":[0,0.2,1],"positives":10,"negatives":10}"#;
        for json in [
            row_metrics(row),
            estimate_auc("[0,1]", "[0,1]"),
            standard_error(0.7, 10, 10),
            analyze_roc("[0,1]", "[0,1]", 10, 10),
            analyze_rows(&format!("[{row}]")),
            find_optimal_cutoff("[0,1]", "[0,1]", 10, 10, "youden", None),
            compare_curves(curve, curve),
            bootstrap_ci(&format!("[{row},{row}]"), 20, 0.9, 1),
        ] {
            let v: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert!(v.get("ok").is_some(), "{json}");
        }
    }

    #[test]
    fn every_response_is_an_envelope() {
        for json in [
            estimate_auc("not json", "[]"),
            standard_error(2.0, 10, 10),
            analyze_roc("[0.5]", "[0.5]", 10, 10),
        ] {
            let v: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert!(v.get("ok").is_some() || v.get("error").is_some());
        }
    }
}
