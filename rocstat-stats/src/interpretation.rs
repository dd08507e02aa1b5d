//! Qualitative bands for reporting AUC values.

use std::fmt;

/// Conventional accuracy band for a diagnostic test's AUC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AucGrade {
    /// AUC < 0.6 (or not a number).
    Fail,
    /// 0.6 ≤ AUC < 0.7.
    Poor,
    /// 0.7 ≤ AUC < 0.8.
    Fair,
    /// 0.8 ≤ AUC < 0.9.
    Good,
    /// AUC ≥ 0.9.
    Excellent,
}

impl AucGrade {
    /// Band containing `auc`.
    pub fn from_auc(auc: f64) -> Self {
        if auc >= 0.9 {
            AucGrade::Excellent
        } else if auc >= 0.8 {
            AucGrade::Good
        } else if auc >= 0.7 {
            AucGrade::Fair
        } else if auc >= 0.6 {
            AucGrade::Poor
        } else {
            AucGrade::Fail
        }
    }

    /// Lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            AucGrade::Fail => "fail",
            AucGrade::Poor => "poor",
            AucGrade::Fair => "fair",
            AucGrade::Good => "good",
            AucGrade::Excellent => "excellent",
        }
    }
}

impl fmt::Display for AucGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(AucGrade::from_auc(1.0), AucGrade::Excellent);
        assert_eq!(AucGrade::from_auc(0.9), AucGrade::Excellent);
        assert_eq!(AucGrade::from_auc(0.8999), AucGrade::Good);
        assert_eq!(AucGrade::from_auc(0.8), AucGrade::Good);
        assert_eq!(AucGrade::from_auc(0.75), AucGrade::Fair);
        assert_eq!(AucGrade::from_auc(0.6), AucGrade::Poor);
        assert_eq!(AucGrade::from_auc(0.5), AucGrade::Fail);
        assert_eq!(AucGrade::from_auc(f64::NAN), AucGrade::Fail);
    }

    #[test]
    fn ordering_and_labels() {
        assert!(AucGrade::Excellent > AucGrade::Fair);
        assert_eq!(AucGrade::Good.to_string(), "good");
    }
}
