//! Core trait definitions shared by rocstat result types.

/// A type that carries a numeric score (p-value, AUC, etc.).
pub trait Scored {
    /// The score value.
    fn score(&self) -> f64;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}

/// A type carrying a caller-supplied identifier (spreadsheet row id, dataset name).
pub trait Identified {
    /// The identifier.
    fn id(&self) -> &str;
}
