//! Tuning constants for the hunting passes.
//!
//! Kept as a small `Copy` struct with a `Default` rather than adopted into
//! `quarto-config`'s TOML-backed layered configuration: those constants are
//! geometric tolerances intrinsic to the algorithm, not user-facing
//! settings, and the original hardcoded them as literals for the same
//! reason.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuntOptions {
    /// Below this thickness (in page units) a vector block is treated as a
    /// drawn rule rather than a filled rectangle.
    pub thin_threshold: f64,
    /// Maximum gap between two thin vector blocks on the same line for them
    /// to be merged into one dashed/dotted rule during the rule-walk retry.
    pub dash_merge_gap: f64,
    /// Minimum number of grid positions required on each axis (dividers,
    /// not columns/rows) before a candidate is considered for emission.
    pub min_positions: usize,
}

impl Default for HuntOptions {
    fn default() -> Self {
        HuntOptions {
            thin_threshold: 1.0,
            dash_merge_gap: 1.0,
            min_positions: 3,
        }
    }
}
