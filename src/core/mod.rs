//! Pure calculation core: funnel inputs, derived campaign metrics, and the
//! presentation metadata that describes them.
//!
//! Nothing in this module performs I/O or knows about the UI. The surfaces
//! (TUI form, estimate command) call into it and render what comes back.

pub mod fields;
pub mod funnel;
pub mod report;

pub use fields::{
    input_field_spec, Accent, InputFieldSpec, MetricKind, OutputSpec, OUTPUT_SPECS,
};
pub use funnel::{
    derive_outputs, parse_amount, set_field, FunnelInputs, FunnelOutputs, InputField,
    DAYS_PER_MONTH,
};
pub use report::EstimateReport;

use serde::{Deserialize, Serialize};

/// When derivation runs relative to input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecalcMode {
    /// Re-derive the outputs on every input mutation.
    Reactive,
    /// Re-derive only on an explicit calculate action; displayed outputs may
    /// be stale relative to the current inputs between triggers.
    Deferred,
}

impl Default for RecalcMode {
    fn default() -> Self {
        Self::Reactive
    }
}
