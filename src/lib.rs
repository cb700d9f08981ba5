// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod tui;

// Re-export commonly used types
pub use crate::core::{
    derive_outputs, input_field_spec, parse_amount, set_field, Accent, EstimateReport,
    FunnelInputs, FunnelOutputs, InputField, InputFieldSpec, MetricKind, OutputSpec, RecalcMode,
    DAYS_PER_MONTH, OUTPUT_SPECS,
};

pub use crate::formatting::{
    display_or_dash, format_count, format_currency, format_metric, format_percent,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
