//! One-shot estimate: flags in, report out.

use anyhow::Result;
use std::path::PathBuf;

use crate::core::{derive_outputs, set_field, EstimateReport, FunnelInputs, InputField};
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};

/// Configuration for the estimate command.
pub struct EstimateConfig {
    pub target_sales: String,
    pub click_to_meeting: String,
    pub meeting_to_sale: String,
    pub cost_per_click: String,
    pub avg_order_value: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

pub fn handle_estimate(config: EstimateConfig) -> Result<()> {
    let inputs = build_inputs(&config);
    let outputs = derive_outputs(&inputs);
    let report = EstimateReport::new(inputs, outputs);

    let mut writer = create_writer(config.format, config.output, config.formatting)?;
    writer.write_report(&report)
}

// Flag values go through the same coercion path the interactive form uses:
// malformed text becomes zero, never an error.
fn build_inputs(config: &EstimateConfig) -> FunnelInputs {
    let fields = [
        (InputField::TargetSales, config.target_sales.as_str()),
        (InputField::ClickToMeetingRate, config.click_to_meeting.as_str()),
        (InputField::MeetingToSaleRate, config.meeting_to_sale.as_str()),
        (InputField::CostPerClick, config.cost_per_click.as_str()),
        (InputField::AvgOrderValue, config.avg_order_value.as_str()),
    ];

    fields
        .iter()
        .fold(FunnelInputs::default(), |inputs, (field, raw)| {
            set_field(&inputs, *field, raw)
        })
}
