//! Presentation metadata for the input form and the output cards.
//!
//! Minimums and step sizes here are widget constraints for input controls;
//! the derivation itself never enforces them.

use super::funnel::{FunnelOutputs, InputField};

/// How a metric is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Plain count: grouped digits, up to two decimals.
    Count,
    /// Rupee amount: grouped digits, exactly two decimals.
    Currency,
    /// Percentage: two decimals with a `%` suffix.
    Percent,
}

/// Accent class for an output card. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Info,
    Success,
    Warning,
}

/// Static description of one input field.
#[derive(Debug, Clone, Copy)]
pub struct InputFieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: MetricKind,
    /// Smallest value the input control should step down to.
    pub min: f64,
    /// Increment used by the input control's spinner.
    pub step: f64,
}

/// Form metadata for an input field.
pub fn input_field_spec(field: InputField) -> InputFieldSpec {
    match field {
        InputField::TargetSales => InputFieldSpec {
            label: "Target Sales",
            placeholder: "Enter target number of sales",
            kind: MetricKind::Count,
            min: 1.0,
            step: 1.0,
        },
        InputField::ClickToMeetingRate => InputFieldSpec {
            label: "Click-to-Meeting Rate (%)",
            placeholder: "Percentage of clicks that become meetings",
            kind: MetricKind::Percent,
            min: 0.01,
            step: 0.01,
        },
        InputField::MeetingToSaleRate => InputFieldSpec {
            label: "Meeting-to-Sale Rate (%)",
            placeholder: "Percentage of meetings that convert to sales",
            kind: MetricKind::Percent,
            min: 0.01,
            step: 0.01,
        },
        InputField::CostPerClick => InputFieldSpec {
            label: "Cost Per Click (₹)",
            placeholder: "Average cost per click in rupees",
            kind: MetricKind::Currency,
            min: 0.01,
            step: 0.01,
        },
        InputField::AvgOrderValue => InputFieldSpec {
            label: "Average Order Value (₹)",
            placeholder: "Average value per sale in rupees",
            kind: MetricKind::Currency,
            min: 0.01,
            step: 0.01,
        },
    }
}

/// Static description of one output card.
pub struct OutputSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: MetricKind,
    pub accent: Accent,
    get: fn(&FunnelOutputs) -> f64,
}

impl OutputSpec {
    /// Extract this card's value from a set of outputs.
    pub fn value(&self, outputs: &FunnelOutputs) -> f64 {
        (self.get)(outputs)
    }
}

/// The six output cards in display order.
pub const OUTPUT_SPECS: [OutputSpec; 6] = [
    OutputSpec {
        title: "Meetings Needed",
        description: "Required meetings to achieve target sales",
        kind: MetricKind::Count,
        accent: Accent::Info,
        get: |o| o.meetings_needed,
    },
    OutputSpec {
        title: "Clicks Needed",
        description: "Total clicks required for meetings",
        kind: MetricKind::Count,
        accent: Accent::Info,
        get: |o| o.clicks_needed,
    },
    OutputSpec {
        title: "Budget Required",
        description: "Total advertising budget needed",
        kind: MetricKind::Currency,
        accent: Accent::Success,
        get: |o| o.budget_required,
    },
    OutputSpec {
        title: "Expected Revenue",
        description: "Projected revenue from target sales",
        kind: MetricKind::Currency,
        accent: Accent::Success,
        get: |o| o.expected_revenue,
    },
    OutputSpec {
        title: "ROI",
        description: "Return on investment percentage",
        kind: MetricKind::Percent,
        accent: Accent::Warning,
        get: |o| o.roi_percent,
    },
    OutputSpec {
        title: "Daily Budget",
        description: "Recommended daily ad spend",
        kind: MetricKind::Currency,
        accent: Accent::Warning,
        get: |o| o.daily_budget,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_specs_cover_all_outputs() {
        let outputs = FunnelOutputs {
            meetings_needed: 1.0,
            clicks_needed: 2.0,
            budget_required: 3.0,
            expected_revenue: 4.0,
            roi_percent: 5.0,
            daily_budget: 6.0,
        };

        let values: Vec<f64> = OUTPUT_SPECS.iter().map(|s| s.value(&outputs)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_every_input_field_has_a_spec() {
        for field in InputField::ALL {
            let spec = input_field_spec(field);
            assert!(!spec.label.is_empty());
            assert!(spec.min > 0.0);
            assert!(spec.step > 0.0);
        }
    }
}
