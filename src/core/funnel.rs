//! Funnel input state and the campaign metric derivation.
//!
//! Parsing and derivation are total: malformed text coerces to zero and a
//! zero conversion rate yields zero downstream metrics instead of a division
//! by zero. Nothing here is surfaced as an error.

use serde::{Deserialize, Serialize};

/// Fixed month length used to split the budget into a daily spend.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// The five funnel assumptions entered by the user.
///
/// Rates are percentages (a value of 20 means 20%); monetary fields are in
/// rupees. All fields default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FunnelInputs {
    pub target_sales: f64,
    pub click_to_meeting_rate: f64,
    pub meeting_to_sale_rate: f64,
    pub cost_per_click: f64,
    pub avg_order_value: f64,
}

/// The six metrics derived from the inputs. Never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FunnelOutputs {
    pub meetings_needed: f64,
    pub clicks_needed: f64,
    pub budget_required: f64,
    pub expected_revenue: f64,
    pub roi_percent: f64,
    pub daily_budget: f64,
}

/// Identifies one of the five input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    TargetSales,
    ClickToMeetingRate,
    MeetingToSaleRate,
    CostPerClick,
    AvgOrderValue,
}

impl InputField {
    /// All fields in form order.
    pub const ALL: [InputField; 5] = [
        InputField::TargetSales,
        InputField::ClickToMeetingRate,
        InputField::MeetingToSaleRate,
        InputField::CostPerClick,
        InputField::AvgOrderValue,
    ];
}

impl FunnelInputs {
    /// Read a single field by identifier.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::TargetSales => self.target_sales,
            InputField::ClickToMeetingRate => self.click_to_meeting_rate,
            InputField::MeetingToSaleRate => self.meeting_to_sale_rate,
            InputField::CostPerClick => self.cost_per_click,
            InputField::AvgOrderValue => self.avg_order_value,
        }
    }
}

/// Parse raw text as an amount. Anything that does not parse as a float
/// (empty string included) becomes zero; this never rejects.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Replace a single field with the parsed value of `raw`, leaving every
/// other field untouched.
pub fn set_field(inputs: &FunnelInputs, field: InputField, raw: &str) -> FunnelInputs {
    let value = parse_amount(raw);
    let mut next = *inputs;
    match field {
        InputField::TargetSales => next.target_sales = value,
        InputField::ClickToMeetingRate => next.click_to_meeting_rate = value,
        InputField::MeetingToSaleRate => next.meeting_to_sale_rate = value,
        InputField::CostPerClick => next.cost_per_click = value,
        InputField::AvgOrderValue => next.avg_order_value = value,
    }
    next
}

/// Derive the six campaign metrics from the current inputs.
///
/// Pure function of its argument. Guard clauses keep the chain at zero when
/// a conversion rate or the budget is zero.
pub fn derive_outputs(inputs: &FunnelInputs) -> FunnelOutputs {
    let meetings_needed = if inputs.meeting_to_sale_rate > 0.0 {
        inputs.target_sales / (inputs.meeting_to_sale_rate / 100.0)
    } else {
        0.0
    };

    let clicks_needed = if inputs.click_to_meeting_rate > 0.0 {
        meetings_needed / (inputs.click_to_meeting_rate / 100.0)
    } else {
        0.0
    };

    let budget_required = clicks_needed * inputs.cost_per_click;
    let expected_revenue = inputs.target_sales * inputs.avg_order_value;

    let roi_percent = if budget_required > 0.0 {
        (expected_revenue - budget_required) / budget_required * 100.0
    } else {
        0.0
    };

    let daily_budget = budget_required / DAYS_PER_MONTH;

    FunnelOutputs {
        meetings_needed,
        clicks_needed,
        budget_required,
        expected_revenue,
        roi_percent,
        daily_budget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> FunnelInputs {
        FunnelInputs {
            target_sales: 100.0,
            click_to_meeting_rate: 10.0,
            meeting_to_sale_rate: 20.0,
            cost_per_click: 5.0,
            avg_order_value: 1000.0,
        }
    }

    #[test]
    fn test_derive_worked_example() {
        let outputs = derive_outputs(&sample_inputs());

        assert_eq!(outputs.meetings_needed, 500.0);
        assert_eq!(outputs.clicks_needed, 5000.0);
        assert_eq!(outputs.budget_required, 25000.0);
        assert_eq!(outputs.expected_revenue, 100000.0);
        assert_eq!(outputs.roi_percent, 300.0);
        assert_eq!(outputs.daily_budget, 25000.0 / DAYS_PER_MONTH);
    }

    #[test]
    fn test_zero_meeting_rate_zeroes_the_chain() {
        let inputs = FunnelInputs {
            meeting_to_sale_rate: 0.0,
            ..sample_inputs()
        };
        let outputs = derive_outputs(&inputs);

        assert_eq!(outputs.meetings_needed, 0.0);
        assert_eq!(outputs.clicks_needed, 0.0);
        assert_eq!(outputs.budget_required, 0.0);
        assert_eq!(outputs.roi_percent, 0.0);
        assert_eq!(outputs.daily_budget, 0.0);
    }

    #[test]
    fn test_zero_budget_yields_zero_roi() {
        let inputs = FunnelInputs {
            cost_per_click: 0.0,
            ..sample_inputs()
        };
        let outputs = derive_outputs(&inputs);

        assert_eq!(outputs.budget_required, 0.0);
        assert_eq!(outputs.roi_percent, 0.0);
    }

    #[test]
    fn test_parse_amount_coerces_garbage_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12.5.3"), 0.0);
        assert_eq!(parse_amount(" 42.5 "), 42.5);
    }

    #[test]
    fn test_set_field_replaces_only_named_field() {
        let base = sample_inputs();
        let next = set_field(&base, InputField::CostPerClick, "7.5");

        assert_eq!(next.cost_per_click, 7.5);
        assert_eq!(next.target_sales, base.target_sales);
        assert_eq!(next.click_to_meeting_rate, base.click_to_meeting_rate);
        assert_eq!(next.meeting_to_sale_rate, base.meeting_to_sale_rate);
        assert_eq!(next.avg_order_value, base.avg_order_value);
    }
}
