use adplan::{derive_outputs, FunnelInputs, DAYS_PER_MONTH};
use proptest::prelude::*;

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
fn test_worked_example() {
    let outputs = derive_outputs(&sample_inputs());

    assert_eq!(outputs.meetings_needed, 500.0);
    assert_eq!(outputs.clicks_needed, 5000.0);
    assert_eq!(outputs.budget_required, 25000.0);
    assert_eq!(outputs.expected_revenue, 100000.0);
    assert_eq!(outputs.roi_percent, 300.0);
    assert!((outputs.daily_budget - 833.3333333333334).abs() < 1e-9);
}

#[test]
fn test_all_zero_inputs_yield_all_zero_outputs() {
    let outputs = derive_outputs(&FunnelInputs::default());

    assert_eq!(outputs.meetings_needed, 0.0);
    assert_eq!(outputs.clicks_needed, 0.0);
    assert_eq!(outputs.budget_required, 0.0);
    assert_eq!(outputs.expected_revenue, 0.0);
    assert_eq!(outputs.roi_percent, 0.0);
    assert_eq!(outputs.daily_budget, 0.0);
}

#[test]
fn test_zero_click_rate_with_positive_meeting_rate() {
    let inputs = FunnelInputs {
        click_to_meeting_rate: 0.0,
        ..sample_inputs()
    };
    let outputs = derive_outputs(&inputs);

    // Meetings are still derivable; everything downstream of clicks is not.
    assert_eq!(outputs.meetings_needed, 500.0);
    assert_eq!(outputs.clicks_needed, 0.0);
    assert_eq!(outputs.budget_required, 0.0);
    assert_eq!(outputs.roi_percent, 0.0);
    assert_eq!(outputs.daily_budget, 0.0);
}

#[test]
fn test_daily_budget_is_exactly_budget_over_thirty() {
    let outputs = derive_outputs(&sample_inputs());
    assert_eq!(outputs.daily_budget, outputs.budget_required / DAYS_PER_MONTH);
}

#[test]
fn test_negative_roi_when_budget_exceeds_revenue() {
    let inputs = FunnelInputs {
        avg_order_value: 100.0,
        ..sample_inputs()
    };
    let outputs = derive_outputs(&inputs);

    // Revenue 10,000 against a 25,000 budget.
    assert_eq!(outputs.roi_percent, -60.0);
}

proptest! {
    #[test]
    fn prop_derivation_is_deterministic(
        target_sales in 0.0..1e6f64,
        click_rate in 0.0..100.0f64,
        meeting_rate in 0.0..100.0f64,
        cost_per_click in 0.0..1e4f64,
        avg_order_value in 0.0..1e6f64,
    ) {
        let inputs = FunnelInputs {
            target_sales,
            click_to_meeting_rate: click_rate,
            meeting_to_sale_rate: meeting_rate,
            cost_per_click,
            avg_order_value,
        };

        prop_assert_eq!(derive_outputs(&inputs), derive_outputs(&inputs));
    }

    #[test]
    fn prop_zero_meeting_rate_zeroes_the_chain(
        target_sales in 0.0..1e6f64,
        click_rate in 0.0..100.0f64,
        cost_per_click in 0.0..1e4f64,
        avg_order_value in 0.0..1e6f64,
    ) {
        let inputs = FunnelInputs {
            target_sales,
            click_to_meeting_rate: click_rate,
            meeting_to_sale_rate: 0.0,
            cost_per_click,
            avg_order_value,
        };
        let outputs = derive_outputs(&inputs);

        prop_assert_eq!(outputs.meetings_needed, 0.0);
        prop_assert_eq!(outputs.clicks_needed, 0.0);
        prop_assert_eq!(outputs.budget_required, 0.0);
        prop_assert_eq!(outputs.daily_budget, 0.0);
    }

    #[test]
    fn prop_outputs_are_always_finite(
        target_sales in 0.0..1e6f64,
        click_rate in 0.0..100.0f64,
        meeting_rate in 0.0..100.0f64,
        cost_per_click in 0.0..1e4f64,
        avg_order_value in 0.0..1e6f64,
    ) {
        let inputs = FunnelInputs {
            target_sales,
            click_to_meeting_rate: click_rate,
            meeting_to_sale_rate: meeting_rate,
            cost_per_click,
            avg_order_value,
        };
        let outputs = derive_outputs(&inputs);

        // The guards keep every division defined, so no input in range
        // produces an infinity or NaN.
        prop_assert!(outputs.meetings_needed.is_finite());
        prop_assert!(outputs.clicks_needed.is_finite());
        prop_assert!(outputs.budget_required.is_finite());
        prop_assert!(outputs.expected_revenue.is_finite());
        prop_assert!(outputs.roi_percent.is_finite());
        prop_assert!(outputs.daily_budget.is_finite());
    }
}
