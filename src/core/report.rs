//! Report payload assembled for the output writers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::funnel::{FunnelInputs, FunnelOutputs};

/// A timestamped snapshot of one estimate: the assumptions that went in and
/// the metrics that came out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    pub generated_at: DateTime<Utc>,
    pub inputs: FunnelInputs,
    pub outputs: FunnelOutputs,
}

impl EstimateReport {
    pub fn new(inputs: FunnelInputs, outputs: FunnelOutputs) -> Self {
        Self {
            generated_at: Utc::now(),
            inputs,
            outputs,
        }
    }
}
