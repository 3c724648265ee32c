use serde::Serialize;
use super::runner::BatchOutcome;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchSummary {
    pub total_tests: usize,
    pub successful_tests: usize,
    pub failed_tests: usize,
    pub avg_response_time: f64,
    pub total_cost: f64,
    pub avg_tokens: f64,
}

/// Aggregate over successful pairs; means are 0 when nothing succeeded.
pub fn summarize(results: &[BatchOutcome]) -> BatchSummary {
    let mut successful = 0usize;
    let mut time_sum = 0.0;
    let mut cost_sum = 0.0;
    let mut token_sum = 0u64;

    for outcome in results {
        if let BatchOutcome::Success { tokens, cost, time, .. } = outcome {
            successful += 1;
            time_sum += time;
            cost_sum += cost;
            token_sum += tokens;
        }
    }

    let mean = |sum: f64| if successful == 0 { 0.0 } else { sum / successful as f64 };

    BatchSummary {
        total_tests: results.len(),
        successful_tests: successful,
        failed_tests: results.len() - successful,
        avg_response_time: mean(time_sum),
        total_cost: cost_sum,
        avg_tokens: mean(token_sum as f64),
    }
}
