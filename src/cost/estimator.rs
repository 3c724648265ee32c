use serde::{Serialize, Serializer};
use super::pricing::{get_price, PRICE_TABLE};

pub const DEFAULT_MONTHLY_QUERIES: u64 = 10_000;
pub const DEFAULT_AVG_TOKENS_PER_QUERY: u64 = 500;

const INPUT_SHARE: f64 = 0.3;
const OUTPUT_SHARE: f64 = 0.7;

#[derive(Debug, Clone, Serialize)]
pub struct CostAssumptions {
    pub monthly_queries: u64,
    pub avg_tokens_per_query: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModelEstimate {
    #[serde(skip)]
    pub model: &'static str,
    pub monthly_cost: f64,
    pub yearly_cost: f64,
    pub cost_per_query: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostEstimation {
    pub assumptions: CostAssumptions,
    /// Price table order; serialized as a map keyed by model id.
    #[serde(serialize_with = "by_model")]
    pub estimations: Vec<ModelEstimate>,
}

impl CostEstimation {
    pub fn get(&self, model: &str) -> Option<&ModelEstimate> {
        self.estimations.iter().find(|e| e.model == model)
    }
}

fn by_model<S: Serializer>(estimations: &[ModelEstimate], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(estimations.iter().map(|e| (e.model, e)))
}

/// Cost of a single call. The input/output split is unknown at this point,
/// so the mean of both per-1K prices is applied to the whole count.
pub fn calculate_cost(model: &str, tokens: u64) -> f64 {
    match get_price(model) {
        Some(price) => {
            let avg_price = (price.input + price.output) / 2.0;
            (tokens as f64 / 1000.0) * avg_price
        }
        None => 0.0,
    }
}

/// Project monthly and yearly spend for every priced model, assuming 30% of
/// tokens are input and 70% output.
pub fn estimate_monthly_costs(monthly_queries: u64, avg_tokens_per_query: u64) -> CostEstimation {
    let monthly_tokens = monthly_queries as f64 * avg_tokens_per_query as f64;

    let estimations = PRICE_TABLE
        .iter()
        .map(|price| {
            let input_cost = (monthly_tokens * INPUT_SHARE / 1000.0) * price.input;
            let output_cost = (monthly_tokens * OUTPUT_SHARE / 1000.0) * price.output;
            let total = input_cost + output_cost;
            let monthly_cost = round_to(total, 2);
            let cost_per_query = if monthly_queries == 0 {
                0.0
            } else {
                round_to(total / monthly_queries as f64, 4)
            };
            ModelEstimate {
                model: price.model,
                monthly_cost,
                yearly_cost: round_to(monthly_cost * 12.0, 2),
                cost_per_query,
            }
        })
        .collect();

    CostEstimation {
        assumptions: CostAssumptions {
            monthly_queries,
            avg_tokens_per_query,
        },
        estimations,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
