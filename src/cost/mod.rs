pub mod pricing;
pub mod estimator;

pub use pricing::{get_price, ModelPrice, PRICE_TABLE};
pub use estimator::{
    calculate_cost, estimate_monthly_costs, CostAssumptions, CostEstimation, ModelEstimate,
    DEFAULT_AVG_TOKENS_PER_QUERY, DEFAULT_MONTHLY_QUERIES,
};
