use console::style;
use crate::cli::commands::EstimateArgs;
use crate::cost::{estimate_monthly_costs, CostEstimation};
use crate::errors::ChatbenchError;
use crate::utils::formatting::format_cost;

pub async fn handle_estimate(args: EstimateArgs) -> Result<(), ChatbenchError> {
    let estimation = estimate_monthly_costs(args.monthly_queries, args.avg_tokens);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimation)?);
    } else {
        print!("{}", render_table(&estimation));
    }
    Ok(())
}

fn render_table(estimation: &CostEstimation) -> String {
    let mut out = format!(
        "{} {} queries/month, {} tokens/query\n\n",
        style("Assumptions:").bold(),
        estimation.assumptions.monthly_queries,
        estimation.assumptions.avg_tokens_per_query,
    );
    out.push_str(&format!(
        "{:<18} {:>12} {:>12} {:>10}\n",
        "MODEL", "MONTHLY", "YEARLY", "PER QUERY"
    ));

    let mut rows: Vec<_> = estimation.estimations.iter().collect();
    rows.sort_by(|a, b| a.monthly_cost.total_cmp(&b.monthly_cost));
    for estimate in rows {
        out.push_str(&format!(
            "{:<18} {:>12} {:>12} {:>10}\n",
            estimate.model,
            format_cost(estimate.monthly_cost),
            format_cost(estimate.yearly_cost),
            format_cost(estimate.cost_per_query),
        ));
    }
    out
}
