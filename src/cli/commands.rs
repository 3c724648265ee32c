use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "chatbench", version, about = "FAQ chatbot test bench for LLM providers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP/WebSocket API server
    Serve(ServeArgs),
    /// Start the credential-free stand-in server
    Fallback(FallbackArgs),
    /// Print projected monthly and yearly costs per model
    Estimate(EstimateArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// FAQ JSON file (loaded at startup, rewritten on upload)
    #[arg(long)]
    pub faq: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct FallbackArgs {
    /// Listen port
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// FAQ JSON file
    #[arg(long, default_value = crate::config::DEFAULT_FAQ_PATH)]
    pub faq: String,

    /// Allowed CORS origin
    #[arg(long, default_value = crate::config::DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,
}

#[derive(Args, Clone)]
pub struct EstimateArgs {
    /// Expected queries per month
    #[arg(long, default_value = "10000")]
    pub monthly_queries: u64,

    /// Average tokens per query
    #[arg(long, default_value = "500")]
    pub avg_tokens: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
