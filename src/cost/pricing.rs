use serde::Serialize;

/// USD per 1K tokens.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelPrice {
    pub model: &'static str,
    pub input: f64,
    pub output: f64,
}

pub static PRICE_TABLE: &[ModelPrice] = &[
    ModelPrice { model: "gpt-4", input: 0.03, output: 0.06 },
    ModelPrice { model: "gpt-4-turbo", input: 0.01, output: 0.03 },
    ModelPrice { model: "gpt-3.5-turbo", input: 0.0005, output: 0.0015 },
    ModelPrice { model: "claude-3-opus", input: 0.015, output: 0.075 },
    ModelPrice { model: "claude-3-sonnet", input: 0.003, output: 0.015 },
    ModelPrice { model: "claude-3-haiku", input: 0.00025, output: 0.00125 },
    ModelPrice { model: "gemini-pro", input: 0.0005, output: 0.0015 },
];

pub fn get_price(model: &str) -> Option<&'static ModelPrice> {
    PRICE_TABLE.iter().find(|p| p.model == model)
}
