use rust_decimal::Decimal;

/// Per-request inputs derived from host state. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationContext {
    /// ISO 3166 alpha-2 code of the shipping country, if the host could resolve one.
    pub delivery_country: Option<String>,
    pub basket_item_sum: Decimal,
    /// Raw language code reported by the host; may be unsupported.
    pub selected_language: String,
}

impl EvaluationContext {
    /// Bundles the resolved per-request inputs.
    pub fn new(
        delivery_country: Option<String>,
        basket_item_sum: Decimal,
        selected_language: impl Into<String>,
    ) -> Self {
        Self {
            delivery_country,
            basket_item_sum,
            selected_language: selected_language.into(),
        }
    }
}
