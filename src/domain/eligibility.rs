use super::config::MethodConfig;
use super::context::EvaluationContext;
use rust_decimal::Decimal;

/// Shipping countries the method is offered for.
///
/// `EN` is not an ISO 3166 country code; it is kept as configured upstream.
pub const ALLOWED_DELIVERY_COUNTRIES: [&str; 9] =
    ["DE", "AT", "CH", "IT", "EN", "ES", "BE", "PL", "NL"];

/// Exact, case-sensitive membership in [`ALLOWED_DELIVERY_COUNTRIES`].
pub fn is_delivery_country_allowed(country: Option<&str>) -> bool {
    country.is_some_and(|code| ALLOWED_DELIVERY_COUNTRIES.contains(&code))
}

/// Every condition that does not need the basket.
///
/// Callers check this before loading the basket, so a rejected method never
/// touches the basket collaborator.
pub fn passes_basket_independent_checks(
    config: &MethodConfig,
    delivery_country: Option<&str>,
) -> bool {
    config.has_method_key()
        && config.is_payment_activated()
        && is_delivery_country_allowed(delivery_country)
}

/// Decides whether the method is offered for this configuration and context.
pub fn is_active(config: &MethodConfig, context: &EvaluationContext) -> bool {
    passes_basket_independent_checks(config, context.delivery_country.as_deref())
        && context.basket_item_sum > Decimal::ZERO
}
