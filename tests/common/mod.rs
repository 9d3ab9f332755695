#![allow(dead_code)]

use rust_decimal::Decimal;
use sofort_method::application::payment_method::SofortPaymentMethod;
use sofort_method::domain::basket::Basket;
use sofort_method::domain::ports::{BasketRepository, Checkout};
use sofort_method::error::{MethodError, Result};
use sofort_method::infrastructure::in_memory::{
    FixedCheckout, InMemoryConfigRepository, InMemoryCountryRepository, StaticBasket,
    StaticLocalization,
};

pub const SHIPPING_COUNTRY_ID: u32 = 42;

/// Config with the method key set and the payment activated.
pub fn enabled_config() -> InMemoryConfigRepository {
    InMemoryConfigRepository::new()
        .with("SOFORT.configKey", "abc")
        .with("SOFORT.activatePayment", "true")
}

pub fn build_method(
    config: InMemoryConfigRepository,
    country: Option<&str>,
    basket_sum: Decimal,
    language: &str,
) -> SofortPaymentMethod {
    let mut countries = InMemoryCountryRepository::new();
    if let Some(code) = country {
        countries = countries.with_country(SHIPPING_COUNTRY_ID, code, None);
    }
    SofortPaymentMethod::new(
        Box::new(StaticBasket::new(basket_sum)),
        Box::new(config),
        Box::new(countries),
        Box::new(FixedCheckout::new(SHIPPING_COUNTRY_ID)),
        Box::new(StaticLocalization::new(language)),
    )
    .expect("in-memory collaborators never fail")
}

/// A basket store that is unreachable.
pub struct UnavailableBasket;

impl BasketRepository for UnavailableBasket {
    fn load(&self) -> Result<Basket> {
        Err(MethodError::Collaborator("basket service unavailable".to_string()))
    }
}

/// A checkout session without a shipping country selection.
pub struct NoShippingCountry;

impl Checkout for NoShippingCountry {
    fn shipping_country_id(&self) -> Result<u32> {
        Err(MethodError::Collaborator("no shipping country selected".to_string()))
    }
}
