use super::basket::Basket;
use crate::error::Result;

/// Loads the shopper's current basket.
pub trait BasketRepository: Send + Sync {
    fn load(&self) -> Result<Basket>;
}

/// Format of the ISO 3166 code returned by [`CountryRepository::find_iso_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoCodeFormat {
    Alpha2,
    Alpha3,
}

impl IsoCodeFormat {
    /// The host's name for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            IsoCodeFormat::Alpha2 => "iso_code_2",
            IsoCodeFormat::Alpha3 => "iso_code_3",
        }
    }
}

/// Resolves host country ids to ISO codes.
pub trait CountryRepository: Send + Sync {
    /// Returns `None` when the id is unknown to the host.
    fn find_iso_code(&self, country_id: u32, format: IsoCodeFormat) -> Result<Option<String>>;
}

/// String-keyed plugin configuration.
pub trait ConfigRepository: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Like [`ConfigRepository::get`], falling back to `default` for absent keys.
    fn get_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.get(key)?.unwrap_or_else(|| default.to_string()))
    }
}

/// The checkout session of the current shopper.
pub trait Checkout: Send + Sync {
    fn shipping_country_id(&self) -> Result<u32>;
}

/// Language selection and logo hosting.
pub trait Localization: Send + Sync {
    fn language(&self) -> Result<String>;
    fn logo(&self, language: &str) -> Result<String>;
}

pub type BasketRepositoryBox = Box<dyn BasketRepository>;
pub type CountryRepositoryBox = Box<dyn CountryRepository>;
pub type ConfigRepositoryBox = Box<dyn ConfigRepository>;
pub type CheckoutBox = Box<dyn Checkout>;
pub type LocalizationBox = Box<dyn Localization>;

/// The contract the host checkout expects from a payment method.
pub trait PaymentMethodService: Send + Sync {
    fn is_active(&self) -> Result<bool>;
    fn name(&self) -> Result<String>;
    fn description(&self) -> Result<String>;
    fn source_url(&self) -> Result<String>;
    fn icon(&self) -> Result<String>;
    fn is_switchable_to(&self) -> bool;
    fn is_switchable_from(&self) -> bool;
}
