use crate::domain::basket::Basket;
use crate::domain::ports::{
    BasketRepository, Checkout, ConfigRepository, CountryRepository, IsoCodeFormat, Localization,
};
use crate::error::Result;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;

/// A configuration store backed by a `HashMap<String, String>`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryConfigRepository {
    values: HashMap<String, String>,
}

impl InMemoryConfigRepository {
    /// Creates a new, empty configuration store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets or replaces a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Loads a flat JSON object of configuration keys.
    ///
    /// Strings are stored as-is, `null` entries are skipped and every other value
    /// keeps its JSON text, so `true` becomes `"true"`.
    pub fn from_json_reader<R: Read>(source: R) -> Result<Self> {
        let entries: serde_json::Map<String, Value> = serde_json::from_reader(source)?;
        let values = entries
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(s) => Some((key, s)),
                other => Some((key, other.to_string())),
            })
            .collect();
        Ok(Self { values })
    }
}

impl ConfigRepository for InMemoryConfigRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }
}

/// A basket with a fixed item sum.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticBasket {
    basket: Basket,
}

impl StaticBasket {
    /// Creates a basket store that always returns `item_sum`.
    pub fn new(item_sum: Decimal) -> Self {
        Self {
            basket: Basket::new(item_sum),
        }
    }
}

impl BasketRepository for StaticBasket {
    fn load(&self) -> Result<Basket> {
        Ok(self.basket)
    }
}

#[derive(Debug, Clone)]
struct CountryCodes {
    alpha2: String,
    alpha3: Option<String>,
}

/// Maps host country ids to ISO codes.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCountryRepository {
    countries: HashMap<u32, CountryCodes>,
}

impl InMemoryCountryRepository {
    /// Creates a new, empty country repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the ISO codes for a host country id.
    pub fn with_country(
        mut self,
        country_id: u32,
        alpha2: impl Into<String>,
        alpha3: Option<&str>,
    ) -> Self {
        self.countries.insert(
            country_id,
            CountryCodes {
                alpha2: alpha2.into(),
                alpha3: alpha3.map(str::to_string),
            },
        );
        self
    }
}

impl CountryRepository for InMemoryCountryRepository {
    fn find_iso_code(&self, country_id: u32, format: IsoCodeFormat) -> Result<Option<String>> {
        let codes = self.countries.get(&country_id);
        Ok(match format {
            IsoCodeFormat::Alpha2 => codes.map(|c| c.alpha2.clone()),
            IsoCodeFormat::Alpha3 => codes.and_then(|c| c.alpha3.clone()),
        })
    }
}

/// A checkout session whose shipping country never changes.
#[derive(Debug, Clone, Copy)]
pub struct FixedCheckout {
    shipping_country_id: u32,
}

impl FixedCheckout {
    /// Creates a session shipping to `shipping_country_id`.
    pub fn new(shipping_country_id: u32) -> Self {
        Self {
            shipping_country_id,
        }
    }
}

impl Checkout for FixedCheckout {
    fn shipping_country_id(&self) -> Result<u32> {
        Ok(self.shipping_country_id)
    }
}

pub const DEFAULT_LOGO_BASE_URL: &str = "https://www.sofort.com/images/logos";

/// Reports a fixed shop language and serves logos from a base URL.
#[derive(Debug, Clone)]
pub struct StaticLocalization {
    language: String,
    logo_base_url: String,
}

impl StaticLocalization {
    /// Creates a localization for `language` using [`DEFAULT_LOGO_BASE_URL`].
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            logo_base_url: DEFAULT_LOGO_BASE_URL.to_string(),
        }
    }

    /// Overrides the base URL logos are served from.
    pub fn with_logo_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.logo_base_url = base_url.into();
        self
    }
}

impl Localization for StaticLocalization {
    fn language(&self) -> Result<String> {
        Ok(self.language.clone())
    }

    fn logo(&self, language: &str) -> Result<String> {
        Ok(format!(
            "{}/sofort_{}.png",
            self.logo_base_url.trim_end_matches('/'),
            language
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_config_repository_get_and_default() {
        let repo = InMemoryConfigRepository::new().with("SOFORT.configKey", "abc");

        assert_eq!(repo.get("SOFORT.configKey").unwrap().as_deref(), Some("abc"));
        assert!(repo.get("missing").unwrap().is_none());
        assert_eq!(repo.get_or("missing", "false").unwrap(), "false");
    }

    #[test]
    fn test_config_repository_from_json() {
        let json = r#"{
            "SOFORT.configKey": "abc",
            "SOFORT.activatePayment": true,
            "SOFORT.recommendedPayment": null,
            "SOFORT.retries": 3
        }"#;
        let repo = InMemoryConfigRepository::from_json_reader(json.as_bytes()).unwrap();

        assert_eq!(repo.get("SOFORT.configKey").unwrap().as_deref(), Some("abc"));
        assert_eq!(
            repo.get("SOFORT.activatePayment").unwrap().as_deref(),
            Some("true")
        );
        assert!(repo.get("SOFORT.recommendedPayment").unwrap().is_none());
        assert_eq!(repo.get("SOFORT.retries").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_config_repository_rejects_non_object_json() {
        assert!(InMemoryConfigRepository::from_json_reader("[1, 2]".as_bytes()).is_err());
    }

    #[test]
    fn test_static_basket() {
        let basket = StaticBasket::new(dec!(12.50)).load().unwrap();
        assert_eq!(basket.item_sum, dec!(12.50));
    }

    #[test]
    fn test_country_repository_formats() {
        let repo = InMemoryCountryRepository::new()
            .with_country(1, "DE", Some("DEU"))
            .with_country(2, "AT", None);

        assert_eq!(
            repo.find_iso_code(1, IsoCodeFormat::Alpha2).unwrap().as_deref(),
            Some("DE")
        );
        assert_eq!(
            repo.find_iso_code(1, IsoCodeFormat::Alpha3).unwrap().as_deref(),
            Some("DEU")
        );
        assert!(repo.find_iso_code(2, IsoCodeFormat::Alpha3).unwrap().is_none());
        assert!(repo.find_iso_code(99, IsoCodeFormat::Alpha2).unwrap().is_none());
    }

    #[test]
    fn test_static_localization_logo() {
        let localization =
            StaticLocalization::new("en").with_logo_base_url("https://cdn.example.com/");
        assert_eq!(localization.language().unwrap(), "en");
        assert_eq!(
            localization.logo("de").unwrap(),
            "https://cdn.example.com/sofort_de.png"
        );
    }
}
