use crate::domain::config::MethodConfig;
use crate::domain::context::EvaluationContext;
use crate::domain::eligibility;
use crate::domain::language::Language;
use crate::domain::ports::{
    BasketRepositoryBox, CheckoutBox, ConfigRepositoryBox, CountryRepositoryBox, IsoCodeFormat,
    LocalizationBox, PaymentMethodService,
};
use crate::domain::presentation;
use crate::error::Result;
use tracing::{debug, warn};

/// The SOFORT payment method as seen by the host checkout.
pub struct SofortPaymentMethod {
    basket_repo: BasketRepositoryBox,
    config_repo: ConfigRepositoryBox,
    localization: LocalizationBox,
    delivery_country: Option<String>,
    selected_language: String,
}

impl SofortPaymentMethod {
    /// Creates the method for the current checkout.
    ///
    /// Resolves the shipping country to its ISO alpha-2 code and reads the selected
    /// language. Collaborator failures are returned unchanged.
    pub fn new(
        basket_repo: BasketRepositoryBox,
        config_repo: ConfigRepositoryBox,
        country_repo: CountryRepositoryBox,
        checkout: CheckoutBox,
        localization: LocalizationBox,
    ) -> Result<Self> {
        let country_id = checkout.shipping_country_id()?;
        let format = IsoCodeFormat::Alpha2;
        let delivery_country = country_repo.find_iso_code(country_id, format)?;
        let selected_language = localization.language()?;
        debug!(
            country_id,
            format = format.as_str(),
            delivery_country = ?delivery_country,
            language = %selected_language,
            "resolved checkout context"
        );

        Ok(Self {
            basket_repo,
            config_repo,
            localization,
            delivery_country,
            selected_language,
        })
    }

    /// Returns the resolved ISO alpha-2 shipping country, if any.
    pub fn delivery_country(&self) -> Option<&str> {
        self.delivery_country.as_deref()
    }

    /// Returns the language code reported by the host, unvalidated.
    pub fn selected_language(&self) -> &str {
        &self.selected_language
    }

    /// Reads a fresh configuration snapshot.
    pub fn config(&self) -> Result<MethodConfig> {
        MethodConfig::load(self.config_repo.as_ref())
    }

    /// Builds the per-request context, loading the basket.
    pub fn evaluation_context(&self) -> Result<EvaluationContext> {
        let basket = self.basket_repo.load()?;
        Ok(EvaluationContext::new(
            self.delivery_country.clone(),
            basket.item_sum,
            self.selected_language.clone(),
        ))
    }

    fn language(&self) -> Result<Language> {
        presentation::language(&self.selected_language).inspect_err(|_| {
            warn!(language = %self.selected_language, "no display strings for language");
        })
    }
}

impl PaymentMethodService for SofortPaymentMethod {
    fn is_active(&self) -> Result<bool> {
        let config = self.config()?;
        if !eligibility::passes_basket_independent_checks(&config, self.delivery_country()) {
            debug!(
                has_method_key = config.has_method_key(),
                activated = config.is_payment_activated(),
                delivery_country = ?self.delivery_country,
                "method rejected before basket load"
            );
            return Ok(false);
        }

        let context = self.evaluation_context()?;
        let active = eligibility::is_active(&config, &context);
        debug!(
            active,
            delivery_country = ?context.delivery_country,
            basket_item_sum = %context.basket_item_sum,
            "evaluated eligibility"
        );
        Ok(active)
    }

    fn name(&self) -> Result<String> {
        let language = self.language()?;
        let config = self.config()?;
        debug!(%language, recommended = config.is_recommended(), "building display name");
        Ok(presentation::name(language, &config))
    }

    fn description(&self) -> Result<String> {
        Ok(presentation::description(self.language()?).to_string())
    }

    fn source_url(&self) -> Result<String> {
        Ok(presentation::source_url(self.language()?).to_string())
    }

    /// Logo lookup is left entirely to the host, including for unsupported languages.
    fn icon(&self) -> Result<String> {
        self.localization.logo(&self.selected_language)
    }

    fn is_switchable_to(&self) -> bool {
        false
    }

    fn is_switchable_from(&self) -> bool {
        false
    }
}
