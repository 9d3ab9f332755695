use super::ports::ConfigRepository;
use crate::error::Result;

pub const METHOD_KEY: &str = "SOFORT.configKey";
pub const ACTIVATE_PAYMENT_KEY: &str = "SOFORT.activatePayment";
pub const RECOMMENDED_PAYMENT_KEY: &str = "SOFORT.recommendedPayment";

/// The value that switches a flag off. Also the default for absent flags.
pub const DISABLED: &str = "false";

/// Snapshot of the plugin configuration used for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodConfig {
    pub method_key: Option<String>,
    pub activate_payment: String,
    pub recommended_payment: String,
}

impl Default for MethodConfig {
    fn default() -> Self {
        Self {
            method_key: None,
            activate_payment: DISABLED.to_string(),
            recommended_payment: DISABLED.to_string(),
        }
    }
}

impl MethodConfig {
    /// Reads all keys this method consumes from the store.
    pub fn load(repo: &dyn ConfigRepository) -> Result<Self> {
        Ok(Self {
            method_key: repo.get(METHOD_KEY)?,
            activate_payment: repo.get_or(ACTIVATE_PAYMENT_KEY, DISABLED)?,
            recommended_payment: repo.get_or(RECOMMENDED_PAYMENT_KEY, DISABLED)?,
        })
    }

    /// A method key of `""` or `"0"` counts as missing.
    pub fn has_method_key(&self) -> bool {
        matches!(self.method_key.as_deref(), Some(key) if !key.is_empty() && key != "0")
    }

    pub fn is_payment_activated(&self) -> bool {
        self.activate_payment != DISABLED
    }

    pub fn is_recommended(&self) -> bool {
        self.recommended_payment != DISABLED
    }
}
