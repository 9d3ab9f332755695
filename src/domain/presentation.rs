use super::config::MethodConfig;
use super::language::Language;
use crate::error::Result;

/// Display name, with the recommendation suffix when the flag is set.
pub fn name(language: Language, config: &MethodConfig) -> String {
    let mut name = language.strings().name.to_string();
    if config.is_recommended() {
        name.push_str(language.recommendation_suffix());
    }
    name
}

/// Localized description shown under the method name.
pub fn description(language: Language) -> &'static str {
    language.strings().description
}

/// Link to the provider's explanation of the payment flow.
pub fn source_url(language: Language) -> &'static str {
    language.strings().url
}

/// Parses the host-selected language, failing for codes without a string table.
pub fn language(selected: &str) -> Result<Language> {
    selected.parse()
}
