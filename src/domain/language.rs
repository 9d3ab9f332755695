use crate::error::MethodError;
use std::fmt;
use std::str::FromStr;

/// Display languages the method ships strings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    De,
    En,
}

/// Display strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedStrings {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

const GERMAN: LocalizedStrings = LocalizedStrings {
    name: "SOFORT Überweisung",
    description: "Zahlen Sie sicher und bequem mit ihren Online-Banking-Daten (PIN/TAN) ohne Registrierung.",
    url: "https://www.sofort.com/ger-DE/kaeufer/su/so-funktioniert-sofort-ueberweisung/",
};

const ENGLISH: LocalizedStrings = LocalizedStrings {
    name: "SOFORT",
    description: "Online payments made easy. With SOFORT you can pay easily and securely with your usual online banking login data. No registration required.",
    url: "https://www.sofort.com/eng-GB/buyer/sb/how-sofort-banking-works/",
};

impl Language {
    /// The lowercase language code used by the host.
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// The display strings for this language.
    pub fn strings(&self) -> &'static LocalizedStrings {
        match self {
            Language::De => &GERMAN,
            Language::En => &ENGLISH,
        }
    }

    /// Appended to the name when the method is flagged as recommended.
    pub fn recommendation_suffix(&self) -> &'static str {
        match self {
            Language::De => " (empfohlene Zahlungsart)",
            Language::En => " (recommended payment method)",
        }
    }
}

impl FromStr for Language {
    type Err = MethodError;

    /// Codes are matched exactly; `"DE"` or `"de-AT"` are unsupported.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            other => Err(MethodError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
