use crate::error::{MethodError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One checkout situation to evaluate.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Scenario {
    /// Shipping country as ISO alpha-2; empty when the host cannot resolve one.
    pub country: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub basket_sum: Decimal,
    pub language: String,
}

/// Reads scenarios from a CSV source.
///
/// Whitespace is trimmed and short records are accepted, so a missing trailing
/// column surfaces as a deserialization error for that row only.
pub struct ScenarioReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScenarioReader<R> {
    /// Creates a new `ScenarioReader` from any `Read` source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes scenarios, one `Result` per row.
    pub fn scenarios(self) -> impl Iterator<Item = Result<Scenario>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(MethodError::from))
    }
}
