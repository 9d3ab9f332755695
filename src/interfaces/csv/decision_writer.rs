use super::scenario_reader::Scenario;
use crate::domain::ports::PaymentMethodService;
use crate::error::{MethodError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// What the host checkout would show for one scenario.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Decision {
    pub country: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub basket_sum: Decimal,
    pub language: String,
    pub active: bool,
    pub name: String,
    pub description: String,
    pub source_url: String,
    pub icon: String,
}

impl Decision {
    /// Queries every host-facing accessor of `method`; the first error aborts.
    pub fn evaluate(scenario: &Scenario, method: &dyn PaymentMethodService) -> Result<Self> {
        Ok(Self {
            country: scenario.country.clone().unwrap_or_default(),
            basket_sum: scenario.basket_sum,
            language: scenario.language.clone(),
            active: method.is_active()?,
            name: method.name()?,
            description: method.description()?,
            source_url: method.source_url()?,
            icon: method.icon()?,
        })
    }
}

/// Writes decisions as CSV with a header row.
pub struct DecisionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DecisionWriter<W> {
    /// Creates a writer over any `Write` sink.
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes one decision; the header is written before the first row.
    pub fn write(&mut self, decision: &Decision) -> Result<()> {
        self.writer.serialize(decision)?;
        Ok(())
    }

    /// Writes all decisions and flushes.
    pub fn write_decisions(&mut self, decisions: impl IntoIterator<Item = Decision>) -> Result<()> {
        for decision in decisions {
            self.write(&decision)?;
        }
        self.flush()
    }

    /// Flushes buffered rows to the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(MethodError::from)
    }
}
