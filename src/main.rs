use clap::Parser;
use miette::{IntoDiagnostic, Result};
use sofort_method::application::payment_method::SofortPaymentMethod;
use sofort_method::infrastructure::in_memory::{
    DEFAULT_LOGO_BASE_URL, FixedCheckout, InMemoryConfigRepository, InMemoryCountryRepository,
    StaticBasket, StaticLocalization,
};
use sofort_method::interfaces::csv::decision_writer::{Decision, DecisionWriter};
use sofort_method::interfaces::csv::scenario_reader::{Scenario, ScenarioReader};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Country id the harness assigns to each scenario's shipping country.
const SCENARIO_COUNTRY_ID: u32 = 1;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input scenarios CSV file (country, basket_sum, language)
    input: PathBuf,

    /// JSON object of plugin configuration keys. Without it every key is unset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL the logo references are built from
    #[arg(long, default_value = DEFAULT_LOGO_BASE_URL)]
    logo_base_url: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn evaluate(
    scenario: &Scenario,
    config: &InMemoryConfigRepository,
    logo_base_url: &str,
) -> sofort_method::error::Result<Decision> {
    let mut countries = InMemoryCountryRepository::new();
    if let Some(code) = &scenario.country {
        countries = countries.with_country(SCENARIO_COUNTRY_ID, code.as_str(), None);
    }

    let method = SofortPaymentMethod::new(
        Box::new(StaticBasket::new(scenario.basket_sum)),
        Box::new(config.clone()),
        Box::new(countries),
        Box::new(FixedCheckout::new(SCENARIO_COUNTRY_ID)),
        Box::new(
            StaticLocalization::new(scenario.language.as_str()).with_logo_base_url(logo_base_url),
        ),
    )?;

    Decision::evaluate(scenario, &method)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            InMemoryConfigRepository::from_json_reader(file).into_diagnostic()?
        }
        None => InMemoryConfigRepository::new(),
    };

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = ScenarioReader::new(file);

    let stdout = io::stdout();
    let mut writer = DecisionWriter::new(stdout.lock());
    for scenario_result in reader.scenarios() {
        match scenario_result {
            Ok(scenario) => match evaluate(&scenario, &config, &cli.logo_base_url) {
                Ok(decision) => writer.write(&decision).into_diagnostic()?,
                Err(e) => eprintln!("Error evaluating scenario: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading scenario: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
