use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/scenarios.csv")
        .arg("--config")
        .arg("tests/fixtures/config.json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "country,basket_sum,language,active,name,description,source_url,icon",
        ))
        .stdout(predicate::str::contains("DE,50.00,de,true,SOFORT Überweisung,"))
        .stdout(predicate::str::contains("US,50.00,de,false,SOFORT Überweisung,"))
        .stdout(predicate::str::contains("AT,0,en,false,SOFORT,"))
        .stdout(predicate::str::contains("NL,0.01,en,true,SOFORT,"))
        .stdout(predicate::str::contains(",25.00,de,false,"));

    Ok(())
}

#[test]
fn test_cli_without_config_disables_method() {
    let mut cmd = Command::new(cargo_bin!("sofort-method"));
    cmd.arg("tests/fixtures/scenarios.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DE,50.00,de,false,"))
        .stdout(predicate::str::contains(",true,").not());
}

#[test]
fn test_cli_logo_base_url() {
    let mut cmd = Command::new(cargo_bin!("sofort-method"));
    cmd.arg("tests/fixtures/scenarios.csv")
        .arg("--logo-base-url")
        .arg("https://cdn.example.com/");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("https://cdn.example.com/sofort_de.png"))
        .stdout(predicate::str::contains("https://cdn.example.com/sofort_en.png"));
}

#[test]
fn test_cli_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("sofort-method"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
