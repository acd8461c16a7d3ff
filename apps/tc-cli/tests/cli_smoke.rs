//! Runs the built binary end to end.

use std::process::{Command, Output};

fn tc_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tc-cli"))
        .args(args)
        .output()
        .expect("failed to run tc-cli")
}

fn json(args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--format", "json"];
    full.extend_from_slice(args);
    let out = tc_cli(&full);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn lhv_of_methane() {
    let v = json(&["lhv", "CH4"]);
    let lhv = v["heating_value_mj_per_kg"].as_f64().unwrap();
    assert!((lhv - 50.0).abs() < 1.0);
    assert_eq!(v["temperature_k"].as_f64().unwrap(), 273.15);
}

#[test]
fn power_from_given_heating_value() {
    let v = json(&["power", "CH4", "--mass-flow", "100 kg/h", "--heating-value", "50 MJ/kg"]);
    assert!((v["power_w"].as_f64().unwrap() - 1_388_888.89).abs() < 0.01);
    assert!((v["power_kw"].as_f64().unwrap() - 1_388.888_89).abs() < 1e-5);
}

#[test]
fn products_of_stoichiometric_methane() {
    let v = json(&["products", "CH4:1, O2:2"]);
    assert!((v["CO2"].as_f64().unwrap() - 1.0 / 9.0).abs() < 1e-12);
    assert!((v["H2O"].as_f64().unwrap() - 2.0 / 9.0).abs() < 1e-12);
}

#[test]
fn normal_density_of_default_composition() {
    let v = json(&["density", "--normal"]);
    assert!((v["density_kg_m3"].as_f64().unwrap() - 1.2499).abs() < 1e-3);
}

#[test]
fn text_output_is_default() {
    let out = tc_cli(&["mechanism", "methane-air"]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("Mechanism: methane-air"));
    assert!(text.contains("CH4"));
}

#[test]
fn non_combustible_fuel_fails() {
    let out = tc_cli(&["lhv", "N2"]);
    assert!(!out.status.success());
}

#[test]
fn unknown_mechanism_fails() {
    let out = tc_cli(&["lhv", "CH4", "--mechanism", "nope.yaml"]);
    assert!(!out.status.success());
}

#[test]
fn bundled_case_file_evaluates() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/cases/fuels.yaml");
    let v = json(&["case", path]);
    let cases = v.as_array().unwrap();
    assert_eq!(cases.len(), 5);
    assert_eq!(cases[0]["name"], "methane");
    assert!(cases[0]["power_w"].as_f64().unwrap() > 1.3e6);
    assert!(cases[3].get("power_w").is_none());
}

#[test]
fn power_needs_no_fuel_with_explicit_heating_value() {
    let v = json(&["power", "--mass-flow", "1 kg/s", "--heating-value", "50 MJ/kg"]);
    assert_eq!(v["power_w"].as_f64().unwrap(), 50e6);
    assert!(v.get("fuel").is_none());
}

#[test]
fn power_without_fuel_or_heating_value_is_rejected() {
    let out = tc_cli(&["power", "--mass-flow", "1 kg/s"]);
    assert!(!out.status.success());
}
