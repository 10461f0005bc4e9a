//! Job runner: ties together the material catalog, job geometry and engine.

use std::path::Path;

use anyhow::{Context, Result};

use bulwark_core::transmission::{check_geometry, resolve_layers};
use bulwark_core::{
    half_value_layer, linear_attenuation_coefficient, sweep_energies, tenth_value_layer,
    AttenuationError, TransmissionResult,
};
use bulwark_materials::{Material, MaterialCatalog};

use crate::config::JobConfig;

/// Results from a job run, one entry per configured energy.
pub struct RunOutput {
    pub energies: Vec<f64>,
    pub results: Vec<Result<TransmissionResult, AttenuationError>>,
}

impl RunOutput {
    pub fn successes(&self) -> impl Iterator<Item = &TransmissionResult> {
        self.results.iter().filter_map(|r| r.as_ref().ok())
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_err()).count()
    }
}

/// Reference catalog extended with the job's custom materials.
pub fn build_catalog(job: &JobConfig) -> Result<MaterialCatalog> {
    let mut catalog = MaterialCatalog::reference().context("Built-in material data is invalid")?;
    for m in &job.materials {
        let material = m
            .to_material()
            .with_context(|| format!("Custom material '{}'", m.symbol))?;
        let index = catalog.insert(material)?;
        println!("  Custom material #{}: {} ({})", index, m.symbol, m.name);
    }
    Ok(catalog)
}

/// Check that a job can be evaluated: materials resolve and the detector
/// sits beyond the shield. No attenuation is computed.
pub fn validate_job(job: &JobConfig, catalog: &MaterialCatalog) -> Result<f64> {
    let energies = job.source.energies.energies();
    if energies.is_empty() {
        anyhow::bail!("No photon energies configured");
    }
    if let Some(bad) = energies.iter().find(|e| !(e.is_finite() && **e > 0.0)) {
        anyhow::bail!("Photon energies must be positive, got {}", bad);
    }
    let layers = resolve_layers(catalog, &job.geometry.layers)?;
    let total = check_geometry(layers.iter().map(|l| l.thickness), job.geometry.distance)?;
    Ok(total)
}

/// Run a full job from a parsed configuration.
pub fn run_job(job: &JobConfig) -> Result<RunOutput> {
    let catalog = build_catalog(job)?;
    let total = validate_job(job, &catalog)?;
    let energies = job.source.energies.energies();

    println!(
        "  {} layer(s), {:.3} cm total, detector at {:.3} cm",
        job.geometry.layers.len(),
        total,
        job.geometry.distance
    );
    for (i, layer) in job.geometry.layers.iter().enumerate() {
        println!("    [{}] {}: {} cm", i + 1, layer.material, layer.thickness);
    }

    log::info!("evaluating {} energies", energies.len());
    let results = sweep_energies(&catalog, &energies, &job.geometry.layers, job.geometry.distance);

    for (energy, result) in energies.iter().zip(&results) {
        match result {
            Ok(r) => println!(
                "  E={:.4} MeV: stack={:.6e}, T={:.6e}",
                energy, r.attenuation_fraction, r.transmission_fraction
            ),
            Err(e) => eprintln!("Warning: E={} MeV skipped: {}", energy, e),
        }
    }

    Ok(RunOutput { energies, results })
}

/// Single-material report for the `mu` subcommand.
pub fn mu_report(catalog: &MaterialCatalog, material_id: &str, energy_mev: f64) -> Result<String> {
    let material = catalog.resolve(material_id)?;
    let mu = linear_attenuation_coefficient(energy_mev, material)?;
    Ok(format!(
        "{} ({}) at {} MeV\n  mu/rho = {:.6e} cm^2/g\n  mu     = {:.6e} cm^-1\n  HVL    = {:.4} cm\n  TVL    = {:.4} cm",
        material.name(),
        material.symbol(),
        energy_mev,
        mu / material.density(),
        mu,
        half_value_layer(mu),
        tenth_value_layer(mu),
    ))
}

/// Catalog listing for the `materials` subcommand.
pub fn materials_table(catalog: &MaterialCatalog) -> String {
    let mut out = String::from("  #  Symbol     Name                 Density   Range (MeV)\n");
    for (index, m) in catalog.iter() {
        let (min, max) = m.energy_range();
        out.push_str(&format!(
            "  {:<2} {:<10} {:<20} {:>7.3}   {}–{}\n",
            index,
            m.symbol(),
            m.name(),
            m.density(),
            min,
            max
        ));
    }
    out
}

/// Full catalog tables as pretty-printed JSON.
pub fn materials_json(catalog: &MaterialCatalog) -> Result<String> {
    let materials: Vec<&Material> = catalog.iter().map(|(_, m)| m).collect();
    serde_json::to_string_pretty(&materials)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))
}

/// Write transmission results to a CSV file with a metadata header.
///
/// Failed energies are kept as rows with an `error` column so the output
/// lines up with the configured energy list.
pub fn write_results_csv(output: &RunOutput, path: &Path, job: &JobConfig) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)?;

    writeln!(file, "# Bulwark — Shield Transmission")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "# distance_cm: {}", job.geometry.distance)?;
    for (i, layer) in job.geometry.layers.iter().enumerate() {
        writeln!(
            file,
            "# layer {}: material={}, thickness={} cm",
            i + 1,
            layer.material,
            layer.thickness
        )?;
    }
    writeln!(file, "#")?;

    let mu_columns: Vec<String> = (1..=job.geometry.layers.len())
        .map(|i| format!("mu{}_per_cm", i))
        .collect();
    let mut header = vec!["energy_mev".to_string()];
    header.extend(mu_columns);
    header.extend(["attenuation", "transmission", "error"].map(String::from));
    writeln!(file, "{}", header.join(","))?;

    for (energy, result) in output.energies.iter().zip(&output.results) {
        match result {
            Ok(r) => {
                let mut row = vec![format!("{:.6}", energy)];
                row.extend(r.per_layer_mu.iter().map(|mu| format!("{:.6e}", mu)));
                row.push(format!("{:.6e}", r.attenuation_fraction));
                row.push(format!("{:.6e}", r.transmission_fraction));
                row.push(String::new());
                writeln!(file, "{}", row.join(","))?;
            }
            Err(e) => {
                let blanks = ",".repeat(job.geometry.layers.len() + 2);
                writeln!(file, "{:.6}{},\"{}\"", energy, blanks, e.to_string().replace('"', "'"))?;
            }
        }
    }

    println!("Results written to: {}", path.display());
    Ok(())
}

/// Write successful transmission results to a JSON file.
pub fn write_results_json(output: &RunOutput, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let results: Vec<&TransmissionResult> = output.successes().collect();
    let json = serde_json::to_string_pretty(&results)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Results (JSON) written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use approx::assert_relative_eq;

    fn job(body: &str) -> JobConfig {
        parse_config(body).unwrap()
    }

    const LEAD_JOB: &str = r#"
[source]
energies = { values = [0.6617, 20.0] }

[geometry]
distance = 10.0

[[geometry.layer]]
material = "Pb"
thickness = 1.0
"#;

    #[test]
    fn test_run_reports_each_energy() {
        let output = run_job(&job(LEAD_JOB)).unwrap();
        assert_eq!(output.results.len(), 2);
        assert_eq!(output.failure_count(), 1);
        let cs = output.results[0].as_ref().unwrap();
        assert_relative_eq!(cs.transmission_fraction, 0.0028328, max_relative = 1e-4);
    }

    #[test]
    fn test_validate_rejects_detector_inside_shield() {
        let j = job(
            r#"
[source]
energies = { values = [1.0] }

[geometry]
distance = 1.0

[[geometry.layer]]
material = "Fe"
thickness = 1.0
"#,
        );
        let catalog = build_catalog(&j).unwrap();
        let err = validate_job(&j, &catalog).unwrap_err();
        assert!(err.to_string().contains("Detector inside or before the shield"));
    }

    #[test]
    fn test_validate_rejects_unknown_material() {
        let j = job(
            r#"
[source]
energies = { values = [1.0] }

[geometry]
distance = 10.0

[[geometry.layer]]
material = "Adamantium"
thickness = 1.0
"#,
        );
        let catalog = build_catalog(&j).unwrap();
        assert!(validate_job(&j, &catalog).is_err());
    }

    #[test]
    fn test_custom_material_is_usable_by_symbol() {
        let j = job(
            r#"
[source]
energies = { values = [1.0] }

[geometry]
distance = 10.0

[[geometry.layer]]
material = "W"
thickness = 0.5

[[material]]
symbol = "W"
name = "Tungsten"
density = 19.3
energies = [0.1, 1.0, 10.0]
mu_over_rho = [4.438, 0.06618, 0.04433]
"#,
        );
        let output = run_job(&j).unwrap();
        let r = output.results[0].as_ref().unwrap();
        assert_relative_eq!(r.per_layer_mu[0], 0.06618 * 19.3, max_relative = 1e-12);
    }

    #[test]
    fn test_mu_report_and_materials_table() {
        let catalog = MaterialCatalog::reference().unwrap();
        let report = mu_report(&catalog, "Pb", 0.6617).unwrap();
        assert!(report.contains("Lead (Pb)"));
        assert!(mu_report(&catalog, "Pb", 50.0).is_err());

        let table = materials_table(&catalog);
        assert!(table.contains("Concrete"));
        assert_eq!(table.lines().count(), 6);
    }

    #[test]
    fn test_materials_json_lists_full_tables() {
        let catalog = MaterialCatalog::reference().unwrap();
        let json = materials_json(&catalog).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0]["symbol"], "Pb");
        assert_eq!(entries[0]["density"], 11.34);
        assert_eq!(entries[0]["energies_mev"].as_array().unwrap().len(), 60);
        assert_eq!(
            entries[0]["mu_over_rho"].as_array().unwrap().len(),
            entries[0]["energies_mev"].as_array().unwrap().len()
        );
    }

    #[test]
    fn test_write_csv_and_json() {
        let j = job(LEAD_JOB);
        let output = run_job(&j).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("out").join("transmission.csv");
        write_results_csv(&output, &csv_path, &j).unwrap();
        let csv = std::fs::read_to_string(&csv_path).unwrap();
        assert!(csv.contains("energy_mev,mu1_per_cm,attenuation,transmission,error"));
        let rows: Vec<&str> = csv.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with("0.661700,"));
        assert!(rows[2].contains("outside the tabulated range"));
        assert_eq!(rows[1].split(',').count(), rows[0].split(',').count());

        let json_path = dir.path().join("transmission.json");
        write_results_json(&output, &json_path).unwrap();
        let parsed: Vec<TransmissionResult> =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
