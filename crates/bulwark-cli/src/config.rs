//! TOML configuration deserialisation for shielding jobs.

use bulwark_core::LayerSpec;
use bulwark_materials::Material;
use serde::Deserialize;

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub source: SourceConfig,
    pub geometry: GeometryConfig,
    /// Extra materials appended to the reference catalog.
    #[serde(default, rename = "material")]
    pub materials: Vec<MaterialConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Photon source parameters from TOML.
#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    pub energies: EnergySpec,
}

/// Energy specification (MeV): either a log-spaced range or an explicit list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EnergySpec {
    Range { range: [f64; 2], points: usize },
    List { values: Vec<f64> },
}

impl EnergySpec {
    pub fn energies(&self) -> Vec<f64> {
        match self {
            EnergySpec::Range { range, points } => {
                bulwark_core::log_spaced_energies(range[0], range[1], *points)
            }
            EnergySpec::List { values } => values.clone(),
        }
    }
}

/// Shield and detector geometry from TOML.
#[derive(Debug, Deserialize)]
pub struct GeometryConfig {
    /// Source-to-detector distance (cm).
    pub distance: f64,
    /// Layers in the order photons cross them. May be empty.
    #[serde(default, rename = "layer")]
    pub layers: Vec<LayerSpec>,
}

/// A user-supplied material table.
#[derive(Debug, Deserialize)]
pub struct MaterialConfig {
    pub symbol: String,
    pub name: String,
    /// Density in g/cm³.
    pub density: f64,
    /// Photon energies in MeV.
    pub energies: Vec<f64>,
    /// Mass-attenuation coefficients in cm²/g.
    pub mu_over_rho: Vec<f64>,
}

impl MaterialConfig {
    pub fn to_material(&self) -> anyhow::Result<Material> {
        let material = Material::new(
            self.symbol.clone(),
            self.name.clone(),
            self.density,
            self.energies.clone(),
            self.mu_over_rho.clone(),
        )?;
        Ok(material)
    }
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save results as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_csv: bool,
    /// Whether to also save results as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_csv: true,
            save_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> anyhow::Result<JobConfig> {
    let config: JobConfig = toml::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = r#"
[source]
energies = { values = [0.6617, 1.1732, 1.3325] }

[geometry]
distance = 100.0

[[geometry.layer]]
material = "Pb"
thickness = 2.0

[[geometry.layer]]
material = "Concrete"
thickness = 30.0
"#;

    #[test]
    fn test_parse_minimal_job_with_defaults() {
        let job = parse_config(JOB).unwrap();
        assert_eq!(job.source.energies.energies(), vec![0.6617, 1.1732, 1.3325]);
        assert_eq!(job.geometry.distance, 100.0);
        assert_eq!(job.geometry.layers.len(), 2);
        assert_eq!(job.geometry.layers[1], LayerSpec::new("Concrete", 30.0));
        assert!(job.materials.is_empty());
        assert_eq!(job.output.directory, "./output");
        assert!(job.output.save_csv);
        assert!(!job.output.save_json);
    }

    #[test]
    fn test_parse_range_and_custom_material() {
        let job = parse_config(
            r#"
[source]
energies = { range = [0.1, 10.0], points = 3 }

[geometry]
distance = 5.0

[[material]]
symbol = "W"
name = "Tungsten"
density = 19.3
energies = [0.1, 1.0, 10.0]
mu_over_rho = [4.438, 0.06618, 0.04433]

[output]
save_json = true
"#,
        )
        .unwrap();
        let energies = job.source.energies.energies();
        assert_eq!(energies.len(), 3);
        assert_eq!(energies[2], 10.0);
        assert!(job.geometry.layers.is_empty());
        let tungsten = job.materials[0].to_material().unwrap();
        assert_eq!(tungsten.symbol(), "W");
        assert!(job.output.save_json);
    }

    #[test]
    fn test_malformed_custom_material_is_rejected() {
        let m = MaterialConfig {
            symbol: "X".into(),
            name: "Broken".into(),
            density: 1.0,
            energies: vec![1.0, 0.5],
            mu_over_rho: vec![1.0, 2.0],
        };
        assert!(m.to_material().is_err());
    }

    #[test]
    fn test_missing_geometry_is_an_error() {
        assert!(parse_config("[source]\nenergies = { values = [1.0] }\n").is_err());
    }
}
