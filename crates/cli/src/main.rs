use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hpge::materials::natural_germanium_density;
use hpge::prelude::*;
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "hpge")]
#[command(about = "HPGe detector geometry and germanium material queries")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the (r, z) revolution profile with surface tags as JSON
    Profile {
        #[arg(long)]
        config: PathBuf,
    },
    /// Print volume, mass and surface areas as JSON
    Props {
        #[arg(long)]
        config: PathBuf,
        /// Ge-76 fraction; overrides the production record
        #[arg(long)]
        enrichment: Option<f64>,
        #[arg(long, value_enum, default_value_t = Model::Measured)]
        model: Model,
    },
    /// Classify x,y,z points from a CSV and write inside/distance columns
    Query {
        #[arg(long)]
        config: PathBuf,
        #[arg(long)]
        points: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Restrict distances to surfaces with this tag (p+, n+, passive); repeatable
        #[arg(long = "surface")]
        surfaces: Vec<SurfaceTag>,
        #[arg(long, default_value_t = DEFAULT_TOL)]
        tol: f64,
    },
    /// Print natural and enriched germanium densities as JSON
    Density {
        #[arg(long, default_value_t = hpge::materials::DEFAULT_GE76_FRACTION)]
        ge76: f64,
        #[arg(long, value_enum, default_value_t = Model::Measured)]
        model: Model,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Model {
    Measured,
    Theoretical,
}

impl From<Model> for DensityModel {
    fn from(m: Model) -> Self {
        match m {
            Model::Measured => DensityModel::Measured,
            Model::Theoretical => DensityModel::Theoretical,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Profile { config } => profile(&config),
        Action::Props {
            config,
            enrichment,
            model,
        } => props(&config, enrichment, model.into()),
        Action::Query {
            config,
            points,
            out,
            surfaces,
            tol,
        } => query(&config, &points, &out, &surfaces, tol),
        Action::Density { ge76, model } => density(ge76, model.into()),
    }
}

fn load(config: &Path, registry: &mut MaterialRegistry) -> Result<Detector> {
    Detector::from_path(config, registry)
        .with_context(|| format!("loading detector metadata {}", config.display()))
}

fn profile(config: &Path) -> Result<()> {
    let det = load(config, &mut MaterialRegistry::new())?;
    let profile = det.profile();
    tracing::info!(name = %det.name, edges = profile.edge_count(), "profile");
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

fn props(config: &Path, enrichment: Option<f64>, model: DensityModel) -> Result<()> {
    let mut registry = MaterialRegistry::with_model(model);
    let mut det = load(config, &mut registry)?;
    if let Some(f) = enrichment {
        det.material = registry.enriched_germanium(f)?;
    }
    let props = det.properties()?;
    tracing::info!(name = %det.name, material = %det.material.name, "props");
    println!("{}", serde_json::to_string_pretty(&props)?);
    Ok(())
}

fn query(
    config: &Path,
    points: &Path,
    out: &Path,
    surfaces: &[SurfaceTag],
    tol: f64,
) -> Result<()> {
    let det = load(config, &mut MaterialRegistry::new())?;

    let df = LazyCsvReader::new(points)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {}", points.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
            col("z").cast(DataType::Float64),
        ])
        .collect()?;
    let (xs, ys, zs) = (
        column_values(&df, "x")?,
        column_values(&df, "y")?,
        column_values(&df, "z")?,
    );
    let coords: Vec<Vec3<f64>> = xs
        .iter()
        .zip(&ys)
        .zip(&zs)
        .map(|((&x, &y), &z)| Vec3::new(x, y, z))
        .collect();
    tracing::info!(name = %det.name, points = coords.len(), ?surfaces, tol, "query");

    let indices: Option<Vec<usize>> = if surfaces.is_empty() {
        None
    } else {
        let profile = det.profile();
        let mut idx: Vec<usize> = surfaces
            .iter()
            .flat_map(|&t| profile.surface_indices(t))
            .collect();
        idx.sort_unstable();
        idx.dedup();
        Some(idx)
    };

    let inside = det.is_inside(&coords, tol)?;
    let distance = det.distance_to_surface(&coords, indices.as_deref(), tol)?;

    let mut result = df! {
        "x" => xs,
        "y" => ys,
        "z" => zs,
        "inside" => inside,
        "distance_mm" => distance,
    }?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file).finish(&mut result)?;

    let sidecar = provenance::QuerySidecar {
        code_rev: provenance::code_rev(),
        hpge_version: hpge::VERSION,
        detector: &det.name,
        geometry: &det.config,
        points,
        surfaces: surfaces.iter().map(|t| t.to_string()).collect(),
        tol,
        rows: result.height(),
        output: out,
    };
    let prov = sidecar.write()?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote query results");
    Ok(())
}

fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    df.column(name)?
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| match v {
            Some(v) => Ok(v),
            None => bail!("row {row}: missing value in column '{name}'"),
        })
        .collect()
}

fn density(ge76: f64, model: DensityModel) -> Result<()> {
    let report = density_report(ge76, model)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Natural germanium keeps its measured density; `model_density_g_cm3` is
/// the same composition under the selected number-density model.
fn density_report(ge76: f64, model: DensityModel) -> Result<serde_json::Value> {
    let mut registry = MaterialRegistry::with_model(model);
    let enriched = registry.enriched_germanium(ge76)?;
    let natural = registry.natural_germanium();
    Ok(serde_json::json!({
        "model": model,
        "number_density_per_cm3": model.number_density().value(),
        "natural": {
            "name": natural.name,
            "symbol": natural.symbol,
            "molar_mass": natural.mixture.molar_mass(),
            "density_g_cm3": natural.density.value(),
            "density_source": "measured",
            "model_density_g_cm3": natural_germanium_density(model).value(),
        },
        "enriched": {
            "name": enriched.name,
            "symbol": enriched.symbol,
            "ge76_fraction": ge76,
            "molar_mass": enriched.mixture.molar_mass(),
            "density_g_cm3": enriched.density.value(),
            "density_source": model,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BEGE_JSON: &str = r#"{
        "name": "B00000A",
        "type": "bege",
        "geometry": {
            "height_in_mm": 30, "radius_in_mm": 35,
            "groove": {"depth_in_mm": 2, "radius_in_mm": {"outer": 12, "inner": 9}},
            "pp_contact": {"radius_in_mm": 7, "depth_in_mm": 0}
        }
    }"#;

    #[test]
    fn query_writes_results_and_sidecar() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("B00000A.json");
        let points = dir.path().join("points.csv");
        let out = dir.path().join("out").join("result.csv");
        std::fs::write(&config, BEGE_JSON).unwrap();
        std::fs::write(&points, "x,y,z\n0,20,15\n0,0,31\n10.5,0,1\n").unwrap();

        query(&config, &points, &out, &[SurfaceTag::NPlus], DEFAULT_TOL).unwrap();

        let df = LazyCsvReader::new(&out)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(df.height(), 3);
        let inside: Vec<Option<bool>> = df.column("inside").unwrap().bool().unwrap().into_iter().collect();
        assert_eq!(inside, vec![Some(true), Some(false), Some(false)]);
        let dist = column_values(&df, "distance_mm").unwrap();
        assert!((dist[0] - 15.0).abs() < 1e-9);
        assert!((dist[1] - 1.0).abs() < 1e-9);
        assert!(dir.path().join("out").join("result.provenance.json").exists());
    }

    #[test]
    fn query_rejects_missing_columns() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("B00000A.json");
        let points = dir.path().join("points.csv");
        std::fs::write(&config, BEGE_JSON).unwrap();
        std::fs::write(&points, "x,y\n1,2\n").unwrap();
        let out = dir.path().join("result.csv");
        assert!(query(&config, &points, &out, &[], DEFAULT_TOL).is_err());
    }

    #[test]
    fn density_report_labels_the_measured_natural_density() {
        let report = density_report(0.92, DensityModel::Theoretical).unwrap();
        assert_eq!(report["model"], "theoretical");
        assert_eq!(report["natural"]["density_source"], "measured");
        assert_eq!(report["enriched"]["density_source"], "theoretical");
        assert_eq!(
            report["natural"]["density_g_cm3"],
            hpge::materials::NATURAL_GE_DENSITY
        );
        let n = report["number_density_per_cm3"].as_f64().unwrap();
        let m = report["natural"]["molar_mass"].as_f64().unwrap();
        let rho = report["natural"]["model_density_g_cm3"].as_f64().unwrap();
        assert!((rho - n * m / hpge::materials::AVOGADRO).abs() < 1e-12);
        assert!(rho > hpge::materials::NATURAL_GE_DENSITY);
    }
}
