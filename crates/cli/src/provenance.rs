use anyhow::{Context, Result};
use hpge::config::DetectorConfig;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Provenance record written next to a `query` result table.
#[derive(Serialize)]
pub struct QuerySidecar<'a> {
    pub code_rev: &'static str,
    pub hpge_version: &'static str,
    pub detector: &'a str,
    pub geometry: &'a DetectorConfig,
    pub points: &'a Path,
    pub surfaces: Vec<String>,
    pub tol: f64,
    pub rows: usize,
    pub output: &'a Path,
}

impl QuerySidecar<'_> {
    /// `result.csv` → `result.provenance.json`.
    pub fn path_for(output: &Path) -> PathBuf {
        output.with_extension("provenance.json")
    }

    pub fn write(&self) -> Result<PathBuf> {
        let path = Self::path_for(self.output);
        std::fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// Commit baked in at build time through `GIT_COMMIT`.
pub fn code_rev() -> &'static str {
    option_env!("GIT_COMMIT").unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_table() {
        assert_eq!(
            QuerySidecar::path_for(Path::new("/tmp/output/inside.csv")),
            Path::new("/tmp/output/inside.provenance.json")
        );
        assert_eq!(
            QuerySidecar::path_for(Path::new("inside")),
            Path::new("inside.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_detector_and_query() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("query.csv");
        let geometry = DetectorConfig::default();
        let sidecar = QuerySidecar {
            code_rev: code_rev(),
            hpge_version: hpge::VERSION,
            detector: "V99000A",
            geometry: &geometry,
            points: Path::new("points.csv"),
            surfaces: vec!["n+".to_owned()],
            tol: 1e-11,
            rows: 3,
            output: &output,
        };
        let path = sidecar.write().unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["detector"], "V99000A");
        assert_eq!(parsed["surfaces"][0], "n+");
        assert_eq!(parsed["rows"], 3);
        assert_eq!(parsed["geometry"]["radius_in_mm"], 0.0);
        assert_eq!(parsed["output"], output.to_string_lossy().as_ref());
    }
}
