use crate::adapters::{ColinearOrderAnalyser, MajorityConsensus, PrecomputedModel};
use crate::core::analysis::{ScoringMethod, SpecificAnalysis};
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_threshold, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One scoring method declared in the manifest. Methods run in manifest
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodConfig {
    pub name: String,
    /// Path to the method's precomputed prediction table (JSON).
    pub predictions: String,
    /// Per-method working threshold; falls back to the global default.
    pub threshold: Option<f64>,
    /// Whether this method contributes to the trans-AT consensus view.
    #[serde(default)]
    pub transat: bool,
}

/// TOML manifest describing the configured scoring methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodManifest {
    #[serde(rename = "method")]
    pub methods: Vec<MethodConfig>,
}

impl MethodManifest {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let manifest: MethodManifest = toml::from_str(&raw)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Assembles the full analysis pipeline: one precomputed model per
    /// declared method, majority consensus, colinear ordering.
    pub fn build_analysis(&self, default_threshold: f64) -> Result<SpecificAnalysis> {
        validate_threshold("threshold", default_threshold)?;
        self.validate()?;

        let mut methods = Vec::with_capacity(self.methods.len());
        for config in &self.methods {
            let model = PrecomputedModel::from_path(&config.predictions)?;
            if model.is_empty() {
                tracing::warn!("Prediction table for {} is empty", config.name);
            }
            methods.push(ScoringMethod::new(
                &config.name,
                config.threshold.unwrap_or(default_threshold),
                Box::new(model),
            ));
        }

        let transat: Vec<String> = self
            .methods
            .iter()
            .filter(|m| m.transat)
            .map(|m| m.name.clone())
            .collect();
        let consensus = if transat.is_empty() {
            MajorityConsensus::new()
        } else {
            MajorityConsensus::with_transat_methods(transat)
        };

        Ok(SpecificAnalysis::new(
            methods,
            Box::new(consensus),
            Box::new(ColinearOrderAnalyser::new()),
        ))
    }
}

impl Validate for MethodManifest {
    fn validate(&self) -> Result<()> {
        if self.methods.is_empty() {
            return Err(AnalysisError::ConfigError {
                message: "manifest declares no scoring methods".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for method in &self.methods {
            validate_non_empty_string("method.name", &method.name)?;
            validate_path("method.predictions", &method.predictions)?;
            if let Some(threshold) = method.threshold {
                validate_threshold("method.threshold", threshold)?;
            }
            if !seen.insert(method.name.as_str()) {
                return Err(AnalysisError::ConfigError {
                    message: format!("method {} is declared twice", method.name),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(methods: Vec<MethodConfig>) -> MethodManifest {
        MethodManifest { methods }
    }

    fn method(name: &str) -> MethodConfig {
        MethodConfig {
            name: name.to_string(),
            predictions: format!("{name}.json"),
            threshold: None,
            transat: false,
        }
    }

    #[test]
    fn test_parse_manifest_toml() {
        let parsed: MethodManifest = toml::from_str(
            r#"
            [[method]]
            name = "paras"
            predictions = "paras.json"
            threshold = 0.2

            [[method]]
            name = "nrpys"
            predictions = "nrpys.json"
            transat = true
            "#,
        )
        .unwrap();

        assert_eq!(parsed.methods.len(), 2);
        assert_eq!(parsed.methods[0].name, "paras");
        assert_eq!(parsed.methods[0].threshold, Some(0.2));
        assert!(parsed.methods[1].transat);
    }

    #[test]
    fn test_empty_manifest_rejected() {
        assert!(manifest(vec![]).validate().is_err());
    }

    #[test]
    fn test_duplicate_method_names_rejected() {
        let err = manifest(vec![method("paras"), method("paras")])
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("declared twice"));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let mut bad = method("paras");
        bad.threshold = Some(1.5);
        assert!(manifest(vec![bad]).validate().is_err());
    }

    #[test]
    fn test_from_path_round_trip() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            "[[method]]\nname = \"paras\"\npredictions = \"paras.json\"\n",
        )
        .unwrap();

        let parsed = MethodManifest::from_path(file.path()).unwrap();
        assert_eq!(parsed.methods.len(), 1);
    }

    #[test]
    fn test_build_analysis_reads_prediction_tables() {
        let table = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            table.path(),
            r#"{"MKLAAV": [{"score": 0.9, "label": "leu"}]}"#,
        )
        .unwrap();

        let manifest = manifest(vec![MethodConfig {
            name: "paras".to_string(),
            predictions: table.path().to_string_lossy().into_owned(),
            threshold: Some(0.2),
            transat: false,
        }]);

        assert!(manifest.build_analysis(0.2).is_ok());
    }
}
