use crate::utils::error::{AnalysisError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Amino acid alphabet including ambiguity codes and gap/stop markers,
// matching what domain detection emits for A domain translations.
static AMINO_ACIDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ACDEFGHIKLMNPQRSTVWYBJZXUO*\-]+$").expect("static pattern is valid")
});

pub fn validate_amino_acid_sequence(domain_id: &str, translation: &str) -> Result<()> {
    if translation.is_empty() {
        return Err(AnalysisError::InvalidInput {
            message: format!("domain {} has no translation", domain_id),
        });
    }

    if !AMINO_ACIDS.is_match(&translation.to_uppercase()) {
        return Err(AnalysisError::InvalidInput {
            message: format!(
                "domain {} translation contains non-amino-acid characters",
                domain_id
            ),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AnalysisError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(AnalysisError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_threshold(field_name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(AnalysisError::ConfigError {
            message: format!(
                "{}: threshold {} is outside the valid range [0, 1]",
                field_name, value
            ),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AnalysisError::ConfigError {
            message: format!("{}: value cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}
