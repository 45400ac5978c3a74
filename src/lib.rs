pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{ColinearOrderAnalyser, MajorityConsensus, PrecomputedModel};
pub use crate::config::manifest::MethodManifest;
pub use crate::core::analysis::{ScoringMethod, SpecificAnalysis};
pub use crate::core::prediction::Prediction;
pub use crate::core::results::NrpsPksResults;
pub use crate::core::scoring::ScoringAdapter;
pub use crate::domain::model::{
    ADomain, CandidateCluster, ClusterPrediction, PredictionEntry, Record, Region,
    StructuralParent,
};
pub use crate::domain::ports::{ConsensusAnalyser, OrderAnalyser, ScoringModel};
pub use crate::utils::error::{AnalysisError, Result};
