pub mod analysis;
pub mod prediction;
pub mod results;
pub mod scoring;

pub use crate::domain::model::{ADomain, ClusterPrediction, PredictionEntry, Record};
pub use crate::domain::ports::{ConsensusAnalyser, OrderAnalyser, ScoringModel};
pub use crate::utils::error::Result;
