use crate::core::results::NrpsPksResults;
use crate::core::scoring::ScoringAdapter;
use crate::domain::model::{Record, StructuralParent};
use crate::domain::ports::{ConsensusAnalyser, OrderAnalyser, ScoringModel};
use crate::utils::error::{AnalysisError, Result};

/// One configured scoring method: a name tag, its working threshold, and
/// the model behind it.
pub struct ScoringMethod {
    name: String,
    threshold: f64,
    model: Box<dyn ScoringModel>,
}

impl ScoringMethod {
    pub fn new(name: impl Into<String>, threshold: f64, model: Box<dyn ScoringModel>) -> Self {
        Self {
            name: name.into(),
            threshold,
            model,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Drives the substrate specificity analysis for one record: domain
/// discovery, per-method batch scoring, consensus, order analysis, and
/// attachment of the ordered cluster predictions to their regions.
pub struct SpecificAnalysis {
    methods: Vec<ScoringMethod>,
    consensus: Box<dyn ConsensusAnalyser>,
    order: Box<dyn OrderAnalyser>,
}

impl SpecificAnalysis {
    pub fn new(
        methods: Vec<ScoringMethod>,
        consensus: Box<dyn ConsensusAnalyser>,
        order: Box<dyn OrderAnalyser>,
    ) -> Self {
        Self {
            methods,
            consensus,
            order,
        }
    }

    /// Runs the full analysis over one record and returns the populated
    /// results. Each stage completes before the next begins; a record with
    /// no eligible domains short-circuits with the results untouched.
    pub async fn run(&self, record: &Record, mut results: NrpsPksResults) -> Result<NrpsPksResults> {
        let a_domains = record.nrps_pks_domains();

        if a_domains.is_empty() {
            tracing::debug!("No adenylation domains found in {}, skipping analysis", record.id);
            return Ok(results);
        }

        for method in &self.methods {
            tracing::info!(
                "Predicting A domain substrate specificities with {}",
                method.name
            );
            let adapter = ScoringAdapter::new(method.model.as_ref(), &method.name, method.threshold);
            let method_results = adapter.run(a_domains).await?;
            results.add_method_results(&method.name, method_results)?;
        }

        let (consensus, consensus_transat) = self
            .consensus
            .compute_consensus(a_domains, &results.domain_predictions);
        results.consensus = consensus;
        results.consensus_transat = consensus_transat;

        let cluster_predictions = self
            .order
            .analyse_order(a_domains, &results.consensus, record);

        for prediction in cluster_predictions {
            let number = prediction.candidate_cluster_number;
            let cluster = record.candidate_cluster(number).ok_or_else(|| {
                AnalysisError::StructuralIntegrity {
                    number,
                    detail: "record has no such candidate cluster".to_string(),
                }
            })?;

            let region_number = match cluster.parent {
                StructuralParent::Region(n) => n,
                ref other => {
                    return Err(AnalysisError::StructuralIntegrity {
                        number,
                        detail: format!("parent is {}, not a region", other),
                    })
                }
            };

            results
                .region_predictions
                .entry(region_number)
                .or_default()
                .push(prediction);
        }

        Ok(results)
    }
}
