use serde::{Deserialize, Serialize};

/// One adenylation domain eligible for substrate specificity prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ADomain {
    pub domain_id: String,
    pub translation: String,
}

/// One candidate substrate call for a domain, produced by one scoring
/// method. Entries arrive sorted descending by score and must keep that
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionEntry {
    pub score: f64,
    pub label: String,
}

impl PredictionEntry {
    pub fn new(score: f64, label: impl Into<String>) -> Self {
        Self {
            score,
            label: label.into(),
        }
    }
}

/// The structural owner of a candidate cluster. Anything other than a
/// region here means the input model is corrupt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "number", rename_all = "snake_case")]
pub enum StructuralParent {
    Region(u32),
    Protocluster(u32),
    Record,
}

impl std::fmt::Display for StructuralParent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StructuralParent::Region(n) => write!(f, "region {}", n),
            StructuralParent::Protocluster(n) => write!(f, "protocluster {}", n),
            StructuralParent::Record => write!(f, "the record"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateCluster {
    pub number: u32,
    pub parent: StructuralParent,
    /// Domain ids belonging to this cluster, in genomic order.
    #[serde(default)]
    pub domain_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub number: u32,
    #[serde(default)]
    pub candidate_cluster_numbers: Vec<u32>,
}

/// The per-record view the analysis operates on: discovered A domains
/// plus the structural containers predictions get attached to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub a_domains: Vec<ADomain>,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub candidate_clusters: Vec<CandidateCluster>,
}

impl Record {
    /// Domains eligible for specificity prediction.
    pub fn nrps_pks_domains(&self) -> &[ADomain] {
        &self.a_domains
    }

    pub fn candidate_cluster(&self, number: u32) -> Option<&CandidateCluster> {
        self.candidate_clusters.iter().find(|c| c.number == number)
    }
}

/// An ordered per-candidate-cluster prediction as returned by order
/// analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterPrediction {
    pub candidate_cluster_number: u32,
    pub polymer: String,
}
