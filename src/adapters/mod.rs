// Adapters layer: reference implementations behind the domain ports
// (scoring model, consensus, order analysis). The orchestrator only sees
// the traits, so each of these can be swapped for an external engine.

pub mod consensus;
pub mod order;
pub mod precomputed;

pub use consensus::MajorityConsensus;
pub use order::ColinearOrderAnalyser;
pub use precomputed::PrecomputedModel;
