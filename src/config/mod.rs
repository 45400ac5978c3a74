pub mod manifest;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
pub mod cli {
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_threshold, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "nrps-predict")]
    #[command(about = "Predict A domain substrate specificities for NRPS gene clusters")]
    pub struct CliConfig {
        /// Record JSON describing the A domains, regions and candidate
        /// clusters to analyse.
        #[arg(long)]
        pub record: String,

        /// TOML manifest declaring the scoring methods to run.
        #[arg(long)]
        pub methods: String,

        /// Default score threshold for methods without their own.
        #[arg(long, default_value = "0.2")]
        pub threshold: f64,

        /// Where to write the results JSON; stdout when omitted.
        #[arg(long)]
        pub output: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("record", &self.record)?;
            validate_path("methods", &self.methods)?;
            validate_threshold("threshold", self.threshold)?;
            if let Some(output) = &self.output {
                validate_path("output", output)?;
            }
            Ok(())
        }
    }

}
