pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ccf-rank-etl")]
#[command(about = "Scrapes the CCF venue ranking table and writes a JSON snapshot")]
pub struct CliConfig {
    #[arg(long, default_value = "https://ccf.atom.im/")]
    pub source_url: String,

    #[arg(long, default_value = "src/data")]
    pub output_path: String,

    #[arg(long, default_value = "ccf-conferences.json")]
    pub output_file: String,

    #[arg(long, default_value = "Mozilla/5.0")]
    pub user_agent: String,

    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    #[arg(long, default_value = "2022")]
    pub version_tag: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn version_tag(&self) -> &str {
        &self.version_tag
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source_url", &self.source_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_file", &self.output_file)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        validate_non_empty_string("version_tag", &self.version_tag)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
