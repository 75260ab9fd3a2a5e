//! CLI for the DWCM media metadata normalizer.

mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dwcm_core::config;
use dwcm_core::media::MediaClassifier;
use dwcm_core::mime::MimeResolver;

use commands::{run_basis_of_record, run_classify, run_mime, run_split, run_typified_name};

/// Top-level CLI for the DWCM media metadata normalizer.
#[derive(Debug, Parser)]
#[command(name = "dwcm")]
#[command(about = "DWCM: Darwin Core media metadata normalizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a multi-value associatedMedia string into individual URLs.
    Split {
        /// Raw associatedMedia value (zero, one, or many concatenated URLs).
        value: String,
    },

    /// Resolve a normalized MIME type from a declared format or a URL.
    Mime {
        /// Declared format string (e.g. "image/jpg").
        #[arg(long, conflicts_with = "url")]
        format: Option<String>,
        /// Media URL to sniff.
        #[arg(long)]
        url: Option<String>,
    },

    /// Classify a media URL into a normalized record (printed as JSON).
    Classify {
        /// Media URL.
        url: String,
        /// Declared format, if the source record carries one.
        #[arg(long)]
        format: Option<String>,
    },

    /// Interpret a verbatim basisOfRecord value.
    BasisOfRecord {
        /// Verbatim value (e.g. "preserved specimen").
        value: String,
    },

    /// Extract the typified name from a typeStatus value.
    TypifiedName {
        /// Verbatim value (e.g. "Holotype of Dianthus fruticosus Runemark").
        value: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let classifier = MediaClassifier::new(MimeResolver::from_config(&cfg));

        match cli.command {
            CliCommand::Split { value } => run_split(&cfg, &value),
            CliCommand::Mime { format, url } => {
                run_mime(classifier.resolver(), format.as_deref(), url.as_deref())
            }
            CliCommand::Classify { url, format } => {
                run_classify(&classifier, &url, format.as_deref())
            }
            CliCommand::BasisOfRecord { value } => run_basis_of_record(&value),
            CliCommand::TypifiedName { value } => run_typified_name(&value),
        }
    }
}
