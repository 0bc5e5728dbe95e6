//! Command line options and input selection

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

/// Default output file, included by the credits assembly source
pub const DEFAULT_OUTPUT: &str = "credits_data.i";

/// Options for a generator run
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Input CSV file. Dummy names are used if it does not exist
    #[arg(short = 'i', long = "input", value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// Required input CSV file. Error if it does not exist
    #[arg(short = 'I', long = "require", value_name = "CSV")]
    pub required_input: Option<PathBuf>,

    /// Output assembly file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Use dummy names instead of an input CSV file
    #[arg(long)]
    pub dummy: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Comma separated list of names to exclude (case-insensitive)
    #[arg(short = 'x', long = "exclude", value_name = "NAMES", default_value = "")]
    pub exclude: String,
}

/// Where the entries come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Csv(PathBuf),
    Dummy,
}

impl GenerateArgs {
    /// Resolve the input options into a single source.
    ///
    /// A missing optional input falls back to dummy names with a warning; a
    /// missing required input, or a required input combined with `--dummy` or
    /// a different `-i`, is an error.
    pub fn input_source(&self) -> Result<InputSource> {
        let mut input = self.input.clone();

        if let Some(required) = &self.required_input {
            if input.as_ref().is_some_and(|i| i != required) {
                bail!("Cannot provide both an optional and required input file");
            }
            if self.dummy {
                bail!("Cannot provide both a required input file and the dummy names option");
            }
            input = Some(required.clone());
        }

        if self.dummy {
            return Ok(InputSource::Dummy);
        }

        match input {
            Some(path) if path.exists() => Ok(InputSource::Csv(path)),
            Some(path) => {
                if self.required_input.is_some() {
                    bail!("The required input file {:?} does not exist", path);
                }
                tracing::warn!("{:?} does not exist! Using dummy names for credits", path);
                Ok(InputSource::Dummy)
            }
            None => {
                tracing::warn!("No input file given, using dummy names for credits");
                Ok(InputSource::Dummy)
            }
        }
    }
}
