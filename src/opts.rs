//! CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::quartet::Quartet;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Opts {
    /// Only report the specified quartet datasets, all by default
    #[arg(short, long = "dataset", value_enum)]
    pub datasets: Vec<Quartet>,

    /// Also report the dataset from the JSON file: `[{"x": 1, "y": 2}, …]`
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text, env = "ANSCOMBE_FORMAT")]
    pub format: Format,
}

impl Opts {
    pub fn quartet(&self) -> &[Quartet] {
        if self.datasets.is_empty() {
            &Quartet::ALL
        } else {
            &self.datasets
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
