use anyhow::{bail, Context, Result};
use clap::Args;
use invasive_core::{DispersalFactors, LinguisticFactors};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One species record as read from `--input`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesInput {
    #[serde(default)]
    pub species: Option<String>,
    pub dispersal: DispersalFactors,
    pub linguistic: LinguisticFactors,
}

#[derive(Debug, Args)]
pub struct FactorArgs {
    /// JSON file with `species`, `dispersal` and `linguistic` records
    #[arg(long, conflicts_with_all = ["sf", "asr", "via", "ldd", "vrs", "sgr", "ha", "nmd"])]
    pub input: Option<PathBuf>,

    /// Species name shown in the report
    #[arg(long)]
    pub species: Option<String>,

    /// Seeds per fruit
    #[arg(long)]
    pub sf: Option<f64>,

    /// Annual seed rain (seeds per m² per year)
    #[arg(long)]
    pub asr: Option<f64>,

    /// Seed viability in months
    #[arg(long)]
    pub via: Option<f64>,

    /// Long-distance dispersal, 0-10
    #[arg(long)]
    pub ldd: Option<f64>,

    /// Vegetative reproduction strength
    #[arg(long)]
    pub vrs: Option<String>,

    /// Seed germination requirements
    #[arg(long)]
    pub sgr: Option<String>,

    /// Human activity
    #[arg(long)]
    pub ha: Option<String>,

    /// Natural and man-made disturbance
    #[arg(long)]
    pub nmd: Option<String>,
}

impl FactorArgs {
    pub fn resolve(&self) -> Result<SpeciesInput> {
        if let Some(path) = &self.input {
            let mut input = read_input(path)?;
            if self.species.is_some() {
                input.species = self.species.clone();
            }
            return Ok(input);
        }

        let dispersal = DispersalFactors::new(
            required(self.sf, "--sf")?,
            required(self.asr, "--asr")?,
            required(self.via, "--via")?,
            required(self.ldd, "--ldd")?,
        );
        let linguistic = LinguisticFactors::new(
            required(self.vrs.clone(), "--vrs")?,
            required(self.sgr.clone(), "--sgr")?,
            required(self.ha.clone(), "--ha")?,
            required(self.nmd.clone(), "--nmd")?,
        );
        Ok(SpeciesInput {
            species: self.species.clone(),
            dispersal,
            linguistic,
        })
    }
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T> {
    match value {
        Some(v) => Ok(v),
        None => bail!("missing {flag} (or pass --input)"),
    }
}

fn read_input(path: &Path) -> Result<SpeciesInput> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read input file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse input file {}", path.display()))
}
