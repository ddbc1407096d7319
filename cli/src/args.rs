use clap::{Parser, ValueEnum};
use curve::{CurveConfig, CurveParams};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use table::constants::MAX_SCALAR_BITS;
use table::validate_stride;

#[derive(Parser)]
#[command(name = "gpow-tables")]
#[command(about = "Precompute fixed-base window tables of generator powers for circom circuits")]
pub struct Cli {
    /// Named curve preset
    #[arg(long, value_enum, default_value_t = CurvePreset::P224)]
    pub curve: CurvePreset,
    /// JSON file with custom curve parameters (p, a, b, gx, gy, n); overrides --curve
    #[arg(long)]
    pub params: Option<PathBuf>,
    /// Bits per limb
    #[arg(short = 'n', long = "limb-bits", default_value_t = 32)]
    pub n: usize,
    /// Limbs per coordinate
    #[arg(short = 'k', long = "limbs", default_value_t = 7)]
    pub k: usize,
    /// Window widths to generate, comma separated
    #[arg(short, long, value_delimiter = ',', default_value = "8")]
    pub strides: Vec<usize>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Circom)]
    pub format: OutputFormat,
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurvePreset {
    P192,
    P224,
    P256,
}

impl CurvePreset {
    /// Preset name understood by [`CurveParams::by_name`].
    pub fn name(self) -> &'static str {
        match self {
            CurvePreset::P192 => "p192",
            CurvePreset::P224 => "p224",
            CurvePreset::P256 => "p256",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// circom functions returning the tables
    Circom,
    /// JSON array of tables with decimal string limbs
    Json,
}

impl Cli {
    pub fn validate(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.n == 0 || self.k == 0 {
            return Err("n and k must both be at least 1".into());
        }
        if self.n.checked_mul(self.k).map_or(true, |bits| bits > MAX_SCALAR_BITS) {
            return Err(format!("n * k must not exceed {MAX_SCALAR_BITS} bits").into());
        }
        if self.strides.is_empty() {
            return Err("at least one stride is required".into());
        }
        for &stride in &self.strides {
            validate_stride(stride)?;
        }
        Ok(())
    }

    pub fn curve_params(&self) -> Result<CurveParams, Box<dyn Error + Send + Sync>> {
        let Some(path) = &self.params else {
            return Ok(CurveParams::by_name(self.curve.name())?);
        };

        let text = fs::read_to_string(path)?;
        let config: CurveConfig = serde_json::from_str(&text)?;
        Ok(CurveParams::try_from(config)?)
    }

    pub fn description(&self) -> String {
        let curve = match &self.params {
            Some(path) => path.display().to_string(),
            None => format!("{:?}", self.curve),
        };
        format!(
            "Generating {:?} tables for {curve}: n = {}, k = {}, strides = {:?}",
            self.format, self.n, self.k, self.strides
        )
    }
}
