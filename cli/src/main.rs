mod args;

use args::{Cli, OutputFormat};
use clap::Parser;
use curve::WeierstrassCurve;
use log::{info, warn};
use std::error::Error;
use std::fs;
use std::io::Write;
use table::build_tables;
use table::emit::{CircomEmitter, JsonEmitter, TableEmitter};

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Validate inputs
    cli.validate()?;

    let params = cli.curve_params()?;
    let scalar_bits = cli.n.saturating_mul(cli.k);
    if params.field_bits() > scalar_bits as u64 {
        warn!(
            "{}-bit field is wider than n * k = {scalar_bits} bits; coordinates may not fit",
            params.field_bits()
        );
    }

    info!("{}", cli.description());
    let curve = WeierstrassCurve::new(params);
    let tables = build_tables(&curve, cli.n, cli.k, &cli.strides)?;

    let rendered = match cli.format {
        OutputFormat::Circom => CircomEmitter::default().emit(&tables)?,
        OutputFormat::Json => JsonEmitter::pretty().emit(&tables)?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            info!("wrote {} bytes to {}", rendered.len(), path.display());
        }
        None => std::io::stdout().lock().write_all(rendered.as_bytes())?,
    }

    Ok(())
}
