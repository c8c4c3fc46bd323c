use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tilepro_rs::{AsmOptions, Assembler};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble TILEPro bundle source into a raw binary"
)]
struct Opts {
    /// Output path for the emitted bundles
    #[arg(short, long, default_value = "a.bin")]
    output: String,
    /// Write unresolved fixups as JSON
    #[arg(long, value_name = "FILE")]
    fixups: Option<String>,
    /// Accept r53..r63 as register names
    #[arg(long)]
    no_canonical_regs: bool,
    /// Demote same-register write conflicts to warnings
    #[arg(long)]
    allow_suspicious_bundles: bool,
    #[arg(value_name = "ASMFILE")]
    input: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let source = std::fs::read_to_string(&opts.input)?;

    let assembler = Assembler::new(AsmOptions {
        require_canonical_reg_names: !opts.no_canonical_regs,
        allow_suspicious_bundles: opts.allow_suspicious_bundles,
    });
    let assembly = assembler.assemble(&source);

    for diag in &assembly.diagnostics {
        eprintln!("{}: {diag}", opts.input);
    }
    if assembly.has_errors() {
        bail!("assembly failed");
    }

    std::fs::write(&opts.output, &assembly.code)?;
    if let Some(path) = &opts.fixups {
        std::fs::write(path, serde_json::to_string_pretty(&assembly.fixups)?)?;
    }
    Ok(())
}
