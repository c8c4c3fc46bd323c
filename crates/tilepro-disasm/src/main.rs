use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use tilepro_rs::disasm::{dump, fmt_bundle};
use tilepro_rs::{BundleDecoder, BUNDLE_SIZE_IN_BYTES};

#[derive(Parser, Debug)]
#[command(author, version, about = "TILEPro bundle disassembler CLI", long_about = None)]
struct Cli {
    /// Load address of the first bundle
    #[arg(long, default_value_t = 0u64)]
    base: u64,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<String>,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct BundleOut {
    pc: u64,
    word: u64,
    text: String,
    slots: Vec<SlotOut>,
}

#[derive(Serialize)]
struct SlotOut {
    pipe: &'static str,
    mnemonic: Option<&'static str>,
    operands: Vec<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bytes = std::fs::read(&cli.input).with_context(|| cli.input.clone())?;
    if cli.skip > bytes.len() {
        bail!("--skip {} is past end of {} byte file", cli.skip, bytes.len());
    }
    let mut code = &bytes[cli.skip..];
    if let Some(len) = cli.len {
        code = &code[..len.min(code.len())];
    }

    let output = match cli.format {
        OutputFormat::Text => dump(code, cli.base),
        OutputFormat::Json => {
            let decoder = BundleDecoder::new();
            let mut bundles = Vec::new();
            for (i, chunk) in code.chunks_exact(BUNDLE_SIZE_IN_BYTES).enumerate() {
                let pc = cli.base + (i * BUNDLE_SIZE_IN_BYTES) as u64;
                let word = u64::from_le_bytes(chunk.try_into().unwrap());
                let insns = decoder.decode_bundle(word, pc);
                bundles.push(BundleOut {
                    pc,
                    word,
                    text: fmt_bundle(&insns),
                    slots: insns
                        .iter()
                        .map(|insn| SlotOut {
                            pipe: insn.pipe.name(),
                            mnemonic: insn.opcode.map(|o| o.mnemonic()),
                            operands: insn.operands.iter().map(|&(_, v)| v).collect(),
                        })
                        .collect(),
                });
            }
            serde_json::to_string_pretty(&bundles)?
        }
    };

    match cli.out {
        Some(path) => std::fs::write(path, output)?,
        None => print!("{output}"),
    }
    Ok(())
}
