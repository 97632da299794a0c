use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cr16_rs::{assemble_with_labels, render, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Two-pass assembler for a CR16-style 16-bit ISA (subset)"
)]
struct Opts {
    /// Input assembly file (one instruction or label per line)
    #[arg(short, long)]
    input: PathBuf,
    /// Output text file (one rendered word per line)
    #[arg(short, long)]
    output: PathBuf,
    /// Output radix
    #[arg(long, value_enum, default_value_t = Radix::Hex)]
    format: Radix,
    /// Export resolved labels to JSON (Vec<{ name, addr }>)
    #[arg(long, value_name = "FILE")]
    labels_out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Radix {
    Hex,
    Bin,
    Dec,
}

impl From<Radix> for OutputFormat {
    fn from(r: Radix) -> Self {
        match r {
            Radix::Hex => OutputFormat::Hex,
            Radix::Bin => OutputFormat::Bin,
            Radix::Dec => OutputFormat::Dec,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
struct LabelKV {
    name: String,
    addr: u16,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let text = fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;

    let (words, labels) = assemble_with_labels(&text)?;
    info!(words = words.len(), labels = labels.len(), "assembly complete");

    let mut out = render(&words, opts.format.into()).join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    fs::write(&opts.output, out).with_context(|| format!("writing {}", opts.output.display()))?;

    if let Some(path) = &opts.labels_out {
        let mut kv: Vec<LabelKV> = labels
            .iter()
            .map(|(name, addr)| LabelKV {
                name: name.to_string(),
                addr,
            })
            .collect();
        kv.sort_by_key(|l| l.addr);
        fs::write(path, serde_json::to_string_pretty(&kv)?)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
