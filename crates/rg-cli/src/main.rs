//! RankGap CLI
//! Usage:
//!   rankgap <dictionary_file> <sample_file>
//!
//! Loads a newline-separated dictionary and a sample text, runs the
//! token-rank transform, and prints diagnostic sizes.

use std::{env, fs, process};

use anyhow::{Context, Result};
use rg_core::{entropy, Dictionary, RankGapPipeline};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage:");
        eprintln!("  rankgap <dictionary> <sample>");
        process::exit(1);
    }

    if let Err(e) = run(&args[1], &args[2]) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(dict_path: &str, sample_path: &str) -> Result<()> {
    let dict = Dictionary::load(dict_path)
        .with_context(|| format!("failed to load dictionary {dict_path}"))?;
    let sample = fs::read_to_string(sample_path)
        .with_context(|| format!("failed to read sample {sample_path}"))?;

    let pipeline = RankGapPipeline::max_effort();
    let output = pipeline.transform(&dict, &sample)?;

    // untransformed text through the same entropy coder, for comparison
    let baseline = entropy::compress(sample.as_bytes(), pipeline.config.zstd_level)?;

    println!("original:   {} bytes", sample.len());
    println!("payload:    {} bytes", output.payload.len());
    println!("compressed: {} bytes", output.compressed.len());
    println!("baseline:   {} bytes", baseline.len());
    println!("{}", serde_json::to_string_pretty(&output.report)?);

    Ok(())
}
