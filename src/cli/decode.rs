//! Decode command implementation

use crate::observation::read_json_lines;
use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Newline-delimited JSON file, or "-" for stdin
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,
}

impl DecodeArgs {
    pub fn execute<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        if self.input.as_os_str() == "-" {
            let stdin = io::stdin();
            return Self::print(stdin.lock(), "<stdin>", out);
        }

        let file = File::open(&self.input)
            .with_context(|| format!("Failed to open {}", self.input.display()))?;
        Self::print(BufReader::new(file), &self.input.display().to_string(), out)
    }

    fn print<R: BufRead, W: Write>(reader: R, name: &str, out: &mut W) -> anyhow::Result<()> {
        let observations =
            read_json_lines(reader).with_context(|| format!("Failed to decode {}", name))?;
        tracing::info!(count = observations.len(), input = name, "Decoded observations");

        for obs in &observations {
            writeln!(out, "{}", obs)?;
        }
        Ok(())
    }
}
