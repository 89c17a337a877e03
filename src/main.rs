mod adapters;
mod engine;

mod models;

use std::fs::File;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use adapters::{cli, csv_parser, output};
use models::expansion::ExpandSpec;

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: cli::Cli) -> anyhow::Result<()> {
    let dest_names = cli::parse_dest_names(&args.expand_cols_into)?;

    let spec = ExpandSpec {
        column_name: args.column_name,
        dest_names,
        prefix: args.prepend_to_expand_cols,
    };

    // Resolve the output path up front so a bad input path fails before any read.
    let out_path = output::derive_output_path(&args.file)?;

    let table = csv_parser::read_table(&args.file)?;
    let expanded = engine::expander::expand(&table, &spec)?;

    // The output file is only created once the whole transform has succeeded,
    // so a failed run never leaves a partial file behind.
    let out_file = File::create(&out_path)
        .with_context(|| format!("failed to create output file {}", out_path.display()))?;
    output::write_table(&expanded, out_file)?;

    eprintln!(
        "Expanded {} rows into {} columns, wrote {}",
        expanded.rows.len(),
        expanded.header.len(),
        out_path.display()
    );

    Ok(())
}
