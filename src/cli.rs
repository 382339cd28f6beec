// src/cli.rs
use std::{env, path::PathBuf};

use crate::csv::Delim;
use crate::params::Params;
use crate::progress::{ConsoleProgress, NullProgress, Progress};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params, env::args().skip(1))?;

    let mut console = ConsoleProgress;
    let mut null = NullProgress;
    let progress: &mut dyn Progress = if params.quiet { &mut null } else { &mut console };

    let summary = crate::runner::run(&params, Some(progress))?;
    println!(
        "Wrote {} ({} rows, {} identifier columns)",
        summary.report_path.display(), summary.rows_written, summary.columns
    );
    Ok(())
}

pub fn parse_cli<I>(params: &mut Params, mut args: I) -> Result<(), Box<dyn std::error::Error>>
where
    I: Iterator<Item = String>,
{
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-u" | "--url" => params.urls.push(args.next().ok_or("Missing value for --url")?),
            "-f" | "--file" => {
                let v = args.next().ok_or("Missing value for --file")?;
                params.files.push(PathBuf::from(v));
            }
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-q" | "--quiet" => params.quiet = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.urls.is_empty() && params.files.is_empty() {
        return Err("Specify at least one --url or --file".into());
    }

    Ok(())
}
