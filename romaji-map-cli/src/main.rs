use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use romaji_map::Converter;

mod cli;
#[cfg(feature = "dialog")]
mod dialog;
mod output;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let converter = cli.converter()?;
    log::debug!("{converter:?}");

    if cli.dialog {
        #[cfg(feature = "dialog")]
        return dialog::run(&converter);
        #[cfg(not(feature = "dialog"))]
        bail!("--dialog requires building with the `dialog` feature");
    }

    let Some(input) = cli.input.as_deref() else {
        bail!("no input file");
    };
    let table = convert_file(&converter, input)?;

    match cli.output.as_deref() {
        Some(dest) => {
            let dest = output::with_txt_extension(dest);
            output::save(&dest, &table, cli.force, output::confirm_on_terminal)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(table.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Read and convert an export. Nothing is written on failure.
pub(crate) fn convert_file(converter: &Converter, path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    log::info!("read {} bytes from {}", bytes.len(), path.display());
    converter
        .convert(&bytes)
        .with_context(|| format!("failed to convert {}", path.display()))
}
