use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use encoding_rs::Encoding;
use romaji_map::{ATOK_HEADER_LINES, Converter};

/// Convert an ATOK romaji map export to a Google Japanese Input romaji table.
///
/// The converted table can be imported from the romaji settings of Google
/// Japanese Input.
#[derive(Parser, Debug)]
#[command(name = "romaji-map", version, about, long_about = None)]
pub struct Cli {
    /// ATOK romaji map export.
    #[arg(required_unless_present = "dialog")]
    pub input: Option<PathBuf>,

    /// Where to write the table. `.txt` is appended if the path has no extension.
    /// Prints to stdout if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file without asking.
    #[arg(short, long, default_value_t = false)]
    pub force: bool,

    /// Encoding of the export.
    #[arg(long, default_value = "Shift_JIS")]
    pub encoding: String,

    /// Header lines skipped at the start of the export.
    #[arg(long, default_value_t = ATOK_HEADER_LINES)]
    pub header_lines: usize,

    /// Third column of rows without a next input.
    #[arg(long, default_value_t = ' ')]
    pub placeholder: char,

    /// Pick the input and output with native file dialogs.
    /// Requires the `dialog` feature.
    #[arg(long, default_value_t = false)]
    pub dialog: bool,

    /// Log level: off, error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: log::LevelFilter,
}

impl Cli {
    /// # Errors
    /// Returns an error if the encoding label is unknown.
    pub fn converter(&self) -> anyhow::Result<Converter> {
        let encoding = Encoding::for_label(self.encoding.as_bytes())
            .with_context(|| format!("unknown encoding {:?}", self.encoding))?;
        Ok(Converter::builder()
            .encoding(encoding)
            .header_lines(self.header_lines)
            .placeholder(self.placeholder)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["romaji-map", "atok.txt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("atok.txt")));
        assert_eq!(cli.output, None);
        assert!(!cli.force);
        assert!(!cli.dialog);
        assert_eq!(cli.header_lines, 4);
        assert_eq!(cli.placeholder, ' ');
        assert_eq!(cli.log_level, log::LevelFilter::Warn);

        let converter = cli.converter().unwrap();
        assert_eq!(converter.encoding(), encoding_rs::SHIFT_JIS);
    }

    #[test]
    fn options() {
        let cli = Cli::try_parse_from([
            "romaji-map",
            "atok.txt",
            "-o",
            "mozc",
            "--force",
            "--encoding",
            "utf-8",
            "--header-lines",
            "0",
            "--placeholder",
            "_",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("mozc")));
        assert!(cli.force);
        assert_eq!(cli.log_level, log::LevelFilter::Debug);

        let converter = cli.converter().unwrap();
        assert_eq!(converter.encoding(), encoding_rs::UTF_8);
        let table = converter.convert("ka か".as_bytes()).unwrap();
        assert!(table.starts_with("ka\tか\t_\n"));
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["romaji-map"]).is_err());
        let cli = Cli::try_parse_from(["romaji-map", "--dialog"]).unwrap();
        assert_eq!(cli.input, None);
    }

    #[test]
    fn unknown_encoding() {
        let cli = Cli::try_parse_from(["romaji-map", "atok.txt", "--encoding", "ebcdic"]).unwrap();
        assert!(cli.converter().is_err());
    }
}
