//! Native dialogs: open the export, convert, save the table.
use std::path::{Path, PathBuf};

use anyhow::Result;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use romaji_map::Converter;

use crate::{convert_file, output};

const TITLE: &str = "ATOK romaji map converter";

pub fn run(converter: &Converter) -> Result<()> {
    let Some(source) = FileDialog::new()
        .set_title(format!("Open ATOK romaji map - {TITLE}"))
        .pick_file()
    else {
        log::info!("no export selected");
        return Ok(());
    };

    let table = match convert_file(converter, &source) {
        Ok(table) => table,
        Err(e) => {
            show_error(&e);
            return Err(e);
        }
    };

    while let Some(dest) = pick_destination(&source) {
        let dest = output::with_txt_extension(&dest);
        let mut cancelled = false;
        let result = output::save(&dest, &table, false, |path| {
            Ok(match confirm_overwrite(path) {
                MessageDialogResult::Yes => true,
                MessageDialogResult::Cancel => {
                    cancelled = true;
                    false
                }
                // Pick another file
                _ => false,
            })
        });
        match result {
            Ok(true) => return Ok(()),
            Ok(false) if cancelled => return Ok(()),
            Ok(false) => continue,
            Err(e) => {
                show_error(&e);
                return Err(e);
            }
        }
    }
    log::info!("save cancelled");
    Ok(())
}

fn pick_destination(source: &Path) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title(format!("Save Google Japanese Input romaji table - {TITLE}"))
        .add_filter("Text", &["txt"]);
    if let Some(stem) = source.file_stem() {
        dialog = dialog.set_file_name(format!("{}-google.txt", stem.to_string_lossy()));
    }
    if let Some(dir) = source.parent() {
        dialog = dialog.set_directory(dir);
    }
    dialog.save_file()
}

fn confirm_overwrite(path: &Path) -> MessageDialogResult {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Existing file")
        .set_description(format!("{} already exists, overwrite?", path.display()))
        .set_buttons(MessageButtons::YesNoCancel)
        .show()
}

fn show_error(e: &anyhow::Error) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(TITLE)
        .set_description(format!("{e:#}"))
        .set_buttons(MessageButtons::Ok)
        .show();
}
