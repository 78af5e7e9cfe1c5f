use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    ffi::OsStr,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

/// Google Japanese Input only imports `.txt`, so a path without an extension gets one.
///
/// The extension is whatever follows the last `.` of the file name, so dotfiles
/// like `.mozc` count as having one, and `mozc.` doesn't.
pub fn with_txt_extension(path: &Path) -> PathBuf {
    let name = path.file_name().map(OsStr::as_encoded_bytes).unwrap_or_default();
    match name.iter().rposition(|&b| b == b'.') {
        Some(i) if i + 1 < name.len() => path.to_owned(),
        _ => {
            let mut path = path.as_os_str().to_owned();
            path.push(".txt");
            path.into()
        }
    }
}

/// Write `contents` to `path` verbatim.
///
/// If `path` exists, it is only overwritten when `force` is set or `confirm`
/// returns `true`. Returns whether the file was written.
pub fn save(
    path: &Path,
    contents: &str,
    force: bool,
    confirm: impl FnOnce(&Path) -> Result<bool>,
) -> Result<bool> {
    if !force && path.exists() && !confirm(path)? {
        log::info!("kept existing {}", path.display());
        return Ok(false);
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(true)
}

/// Ask on the terminal. Refuses if stdin is not a terminal.
pub fn confirm_on_terminal(path: &Path) -> Result<bool> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        bail!(
            "{} already exists, pass --force to overwrite it",
            path.display()
        );
    }
    eprint!("{} already exists, overwrite? [y/N] ", path.display());
    io::stderr().flush()?;
    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y" | "yes" | "Yes" | "YES")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_extension() {
        assert_eq!(with_txt_extension(Path::new("mozc")), Path::new("mozc.txt"));
        assert_eq!(
            with_txt_extension(Path::new("dir/mozc")),
            Path::new("dir/mozc.txt")
        );
        assert_eq!(
            with_txt_extension(Path::new("mozc.txt")),
            Path::new("mozc.txt")
        );
        assert_eq!(
            with_txt_extension(Path::new("mozc.tsv")),
            Path::new("mozc.tsv")
        );
        assert_eq!(with_txt_extension(Path::new(".mozc")), Path::new(".mozc"));
        assert_eq!(
            with_txt_extension(Path::new("mozc.")),
            Path::new("mozc..txt")
        );
        assert_eq!(
            with_txt_extension(Path::new("ime.d/mozc")),
            Path::new("ime.d/mozc.txt")
        );
    }

    #[test]
    fn save_new() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mozc.txt");
        let written = save(&path, "kk\tっ\tk", false, |_| panic!("no file to overwrite")).unwrap();
        assert!(written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "kk\tっ\tk");
    }

    #[test]
    fn save_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mozc.txt");
        fs::write(&path, "old").unwrap();

        assert!(!save(&path, "new", false, |_| Ok(false)).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");

        assert!(save(&path, "new", false, |p| {
            assert_eq!(p, path);
            Ok(true)
        })
        .unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");

        assert!(save(&path, "forced", true, |_| panic!("forced")).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "forced");
    }

    #[test]
    fn save_confirm_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mozc.txt");
        fs::write(&path, "old").unwrap();
        assert!(save(&path, "new", false, |_| bail!("no terminal")).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    }

    #[test]
    fn save_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("mozc.txt");
        let err = save(&path, "", false, |_| Ok(true)).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }

    #[test]
    fn yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" yes \r\n"));
        assert!(!is_yes("\n"));
        assert!(!is_yes("n\n"));
        assert!(!is_yes("yep\n"));
    }
}
