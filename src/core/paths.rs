use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// `<stem>_swapped<ext>` in the directory of `target`.
pub fn default_output_path(target: &Path) -> PathBuf {
    let (mut name, ext) = split_extension(target);
    name.push("_swapped");
    push_extension(&mut name, ext);
    target.with_file_name(name)
}

/// Intermediate output of iteration `index`, keeping the target's extension
/// so the swapper writes the same image format.
pub fn temp_output_path(temp_dir: &Path, index: usize, target: &Path) -> PathBuf {
    let mut name = OsString::from(format!("temp_output_{index}"));
    push_extension(&mut name, split_extension(target).1);
    temp_dir.join(name)
}

/// Splits the file name at its last dot, except that dots leading the name
/// never start an extension: `..abc` and `.hidden` have none.
fn split_extension(target: &Path) -> (OsString, Option<&OsStr>) {
    match (target.file_stem(), target.extension()) {
        (Some(stem), Some(ext)) if !stem.as_encoded_bytes().iter().all(|b| *b == b'.') => {
            (stem.to_owned(), Some(ext))
        }
        _ => (
            target.file_name().unwrap_or(target.as_os_str()).to_owned(),
            None,
        ),
    }
}

fn push_extension(name: &mut OsString, ext: Option<&OsStr>) {
    if let Some(ext) = ext {
        name.push(".");
        name.push(ext);
    }
}
