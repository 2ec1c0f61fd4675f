use std::path::{Component, Path, PathBuf};

/// Validates an identifier string.
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \)
/// - Not "." or ".."
/// - Characters are alphanumeric, '-', '_', or (optionally) '.'
pub fn validate_identifier(id: &str, allow_dots: bool) -> bool {
    if id.is_empty() {
        return false;
    }
    if id.contains('/') || id.contains('\\') {
        return false;
    }
    if id == "." || id == ".." {
        return false;
    }
    id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || (allow_dots && c == '.'))
}

/// Return `true` iff every entry of `required_files` exists under `root`.
///
/// Entries are relative to `root` and may name files or directories. An empty
/// list is vacuously satisfied, even when `root` itself does not exist.
pub fn all_files_exist<S: AsRef<Path>>(required_files: &[S], root: &Path) -> bool {
    required_files.iter().all(|entry| resolve_under(root, entry.as_ref()).exists())
}

/// List the entries of `required_files` that are absent under `root`, in order.
pub fn missing_files<S: AsRef<Path>>(required_files: &[S], root: &Path) -> Vec<PathBuf> {
    required_files
        .iter()
        .map(|entry| entry.as_ref())
        .filter(|entry| !resolve_under(root, entry).exists())
        .map(Path::to_path_buf)
        .collect()
}

/// Join `entry` onto `root`, dropping any root or prefix component so that an
/// entry written as `/labels.csv` still resolves inside `root`.
fn resolve_under(root: &Path, entry: &Path) -> PathBuf {
    let relative: PathBuf = entry
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    root.join(relative)
}
