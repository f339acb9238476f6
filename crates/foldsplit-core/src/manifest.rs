use crate::error::{FoldError, FoldResult};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read a manifest, one sample path per line. Lines are kept verbatim apart
/// from the line terminator.
pub fn read_manifest(path: &Path) -> FoldResult<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| FoldError::ManifestRead { path: path.to_path_buf(), source: e })?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Join lines with `\n`, always ending with a newline.
#[must_use]
pub fn render_manifest<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    if out.is_empty() {
        out.push('\n');
    }
    out
}

/// Write `contents` to `path` through a temp file in the same directory, so
/// readers never observe a half-written file.
///
/// A symlink at `path` is written through to the file it names, and an
/// existing target keeps its permissions. New files get the umask default.
pub fn write_atomic(path: &Path, contents: &str) -> FoldResult<()> {
    let write_err = |e| FoldError::Write { path: path.to_path_buf(), source: e };

    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let existing = std::fs::metadata(&target).ok().map(|md| md.permissions());

    let mut tmp = new_temp_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms).map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn new_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    // 0o666 is narrowed by the process umask at creation.
    tempfile::Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

pub fn write_manifest<S: AsRef<str>>(path: &Path, lines: &[S]) -> FoldResult<()> {
    write_atomic(path, &render_manifest(lines))
}
