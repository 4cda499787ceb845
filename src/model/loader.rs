use super::StagedFile;
use std::path::PathBuf;

/// Reads the metadata needed to stage `path` for upload. File contents are not opened.
pub fn stage_path(path: PathBuf) -> Result<StagedFile, String> {
    log::info!("Staging file: {}", path.display());
    let metadata = std::fs::metadata(&path).map_err(|err| {
        let message = format!("{}: failed to read file metadata ({err})", path.display());
        log::error!("{message}");
        message
    })?;

    if !metadata.is_file() {
        let message = format!("{}: not a regular file", path.display());
        log::error!("{message}");
        return Err(message);
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(StagedFile {
        name,
        size_bytes: metadata.len(),
        path,
    })
}

pub fn stage_paths(paths: Vec<PathBuf>) -> Vec<Result<StagedFile, String>> {
    paths.into_iter().map(stage_path).collect()
}
