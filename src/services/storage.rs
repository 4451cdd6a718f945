use crate::domain::constants::DOCUMENT_EXTENSION;
use crate::error::DefectError;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub folder: PathBuf,
    pub document: PathBuf,
}

/// Folder keeps the title as typed; the file name drops its spaces.
pub fn target_for(base_dir: &Path, title: &str) -> Target {
    let folder = base_dir.join(title);
    let file_name = format!("{}.{}", title.replace(' ', ""), DOCUMENT_EXTENSION);
    let document = folder.join(file_name);
    Target { folder, document }
}

/// Creates the folder and an empty document. Aborts without touching
/// anything when either already exists.
pub fn create_target(target: &Target) -> anyhow::Result<()> {
    if target.folder.exists() {
        return Err(DefectError::TargetAlreadyExists(target.folder.clone()).into());
    }
    if target.document.exists() {
        return Err(DefectError::TargetAlreadyExists(target.document.clone()).into());
    }

    match std::fs::create_dir(&target.folder) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(DefectError::TargetAlreadyExists(target.folder.clone()).into());
        }
        Err(e) => return Err(e.into()),
    }
    let created = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target.document);
    if let Err(e) = created {
        remove_new_folder(&target.folder);
        if e.kind() == ErrorKind::AlreadyExists {
            return Err(DefectError::TargetAlreadyExists(target.document.clone()).into());
        }
        return Err(e.into());
    }
    tracing::info!(folder = %target.folder.display(), "created work item folder");
    Ok(())
}

/// Rolls back a folder this run created when its document could not be made.
fn remove_new_folder(folder: &Path) {
    if let Err(e) = std::fs::remove_dir(folder) {
        tracing::warn!(
            folder = %folder.display(),
            error = %e,
            "could not remove folder after failed document create"
        );
    }
}

pub fn is_empty_file(path: &Path) -> anyhow::Result<bool> {
    Ok(std::fs::metadata(path)?.len() == 0)
}

/// Write-once: fills the document only while it is still empty and reports
/// whether anything was written.
pub fn write_document(path: &Path, contents: &str) -> anyhow::Result<bool> {
    if !is_empty_file(path)? {
        tracing::warn!(path = %path.display(), "document already has content; skipping");
        return Ok(false);
    }
    let mut file = std::fs::OpenOptions::new().append(true).open(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(true)
}
