use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::generators::typescript::GeneratedFile;

/// Write a generated file into `output_dir`, creating the directory if needed.
///
/// Contents go to a sibling temporary file first and are renamed into place,
/// so a failed write never leaves a truncated artifact behind.
pub fn write_artifact(output_dir: &Path, file: &GeneratedFile) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| Error::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(file.file_name);
    let tmp_path = output_dir.join(format!(".{}.tmp", file.file_name));

    let result = fs::write(&tmp_path, &file.contents).and_then(|_| fs::rename(&tmp_path, &path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::Write { path, source });
    }

    Ok(path)
}

/// Compare a generated file with the copy in `output_dir`.
pub fn check_artifact(output_dir: &Path, file: &GeneratedFile) -> Result<PathBuf> {
    let path = output_dir.join(file.file_name);

    match fs::read_to_string(&path) {
        Ok(existing) if existing == file.contents => Ok(path),
        Ok(_) => Err(Error::StaleArtifact { path }),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::StaleArtifact { path }),
        Err(source) => Err(Error::ArtifactRead { path, source }),
    }
}
