//! Resume file I/O.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PersistenceError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, MAGIC_BYTES, ResumeFile};

/// Save a resume to a `.resume` file.
///
/// Uses atomic write (temp file + rename) so a crash or power loss never
/// leaves a half-written file at the target path.
pub fn save_resume(resume: &mut ResumeFile, path: &Path) -> Result<()> {
    resume.touch();
    let bytes = serialize_resume(resume)?;

    let temp_path = path.with_extension("resume.tmp");

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Saved resume to {}", path.display());
    Ok(())
}

/// Save a resume on the blocking thread pool, keeping the event loop free.
pub async fn save_resume_async(resume: ResumeFile, path: PathBuf) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        let mut resume = resume;
        save_resume(&mut resume, &path)
    })
    .await
    .map_err(|e| PersistenceError::Serialization {
        source: Box::new(e),
    })?
}

/// Load a resume from a `.resume` file.
pub fn load_resume(path: &Path) -> Result<ResumeFile> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes.len() < 8 {
        return Err(PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "file too short to contain a header".to_string(),
        });
    }

    if bytes[..4] != MAGIC_BYTES {
        return Err(PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "bad magic bytes".to_string(),
        });
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    let resume = serde_json::from_slice(&bytes[8..]).map_err(|e| {
        PersistenceError::Deserialization {
            source: Box::new(e),
        }
    })?;

    tracing::info!("Loaded resume from {}", path.display());
    Ok(resume)
}

/// Load a resume on the blocking thread pool.
pub async fn load_resume_async(path: PathBuf) -> Result<ResumeFile> {
    tokio::task::spawn_blocking(move || load_resume(&path))
        .await
        .map_err(|e| PersistenceError::Deserialization {
            source: Box::new(e),
        })?
}

/// Serialize a resume to bytes: magic, schema version, JSON payload.
fn serialize_resume(resume: &ResumeFile) -> Result<Vec<u8>> {
    let payload = serde_json::to_vec(resume).map_err(|e| PersistenceError::Serialization {
        source: Box::new(e),
    })?;

    let mut bytes = Vec::with_capacity(8 + payload.len());
    bytes.extend_from_slice(&MAGIC_BYTES);
    bytes.extend_from_slice(&CURRENT_SCHEMA_VERSION.to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}
