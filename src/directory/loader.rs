//! Patient store loading and ordering.
//!
//! The store is a single JSON array small enough to read wholesale; the
//! read itself goes through [`StoreReader`] so the loader stays testable
//! and the I/O surface stays in one place.

use std::future::Future;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::config;
use crate::models::Patient;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No data directory configured; the read is never attempted.
    /// Recoverable through the configuration dialog.
    #[error("No data directory configured")]
    ConfigMissing,

    /// The read capability failed (I/O, missing file, malformed JSON).
    /// The reason is carried verbatim for display; recoverable via retry
    /// or reconfiguration.
    #[error("{0}")]
    ReadFailed(String),

    /// The store parsed but is not a JSON array — the file is readable,
    /// the data is wrong. Recoverable only by reconfiguring or fixing it.
    #[error("Patient store is not a JSON array")]
    InvalidFormat,
}

/// Async read capability for the patient store: yields parsed JSON or an
/// error message, exactly one of the two.
pub trait StoreReader: Send + Sync {
    fn read_json(&self, path: &Path) -> impl Future<Output = Result<Value, String>> + Send;
}

/// Production reader over the local filesystem.
pub struct FsStoreReader;

impl StoreReader for FsStoreReader {
    fn read_json(&self, path: &Path) -> impl Future<Output = Result<Value, String>> + Send {
        async move {
            let raw = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| e.to_string())?;
            serde_json::from_str(&raw).map_err(|e| e.to_string())
        }
    }
}

/// The loaded directory: most recent first. Replaced wholesale on each
/// successful load, never mutated in place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatientCollection {
    pub patients: Vec<Patient>,
    /// Store entries that were not JSON objects and could not become
    /// records. Advisory only; carried through to the filtered view.
    pub unreadable: u32,
}

/// Load, decode, and order the patient store under `path`.
///
/// Sorts by creation timestamp descending; records without a timestamp
/// pin to the epoch and land last. The sort is stable, so records with
/// equal keys keep their store order.
pub async fn load_patients<R: StoreReader>(
    path: Option<&str>,
    reader: &R,
) -> Result<PatientCollection, LoadError> {
    let base = match path {
        Some(p) if !p.trim().is_empty() => p,
        _ => return Err(LoadError::ConfigMissing),
    };

    let store = config::patient_store_path(Path::new(base));
    let data = reader
        .read_json(&store)
        .await
        .map_err(LoadError::ReadFailed)?;

    let entries = match data {
        Value::Array(entries) => entries,
        _ => return Err(LoadError::InvalidFormat),
    };

    let mut unreadable = 0u32;
    let mut patients: Vec<Patient> = entries
        .iter()
        .filter_map(|entry| {
            let decoded = Patient::from_value(entry);
            if decoded.is_none() {
                unreadable += 1;
            }
            decoded
        })
        .collect();

    patients.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

    tracing::debug!(
        store = %store.display(),
        count = patients.len(),
        unreadable,
        "Patient store loaded"
    );

    Ok(PatientCollection {
        patients,
        unreadable,
    })
}
