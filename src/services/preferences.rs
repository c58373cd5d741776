use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

/// Errors that can occur with the durable preference record
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Preference record not found at {0}")]
    Missing(PathBuf),

    #[error("Preference record I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Accumulated interest weight per car model name
///
/// Absent names weigh 0. The durable form is one `<name>,<weight>` line
/// per entry; names are not escaped, so a name containing `,` is split at
/// its first comma on reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceTable {
    weights: BTreeMap<String, f64>,
}

impl PreferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the durable record, best-effort
    ///
    /// A weight that does not parse, or is not finite, counts as 0. A line without a comma is
    /// taken as a bare name.
    pub fn parse(record: &str) -> Self {
        let mut weights = BTreeMap::new();

        for line in record.lines().filter(|l| !l.trim().is_empty()) {
            let (name, raw_weight) = line.split_once(',').unwrap_or((line, ""));

            let weight = match raw_weight.trim().parse::<f64>() {
                Ok(weight) if weight.is_finite() => weight,
                _ => {
                    tracing::warn!("Unreadable weight {:?} for {:?}, using 0", raw_weight, name);
                    0.0
                }
            };

            weights.insert(name.to_string(), weight);
        }

        Self { weights }
    }

    /// Render the durable record, `None` when there is nothing to write
    pub fn to_record(&self) -> Option<String> {
        if self.weights.is_empty() {
            return None;
        }

        let lines: Vec<String> = self
            .weights
            .iter()
            .map(|(name, weight)| format!("{},{}", name, weight))
            .collect();

        Some(lines.join("\n"))
    }

    /// Add `amount` to `key`, creating the entry if needed
    pub fn increment(&mut self, key: &str, amount: f64) {
        *self.weights.entry(key.to_string()).or_insert(0.0) += amount;
    }

    /// Insert `key` at weight 0 unless it is already present
    pub fn ensure(&mut self, key: &str) {
        self.weights.entry(key.to_string()).or_insert(0.0);
    }

    pub fn weight(&self, key: &str) -> f64 {
        self.weights.get(key).copied().unwrap_or(0.0)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.weights.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Process-wide preference table backed by a file
///
/// The table sits behind an async mutex. Handlers hold the guard for the
/// whole interact, persist and rank sequence of one request.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    table: Arc<Mutex<PreferenceTable>>,
}

impl PreferenceStore {
    /// Load the durable record; a missing file is an error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();

        let record = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => PreferenceError::Missing(path.clone()),
            _ => PreferenceError::Io(e),
        })?;

        let table = PreferenceTable::parse(&record);
        tracing::info!("Loaded {} preference weights from {}", table.len(), path.display());

        Ok(Self {
            path,
            table: Arc::new(Mutex::new(table)),
        })
    }

    /// Truncate the durable record to empty, creating it if missing
    pub fn clear<P: AsRef<Path>>(path: P) -> Result<(), PreferenceError> {
        std::fs::write(path.as_ref(), "")?;
        tracing::info!("Cleared preference record at {}", path.as_ref().display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire exclusive access to the table
    pub async fn lock(&self) -> MutexGuard<'_, PreferenceTable> {
        self.table.lock().await
    }

    /// Overwrite the durable record with `table`
    ///
    /// An empty table leaves the record untouched.
    pub async fn persist(&self, table: &PreferenceTable) -> Result<(), PreferenceError> {
        let Some(record) = table.to_record() else {
            return Ok(());
        };

        tokio::fs::write(&self.path, record).await?;
        tracing::debug!("Persisted {} preference weights", table.len());
        Ok(())
    }
}
