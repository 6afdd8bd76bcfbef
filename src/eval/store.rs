//! Weight persistence.
//!
//! The weight file is the only state that survives process restarts: a
//! single bincode-encoded `Vec<f64>`, no version field. A vector of the
//! wrong length is recovered by falling back to the fixed prior (the
//! weights were trained against a different feature layout and cannot be
//! trusted), while I/O and decode failures are real errors.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::warn;

use crate::eval::features::FEATURE_COUNT;
use crate::eval::linear::DEFAULT_WEIGHTS;

/// Path-addressed store for the evaluator's weight vector.
#[derive(Clone, Debug)]
pub struct WeightStore {
    path: PathBuf,
}

impl WeightStore {
    /// Create a store for the given file path. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore weights from disk.
    ///
    /// Returns `Ok(None)` when the file does not exist (fresh run). A
    /// stored vector whose length does not match [`FEATURE_COUNT`] yields
    /// the fixed prior with a warning; this is deliberately not an error.
    pub fn load(&self) -> anyhow::Result<Option<[f64; FEATURE_COUNT]>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)
            .with_context(|| format!("reading weight file {}", self.path.display()))?;
        let stored: Vec<f64> = bincode::deserialize(&bytes)
            .with_context(|| format!("decoding weight file {}", self.path.display()))?;

        match <[f64; FEATURE_COUNT]>::try_from(stored.as_slice()) {
            Ok(weights) => Ok(Some(weights)),
            Err(_) => {
                warn!(
                    "weight file {} holds {} components, expected {}; using the default prior",
                    self.path.display(),
                    stored.len(),
                    FEATURE_COUNT
                );
                Ok(Some(DEFAULT_WEIGHTS))
            }
        }
    }

    /// Persist weights, replacing any previous file.
    ///
    /// Stored as a `Vec<f64>` so `load` can detect length drift instead
    /// of failing to decode.
    pub fn save(&self, weights: &[f64; FEATURE_COUNT]) -> anyhow::Result<()> {
        let bytes = bincode::serialize(&weights.to_vec())
            .context("encoding weight vector")?;
        fs::write(&self.path, bytes)
            .with_context(|| format!("writing weight file {}", self.path.display()))?;
        Ok(())
    }
}
