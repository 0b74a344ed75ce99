use crate::core::data::fractal_preset::FractalPreset;
use crate::core::presets::builtin::builtin_presets;
use log::warn;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum PresetStoreError {
    Io { path: PathBuf, source: io::Error },
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    Serialise(serde_json::Error),
}

impl fmt::Display for PresetStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access preset file {}: {}", path.display(), source)
            }
            Self::Corrupt { path, source } => {
                write!(f, "preset file {} is corrupt: {}", path.display(), source)
            }
            Self::Serialise(err) => write!(f, "cannot serialise presets: {}", err),
        }
    }
}

impl Error for PresetStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            Self::Serialise(err) => Some(err),
        }
    }
}

/// User presets kept as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored presets in file order. A missing file is an empty store.
    pub fn list(&self) -> Result<Vec<FractalPreset>, PresetStoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(PresetStoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&text).map_err(|source| PresetStoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    pub fn get(&self, id: &str) -> Result<Option<FractalPreset>, PresetStoreError> {
        Ok(self.list()?.into_iter().find(|preset| preset.id == id))
    }

    /// Replaces the preset with the same id in place, or appends it.
    pub fn upsert(&self, preset: FractalPreset) -> Result<(), PresetStoreError> {
        let mut presets = self.list()?;

        match presets.iter_mut().find(|existing| existing.id == preset.id) {
            Some(existing) => *existing = preset,
            None => presets.push(preset),
        }

        self.write(&presets)
    }

    /// Returns whether a preset was removed.
    pub fn delete(&self, id: &str) -> Result<bool, PresetStoreError> {
        let mut presets = self.list()?;
        let before = presets.len();
        presets.retain(|preset| preset.id != id);

        if presets.len() == before {
            return Ok(false);
        }

        self.write(&presets)?;
        Ok(true)
    }

    fn write(&self, presets: &[FractalPreset]) -> Result<(), PresetStoreError> {
        let json = serde_json::to_string_pretty(presets).map_err(PresetStoreError::Serialise)?;

        let io_error = |source: io::Error| PresetStoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        fs::write(&self.path, json).map_err(io_error)
    }
}

/// Built-in presets followed by the stored ones. An unreadable store is
/// logged and skipped.
#[must_use]
pub fn all_presets(store: Option<&PresetStore>) -> Vec<FractalPreset> {
    let mut presets = builtin_presets();

    if let Some(store) = store {
        match store.list() {
            Ok(custom) => presets.extend(custom),
            Err(err) => warn!("ignoring custom presets: {}", err),
        }
    }

    presets
}

/// Looks `id` up among built-ins first, then the store.
pub fn find_preset(
    id: &str,
    store: Option<&PresetStore>,
) -> Result<Option<FractalPreset>, PresetStoreError> {
    if let Some(preset) = builtin_presets().into_iter().find(|preset| preset.id == id) {
        return Ok(Some(preset));
    }

    match store {
        Some(store) => store.get(id),
        None => Ok(None),
    }
}
