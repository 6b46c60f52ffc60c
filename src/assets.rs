//! # Asset Directory
//!
//! Pre-supplied images (product icons, IP plates, footer strips) live in one
//! flat folder. Lookup is by base name, case-insensitive and
//! extension-agnostic: `IP_67` matches `ip_67.png` or `IP_67.PNG`. When two
//! files share a base name the one that sorts first wins.
//!
//! Misses are never errors. [`AssetDir::load`] logs a warning and returns
//! `None`; [`AssetDir::find`] is the silent probe used when a caller has its
//! own fallback chain.

use image::DynamicImage;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::SheetError;

/// Read-only index of a flat image folder.
#[derive(Debug, Clone, Default)]
pub struct AssetDir {
    root: PathBuf,
    /// Lowercase base name → file
    index: BTreeMap<String, PathBuf>,
}

fn base_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
}

impl AssetDir {
    /// Index every regular file in `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, SheetError> {
        let root = root.into();
        let mut files: Vec<PathBuf> = std::fs::read_dir(&root)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        let mut index = BTreeMap::new();
        for path in files {
            if let Some(name) = base_name(&path) {
                index.entry(name).or_insert(path);
            }
        }
        debug!("indexed {} assets in {}", index.len(), root.display());
        Ok(Self { root, index })
    }

    /// An index with no files; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Path of the asset named `name`, if present.
    pub fn find(&self, name: &str) -> Option<&Path> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(PathBuf::as_path)
    }

    /// Decode the asset named `name` without logging a miss.
    pub fn probe(&self, name: &str) -> Option<DynamicImage> {
        let path = self.find(name)?;
        match image::open(path) {
            Ok(img) => Some(img),
            Err(e) => {
                warn!("failed to decode asset {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Decode the asset named `name`, logging a warning when it is missing.
    pub fn load(&self, name: &str) -> Option<DynamicImage> {
        if self.find(name).is_none() {
            warn!("asset '{}' not found in {}", name, self.root.display());
            return None;
        }
        self.probe(name)
    }
}
