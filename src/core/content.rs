//=========================================================================
// Content Manager
//=========================================================================
//
// Resolves asset names against a content root directory.
//
// The screen manager only hands this to screens; it never loads anything
// itself.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

//=== ContentManager ======================================================

/// Asset locator shared with every screen during load and unload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentManager {
    root: PathBuf,
}

impl ContentManager {
    /// Creates a content manager rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory assets are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute or root-relative path of an asset.
    pub fn resolve(&self, asset: &str) -> PathBuf {
        self.root.join(asset)
    }

    /// Reads an asset's raw bytes.
    pub fn read(&self, asset: &str) -> io::Result<Vec<u8>> {
        let path = self.resolve(asset);
        debug!("Loading asset {:?}", path);
        fs::read(path)
    }
}

impl Default for ContentManager {
    fn default() -> Self {
        Self::new("Content")
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
