//! Named, read-only resources consumed by the reporting pipelines.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Opens a named resource as a readable byte stream.
///
/// Resources never change at runtime, so implementations are shared across
/// concurrent requests without locking.
pub trait ResourceStore: Send + Sync {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send>>;
}

/// Resources stored as files below a root directory.
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl ResourceStore for DirResources {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send>> {
        let path = self.resolve(name);
        debug!(path = %path.display(), "opening resource");
        let file = File::open(&path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Resources held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(name.into(), content.into());
        self
    }
}

impl ResourceStore for MemoryResources {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send>> {
        match self.entries.get(name) {
            Some(content) => Ok(Box::new(Cursor::new(content.clone()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("resource not found: {name}"),
            )),
        }
    }
}
