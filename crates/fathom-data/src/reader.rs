//! The raster source seam.

use std::path::{Path, PathBuf};

use fathom_core::ChannelStack;
use indexmap::IndexMap;

use crate::error::LoadError;
use crate::meta::RasterMeta;

/// Supplies a `(C, H, W)` channel stack and its metadata for a path.
///
/// File formats live outside this crate; implement this trait to plug
/// one in.
pub trait RasterReader {
    /// Read the grid stored at `path`.
    fn read(&self, path: &Path) -> Result<(ChannelStack, RasterMeta), LoadError>;
}

/// An in-memory [`RasterReader`] keyed by path.
#[derive(Clone, Debug, Default)]
pub struct MemoryReader {
    grids: IndexMap<PathBuf, (ChannelStack, RasterMeta)>,
}

impl MemoryReader {
    /// An empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `stack` and `meta` under `path`, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<PathBuf>, stack: ChannelStack, meta: RasterMeta) {
        self.grids.insert(path.into(), (stack, meta));
    }

    /// Builder-style [`insert`](MemoryReader::insert).
    pub fn with_grid(
        mut self,
        path: impl Into<PathBuf>,
        stack: ChannelStack,
        meta: RasterMeta,
    ) -> Self {
        self.insert(path, stack, meta);
        self
    }

    /// Registered paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.grids.keys().map(PathBuf::as_path)
    }
}

impl RasterReader for MemoryReader {
    fn read(&self, path: &Path) -> Result<(ChannelStack, RasterMeta), LoadError> {
        self.grids
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                path: path.to_path_buf(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fathom_core::Raster;

    #[test]
    fn read_returns_registered_grid() {
        let stack = ChannelStack::new(vec![Raster::zeros(2, 2).unwrap()]).unwrap();
        let reader = MemoryReader::new().with_grid(
            "data/a.grid",
            stack.clone(),
            RasterMeta::new().with_attribute("k", "v"),
        );
        let (s, m) = reader.read(Path::new("data/a.grid")).unwrap();
        assert_eq!(s, stack);
        assert_eq!(m.attribute("k"), Some("v"));
        assert_eq!(reader.paths().count(), 1);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let err = MemoryReader::new().read(Path::new("nope")).unwrap_err();
        assert_eq!(
            err,
            LoadError::NotFound {
                path: PathBuf::from("nope")
            }
        );
    }
}
