//! Memory-mapped record files.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use super::buffer::EntityBuffer;
use crate::util::{Error, Result};

/// Backing storage for an [`EntityBuffer`] read from a file of raw records.
///
/// The file is mapped read-only; the bytes are never copied. An empty file
/// is not mapped (mapping zero bytes fails on some platforms) and yields an
/// empty buffer.
pub struct MappedBuffer {
    mmap: Option<Mmap>,
}

impl MappedBuffer {
    /// Map a file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let size = file.metadata()?.len();
        let mmap = if size > 0 {
            // Safety: mapped read-only; callers must not truncate the file
            // while the mapping is alive.
            let mmap = unsafe { Mmap::map(&file) }.map_err(|e| Error::MmapFailed(e.to_string()))?;
            Some(mmap)
        } else {
            None
        };

        tracing::debug!(path = %path.display(), size, "mapped record file");
        Ok(Self { mmap })
    }

    /// Mapped bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Size of the mapping in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the mapping as an entity buffer.
    #[inline]
    pub fn buffer(&self) -> EntityBuffer<'_> {
        EntityBuffer::new(self.as_bytes())
    }
}
