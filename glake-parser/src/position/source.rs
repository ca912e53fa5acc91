//! Random access reads over a text buffer

use std::borrow::Cow;

use super::RangeError;

/// A buffer that can be read at arbitrary byte offsets.
///
/// Editor buffers may be rope-like and hand out copies; plain slices lend their bytes.
pub trait ByteSource {
    /// Length in bytes.
    fn max(&self) -> usize;

    /// Exactly `len` bytes starting at `offset`.
    fn read_at(&self, offset: usize, len: usize) -> Result<Cow<'_, [u8]>, RangeError>;
}

impl ByteSource for [u8] {
    fn max(&self) -> usize {
        self.len()
    }

    fn read_at(&self, offset: usize, len: usize) -> Result<Cow<'_, [u8]>, RangeError> {
        offset
            .checked_add(len)
            .and_then(|end| self.get(offset..end))
            .map(Cow::Borrowed)
            .ok_or(RangeError::Read {
                offset,
                len,
                max: self.len(),
            })
    }
}

impl ByteSource for str {
    fn max(&self) -> usize {
        self.len()
    }

    fn read_at(&self, offset: usize, len: usize) -> Result<Cow<'_, [u8]>, RangeError> {
        self.as_bytes().read_at(offset, len)
    }
}

impl ByteSource for Vec<u8> {
    fn max(&self) -> usize {
        self.len()
    }

    fn read_at(&self, offset: usize, len: usize) -> Result<Cow<'_, [u8]>, RangeError> {
        self.as_slice().read_at(offset, len)
    }
}

impl ByteSource for String {
    fn max(&self) -> usize {
        self.len()
    }

    fn read_at(&self, offset: usize, len: usize) -> Result<Cow<'_, [u8]>, RangeError> {
        self.as_bytes().read_at(offset, len)
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn max(&self) -> usize {
        (**self).max()
    }

    fn read_at(&self, offset: usize, len: usize) -> Result<Cow<'_, [u8]>, RangeError> {
        (**self).read_at(offset, len)
    }
}
