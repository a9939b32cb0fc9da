// Positioned read window over borrowed buffer bytes.
use crate::core::error::{Error, ErrorKind};

#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.pos)
    }

    /// Moves to an absolute offset. Bounds are checked by the next `read`.
    pub fn seek(&mut self, offset: usize) {
        self.pos = offset;
    }

    /// Returns the next `len` bytes and advances past them.
    pub fn read(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let end = self.pos.checked_add(len).ok_or_else(|| {
            Error::new(ErrorKind::Range)
                .with_message("read length overflows")
                .with_offset(self.pos as u64)
        })?;
        if end > self.bytes.len() {
            return Err(Error::new(ErrorKind::Range)
                .with_message(format!(
                    "read of {len} bytes exceeds buffer of {} bytes",
                    self.bytes.len()
                ))
                .with_offset(self.pos as u64));
        }
        let out = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::ByteCursor;
    use crate::core::error::ErrorKind;

    #[test]
    fn read_advances_position() {
        let bytes = [1u8, 2, 3, 4, 5];
        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.read(2).expect("read"), &[1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read(3).expect("read"), &[3, 4, 5]);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn seek_is_absolute() {
        let bytes = [9u8, 8, 7, 6];
        let mut cursor = ByteCursor::new(&bytes);
        cursor.read(3).expect("read");
        cursor.seek(1);
        assert_eq!(cursor.read(2).expect("read"), &[8, 7]);
    }

    #[test]
    fn read_past_end_is_range_error() {
        let bytes = [0u8; 4];
        let mut cursor = ByteCursor::new(&bytes);
        cursor.seek(2);
        let err = cursor.read(3).expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.offset(), Some(2));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn seek_beyond_end_fails_on_read_not_seek() {
        let bytes = [0u8; 4];
        let mut cursor = ByteCursor::new(&bytes);
        cursor.seek(10);
        assert_eq!(cursor.read(0).expect_err("should fail").kind(), ErrorKind::Range);
    }

    #[test]
    fn cursors_over_same_bytes_are_independent() {
        let bytes = [1u8, 2, 3];
        let mut a = ByteCursor::new(&bytes);
        let b = ByteCursor::new(&bytes);
        a.read(2).expect("read");
        assert_eq!(a.position(), 2);
        assert_eq!(b.position(), 0);
    }
}
