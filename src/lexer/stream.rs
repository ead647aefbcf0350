// src/lexer/stream.rs
use std::io::{self, BufReader, ErrorKind, Read, Seek};

/// Byte source with one-byte pushback via seeking.
///
/// The tokenizer never reads more than one byte past a dead transition, so
/// `unread` only ever steps back over bytes this stream itself handed out.
pub struct Stream<R> {
    inner: BufReader<R>,
    offset: u64,
}

impl<R: Read + Seek> Stream<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            offset: 0,
        }
    }

    /// Next byte, or `None` once the source is exhausted.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.offset += 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Steps back over a value returned by [`Stream::next_byte`]. The
    /// end-of-input sentinel was never physically read, so it needs no rewind.
    pub fn unread(&mut self, b: Option<u8>) -> io::Result<()> {
        if b.is_none() {
            return Ok(());
        }
        if self.offset == 0 {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                "unread before start of stream",
            ));
        }
        self.inner.seek_relative(-1)?;
        self.offset -= 1;
        Ok(())
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_then_unread() {
        let mut s = Stream::new(io::Cursor::new(b"ab".to_vec()));
        assert_eq!(s.next_byte().unwrap(), Some(b'a'));
        assert_eq!(s.next_byte().unwrap(), Some(b'b'));
        s.unread(Some(b'b')).unwrap();
        assert_eq!(s.offset(), 1);
        assert_eq!(s.next_byte().unwrap(), Some(b'b'));
        assert_eq!(s.next_byte().unwrap(), None);
    }

    #[test]
    fn unread_at_end_is_a_no_op() {
        let mut s = Stream::new(io::Cursor::new(b"a".to_vec()));
        assert_eq!(s.next_byte().unwrap(), Some(b'a'));
        assert_eq!(s.next_byte().unwrap(), None);
        s.unread(None).unwrap();
        assert_eq!(s.offset(), 1);
        s.unread(Some(b'a')).unwrap();
        assert_eq!(s.offset(), 0);
        assert_eq!(s.next_byte().unwrap(), Some(b'a'));
    }

    #[test]
    fn unread_before_start_fails() {
        let mut s = Stream::new(io::Cursor::new(Vec::new()));
        assert!(s.unread(Some(b'x')).is_err());
    }

    #[test]
    fn into_inner_returns_source() {
        let s = Stream::new(io::Cursor::new(b"xyz".to_vec()));
        assert_eq!(s.into_inner().into_inner(), b"xyz".to_vec());
    }
}
