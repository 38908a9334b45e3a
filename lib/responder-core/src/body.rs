//! Body decoding utilities.

use std::io::{self, Read, Write};

use crate::{Error, Result};

/// Reader that copies everything it reads into a sink.
///
/// # Example
///
/// ```
/// use std::io::Read;
/// use responder_core::TeeReader;
///
/// let mut copy = Vec::new();
/// let mut text = String::new();
/// TeeReader::new(&b"hello"[..], &mut copy)
///     .read_to_string(&mut text)
///     .expect("read");
///
/// assert_eq!(text, "hello");
/// assert_eq!(copy, b"hello");
/// ```
#[derive(Debug)]
pub struct TeeReader<R, W> {
    reader: R,
    sink: W,
}

impl<R, W> TeeReader<R, W> {
    /// Creates a reader copying what it reads from `reader` into `sink`.
    pub const fn new(reader: R, sink: W) -> Self {
        Self { reader, sink }
    }

    /// Consume into (reader, sink).
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.sink)
    }
}

impl<R: Read, W: Write> Read for TeeReader<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let count = self.reader.read(buf)?;
        if let Some(read) = buf.get(..count) {
            self.sink.write_all(read)?;
        }
        Ok(count)
    }
}

/// Decode one JSON document from `reader`, with path-aware error messages.
///
/// Only the bytes making up the first document are consumed. On failure the
/// error carries the raw text read so far.
///
/// The reader is not buffered here, so it sees one `read` call per byte.
/// Wrap costly streams in [`std::io::BufReader`] beforehand, accepting that the
/// buffer may then hold bytes past the document.
///
/// # Errors
///
/// Returns [`Error::JsonDecode`] if the stream is not a valid document for `T`,
/// including when reading the stream fails.
///
/// # Example
///
/// ```
/// use responder_core::from_json_reader;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct User { name: String }
///
/// let user: User = from_json_reader(&br#"{"name":"Alice"}"#[..]).expect("decode");
/// assert_eq!(user, User { name: "Alice".to_string() });
/// ```
pub fn from_json_reader<T, R>(reader: R) -> Result<T>
where
    T: serde::de::DeserializeOwned,
    R: Read,
{
    let mut consumed = Vec::new();
    let result = {
        let mut deserializer =
            serde_json::Deserializer::from_reader(TeeReader::new(reader, &mut consumed));
        serde_path_to_error::deserialize(&mut deserializer)
    };
    result.map_err(|e| {
        Error::json_decode(
            e.path().to_string(),
            e.inner().to_string(),
            String::from_utf8_lossy(&consumed),
        )
    })
}
