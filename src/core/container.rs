//! Purpose: Parse the GLB container framing into an immutable chunk list.
//! Exports: `Container`, `Chunk`, `ChunkType`, `load`, `load_bytes`, `open`, `format_chunk`, `tag_text`.
//! Role: First stage of the read path; every other module works from a loaded `Container`.
//! Invariants: Header is 12 bytes (magic, version, declared length), all integers little-endian.
//! Invariants: Chunks are kept in file order; `chunk.data.len() == chunk.length as usize`.
//! Invariants: Declared total length is advisory and never checked against bytes consumed.
//! Invariants: The byte source is owned only for the duration of a load call.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use bstr::ByteSlice;

use crate::core::error::{Error, ErrorKind};

pub const GLB_MAGIC: [u8; 4] = *b"glTF";
pub const JSON_CHUNK_TAG: [u8; 4] = *b"JSON";
pub const BIN_CHUNK_TAG: [u8; 4] = *b"BIN\0";
pub const HEADER_LEN: usize = 12;
pub const CHUNK_HEADER_LEN: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChunkType {
    Json,
    Bin,
    Other([u8; 4]),
}

impl ChunkType {
    pub fn from_tag(tag: [u8; 4]) -> Self {
        match tag {
            JSON_CHUNK_TAG => ChunkType::Json,
            BIN_CHUNK_TAG => ChunkType::Bin,
            other => ChunkType::Other(other),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Chunk {
    pub length: u32,
    pub tag: [u8; 4],
    pub data: Vec<u8>,
}

impl Chunk {
    pub fn chunk_type(&self) -> ChunkType {
        ChunkType::from_tag(self.tag)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Container {
    version: u32,
    declared_length: u32,
    chunks: Vec<Chunk>,
}

impl Container {
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn declared_length(&self) -> u32 {
        self.declared_length
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }
}

/// Opens `path`, loads the whole container, and closes the file before returning.
pub fn open(path: &Path) -> Result<Container, Error> {
    let file = File::open(path).map_err(|err| {
        let kind = if err.kind() == io::ErrorKind::NotFound {
            ErrorKind::NotFound
        } else {
            ErrorKind::Io
        };
        Error::new(kind)
            .with_message("failed to open container")
            .with_path(path)
            .with_source(err)
    })?;
    load(BufReader::new(file)).map_err(|err| err.with_path(path))
}

pub fn load_bytes(bytes: &[u8]) -> Result<Container, Error> {
    load(bytes)
}

pub fn load<R: Read>(mut reader: R) -> Result<Container, Error> {
    let mut magic = [0u8; 4];
    let got = read_full(&mut reader, &mut magic, 0)?;
    if got < magic.len() || magic != GLB_MAGIC {
        return Err(Error::new(ErrorKind::Format)
            .with_message(format!("bad magic {:?}", magic[..got].as_bstr()))
            .with_hint("Expected a binary glTF file starting with \"glTF\".")
            .with_offset(0));
    }
    let version = read_u32(&mut reader, 4, "version")?;
    let declared_length = read_u32(&mut reader, 8, "length")?;
    tracing::debug!(version, declared_length, "parsed glb header");

    let mut chunks = Vec::new();
    let mut offset = HEADER_LEN as u64;
    loop {
        let mut head = [0u8; CHUNK_HEADER_LEN];
        let got = read_full(&mut reader, &mut head, offset)?;
        if got == 0 {
            break;
        }
        if got < CHUNK_HEADER_LEN {
            return Err(Error::new(ErrorKind::Truncated)
                .with_message(format!(
                    "chunk header needs {CHUNK_HEADER_LEN} bytes, found {got}"
                ))
                .with_index(chunks.len())
                .with_offset(offset));
        }
        let length = u32::from_le_bytes([head[0], head[1], head[2], head[3]]);
        let tag = [head[4], head[5], head[6], head[7]];
        let data_offset = offset + CHUNK_HEADER_LEN as u64;

        let mut data = Vec::new();
        reader
            .by_ref()
            .take(u64::from(length))
            .read_to_end(&mut data)
            .map_err(|err| io_error(err, data_offset))?;
        if data.len() < length as usize {
            return Err(Error::new(ErrorKind::Truncated)
                .with_message(format!(
                    "chunk declares {length} bytes, found {}",
                    data.len()
                ))
                .with_index(chunks.len())
                .with_offset(data_offset));
        }

        tracing::debug!(
            index = chunks.len(),
            length,
            tag = %tag_text(&tag),
            offset,
            "read chunk"
        );
        chunks.push(Chunk { length, tag, data });
        offset = data_offset + u64::from(length);
    }

    Ok(Container {
        version,
        declared_length,
        chunks,
    })
}

/// Renders a chunk as `length=<n>, type=<tag>`.
pub fn format_chunk(chunk: &Chunk) -> String {
    format!("length={}, type={}", chunk.length, tag_text(&chunk.tag))
}

/// Tag bytes as text, with NUL and non-printable bytes escaped.
pub fn tag_text(tag: &[u8; 4]) -> String {
    let quoted = format!("{:?}", tag.as_bstr());
    quoted.trim_matches('"').to_string()
}

fn read_u32<R: Read>(reader: &mut R, offset: u64, field: &str) -> Result<u32, Error> {
    let mut buf = [0u8; 4];
    let got = read_full(reader, &mut buf, offset)?;
    if got < buf.len() {
        return Err(Error::new(ErrorKind::Truncated)
            .with_message(format!("header ends before {field} field"))
            .with_offset(offset));
    }
    Ok(u32::from_le_bytes(buf))
}

// Fills `buf` until it is full or the source is exhausted; returns bytes read.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8], offset: u64) -> Result<usize, Error> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(io_error(err, offset + filled as u64)),
        }
    }
    Ok(filled)
}

fn io_error(err: io::Error, offset: u64) -> Error {
    let kind = if err.kind() == io::ErrorKind::UnexpectedEof {
        ErrorKind::Truncated
    } else {
        ErrorKind::Io
    };
    Error::new(kind)
        .with_message("failed to read container")
        .with_offset(offset)
        .with_source(err)
}
