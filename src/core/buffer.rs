// Raw binary chunk lookup by ordinal position among `BIN\0` chunks.
use crate::core::container::{ChunkType, Container};
use crate::core::cursor::ByteCursor;
use crate::core::error::{Error, ErrorKind};

/// Payloads of every `BIN\0` chunk, in file order.
pub fn raw_buffers(container: &Container) -> Vec<&[u8]> {
    container
        .chunks()
        .iter()
        .filter(|chunk| chunk.chunk_type() == ChunkType::Bin)
        .map(|chunk| chunk.data.as_slice())
        .collect()
}

pub fn cursor(container: &Container, index: usize) -> Result<ByteCursor<'_>, Error> {
    let buffers = raw_buffers(container);
    match buffers.get(index) {
        Some(&bytes) => Ok(ByteCursor::new(bytes)),
        None => Err(Error::new(ErrorKind::Index)
            .with_message(format!(
                "raw buffer {index} out of range ({} present)",
                buffers.len()
            ))
            .with_index(index)),
    }
}
