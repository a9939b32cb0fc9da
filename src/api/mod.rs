//! Purpose: Define the public Rust API boundary for glbkit.
//! Exports: Container loading, document access, raw buffers, accessor decoding, errors.
//! Role: Additive-only surface used by the CLI and by library callers.
//! Invariants: Callers never need internal module paths to read a container.

pub use crate::core::buffer::{cursor, raw_buffers};
pub use crate::core::component::{COMPONENT_FORMATS, ComponentFormat, component_format};
pub use crate::core::container::{
    BIN_CHUNK_TAG, Chunk, ChunkType, Container, GLB_MAGIC, JSON_CHUNK_TAG, format_chunk, load,
    load_bytes, open, tag_text,
};
pub use crate::core::cursor::ByteCursor;
pub use crate::core::decode::decode;
pub use crate::core::document::{Accessor, BufferView, accessor, buffer_view, document};
#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::source_paths::{GLB_PATH_ENV, resolve_source_path, source_path_from_env};
