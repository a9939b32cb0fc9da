// Core modules implementing container framing, document access, and accessor decoding.
pub mod buffer;
pub mod component;
pub mod container;
pub mod cursor;
pub mod decode;
pub mod document;
pub mod error;
