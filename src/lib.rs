//! Purpose: Library crate for reading binary glTF (GLB) containers.
//! Exports: `api` (stable surface), `core` (framing, document, buffers, decoding, errors).
//! Role: Backs the `glbkit` binary and integration tests.
//! Invariants: All work after loading is in-memory and never mutates the `Container`.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
mod json;
pub mod source_paths;
