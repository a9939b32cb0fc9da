//! Purpose: Provide the internal JSON decode entrypoints.
//! Exports: `from_str`, `from_value`.
//! Role: Parser boundary that centralizes serde_json usage for document chunks.
//! Invariants: Document text and typed records are decoded only through this module.
//! Notes: Error mapping is done by callsites so domain context (chunk, index) stays explicit.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub(crate) fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(value)
}
