//! Purpose: Expose the JSON document chunk as a parsed value plus typed accessor records.
//! Exports: `document`, `Accessor`, `BufferView`, `accessor`, `buffer_view`.
//! Role: Second stage of the read path; feeds the accessor decoder.
//! Invariants: Only the first chunk tagged `JSON` is considered; absence is `Ok(None)`.
//! Invariants: Trailing padding (whitespace and NUL) is trimmed before parsing.
//! Invariants: Parsing is recomputed on every call and yields equal values each time.

use serde::Deserialize;
use serde_json::Value;

use crate::core::container::{ChunkType, Container};
use crate::core::error::{Error, ErrorKind};
use crate::json::parse;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    pub buffer_view: usize,
    #[serde(default)]
    pub byte_offset: u32,
    pub component_type: u32,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    pub buffer: usize,
    #[serde(default)]
    pub byte_offset: u32,
    pub byte_length: u32,
}

pub fn document(container: &Container) -> Result<Option<Value>, Error> {
    let Some((index, chunk)) = container
        .chunks()
        .iter()
        .enumerate()
        .find(|(_, chunk)| chunk.chunk_type() == ChunkType::Json)
    else {
        return Ok(None);
    };

    let text = std::str::from_utf8(&chunk.data).map_err(|err| {
        Error::new(ErrorKind::DocumentParse)
            .with_message("document chunk is not valid utf-8")
            .with_index(index)
            .with_source(err)
    })?;
    let text = text.trim_end_matches(|c: char| c.is_whitespace() || c == '\0');
    let value = parse::from_str::<Value>(text).map_err(|err| {
        Error::new(ErrorKind::DocumentParse)
            .with_message(format!(
                "document chunk is not valid json (line {}, column {})",
                err.line(),
                err.column()
            ))
            .with_index(index)
            .with_source(err)
    })?;
    Ok(Some(value))
}

pub fn accessor(document: &Value, index: usize) -> Result<Accessor, Error> {
    record(document, "accessors", index)
}

pub fn buffer_view(document: &Value, index: usize) -> Result<BufferView, Error> {
    record(document, "bufferViews", index)
}

fn record<T: serde::de::DeserializeOwned>(
    document: &Value,
    list: &str,
    index: usize,
) -> Result<T, Error> {
    let len = document
        .get(list)
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    let Some(value) = document.get(list).and_then(|items| items.get(index)) else {
        return Err(Error::new(ErrorKind::Index)
            .with_message(format!("{list}[{index}] out of range (len {len})"))
            .with_index(index));
    };
    parse::from_value(value).map_err(|err| {
        Error::new(ErrorKind::DocumentParse)
            .with_message(format!("invalid {list}[{index}] record"))
            .with_index(index)
            .with_source(err)
    })
}
