//! Purpose: JSON serializer for container header and chunk metadata.
//! Exports: `container_info_json`.
//! Role: Keep the `info` output shape in one place, apart from the data types.
//! Invariants: Stable key names: `version`, `length`, `chunks[].{index,length,type}`.

use glbkit::api::{Container, tag_text};
use serde_json::{Map, Value, json};

pub(crate) fn container_info_json(container: &Container) -> Value {
    let chunks = container
        .chunks()
        .iter()
        .enumerate()
        .map(|(index, chunk)| {
            json!({
                "index": index,
                "length": chunk.length,
                "type": tag_text(&chunk.tag),
            })
        })
        .collect::<Vec<_>>();

    let mut map = Map::new();
    map.insert("version".to_string(), json!(container.version()));
    map.insert("length".to_string(), json!(container.declared_length()));
    map.insert("chunks".to_string(), Value::Array(chunks));
    Value::Object(map)
}
