// Accessor -> buffer view -> raw buffer resolution and typed decode.
use crate::core::buffer;
use crate::core::component::{self, decode_components};
use crate::core::container::Container;
use crate::core::document::{self, accessor, buffer_view};
use crate::core::error::{Error, ErrorKind};

/// Decodes accessor `accessor_index` into a flat sequence of numbers.
///
/// Reads `bufferView.byteLength` bytes starting at
/// `bufferView.byteOffset + accessor.byteOffset` in the referenced raw buffer.
/// Unsupported component types yield an empty sequence.
pub fn decode(container: &Container, accessor_index: usize) -> Result<Vec<f64>, Error> {
    let doc = document::document(container)?.ok_or_else(|| {
        Error::new(ErrorKind::MissingDocument)
            .with_message("container has no JSON chunk")
            .with_index(accessor_index)
    })?;
    let acc = accessor(&doc, accessor_index)?;
    let view = buffer_view(&doc, acc.buffer_view)?;
    let mut cursor = buffer::cursor(container, view.buffer)?;

    let offset = u64::from(view.byte_offset) + u64::from(acc.byte_offset);
    let start = usize::try_from(offset).map_err(|_| {
        Error::new(ErrorKind::Range)
            .with_message("accessor offset does not fit in memory")
            .with_offset(offset)
    })?;
    tracing::debug!(
        accessor = accessor_index,
        buffer_view = acc.buffer_view,
        buffer = view.buffer,
        offset,
        length = view.byte_length,
        component_type = acc.component_type,
        "resolved accessor"
    );
    cursor.seek(start);
    let bytes = cursor
        .read(view.byte_length as usize)
        .map_err(|err| err.with_index(accessor_index))?;

    match component::component_format(acc.component_type) {
        Some(format) => Ok(decode_components(format, bytes)),
        None => {
            tracing::warn!(
                accessor = accessor_index,
                component_type = acc.component_type,
                "unsupported componentType; returning no values"
            );
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::decode;
    use crate::core::container::load_bytes;
    use crate::core::error::ErrorKind;
    use serde_json::{Value, json};

    fn container_bytes(doc: Option<&Value>, bins: &[&[u8]]) -> Vec<u8> {
        let mut out = b"glTF".to_vec();
        out.extend_from_slice(&2u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        if let Some(doc) = doc {
            let mut text = serde_json::to_vec(doc).expect("json");
            while text.len() % 4 != 0 {
                text.push(b' ');
            }
            out.extend_from_slice(&(text.len() as u32).to_le_bytes());
            out.extend_from_slice(b"JSON");
            out.extend_from_slice(&text);
        }
        for bin in bins {
            out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
            out.extend_from_slice(b"BIN\0");
            out.extend_from_slice(bin);
        }
        out
    }

    fn single_view(component_type: u32, byte_length: u32) -> Value {
        json!({
            "accessors": [{"bufferView": 0, "componentType": component_type}],
            "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": byte_length}]
        })
    }

    #[test]
    fn decodes_float() {
        let bytes = container_bytes(Some(&single_view(5126, 4)), &[&[0x00, 0x00, 0x80, 0x3f]]);
        let container = load_bytes(&bytes).expect("load");
        assert_eq!(decode(&container, 0).expect("decode"), vec![1.0]);
    }

    #[test]
    fn decodes_unsigned_short() {
        let bytes = container_bytes(Some(&single_view(5123, 4)), &[&[1, 0, 2, 0]]);
        let container = load_bytes(&bytes).expect("load");
        assert_eq!(decode(&container, 0).expect("decode"), vec![1.0, 2.0]);
    }

    #[test]
    fn decodes_unsigned_int() {
        let bytes = container_bytes(Some(&single_view(5125, 4)), &[&[1, 0, 0, 0]]);
        let container = load_bytes(&bytes).expect("load");
        assert_eq!(decode(&container, 0).expect("decode"), vec![1.0]);
    }

    #[test]
    fn unsupported_component_type_is_empty() {
        let bytes = container_bytes(Some(&single_view(5121, 4)), &[&[1, 2, 3, 4]]);
        let container = load_bytes(&bytes).expect("load");
        assert!(decode(&container, 0).expect("decode").is_empty());
    }

    #[test]
    fn offsets_are_summed() {
        let doc = json!({
            "accessors": [{"bufferView": 0, "byteOffset": 2, "componentType": 5123}],
            "bufferViews": [{"buffer": 0, "byteOffset": 4, "byteLength": 4}]
        });
        let bytes = container_bytes(Some(&doc), &[&[0, 0, 0, 0, 9, 9, 5, 0, 6, 0, 0, 0]]);
        let container = load_bytes(&bytes).expect("load");
        assert_eq!(decode(&container, 0).expect("decode"), vec![5.0, 6.0]);
    }

    #[test]
    fn buffer_index_selects_later_bin_chunk() {
        let doc = json!({
            "accessors": [{"bufferView": 0, "componentType": 5125}],
            "bufferViews": [{"buffer": 1, "byteLength": 4}]
        });
        let bytes = container_bytes(Some(&doc), &[&[1, 0, 0, 0], &[2, 0, 0, 0]]);
        let container = load_bytes(&bytes).expect("load");
        assert_eq!(decode(&container, 0).expect("decode"), vec![2.0]);
    }

    #[test]
    fn missing_document_is_reported() {
        let bytes = container_bytes(None, &[&[0; 4]]);
        let container = load_bytes(&bytes).expect("load");
        let err = decode(&container, 0).expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::MissingDocument);
    }

    #[test]
    fn index_errors_at_each_level() {
        let doc = json!({
            "accessors": [
                {"bufferView": 0, "componentType": 5126},
                {"bufferView": 5, "componentType": 5126},
                {"bufferView": 1, "componentType": 5126}
            ],
            "bufferViews": [
                {"buffer": 0, "byteLength": 4},
                {"buffer": 3, "byteLength": 4}
            ]
        });
        let bytes = container_bytes(Some(&doc), &[&[0; 4]]);
        let container = load_bytes(&bytes).expect("load");
        for index in [1, 2, 3] {
            let err = decode(&container, index).expect_err("should fail");
            assert_eq!(err.kind(), ErrorKind::Index, "accessor {index}");
        }
    }

    #[test]
    fn view_past_buffer_end_is_range_error() {
        let bytes = container_bytes(Some(&single_view(5126, 8)), &[&[0; 4]]);
        let container = load_bytes(&bytes).expect("load");
        let err = decode(&container, 0).expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}
