//! Purpose: Map accessor `componentType` codes to element width and decoder.
//! Exports: `ComponentFormat`, `COMPONENT_FORMATS`, `component_format`, `decode_components`.
//! Role: Table consulted by the accessor decoder; adding a type is one table entry.
//! Invariants: All elements are little-endian; decoded values are widened losslessly to f64.
//! Invariants: Codes missing from the table are unsupported, not errors.

pub const FLOAT: u32 = 5126;
pub const UNSIGNED_SHORT: u32 = 5123;
pub const UNSIGNED_INT: u32 = 5125;

#[derive(Clone, Copy, Debug)]
pub struct ComponentFormat {
    pub code: u32,
    pub name: &'static str,
    pub width: usize,
    decode: fn(&[u8]) -> f64,
}

pub const COMPONENT_FORMATS: &[ComponentFormat] = &[
    ComponentFormat {
        code: FLOAT,
        name: "FLOAT",
        width: 4,
        decode: decode_f32,
    },
    ComponentFormat {
        code: UNSIGNED_SHORT,
        name: "UNSIGNED_SHORT",
        width: 2,
        decode: decode_u16,
    },
    ComponentFormat {
        code: UNSIGNED_INT,
        name: "UNSIGNED_INT",
        width: 4,
        decode: decode_u32,
    },
];

pub fn component_format(code: u32) -> Option<&'static ComponentFormat> {
    COMPONENT_FORMATS.iter().find(|format| format.code == code)
}

/// Decodes whole elements; a trailing partial element is dropped.
pub fn decode_components(format: &ComponentFormat, bytes: &[u8]) -> Vec<f64> {
    bytes
        .chunks_exact(format.width)
        .map(format.decode)
        .collect()
}

fn decode_f32(bytes: &[u8]) -> f64 {
    f64::from(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn decode_u16(bytes: &[u8]) -> f64 {
    f64::from(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn decode_u32(bytes: &[u8]) -> f64 {
    f64::from(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
