//! Chunks: up to two rows of operations plus an attribute value

use crate::{encode_label_row, EncodeError, Entry, Operation, CHUNK_UNITS, MAX_ATTRIBUTE};

/// Pack a 2-bit attribute value into the attribute byte.
///
/// The value is duplicated into bits 0-1 and 2-3, covering both attribute
/// quadrants the chunk's rows fall in.
pub fn pack_attribute(value: u8) -> Result<u8, EncodeError> {
    if value > MAX_ATTRIBUTE {
        return Err(EncodeError::AttributeOutOfRange(value));
    }
    Ok(value << 2 | value)
}

/// An immutable, validated chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    label: Option<String>,
    ops: Vec<Operation>,
    attribute: u8,
    packed: u8,
}

impl Chunk {
    /// Validate and build a chunk.
    ///
    /// Fails if any operation is malformed, if an attribute operation appears
    /// in the body, if the attribute value exceeds 2 bits, or if the body
    /// draws more than two rows of tiles.
    pub fn new(
        label: Option<String>,
        ops: Vec<Operation>,
        attribute: u8,
    ) -> Result<Self, EncodeError> {
        let name = || label.clone().unwrap_or_default();

        for op in &ops {
            op.validate()?;
            if matches!(op, Operation::Attribute(_)) {
                return Err(EncodeError::AttributeInBody { chunk: name() });
            }
        }

        let packed = pack_attribute(attribute)?;

        let units: usize = ops.iter().map(Operation::units).sum();
        if units > CHUNK_UNITS {
            return Err(EncodeError::ChunkOverflow {
                chunk: name(),
                units,
            });
        }

        Ok(Self {
            label,
            ops,
            attribute,
            packed,
        })
    }

    /// Fixed artwork chunk (attribute 0)
    pub fn decorative(label: &str, ops: Vec<Operation>) -> Result<Self, EncodeError> {
        Self::new(Some(label.to_string()), ops, 0)
    }

    /// Blank spacer row followed by the entry's centered name
    pub fn entry(entry: &Entry) -> Result<Self, EncodeError> {
        let mut ops = vec![Operation::ClearRow];
        ops.extend(encode_label_row(&entry.name)?);
        Self::new(Some(entry.to_string()), ops, entry.tier.attribute())
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    /// 2-bit attribute value
    pub fn attribute(&self) -> u8 {
        self.attribute
    }

    /// Attribute byte emitted by `CR_OP_ATTR`
    pub fn packed_attribute(&self) -> u8 {
        self.packed
    }

    /// Tiles drawn by the chunk body
    pub fn units(&self) -> usize {
        self.ops.iter().map(Operation::units).sum()
    }

    /// Encoded size in bytes, including the trailing attribute operation
    pub fn encoded_len(&self) -> usize {
        self.ops.iter().map(Operation::encoded_len).sum::<usize>()
            + Operation::attribute(self.packed_attribute()).encoded_len()
    }
}
