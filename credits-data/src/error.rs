/// Encoding invariant violations.
///
/// All of these are fatal: a credits table with a broken row would render
/// garbage on the console, so the generator stops instead of writing it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("{op} requires a non-zero length")]
    ZeroLength { op: &'static str },

    #[error("CR_OP_INC_BYTE of {length} tiles from ${start:02X} runs past $FF")]
    RunWraps { start: u8, length: u8 },

    #[error("CR_OP_BYTE_LIST requires at least one byte")]
    EmptyByteList,

    #[error("CR_OP_BYTE_LIST contains the terminator byte ${terminator:02X} at offset {offset}")]
    TerminatorInByteList { terminator: u8, offset: usize },

    #[error("Attribute value {0} does not fit in 2 bits (max 3)")]
    AttributeOutOfRange(u8),

    #[error("CR_OP_ATTR may only terminate a chunk, found one in chunk {chunk:?}")]
    AttributeInBody { chunk: String },

    #[error("Label {label:?} is {len} tiles long, a row holds 32")]
    LabelTooLong { label: String, len: usize },

    #[error("Label {label:?} contains characters outside printable ASCII")]
    LabelNotPrintable { label: String },

    #[error("Row length is not 32 tiles for {label:?}: {leading} + {len} + {trailing}")]
    RowLength {
        label: String,
        leading: i32,
        len: usize,
        trailing: i32,
    },

    #[error("Chunk {chunk:?} spans {units} tiles, greater than 64")]
    ChunkOverflow { chunk: String, units: usize },
}
