//! credits-data: tile stream encoding for the credits screen
//!
//! The credits screen is drawn by a small runtime routine that walks a table
//! of chunks. Each chunk describes up to two 32-tile rows with a handful of
//! opcodes, and ends with the attribute (palette) byte for those rows.
//!
//! This crate builds that chunk table: it centers names into rows, validates
//! the tile budget, assembles header/entry/footer chunks in display order and
//! renders the result as assembler data declarations.
//!
//! # Opcodes
//!
//! | Opcode | Value | Payload | Tiles |
//! |--------|-------|---------|-------|
//! | `CR_OP_EOD` | 0 | none | 0 |
//! | `CR_OP_CLEAR_ROW` | 1 | none | 32 (blank tile) |
//! | `CR_OP_INC_BYTE` | 2 | length, start | length |
//! | `CR_OP_RLE` | 3 | length, value | length |
//! | `CR_OP_BYTE_LIST` | 4 | bytes..., `$00` | byte count |
//! | `CR_OP_ATTR` | 5 | attribute | 0 |
//!
//! # Usage
//!
//! ```
//! use credits_data::{assemble, write_asm, Entry, ExcludeList, Tier};
//!
//! let entries = vec![Entry::new("Carol", Tier::Three)];
//! let sequence = assemble(entries, &ExcludeList::default()).unwrap();
//!
//! let mut out = Vec::new();
//! write_asm(&mut out, &sequence).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("CR_OP_ATTR, $0A"));
//! ```

pub mod artwork;
mod asm;
mod assemble;
mod chunk;
mod entry;
mod error;
mod op;
mod row;

pub use asm::{chunk_label, write_asm, INDEX_END_LABEL, INDEX_LABEL};
pub use assemble::{assemble, ChunkSequence};
pub use chunk::{pack_attribute, Chunk};
pub use entry::{dummy_entries, Entry, ExcludeList, Tier};
pub use error::EncodeError;
pub use op::{OpCode, Operation};
pub use row::{encode_label_row, RowLayout};

// =============================================================================
// Constants
// =============================================================================

/// Tiles per display row
pub const ROW_UNITS: usize = 32;

/// Maximum tiles described by one chunk (two rows)
pub const CHUNK_UNITS: usize = ROW_UNITS * 2;

/// Blank tile (ASCII space in the font table)
pub const BLANK_TILE: u8 = 0x20;

/// Ends a `CR_OP_BYTE_LIST` payload; never a valid tile inside the list
pub const BYTE_LIST_TERMINATOR: u8 = 0x00;

/// Largest 2-bit attribute value
pub const MAX_ATTRIBUTE: u8 = 0b11;
