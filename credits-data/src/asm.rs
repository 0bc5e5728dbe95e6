//! Assembler output
//!
//! # Layout
//! ```text
//! credits_data_chunks:
//!     .word credits_data_chunk_00
//!     .word credits_data_chunk_01
//! credits_data_chunks_end:
//!
//! ; Blank row before header
//! credits_data_chunk_00:
//!     .byte CR_OP_CLEAR_ROW
//!     .byte CR_OP_CLEAR_ROW
//!     .byte CR_OP_ATTR, $00
//!
//! ```

use std::io::{self, Write};

use crate::{ChunkSequence, Operation};

/// Label of the chunk pointer table
pub const INDEX_LABEL: &str = "credits_data_chunks";

/// Label following the last pointer, lets the runtime compute the table size
pub const INDEX_END_LABEL: &str = "credits_data_chunks_end";

const INDENT: &str = "    ";

/// Assembler label of the chunk at `index`
pub fn chunk_label(index: usize) -> String {
    format!("credits_data_chunk_{index:02}")
}

/// Write the pointer table followed by every chunk body
pub fn write_asm<W: Write>(w: &mut W, sequence: &ChunkSequence) -> io::Result<()> {
    writeln!(w, "{INDEX_LABEL}:")?;
    for i in 0..sequence.len() {
        writeln!(w, "{INDENT}.word {}", chunk_label(i))?;
    }
    writeln!(w, "{INDEX_END_LABEL}:")?;
    writeln!(w)?;

    for (i, chunk) in sequence.chunks().iter().enumerate() {
        if let Some(label) = chunk.label() {
            writeln!(w, "; {label}")?;
        }
        writeln!(w, "{}:", chunk_label(i))?;
        for op in chunk.ops() {
            writeln!(w, "{INDENT}{op}")?;
        }
        writeln!(w, "{INDENT}{}", Operation::attribute(chunk.packed_attribute()))?;
        writeln!(w)?;
    }

    Ok(())
}
