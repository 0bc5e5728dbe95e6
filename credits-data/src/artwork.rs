//! Fixed header and footer chunks
//!
//! Tile ids refer to the credits CHR bank: `$02-$07` hold the site caption,
//! `$10-$18` the 3x3 channel logo, `$80-$8E`/`$90-$9E` the two halves of the
//! title lettering. Everything else is drawn with font tiles.

use crate::{Chunk, EncodeError, Entry, Operation, Tier, BLANK_TILE};

/// Closing message shown after the entries
pub const THANK_YOU: &str = "Thank you!!";

fn blank_chunk(label: &str) -> Result<Chunk, EncodeError> {
    Chunk::decorative(label, vec![Operation::ClearRow, Operation::ClearRow])
}

/// Logo, caption and title lettering, preceded by a blank row
pub fn header_chunks() -> Result<Vec<Chunk>, EncodeError> {
    let pad = |len| Operation::run_length(len, BLANK_TILE);
    let inc = Operation::incrementing_run;

    Ok(vec![
        blank_chunk("Blank row before header")?,
        Chunk::decorative(
            "Top half of header",
            vec![
                pad(7)?,
                // logo row one
                inc(3, 0x10)?,
                // site caption
                inc(6, 0x02)?,
                // wraps into the next row
                pad(23)?,
                // logo row two
                inc(3, 0x13)?,
                // title, top half
                inc(15, 0x80)?,
                pad(7)?,
            ],
        )?,
        Chunk::decorative(
            "Bottom half of header",
            vec![
                pad(7)?,
                // logo row three
                inc(3, 0x16)?,
                // title, bottom half
                inc(15, 0x90)?,
                pad(7)?,
                Operation::ClearRow,
            ],
        )?,
    ])
}

/// Closing message with blank rows around it
pub fn footer_chunks() -> Result<Vec<Chunk>, EncodeError> {
    Ok(vec![
        blank_chunk("Bottom padding for attribute")?,
        Chunk::entry(&Entry::new(THANK_YOU, Tier::One))?,
        blank_chunk("Bottom padding for attribute")?,
        blank_chunk("Bottom padding for attribute")?,
    ])
}
