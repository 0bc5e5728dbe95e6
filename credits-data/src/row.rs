//! Centered name rows
//!
//! A name row is the label surrounded by blank tiles:
//!
//! ```text
//! half     = len / 2
//! leading  = 16 - half
//! trailing = 32 - (leading + len)
//! ```
//!
//! Pads of width zero are left out, since the runtime cannot draw an empty run.

use crate::{EncodeError, Operation, BLANK_TILE, ROW_UNITS};

/// Horizontal placement of a label within one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub leading: usize,
    pub len: usize,
    pub trailing: usize,
}

impl RowLayout {
    /// Center a label of `len` tiles
    pub fn centered(label: &str) -> Result<Self, EncodeError> {
        let len = label.len();
        if len > ROW_UNITS {
            return Err(EncodeError::LabelTooLong {
                label: label.to_string(),
                len,
            });
        }

        let half = (len / 2) as i32;
        let leading = (ROW_UNITS / 2) as i32 - half;
        let trailing = ROW_UNITS as i32 - (leading + len as i32);

        if leading < 0 || trailing < 0 || leading + len as i32 + trailing != ROW_UNITS as i32 {
            return Err(EncodeError::RowLength {
                label: label.to_string(),
                leading,
                len,
                trailing,
            });
        }

        Ok(Self {
            leading: leading as usize,
            len,
            trailing: trailing as usize,
        })
    }

    pub fn total(&self) -> usize {
        self.leading + self.len + self.trailing
    }
}

/// Encode `label` as one centered row of tiles
///
/// Labels must be non-empty printable ASCII; each character is drawn with the
/// font tile of the same value.
pub fn encode_label_row(label: &str) -> Result<Vec<Operation>, EncodeError> {
    if !label.bytes().all(|b| b.is_ascii_graphic() || b == b' ') {
        return Err(EncodeError::LabelNotPrintable {
            label: label.to_string(),
        });
    }

    let layout = RowLayout::centered(label)?;

    let mut ops = Vec::with_capacity(3);
    if layout.leading > 0 {
        ops.push(Operation::run_length(layout.leading as u8, BLANK_TILE)?);
    }
    ops.push(Operation::byte_list(label.as_bytes())?);
    if layout.trailing > 0 {
        ops.push(Operation::run_length(layout.trailing as u8, BLANK_TILE)?);
    }

    Ok(ops)
}
