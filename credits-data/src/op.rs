//! Chunk operations
//!
//! Each operation is one opcode byte followed by its payload. The runtime
//! reads operations until it hits `CR_OP_ATTR` (end of chunk) or
//! `CR_OP_EOD` (end of data).

use std::fmt;

use crate::{EncodeError, BYTE_LIST_TERMINATOR, ROW_UNITS};

/// Opcode byte values understood by the credits routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    EndOfData = 0,
    ClearRow = 1,
    IncrementingRun = 2,
    RunLength = 3,
    ByteList = 4,
    Attribute = 5,
}

impl OpCode {
    /// Assembler symbol for this opcode
    pub const fn mnemonic(self) -> &'static str {
        match self {
            OpCode::EndOfData => "CR_OP_EOD",
            OpCode::ClearRow => "CR_OP_CLEAR_ROW",
            OpCode::IncrementingRun => "CR_OP_INC_BYTE",
            OpCode::RunLength => "CR_OP_RLE",
            OpCode::ByteList => "CR_OP_BYTE_LIST",
            OpCode::Attribute => "CR_OP_ATTR",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A single instruction within a chunk.
///
/// Build these through the constructors ([`Operation::run_length`] etc.),
/// which reject payloads the runtime cannot draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// End of the chunk table
    EndOfData,
    /// Fill a full row with the blank tile
    ClearRow,
    /// `length` tiles counting up from `start`
    IncrementingRun { length: u8, start: u8 },
    /// `length` copies of `value`
    RunLength { length: u8, value: u8 },
    /// Literal tiles, terminated by `$00` in the stream
    ByteList(Vec<u8>),
    /// Packed attribute byte, last operation of every chunk
    Attribute(u8),
}

impl Operation {
    pub fn incrementing_run(length: u8, start: u8) -> Result<Self, EncodeError> {
        let op = Operation::IncrementingRun { length, start };
        op.validate()?;
        Ok(op)
    }

    pub fn run_length(length: u8, value: u8) -> Result<Self, EncodeError> {
        let op = Operation::RunLength { length, value };
        op.validate()?;
        Ok(op)
    }

    pub fn byte_list(bytes: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        let op = Operation::ByteList(bytes.into());
        op.validate()?;
        Ok(op)
    }

    /// Attribute operation carrying an already packed byte
    pub fn attribute(packed: u8) -> Self {
        Operation::Attribute(packed)
    }

    pub fn opcode(&self) -> OpCode {
        match self {
            Operation::EndOfData => OpCode::EndOfData,
            Operation::ClearRow => OpCode::ClearRow,
            Operation::IncrementingRun { .. } => OpCode::IncrementingRun,
            Operation::RunLength { .. } => OpCode::RunLength,
            Operation::ByteList(_) => OpCode::ByteList,
            Operation::Attribute(_) => OpCode::Attribute,
        }
    }

    /// Number of tiles this operation draws
    pub fn units(&self) -> usize {
        match self {
            Operation::EndOfData | Operation::Attribute(_) => 0,
            Operation::ClearRow => ROW_UNITS,
            Operation::IncrementingRun { length, .. } | Operation::RunLength { length, .. } => {
                *length as usize
            }
            Operation::ByteList(bytes) => bytes.len(),
        }
    }

    /// Size of the encoded operation in the data stream, opcode included
    pub fn encoded_len(&self) -> usize {
        match self {
            Operation::EndOfData | Operation::ClearRow => 1,
            Operation::IncrementingRun { .. } | Operation::RunLength { .. } => 3,
            // opcode + bytes + terminator
            Operation::ByteList(bytes) => bytes.len() + 2,
            Operation::Attribute(_) => 2,
        }
    }

    /// Check the payload against the encoding rules
    pub fn validate(&self) -> Result<(), EncodeError> {
        match self {
            Operation::IncrementingRun { length: 0, .. } | Operation::RunLength { length: 0, .. } => {
                Err(EncodeError::ZeroLength {
                    op: self.opcode().mnemonic(),
                })
            }
            Operation::IncrementingRun { length, start }
                if *start as usize + *length as usize - 1 > u8::MAX as usize =>
            {
                Err(EncodeError::RunWraps {
                    start: *start,
                    length: *length,
                })
            }
            Operation::ByteList(bytes) if bytes.is_empty() => Err(EncodeError::EmptyByteList),
            Operation::ByteList(bytes) => {
                match bytes.iter().position(|&b| b == BYTE_LIST_TERMINATOR) {
                    Some(offset) => Err(EncodeError::TerminatorInByteList {
                        terminator: BYTE_LIST_TERMINATOR,
                        offset,
                    }),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }
}

/// Renders the operation as a `.byte` directive
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode();
        match self {
            Operation::EndOfData | Operation::ClearRow => write!(f, ".byte {op}"),
            Operation::IncrementingRun { length, start } => {
                write!(f, ".byte {op}, {length}, ${start:02X}")
            }
            Operation::RunLength { length, value } => {
                write!(f, ".byte {op}, {length}, ${value:02X}")
            }
            Operation::ByteList(bytes) => {
                write!(f, ".byte {op}")?;
                for b in bytes {
                    write!(f, ", ${b:02X}")?;
                }
                write!(f, ", ${BYTE_LIST_TERMINATOR:02X}")
            }
            Operation::Attribute(packed) => write!(f, ".byte {op}, ${packed:02X}"),
        }
    }
}
