//! Opcode vocabulary of the name-script grammar.
//!
//! The name opcodes reuse the small-integer push opcodes of the base script
//! language, so a name prefix is harmless to the script interpreter: every
//! pushed argument is dropped again by the terminators that follow it.

use bitcoin::{
    Opcode,
    opcodes::all::{OP_2DROP, OP_DROP, OP_NOP, OP_PUSHNUM_1, OP_PUSHNUM_2, OP_PUSHNUM_3},
    script::Instruction,
};

pub use bitcoin::constants::MAX_SCRIPT_ELEMENT_SIZE;

/// Opcode marking a `NAME_NEW` operation (`OP_1`).
pub const OP_NAME_NEW: Opcode = OP_PUSHNUM_1;

/// Opcode marking a `NAME_FIRSTUPDATE` operation (`OP_2`).
pub const OP_NAME_FIRSTUPDATE: Opcode = OP_PUSHNUM_2;

/// Opcode marking a `NAME_UPDATE` operation (`OP_3`).
pub const OP_NAME_UPDATE: Opcode = OP_PUSHNUM_3;

/// Opcodes that close a run of name arguments.
pub const TERMINATORS: [Opcode; 3] = [OP_DROP, OP_2DROP, OP_NOP];

/// A single script instruction, classified the way the name grammar sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOp<'a> {
    /// Any push-family opcode (`OP_0` through `OP_PUSHDATA4`) with its payload.
    Push(&'a [u8]),

    /// One of [`TERMINATORS`].
    Terminator(Opcode),

    /// Every other opcode, including the name opcodes themselves.
    Other(Opcode),
}

impl ScriptOp<'_> {
    /// Returns the raw opcode if this is not a push.
    pub fn opcode(&self) -> Option<Opcode> {
        match self {
            Self::Push(_) => None,
            Self::Terminator(op) | Self::Other(op) => Some(*op),
        }
    }

    /// Returns true if this is exactly the given non-push opcode.
    pub fn is_op(&self, op: Opcode) -> bool {
        self.opcode() == Some(op)
    }
}

impl<'a> From<Instruction<'a>> for ScriptOp<'a> {
    fn from(ins: Instruction<'a>) -> Self {
        match ins {
            // The script layer decodes exactly 0x00..=OP_PUSHDATA4 as pushes.
            Instruction::PushBytes(data) => Self::Push(data.as_bytes()),
            Instruction::Op(op) if TERMINATORS.contains(&op) => Self::Terminator(op),
            Instruction::Op(op) => Self::Other(op),
        }
    }
}
