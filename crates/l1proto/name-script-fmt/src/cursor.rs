//! Forward-only cursor over a script's instructions.

use bitcoin::{Script, script::Instructions};

use crate::opcodes::ScriptOp;

/// Reads classified instructions off a script, with explicit checkpoints.
///
/// Instructions are decoded without minimal-push enforcement. A push whose
/// declared length runs past the end of the script ends the stream, exactly
/// like running out of bytes does.
#[derive(Debug, Clone)]
pub(crate) struct ScriptCursor<'a> {
    instrs: Instructions<'a>,
}

/// Saved cursor position, see [`ScriptCursor::checkpoint`].
#[derive(Debug, Clone)]
pub(crate) struct Checkpoint<'a>(Instructions<'a>);

impl<'a> ScriptCursor<'a> {
    pub(crate) fn new(script: &'a Script) -> Self {
        Self {
            instrs: script.instructions(),
        }
    }

    /// Reads the next instruction, or `None` at the end of the stream.
    pub(crate) fn next_op(&mut self) -> Option<ScriptOp<'a>> {
        self.instrs.next()?.ok().map(ScriptOp::from)
    }

    /// Records the current position.
    pub(crate) fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint(self.instrs.clone())
    }

    /// Moves back (or forward) to a recorded position.
    pub(crate) fn restore(&mut self, cp: Checkpoint<'a>) {
        self.instrs = cp.0;
    }

    /// Everything not consumed yet.
    pub(crate) fn remaining(&self) -> &'a Script {
        self.instrs.as_script()
    }
}

#[cfg(test)]
mod tests {
    use bitcoin::{
        ScriptBuf,
        opcodes::all::{OP_2DROP, OP_CHECKSIG, OP_DROP, OP_PUSHDATA1},
        script::PushBytesBuf,
    };

    use super::*;

    #[test]
    fn test_checkpoint_restore() {
        let script = ScriptBuf::builder()
            .push_slice(PushBytesBuf::from(&[1, 2, 3]))
            .push_opcode(OP_DROP)
            .push_opcode(OP_CHECKSIG)
            .into_script();

        let mut cursor = ScriptCursor::new(&script);
        assert_eq!(cursor.next_op(), Some(ScriptOp::Push(&[1, 2, 3])));

        let cp = cursor.checkpoint();
        assert_eq!(cursor.remaining().as_bytes(), &script.as_bytes()[4..]);
        assert_eq!(cursor.next_op(), Some(ScriptOp::Terminator(OP_DROP)));
        assert_eq!(cursor.next_op(), Some(ScriptOp::Other(OP_CHECKSIG)));
        assert_eq!(cursor.next_op(), None);
        assert!(cursor.remaining().is_empty());

        cursor.restore(cp);
        assert_eq!(cursor.remaining().as_bytes(), &[OP_DROP.to_u8(), OP_CHECKSIG.to_u8()]);
        assert_eq!(cursor.next_op(), Some(ScriptOp::Terminator(OP_DROP)));
    }

    #[test]
    fn test_truncated_push_ends_stream() {
        // OP_2DROP, then OP_PUSHDATA1 declaring 5 bytes with only 2 present.
        let script = ScriptBuf::from_bytes(vec![OP_2DROP.to_u8(), OP_PUSHDATA1.to_u8(), 5, 1, 2]);

        let mut cursor = ScriptCursor::new(&script);
        assert_eq!(cursor.next_op(), Some(ScriptOp::Terminator(OP_2DROP)));
        assert_eq!(cursor.next_op(), None);
        assert_eq!(cursor.next_op(), None);
    }
}
