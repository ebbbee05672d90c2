use bitcoin::{Script, Transaction, opcodes::all::OP_2DROP};
use tracing::*;

use crate::{
    cursor::ScriptCursor,
    errors::{NameScriptError, NameScriptResult},
    opcodes::ScriptOp,
    script::NameScript,
    types::NameOp,
};

/// Parses a script as a name operation.
///
/// The grammar is:
/// ```text
/// <name_op> <arg>... <terminator>+ [<name_op> <chunk> OP_2DROP]... <address>
/// ```
/// where the number of arguments must match the arity of `<name_op>`, and the
/// optional extensions (update kinds only) are appended to the value.
///
/// # Errors
///
/// Returns [`NameScriptError::NotNameOp`] for every script that is not a
/// well-formed name operation, including empty and truncated scripts.
pub fn parse_name_script(script: &Script) -> NameScriptResult<NameScript> {
    let mut cursor = ScriptCursor::new(script);

    let lead = cursor.next_op().ok_or(NameScriptError::NotNameOp)?;
    let mut args = read_args(&mut cursor)?;
    skip_terminators(&mut cursor);

    // Only now is the leading opcode checked, after the argument run.
    let Some(op) = lead.opcode().and_then(NameOp::from_opcode) else {
        trace!(?lead, "leading opcode is not a name op");
        return Err(NameScriptError::NotNameOp);
    };

    if args.len() != op.arity() {
        trace!(%op, nargs = args.len(), "wrong name op arity");
        return Err(NameScriptError::NotNameOp);
    }

    if op.is_any_update() {
        let mut value = args.pop().unwrap_or_default();
        let mut chunks = 0;
        while let Some(chunk) = read_extension(&mut cursor, op) {
            value.extend_from_slice(chunk);
            chunks += 1;
        }
        args.push(value);

        if chunks > 0 {
            trace!(%op, chunks, "spliced value extensions");
        }
    }

    Ok(NameScript::new(op, args, cursor.remaining().to_owned()))
}

/// Returns true if the script parses as a name operation.
pub fn is_name_script(script: &Script) -> bool {
    parse_name_script(script).is_ok()
}

/// Iterates over the outputs of a transaction that carry name operations,
/// together with their output index.
pub fn find_name_outputs(tx: &Transaction) -> impl Iterator<Item = (usize, NameScript)> + '_ {
    tx.output
        .iter()
        .enumerate()
        .filter_map(|(vout, out)| Some((vout, parse_name_script(&out.script_pubkey).ok()?)))
}

/// Finds the first output of a transaction that carries a name operation.
pub fn find_name_output(tx: &Transaction) -> Option<(usize, NameScript)> {
    find_name_outputs(tx).next()
}

/// Reads pushes up to and including the first terminator.
fn read_args(cursor: &mut ScriptCursor<'_>) -> NameScriptResult<Vec<Vec<u8>>> {
    let mut args = Vec::new();
    loop {
        match cursor.next_op() {
            Some(ScriptOp::Terminator(_)) => return Ok(args),
            Some(ScriptOp::Push(data)) => args.push(data.to_vec()),
            Some(ScriptOp::Other(op)) => {
                trace!(?op, "unexpected opcode in name args");
                return Err(NameScriptError::NotNameOp);
            }
            None => {
                trace!("script ended before name args were terminated");
                return Err(NameScriptError::NotNameOp);
            }
        }
    }
}

/// Consumes any further terminators, leaving the cursor just past the last.
fn skip_terminators(cursor: &mut ScriptCursor<'_>) {
    let mut boundary = cursor.checkpoint();
    while let Some(ScriptOp::Terminator(_)) = cursor.next_op() {
        boundary = cursor.checkpoint();
    }
    cursor.restore(boundary);
}

/// Reads one `<op> <chunk> OP_2DROP` extension.
///
/// Anything else, including a partial extension, leaves the cursor untouched
/// and ends the splicing.
fn read_extension<'a>(cursor: &mut ScriptCursor<'a>, op: NameOp) -> Option<&'a [u8]> {
    let mut ahead = cursor.clone();

    if !ahead.next_op()?.is_op(op.opcode()) {
        return None;
    }

    let ScriptOp::Push(chunk) = ahead.next_op()? else {
        return None;
    };

    if !ahead.next_op()?.is_op(OP_2DROP) {
        return None;
    }

    *cursor = ahead;
    Some(chunk)
}
