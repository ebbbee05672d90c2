use bitcoin::{
    Script, ScriptBuf,
    hashes::{Hash, HashEngine, hash160},
    opcodes::all::{OP_2DROP, OP_DROP},
    script::{self, PushBytes},
};
use tracing::*;

use crate::{
    errors::NameBuildResult,
    opcodes::{MAX_SCRIPT_ELEMENT_SIZE, OP_NAME_FIRSTUPDATE, OP_NAME_NEW, OP_NAME_UPDATE},
    types::NameOp,
};

/// Builds a `NAME_NEW` script committing to `hash`.
///
/// ```text
/// NAME_NEW <hash> OP_2DROP <address>
/// ```
pub fn build_name_new(address: &Script, hash: &[u8]) -> NameBuildResult<ScriptBuf> {
    let builder = script::Builder::new()
        .push_opcode(OP_NAME_NEW)
        .push_slice(push_bytes(hash)?)
        .push_opcode(OP_2DROP);

    Ok(append_address(builder, address))
}

/// Builds a `NAME_FIRSTUPDATE` script registering `name` with `value`.
///
/// ```text
/// NAME_FIRSTUPDATE <name> <rand> <value_0> OP_2DROP OP_2DROP
/// [NAME_FIRSTUPDATE <value_i> OP_2DROP]...
/// <address>
/// ```
///
/// Values longer than [`MAX_SCRIPT_ELEMENT_SIZE`] are split into chunks of
/// that size, the first embedded in the base operation and every other one in
/// its own extension.
pub fn build_name_firstupdate(
    address: &Script,
    name: &[u8],
    value: &[u8],
    rand: &[u8],
) -> NameBuildResult<ScriptBuf> {
    let (head, tail) = split_value(value);

    let builder = script::Builder::new()
        .push_opcode(OP_NAME_FIRSTUPDATE)
        .push_slice(push_bytes(name)?)
        .push_slice(push_bytes(rand)?)
        .push_slice(push_bytes(head)?)
        .push_opcode(OP_2DROP)
        .push_opcode(OP_2DROP);

    let builder = push_value_extensions(builder, NameOp::FirstUpdate, tail)?;
    Ok(append_address(builder, address))
}

/// Builds a `NAME_UPDATE` script setting the value of `name`.
///
/// ```text
/// NAME_UPDATE <name> <value_0> OP_2DROP OP_DROP
/// [NAME_UPDATE <value_i> OP_2DROP]...
/// <address>
/// ```
///
/// Long values are chunked the same way as in [`build_name_firstupdate`].
pub fn build_name_update(
    address: &Script,
    name: &[u8],
    value: &[u8],
) -> NameBuildResult<ScriptBuf> {
    let (head, tail) = split_value(value);

    let builder = script::Builder::new()
        .push_opcode(OP_NAME_UPDATE)
        .push_slice(push_bytes(name)?)
        .push_slice(push_bytes(head)?)
        .push_opcode(OP_2DROP)
        .push_opcode(OP_DROP);

    let builder = push_value_extensions(builder, NameOp::Update, tail)?;
    Ok(append_address(builder, address))
}

/// Computes the commitment published by `NAME_NEW`, `HASH160(rand || name)`.
pub fn name_new_hash(rand: &[u8], name: &[u8]) -> hash160::Hash {
    let mut engine = hash160::Hash::engine();
    engine.input(rand);
    engine.input(name);
    hash160::Hash::from_engine(engine)
}

/// Splits a value into the part embedded in the base operation and the part
/// carried by extensions.
fn split_value(value: &[u8]) -> (&[u8], &[u8]) {
    value.split_at(value.len().min(MAX_SCRIPT_ELEMENT_SIZE))
}

/// Appends one `<op> <chunk> OP_2DROP` extension per chunk of `tail`.
///
/// Every chunk is full-size except possibly the last, and an empty tail
/// produces no extensions at all.
fn push_value_extensions(
    mut builder: script::Builder,
    op: NameOp,
    tail: &[u8],
) -> NameBuildResult<script::Builder> {
    if !tail.is_empty() {
        debug!(%op, tail_len = tail.len(), "splitting name value into extensions");
    }

    for chunk in tail.chunks(MAX_SCRIPT_ELEMENT_SIZE) {
        builder = builder
            .push_opcode(op.opcode())
            .push_slice(push_bytes(chunk)?)
            .push_opcode(OP_2DROP);
    }

    Ok(builder)
}

fn push_bytes(data: &[u8]) -> NameBuildResult<&PushBytes> {
    Ok(<&PushBytes>::try_from(data)?)
}

/// The address is appended verbatim, it is never parsed or normalized.
fn append_address(builder: script::Builder, address: &Script) -> ScriptBuf {
    let mut bytes = builder.into_script().into_bytes();
    bytes.extend_from_slice(address.as_bytes());
    ScriptBuf::from_bytes(bytes)
}
