//! Decoded and logical views of a name operation.

use bitcoin::{Script, ScriptBuf};

use crate::{builder, errors::NameBuildResult, types::NameOp};

/// A script recognized as a name operation.
///
/// The argument list always has exactly [`NameOp::arity`] entries. For the
/// update kinds the last entry is the value with every extension chunk already
/// spliced on, so it may be longer than a single push allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameScript {
    op: NameOp,
    args: Vec<Vec<u8>>,
    address: ScriptBuf,
}

impl NameScript {
    pub(crate) fn new(op: NameOp, args: Vec<Vec<u8>>, address: ScriptBuf) -> Self {
        debug_assert_eq!(args.len(), op.arity());
        Self { op, args, address }
    }

    /// Gets the operation kind.
    pub fn op(&self) -> NameOp {
        self.op
    }

    /// Gets the arguments in script order.
    pub fn args(&self) -> &[Vec<u8>] {
        &self.args
    }

    /// Gets the address script following the name prefix.
    pub fn address(&self) -> &Script {
        &self.address
    }

    /// Returns true for `NAME_FIRSTUPDATE` and `NAME_UPDATE`.
    pub fn is_any_update(&self) -> bool {
        self.op.is_any_update()
    }

    /// Gets the name, for the update kinds.
    pub fn name(&self) -> Option<&[u8]> {
        self.is_any_update().then(|| self.args[0].as_slice())
    }

    /// Gets the full value, for the update kinds.
    pub fn value(&self) -> Option<&[u8]> {
        match self.op {
            NameOp::New => None,
            NameOp::FirstUpdate => Some(&self.args[2]),
            NameOp::Update => Some(&self.args[1]),
        }
    }

    /// Gets the commitment salt revealed by `NAME_FIRSTUPDATE`.
    pub fn rand(&self) -> Option<&[u8]> {
        (self.op == NameOp::FirstUpdate).then(|| self.args[1].as_slice())
    }

    /// Gets the commitment hash published by `NAME_NEW`.
    pub fn hash(&self) -> Option<&[u8]> {
        (self.op == NameOp::New).then(|| self.args[0].as_slice())
    }

    /// Splits into the logical operation and the address script.
    pub fn into_parts(self) -> (NameOperation, ScriptBuf) {
        let mut args = self.args.into_iter();
        let mut next = || args.next().unwrap_or_default();

        let operation = match self.op {
            NameOp::New => NameOperation::New { hash: next() },
            NameOp::FirstUpdate => NameOperation::FirstUpdate {
                name: next(),
                rand: next(),
                value: next(),
            },
            NameOp::Update => NameOperation::Update {
                name: next(),
                value: next(),
            },
        };

        (operation, self.address)
    }

    /// Gets the logical operation carried by the script.
    pub fn to_operation(&self) -> NameOperation {
        self.clone().into_parts().0
    }
}

/// A name operation with its payload, independent of any script encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum NameOperation {
    /// Commit to a name without revealing it.
    New {
        /// Commitment hash, see [`crate::name_new_hash`].
        hash: Vec<u8>,
    },

    /// Register a previously committed name.
    FirstUpdate {
        /// The name being registered.
        name: Vec<u8>,
        /// Salt that opens the commitment.
        rand: Vec<u8>,
        /// Initial value of the name.
        value: Vec<u8>,
    },

    /// Update an existing name.
    Update {
        /// The name being updated.
        name: Vec<u8>,
        /// New value of the name.
        value: Vec<u8>,
    },
}

impl NameOperation {
    /// Gets the operation kind.
    pub fn op(&self) -> NameOp {
        match self {
            Self::New { .. } => NameOp::New,
            Self::FirstUpdate { .. } => NameOp::FirstUpdate,
            Self::Update { .. } => NameOp::Update,
        }
    }

    /// Builds the script for this operation, prefixed to `address`.
    pub fn to_script(&self, address: &Script) -> NameBuildResult<ScriptBuf> {
        match self {
            Self::New { hash } => builder::build_name_new(address, hash),
            Self::FirstUpdate { name, rand, value } => {
                builder::build_name_firstupdate(address, name, value, rand)
            }
            Self::Update { name, value } => builder::build_name_update(address, name, value),
        }
    }
}

impl From<NameScript> for NameOperation {
    fn from(script: NameScript) -> Self {
        script.into_parts().0
    }
}
