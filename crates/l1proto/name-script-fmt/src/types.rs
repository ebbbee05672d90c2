use std::fmt;
use std::str;

use bitcoin::Opcode;

use crate::opcodes::{OP_NAME_FIRSTUPDATE, OP_NAME_NEW, OP_NAME_UPDATE};

/// Kind of a name operation.
///
/// Each kind is marked by its own opcode and carries a fixed number of
/// arguments in front of the first terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameOp {
    /// Publishes a commitment hash for a name that is not yet revealed.
    New,

    /// Reveals and registers a name committed to by an earlier [`NameOp::New`].
    FirstUpdate,

    /// Updates the value of, or transfers, an existing name.
    Update,
}

impl NameOp {
    /// All operation kinds, in opcode order.
    pub const ALL: [NameOp; 3] = [NameOp::New, NameOp::FirstUpdate, NameOp::Update];

    /// Returns the opcode marking this kind.
    pub const fn opcode(self) -> Opcode {
        match self {
            Self::New => OP_NAME_NEW,
            Self::FirstUpdate => OP_NAME_FIRSTUPDATE,
            Self::Update => OP_NAME_UPDATE,
        }
    }

    /// Looks up the kind marked by an opcode.
    pub fn from_opcode(op: Opcode) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.opcode() == op)
    }

    /// Number of arguments pushed before the first terminator.
    pub const fn arity(self) -> usize {
        match self {
            Self::New => 1,
            Self::FirstUpdate => 3,
            Self::Update => 2,
        }
    }

    /// Returns true for the kinds carrying a name and a value, which are also
    /// the kinds whose value may be extended past a single push.
    pub const fn is_any_update(self) -> bool {
        matches!(self, Self::FirstUpdate | Self::Update)
    }

    /// Returns the canonical lowercase name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "name_new",
            Self::FirstUpdate => "name_firstupdate",
            Self::Update => "name_update",
        }
    }
}

impl From<NameOp> for Opcode {
    fn from(op: NameOp) -> Self {
        op.opcode()
    }
}

impl TryFrom<Opcode> for NameOp {
    type Error = UnknownNameOp;

    fn try_from(op: Opcode) -> Result<Self, Self::Error> {
        Self::from_opcode(op).ok_or(UnknownNameOp)
    }
}

impl fmt::Display for NameOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for NameOp {
    type Err = UnknownNameOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(UnknownNameOp)
    }
}

/// Error type for a string or opcode that does not name an operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownNameOp;

impl fmt::Display for UnknownNameOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown name operation")
    }
}

impl std::error::Error for UnknownNameOp {}
