//! Name operation script format.
//!
//! A name operation is a prefix in front of an ordinary output script that
//! registers or updates an entry in the name registry:
//!
//! ```text
//! NAME_NEW         <hash>                  OP_2DROP          <address>
//! NAME_FIRSTUPDATE <name> <rand> <value_0> OP_2DROP OP_2DROP <exts> <address>
//! NAME_UPDATE      <name> <value_0>        OP_2DROP OP_DROP  <exts> <address>
//! ```
//!
//! Values longer than a single push are continued by extensions of the form
//! `<name_op> <value_i> OP_2DROP`, which the parser splices back together.
//! The address part is never interpreted.
//!
//! # Examples
//!
//! ```
//! use bitcoin::ScriptBuf;
//! use name_script_fmt::{NameOp, build_name_update, parse_name_script};
//!
//! let address = ScriptBuf::new();
//! let value = vec![7; 1500];
//! let script = build_name_update(&address, b"d/example", &value).unwrap();
//!
//! let parsed = parse_name_script(&script).unwrap();
//! assert_eq!(parsed.op(), NameOp::Update);
//! assert_eq!(parsed.value(), Some(value.as_slice()));
//! ```

#[cfg(feature = "arbitrary")]
mod arbitrary;
#[cfg(feature = "borsh")]
mod borsh;
mod builder;
mod cursor;
mod errors;
pub mod opcodes;
mod parser;
mod script;
#[cfg(feature = "serde")]
mod serde;
mod types;

pub use builder::{build_name_firstupdate, build_name_new, build_name_update, name_new_hash};
pub use errors::{NameBuildError, NameBuildResult, NameScriptError, NameScriptResult};
pub use parser::{find_name_output, find_name_outputs, is_name_script, parse_name_script};
pub use script::{NameOperation, NameScript};
pub use types::{NameOp, UnknownNameOp};

// Dev-dependencies used only by the integration tests or feature-gated tests.
#[cfg(test)]
use bincode as _;
#[cfg(test)]
use proptest as _;
#[cfg(test)]
use serde_json as _;
