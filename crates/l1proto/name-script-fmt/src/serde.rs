use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Serialize};

use crate::NameOp;

impl Serialize for NameOp {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(self.as_str())
        } else {
            s.serialize_u8(self.opcode().to_u8())
        }
    }
}

impl<'de> Deserialize<'de> for NameOp {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            struct StrVisitor;

            impl de::Visitor<'_> for StrVisitor {
                type Value = NameOp;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "a name operation kind")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<NameOp, E> {
                    NameOp::from_str(v).map_err(E::custom)
                }
            }

            d.deserialize_str(StrVisitor)
        } else {
            let code = u8::deserialize(d)?;
            NameOp::from_opcode(code.into()).ok_or_else(|| {
                de::Error::invalid_value(de::Unexpected::Unsigned(code.into()), &"a name opcode")
            })
        }
    }
}
