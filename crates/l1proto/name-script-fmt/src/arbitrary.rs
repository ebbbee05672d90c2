use arbitrary::{Arbitrary, Unstructured};

use crate::NameOp;

impl<'a> Arbitrary<'a> for NameOp {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(*u.choose(&NameOp::ALL)?)
    }
}
