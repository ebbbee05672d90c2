use borsh::{BorshDeserialize, BorshSerialize};

use crate::NameOp;

impl BorshSerialize for NameOp {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&[self.opcode().to_u8()])
    }
}

impl BorshDeserialize for NameOp {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let code = u8::deserialize_reader(reader)?;
        NameOp::from_opcode(code.into()).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("unknown name opcode {code:#04x}"),
            )
        })
    }
}
