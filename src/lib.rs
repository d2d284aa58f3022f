pub mod decoder;
pub mod disasm;

pub mod isa {
    pub mod nec850; // NEC V850 / V850E variant
}

pub use decoder::{Cond, Decoded, Decoder, OpClass, Opcode, Operand, OperandKind, MAX_INSN_LEN};
pub use isa::nec850::{selfcheck, CatalogError, N850Decoder};
