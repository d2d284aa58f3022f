//! Assembler-like text rendering for decoded instructions.
//!
//! The core has no register-name or symbol tables, so registers print as
//! bare indices (`r10`, `sr5`) and addresses stay numeric; a front end
//! with more context can render its own listing from the raw record.

use std::fmt::Write;

use crate::decoder::{Decoded, Operand, OperandKind};

fn fmt_operand(out: &mut String, op: &Operand) {
    match op.kind {
        OperandKind::Reg => {
            let _ = write!(out, "r{}", op.value);
        }
        OperandKind::RegIndirect => {
            let _ = write!(out, "[r{}]", op.value);
        }
        OperandKind::Imm => {
            if op.value < 0 {
                let _ = write!(out, "-{:#x}", -op.value);
            } else {
                let _ = write!(out, "{:#x}", op.value);
            }
        }
        OperandKind::Jump => {
            // `{:+#x}` would print the two's-complement bit pattern for
            // negative offsets, so spell the sign out
            if op.value < 0 {
                let _ = write!(out, "-{:#x}", -op.value);
            } else {
                let _ = write!(out, "+{:#x}", op.value);
            }
        }
        OperandKind::SysReg => {
            let _ = write!(out, "sr{}", op.value);
        }
        OperandKind::RegList => {
            // 12-bit mask, zero-padded; the 0x prefix counts toward the
            // format width
            let _ = write!(out, "{:#06x}", op.value);
        }
        OperandKind::Disp | OperandKind::CtrlReg | OperandKind::None => {
            let _ = write!(out, "{:#x}", op.value);
        }
    }
}

/// Render one decoded instruction as `mnemonic op, op, ...`.
pub fn fmt_decoded(d: &Decoded) -> String {
    let mut out = String::from(d.mnemonic);
    let count = (d.operand_count as usize).min(d.operands.len());
    for (i, op) in d.operands[..count].iter().enumerate() {
        out.push_str(if i == 0 { " " } else { ", " });
        fmt_operand(&mut out, op);
    }
    out
}
