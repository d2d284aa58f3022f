//! NEC/Renesas V850 instruction catalog and decode engine.
//!
//! The catalog is a flat table scanned front to back; the first
//! definition whose mask pair accepts the assembled word wins, so entry
//! order is part of the data and must not be re-sorted. A handful of
//! entries are unreachable because an earlier entry shares their mask
//! pair; [`selfcheck`] reports them instead of second-guessing which
//! encoding the table meant.

use thiserror::Error;
use tracing::{trace, warn};

use crate::decoder::{
    Cond, Decoded, Decoder, OpClass, Opcode, Operand, OperandKind, MAX_INSN_LEN, MAX_OPERANDS,
};

/// Element pointer, the base register short-format loads/stores imply.
pub const EP: u8 = 30;

#[derive(Debug, Clone, Copy)]
enum FieldKind {
    /// Bits extracted from the assembled word.
    Bits(OperandKind),
    /// Register implied by the encoding, not read from it.
    Implicit(u8),
}

/// One bit slice of one operand. `raw = ((word & mask) >> shr) << shl`,
/// plus `bias`, OR-merged into `slot`.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    mask: u64,
    shr: u32,
    shl: u32,
    bias: u64,
    width: u16,
    signed: bool,
    slot: usize,
    kind: FieldKind,
}

impl Field {
    const NONE: Field = Field {
        mask: 0,
        shr: 0,
        shl: 0,
        bias: 0,
        width: 0,
        signed: false,
        slot: 0,
        kind: FieldKind::Bits(OperandKind::None),
    };

    const fn shl(mut self, n: u32) -> Self {
        self.shl = n;
        self
    }

    const fn bias(mut self, n: u64) -> Self {
        self.bias = n;
        self
    }

    const fn signed(mut self) -> Self {
        self.signed = true;
        self
    }

    const fn unsigned(mut self) -> Self {
        self.signed = false;
        self
    }
}

const fn field(
    mask: u64,
    shr: u32,
    width: u16,
    slot: usize,
    signed: bool,
    kind: OperandKind,
) -> Field {
    Field {
        mask,
        shr,
        shl: 0,
        bias: 0,
        width,
        signed,
        slot,
        kind: FieldKind::Bits(kind),
    }
}

const fn reg(mask: u64, shr: u32, width: u16, slot: usize) -> Field {
    field(mask, shr, width, slot, false, OperandKind::Reg)
}

const fn regind(mask: u64, shr: u32, width: u16, slot: usize) -> Field {
    field(mask, shr, width, slot, false, OperandKind::RegIndirect)
}

const fn imm(mask: u64, shr: u32, width: u16, slot: usize) -> Field {
    field(mask, shr, width, slot, false, OperandKind::Imm)
}

const fn simm(mask: u64, shr: u32, width: u16, slot: usize) -> Field {
    field(mask, shr, width, slot, true, OperandKind::Imm)
}

const fn disp(mask: u64, shr: u32, width: u16, slot: usize) -> Field {
    field(mask, shr, width, slot, false, OperandKind::Disp)
}

const fn sdisp(mask: u64, shr: u32, width: u16, slot: usize) -> Field {
    field(mask, shr, width, slot, true, OperandKind::Disp)
}

const fn jdisp(mask: u64, shr: u32, width: u16, slot: usize) -> Field {
    field(mask, shr, width, slot, true, OperandKind::Jump)
}

const fn cc(mask: u64, shr: u32, width: u16, slot: usize) -> Field {
    field(mask, shr, width, slot, false, OperandKind::CtrlReg)
}

const fn sysreg(mask: u64, shr: u32, width: u16, slot: usize) -> Field {
    field(mask, shr, width, slot, false, OperandKind::SysReg)
}

const fn rlist(mask: u64, shr: u32, width: u16, slot: usize) -> Field {
    field(mask, shr, width, slot, false, OperandKind::RegList)
}

const fn ep(slot: usize) -> Field {
    Field {
        slot,
        kind: FieldKind::Implicit(EP),
        ..Field::NONE
    }
}

/// One catalog entry. `mask`/`required` form the acceptance test:
/// `(word & mask) == word && (word & required) == required`.
#[derive(Debug, Clone, Copy)]
pub struct InsnDef {
    pub mnemonic: &'static str,
    pub id: Opcode,
    pub len: usize,
    pub mask: u64,
    pub required: u64,
    pub operands: u16,
    pub class: OpClass,
    pub cond: Cond,
    fields: [Field; MAX_OPERANDS],
    pub alias: bool,
}

impl InsnDef {
    const fn alias(mut self) -> Self {
        self.alias = true;
        self
    }
}

const fn insn<const N: usize>(
    mnemonic: &'static str,
    id: Opcode,
    len: usize,
    mask: u64,
    required: u64,
    operands: u16,
    class: OpClass,
    cond: Cond,
    fields: [Field; N],
) -> InsnDef {
    let mut padded = [Field::NONE; MAX_OPERANDS];
    let mut i = 0;
    while i < N {
        padded[i] = fields[i];
        i += 1;
    }
    InsnDef {
        mnemonic,
        id,
        len,
        mask,
        required,
        operands,
        class,
        cond,
        fields: padded,
        alias: false,
    }
}

/// Full instruction table, in first-match order. Mostly longest-first,
/// but not strictly: a few 6-byte forms (`jmp`, `jr`, the long loads)
/// sit after the 4-byte block, exactly where the original table put
/// them.
pub static TABLE: &[InsnDef] = &[
    insn("mov", Opcode::Movi, 6, 0x63fffffffff, 0x62000000000, 2, OpClass::Mov, Cond::None, [imm(0xffff0000, 16, 16, 0), imm(0xffff, 0, 16, 0).shl(16), reg(0x1f00000000, 32, 5, 1)]),
    insn("jarl", Opcode::Jarl2, 6, 0x2fffffeffff, 0x2e000000000, 2, OpClass::Call, Cond::None, [reg(0x1f00000000, 32, 5, 1), disp(0xffff0000, 16, 16, 0), disp(0xffff, 0, 16, 0).shl(16)]),
    insn("absf.s", Opcode::Absfs, 4, 0xffe0fc48, 0x7e00448, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("addf.s", Opcode::Addfs, 4, 0xfffffc60, 0x7e00460, 3, OpClass::Add, Cond::None, [reg(0xf800, 11, 5, 2), reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("ceilf.sl", Opcode::Ceilfsl, 4, 0xffe2f444, 0x7e20444, 2, OpClass::Mov, Cond::None, [reg(0xf000, 12, 4, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("ceilf.sul", Opcode::Ceilfsul, 4, 0xfff2f444, 0x7f20444, 2, OpClass::Mov, Cond::None, [reg(0xf000, 12, 4, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("ceilf.suw", Opcode::Ceilfsuw, 4, 0xfff2fc40, 0x7f20440, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("ceilf.sw", Opcode::Ceilfsw, 4, 0xffe2fc40, 0x7e20440, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("cmovf.s", Opcode::Cmovfs, 4, 0xfffffc0e, 0x7e00400, 4, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 3), reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(F)", Opcode::Cmpfsf, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(UN)", Opcode::Cmpfsun, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(EQ)", Opcode::Cmpfseq, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(UEQ)", Opcode::Cmpfsueq, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(OLT)", Opcode::Cmpfsolt, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(ULT)", Opcode::Cmpfsult, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(OLE)", Opcode::Cmpfsole, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(ULE)", Opcode::Cmpfsule, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(SF)", Opcode::Cmpfssf, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(NGLE)", Opcode::Cmpfsngle, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(SEQ)", Opcode::Cmpfsseq, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(NGL)", Opcode::Cmpfsngl, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(SLT)", Opcode::Cmpfslt, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(NGE)", Opcode::Cmpfsnge, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(LE)", Opcode::Cmpfsle, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cmpf.s(NGT)", Opcode::Cmpfsngt, 4, 0xffff042e, 0x7e00420, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0xe, 1, 3, 0)]),
    insn("cvtf.hs", Opcode::Cvtfhs, 4, 0xffe2fc42, 0x7e20442, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("cvtf.ls", Opcode::Cvtfls, 4, 0xf7e1fc42, 0x7e10442, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf0000000, 28, 4, 0)]),
    insn("cvtf.sl", Opcode::Cvtfsl, 4, 0xffe4fc44, 0x7e40444, 2, OpClass::Mov, Cond::None, [reg(0xf000, 12, 4, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("cvtf.sh", Opcode::Cvtfsh, 4, 0xffe3fc42, 0x7e30442, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("cvtf.sul", Opcode::Cvtfsul, 4, 0xfff4fc44, 0x7f40444, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("cvtf.suw", Opcode::Cvtfsuw, 4, 0xfff4fc40, 0x7f40440, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("cvtf.sw", Opcode::Cvtfsw, 4, 0xfff4fc40, 0x7f40440, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("cvtf.uls", Opcode::Cvtfuls, 4, 0xf7f1fc42, 0x7f10442, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf0000000, 28, 4, 0)]),
    insn("cvtf.uws", Opcode::Cvtfuws, 4, 0xfff0fc42, 0x7f00442, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("cvtf.ws", Opcode::Cvtfws, 4, 0xffe0fc42, 0x7e00442, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("divf.s", Opcode::Divfs, 4, 0xfffffc6e, 0x7e0046e, 3, OpClass::Div, Cond::None, [reg(0xf800, 11, 5, 2), reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("floorf.sl", Opcode::Floorfsl, 4, 0xffe3f444, 0x7e30444, 2, OpClass::Mov, Cond::None, [reg(0xf000, 12, 4, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("floorf.sul", Opcode::Floorfsul, 4, 0xfff3f444, 0x7f30444, 2, OpClass::Mov, Cond::None, [reg(0xf000, 12, 4, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("floorf.suw", Opcode::Floorfsuw, 4, 0xfff3fc40, 0x7f30440, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("floorf.sw", Opcode::Floorfsw, 4, 0xffe3fc40, 0x7e30440, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("fmaf.s", Opcode::Fmafs, 4, 0xfffffce0, 0x7e004e0, 3, OpClass::Div, Cond::None, [reg(0xf800, 11, 5, 2), reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("fmsf.s", Opcode::Fmsfs, 4, 0xfffffce2, 0x7e004e2, 3, OpClass::Div, Cond::None, [reg(0xf800, 11, 5, 2), reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("fnmaf.s", Opcode::Fnmafs, 4, 0xfffffce4, 0x7e004e4, 3, OpClass::Div, Cond::None, [reg(0xf800, 11, 5, 2), reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("fnmsf.s", Opcode::Fnmsfs, 4, 0xfffffce6, 0x7e004e6, 3, OpClass::Div, Cond::None, [reg(0xf800, 11, 5, 2), reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("maxf.s", Opcode::Maxfs, 4, 0xfffffc68, 0x7e00468, 3, OpClass::Div, Cond::None, [reg(0xf800, 11, 5, 2), reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("minf.s", Opcode::Minfs, 4, 0xfffffc6a, 0x7e0046a, 3, OpClass::Div, Cond::None, [reg(0xf800, 11, 5, 2), reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("mulf.s", Opcode::Mulfs, 4, 0xfffffc64, 0x7e00464, 3, OpClass::Div, Cond::None, [reg(0xf800, 11, 5, 2), reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("negf.s", Opcode::Negfs, 4, 0xffe1fc48, 0x7e10448, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("recipf.s", Opcode::Recipfs, 4, 0xffe1fc48, 0x7e1044e, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("roundf.sl", Opcode::Roundfsl, 4, 0xffe0f444, 0x7e00444, 2, OpClass::Mov, Cond::None, [reg(0xf000, 12, 4, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("roundf.sul", Opcode::Roundfsul, 4, 0xfff0f444, 0x7f00444, 2, OpClass::Mov, Cond::None, [reg(0xf000, 12, 4, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("roundf.suw", Opcode::Roundfsuw, 4, 0xfff0fc40, 0x7f00440, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("roundf.sw", Opcode::Roundfsw, 4, 0xffe0fc40, 0x7e00440, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("rsqrtf.s", Opcode::Rsqrtfs, 4, 0xffe2fc40, 0x7e2044e, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("sqrtf.s", Opcode::Sqrtfs, 4, 0xffe0fc40, 0x7e0044e, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("subf.s", Opcode::Subfs, 4, 0xfffffc62, 0x7e00462, 3, OpClass::Sub, Cond::None, [reg(0xf800, 11, 5, 2), reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("trfsr.s", Opcode::Trfsr, 4, 0x7e0040e, 0x7e00400, 1, OpClass::Sub, Cond::None, [cc(0xe, 1, 3, 2)]),
    insn("trncf.sl", Opcode::Trncfsl, 4, 0xffe1f444, 0x7e10444, 2, OpClass::Mov, Cond::None, [reg(0xf000, 12, 4, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("trncf.sul", Opcode::Trncfsul, 4, 0xfff1f444, 0x7f10444, 2, OpClass::Mov, Cond::None, [reg(0xf000, 12, 4, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("trncf.suw", Opcode::Trncfsuw, 4, 0xfff1fc40, 0x7f10440, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("trncf.sw", Opcode::Trncfsw, 4, 0xffe0fc40, 0x7e00440, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("addi", Opcode::Addi, 4, 0xfe1fffff, 0x6000000, 3, OpClass::Mov, Cond::None, [simm(0xffff, 0, 16, 0), reg(0x1f0000, 16, 5, 1), reg(0xf8000000, 27, 5, 2)]),
    insn("adf", Opcode::Adf, 4, 0xfffffbbe, 0x7e003a0, 4, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 3), reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), cc(0x1e, 1, 4, 0)]),
    insn("andi", Opcode::Andi, 4, 0xfedfffff, 0x6c00000, 3, OpClass::Mov, Cond::None, [simm(0xffff, 0, 16, 0), reg(0x1f0000, 16, 5, 1), reg(0xf8000000, 27, 5, 2)]),
    insn("bsh", Opcode::Bsh, 4, 0xffe0fb42, 0x7e00342, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("caxi", Opcode::Caxi, 4, 0xfffff8ee, 0x7e000ee, 3, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 2), reg(0xf8000000, 27, 5, 1), regind(0x1f0000, 16, 5, 0)]),
    insn("cll", Opcode::Cll, 4, 0xfffff160, 0xfffff160, 0, OpClass::Nop, Cond::None, []),
    insn("bins", Opcode::Bins, 4, 0xfffff89e, 0x7e00090, 4, OpClass::Mov, Cond::None, [reg(0x1f0000, 16, 5, 0), reg(0xf8000000, 27, 5, 3), imm(0xf000, 12, 4, 2), imm(0x800, 8, 1, 1), imm(0xe, 1, 3, 1).bias(0x10)]),
    insn("bins", Opcode::Bins2, 4, 0xfffff8be, 0x7e000b0, 4, OpClass::Mov, Cond::None, [reg(0x1f0000, 16, 5, 0), reg(0xf8000000, 27, 5, 3), imm(0xf000, 12, 5, 2), imm(0x800, 8, 1, 1), imm(0xe, 1, 3, 1).bias(0x10)]),
    insn("bins", Opcode::Bins3, 4, 0xfffff8de, 0x7e000d0, 4, OpClass::Mov, Cond::None, [reg(0x1f0000, 16, 5, 0), reg(0xf8000000, 27, 5, 3), imm(0xf000, 12, 4, 2), imm(0x800, 8, 1, 1), imm(0xe, 1, 3, 1).bias(0x10)]),
    insn("bsw", Opcode::Bsw, 4, 0xffe0fb40, 0x7e00340, 2, OpClass::Mov, Cond::None, [reg(0xf800, 11, 5, 1), reg(0xf8000000, 27, 5, 0)]),
    insn("clr1", Opcode::Clr1, 4, 0xbfdfffff, 0x87c00000, 3, OpClass::Mov, Cond::None, [imm(0x38000000, 27, 3, 0), reg(0x1f0000, 16, 5, 2), sdisp(0xffff, 0, 16, 1)]),
    insn("clr1", Opcode::Clr1r, 4, 0xffff00e4, 0x7e000e4, 2, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 0), reg(0x1f0000, 16, 5, 1)]),
    insn("cmov", Opcode::Cmov, 4, 0xfffffb3e, 0x7e00320, 4, OpClass::Mov, Cond::None, [cc(0x1e, 1, 4, 0), reg(0x1f0000, 16, 5, 1), reg(0xf8000000, 27, 5, 2), reg(0xf800, 11, 5, 3)]),
    insn("cmov", Opcode::Cmovi, 4, 0xfffffb1e, 0x7e00300, 4, OpClass::Mov, Cond::None, [cc(0x1e, 1, 4, 0), simm(0x1f0000, 16, 5, 1), reg(0xf8000000, 27, 5, 2), reg(0xf800, 11, 5, 3)]),
    insn("ctret", Opcode::Ctret, 4, 0x7e00144, 0x7e00144, 0, OpClass::Return, Cond::None, []),
    insn("dbret", Opcode::Dbret, 4, 0x7e00146, 0x7e00146, 0, OpClass::Return, Cond::None, []),
    insn("di", Opcode::Di, 4, 0x7e00160, 0x7e00160, 0, OpClass::Return, Cond::None, []),
    insn("nop", Opcode::Nop, 4, 0xfffff960, 0xe7e00160, 0, OpClass::Nop, Cond::None, []),
    insn("dispose", Opcode::Dispose, 4, 0x67fffe0, 0x6400000, 2, OpClass::Mov, Cond::None, [imm(0x3e0000, 17, 5, 0).shl(2), rlist(0x1ffe0, 5, 12, 1)]),
    insn("dispose", Opcode::Disposer, 4, 0x67fffff, 0x6400000, 3, OpClass::Mov, Cond::None, [imm(0x3e0000, 17, 5, 0).shl(2), rlist(0x1ffe0, 5, 12, 1), reg(0x1f, 0, 5, 2)]),
    insn("div", Opcode::Div, 4, 0xfffffac0, 0x7e002c0, 3, OpClass::Div, Cond::None, [reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0), reg(0xf800, 11, 5, 2)]),
    insn("divh", Opcode::Divhr, 4, 0xfffffa80, 0x7e00280, 3, OpClass::Div, Cond::None, [reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0), reg(0xf800, 11, 5, 2)]),
    insn("divhu", Opcode::Divhu, 4, 0xfffffa82, 0x7e00282, 3, OpClass::Div, Cond::None, [reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0), reg(0xf800, 11, 5, 2)]),
    insn("divq", Opcode::Divq, 4, 0xfffffafc, 0x7e002fc, 3, OpClass::Div, Cond::None, [reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0), reg(0xf800, 11, 5, 2)]),
    insn("divqu", Opcode::Divqu, 4, 0xfffffafe, 0x7e002fe, 3, OpClass::Div, Cond::None, [reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0), reg(0xf800, 11, 5, 2)]),
    insn("divu", Opcode::Divu, 4, 0xfffffac2, 0x7e002c2, 3, OpClass::Div, Cond::None, [reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0), reg(0xf800, 11, 5, 2)]),
    insn("ei", Opcode::Ei, 4, 0x87e00160, 0x87e00160, 0, OpClass::Return, Cond::None, []),
    insn("eiret", Opcode::Eiret, 4, 0x7e00148, 0x7e00148, 0, OpClass::Return, Cond::None, []),
    insn("feret", Opcode::Feret, 4, 0x7e0014a, 0x7e0014a, 0, OpClass::Return, Cond::None, []),
    insn("halt", Opcode::Halt, 4, 0x7e00120, 0x7e00120, 0, OpClass::Return, Cond::None, []),
    insn("hsw", Opcode::Hsw, 4, 0xfffe0fb44, 0x7e00344, 2, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("hsh", Opcode::Hsh, 4, 0xffe0fb46, 0x7e00346, 2, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("jr", Opcode::Jr, 4, 0x7bffffe, 0x7800000, 1, OpClass::Jump, Cond::None, [jdisp(0x3fffff, 0, 22, 0)]),
    insn("jarl", Opcode::Jarl, 4, 0xffbffffe, 0x7800000, 2, OpClass::Call, Cond::None, [reg(0xf8000000, 27, 5, 1), sdisp(0x3fffff, 0, 22, 0)]),
    insn("jarl", Opcode::Jarl3, 4, 0xc7fff960, 0xc7e00160, 2, OpClass::Call, Cond::None, [regind(0x1f0000, 16, 5, 0), reg(0xf800, 11, 5, 1).signed()]),
    insn("ld.b", Opcode::Ldb, 4, 0xff1fffff, 0x7000000, 3, OpClass::Load, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), sdisp(0xffff, 0, 16, 0)]),
    insn("ld.bu", Opcode::Ldbu, 4, 0xffbfffff, 0x7800000, 3, OpClass::Load, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), sdisp(0xfffe, 0, 15, 0), disp(0x200000, 21, 1, 0)]),
    insn("ld.h", Opcode::Ldh, 4, 0xff3ffffe, 0x7200000, 3, OpClass::Load, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), sdisp(0xfffe, 0, 15, 0)]),
    insn("ld.hu", Opcode::Ldhu, 4, 0xffffffff, 0x7e00001, 3, OpClass::Load, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), sdisp(0xfffe, 0, 15, 0)]),
    insn("ld.w", Opcode::Ldw, 4, 0xff3fffff, 0x7200001, 3, OpClass::Load, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), sdisp(0xfffe, 0, 15, 0)]),
    insn("ldsr", Opcode::Ldsr, 4, 0xffff0020, 0x7e00020, 2, OpClass::Load, Cond::None, [sysreg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("movea", Opcode::Movea, 4, 0xfe3fffff, 0x6200000, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), simm(0xffff, 0, 16, 0)]),
    insn("movhi", Opcode::Movhi, 4, 0xfe5fffff, 0x6400000, 3, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), imm(0xffff, 0, 16, 0)]),
    insn("mul", Opcode::Mul, 4, 0xfffffa20, 0x7e00220, 3, OpClass::Mul, Cond::None, [reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0), reg(0xf800, 11, 5, 2)]),
    insn("mul", Opcode::Muli, 4, 0xfffffa7c, 0x7e00240, 3, OpClass::Mul, Cond::None, [reg(0xf8000000, 27, 5, 1), simm(0x1f0000, 16, 5, 0), reg(0xf800, 11, 5, 2), simm(0x3c, 0, 4, 0).shl(3)]),
    insn("mulhi", Opcode::Mulhi, 4, 0xfeffffff, 0x6e00000, 3, OpClass::Mul, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), imm(0xffff, 0, 16, 0)]),
    insn("mulu", Opcode::Mulu, 4, 0xfffffa22, 0x7e00222, 3, OpClass::Mul, Cond::None, [reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0), reg(0xf800, 11, 5, 2)]),
    insn("mulu", Opcode::Mului, 4, 0xfffffa7e, 0x7e00242, 3, OpClass::Mul, Cond::None, [reg(0xf8000000, 27, 5, 1), imm(0x1f0000, 16, 5, 0), reg(0xf800, 11, 5, 2), imm(0x3c, 0, 4, 0).shl(3)]),
    insn("not1", Opcode::Not1, 4, 0x7fdfffff, 0x23c00000, 3, OpClass::Not, Cond::None, [imm(0x38000000, 27, 3, 0), reg(0x1f0000, 16, 5, 2), sdisp(0xffff, 0, 16, 1)]),
    insn("not1", Opcode::Not1r, 4, 0xffff00e2, 0x7e000e2, 2, OpClass::Not, Cond::None, [reg(0xf8000000, 27, 5, 0), reg(0x1f0000, 16, 5, 1)]),
    insn("ori", Opcode::Ori, 4, 0xfe9fffff, 0x6800000, 3, OpClass::Or, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), simm(0xffff, 0, 16, 0)]),
    insn("prepare", Opcode::Prepare, 4, 0x7bfffe1, 0x7800001, 2, OpClass::Or, Cond::None, [imm(0x3e0000, 17, 5, 1), rlist(0x1ffe0, 5, 12, 0)]),
    insn("reti", Opcode::Reti, 4, 0x7e00140, 0x7e00140, 0, OpClass::Return, Cond::None, []),
    insn("sar", Opcode::Sar, 4, 0xffff00a0, 0x7e000a0, 2, OpClass::Shr, Cond::None, [reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("sasf", Opcode::Sasf, 4, 0xffef0200, 0x7e00200, 2, OpClass::Shl, Cond::None, [reg(0xf8000000, 27, 5, 1), cc(0xf0000, 16, 4, 0)]),
    insn("satsubi", Opcode::Satsubi, 4, 0xfe7fffff, 0x6600000, 3, OpClass::Or, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), simm(0xffff, 0, 16, 0)]),
    insn("set1", Opcode::Set1, 4, 0x3fdfffff, 0x7c00000, 3, OpClass::And, Cond::None, [imm(0x38000000, 27, 3, 0), reg(0x1f0000, 16, 5, 2), sdisp(0xffff, 0, 16, 1)]),
    insn("set1", Opcode::Set1r, 4, 0xffff00e0, 0x7e000e0, 2, OpClass::And, Cond::None, [reg(0xf8000000, 27, 5, 0), reg(0x1f0000, 16, 5, 1)]),
    insn("setf", Opcode::Setf, 4, 0xffef0000, 0x7e00000, 2, OpClass::Mov, Cond::None, [reg(0xf8000000, 27, 5, 1), cc(0xf0000, 16, 4, 0)]),
    insn("shl", Opcode::Shl, 4, 0xffff00c0, 0x7e000c0, 2, OpClass::Shl, Cond::None, [reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("shr", Opcode::Shr, 4, 0xffff0080, 0x7e00080, 2, OpClass::Shr, Cond::None, [reg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("st.b", Opcode::Stb, 4, 0xff5fffff, 0x7400000, 3, OpClass::Or, Cond::None, [reg(0xf8000000, 27, 5, 0), reg(0x1f0000, 16, 5, 2), sdisp(0xffff, 0, 16, 1)]),
    insn("st.h", Opcode::Sth, 4, 0xff7ffffe, 0x7600000, 3, OpClass::Or, Cond::None, [reg(0xf8000000, 27, 5, 0), reg(0x1f0000, 16, 5, 2), sdisp(0xfffe, 0, 15, 1)]),
    insn("st.w", Opcode::Stw, 4, 0xff7fffff, 0x7600001, 3, OpClass::Or, Cond::None, [reg(0xf8000000, 27, 5, 0), reg(0x1f0000, 16, 5, 2), sdisp(0xfffe, 0, 15, 1)]),
    insn("stsr", Opcode::Stsr, 4, 0xffff0040, 0x7e00040, 2, OpClass::Or, Cond::None, [sysreg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0)]),
    insn("stsr", Opcode::Stsri, 4, 0xfffff840, 0x7e00040, 3, OpClass::Or, Cond::None, [sysreg(0xf8000000, 27, 5, 1), reg(0x1f0000, 16, 5, 0), imm(0xf800, 11, 5, 2)]),
    insn("syscall", Opcode::Syscall, 4, 0xd7ff3960, 0xd7e00160, 1, OpClass::Call, Cond::None, [imm(0x3800, 6, 3, 0), imm(0x1f0000, 16, 5, 0)]),
    insn("trap", Opcode::Trap, 4, 0x7ff0100, 0x7e00100, 1, OpClass::Trap, Cond::None, [imm(0x1f0000, 16, 5, 0)]),
    insn("tst1", Opcode::Tst1, 4, 0xffdfffff, 0xc7c00000, 3, OpClass::Not, Cond::None, [imm(0x38000000, 27, 3, 0), reg(0x1f0000, 16, 5, 2), sdisp(0xffff, 0, 16, 1)]),
    insn("tst1", Opcode::Tst1r, 4, 0xffff00e6, 0x7e000e6, 2, OpClass::Not, Cond::None, [reg(0xf8000000, 27, 5, 0), reg(0x1f0000, 16, 5, 1)]),
    insn("xori", Opcode::Xori, 4, 0xfebfffff, 0x6a00000, 3, OpClass::Or, Cond::None, [reg(0xf8000000, 27, 5, 2), reg(0x1f0000, 16, 5, 1), simm(0xffff, 0, 16, 0)]),
    insn("jmp", Opcode::Jmpi, 6, 0x6ffffffeffff, 0x6e000000000, 2, OpClass::IndirectJump, Cond::None, [reg(0x1f00000000, 32, 5, 1), disp(0xffff0000, 16, 16, 0), disp(0xffff, 0, 16, 0).shl(16)]),
    insn("jr", Opcode::Jrl, 6, 0x2e0fffeffff, 0x2e000000000, 1, OpClass::Jump, Cond::None, [disp(0xffff0000, 16, 16, 0), disp(0xffff, 0, 16, 0).shl(16)]),
    insn("ld.b", Opcode::Ldbl, 6, 0x79ffff5ffff, 0x78000050000, 3, OpClass::Load, Cond::None, [reg(0x1f00000000, 32, 5, 1), disp(0x7fff0000, 20, 7, 0), disp(0xffff, 0, 16, 0).shl(16), reg(0xf8000000, 27, 5, 1)]),
    insn("ld.bu", Opcode::Ldbul, 6, 0x7bffff5ffff, 0x7a000050000, 3, OpClass::Load, Cond::None, [reg(0x1f00000000, 32, 5, 1), disp(0x7fff0000, 20, 7, 0), disp(0xffff, 0, 16, 0).shl(16), reg(0xf8000000, 27, 5, 1)]),
    insn("ld.dw", Opcode::Lddw, 6, 0x7bfffe9ffff, 0x7a000090000, 3, OpClass::Load, Cond::None, [reg(0x1f00000000, 32, 5, 1), disp(0x7ffe0000, 21, 6, 0), disp(0xffff, 0, 16, 0).shl(16), reg(0xf8000000, 27, 5, 1)]),
    insn("nop", Opcode::Nop, 2, 0x0, 0x0, 0, OpClass::Nop, Cond::None, []),
    insn("switch", Opcode::Switch, 2, 0x5f, 0x40, 1, OpClass::Sub, Cond::None, [reg(0x1f, 0, 5, 0)]),
    insn("sxb", Opcode::Sxb, 2, 0xbf, 0xa0, 1, OpClass::Mov, Cond::None, [reg(0x1f, 0, 5, 0)]),
    insn("sxh", Opcode::Sxh, 2, 0xff, 0xe0, 1, OpClass::Mov, Cond::None, [reg(0x1f, 0, 5, 0)]),
    insn("synce", Opcode::Synce, 2, 0x1d, 0x1d, 0, OpClass::Mov, Cond::None, []),
    insn("synci", Opcode::Synci, 2, 0x1c, 0x1c, 0, OpClass::Mov, Cond::None, []),
    insn("syncm", Opcode::Syncm, 2, 0x1e, 0x1e, 0, OpClass::Mov, Cond::None, []),
    insn("syncp", Opcode::Syncp, 2, 0x1f, 0x1f, 0, OpClass::Mov, Cond::None, []),
    insn("zxb", Opcode::Zxb, 2, 0x9f, 0x80, 1, OpClass::Mov, Cond::None, [reg(0x1f, 0, 5, 0)]),
    insn("zxh", Opcode::Zxh, 2, 0xdf, 0xc0, 1, OpClass::Mov, Cond::None, [reg(0x1f, 0, 5, 0)]),
    insn("add", Opcode::Add, 2, 0xf9df, 0x1c0, 2, OpClass::Add, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("add", Opcode::AddImm, 2, 0xfa5f, 0x240, 2, OpClass::Add, Cond::None, [simm(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("and", Opcode::And, 2, 0xf95f, 0x140, 2, OpClass::And, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("bge", Opcode::Bge, 2, 0xfdfe, 0x58e, 1, OpClass::CondJump, Cond::Ge, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bgt", Opcode::Bgt, 2, 0xfdff, 0x58f, 1, OpClass::CondJump, Cond::Gt, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("ble", Opcode::Ble, 2, 0xfdf7, 0x587, 1, OpClass::CondJump, Cond::Le, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("blt", Opcode::Blt, 2, 0xfdf6, 0x586, 1, OpClass::CondJump, Cond::Lt, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bh", Opcode::Bh, 2, 0xfdfb, 0x58b, 1, OpClass::CondJump, Cond::High, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bl", Opcode::Bl, 2, 0xfdf1, 0x581, 1, OpClass::CondJump, Cond::Low, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bnh", Opcode::Bnh, 2, 0xfdf3, 0x583, 1, OpClass::CondJump, Cond::NotHigh, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bnl", Opcode::Bnl, 2, 0xfdf9, 0x589, 1, OpClass::CondJump, Cond::NotLow, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("be", Opcode::Be, 2, 0xfdf2, 0x582, 1, OpClass::CondJump, Cond::Eq, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bne", Opcode::Bne, 2, 0xfdfa, 0x58a, 1, OpClass::CondJump, Cond::Ne, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bc", Opcode::Bc, 2, 0xfdf1, 0x581, 1, OpClass::CondJump, Cond::Carry, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]).alias(),
    insn("bn", Opcode::Bn, 2, 0xfdf4, 0x584, 1, OpClass::CondJump, Cond::Negative, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bnc", Opcode::Bnc, 2, 0xfdf9, 0x589, 1, OpClass::CondJump, Cond::NoCarry, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]).alias(),
    insn("bnv", Opcode::Bnv, 2, 0xfdf8, 0x588, 1, OpClass::CondJump, Cond::NoOverflow, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bnz", Opcode::Bnz, 2, 0xfdfa, 0x58a, 1, OpClass::CondJump, Cond::NotZero, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]).alias(),
    insn("bp", Opcode::Bp, 2, 0xfdfc, 0x58c, 1, OpClass::CondJump, Cond::Positive, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("br", Opcode::Br, 2, 0xfdf5, 0x585, 1, OpClass::Jump, Cond::None, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bsa", Opcode::Bsa, 2, 0xfdfd, 0x58d, 1, OpClass::CondJump, Cond::Saturated, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bv", Opcode::Bv, 2, 0xfdf0, 0x580, 1, OpClass::CondJump, Cond::Overflow, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]),
    insn("bz", Opcode::Bz, 2, 0xfdf2, 0x582, 1, OpClass::CondJump, Cond::Zero, [jdisp(0x70, 3, 4, 0), jdisp(0xf800, 7, 5, 0)]).alias(),
    insn("callt", Opcode::Callt, 2, 0x23f, 0x200, 1, OpClass::Call, Cond::None, [jdisp(0x3f, 0, 6, 0).unsigned().shl(1)]),
    insn("cmp", Opcode::Cmp, 2, 0xf9ff, 0x1e0, 2, OpClass::Cmp, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("cmp", Opcode::Cmpi, 2, 0xfa7f, 0x260, 2, OpClass::Cmp, Cond::None, [simm(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("dbtrap", Opcode::Dbtrap, 2, 0xf840, 0xf840, 0, OpClass::Cmp, Cond::None, []),
    insn("divh", Opcode::Divh, 2, 0xf85f, 0x40, 2, OpClass::Div, Cond::None, [simm(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("jmp", Opcode::Jmp, 2, 0x7f, 0x60, 1, OpClass::IndirectJump, Cond::None, [reg(0x1f, 0, 5, 0)]),
    insn("fetrap", Opcode::Fetrap, 2, 0x7840, 0x40, 1, OpClass::IndirectJump, Cond::None, [reg(0x7800, 11, 4, 0)]),
    insn("mov", Opcode::Mov, 2, 0xf81f, 0x0, 2, OpClass::Mov, Cond::None, [reg(0x1f, 0, 5, 0).signed(), reg(0xf800, 11, 5, 1)]),
    insn("mov", Opcode::Movi5, 2, 0xfa1f, 0x200, 2, OpClass::Mov, Cond::None, [simm(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("mulh", Opcode::Mulh, 2, 0xf8ff, 0xe0, 2, OpClass::Mul, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("mulh", Opcode::Mulhimm, 2, 0xfaff, 0x2e0, 2, OpClass::Mul, Cond::None, [simm(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("not", Opcode::Not, 2, 0xf83f, 0x20, 2, OpClass::Not, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("or", Opcode::Or, 2, 0xf91f, 0x100, 2, OpClass::Or, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("sar", Opcode::Sari, 2, 0xfabf, 0x2a0, 2, OpClass::Shr, Cond::None, [imm(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("satadd", Opcode::Satadd, 2, 0xf8df, 0xc0, 2, OpClass::Add, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("satadd", Opcode::Sataddi, 2, 0xfa3f, 0x220, 2, OpClass::Add, Cond::None, [simm(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("satsub", Opcode::Satsub, 2, 0xf8bf, 0xa0, 2, OpClass::Sub, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("satsubr", Opcode::Satsubr, 2, 0xf89f, 0x80, 2, OpClass::Sub, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("shl", Opcode::Shli, 2, 0xfadf, 0x2c0, 2, OpClass::Shl, Cond::None, [imm(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("shr", Opcode::Shri, 2, 0xfa9f, 0x280, 2, OpClass::Shr, Cond::None, [imm(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("sld.b", Opcode::Sldb, 2, 0xfb7f, 0x300, 3, OpClass::Load, Cond::None, [imm(0x7f, 0, 7, 0), ep(1), reg(0xf800, 11, 5, 2)]),
    insn("sld.bu", Opcode::Sldbu, 2, 0xf86f, 0x60, 3, OpClass::Load, Cond::None, [imm(0xf, 0, 4, 0), ep(1), reg(0xf800, 11, 5, 2)]),
    insn("sld.h", Opcode::Sldh, 2, 0xfc7f, 0x400, 3, OpClass::Load, Cond::None, [imm(0x7f, 0, 7, 0).shl(1), ep(1), reg(0xf800, 11, 5, 2)]),
    insn("sld.hu", Opcode::Sldhu, 2, 0xf87f, 0x70, 3, OpClass::Load, Cond::None, [imm(0xf, 0, 4, 0).shl(1), ep(1), reg(0xf800, 11, 5, 2)]),
    insn("sld.w", Opcode::Sldw, 2, 0xfd7e, 0x500, 3, OpClass::Load, Cond::None, [imm(0x7e, 0, 6, 0).shl(1), ep(1), reg(0xf800, 11, 5, 2)]),
    insn("sst.b", Opcode::Sstb, 2, 0xfbff, 0x380, 3, OpClass::Store, Cond::None, [imm(0x7f, 0, 7, 1), reg(0xf800, 11, 5, 0), ep(2)]),
    insn("sst.h", Opcode::Ssth, 2, 0xfcff, 0x480, 3, OpClass::Store, Cond::None, [imm(0x7f, 0, 7, 1).shl(1), reg(0xf800, 11, 5, 0), ep(2)]),
    insn("sst.w", Opcode::Sstw, 2, 0xfd7f, 0x501, 3, OpClass::Store, Cond::None, [imm(0x7e, 0, 6, 1).shl(1), reg(0xf800, 11, 5, 0), ep(2)]),
    insn("sub", Opcode::Sub, 2, 0xf9bf, 0x1a0, 2, OpClass::Sub, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("subr", Opcode::Subr, 2, 0xf99f, 0x180, 2, OpClass::Sub, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("sxb", Opcode::Sxb, 2, 0xbf, 0xa0, 1, OpClass::Sub, Cond::None, [reg(0x1f, 0, 5, 0)]),
    insn("tst", Opcode::Tst, 2, 0xf97f, 0x160, 2, OpClass::And, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
    insn("xor", Opcode::Xor, 2, 0xf93f, 0x120, 2, OpClass::Or, Cond::None, [reg(0x1f, 0, 5, 0), reg(0xf800, 11, 5, 1)]),
];

/// Concatenate `len` bytes into one match word: consecutive byte pairs
/// are little-endian halfwords, and the first halfword lands in the most
/// significant position.
pub fn assemble_word(bytes: &[u8], len: usize) -> u64 {
    let halfwords = len / 2;
    let mut word = 0u64;
    for (i, pair) in bytes[..len].chunks_exact(2).enumerate() {
        let hw = u64::from(u16::from_le_bytes([pair[0], pair[1]]));
        word |= hw << ((halfwords - 1 - i) * 16);
    }
    word
}

fn extract(def: &InsnDef, word: u64) -> Decoded {
    let mut operands = [Operand::EMPTY; MAX_OPERANDS];
    for f in &def.fields {
        match f.kind {
            FieldKind::Implicit(r) => operands[f.slot].set_implicit_reg(r, f.width),
            FieldKind::Bits(kind) => {
                if f.mask == 0 {
                    continue;
                }
                let raw = (((word & f.mask) >> f.shr) << f.shl).wrapping_add(f.bias);
                operands[f.slot].merge(raw as i64, f.width, f.signed, kind);
            }
        }
    }
    for op in &mut operands {
        op.sign_extend();
    }
    Decoded {
        mnemonic: def.mnemonic,
        id: def.id,
        len: def.len as u8,
        class: def.class,
        cond: def.cond,
        operand_count: def.operands,
        operands,
    }
}

/// Stateless table-driven decoder for the V850/V850E instruction set.
#[derive(Debug, Clone, Copy, Default)]
pub struct N850Decoder;

impl N850Decoder {
    pub fn new() -> Self {
        N850Decoder
    }
}

impl Decoder for N850Decoder {
    fn decode(&self, bytes: &[u8]) -> Option<Decoded> {
        // Candidate words per distinct length, assembled at most once.
        let mut words = [None::<u64>; MAX_INSN_LEN / 2];
        for def in TABLE {
            if bytes.len() < def.len {
                continue;
            }
            let slot = def.len / 2 - 1;
            let word = *words[slot].get_or_insert_with(|| assemble_word(bytes, def.len));
            if (word & def.mask) != word || (word & def.required) != def.required {
                continue;
            }
            trace!(mnemonic = def.mnemonic, len = def.len, word, "matched");
            return Some(extract(def, word));
        }
        None
    }
}

/// A catalog definition that can never match because an earlier entry
/// accepts the same words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowed {
    /// Index of the unreachable definition.
    pub index: usize,
    pub mnemonic: &'static str,
    pub id: Opcode,
    /// Mnemonic of the earlier entry that wins.
    pub shadowed_by: &'static str,
}

#[derive(Debug, Clone, Error)]
#[error("{} unreachable catalog definitions", shadowed.len())]
pub struct CatalogError {
    pub shadowed: Vec<Shadowed>,
}

/// Validate the catalog: report every non-alias definition whose
/// `(len, mask, required)` triple duplicates an earlier entry. Such an
/// entry is dead data; callers typically log the result once at startup.
/// Intentional mnemonic synonyms (`bc`, `bnc`, `bz`, `bnz`) are marked
/// in the table and not reported.
pub fn selfcheck() -> Result<(), CatalogError> {
    let mut shadowed = Vec::new();
    for (i, def) in TABLE.iter().enumerate() {
        if def.alias {
            continue;
        }
        let earlier = TABLE[..i]
            .iter()
            .find(|p| p.len == def.len && p.mask == def.mask && p.required == def.required);
        if let Some(first) = earlier {
            warn!(
                mnemonic = def.mnemonic,
                index = i,
                shadowed_by = first.mnemonic,
                "catalog definition is unreachable"
            );
            shadowed.push(Shadowed {
                index: i,
                mnemonic: def.mnemonic,
                id: def.id,
                shadowed_by: first.mnemonic,
            });
        }
    }
    if shadowed.is_empty() {
        Ok(())
    } else {
        Err(CatalogError { shadowed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn word_assembly_is_halfword_big_endian() {
        assert_eq!(assemble_word(&[0xdc, 0x09], 2), 0x09dc);
        assert_eq!(assemble_word(&[0x06, 0xf6, 0x06, 0x00], 4), 0xf606_0006);
        assert_eq!(
            assemble_word(&[0x2a, 0x06, 0xef, 0xbe, 0xad, 0xde], 6),
            0x062a_beef_dead
        );
    }

    #[test]
    fn word_assembly_ignores_trailing_bytes() {
        let buf = [0xdc, 0x09, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(assemble_word(&buf, 2), 0x09dc);
    }

    #[test]
    fn table_shape() {
        assert_eq!(TABLE.len(), 203);
        let six = TABLE.iter().filter(|d| d.len == 6).count();
        let four = TABLE.iter().filter(|d| d.len == 4).count();
        let two = TABLE.iter().filter(|d| d.len == 2).count();
        assert_eq!((six, four, two), (7, 130, 66));
        // The layout is not strictly length-sorted: five 6-byte forms
        // follow the 4-byte block, as in the source table.
        let trailing_six: Vec<&str> = TABLE
            .iter()
            .skip(2)
            .filter(|d| d.len == 6)
            .map(|d| d.mnemonic)
            .collect();
        assert_eq!(trailing_six, ["jmp", "jr", "ld.b", "ld.bu", "ld.dw"]);
    }

    #[test]
    fn selfcheck_reports_known_dead_entries() {
        let err = selfcheck().unwrap_err();
        assert_eq!(err.shadowed.len(), 18);
        // The 15 shadowed cmpf.s predicates all trace back to the first.
        let cmpf = err
            .shadowed
            .iter()
            .filter(|s| s.shadowed_by == "cmpf.s(F)")
            .count();
        assert_eq!(cmpf, 15);
        assert!(err
            .shadowed
            .iter()
            .any(|s| s.mnemonic == "cvtf.sw" && s.shadowed_by == "cvtf.suw"));
        assert!(err
            .shadowed
            .iter()
            .any(|s| s.mnemonic == "trncf.sw" && s.shadowed_by == "roundf.sw"));
        assert!(err.shadowed.iter().any(|s| s.mnemonic == "sxb"));
    }

    #[test]
    fn selfcheck_skips_marked_synonyms() {
        let err = selfcheck().unwrap_err();
        for name in ["bc", "bnc", "bz", "bnz"] {
            assert!(!err.shadowed.iter().any(|s| s.mnemonic == name));
        }
        let aliases: Vec<&str> = TABLE
            .iter()
            .filter(|d| d.alias)
            .map(|d| d.mnemonic)
            .collect();
        assert_eq!(aliases, ["bc", "bnc", "bnz", "bz"]);
    }

    #[test]
    fn three_entries_require_bits_outside_their_mask() {
        // Inherited table defect: these can never satisfy both checks,
        // since an accepted word has no bits outside `mask`.
        let dead: Vec<&str> = TABLE
            .iter()
            .filter(|d| d.required & d.mask != d.required)
            .map(|d| d.mnemonic)
            .collect();
        assert_eq!(dead, ["recipf.s", "rsqrtf.s", "sqrtf.s"]);
    }
}
