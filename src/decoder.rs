use serde::{Deserialize, Serialize};

/// Longest encoding in the ISA: three halfwords.
pub const MAX_INSN_LEN: usize = 6;

/// Result operand slots per instruction.
pub const MAX_OPERANDS: usize = 5;

/// Unique opcode identifiers. One identifier may back several catalog
/// definitions (register, immediate and long forms of one mnemonic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    Movi,
    Jarl2,
    Absfs,
    Addfs,
    Ceilfsl,
    Ceilfsul,
    Ceilfsuw,
    Ceilfsw,
    Cmovfs,
    Cmpfsf,
    Cmpfsun,
    Cmpfseq,
    Cmpfsueq,
    Cmpfsolt,
    Cmpfsult,
    Cmpfsole,
    Cmpfsule,
    Cmpfssf,
    Cmpfsngle,
    Cmpfsseq,
    Cmpfsngl,
    Cmpfslt,
    Cmpfsnge,
    Cmpfsle,
    Cmpfsngt,
    Cvtfhs,
    Cvtfls,
    Cvtfsl,
    Cvtfsh,
    Cvtfsul,
    Cvtfsuw,
    Cvtfsw,
    Cvtfuls,
    Cvtfuws,
    Cvtfws,
    Divfs,
    Floorfsl,
    Floorfsul,
    Floorfsuw,
    Floorfsw,
    Fmafs,
    Fmsfs,
    Fnmafs,
    Fnmsfs,
    Maxfs,
    Minfs,
    Mulfs,
    Negfs,
    Recipfs,
    Roundfsl,
    Roundfsul,
    Roundfsuw,
    Roundfsw,
    Rsqrtfs,
    Sqrtfs,
    Subfs,
    Trfsr,
    Trncfsl,
    Trncfsul,
    Trncfsuw,
    Trncfsw,
    Addi,
    Adf,
    Andi,
    Bsh,
    Caxi,
    Cll,
    Bins,
    Bins2,
    Bins3,
    Bsw,
    Clr1,
    Clr1r,
    Cmov,
    Cmovi,
    Ctret,
    Dbret,
    Di,
    Nop,
    Dispose,
    Disposer,
    Div,
    Divhr,
    Divhu,
    Divq,
    Divqu,
    Divu,
    Ei,
    Eiret,
    Feret,
    Halt,
    Hsw,
    Hsh,
    Jr,
    Jarl,
    Jarl3,
    Ldb,
    Ldbu,
    Ldh,
    Ldhu,
    Ldw,
    Ldsr,
    Movea,
    Movhi,
    Mul,
    Muli,
    Mulhi,
    Mulu,
    Mului,
    Not1,
    Not1r,
    Ori,
    Prepare,
    Reti,
    Sar,
    Sasf,
    Satsubi,
    Set1,
    Set1r,
    Setf,
    Shl,
    Shr,
    Stb,
    Sth,
    Stw,
    Stsr,
    Stsri,
    Syscall,
    Trap,
    Tst1,
    Tst1r,
    Xori,
    Jmpi,
    Jrl,
    Ldbl,
    Ldbul,
    Lddw,
    Switch,
    Sxb,
    Sxh,
    Synce,
    Synci,
    Syncm,
    Syncp,
    Zxb,
    Zxh,
    Add,
    AddImm,
    And,
    Bge,
    Bgt,
    Ble,
    Blt,
    Bh,
    Bl,
    Bnh,
    Bnl,
    Be,
    Bne,
    Bc,
    Bn,
    Bnc,
    Bnv,
    Bnz,
    Bp,
    Br,
    Bsa,
    Bv,
    Bz,
    Callt,
    Cmp,
    Cmpi,
    Dbtrap,
    Divh,
    Jmp,
    Fetrap,
    Mov,
    Movi5,
    Mulh,
    Mulhimm,
    Not,
    Or,
    Sari,
    Satadd,
    Sataddi,
    Satsub,
    Satsubr,
    Shli,
    Shri,
    Sldb,
    Sldbu,
    Sldh,
    Sldhu,
    Sldw,
    Sstb,
    Ssth,
    Sstw,
    Sub,
    Subr,
    Tst,
    Xor,
}

/// Broad operation category, consumed by the host adapter when it builds
/// control-flow edges (jump/call/return/trap) or renders listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpClass {
    Add,
    Sub,
    Mul,
    Div,
    Shr,
    Shl,
    And,
    Or,
    Xor,
    Not,
    Load,
    Store,
    Mov,
    Cmp,
    Jump,
    CondJump,
    IndirectJump,
    Call,
    Return,
    Nop,
    Trap,
}

/// Branch/compare condition; `None` where the encoding carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cond {
    None,
    Ge,
    Gt,
    Le,
    Lt,
    High,
    NotHigh,
    Low,
    NotLow,
    Eq,
    Ne,
    Carry,
    NoCarry,
    Negative,
    Positive,
    NotZero,
    Zero,
    Overflow,
    NoOverflow,
    Saturated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperandKind {
    /// Unpopulated slot.
    None,
    /// General-purpose register index.
    Reg,
    Imm,
    /// Memory displacement.
    Disp,
    /// Register holding a memory address.
    RegIndirect,
    /// PC-relative jump offset.
    Jump,
    /// Condition/flag selector.
    CtrlReg,
    SysReg,
    /// 12-bit register list (prepare/dispose).
    RegList,
}

/// One decoded operand. The value accumulates from every field that
/// targets its slot; `width` is the summed logical bit width used for the
/// final sign extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand {
    pub value: i64,
    pub width: u16,
    pub signed: bool,
    pub kind: OperandKind,
}

impl Operand {
    pub const EMPTY: Operand = Operand {
        value: 0,
        width: 0,
        signed: false,
        kind: OperandKind::None,
    };

    /// OR-merge one extracted bit slice into this slot. Kind and
    /// signedness follow the most recent contribution; the logical width
    /// grows by the slice width.
    pub fn merge(&mut self, bits: i64, width: u16, signed: bool, kind: OperandKind) {
        self.value |= bits;
        self.width += width;
        self.signed = signed;
        self.kind = kind;
    }

    /// Fill the slot with a register that is implied by the encoding
    /// rather than read from it.
    pub fn set_implicit_reg(&mut self, reg: u8, width: u16) {
        self.value = i64::from(reg);
        self.width += width;
        self.kind = OperandKind::Reg;
    }

    /// Sign-extend once all slices are merged, at the final accumulated
    /// width. Only signed immediates and jump offsets extend; every other
    /// kind stays zero-extended.
    pub fn sign_extend(&mut self) {
        if self.signed
            && self.width > 0
            && matches!(self.kind, OperandKind::Imm | OperandKind::Jump)
        {
            let m = 1i64 << (self.width - 1);
            self.value = (self.value ^ m) - m;
        }
    }
}

/// One decoded instruction. Allocated fresh per `decode` call and owned
/// by the caller; the decoder keeps no state between calls. Serialize
/// only: the static mnemonic cannot be deserialized back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub mnemonic: &'static str,
    pub id: Opcode,
    /// Bytes consumed: 2, 4 or 6.
    pub len: u8,
    pub class: OpClass,
    pub cond: Cond,
    pub operand_count: u16,
    pub operands: [Operand; MAX_OPERANDS],
}

pub trait Decoder {
    /// Decode the instruction starting at `bytes[0]`. Returns `None` when
    /// no definition accepts the buffer; that is an expected outcome
    /// (data bytes, misaligned probe), not an error. Reads are bounded by
    /// `bytes.len()`, so buffers shorter than [`MAX_INSN_LEN`] are safe.
    fn decode(&self, bytes: &[u8]) -> Option<Decoded>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_accumulates_value_and_width() {
        let mut op = Operand::EMPTY;
        op.merge(0x0c, 4, false, OperandKind::Imm);
        op.merge(0xa0, 4, false, OperandKind::Imm);
        assert_eq!(op.value, 0xac);
        assert_eq!(op.width, 8);
        assert_eq!(op.kind, OperandKind::Imm);
    }

    #[test]
    fn sign_extend_uses_merged_width() {
        let mut op = Operand::EMPTY;
        op.merge(0x8, 4, true, OperandKind::Jump);
        op.merge(0x1f0, 5, true, OperandKind::Jump);
        op.sign_extend();
        assert_eq!(op.value, -8);
    }

    #[test]
    fn sign_extend_leaves_unsigned_and_non_imm_kinds() {
        let mut imm = Operand::EMPTY;
        imm.merge(0x80, 8, false, OperandKind::Imm);
        imm.sign_extend();
        assert_eq!(imm.value, 0x80);

        let mut disp = Operand::EMPTY;
        disp.merge(0xfffe, 15, true, OperandKind::Disp);
        disp.sign_extend();
        assert_eq!(disp.value, 0xfffe);
    }

    #[test]
    fn implicit_reg_overwrites_value_but_keeps_width_sum() {
        let mut op = Operand::EMPTY;
        op.set_implicit_reg(30, 0);
        assert_eq!(op.value, 30);
        assert_eq!(op.width, 0);
        assert_eq!(op.kind, OperandKind::Reg);
    }
}
