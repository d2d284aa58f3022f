use pretty_assertions::assert_eq;
use v850_rs::decoder::Decoder;
use v850_rs::isa::nec850::N850Decoder;
use v850_rs::{OpClass, Opcode, OperandKind};

// syscall's 8-bit vector lives in two fields (bits 29:27 and 20:16);
// the pieces OR together and the widths add up.
#[test]
fn syscall_vector_merges_from_two_fields() {
    let dec = N850Decoder::new();
    let d = dec.decode(&[0xf3, 0xd7, 0x60, 0x29]).unwrap();
    assert_eq!(d.mnemonic, "syscall");
    assert_eq!(d.operands[0].value, 179);
    assert_eq!(d.operands[0].width, 8);
    assert_eq!(d.operands[0].kind, OperandKind::Imm);
}

// mul's 9-bit immediate merges a 5-bit field with a 4-bit field shifted
// left 3, then sign-extends at the merged width.
#[test]
fn mul_imm9_merges_then_extends() {
    let dec = N850Decoder::new();
    let d = dec.decode(&[0xfe, 0x3f, 0x68, 0x1a]).unwrap();
    assert_eq!(d.id, Opcode::Muli);
    assert_eq!(d.operands[0].value, -162);
    assert_eq!(d.operands[0].width, 9);
    assert!(d.operands[0].signed);
    assert_eq!(d.operands[1].value, 7);
    assert_eq!(d.operands[2].value, 3);
}

// bins carries a biased field: the position's low 3 bits gain +0x10
// before merging with the msb.
#[test]
fn bins_biased_position_field() {
    let dec = N850Decoder::new();
    let d = dec.decode(&[0xe5, 0xa7, 0x9c, 0xa8]).unwrap();
    assert_eq!(d.id, Opcode::Bins);
    assert_eq!(d.operand_count, 4);
    assert_eq!(d.operands[0].value, 5);
    assert_eq!(d.operands[1].value, 30);
    assert_eq!(d.operands[1].width, 4);
    assert_eq!(d.operands[2].value, 10);
    assert_eq!(d.operands[3].value, 20);
}

// Short loads/stores address off the element pointer; the register is
// implied, so its slot reports r30 with zero accumulated width.
#[test]
fn short_format_implied_base_register() {
    let dec = N850Decoder::new();

    let d = dec.decode(&[0x25, 0x4b]).unwrap();
    assert_eq!((d.mnemonic, d.class), ("sld.b", OpClass::Load));
    assert_eq!(d.operands[0].value, 37);
    assert_eq!(d.operands[0].width, 7);
    assert_eq!(d.operands[1].value, 30);
    assert_eq!(d.operands[1].width, 0);
    assert_eq!(d.operands[1].kind, OperandKind::Reg);
    assert_eq!(d.operands[2].value, 9);

    let d = dec.decode(&[0xc7, 0x63]).unwrap();
    assert_eq!((d.mnemonic, d.class), ("sst.b", OpClass::Store));
    assert_eq!(d.operands[0].value, 12);
    assert_eq!(d.operands[1].value, 71);
    assert_eq!(d.operands[2].value, 30);
    assert_eq!(d.operands[2].width, 0);
}

// Displacements keep their signed flag but never extend; only
// immediates and jump offsets do.
#[test]
fn displacements_stay_zero_extended() {
    let dec = N850Decoder::new();
    let d = dec.decode(&[0xff; 4]).unwrap();
    assert_eq!(d.mnemonic, "ld.hu");
    assert_eq!(d.operands[0].kind, OperandKind::Disp);
    assert!(d.operands[0].signed);
    assert_eq!(d.operands[0].width, 15);
    assert_eq!(d.operands[0].value, 65534);
}

// A signed flag on a register field is inert for the same reason.
#[test]
fn signed_register_field_does_not_extend() {
    let dec = N850Decoder::new();
    let d = dec.decode(&[0x05, 0x38]).unwrap();
    assert_eq!((d.mnemonic, d.id), ("mov", Opcode::Mov));
    assert_eq!(d.operands[0].value, 5);
    assert!(d.operands[0].signed);
    assert_eq!(d.operands[0].kind, OperandKind::Reg);
    assert_eq!(d.operands[1].value, 7);
}

#[test]
fn dispose_register_list() {
    let dec = N850Decoder::new();
    let d = dec.decode(&[0x55, 0x06, 0x80, 0x57]).unwrap();
    assert_eq!((d.mnemonic, d.id), ("dispose", Opcode::Dispose));
    // frame size field is scaled by 4
    assert_eq!(d.operands[0].value, 40);
    assert_eq!(d.operands[1].value, 0xabc);
    assert_eq!(d.operands[1].kind, OperandKind::RegList);
    assert_eq!(d.operands[1].width, 12);
}

#[test]
fn callt_offset_is_unsigned_and_scaled() {
    let dec = N850Decoder::new();
    let d = dec.decode(&[0x15, 0x02]).unwrap();
    assert_eq!(d.mnemonic, "callt");
    assert_eq!(d.operands[0].value, 42);
    assert_eq!(d.operands[0].width, 6);
    assert_eq!(d.operands[0].kind, OperandKind::Jump);
    assert!(!d.operands[0].signed);
}

// Slots past operand_count stay untouched.
#[test]
fn unused_slots_remain_empty() {
    let dec = N850Decoder::new();
    let d = dec.decode(&[0xdc, 0x09]).unwrap();
    for op in &d.operands[2..] {
        assert_eq!(op.kind, OperandKind::None);
        assert_eq!(op.value, 0);
        assert_eq!(op.width, 0);
    }
}
