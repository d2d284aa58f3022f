use pretty_assertions::assert_eq;
use v850_rs::decoder::Decoder;
use v850_rs::isa::nec850::N850Decoder;
use v850_rs::{Cond, OpClass, Opcode, OperandKind};

#[test]
fn bne_backward() {
    let dec = N850Decoder::new();
    let d = dec.decode(&[0xca, 0xfd]).unwrap();
    assert_eq!(d.mnemonic, "bne");
    assert_eq!(d.class, OpClass::CondJump);
    assert_eq!(d.cond, Cond::Ne);
    assert_eq!(d.operands[0].value, -8);
    assert_eq!(d.operands[0].kind, OperandKind::Jump);
    assert_eq!(d.operands[0].width, 9);
}

#[test]
fn bge_forward_and_backward() {
    let dec = N850Decoder::new();

    let d = dec.decode(&[0x9e, 0x0d]).unwrap();
    assert_eq!((d.mnemonic, d.cond), ("bge", Cond::Ge));
    assert_eq!(d.operands[0].value, 18);

    let d = dec.decode(&[0xde, 0xfd]).unwrap();
    assert_eq!((d.mnemonic, d.cond), ("bge", Cond::Ge));
    assert_eq!(d.operands[0].value, -6);
}

// The displacement splits across two fields (bits 6:4 and 15:11); both
// pieces must land before the 9-bit sign extension.
#[test]
fn split_displacement_merges_before_extension() {
    let dec = N850Decoder::new();
    for (bytes, expect) in [
        ([0xca_u8, 0xfd], -8i64),
        ([0xde, 0xfd], -6),
        ([0x9e, 0x0d], 18),
    ] {
        let d = dec.decode(&bytes).unwrap();
        assert_eq!(d.operands[0].value, expect, "{bytes:02x?}");
        assert_eq!(d.operands[0].width, 9);
        assert!(d.operands[0].signed);
    }
}

// bc/bnc/bz/bnz share encodings with bl/bnl/be/bne; the table lists the
// synonym second, so only the first spelling is ever produced.
#[test]
fn condition_synonyms_resolve_to_first_spelling() {
    let dec = N850Decoder::new();

    let d = dec.decode(&[0xca, 0xfd]).unwrap();
    assert_eq!(d.id, Opcode::Bne);

    // word 0x0581: bl and bc encode identically
    let d = dec.decode(&[0x81, 0x05]).unwrap();
    assert_eq!((d.mnemonic, d.id), ("bl", Opcode::Bl));
    assert_eq!(d.cond, Cond::Low);

    // word 0x0589: bnl over bnc
    let d = dec.decode(&[0x89, 0x05]).unwrap();
    assert_eq!((d.mnemonic, d.id), ("bnl", Opcode::Bnl));

    // word 0x0582: be over bz
    let d = dec.decode(&[0x82, 0x05]).unwrap();
    assert_eq!((d.mnemonic, d.id), ("be", Opcode::Be));
}
