use pretty_assertions::assert_eq;
use v850_rs::decoder::Decoder;
use v850_rs::isa::nec850::{selfcheck, N850Decoder, TABLE};

#[test]
fn selfcheck_is_a_report_not_a_panic() {
    // The inherited table contains dead entries; the check names them
    // all instead of failing decode.
    let err = selfcheck().unwrap_err();
    assert_eq!(err.shadowed.len(), 18);
    for s in &err.shadowed {
        assert!(s.index < TABLE.len());
        // the winning entry really does come earlier
        assert!(TABLE[..s.index]
            .iter()
            .any(|d| d.mnemonic == s.shadowed_by));
    }
    // sxb is listed twice verbatim, so it shadows itself; every other
    // report pairs distinct mnemonics.
    let same: Vec<_> = err
        .shadowed
        .iter()
        .filter(|s| s.mnemonic == s.shadowed_by)
        .collect();
    assert_eq!(same.len(), 1);
    assert_eq!(same[0].mnemonic, "sxb");
}

#[test]
fn every_definition_length_is_a_halfword_multiple() {
    for def in TABLE {
        assert!(matches!(def.len, 2 | 4 | 6), "{}", def.mnemonic);
    }
}

#[test]
fn decode_is_deterministic() {
    let dec = N850Decoder::new();
    let bufs: [&[u8]; 4] = [
        &[0xdc, 0x09],
        &[0xca, 0xfd],
        &[0x2a, 0x06, 0xef, 0xbe, 0xad, 0xde],
        &[0xff, 0xff],
    ];
    for bytes in bufs {
        assert_eq!(dec.decode(bytes), dec.decode(bytes), "{bytes:02x?}");
    }
}

// Exhaustive sweep over the 2-byte space: whatever decodes must report
// a plausible length and respect the operand-slot bound.
#[test]
fn two_byte_space_sweep() {
    use v850_rs::OperandKind;

    let dec = N850Decoder::new();
    let mut matched = 0u32;
    for word in 0..=u16::MAX {
        let bytes = word.to_le_bytes();
        if let Some(d) = dec.decode(&bytes) {
            matched += 1;
            assert_eq!(d.len, 2, "{word:#06x}");
            assert!(usize::from(d.operand_count) <= d.operands.len());
            for op in &d.operands {
                let extends = op.signed
                    && op.width > 0
                    && matches!(op.kind, OperandKind::Imm | OperandKind::Jump);
                if extends {
                    // extended values stay inside their declared width
                    let bound = 1i64 << (op.width - 1);
                    assert!(
                        op.value >= -bound && op.value < bound,
                        "{word:#06x}: {op:?}"
                    );
                }
            }
        }
    }
    assert_eq!(matched, 49_152);
}
