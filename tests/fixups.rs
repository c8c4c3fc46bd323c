use tilepro_rs::decoder::BundleDecoder;
use tilepro_rs::isa::operands::OperandId;
use tilepro_rs::reloc::{apply_fixup, RelocError};
use tilepro_rs::{AsmOptions, Assembler, Opc};

fn assemble(src: &str) -> Vec<u8> {
    let out = Assembler::new(AsmOptions::default()).assemble(src);
    assert!(!out.has_errors(), "{:?}", out.diagnostics);
    out.code
}

#[test]
fn patch_immediate_field() {
    let mut code = assemble("moveli r0, sym\n");
    apply_fixup(&mut code, 0, OperandId::Imm16X1, 1234).unwrap();

    let word = u64::from_le_bytes(code[0..8].try_into().unwrap());
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(word, 0);
    assert_eq!(slots[1].opcode, Some(Opc::Moveli));
    assert_eq!(slots[1].operands[1].1, 1234);
}

#[test]
fn patch_jump_offset() {
    // Call resolved to three bundles ahead.
    let mut code = assemble("jal func\n");
    apply_fixup(&mut code, 0, OperandId::JOffLongX1, 24).unwrap();

    let word = u64::from_le_bytes(code[0..8].try_into().unwrap());
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(word, 0);
    assert_eq!(slots[1].opcode, Some(Opc::Jal));
    assert_eq!(slots[1].operands[0].1, 24);
}

#[test]
fn repatching_replaces_the_previous_value() {
    let mut code = assemble("moveli r0, sym\n");
    apply_fixup(&mut code, 0, OperandId::Imm16X1, -1).unwrap();
    apply_fixup(&mut code, 0, OperandId::Imm16X1, 1234).unwrap();

    let word = u64::from_le_bytes(code[0..8].try_into().unwrap());
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(word, 0);
    assert_eq!(slots[1].opcode, Some(Opc::Moveli));
    assert_eq!(slots[1].operands[1].1, 1234);
}

#[test]
fn overflow_patches_truncated_and_reports() {
    let mut code = assemble("moveli r0, sym\n");
    let err = apply_fixup(&mut code, 0, OperandId::Imm16X1, 0x12345).unwrap_err();
    assert!(matches!(err, RelocError::Overflow { bits: 16, .. }));

    // Best-effort truncated value still landed in the field.
    let word = u64::from_le_bytes(code[0..8].try_into().unwrap());
    let raw = (OperandId::Imm16X1.desc().extract)(word);
    assert_eq!(raw, 0x2345);
}

#[test]
fn bad_offset_rejected() {
    let mut code = assemble("nop\n");
    assert!(matches!(
        apply_fixup(&mut code, 8, OperandId::Imm16X1, 0),
        Err(RelocError::BadOffset(8))
    ));
    assert!(matches!(
        apply_fixup(&mut code, 4, OperandId::Imm16X1, 0),
        Err(RelocError::BadOffset(4))
    ));
}

#[test]
fn modifiers_map_to_their_reloc_kinds() {
    use tilepro_rs::expr::ExprMod;
    use tilepro_rs::RelocKind;
    assert_eq!(
        RelocKind::Imm16X0.with_modifier(ExprMod::Lo16),
        Some(RelocKind::Imm16X0Lo)
    );
    assert_eq!(
        RelocKind::Imm16X1.with_modifier(ExprMod::Got),
        Some(RelocKind::Imm16X1Got)
    );
    assert_eq!(
        RelocKind::JOffLongX1.with_modifier(ExprMod::Plt),
        Some(RelocKind::JOffLongX1Plt)
    );
    // No lowered form exists for a branch offset.
    assert_eq!(RelocKind::BrOffX1.with_modifier(ExprMod::Lo16), None);
}

#[test]
fn reloc_codes_match_the_abi() {
    use tilepro_rs::RelocKind;
    assert_eq!(RelocKind::BrOffX1.code(), 14);
    assert_eq!(RelocKind::JOffLongX1.code(), 15);
    assert_eq!(RelocKind::Imm8X0.code(), 17);
    assert_eq!(RelocKind::Imm16X0.code(), 23);
    assert_eq!(RelocKind::Imm16X1Ha.code(), 30);
    assert_eq!(RelocKind::MmStartX0.code(), 49);
    assert_eq!(RelocKind::DestImm8X1.code(), 57);
}
