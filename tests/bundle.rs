use tilepro_rs::bundler::{BundleError, Bundler, BundlerOptions, OperandValue, PendingInsn};
use tilepro_rs::decoder::BundleDecoder;
use tilepro_rs::{Opc, Pipe, BUNDLE_Y_ENCODING_MASK};

fn insn(opcode: Opc, operands: Vec<OperandValue>) -> PendingInsn {
    PendingInsn { opcode, operands, line: 1 }
}

fn rrr(opcode: Opc, d: u8, a: u8, b: u8) -> PendingInsn {
    use OperandValue::Reg;
    insn(opcode, vec![Reg(d), Reg(a), Reg(b)])
}

fn emitted_word(bundler: Bundler) -> u64 {
    let (code, fixups) = bundler.finish().unwrap();
    assert_eq!(code.len(), 8);
    assert!(fixups.is_empty());
    u64::from_le_bytes(code.try_into().unwrap())
}

#[test]
fn lone_alu_insn_pads_to_x_bundle() {
    let mut b = Bundler::new(BundlerOptions::default());
    b.push(rrr(Opc::Add, 2, 0, 1)).unwrap();
    // fnop in X0, add r2, r0, r1 in X1
    assert_eq!(emitted_word(b), 0x0806080170165000);
}

#[test]
fn alu_pair_takes_x_pipes_in_order() {
    let mut b = Bundler::new(BundlerOptions::default());
    b.begin_group().unwrap();
    b.push(rrr(Opc::Add, 1, 2, 3)).unwrap();
    b.push(rrr(Opc::Sub, 4, 5, 6)).unwrap();
    b.end_group().unwrap();
    let word = emitted_word(b);
    assert_eq!(word & BUNDLE_Y_ENCODING_MASK, 0);

    let dec = BundleDecoder::new();
    assert_eq!(dec.decode_pipe(word, Pipe::X0), Some(Opc::Add));
    assert_eq!(dec.decode_pipe(word, Pipe::X1), Some(Opc::Sub));
}

#[test]
fn alu_plus_load_takes_y_pipes() {
    use OperandValue::Reg;
    let mut b = Bundler::new(BundlerOptions::default());
    b.begin_group().unwrap();
    b.push(rrr(Opc::Add, 1, 2, 3)).unwrap();
    b.push(insn(Opc::Lw, vec![Reg(4), Reg(5)])).unwrap();
    b.end_group().unwrap();
    let word = emitted_word(b);
    assert_ne!(word & BUNDLE_Y_ENCODING_MASK, 0);

    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(word, 0);
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0].opcode, Some(Opc::Add));
    assert_eq!(slots[1].opcode, Some(Opc::Fnop));
    assert_eq!(slots[2].opcode, Some(Opc::Lw));
    assert_eq!(slots[2].operands[0].1, 4);
    assert_eq!(slots[2].operands[1].1, 5);
}

#[test]
fn three_wide_needs_a_y2_capable_insn() {
    let mut b = Bundler::new(BundlerOptions::default());
    b.begin_group().unwrap();
    b.push(rrr(Opc::Add, 1, 2, 3)).unwrap();
    b.push(rrr(Opc::And, 4, 5, 6)).unwrap();
    b.push(rrr(Opc::Or, 7, 8, 9)).unwrap();
    assert!(matches!(b.end_group(), Err(BundleError::NoValidLayout(_))));
}

#[test]
fn three_wide_with_load() {
    use OperandValue::Reg;
    let mut b = Bundler::new(BundlerOptions::default());
    b.begin_group().unwrap();
    b.push(rrr(Opc::Add, 1, 2, 3)).unwrap();
    b.push(rrr(Opc::And, 4, 5, 6)).unwrap();
    b.push(insn(Opc::Sw, vec![Reg(7), Reg(8)])).unwrap();
    b.end_group().unwrap();

    let word = emitted_word(b);
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(word, 0);
    assert_eq!(slots[0].opcode, Some(Opc::Add));
    assert_eq!(slots[1].opcode, Some(Opc::And));
    assert_eq!(slots[2].opcode, Some(Opc::Sw));
}

#[test]
fn fourth_insn_in_group_force_flushes() {
    use OperandValue::Reg;
    let mut b = Bundler::new(BundlerOptions::default());
    b.begin_group().unwrap();
    b.push(rrr(Opc::Add, 1, 2, 3)).unwrap();
    b.push(rrr(Opc::And, 4, 5, 6)).unwrap();
    b.push(insn(Opc::Lw, vec![Reg(7), Reg(8)])).unwrap();
    // The overflow is reported, the first three emit as a full bundle,
    // and the fourth instruction opens the next one.
    assert!(matches!(
        b.push(rrr(Opc::Or, 9, 10, 11)),
        Err(BundleError::TooManyInstructions)
    ));
    b.end_group().unwrap();
    let (code, _) = b.finish().unwrap();
    assert_eq!(code.len(), 16);

    let dec = BundleDecoder::new();
    let first = u64::from_le_bytes(code[..8].try_into().unwrap());
    let second = u64::from_le_bytes(code[8..].try_into().unwrap());
    let slots = dec.decode_bundle(first, 0);
    assert_eq!(slots[0].opcode, Some(Opc::Add));
    assert_eq!(slots[2].opcode, Some(Opc::Lw));
    assert_eq!(dec.decode_pipe(second, Pipe::X1), Some(Opc::Or));
}

#[test]
fn conflicting_writes_rejected() {
    let mut b = Bundler::new(BundlerOptions::default());
    b.begin_group().unwrap();
    b.push(rrr(Opc::Add, 1, 2, 3)).unwrap();
    b.push(rrr(Opc::Sub, 1, 4, 5)).unwrap();
    assert!(matches!(
        b.end_group(),
        Err(BundleError::ConflictingWrites(r)) if r == "r1"
    ));
}

#[test]
fn conflicting_writes_tolerated_when_suspicious_allowed() {
    let mut b = Bundler::new(BundlerOptions { allow_suspicious_bundles: true });
    b.begin_group().unwrap();
    b.push(rrr(Opc::Add, 1, 2, 3)).unwrap();
    b.push(rrr(Opc::Sub, 1, 4, 5)).unwrap();
    b.end_group().unwrap();
    assert_eq!(b.finish().unwrap().0.len(), 8);
}

#[test]
fn zero_register_absorbs_conflicts() {
    let mut b = Bundler::new(BundlerOptions::default());
    b.begin_group().unwrap();
    b.push(rrr(Opc::Add, 63, 2, 3)).unwrap();
    b.push(rrr(Opc::Sub, 63, 4, 5)).unwrap();
    b.end_group().unwrap();
    assert_eq!(b.finish().unwrap().0.len(), 8);
}

#[test]
fn implicit_link_register_write_conflicts() {
    use OperandValue::{Imm, Reg};
    let mut b = Bundler::new(BundlerOptions::default());
    b.begin_group().unwrap();
    b.push(insn(Opc::Move, vec![Reg(55), Reg(0)])).unwrap();
    b.push(insn(Opc::Jal, vec![Imm(0x100)])).unwrap();
    assert!(matches!(
        b.end_group(),
        Err(BundleError::ConflictingWrites(r)) if r == "lr"
    ));
}

#[test]
fn nonwritable_register_rejected_even_when_suspicious_allowed() {
    use OperandValue::Reg;
    let mut b = Bundler::new(BundlerOptions { allow_suspicious_bundles: true });
    let err = b.push(insn(Opc::Move, vec![Reg(58), Reg(0)])).unwrap_err();
    assert!(matches!(err, BundleError::NonWritableRegister("idn1")));
}

#[test]
fn reading_nonwritable_register_is_fine() {
    use OperandValue::Reg;
    let mut b = Bundler::new(BundlerOptions::default());
    b.push(insn(Opc::Move, vec![Reg(0), Reg(58)])).unwrap();
    assert_eq!(b.finish().unwrap().0.len(), 8);
}

#[test]
fn bpt_cannot_share_a_bundle_with_real_work() {
    let mut b = Bundler::new(BundlerOptions::default());
    b.begin_group().unwrap();
    b.push(insn(Opc::Bpt, vec![])).unwrap();
    b.push(rrr(Opc::Add, 1, 2, 3)).unwrap();
    assert!(matches!(b.end_group(), Err(BundleError::IllegalBundle(_))));
}

#[test]
fn bpt_sharing_tolerated_when_suspicious_allowed() {
    let mut b = Bundler::new(BundlerOptions { allow_suspicious_bundles: true });
    b.begin_group().unwrap();
    b.push(insn(Opc::Bpt, vec![])).unwrap();
    b.push(rrr(Opc::Add, 1, 2, 3)).unwrap();
    b.end_group().unwrap();
    let word = emitted_word(b);
    let dec = BundleDecoder::new();
    assert_eq!(dec.decode_pipe(word, Pipe::X1), Some(Opc::Bpt));
    assert_eq!(dec.decode_pipe(word, Pipe::X0), Some(Opc::Add));
}

#[test]
fn bpt_with_padding_is_legal() {
    let mut b = Bundler::new(BundlerOptions::default());
    b.begin_group().unwrap();
    b.push(insn(Opc::Bpt, vec![])).unwrap();
    b.push(insn(Opc::Nop, vec![])).unwrap();
    b.end_group().unwrap();
    assert_eq!(b.finish().unwrap().0.len(), 8);
}

#[test]
fn lone_bpt_pads_with_nop() {
    let mut b = Bundler::new(BundlerOptions::default());
    b.push(insn(Opc::Bpt, vec![])).unwrap();
    let word = emitted_word(b);
    let dec = BundleDecoder::new();
    assert_eq!(dec.decode_pipe(word, Pipe::X0), Some(Opc::Nop));
    assert_eq!(dec.decode_pipe(word, Pipe::X1), Some(Opc::Bpt));
}

#[test]
fn pc_relative_target_encodes_against_bundle_offset() {
    use OperandValue::Imm;
    let mut b = Bundler::new(BundlerOptions::default());
    b.push(insn(Opc::Nop, vec![])).unwrap();
    // Second bundle sits at offset 8; jump back to offset 0.
    b.push(insn(Opc::J, vec![Imm(0)])).unwrap();
    let (code, _) = b.finish().unwrap();
    assert_eq!(code.len(), 16);

    let word = u64::from_le_bytes(code[8..16].try_into().unwrap());
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(word, 8);
    assert_eq!(slots[1].opcode, Some(Opc::J));
    assert_eq!(slots[1].operands[0].1, 0);
}

#[test]
fn out_of_range_immediate_reports_operand() {
    use OperandValue::{Imm, Reg};
    let mut b = Bundler::new(BundlerOptions::default());
    let err = b.push(insn(Opc::Movei, vec![Reg(0), Imm(200)])).unwrap_err();
    match err {
        BundleError::OperandRange { mnemonic, index, .. } => {
            assert_eq!(mnemonic, "movei");
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn error_does_not_poison_following_bundles() {
    use OperandValue::{Imm, Reg};
    let mut b = Bundler::new(BundlerOptions::default());
    assert!(b.push(insn(Opc::Movei, vec![Reg(0), Imm(10_000)])).is_err());
    b.push(rrr(Opc::Add, 1, 2, 3)).unwrap();
    assert_eq!(b.finish().unwrap().0.len(), 8);
}
