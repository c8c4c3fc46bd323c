use tilepro_rs::decoder::{decode_operand, BundleDecoder};
use tilepro_rs::isa::operands::OperandId;
use tilepro_rs::{Opc, Pipe};

// Hand-assembled X bundle: nop in both X pipes.
const NOP_NOP: u64 = 0x400b880070166000;

#[test]
fn nop_bundle() {
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(NOP_NOP, 0);
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].opcode, Some(Opc::Nop));
    assert_eq!(slots[1].opcode, Some(Opc::Nop));
    assert!(slots[0].operands.is_empty());
}

#[test]
fn x_bundle_operands() {
    // fnop ; add r2, r0, r1
    let word = 0x0806080170165000u64;
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(word, 0);
    assert_eq!(slots[0].opcode, Some(Opc::Fnop));
    assert_eq!(slots[1].opcode, Some(Opc::Add));
    let vals: Vec<i64> = slots[1].operands.iter().map(|&(_, v)| v).collect();
    assert_eq!(vals, [2, 0, 1]);
}

#[test]
fn specific_encoding_beats_general_alias() {
    // or rd, ra, zero is the canonical encoding of move rd, ra.
    let or_base = 0x0000000000cc0000u64;
    let with_zero = or_base | 1 | (2 << 6) | (63 << 12);
    let with_r3 = or_base | 1 | (2 << 6) | (3 << 12);
    let dec = BundleDecoder::new();
    assert_eq!(dec.decode_pipe(with_zero, Pipe::X0), Some(Opc::Move));
    assert_eq!(dec.decode_pipe(with_r3, Pipe::X0), Some(Opc::Or));
}

#[test]
fn movei_is_ori_from_zero() {
    let ori_base = 0x0000000040800000u64;
    let from_zero = ori_base | 1 | (63 << 6) | (5 << 12);
    let from_r2 = ori_base | 1 | (2 << 6) | (5 << 12);
    let dec = BundleDecoder::new();
    assert_eq!(dec.decode_pipe(from_zero, Pipe::X0), Some(Opc::Movei));
    assert_eq!(dec.decode_pipe(from_r2, Pipe::X0), Some(Opc::Ori));
}

#[test]
fn y_encoding_selected_by_top_bit() {
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(1u64 << 63, 0);
    let pipes: Vec<Pipe> = slots.iter().map(|s| s.pipe).collect();
    assert_eq!(pipes, [Pipe::Y0, Pipe::Y1, Pipe::Y2]);
}

#[test]
fn signed_immediates_sign_extend() {
    // addi r1, r2, -1
    let addi = 0x0000000040300000u64 | 1 | (2 << 6) | (0xff << 12);
    let dec = BundleDecoder::new();
    assert_eq!(dec.decode_pipe(addi, Pipe::X0), Some(Opc::Addi));
    assert_eq!(decode_operand(OperandId::Imm8X0, addi, 0), -1);
}

#[test]
fn pc_relative_targets_are_absolute() {
    // j with a raw offset of -1 decodes to pc - 8.
    let j = 0x5000000000000000u64 | (0x1fff_ffffu64 << 31);
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(j, 0x1000);
    assert_eq!(slots[1].opcode, Some(Opc::J));
    assert_eq!(slots[1].operands[0].1, 0x1000 - 8);
}

#[test]
fn undecodable_slot_reports_none() {
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(0, 0);
    assert_eq!(slots.len(), 2);
    for s in &slots {
        if s.opcode.is_none() {
            assert!(s.operands.is_empty());
        }
    }
}

#[test]
fn decode_is_total_over_arbitrary_words() {
    let dec = BundleDecoder::new();
    let mut state = 0x243f6a8885a308d3u64;
    for _ in 0..2000 {
        // xorshift
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let slots = dec.decode_bundle(state, 0x8000);
        let expect = if state >> 63 == 1 { 3 } else { 2 };
        assert_eq!(slots.len(), expect);
    }
}

#[test]
fn every_opcode_pipe_pair_decodes_to_itself() {
    use tilepro_rs::isa::opcodes::OPCODES;
    let dec = BundleDecoder::new();
    for desc in OPCODES.iter() {
        for pipe in Pipe::ALL {
            if !desc.pipes.contains(pipe.set()) {
                continue;
            }
            let word = desc.fixed_value[pipe.index()];
            assert_eq!(
                dec.decode_pipe(word, pipe),
                Some(desc.opc),
                "{} in {}",
                desc.mnemonic,
                pipe.name()
            );
        }
    }
}

#[test]
fn table_construction_stays_cheap() {
    // Tree building partitions on shared fixed bits and shares repeated
    // subtrees, so rebuilding the tables many times is near-free.
    for _ in 0..16 {
        let dec = BundleDecoder::new();
        assert_eq!(dec.decode_pipe(0x400b880070166000, Pipe::X0), Some(Opc::Nop));
    }
}
