use tilepro_rs::expr::Expr;
use tilepro_rs::isa::operands::OperandId;
use tilepro_rs::{AsmOptions, Assembler, Assembly, BundleDecoder, Opc, RelocKind, Severity};

fn asm(src: &str) -> Assembly {
    Assembler::new(AsmOptions::default()).assemble(src)
}

fn word(out: &Assembly, index: usize) -> u64 {
    u64::from_le_bytes(out.code[index * 8..index * 8 + 8].try_into().unwrap())
}

#[test]
fn small_program() {
    let out = asm("# leaf function\n\
                   { add r1, r2, r3 ; lw r4, r5 }\n\
                   jr lr\n");
    assert!(out.diagnostics.is_empty(), "{:?}", out.diagnostics);
    assert_eq!(out.code.len(), 16);

    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(word(&out, 0), 0);
    assert_eq!(slots[0].opcode, Some(Opc::Add));
    assert_eq!(slots[2].opcode, Some(Opc::Lw));
    let slots = dec.decode_bundle(word(&out, 1), 8);
    assert_eq!(slots[1].opcode, Some(Opc::Jr));
    assert_eq!(slots[1].operands[0].1, 55);
}

#[test]
fn statements_share_a_line() {
    let out = asm("nop ; nop\n");
    assert!(out.diagnostics.is_empty());
    assert_eq!(out.code.len(), 16);
}

#[test]
fn group_brace_on_its_own_line() {
    let out = asm("{\n  add r1, r2, r3\n  sub r4, r5, r6\n}\n");
    assert!(out.diagnostics.is_empty(), "{:?}", out.diagnostics);
    assert_eq!(out.code.len(), 8);
}

#[test]
fn alias_register_names_rejected_by_default() {
    let out = asm("move r54, r0\n");
    assert!(out.has_errors());
    assert!(out.diagnostics[0].message.contains("canonical"));
    assert!(out.code.is_empty());
}

#[test]
fn alias_register_names_warn_when_permitted() {
    let out = asm(".no_require_canonical_reg_names\nmove r54, r0\n");
    assert!(!out.has_errors());
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].severity, Severity::Warning);
    assert!(out.diagnostics[0].message.contains("sp"));
    assert_eq!(out.code.len(), 8);
}

#[test]
fn suspicious_bundles_directive() {
    let src = "{ add r1, r2, r3 ; sub r1, r4, r5 }\n";
    assert!(asm(src).has_errors());

    let out = asm(&format!(".allow_suspicious_bundles\n{src}"));
    assert!(!out.has_errors(), "{:?}", out.diagnostics);
    assert_eq!(out.code.len(), 8);
}

#[test]
fn unknown_directive_is_reported() {
    let out = asm(".align 8\n");
    assert!(out.has_errors());
    assert!(out.diagnostics[0].message.contains(".align"));
}

#[test]
fn symbolic_jump_emits_fixup() {
    let out = asm("nop\njal func\n");
    assert!(!out.has_errors());
    assert_eq!(out.fixups.len(), 1);
    let f = &out.fixups[0];
    assert_eq!(f.offset, 8);
    assert_eq!(f.operand, OperandId::JOffLongX1);
    assert_eq!(f.kind, RelocKind::JOffLongX1);
    assert_eq!(f.expr, Expr::Symbol("func".to_string()));
}

#[test]
fn modified_symbols_pick_modified_relocs() {
    let out = asm("moveli r0, lo16(data)\nauli r0, r0, ha16(data)\n");
    assert!(!out.has_errors(), "{:?}", out.diagnostics);
    assert_eq!(out.fixups.len(), 2);
    assert_eq!(out.fixups[0].kind, RelocKind::Imm16X1Lo);
    assert_eq!(out.fixups[0].operand, OperandId::Imm16X1);
    assert_eq!(out.fixups[1].kind, RelocKind::Imm16X1Ha);
    assert_eq!(out.fixups[1].offset, 8);
}

#[test]
fn plt_modifier_on_call() {
    let out = asm("jal plt(func)\n");
    assert!(!out.has_errors());
    assert_eq!(out.fixups[0].kind, RelocKind::JOffLongX1Plt);
}

#[test]
fn modifier_must_fit_the_operand() {
    let out = asm("jal lo16(func)\n");
    assert!(out.has_errors());
    assert!(out.code.is_empty());
}

#[test]
fn errors_do_not_stop_assembly() {
    let out = asm("frobnicate r1\nadd r1, r2, r3\n");
    assert!(out.has_errors());
    assert_eq!(out.code.len(), 8);
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].line, 1);
    assert!(out.diagnostics[0].message.contains("frobnicate"));
}

#[test]
fn operand_count_is_checked() {
    let out = asm("add r1, r2\n");
    assert!(out.has_errors());
    assert!(out.diagnostics[0].message.contains("add"));
}

#[test]
fn unclosed_group_is_an_error() {
    let out = asm("{ add r1, r2, r3\n");
    assert!(out.has_errors());
    assert!(out
        .diagnostics
        .iter()
        .any(|d| d.message.contains("unclosed")));
}

#[test]
fn spr_operands_accept_names_and_numbers() {
    let out = asm("mfspr r0, SNCTL\nmtspr 0x80b, r1\n");
    assert!(!out.has_errors(), "{:?}", out.diagnostics);

    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(word(&out, 0), 0);
    assert_eq!(slots[1].opcode, Some(Opc::Mfspr));
    assert_eq!(slots[1].operands[1].1, 0x805);
    let slots = dec.decode_bundle(word(&out, 1), 8);
    assert_eq!(slots[1].opcode, Some(Opc::Mtspr));
    assert_eq!(slots[1].operands[0].1, 0x80b);
}

#[test]
fn shift_immediates() {
    let out = asm("shli r1, r2, 31\n");
    assert!(!out.has_errors());
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(word(&out, 0), 0);
    assert_eq!(slots[1].opcode, Some(Opc::Shli));
    assert_eq!(slots[1].operands[2].1, 31);

    assert!(asm("shli r1, r2, 32\n").has_errors());
}

#[test]
fn numeric_branch_target() {
    let out = asm("nop\nbnz r3, 0\n");
    assert!(!out.has_errors(), "{:?}", out.diagnostics);
    let dec = BundleDecoder::new();
    let slots = dec.decode_bundle(word(&out, 1), 8);
    assert_eq!(slots[1].opcode, Some(Opc::Bnz));
    assert_eq!(slots[1].operands[0].1, 3);
    assert_eq!(slots[1].operands[1].1, 0);
}
