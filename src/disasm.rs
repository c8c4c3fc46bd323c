//! Textual rendering of decoded bundles, in the style of objdump: one
//! line per bundle word, slots joined inside braces, padding slots
//! suppressed when real work is present.

use std::fmt::Write;

use crate::decoder::{BundleDecoder, DecodedInsn};
use crate::isa::opcodes::is_padding;
use crate::isa::operands::OperandId;
use crate::isa::{regs, sprs};
use crate::operand::OperandKind;
use crate::BUNDLE_SIZE_IN_BYTES;

pub fn fmt_operand(id: OperandId, value: i64) -> String {
    match id.desc().kind {
        OperandKind::Register => regs::name(value as u8 & 63).to_string(),
        OperandKind::SpecialRegister => match sprs::name_of(value as u32) {
            Some(name) => name.to_string(),
            None => format!("{:#x}", value),
        },
        OperandKind::Address => format!("{:#x}", value),
        OperandKind::Immediate => value.to_string(),
    }
}

pub fn fmt_insn(insn: &DecodedInsn) -> String {
    let opc = match insn.opcode {
        Some(opc) => opc,
        None => return format!("<invalid {}>", insn.pipe.name()),
    };
    let mut s = opc.mnemonic().to_string();
    for (i, &(id, value)) in insn.operands.iter().enumerate() {
        s.push_str(if i == 0 { " " } else { ", " });
        s.push_str(&fmt_operand(id, value));
    }
    s
}

/// Format one bundle's slots. Padding slots (nop, fnop) are dropped when
/// anything else is present; a slot that fails to decode is shown and
/// never dropped.
pub fn fmt_bundle(insns: &[DecodedInsn]) -> String {
    let mut visible: Vec<&DecodedInsn> = insns
        .iter()
        .filter(|i| !matches!(i.opcode, Some(opc) if is_padding(opc)))
        .collect();
    if visible.is_empty() {
        visible = insns.iter().collect();
    }
    match visible.as_slice() {
        [] => String::new(),
        [single] => fmt_insn(single),
        many => {
            let body: Vec<String> = many.iter().map(|i| fmt_insn(i)).collect();
            format!("{{ {} }}", body.join(" ; "))
        }
    }
}

/// Disassemble a code stream, one line per 8-byte bundle. A trailing
/// partial word is rendered as raw bytes.
pub fn dump(code: &[u8], base_pc: u64) -> String {
    let decoder = BundleDecoder::new();
    let mut out = String::new();
    let mut chunks = code.chunks_exact(BUNDLE_SIZE_IN_BYTES);
    let mut pc = base_pc;
    for chunk in &mut chunks {
        let bits = u64::from_le_bytes(chunk.try_into().unwrap());
        let insns = decoder.decode_bundle(bits, pc);
        let _ = writeln!(out, "{:8x}:\t{:016x}\t{}", pc, bits, fmt_bundle(&insns));
        pc += BUNDLE_SIZE_IN_BYTES as u64;
    }
    let rem = chunks.remainder();
    if !rem.is_empty() {
        let bytes: Vec<String> = rem.iter().map(|b| format!("{:02x}", b)).collect();
        let _ = writeln!(out, "{:8x}:\t{}\t<partial bundle>", pc, bytes.join(" "));
    }
    out
}
