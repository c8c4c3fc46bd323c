//! Deferred relocation fixups and the value-to-operand patch bridge.
//!
//! The external relocation processor computes final values (symbol
//! address, addend, PC adjustments); this module owns the only piece of
//! bit-layout knowledge it needs: which operand field to patch and how.

use serde::{Deserialize, Serialize};

use crate::expr::{Expr, ExprMod};
use crate::isa::operands::OperandId;

/// ELF relocation types for TILEPro operand fields (subset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelocKind {
    None = 0,
    BrOffX1 = 14,
    JOffLongX1 = 15,
    JOffLongX1Plt = 16,
    Imm8X0 = 17,
    Imm8Y0 = 18,
    Imm8X1 = 19,
    Imm8Y1 = 20,
    MtImm15X1 = 21,
    MfImm15X1 = 22,
    Imm16X0 = 23,
    Imm16X1 = 24,
    Imm16X0Lo = 25,
    Imm16X1Lo = 26,
    Imm16X0Hi = 27,
    Imm16X1Hi = 28,
    Imm16X0Ha = 29,
    Imm16X1Ha = 30,
    Imm16X0Got = 41,
    Imm16X1Got = 42,
    MmStartX0 = 49,
    MmEndX0 = 50,
    MmStartX1 = 51,
    MmEndX1 = 52,
    ShAmtX0 = 53,
    ShAmtX1 = 54,
    ShAmtY0 = 55,
    ShAmtY1 = 56,
    DestImm8X1 = 57,
}

impl RelocKind {
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Relocation kind after an assembler operator is applied to the
    /// symbolic operand, or None when the combination is meaningless
    /// (e.g. `lo16` on a branch offset).
    pub fn with_modifier(self, m: ExprMod) -> Option<RelocKind> {
        Some(match (self, m) {
            (RelocKind::Imm16X0, ExprMod::Lo16) => RelocKind::Imm16X0Lo,
            (RelocKind::Imm16X1, ExprMod::Lo16) => RelocKind::Imm16X1Lo,
            (RelocKind::Imm16X0, ExprMod::Hi16) => RelocKind::Imm16X0Hi,
            (RelocKind::Imm16X1, ExprMod::Hi16) => RelocKind::Imm16X1Hi,
            (RelocKind::Imm16X0, ExprMod::Ha16) => RelocKind::Imm16X0Ha,
            (RelocKind::Imm16X1, ExprMod::Ha16) => RelocKind::Imm16X1Ha,
            (RelocKind::Imm16X0, ExprMod::Got) => RelocKind::Imm16X0Got,
            (RelocKind::Imm16X1, ExprMod::Got) => RelocKind::Imm16X1Got,
            (RelocKind::JOffLongX1, ExprMod::Plt) => RelocKind::JOffLongX1Plt,
            _ => return None,
        })
    }
}

/// A deferred instruction to patch one operand field of an already-emitted
/// bundle once the symbolic value becomes known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixup {
    /// Byte offset of the 8-byte bundle within the emitted code.
    pub offset: u64,
    pub operand: OperandId,
    pub kind: RelocKind,
    pub expr: Expr,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RelocError {
    #[error("relocation value {value:#x} overflows {bits}-bit operand field (truncated)")]
    Overflow { value: i64, bits: u8 },
    #[error("fixup offset {0:#x} past end of code")]
    BadOffset(u64),
}

/// Patch `value` into `operand`'s field of the bundle at `offset`.
///
/// The caller has already folded symbol address, addend and PC basis into
/// `value`. On overflow the field is still patched with the truncated
/// value and the error is returned for diagnostic reporting; downstream
/// tools are expected to see best-effort output flagged as faulty rather
/// than a hole.
pub fn apply_fixup(
    code: &mut [u8],
    offset: u64,
    operand: OperandId,
    value: i64,
) -> Result<(), RelocError> {
    let off = offset as usize;
    let end = off.checked_add(8).ok_or(RelocError::BadOffset(offset))?;
    if end > code.len() {
        return Err(RelocError::BadOffset(offset));
    }
    let desc = operand.desc();
    let (bits, overflow) = match desc.check_range(value) {
        Ok(raw) => ((desc.insert)(raw), None),
        Err(_) => (
            desc.encode_truncated(value),
            Some(RelocError::Overflow {
                value,
                bits: desc.num_bits,
            }),
        ),
    };
    // Clear the field before patching so re-applying a fixup replaces the
    // previous value instead of OR-merging with it.
    let field_mask = (desc.insert)(u32::MAX);
    let mut word = u64::from_le_bytes(code[off..end].try_into().expect("length checked"));
    word = (word & !field_mask) | bits;
    code[off..end].copy_from_slice(&word.to_le_bytes());
    match overflow {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
