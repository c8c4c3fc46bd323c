use serde::{Deserialize, Serialize};

use crate::reloc::RelocKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperandKind {
    Register,
    Immediate,
    Address,
    SpecialRegister,
}

/// Describes one encodable field of a bundle: its width and signedness,
/// the register/address semantics attached to it, and the pure functions
/// that place raw field bits into a bundle word and pull them back out.
///
/// `insert` only ever touches the field's own bits; callers OR the result
/// into the word. `extract(insert(v)) == v` for any in-range raw value.
pub struct OperandDesc {
    pub kind: OperandKind,
    /// Relocation emitted when this field is filled from a symbol.
    pub reloc: RelocKind,
    pub num_bits: u8,
    pub is_signed: bool,
    pub is_src_reg: bool,
    pub is_dest_reg: bool,
    pub is_pc_relative: bool,
    /// Low bits of the logical value that are implicit zero (PC-relative
    /// scaling). The raw field holds `value >> right_shift`.
    pub right_shift: u8,
    pub insert: fn(u32) -> u64,
    pub extract: fn(u64) -> u32,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RangeError {
    #[error("value {value} out of range [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

impl OperandDesc {
    /// Inclusive legal range of the logical (pre-shift) value.
    pub fn value_range(&self) -> (i64, i64) {
        let n = self.num_bits as u32;
        let (lo, hi) = if self.is_signed {
            (-(1i64 << (n - 1)), (1i64 << (n - 1)) - 1)
        } else {
            (0, (1i64 << n) - 1)
        };
        (lo << self.right_shift, hi << self.right_shift)
    }

    /// Two's-complement range check. Returns the raw field bits on success.
    pub fn check_range(&self, value: i64) -> Result<u32, RangeError> {
        let shifted = value >> self.right_shift;
        let n = self.num_bits as u32;
        let (min, max) = if self.is_signed {
            (-(1i64 << (n - 1)), (1i64 << (n - 1)) - 1)
        } else {
            (0, (1i64 << n) - 1)
        };
        if shifted < min || shifted > max {
            return Err(RangeError::OutOfRange { value, min, max });
        }
        Ok((shifted as u64 & ((1u64 << n) - 1)) as u32)
    }

    /// Range-check `value` and place it into its bundle position.
    pub fn encode(&self, value: i64) -> Result<u64, RangeError> {
        Ok((self.insert)(self.check_range(value)?))
    }

    /// Truncating variant used for best-effort relocation patching: the
    /// field is filled with the low bits even when the value overflows.
    pub fn encode_truncated(&self, value: i64) -> u64 {
        let shifted = (value >> self.right_shift) as u64;
        (self.insert)((shifted & ((1u64 << self.num_bits) - 1)) as u32)
    }
}

/// Sign-extend the low `bits` bits of `v`.
pub fn sign_extend(v: u32, bits: u8) -> i32 {
    let s = 32 - bits as u32;
    ((v << s) as i32) >> s
}

#[cfg(test)]
mod tests {
    use super::sign_extend;

    #[test]
    fn sign_extend_basics() {
        assert_eq!(sign_extend(0x7f, 8), 127);
        assert_eq!(sign_extend(0x80, 8), -128);
        assert_eq!(sign_extend(0xff, 8), -1);
        assert_eq!(sign_extend(0x1ffff, 17), -1);
    }
}
