//! Operand descriptor table: one entry per distinct bundle bit-field.
//!
//! Field placement by pipe:
//!   X0  dest 0..5, srcA 6..11, srcB/imm/shamt from 12, mm spans 18..27
//!   X1  dest 31..36, srcA 37..42, srcB/imm/shamt from 43, mm spans 49..58
//!   Y0  dest 0..5, srcA 6..11, srcB/imm/shamt from 12
//!   Y1  dest 31..36, srcA 37..42, srcB/imm/shamt from 43
//!   Y2  srcBDest 20..25, srcA split over bit 26 and 51..55
//! Branch and SPR immediates in X1 are split fields; see the individual
//! insert functions.

use serde::{Deserialize, Serialize};

use crate::operand::{OperandDesc, OperandKind};
use crate::reloc::RelocKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandId {
    Imm8X0,
    Imm8X1,
    Imm8Y0,
    Imm8Y1,
    Imm16X0,
    Imm16X1,
    JOffLongX1,
    DestX0,
    SrcAX0,
    SrcBX0,
    DestX1,
    SrcAX1,
    SrcBX1,
    DestY0,
    SrcAY0,
    SrcBY0,
    DestY1,
    SrcAY1,
    SrcBY1,
    SrcAY2,
    /// SrcBDest_Y2 acting as a load destination.
    DestY2,
    /// SrcBDest_Y2 acting as a store data source.
    SrcBY2,
    BrOffX1,
    /// Dest_X0 read and written (conditional moves).
    SrcDestX0,
    /// SrcA_X1 read and written (swadd base register).
    SrcDestX1,
    /// Dest_Y0 read and written.
    SrcDestY0,
    MfImm15X1,
    MtImm15X1,
    MmStartX0,
    MmEndX0,
    MmStartX1,
    MmEndX1,
    ShAmtX0,
    ShAmtX1,
    ShAmtY0,
    ShAmtY1,
    DestImm8X1,
}

impl OperandId {
    pub fn desc(self) -> &'static OperandDesc {
        &OPERANDS[self as usize]
    }

    pub const COUNT: usize = 37;

    pub const ALL: [OperandId; Self::COUNT] = [
        OperandId::Imm8X0,
        OperandId::Imm8X1,
        OperandId::Imm8Y0,
        OperandId::Imm8Y1,
        OperandId::Imm16X0,
        OperandId::Imm16X1,
        OperandId::JOffLongX1,
        OperandId::DestX0,
        OperandId::SrcAX0,
        OperandId::SrcBX0,
        OperandId::DestX1,
        OperandId::SrcAX1,
        OperandId::SrcBX1,
        OperandId::DestY0,
        OperandId::SrcAY0,
        OperandId::SrcBY0,
        OperandId::DestY1,
        OperandId::SrcAY1,
        OperandId::SrcBY1,
        OperandId::SrcAY2,
        OperandId::DestY2,
        OperandId::SrcBY2,
        OperandId::BrOffX1,
        OperandId::SrcDestX0,
        OperandId::SrcDestX1,
        OperandId::SrcDestY0,
        OperandId::MfImm15X1,
        OperandId::MtImm15X1,
        OperandId::MmStartX0,
        OperandId::MmEndX0,
        OperandId::MmStartX1,
        OperandId::MmEndX1,
        OperandId::ShAmtX0,
        OperandId::ShAmtX1,
        OperandId::ShAmtY0,
        OperandId::ShAmtY1,
        OperandId::DestImm8X1,
    ];
}

fn insert_imm8_x0(v: u32) -> u64 {
    ((v as u64) & 0xff) << 12
}
fn extract_imm8_x0(b: u64) -> u32 {
    ((b >> 12) & 0xff) as u32
}

fn insert_imm8_x1(v: u32) -> u64 {
    ((v as u64) & 0xff) << 43
}
fn extract_imm8_x1(b: u64) -> u32 {
    ((b >> 43) & 0xff) as u32
}

fn insert_imm8_y0(v: u32) -> u64 {
    ((v as u64) & 0xff) << 12
}
fn extract_imm8_y0(b: u64) -> u32 {
    ((b >> 12) & 0xff) as u32
}

fn insert_imm8_y1(v: u32) -> u64 {
    ((v as u64) & 0xff) << 43
}
fn extract_imm8_y1(b: u64) -> u32 {
    ((b >> 43) & 0xff) as u32
}

fn insert_imm16_x0(v: u32) -> u64 {
    ((v as u64) & 0xffff) << 12
}
fn extract_imm16_x0(b: u64) -> u32 {
    ((b >> 12) & 0xffff) as u32
}

fn insert_imm16_x1(v: u32) -> u64 {
    ((v as u64) & 0xffff) << 43
}
fn extract_imm16_x1(b: u64) -> u32 {
    ((b >> 43) & 0xffff) as u32
}

fn insert_j_off_long_x1(v: u32) -> u64 {
    ((v as u64) & 0x1fff_ffff) << 31
}
fn extract_j_off_long_x1(b: u64) -> u32 {
    ((b >> 31) & 0x1fff_ffff) as u32
}

fn insert_dest_x0(v: u32) -> u64 {
    (v as u64) & 0x3f
}
fn extract_dest_x0(b: u64) -> u32 {
    (b & 0x3f) as u32
}

fn insert_src_a_x0(v: u32) -> u64 {
    ((v as u64) & 0x3f) << 6
}
fn extract_src_a_x0(b: u64) -> u32 {
    ((b >> 6) & 0x3f) as u32
}

fn insert_src_b_x0(v: u32) -> u64 {
    ((v as u64) & 0x3f) << 12
}
fn extract_src_b_x0(b: u64) -> u32 {
    ((b >> 12) & 0x3f) as u32
}

fn insert_dest_x1(v: u32) -> u64 {
    ((v as u64) & 0x3f) << 31
}
fn extract_dest_x1(b: u64) -> u32 {
    ((b >> 31) & 0x3f) as u32
}

fn insert_src_a_x1(v: u32) -> u64 {
    ((v as u64) & 0x3f) << 37
}
fn extract_src_a_x1(b: u64) -> u32 {
    ((b >> 37) & 0x3f) as u32
}

fn insert_src_b_x1(v: u32) -> u64 {
    ((v as u64) & 0x3f) << 43
}
fn extract_src_b_x1(b: u64) -> u32 {
    ((b >> 43) & 0x3f) as u32
}

fn insert_dest_y0(v: u32) -> u64 {
    (v as u64) & 0x3f
}
fn extract_dest_y0(b: u64) -> u32 {
    (b & 0x3f) as u32
}

fn insert_src_a_y0(v: u32) -> u64 {
    ((v as u64) & 0x3f) << 6
}
fn extract_src_a_y0(b: u64) -> u32 {
    ((b >> 6) & 0x3f) as u32
}

fn insert_src_b_y0(v: u32) -> u64 {
    ((v as u64) & 0x3f) << 12
}
fn extract_src_b_y0(b: u64) -> u32 {
    ((b >> 12) & 0x3f) as u32
}

fn insert_dest_y1(v: u32) -> u64 {
    ((v as u64) & 0x3f) << 31
}
fn extract_dest_y1(b: u64) -> u32 {
    ((b >> 31) & 0x3f) as u32
}

fn insert_src_a_y1(v: u32) -> u64 {
    ((v as u64) & 0x3f) << 37
}
fn extract_src_a_y1(b: u64) -> u32 {
    ((b >> 37) & 0x3f) as u32
}

fn insert_src_b_y1(v: u32) -> u64 {
    ((v as u64) & 0x3f) << 43
}
fn extract_src_b_y1(b: u64) -> u32 {
    ((b >> 43) & 0x3f) as u32
}

// The Y2 source A field straddles the two instruction half-words.
fn insert_src_a_y2(v: u32) -> u64 {
    (((v as u64) & 0x01) << 26) | ((((v as u64) >> 1) & 0x1f) << 51)
}
fn extract_src_a_y2(b: u64) -> u32 {
    (((b >> 26) & 0x01) | (((b >> 51) & 0x1f) << 1)) as u32
}

fn insert_src_b_dest_y2(v: u32) -> u64 {
    ((v as u64) & 0x3f) << 20
}
fn extract_src_b_dest_y2(b: u64) -> u32 {
    ((b >> 20) & 0x3f) as u32
}

// Branch offsets: low 15 bits in the immediate field, high 2 bits below
// the srcA field.
fn insert_br_off_x1(v: u32) -> u64 {
    (((v as u64) & 0x7fff) << 43) | ((((v as u64) >> 15) & 0x3) << 35)
}
fn extract_br_off_x1(b: u64) -> u32 {
    (((b >> 43) & 0x7fff) | (((b >> 35) & 0x3) << 15)) as u32
}

fn insert_mf_imm15_x1(v: u32) -> u64 {
    (((v as u64) & 0x3fff) << 37) | ((((v as u64) >> 14) & 0x1) << 58)
}
fn extract_mf_imm15_x1(b: u64) -> u32 {
    (((b >> 37) & 0x3fff) | (((b >> 58) & 0x1) << 14)) as u32
}

fn insert_mt_imm15_x1(v: u32) -> u64 {
    (((v as u64) & 0x3f) << 31)
        | ((((v as u64) >> 6) & 0xff) << 43)
        | ((((v as u64) >> 14) & 0x1) << 58)
}
fn extract_mt_imm15_x1(b: u64) -> u32 {
    (((b >> 31) & 0x3f) | (((b >> 43) & 0xff) << 6) | (((b >> 58) & 0x1) << 14)) as u32
}

fn insert_mm_start_x0(v: u32) -> u64 {
    ((v as u64) & 0x1f) << 23
}
fn extract_mm_start_x0(b: u64) -> u32 {
    ((b >> 23) & 0x1f) as u32
}

fn insert_mm_end_x0(v: u32) -> u64 {
    ((v as u64) & 0x1f) << 18
}
fn extract_mm_end_x0(b: u64) -> u32 {
    ((b >> 18) & 0x1f) as u32
}

fn insert_mm_start_x1(v: u32) -> u64 {
    ((v as u64) & 0x1f) << 54
}
fn extract_mm_start_x1(b: u64) -> u32 {
    ((b >> 54) & 0x1f) as u32
}

fn insert_mm_end_x1(v: u32) -> u64 {
    ((v as u64) & 0x1f) << 49
}
fn extract_mm_end_x1(b: u64) -> u32 {
    ((b >> 49) & 0x1f) as u32
}

fn insert_sh_amt_x0(v: u32) -> u64 {
    ((v as u64) & 0x1f) << 12
}
fn extract_sh_amt_x0(b: u64) -> u32 {
    ((b >> 12) & 0x1f) as u32
}

fn insert_sh_amt_x1(v: u32) -> u64 {
    ((v as u64) & 0x1f) << 43
}
fn extract_sh_amt_x1(b: u64) -> u32 {
    ((b >> 43) & 0x1f) as u32
}

fn insert_sh_amt_y0(v: u32) -> u64 {
    ((v as u64) & 0x1f) << 12
}
fn extract_sh_amt_y0(b: u64) -> u32 {
    ((b >> 12) & 0x1f) as u32
}

fn insert_sh_amt_y1(v: u32) -> u64 {
    ((v as u64) & 0x1f) << 43
}
fn extract_sh_amt_y1(b: u64) -> u32 {
    ((b >> 43) & 0x1f) as u32
}

fn insert_dest_imm8_x1(v: u32) -> u64 {
    (((v as u64) & 0x3f) << 31) | ((((v as u64) >> 6) & 0x3) << 49)
}
fn extract_dest_imm8_x1(b: u64) -> u32 {
    (((b >> 31) & 0x3f) | (((b >> 49) & 0x3) << 6)) as u32
}

const fn imm(reloc: RelocKind, num_bits: u8, insert: fn(u32) -> u64, extract: fn(u64) -> u32) -> OperandDesc {
    OperandDesc {
        kind: OperandKind::Immediate,
        reloc,
        num_bits,
        is_signed: true,
        is_src_reg: false,
        is_dest_reg: false,
        is_pc_relative: false,
        right_shift: 0,
        insert,
        extract,
    }
}

const fn uimm(reloc: RelocKind, num_bits: u8, insert: fn(u32) -> u64, extract: fn(u64) -> u32) -> OperandDesc {
    OperandDesc {
        kind: OperandKind::Immediate,
        reloc,
        num_bits,
        is_signed: false,
        is_src_reg: false,
        is_dest_reg: false,
        is_pc_relative: false,
        right_shift: 0,
        insert,
        extract,
    }
}

const fn reg(is_src: bool, is_dest: bool, insert: fn(u32) -> u64, extract: fn(u64) -> u32) -> OperandDesc {
    OperandDesc {
        kind: OperandKind::Register,
        reloc: RelocKind::None,
        num_bits: 6,
        is_signed: false,
        is_src_reg: is_src,
        is_dest_reg: is_dest,
        is_pc_relative: false,
        right_shift: 0,
        insert,
        extract,
    }
}

const fn pcrel(reloc: RelocKind, num_bits: u8, insert: fn(u32) -> u64, extract: fn(u64) -> u32) -> OperandDesc {
    OperandDesc {
        kind: OperandKind::Address,
        reloc,
        num_bits,
        is_signed: true,
        is_src_reg: false,
        is_dest_reg: false,
        is_pc_relative: true,
        right_shift: crate::LOG2_BUNDLE_SIZE_IN_BYTES,
        insert,
        extract,
    }
}

const fn spr(reloc: RelocKind, insert: fn(u32) -> u64, extract: fn(u64) -> u32) -> OperandDesc {
    OperandDesc {
        kind: OperandKind::SpecialRegister,
        reloc,
        num_bits: 15,
        is_signed: false,
        is_src_reg: false,
        is_dest_reg: false,
        is_pc_relative: false,
        right_shift: 0,
        insert,
        extract,
    }
}

/// Indexed by `OperandId as usize`; keep the order in sync with the enum.
static OPERANDS: [OperandDesc; OperandId::COUNT] = [
    imm(RelocKind::Imm8X0, 8, insert_imm8_x0, extract_imm8_x0),
    imm(RelocKind::Imm8X1, 8, insert_imm8_x1, extract_imm8_x1),
    imm(RelocKind::Imm8Y0, 8, insert_imm8_y0, extract_imm8_y0),
    imm(RelocKind::Imm8Y1, 8, insert_imm8_y1, extract_imm8_y1),
    imm(RelocKind::Imm16X0, 16, insert_imm16_x0, extract_imm16_x0),
    imm(RelocKind::Imm16X1, 16, insert_imm16_x1, extract_imm16_x1),
    pcrel(RelocKind::JOffLongX1, 29, insert_j_off_long_x1, extract_j_off_long_x1),
    reg(false, true, insert_dest_x0, extract_dest_x0),
    reg(true, false, insert_src_a_x0, extract_src_a_x0),
    reg(true, false, insert_src_b_x0, extract_src_b_x0),
    reg(false, true, insert_dest_x1, extract_dest_x1),
    reg(true, false, insert_src_a_x1, extract_src_a_x1),
    reg(true, false, insert_src_b_x1, extract_src_b_x1),
    reg(false, true, insert_dest_y0, extract_dest_y0),
    reg(true, false, insert_src_a_y0, extract_src_a_y0),
    reg(true, false, insert_src_b_y0, extract_src_b_y0),
    reg(false, true, insert_dest_y1, extract_dest_y1),
    reg(true, false, insert_src_a_y1, extract_src_a_y1),
    reg(true, false, insert_src_b_y1, extract_src_b_y1),
    reg(true, false, insert_src_a_y2, extract_src_a_y2),
    reg(false, true, insert_src_b_dest_y2, extract_src_b_dest_y2),
    reg(true, false, insert_src_b_dest_y2, extract_src_b_dest_y2),
    pcrel(RelocKind::BrOffX1, 17, insert_br_off_x1, extract_br_off_x1),
    reg(true, true, insert_dest_x0, extract_dest_x0),
    reg(true, true, insert_src_a_x1, extract_src_a_x1),
    reg(true, true, insert_dest_y0, extract_dest_y0),
    spr(RelocKind::MfImm15X1, insert_mf_imm15_x1, extract_mf_imm15_x1),
    spr(RelocKind::MtImm15X1, insert_mt_imm15_x1, extract_mt_imm15_x1),
    uimm(RelocKind::MmStartX0, 5, insert_mm_start_x0, extract_mm_start_x0),
    uimm(RelocKind::MmEndX0, 5, insert_mm_end_x0, extract_mm_end_x0),
    uimm(RelocKind::MmStartX1, 5, insert_mm_start_x1, extract_mm_start_x1),
    uimm(RelocKind::MmEndX1, 5, insert_mm_end_x1, extract_mm_end_x1),
    uimm(RelocKind::ShAmtX0, 5, insert_sh_amt_x0, extract_sh_amt_x0),
    uimm(RelocKind::ShAmtX1, 5, insert_sh_amt_x1, extract_sh_amt_x1),
    uimm(RelocKind::ShAmtY0, 5, insert_sh_amt_y0, extract_sh_amt_y0),
    uimm(RelocKind::ShAmtY1, 5, insert_sh_amt_y1, extract_sh_amt_y1),
    imm(RelocKind::DestImm8X1, 8, insert_dest_imm8_x1, extract_dest_imm8_x1),
];
