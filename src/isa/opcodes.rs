//! Opcode descriptor table (subset of the architecture's 397 mnemonics,
//! covering every pipe and operand shape). Per-pipe fixed mask/value
//! pairs identify each opcode uniquely when decoding; the decode trees
//! are compiled from them at decoder construction.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::isa::operands::OperandId::{self, *};
use crate::isa::regs::{REG_LR, REG_ZERO};

bitflags! {
    /// The set of execution pipes an instruction may occupy.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PipeSet: u8 {
        const X0 = 1 << 0;
        const X1 = 1 << 1;
        const Y0 = 1 << 2;
        const Y1 = 1 << 3;
        const Y2 = 1 << 4;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pipe {
    X0 = 0,
    X1 = 1,
    Y0 = 2,
    Y1 = 3,
    Y2 = 4,
}

impl Pipe {
    pub const ALL: [Pipe; 5] = [Pipe::X0, Pipe::X1, Pipe::Y0, Pipe::Y1, Pipe::Y2];
    pub const Y_ALL: [Pipe; 3] = [Pipe::Y0, Pipe::Y1, Pipe::Y2];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn set(self) -> PipeSet {
        PipeSet::from_bits_retain(1 << self as u8)
    }

    pub fn name(self) -> &'static str {
        match self {
            Pipe::X0 => "X0",
            Pipe::X1 => "X1",
            Pipe::Y0 => "Y0",
            Pipe::Y1 => "Y1",
            Pipe::Y2 => "Y2",
        }
    }
}

pub struct OpcodeDesc {
    pub opc: Opc,
    pub mnemonic: &'static str,
    pub pipes: PipeSet,
    /// Register written unconditionally; `REG_ZERO` means none.
    pub implicit_write: u8,
    pub can_bundle: bool,
    /// Operand descriptors in syntactic order, per pipe; empty for pipes
    /// the opcode cannot occupy.
    pub operands: [&'static [OperandId]; 5],
    pub fixed_mask: [u64; 5],
    pub fixed_value: [u64; 5],
}

impl OpcodeDesc {
    pub fn operands_for(&self, pipe: Pipe) -> &'static [OperandId] {
        self.operands[pipe.index()]
    }

    /// Operand list of the lowest-numbered legal pipe; syntactic operand
    /// kinds and order are identical across pipes.
    pub fn syntax_operands(&self) -> &'static [OperandId] {
        for pipe in Pipe::ALL {
            if self.pipes.contains(pipe.set()) {
                return self.operands[pipe.index()];
            }
        }
        &[]
    }

    pub fn num_operands(&self) -> usize {
        self.syntax_operands().len()
    }
}

/// Padding and marker opcodes that never count as real work when policing
/// non-bundleable instructions.
pub fn is_padding(opc: Opc) -> bool {
    matches!(opc, Opc::Nop | Opc::Fnop | Opc::Info | Opc::Infol)
}

pub fn lookup_mnemonic(name: &str) -> Option<Opc> {
    OPCODES.iter().find(|d| d.mnemonic == name).map(|d| d.opc)
}

const NO_OPERANDS: &[OperandId] = &[];
const NOT_ENCODABLE: u64 = !0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opc {
    Bpt,
    Info,
    Infol,
    J,
    Jal,
    Jr,
    Jalr,
    Lnk,
    Iret,
    Bz,
    Bnz,
    Bzt,
    Add,
    Addi,
    Addli,
    Auli,
    Sub,
    And,
    Andi,
    Or,
    Ori,
    Nor,
    Xor,
    Seq,
    Sne,
    Slt,
    Shl,
    Shli,
    Shr,
    Shri,
    Sra,
    S1a,
    S2a,
    Mnz,
    Mvz,
    Mvnz,
    Mm,
    Move,
    Movei,
    Moveli,
    Lw,
    LwNa,
    Lb,
    LbU,
    Lh,
    LhU,
    Sw,
    Sb,
    Sh,
    Swadd,
    Prefetch,
    Mfspr,
    Mtspr,
    Nop,
    Fnop,
    Ill,
}

impl Opc {
    pub fn desc(self) -> &'static OpcodeDesc {
        &OPCODES[self as usize]
    }

    pub fn mnemonic(self) -> &'static str {
        self.desc().mnemonic
    }
}

pub static OPCODES: [OpcodeDesc; 56] = [
    OpcodeDesc {
        opc: Opc::Bpt,
        mnemonic: "bpt",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: false,
        operands: [NO_OPERANDS, NO_OPERANDS, NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfbffffff80000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x400b3cae00000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Info,
        mnemonic: "info",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[Imm8X0], &[Imm8X1], &[Imm8Y0], &[Imm8Y1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ff00fff,
            0xfff807ff80000000,
            0x8000000078000fff,
            0xf80007ff80000000,
            0,
        ],
        fixed_value: [
            0x0000000050100fff,
            0x302007ff80000000,
            0x8000000050000fff,
            0xc00007ff80000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Infol,
        mnemonic: "infol",
        pipes: PipeSet::from_bits_retain(0x3),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[Imm16X0], &[Imm16X1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0x8000000070000fff,
            0xf80007ff80000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            0x0000000030000fff,
            0x200007ff80000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::J,
        mnemonic: "j",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[JOffLongX1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xf000000000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x5000000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Jal,
        mnemonic: "jal",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_LR,
        can_bundle: true,
        operands: [NO_OPERANDS, &[JOffLongX1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xf000000000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x6000000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Jr,
        mnemonic: "jr",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[SrcAX1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfbfe000000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x0818000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Jalr,
        mnemonic: "jalr",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_LR,
        can_bundle: true,
        operands: [NO_OPERANDS, &[SrcAX1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfbfe000000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x0814000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Lnk,
        mnemonic: "lnk",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[DestX1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfffe000000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x081a000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Iret,
        mnemonic: "iret",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, NO_OPERANDS, NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfbfff80000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x400b480000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Bz,
        mnemonic: "bz",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[SrcAX1, BrOffX1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfc00000780000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x2800000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Bnz,
        mnemonic: "bnz",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[SrcAX1, BrOffX1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfc00000780000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x2800000100000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Bzt,
        mnemonic: "bzt",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[SrcAX1, BrOffX1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfc00000780000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x2800000080000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Add,
        mnemonic: "add",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x00000000000c0000,
            0x0806000000000000,
            0x8000000008000000,
            0x8800000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Addi,
        mnemonic: "addi",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, Imm8X0], &[DestX1, SrcAX1, Imm8X1], &[DestY0, SrcAY0, Imm8Y0], &[DestY1, SrcAY1, Imm8Y1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ff00000,
            0xfff8000000000000,
            0x8000000078000000,
            0xf800000000000000,
            0,
        ],
        fixed_value: [
            0x0000000040300000,
            0x3018000000000000,
            0x8000000048000000,
            0xb800000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Addli,
        mnemonic: "addli",
        pipes: PipeSet::from_bits_retain(0x3),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, Imm16X0], &[DestX1, SrcAX1, Imm16X1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0x8000000070000000,
            0xf800000000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            0x0000000020000000,
            0x1800000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Auli,
        mnemonic: "auli",
        pipes: PipeSet::from_bits_retain(0x3),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, Imm16X0], &[DestX1, SrcAX1, Imm16X1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0x8000000070000000,
            0xf800000000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            0x0000000030000000,
            0x2000000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Sub,
        mnemonic: "sub",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000001740000,
            0x087e000000000000,
            0x80000000080c0000,
            0x8806000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::And,
        mnemonic: "and",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000000180000,
            0x0808000000000000,
            0x8000000018000000,
            0x9800000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Andi,
        mnemonic: "andi",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, Imm8X0], &[DestX1, SrcAX1, Imm8X1], &[DestY0, SrcAY0, Imm8Y0], &[DestY1, SrcAY1, Imm8Y1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ff00000,
            0xfff8000000000000,
            0x8000000078000000,
            0xf800000000000000,
            0,
        ],
        fixed_value: [
            0x0000000050100000,
            0x3020000000000000,
            0x8000000050000000,
            0xc000000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Or,
        mnemonic: "or",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000000cc0000,
            0x0832000000000000,
            0x8000000018080000,
            0x9804000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Ori,
        mnemonic: "ori",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, Imm8X0], &[DestX1, SrcAX1, Imm8X1], &[DestY0, SrcAY0, Imm8Y0], &[DestY1, SrcAY1, Imm8Y1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ff00000,
            0xfff8000000000000,
            0x8000000078000000,
            0xf800000000000000,
            0,
        ],
        fixed_value: [
            0x0000000040800000,
            0x3058000000000000,
            0x8000000058000000,
            0xc800000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Nor,
        mnemonic: "nor",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000000c80000,
            0x0830000000000000,
            0x8000000018040000,
            0x9802000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Xor,
        mnemonic: "xor",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000001780000,
            0x0882000000000000,
            0x80000000180c0000,
            0x9806000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Seq,
        mnemonic: "seq",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000001080000,
            0x0846000000000000,
            0x8000000030080000,
            0xb004000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Sne,
        mnemonic: "sne",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x00000000015c0000,
            0x0872000000000000,
            0x80000000300c0000,
            0xb006000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Slt,
        mnemonic: "slt",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x00000000014c0000,
            0x086a000000000000,
            0x8000000028080000,
            0xa804000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Shl,
        mnemonic: "shl",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000001140000,
            0x084c000000000000,
            0x8000000020040000,
            0xa002000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Shli,
        mnemonic: "shli",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, ShAmtX0], &[DestX1, SrcAX1, ShAmtX1], &[DestY0, SrcAY0, ShAmtY0], &[DestY1, SrcAY1, ShAmtY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffe0000,
            0xffff000000000000,
            0x80000000780e0000,
            0xf807000000000000,
            0,
        ],
        fixed_value: [
            0x0000000070080000,
            0x4004000000000000,
            0x8000000068040000,
            0xd802000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Shr,
        mnemonic: "shr",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000001200000,
            0x0852000000000000,
            0x8000000020080000,
            0xa004000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Shri,
        mnemonic: "shri",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, ShAmtX0], &[DestX1, SrcAX1, ShAmtX1], &[DestY0, SrcAY0, ShAmtY0], &[DestY1, SrcAY1, ShAmtY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffe0000,
            0xffff000000000000,
            0x80000000780e0000,
            0xf807000000000000,
            0,
        ],
        fixed_value: [
            0x00000000700e0000,
            0x4007000000000000,
            0x8000000068060000,
            0xd803000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Sra,
        mnemonic: "sra",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000001680000,
            0x0878000000000000,
            0x80000000200c0000,
            0xa006000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::S1a,
        mnemonic: "s1a",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000000dc0000,
            0x083a000000000000,
            0x8000000008040000,
            0x8802000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::S2a,
        mnemonic: "s2a",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000000e00000,
            0x083c000000000000,
            0x8000000008080000,
            0x8804000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Mnz,
        mnemonic: "mnz",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0], &[DestX1, SrcAX1, SrcBX1], &[DestY0, SrcAY0, SrcBY0], &[DestY1, SrcAY1, SrcBY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0xfffe000000000000,
            0x80000000780c0000,
            0xf806000000000000,
            0,
        ],
        fixed_value: [
            0x0000000000540000,
            0x0828000000000000,
            0x8000000010000000,
            0x9002000000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Mvz,
        mnemonic: "mvz",
        pipes: PipeSet::from_bits_retain(0x5),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[SrcDestX0, SrcAX0, SrcBX0], NO_OPERANDS, &[SrcDestY0, SrcAY0, SrcBY0], NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0,
            0x80000000780c0000,
            0,
            0,
        ],
        fixed_value: [
            0x0000000000b80000,
            NOT_ENCODABLE,
            0x8000000010080000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Mvnz,
        mnemonic: "mvnz",
        pipes: PipeSet::from_bits_retain(0x5),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[SrcDestX0, SrcAX0, SrcBX0], NO_OPERANDS, &[SrcDestY0, SrcAY0, SrcBY0], NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0x800000007ffc0000,
            0,
            0x80000000780c0000,
            0,
            0,
        ],
        fixed_value: [
            0x0000000000b40000,
            NOT_ENCODABLE,
            0x8000000010040000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Mm,
        mnemonic: "mm",
        pipes: PipeSet::from_bits_retain(0x3),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0, SrcBX0, MmStartX0, MmEndX0], &[DestX1, SrcAX1, SrcBX1, MmStartX1, MmEndX1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0x8000000070000000,
            0xf800000000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            0x0000000060000000,
            0x3800000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Move,
        mnemonic: "move",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, SrcAX0], &[DestX1, SrcAX1], &[DestY0, SrcAY0], &[DestY1, SrcAY1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ffff000,
            0xfffff80000000000,
            0x80000000780ff000,
            0xf807f80000000000,
            0,
        ],
        fixed_value: [
            0x0000000000cff000,
            0x0833f80000000000,
            0x80000000180bf000,
            0x9805f80000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Movei,
        mnemonic: "movei",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, Imm8X0], &[DestX1, Imm8X1], &[DestY0, Imm8Y0], &[DestY1, Imm8Y1], NO_OPERANDS],
        fixed_mask: [
            0x800000007ff00fc0,
            0xfff807e000000000,
            0x8000000078000fc0,
            0xf80007e000000000,
            0,
        ],
        fixed_value: [
            0x0000000040800fc0,
            0x305807e000000000,
            0x8000000058000fc0,
            0xc80007e000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Moveli,
        mnemonic: "moveli",
        pipes: PipeSet::from_bits_retain(0x3),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [&[DestX0, Imm16X0], &[DestX1, Imm16X1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0x8000000070000fc0,
            0xf80007e000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            0x0000000020000fc0,
            0x180007e000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Lw,
        mnemonic: "lw",
        pipes: PipeSet::from_bits_retain(0x12),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[DestX1, SrcAX1], NO_OPERANDS, NO_OPERANDS, &[DestY2, SrcAY2]],
        fixed_mask: [
            0,
            0xfffff80000000000,
            0,
            0,
            0x8700000000000000,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x400b700000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            0x8400000000000000,
        ],
    },
    OpcodeDesc {
        opc: Opc::LwNa,
        mnemonic: "lw_na",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[DestX1, SrcAX1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfffff80000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x400bc00000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Lb,
        mnemonic: "lb",
        pipes: PipeSet::from_bits_retain(0x12),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[DestX1, SrcAX1], NO_OPERANDS, NO_OPERANDS, &[DestY2, SrcAY2]],
        fixed_mask: [
            0,
            0xfffff80000000000,
            0,
            0,
            0x8700000000000000,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x400b500000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            0x8000000000000000,
        ],
    },
    OpcodeDesc {
        opc: Opc::LbU,
        mnemonic: "lb_u",
        pipes: PipeSet::from_bits_retain(0x12),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[DestX1, SrcAX1], NO_OPERANDS, NO_OPERANDS, &[DestY2, SrcAY2]],
        fixed_mask: [
            0,
            0xfffff80000000000,
            0,
            0,
            0x8700000000000000,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x400b580000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            0x8100000000000000,
        ],
    },
    OpcodeDesc {
        opc: Opc::Lh,
        mnemonic: "lh",
        pipes: PipeSet::from_bits_retain(0x12),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[DestX1, SrcAX1], NO_OPERANDS, NO_OPERANDS, &[DestY2, SrcAY2]],
        fixed_mask: [
            0,
            0xfffff80000000000,
            0,
            0,
            0x8700000000000000,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x400b600000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            0x8200000000000000,
        ],
    },
    OpcodeDesc {
        opc: Opc::LhU,
        mnemonic: "lh_u",
        pipes: PipeSet::from_bits_retain(0x12),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[DestX1, SrcAX1], NO_OPERANDS, NO_OPERANDS, &[DestY2, SrcAY2]],
        fixed_mask: [
            0,
            0xfffff80000000000,
            0,
            0,
            0x8700000000000000,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x400b680000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            0x8300000000000000,
        ],
    },
    OpcodeDesc {
        opc: Opc::Sw,
        mnemonic: "sw",
        pipes: PipeSet::from_bits_retain(0x12),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[SrcAX1, SrcBX1], NO_OPERANDS, NO_OPERANDS, &[SrcAY2, SrcBY2]],
        fixed_mask: [
            0,
            0xfbfe000000000000,
            0,
            0,
            0x8700000000000000,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x0880000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            0x8700000000000000,
        ],
    },
    OpcodeDesc {
        opc: Opc::Sb,
        mnemonic: "sb",
        pipes: PipeSet::from_bits_retain(0x12),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[SrcAX1, SrcBX1], NO_OPERANDS, NO_OPERANDS, &[SrcAY2, SrcBY2]],
        fixed_mask: [
            0,
            0xfbfe000000000000,
            0,
            0,
            0x8700000000000000,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x0840000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            0x8500000000000000,
        ],
    },
    OpcodeDesc {
        opc: Opc::Sh,
        mnemonic: "sh",
        pipes: PipeSet::from_bits_retain(0x12),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[SrcAX1, SrcBX1], NO_OPERANDS, NO_OPERANDS, &[SrcAY2, SrcBY2]],
        fixed_mask: [
            0,
            0xfbfe000000000000,
            0,
            0,
            0x8700000000000000,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x0854000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            0x8600000000000000,
        ],
    },
    OpcodeDesc {
        opc: Opc::Swadd,
        mnemonic: "swadd",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[SrcDestX1, SrcBX1, DestImm8X1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfbf8000000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x30f0000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Prefetch,
        mnemonic: "prefetch",
        pipes: PipeSet::from_bits_retain(0x12),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[SrcAX1], NO_OPERANDS, NO_OPERANDS, &[SrcAY2]],
        fixed_mask: [
            0,
            0xfffff81f80000000,
            0,
            0,
            0x8700000003f00000,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x400b501f80000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            0x8000000003f00000,
        ],
    },
    OpcodeDesc {
        opc: Opc::Mfspr,
        mnemonic: "mfspr",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[DestX1, MfImm15X1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfbf8000000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x3038000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Mtspr,
        mnemonic: "mtspr",
        pipes: PipeSet::from_bits_retain(0x2),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, &[MtImm15X1, SrcAX1], NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfbf8000000000000,
            0,
            0,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x3050000000000000,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Nop,
        mnemonic: "nop",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, NO_OPERANDS, NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0x8000000077fff000,
            0xfbfff80000000000,
            0x80000000780ff000,
            0xf807f80000000000,
            0,
        ],
        fixed_value: [
            0x0000000070166000,
            0x400b880000000000,
            0x80000000680a6000,
            0xd805180000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Fnop,
        mnemonic: "fnop",
        pipes: PipeSet::from_bits_retain(0xf),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, NO_OPERANDS, NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0x8000000077fff000,
            0xfbfff80000000000,
            0x80000000780ff000,
            0xf807f80000000000,
            0,
        ],
        fixed_value: [
            0x0000000070165000,
            0x400b280000000000,
            0x80000000680a5000,
            0xd805080000000000,
            NOT_ENCODABLE,
        ],
    },
    OpcodeDesc {
        opc: Opc::Ill,
        mnemonic: "ill",
        pipes: PipeSet::from_bits_retain(0xa),
        implicit_write: REG_ZERO,
        can_bundle: true,
        operands: [NO_OPERANDS, NO_OPERANDS, NO_OPERANDS, NO_OPERANDS, NO_OPERANDS],
        fixed_mask: [
            0,
            0xfbfff80000000000,
            0,
            0xf807f80000000000,
            0,
        ],
        fixed_value: [
            NOT_ENCODABLE,
            0x400b380000000000,
            NOT_ENCODABLE,
            0xd805100000000000,
            NOT_ENCODABLE,
        ],
    },
];
