pub mod asm;
pub mod bundler;
pub mod decoder;
pub mod disasm;
pub mod expr;
pub mod operand;
pub mod reloc;

pub mod isa {
    pub mod opcodes;
    pub mod operands;
    pub mod regs;
    pub mod sprs;
    pub mod templates;
}

/// One VLIW bundle is a single 64-bit little-endian word.
pub const BUNDLE_SIZE_IN_BYTES: usize = 8;
pub const LOG2_BUNDLE_SIZE_IN_BYTES: u8 = 3;
pub const MAX_INSTRUCTIONS_PER_BUNDLE: usize = 3;

/// Bit 63 of the bundle word selects X-encoding (0) vs Y-encoding (1).
pub const BUNDLE_Y_ENCODING_MASK: u64 = 1 << 63;

pub use asm::{Assembler, AsmOptions, Assembly, Diagnostic, Severity};
pub use bundler::{BundleError, Bundler, BundlerOptions, OperandValue, PendingInsn};
pub use decoder::{BundleDecoder, DecodedInsn};
pub use isa::opcodes::{Opc, OpcodeDesc, Pipe, PipeSet};
pub use reloc::{Fixup, RelocKind};
