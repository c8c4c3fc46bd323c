//! Instruction bundling. Instructions arrive one at a time; outside an
//! explicit group each is padded out and emitted on its own, inside a
//! group (`{ ... }` in assembly) they accumulate until the group closes
//! and are then laid out into a single 64-bit bundle word.
//!
//! Layout selection walks the template list in priority order and takes
//! the first template whose slots, position by position, are pipes the
//! corresponding instruction can occupy. A two-wide Y layout leaves its
//! third pipe to a synthesized fnop.

use thiserror::Error;
use tracing::warn;

use crate::expr::Expr;
use crate::isa::opcodes::{is_padding, Opc};
use crate::isa::operands::OperandId;
use crate::isa::regs::{self, NONWRITABLE_REGS, REG_ZERO};
use crate::isa::templates::{BundleTemplate, BUNDLE_TEMPLATES};
use crate::operand::RangeError;
use crate::reloc::Fixup;
use crate::{BUNDLE_SIZE_IN_BYTES, MAX_INSTRUCTIONS_PER_BUNDLE};

#[derive(Debug, Clone, PartialEq)]
pub enum OperandValue {
    Reg(u8),
    Imm(i64),
    /// Symbolic value, resolved later through a fixup.
    Sym(Expr),
}

/// An instruction accepted by the bundler but not yet laid out.
#[derive(Debug, Clone)]
pub struct PendingInsn {
    pub opcode: Opc,
    pub operands: Vec<OperandValue>,
    /// Source line, carried through for diagnostics.
    pub line: u32,
}

#[derive(Debug, Clone, Default)]
pub struct BundlerOptions {
    /// Demote same-register write conflicts from errors to warnings.
    pub allow_suspicious_bundles: bool,
}

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("too many instructions for one bundle (at most {MAX_INSTRUCTIONS_PER_BUNDLE})")]
    TooManyInstructions,
    #[error("illegal bundle: {0}")]
    IllegalBundle(&'static str),
    #[error("found no bundle layout for {{ {0} }}")]
    NoValidLayout(String),
    #[error("multiple instructions in bundle write register {0}")]
    ConflictingWrites(String),
    #[error("register {0} is not writable")]
    NonWritableRegister(&'static str),
    #[error("operand {index} of {mnemonic}: {source}")]
    OperandRange {
        mnemonic: &'static str,
        index: usize,
        #[source]
        source: RangeError,
    },
    #[error("bundle would start at misaligned offset {0:#x}")]
    Misaligned(u64),
}

impl BundleError {
    /// Fatal errors leave the output stream unusable; everything else is
    /// reported and skipped so assembly can continue.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BundleError::Misaligned(_))
    }
}

pub struct Bundler {
    opts: BundlerOptions,
    pending: Vec<PendingInsn>,
    in_group: bool,
    out: Vec<u8>,
    fixups: Vec<Fixup>,
}

impl Bundler {
    pub fn new(opts: BundlerOptions) -> Self {
        Bundler {
            opts,
            pending: Vec::new(),
            in_group: false,
            out: Vec::new(),
            fixups: Vec::new(),
        }
    }

    /// Options take effect at the next flush, so directives may toggle
    /// them between bundles.
    pub fn options_mut(&mut self) -> &mut BundlerOptions {
        &mut self.opts
    }

    /// Byte offset the next bundle will be emitted at.
    pub fn offset(&self) -> u64 {
        self.out.len() as u64
    }

    pub fn in_group(&self) -> bool {
        self.in_group
    }

    /// Consume the bundler, yielding emitted code and pending fixups.
    /// An open group is the caller's error to have reported already.
    pub fn finish(mut self) -> Result<(Vec<u8>, Vec<Fixup>), BundleError> {
        self.flush()?;
        Ok((self.out, self.fixups))
    }

    /// Accept one instruction. Outside a group it is emitted immediately
    /// as its own bundle; inside a group it is queued until `end_group`.
    pub fn push(&mut self, insn: PendingInsn) -> Result<(), BundleError> {
        if self.in_group && self.pending.len() >= MAX_INSTRUCTIONS_PER_BUNDLE {
            // Force-flush the full bundle and open a new one with the
            // overflowing instruction, so the error drops no code.
            let flushed = self.flush();
            self.pending.push(insn);
            return flushed.and(Err(BundleError::TooManyInstructions));
        }
        self.pending.push(insn);
        if self.in_group {
            Ok(())
        } else {
            self.flush()
        }
    }

    pub fn begin_group(&mut self) -> Result<(), BundleError> {
        if self.in_group {
            return Err(BundleError::IllegalBundle("nested '{'"));
        }
        self.in_group = true;
        Ok(())
    }

    pub fn end_group(&mut self) -> Result<(), BundleError> {
        if !self.in_group {
            return Err(BundleError::IllegalBundle("unmatched '}'"));
        }
        self.in_group = false;
        self.flush()
    }

    /// Lay out and emit the pending instructions as one bundle. The
    /// pending queue is cleared whether or not emission succeeds, so a
    /// reported error does not cascade into the following bundles.
    fn flush(&mut self) -> Result<(), BundleError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let insns = std::mem::take(&mut self.pending);
        self.emit(insns)
    }

    fn emit(&mut self, mut insns: Vec<PendingInsn>) -> Result<(), BundleError> {
        if self.offset() % BUNDLE_SIZE_IN_BYTES as u64 != 0 {
            return Err(BundleError::Misaligned(self.offset()));
        }

        // An instruction marked non-bundleable tolerates only padding
        // besides itself.
        let non_padding = insns.iter().filter(|i| !is_padding(i.opcode)).count();
        if non_padding > 1 && insns.iter().any(|i| !i.opcode.desc().can_bundle) {
            if self.opts.allow_suspicious_bundles {
                warn!("non-bundleable instruction grouped with others");
            } else {
                return Err(BundleError::IllegalBundle(
                    "instruction cannot be bundled with others",
                ));
            }
        }

        // A lone instruction still needs a full-width bundle; pad with
        // fnop, or with nop when fnop may not share a bundle with it.
        if insns.len() == 1 {
            let pad = if insns[0].opcode.desc().can_bundle {
                Opc::Fnop
            } else {
                Opc::Nop
            };
            let line = insns[0].line;
            insns.insert(0, PendingInsn { opcode: pad, operands: Vec::new(), line });
        }

        let template = match self.pick_template(&insns) {
            Some(t) => t,
            None => {
                let names: Vec<&str> =
                    insns.iter().map(|i| i.opcode.mnemonic()).collect();
                return Err(BundleError::NoValidLayout(names.join(" ; ")));
            }
        };

        let mut bits = 0u64;
        if template.is_y() && template.width == 2 {
            // The unoccupied Y pipe gets an fnop. Pipes Y0, Y1, Y2 have
            // indices 2, 3 and 4, summing to 9.
            let missing = 9 - template.pipes[0].index() - template.pipes[1].index();
            bits |= Opc::Fnop.desc().fixed_value[missing];
        }

        let pc = self.offset();
        let mut written: u64 = 0;
        let mut fixups = Vec::new();
        for (insn, &pipe) in insns.iter().zip(template.slots()) {
            let desc = insn.opcode.desc();
            bits |= desc.fixed_value[pipe.index()];

            let ids = desc.operands_for(pipe);
            if ids.len() != insn.operands.len() {
                return Err(BundleError::IllegalBundle("operand count mismatch"));
            }
            for (index, (&id, value)) in ids.iter().zip(&insn.operands).enumerate() {
                bits |= encode_operand(insn, id, index, value, pc, &mut fixups)?;
            }

            self.note_writes(insn, ids, &mut written)?;
        }

        // Fixups only become real once the bundle is emitted.
        self.fixups.append(&mut fixups);
        self.out.extend_from_slice(&bits.to_le_bytes());
        Ok(())
    }

    fn pick_template(&self, insns: &[PendingInsn]) -> Option<&'static BundleTemplate> {
        BUNDLE_TEMPLATES.iter().find(|t| {
            t.width == insns.len()
                && insns
                    .iter()
                    .zip(t.slots())
                    .all(|(i, &p)| i.opcode.desc().pipes.contains(p.set()))
        })
    }

    /// Track destination registers and flag a register written twice in
    /// the same bundle. The zero register absorbs any number of writes.
    fn note_writes(
        &self,
        insn: &PendingInsn,
        ids: &[OperandId],
        written: &mut u64,
    ) -> Result<(), BundleError> {
        let mut record = |reg: u8| -> Result<(), BundleError> {
            if reg == REG_ZERO {
                return Ok(());
            }
            let bit = 1u64 << reg;
            if *written & bit != 0 {
                if self.opts.allow_suspicious_bundles {
                    warn!(register = regs::name(reg), "suspicious bundle: register written twice");
                } else {
                    return Err(BundleError::ConflictingWrites(regs::name(reg).to_string()));
                }
            }
            *written |= bit;
            Ok(())
        };

        let desc = insn.opcode.desc();
        if desc.implicit_write != REG_ZERO {
            record(desc.implicit_write)?;
        }
        for (&id, value) in ids.iter().zip(&insn.operands) {
            if let (true, OperandValue::Reg(r)) = (id.desc().is_dest_reg, value) {
                record(*r)?;
            }
        }
        Ok(())
    }
}

/// Encode one operand into its field, or record a fixup when the value
/// is symbolic. Returns the field bits to OR into the bundle.
fn encode_operand(
    insn: &PendingInsn,
    id: OperandId,
    index: usize,
    value: &OperandValue,
    pc: u64,
    fixups: &mut Vec<Fixup>,
) -> Result<u64, BundleError> {
    let odesc = id.desc();
    let range_err = |source| BundleError::OperandRange {
        mnemonic: insn.opcode.mnemonic(),
        index,
        source,
    };
    match value {
        OperandValue::Reg(r) => {
            if odesc.is_dest_reg && NONWRITABLE_REGS.contains(r) {
                return Err(BundleError::NonWritableRegister(regs::name(*r)));
            }
            Ok((odesc.insert)(*r as u32))
        }
        OperandValue::Imm(v) => {
            let logical = if odesc.is_pc_relative {
                v.wrapping_sub(pc as i64)
            } else {
                *v
            };
            odesc.encode(logical).map_err(range_err)
        }
        OperandValue::Sym(expr) => {
            let kind = match expr.modifier() {
                Some(m) => odesc
                    .reloc
                    .with_modifier(m)
                    .ok_or(BundleError::IllegalBundle(
                        "modifier not valid for this operand",
                    ))?,
                None => odesc.reloc,
            };
            fixups.push(Fixup {
                offset: pc,
                operand: id,
                kind,
                expr: expr.clone(),
            });
            Ok(0)
        }
    }
}
