//! Bundle decoding. Each pipe gets a decision tree compiled from the
//! per-pipe fixed mask/value pairs of the opcode table: a node inspects
//! a span of undecided bits and branches on its value, until the bits
//! examined so far pin down a single opcode. Opcodes whose encodings
//! nest (move inside or, movei inside ori) are resolved in favor of the
//! one with more fixed bits, so the specific form wins.

use std::collections::HashMap;

use crate::isa::opcodes::{Opc, Pipe, OPCODES};
use crate::isa::operands::OperandId;
use crate::operand::sign_extend;
use crate::BUNDLE_Y_ENCODING_MASK;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInsn {
    pub pipe: Pipe,
    /// `None` when the bundle bits match no opcode in this pipe.
    pub opcode: Option<Opc>,
    /// Decoded operand values in syntactic order. Signed fields are
    /// sign-extended; pc-relative fields hold the absolute target.
    pub operands: Vec<(OperandId, i64)>,
}

enum Node {
    Fail,
    Match(Opc),
    Branch {
        start: u8,
        width: u8,
        children: Box<[u32]>,
    },
}

struct PipeFsm {
    nodes: Vec<Node>,
    root: u32,
}

/// Span width cap keeps every branch table at 64 entries or fewer.
const MAX_SPAN_BITS: u8 = 6;

impl PipeFsm {
    fn build(pipe: Pipe) -> Self {
        let candidates: Vec<usize> = OPCODES
            .iter()
            .enumerate()
            .filter(|(_, d)| d.pipes.contains(pipe.set()))
            .map(|(i, _)| i)
            .collect();
        let mut fsm = PipeFsm { nodes: vec![Node::Fail], root: 0 };
        let mut memo = HashMap::new();
        fsm.root = fsm.build_node(pipe, &candidates, 0, &mut memo);
        fsm
    }

    /// Builds the subtree for `candidates`, of which every one matches
    /// the bits covered by `decided`. Returns the node index.
    ///
    /// Spans are picked from the bits every surviving candidate fixes,
    /// so each branch strictly partitions the set; only once no shared
    /// fixed bits remain, among a handful of nested encodings, does a
    /// candidate flow into more than one child. Subtrees are memoized
    /// on (candidates, decided) so those duplicates share one node.
    fn build_node(
        &mut self,
        pipe: Pipe,
        candidates: &[usize],
        decided: u64,
        memo: &mut HashMap<(Vec<usize>, u64), u32>,
    ) -> u32 {
        if candidates.is_empty() {
            return 0;
        }
        let key = (candidates.to_vec(), decided);
        if let Some(&node) = memo.get(&key) {
            return node;
        }
        let mut union_rem = 0u64;
        let mut inter_rem = !0u64;
        for &c in candidates {
            let rem = OPCODES[c].fixed_mask[pipe.index()] & !decided;
            union_rem |= rem;
            inter_rem &= rem;
        }
        if union_rem == 0 {
            // No bits left to distinguish the survivors: the encodings
            // nest, and the opcode with the most fixed bits is the most
            // specific match.
            let best = candidates
                .iter()
                .copied()
                .max_by_key(|&c| OPCODES[c].fixed_mask[pipe.index()].count_ones())
                .unwrap();
            self.nodes.push(Node::Match(OPCODES[best].opc));
            let node = (self.nodes.len() - 1) as u32;
            memo.insert(key, node);
            return node;
        }

        let pool = if inter_rem != 0 { inter_rem } else { union_rem };
        let start = pool.trailing_zeros() as u8;
        let mut width = 0u8;
        while width < MAX_SPAN_BITS
            && start + width < 64
            && pool >> (start + width) & 1 == 1
        {
            width += 1;
        }
        let span_mask = ((1u64 << width) - 1) << start;

        let slot = self.nodes.len();
        self.nodes.push(Node::Fail); // placeholder
        let mut children = Vec::with_capacity(1 << width);
        for field in 0..(1u64 << width) {
            let sub: Vec<usize> = candidates
                .iter()
                .copied()
                .filter(|&c| {
                    let care = OPCODES[c].fixed_mask[pipe.index()] & span_mask;
                    let want = OPCODES[c].fixed_value[pipe.index()] & care;
                    (field << start) & care == want
                })
                .collect();
            children.push(self.build_node(pipe, &sub, decided | span_mask, memo));
        }
        self.nodes[slot] = Node::Branch {
            start,
            width,
            children: children.into_boxed_slice(),
        };
        memo.insert(key, slot as u32);
        slot as u32
    }

    fn lookup(&self, bits: u64) -> Option<Opc> {
        let mut node = self.root;
        loop {
            match &self.nodes[node as usize] {
                Node::Fail => return None,
                Node::Match(opc) => return Some(*opc),
                Node::Branch { start, width, children } => {
                    let field = bits >> start & ((1u64 << width) - 1);
                    node = children[field as usize];
                }
            }
        }
    }
}

pub struct BundleDecoder {
    fsms: [PipeFsm; 5],
}

impl Default for BundleDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleDecoder {
    pub fn new() -> Self {
        BundleDecoder {
            fsms: [
                PipeFsm::build(Pipe::X0),
                PipeFsm::build(Pipe::X1),
                PipeFsm::build(Pipe::Y0),
                PipeFsm::build(Pipe::Y1),
                PipeFsm::build(Pipe::Y2),
            ],
        }
    }

    /// Identifies the opcode occupying `pipe` in `bits`, ignoring the
    /// X/Y selector bit.
    pub fn decode_pipe(&self, bits: u64, pipe: Pipe) -> Option<Opc> {
        self.fsms[pipe.index()].lookup(bits)
    }

    /// Decodes every slot of one bundle word. The top bit selects the
    /// encoding: Y bundles carry pipes Y0, Y1 and Y2, X bundles X0 and
    /// X1. Slots whose bits match no opcode decode with `opcode: None`.
    pub fn decode_bundle(&self, bits: u64, pc: u64) -> Vec<DecodedInsn> {
        let pipes: &[Pipe] = if bits & BUNDLE_Y_ENCODING_MASK != 0 {
            &Pipe::Y_ALL
        } else {
            &[Pipe::X0, Pipe::X1]
        };
        pipes
            .iter()
            .map(|&pipe| {
                let opcode = self.decode_pipe(bits, pipe);
                let operands = match opcode {
                    Some(opc) => opc
                        .desc()
                        .operands_for(pipe)
                        .iter()
                        .map(|&id| (id, decode_operand(id, bits, pc)))
                        .collect(),
                    None => Vec::new(),
                };
                DecodedInsn { pipe, opcode, operands }
            })
            .collect()
    }
}

/// Recovers one operand's logical value from bundle bits.
pub fn decode_operand(id: OperandId, bits: u64, pc: u64) -> i64 {
    let desc = id.desc();
    let raw = (desc.extract)(bits);
    let value = if desc.is_signed {
        sign_extend(raw, desc.num_bits) as i64
    } else {
        raw as i64
    };
    if desc.is_pc_relative {
        (value << desc.right_shift).wrapping_add(pc as i64)
    } else {
        value
    }
}
