//! Bundle layout templates. A template assigns each instruction of a
//! group to a pipe, in positional order. Templates are tried in priority
//! order; two-wide Y layouts come first so that a pair fitting the Y
//! encoding leaves the X pipes free for instructions that need them.

use crate::isa::opcodes::Pipe;

#[derive(Debug, Clone, Copy)]
pub struct BundleTemplate {
    pub pipes: [Pipe; 3],
    pub width: usize,
}

impl BundleTemplate {
    const fn two(a: Pipe, b: Pipe) -> Self {
        BundleTemplate { pipes: [a, b, Pipe::X0], width: 2 }
    }

    const fn three(a: Pipe, b: Pipe, c: Pipe) -> Self {
        BundleTemplate { pipes: [a, b, c], width: 3 }
    }

    pub fn slots(&self) -> &[Pipe] {
        &self.pipes[..self.width]
    }

    pub fn is_y(&self) -> bool {
        matches!(self.pipes[0], Pipe::Y0 | Pipe::Y1 | Pipe::Y2)
    }
}

/// Every two-wide Y template contains Y2: the synthesized third slot is
/// filled with fnop, which cannot occupy Y2.
pub static BUNDLE_TEMPLATES: [BundleTemplate; 12] = [
    BundleTemplate::two(Pipe::Y0, Pipe::Y2),
    BundleTemplate::two(Pipe::Y1, Pipe::Y2),
    BundleTemplate::two(Pipe::Y2, Pipe::Y0),
    BundleTemplate::two(Pipe::Y2, Pipe::Y1),
    BundleTemplate::three(Pipe::Y0, Pipe::Y1, Pipe::Y2),
    BundleTemplate::three(Pipe::Y0, Pipe::Y2, Pipe::Y1),
    BundleTemplate::three(Pipe::Y1, Pipe::Y0, Pipe::Y2),
    BundleTemplate::three(Pipe::Y1, Pipe::Y2, Pipe::Y0),
    BundleTemplate::three(Pipe::Y2, Pipe::Y0, Pipe::Y1),
    BundleTemplate::three(Pipe::Y2, Pipe::Y1, Pipe::Y0),
    BundleTemplate::two(Pipe::X0, Pipe::X1),
    BundleTemplate::two(Pipe::X1, Pipe::X0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_wide_y_templates_include_y2() {
        for t in BUNDLE_TEMPLATES.iter().filter(|t| t.width == 2 && t.is_y()) {
            assert!(t.slots().contains(&Pipe::Y2), "{:?}", t);
        }
    }

    #[test]
    fn y_templates_precede_x_templates() {
        let first_x = BUNDLE_TEMPLATES.iter().position(|t| !t.is_y()).unwrap();
        assert!(BUNDLE_TEMPLATES[first_x..].iter().all(|t| !t.is_y()));
    }
}
