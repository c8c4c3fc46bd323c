use serde::{Deserialize, Serialize};
use std::fmt;

/// Assembler operator applied to a symbolic operand, e.g. `lo16(sym)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExprMod {
    Lo16,
    Hi16,
    Ha16,
    Got,
    Plt,
}

impl ExprMod {
    pub fn parse(name: &str) -> Option<ExprMod> {
        Some(match name {
            "lo16" => ExprMod::Lo16,
            "hi16" => ExprMod::Hi16,
            "ha16" => ExprMod::Ha16,
            "got" => ExprMod::Got,
            "plt" => ExprMod::Plt,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            ExprMod::Lo16 => "lo16",
            ExprMod::Hi16 => "hi16",
            ExprMod::Ha16 => "ha16",
            ExprMod::Got => "got",
            ExprMod::Plt => "plt",
        }
    }
}

/// A symbolic operand value that cannot be resolved until relocation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Symbol(String),
    Modified(ExprMod, Box<Expr>),
}

impl Expr {
    pub fn base_symbol(&self) -> &str {
        match self {
            Expr::Symbol(s) => s,
            Expr::Modified(_, inner) => inner.base_symbol(),
        }
    }

    pub fn modifier(&self) -> Option<ExprMod> {
        match self {
            Expr::Symbol(_) => None,
            Expr::Modified(m, _) => Some(*m),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(s) => write!(f, "{s}"),
            Expr::Modified(m, inner) => write!(f, "{}({})", m.name(), inner),
        }
    }
}
