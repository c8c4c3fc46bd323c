//! Line-oriented assembler front end. Text goes in, a byte stream of
//! bundles plus fixups and diagnostics come out. Statements are
//! mnemonics with comma-separated operands; `{` and `}` open and close
//! a bundle group, `;` separates statements on one line, `#` starts a
//! comment. A handful of dot-directives toggle assembly modes.
//!
//! Parse and bundling errors are reported per statement and assembly
//! continues; only a fatal bundler error stops the run.

use thiserror::Error;
use tracing::debug;

use crate::bundler::{Bundler, BundlerOptions, OperandValue, PendingInsn};
use crate::expr::{Expr, ExprMod};
use crate::isa::opcodes::lookup_mnemonic;
use crate::isa::{regs, sprs};
use crate::operand::OperandKind;
use crate::reloc::Fixup;

#[derive(Debug, Clone)]
pub struct AsmOptions {
    /// Reject the `r53`..`r63` spellings of the named registers.
    pub require_canonical_reg_names: bool,
    pub allow_suspicious_bundles: bool,
}

impl Default for AsmOptions {
    fn default() -> Self {
        AsmOptions {
            require_canonical_reg_names: true,
            allow_suspicious_bundles: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub line: u32,
    pub severity: Severity,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sev = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "line {}: {}: {}", self.line, sev, self.message)
    }
}

/// The result of one assembly run. `code` holds whatever was emitted
/// before the first fatal error, if any; callers should treat it as
/// unusable when `has_errors()` reports true.
#[derive(Debug)]
pub struct Assembly {
    pub code: Vec<u8>,
    pub fixups: Vec<Fixup>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Assembly {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
enum ParseError {
    #[error("unknown mnemonic '{0}'")]
    UnknownMnemonic(String),
    #[error("{mnemonic} takes {expected} operand(s), got {got}")]
    OperandCount {
        mnemonic: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("'{0}' is not a register")]
    BadRegister(String),
    #[error("register name '{0}' is not canonical")]
    NonCanonicalRegister(String),
    #[error("'{0}' is not a special-purpose register")]
    BadSpr(String),
    #[error("cannot parse operand '{0}'")]
    BadOperand(String),
    #[error("unknown directive '{0}'")]
    UnknownDirective(String),
}

pub struct Assembler {
    opts: AsmOptions,
}

impl Assembler {
    pub fn new(opts: AsmOptions) -> Self {
        Assembler { opts }
    }

    pub fn assemble(&self, source: &str) -> Assembly {
        let mut opts = self.opts.clone();
        let mut bundler = Bundler::new(BundlerOptions {
            allow_suspicious_bundles: opts.allow_suspicious_bundles,
        });
        let mut diagnostics = Vec::new();

        'lines: for (lineno, raw) in source.lines().enumerate() {
            let line = lineno as u32 + 1;
            let text = match raw.find('#') {
                Some(i) => &raw[..i],
                None => raw,
            };
            for stmt in StatementIter::new(text) {
                let result = match stmt {
                    Statement::Open => bundler.begin_group(),
                    Statement::Close => bundler.end_group(),
                    Statement::Text(s) if s.starts_with('.') => {
                        match self.directive(s, &mut opts) {
                            Ok(()) => {
                                *bundler.options_mut() = BundlerOptions {
                                    allow_suspicious_bundles: opts.allow_suspicious_bundles,
                                };
                                Ok(())
                            }
                            Err(e) => {
                                diagnostics.push(Diagnostic {
                                    line,
                                    severity: Severity::Error,
                                    message: e.to_string(),
                                });
                                continue;
                            }
                        }
                    }
                    Statement::Text(s) => {
                        match parse_insn(s, line, &opts, &mut diagnostics) {
                            Ok(insn) => bundler.push(insn),
                            Err(e) => {
                                diagnostics.push(Diagnostic {
                                    line,
                                    severity: Severity::Error,
                                    message: e.to_string(),
                                });
                                continue;
                            }
                        }
                    }
                };
                if let Err(e) = result {
                    let fatal = e.is_fatal();
                    diagnostics.push(Diagnostic {
                        line,
                        severity: Severity::Error,
                        message: e.to_string(),
                    });
                    if fatal {
                        break 'lines;
                    }
                }
            }
        }

        if bundler.in_group() {
            diagnostics.push(Diagnostic {
                line: source.lines().count() as u32,
                severity: Severity::Error,
                message: "unclosed '{' at end of input".to_string(),
            });
            if let Err(e) = bundler.end_group() {
                diagnostics.push(Diagnostic {
                    line: source.lines().count() as u32,
                    severity: Severity::Error,
                    message: e.to_string(),
                });
            }
        }

        let (code, fixups) = match bundler.finish() {
            Ok(pair) => pair,
            Err(e) => {
                diagnostics.push(Diagnostic {
                    line: source.lines().count() as u32,
                    severity: Severity::Error,
                    message: e.to_string(),
                });
                (Vec::new(), Vec::new())
            }
        };
        debug!(
            bytes = code.len(),
            fixups = fixups.len(),
            diagnostics = diagnostics.len(),
            "assembly finished"
        );
        Assembly { code, fixups, diagnostics }
    }

    fn directive(&self, stmt: &str, opts: &mut AsmOptions) -> Result<(), ParseError> {
        match stmt.trim() {
            ".require_canonical_reg_names" => opts.require_canonical_reg_names = true,
            ".no_require_canonical_reg_names" => opts.require_canonical_reg_names = false,
            ".allow_suspicious_bundles" => opts.allow_suspicious_bundles = true,
            ".no_allow_suspicious_bundles" => opts.allow_suspicious_bundles = false,
            other => return Err(ParseError::UnknownDirective(other.to_string())),
        }
        Ok(())
    }
}

enum Statement<'a> {
    Open,
    Close,
    Text(&'a str),
}

/// Splits a comment-stripped line into group braces and instruction
/// statements. `;` only separates; empty pieces are dropped.
struct StatementIter<'a> {
    rest: &'a str,
}

impl<'a> StatementIter<'a> {
    fn new(text: &'a str) -> Self {
        StatementIter { rest: text }
    }
}

impl<'a> Iterator for StatementIter<'a> {
    type Item = Statement<'a>;

    fn next(&mut self) -> Option<Statement<'a>> {
        loop {
            self.rest = self.rest.trim_start();
            if self.rest.is_empty() {
                return None;
            }
            if let Some(tail) = self.rest.strip_prefix('{') {
                self.rest = tail;
                return Some(Statement::Open);
            }
            if let Some(tail) = self.rest.strip_prefix('}') {
                self.rest = tail;
                return Some(Statement::Close);
            }
            if let Some(tail) = self.rest.strip_prefix(';') {
                self.rest = tail;
                continue;
            }
            let end = self
                .rest
                .find(|c| matches!(c, '{' | '}' | ';'))
                .unwrap_or(self.rest.len());
            let (stmt, tail) = self.rest.split_at(end);
            self.rest = tail;
            let stmt = stmt.trim();
            if !stmt.is_empty() {
                return Some(Statement::Text(stmt));
            }
        }
    }
}

fn parse_insn(
    text: &str,
    line: u32,
    opts: &AsmOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<PendingInsn, ParseError> {
    let text = text.trim();
    let (mnemonic, rest) = match text.find(char::is_whitespace) {
        Some(i) => (&text[..i], text[i..].trim()),
        None => (text, ""),
    };
    let opcode = lookup_mnemonic(mnemonic)
        .ok_or_else(|| ParseError::UnknownMnemonic(mnemonic.to_string()))?;
    let proto = opcode.desc().syntax_operands();

    let fields: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(',').map(str::trim).collect()
    };
    if fields.len() != proto.len() {
        return Err(ParseError::OperandCount {
            mnemonic: opcode.mnemonic(),
            expected: proto.len(),
            got: fields.len(),
        });
    }

    let mut operands = Vec::with_capacity(fields.len());
    for (&id, field) in proto.iter().zip(&fields) {
        operands.push(parse_operand(id.desc().kind, field, line, opts, diagnostics)?);
    }
    Ok(PendingInsn { opcode, operands, line })
}

fn parse_operand(
    kind: OperandKind,
    field: &str,
    line: u32,
    opts: &AsmOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<OperandValue, ParseError> {
    match kind {
        OperandKind::Register => {
            let (reg, canonical) = regs::lookup(field)
                .ok_or_else(|| ParseError::BadRegister(field.to_string()))?;
            if !canonical {
                if opts.require_canonical_reg_names {
                    return Err(ParseError::NonCanonicalRegister(field.to_string()));
                }
                diagnostics.push(Diagnostic {
                    line,
                    severity: Severity::Warning,
                    message: format!(
                        "register name '{}' is not canonical, use '{}'",
                        field,
                        regs::name(reg)
                    ),
                });
            }
            Ok(OperandValue::Reg(reg))
        }
        OperandKind::SpecialRegister => {
            if let Some(number) = sprs::lookup(field) {
                return Ok(OperandValue::Imm(number as i64));
            }
            parse_int(field)
                .map(OperandValue::Imm)
                .ok_or_else(|| ParseError::BadSpr(field.to_string()))
        }
        OperandKind::Immediate | OperandKind::Address => {
            if let Some(v) = parse_int(field) {
                return Ok(OperandValue::Imm(v));
            }
            parse_expr(field)
                .map(OperandValue::Sym)
                .ok_or_else(|| ParseError::BadOperand(field.to_string()))
        }
    }
}

fn parse_int(s: &str) -> Option<i64> {
    let (neg, body) = match s.strip_prefix('-') {
        Some(b) => (true, b),
        None => (false, s),
    };
    let value = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else if body.chars().all(|c| c.is_ascii_digit()) && !body.is_empty() {
        body.parse().ok()?
    } else {
        return None;
    };
    Some(if neg { -value } else { value })
}

fn is_symbol(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '.' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '$')
}

fn parse_expr(s: &str) -> Option<Expr> {
    if let Some((head, tail)) = s.split_once('(') {
        let inner = tail.strip_suffix(')')?;
        let modifier = ExprMod::parse(head.trim())?;
        let sym = inner.trim();
        if !is_symbol(sym) {
            return None;
        }
        return Some(Expr::Modified(modifier, Box::new(Expr::Symbol(sym.to_string()))));
    }
    if is_symbol(s) {
        return Some(Expr::Symbol(s.to_string()));
    }
    None
}
