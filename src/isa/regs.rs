//! Register numbering and names.

pub const NUM_REGISTERS: u8 = 64;

pub const REG_TP: u8 = 53;
pub const REG_SP: u8 = 54;
pub const REG_LR: u8 = 55;
pub const REG_SN: u8 = 56;
pub const REG_IDN0: u8 = 57;
pub const REG_IDN1: u8 = 58;
pub const REG_UDN0: u8 = 59;
pub const REG_UDN1: u8 = 60;
pub const REG_UDN2: u8 = 61;
pub const REG_UDN3: u8 = 62;
/// Writes to `zero` are architecturally discarded.
pub const REG_ZERO: u8 = 63;

/// Receive-only network queue registers. Writing these is an encoding bug,
/// rejected even when suspicious bundles are allowed.
pub const NONWRITABLE_REGS: [u8; 3] = [REG_IDN1, REG_UDN1, REG_UDN2];

/// Canonical name of each register.
pub const REGISTER_NAMES: [&str; 64] = [
    "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", //
    "r8", "r9", "r10", "r11", "r12", "r13", "r14", "r15", //
    "r16", "r17", "r18", "r19", "r20", "r21", "r22", "r23", //
    "r24", "r25", "r26", "r27", "r28", "r29", "r30", "r31", //
    "r32", "r33", "r34", "r35", "r36", "r37", "r38", "r39", //
    "r40", "r41", "r42", "r43", "r44", "r45", "r46", "r47", //
    "r48", "r49", "r50", "r51", "r52", "tp", "sp", "lr", //
    "sn", "idn0", "idn1", "udn0", "udn1", "udn2", "udn3", "zero",
];

pub fn name(reg: u8) -> &'static str {
    REGISTER_NAMES[reg as usize & 63]
}

/// Look up a register by name. Returns the register number and whether the
/// spelling was canonical; `r53`..`r63` are accepted aliases for the named
/// special registers.
pub fn lookup(name: &str) -> Option<(u8, bool)> {
    if let Some(idx) = REGISTER_NAMES.iter().position(|&n| n == name) {
        return Some((idx as u8, true));
    }
    let num = name.strip_prefix('r')?.parse::<u8>().ok()?;
    if (53..64).contains(&num) {
        return Some((num, false));
    }
    None
}
