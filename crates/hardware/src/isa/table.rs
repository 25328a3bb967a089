//! MIPS ISA table.
//!
//! The table is the single source of truth for which words decode and how
//! they render. Each entry names the operation and an operand template in a
//! small character language:
//!
//! | char | emits |
//! |------|-------|
//! | `d`  | destination register (`rd`) |
//! | `s`  | first source register (`rs`) |
//! | `t`  | second source register (`rt`) |
//! | `C`  | 16-bit immediate in hex |
//! | `S`  | shift amount in hex |
//! | `A`  | 26-bit jump target in hex |
//! | `(` `)` | literal parentheses around a base register |

use crate::isa::instruction::{Format, Operation};

/// One row of the ISA table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsaEntry {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Primary opcode (0 for every R-format entry).
    pub opcode: u32,
    /// Function code; only meaningful for R-format entries.
    pub funct: u32,
    /// Encoding format.
    pub format: Format,
    /// Operand template.
    pub template: &'static str,
    /// Operation performed.
    pub op: Operation,
}

const fn r(mnemonic: &'static str, funct: u32, template: &'static str, op: Operation) -> IsaEntry {
    IsaEntry {
        mnemonic,
        opcode: 0,
        funct,
        format: Format::R,
        template,
        op,
    }
}

const fn i(mnemonic: &'static str, opcode: u32, template: &'static str, op: Operation) -> IsaEntry {
    IsaEntry {
        mnemonic,
        opcode,
        funct: 0,
        format: Format::I,
        template,
        op,
    }
}

const fn j(mnemonic: &'static str, opcode: u32, op: Operation) -> IsaEntry {
    IsaEntry {
        mnemonic,
        opcode,
        funct: 0,
        format: Format::J,
        template: "A",
        op,
    }
}

/// Every supported instruction.
pub static ISA_TABLE: &[IsaEntry] = &[
    r("add", 0x20, "dst", Operation::Add),
    r("addu", 0x21, "dst", Operation::Addu),
    r("sub", 0x22, "dst", Operation::Sub),
    r("subu", 0x23, "dst", Operation::Subu),
    i("addi", 0x8, "tsC", Operation::Addi),
    i("addiu", 0x9, "tsC", Operation::Addiu),
    r("mult", 0x18, "st", Operation::Mult),
    r("multu", 0x19, "st", Operation::Multu),
    r("div", 0x1A, "st", Operation::Div),
    r("divu", 0x1B, "st", Operation::Divu),
    r("mfhi", 0x10, "d", Operation::Mfhi),
    r("mthi", 0x11, "s", Operation::Mthi),
    r("mflo", 0x12, "d", Operation::Mflo),
    r("mtlo", 0x13, "s", Operation::Mtlo),
    r("sll", 0x0, "dtS", Operation::Sll),
    r("srl", 0x2, "dtS", Operation::Srl),
    r("sra", 0x3, "dtS", Operation::Sra),
    r("sllv", 0x4, "dts", Operation::Sllv),
    r("srlv", 0x6, "dts", Operation::Srlv),
    r("srav", 0x7, "dts", Operation::Srav),
    i("lui", 0xF, "tC", Operation::Lui),
    r("slt", 0x2A, "dst", Operation::Slt),
    r("sltu", 0x2B, "dst", Operation::Sltu),
    i("slti", 0xA, "tsC", Operation::Slti),
    i("sltiu", 0xB, "tsC", Operation::Sltiu),
    r("and", 0x24, "dst", Operation::And),
    r("or", 0x25, "dst", Operation::Or),
    r("xor", 0x26, "dst", Operation::Xor),
    r("nor", 0x27, "dst", Operation::Nor),
    i("andi", 0xC, "tsC", Operation::Andi),
    i("ori", 0xD, "tsC", Operation::Ori),
    i("xori", 0xE, "tsC", Operation::Xori),
    i("beq", 0x4, "stC", Operation::Beq),
    i("bne", 0x5, "stC", Operation::Bne),
    i("blez", 0x6, "sC", Operation::Blez),
    i("bgtz", 0x7, "sC", Operation::Bgtz),
    j("j", 0x2, Operation::J),
    j("jal", 0x3, Operation::Jal),
    r("jr", 0x8, "s", Operation::Jr),
    r("jalr", 0x9, "ds", Operation::Jalr),
    i("lb", 0x20, "tC(s)", Operation::Lb),
    i("lh", 0x21, "tC(s)", Operation::Lh),
    i("lw", 0x23, "tC(s)", Operation::Lw),
    i("lbu", 0x24, "tC(s)", Operation::Lbu),
    i("lhu", 0x25, "tC(s)", Operation::Lhu),
    i("sb", 0x28, "tC(s)", Operation::Sb),
    i("sh", 0x29, "tC(s)", Operation::Sh),
    i("sw", 0x2B, "tC(s)", Operation::Sw),
    r("syscall", 0xC, "", Operation::Syscall),
    r("break", 0xD, "", Operation::Break),
    j("trap", 0x1A, Operation::Trap),
];

/// Finds the entry for a word's format and key.
///
/// I- and J-format entries are keyed on the opcode, R-format entries on the
/// function code.
///
/// # Arguments
///
/// * `format` - Format selected by the opcode.
/// * `opcode` - Primary opcode.
/// * `funct` - Function code (ignored unless `format` is R).
pub fn lookup(format: Format, opcode: u32, funct: u32) -> Option<&'static IsaEntry> {
    ISA_TABLE.iter().find(|e| {
        e.format == format
            && match format {
                Format::R => e.funct == funct,
                Format::I | Format::J => e.opcode == opcode,
            }
    })
}
