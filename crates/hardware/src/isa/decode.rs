//! MIPS Instruction Decoder.
//!
//! This module turns a 32-bit instruction word into an `Instruction`. It performs:
//! 1. **Format Detection:** R, I or J from the opcode.
//! 2. **Table Lookup:** A linear scan of the ISA table keyed on the opcode
//!    (I/J) or function code (R).
//! 3. **Operand Assignment:** Mapping of `rs`/`rt`/`rd` (and the implicit
//!    `$ra` and HI/LO registers) onto the `src1`/`src2`/`dst` roles used by
//!    the register file.
//! 4. **Rendering:** Assembly text produced from the entry's operand template.

use std::fmt::Write as _;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::{SimError, SimResult};
use crate::isa::Register;
use crate::isa::instruction::{Format, Instruction, InstructionBits, Operation as Op};
use crate::isa::table::lookup;

/// Decodes a word with no associated PC (disassembly).
///
/// # Arguments
///
/// * `word` - The raw instruction word.
///
/// # Returns
///
/// The decoded instruction, or `SimError::Decode` if no table entry matches.
pub fn decode(word: u32) -> SimResult<Instruction> {
    decode_at(word, 0)
}

/// Decodes a word fetched from `pc`.
///
/// The next PC defaults to the sequential successor; execution overwrites it
/// for control transfers.
pub fn decode_at(word: u32, pc: u64) -> SimResult<Instruction> {
    let format = Format::of(word);
    let entry =
        lookup(format, word.opcode(), word.funct()).ok_or(SimError::Decode { word, format })?;
    let (src1, src2, dst) = operands(entry.op, word);

    let args = render(entry.template, word);
    let text = if args.is_empty() {
        entry.mnemonic.to_owned()
    } else {
        format!("{}  {}", entry.mnemonic, args)
    };

    Ok(Instruction {
        word,
        pc,
        mnemonic: entry.mnemonic,
        format,
        op: entry.op,
        src1,
        src2,
        dst,
        imm: word.imm(),
        shamt: word.shamt(),
        target: word.target(),
        text,
        v_src1: 0,
        v_src2: 0,
        v_dst: 0,
        new_pc: pc.wrapping_add(INSTRUCTION_SIZE),
        mem_addr: 0,
    })
}

/// Assigns the register operands of an operation as `(src1, src2, dst)`.
///
/// Unused roles are `$zero`, which is always valid and never written.
fn operands(op: Op, word: u32) -> (Register, Register, Register) {
    let zero = Register::ZERO;
    let (rs, rt, rd) = (word.rs(), word.rt(), word.rd());
    match op {
        Op::Add
        | Op::Addu
        | Op::Sub
        | Op::Subu
        | Op::Slt
        | Op::Sltu
        | Op::And
        | Op::Or
        | Op::Xor
        | Op::Nor => (rs, rt, rd),
        Op::Sll | Op::Srl | Op::Sra => (rt, zero, rd),
        Op::Sllv | Op::Srlv | Op::Srav => (rt, rs, rd),
        Op::Mult | Op::Multu | Op::Div | Op::Divu => (rs, rt, Register::HI_LO),
        Op::Mfhi | Op::Mflo => (Register::HI_LO, zero, rd),
        // Writes one half, so the other half is read back.
        Op::Mthi | Op::Mtlo => (rs, Register::HI_LO, Register::HI_LO),
        Op::Addi | Op::Addiu | Op::Slti | Op::Sltiu | Op::Andi | Op::Ori | Op::Xori => {
            (rs, zero, rt)
        }
        Op::Lui => (zero, zero, rt),
        Op::Beq | Op::Bne => (rs, rt, zero),
        Op::Blez | Op::Bgtz => (rs, zero, zero),
        Op::Jr => (rs, zero, zero),
        Op::Jalr => (rs, zero, rd),
        Op::Jal => (zero, zero, Register::RA),
        Op::J | Op::Trap | Op::Syscall | Op::Break => (zero, zero, zero),
        Op::Lb | Op::Lh | Op::Lw | Op::Lbu | Op::Lhu => (rs, zero, rt),
        Op::Sb | Op::Sh | Op::Sw => (rs, rt, zero),
    }
}

/// Renders the operand list of `word` according to an ISA table template.
///
/// Successive operands are separated by `", "`; an opening parenthesis starts
/// a fresh list so base registers render as `offset($base)`.
///
/// # Arguments
///
/// * `template` - Operand template from the ISA table.
/// * `word` - The raw instruction word supplying the fields.
pub fn render(template: &str, word: u32) -> String {
    let mut out = String::new();
    let mut sep = "";
    for c in template.chars() {
        let _ = match c {
            '(' => {
                sep = "";
                write!(out, "(")
            }
            ')' => write!(out, ")"),
            'd' | 's' | 't' => {
                let reg = match c {
                    'd' => word.rd(),
                    's' => word.rs(),
                    _ => word.rt(),
                };
                let res = write!(out, "{sep}{reg}");
                sep = ", ";
                res
            }
            'S' => write!(out, "{sep}{:#x}", word.shamt()),
            'C' => write!(out, "{sep}{:#x}", word.imm()),
            'A' => write!(out, "{:#x}", word.target()),
            _ => Ok(()),
        };
    }
    out
}

/// Encodes an R-format word.
pub const fn encode_r(rs: Register, rt: Register, rd: Register, shamt: u32, funct: u32) -> u32 {
    ((rs.index() as u32) << 21)
        | ((rt.index() as u32) << 16)
        | ((rd.index() as u32) << 11)
        | ((shamt & 0x1F) << 6)
        | (funct & 0x3F)
}

/// Encodes an I-format word.
pub const fn encode_i(opcode: u32, rs: Register, rt: Register, imm: u16) -> u32 {
    ((opcode & 0x3F) << 26)
        | ((rs.index() as u32) << 21)
        | ((rt.index() as u32) << 16)
        | imm as u32
}

/// Encodes a J-format word.
pub const fn encode_j(opcode: u32, target: u32) -> u32 {
    ((opcode & 0x3F) << 26) | (target & 0x03FF_FFFF)
}
