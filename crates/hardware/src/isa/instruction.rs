//! Instruction encoding and decoded-instruction state.
//!
//! Provides bit extraction functions for the three MIPS formats and the
//! `Instruction` structure that travels down the pipeline. An instruction
//! carries:
//! 1. **Static Fields:** Mnemonic, format, operation, register operands,
//!    immediate, shift amount, jump target and the rendered text.
//! 2. **Dynamic State:** Source values, result, next PC and memory address,
//!    filled in as the instruction moves through the stages.

use std::fmt;

use crate::isa::Register;

/// Bit position of the opcode field (bits 26-31).
const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the 6-bit opcode and funct fields.
const SIX_BIT_MASK: u32 = 0x3F;
/// Bit position of the `rs` field (bits 21-25).
const RS_SHIFT: u32 = 21;
/// Bit position of the `rt` field (bits 16-20).
const RT_SHIFT: u32 = 16;
/// Bit position of the `rd` field (bits 11-15).
const RD_SHIFT: u32 = 11;
/// Bit position of the shift-amount field (bits 6-10).
const SHAMT_SHIFT: u32 = 6;
/// Bit mask for the 5-bit register and shift fields.
const FIVE_BIT_MASK: u32 = 0x1F;
/// Bit mask for the 16-bit immediate (bits 0-15).
const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target (bits 0-25).
const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting MIPS instruction fields from a raw word.
pub trait InstructionBits {
    /// Opcode field (bits 26-31).
    fn opcode(&self) -> u32;
    /// First source register field (bits 21-25).
    fn rs(&self) -> Register;
    /// Second source register field (bits 16-20).
    fn rt(&self) -> Register;
    /// R-format destination register field (bits 11-15).
    fn rd(&self) -> Register;
    /// R-format shift amount (bits 6-10).
    fn shamt(&self) -> u32;
    /// R-format function code (bits 0-5).
    fn funct(&self) -> u32;
    /// I-format 16-bit immediate, not sign-extended (bits 0-15).
    fn imm(&self) -> u32;
    /// J-format 26-bit target (bits 0-25).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & SIX_BIT_MASK
    }

    #[inline(always)]
    fn rs(&self) -> Register {
        Register::from_field(self >> RS_SHIFT)
    }

    #[inline(always)]
    fn rt(&self) -> Register {
        Register::from_field(self >> RT_SHIFT)
    }

    #[inline(always)]
    fn rd(&self) -> Register {
        Register::from_field(self >> RD_SHIFT)
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & FIVE_BIT_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & SIX_BIT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// MIPS instruction encoding format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register format: `opcode rs rt rd shamt funct`.
    R,
    /// Immediate format: `opcode rs rt imm`.
    I,
    /// Jump format: `opcode target`.
    J,
}

impl Format {
    /// Selects the format from the opcode: 0 is R, `j`/`jal`/`trap` are J,
    /// everything else is I.
    pub const fn of(word: u32) -> Self {
        match (word >> OPCODE_SHIFT) & SIX_BIT_MASK {
            0x0 => Self::R,
            0x2 | 0x3 | 0x1A => Self::J,
            _ => Self::I,
        }
    }
}

/// Operation selected by an ISA table entry.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Addu,
    Sub,
    Subu,
    Addi,
    Addiu,
    Mult,
    Multu,
    Div,
    Divu,
    Mfhi,
    Mthi,
    Mflo,
    Mtlo,
    Sll,
    Srl,
    Sra,
    Sllv,
    Srlv,
    Srav,
    Lui,
    Slt,
    Sltu,
    Slti,
    Sltiu,
    And,
    Or,
    Xor,
    Nor,
    Andi,
    Ori,
    Xori,
    Beq,
    Bne,
    Blez,
    Bgtz,
    J,
    Jal,
    Jr,
    Jalr,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Syscall,
    Break,
    Trap,
}

impl Operation {
    /// Returns `true` for any control transfer (branches and jumps).
    pub const fn is_jump(self) -> bool {
        matches!(
            self,
            Self::Beq
                | Self::Bne
                | Self::Blez
                | Self::Bgtz
                | Self::J
                | Self::Jal
                | Self::Jr
                | Self::Jalr
        )
    }

    /// Returns `true` for memory loads.
    pub const fn is_load(self) -> bool {
        matches!(self, Self::Lb | Self::Lh | Self::Lw | Self::Lbu | Self::Lhu)
    }

    /// Returns `true` for memory stores.
    pub const fn is_store(self) -> bool {
        matches!(self, Self::Sb | Self::Sh | Self::Sw)
    }

    /// Width of the memory access in bytes, 0 for non-memory operations.
    pub const fn mem_size(self) -> usize {
        match self {
            Self::Lb | Self::Lbu | Self::Sb => 1,
            Self::Lh | Self::Lhu | Self::Sh => 2,
            Self::Lw | Self::Sw => 4,
            _ => 0,
        }
    }
}

/// A decoded instruction together with its in-flight execution state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub(crate) word: u32,
    pub(crate) pc: u64,
    pub(crate) mnemonic: &'static str,
    pub(crate) format: Format,
    pub(crate) op: Operation,
    pub(crate) src1: Register,
    pub(crate) src2: Register,
    pub(crate) dst: Register,
    pub(crate) imm: u32,
    pub(crate) shamt: u32,
    pub(crate) target: u32,
    pub(crate) text: String,

    pub(crate) v_src1: u64,
    pub(crate) v_src2: u64,
    pub(crate) v_dst: u64,
    pub(crate) new_pc: u64,
    pub(crate) mem_addr: u64,
}

impl Instruction {
    /// Raw instruction word.
    pub const fn word(&self) -> u32 {
        self.word
    }

    /// Address the instruction was fetched from.
    pub const fn pc(&self) -> u64 {
        self.pc
    }

    /// Mnemonic without operands.
    pub const fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    /// Encoding format.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Operation to perform.
    pub const fn operation(&self) -> Operation {
        self.op
    }

    /// First source register (`$zero` if unused).
    pub const fn src1(&self) -> Register {
        self.src1
    }

    /// Second source register (`$zero` if unused).
    pub const fn src2(&self) -> Register {
        self.src2
    }

    /// Destination register (`$zero` if the instruction writes nothing).
    pub const fn dst(&self) -> Register {
        self.dst
    }

    /// Raw 16-bit immediate.
    pub const fn imm(&self) -> u32 {
        self.imm
    }

    /// Immediate sign-extended to 32 bits.
    pub const fn simm(&self) -> u32 {
        self.imm as u16 as i16 as i32 as u32
    }

    /// Shift amount.
    pub const fn shamt(&self) -> u32 {
        self.shamt
    }

    /// 26-bit jump target field.
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// Any control transfer (branch or jump).
    pub const fn is_jump(&self) -> bool {
        self.op.is_jump()
    }

    /// Memory load.
    pub const fn is_load(&self) -> bool {
        self.op.is_load()
    }

    /// Memory store.
    pub const fn is_store(&self) -> bool {
        self.op.is_store()
    }

    /// Memory access width in bytes (0 if none).
    pub const fn mem_size(&self) -> usize {
        self.op.mem_size()
    }

    /// Value read for the first source.
    pub const fn v_src1(&self) -> u64 {
        self.v_src1
    }

    /// Value read for the second source.
    pub const fn v_src2(&self) -> u64 {
        self.v_src2
    }

    /// Result to be written to the destination.
    pub const fn v_dst(&self) -> u64 {
        self.v_dst
    }

    /// Resolved next PC.
    pub const fn new_pc(&self) -> u64 {
        self.new_pc
    }

    /// Effective address of a load or store.
    pub const fn mem_addr(&self) -> u64 {
        self.mem_addr
    }

    /// Rendered assembly text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets the first source value.
    pub fn set_v_src1(&mut self, value: u64) {
        self.v_src1 = value;
    }

    /// Sets the second source value.
    pub fn set_v_src2(&mut self, value: u64) {
        self.v_src2 = value;
    }

    /// Sets the result value.
    pub fn set_v_dst(&mut self, value: u64) {
        self.v_dst = value;
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
