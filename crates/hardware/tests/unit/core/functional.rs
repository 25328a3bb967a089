//! Functional interpreter, and agreement between both execution modes.

use mipsim_core::isa::Register;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::*;
use crate::common::harness::{DATA_BASE, TEXT_BASE, TestContext, lines, reg};

fn loop_program() -> Vec<u32> {
    vec![
        addiu(Register::T0, Register::ZERO, 3),
        addiu(Register::T1, Register::T1, 2),
        addiu(Register::T0, Register::T0, -1),
        bne(Register::T0, Register::ZERO, -3),
        addiu(Register::T2, Register::ZERO, 9),
    ]
}

fn memory_program() -> Vec<u32> {
    vec![
        lui(Register::S0, 0x1000),
        ori(Register::S0, Register::S0, 0x20),
        lw(Register::T0, -0x20, Register::S0),
        sll(Register::T1, Register::T0, 4),
        subu(Register::T2, Register::T1, Register::T0),
        slt(Register::V0, Register::T0, Register::T2),
        sw(Register::T2, 0, Register::S0),
        lw(Register::V1, 0, Register::S0),
    ]
}

fn call_program() -> Vec<u32> {
    let base = TEXT_BASE as u32;
    vec![
        jal(base + 0xC),
        addiu(Register::T1, Register::ZERO, 5),
        j(base + 0x14),
        addiu(Register::T0, Register::ZERO, 3),
        jr(Register::RA),
        addiu(Register::T2, Register::ZERO, 9),
    ]
}

#[test]
fn test_step_by_step() {
    let ctx = TestContext::new(&[
        addiu(Register::T0, Register::ZERO, 1),
        add(Register::T0, Register::T0, Register::T0),
        add(Register::T1, Register::T0, Register::T0),
    ])
    .functional();
    let mut sim = ctx.build();
    let first = sim.cpu.step().unwrap();
    assert_eq!(first.pc(), TEXT_BASE);
    assert_eq!(sim.cpu.pc, TEXT_BASE + 4);
    let _ = sim.cpu.step().unwrap();
    let _ = sim.cpu.step().unwrap();
    assert_eq!(reg(&sim, Register::T1), 4);
    assert!(sim.cpu.regs.valid(Register::T0));
}

#[test]
fn test_prints_each_instruction_unless_silent() {
    let ctx = TestContext::new(&[
        addiu(Register::T0, Register::ZERO, 1),
        nop(),
    ])
    .functional();
    let (_, out, stats) = ctx.run(2);
    assert_eq!(out, "addiu  $t0, $zero, 0x1\nsll  $zero, $zero, 0x0\n");
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.instructions_retired, 2);

    let (_, out, _) = ctx.silent().run(2);
    assert_eq!(out, "");
}

#[rstest]
#[case::arithmetic_loop(loop_program(), 11)]
#[case::memory(memory_program(), 8)]
#[case::calls(call_program(), 6)]
fn test_modes_agree(#[case] program: Vec<u32>, #[case] count: u64) {
    let data = [0x05, 0, 0, 0];
    let pipelined = TestContext::new(&program).with_data(DATA_BASE, &data).silent();
    let functional = TestContext::new(&program).with_data(DATA_BASE, &data).functional();

    let (psim, pout, _) = pipelined.run(count);
    let (fsim, fout, _) = functional.run(count);

    // Silent pipelined output is the retirement order.
    assert_eq!(lines(&pout), lines(&fout));
    for i in 0..=32 {
        let r = Register::new(i).unwrap();
        assert_eq!(reg(&psim, r), reg(&fsim, r), "register {r}");
    }
    assert_eq!(psim.cpu.mem.dump(""), fsim.cpu.mem.dump(""));
}

#[test]
fn test_memory_program_results() {
    let ctx = TestContext::new(&memory_program())
        .with_data(DATA_BASE, &[0x05, 0, 0, 0])
        .functional();
    let (sim, _, _) = ctx.run(8);
    assert_eq!(reg(&sim, Register::T0), 5);
    assert_eq!(reg(&sim, Register::T2), 75);
    assert_eq!(reg(&sim, Register::V0), 1);
    assert_eq!(reg(&sim, Register::V1), 75);
    assert_eq!(sim.cpu.mem.read(DATA_BASE + 0x20, 4).unwrap(), 75);
}
