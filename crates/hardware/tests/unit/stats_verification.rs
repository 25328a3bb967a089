//! Statistics reported by complete runs.

use mipsim_core::isa::Register;

use crate::common::builder::*;
use crate::common::harness::TestContext;

#[test]
fn test_pipelined_counts() {
    let ctx = TestContext::new(&[
        addiu(Register::T0, Register::ZERO, 1),
        addu(Register::T1, Register::T0, Register::T0),
        beq(Register::ZERO, Register::ZERO, 0),
        nop(),
    ]);
    let (_, _, stats) = ctx.silent().run(4);
    assert_eq!(stats.instructions_retired, 4);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.inst_alu, 3);
    assert!(stats.stalls_data > 0);
    assert!(stats.stalls_control > 0);
    assert!(stats.fetch_bubbles >= stats.stalls_control);
    assert!(stats.ipc() > 0.0 && stats.ipc() < 1.0);
}

#[test]
fn test_report_sections() {
    let ctx = TestContext::new(&[addiu(Register::T0, Register::ZERO, 1)]).functional();
    let (_, _, stats) = ctx.run(1);
    let report = stats.to_string();
    assert!(report.contains("MIPS SIMULATION STATISTICS"));
    assert!(report.contains("sim_insts                1"));
    assert!(report.contains("INSTRUCTION MIX"));
    assert!(report.contains("stalls.data            0"));
}
