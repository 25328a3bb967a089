#![allow(dead_code)]

/// Instruction encoders for test programs.
pub mod builder;

/// Program loading and run helpers.
pub mod harness;
