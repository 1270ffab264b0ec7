//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works either on the accumulator or on a memory location
//! (read-modify-write). The bit shifted out lands in C; Z and N follow the
//! result.

use super::{load_operand, store_result};
use crate::addressing::{AddressingMode, Operand};
use crate::status::Status;
use crate::{MemoryBus, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to C, bit 0 becomes 0.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, operand) = load_operand(cpu, mode);
    let result = value << 1;

    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    finish(cpu, result, operand);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to C, bit 7 becomes 0, so N always ends up clear.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, operand) = load_operand(cpu, mode);
    let result = value >> 1;

    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    finish(cpu, result, operand);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 goes to C.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, operand) = load_operand(cpu, mode);
    let carry_in = cpu.status.contains(Status::CARRY) as u8;
    let result = (value << 1) | carry_in;

    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    finish(cpu, result, operand);
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 goes to C.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, operand) = load_operand(cpu, mode);
    let carry_in = cpu.status.contains(Status::CARRY) as u8;
    let result = (value >> 1) | (carry_in << 7);

    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    finish(cpu, result, operand);
}

fn finish<M: MemoryBus>(cpu: &mut CPU<M>, result: u8, operand: Operand) {
    store_result(cpu, result, operand);
    cpu.status.set_zn(result);
}
