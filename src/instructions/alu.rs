//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic with the accumulator
//! - CMP, CPX, CPY: Compare a register with memory
//! - BIT: Bit test
//!
//! Decimal mode is not modeled; ADC and SBC always operate in binary.

use super::load_operand;
use crate::addressing::AddressingMode;
use crate::status::Status;
use crate::{MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// `A = A + M + C`. Updates C, Z, V and N.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, _) = load_operand(cpu, mode);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// `A = A - M - (1 - C)`, computed as `A + !M + C` through the ADC path.
/// Carry set afterwards means no borrow occurred.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, _) = load_operand(cpu, mode);
    add_with_carry(cpu, !value);
}

fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.status.contains(Status::CARRY) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.status.set(Status::CARRY, sum & 0x100 != 0);

    // Overflow: both inputs share a sign the result does not
    let overflow = (a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.status.set(Status::OVERFLOW, overflow);

    cpu.status.set_zn(result);
    cpu.a = result;
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, _) = load_operand(cpu, mode);
    cpu.a &= value;
    cpu.status.set_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, _) = load_operand(cpu, mode);
    cpu.a |= value;
    cpu.status.set_zn(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, _) = load_operand(cpu, mode);
    cpu.a ^= value;
    cpu.status.set_zn(cpu.a);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.a;
    compare(cpu, mode, register);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.x;
    compare(cpu, mode, register);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.y;
    compare(cpu, mode, register);
}

/// Shared compare: C when `register >= M` unsigned, Z and N from `register - M`.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, register: u8) {
    let (value, _) = load_operand(cpu, mode);
    let result = register.wrapping_sub(value);

    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.set_zn(result);
}

/// Executes the BIT (Bit Test) instruction.
///
/// N and V are copied from bits 7 and 6 of the operand itself, not from the
/// AND result. Z is set when `A & M == 0`. A is not modified.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, _) = load_operand(cpu, mode);

    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
}
