//! # Increment and Decrement Instructions
//!
//! - INC / DEC: Increment / decrement a memory location (read-modify-write)
//! - INX / INY: Increment X / Y
//! - DEX / DEY: Decrement X / Y
//!
//! All wrap at the byte boundary and update Z and N only. Carry and overflow
//! are untouched.

use super::{load_operand, store_result};
use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, operand) = load_operand(cpu, mode);
    let result = value.wrapping_add(1);

    store_result(cpu, result, operand);
    cpu.status.set_zn(result);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, operand) = load_operand(cpu, mode);
    let result = value.wrapping_sub(1);

    store_result(cpu, result, operand);
    cpu.status.set_zn(result);
}

pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zn(cpu.y);
}

pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zn(cpu.y);
}
