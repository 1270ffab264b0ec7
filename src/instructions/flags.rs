//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Clear / set carry
//! - CLI / SEI: Clear / set interrupt disable
//! - CLD / SED: Clear / set decimal mode
//! - CLV: Clear overflow
//!
//! All use implied addressing and take 2 cycles. The decimal flag can be set
//! and cleared, but arithmetic ignores it.

use crate::addressing::AddressingMode;
use crate::status::Status;
use crate::{MemoryBus, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// # Examples
///
/// ```
/// use mos6502_core::{CPU, FlatMemory, MemoryBus, Status};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0x18); // CLC
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_flag(Status::CARRY, true);
///
/// cpu.step_instruction().unwrap(); // reset sequence
/// cpu.step_instruction().unwrap();
///
/// assert!(!cpu.flag_c());
/// assert_eq!(cpu.pc(), 0x8001);
/// ```
pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.status.remove(Status::CARRY);
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.status.insert(Status::CARRY);
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
///
/// Takes effect immediately: an IRQ raised right after CLI is serviced.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.status.remove(Status::DECIMAL);
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.status.insert(Status::DECIMAL);
}

/// Executes the CLV (Clear Overflow Flag) instruction.
///
/// There is no matching "set overflow" instruction.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.status.remove(Status::OVERFLOW);
}
