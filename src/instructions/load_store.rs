//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: Load a register from memory, updating Z and N
//! - STA, STX, STY: Store a register to memory, no flags affected

use super::{effective_address, load_operand};
use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use mos6502_core::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load_hex("00 80", 0xFFFC).unwrap();
/// memory.load_hex("A9 80", 0x8000).unwrap(); // LDA #$80
///
/// let mut cpu = CPU::new(memory);
/// cpu.step_instruction().unwrap();
/// cpu.step_instruction().unwrap();
///
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.flag_n());
/// assert!(!cpu.flag_z());
/// ```
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, _) = load_operand(cpu, mode);
    cpu.a = value;
    cpu.status.set_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, _) = load_operand(cpu, mode);
    cpu.x = value;
    cpu.status.set_zn(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let (value, _) = load_operand(cpu, mode);
    cpu.y = value;
    cpu.status.set_zn(value);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = effective_address(cpu, mode);
    cpu.memory.write(addr, cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = effective_address(cpu, mode);
    cpu.memory.write(addr, cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = effective_address(cpu, mode);
    cpu.memory.write(addr, cpu.y);
}
