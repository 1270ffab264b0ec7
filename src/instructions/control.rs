//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation
//!
//! Stack layout for a call: JSR pushes `PC - 1` (the address of its own last
//! byte), high byte first. RTS pulls low then high and adds one.
//!
//! Stack layout for an interrupt: PCH, PCL, then status. RTI pulls in reverse
//! and does not adjust the address.

use super::effective_address;
use crate::addressing::AddressingMode;
use crate::cpu::IRQ_VECTOR;
use crate::status::Status;
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Absolute (0x4C) jumps to the operand; Indirect (0x6C) jumps to the address
/// stored at the operand. No flags affected.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.pc = effective_address(cpu, mode);
}

/// Executes the JSR (Jump to Subroutine) instruction.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let target = effective_address(cpu, mode);

    // PC now points at the next instruction
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);

    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Sets I, pushes the return address and the status byte with B set, then
/// loads PC from the IRQ/BRK vector at `$FFFE/$FFFF`. The byte after the BRK
/// opcode is a padding byte, so the pushed return address skips it.
///
/// B exists only in the pushed copy; the live register keeps it clear.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    let return_address = cpu.pc.wrapping_add(1);

    cpu.status.insert(Status::INTERRUPT_DISABLE);
    cpu.push_word(return_address);
    cpu.push((cpu.status | Status::BREAK | Status::UNUSED).bits());

    cpu.pc = cpu.read_vector(IRQ_VECTOR);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status (B discarded, U forced set), then PCL, then PCH.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    let status = cpu.pull();
    cpu.status = Status::from_pulled(status);
    cpu.pc = cpu.pull_word();
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn nop<M: MemoryBus>(_cpu: &mut CPU<M>, _mode: AddressingMode) {}
