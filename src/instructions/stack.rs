//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA / PLA: Push / pull the accumulator
//! - PHP / PLP: Push / pull the processor status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP, and SP wraps in
//! both directions without any overflow check.

use crate::addressing::AddressingMode;
use crate::status::Status;
use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.push(cpu.a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has B and U set. The live register is unchanged.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    let pushed = cpu.status | Status::BREAK | Status::UNUSED;
    cpu.push(pushed.bits());
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.a = cpu.pull();
    cpu.status.set_zn(cpu.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// B is discarded and U is forced set, as with RTI.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    let pulled = cpu.pull();
    cpu.status = Status::from_pulled(pulled);
}
