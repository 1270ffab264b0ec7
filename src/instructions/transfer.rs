//! # Register Transfer Instructions
//!
//! - TAX, TAY: Copy A into X / Y
//! - TXA, TYA: Copy X / Y into A
//! - TSX: Copy SP into X
//! - TXS: Copy X into SP
//!
//! Every transfer except TXS updates Z and N from the copied value.

use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.x = cpu.a;
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.y = cpu.a;
    cpu.status.set_zn(cpu.y);
}

pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.a = cpu.x;
    cpu.status.set_zn(cpu.a);
}

pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.a = cpu.y;
    cpu.status.set_zn(cpu.a);
}

pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.x = cpu.sp;
    cpu.status.set_zn(cpu.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that leaves the flags alone.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) {
    cpu.sp = cpu.x;
}
