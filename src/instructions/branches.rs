//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch on carry clear / set
//! - BNE / BEQ: Branch on zero clear / set
//! - BPL / BMI: Branch on negative clear / set
//! - BVC / BVS: Branch on overflow clear / set
//!
//! All branches use relative addressing. The resolver hands back the offset
//! already sign-extended to 16 bits, so a taken branch is a wrapping add to the
//! PC (which by then points past the offset byte). Taken-branch and
//! page-crossing penalties are not modeled.

use super::load_operand;
use crate::addressing::{AddressingMode, Operand};
use crate::status::Status;
use crate::{MemoryBus, CPU};

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, flag: Status, when_set: bool) {
    let (_, operand) = load_operand(cpu, mode);

    if let Operand::Offset(offset) = operand {
        if cpu.status.contains(flag) == when_set {
            cpu.pc = cpu.pc.wrapping_add(offset);
        }
    }
}

pub(crate) fn bcc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, Status::CARRY, false);
}

pub(crate) fn bcs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, Status::CARRY, true);
}

pub(crate) fn bne<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, Status::ZERO, false);
}

pub(crate) fn beq<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, Status::ZERO, true);
}

pub(crate) fn bpl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, Status::NEGATIVE, false);
}

pub(crate) fn bmi<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, Status::NEGATIVE, true);
}

pub(crate) fn bvc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, Status::OVERFLOW, false);
}

pub(crate) fn bvs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    branch_if(cpu, mode, Status::OVERFLOW, true);
}
