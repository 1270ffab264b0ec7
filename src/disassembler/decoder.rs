//! Instruction decoder for the 6502 disassembler

use crate::addressing::{resolve, AddressingMode, Operand};
use crate::opcodes::{lookup, Instruction};
use crate::MemoryBus;

/// A single decoded instruction with full metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    pub instruction: Instruction,

    pub mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Operand as the resolver sees it with the supplied index registers
    pub operand: Operand,

    /// Base cycle cost
    pub cycles: u8,
}

impl DecodedInstruction {
    /// Total size in bytes (opcode + operands).
    pub fn size(&self) -> u8 {
        1 + self.operand_bytes.len() as u8
    }

    /// Branch destination for relative instructions.
    pub fn branch_target(&self) -> Option<u16> {
        match self.operand {
            Operand::Offset(offset) => Some(
                self.address
                    .wrapping_add(self.size() as u16)
                    .wrapping_add(offset),
            ),
            _ => None,
        }
    }
}

/// Decodes the instruction at `address`.
///
/// Returns `None` for opcodes outside the documented set. Memory is only read.
pub fn decode<M: MemoryBus + ?Sized>(
    memory: &M,
    address: u16,
    x: u8,
    y: u8,
) -> Option<DecodedInstruction> {
    let opcode = memory.read(address);
    let descriptor = lookup(opcode)?;

    let operand_start = address.wrapping_add(1);
    let mut cursor = operand_start;
    let operand = resolve(descriptor.mode, &mut cursor, x, y, memory);

    let operand_bytes = (0..descriptor.mode.operand_len() as u16)
        .map(|i| memory.read(operand_start.wrapping_add(i)))
        .collect();

    Some(DecodedInstruction {
        address,
        opcode,
        instruction: descriptor.instruction,
        mode: descriptor.mode,
        operand_bytes,
        operand,
        cycles: descriptor.cycles,
    })
}
