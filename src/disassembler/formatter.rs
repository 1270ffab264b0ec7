//! Formatting functions for disassembled instructions
//!
//! Line layout: `$AAAA: MNE operand (MODE)`. Implied instructions have no
//! operand text, and undefined opcodes become `$AAAA: .byte $NN`.

use crate::addressing::AddressingMode;
use crate::disassembler::DecodedInstruction;

/// Formats a decoded instruction as one listing line.
pub fn format_line(instr: &DecodedInstruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        format!(
            "${:04X}: {} ({})",
            instr.address,
            instr.instruction,
            instr.mode.short_name()
        )
    } else {
        format!(
            "${:04X}: {} {} ({})",
            instr.address,
            instr.instruction,
            operand,
            instr.mode.short_name()
        )
    }
}

/// Formats a byte that does not decode to an instruction.
pub fn format_undefined(address: u16, opcode: u8) -> String {
    format!("${address:04X}: .byte ${opcode:02X}")
}

/// Format the operand based on addressing mode
pub fn format_operand(instr: &DecodedInstruction) -> String {
    use AddressingMode::*;

    let byte = instr.operand_bytes.first().copied().unwrap_or(0);
    let word = match instr.operand_bytes.as_slice() {
        [lo, hi] => u16::from_le_bytes([*lo, *hi]),
        _ => byte as u16,
    };

    match instr.mode {
        Implied => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${byte:02X}"),
        ZeroPage => format!("${byte:02X}"),
        ZeroPageX => format!("${byte:02X},X"),
        ZeroPageY => format!("${byte:02X},Y"),
        Relative => {
            let target = instr.branch_target().unwrap_or(instr.address);
            format!("${byte:02X} [${target:04X}]")
        }
        Absolute => format!("${word:04X}"),
        AbsoluteX => format!("${word:04X},X"),
        AbsoluteY => format!("${word:04X},Y"),
        Indirect => format!("(${word:04X})"),
        IndirectX => format!("(${byte:02X},X)"),
        IndirectY => format!("(${byte:02X}),Y"),
    }
}
