//! # Opcode Table
//!
//! The immutable 256-entry table mapping an opcode byte to its instruction,
//! addressing mode, and base cycle count. It is a `static` built at compile
//! time, so there is nothing to initialise and nothing can mutate it.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105
//! byte values are `None`; the CPU treats them as zero-cycle no-ops and reports
//! them through [`ExecutionError::IllegalOpcode`](crate::ExecutionError).

use std::fmt;

use crate::addressing::AddressingMode;

/// The 56 documented 6502 instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Add with carry
    Adc,
    /// Logical AND
    And,
    /// Arithmetic shift left
    Asl,
    /// Branch if carry clear
    Bcc,
    /// Branch if carry set
    Bcs,
    /// Branch if equal (Z set)
    Beq,
    /// Bit test
    Bit,
    /// Branch if minus (N set)
    Bmi,
    /// Branch if not equal (Z clear)
    Bne,
    /// Branch if plus (N clear)
    Bpl,
    /// Force interrupt
    Brk,
    /// Branch if overflow clear
    Bvc,
    /// Branch if overflow set
    Bvs,
    /// Clear carry
    Clc,
    /// Clear decimal mode
    Cld,
    /// Clear interrupt disable
    Cli,
    /// Clear overflow
    Clv,
    /// Compare accumulator
    Cmp,
    /// Compare X
    Cpx,
    /// Compare Y
    Cpy,
    /// Decrement memory
    Dec,
    /// Decrement X
    Dex,
    /// Decrement Y
    Dey,
    /// Exclusive OR
    Eor,
    /// Increment memory
    Inc,
    /// Increment X
    Inx,
    /// Increment Y
    Iny,
    /// Jump
    Jmp,
    /// Jump to subroutine
    Jsr,
    /// Load accumulator
    Lda,
    /// Load X
    Ldx,
    /// Load Y
    Ldy,
    /// Logical shift right
    Lsr,
    /// No operation
    Nop,
    /// Logical inclusive OR
    Ora,
    /// Push accumulator
    Pha,
    /// Push processor status
    Php,
    /// Pull accumulator
    Pla,
    /// Pull processor status
    Plp,
    /// Rotate left
    Rol,
    /// Rotate right
    Ror,
    /// Return from interrupt
    Rti,
    /// Return from subroutine
    Rts,
    /// Subtract with carry
    Sbc,
    /// Set carry
    Sec,
    /// Set decimal mode
    Sed,
    /// Set interrupt disable
    Sei,
    /// Store accumulator
    Sta,
    /// Store X
    Stx,
    /// Store Y
    Sty,
    /// Transfer A to X
    Tax,
    /// Transfer A to Y
    Tay,
    /// Transfer stack pointer to X
    Tsx,
    /// Transfer X to A
    Txa,
    /// Transfer X to stack pointer
    Txs,
    /// Transfer Y to A
    Tya,
}

impl Instruction {
    /// Upper-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        use Instruction::*;

        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Descriptor for one defined opcode.
///
/// # Examples
///
/// ```
/// use mos6502_core::{lookup, AddressingMode, Instruction};
///
/// let lda = lookup(0xA9).unwrap();
/// assert_eq!(lda.instruction, Instruction::Lda);
/// assert_eq!(lda.mode, AddressingMode::Immediate);
/// assert_eq!(lda.cycles, 2);
/// assert_eq!(lda.size(), 2);
///
/// // Undefined opcodes have no descriptor
/// assert!(lookup(0x02).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Which instruction the opcode encodes.
    pub instruction: Instruction,

    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,

    /// Base cycle cost. Page-crossing and taken-branch penalties are not modeled.
    pub cycles: u8,
}

impl Opcode {
    /// Total instruction size in bytes, opcode included.
    pub const fn size(&self) -> u8 {
        1 + self.mode.operand_len()
    }
}

const fn op(instruction: Instruction, mode: AddressingMode, cycles: u8) -> Option<Opcode> {
    Some(Opcode {
        instruction,
        mode,
        cycles,
    })
}

/// Complete 256-entry opcode table indexed by opcode byte value.
pub static OPCODE_TABLE: [Option<Opcode>; 256] = {
    use AddressingMode::*;
    use Instruction::*;

    [
        /* 0x00 */ op(Brk, Implied, 7),
        /* 0x01 */ op(Ora, IndirectX, 6),
        /* 0x02 */ None,
        /* 0x03 */ None,
        /* 0x04 */ None,
        /* 0x05 */ op(Ora, ZeroPage, 3),
        /* 0x06 */ op(Asl, ZeroPage, 5),
        /* 0x07 */ None,
        /* 0x08 */ op(Php, Implied, 3),
        /* 0x09 */ op(Ora, Immediate, 2),
        /* 0x0A */ op(Asl, Accumulator, 2),
        /* 0x0B */ None,
        /* 0x0C */ None,
        /* 0x0D */ op(Ora, Absolute, 4),
        /* 0x0E */ op(Asl, Absolute, 6),
        /* 0x0F */ None,
        /* 0x10 */ op(Bpl, Relative, 2),
        /* 0x11 */ op(Ora, IndirectY, 5),
        /* 0x12 */ None,
        /* 0x13 */ None,
        /* 0x14 */ None,
        /* 0x15 */ op(Ora, ZeroPageX, 4),
        /* 0x16 */ op(Asl, ZeroPageX, 6),
        /* 0x17 */ None,
        /* 0x18 */ op(Clc, Implied, 2),
        /* 0x19 */ op(Ora, AbsoluteY, 4),
        /* 0x1A */ None,
        /* 0x1B */ None,
        /* 0x1C */ None,
        /* 0x1D */ op(Ora, AbsoluteX, 4),
        /* 0x1E */ op(Asl, AbsoluteX, 7),
        /* 0x1F */ None,
        /* 0x20 */ op(Jsr, Absolute, 6),
        /* 0x21 */ op(And, IndirectX, 6),
        /* 0x22 */ None,
        /* 0x23 */ None,
        /* 0x24 */ op(Bit, ZeroPage, 3),
        /* 0x25 */ op(And, ZeroPage, 3),
        /* 0x26 */ op(Rol, ZeroPage, 5),
        /* 0x27 */ None,
        /* 0x28 */ op(Plp, Implied, 4),
        /* 0x29 */ op(And, Immediate, 2),
        /* 0x2A */ op(Rol, Accumulator, 2),
        /* 0x2B */ None,
        /* 0x2C */ op(Bit, Absolute, 4),
        /* 0x2D */ op(And, Absolute, 4),
        /* 0x2E */ op(Rol, Absolute, 6),
        /* 0x2F */ None,
        /* 0x30 */ op(Bmi, Relative, 2),
        /* 0x31 */ op(And, IndirectY, 5),
        /* 0x32 */ None,
        /* 0x33 */ None,
        /* 0x34 */ None,
        /* 0x35 */ op(And, ZeroPageX, 4),
        /* 0x36 */ op(Rol, ZeroPageX, 6),
        /* 0x37 */ None,
        /* 0x38 */ op(Sec, Implied, 2),
        /* 0x39 */ op(And, AbsoluteY, 4),
        /* 0x3A */ None,
        /* 0x3B */ None,
        /* 0x3C */ None,
        /* 0x3D */ op(And, AbsoluteX, 4),
        /* 0x3E */ op(Rol, AbsoluteX, 7),
        /* 0x3F */ None,
        /* 0x40 */ op(Rti, Implied, 6),
        /* 0x41 */ op(Eor, IndirectX, 6),
        /* 0x42 */ None,
        /* 0x43 */ None,
        /* 0x44 */ None,
        /* 0x45 */ op(Eor, ZeroPage, 3),
        /* 0x46 */ op(Lsr, ZeroPage, 5),
        /* 0x47 */ None,
        /* 0x48 */ op(Pha, Implied, 3),
        /* 0x49 */ op(Eor, Immediate, 2),
        /* 0x4A */ op(Lsr, Accumulator, 2),
        /* 0x4B */ None,
        /* 0x4C */ op(Jmp, Absolute, 3),
        /* 0x4D */ op(Eor, Absolute, 4),
        /* 0x4E */ op(Lsr, Absolute, 6),
        /* 0x4F */ None,
        /* 0x50 */ op(Bvc, Relative, 2),
        /* 0x51 */ op(Eor, IndirectY, 5),
        /* 0x52 */ None,
        /* 0x53 */ None,
        /* 0x54 */ None,
        /* 0x55 */ op(Eor, ZeroPageX, 4),
        /* 0x56 */ op(Lsr, ZeroPageX, 6),
        /* 0x57 */ None,
        /* 0x58 */ op(Cli, Implied, 2),
        /* 0x59 */ op(Eor, AbsoluteY, 4),
        /* 0x5A */ None,
        /* 0x5B */ None,
        /* 0x5C */ None,
        /* 0x5D */ op(Eor, AbsoluteX, 4),
        /* 0x5E */ op(Lsr, AbsoluteX, 7),
        /* 0x5F */ None,
        /* 0x60 */ op(Rts, Implied, 6),
        /* 0x61 */ op(Adc, IndirectX, 6),
        /* 0x62 */ None,
        /* 0x63 */ None,
        /* 0x64 */ None,
        /* 0x65 */ op(Adc, ZeroPage, 3),
        /* 0x66 */ op(Ror, ZeroPage, 5),
        /* 0x67 */ None,
        /* 0x68 */ op(Pla, Implied, 4),
        /* 0x69 */ op(Adc, Immediate, 2),
        /* 0x6A */ op(Ror, Accumulator, 2),
        /* 0x6B */ None,
        /* 0x6C */ op(Jmp, Indirect, 5),
        /* 0x6D */ op(Adc, Absolute, 4),
        /* 0x6E */ op(Ror, Absolute, 6),
        /* 0x6F */ None,
        /* 0x70 */ op(Bvs, Relative, 2),
        /* 0x71 */ op(Adc, IndirectY, 5),
        /* 0x72 */ None,
        /* 0x73 */ None,
        /* 0x74 */ None,
        /* 0x75 */ op(Adc, ZeroPageX, 4),
        /* 0x76 */ op(Ror, ZeroPageX, 6),
        /* 0x77 */ None,
        /* 0x78 */ op(Sei, Implied, 2),
        /* 0x79 */ op(Adc, AbsoluteY, 4),
        /* 0x7A */ None,
        /* 0x7B */ None,
        /* 0x7C */ None,
        /* 0x7D */ op(Adc, AbsoluteX, 4),
        /* 0x7E */ op(Ror, AbsoluteX, 7),
        /* 0x7F */ None,
        /* 0x80 */ None,
        /* 0x81 */ op(Sta, IndirectX, 6),
        /* 0x82 */ None,
        /* 0x83 */ None,
        /* 0x84 */ op(Sty, ZeroPage, 3),
        /* 0x85 */ op(Sta, ZeroPage, 3),
        /* 0x86 */ op(Stx, ZeroPage, 3),
        /* 0x87 */ None,
        /* 0x88 */ op(Dey, Implied, 2),
        /* 0x89 */ None,
        /* 0x8A */ op(Txa, Implied, 2),
        /* 0x8B */ None,
        /* 0x8C */ op(Sty, Absolute, 4),
        /* 0x8D */ op(Sta, Absolute, 4),
        /* 0x8E */ op(Stx, Absolute, 4),
        /* 0x8F */ None,
        /* 0x90 */ op(Bcc, Relative, 2),
        /* 0x91 */ op(Sta, IndirectY, 6),
        /* 0x92 */ None,
        /* 0x93 */ None,
        /* 0x94 */ op(Sty, ZeroPageX, 4),
        /* 0x95 */ op(Sta, ZeroPageX, 4),
        /* 0x96 */ op(Stx, ZeroPageY, 4),
        /* 0x97 */ None,
        /* 0x98 */ op(Tya, Implied, 2),
        /* 0x99 */ op(Sta, AbsoluteY, 5),
        /* 0x9A */ op(Txs, Implied, 2),
        /* 0x9B */ None,
        /* 0x9C */ None,
        /* 0x9D */ op(Sta, AbsoluteX, 5),
        /* 0x9E */ None,
        /* 0x9F */ None,
        /* 0xA0 */ op(Ldy, Immediate, 2),
        /* 0xA1 */ op(Lda, IndirectX, 6),
        /* 0xA2 */ op(Ldx, Immediate, 2),
        /* 0xA3 */ None,
        /* 0xA4 */ op(Ldy, ZeroPage, 3),
        /* 0xA5 */ op(Lda, ZeroPage, 3),
        /* 0xA6 */ op(Ldx, ZeroPage, 3),
        /* 0xA7 */ None,
        /* 0xA8 */ op(Tay, Implied, 2),
        /* 0xA9 */ op(Lda, Immediate, 2),
        /* 0xAA */ op(Tax, Implied, 2),
        /* 0xAB */ None,
        /* 0xAC */ op(Ldy, Absolute, 4),
        /* 0xAD */ op(Lda, Absolute, 4),
        /* 0xAE */ op(Ldx, Absolute, 4),
        /* 0xAF */ None,
        /* 0xB0 */ op(Bcs, Relative, 2),
        /* 0xB1 */ op(Lda, IndirectY, 5),
        /* 0xB2 */ None,
        /* 0xB3 */ None,
        /* 0xB4 */ op(Ldy, ZeroPageX, 4),
        /* 0xB5 */ op(Lda, ZeroPageX, 4),
        /* 0xB6 */ op(Ldx, ZeroPageY, 4),
        /* 0xB7 */ None,
        /* 0xB8 */ op(Clv, Implied, 2),
        /* 0xB9 */ op(Lda, AbsoluteY, 4),
        /* 0xBA */ op(Tsx, Implied, 2),
        /* 0xBB */ None,
        /* 0xBC */ op(Ldy, AbsoluteX, 4),
        /* 0xBD */ op(Lda, AbsoluteX, 4),
        /* 0xBE */ op(Ldx, AbsoluteY, 4),
        /* 0xBF */ None,
        /* 0xC0 */ op(Cpy, Immediate, 2),
        /* 0xC1 */ op(Cmp, IndirectX, 6),
        /* 0xC2 */ None,
        /* 0xC3 */ None,
        /* 0xC4 */ op(Cpy, ZeroPage, 3),
        /* 0xC5 */ op(Cmp, ZeroPage, 3),
        /* 0xC6 */ op(Dec, ZeroPage, 5),
        /* 0xC7 */ None,
        /* 0xC8 */ op(Iny, Implied, 2),
        /* 0xC9 */ op(Cmp, Immediate, 2),
        /* 0xCA */ op(Dex, Implied, 2),
        /* 0xCB */ None,
        /* 0xCC */ op(Cpy, Absolute, 4),
        /* 0xCD */ op(Cmp, Absolute, 4),
        /* 0xCE */ op(Dec, Absolute, 6),
        /* 0xCF */ None,
        /* 0xD0 */ op(Bne, Relative, 2),
        /* 0xD1 */ op(Cmp, IndirectY, 5),
        /* 0xD2 */ None,
        /* 0xD3 */ None,
        /* 0xD4 */ None,
        /* 0xD5 */ op(Cmp, ZeroPageX, 4),
        /* 0xD6 */ op(Dec, ZeroPageX, 6),
        /* 0xD7 */ None,
        /* 0xD8 */ op(Cld, Implied, 2),
        /* 0xD9 */ op(Cmp, AbsoluteY, 4),
        /* 0xDA */ None,
        /* 0xDB */ None,
        /* 0xDC */ None,
        /* 0xDD */ op(Cmp, AbsoluteX, 4),
        /* 0xDE */ op(Dec, AbsoluteX, 7),
        /* 0xDF */ None,
        /* 0xE0 */ op(Cpx, Immediate, 2),
        /* 0xE1 */ op(Sbc, IndirectX, 6),
        /* 0xE2 */ None,
        /* 0xE3 */ None,
        /* 0xE4 */ op(Cpx, ZeroPage, 3),
        /* 0xE5 */ op(Sbc, ZeroPage, 3),
        /* 0xE6 */ op(Inc, ZeroPage, 5),
        /* 0xE7 */ None,
        /* 0xE8 */ op(Inx, Implied, 2),
        /* 0xE9 */ op(Sbc, Immediate, 2),
        /* 0xEA */ op(Nop, Implied, 2),
        /* 0xEB */ None,
        /* 0xEC */ op(Cpx, Absolute, 4),
        /* 0xED */ op(Sbc, Absolute, 4),
        /* 0xEE */ op(Inc, Absolute, 6),
        /* 0xEF */ None,
        /* 0xF0 */ op(Beq, Relative, 2),
        /* 0xF1 */ op(Sbc, IndirectY, 5),
        /* 0xF2 */ None,
        /* 0xF3 */ None,
        /* 0xF4 */ None,
        /* 0xF5 */ op(Sbc, ZeroPageX, 4),
        /* 0xF6 */ op(Inc, ZeroPageX, 6),
        /* 0xF7 */ None,
        /* 0xF8 */ op(Sed, Implied, 2),
        /* 0xF9 */ op(Sbc, AbsoluteY, 4),
        /* 0xFA */ None,
        /* 0xFB */ None,
        /* 0xFC */ None,
        /* 0xFD */ op(Sbc, AbsoluteX, 4),
        /* 0xFE */ op(Inc, AbsoluteX, 7),
        /* 0xFF */ None,
    ]
};

/// Looks up the descriptor for `opcode`, or `None` if it is undefined.
pub fn lookup(opcode: u8) -> Option<&'static Opcode> {
    OPCODE_TABLE[opcode as usize].as_ref()
}
