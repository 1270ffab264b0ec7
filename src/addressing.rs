//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver that
//! turns instruction-stream bytes into an [`Operand`].
//!
//! The resolver never touches a CPU. It takes a program-counter cursor by
//! mutable reference, advances it past the bytes it consumed, and reads through
//! any [`MemoryBus`]. The CPU passes its live PC; the disassembler passes a
//! private cursor, so decoding never disturbs execution state.

use crate::MemoryBus;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        use AddressingMode::*;

        match self {
            Implied | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    /// Three-letter tag used in disassembly listings.
    pub const fn short_name(self) -> &'static str {
        use AddressingMode::*;

        match self {
            Implied => "IMP",
            Accumulator => "ACC",
            Immediate => "IMM",
            ZeroPage => "ZP0",
            ZeroPageX => "ZPX",
            ZeroPageY => "ZPY",
            Relative => "REL",
            Absolute => "ABS",
            AbsoluteX => "ABX",
            AbsoluteY => "ABY",
            Indirect => "IND",
            IndirectX => "INX",
            IndirectY => "INY",
        }
    }
}

/// The outcome of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Implied mode: nothing to read or write.
    None,

    /// Accumulator mode: the operand is register A.
    Accumulator,

    /// Effective memory address. For immediate mode this is the address of the
    /// operand byte inside the instruction stream.
    Address(u16),

    /// Relative mode: the branch offset sign-extended to 16 bits, to be added
    /// to PC with wrapping arithmetic.
    Offset(u16),
}

/// Resolves `mode`, consuming operand bytes at `*pc` and advancing it.
///
/// `x` and `y` are the index register values to apply. All address arithmetic
/// wraps modulo 65536; zero-page indexing and zero-page pointer fetches wrap
/// within page 0.
///
/// # Examples
///
/// ```
/// use mos6502_core::{resolve, AddressingMode, FlatMemory, MemoryBus, Operand};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0200, 0xF0); // $F0,X
///
/// let mut pc = 0x0200;
/// let operand = resolve(AddressingMode::ZeroPageX, &mut pc, 0x20, 0x00, &memory);
///
/// assert_eq!(operand, Operand::Address(0x0010)); // wrapped inside page 0
/// assert_eq!(pc, 0x0201);
/// ```
pub fn resolve<M: MemoryBus + ?Sized>(
    mode: AddressingMode,
    pc: &mut u16,
    x: u8,
    y: u8,
    memory: &M,
) -> Operand {
    use AddressingMode::*;

    match mode {
        Implied => Operand::None,
        Accumulator => Operand::Accumulator,
        Immediate => {
            let addr = *pc;
            *pc = pc.wrapping_add(1);
            Operand::Address(addr)
        }
        ZeroPage => Operand::Address(fetch_byte(pc, memory) as u16),
        ZeroPageX => Operand::Address(fetch_byte(pc, memory).wrapping_add(x) as u16),
        ZeroPageY => Operand::Address(fetch_byte(pc, memory).wrapping_add(y) as u16),
        Absolute => Operand::Address(fetch_word(pc, memory)),
        AbsoluteX => Operand::Address(fetch_word(pc, memory).wrapping_add(x as u16)),
        AbsoluteY => Operand::Address(fetch_word(pc, memory).wrapping_add(y as u16)),
        Indirect => {
            // No page-wrap quirk: the high byte comes from pointer + 1 proper
            let pointer = fetch_word(pc, memory);
            let lo = memory.read(pointer);
            let hi = memory.read(pointer.wrapping_add(1));
            Operand::Address(u16::from_le_bytes([lo, hi]))
        }
        IndirectX => {
            let pointer = fetch_byte(pc, memory).wrapping_add(x);
            Operand::Address(read_zero_page_word(pointer, memory))
        }
        IndirectY => {
            let pointer = fetch_byte(pc, memory);
            let base = read_zero_page_word(pointer, memory);
            Operand::Address(base.wrapping_add(y as u16))
        }
        Relative => {
            let offset = fetch_byte(pc, memory);
            Operand::Offset(offset as i8 as i16 as u16)
        }
    }
}

fn fetch_byte<M: MemoryBus + ?Sized>(pc: &mut u16, memory: &M) -> u8 {
    let value = memory.read(*pc);
    *pc = pc.wrapping_add(1);
    value
}

fn fetch_word<M: MemoryBus + ?Sized>(pc: &mut u16, memory: &M) -> u16 {
    let lo = fetch_byte(pc, memory);
    let hi = fetch_byte(pc, memory);
    u16::from_le_bytes([lo, hi])
}

fn read_zero_page_word<M: MemoryBus + ?Sized>(pointer: u8, memory: &M) -> u16 {
    let lo = memory.read(pointer as u16);
    let hi = memory.read(pointer.wrapping_add(1) as u16);
    u16::from_le_bytes([lo, hi])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn memory_with(bytes: &[(u16, u8)]) -> FlatMemory {
        let mut memory = FlatMemory::new();
        for &(addr, value) in bytes {
            memory.write(addr, value);
        }
        memory
    }

    #[test]
    fn test_implied_and_accumulator_consume_nothing() {
        let memory = FlatMemory::new();
        let mut pc = 0x8000;

        assert_eq!(
            resolve(AddressingMode::Implied, &mut pc, 0, 0, &memory),
            Operand::None
        );
        assert_eq!(
            resolve(AddressingMode::Accumulator, &mut pc, 0, 0, &memory),
            Operand::Accumulator
        );
        assert_eq!(pc, 0x8000);
    }

    #[test]
    fn test_immediate_returns_operand_byte_address() {
        let memory = FlatMemory::new();
        let mut pc = 0x8001;

        let operand = resolve(AddressingMode::Immediate, &mut pc, 0, 0, &memory);

        assert_eq!(operand, Operand::Address(0x8001));
        assert_eq!(pc, 0x8002);
    }

    #[test]
    fn test_absolute_indexed_crosses_pages() {
        let memory = memory_with(&[(0x8000, 0xF0), (0x8001, 0x12)]);
        let mut pc = 0x8000;

        let operand = resolve(AddressingMode::AbsoluteY, &mut pc, 0, 0x20, &memory);

        assert_eq!(operand, Operand::Address(0x1310));
        assert_eq!(pc, 0x8002);
    }

    #[test]
    fn test_absolute_x_wraps_address_space() {
        let memory = memory_with(&[(0x8000, 0xFF), (0x8001, 0xFF)]);
        let mut pc = 0x8000;

        let operand = resolve(AddressingMode::AbsoluteX, &mut pc, 0x02, 0, &memory);

        assert_eq!(operand, Operand::Address(0x0001));
    }

    #[test]
    fn test_indirect_reads_pointer_without_page_bug() {
        let memory = memory_with(&[
            (0x8000, 0xFF),
            (0x8001, 0x10),
            (0x10FF, 0x34),
            (0x1100, 0x12),
            (0x1000, 0x99),
        ]);
        let mut pc = 0x8000;

        let operand = resolve(AddressingMode::Indirect, &mut pc, 0, 0, &memory);

        assert_eq!(operand, Operand::Address(0x1234));
        assert_eq!(pc, 0x8002);
    }

    #[test]
    fn test_indirect_x_wraps_pointer_in_zero_page() {
        let memory = memory_with(&[(0x8000, 0xFE), (0x00FF, 0x00), (0x0000, 0x40)]);
        let mut pc = 0x8000;

        // $FE + 1 = $FF, high byte of the pointer read from $00
        let operand = resolve(AddressingMode::IndirectX, &mut pc, 0x01, 0, &memory);

        assert_eq!(operand, Operand::Address(0x4000));
        assert_eq!(pc, 0x8001);
    }

    #[test]
    fn test_indirect_y_adds_y_after_dereference() {
        let memory = memory_with(&[(0x8000, 0x40), (0x0040, 0xFF), (0x0041, 0x20)]);
        let mut pc = 0x8000;

        let operand = resolve(AddressingMode::IndirectY, &mut pc, 0, 0x01, &memory);

        assert_eq!(operand, Operand::Address(0x2100));
    }

    #[test]
    fn test_relative_sign_extends() {
        let memory = memory_with(&[(0x8000, 0xFE), (0x8001, 0x7F)]);
        let mut pc = 0x8000;

        assert_eq!(
            resolve(AddressingMode::Relative, &mut pc, 0, 0, &memory),
            Operand::Offset(0xFFFE)
        );
        assert_eq!(
            resolve(AddressingMode::Relative, &mut pc, 0, 0, &memory),
            Operand::Offset(0x007F)
        );
        assert_eq!(pc, 0x8002);
    }

    #[test]
    fn test_operand_len_matches_bytes_consumed() {
        use AddressingMode::*;

        let memory = FlatMemory::new();
        for mode in [
            Implied,
            Accumulator,
            Immediate,
            ZeroPage,
            ZeroPageX,
            ZeroPageY,
            Relative,
            Absolute,
            AbsoluteX,
            AbsoluteY,
            Indirect,
            IndirectX,
            IndirectY,
        ] {
            let mut pc = 0x4000;
            resolve(mode, &mut pc, 0x10, 0x20, &memory);
            assert_eq!(pc - 0x4000, mode.operand_len() as u16, "{mode:?}");
        }
    }
}
