//! Property-based tests for the addressing-mode resolver.

use mos6502_core::{resolve, AddressingMode, FlatMemory, MemoryBus, Operand};
use proptest::prelude::*;

const ALL_MODES: [AddressingMode; 13] = [
    AddressingMode::Implied,
    AddressingMode::Accumulator,
    AddressingMode::Immediate,
    AddressingMode::ZeroPage,
    AddressingMode::ZeroPageX,
    AddressingMode::ZeroPageY,
    AddressingMode::Relative,
    AddressingMode::Absolute,
    AddressingMode::AbsoluteX,
    AddressingMode::AbsoluteY,
    AddressingMode::Indirect,
    AddressingMode::IndirectX,
    AddressingMode::IndirectY,
];

fn memory_with(pc: u16, bytes: &[u8]) -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.load(bytes, pc);
    memory
}

proptest! {
    /// Property: the cursor advances by exactly the operand length, wrapping at $FFFF
    #[test]
    fn prop_cursor_advances_by_operand_len(
        mode in prop::sample::select(ALL_MODES.to_vec()),
        pc in any::<u16>(),
        x in any::<u8>(),
        y in any::<u8>(),
        bytes in any::<[u8; 2]>(),
    ) {
        let memory = memory_with(pc, &bytes);
        let mut cursor = pc;

        resolve(mode, &mut cursor, x, y, &memory);

        prop_assert_eq!(cursor, pc.wrapping_add(mode.operand_len() as u16));
    }

    /// Property: zero-page indexed modes never leave page 0
    #[test]
    fn prop_zero_page_indexed_stays_in_page_zero(base in any::<u8>(), index in any::<u8>()) {
        let memory = memory_with(0x4000, &[base]);

        for mode in [AddressingMode::ZeroPageX, AddressingMode::ZeroPageY] {
            let mut cursor = 0x4000;
            let operand = resolve(mode, &mut cursor, index, index, &memory);
            prop_assert_eq!(operand, Operand::Address(base.wrapping_add(index) as u16));
        }
    }

    /// Property: absolute indexed adds the full index with 16-bit wrap
    #[test]
    fn prop_absolute_indexed(base in any::<u16>(), x in any::<u8>(), y in any::<u8>()) {
        let memory = memory_with(0x4000, &base.to_le_bytes());

        let mut cursor = 0x4000;
        let abx = resolve(AddressingMode::AbsoluteX, &mut cursor, x, y, &memory);
        let mut cursor = 0x4000;
        let aby = resolve(AddressingMode::AbsoluteY, &mut cursor, x, y, &memory);

        prop_assert_eq!(abx, Operand::Address(base.wrapping_add(x as u16)));
        prop_assert_eq!(aby, Operand::Address(base.wrapping_add(y as u16)));
    }

    /// Property: indexed-indirect reads both pointer bytes from page 0
    #[test]
    fn prop_indirect_x_pointer_in_page_zero(zp in any::<u8>(), x in any::<u8>(), target in any::<u16>()) {
        let mut memory = memory_with(0x4000, &[zp]);
        let pointer = zp.wrapping_add(x);
        let [lo, hi] = target.to_le_bytes();
        memory.write(pointer as u16, lo);
        memory.write(pointer.wrapping_add(1) as u16, hi);

        let mut cursor = 0x4000;
        let operand = resolve(AddressingMode::IndirectX, &mut cursor, x, 0, &memory);

        prop_assert_eq!(operand, Operand::Address(target));
    }

    /// Property: relative offsets are sign-extended
    #[test]
    fn prop_relative_sign_extension(offset in any::<u8>(), pc in any::<u16>()) {
        let memory = memory_with(pc, &[offset]);
        let mut cursor = pc;

        let operand = resolve(AddressingMode::Relative, &mut cursor, 0, 0, &memory);

        let Operand::Offset(extended) = operand else {
            return Err(TestCaseError::fail("relative mode must yield an offset"));
        };
        prop_assert_eq!(extended as i16, offset as i8 as i16);
    }
}
