//! 6502 Disassembler Module
//!
//! Converts machine code in memory into human-readable listings.
//!
//! Decoding goes through the same opcode table and addressing-mode resolver the
//! CPU executes with, but walks its own cursor. Nothing here can move a live
//! program counter, so a listing can be produced at any time between ticks.
//!
//! # Examples
//!
//! ```
//! use mos6502_core::{disassemble, FlatMemory};
//!
//! let mut memory = FlatMemory::new();
//! memory.load_hex("A9 01 D0 FC 02", 0x8000).unwrap();
//!
//! let listing = disassemble(&memory, 0x8000, 0x8004, 0, 0);
//!
//! assert_eq!(listing.order(), &[0x8000, 0x8002, 0x8004]);
//! assert_eq!(listing.text(0x8000), Some("$8000: LDA #$01 (IMM)"));
//! assert_eq!(listing.text(0x8002), Some("$8002: BNE $FC [$8000] (REL)"));
//! assert_eq!(listing.text(0x8004), Some("$8004: .byte $02"));
//! ```

pub mod decoder;
pub mod formatter;

use std::collections::BTreeMap;

use crate::MemoryBus;

pub use decoder::{decode, DecodedInstruction};

/// The result of sweeping an address range.
///
/// Lines are keyed by the address of their first byte. [`Disassembly::order`]
/// keeps the addresses in the order the sweep visited them, which is also
/// ascending address order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disassembly {
    lines: BTreeMap<u16, String>,
    order: Vec<u16>,
}

impl Disassembly {
    /// Text of the line starting at `address`, if the sweep produced one.
    pub fn text(&self, address: u16) -> Option<&str> {
        self.lines.get(&address).map(String::as_str)
    }

    /// Addresses in visit order.
    pub fn order(&self) -> &[u16] {
        &self.order
    }

    /// Iterates `(address, text)` pairs in visit order.
    pub fn lines(&self) -> impl Iterator<Item = (u16, &str)> + '_ {
        self.order
            .iter()
            .filter_map(|addr| self.text(*addr).map(|text| (*addr, text)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn push(&mut self, address: u16, text: String) {
        self.lines.insert(address, text);
        self.order.push(address);
    }
}

/// Disassembles the inclusive range `start..=end`.
///
/// `x` and `y` are the index register values used to resolve indexed operands.
/// A decoded instruction's operand bytes are skipped; an undefined opcode
/// becomes a one-byte `.byte` line. The sweep never wraps past `$FFFF`, and an
/// empty range (`start > end`) yields an empty listing.
pub fn disassemble<M: MemoryBus + ?Sized>(
    memory: &M,
    start: u16,
    end: u16,
    x: u8,
    y: u8,
) -> Disassembly {
    let mut listing = Disassembly::default();
    let mut cursor = start as u32;

    while cursor <= end as u32 {
        let address = cursor as u16;

        match decode(memory, address, x, y) {
            Some(instr) => {
                cursor += instr.size() as u32;
                listing.push(address, formatter::format_line(&instr));
            }
            None => {
                let opcode = memory.read(address);
                cursor += 1;
                listing.push(address, formatter::format_undefined(address, opcode));
            }
        }
    }

    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_disassemble_empty_range() {
        let memory = FlatMemory::new();
        let listing = disassemble(&memory, 0x8001, 0x8000, 0, 0);

        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
    }

    #[test]
    fn test_operands_are_skipped() {
        let mut memory = FlatMemory::new();
        memory.load_hex("8D 00 02 E8 EA", 0x0600).unwrap();

        let listing = disassemble(&memory, 0x0600, 0x0604, 0, 0);

        assert_eq!(listing.order(), &[0x0600, 0x0603, 0x0604]);
        assert_eq!(listing.text(0x0601), None);
        assert_eq!(listing.text(0x0603), Some("$0603: INX (IMP)"));
    }

    #[test]
    fn test_sweep_stops_at_top_of_memory() {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFE, 0x4C); // JMP abs, operand runs off the end

        let listing = disassemble(&memory, 0xFFFE, 0xFFFF, 0, 0);

        assert_eq!(listing.order(), &[0xFFFE]);
    }

    #[test]
    fn test_lines_follow_visit_order() {
        let mut memory = FlatMemory::new();
        memory.load_hex("18 38", 0x0010).unwrap();

        let listing = disassemble(&memory, 0x0010, 0x0011, 0, 0);
        let lines: Vec<_> = listing.lines().collect();

        assert_eq!(
            lines,
            vec![(0x0010, "$0010: CLC (IMP)"), (0x0011, "$0011: SEC (IMP)")]
        );
    }
}
