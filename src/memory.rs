//! # Memory Bus Abstraction
//!
//! The CPU never owns a concrete memory layout. It talks to whatever sits behind
//! the [`MemoryBus`] trait, which keeps the execution engine independent of RAM,
//! ROM, or memory-mapped devices.
//!
//! A blanket implementation for `&mut M` lets a CPU borrow memory owned by the
//! host instead of taking it by value:
//!
//! ```
//! use mos6502_core::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0x80);
//!
//! {
//!     let cpu = CPU::new(&mut memory);
//!     assert_eq!(cpu.pc(), 0x8000);
//! }
//!
//! // The host still owns the memory once the CPU is gone
//! assert_eq!(memory.read(0xFFFD), 0x80);
//! ```

use thiserror::Error;

/// Memory bus trait for CPU to read/write bytes.
///
/// Both operations are total over the 16-bit address space; 6502 hardware has
/// no bus error mechanism, so neither method returns an error.
///
/// # Implementing Custom Memory
///
/// ```
/// use mos6502_core::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         // Writes to ROM are silently ignored
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. Unmapped addresses may return any value.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Read-only or unmapped addresses may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

impl<M: MemoryBus + ?Sized> MemoryBus for &mut M {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

/// Errors produced while loading a hex program string into memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The input had an odd number of hex digits once whitespace was removed.
    #[error("hex program has an odd number of digits ({digits})")]
    OddLength { digits: usize },

    /// A character that is neither whitespace nor a hex digit was found.
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are writable RAM initialised to `0x00`.
///
/// # Examples
///
/// ```
/// use mos6502_core::{FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load_hex("A9 0A 00", 0x8000).unwrap();
///
/// assert_eq!(memory.read(0x8000), 0xA9);
/// assert_eq!(memory.read(0x8001), 0x0A);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `offset`, wrapping past `$FFFF`.
    pub fn load(&mut self, bytes: &[u8], offset: u16) {
        for (i, &byte) in bytes.iter().enumerate() {
            let addr = offset.wrapping_add(i as u16);
            self.data[addr as usize] = byte;
        }
    }

    /// Decodes a whitespace-separated hex string and loads it at `offset`.
    ///
    /// Whitespace is ignored entirely, so `"A90A"` and `"A9 0A"` load the same
    /// two bytes. Nothing is written unless the whole string decodes.
    ///
    /// Returns the number of bytes written.
    pub fn load_hex(&mut self, program: &str, offset: u16) -> Result<usize, LoadError> {
        let bytes = decode_hex(program)?;
        self.load(&bytes, offset);

        log::debug!("Loaded {} bytes at ${:04X}", bytes.len(), offset);

        Ok(bytes.len())
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

fn decode_hex(program: &str) -> Result<Vec<u8>, LoadError> {
    let mut nibbles = Vec::with_capacity(program.len());

    for (position, c) in program.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }

        match c.to_digit(16) {
            Some(nibble) => nibbles.push(nibble as u8),
            None => return Err(LoadError::InvalidDigit { position, found: c }),
        }
    }

    if nibbles.len() % 2 != 0 {
        return Err(LoadError::OddLength {
            digits: nibbles.len(),
        });
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_load_hex_with_mixed_whitespace() {
        let mut mem = FlatMemory::new();

        let written = mem.load_hex("a9 0A\n8D\t00  02", 0x0600).unwrap();

        assert_eq!(written, 5);
        assert_eq!(mem.read(0x0600), 0xA9);
        assert_eq!(mem.read(0x0601), 0x0A);
        assert_eq!(mem.read(0x0602), 0x8D);
        assert_eq!(mem.read(0x0603), 0x00);
        assert_eq!(mem.read(0x0604), 0x02);
    }

    #[test]
    fn test_load_hex_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();

        mem.load_hex("11 22 33", 0xFFFE).unwrap();

        assert_eq!(mem.read(0xFFFE), 0x11);
        assert_eq!(mem.read(0xFFFF), 0x22);
        assert_eq!(mem.read(0x0000), 0x33);
    }

    #[test]
    fn test_load_hex_rejects_bad_digit_without_writing() {
        let mut mem = FlatMemory::new();

        let err = mem.load_hex("A9 ZZ", 0x8000).unwrap_err();

        assert_eq!(
            err,
            LoadError::InvalidDigit {
                position: 3,
                found: 'Z'
            }
        );
        assert_eq!(mem.read(0x8000), 0x00);
    }

    #[test]
    fn test_load_hex_rejects_odd_length() {
        let mut mem = FlatMemory::new();

        let err = mem.load_hex("A9 0", 0x8000).unwrap_err();

        assert_eq!(err, LoadError::OddLength { digits: 3 });
        assert_eq!(err.to_string(), "hex program has an odd number of digits (3)");
    }

    #[test]
    fn test_borrowed_memory_is_a_bus() {
        fn poke<M: MemoryBus>(mut bus: M) -> u8 {
            bus.write(0x0200, 0x99);
            bus.read(0x0200)
        }

        let mut mem = FlatMemory::new();

        assert_eq!(poke(&mut mem), 0x99);
        assert_eq!(mem.read(0x0200), 0x99);
    }
}
