//! # MOS 6502 Execution Core
//!
//! An NMOS 6502 CPU execution engine: register and flag state, the 13
//! addressing modes, all 151 documented opcodes, interrupt vectoring and a
//! disassembler that shares the CPU's decode path.
//!
//! Execution is cycle-counted. Each [`CPU::tick`] is one clock; an instruction
//! takes effect in full on the tick that fetches it, and the following ticks
//! only burn down its cycle cost.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502_core::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDX #$03; DEX; BNE -3
//! memory.load_hex("A2 03 CA D0 FD", 0x8000).unwrap();
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFF);
//!
//! cpu.step_instruction().unwrap(); // reset sequence
//! for _ in 0..7 {
//!     cpu.step_instruction().unwrap();
//! }
//!
//! assert_eq!(cpu.x(), 0);
//! assert!(cpu.flag_z());
//! assert_eq!(cpu.pc(), 0x8005);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, the tick state machine and interrupts
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Opcode table
//! - `addressing` - Addressing modes and the operand resolver
//! - `status` - Processor status flags
//! - `disassembler` - Read-only listings over a memory range
//! - `wasm` - JavaScript bindings (feature `wasm`)

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{resolve, AddressingMode, Operand};
pub use cpu::{Registers, CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_BASE};
pub use disassembler::{decode, disassemble, DecodedInstruction, Disassembly};
pub use memory::{FlatMemory, LoadError, MemoryBus};
pub use opcodes::{lookup, Instruction, Opcode, OPCODE_TABLE};
pub use status::Status;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched byte is not a documented opcode.
    ///
    /// The byte has already been consumed; PC points past it.
    #[error("illegal opcode ${opcode:02X} at ${address:04X}")]
    IllegalOpcode { opcode: u8, address: u16 },
}
