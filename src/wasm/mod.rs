//! WebAssembly bindings for the 6502 execution core.
//!
//! This module provides JavaScript-callable interfaces to the CPU, enabling a
//! browser page to load a hex program, step it and inspect registers, flags,
//! memory and a disassembly listing.

pub mod api;

pub use api::{DisassemblyLine, Emulator6502, JsError};
