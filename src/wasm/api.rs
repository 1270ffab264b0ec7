//! WASM API for the 6502 execution core.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! and disassembly.

use crate::{ExecutionError, FlatMemory, LoadError, MemoryBus, Status, CPU};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

impl From<LoadError> for JsError {
    fn from(err: LoadError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// One line of a disassembly listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator over zeroed 64KB memory
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    /// Load a hex-text program at `offset`
    ///
    /// Whitespace between digits is ignored. Memory is left untouched when the
    /// text does not parse. Registers are not changed; call [`Self::reset`] to
    /// pick up a newly loaded reset vector.
    pub fn load_program(&mut self, hex: &str, offset: u16) -> Result<(), JsError> {
        self.cpu.memory_mut().load_hex(hex, offset)?;
        Ok(())
    }

    /// Reset the CPU, keeping memory
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Advance one clock
    pub fn tick(&mut self) -> Result<(), JsError> {
        self.cpu.tick()?;
        Ok(())
    }

    /// Tick until the current instruction completes
    pub fn step_instruction(&mut self) -> Result<(), JsError> {
        self.cpu.step_instruction()?;
        Ok(())
    }

    /// Whether the next tick fetches a new opcode
    #[wasm_bindgen(getter)]
    pub fn instruction_completed(&self) -> bool {
        self.cpu.instruction_completed()
    }

    /// Raise the maskable interrupt line
    pub fn interrupt_request(&mut self) {
        self.cpu.interrupt_request();
    }

    /// Raise the non-maskable interrupt line
    pub fn non_maskable_interrupt(&mut self) {
        self.cpu.non_maskable_interrupt();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    /// Registers as `{ a, x, y, status, stack_pointer, program_counter }`
    pub fn registers(&self) -> Result<Object, JsValue> {
        let regs = self.cpu.registers();
        let obj = Object::new();

        set(&obj, "a", regs.a.into())?;
        set(&obj, "x", regs.x.into())?;
        set(&obj, "y", regs.y.into())?;
        set(&obj, "status", regs.status.bits().into())?;
        set(&obj, "stack_pointer", regs.sp.into())?;
        set(&obj, "program_counter", regs.pc.into())?;

        Ok(obj)
    }

    /// Flags as `{ n, v, u, b, d, i, z, c }` booleans
    pub fn flags(&self) -> Result<Object, JsValue> {
        let obj = Object::new();

        for (key, flag) in [
            ("n", Status::NEGATIVE),
            ("v", Status::OVERFLOW),
            ("u", Status::UNUSED),
            ("b", Status::BREAK),
            ("d", Status::DECIMAL),
            ("i", Status::INTERRUPT_DISABLE),
            ("z", Status::ZERO),
            ("c", Status::CARRY),
        ] {
            set(&obj, key, self.cpu.flag(flag).into())?;
        }

        Ok(obj)
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Disassemble `start..=end` using the current index registers
    pub fn disassemble(&self, start: u16, end: u16) -> Vec<DisassemblyLine> {
        self.cpu
            .disassemble(start, end)
            .lines()
            .map(|(address, text)| DisassemblyLine {
                address,
                text: text.to_string(),
            })
            .collect()
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}

fn set(obj: &Object, key: &str, value: JsValue) -> Result<(), JsValue> {
    Reflect::set(obj, &JsValue::from_str(key), &value)?;
    Ok(())
}
