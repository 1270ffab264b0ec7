//! # CPU State and Execution
//!
//! This module contains the [`CPU`] struct and its tick-driven timing state machine.
//!
//! ## Execution Model
//!
//! The engine is cycle-*counted*, not cycle-*stepped*. Each call to
//! [`CPU::tick`] is one clock:
//!
//! - **Busy** (`cycles_remaining > 0`): the counter is decremented and nothing
//!   else happens.
//! - **Ready** (`cycles_remaining == 0`): the next opcode is fetched, its
//!   addressing mode resolved, and the instruction executed in full. The counter
//!   is then loaded with the opcode's base cycle count.
//!
//! An instruction with a base cost of `n` therefore leaves
//! [`CPU::instruction_completed`] false for `n - 1` ticks after the fetch.

use crate::addressing::{resolve, AddressingMode, Operand};
use crate::disassembler::{self, Disassembly};
use crate::instructions;
use crate::opcodes::lookup;
use crate::status::Status;
use crate::{ExecutionError, MemoryBus};

/// Address of the NMI vector (low byte; high byte follows).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Address of the reset vector (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector (low byte; high byte follows).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// First address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

const RESET_CYCLES: u8 = 6;
const IRQ_CYCLES: u8 = 7;
const NMI_CYCLES: u8 = 8;

/// A copy of the programmer-visible registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory bus. Pass `&mut memory` to keep ownership of the
/// memory with the caller, or pass the memory by value and reach it through
/// [`CPU::memory`] / [`CPU::memory_mut`].
///
/// # Examples
///
/// ```
/// use mos6502_core::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load_hex("00 80", 0xFFFC).unwrap();
/// memory.load_hex("A9 0A", 0x8000).unwrap(); // LDA #$0A
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
///
/// // Drain the reset sequence, then run LDA
/// cpu.step_instruction().unwrap();
/// cpu.step_instruction().unwrap();
///
/// assert_eq!(cpu.a(), 0x0A);
/// assert!(cpu.instruction_completed());
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) a: u8,
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) pc: u16,
    pub(crate) sp: u8,
    pub(crate) status: Status,

    /// Ticks left before the next fetch
    cycles_remaining: u8,

    /// Total ticks since construction
    cycles: u64,

    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU bound to `memory` and puts it through [`CPU::reset`].
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            status: Status::POWER_ON,
            cycles_remaining: 0,
            cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Advances the CPU by one clock.
    ///
    /// When the CPU is ready, this fetches and executes a whole instruction.
    /// An undefined opcode is skipped as a zero-cycle no-op (PC moves past it)
    /// and reported as [`ExecutionError::IllegalOpcode`]; execution can carry on
    /// with the next tick regardless.
    pub fn tick(&mut self) -> Result<(), ExecutionError> {
        self.cycles += 1;

        if self.cycles_remaining > 0 {
            self.cycles_remaining -= 1;
            return Ok(());
        }

        let address = self.pc;
        let opcode = self.memory.read(address);
        self.pc = self.pc.wrapping_add(1);

        let Some(descriptor) = lookup(opcode) else {
            log::warn!("Illegal opcode ${opcode:02X} at ${address:04X}");
            return Err(ExecutionError::IllegalOpcode { opcode, address });
        };

        log::trace!(
            "${address:04X}: {} {} (${opcode:02X})",
            descriptor.instruction,
            descriptor.mode.short_name()
        );

        instructions::execute(self, descriptor.instruction, descriptor.mode);
        self.cycles_remaining = descriptor.cycles;

        Ok(())
    }

    /// Returns true when the next tick will fetch a new opcode.
    pub fn instruction_completed(&self) -> bool {
        self.cycles_remaining == 0
    }

    /// Ticks once, then keeps ticking until the current instruction completes.
    ///
    /// If the CPU is busy with a reset or interrupt sequence, this finishes that
    /// sequence instead of running an instruction.
    pub fn step_instruction(&mut self) -> Result<(), ExecutionError> {
        self.tick()?;
        while !self.instruction_completed() {
            self.tick()?;
        }
        Ok(())
    }

    /// Runs for `budget` ticks.
    ///
    /// Stops early with the error on the first illegal opcode; the tick that
    /// hit it is counted. [`CPU::cycles`] tells how far the run got.
    pub fn run_for_ticks(&mut self, budget: u64) -> Result<(), ExecutionError> {
        for _ in 0..budget {
            self.tick()?;
        }
        Ok(())
    }

    /// Reinitialises every register from the reset vector.
    ///
    /// A, X and Y are cleared, SP becomes `0xFF`, and the status register keeps
    /// only the unused bit. Memory is not touched. Takes 6 cycles.
    pub fn reset(&mut self) {
        self.pc = self.read_vector(RESET_VECTOR);
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFF;
        self.status = Status::POWER_ON;
        self.cycles_remaining = RESET_CYCLES;

        log::debug!("Reset, PC=${:04X}", self.pc);
    }

    /// Raises the maskable interrupt line.
    ///
    /// Ignored while the I flag is set. Otherwise sets I before pushing, so the
    /// saved status has I set.
    pub fn interrupt_request(&mut self) {
        if self.status.contains(Status::INTERRUPT_DISABLE) {
            log::debug!("IRQ masked at PC=${:04X}", self.pc);
            return;
        }

        self.status.insert(Status::INTERRUPT_DISABLE);
        self.interrupt(IRQ_VECTOR);
        self.cycles_remaining = IRQ_CYCLES;

        log::debug!("IRQ, PC=${:04X}", self.pc);
    }

    /// Raises the non-maskable interrupt line. Never ignored.
    ///
    /// The I flag is left as it was, both live and in the pushed status.
    pub fn non_maskable_interrupt(&mut self) {
        self.interrupt(NMI_VECTOR);
        self.cycles_remaining = NMI_CYCLES;

        log::debug!("NMI, PC=${:04X}", self.pc);
    }

    fn interrupt(&mut self, vector: u16) {
        self.push_word(self.pc);
        self.push(self.status.bits());
        self.pc = self.read_vector(vector);
    }

    /// Disassembles `start..=end` without touching execution state.
    ///
    /// Index registers are taken from the CPU so that the resolved operands of
    /// indexed modes match what execution would see right now.
    pub fn disassemble(&self, start: u16, end: u16) -> Disassembly {
        disassembler::disassemble(&self.memory, start, end, self.x, self.y)
    }

    // ========== Internal helpers ==========

    /// Resolves `mode` against the live PC and index registers.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        resolve(mode, &mut self.pc, self.x, self.y, &self.memory)
    }

    pub(crate) fn read_vector(&self, vector: u16) -> u16 {
        let lo = self.memory.read(vector);
        let hi = self.memory.read(vector.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes high byte, then low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    /// Pulls low byte, then high byte.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The stack occupies `$0100-$01FF` and grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed `NV-BDIZC` byte.
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    /// Returns the status register as flags.
    pub fn status_flags(&self) -> Status {
        self.status
    }

    /// Returns true if every bit of `flag` is set.
    pub fn flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Ticks left before the next fetch.
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles_remaining
    }

    /// Total ticks since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns a copy of the registers.
    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            status: self.status,
        }
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag(Status::OVERFLOW)
    }

    /// Returns true if the Unused flag is set, which it always is.
    pub fn flag_u(&self) -> bool {
        self.flag(Status::UNUSED)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag(Status::CARRY)
    }

    // ========== Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Overwrites the status register. The unused bit stays set.
    pub fn set_status(&mut self, value: u8) {
        self.status = Status::from_bits_retain(value) | Status::UNUSED;
    }

    /// Sets or clears `flag`. The unused bit stays set.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
        self.status.insert(Status::UNUSED);
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.set_flag(Status::NEGATIVE, value);
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.set_flag(Status::OVERFLOW, value);
    }

    /// Sets or clears the Break flag.
    ///
    /// Only meaningful for hosts poking state; no instruction sets B live.
    pub fn set_flag_b(&mut self, value: bool) {
        self.set_flag(Status::BREAK, value);
    }

    /// Sets or clears the Decimal flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.set_flag(Status::DECIMAL, value);
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.set_flag(Status::INTERRUPT_DISABLE, value);
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.set_flag(Status::ZERO, value);
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.set_flag(Status::CARRY, value);
    }

    // ========== Memory Access ==========

    /// Shared access to the bound memory.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the bound memory.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Releases the memory.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        CPU::new(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status(), 0b0010_0000);
        assert_eq!(cpu.cycles_remaining(), 6);
        assert!(!cpu.instruction_completed());
    }

    #[test]
    fn test_busy_ticks_only_count_down() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xE8); // INX

        for expected in (0..6).rev() {
            cpu.tick().unwrap();
            assert_eq!(cpu.cycles_remaining(), expected);
        }

        assert_eq!(cpu.x(), 0);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.cycles(), 6);
    }

    #[test]
    fn test_fetch_loads_cycle_counter() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xE8); // INX, 2 cycles
        cpu.step_instruction().unwrap(); // drain reset

        cpu.tick().unwrap();

        assert_eq!(cpu.x(), 1);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.cycles_remaining(), 2);
    }

    #[test]
    fn test_illegal_opcode_is_zero_cycle_noop() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0x02);
        cpu.step_instruction().unwrap();

        let err = cpu.tick().unwrap_err();

        assert_eq!(
            err,
            ExecutionError::IllegalOpcode {
                opcode: 0x02,
                address: 0x8000
            }
        );
        assert_eq!(cpu.pc(), 0x8001);
        assert!(cpu.instruction_completed());
    }

    #[test]
    fn test_stack_push_pull_wraps() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0x00);

        cpu.push(0xAB);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100), 0xAB);

        assert_eq!(cpu.pull(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_push_word_order() {
        let mut cpu = setup_cpu();

        cpu.push_word(0x1234);

        assert_eq!(cpu.memory().read(0x01FF), 0x12);
        assert_eq!(cpu.memory().read(0x01FE), 0x34);
        assert_eq!(cpu.pull_word(), 0x1234);
    }

    #[test]
    fn test_set_status_keeps_unused_bit() {
        let mut cpu = setup_cpu();

        cpu.set_status(0x00);
        assert!(cpu.flag_u());

        cpu.set_flag(Status::UNUSED, false);
        assert!(cpu.flag_u());
    }

    #[test]
    fn test_per_flag_setters() {
        let mut cpu = setup_cpu();

        cpu.set_flag_b(true);
        cpu.set_flag_c(true);
        assert!(cpu.flag_b());
        assert_eq!(cpu.status(), 0b0011_0001);

        cpu.set_flag_b(false);
        assert!(!cpu.flag_b());
        assert_eq!(cpu.status(), 0b0010_0001);
    }
}
