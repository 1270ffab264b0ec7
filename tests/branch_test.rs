//! Tests for the conditional branch instructions.

use mos6502_core::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000, reset drained
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new(memory);
    cpu.step_instruction().unwrap();
    cpu
}

/// Runs one branch opcode with offset `offset` and returns the new PC.
fn branch(opcode: u8, offset: u8, configure: impl FnOnce(&mut CPU<FlatMemory>)) -> u16 {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, opcode);
    cpu.memory_mut().write(0x8001, offset);
    configure(&mut cpu);
    cpu.step_instruction().unwrap();
    cpu.pc()
}

#[test]
fn test_bcc_bcs() {
    assert_eq!(branch(0x90, 0x10, |c| c.set_flag_c(false)), 0x8012);
    assert_eq!(branch(0x90, 0x10, |c| c.set_flag_c(true)), 0x8002);
    assert_eq!(branch(0xB0, 0x10, |c| c.set_flag_c(true)), 0x8012);
    assert_eq!(branch(0xB0, 0x10, |c| c.set_flag_c(false)), 0x8002);
}

#[test]
fn test_beq_bne() {
    assert_eq!(branch(0xF0, 0x04, |c| c.set_flag_z(true)), 0x8006);
    assert_eq!(branch(0xF0, 0x04, |c| c.set_flag_z(false)), 0x8002);
    assert_eq!(branch(0xD0, 0x04, |c| c.set_flag_z(false)), 0x8006);
    assert_eq!(branch(0xD0, 0x04, |c| c.set_flag_z(true)), 0x8002);
}

#[test]
fn test_bmi_bpl() {
    assert_eq!(branch(0x30, 0x02, |c| c.set_flag_n(true)), 0x8004);
    assert_eq!(branch(0x30, 0x02, |c| c.set_flag_n(false)), 0x8002);
    assert_eq!(branch(0x10, 0x02, |c| c.set_flag_n(false)), 0x8004);
    assert_eq!(branch(0x10, 0x02, |c| c.set_flag_n(true)), 0x8002);
}

#[test]
fn test_bvc_bvs() {
    assert_eq!(branch(0x70, 0x7F, |c| c.set_flag_v(true)), 0x8081);
    assert_eq!(branch(0x70, 0x7F, |c| c.set_flag_v(false)), 0x8002);
    assert_eq!(branch(0x50, 0x7F, |c| c.set_flag_v(false)), 0x8081);
    assert_eq!(branch(0x50, 0x7F, |c| c.set_flag_v(true)), 0x8002);
}

#[test]
fn test_backward_branch() {
    // BNE -2 loops onto itself
    assert_eq!(branch(0xD0, 0xFE, |_| {}), 0x8000);
    // BNE -128
    assert_eq!(branch(0xD0, 0x80, |_| {}), 0x7F82);
}

#[test]
fn test_branch_wraps_address_space() {
    let mut memory = FlatMemory::new();
    memory.load_hex("F0 FF", 0xFFFC).unwrap(); // reset vector $FFF0
    memory.load_hex("D0 20", 0xFFF0).unwrap(); // BNE +32

    let mut cpu = CPU::new(memory);
    cpu.step_instruction().unwrap();
    cpu.step_instruction().unwrap();

    assert_eq!(cpu.pc(), 0x0012);
}

#[test]
fn test_branch_leaves_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load_hex("B0 10", 0x8000).unwrap();
    cpu.set_flag_c(true);
    let before = cpu.status();

    cpu.step_instruction().unwrap();

    assert_eq!(cpu.status(), before);
}
