//! Tests for the register transfer instructions.

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

fn execute(opcode: u8, configure: impl FnOnce(&mut CPU<FlatMemory>)) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, opcode);
    configure(&mut cpu);
    cpu.step_instruction().unwrap();
    cpu
}

#[test]
fn test_tax() {
    let cpu = execute(0xAA, |c| c.set_a(0x80));

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_tay_zero() {
    let cpu = execute(0xA8, |c| {
        c.set_a(0x00);
        c.set_y(0x33);
    });

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txa_and_tya() {
    let cpu = execute(0x8A, |c| c.set_x(0x12));
    assert_eq!(cpu.a(), 0x12);

    let cpu = execute(0x98, |c| c.set_y(0xFE));
    assert_eq!(cpu.a(), 0xFE);
    assert!(cpu.flag_n());
}

#[test]
fn test_tsx_updates_flags() {
    let cpu = execute(0xBA, |_| {});

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_leaves_flags() {
    let cpu = execute(0x9A, |c| {
        c.set_x(0x00);
        c.set_flag_n(true);
    });

    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_transfers_leave_carry_and_overflow() {
    let cpu = execute(0xAA, |c| {
        c.set_flag_c(true);
        c.set_flag_v(true);
    });

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
}
