//! Integration tests for the disassembler.

use mos6502_core::{decode, disassemble, FlatMemory, Instruction, MemoryBus, Operand, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_listing_covers_every_mode() {
    let mut memory = FlatMemory::new();
    memory
        .load_hex(
            "18 0A A9 01 A5 10 B5 10 B6 10 F0 FE AD 00 02 BD 00 02 B9 00 02 6C FC FF A1 20 B1 20",
            0x0600,
        )
        .unwrap();

    let listing = disassemble(&memory, 0x0600, 0x061B, 0, 0);
    let lines: Vec<&str> = listing.lines().map(|(_, text)| text).collect();

    assert_eq!(
        lines,
        vec![
            "$0600: CLC (IMP)",
            "$0601: ASL A (ACC)",
            "$0602: LDA #$01 (IMM)",
            "$0604: LDA $10 (ZP0)",
            "$0606: LDA $10,X (ZPX)",
            "$0608: LDX $10,Y (ZPY)",
            "$060A: BEQ $FE [$060A] (REL)",
            "$060C: LDA $0200 (ABS)",
            "$060F: LDA $0200,X (ABX)",
            "$0612: LDA $0200,Y (ABY)",
            "$0615: JMP ($FFFC) (IND)",
            "$0618: LDA ($20,X) (INX)",
            "$061A: LDA ($20),Y (INY)",
        ]
    );
}

#[test]
fn test_undefined_bytes_are_listed_in_order() {
    let mut memory = FlatMemory::new();
    memory.load_hex("EA FF 02 EA", 0x1000).unwrap();

    let listing = disassemble(&memory, 0x1000, 0x1003, 0, 0);

    assert_eq!(listing.order(), &[0x1000, 0x1001, 0x1002, 0x1003]);
    assert_eq!(listing.text(0x1001), Some("$1001: .byte $FF"));
    assert_eq!(listing.text(0x1002), Some("$1002: .byte $02"));
}

#[test]
fn test_cpu_disassemble_is_pure() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load_hex("A2 05 CA D0 FD 00", 0x8000).unwrap();
    cpu.step_instruction().unwrap();
    cpu.step_instruction().unwrap(); // LDX #$05

    let registers = cpu.registers();
    let cycles = cpu.cycles();

    let first = cpu.disassemble(0x8000, 0x8005);
    let second = cpu.disassemble(0x8000, 0x8005);

    assert_eq!(first, second);
    assert_eq!(cpu.registers(), registers);
    assert_eq!(cpu.cycles(), cycles);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_cpu_disassemble_uses_live_index_registers() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load_hex("BD 00 20", 0x8000).unwrap();
    cpu.set_x(0x10);

    let instr = decode(cpu.memory(), 0x8000, cpu.x(), cpu.y()).unwrap();

    assert_eq!(instr.instruction, Instruction::Lda);
    assert_eq!(instr.operand, Operand::Address(0x2010));
    assert_eq!(instr.cycles, 4);
}

#[test]
fn test_disassemble_end_of_memory() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFF, 0xEA);

    let listing = disassemble(&memory, 0xFFFF, 0xFFFF, 0, 0);

    assert_eq!(listing.len(), 1);
    assert_eq!(listing.text(0xFFFF), Some("$FFFF: NOP (IMP)"));
}

#[test]
fn test_disassemble_through_borrowed_memory() {
    let mut memory = FlatMemory::new();
    memory.load_hex("E8", 0x8000).unwrap();
    memory.load_hex("00 80", 0xFFFC).unwrap();

    let cpu = CPU::new(&mut memory);
    let listing = cpu.disassemble(0x8000, 0x8000);

    assert_eq!(listing.text(0x8000), Some("$8000: INX (IMP)"));
}
