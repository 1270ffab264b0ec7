//! Fuzz target for tick-driven execution.
//!
//! Seeds arbitrary registers and memory contents, then runs a bounded number
//! of ticks with interrupts sprinkled in, looking for panics.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502_core::{FlatMemory, MemoryBus, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes at 0x8000
    program: [u8; 64],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
}

/// Something to do on a given tick
#[derive(Debug, Arbitrary)]
enum Event {
    Tick,
    Irq,
    Nmi,
    Reset,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    events: Vec<Event>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset vector 0x8000, IRQ and NMI vectors into the program too
    memory.load(&[0x10, 0x80, 0x00, 0x80, 0x20, 0x80], 0xFFFA);
    memory.load(&input.memory.program, 0x8000);
    memory.load(&input.memory.zero_page, 0x0000);
    memory.load(&input.memory.stack_page, 0x0100);

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for event in input.events.iter().take(4096) {
        match event {
            // Illegal opcodes are expected; only panics are interesting
            Event::Tick => {
                let _ = cpu.tick();
            }
            Event::Irq => cpu.interrupt_request(),
            Event::Nmi => cpu.non_maskable_interrupt(),
            Event::Reset => cpu.reset(),
        }

        assert!(cpu.flag_u());
    }

    // Memory reads never panic anywhere in the address space
    let _ = cpu.memory().read(cpu.pc());
});
