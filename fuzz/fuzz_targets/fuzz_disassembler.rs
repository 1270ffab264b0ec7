//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary memory contents and ranges to the disassembler to find edge
//! cases in instruction decoding and the sweep.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502_core::{disassemble, FlatMemory};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    load_at: u16,
    start: u16,
    end: u16,
    x: u8,
    y: u8,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let mut memory = FlatMemory::new();
    memory.load(&input.bytes, input.load_at);

    let listing = disassemble(&memory, input.start, input.end, input.x, input.y);

    if input.start > input.end {
        assert!(listing.is_empty());
        return;
    }

    // Visit order is strictly ascending, inside the range, and every line exists
    assert_eq!(listing.order().first().copied(), Some(input.start));
    assert!(listing.order().windows(2).all(|w| w[0] < w[1] && w[1] - w[0] <= 3));
    for &addr in listing.order() {
        assert!(addr <= input.end);
        assert!(listing.text(addr).is_some());
    }

    // Same input, same listing
    assert_eq!(listing, disassemble(&memory, input.start, input.end, input.x, input.y));
});
