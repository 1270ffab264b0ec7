//! # Status Register
//!
//! The 6502 processor status byte, laid out `NV-BDIZC` from bit 7 down to bit 0.

use bitflags::bitflags;

bitflags! {
    /// Processor status flags.
    ///
    /// `UNUSED` (bit 5) has no hardware latch and always reads as 1. `BREAK`
    /// (bit 4) only ever appears in status bytes pushed to the stack; the live
    /// register keeps it clear.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Status: u8 {
        /// Carry
        const CARRY = 1 << 0;
        /// Zero
        const ZERO = 1 << 1;
        /// Interrupt disable
        const INTERRUPT_DISABLE = 1 << 2;
        /// Decimal mode
        const DECIMAL = 1 << 3;
        /// Break
        const BREAK = 1 << 4;
        /// Unused, always set
        const UNUSED = 1 << 5;
        /// Overflow
        const OVERFLOW = 1 << 6;
        /// Negative
        const NEGATIVE = 1 << 7;
    }
}

impl Status {
    /// Status after a reset: only the unused bit set.
    pub const POWER_ON: Status = Status::UNUSED;

    /// Builds the live register value from a byte pulled off the stack.
    ///
    /// B is discarded and U forced set.
    pub fn from_pulled(byte: u8) -> Self {
        (Status::from_bits_retain(byte) - Status::BREAK) | Status::UNUSED
    }

    /// Sets Z and N from an 8-bit result.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::POWER_ON
    }
}
