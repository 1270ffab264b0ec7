//! # 6502 Instruction Implementations
//!
//! One function per mnemonic, grouped by category. Every handler receives the
//! CPU by mutable reference and the addressing mode from the opcode table, and
//! applies the instruction's whole effect before returning.
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::addressing::{AddressingMode, Operand};
use crate::opcodes::Instruction;
use crate::{MemoryBus, CPU};

/// Dispatches `instruction` to its handler.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: Instruction,
    mode: AddressingMode,
) {
    use Instruction::*;

    match instruction {
        Adc => alu::adc(cpu, mode),
        And => alu::and(cpu, mode),
        Asl => shifts::asl(cpu, mode),
        Bcc => branches::bcc(cpu, mode),
        Bcs => branches::bcs(cpu, mode),
        Beq => branches::beq(cpu, mode),
        Bit => alu::bit(cpu, mode),
        Bmi => branches::bmi(cpu, mode),
        Bne => branches::bne(cpu, mode),
        Bpl => branches::bpl(cpu, mode),
        Brk => control::brk(cpu, mode),
        Bvc => branches::bvc(cpu, mode),
        Bvs => branches::bvs(cpu, mode),
        Clc => flags::clc(cpu, mode),
        Cld => flags::cld(cpu, mode),
        Cli => flags::cli(cpu, mode),
        Clv => flags::clv(cpu, mode),
        Cmp => alu::cmp(cpu, mode),
        Cpx => alu::cpx(cpu, mode),
        Cpy => alu::cpy(cpu, mode),
        Dec => inc_dec::dec(cpu, mode),
        Dex => inc_dec::dex(cpu, mode),
        Dey => inc_dec::dey(cpu, mode),
        Eor => alu::eor(cpu, mode),
        Inc => inc_dec::inc(cpu, mode),
        Inx => inc_dec::inx(cpu, mode),
        Iny => inc_dec::iny(cpu, mode),
        Jmp => control::jmp(cpu, mode),
        Jsr => control::jsr(cpu, mode),
        Lda => load_store::lda(cpu, mode),
        Ldx => load_store::ldx(cpu, mode),
        Ldy => load_store::ldy(cpu, mode),
        Lsr => shifts::lsr(cpu, mode),
        Nop => control::nop(cpu, mode),
        Ora => alu::ora(cpu, mode),
        Pha => stack::pha(cpu, mode),
        Php => stack::php(cpu, mode),
        Pla => stack::pla(cpu, mode),
        Plp => stack::plp(cpu, mode),
        Rol => shifts::rol(cpu, mode),
        Ror => shifts::ror(cpu, mode),
        Rti => control::rti(cpu, mode),
        Rts => control::rts(cpu, mode),
        Sbc => alu::sbc(cpu, mode),
        Sec => flags::sec(cpu, mode),
        Sed => flags::sed(cpu, mode),
        Sei => flags::sei(cpu, mode),
        Sta => load_store::sta(cpu, mode),
        Stx => load_store::stx(cpu, mode),
        Sty => load_store::sty(cpu, mode),
        Tax => transfer::tax(cpu, mode),
        Tay => transfer::tay(cpu, mode),
        Tsx => transfer::tsx(cpu, mode),
        Txa => transfer::txa(cpu, mode),
        Txs => transfer::txs(cpu, mode),
        Tya => transfer::tya(cpu, mode),
    }
}

/// Resolves `mode` and reads the operand value.
///
/// Returns the value together with the resolved operand so that
/// read-modify-write instructions can hand it back to [`store_result`].
/// Implied and relative modes have no value and yield 0.
pub(crate) fn load_operand<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> (u8, Operand) {
    let operand = cpu.resolve_operand(mode);

    let value = match operand {
        Operand::Accumulator => cpu.a,
        Operand::Address(addr) => cpu.memory.read(addr),
        Operand::None | Operand::Offset(_) => 0,
    };

    (value, operand)
}

/// Writes a result back to wherever [`load_operand`] read it from.
pub(crate) fn store_result<M: MemoryBus>(cpu: &mut CPU<M>, value: u8, operand: Operand) {
    match operand {
        Operand::Accumulator => cpu.a = value,
        Operand::Address(addr) => cpu.memory.write(addr, value),
        Operand::None | Operand::Offset(_) => {}
    }
}

/// Resolves `mode` to an effective address, for stores and jumps.
///
/// Only called for modes the opcode table pairs with address-producing
/// instructions; anything else resolves to address 0.
pub(crate) fn effective_address<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u16 {
    match cpu.resolve_operand(mode) {
        Operand::Address(addr) => addr,
        Operand::None | Operand::Accumulator | Operand::Offset(_) => 0,
    }
}
