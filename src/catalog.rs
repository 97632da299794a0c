//! Static instruction and register tables for the CR16-style 16-bit ISA
//! (subset). Built once, never mutated.

/// Bit-layout family of an instruction. The top nibble of every word is the
/// primary opcode; the variants fix the remaining three nibbles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Register-register: opcode | dest | ext | src
    Rr { opcode: u8, ext: u8 },
    /// Register-immediate: opcode | dest | immHi | immLo
    Ri { opcode: u8 },
    /// Shift by immediate: opcode | dest | upper(3) sign(1) | magnitude
    ShiftI { opcode: u8, upper: u8 },
    /// Load/store: opcode | data reg | ext | address reg
    Mem { opcode: u8, ext: u8 },
    /// Conditional branch, 8-bit displacement: opcode | cond | dispHi | dispLo
    Bcond { opcode: u8, cond: u8 },
    /// Conditional jump through a register: opcode | cond | 1100 | reg
    Jcond { opcode: u8, cond: u8 },
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub encoding: Encoding,
}

pub const TABLE: &[InstrDesc] = &[
    // Arithmetic
    InstrDesc { mnemonic: "ADD", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b0101 } },
    InstrDesc { mnemonic: "ADDI", encoding: Encoding::Ri { opcode: 0b0101 } },
    InstrDesc { mnemonic: "ADDU", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b0110 } },
    InstrDesc { mnemonic: "ADDUI", encoding: Encoding::Ri { opcode: 0b0110 } },
    InstrDesc { mnemonic: "ADDC", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b0111 } },
    InstrDesc { mnemonic: "ADDCI", encoding: Encoding::Ri { opcode: 0b0111 } },
    InstrDesc { mnemonic: "SUB", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b1001 } },
    InstrDesc { mnemonic: "SUBI", encoding: Encoding::Ri { opcode: 0b1001 } },
    InstrDesc { mnemonic: "SUBC", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b1010 } },
    InstrDesc { mnemonic: "SUBCI", encoding: Encoding::Ri { opcode: 0b1010 } },
    InstrDesc { mnemonic: "MUL", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b1110 } },
    InstrDesc { mnemonic: "MULI", encoding: Encoding::Ri { opcode: 0b1110 } },
    InstrDesc { mnemonic: "CMP", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b1011 } },
    InstrDesc { mnemonic: "CMPI", encoding: Encoding::Ri { opcode: 0b1011 } },
    // Logical
    InstrDesc { mnemonic: "AND", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b0001 } },
    InstrDesc { mnemonic: "ANDI", encoding: Encoding::Ri { opcode: 0b0001 } },
    InstrDesc { mnemonic: "OR", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b0010 } },
    InstrDesc { mnemonic: "ORI", encoding: Encoding::Ri { opcode: 0b0010 } },
    InstrDesc { mnemonic: "XOR", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b0011 } },
    InstrDesc { mnemonic: "XORI", encoding: Encoding::Ri { opcode: 0b0011 } },
    InstrDesc { mnemonic: "NOT", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b1000 } },
    // Move
    InstrDesc { mnemonic: "MOV", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b1101 } },
    InstrDesc { mnemonic: "MOVI", encoding: Encoding::Ri { opcode: 0b1101 } },
    // Shift
    InstrDesc { mnemonic: "LSH", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b1111 } },
    InstrDesc { mnemonic: "LSHI", encoding: Encoding::ShiftI { opcode: 0b1111, upper: 0b000 } },
    InstrDesc { mnemonic: "ASHU", encoding: Encoding::Rr { opcode: 0b0000, ext: 0b1110 } },
    InstrDesc { mnemonic: "ASHUI", encoding: Encoding::ShiftI { opcode: 0b1110, upper: 0b001 } },
    // Load/store
    InstrDesc { mnemonic: "LOAD", encoding: Encoding::Mem { opcode: 0b0100, ext: 0b0000 } },
    InstrDesc { mnemonic: "STOR", encoding: Encoding::Mem { opcode: 0b0100, ext: 0b0100 } },
    // Conditional branches (8-bit displacement)
    InstrDesc { mnemonic: "BEQ", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b0000 } },
    InstrDesc { mnemonic: "BNE", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b0001 } },
    InstrDesc { mnemonic: "BGE", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b1101 } },
    InstrDesc { mnemonic: "BCS", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b0010 } },
    InstrDesc { mnemonic: "BCC", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b0011 } },
    InstrDesc { mnemonic: "BHI", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b0100 } },
    InstrDesc { mnemonic: "BLS", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b0101 } },
    InstrDesc { mnemonic: "BLO", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b1010 } },
    InstrDesc { mnemonic: "BHS", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b1011 } },
    InstrDesc { mnemonic: "BGT", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b0110 } },
    InstrDesc { mnemonic: "BLE", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b0111 } },
    InstrDesc { mnemonic: "BLT", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b1100 } },
    InstrDesc { mnemonic: "BUC", encoding: Encoding::Bcond { opcode: 0b1100, cond: 0b1110 } },
    // Conditional jumps (register target)
    InstrDesc { mnemonic: "JEQ", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b0000 } },
    InstrDesc { mnemonic: "JNE", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b0001 } },
    InstrDesc { mnemonic: "JGE", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b1101 } },
    InstrDesc { mnemonic: "JCS", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b0010 } },
    InstrDesc { mnemonic: "JCC", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b0011 } },
    InstrDesc { mnemonic: "JHI", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b0100 } },
    InstrDesc { mnemonic: "JLS", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b0101 } },
    InstrDesc { mnemonic: "JLO", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b1010 } },
    InstrDesc { mnemonic: "JHS", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b1011 } },
    InstrDesc { mnemonic: "JGT", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b0110 } },
    InstrDesc { mnemonic: "JLE", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b0111 } },
    InstrDesc { mnemonic: "JLT", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b1100 } },
    InstrDesc { mnemonic: "JUC", encoding: Encoding::Jcond { opcode: 0b0100, cond: 0b1110 } },
];

/// Case-insensitive mnemonic lookup.
pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    TABLE
        .iter()
        .find(|d| d.mnemonic.eq_ignore_ascii_case(mnemonic))
}

pub const REGISTERS: [&str; 16] = [
    "R0", "R1", "R2", "R3", "R4", "R5", "R6", "R7", "R8", "R9", "R10", "R11", "R12", "R13", "R14",
    "R15",
];

/// Register name to index, case-insensitive. Only the exact names `R0`..`R15`
/// match; padded or prefixed spellings do not.
pub fn register_index(name: &str) -> Option<u8> {
    let name = name.trim();
    REGISTERS
        .iter()
        .position(|r| r.eq_ignore_ascii_case(name))
        .map(|i| i as u8)
}
