//! Pass 2: operand parsing and 16-bit word encoding.
//!
//! Needs the completed label table from pass 1; the running word address is
//! passed in explicitly so single lines encode in isolation.

use crate::catalog::{self, Encoding};
use crate::error::ErrorKind;
use crate::labels::{label_def, strip_comment, LabelTable};

/// Encodes one raw source line at word address `addr`. Blank and
/// label-definition lines yield `None`.
pub fn encode_line(raw: &str, addr: u16, labels: &LabelTable) -> Result<Option<u16>, ErrorKind> {
    let line = strip_comment(raw).trim();
    if line.is_empty() || label_def(line).is_some() {
        return Ok(None);
    }
    encode_instruction(line, addr, labels).map(Some)
}

/// Encodes a single instruction line (comments already stripped, not a label).
pub fn encode_instruction(line: &str, addr: u16, labels: &LabelTable) -> Result<u16, ErrorKind> {
    let mut tokens = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());
    let mnemonic = tokens.next().unwrap_or("");
    let operands: Vec<&str> = tokens.collect();
    let operands = operands.as_slice();

    let desc = catalog::lookup(mnemonic).ok_or_else(|| ErrorKind::UnknownInstruction {
        mnemonic: mnemonic.to_uppercase(),
    })?;

    match desc.encoding {
        Encoding::Rr { opcode, ext } => {
            expect_operands(mnemonic, operands, 2, "2 registers")?;
            let src = parse_register(operands[0])?;
            let dest = parse_register(operands[1])?;
            Ok(u16::from(opcode) << 12 | dest << 8 | u16::from(ext) << 4 | src)
        }
        Encoding::Ri { opcode } => {
            expect_operands(mnemonic, operands, 2, "an immediate and a register")?;
            let imm = parse_immediate(operands[0])?;
            let dest = parse_register(operands[1])?;
            // Dual signed/unsigned window over the 8-bit field.
            if !(-128..=255).contains(&imm) {
                return Err(ErrorKind::ImmediateRange { value: imm });
            }
            let bits = (imm as u16) & 0xFF;
            let hi = bits >> 4;
            let lo = bits & 0xF;
            Ok(u16::from(opcode) << 12 | dest << 8 | hi << 4 | lo)
        }
        Encoding::ShiftI { opcode, upper } => {
            expect_operands(mnemonic, operands, 2, "a shift amount and a register")?;
            let imm = parse_immediate(operands[0])?;
            let dest = parse_register(operands[1])?;
            if !(-15..=15).contains(&imm) {
                return Err(ErrorKind::ShiftRange { value: imm });
            }
            // 5-bit two's complement, split into sign bit and magnitude.
            let five = (imm as u16) & 0x1F;
            let sign = five >> 4;
            let magnitude = five & 0xF;
            Ok(u16::from(opcode) << 12
                | dest << 8
                | u16::from(upper) << 5
                | sign << 4
                | magnitude)
        }
        Encoding::Mem { opcode, ext } => {
            expect_operands(mnemonic, operands, 2, "2 registers")?;
            // Destination for LOAD, source for STOR; second is the address reg.
            let reg = parse_register(operands[0])?;
            let addr_reg = parse_register(operands[1])?;
            Ok(u16::from(opcode) << 12 | reg << 8 | u16::from(ext) << 4 | addr_reg)
        }
        Encoding::Bcond { opcode, cond } => {
            expect_operands(mnemonic, operands, 1, "a displacement or label")?;
            let disp = branch_displacement(operands[0], addr, labels)?;
            if !(-128..=127).contains(&disp) {
                return Err(ErrorKind::DisplacementRange { value: disp });
            }
            let bits = (disp as u16) & 0xFF;
            let hi = bits >> 4;
            let lo = bits & 0xF;
            Ok(u16::from(opcode) << 12 | u16::from(cond) << 8 | hi << 4 | lo)
        }
        Encoding::Jcond { opcode, cond } => {
            expect_operands(mnemonic, operands, 1, "a register")?;
            let reg = parse_register(operands[0])?;
            // Fixed middle nibble marks the register-jump sub-form.
            Ok(u16::from(opcode) << 12 | u16::from(cond) << 8 | 0b1100 << 4 | reg)
        }
    }
}

fn expect_operands(
    mnemonic: &str,
    operands: &[&str],
    want: usize,
    expected: &'static str,
) -> Result<(), ErrorKind> {
    if operands.len() != want {
        return Err(ErrorKind::OperandCount {
            mnemonic: mnemonic.to_uppercase(),
            expected,
        });
    }
    Ok(())
}

fn parse_register(tok: &str) -> Result<u16, ErrorKind> {
    catalog::register_index(tok)
        .map(u16::from)
        .ok_or_else(|| ErrorKind::InvalidRegister {
            name: tok.trim().to_uppercase(),
        })
}

/// Numeric immediate: decimal (optionally negative), `0x` hex, or `0b`
/// binary. A `-` prefix is only valid on decimal.
fn parse_immediate(tok: &str) -> Result<i32, ErrorKind> {
    let t = tok.trim();
    let parsed = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        i32::from_str_radix(hex, 16)
    } else if let Some(bin) = t.strip_prefix("0b").or_else(|| t.strip_prefix("0B")) {
        i32::from_str_radix(bin, 2)
    } else {
        t.parse::<i32>()
    };
    parsed.map_err(|_| ErrorKind::InvalidImmediate {
        text: t.to_string(),
    })
}

/// A branch operand is numeric if it carries a radix prefix, a leading `-`,
/// or is all digits; anything else is a label name.
fn looks_numeric(tok: &str) -> bool {
    tok.starts_with("0x")
        || tok.starts_with("0X")
        || tok.starts_with("0b")
        || tok.starts_with("0B")
        || tok.starts_with('-')
        || (!tok.is_empty() && tok.bytes().all(|b| b.is_ascii_digit()))
}

/// Resolves a branch operand to a signed word displacement. Label targets
/// are relative to the branch's own pass-1 address.
fn branch_displacement(tok: &str, addr: u16, labels: &LabelTable) -> Result<i32, ErrorKind> {
    let t = tok.trim();
    if looks_numeric(t) {
        return parse_immediate(t);
    }
    let target = labels.get(t).ok_or_else(|| ErrorKind::UndefinedLabel {
        name: t.to_string(),
    })?;
    Ok(i32::from(target) - i32::from(addr))
}
