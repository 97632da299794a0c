use cr16_rs::assemble;
use pretty_assertions::assert_eq;

fn one(line: &str) -> u16 {
    let words = assemble(line).unwrap();
    assert_eq!(words.len(), 1);
    words[0]
}

#[test]
fn rr_layout() {
    // opcode | dest | ext | src
    assert_eq!(one("ADD R3, R5"), 0x0553);
    assert_eq!(one("MOV R1, R2"), 0x02D1);
    assert_eq!(one("NOT R4, R4"), 0x0484);
    assert_eq!(one("LSH R0, R15"), 0x0FF0);
}

#[test]
fn rr_field_recovery() {
    let w = one("SUB R6, R9");
    assert_eq!(w >> 12, 0b0000); // primary opcode
    assert_eq!((w >> 8) & 0xF, 9); // dest register
    assert_eq!((w >> 4) & 0xF, 0b1001); // ext
    assert_eq!(w & 0xF, 6); // src register
}

#[test]
fn mnemonics_and_registers_are_case_insensitive() {
    assert_eq!(one("add r3, r5"), one("ADD R3, R5"));
    assert_eq!(one("mOvI 7, r12"), one("MOVI 7, R12"));
}

#[test]
fn separators_are_comma_or_whitespace() {
    assert_eq!(one("ADD R3 R5"), 0x0553);
    assert_eq!(one("ADD R3,R5"), 0x0553);
    assert_eq!(one("ADD  R3 ,  R5"), 0x0553);
}

#[test]
fn ri_positive_immediates() {
    assert_eq!(one("MOVI 5, R0"), 0xD005);
    // 200 -> immHi 0xC, immLo 0x8
    assert_eq!(one("ADDI 200, R1"), 0x51C8);
    assert_eq!(one("ADDUI 255, R0"), 0x60FF);
}

#[test]
fn ri_negative_immediates_fold_to_twos_complement() {
    assert_eq!(one("ADDI -1, R0"), 0x50FF);
    assert_eq!(one("MOVI -128, R2"), 0xD280);
}

#[test]
fn ri_roundtrips_across_the_dual_window() {
    for imm in -128..=255i32 {
        let w = one(&format!("ADDI {imm}, R0"));
        let low = (w & 0xFF) as i32;
        let decoded = if imm < 0 { low - 256 } else { low };
        assert_eq!(decoded, imm, "immediate {imm}");
    }
}

#[test]
fn ri_radix_prefixes() {
    assert_eq!(one("MOVI 0x7F, R0"), 0xD07F);
    assert_eq!(one("MOVI 0b1010, R0"), 0xD00A);
    assert_eq!(one("MOVI 0XfF, R0"), 0xD0FF);
}

#[test]
fn shift_immediate_layout() {
    // opcode | dest | upper(3) sign(1) | magnitude
    assert_eq!(one("LSHI 15, R1"), 0xF10F);
    assert_eq!(one("LSHI 0, R0"), 0xF000);
    assert_eq!(one("LSHI -1, R1"), 0xF11F);
    assert_eq!(one("ASHUI 3, R2"), 0xE223);
}

#[test]
fn shift_roundtrips_as_five_bit_twos_complement() {
    for imm in -15..=15i32 {
        let w = one(&format!("LSHI {imm}, R0"));
        let five = (w & 0x1F) as i32;
        let decoded = if five & 0x10 != 0 { five - 32 } else { five };
        assert_eq!(decoded, imm, "shift amount {imm}");
    }
}

#[test]
fn mem_layout() {
    // first reg is destination for LOAD, source for STOR
    assert_eq!(one("LOAD R4, R7"), 0x4407);
    assert_eq!(one("STOR R4, R7"), 0x4447);
}

#[test]
fn jcond_fixed_middle_nibble() {
    assert_eq!(one("JEQ R9"), 0x40C9);
    assert_eq!(one("JUC R0"), 0x4EC0);
    assert_eq!(one("JLT R15"), 0x4CCF);
    assert_eq!((one("JNE R3") >> 4) & 0xF, 0b1100);
}

#[test]
fn bcond_numeric_displacements() {
    assert_eq!(one("BEQ 5"), 0xC005);
    assert_eq!(one("BNE -2"), 0xC1FE);
    assert_eq!(one("BUC 0x10"), 0xCE10);
    assert_eq!(one("BEQ 0b101"), 0xC005);
    assert_eq!(one("BGE 127"), 0xCD7F);
    assert_eq!(one("BEQ -128"), 0xC080);
}
