use cr16_rs::{assemble_with_labels, render, OutputFormat};
use pretty_assertions::assert_eq;

// A program touching every encoding family.
const COUNTDOWN: &str = "\
; count down from 5, then spin
        MOVI 5, R1      ; counter
        MOVI 0, R2
loop:
        ADDI -1, R1
        CMPI 0, R1
        BNE loop
        LSHI 2, R2
        LOAD R3, R2
        STOR R3, R4
        JUC R5
done:
        BUC done
";

#[test]
fn countdown_assembles_end_to_end() {
    let (words, labels) = assemble_with_labels(COUNTDOWN).unwrap();
    assert_eq!(labels.get("loop"), Some(2));
    assert_eq!(labels.get("done"), Some(9));
    assert_eq!(
        words,
        vec![
            0xD105, // MOVI 5, R1
            0xD200, // MOVI 0, R2
            0x51FF, // ADDI -1, R1
            0xB100, // CMPI 0, R1
            0xC1FE, // BNE loop (2 - 4 = -2)
            0xF202, // LSHI 2, R2
            0x4302, // LOAD R3, R2
            0x4344, // STOR R3, R4
            0x4EC5, // JUC R5
            0xCE00, // BUC done (9 - 9 = 0)
        ]
    );
}

#[test]
fn countdown_renders_in_all_formats() {
    let (words, _) = assemble_with_labels(COUNTDOWN).unwrap();
    let hex = render(&words, OutputFormat::Hex);
    assert_eq!(hex[0], "D105");
    assert_eq!(hex[4], "C1FE");

    let bin = render(&words, OutputFormat::Bin);
    assert!(bin.iter().all(|l| l.len() == 16));
    assert_eq!(bin[9], "1100111000000000");

    let dec = render(&words, OutputFormat::Dec);
    assert_eq!(dec[0], "53509");
}

#[test]
fn mixed_case_source_assembles_identically() {
    let upper = "MOVI 5, R1\nloop:\nSUBI 1, R1\nBNE loop\n";
    let lower = "movi 5, r1\nloop:\nsubi 1, r1\nbne loop\n";
    let (a, _) = assemble_with_labels(upper).unwrap();
    let (b, _) = assemble_with_labels(lower).unwrap();
    assert_eq!(a, b);
}
