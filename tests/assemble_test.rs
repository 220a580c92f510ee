mod common;
use common::*;
use vc3600::lang::{ErrorCode, SENTINEL};

#[test]
fn test_end_to_end_translation() {
    let assembly = assemble_str(
        "LOOP LOAD X\n ADD Y\n STORE X\nX DC 5\nY DC 10\n END",
    );
    assert!(!assembly.has_errors());
    assert_eq!(assembly.symbols.lookup("LOOP"), Some(0));
    assert_eq!(assembly.symbols.lookup("X"), Some(3));
    assert_eq!(assembly.symbols.lookup("Y"), Some(4));

    let contents: Vec<Option<&str>> = assembly
        .listing
        .lines()
        .iter()
        .map(|line| line.contents.as_deref())
        .collect();
    assert_eq!(
        contents,
        vec![
            Some("050003"),
            Some("010004"),
            Some("060003"),
            Some("000005"),
            Some("000010"),
            None, // end
        ]
    );

    let emulator = assembly.into_emulator().unwrap();
    assert_eq!(emulator.peek(0), Some(50003));
    assert_eq!(emulator.peek(4), Some(10));
    assert_eq!(emulator.peek(5), None);
}

#[test]
fn test_location_counters_agree_across_passes() {
    // Labels defined after org and ds only resolve correctly if both
    // passes advance the location counter identically.
    let assembly = assemble_str(
        " org 5\nX DC 7\nBUF DS 3\nY DC 8\n load X\n load Y\n END",
    );
    assert!(!assembly.has_errors());
    assert_eq!(assembly.symbols.lookup("X"), Some(5));
    assert_eq!(assembly.symbols.lookup("BUF"), Some(6));
    assert_eq!(assembly.symbols.lookup("Y"), Some(9));

    let locations: Vec<Option<usize>> = assembly
        .listing
        .lines()
        .iter()
        .map(|line| line.location)
        .collect();
    assert_eq!(
        locations,
        vec![
            Some(0),  // org echoes at its own location
            Some(5),
            Some(6),
            Some(9),
            Some(10),
            Some(11),
            None, // end
        ]
    );
}

#[test]
fn test_ds_and_org_reserve_without_writing() {
    let assembly = assemble_str(" org 2\nA DC 1\nBUF DS 5\nB DC 2\n END");
    assert!(!assembly.has_errors());
    let emulator = assembly.into_emulator().unwrap();
    assert_eq!(emulator.peek(2), Some(1));
    for loc in 3..8 {
        assert_eq!(emulator.peek(loc), None);
    }
    assert_eq!(emulator.peek(8), Some(2));
}

#[test]
fn test_multiply_defined_label() {
    let assembly = assemble_str("X DC 1\nX DC 2\n load X\n END");
    assert!(assembly.has_errors());
    assert_eq!(assembly.symbols.lookup("X"), Some(SENTINEL));
    let codes: Vec<u16> = assembly.listing.errors().map(|e| e.code()).collect();
    assert!(codes.contains(&(ErrorCode::MultiplyDefinedLabel as u16)));
}

#[test]
fn test_invalid_instruction_reported_and_skipped() {
    let assembly = assemble_str(" nonsense\nX DC 1\n END");
    assert!(assembly.has_errors());
    // Invalid lines do not advance the location counter.
    assert_eq!(assembly.symbols.lookup("X"), Some(0));
    let line = &assembly.listing.lines()[0];
    assert_eq!(line.location, Some(0));
    assert_eq!(line.contents, None);
    assert!(line.errors[0].is_code(ErrorCode::IllegalInstruction));
}

#[test]
fn test_end_statement_not_last_stops_pass_two() {
    let assembly = assemble_str("X DC 1\n END\nY DC 2\nZ DC 3");
    assert!(assembly.has_errors());
    // The end line is still echoed; the trailing lines never are.
    assert_eq!(assembly.listing.lines().len(), 3);
    assert_eq!(assembly.listing.lines()[1].statement, " END");
    assert_eq!(assembly.listing.lines()[1].location, None);
    let fatal = &assembly.listing.lines()[2];
    assert!(fatal.errors[0].is_code(ErrorCode::EndStatementNotLast));
}

#[test]
fn test_missing_end_statement() {
    let assembly = assemble_str("X DC 1\n load X");
    assert!(assembly.has_errors());
    let codes: Vec<u16> = assembly.listing.errors().map(|e| e.code()).collect();
    assert!(codes.contains(&(ErrorCode::MissingEndStatement as u16)));
}

#[test]
fn test_sticky_error_gate_blocks_clean_later_lines() {
    let assembly = assemble_str(" bogus\nX DC 1\n load X\n halt\n END");
    assert!(assembly.has_errors());
    assert!(assembly.into_emulator().is_err());
}

#[test]
fn test_comment_lines_echo_without_location() {
    let assembly = assemble_str("; header\n\nX DC 1\n END");
    assert!(!assembly.has_errors());
    let lines = assembly.listing.lines();
    assert_eq!(lines[0].location, None);
    assert_eq!(lines[0].statement, "; header");
    assert_eq!(lines[1].location, None);
    assert_eq!(lines[2].location, Some(0));
}

#[test]
fn test_extra_operand_reported_but_word_loaded() {
    let assembly = assemble_str("L load X junk\nX DC 1\n END");
    assert!(assembly.has_errors());
    let line = &assembly.listing.lines()[0];
    assert!(line.errors[0].is_code(ErrorCode::ExtraOperand));
    assert_eq!(line.contents.as_deref(), Some("050001"));
    // The word is still loaded; only the error gate blocks the run.
    assert_eq!(line.location, Some(0));
}

#[test]
fn test_symbol_table_dump_format() {
    let assembly = assemble_str("X DC 1\nY DC 2\n END");
    let dump = assembly.symbols.to_string();
    assert!(dump.starts_with("Symbol Table:"));
    assert!(dump.contains("0\tX\t0"));
    assert!(dump.contains("1\tY\t1"));
}

#[test]
fn test_listing_display_format() {
    let assembly = assemble_str("X DC 42\n END");
    let text = assembly.listing.to_string();
    assert!(text.starts_with("Translation of Program:"));
    assert!(text.contains("0\t\t000042\t\tX DC 42"));
}
