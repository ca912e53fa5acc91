//! End to end checks on toolbar strings as the editor sees them

use glake_parser::position::{OffsetTranslator, Position, Range, RangeError};
use glake_parser::scan::ScanOptions;
use glake_parser::testing::assert_doc;
use glake_parser::toolbar::{
    expand_var_refs, parse_vars, HomeVars, Tokenizer, VarRef, VarRefScanner,
};

fn tokenizer() -> Tokenizer {
    Tokenizer::new(ScanOptions::default().with_escape('\\'))
}

fn scanner() -> VarRefScanner {
    VarRefScanner::new(ScanOptions::default().with_escape('\\'))
}

#[test]
fn quoted_separator_does_not_split() {
    let doc = tokenizer().tokenize(r#"a "b|c" d"#);
    assert_doc(&doc).part_count(1).part(0, |p| {
        p.args(&["a", r#""b|c""#, "d"]);
    });

    let doc = tokenizer().tokenize(r#"a "b|c" d|e"#);
    assert_doc(&doc)
        .part_count(2)
        .part(0, |p| {
            p.args(&["a", r#""b|c""#, "d"]).arg_unquoted(1, "b|c");
        })
        .part(1, |p| {
            p.args(&["e"]);
        });
}

#[test]
fn escaped_separator_keeps_escape() {
    let doc = tokenizer().tokenize(r"a\|b");
    assert_doc(&doc).part_count(1).part(0, |p| {
        p.arg_count(1).arg(0, r"a\|b", 0, 4);
    });
}

#[test]
fn separators_only() {
    let doc = tokenizer().tokenize("|||");
    assert_doc(&doc).part_count(4).no_name();
    for i in 0..4 {
        assert_doc(&doc).part(i, |p| {
            p.arg_count(0).span(i, i);
        });
    }
}

#[test]
fn var_refs_in_a_path() {
    let refs = scanner().scan_str("$HOME/${USER}/x");
    assert_eq!(
        refs,
        vec![
            VarRef {
                name: "$HOME".to_string(),
                start: 0,
                end: 5
            },
            VarRef {
                name: "$USER".to_string(),
                start: 6,
                end: 13
            },
        ]
    );
    assert!(scanner().scan_str(r#""$HOME""#).is_empty());
}

#[test]
fn toolbar_vars_drive_expansion_and_name_encoding() {
    let source = "~src/main.go | ~src=/home/u/src | $flags=\"-v -race\" | GoRun $flags ~src";
    let doc = tokenizer().tokenize(source);
    let vars = parse_vars(&doc, &scanner());
    assert_eq!(vars["$flags"], "-v -race");

    let cmd = doc.parts[3].from_arg_string(1);
    let refs = scanner().scan_str(cmd);
    let expanded = expand_var_refs(cmd, &refs, |name| vars.get(name).cloned());
    assert_eq!(expanded, "-v -race /home/u/src");

    let home_vars = HomeVars::from_var_map(&vars);
    let decoded = doc.with_part0_arg0_decoded(&home_vars);
    assert!(decoded.starts_with("/home/u/src/main.go | "));
    let redoc = tokenizer().tokenize(&decoded);
    assert_eq!(redoc.with_part0_arg0_encoded(&home_vars), source);
}

#[test]
fn name_edits_are_validated_against_the_encoded_name() {
    let tok = tokenizer();
    assert!(tok
        .validate_name_edit("~/a.txt | Save | Reload", "~/a.txt")
        .is_ok());
    assert!(tok.validate_name_edit("~/b.txt | Save", "~/a.txt").is_err());
}

#[test]
fn offsets_of_a_multibyte_buffer() {
    let buffer = "fn main() {\n    let s = \"😀é\";\n}\n";
    let tr = OffsetTranslator::new(buffer);
    let quote = buffer.find('"').unwrap();
    let pos = tr.byte_offset_to_position(quote + 1).unwrap();
    assert_eq!(pos, Position::new(1, 13));
    assert_eq!(tr.position_to_byte_offset(pos).unwrap(), quote + 1);

    // "😀é" is three UTF-16 units and six bytes
    let range = Range::new(pos, Position::new(1, 16));
    let (offset, len) = tr.range_to_byte_offsets(range).unwrap();
    assert_eq!(&buffer[offset..offset + len], "😀é");

    let past = Range::new(pos, Position::new(1, 40));
    assert!(matches!(
        tr.range_to_byte_offsets(past),
        Err(RangeError::Column { .. })
    ));
}
