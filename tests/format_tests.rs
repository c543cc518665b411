//! Conformance with the documented dialect and canonical output.

use inifile::{
    decode, decode_with_options, encode, encode_with_options, ini, Document, IniOptions, Separator,
    SyntaxErrorKind,
};

#[test]
fn test_canonical_order_is_bytewise() {
    let doc = ini! {
        "beta" => { "new" => "try", "Happy" => "yes", "_x" => 1 },
        "Alpha" => { "z" => 0 },
        "alpha" => { "a" => 0 },
    };

    assert_eq!(
        encode(&doc),
        "[Alpha]\nz = 0\n\n[alpha]\na = 0\n\n[beta]\nHappy = yes\n_x = 1\nnew = try\n\n"
    );
}

#[test]
fn test_canonical_output_is_stable() {
    let messy = "\
; comment
  [ b ]
  z=1
a   =   2  # trailing

[a]
key=value
[b]
a = 3
";
    let first = encode(&decode(messy).unwrap());
    assert_eq!(first, "[a]\nkey = value\n\n[b]\na = 3\nz = 1\n\n");

    let second = encode(&decode(&first).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_empty_input_and_comment_only_input() {
    assert!(decode("").unwrap().is_empty());
    assert!(decode("\n\n  \t\n").unwrap().is_empty());
    assert!(decode("# nothing\n; here\n").unwrap().is_empty());
    assert_eq!(encode(&decode("").unwrap()), "");
}

#[test]
fn test_section_header_wins_over_pair() {
    let doc = decode("[a=b]\nk = v").unwrap();
    assert_eq!(doc["a=b"]["k"], "v");
}

#[test]
fn test_header_with_trailing_text_is_invalid() {
    let err = decode("[a] trailing\nk = v").unwrap_err();
    assert_eq!(err.line, 1);
}

#[test]
fn test_header_only_sections() {
    let input = "[first]\n[second]\nk = v\n[third]\n";

    let doc = decode(input).unwrap();
    assert_eq!(doc.sections().collect::<Vec<_>>(), vec!["second"]);

    let keep = IniOptions::new().with_keep_empty_sections(true);
    let doc = decode_with_options(input, &keep).unwrap();
    assert_eq!(
        doc.sections().collect::<Vec<_>>(),
        vec!["first", "second", "third"]
    );
    assert_eq!(
        encode_with_options(&doc, &keep),
        "[first]\n\n[second]\nk = v\n\n[third]\n\n"
    );
    assert_eq!(encode(&doc), "[second]\nk = v\n\n");
}

#[test]
fn test_compact_separator_reads_back() {
    let doc = ini! { "s" => { "k" => "a b", "e" => "" } };
    let compact = IniOptions::new().with_separator(Separator::Compact);

    let text = encode_with_options(&doc, &compact);
    assert_eq!(text, "[s]\ne=\nk=a b\n\n");
    assert_eq!(decode(&text).unwrap(), doc);
}

#[test]
fn test_values_keep_inner_whitespace() {
    let doc = decode("[s]\nk =  a \t b  \n").unwrap();
    assert_eq!(doc["s"]["k"], "a \t b");
}

#[test]
fn test_unescaped_content_does_not_read_back() {
    // Empty key: written as is, rejected on the way back in
    let mut doc = Document::new();
    doc["s"][""] = "v".into();
    let text = encode(&doc);
    assert_eq!(text, "[s]\n = v\n\n");
    let err = decode(&text).unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.kind, SyntaxErrorKind::UnrecognizedSyntax);

    // Comment char in a value, `=` in a key: both change meaning
    let mut doc = Document::new();
    doc.set("s", "k", "a#b");
    doc.set("s", "a=b", "c");
    let text = encode(&doc);
    assert_eq!(text, "[s]\na=b = c\nk = a#b\n\n");
    let back = decode(&text).unwrap();
    assert_eq!(back["s"].len(), 2);
    assert_eq!(back["s"]["a"], "b = c");
    assert_eq!(back["s"]["k"], "a");

    // Line break in a value splits it
    let mut doc = Document::new();
    doc.set("s", "k", "line1\nline2");
    assert_eq!(decode(&encode(&doc)).unwrap_err().line, 3);
}
