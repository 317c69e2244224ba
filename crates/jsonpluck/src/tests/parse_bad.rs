use std::io::{self, BufReader, Read};

use super::{extract, num};
use crate::{Extractor, ExtractorOptions, Item, SyntaxError, Value};

fn last_error(items: &[Item]) -> &SyntaxError {
    match items.last() {
        Some(Err(err)) => err.syntax_error(),
        other => panic!("expected trailing error, got {other:?}"),
    }
}

#[test]
fn invalid_value_in_loop_property() {
    let doc = r#"{{"Name": "Ed", "Text": "Go fmt."},"s":"valid","s2":in"valid"}"#;
    let items = extract(doc, ExtractorOptions::new("s2"));
    assert_eq!(items.len(), 1);
    assert_eq!(last_error(&items), &SyntaxError::InvalidValueStart(b'i'));
}

#[test]
fn invalid_value_in_other_property_still_fails() {
    let doc = r#"{{"Name": "Ed", "Text": "Go fmt."},"s":in"valid","s2":"valid"}"#;
    let items = extract(doc, ExtractorOptions::new("s2"));
    assert_eq!(items.len(), 1);
    assert_eq!(last_error(&items), &SyntaxError::InvalidValueStart(b'i'));
}

#[test]
fn invalid_element_ends_the_loop() {
    let doc = r#"{"list":[{"Name": "Ed" , "Text": "Go fmt."} , {"Name": "Sam" , "Text": "Go fm"t who?"}], "list": [1]}"#;
    let items = extract(doc, ExtractorOptions::new("list"));
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert_eq!(last_error(&items), &SyntaxError::InvalidCharacter(b't'));
}

#[test]
fn scalar_error_inside_loop_halts_scan() {
    let items = extract(r#"{"a": [1, tru, 3]}"#, ExtractorOptions::new("a"));
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Ok(num("1")));
    assert_eq!(last_error(&items), &SyntaxError::InvalidCharacter(b','));
}

#[test]
fn truncated_inputs() {
    for doc in [
        r#"{"a": {"b": 1"#,
        r#"{"a": [1, 2"#,
        r#"{"a": "unterminated"#,
        r#"{"a": "#,
        r#"{"a": tr"#,
        r#"{"a": 12"#,
        r#"{"a": -"#,
        r#"{"a": 12.5  "#,
        r#"{"a": true"#,
        r#"{"a": null   "#,
        r#"{"a": [1, false"#,
    ] {
        let items = extract(doc, ExtractorOptions::new("a"));
        assert_eq!(
            last_error(&items),
            &SyntaxError::UnexpectedEndOfInput,
            "input: {doc}"
        );
    }
}

#[test]
fn truncated_scalar_in_root_array() {
    let items = extract("[1, 2", ExtractorOptions::default());
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Ok(num("1")));
    assert_eq!(last_error(&items), &SyntaxError::UnexpectedEndOfInput);
}

#[test]
fn truncated_scalar_in_skipped_property() {
    let doc = r#"{"a": {"k": 1, "drop": 4"#;
    let items = extract(doc, ExtractorOptions::new("a").skip(["drop"]));
    assert_eq!(items.len(), 1);
    assert_eq!(last_error(&items), &SyntaxError::UnexpectedEndOfInput);
}

#[test]
fn truncated_string_in_skipped_region() {
    let items = extract(r#"{"other": "never closed"#, ExtractorOptions::new("a"));
    assert_eq!(last_error(&items), &SyntaxError::UnexpectedEndOfInput);
}

#[test]
fn dangling_top_level_string_is_an_error() {
    let items = extract(r#"["only"#, ExtractorOptions::new("a"));
    assert_eq!(last_error(&items), &SyntaxError::UnexpectedEndOfInput);
    let items = extract(r#"["x""#, ExtractorOptions::new("a"));
    assert_eq!(last_error(&items), &SyntaxError::UnexpectedEndOfInput);
}

#[test]
fn bare_string_inside_matched_object() {
    let items = extract(r#"{"a": {"k": 1, "stray"}}"#, ExtractorOptions::new("a"));
    assert_eq!(last_error(&items), &SyntaxError::ExpectedColon);
}

#[test]
fn invalid_root_value() {
    let items = extract("  @", ExtractorOptions::default());
    assert_eq!(items.len(), 1);
    assert_eq!(last_error(&items), &SyntaxError::InvalidValueStart(b'@'));
}

#[test]
fn root_values_need_separation_from_scalars() {
    let items = extract("1 2", ExtractorOptions::default());
    assert_eq!(last_error(&items), &SyntaxError::ExpectedDelimiter(b'2'));
}

#[test]
fn error_carries_offset() {
    let doc = r#"{"s2":in"valid"}"#;
    let items = extract(doc, ExtractorOptions::new("s2"));
    let Some(Err(err)) = items.last() else {
        panic!("expected error");
    };
    assert_eq!(err.offset(), 7);
    assert_eq!(
        err.to_string(),
        "invalid json: invalid start of value 'i' at byte 7"
    );
}

#[test]
fn iteration_is_fused_after_error() {
    let mut extractor = Extractor::from_slice(br#"{"a": [1, ?, 3]}"#, ExtractorOptions::new("a"));
    assert_eq!(extractor.next(), Some(Ok(num("1"))));
    assert!(matches!(extractor.next(), Some(Err(_))));
    assert_eq!(extractor.next(), None);
    assert_eq!(extractor.next(), None);
}

/// Reader that serves `data` and then fails instead of reporting the end.
struct FailingReader {
    data: &'static [u8],
    pos: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[test]
fn read_failures_surface_as_errors() {
    let reader = BufReader::with_capacity(
        4,
        FailingReader {
            data: br#"{"a": ["x", "y""#,
            pos: 0,
        },
    );
    let items: Vec<Item> = Extractor::from_reader(reader, ExtractorOptions::new("a")).collect();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Ok(Value::from("x")));
    assert_eq!(items[1], Ok(Value::from("y")));
    assert_eq!(last_error(&items), &SyntaxError::Read(io::ErrorKind::BrokenPipe));
}
