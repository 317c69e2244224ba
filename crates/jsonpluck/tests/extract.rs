#![expect(missing_docs)]

mod common;

use common::{ChunkedReader, ORIGINAL, STREAM};
use jsonpluck::{Extractor, ExtractorOptions, Item, Value};
use rstest::rstest;

fn from_original(options: ExtractorOptions) -> Vec<Item> {
    Extractor::from_slice(ORIGINAL.as_bytes(), options).collect_all()
}

fn from_chunks(options: ExtractorOptions) -> Vec<Item> {
    Extractor::from_reader(ChunkedReader::new(&STREAM), options).collect_all()
}

#[test]
fn chunks_reassemble_the_document() {
    let value: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();
    let minified = serde_json::to_string(&value).unwrap();
    assert_eq!(STREAM.concat(), minified);
}

#[rstest]
#[case::loop_array("tool_calls", 2)]
#[case::string_values("arguments", 2)]
#[case::nested_objects("function", 2)]
#[case::string_array("tokens", 2)]
#[case::number_array("values", 2)]
#[case::object("usage", 1)]
#[case::name_only_inside_strings("city", 0)]
#[case::string_equal_to_other_name("finish_reason", 1)]
#[case::absent("missing", 0)]
#[case::root("", 1)]
fn item_counts(#[case] property: &str, #[case] expected: usize) {
    let items = from_original(ExtractorOptions::new(property));
    assert!(items.iter().all(Result::is_ok), "{items:?}");
    assert_eq!(items.len(), expected);
}

#[rstest]
fn chunked_and_contiguous_agree(
    #[values("tool_calls", "id", "values", "content", "index", "")] property: &str,
) {
    let options = ExtractorOptions::new(property).skip(["arguments"]);
    assert_eq!(from_chunks(options.clone()), from_original(options));
}

#[rstest]
fn scratch_capacity_does_not_change_results(#[values(0, 1, 3, 1024)] scratch_capacity: usize) {
    let options = ExtractorOptions {
        loop_property: "tool_calls".into(),
        scratch_capacity,
        ..Default::default()
    };
    assert_eq!(
        from_chunks(options),
        from_original(ExtractorOptions::new("tool_calls"))
    );
}

#[test]
fn extracted_values_are_usable() {
    let calls: Vec<Value> = from_original(ExtractorOptions::new("tool_calls"))
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    let names: Vec<&str> = calls
        .iter()
        .filter_map(|call| call.get("function")?.get("name")?.as_str())
        .collect();
    assert_eq!(names, ["get_weather", "get_time"]);

    let total = from_original(ExtractorOptions::new("total_tokens"));
    assert_eq!(total[0].as_ref().ok().and_then(Value::as_f64), Some(52.0));
}

#[test]
fn nested_arguments_can_be_extracted_again() {
    let arguments = from_original(ExtractorOptions::new("arguments"));
    let Some(Ok(Value::String(first))) = arguments.first() else {
        panic!("expected a string, got {arguments:?}");
    };
    let days: Vec<Item> =
        Extractor::from_slice(first.as_bytes(), ExtractorOptions::new("days")).collect();
    assert_eq!(
        days,
        [Ok(Value::Number("1".into())), Ok(Value::Number("2".into()))]
    );
}

#[test]
fn bytes_read_matches_input_length() {
    let mut extractor =
        Extractor::from_reader(ChunkedReader::new(&STREAM), ExtractorOptions::new("usage"));
    assert!(extractor.next().is_some());
    assert!(extractor.next().is_none());
    assert_eq!(extractor.bytes_read(), STREAM.concat().len() as u64);
}

#[cfg(feature = "serde")]
#[test]
fn values_serialize_with_serde() {
    let items = from_original(ExtractorOptions::new("usage"));
    let Some(Ok(usage)) = items.first() else {
        panic!("expected usage object");
    };
    let json = serde_json::to_value(usage).unwrap();
    assert_eq!(json["Object"]["total_tokens"]["Number"], "52");
}
