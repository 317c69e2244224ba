mod parse_bad;

use crate::{Extractor, ExtractorOptions, Item, Map, Value};

/// Compact document exercising every value kind, escapes, nesting and a
/// number followed by whitespace before its delimiter.
pub(crate) const MINI_JSON: &str = r#"{"nu":null,"b":true,"b1":false,"n":2323,"n1":23.23,"n2":23.23e-6 ,"s":"sstring","s1":"s1tring","s2":"s2tr\\ing\"蒜","o":{"o1":"o1string","o2":"o2string","o3":true,"o4":["o4string",{"o41":"o41string"},["o4nestedarray item 1","o4nestedarray item 1 item 2",true,99,null,90.98]],"o5":98.21,"o6":null,"o7":{"o71":"o71string","o72":["o72string",null,false,98,{}],"o73":true,"o74":98}},"a":[{"a11":"o71string\\","a12":["o72string",null,false,98,{}],"a13":true,"a14":98},{"a11":"o71string","a12":["o72string",null,false,98,{}],"a13":true,"a14":98},"astringinside",false,99,null,0.00043333]}"#;

pub(crate) fn extract(input: &str, options: ExtractorOptions) -> Vec<Item> {
    Extractor::from_slice(input.as_bytes(), options).collect_all()
}

/// Extracts and fails the test on any error item.
pub(crate) fn values(input: &str, options: ExtractorOptions) -> Vec<Value> {
    extract(input, options)
        .into_iter()
        .map(|item| item.unwrap_or_else(|err| panic!("unexpected error: {err}")))
        .collect()
}

pub(crate) fn obj(pairs: &[(&str, Value)]) -> Value {
    Value::Object(
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect::<Map>(),
    )
}

pub(crate) fn num(text: &str) -> Value {
    Value::Number(text.into())
}
