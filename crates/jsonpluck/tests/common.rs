#![allow(dead_code)]
#![allow(clippy::needless_raw_string_hashes)]

use std::{fmt::Write, io};

use jsonpluck::Item;

pub const ORIGINAL: &str = r#"
{
    "id": "resp_01",
    "model": "demo-1",
    "choices": [
        {
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [
                    {
                        "id": "call_1",
                        "type": "function",
                        "function": {
                            "name": "get_weather",
                            "arguments": "{\"city\":\"Oslo\",\"days\":[1,2]}"
                        }
                    },
                    {
                        "id": "call_2",
                        "type": "function",
                        "function": {
                            "name": "get_time",
                            "arguments": "{\"tz\":\"CET\"}"
                        }
                    }
                ]
            },
            "logprobs": {
                "tokens": ["get", "_weather"],
                "values": [-0.25, -1.5]
            },
            "finish_reason": "tool_calls"
        }
    ],
    "usage": {
        "prompt_tokens": 12,
        "completion_tokens": 40,
        "total_tokens": 52
    }
}"#;

// The same response, minified and delivered in pieces. Cuts fall inside
// names, literals, numbers and right after an escaping backslash.
#[rustfmt::skip]
pub const STREAM: [&str; 10] = [
    r#"{"id":"resp_01","mo"#,                                                 // inside a name
    r#"del":"demo-1","choices":[{"index":0"#,                                  // number at chunk end
    r#","message":{"role":"assistant","content":nu"#,                          // inside `null`
    r#"ll,"tool_calls":[{"id":"call_1","type":"function","function":{"name":"get_weather","arguments":"{\"#, // after `\`
    r#""city\":\"Oslo\",\"days\":[1,2]}"}},{"id":"call_2","type":"function""#, // escaped quote first
    r#","function":{"name":"get_time","arguments":"{\"tz\":\"CET\"}"}}]}"#,   // closes the loop array
    r#","logprobs":{"tokens":["get","_weather"],"values":[-0."#,              // inside a number
    r#"25,-1.5]},"finish_reason":"tool_"#,                                     // inside a string value
    r#"calls"}],"usage":{"prompt_tokens":12,"completion_tokens":4"#,          // inside a number
    r#"0,"total_tokens":52}}"#,                                               // closes the document
];

/// A `BufRead` that hands out one chunk per refill, never merging chunks.
pub struct ChunkedReader {
    chunks: Vec<&'static [u8]>,
    idx: usize,
    pos: usize,
}

impl ChunkedReader {
    pub fn new(chunks: &[&'static str]) -> Self {
        Self {
            chunks: chunks.iter().map(|c| c.as_bytes()).collect(),
            idx: 0,
            pos: 0,
        }
    }
}

impl io::Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = io::BufRead::fill_buf(self)?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        io::BufRead::consume(self, n);
        Ok(n)
    }
}

impl io::BufRead for ChunkedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        while let Some(chunk) = self.chunks.get(self.idx) {
            if self.pos < chunk.len() {
                return Ok(&chunk[self.pos..]);
            }
            self.idx += 1;
            self.pos = 0;
        }
        Ok(&[])
    }

    fn consume(&mut self, amt: usize) {
        self.pos += amt;
    }
}

/// One line per item: the value as compact JSON, or the error message.
pub fn render(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            Ok(value) => writeln!(out, "{value}").unwrap(),
            Err(err) => writeln!(out, "error: {err}").unwrap(),
        }
    }
    out
}
