//! Dispatches tool calls from a chat-completion response while the response
//! is still arriving.
//!
//! The response body is simulated as a reader that yields a few bytes at a
//! time, the way a network socket would. `Extractor::stream` scans it on a
//! background thread and hands over each element of `tool_calls` as soon as
//! its closing brace has been read; the bulky `logprobs` payload is never
//! materialized.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonpluck --example tool_calls
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use std::{
    io::{self, BufRead, Read},
    thread,
    time::Duration,
};

use jsonpluck::{Extractor, ExtractorOptions, Value};

const RESPONSE: &str = r#"{
  "id": "resp_01",
  "choices": [{
    "message": {
      "role": "assistant",
      "tool_calls": [
        {"id": "call_1", "function": {"name": "get_weather", "arguments": "{\"city\":\"Oslo\"}"}},
        {"id": "call_2", "function": {"name": "get_time", "arguments": "{\"tz\":\"CET\"}"}}
      ]
    },
    "logprobs": {"tokens": ["get", "_weather", "get", "_time"], "values": [-0.1, -0.2, -0.3, -0.4]},
    "finish_reason": "tool_calls"
  }]
}"#;

/// Serves `RESPONSE` eight bytes at a time with a short pause per refill.
struct SlowSocket {
    pos: usize,
}

impl Read for SlowSocket {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for SlowSocket {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        let rest = &RESPONSE.as_bytes()[self.pos..];
        if self.pos % 8 == 0 && !rest.is_empty() {
            thread::sleep(Duration::from_millis(2));
        }
        Ok(&rest[..rest.len().min(8 - self.pos % 8)])
    }

    fn consume(&mut self, amt: usize) {
        self.pos += amt;
    }
}

fn dispatch(call: &Value) -> Option<String> {
    let function = call.get("function")?;
    let name = function.get("name")?.as_str()?;
    let arguments = function.get("arguments")?.as_str()?;

    // The arguments are themselves a JSON document.
    let args = Extractor::from_slice(arguments.as_bytes(), ExtractorOptions::default())
        .next()?
        .ok()?;
    Some(format!("{name}({args})"))
}

fn main() -> io::Result<()> {
    let options = ExtractorOptions::new("tool_calls").skip(["logprobs"]);
    let stream = Extractor::from_reader(SlowSocket { pos: 0 }, options).stream()?;
    let progress = stream.byte_counter();

    for item in stream {
        match item {
            Ok(call) => {
                let id = call.get("id").and_then(Value::as_str).unwrap_or("?");
                match dispatch(&call) {
                    Some(invocation) => {
                        println!("[{:>4} bytes] {id}: {invocation}", progress.get());
                    }
                    None => println!("[{:>4} bytes] {id}: malformed tool call", progress.get()),
                }
            }
            Err(err) => {
                eprintln!("response rejected: {err}");
                break;
            }
        }
    }
    println!("done after {} of {} bytes", progress.get(), RESPONSE.len());
    Ok(())
}
