#![no_main]
use std::{cell::RefCell, io::BufReader};

use arbitrary::Arbitrary;
use jsonpluck::{Extractor, ExtractorOptions, Item};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 5; // 1 flag + 4-byte seed

/// Names the mutator favours so that loop and skip properties actually occur.
const NAMES: [&str; 4] = ["k", "s", "k\"", "items"];

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x03);
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let limit = max_size - HEADER;
        HEADER + append_value(&mut data[HEADER..], size.max(16), limit)
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let Ok(serialized) = serde_json::to_vec(&value.0) else {
        return 0;
    };
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(21)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            _ => {
                let m: Vec<(u8, String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(pick, k, v)| {
                    let key = match NAMES.get(usize::from(pick % 8)) {
                        Some(name) => (*name).to_string(),
                        None => k,
                    };
                    (key, v.0)
                })))
            }
        };
        Ok(ArbitraryValue(value))
    }
}

fn check_sequence(items: &[Item]) {
    if let Some(pos) = items.iter().position(Result::is_err) {
        assert_eq!(pos, items.len() - 1, "items after an error");
    }
}

fn extract(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let seed = u32::from_le_bytes([data[1], data[2], data[3], data[4]]);
    let data = &data[HEADER..];

    let root_list = flags & 1 == 0;
    let mut options = if root_list {
        ExtractorOptions::default()
    } else {
        ExtractorOptions::new("k")
    };
    if flags & 2 != 0 {
        options = options.skip(["s"]);
    }

    let batch = Extractor::from_slice(data, options.clone()).collect_all();
    check_sequence(&batch);

    // Same bytes through a reader whose buffer refills at odd offsets.
    let capacity = 1 + (seed as usize % 64);
    let reader = BufReader::with_capacity(capacity, data);
    let lazy: Vec<Item> = Extractor::from_reader(reader, options).collect();
    assert_eq!(batch, lazy);

    // Well-formed documents never produce an error in root-list mode.
    if root_list && serde_json::from_slice::<Value>(data).is_ok() {
        assert!(batch.iter().all(Result::is_ok), "{batch:?}");
    }
}

fuzz_target!(|data: &[u8]| extract(data));
