use alloc::string::String;
use alloc::vec::Vec;

use quickcheck::{Arbitrary, Gen};

use crate::value::{Array, Map, Value};

/// A finite double; JSON has no spelling for NaN or the infinities.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct JsonNumber(pub f64);

impl Arbitrary for JsonNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }
        Self(value)
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            if depth == 0 {
                match usize::arbitrary(g) % 4 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(JsonNumber::arbitrary(g).0),
                    _ => Value::String(String::arbitrary(g)),
                }
            } else {
                match usize::arbitrary(g) % 6 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(JsonNumber::arbitrary(g).0),
                    3 => Value::String(String::arbitrary(g)),
                    4 => {
                        let len = usize::arbitrary(g) % 4;
                        let mut items = Array::new();
                        for _ in 0..len {
                            items.push(gen_val(g, depth - 1));
                        }
                        Value::Array(items)
                    }
                    _ => {
                        let len = usize::arbitrary(g) % 4;
                        let mut map = Map::new();
                        for _ in 0..len {
                            map.insert(String::arbitrary(g), gen_val(g, depth - 1));
                        }
                        Value::Object(map)
                    }
                }
            }
        }

        let depth = usize::arbitrary(g) % 3;
        gen_val(g, depth)
    }
}

/// A sorted, deduplicated list of printable-ASCII candidate keys.
#[derive(Debug, Clone)]
pub(crate) struct CandidateList(pub Vec<String>);

impl Arbitrary for CandidateList {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 1 + usize::arbitrary(g) % 6;
        let mut keys: Vec<String> = (0..len)
            .map(|_| {
                String::arbitrary(g)
                    .chars()
                    .filter(|c| c.is_ascii_graphic() && *c != '"' && *c != '\\')
                    .take(12)
                    .collect()
            })
            .collect();
        keys.sort();
        keys.dedup();
        Self(keys)
    }
}

pub(crate) fn test_count() -> u64 {
    if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
