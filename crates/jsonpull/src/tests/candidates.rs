use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use quickcheck::{Gen, QuickCheck, TestResult};

use crate::{
    reader::{JsonReader, StrReader},
    tests::arbitrary::{test_count, CandidateList},
};

/// `try_key` finds exactly the keys present in the candidate list and
/// leaves the cursor untouched otherwise.
#[test]
fn try_key_matches_iff_present() {
    fn prop(candidates: CandidateList, pick: usize, miss: String) -> TestResult {
        let cands: Vec<&str> = candidates.0.iter().map(String::as_str).collect();
        if cands.is_empty() {
            return TestResult::discard();
        }

        // A key that is in the list always matches, by reference.
        let hit = cands[pick % cands.len()];
        let doc = format!("{{\"{hit}\": 1}}");
        let mut reader = StrReader::new(&doc);
        reader.expect_object().unwrap();
        match reader.try_key(&cands) {
            Some(found) => {
                assert_eq!(found, hit);
                assert!(core::ptr::eq(found.as_ptr(), hit.as_ptr()));
            }
            None => return TestResult::failed(),
        }
        assert_eq!(reader.expect_int(), Ok(1));

        // A key absent from the list never matches, and the cursor stays at
        // the key so ordinary iteration still works.
        let miss: String = miss
            .chars()
            .filter(|c| c.is_ascii_graphic() && *c != '"' && *c != '\\')
            .collect();
        if cands.contains(&miss.as_str()) {
            return TestResult::discard();
        }
        let doc = format!("{{\"{miss}\": 2}}");
        let mut reader = StrReader::new(&doc);
        reader.expect_object().unwrap();
        if reader.try_key_index(&cands).is_some() {
            return TestResult::failed();
        }
        let key = reader.next_key().unwrap().expect("key still readable");
        assert_eq!(key, miss);
        assert_eq!(reader.expect_int(), Ok(2));
        TestResult::passed()
    }
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(CandidateList, usize, String) -> TestResult);
}

/// `try_str_index` agrees with direct string comparison against the list.
#[test]
fn try_str_index_agrees_with_lookup() {
    fn prop(candidates: CandidateList, probe: usize, outside: bool) -> TestResult {
        let cands: Vec<&str> = candidates.0.iter().map(String::as_str).collect();
        if cands.is_empty() {
            return TestResult::discard();
        }
        let value = if outside {
            "@@not-a-candidate@@"
        } else {
            cands[probe % cands.len()]
        };
        let expected = cands.iter().position(|c| *c == value);

        let doc = format!("\"{value}\"");
        let mut reader = StrReader::new(&doc);
        if reader.try_str_index(&cands) != expected {
            return TestResult::failed();
        }
        if expected.is_none() {
            // Untouched: the plain string read still sees the value.
            assert_eq!(reader.expect_str().unwrap(), value);
        }
        TestResult::passed()
    }
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(CandidateList, usize, bool) -> TestResult);
}

/// Escaped keys never match a candidate even when the decoded text would.
#[test]
fn escaped_keys_never_match() {
    let cands = ["a\tb"];
    let mut reader = StrReader::new("{\"a\\tb\": 1}");
    reader.expect_object().unwrap();
    assert_eq!(reader.try_key_index(&cands), None);
    assert_eq!(reader.next_key().unwrap().as_deref(), Some("a\tb"));
}

/// The matcher needs only key-sized work even against many candidates.
#[test]
fn long_candidate_lists_match_correctly() {
    let stored: Vec<String> = (0..500).map(|i| format!("key{i:04}")).collect();
    let cands: Vec<&str> = stored.iter().map(String::as_str).collect();
    let doc = "{\"key0250\": true}";
    let mut reader = StrReader::new(doc);
    reader.expect_object().unwrap();
    assert_eq!(reader.try_key(&cands), Some("key0250"));
    assert_eq!(reader.expect_bool(), Ok(true));
}

#[test]
#[should_panic(expected = "non-empty")]
fn empty_string_candidate_list_is_rejected() {
    let mut reader = StrReader::new("\"x\"");
    let _ = reader.try_str_index(&[]);
}

/// `CandidateList` instances really are sorted, which the matcher relies
/// on.
#[test]
fn candidate_lists_generate_sorted() {
    fn prop(candidates: CandidateList) -> bool {
        candidates.0.windows(2).all(|w| w[0] < w[1])
    }
    QuickCheck::new()
        .gen(Gen::new(40))
        .tests(test_count())
        .quickcheck(prop as fn(CandidateList) -> bool);
}
