#![allow(missing_docs, dead_code)]

/// A structured document exercising nested objects, arrays, escapes, and
/// every primitive kind.
pub const MISSION: &str = r#"{
    "mission": "apollo 11",
    "crew": [
        { "name": "armstrong", "role": "commander", "eva": true },
        { "name": "collins", "role": "cmp", "eva": false }
    ],
    "duration_days": 8.14,
    "callsigns": ["eagle", "columbia"],
    "notes": "first words: \"one small step\"\n",
    "site": null,
    "orbits": 30
}"#;

/// `MISSION` as the compact writer renders it: source key order, minimal
/// whitespace, numbers through the platform float formatter.
pub const MISSION_COMPACT: &str = concat!(
    r#"{"mission":"apollo 11","#,
    r#""crew":[{"name":"armstrong","role":"commander","eva":true},"#,
    r#"{"name":"collins","role":"cmp","eva":false}],"#,
    r#""duration_days":8.14,"#,
    r#""callsigns":["eagle","columbia"],"#,
    r#""notes":"first words: \"one small step\"\n","#,
    r#""site":null,"#,
    r#""orbits":30}"#,
);
