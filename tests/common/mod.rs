#![allow(dead_code)]

use healthscatter::{Dataset, Record};

pub fn record(abbr: &str, poverty: f64, age: f64, income: f64, obesity: f64, smokes: f64, healthcare: f64) -> Record {
    Record {
        state: format!("State {abbr}"),
        abbr: abbr.to_string(),
        poverty,
        age,
        income,
        obesity,
        smokes,
        healthcare,
    }
}

/// Two rows whose poverty/obesity columns are 10/20 and 30/40.
pub fn two_states() -> Dataset {
    Dataset::new(vec![
        record("AA", 10.0, 30.0, 40000.0, 20.0, 15.0, 8.0),
        record("BB", 30.0, 40.0, 60000.0, 40.0, 25.0, 16.0),
    ])
}

pub fn three_states() -> Dataset {
    Dataset::new(vec![
        record("AA", 10.0, 30.0, 40000.0, 20.0, 15.0, 8.0),
        record("BB", 30.0, 40.0, 60000.0, 40.0, 25.0, 16.0),
        record("CC", 20.0, 35.0, 50000.0, 30.0, 20.0, 12.0),
    ])
}
