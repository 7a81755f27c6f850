//! First-occurrence deduplication over question bank rows.

use csv::StringRecord;
use indexmap::IndexMap;

/// Outcome of a dedup pass: retained rows plus how many were dropped.
#[derive(Debug)]
pub struct DedupOutcome {
    pub unique: Vec<StringRecord>,
    pub duplicates: usize,
}

/// Keep the first row seen for each key value, in encounter order.
///
/// Keys compare by exact string equality. Rows are expected to cover
/// `key_column`; the loader rejects rows that do not.
pub fn dedup_rows(rows: Vec<StringRecord>, key_column: usize) -> DedupOutcome {
    let mut seen: IndexMap<String, StringRecord> = IndexMap::with_capacity(rows.len());
    let mut duplicates = 0;

    for row in rows {
        let key = row.get(key_column).unwrap_or_default().to_string();
        if seen.contains_key(&key) {
            duplicates += 1;
        } else {
            seen.insert(key, row);
        }
    }

    DedupOutcome {
        unique: seen.into_values().collect(),
        duplicates,
    }
}
