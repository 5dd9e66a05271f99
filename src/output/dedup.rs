use crate::model::BookRecord;
use std::collections::HashSet;

/// Removes exact-duplicate records
///
/// Two records are duplicates only when every field is equal. The first
/// occurrence of each distinct row is kept, in its original position.
pub fn deduplicate(records: Vec<BookRecord>) -> Vec<BookRecord> {
    let keep: Vec<bool> = {
        let mut seen: HashSet<&BookRecord> = HashSet::with_capacity(records.len());
        records.iter().map(|record| seen.insert(record)).collect()
    };

    records
        .into_iter()
        .zip(keep)
        .filter_map(|(record, keep)| keep.then_some(record))
        .collect()
}
