use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full record set for a name, grouped by record type. Ordered so the
/// replace payload comes out deterministic.
pub type RecordSet = BTreeMap<String, Vec<String>>;

/// One rrset as LiveDNS returns and accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub rrset_type: String,
    pub rrset_values: Vec<String>,
}

/// PUT body replacing the whole record set for a name.
#[derive(Debug, Serialize)]
pub struct ReplaceRecords {
    pub items: Vec<RecordEntry>,
}

pub fn fold_records(entries: Vec<RecordEntry>) -> RecordSet {
    entries
        .into_iter()
        .map(|e| (e.rrset_type, e.rrset_values))
        .collect()
}

pub fn to_entries(records: &RecordSet) -> Vec<RecordEntry> {
    records
        .iter()
        .map(|(rrset_type, rrset_values)| RecordEntry {
            rrset_type: rrset_type.clone(),
            rrset_values: rrset_values.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rrset_type: &str, values: &[&str]) -> RecordEntry {
        RecordEntry {
            rrset_type: rrset_type.to_string(),
            rrset_values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn folds_entries_by_type() {
        let records = fold_records(vec![
            entry("A", &["192.0.2.10"]),
            entry("MX", &["10 mail.example.com.", "20 backup.example.com."]),
        ]);
        assert_eq!(records["A"], vec!["192.0.2.10"]);
        assert_eq!(records["MX"].len(), 2);
    }

    #[test]
    fn later_duplicate_type_wins() {
        let records = fold_records(vec![
            entry("TXT", &["old"]),
            entry("TXT", &["new"]),
        ]);
        assert_eq!(records["TXT"], vec!["new"]);
    }

    #[test]
    fn entries_come_out_in_type_order() {
        let mut records = RecordSet::new();
        records.insert("MX".to_string(), vec!["10 mail.example.com.".to_string()]);
        records.insert("A".to_string(), vec!["192.0.2.10".to_string()]);
        let items = to_entries(&records);
        assert_eq!(items[0].rrset_type, "A");
        assert_eq!(items[1].rrset_type, "MX");
    }
}
