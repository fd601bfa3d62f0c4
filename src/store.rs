use crate::model::{ConstituencyRecord, ElectionDocument};
use itertools::Itertools;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read results file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed results document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Read-only, load-ordered store of constituency records.
///
/// Loaded once per invocation; every derived view is recomputed from this
/// sequence on demand.
pub struct RecordStore {
    records: Vec<ConstituencyRecord>,
}

impl RecordStore {
    pub fn load(path: &Path) -> Result<RecordStore> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse the results document. A single structurally invalid record
    /// (missing required field) fails the whole load; there is no partial
    /// state.
    pub fn from_json(raw: &str) -> Result<RecordStore> {
        let document: ElectionDocument = serde_json::from_str(raw)?;
        Ok(RecordStore {
            records: document.constituencies,
        })
    }

    pub fn records(&self) -> &[ConstituencyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look a seat up by its AC number. A miss is "not found", never fatal.
    pub fn get(&self, ac_no: u32) -> Option<&ConstituencyRecord> {
        self.records.iter().find(|c| c.ac_no == ac_no)
    }

    /// Seats won by the given party (exact label match), in load order.
    pub fn wins_for_party(&self, party: &str) -> Vec<&ConstituencyRecord> {
        self.records
            .iter()
            .filter(|c| c.winner.party == party)
            .collect()
    }

    /// Unique district labels, sorted.
    pub fn districts(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|c| c.district_label().to_string())
            .unique()
            .sorted()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DOC: &str = r#"{
        "AndhraPradeshAssemblyElections2024": [
            {
                "AC_No": 1,
                "Constituency_Name": "Ichchapuram",
                "District": "Srikakulam",
                "Total_Electors": 217850,
                "Polling_Percentage": "83.81 %",
                "NOTA_Votes": 1360,
                "Winner_Details": {"Name": "Bendalam Ashok", "Party": "TDP", "Votes_Secured": 118755},
                "Runner_up_Details": {"Name": "Piriya Sairaj", "Party": "YSRCP", "Votes_Secured": 60674},
                "Winning_Margin": 58081,
                "Top_5_Candidates": [
                    {"Rank": 1, "Name": "Bendalam Ashok", "Party": "TDP", "Votes_Secured": 118755, "Source_Citations": "ECI"},
                    {"Rank": 2, "Name": "Piriya Sairaj", "Party": "YSRCP", "Votes_Secured": 60674, "Source_Citations": "ECI"}
                ]
            },
            {
                "AC_No": 2,
                "Constituency_Name": "Palasa",
                "Total_Electors": 195964,
                "Polling_Percentage": "80.53 %",
                "NOTA_Votes": 980,
                "Winner_Details": {"Name": "Gouthu Sireesha", "Party": "YSRCP", "Votes_Secured": 84500},
                "Runner_up_Details": {"Name": "Seediri Appalaraju", "Party": "TDP", "Votes_Secured": 80120},
                "Winning_Margin": 4380,
                "Top_5_Candidates": [
                    {"Rank": 1, "Name": "Gouthu Sireesha", "Party": "YSRCP", "Votes_Secured": 84500},
                    {"Rank": 2, "Name": "Seediri Appalaraju", "Party": "TDP", "Votes_Secured": 80120}
                ]
            }
        ]
    }"#;

    #[test]
    fn loads_document_in_order() {
        let store = RecordStore::from_json(SAMPLE_DOC).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].ac_no, 1);
        assert_eq!(store.records()[1].ac_no, 2);
    }

    #[test]
    fn missing_required_field_fails_load_atomically() {
        // Second record drops Winner_Details entirely.
        let malformed = r#"{
            "AndhraPradeshAssemblyElections2024": [
                {
                    "AC_No": 1,
                    "Constituency_Name": "Ichchapuram",
                    "Total_Electors": 100,
                    "Polling_Percentage": "80 %",
                    "NOTA_Votes": 1,
                    "Winner_Details": {"Name": "A", "Party": "TDP", "Votes_Secured": 60},
                    "Runner_up_Details": {"Name": "B", "Party": "YSRCP", "Votes_Secured": 40},
                    "Winning_Margin": 20,
                    "Top_5_Candidates": []
                },
                {
                    "AC_No": 2,
                    "Constituency_Name": "Palasa",
                    "Total_Electors": 100,
                    "Polling_Percentage": "80 %",
                    "NOTA_Votes": 1,
                    "Runner_up_Details": {"Name": "B", "Party": "YSRCP", "Votes_Secured": 40},
                    "Winning_Margin": 20,
                    "Top_5_Candidates": []
                }
            ]
        }"#;

        assert!(matches!(
            RecordStore::from_json(malformed),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn seat_lookup_miss_is_not_found() {
        let store = RecordStore::from_json(SAMPLE_DOC).unwrap();
        assert!(store.get(1).is_some());
        assert!(store.get(999).is_none());
    }

    #[test]
    fn wins_for_party_matches_exact_label() {
        let store = RecordStore::from_json(SAMPLE_DOC).unwrap();
        assert_eq!(store.wins_for_party("TDP").len(), 1);
        assert_eq!(store.wins_for_party("tdp").len(), 0);
        assert!(store.wins_for_party("BSP").is_empty());
    }

    #[test]
    fn districts_default_missing_labels_to_unknown() {
        let store = RecordStore::from_json(SAMPLE_DOC).unwrap();
        assert_eq!(store.districts(), vec!["Srikakulam", "Unknown"]);
    }
}
