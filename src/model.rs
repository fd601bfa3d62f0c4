use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Label used for records whose source row carries no district.
pub const UNKNOWN_DISTRICT: &str = "Unknown";

/// A candidate's name, party, and votes as recorded against a single seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDetails {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Party")]
    pub party: String,
    #[serde(rename = "Votes_Secured")]
    pub votes_secured: u64,
}

/// One of the top five candidates in a seat, winner included.
///
/// Ranks run 1..=5 in ascending order and the rank-1 entry corresponds to
/// the seat's winner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "Rank")]
    pub rank: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Party")]
    pub party: String,
    #[serde(rename = "Votes_Secured")]
    pub votes_secured: u64,
    /// Carried through from the source document, unused by the engine.
    #[serde(rename = "Source_Citations", default)]
    pub source_citations: Option<String>,
}

/// One constituency's declared result. Created at load time, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstituencyRecord {
    #[serde(rename = "AC_No")]
    pub ac_no: u32,
    #[serde(rename = "Constituency_Name")]
    pub constituency_name: String,
    #[serde(rename = "District", default)]
    pub district: Option<String>,
    #[serde(rename = "Total_Electors")]
    pub total_electors: u64,
    /// Decimal-plus-unit string, e.g. "78.45 %". Parsed on demand.
    #[serde(rename = "Polling_Percentage")]
    pub polling_percentage: String,
    #[serde(rename = "NOTA_Votes")]
    pub nota_votes: u64,
    #[serde(rename = "Winner_Details")]
    pub winner: CandidateDetails,
    #[serde(rename = "Runner_up_Details")]
    pub runner_up: CandidateDetails,
    /// Stored as declared in the source; not re-derived from the winner and
    /// runner-up vote counts.
    #[serde(rename = "Winning_Margin")]
    pub winning_margin: u64,
    #[serde(rename = "Top_5_Candidates")]
    pub top_candidates: Vec<RankedCandidate>,
}

impl ConstituencyRecord {
    /// District label, with absent districts reading as "Unknown".
    pub fn district_label(&self) -> &str {
        self.district.as_deref().unwrap_or(UNKNOWN_DISTRICT)
    }

    /// Parsed polling percentage. Malformed strings read as 0.0.
    pub fn polling_percent(&self) -> f64 {
        parse_percentage(&self.polling_percentage)
    }
}

/// Root of the results document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ElectionDocument {
    #[serde(rename = "AndhraPradeshAssemblyElections2024")]
    pub constituencies: Vec<ConstituencyRecord>,
}

/// Extract the leading decimal from a percentage string, ignoring the unit
/// suffix. Anything that does not start with a decimal falls back to 0.0
/// rather than failing the computation; this is a silent-degrade policy for
/// a handful of malformed source rows.
pub fn parse_percentage(raw: &str) -> f64 {
    lazy_static! {
        static ref PERCENT_RX: Regex = Regex::new(r"^\s*(\d+(?:\.\d+)?)").unwrap();
    }

    PERCENT_RX
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_percentage_with_spaced_unit() {
        assert_eq!(parse_percentage("78.45 %"), 78.45);
    }

    #[test]
    fn parses_percentage_without_unit() {
        assert_eq!(parse_percentage("81.2"), 81.2);
        assert_eq!(parse_percentage("65%"), 65.0);
    }

    #[test]
    fn malformed_percentage_reads_as_zero() {
        assert_eq!(parse_percentage("N/A"), 0.0);
        assert_eq!(parse_percentage(""), 0.0);
        assert_eq!(parse_percentage("-3.5 %"), 0.0);
    }

    #[test]
    fn absent_district_reads_as_unknown() {
        let mut record = fixtures::record(1, "Ichchapuram", "Srikakulam", ("A", "TDP", 100), ("B", "YSRCP", 50));
        record.district = None;
        assert_eq!(record.district_label(), UNKNOWN_DISTRICT);
    }
}
