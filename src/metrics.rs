//! Derived-metrics engine: pure, single-pass aggregations over the record
//! sequence. Every function allocates its result fresh and never fails on
//! well-formed input; zero denominators yield 0 rather than NaN.

use crate::model::ConstituencyRecord;
use std::collections::HashMap;

/// A seat decided by fewer than this many votes counts as a close race.
pub const CLOSE_RACE_THRESHOLD: u64 = 5000;

/// State-wide performance of one party.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyStat {
    pub party: String,
    pub seats: u64,
    /// Votes accumulated wherever the party appears in a seat's top-five
    /// list, not only in seats it won.
    pub votes: u64,
    /// Percentage of the state-wide estimated polled votes.
    pub vote_share: f64,
}

/// Rollup of one district's seats.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictStats {
    pub name: String,
    pub total_seats: u64,
    pub party_wins: HashMap<String, u64>,
    /// Summed estimated polled votes across the district's seats.
    pub total_votes: u64,
}

/// Seats won per party, counting each record's winner.
pub fn seats_by_party(records: &[ConstituencyRecord]) -> HashMap<String, u64> {
    let mut seats = HashMap::new();
    for record in records {
        *seats.entry(record.winner.party.clone()).or_insert(0) += 1;
    }
    seats
}

/// Votes accumulated per party from every top-candidate entry. A party can
/// accrue votes from races it did not win.
pub fn vote_totals_by_party(records: &[ConstituencyRecord]) -> HashMap<String, u64> {
    let mut votes = HashMap::new();
    for record in records {
        for candidate in &record.top_candidates {
            *votes.entry(candidate.party.clone()).or_insert(0) += candidate.votes_secured;
        }
    }
    votes
}

/// Estimated ballots cast in one seat: electors times the parsed polling
/// percentage. This is an approximation, not an exact ballot count; the
/// source publishes turnout only as a rounded percentage string.
pub fn estimated_polled_votes(record: &ConstituencyRecord) -> u64 {
    (record.total_electors as f64 * record.polling_percent() / 100.0).round() as u64
}

/// Summed per-seat estimate across the given records.
pub fn total_polled_votes(records: &[ConstituencyRecord]) -> u64 {
    records.iter().map(estimated_polled_votes).sum()
}

/// A party's votes as a percentage of the state-wide estimated polled
/// votes. 0.0 when the denominator is zero or the party is unknown.
pub fn state_wide_vote_share(party: &str, records: &[ConstituencyRecord]) -> f64 {
    let total = total_polled_votes(records);
    if total == 0 {
        return 0.0;
    }
    let votes = vote_totals_by_party(records)
        .get(party)
        .copied()
        .unwrap_or(0);
    votes as f64 / total as f64 * 100.0
}

/// Joined seat/vote/share table for every party, ranked by seats, then
/// votes, then label so equal standings always list deterministically.
pub fn party_summary(records: &[ConstituencyRecord]) -> Vec<PartyStat> {
    let seats = seats_by_party(records);
    let votes = vote_totals_by_party(records);
    let total = total_polled_votes(records);

    let mut stats: Vec<PartyStat> = votes
        .into_iter()
        .map(|(party, votes)| PartyStat {
            seats: seats.get(&party).copied().unwrap_or(0),
            vote_share: if total == 0 {
                0.0
            } else {
                votes as f64 / total as f64 * 100.0
            },
            party,
            votes,
        })
        .collect();

    stats.sort_by(|a, b| {
        b.seats
            .cmp(&a.seats)
            .then(b.votes.cmp(&a.votes))
            .then_with(|| a.party.cmp(&b.party))
    });
    stats
}

/// Group records by district, accumulating per-party seat wins and the
/// summed polled-vote estimate. The mapping carries no inherent order;
/// consumers rank it separately.
pub fn district_rollup(records: &[ConstituencyRecord]) -> HashMap<String, DistrictStats> {
    let mut rollup: HashMap<String, DistrictStats> = HashMap::new();
    for record in records {
        let name = record.district_label();
        let stats = rollup
            .entry(name.to_string())
            .or_insert_with(|| DistrictStats {
                name: name.to_string(),
                total_seats: 0,
                party_wins: HashMap::new(),
                total_votes: 0,
            });

        stats.total_seats += 1;
        *stats
            .party_wins
            .entry(record.winner.party.clone())
            .or_insert(0) += 1;
        stats.total_votes += estimated_polled_votes(record);
    }
    rollup
}

/// District rollup ranked by seat count descending, then name.
pub fn district_summary(records: &[ConstituencyRecord]) -> Vec<DistrictStats> {
    let mut districts: Vec<DistrictStats> = district_rollup(records).into_values().collect();
    districts.sort_by(|a, b| {
        b.total_seats
            .cmp(&a.total_seats)
            .then_with(|| a.name.cmp(&b.name))
    });
    districts
}

/// Seats a single party won in each district, ranked by wins then name.
pub fn wins_by_district(wins: &[&ConstituencyRecord]) -> Vec<(String, u64)> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for record in wins {
        *counts.entry(record.district_label().to_string()).or_insert(0) += 1;
    }

    let mut breakdown: Vec<(String, u64)> = counts.into_iter().collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    breakdown
}

/// Whether the winning margin falls below the threshold. A margin exactly
/// equal to the threshold is not close.
pub fn is_close_race(record: &ConstituencyRecord, threshold: u64) -> bool {
    record.winning_margin < threshold
}

/// Seats decided by fewer votes than the threshold, tightest first.
pub fn close_races(records: &[ConstituencyRecord], threshold: u64) -> Vec<&ConstituencyRecord> {
    let mut close: Vec<&ConstituencyRecord> = records
        .iter()
        .filter(|r| is_close_race(r, threshold))
        .collect();
    close.sort_by(|a, b| {
        a.winning_margin
            .cmp(&b.winning_margin)
            .then(a.ac_no.cmp(&b.ac_no))
    });
    close
}

/// Total votes recorded against one seat's top-five list. Distinct from
/// `estimated_polled_votes`: only the top five candidates are known.
pub fn seat_total_votes(record: &ConstituencyRecord) -> u64 {
    record.top_candidates.iter().map(|c| c.votes_secured).sum()
}

/// A candidate's share of one seat's top-five total, 0.0 on an empty seat.
pub fn vote_share_within_seat(votes_secured: u64, seat_total: u64) -> f64 {
    if seat_total == 0 {
        return 0.0;
    }
    votes_secured as f64 / seat_total as f64 * 100.0
}
