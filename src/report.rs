//! Console presentation of engine output. Pure consumer: every number
//! printed here comes from `metrics`/`query`, nothing is computed inline
//! beyond formatting.

use crate::metrics::{self, PartyStat};
use crate::model::ConstituencyRecord;
use crate::parties::party_term_color;
use crate::query::{self, PageEntry};
use crate::store::RecordStore;
use colored::Colorize;

/// Group digits with commas for vote counts.
pub fn format_votes(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn party_label(party: &str) -> colored::ColoredString {
    party.color(party_term_color(party)).bold()
}

/// State-wide party table: seats, votes, estimated vote share.
pub fn print_party_summary(store: &RecordStore) {
    let records = store.records();
    let summary = metrics::party_summary(records);
    let total_polled = metrics::total_polled_votes(records);

    println!("{}", "Party Performance".bold());
    println!("Seats and estimated vote share across {} seats\n", store.len());
    println!(
        "{:<10} {:>6} {:>14} {:>9}",
        "Party".bold(),
        "Seats".bold(),
        "Votes".bold(),
        "Share %".bold()
    );
    for stat in &summary {
        println!(
            "{:<10} {:>6} {:>14} {:>9.2}",
            party_label(&stat.party),
            stat.seats,
            format_votes(stat.votes),
            stat.vote_share
        );
    }
    println!(
        "\n📊 Estimated votes polled state-wide: {}",
        format_votes(total_polled).bright_green()
    );
    println!("   (electors × polling %, an approximation of ballots cast)");
}

/// One card per district: seat count, per-party wins, estimated votes.
pub fn print_district_summary(store: &RecordStore) {
    let districts = metrics::district_summary(store.records());

    println!("{}\n", "District Analysis".bold());
    for district in &districts {
        println!(
            "{} — {} constituencies",
            district.name.bold(),
            district.total_seats
        );

        let mut wins: Vec<(&String, &u64)> = district.party_wins.iter().collect();
        wins.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (party, seats) in wins {
            println!("  {:<10} {} seats", party_label(party), seats);
        }
        println!(
            "  Total votes polled (est.): {}\n",
            format_votes(district.total_votes)
        );
    }
}

/// Every seat in one district, in AC order, with its top-candidate table.
pub fn print_district_detail(store: &RecordStore, district: &str) {
    let all: Vec<&ConstituencyRecord> = store.records().iter().collect();
    let seats = query::sort_records(
        query::filter_by_district(&all, district),
        query::SortField::AcNo,
        query::SortDirection::Asc,
    );

    if seats.is_empty() {
        println!("No constituencies found in district \"{}\"", district);
        return;
    }

    println!(
        "{} — detailed results for {} constituencies\n",
        format!("{} District", district).bold(),
        seats.len()
    );
    for seat in seats {
        println!(
            "{:>3}  {} ({} electors, {} polling)",
            seat.ac_no,
            seat.constituency_name.bold(),
            format_votes(seat.total_electors),
            seat.polling_percentage.trim()
        );
        print_candidate_table(seat, "     ");
        println!(
            "     Winning margin: {} votes\n",
            format_votes(seat.winning_margin)
        );
    }
}

fn print_candidate_table(seat: &ConstituencyRecord, indent: &str) {
    let seat_total = metrics::seat_total_votes(seat);
    for candidate in &seat.top_candidates {
        let share = metrics::vote_share_within_seat(candidate.votes_secured, seat_total);
        println!(
            "{}{}. {:<28} {:<8} {:>12} {:>7.2}%",
            indent,
            candidate.rank,
            candidate.name,
            party_label(&candidate.party),
            format_votes(candidate.votes_secured),
            share
        );
    }
}

/// The paginated constituency table with a page-window footer.
pub fn print_constituency_page(
    page_items: &[&ConstituencyRecord],
    filtered_count: usize,
    current_page: usize,
    total_pages: usize,
    page_size: usize,
    search: Option<&str>,
) {
    if page_items.is_empty() {
        match search {
            Some(query) => println!("No constituencies found matching \"{}\"", query),
            None => println!("No constituencies to show"),
        }
        return;
    }

    let start = (current_page - 1) * page_size + 1;
    let end = start + page_items.len() - 1;
    print!(
        "Showing {}-{} of {} constituencies",
        start, end, filtered_count
    );
    match search {
        Some(query) => println!(" for \"{}\"\n", query),
        None => println!("\n"),
    }

    println!(
        "{:>5}  {:<24} {:<28} {:<8} {:>10} {:>9} {:>9}",
        "AC".bold(),
        "Constituency".bold(),
        "Winner".bold(),
        "Party".bold(),
        "Votes".bold(),
        "Margin".bold(),
        "Poll %".bold()
    );
    for seat in page_items {
        println!(
            "{:>5}  {:<24} {:<28} {:<8} {:>10} {:>9} {:>9}",
            seat.ac_no,
            seat.constituency_name,
            seat.winner.name,
            party_label(&seat.winner.party),
            format_votes(seat.winner.votes_secured),
            format!("+{}", format_votes(seat.winning_margin)),
            seat.polling_percentage.trim()
        );
    }

    if total_pages > 1 {
        let window: Vec<String> = query::page_window(current_page, total_pages)
            .into_iter()
            .map(|entry| match entry {
                PageEntry::Page(p) if p == current_page => format!("[{}]", p).bold().to_string(),
                PageEntry::Page(p) => p.to_string(),
                PageEntry::Ellipsis => "...".to_string(),
            })
            .collect();
        println!(
            "\nPage {} of {}   {}",
            current_page,
            total_pages,
            window.join(" ")
        );
    }
}

/// Full result card for one seat.
pub fn print_seat_detail(seat: &ConstituencyRecord, close_threshold: u64) {
    let seat_total = metrics::seat_total_votes(seat);
    let estimated = metrics::estimated_polled_votes(seat);

    println!(
        "AC #{} — {} ({})",
        seat.ac_no,
        seat.constituency_name.bold(),
        seat.district_label()
    );
    if metrics::is_close_race(seat, close_threshold) {
        println!(
            "{}",
            format!(
                "⚡ Close race: decided by fewer than {} votes",
                format_votes(close_threshold)
            )
            .bright_yellow()
        );
    }
    println!();
    println!("  Total electors      {}", format_votes(seat.total_electors));
    println!(
        "  Polling percentage  {} ({} votes cast, est.)",
        seat.polling_percentage.trim(),
        format_votes(estimated)
    );
    println!(
        "  Winning margin      {}",
        format_votes(seat.winning_margin).bright_green()
    );
    println!("  NOTA votes          {}", format_votes(seat.nota_votes));
    println!();

    let winner_share = metrics::vote_share_within_seat(seat.winner.votes_secured, seat_total);
    let runner_share = metrics::vote_share_within_seat(seat.runner_up.votes_secured, seat_total);
    println!(
        "  🏆 Winner     {:<28} {:<8} {:>12} {:>7.2}%",
        seat.winner.name.bold(),
        party_label(&seat.winner.party),
        format_votes(seat.winner.votes_secured),
        winner_share
    );
    println!(
        "     Runner-up  {:<28} {:<8} {:>12} {:>7.2}%",
        seat.runner_up.name,
        party_label(&seat.runner_up.party),
        format_votes(seat.runner_up.votes_secured),
        runner_share
    );
    println!("\n  Top candidates:");
    print_candidate_table(seat, "  ");
}

/// Performance summary for one party; zeroed placeholder when the label
/// never appears in the store.
pub fn print_party_detail(store: &RecordStore, party: &str) {
    let records = store.records();
    let wins = store.wins_for_party(party);
    let stat = find_party_stat(records, party);

    println!("{} — Performance Summary\n", party_label(party));
    println!(
        "  Seats won            {} of {}",
        wins.len().to_string().bold(),
        store.len()
    );
    println!("  Total votes secured  {}", format_votes(stat.votes));
    println!("  State-wide share     {:.2}%", stat.vote_share);

    if wins.is_empty() {
        println!("\nNo seats won by this party.");
        return;
    }

    println!("\n  Seats by district:");
    for (district, seats) in metrics::wins_by_district(&wins) {
        println!("    {:<24} {}", district, seats);
    }

    println!("\n  Constituencies won:");
    println!(
        "  {:>5}  {:<24} {:<16} {:<28} {:>9}",
        "AC", "Constituency", "District", "Candidate", "Margin"
    );
    for seat in &wins {
        println!(
            "  {:>5}  {:<24} {:<16} {:<28} {:>9}",
            seat.ac_no,
            seat.constituency_name,
            seat.district_label(),
            seat.winner.name,
            format!("+{}", format_votes(seat.winning_margin))
        );
    }
}

fn find_party_stat(records: &[ConstituencyRecord], party: &str) -> PartyStat {
    metrics::party_summary(records)
        .into_iter()
        .find(|stat| stat.party == party)
        .unwrap_or_else(|| PartyStat {
            party: party.to_string(),
            seats: 0,
            votes: 0,
            vote_share: 0.0,
        })
}

/// Seats decided by fewer votes than the threshold, tightest first.
pub fn print_close_races(store: &RecordStore, threshold: u64) {
    let close = metrics::close_races(store.records(), threshold);

    println!(
        "{} seats decided by fewer than {} votes\n",
        close.len().to_string().bold(),
        format_votes(threshold)
    );
    for seat in close {
        println!(
            "{:>5}  {:<24} {:<8} over {:<8} by {:>7} votes",
            seat.ac_no,
            seat.constituency_name,
            party_label(&seat.winner.party),
            party_label(&seat.runner_up.party),
            format_votes(seat.winning_margin)
        );
    }
}
