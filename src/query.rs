//! Query/view layer: filtering, sorting, and pagination over the record
//! sequence. Everything here is a stateless pure function; the caller owns
//! whatever "current search/sort/page" state exists between calls.

use crate::model::ConstituencyRecord;
use clap::ValueEnum;
use std::cmp::Ordering;

/// Fields the constituency table can sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    AcNo,
    Name,
    WinnerName,
    WinnerParty,
    WinnerVotes,
    Margin,
    PollingPercentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Case-insensitive substring search against the AC number (as printed),
/// constituency name, winner name, and winner party. A record is retained
/// if any field matches; an empty or whitespace-only query returns the
/// whole view unchanged.
pub fn filter_by_text<'a>(
    records: &[&'a ConstituencyRecord],
    query: &str,
) -> Vec<&'a ConstituencyRecord> {
    if query.trim().is_empty() {
        return records.to_vec();
    }

    let query = query.to_lowercase();
    records
        .iter()
        .filter(|c| {
            c.constituency_name.to_lowercase().contains(&query)
                || c.ac_no.to_string().contains(&query)
                || c.winner.name.to_lowercase().contains(&query)
                || c.winner.party.to_lowercase().contains(&query)
        })
        .copied()
        .collect()
}

/// Exact match on the winner's party label; `None` keeps everything.
pub fn filter_by_party<'a>(
    records: &[&'a ConstituencyRecord],
    party: Option<&str>,
) -> Vec<&'a ConstituencyRecord> {
    match party {
        None => records.to_vec(),
        Some(party) => records
            .iter()
            .filter(|c| c.winner.party == party)
            .copied()
            .collect(),
    }
}

/// Exact match on the district label, with absent districts reading as
/// "Unknown".
pub fn filter_by_district<'a>(
    records: &[&'a ConstituencyRecord],
    district: &str,
) -> Vec<&'a ConstituencyRecord> {
    records
        .iter()
        .filter(|c| c.district_label() == district)
        .copied()
        .collect()
}

/// Stable sort on the chosen field. Equal keys keep their input order in
/// both directions.
pub fn sort_records<'a>(
    mut records: Vec<&'a ConstituencyRecord>,
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a ConstituencyRecord> {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    records
}

fn compare(a: &ConstituencyRecord, b: &ConstituencyRecord, field: SortField) -> Ordering {
    match field {
        SortField::AcNo => a.ac_no.cmp(&b.ac_no),
        SortField::Name => a
            .constituency_name
            .to_lowercase()
            .cmp(&b.constituency_name.to_lowercase()),
        SortField::WinnerName => a.winner.name.to_lowercase().cmp(&b.winner.name.to_lowercase()),
        SortField::WinnerParty => a.winner.party.to_lowercase().cmp(&b.winner.party.to_lowercase()),
        SortField::WinnerVotes => a.winner.votes_secured.cmp(&b.winner.votes_secured),
        SortField::Margin => a.winning_margin.cmp(&b.winning_margin),
        // Malformed percentages read as 0.0, so they sort first ascending.
        SortField::PollingPercentage => a.polling_percent().total_cmp(&b.polling_percent()),
    }
}

/// One page of the view plus the page count for the whole view.
#[derive(Debug)]
pub struct Page<'a> {
    pub items: Vec<&'a ConstituencyRecord>,
    pub total_pages: usize,
}

/// Slice out page `page` (1-based). Clamping the page number into range is
/// the caller's concern; an out-of-range page yields an empty slice rather
/// than failing.
pub fn paginate<'a>(
    records: &[&'a ConstituencyRecord],
    page: usize,
    page_size: usize,
) -> Page<'a> {
    if page_size == 0 {
        return Page {
            items: Vec::new(),
            total_pages: 0,
        };
    }

    let total_pages = (records.len() + page_size - 1) / page_size;
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = if start >= records.len() {
        Vec::new()
    } else {
        records[start..(start + page_size).min(records.len())].to_vec()
    };

    Page { items, total_pages }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(usize),
    Ellipsis,
}

/// Bounded page-navigation window. All pages are listed up to five total;
/// beyond that the window keeps the first and last pages visible and
/// elides the rest around the current page.
pub fn page_window(current: usize, total: usize) -> Vec<PageEntry> {
    const MAX_VISIBLE: usize = 5;

    let mut pages = Vec::new();
    if total <= MAX_VISIBLE {
        for p in 1..=total {
            pages.push(PageEntry::Page(p));
        }
    } else if current <= 3 {
        for p in 1..=4 {
            pages.push(PageEntry::Page(p));
        }
        pages.push(PageEntry::Ellipsis);
        pages.push(PageEntry::Page(total));
    } else if current >= total - 2 {
        pages.push(PageEntry::Page(1));
        pages.push(PageEntry::Ellipsis);
        for p in (total - 3)..=total {
            pages.push(PageEntry::Page(p));
        }
    } else {
        pages.push(PageEntry::Page(1));
        pages.push(PageEntry::Ellipsis);
        for p in (current - 1)..=(current + 1) {
            pages.push(PageEntry::Page(p));
        }
        pages.push(PageEntry::Ellipsis);
        pages.push(PageEntry::Page(total));
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::record;
    use PageEntry::{Ellipsis, Page as P};

    fn sample() -> Vec<ConstituencyRecord> {
        vec![
            record(1, "Ichchapuram", "Srikakulam", ("Bendalam Ashok", "TDP", 118_755), ("Piriya Sairaj", "YSRCP", 60_674)),
            record(2, "Palasa", "Srikakulam", ("Gouthu Sireesha", "YSRCP", 84_500), ("Seediri Appalaraju", "TDP", 80_120)),
            record(3, "Tekkali", "Srikakulam", ("Kinjarapu Atchannaidu", "TDP", 121_938), ("Duvvada Srinivas", "YSRCP", 63_900)),
        ]
    }

    fn view(records: &[ConstituencyRecord]) -> Vec<&ConstituencyRecord> {
        records.iter().collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let records = sample();
        let all = view(&records);
        assert_eq!(filter_by_text(&all, "").len(), 3);
        assert_eq!(filter_by_text(&all, "   ").len(), 3);
    }

    #[test]
    fn text_filter_never_grows_the_view() {
        let records = sample();
        let all = view(&records);
        for query in ["", "a", "palasa", "tdp", "zzz", "1"] {
            assert!(filter_by_text(&all, query).len() <= all.len());
        }
    }

    #[test]
    fn text_filter_matches_any_field_case_insensitively() {
        let records = sample();
        let all = view(&records);

        // Constituency name.
        assert_eq!(filter_by_text(&all, "PALASA").len(), 1);
        // Winner name.
        assert_eq!(filter_by_text(&all, "sireesha").len(), 1);
        // Winner party.
        assert_eq!(filter_by_text(&all, "tdp").len(), 2);
        // AC number as a decimal substring.
        assert_eq!(filter_by_text(&all, "3")[0].ac_no, 3);
        // No match.
        assert!(filter_by_text(&all, "nellore").is_empty());
    }

    #[test]
    fn party_filter_is_exact_and_all_is_a_noop() {
        let records = sample();
        let all = view(&records);
        assert_eq!(filter_by_party(&all, Some("TDP")).len(), 2);
        assert_eq!(filter_by_party(&all, Some("tdp")).len(), 0);
        assert_eq!(filter_by_party(&all, None).len(), 3);
    }

    #[test]
    fn district_filter_matches_label() {
        let mut records = sample();
        records[2].district = None;
        let all = view(&records);
        assert_eq!(filter_by_district(&all, "Srikakulam").len(), 2);
        assert_eq!(filter_by_district(&all, "Unknown").len(), 1);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let records = vec![
            record(10, "A", "D", ("W1", "TDP", 100), ("R", "X", 50)),
            record(11, "B", "D", ("W2", "YSRCP", 100), ("R", "X", 50)),
            record(12, "C", "D", ("W3", "TDP", 100), ("R", "X", 50)),
        ];
        let all = view(&records);

        // All winner-vote keys are equal: input order must survive.
        let asc = sort_records(all.clone(), SortField::WinnerVotes, SortDirection::Asc);
        assert_eq!(asc.iter().map(|r| r.ac_no).collect::<Vec<_>>(), vec![10, 11, 12]);
        let desc = sort_records(all, SortField::WinnerVotes, SortDirection::Desc);
        assert_eq!(desc.iter().map(|r| r.ac_no).collect::<Vec<_>>(), vec![10, 11, 12]);
    }

    #[test]
    fn sorts_by_parsed_polling_percentage() {
        let mut records = sample();
        records[0].polling_percentage = "71.20 %".to_string();
        records[1].polling_percentage = "broken".to_string();
        records[2].polling_percentage = "85.00 %".to_string();
        let all = view(&records);

        let sorted = sort_records(all, SortField::PollingPercentage, SortDirection::Asc);
        // The malformed value reads as 0 and sorts first.
        assert_eq!(sorted.iter().map(|r| r.ac_no).collect::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn sorts_names_case_insensitively() {
        let records = vec![
            record(1, "palasa", "D", ("W", "A", 1), ("R", "B", 0)),
            record(2, "Ichchapuram", "D", ("W", "A", 1), ("R", "B", 0)),
        ];
        let sorted = sort_records(view(&records), SortField::Name, SortDirection::Asc);
        assert_eq!(sorted[0].ac_no, 2);
    }

    #[test]
    fn pagination_covers_the_sequence_exactly() {
        let records: Vec<ConstituencyRecord> = (1..=7)
            .map(|i| record(i, "Seat", "D", ("W", "A", 10), ("R", "B", 5)))
            .collect();
        let all = view(&records);

        let total_pages = paginate(&all, 1, 3).total_pages;
        assert_eq!(total_pages, 3);

        let mut seen = Vec::new();
        for page in 1..=total_pages {
            seen.extend(paginate(&all, page, 3).items);
        }
        assert_eq!(seen.len(), all.len());
        assert_eq!(
            seen.iter().map(|r| r.ac_no).collect::<Vec<_>>(),
            (1..=7).collect::<Vec<_>>()
        );
        // Final page holds the remainder.
        assert_eq!(paginate(&all, 3, 3).items.len(), 1);
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let records = sample();
        let all = view(&records);
        let page = paginate(&all, 99, 25);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn small_page_counts_list_every_page() {
        assert_eq!(page_window(1, 1), vec![P(1)]);
        assert_eq!(page_window(3, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
    }

    #[test]
    fn window_near_the_start() {
        assert_eq!(
            page_window(2, 10),
            vec![P(1), P(2), P(3), P(4), Ellipsis, P(10)]
        );
    }

    #[test]
    fn window_near_the_end() {
        assert_eq!(
            page_window(9, 10),
            vec![P(1), Ellipsis, P(7), P(8), P(9), P(10)]
        );
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![P(1), Ellipsis, P(4), P(5), P(6), Ellipsis, P(10)]
        );
    }
}
