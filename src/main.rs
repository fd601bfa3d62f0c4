mod export;
mod metrics;
mod model;
mod parties;
mod query;
mod report;
mod store;

use crate::metrics::CLOSE_RACE_THRESHOLD;
use crate::model::ConstituencyRecord;
use crate::query::{SortDirection, SortField};
use crate::store::RecordStore;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(about = "Explore AP Assembly Elections 2024 constituency results")]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// State-wide party performance summary.
    Summary {
        /// Results JSON document.
        data_file: PathBuf,
    },
    /// District rollups, or one district's seats in detail.
    Districts {
        /// Results JSON document.
        data_file: PathBuf,
        /// Show every seat in this district instead of the overview.
        #[clap(long)]
        district: Option<String>,
    },
    /// Searchable, sortable, paginated constituency table.
    Constituencies {
        /// Results JSON document.
        data_file: PathBuf,
        /// Match against AC number, constituency, winner, or party.
        #[clap(long)]
        search: Option<String>,
        /// Keep only seats won by this party (exact label).
        #[clap(long)]
        party: Option<String>,
        #[clap(long, value_enum, default_value = "ac-no")]
        sort_by: SortField,
        #[clap(long, value_enum, default_value = "asc")]
        direction: SortDirection,
        #[clap(long, default_value_t = 1)]
        page: usize,
        #[clap(long, default_value_t = 25)]
        page_size: usize,
    },
    /// Full result card for a single constituency.
    Show {
        /// Results JSON document.
        data_file: PathBuf,
        /// AC number of the seat.
        ac_no: u32,
        #[clap(long, default_value_t = CLOSE_RACE_THRESHOLD)]
        threshold: u64,
    },
    /// Performance summary for a single party.
    Party {
        /// Results JSON document.
        data_file: PathBuf,
        /// Exact party label, e.g. TDP or YSRCP.
        party: String,
    },
    /// Export the filtered/sorted view as CSV.
    Export {
        /// Results JSON document.
        data_file: PathBuf,
        #[clap(long)]
        search: Option<String>,
        #[clap(long)]
        party: Option<String>,
        #[clap(long, value_enum, default_value = "ac-no")]
        sort_by: SortField,
        #[clap(long, value_enum, default_value = "asc")]
        direction: SortDirection,
        /// Write to this file instead of stdout.
        #[clap(long)]
        output: Option<PathBuf>,
    },
    /// Seats decided by fewer votes than the threshold.
    CloseRaces {
        /// Results JSON document.
        data_file: PathBuf,
        #[clap(long, default_value_t = CLOSE_RACE_THRESHOLD)]
        threshold: u64,
    },
}

fn main() {
    let opts = Opts::parse();
    if let Err(e) = run(opts.command) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> store::Result<()> {
    match command {
        Command::Summary { data_file } => {
            let store = RecordStore::load(&data_file)?;
            report::print_party_summary(&store);
        }
        Command::Districts {
            data_file,
            district,
        } => {
            let store = RecordStore::load(&data_file)?;
            match district {
                Some(district) => report::print_district_detail(&store, &district),
                None => report::print_district_summary(&store),
            }
        }
        Command::Constituencies {
            data_file,
            search,
            party,
            sort_by,
            direction,
            page,
            page_size,
        } => {
            let store = RecordStore::load(&data_file)?;
            let view = filtered_view(&store, search.as_deref(), party.as_deref());
            let filtered_count = view.len();
            let view = query::sort_records(view, sort_by, direction);
            let paged = query::paginate(&view, page, page_size);
            report::print_constituency_page(
                &paged.items,
                filtered_count,
                page,
                paged.total_pages,
                page_size,
                search.as_deref(),
            );
        }
        Command::Show {
            data_file,
            ac_no,
            threshold,
        } => {
            let store = RecordStore::load(&data_file)?;
            match store.get(ac_no) {
                Some(seat) => report::print_seat_detail(seat, threshold),
                None => println!("Constituency not found: AC #{}", ac_no),
            }
        }
        Command::Party { data_file, party } => {
            let store = RecordStore::load(&data_file)?;
            report::print_party_detail(&store, &party);
        }
        Command::Export {
            data_file,
            search,
            party,
            sort_by,
            direction,
            output,
        } => {
            let store = RecordStore::load(&data_file)?;
            let view = filtered_view(&store, search.as_deref(), party.as_deref());
            let view = query::sort_records(view, sort_by, direction);
            match output {
                Some(path) => {
                    let mut file = File::create(&path)?;
                    export::write_csv(&view, &mut file)?;
                    println!(
                        "✅ Exported {} rows: {}",
                        view.len().to_string().bright_green(),
                        path.display()
                    );
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    export::write_csv(&view, &mut handle)?;
                    handle.flush()?;
                }
            }
        }
        Command::CloseRaces {
            data_file,
            threshold,
        } => {
            let store = RecordStore::load(&data_file)?;
            report::print_close_races(&store, threshold);
        }
    }
    Ok(())
}

/// Apply the table view's text and party filters in order.
fn filtered_view<'a>(
    store: &'a RecordStore,
    search: Option<&str>,
    party: Option<&str>,
) -> Vec<&'a ConstituencyRecord> {
    let all: Vec<&ConstituencyRecord> = store.records().iter().collect();
    let view = query::filter_by_text(&all, search.unwrap_or(""));
    query::filter_by_party(&view, party)
}
