//! Tabular CSV export of the currently filtered/sorted view: one row per
//! visible record, every field double-quoted, newline-terminated, UTF-8.

use crate::model::ConstituencyRecord;
use std::io::{self, Write};

const HEADER: &[&str] = &[
    "AC No",
    "Constituency",
    "Winner",
    "Party",
    "Votes",
    "Margin",
    "Polling %",
];

pub fn write_csv<W: Write>(records: &[&ConstituencyRecord], out: &mut W) -> io::Result<()> {
    write_row(out, HEADER)?;
    for record in records {
        let fields = [
            record.ac_no.to_string(),
            record.constituency_name.clone(),
            record.winner.name.clone(),
            record.winner.party.clone(),
            record.winner.votes_secured.to_string(),
            record.winning_margin.to_string(),
            record.polling_percentage.clone(),
        ];
        let fields: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
        write_row(out, &fields)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, fields: &[&str]) -> io::Result<()> {
    let quoted: Vec<String> = fields
        .iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect();
    writeln!(out, "{}", quoted.join(","))
}
