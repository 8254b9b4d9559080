//! Plain-text rendering of directory state.
//!
//! Formatting only. Every function takes already-computed state and returns
//! a `String`; nothing here decides what matches.

use std::fmt::Write as _;

use crate::person::Person;
use crate::results::{DirectoryStats, SearchResults};

pub const LOADING: &str = "Loading experts...";

const HEADINGS: [&str; 3] = ["Name", "Affiliation", "Keywords"];

/// One line of summary counts.
pub fn stats(stats: &DirectoryStats) -> String {
    format!(
        "Experts: {}  Areas of expertise: {}  Affiliations: {}",
        stats.expert_count, stats.expertise_count, stats.affiliation_count
    )
}

/// The advisory banner shown when sample data is in use.
pub fn notice(message: &str) -> String {
    format!("Notice: {message}")
}

/// What to show for a search: nothing for an unperformed search, a
/// no-results line for an empty hit, otherwise the results table.
pub fn results(results: &SearchResults) -> String {
    if results.is_empty_hit() {
        return format!("No results found for \"{}\"\n", results.query);
    }
    if !results.performed {
        return String::new();
    }
    table(&results.matches)
}

/// A fixed-width table of name, affiliation and keyword badges.
pub fn table(people: &[Person]) -> String {
    let rows: Vec<[String; 3]> = people
        .iter()
        .map(|p| [p.name.clone(), p.affiliation.clone(), badges(p)])
        .collect();

    let mut widths = HEADINGS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADINGS, &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

/// Keywords as `[badge]` tokens, empty ones dropped.
pub fn badges(person: &Person) -> String {
    person
        .keywords()
        .map(|k| format!("[{k}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 3], widths: &[usize; 3]) {
    let [a, b, c] = cells;
    // Last column is not padded.
    let _ = writeln!(
        out,
        "{:<wa$}  {:<wb$}  {}",
        a.as_ref(),
        b.as_ref(),
        c.as_ref(),
        wa = widths[0],
        wb = widths[1],
    );
}
