//! Report formatter — fixed-width bordered summary of a snapshot.
//!
//! DESIGN
//! ======
//! Every line between the borders is exactly `INNER_WIDTH` characters so the
//! right border lines up. Fields are fitted to fixed columns first (truncated
//! when too long, space-padded when short), then the whole line is fitted to
//! the inner width. Formatting is pure and cannot fail.

use crate::state::Snapshot;

pub const INNER_WIDTH: usize = 59;
const TITLE: &str = "GLOBAL TEAM MINT WIDGET";
const SECTION_ZONES: &str = "GLOBAL TIME ZONES";

const VALUE_WIDTH: usize = 40;
const CITY_WIDTH: usize = 15;
const TIME_WIDTH: usize = 10;
const OFFSET_WIDTH: usize = 20;

/// Render the selected date/time and every zone card as a bordered block.
///
/// Lines are joined with `\n`; there is no trailing newline.
#[must_use]
pub fn format_report(snapshot: &Snapshot) -> String {
    let mut lines = Vec::with_capacity(12 + snapshot.zones.len());

    lines.push(border('╔', '╗'));
    lines.push(row(&format!("{TITLE:^INNER_WIDTH$}")));
    lines.push(border('╠', '╣'));
    lines.push(row(""));
    lines.push(row(&format!("  Selected Date: {}", fit(&snapshot.selected_date, VALUE_WIDTH))));
    lines.push(row(&format!("  Selected Time: {}", fit(&snapshot.selected_time, VALUE_WIDTH))));
    lines.push(row(""));
    lines.push(border('╠', '╣'));
    lines.push(row(&format!("  {SECTION_ZONES}")));
    lines.push(border('╠', '╣'));
    for zone in &snapshot.zones {
        lines.push(row(&format!(
            "  {} {} {}",
            fit(&zone.city, CITY_WIDTH),
            fit(&zone.time, TIME_WIDTH),
            fit(&zone.offset, OFFSET_WIDTH)
        )));
    }
    lines.push(border('╚', '╝'));

    lines.join("\n")
}

fn border(left: char, right: char) -> String {
    let mut line = String::with_capacity((INNER_WIDTH + 2) * '═'.len_utf8());
    line.push(left);
    line.extend(std::iter::repeat_n('═', INNER_WIDTH));
    line.push(right);
    line
}

fn row(content: &str) -> String {
    format!("║{}║", fit(content, INNER_WIDTH))
}

/// Truncate or right-pad `value` to exactly `width` characters.
fn fit(value: &str, width: usize) -> String {
    let truncated: String = value.chars().take(width).collect();
    format!("{truncated:<width$}")
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
