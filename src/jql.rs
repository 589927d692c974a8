//! Filter query construction.
//!
//! Builds the JQL expression selecting one engineer's issues within one
//! sprint. Construction is deterministic: identical inputs always yield a
//! byte-identical query.

use chrono::{Days, NaiveDate};

/// Status values considered finished. Issues in one of these states are
/// excluded unless they were updated on or after the recency cutoff.
pub const TERMINAL_STATUSES: [&str; 3] = ["Done", "Closed", "Released"];

/// Date literal format accepted by the tracker's query language.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Computes the recency cutoff: `today` minus the configured window.
///
/// A window of 0 days means the cutoff is today, so only issues updated
/// today or later (or not in a terminal state) match.
pub fn cutoff_date(today: NaiveDate, recent_days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(recent_days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Builds the issue filter for one engineer in one sprint.
///
/// Matches issues in `project_key`, assigned to `account_id`, in sprint
/// `sprint_id`, that are either not in a terminal state or were updated on
/// or after `cutoff`.
pub fn build_issue_filter(
    project_key: &str,
    sprint_id: u64,
    account_id: &str,
    cutoff: NaiveDate,
) -> String {
    let statuses = TERMINAL_STATUSES
        .iter()
        .map(|status| quote(status))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "project = {} AND sprint = {} AND assignee = {} AND (status NOT IN ({}) OR updated >= {})",
        quote(project_key),
        sprint_id,
        quote(account_id),
        statuses,
        quote(&cutoff.format(DATE_FORMAT).to_string()),
    )
}

/// Quotes a string value per JQL rules, backslash-escaping embedded quotes
/// and backslashes. Values never reach the query unquoted.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_build_is_deterministic() {
        let cutoff = date(2026, 7, 29);
        let first = build_issue_filter("PROJ", 7, "abc", cutoff);
        let second = build_issue_filter("PROJ", 7, "abc", cutoff);
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_full_expression() {
        let filter = build_issue_filter("PROJ", 7, "abc", date(2026, 7, 29));
        assert_eq!(
            filter,
            "project = \"PROJ\" AND sprint = 7 AND assignee = \"abc\" AND \
             (status NOT IN (\"Done\", \"Closed\", \"Released\") OR updated >= \"2026-07-29\")"
        );
    }

    #[test]
    fn test_quote_escapes_embedded_quotes() {
        let filter = build_issue_filter("PR\"OJ", 1, "a\\b", date(2026, 1, 1));
        assert!(filter.contains("project = \"PR\\\"OJ\""));
        assert!(filter.contains("assignee = \"a\\\\b\""));
    }

    #[test]
    fn test_cutoff_zero_days_is_today() {
        let today = date(2026, 8, 5);
        assert_eq!(cutoff_date(today, 0), today);
    }

    #[test]
    fn test_cutoff_n_days_exact() {
        let today = date(2026, 8, 5);
        assert_eq!(cutoff_date(today, 7), date(2026, 7, 29));
        // Month boundary
        assert_eq!(cutoff_date(date(2026, 3, 1), 1), date(2026, 2, 28));
    }
}
