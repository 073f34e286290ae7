//! Ordering of contest views.
//!
//! All orderings use a stable sort, so contests that compare equal keep the
//! order they had in the input.

use crate::models::contest::Contest;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    YearDesc,
    YearAsc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Every key, in the order the sort control lists them.
    pub const ALL: [SortKey; 4] = [
        SortKey::YearDesc,
        SortKey::YearAsc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    /// Returns `None` for anything outside the known set.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "year-desc" => Some(SortKey::YearDesc),
            "year-asc" => Some(SortKey::YearAsc),
            "name-asc" => Some(SortKey::NameAsc),
            "name-desc" => Some(SortKey::NameDesc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::YearDesc => "year-desc",
            SortKey::YearAsc => "year-asc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::YearDesc => "Newest First",
            SortKey::YearAsc => "Oldest First",
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
        }
    }

    pub fn compare(&self, a: &Contest, b: &Contest) -> Ordering {
        match self {
            SortKey::YearDesc => b
                .sort_year()
                .cmp(&a.sort_year())
                .then_with(|| compare_dates(b.date.as_deref(), a.date.as_deref())),
            SortKey::YearAsc => a
                .sort_year()
                .cmp(&b.sort_year())
                .then_with(|| compare_dates(a.date.as_deref(), b.date.as_deref())),
            SortKey::NameAsc => compare_names(&a.contest_name, &b.contest_name),
            SortKey::NameDesc => compare_names(&b.contest_name, &a.contest_name),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orders `"<MonthName> <Day>"` strings within one implied year.
///
/// Absent (or empty) dates sort after present ones. Unknown months count as
/// January and an unreadable day as the 1st.
pub fn compare_dates(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.filter(|d| !d.is_empty());
    let b = b.filter(|d| !d.is_empty());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => month_day(a).cmp(&month_day(b)),
    }
}

fn month_day(date: &str) -> (usize, i64) {
    let mut parts = date.split(' ');
    let month = parts
        .next()
        .and_then(|name| MONTHS.iter().position(|m| *m == name))
        .unwrap_or(0);
    let day = parts
        .next()
        .and_then(leading_int)
        .filter(|day| *day != 0)
        .unwrap_or(1);
    (month, day)
}

/// Reads the integer prefix of `token` (`"18th"` is 18).
fn leading_int(token: &str) -> Option<i64> {
    let token = token.trim_start();
    let (sign, digits) = match token.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, token.strip_prefix('+').unwrap_or(token)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Case-insensitive comparison first, raw text as the tie-break, so
/// `"acm"` and `"ACM"` sit together but still order deterministically.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable in-place sort. `None` leaves the slice untouched.
pub fn sort_contests(contests: &mut [Arc<Contest>], key: Option<SortKey>) {
    if let Some(key) = key {
        contests.sort_by(|a, b| key.compare(a, b));
    }
}

/// Sorts by a raw control value; unknown values keep the input order.
pub fn sorted_by_key_str(mut contests: Vec<Arc<Contest>>, raw_key: &str) -> Vec<Arc<Contest>> {
    sort_contests(&mut contests, SortKey::parse(raw_key));
    contests
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn names(view: &[Arc<Contest>]) -> Vec<&str> {
        view.iter().map(|c| c.contest_name.as_str()).collect()
    }

    #[test_case(None, None, Ordering::Equal ; "both absent")]
    #[test_case(None, Some("March 1"), Ordering::Greater ; "absent after present")]
    #[test_case(Some("March 1"), None, Ordering::Less ; "present before absent")]
    #[test_case(Some("January 5"), Some("January 10"), Ordering::Less ; "same month by day")]
    #[test_case(Some("February 1"), Some("January 1"), Ordering::Greater ; "month wins")]
    #[test_case(Some("December 31"), Some("December 31"), Ordering::Equal ; "identical")]
    #[test_case(Some("Smarch 9"), Some("January 9"), Ordering::Equal ; "unknown month is january")]
    #[test_case(Some("March"), Some("March 1"), Ordering::Equal ; "missing day is first")]
    #[test_case(Some("March 0"), Some("March 1"), Ordering::Equal ; "zero day is first")]
    #[test_case(Some("March 18th"), Some("March 18"), Ordering::Equal ; "day suffix ignored")]
    #[test_case(Some("april 2"), Some("February 3"), Ordering::Less ; "lookup is case sensitive")]
    #[test_case(Some(""), Some("May 1"), Ordering::Greater ; "empty is absent")]
    fn test_compare_dates(a: Option<&str>, b: Option<&str>, expected: Ordering) {
        assert_eq!(compare_dates(a, b), expected);
    }

    #[test]
    fn test_parse_round_trips_known_keys() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("bogus-key"), None);
        assert_eq!(SortKey::parse("YEAR-DESC"), None);
    }

    #[test]
    fn test_year_desc_breaks_ties_by_later_date() {
        let view = vec![
            Arc::new(Contest::new("ICPC Dhaka").with_year(2022).with_date("March 10")),
            Arc::new(Contest::new("IUPC").with_year(2022).with_date("February 5")),
        ];
        let view = sorted_by_key_str(view, "year-desc");
        assert_eq!(names(&view), vec!["ICPC Dhaka", "IUPC"]);
    }

    #[test]
    fn test_year_asc_breaks_ties_by_earlier_date() {
        let view = vec![
            Arc::new(Contest::new("ICPC Dhaka").with_year(2022).with_date("March 10")),
            Arc::new(Contest::new("IUPC").with_year(2022).with_date("February 5")),
            Arc::new(Contest::new("Old").with_year(2019)),
        ];
        let view = sorted_by_key_str(view, "year-asc");
        assert_eq!(names(&view), vec!["Old", "IUPC", "ICPC Dhaka"]);
    }

    #[test]
    fn test_missing_year_counts_as_zero() {
        let view = vec![
            Arc::new(Contest::new("Undated")),
            Arc::new(Contest::new("Recent").with_year(2023)),
        ];
        assert_eq!(names(&sorted_by_key_str(view.clone(), "year-desc")), vec!["Recent", "Undated"]);
        assert_eq!(names(&sorted_by_key_str(view, "year-asc")), vec!["Undated", "Recent"]);
    }

    #[test]
    fn test_name_orders_ignore_case() {
        let view = vec![
            Arc::new(Contest::new("beta")),
            Arc::new(Contest::new("Alpha")),
            Arc::new(Contest::new("Gamma")),
        ];
        assert_eq!(
            names(&sorted_by_key_str(view.clone(), "name-asc")),
            vec!["Alpha", "beta", "Gamma"]
        );
        assert_eq!(
            names(&sorted_by_key_str(view, "name-desc")),
            vec!["Gamma", "beta", "Alpha"]
        );
    }

    #[test]
    fn test_unknown_key_is_identity() {
        let view = vec![
            Arc::new(Contest::new("Z").with_year(1)),
            Arc::new(Contest::new("A").with_year(9)),
        ];
        let sorted = sorted_by_key_str(view.clone(), "bogus-key");
        assert!(sorted.iter().zip(&view).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("18"), Some(18));
        assert_eq!(leading_int("7,"), Some(7));
        assert_eq!(leading_int("-3"), Some(-3));
        assert_eq!(leading_int("x1"), None);
        assert_eq!(leading_int(""), None);
    }
}
