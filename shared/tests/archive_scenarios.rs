//! End-to-end checks from raw archive JSON through search and sort.

use archive_shared::{
    compare_dates, filter_contests, sorted_by_key_str, ArchiveSession, Dataset, ViewState,
};
use pretty_assertions::assert_eq;
use std::cmp::Ordering;
use std::sync::Arc;
use test_log::test;

const ARCHIVE: &str = r#"[
    {
        "contestName": "ICPC Dhaka Regional",
        "contestType": "ICPC",
        "year": 2022,
        "date": "March 10",
        "totalTeams": 150,
        "contestLink": "https://icpc.global/regionals/dhaka",
        "teams": [
            {
                "teamName": "UIU_Blitz",
                "teamCoach": "John Coach",
                "teamMembers": ["Rafi Hasan", "", "Nadia Islam"],
                "position": 12
            }
        ]
    },
    {
        "contestName": "IUPC Spring",
        "contestType": "IUPC",
        "year": 2022,
        "date": "February 5",
        "teams": [{"teamName": "Null Pointers", "teamMembers": ["Sadia Karim", null]}]
    },
    {
        "contestName": null,
        "year": 2022,
        "teams": [{"teamName": "Ghost Team"}]
    },
    {
        "contestName": "NCPC",
        "contestType": "National",
        "year": 2021,
        "unknownField": {"nested": true}
    }
]"#;

fn dataset() -> Dataset {
    Dataset::from_json_str(ARCHIVE).expect("archive parses")
}

fn names(view: &[Arc<archive_shared::Contest>]) -> Vec<&str> {
    view.iter().map(|c| c.contest_name.as_str()).collect()
}

#[test]
fn year_desc_tie_break_uses_later_date_first() {
    let view = sorted_by_key_str(dataset().contests().to_vec(), "year-desc");
    assert_eq!(names(&view), vec!["ICPC Dhaka Regional", "IUPC Spring", "NCPC"]);
}

#[test]
fn coach_only_match_includes_contest() {
    let view = filter_contests(dataset().contests(), "coach");
    assert_eq!(names(&view), vec!["ICPC Dhaka Regional"]);
}

#[test]
fn nameless_record_never_surfaces() {
    let dataset = dataset();
    assert_eq!(dataset.len(), 3);
    for query in ["", "ghost", "2022"] {
        for key in ["year-desc", "year-asc", "name-asc", "name-desc"] {
            let view = sorted_by_key_str(filter_contests(dataset.contests(), query), key);
            assert!(view.iter().all(|c| !c.contest_name.is_empty()));
            assert!(!names(&view).contains(&"Ghost Team"));
        }
    }
    assert!(filter_contests(dataset.contests(), "ghost").is_empty());
}

#[test]
fn bogus_sort_key_keeps_order() {
    let dataset = dataset();
    let view = sorted_by_key_str(dataset.contests().to_vec(), "bogus-key");
    assert_eq!(names(&view), names(dataset.contests()));
}

#[test]
fn year_query_matches_without_text_occurrence() {
    let view = filter_contests(dataset().contests(), "2022");
    assert_eq!(names(&view), vec!["ICPC Dhaka Regional", "IUPC Spring"]);
}

#[test]
fn member_match_is_case_insensitive() {
    let view = filter_contests(dataset().contests(), "SADIA");
    assert_eq!(names(&view), vec!["IUPC Spring"]);
}

#[test]
fn date_comparator_contract() {
    assert_eq!(compare_dates(None, None), Ordering::Equal);
    assert_eq!(compare_dates(None, Some("March 1")), Ordering::Greater);
    assert_eq!(compare_dates(Some("January 5"), Some("January 10")), Ordering::Less);
    assert_eq!(compare_dates(Some("February 1"), Some("January 1")), Ordering::Greater);
}

#[test]
fn session_walkthrough() {
    let mut session = ArchiveSession::from_load_result(Dataset::from_json_str(ARCHIVE));
    assert_eq!(session.view_state(), ViewState::Ready(3));

    session.set_sort("name-asc");
    assert_eq!(names(session.view()), vec!["ICPC Dhaka Regional", "IUPC Spring", "NCPC"]);

    session.set_query("iupc");
    assert_eq!(names(session.view()), vec!["IUPC Spring"]);
    assert_eq!(session.count(), 1);

    session.set_query("zzz");
    assert_eq!(session.view_state(), ViewState::NoResults);

    session.set_query("");
    assert_eq!(session.count(), 3);
    assert!(session
        .view()
        .iter()
        .all(|c| session.dataset().iter().any(|d| Arc::ptr_eq(c, d))));
}

#[test]
fn malformed_document_fails_session() {
    let session = ArchiveSession::from_load_result(Dataset::from_json_str("not json"));
    assert!(matches!(session.view_state(), ViewState::Failed(_)));
    assert_eq!(session.count(), 0);
}
