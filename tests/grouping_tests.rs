mod common;
use chrono::{TimeZone, Utc};
use common::{d, holiday, walk};
use walkcal::core::{
    HolidayLookup, TieBreak, find_holiday_for_date, group_walks_by_date, is_group_walk,
    upcoming_walks, walks_for_walker,
};
use walkcal::models::{HolidayStatus, TimeSlot, WalkStatus};

#[test]
fn test_group_by_date_keeps_input_order() {
    let walks = vec![
        walk("late", "2024-06-20", "16:00", TimeSlot::Pm),
        walk("other", "2024-06-21", "09:00", TimeSlot::Am),
        walk("early", "2024-06-20", "07:00", TimeSlot::Am),
    ];

    let grouped = group_walks_by_date(&walks);

    assert_eq!(grouped.len(), 2);
    let ids: Vec<&str> = grouped["2024-06-20"].iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["late", "early"]);
    assert_eq!(grouped["2024-06-21"].len(), 1);
}

#[test]
fn test_group_by_date_empty_input() {
    assert!(group_walks_by_date(&[]).is_empty());
}

#[test]
fn test_group_by_date_idempotent_and_non_mutating() {
    let walks = vec![
        walk("w1", "2024-06-20", "10:00", TimeSlot::Am),
        walk("w2", "2024-06-22", "11:00", TimeSlot::Am),
    ];
    let before = walks.clone();

    let a = group_walks_by_date(&walks);
    let b = group_walks_by_date(&walks);

    assert_eq!(a, b);
    assert_eq!(walks, before);
}

#[test]
fn test_two_walks_same_slot_are_group_walks() {
    let w1 = walk("w1", "2024-06-20", "10:00", TimeSlot::Am);
    let w2 = walk("w2", "2024-06-20", "10:00", TimeSlot::Am);
    let cohort = vec![w1.clone(), w2.clone()];

    assert!(is_group_walk(&w1, &cohort));
    assert!(is_group_walk(&w2, &cohort));
}

#[test]
fn test_lone_walk_is_never_group_walk() {
    let w1 = walk("w1", "2024-06-20", "10:00", TimeSlot::Am);
    assert!(!is_group_walk(&w1, std::slice::from_ref(&w1)));
    assert!(!is_group_walk(&w1, &[]));
}

#[test]
fn test_group_walk_requires_exact_match() {
    let base = walk("w1", "2024-06-20", "10:00", TimeSlot::Am);
    let overlapping = walk("w2", "2024-06-20", "10:15", TimeSlot::Am);
    let other_slot = walk("w3", "2024-06-20", "10:00", TimeSlot::Pm);
    let other_day = walk("w4", "2024-06-21", "10:00", TimeSlot::Am);
    let cohort = vec![base.clone(), overlapping, other_slot, other_day];

    assert!(!is_group_walk(&base, &cohort));
}

#[test]
fn test_group_walk_symmetry() {
    let cohort = vec![
        walk("a", "2024-06-20", "10:00", TimeSlot::Am),
        walk("b", "2024-06-20", "12:00", TimeSlot::Pm),
        walk("c", "2024-06-20", "10:00", TimeSlot::Am),
        walk("d", "2024-06-20", "12:00", TimeSlot::Am),
        walk("e", "2024-06-20", "18:00", TimeSlot::Pm),
    ];

    for a in &cohort {
        if is_group_walk(a, &cohort) {
            let partner = cohort.iter().find(|b| {
                b.id != a.id
                    && is_group_walk(b, &cohort)
                    && a.start_time == b.start_time
                    && a.time_slot == b.time_slot
                    && a.date == b.date
            });
            assert!(partner.is_some(), "no partner for {}", a.id);
        }
    }

    let grouped: Vec<&str> = cohort
        .iter()
        .filter(|w| is_group_walk(w, &cohort))
        .map(|w| w.id.as_str())
        .collect();
    assert_eq!(grouped, vec!["a", "c"]);
}

#[test]
fn test_find_holiday_first_match_wins() {
    let holidays = vec![
        holiday("h1", "2024-06-19", HolidayStatus::Approved),
        holiday("h2", "2024-06-20", HolidayStatus::Pending),
        holiday("h3", "2024-06-20", HolidayStatus::Denied),
    ];

    assert_eq!(
        find_holiday_for_date("2024-06-20", &holidays).map(|h| h.id.as_str()),
        Some("h2")
    );
    assert!(find_holiday_for_date("2024-06-21", &holidays).is_none());
    assert_eq!(
        HolidayLookup::new(&holidays).find("2024-06-20").map(|h| h.id.as_str()),
        Some("h2")
    );
}

#[test]
fn test_holiday_lookup_latest_tie_break() {
    let mut older = holiday("h1", "2024-06-20", HolidayStatus::Pending);
    older.updated_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
    let mut newer = holiday("h2", "2024-06-20", HolidayStatus::Approved);
    newer.updated_at = Some(Utc.with_ymd_and_hms(2024, 5, 3, 9, 0, 0).unwrap());
    let undated = holiday("h3", "2024-06-20", HolidayStatus::Denied);

    let holidays = vec![older, undated, newer];
    let lookup = HolidayLookup::new(&holidays).with_tie_break(TieBreak::Latest);

    assert_eq!(lookup.find("2024-06-20").map(|h| h.id.as_str()), Some("h2"));
}

#[test]
fn test_holiday_lookup_latest_falls_back_to_input_order() {
    let holidays = vec![
        holiday("h1", "2024-06-20", HolidayStatus::Pending),
        holiday("h2", "2024-06-20", HolidayStatus::Approved),
    ];
    let lookup = HolidayLookup::new(&holidays).with_tie_break(TieBreak::Latest);

    assert_eq!(lookup.find("2024-06-20").map(|h| h.id.as_str()), Some("h1"));
}

#[test]
fn test_upcoming_walks_filter() {
    let mut past = walk("past", "2024-05-31", "10:00", TimeSlot::Am);
    past.status = WalkStatus::Scheduled;
    let today = walk("today", "2024-06-01", "10:00", TimeSlot::Am);
    let mut done = walk("done", "2024-06-05", "10:00", TimeSlot::Am);
    done.status = WalkStatus::Completed;
    let mut cancelled = walk("cancelled", "2024-06-06", "10:00", TimeSlot::Am);
    cancelled.status = WalkStatus::Cancelled;
    let mut other_walker = walk("other", "2024-06-07", "10:00", TimeSlot::Am);
    other_walker.walker_id = "walker2".to_string();
    let future = walk("future", "2024-06-08", "10:00", TimeSlot::Am);

    let walks = vec![past, today, done, cancelled, other_walker, future];

    let ids = |v: Vec<walkcal::models::WalkRecord>| -> Vec<String> {
        v.into_iter().map(|w| w.id).collect()
    };

    assert_eq!(
        ids(upcoming_walks(&walks, Some("walker1"), d("2024-06-01"))),
        vec!["today", "future"]
    );
    assert_eq!(
        ids(upcoming_walks(&walks, None, d("2024-06-01"))),
        vec!["today", "other", "future"]
    );
    assert_eq!(walks_for_walker(&walks, Some("walker2")).len(), 1);
    assert_eq!(walks_for_walker(&walks, None).len(), 6);
}
