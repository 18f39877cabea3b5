// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use glossa_app::{
    ChaChaSource, Collection, Controller, Intent, PAGE_SIZE, Record, SortDirection, SortField,
    ViewEvent, filter, paginate, pick_random, sort, total_pages,
};

fn hundred_terms() -> Collection {
    (0..100)
        .map(|index| {
            Record::new(
                format!("Term {:03}", (index * 37) % 100),
                format!("definition {index}"),
            )
        })
        .collect()
}

#[test]
fn hundred_records_browse_end_to_end() {
    let mut controller = Controller::new(hundred_terms(), ChaChaSource::seeded(2026));

    let first = controller.page_view();
    assert_eq!(first.total_pages, 7);
    assert_eq!(first.records.len(), PAGE_SIZE);
    assert_eq!(first.records[0].name, "Term 000");
    assert_eq!(first.records[14].name, "Term 014");

    controller.dispatch(Intent::GoLast);
    let last = controller.page_view();
    assert_eq!(last.page, 7);
    assert_eq!(last.records.len(), 10);
    assert_eq!(last.records[9].name, "Term 099");

    let events = controller.dispatch(Intent::SetFilterText("zzz-no-match".to_owned()));
    assert_eq!(
        events,
        vec![
            ViewEvent::FilterChanged { filtered_count: 0 },
            ViewEvent::PageChanged(1),
        ]
    );
    let empty = controller.page_view();
    assert_eq!(empty.filtered_count, 0);
    assert_eq!(empty.total_pages, 1);
    assert_eq!(empty.page, 1);
    assert!(empty.records.is_empty());
}

#[test]
fn next_at_last_page_and_prev_at_first_are_no_ops() {
    let mut controller = Controller::new(hundred_terms(), ChaChaSource::seeded(1));
    assert!(controller.dispatch(Intent::GoPrev).is_empty());

    controller.dispatch(Intent::GoLast);
    assert!(controller.dispatch(Intent::GoNext).is_empty());
    assert_eq!(controller.state().page(), 7);
}

#[test]
fn walking_forward_visits_every_record_once() {
    let mut controller = Controller::new(hundred_terms(), ChaChaSource::seeded(1));
    let mut seen = Vec::new();
    loop {
        let view = controller.page_view();
        seen.extend(view.records.iter().map(|record| record.name.clone()));
        if controller.dispatch(Intent::GoNext).is_empty() {
            break;
        }
    }
    assert_eq!(seen.len(), 100);
    let mut expected = seen.clone();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn descending_view_is_reverse_of_ascending_across_pages() {
    let collection: Collection = [
        ("beta", "2"),
        ("Alpha", "1"),
        ("beta", "3"),
        ("gamma", "0"),
        ("alpha", "4"),
    ]
    .into_iter()
    .map(|(name, description)| Record::new(name, description))
    .collect();

    for field in SortField::ALL {
        let ascending = sort(
            filter("", collection.records()),
            field,
            SortDirection::Ascending,
        );
        let descending = sort(
            filter("", collection.records()),
            field,
            SortDirection::Descending,
        );
        let reversed = ascending.into_iter().rev().collect::<Vec<_>>();
        assert_eq!(reversed, descending, "field {}", field.label());
    }
}

#[test]
fn filter_then_paginate_matches_manual_slice() {
    let collection = hundred_terms();
    let filtered = filter("term 01", collection.records());
    assert_eq!(filtered.len(), 10);
    assert_eq!(total_pages(filtered.len(), PAGE_SIZE), 1);
    assert_eq!(paginate(&filtered, 1, PAGE_SIZE).len(), 10);
    assert!(paginate(&filtered, 2, PAGE_SIZE).is_empty());
}

#[test]
fn random_pick_handles_empty_and_singleton() {
    let mut source = ChaChaSource::seeded(8);
    assert_eq!(pick_random(&mut source, &[]), Record::placeholder());

    let only = [Record::new("Pin", "fixed location")];
    assert_eq!(pick_random(&mut source, &only), only[0]);
}
