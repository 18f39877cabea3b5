// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use glossa_app::{Controller, Intent, PageView, RandomSource, RandomTermView, SortField};

/// Browse settings for `--list`, replayed as intents so clamping matches the
/// interactive browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOptions {
    pub filter: Option<String>,
    pub sorts: Vec<SortField>,
    pub page: Option<usize>,
}

pub fn apply_list_options<R: RandomSource>(controller: &mut Controller<R>, options: &ListOptions) {
    if let Some(filter) = &options.filter {
        controller.dispatch(Intent::SetFilterText(filter.clone()));
    }
    for field in &options.sorts {
        controller.dispatch(Intent::SetSort(*field));
    }
    let target = options.page.unwrap_or(1);
    while controller.state().page() < target {
        if controller.dispatch(Intent::GoNext).is_empty() {
            break;
        }
    }
}

pub fn render_page(page: &PageView<'_>) -> String {
    let headers = SortField::ALL.map(|field| match page.header_indicator(field) {
        Some(direction) => format!("{} {}", field.label(), direction.indicator()),
        None => field.label().to_owned(),
    });
    let name_width = page
        .records
        .iter()
        .map(|record| record.name.chars().count())
        .chain([headers[0].chars().count()])
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!("{:<name_width$}  {}", headers[0], headers[1])];
    if page.records.is_empty() {
        lines.push("(no terms)".to_owned());
    }
    for record in &page.records {
        lines.push(format!(
            "{:<name_width$}  {}",
            record.name, record.description
        ));
    }
    lines.push(format!(
        "page {}/{} ({} {})",
        page.page,
        page.total_pages,
        page.filtered_count,
        if page.filtered_count == 1 {
            "term"
        } else {
            "terms"
        }
    ));
    lines.join("\n")
}

pub fn render_random(view: &RandomTermView<'_>) -> String {
    match view.selected {
        Some(record) if record.is_placeholder() => "(glossary is empty)".to_owned(),
        Some(record) => format!(
            "{}\n  {}",
            record.name,
            view.definition().unwrap_or("(hidden)")
        ),
        None => "(no term drawn)".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{ListOptions, apply_list_options, render_page, render_random};
    use glossa_app::{Controller, Intent, SortField};
    use glossa_testkit::{ScriptedSource, numbered_collection};

    fn controller(count: usize) -> Controller<ScriptedSource> {
        Controller::new(numbered_collection(count), ScriptedSource::new([7]))
    }

    #[test]
    fn list_options_replay_as_intents() {
        let mut controller = controller(100);
        apply_list_options(
            &mut controller,
            &ListOptions {
                filter: Some("TERM 0".to_owned()),
                sorts: vec![SortField::Name],
                page: Some(3),
            },
        );
        let page = controller.page_view();
        assert_eq!(page.filtered_count, 100);
        assert_eq!(page.page, 3);
        assert_eq!(page.records[0].name, "term 069");
    }

    #[test]
    fn page_past_end_clamps_to_last_page() {
        let mut controller = controller(20);
        apply_list_options(
            &mut controller,
            &ListOptions {
                page: Some(50),
                ..ListOptions::default()
            },
        );
        assert_eq!(controller.state().page(), 2);
    }

    #[test]
    fn render_page_aligns_columns_and_reports_position() {
        let controller = controller(2);
        let text = render_page(&controller.page_view());
        assert_eq!(
            text,
            "name ▲    description\nterm 000  definition 000\nterm 001  definition 001\npage 1/1 (2 terms)"
        );
    }

    #[test]
    fn render_page_marks_empty_results() {
        let mut controller = controller(5);
        controller.dispatch(Intent::SetFilterText("zzz-no-match".to_owned()));
        let text = render_page(&controller.page_view());
        assert!(text.contains("(no terms)"));
        assert!(text.ends_with("page 1/1 (0 terms)"));
    }

    #[test]
    fn render_random_respects_reveal_flag() {
        let mut controller = controller(10);
        assert_eq!(render_random(&controller.random_view()), "(no term drawn)");

        controller.dispatch(Intent::DrawRandom);
        assert_eq!(
            render_random(&controller.random_view()),
            "term 007\n  (hidden)"
        );

        controller.dispatch(Intent::RevealDefinition);
        assert_eq!(
            render_random(&controller.random_view()),
            "term 007\n  definition 007"
        );
    }

    #[test]
    fn render_random_reports_empty_glossary() {
        let mut controller = controller(0);
        controller.dispatch(Intent::DrawRandom);
        controller.dispatch(Intent::RevealDefinition);
        assert_eq!(render_random(&controller.random_view()), "(glossary is empty)");
    }
}
