// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{
    Collection, PAGE_SIZE, RandomSource, Record, SortDirection, SortField, filter, paginate,
    pick_random, sort, total_pages,
};
use tracing::debug;

/// Everything that drives what is on screen. Only the [`Controller`] writes
/// it; `filtered_count` always matches `filter_text` against the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    filter_text: String,
    filtered_count: usize,
    sort_field: SortField,
    sort_direction: SortDirection,
    page: usize,
    selected_random: Option<Record>,
    definition_revealed: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            filtered_count: 0,
            sort_field: SortField::Name,
            sort_direction: SortDirection::Ascending,
            page: 1,
            selected_random: None,
            definition_revealed: false,
        }
    }
}

impl ViewState {
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_count
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub const fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count, PAGE_SIZE)
    }

    pub fn selected_random(&self) -> Option<&Record> {
        self.selected_random.as_ref()
    }

    pub fn definition_revealed(&self) -> bool {
        self.definition_revealed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetFilterText(String),
    SetSort(SortField),
    GoFirst,
    GoPrev,
    GoNext,
    GoLast,
    DrawRandom,
    RevealDefinition,
}

impl Intent {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SetFilterText(_) => "set_filter_text",
            Self::SetSort(_) => "set_sort",
            Self::GoFirst => "go_first",
            Self::GoPrev => "go_prev",
            Self::GoNext => "go_next",
            Self::GoLast => "go_last",
            Self::DrawRandom => "draw_random",
            Self::RevealDefinition => "reveal_definition",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    FilterChanged {
        filtered_count: usize,
    },
    SortChanged {
        field: SortField,
        direction: SortDirection,
    },
    PageChanged(usize),
    RandomDrawn(Record),
    DefinitionRevealed,
}

/// Records of the active page plus what the header needs to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub records: Vec<&'a Record>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl PageView<'_> {
    /// Direction arrow for `field`'s header, if it is the active sort column.
    pub fn header_indicator(&self, field: SortField) -> Option<SortDirection> {
        (field == self.sort_field).then_some(self.sort_direction)
    }

    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomTermView<'a> {
    pub selected: Option<&'a Record>,
    pub definition_revealed: bool,
}

impl<'a> RandomTermView<'a> {
    pub fn definition(&self) -> Option<&'a str> {
        if !self.definition_revealed {
            return None;
        }
        self.selected.map(|record| record.description.as_str())
    }
}

pub struct Controller<R> {
    collection: Collection,
    state: ViewState,
    source: R,
}

impl<R: RandomSource> Controller<R> {
    pub fn new(collection: Collection, source: R) -> Self {
        let state = ViewState {
            filtered_count: collection.len(),
            ..ViewState::default()
        };
        Self {
            collection,
            state,
            source,
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: Intent) -> Vec<ViewEvent> {
        let label = intent.label();
        let events = match intent {
            Intent::SetFilterText(query) => self.set_filter_text(query),
            Intent::SetSort(field) => self.set_sort(field),
            Intent::GoFirst => self.set_page(1),
            Intent::GoPrev => self.set_page(self.state.page.saturating_sub(1).max(1)),
            Intent::GoNext => {
                let next = (self.state.page + 1).min(self.state.total_pages());
                self.set_page(next)
            }
            Intent::GoLast => self.set_page(self.state.total_pages()),
            Intent::DrawRandom => {
                let picked = pick_random(&mut self.source, self.collection.records());
                self.state.selected_random = Some(picked.clone());
                self.state.definition_revealed = false;
                vec![ViewEvent::RandomDrawn(picked)]
            }
            Intent::RevealDefinition => {
                if self.state.definition_revealed {
                    Vec::new()
                } else {
                    self.state.definition_revealed = true;
                    vec![ViewEvent::DefinitionRevealed]
                }
            }
        };
        debug!(
            intent = label,
            page = self.state.page,
            filtered = self.state.filtered_count,
            events = events.len(),
            "dispatched intent"
        );
        events
    }

    /// Recomputed from state on every call.
    pub fn page_view(&self) -> PageView<'_> {
        let filtered = filter(&self.state.filter_text, self.collection.records());
        let ordered = sort(filtered, self.state.sort_field, self.state.sort_direction);
        let records = paginate(&ordered, self.state.page, PAGE_SIZE).to_vec();
        PageView {
            records,
            page: self.state.page,
            total_pages: self.state.total_pages(),
            filtered_count: self.state.filtered_count,
            sort_field: self.state.sort_field,
            sort_direction: self.state.sort_direction,
        }
    }

    pub fn random_view(&self) -> RandomTermView<'_> {
        RandomTermView {
            selected: self.state.selected_random.as_ref(),
            definition_revealed: self.state.definition_revealed,
        }
    }

    fn set_filter_text(&mut self, query: String) -> Vec<ViewEvent> {
        self.state.filtered_count = filter(&query, self.collection.records()).len();
        self.state.filter_text = query;
        let mut events = vec![ViewEvent::FilterChanged {
            filtered_count: self.state.filtered_count,
        }];
        events.extend(self.set_page(1));
        events
    }

    fn set_sort(&mut self, field: SortField) -> Vec<ViewEvent> {
        if field == self.state.sort_field {
            self.state.sort_direction = self.state.sort_direction.toggled();
        } else {
            self.state.sort_field = field;
        }
        let mut events = vec![ViewEvent::SortChanged {
            field: self.state.sort_field,
            direction: self.state.sort_direction,
        }];
        events.extend(self.set_page(1));
        events
    }

    fn set_page(&mut self, page: usize) -> Vec<ViewEvent> {
        if page == self.state.page {
            return Vec::new();
        }
        self.state.page = page;
        vec![ViewEvent::PageChanged(page)]
    }
}
