// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::slice;

const PLACEHOLDER_TEXT: &str = "-";

/// A single glossary entry. Records have no identity beyond their contents,
/// so two entries with the same name stay distinct rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub description: String,
}

impl Record {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The `{"-", "-"}` entry shown when there is nothing to draw from.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_TEXT, PLACEHOLDER_TEXT)
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_TEXT && self.description == PLACEHOLDER_TEXT
    }
}

/// The full term list, loaded once and read-only afterwards. Insertion order
/// is the base order whenever no sort applies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn builtin() -> Self {
        crate::seed::builtin_collection()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for Collection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    Name,
    Description,
}

impl SortField {
    pub const ALL: [Self; 2] = [Self::Name, Self::Description];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            _ => None,
        }
    }

    pub fn value(self, record: &Record) -> &str {
        match self {
            Self::Name => &record.name,
            Self::Description => &record.description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}
