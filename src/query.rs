//! Query/filter engine over the content store

use std::cmp::Ordering;

use chrono::{DateTime, Local};

use crate::content::{ContentStore, DocType, Document};

/// Sort key for `sort_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Order,
}

/// Sort direction for `sort_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Date(DateTime<Local>),
    Order(i64),
}

fn key_of(doc: &Document, key: SortKey) -> Option<SortValue> {
    match key {
        SortKey::Date => doc.date.map(SortValue::Date),
        SortKey::Order => doc.order.map(SortValue::Order),
    }
}

/// All documents of the given type, in store order. Callers sort.
pub fn filter_by_type<'a>(store: &'a ContentStore, doc_type: DocType) -> Vec<&'a Document> {
    store.all().filter(|d| d.doc_type == doc_type).collect()
}

/// Stable sort by the given key and direction.
///
/// Documents missing the key sort after all documents that have it, in
/// both directions; ties keep their input order.
pub fn sort_by(mut docs: Vec<&Document>, key: SortKey, direction: Direction) -> Vec<&Document> {
    docs.sort_by(|a, b| match (key_of(a, key), key_of(b, key)) {
        (Some(ka), Some(kb)) => match direction {
            Direction::Ascending => ka.cmp(&kb),
            Direction::Descending => kb.cmp(&ka),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    docs
}
