//! Contiguous grouping
//!
//! Splits an already ordered sequence of records into maximal runs whose
//! selected attribute is equal. Grouping is positional: two runs with the same
//! value separated by a different value stay two groups. The groups borrow
//! sub-slices of the input, no record is copied or moved.

mod error;
mod field;

#[cfg(test)]
mod tests;

pub use error::{GroupError, group_error_hint};
pub use field::{FieldValue, GroupField, GroupSelector};

use crate::record::LogRecord;

/// One maximal run of consecutive records sharing a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    pub field: GroupField,
    pub value: FieldValue<'a>,
    pub records: &'a [LogRecord],
}

impl Group<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false, runs are never empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Single left-to-right scan comparing each record with its predecessor.
pub fn group_runs<'a>(records: &'a [LogRecord], selector: GroupSelector) -> Vec<Group<'a>> {
    let field = selector.field();
    let mut groups = Vec::new();

    let Some(first) = records.first() else {
        return groups;
    };

    let mut start = 0;
    let mut current = field.value_of(first);

    for (index, record) in records.iter().enumerate().skip(1) {
        let value = field.value_of(record);
        if value != current {
            groups.push(Group {
                field,
                value: current,
                records: &records[start..index],
            });
            start = index;
            current = value;
        }
    }

    groups.push(Group {
        field,
        value: current,
        records: &records[start..],
    });

    groups
}
