//! Generic ordered-list reconciliation.
//!
//! # Responsibility
//! - Provide the single add/update-field/delete-by-position implementation
//!   shared by the institution and course lists.
//!
//! # Invariants
//! - Operations are pure: inputs are never mutated, a fresh list is returned.
//! - Deleting an element shifts every later element down one position.

use crate::model::record::{EditError, RecordFields};

/// Appends `record` to the end of `list`, preserving prior order.
pub fn append<T: Clone>(list: &[T], record: T) -> Vec<T> {
    let mut next = list.to_vec();
    next.push(record);
    next
}

/// Returns a new list with exactly one field of the element at `index`
/// replaced; every other element and field is untouched.
pub fn update_field<T>(
    list: &[T],
    index: usize,
    field: &str,
    value: &str,
) -> Result<Vec<T>, EditError>
where
    T: Clone + RecordFields,
{
    if index >= list.len() {
        return Err(EditError::IndexOutOfRange {
            index,
            len: list.len(),
        });
    }

    let mut next = list.to_vec();
    next[index].set_field(field, value)?;
    Ok(next)
}

/// Returns a new list with the element at `index` removed.
///
/// Every element after `index` changes positional identity; callers must
/// re-derive indices from the next render of the list.
pub fn delete_at<T: Clone>(list: &[T], index: usize) -> Result<Vec<T>, EditError> {
    if index >= list.len() {
        return Err(EditError::IndexOutOfRange {
            index,
            len: list.len(),
        });
    }

    let mut next = list.to_vec();
    next.remove(index);
    Ok(next)
}
