//! Value object trait: equality by value, not identity.
//!
//! Ledger records have no server-assigned identity; a record is addressed by
//! its position in a local list and compared by its field values. Amounts and
//! the records themselves are therefore value objects.

/// Marker trait for value objects.
///
/// Value objects are **compared by value** and cheap to clone. To "modify" one,
/// build a new value; the ledger's edit operations replace records rather than
/// mutating them in place.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Amount(String);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount("100".into()), Amount("100".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
