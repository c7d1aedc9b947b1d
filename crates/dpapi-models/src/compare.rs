//! Structural equality and difference reporting for models.
//!
//! Every model implements [`Comparable`] (field-level equality) and
//! [`Diffable`] (field name to [`Change`] map). Implementations are stamped
//! out by [`comparable!`](crate::comparable) for structs and
//! [`leaf_comparable!`](crate::leaf_comparable) for scalars and enums.
//!
//! Comparison rules:
//! - leaves (numbers, strings, enums, free-form maps) compare by value;
//! - `Option<T>`: `None` equals `None`; `Some` compares the inner values;
//!   `None` against `Some(v)` is equal only when `v` is a struct equal to its
//!   `Default` and [`CompareOptions::nil_same_as_empty`] is set;
//! - `Vec<T>`: equal length and element-wise equality. Object slices of
//!   the same length are reported under the field name as a nested diff
//!   keyed by element index; anything else is one entry for the whole field.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Comparison settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Treat an absent nested struct as equal to a present zero-valued one.
    pub nil_same_as_empty: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            nil_same_as_empty: true,
        }
    }
}

impl CompareOptions {
    /// Absent and present values always differ.
    pub fn strict() -> Self {
        Self {
            nil_same_as_empty: false,
        }
    }
}

/// Differences keyed by wire field name, ordered for stable output.
pub type Diff = BTreeMap<String, Change>;

/// A single reported difference.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// The `[old, new]` pair of a differing leaf, `null` for absent values.
    Values { old: Value, new: Value },
    /// The differences inside a nested struct.
    Nested(Diff),
}

impl Change {
    pub fn values<T: Serialize + ?Sized>(old: &T, new: &T) -> Self {
        Change::Values {
            old: to_json(old),
            new: to_json(new),
        }
    }

    pub fn as_values(&self) -> Option<(&Value, &Value)> {
        match self {
            Change::Values { old, new } => Some((old, new)),
            Change::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&Diff> {
        match self {
            Change::Nested(diff) => Some(diff),
            Change::Values { .. } => None,
        }
    }
}

impl Serialize for Change {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Change::Values { old, new } => (old, new).serialize(serializer),
            Change::Nested(diff) => diff.serialize(serializer),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    // Models only hold JSON-representable data; Null is unreachable in practice.
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Field-level structural comparison.
pub trait Comparable {
    /// Leaves are reported as a whole, never element by element.
    const LEAF: bool = false;

    fn equal_with(&self, other: &Self, opts: &CompareOptions) -> bool;

    /// Records how `self` differs from `other` under `name` in `out`.
    fn diff_into(&self, other: &Self, opts: &CompareOptions, name: &str, out: &mut Diff);

    /// Whether the value counts as "empty" when compared against an absent one.
    fn is_empty_value(&self, opts: &CompareOptions) -> bool;

    fn equal(&self, other: &Self) -> bool {
        self.equal_with(other, &CompareOptions::default())
    }
}

/// Struct-level difference report.
pub trait Diffable: Comparable {
    fn diff_with(&self, other: &Self, opts: &CompareOptions) -> Diff;

    fn diff(&self, other: &Self) -> Diff {
        self.diff_with(other, &CompareOptions::default())
    }
}

impl<T: Comparable + Serialize> Comparable for Option<T> {
    const LEAF: bool = T::LEAF;

    fn equal_with(&self, other: &Self, opts: &CompareOptions) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.equal_with(b, opts),
            (None, Some(v)) | (Some(v), None) => opts.nil_same_as_empty && v.is_empty_value(opts),
        }
    }

    fn diff_into(&self, other: &Self, opts: &CompareOptions, name: &str, out: &mut Diff) {
        match (self, other) {
            (Some(a), Some(b)) => a.diff_into(b, opts, name, out),
            _ if self.equal_with(other, opts) => {}
            _ => {
                out.insert(name.to_string(), Change::values(self, other));
            }
        }
    }

    fn is_empty_value(&self, opts: &CompareOptions) -> bool {
        match self {
            None => true,
            Some(v) => v.is_empty_value(opts),
        }
    }
}

impl<T: Comparable + Serialize> Comparable for Vec<T> {
    fn equal_with(&self, other: &Self, opts: &CompareOptions) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.equal_with(b, opts))
    }

    fn diff_into(&self, other: &Self, opts: &CompareOptions, name: &str, out: &mut Diff) {
        if T::LEAF || self.len() != other.len() {
            if !self.equal_with(other, opts) {
                out.insert(name.to_string(), Change::values(self, other));
            }
            return;
        }
        let mut items = Diff::new();
        for (i, (a, b)) in self.iter().zip(other.iter()).enumerate() {
            a.diff_into(b, opts, &i.to_string(), &mut items);
        }
        if !items.is_empty() {
            out.insert(name.to_string(), Change::Nested(items));
        }
    }

    fn is_empty_value(&self, _opts: &CompareOptions) -> bool {
        self.is_empty()
    }
}

/// Implements [`Comparable`] for types compared by value.
#[macro_export]
macro_rules! leaf_comparable {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::compare::Comparable for $t {
                const LEAF: bool = true;

                fn equal_with(&self, other: &Self, _opts: &$crate::compare::CompareOptions) -> bool {
                    self == other
                }

                fn diff_into(
                    &self,
                    other: &Self,
                    _opts: &$crate::compare::CompareOptions,
                    name: &str,
                    out: &mut $crate::compare::Diff,
                ) {
                    if self != other {
                        out.insert(name.to_string(), $crate::compare::Change::values(self, other));
                    }
                }

                fn is_empty_value(&self, _opts: &$crate::compare::CompareOptions) -> bool {
                    false
                }
            }
        )+
    };
}

/// Implements [`Comparable`] and [`Diffable`] for a struct from its field list.
///
/// Fields are reported under their own name unless given a wire name with
/// `field as "wire-name"`. The struct must implement `Default`.
#[macro_export]
macro_rules! comparable {
    (@name $field:ident) => {
        stringify!($field)
    };
    (@name $field:ident $wire:literal) => {
        $wire
    };
    ($model:ty { $($field:ident $(as $wire:literal)?),+ $(,)? }) => {
        impl $crate::compare::Comparable for $model {
            fn equal_with(&self, other: &Self, opts: &$crate::compare::CompareOptions) -> bool {
                $($crate::compare::Comparable::equal_with(&self.$field, &other.$field, opts))&&+
            }

            fn diff_into(
                &self,
                other: &Self,
                opts: &$crate::compare::CompareOptions,
                name: &str,
                out: &mut $crate::compare::Diff,
            ) {
                let sub = $crate::compare::Diffable::diff_with(self, other, opts);
                if !sub.is_empty() {
                    out.insert(name.to_string(), $crate::compare::Change::Nested(sub));
                }
            }

            fn is_empty_value(&self, opts: &$crate::compare::CompareOptions) -> bool {
                $crate::compare::Comparable::equal_with(self, &<$model>::default(), opts)
            }
        }

        impl $crate::compare::Diffable for $model {
            fn diff_with(
                &self,
                other: &Self,
                opts: &$crate::compare::CompareOptions,
            ) -> $crate::compare::Diff {
                let mut diff = $crate::compare::Diff::new();
                $(
                    $crate::compare::Comparable::diff_into(
                        &self.$field,
                        &other.$field,
                        opts,
                        $crate::comparable!(@name $field $($wire)?),
                        &mut diff,
                    );
                )+
                diff
            }
        }
    };
}

leaf_comparable!(bool, i64, String, Value, BTreeMap<String, Value>);
