use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// A Type that can be used as the Key of a [`HashtableMap`](super::HashtableMap).
///
/// Rust has no `null`, but some Keys still carry no identity at all: an empty String names
/// no Location. Such Keys are called _vacant_. They are rejected on insertion and are never
/// reported as present.
///
/// Numbers, `char`s and tuples are never vacant. Implementing this Trait for your own Type
/// only requires an empty `impl` block, unless that Type has a vacant value of its own.
pub trait TableKey: Hash + Eq {
    /// Returns `true` if this Key carries no identity and must not be stored.
    fn is_vacant(&self) -> bool {
        false
    }
}

macro_rules! impl_never_vacant {
    ($($type:ty),+) => {$(
        impl TableKey for $type {}
    )+}
}

impl_never_vacant!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);

macro_rules! impl_str_like {
    ($($type:ty),+) => {$(
        impl TableKey for $type {
            fn is_vacant(&self) -> bool {
                self.is_empty()
            }
        }
    )+}
}

impl_str_like!(String, str, Box<str>, Rc<str>, Arc<str>);

impl<K: TableKey + ?Sized> TableKey for &K {
    fn is_vacant(&self) -> bool {
        (**self).is_vacant()
    }
}

impl<A: TableKey, B: TableKey> TableKey for (A, B) {}
