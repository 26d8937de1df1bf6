use crate::Value;

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// Something that can address a child of a [`Value`]: a `usize` selects a
/// list element, a string selects a compound entry.
///
/// Indexing a value of the wrong shape (a string into a list, a number into
/// a compound, anything into a leaf) yields `None`.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value>;
}

impl Index for usize {
    #[inline]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::List(list) => list.get(*self),
            _ => None,
        }
    }

    // Lists only hand out kind-preserving mutable access.
    #[inline]
    fn index_into_mut<'v>(&self, _: &'v mut Value) -> Option<&'v mut Value> {
        None
    }
}

impl Index for str {
    #[inline]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Compound(compound) => compound.get(self),
            _ => None,
        }
    }

    #[inline]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        match value {
            Value::Compound(compound) => compound.get_mut(self),
            _ => None,
        }
    }
}

impl Index for String {
    #[inline]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(value)
    }

    #[inline]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        self.as_str().index_into_mut(value)
    }
}

impl<T: ?Sized + Index> Index for &T {
    #[inline]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        (**self).index_into(value)
    }

    #[inline]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        (**self).index_into_mut(value)
    }
}
