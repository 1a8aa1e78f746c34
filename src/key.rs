mod private {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for super::Symbol {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// Well-known reflective symbols.
///
/// These name protocol hooks (iteration, primitive conversion, type tags)
/// that consumers probe for on any object. A view never forwards them, so
/// such probes always see "absent" instead of a property of the target.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Symbol {
    Iterator,
    AsyncIterator,
    HasInstance,
    ToPrimitive,
    ToStringTag,
    Unscopables,
}

impl Symbol {
    pub const fn description(self) -> &'static str {
        match self {
            Self::Iterator => "Symbol.iterator",
            Self::AsyncIterator => "Symbol.asyncIterator",
            Self::HasInstance => "Symbol.hasInstance",
            Self::ToPrimitive => "Symbol.toPrimitive",
            Self::ToStringTag => "Symbol.toStringTag",
            Self::Unscopables => "Symbol.unscopables",
        }
    }
}

/// A property key accepted by [`View::get`](crate::View::get).
pub trait Key: private::Sealed {
    #[doc(hidden)]
    fn key_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        n: impl FnOnce(&'a V, &str) -> R,
        s: impl FnOnce(&'a V, Symbol) -> R,
    ) -> R;
}

impl Key for str {
    #[inline]
    fn key_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        n: impl FnOnce(&'a V, &str) -> R,
        _: impl FnOnce(&'a V, Symbol) -> R,
    ) -> R {
        n(value, self)
    }
}

impl Key for String {
    #[inline]
    fn key_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        n: impl FnOnce(&'a V, &str) -> R,
        _: impl FnOnce(&'a V, Symbol) -> R,
    ) -> R {
        n(value, self.as_str())
    }
}

impl Key for Symbol {
    #[inline]
    fn key_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        _: impl FnOnce(&'a V, &str) -> R,
        s: impl FnOnce(&'a V, Symbol) -> R,
    ) -> R {
        s(value, *self)
    }
}

impl<T: ?Sized + Key> Key for &T {
    #[inline]
    fn key_dispatch<'a, V, R>(
        &self,
        value: &'a V,
        n: impl FnOnce(&'a V, &str) -> R,
        s: impl FnOnce(&'a V, Symbol) -> R,
    ) -> R {
        (**self).key_dispatch(value, n, s)
    }
}
