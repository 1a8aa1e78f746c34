/// Which properties of a view's target may not be written.
///
/// `"*"` converts to [`ReadOnlyPolicy::All`]; any other name or list of names
/// converts to [`ReadOnlyPolicy::Listed`].
///
/// # Example
///
/// ```
/// use na_view::ReadOnlyPolicy;
///
/// assert!(ReadOnlyPolicy::from("*").is_all());
/// assert!(ReadOnlyPolicy::from(["data", "propD"]).is_read_only("propD"));
/// assert!(!ReadOnlyPolicy::none().is_read_only("propC"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOnlyPolicy {
    /// Every property is read-only.
    All,
    /// Only the listed member names are read-only.
    Listed(Vec<String>),
}

impl Default for ReadOnlyPolicy {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl ReadOnlyPolicy {
    /// The name that marks every property read-only.
    pub const WILDCARD: &'static str = "*";

    #[inline]
    pub const fn none() -> Self {
        Self::Listed(Vec::new())
    }

    #[inline]
    pub const fn all() -> Self {
        Self::All
    }

    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns `true` if a write to `name` is forbidden, by name or wildcard.
    pub fn is_read_only(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Listed(names) => names.iter().any(|listed| listed == name),
        }
    }

    pub(crate) fn access(&self, name: &str) -> Access {
        match self {
            Self::All => Access::AllReadOnly,
            Self::Listed(names) if names.iter().any(|listed| listed == name) => Access::ReadOnly,
            Self::Listed(_) => Access::Writable,
        }
    }
}

impl From<&str> for ReadOnlyPolicy {
    fn from(value: &str) -> Self {
        if value == Self::WILDCARD {
            Self::All
        } else {
            Self::Listed(vec![value.to_owned()])
        }
    }
}

impl From<String> for ReadOnlyPolicy {
    #[inline]
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl<const N: usize> From<[&str; N]> for ReadOnlyPolicy {
    #[inline]
    fn from(value: [&str; N]) -> Self {
        Self::Listed(value.iter().map(|name| (*name).to_owned()).collect())
    }
}

impl From<&[&str]> for ReadOnlyPolicy {
    #[inline]
    fn from(value: &[&str]) -> Self {
        Self::Listed(value.iter().map(|name| (*name).to_owned()).collect())
    }
}

impl From<Vec<&str>> for ReadOnlyPolicy {
    #[inline]
    fn from(value: Vec<&str>) -> Self {
        Self::from(value.as_slice())
    }
}

impl From<Vec<String>> for ReadOnlyPolicy {
    #[inline]
    fn from(value: Vec<String>) -> Self {
        Self::Listed(value)
    }
}

/// Members of a target whose own properties are flattened into the view.
///
/// Members are consulted in order; the first one that owns a name wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProxiedMembers(Vec<String>);

impl ProxiedMembers {
    #[inline]
    pub const fn none() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|member| member == name)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for ProxiedMembers {
    #[inline]
    fn from(value: &str) -> Self {
        Self(vec![value.to_owned()])
    }
}

impl From<String> for ProxiedMembers {
    #[inline]
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl<const N: usize> From<[&str; N]> for ProxiedMembers {
    #[inline]
    fn from(value: [&str; N]) -> Self {
        Self(value.iter().map(|name| (*name).to_owned()).collect())
    }
}

impl From<&[&str]> for ProxiedMembers {
    #[inline]
    fn from(value: &[&str]) -> Self {
        Self(value.iter().map(|name| (*name).to_owned()).collect())
    }
}

impl From<Vec<&str>> for ProxiedMembers {
    #[inline]
    fn from(value: Vec<&str>) -> Self {
        Self::from(value.as_slice())
    }
}

impl From<Vec<String>> for ProxiedMembers {
    #[inline]
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

/// How writes below a resolved property are treated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Access {
    Writable,
    ReadOnly,
    AllReadOnly,
}

/// The immutable configuration of an outer view.
#[derive(Debug)]
pub(crate) struct ViewSpec {
    pub(crate) read_only: ReadOnlyPolicy,
    pub(crate) proxied: ProxiedMembers,
}
