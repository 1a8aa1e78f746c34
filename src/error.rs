//! Error types for writes through a [`View`](crate::View).
//!
//! Reads never fail: an unknown property simply resolves to `None`. The only
//! failing operation is a write that the view's read-only policy forbids,
//! which is reported as one of the [`Error`] variants below.
//!
//! # Example
//!
//! ```
//! use na_view::{Error, Object, ProxiedMembers, View};
//!
//! let target = Object::new().with("propD", "this is prop d");
//! let view = View::new(target, ["propD"], ProxiedMembers::none());
//!
//! match view.set("propD", "changed") {
//!     Err(err @ Error::ReadOnlyProperty { .. }) => {
//!         assert_eq!(err.to_string(), "propD is not a writable property of this Object.");
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use std::fmt::{self, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents a write rejected by a view's read-only policy.
///
/// Both variants are read-only violations; they differ only in whether the
/// policy that rejected the write was the wildcard or an explicit name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Every property of the wrapped object is read-only.
    ///
    /// `path` is set when the write happened inside an inner view and holds
    /// the full dotted path of the rejected property.
    AllPropertiesReadOnly { owner: String, path: Option<String> },

    /// The named property (or a property below a read-only member) is not
    /// writable.
    ReadOnlyProperty { path: String, owner: String },
}

impl Error {
    /// Returns `true` if this error is a read-only violation.
    pub fn is_read_only_violation(&self) -> bool {
        matches!(
            self,
            Error::AllPropertiesReadOnly { .. } | Error::ReadOnlyProperty { .. }
        )
    }

    /// The type name of the wrapped object the write was rejected on.
    pub fn owner(&self) -> &str {
        match self {
            Error::AllPropertiesReadOnly { owner, .. } | Error::ReadOnlyProperty { owner, .. } => {
                owner
            }
        }
    }

    /// The dotted path of the rejected property, if one is known.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::AllPropertiesReadOnly { path, .. } => path.as_deref(),
            Error::ReadOnlyProperty { path, .. } => Some(path),
        }
    }
}

/// Renders a type name the way violation messages refer to it.
struct Owner<'a>(&'a str);

impl Display for Owner<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        if self.0 == "Object" {
            formatter.write_str("this Object")
        } else {
            write!(formatter, "the {} class", self.0)
        }
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::AllPropertiesReadOnly { owner, path: None } => {
                write!(formatter, "All properties of {} are read-only.", Owner(owner))
            }
            Error::AllPropertiesReadOnly {
                owner,
                path: Some(path),
            } => write!(
                formatter,
                "{path} is not a writable property of {owner}. All properties of {owner} are read-only.",
                owner = Owner(owner)
            ),
            Error::ReadOnlyProperty { path, owner } => write!(
                formatter,
                "{path} is not a writable property of {}.",
                Owner(owner)
            ),
        }
    }
}

impl std::error::Error for Error {}
