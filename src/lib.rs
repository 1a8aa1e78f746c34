//! Views that flatten nested members of a shared object into its top level
//! and guard selected properties against writes.
//!
//! ```
//! use std::rc::Rc;
//! use na_view::{Class, Object, Value, View};
//!
//! let class = Rc::new(
//!     Class::new("SimpleClass").method("methodA", |_, _| Value::from("this is method a")),
//! );
//! let target = Object::instance_of(&class)
//!     .with("propC", "this is prop c")
//!     .with("data", Object::new().with("propA", "this is prop a"));
//!
//! let view = View::new(target, ["data"], ["data"]);
//! assert_eq!(view.get("propA").unwrap(), "this is prop a");
//! assert_eq!(view.call("methodA", &[]).unwrap(), "this is method a");
//! assert_eq!(
//!     view.set("propA", "changed").unwrap_err().to_string(),
//!     "propA is not a writable property of the SimpleClass class."
//! );
//! ```

mod builtin;
#[cfg(feature = "serde")]
mod de;
mod error;
mod inspect;
mod key;
mod object;
mod policy;
mod value;
mod view;

pub use builtin::*;
pub use error::*;
pub use key::*;
pub use object::*;
pub use policy::*;
pub use value::*;
pub use view::*;
