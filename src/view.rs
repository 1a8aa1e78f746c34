//! Property-flattening views over shared objects.
//!
//! A [`View`] wraps an [`Object`] without copying it. Reads resolve, in
//! order:
//!
//! 1. the [`IS_VIEW`](crate::IS_VIEW) and [`INSPECT`](crate::INSPECT) hooks,
//! 2. the [`BaseMethod`] names (`toString`, `valueOf`, ...), bound to the
//!    raw target,
//! 3. [`Symbol`](crate::Symbol) keys, which always resolve to `None`,
//! 4. own properties and class methods of the target,
//! 5. properties of the proxied members, first owner wins (outer views only).
//!
//! Object-valued results are handed out as fresh inner views that carry the
//! read-only state of the property they were reached through and a dotted
//! path used in error messages. Values that already are views are returned
//! as they are.
//!
//! # Example
//!
//! ```
//! use na_view::{Object, View};
//!
//! let target = Object::new()
//!     .with("propC", "c")
//!     .with("data", Object::new().with("propA", "a"));
//! let view = View::new(target.clone(), ["data"], ["data"]);
//!
//! assert_eq!(view.get("propA").unwrap().as_str(), Some("a"));
//! assert_eq!(view.get("propC").unwrap().as_str(), Some("c"));
//!
//! let err = view.set("propA", "x").unwrap_err();
//! assert!(err.to_string().contains("propA"));
//!
//! view.set("propC", "changed").unwrap();
//! assert_eq!(target.get("propC").unwrap(), "changed");
//! ```

use std::{fmt, rc::Rc};

use crate::{
    Access, BaseMethod, Error, Function, Hook, Key, Object, ProxiedMembers, ReadOnlyPolicy,
    Result, Value, ViewSpec,
};

/// The callable a [`BoundMethod`] dispatches to.
#[derive(Clone, PartialEq)]
enum Callee {
    Function(Function),
    Base(BaseMethod),
}

/// A method resolved through a view, bound to the view's target.
#[derive(Clone)]
pub struct BoundMethod {
    receiver: Object,
    callee: Callee,
}

impl BoundMethod {
    #[inline]
    pub(crate) fn new(receiver: Object, function: Function) -> Self {
        Self {
            receiver,
            callee: Callee::Function(function),
        }
    }

    #[inline]
    pub(crate) fn base(receiver: Object, method: BaseMethod) -> Self {
        Self {
            receiver,
            callee: Callee::Base(method),
        }
    }

    fn rebind(self, receiver: Object) -> Self {
        Self { receiver, ..self }
    }

    /// The object the method is invoked on.
    #[inline]
    pub fn receiver(&self) -> &Object {
        &self.receiver
    }

    pub fn name(&self) -> Option<&str> {
        match &self.callee {
            Callee::Function(function) => function.name(),
            Callee::Base(method) => Some(method.name()),
        }
    }

    #[inline]
    pub fn is_base(&self) -> bool {
        matches!(self.callee, Callee::Base(_))
    }

    pub fn call(&self, args: &[Value]) -> Value {
        match &self.callee {
            Callee::Function(function) => function.call(&self.receiver, args),
            Callee::Base(method) => method.call(&self.receiver, args),
        }
    }
}

impl PartialEq for BoundMethod {
    fn eq(&self, other: &Self) -> bool {
        self.receiver.ptr_eq(&other.receiver) && self.callee == other.callee
    }
}

impl fmt::Display for BoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "[Function: {name}]"),
            None => f.write_str("[Function (anonymous)]"),
        }
    }
}

impl fmt::Debug for BoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// The result of reading a property through a view.
#[derive(Clone, PartialEq)]
pub enum Property {
    /// A primitive value, copied out of the target.
    Value(Value),
    /// An object-valued property, wrapped in a view.
    View(View),
    /// A callable, bound to the view's target.
    Method(BoundMethod),
}

impl Property {
    #[inline]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Property::Value(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.as_value()?.as_str()
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        self.as_value()?.as_int()
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        self.as_value()?.as_float()
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_value()?.as_bool()
    }

    #[inline]
    pub fn as_view(&self) -> Option<&View> {
        match self {
            Property::View(view) => Some(view),
            _ => None,
        }
    }

    #[inline]
    pub fn into_view(self) -> Option<View> {
        match self {
            Property::View(view) => Some(view),
            _ => None,
        }
    }

    #[inline]
    pub fn as_method(&self) -> Option<&BoundMethod> {
        match self {
            Property::Method(method) => Some(method),
            _ => None,
        }
    }

    #[inline]
    pub fn is_view(&self) -> bool {
        matches!(self, Property::View(_))
    }

    #[inline]
    pub fn is_method(&self) -> bool {
        matches!(self, Property::Method(_))
    }

    /// The host's `typeof` tag for the resolved property.
    pub fn type_of(&self) -> &'static str {
        match self {
            Property::Value(value) => value.type_of(),
            Property::View(_) => "object",
            Property::Method(_) => "function",
        }
    }

    /// Calls the property if it is a method.
    pub fn call(&self, args: &[Value]) -> Option<Value> {
        self.as_method().map(|method| method.call(args))
    }
}

impl PartialEq<str> for Property {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Property {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Read-only state and diagnostic path of a view created during traversal.
#[derive(Debug)]
struct InnerScope {
    access: Access,
    path: String,
    owner: String,
}

#[derive(Clone)]
enum Scope {
    Outer(Rc<ViewSpec>),
    Inner(Rc<InnerScope>),
}

/// A view over an [`Object`] that flattens proxied members and enforces a
/// read-only policy.
///
/// Views never own data: every write lands on the wrapped object, so other
/// handles to it observe the change. Cloning a view is cheap.
#[derive(Clone)]
pub struct View {
    target: Object,
    scope: Scope,
}

impl View {
    pub fn new(
        target: Object,
        read_only: impl Into<ReadOnlyPolicy>,
        proxied: impl Into<ProxiedMembers>,
    ) -> Self {
        let spec = ViewSpec {
            read_only: read_only.into(),
            proxied: proxied.into(),
        };
        tracing::trace!(
            target_type = %target.type_name(),
            read_only = ?spec.read_only,
            proxied = ?spec.proxied,
            "created view"
        );
        Self {
            target,
            scope: Scope::Outer(Rc::new(spec)),
        }
    }

    /// A view with nothing read-only and nothing flattened.
    #[inline]
    pub fn of(target: Object) -> Self {
        Self::new(target, ReadOnlyPolicy::none(), ProxiedMembers::none())
    }

    /// Wraps an object-valued `value`.
    ///
    /// A value that already is a view is returned unchanged, whatever the
    /// requested policy; primitives and functions yield `None`.
    pub fn wrap(
        value: impl Into<Value>,
        read_only: impl Into<ReadOnlyPolicy>,
        proxied: impl Into<ProxiedMembers>,
    ) -> Option<Self> {
        match value.into() {
            Value::View(view) => Some(view),
            Value::Object(object) => Some(Self::new(object, read_only, proxied)),
            _ => None,
        }
    }

    fn inner(target: Object, access: Access, path: String, owner: String) -> Self {
        tracing::trace!(%path, ?access, "created inner view");
        Self {
            target,
            scope: Scope::Inner(Rc::new(InnerScope {
                access,
                path,
                owner,
            })),
        }
    }

    /// The wrapped object.
    #[inline]
    pub fn target(&self) -> &Object {
        &self.target
    }

    /// The type tag of the wrapped object.
    #[inline]
    pub fn type_name(&self) -> String {
        self.target.type_name()
    }

    /// The dotted path this view was reached through, for inner views.
    pub fn path(&self) -> Option<&str> {
        match &self.scope {
            Scope::Outer(_) => None,
            Scope::Inner(scope) => Some(&scope.path),
        }
    }

    #[inline]
    pub fn is_inner(&self) -> bool {
        matches!(self.scope, Scope::Inner(_))
    }

    /// Returns `true` if the policy forbids writing `name` directly.
    ///
    /// Writes that would land on a read-only proxied member are not covered.
    pub fn is_read_only(&self, name: &str) -> bool {
        match &self.scope {
            Scope::Outer(spec) => spec.read_only.is_read_only(name),
            Scope::Inner(scope) => scope.access != Access::Writable,
        }
    }

    /// The read-only policy, for views built with [`View::new`].
    pub fn read_only(&self) -> Option<&ReadOnlyPolicy> {
        match &self.scope {
            Scope::Outer(spec) => Some(&spec.read_only),
            Scope::Inner(_) => None,
        }
    }

    /// The flattened members, for views built with [`View::new`].
    pub fn proxied_members(&self) -> Option<&ProxiedMembers> {
        match &self.scope {
            Scope::Outer(spec) => Some(&spec.proxied),
            Scope::Inner(_) => None,
        }
    }

    /// Resolves a property. Unknown names resolve to `None`.
    pub fn get<K: Key>(&self, key: K) -> Option<Property> {
        key.key_dispatch(self, Self::get_named, |_, _| None)
    }

    fn get_named(&self, name: &str) -> Option<Property> {
        if let Some(hook) = Hook::from_name(name) {
            return Some(hook.resolve());
        }
        if let Some(method) = BaseMethod::from_name(name) {
            return Some(Property::Method(BoundMethod::base(
                self.target.clone(),
                method,
            )));
        }

        if let Some(value) = self.target.get(name) {
            let access = match &self.scope {
                Scope::Outer(spec) => spec.read_only.access(name),
                Scope::Inner(scope) => scope.access,
            };
            return Some(self.resolve(value, access, self.child_path(name)));
        }

        let Scope::Outer(spec) = &self.scope else {
            return None;
        };
        for member in spec.proxied.iter() {
            match self.target.get_own(member) {
                Some(Value::Object(holder)) => {
                    if let Some(value) = holder.get(name) {
                        let access = spec.read_only.access(member);
                        let path = format!("{member}.{name}");
                        return Some(self.resolve(value, access, path));
                    }
                }
                Some(Value::View(holder)) if holder.target.has(name) => {
                    return holder.get(name).map(|property| match property {
                        Property::Method(method) if !method.is_base() => {
                            Property::Method(method.rebind(self.target.clone()))
                        }
                        property => property,
                    });
                }
                _ => {}
            }
        }
        None
    }

    fn resolve(&self, value: Value, access: Access, path: String) -> Property {
        match value {
            Value::Object(object) => {
                Property::View(Self::inner(object, access, path, self.owner()))
            }
            Value::View(view) => Property::View(view),
            Value::Function(function) => {
                Property::Method(BoundMethod::new(self.target.clone(), function))
            }
            value => Property::Value(value),
        }
    }

    fn child_path(&self, name: &str) -> String {
        match &self.scope {
            Scope::Outer(_) => name.to_owned(),
            Scope::Inner(scope) => format!("{}.{name}", scope.path),
        }
    }

    /// The type name violation messages refer to: the outermost target's.
    fn owner(&self) -> String {
        match &self.scope {
            Scope::Outer(_) => self.target.type_name(),
            Scope::Inner(scope) => scope.owner.clone(),
        }
    }

    /// Writes a property in place on the wrapped object graph.
    ///
    /// An outer view writes to the target's own property if there is one,
    /// otherwise to the first proxied member owning `name`, otherwise it
    /// creates `name` on the target. Inner views write directly to their
    /// object.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match &self.scope {
            Scope::Outer(spec) => self.set_outer(spec, name, value),
            Scope::Inner(scope) => self.set_inner(scope, name, value),
        }
    }

    fn set_outer(&self, spec: &ViewSpec, name: &str, value: Value) -> Result<()> {
        match spec.read_only.access(name) {
            Access::AllReadOnly => {
                return Err(self.reject(Error::AllPropertiesReadOnly {
                    owner: self.owner(),
                    path: None,
                }));
            }
            Access::ReadOnly => {
                return Err(self.reject(Error::ReadOnlyProperty {
                    path: name.to_owned(),
                    owner: self.owner(),
                }));
            }
            Access::Writable => {}
        }

        if self.target.has_own(name) {
            self.target.set(name, value);
            return Ok(());
        }

        for member in spec.proxied.iter() {
            match self.target.get_own(member) {
                Some(Value::Object(holder)) if holder.has(name) => {
                    if spec.read_only.is_read_only(member) {
                        return Err(self.reject(Error::ReadOnlyProperty {
                            path: name.to_owned(),
                            owner: self.owner(),
                        }));
                    }
                    holder.set(name, value);
                    return Ok(());
                }
                Some(Value::View(holder)) if holder.target.has(name) => {
                    if spec.read_only.is_read_only(member) {
                        return Err(self.reject(Error::ReadOnlyProperty {
                            path: name.to_owned(),
                            owner: self.owner(),
                        }));
                    }
                    return holder.set(name, value);
                }
                _ => {}
            }
        }

        tracing::trace!(property = name, "created property on view target");
        self.target.set(name, value);
        Ok(())
    }

    fn set_inner(&self, scope: &InnerScope, name: &str, value: Value) -> Result<()> {
        let path = format!("{}.{name}", scope.path);
        match scope.access {
            Access::AllReadOnly => Err(self.reject(Error::AllPropertiesReadOnly {
                owner: scope.owner.clone(),
                path: Some(path),
            })),
            Access::ReadOnly => Err(self.reject(Error::ReadOnlyProperty {
                path,
                owner: scope.owner.clone(),
            })),
            Access::Writable => {
                self.target.set(name, value);
                Ok(())
            }
        }
    }

    fn reject(&self, error: Error) -> Error {
        tracing::debug!(%error, "rejected write through read-only view");
        error
    }

    /// Resolves `name` and calls it if it is a method.
    pub fn call(&self, name: &str, args: &[Value]) -> Option<Value> {
        self.get(name)?.call(args)
    }
}

impl PartialEq for View {
    /// Views are equal when they wrap the same object.
    fn eq(&self, other: &Self) -> bool {
        self.target.ptr_eq(&other.target)
    }
}
