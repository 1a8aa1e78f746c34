use crate::{Object, Property, Value};

/// Reading this name through any view yields `true`.
pub const IS_VIEW: &str = "__isView";

/// The name display routines probe for; a view answers it with the name
/// itself instead of resolving anything.
pub const INSPECT: &str = "inspect";

/// Names a view answers before looking at its target.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Hook {
    IsView,
    Inspect,
}

impl Hook {
    #[inline]
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            IS_VIEW => Some(Self::IsView),
            INSPECT => Some(Self::Inspect),
            _ => None,
        }
    }

    pub(crate) fn resolve(self) -> Property {
        match self {
            Self::IsView => Property::Value(Value::Bool(true)),
            Self::Inspect => Property::Value(Value::String(INSPECT.to_owned())),
        }
    }
}

/// Capabilities every object has regardless of its properties.
///
/// A view resolves these names to the base implementation bound to the raw
/// target, so they keep working at any wrapping depth and cannot be shadowed
/// by target properties.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BaseMethod {
    ToString,
    ToLocaleString,
    ValueOf,
    HasOwnProperty,
    PropertyIsEnumerable,
}

impl BaseMethod {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "toString" => Some(Self::ToString),
            "toLocaleString" => Some(Self::ToLocaleString),
            "valueOf" => Some(Self::ValueOf),
            "hasOwnProperty" => Some(Self::HasOwnProperty),
            "propertyIsEnumerable" => Some(Self::PropertyIsEnumerable),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ToString => "toString",
            Self::ToLocaleString => "toLocaleString",
            Self::ValueOf => "valueOf",
            Self::HasOwnProperty => "hasOwnProperty",
            Self::PropertyIsEnumerable => "propertyIsEnumerable",
        }
    }

    pub fn call(self, this: &Object, args: &[Value]) -> Value {
        match self {
            Self::ToString | Self::ToLocaleString => Value::String("[object Object]".to_owned()),
            Self::ValueOf => Value::Object(this.clone()),
            // every own property is enumerable
            Self::HasOwnProperty | Self::PropertyIsEnumerable => {
                let owned = args
                    .first()
                    .and_then(Value::as_str)
                    .is_some_and(|name| this.has_own(name));
                Value::Bool(owned)
            }
        }
    }
}
