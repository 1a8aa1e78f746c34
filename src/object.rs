use std::{cell::RefCell, rc::Rc};

use crate::{Function, Value};

/// A named method table shared by every instance of a class.
///
/// The class name doubles as the type tag of its instances.
pub struct Class {
    name: String,
    methods: Vec<(String, Function)>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Adds a method, replacing any earlier method of the same name.
    pub fn method(
        mut self,
        name: &str,
        call: impl Fn(&Object, &[Value]) -> Value + 'static,
    ) -> Self {
        let function = Function::named(name, call);
        match self.methods.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = function,
            None => self.methods.push((name.to_owned(), function)),
        }
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn get_method(&self, name: &str) -> Option<&Function> {
        self.methods
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, function)| function)
    }

    #[inline]
    pub fn has_method(&self, name: &str) -> bool {
        self.get_method(name).is_some()
    }

    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|(name, _)| name.as_str())
    }
}

struct ObjectData {
    class: Option<Rc<Class>>,
    properties: Vec<(String, Value)>,
}

impl ObjectData {
    #[inline]
    fn position(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|(key, _)| key == name)
    }
}

/// A shared handle to a mutable set of named properties.
///
/// Cloning an `Object` clones the handle: every clone reads and writes the
/// same properties. Own properties keep their insertion order.
#[derive(Clone)]
pub struct Object(Rc<RefCell<ObjectData>>);

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl Object {
    /// Creates a plain object with no properties.
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(ObjectData {
            class: None,
            properties: Vec::new(),
        })))
    }

    /// Creates an instance of `class` with no own properties.
    pub fn instance_of(class: &Rc<Class>) -> Self {
        Self(Rc::new(RefCell::new(ObjectData {
            class: Some(Rc::clone(class)),
            properties: Vec::new(),
        })))
    }

    /// Sets `name` and returns the object, for building targets inline.
    pub fn with(self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    #[inline]
    pub fn class(&self) -> Option<Rc<Class>> {
        self.0.borrow().class.clone()
    }

    /// The type tag: the class name, or `"Object"` for plain objects.
    pub fn type_name(&self) -> String {
        match &self.0.borrow().class {
            Some(class) => class.name.clone(),
            None => "Object".to_owned(),
        }
    }

    /// Looks up an own property first, then a method of the class.
    pub fn get(&self, name: &str) -> Option<Value> {
        let data = self.0.borrow();
        if let Some(index) = data.position(name) {
            return Some(data.properties[index].1.clone());
        }
        data.class
            .as_ref()?
            .get_method(name)
            .map(|function| Value::Function(function.clone()))
    }

    pub fn get_own(&self, name: &str) -> Option<Value> {
        let data = self.0.borrow();
        data.position(name).map(|index| data.properties[index].1.clone())
    }

    /// Returns `true` if `name` is an own property or a class method.
    pub fn has(&self, name: &str) -> bool {
        let data = self.0.borrow();
        data.position(name).is_some()
            || data
                .class
                .as_ref()
                .is_some_and(|class| class.has_method(name))
    }

    #[inline]
    pub fn has_own(&self, name: &str) -> bool {
        self.0.borrow().position(name).is_some()
    }

    /// Inserts or replaces an own property and returns the previous value.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Option<Value> {
        let value = value.into();
        let mut data = self.0.borrow_mut();
        match data.position(name) {
            Some(index) => Some(std::mem::replace(&mut data.properties[index].1, value)),
            None => {
                data.properties.push((name.to_owned(), value));
                None
            }
        }
    }

    pub fn remove(&self, name: &str) -> Option<Value> {
        let mut data = self.0.borrow_mut();
        let index = data.position(name)?;
        Some(data.properties.remove(index).1)
    }

    pub fn keys(&self) -> Vec<String> {
        self.0
            .borrow()
            .properties
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// A snapshot of the own properties in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0.borrow().properties.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.borrow().properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().properties.is_empty()
    }

    /// Returns `true` if both handles refer to the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    #[inline]
    pub(crate) fn id(&self) -> usize {
        Rc::as_ptr(&self.0).addr()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
