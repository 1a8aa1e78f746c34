//! Console-style rendering of values, objects and views.
//!
//! Views render as the object they wrap. Objects nested more than two levels
//! deep collapse to `[Object]` (or `[ClassName]`), and an object that
//! contains itself renders as `[Circular]`.

use std::fmt::{self, Write};

use crate::{Object, Property, Value, View};

const MAX_DEPTH: usize = 2;

struct Inspector {
    seen: Vec<usize>,
}

impl Inspector {
    fn new() -> Self {
        Self { seen: Vec::new() }
    }

    fn value<W: Write>(
        &mut self,
        out: &mut W,
        value: &Value,
        depth: usize,
        quote: bool,
    ) -> fmt::Result {
        match value {
            Value::Null => out.write_str("null"),
            Value::Bool(value) => write!(out, "{value}"),
            Value::Int(value) => write!(out, "{value}"),
            Value::Float(value) => number(out, *value),
            Value::String(value) if quote => string(out, value),
            Value::String(value) => out.write_str(value),
            Value::Function(function) => write!(out, "{function}"),
            Value::Object(object) => self.object(out, object, depth),
            Value::View(view) => self.object(out, view.target(), depth),
        }
    }

    fn object<W: Write>(&mut self, out: &mut W, object: &Object, depth: usize) -> fmt::Result {
        let id = object.id();
        if self.seen.contains(&id) {
            return out.write_str("[Circular]");
        }

        let class = object.class();
        let entries = object.entries();
        if depth > MAX_DEPTH && !entries.is_empty() {
            return match &class {
                Some(class) => write!(out, "[{}]", class.name()),
                None => out.write_str("[Object]"),
            };
        }
        if let Some(class) = &class {
            write!(out, "{} ", class.name())?;
        }
        if entries.is_empty() {
            return out.write_str("{}");
        }

        self.seen.push(id);
        out.write_str("{ ")?;
        for (index, (key, value)) in entries.iter().enumerate() {
            if index > 0 {
                out.write_str(", ")?;
            }
            if is_identifier(key) {
                out.write_str(key)?;
            } else {
                string(out, key)?;
            }
            out.write_str(": ")?;
            self.value(out, value, depth + 1, true)?;
        }
        self.seen.pop();
        out.write_str(" }")
    }
}

fn number<W: Write>(out: &mut W, value: f64) -> fmt::Result {
    if value.is_nan() {
        out.write_str("NaN")
    } else if value.is_infinite() {
        out.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(out, "{value}")
    }
}

fn string<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    out.write_char('\'')?;
    for ch in value.chars() {
        match ch {
            '\'' => out.write_str("\\'")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            ch => out.write_char(ch)?,
        }
    }
    out.write_char('\'')
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Inspector::new().value(f, self, 0, false)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Inspector::new().value(f, self, 0, true)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Inspector::new().object(f, self, 0)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Inspector::new().object(f, self.target(), 0)
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Value(value) => fmt::Display::fmt(value, f),
            Property::View(view) => fmt::Display::fmt(view, f),
            Property::Method(method) => fmt::Display::fmt(method, f),
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Value(value) => fmt::Debug::fmt(value, f),
            Property::View(view) => fmt::Debug::fmt(view, f),
            Property::Method(method) => fmt::Debug::fmt(method, f),
        }
    }
}
