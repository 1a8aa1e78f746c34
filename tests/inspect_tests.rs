use std::rc::Rc;

use na_view::{Class, Function, Object, Value, View};

fn plain_object() -> Object {
    Object::new()
        .with("data", Object::new().with("propA", "this is prop a"))
        .with("propC", "this is prop c")
}

#[test]
fn test_display_flattened_string() {
    let plain = View::new(plain_object(), ["data"], ["data"]);
    let prop_a = plain.get("propA").unwrap();
    assert_eq!(format!("{}", prop_a), "this is prop a");
    assert_eq!(format!("{:?}", prop_a), "'this is prop a'");
}

#[test]
fn test_display_view_shows_target() {
    let plain = View::new(plain_object(), ["data"], ["data"]);
    assert_eq!(
        plain.to_string(),
        "{ data: { propA: 'this is prop a' }, propC: 'this is prop c' }"
    );
    let data = plain.get("data").unwrap();
    assert_eq!(data.to_string(), "{ propA: 'this is prop a' }");
}

#[test]
fn test_inspect_hook_short_circuits() {
    let plain = View::new(plain_object().with("inspect", "shadowed"), ["data"], ["data"]);
    assert_eq!(plain.get("inspect").unwrap(), "inspect");
}

#[test]
fn test_display_class_instance_and_functions() {
    let class = Rc::new(Class::new("SimpleClass").method("methodA", |_, _| Value::Null));
    let target = Object::instance_of(&class)
        .with("propC", 1)
        .with("flag", true)
        .with("ratio", 0.5)
        .with("nothing", Value::Null)
        .with("callback", Function::new(|_, _| Value::Null));
    assert_eq!(
        target.to_string(),
        "SimpleClass { propC: 1, flag: true, ratio: 0.5, nothing: null, callback: [Function (anonymous)] }"
    );

    let view = View::of(target);
    assert_eq!(view.get("methodA").unwrap().to_string(), "[Function: methodA]");
    assert_eq!(
        Object::instance_of(&class).to_string(),
        "SimpleClass {}"
    );
}

#[test]
fn test_display_quotes_odd_keys() {
    let target = Object::new().with("my key", "it's");
    assert_eq!(target.to_string(), "{ 'my key': 'it\\'s' }");
}

#[test]
fn test_display_depth_limit() {
    let target = Object::new().with(
        "a",
        Object::new().with("b", Object::new().with("c", Object::new().with("d", 1))),
    );
    assert_eq!(target.to_string(), "{ a: { b: { c: [Object] } } }");
}

#[test]
fn test_display_circular() {
    let target = Object::new().with("name", "loop");
    target.set("me", target.clone());
    assert_eq!(target.to_string(), "{ name: 'loop', me: [Circular] }");

    let view = View::of(target.clone());
    assert_eq!(view.to_string(), "{ name: 'loop', me: [Circular] }");
    target.remove("me");
}

#[test]
fn test_display_special_floats() {
    assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::Float(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::Float(2.0).to_string(), "2");
}
