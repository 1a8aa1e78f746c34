use na_view::{BaseMethod, IS_VIEW, Object, Symbol, Value, View};

fn plain_object() -> Object {
    Object::new()
        .with("data", Object::new().with("propA", "this is prop a"))
        .with("propC", "this is prop c")
}

#[test]
fn test_string_keys() {
    let view = View::new(plain_object(), ["data"], ["data"]);
    let owned = String::from("propC");
    assert_eq!(view.get("propC").unwrap(), "this is prop c");
    assert_eq!(view.get(&owned).unwrap(), "this is prop c");
    assert_eq!(view.get(owned).unwrap(), "this is prop c");
}

#[test]
fn test_symbol_keys_resolve_to_none() {
    let view = View::new(plain_object(), ["data"], ["data"]);
    for symbol in [
        Symbol::Iterator,
        Symbol::AsyncIterator,
        Symbol::HasInstance,
        Symbol::ToPrimitive,
        Symbol::ToStringTag,
        Symbol::Unscopables,
    ] {
        assert!(view.get(symbol).is_none(), "{}", symbol.description());
    }
}

#[test]
fn test_is_view_marker() {
    let view = View::of(plain_object());
    assert_eq!(view.get(IS_VIEW).unwrap().as_bool(), Some(true));
    let data = view.get("data").unwrap().into_view().unwrap();
    assert_eq!(data.get(IS_VIEW).unwrap().as_bool(), Some(true));
}

#[test]
fn test_base_methods_cannot_be_shadowed() {
    let target = plain_object().with("toString", "shadowed");
    let view = View::of(target.clone());
    let to_string = view.get("toString").unwrap();
    assert!(to_string.as_method().unwrap().is_base());
    assert_eq!(to_string.call(&[]).unwrap(), "[object Object]");
    assert_eq!(to_string.to_string(), "[Function: toString]");
}

#[test]
fn test_base_methods_on_inner_views() {
    let view = View::new(plain_object(), ["data"], ["data"]);
    let data = view.get("data").unwrap().into_view().unwrap();

    assert_eq!(data.call("toString", &[]).unwrap(), "[object Object]");
    assert_eq!(data.call("hasOwnProperty", &["propA".into()]).unwrap(), true);
    assert_eq!(view.call("hasOwnProperty", &["propA".into()]).unwrap(), false);
    assert_eq!(
        view.call("propertyIsEnumerable", &["propC".into()]).unwrap(),
        true
    );

    let Value::Object(raw) = view.call("valueOf", &[]).unwrap() else {
        panic!("valueOf returns the target");
    };
    assert!(raw.ptr_eq(view.target()));
    assert_eq!(BaseMethod::from_name("valueOf"), Some(BaseMethod::ValueOf));
}

#[test]
fn test_call_non_method_is_none() {
    let view = View::new(plain_object(), ["data"], ["data"]);
    assert!(view.call("propC", &[]).is_none());
    assert!(view.call("doesNotExist", &[]).is_none());
}

#[test]
fn test_prototype_names_are_ordinary_properties() {
    let view = View::of(plain_object());
    assert!(view.get("constructor").is_none());
    assert!(view.get("isPrototypeOf").is_none());
    assert_eq!(BaseMethod::from_name("constructor"), None);

    let view = View::of(plain_object().with("constructor", "factory"));
    assert_eq!(view.get("constructor").unwrap(), "factory");
}
