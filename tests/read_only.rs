use na_view::{Error, Object, ProxiedMembers, ReadOnlyPolicy, View};

fn plain_object() -> Object {
    Object::new()
        .with(
            "data",
            Object::new()
                .with("propA", "this is prop a")
                .with("nestedA", Object::new().with("subPropA", "this is sub prop A")),
        )
        .with("propC", "this is prop c")
        .with("propD", "this is prop d")
}

#[test]
fn test_listed_property_rejected() {
    let target = plain_object();
    let plain = View::new(target.clone(), ["data", "propD"], ProxiedMembers::none());
    let err = plain.set("propD", "prop d has been changed").unwrap_err();
    assert_eq!(
        err,
        Error::ReadOnlyProperty {
            path: "propD".to_owned(),
            owner: "Object".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "propD is not a writable property of this Object.");
    assert_eq!(target.get("propD").unwrap(), "this is prop d");
}

#[test]
fn test_listed_member_makes_inner_view_read_only() {
    let plain = View::new(plain_object(), ["data", "propD"], ProxiedMembers::none());
    let data = plain.get("data").unwrap().into_view().unwrap();
    let err = data.set("propA", "prop a has been changed").unwrap_err();
    assert_eq!(err.path(), Some("data.propA"));
    assert!(
        err.to_string()
            .contains("propA is not a writable property of this Object.")
    );
}

#[test]
fn test_read_only_propagates_to_deeper_inner_views() {
    let plain = View::new(plain_object(), ["data"], ProxiedMembers::none());
    let nested = plain
        .get("data")
        .and_then(|p| p.into_view())
        .and_then(|data| data.get("nestedA"))
        .and_then(|p| p.into_view())
        .unwrap();
    assert_eq!(nested.path(), Some("data.nestedA"));
    let err = nested.set("subPropA", "changed").unwrap_err();
    assert_eq!(
        err.to_string(),
        "data.nestedA.subPropA is not a writable property of this Object."
    );
}

#[test]
fn test_unlisted_inner_view_is_writable() {
    let target = plain_object();
    let plain = View::new(target.clone(), ["propD"], ProxiedMembers::none());
    let data = plain.get("data").unwrap().into_view().unwrap();
    data.set("propA", "changed").unwrap();
    let raw = target.get("data").unwrap();
    assert_eq!(raw.as_object().unwrap().get("propA").unwrap(), "changed");
}

#[test]
fn test_wildcard_rejects_every_write() {
    let target = plain_object();
    let plain = View::new(target.clone(), "*", ProxiedMembers::none());
    assert_eq!(plain.get("propD").unwrap(), "this is prop d");

    for name in ["propC", "propD", "data", "brandNew"] {
        let err = plain.set(name, "changed").unwrap_err();
        assert_eq!(err.to_string(), "All properties of this Object are read-only.");
        assert_eq!(err.path(), None);
    }
    assert!(!target.has_own("brandNew"));
    assert_eq!(target.get("propC").unwrap(), "this is prop c");
}

#[test]
fn test_wildcard_reaches_inner_views() {
    let plain = View::new(plain_object(), ReadOnlyPolicy::all(), ProxiedMembers::none());
    let data = plain.get("data").unwrap().into_view().unwrap();
    assert_eq!(data.get("propA").unwrap(), "this is prop a");
    let err = data.set("propA", "prop a has been changed").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("data.propA is not a writable property of this Object."));
    assert!(message.contains("All properties of this Object are read-only."));
    assert!(matches!(err, Error::AllPropertiesReadOnly { .. }));
}

#[test]
fn test_wildcard_with_flattening() {
    let target = plain_object();
    let plain = View::new(target.clone(), "*", ["data"]);
    assert_eq!(plain.get("propA").unwrap(), "this is prop a");
    let err = plain.set("propA", "changed").unwrap_err();
    assert!(matches!(err, Error::AllPropertiesReadOnly { path: None, .. }));

    let nested = plain.get("nestedA").unwrap().into_view().unwrap();
    let err = nested.set("subPropA", "changed").unwrap_err();
    assert_eq!(err.path(), Some("data.nestedA.subPropA"));
}

#[test]
fn test_failed_write_leaves_members_untouched() {
    let target = plain_object();
    let plain = View::new(target.clone(), ["data"], ["data"]);
    assert!(plain.set("propA", "x").is_err());
    let raw = target.get("data").unwrap();
    assert_eq!(raw.as_object().unwrap().get("propA").unwrap(), "this is prop a");
}

#[test]
fn test_policy_accessors() {
    let plain = View::new(plain_object(), ["data"], ["data"]);
    let policy = plain.read_only().unwrap();
    assert!(policy.is_read_only("data"));
    assert!(!policy.is_read_only("propC"));
    assert!(plain.proxied_members().unwrap().contains("data"));

    assert!(plain.is_read_only("data"));
    assert!(!plain.is_read_only("propA"));

    let data = plain.get("data").unwrap().into_view().unwrap();
    assert!(data.is_read_only("propA"));
    assert!(data.read_only().is_none());
    assert!(data.proxied_members().is_none());
}
