#![cfg(feature = "serde")]

use na_view::{Object, Value, View};

#[test]
fn test_object_from_json() {
    let target: Object = serde_json::from_str(
        r#"{
            "data": { "propA": "this is prop a", "count": 3, "ratio": 1.5 },
            "propC": "this is prop c",
            "enabled": true,
            "missing": null
        }"#,
    )
    .unwrap();

    assert_eq!(target.keys(), ["data", "propC", "enabled", "missing"]);
    assert_eq!(target.get("enabled").unwrap(), true);
    assert!(target.get("missing").unwrap().is_null());

    let view = View::new(target, ["data"], ["data"]);
    assert_eq!(view.get("propA").unwrap(), "this is prop a");
    assert_eq!(view.get("count").unwrap().as_int(), Some(3));
    assert_eq!(view.get("ratio").unwrap().as_float(), Some(1.5));
    assert!(view.set("count", 4).is_err());
}

#[test]
fn test_large_unsigned_becomes_float() {
    let value: Value = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(value.as_float(), Some(u64::MAX as f64));
}

#[test]
fn test_object_rejects_non_map() {
    assert!(serde_json::from_str::<Object>("\"just a string\"").is_err());
    assert!(serde_json::from_str::<Value>("[1, 2, 3]").is_err());
}

#[test]
fn test_from_derived_struct() {
    #[derive(serde::Serialize)]
    struct Config {
        name: String,
        retries: u32,
    }

    let json = serde_json::to_string(&Config {
        name: "primary".to_owned(),
        retries: 3,
    })
    .unwrap();
    let target: Object = serde_json::from_str(&json).unwrap();
    let view = View::of(target);
    assert_eq!(view.get("name").unwrap(), "primary");
    assert_eq!(view.get("retries").unwrap().as_int(), Some(3));
}
