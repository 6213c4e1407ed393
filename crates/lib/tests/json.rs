#![cfg(test)]

use indexmap::IndexMap;
use sedge::{from_text, to_text, ErrorKind, Rectangle};

#[test]
fn to_text_preserves_key_order() {
    let mut value = IndexMap::new();
    value.insert("height", 10);
    value.insert("width", 20);

    assert_eq!("{\"height\":10,\"width\":20}", to_text(&value).unwrap());
}

#[test]
fn to_text_nested_value() {
    let value = serde_json::json!({
        "b": [1, 2, 3],
        "a": { "z": null, "m": true },
    });

    assert_eq!(
        "{\"b\":[1,2,3],\"a\":{\"z\":null,\"m\":true}}",
        to_text(&value).unwrap()
    );
}

#[test]
fn to_text_scalars() {
    assert_eq!("\"a\"", to_text(&"a").unwrap());
    assert_eq!("10", to_text(&10).unwrap());
    assert_eq!("false", to_text(&false).unwrap());
}

#[test]
fn rectangle_area() {
    assert_eq!(200.0, Rectangle::new(10.0, 20.0).area());
}

#[test]
fn rectangle_round_trips_through_text() {
    let text = to_text(&Rectangle::new(10.0, 20.0)).unwrap();
    let rect: Rectangle = from_text(&text).unwrap();

    assert_eq!(Rectangle::new(10.0, 20.0), rect);
    assert_eq!(200.0, rect.area());
}

#[test]
fn from_text_rejects_malformed_input() {
    let err = from_text::<Rectangle>("{\"width\":").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Json(..)));
}
