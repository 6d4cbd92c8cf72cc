use super::*;

#[test]
fn test_insert_and_get() {
    let mut object = Object::new();
    assert!(object.is_empty());

    assert_eq!(object.insert("a".into(), Value::Number(1.0)), None);
    assert_eq!(object.len(), 1);
    assert_eq!(object.get("a"), Some(&Value::Number(1.0)));
    assert_eq!(object.get("b"), None);
}

#[test]
fn test_last_write_wins_keeps_position() {
    let mut object = Object::new();
    object.insert("a".into(), Value::Number(1.0));
    object.insert("b".into(), Value::Number(2.0));

    let replaced = object.insert("a".into(), Value::Number(3.0));
    assert_eq!(replaced, Some(Value::Number(1.0)));
    assert_eq!(object.len(), 2);
    assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(object.get("a"), Some(&Value::Number(3.0)));
}

#[test]
fn test_from_iterator_applies_last_write_wins() {
    let object = Object::from_iter([
        ("x".to_owned(), Value::Number(1.0)),
        ("y".to_owned(), Value::Null),
        ("x".to_owned(), Value::Number(2.0)),
    ]);
    assert_eq!(object.len(), 2);
    assert_eq!(object.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(object.get("x"), Some(&Value::Number(2.0)));
}

#[test]
fn test_iteration_preserves_order() {
    let object = Object::from_iter([
        ("c".to_owned(), Value::Null),
        ("a".to_owned(), Value::Bool(true)),
        ("b".to_owned(), Value::Number(0.5)),
    ]);
    let keys: Vec<_> = object.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["c", "a", "b"]);
}

#[test]
fn test_value_accessors() {
    assert!(Value::Null.is_null());
    assert!(!Value::Bool(false).is_null());

    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Null.as_bool(), None);

    assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
    assert_eq!(Value::from("hi").as_str(), Some("hi"));
    assert_eq!(Value::Bool(true).as_str(), None);

    let value = Value::from(vec![Value::Null]);
    assert_eq!(value.as_array(), Some(&[Value::Null][..]));
    assert_eq!(value.as_object(), None);

    let value = Value::from(Object::new());
    assert!(value.as_object().is_some_and(|o| o.is_empty()));
}
