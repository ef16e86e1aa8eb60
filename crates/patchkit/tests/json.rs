#![cfg(feature = "json")]

use patchkit::prelude::*;
use serde_json::json;

#[derive(Debug, Default, PartialEq, Record)]
struct User {
    name: String,
    age: u32,
    address: Option<String>,
}

#[test]
fn decoded_patch_bodies_drive_the_dynamic_pass() {
    let mut user = User {
        name: "John Doe".to_string(),
        age: 30,
        address: None,
    };

    let body = json!({
        "name": "Updated Name",
        "age": 31,
        "address": "123 Main Street",
    });

    let mut updater = Updater::new(&mut user);
    updater.update_value(&Value::from(body)).unwrap();

    assert_eq!(updater.updated_fields().len(), 3);
    assert_eq!(user.name, "Updated Name");
    assert_eq!(user.age, 31);
    assert_eq!(user.address.as_deref(), Some("123 Main Street"));
}

#[test]
fn json_null_means_not_provided_by_default() {
    let mut user = User {
        name: "John Doe".to_string(),
        age: 30,
        address: Some("somewhere".to_string()),
    };

    let body = json!({ "address": null });

    let mut updater = Updater::new(&mut user);
    updater.update_value(&Value::from(body)).unwrap();

    assert!(updater.skipped_fields().contains_key("address"));
    assert_eq!(user.address.as_deref(), Some("somewhere"));
}

#[test]
fn json_null_clears_under_skip_never() {
    let mut user = User {
        name: "John Doe".to_string(),
        age: 30,
        address: Some("somewhere".to_string()),
    };

    let body = json!({ "address": null });

    let mut updater = Updater::new(&mut user);
    updater.set_skip_policy(SkipNever);
    updater.update_value(&Value::from(body)).unwrap();

    assert!(updater.updated_fields().contains_key("address"));
    assert_eq!(user.address, None);
}

#[test]
fn unknown_and_mistyped_json_fields_are_reported() {
    let mut user = User::default();

    let body = json!({
        "name": 7,
        "ghost": "x",
    });

    let mut updater = Updater::new(&mut user);
    let err = updater.update_value(&Value::from(body)).unwrap_err();

    assert_eq!(
        err,
        UpdateError::FieldsFailed {
            not_found: 1,
            not_assignable: 1,
            total: 2,
        }
    );
    assert!(updater.not_assignable_fields().contains_key("name"));
    assert!(updater.not_found_fields().contains_key("ghost"));
}

#[test]
fn non_object_bodies_fail_fast() {
    let mut user = User::default();
    let mut updater = Updater::new(&mut user);

    assert_eq!(
        updater.update_value(&Value::from(json!(null))),
        Err(UpdateError::NullPatch)
    );
    assert_eq!(
        updater.update_value(&Value::from(json!([1, 2]))),
        Err(UpdateError::NotARecord { actual: "List" })
    );
    assert_eq!(user, User::default());
}
