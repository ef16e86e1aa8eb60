//! A typical PATCH flow: apply a sparse update payload to a stored record
//! and inspect what happened to every field.

use patchkit::prelude::*;

#[derive(Debug, Default, Record)]
struct User {
    name: String,
    age: u32,
    address: Option<String>,
    register_date: u64,
}

#[derive(Debug, Default, Record)]
struct UserUpdate {
    name: String,
    age: Option<u32>,
    address: Option<String>,
    register_date: String,
    not_existing_field: String,
}

fn keys(fields: &std::collections::BTreeMap<String, Field>) -> Vec<&str> {
    fields.keys().map(String::as_str).collect()
}

fn main() {
    let mut user = User {
        name: "John Doe".to_string(),
        age: 30,
        address: None,
        register_date: 1_600_000_000,
    };

    let update = UserUpdate {
        name: "Updated Name".to_string(),
        age: Some(user.age + 1),
        address: Some("123 Main Street".to_string()),
        register_date: "2016-01-01".to_string(),
        not_existing_field: "x".to_string(),
    };

    let mut updater = Updater::new(&mut user);

    // `register_date` and `not_existing_field` cannot resolve, so the pass
    // reports failure while still applying every assignable field.
    if let Err(err) = updater.update(&update) {
        println!("error: {err}");
    }

    println!("updated fields: {:?}", keys(updater.updated_fields()));
    println!("skipped fields: {:?}", keys(updater.skipped_fields()));
    println!("not found fields: {:?}", keys(updater.not_found_fields()));
    println!(
        "not assignable fields: {:?}",
        keys(updater.not_assignable_fields())
    );

    println!("updated user:\n{user:#?}");
}
