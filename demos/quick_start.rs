//! Quick start: building outcomes, warnings and error trees.
//!
//! Run with: `cargo run --example quick_start`

use outcome_rail::prelude::*;
use outcome_rail::compose::{cast_error, detail_messages};

#[derive(Debug)]
struct Person {
    #[allow(dead_code)]
    name: String,
    #[allow(dead_code)]
    age: u8,
}

fn validate_name(name: &str) -> Outcome<String> {
    ensure!(!name.is_empty(), "invalid name", "name must not be empty");
    let mut outcome = Outcome::success_with(name.to_string());
    if name.len() > 20 {
        outcome.add_warnings(["name will be truncated in reports"]);
    }
    outcome
}

fn parse_age(raw: &str) -> Outcome<u8> {
    raw.parse::<u8>().or_fail("invalid age")
}

fn register(name: &str, age: &str) -> Outcome<Person> {
    let name = validate_name(name);
    let age = parse_age(age);
    let warnings: Vec<String> = name.warnings().iter().chain(age.warnings()).cloned().collect();

    match (name.into_result(), age.into_result()) {
        (Ok(name), Ok(age)) => Outcome::success_with(Person { name, age }).with_warnings(warnings),
        (Err(first), Err(second)) => Outcome::error(first.concat(second, "registration rejected")),
        (Err(error), Ok(_)) | (Ok(_), Err(error)) => Outcome::error(error),
    }
}

fn rename(person: Outcome<Person>) -> Outcome<String> {
    match cast_error(person) {
        Ok(failed) => failed,
        Err(ok) => Outcome::error(Error::new(ok.to_string())),
    }
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Success with warnings
    println!("\n1. Success with warnings:");
    let ok = register("Bartholomew Montgomery III", "42");
    println!("data: {:?}", ok.data());
    println!("warnings: {:?}", ok.warnings());

    // 2. A single failure keeps its error tree
    println!("\n2. Single failure:");
    let failed = register("Ada", "old");
    if let Some(error) = failed.error_obj() {
        println!("error: {error}");
    }

    // 3. Two failures merged with concat
    println!("\n3. Merged failures:");
    let failed = register("", "-1");
    if let Some(error) = failed.error_obj() {
        println!("error: {error}");
        if let Some(messages) = detail_messages(error) {
            for message in messages.flatten() {
                println!("  - {message}");
            }
        }
    }

    // 4. Moving a failure to another payload type
    println!("\n4. Cast error:");
    let renamed = rename(register("", "old"));
    println!("is_failure: {}", renamed.is_failure());

    // 5. Nested details with an identifier and parameters
    println!("\n5. Detail with id:");
    let mut params = MessageParams::new();
    params.insert("max".to_string(), serde_json::json!(20));
    let error = Error::with_detail("invalid person", "name too long", 1001, Some(params));
    println!("error: {error}");
}
