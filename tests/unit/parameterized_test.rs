//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use storecart::Store;
use storecart::adapters::catalog::{RawPrice, coerce_price};
use storecart::core::CatalogError;
use storecart::session::{SessionError, ShellCommand};
use test_case::test_case;

use crate::common::fixtures::grocery_catalog;

// =============================================================================
// Price Coercion Tests
// =============================================================================

#[test_case(RawPrice::Integer(10), 10 ; "integer passes through")]
#[test_case(RawPrice::Integer(0), 0 ; "zero is allowed")]
#[test_case(RawPrice::Float(9.99), 9 ; "float truncates")]
#[test_case(RawPrice::Float(-0.5), 0 ; "small negative float truncates to zero")]
#[test_case(RawPrice::Text("42".to_string()), 42 ; "numeric string")]
#[test_case(RawPrice::Text(" 7 ".to_string()), 7 ; "padded numeric string")]
fn test_coerce_price_ok(raw: RawPrice, expected: u64) {
    assert_eq!(coerce_price("item", &raw).unwrap(), expected);
}

#[test_case(RawPrice::Integer(-1) ; "negative integer")]
#[test_case(RawPrice::Float(-2.5) ; "negative float")]
#[test_case(RawPrice::Text("-3".to_string()) ; "negative string")]
fn test_coerce_price_negative(raw: RawPrice) {
    assert!(matches!(
        coerce_price("item", &raw),
        Err(CatalogError::NegativePrice { .. })
    ));
}

#[test_case(RawPrice::Text("ten".to_string()) ; "word")]
#[test_case(RawPrice::Text("9.99".to_string()) ; "decimal string")]
#[test_case(RawPrice::Text(String::new()) ; "empty string")]
#[test_case(RawPrice::Float(f64::NAN) ; "nan")]
#[test_case(RawPrice::Float(f64::INFINITY) ; "infinity")]
fn test_coerce_price_invalid(raw: RawPrice) {
    assert!(matches!(
        coerce_price("item", &raw),
        Err(CatalogError::InvalidPrice { .. })
    ));
}

// =============================================================================
// Session Command Parsing Tests
// =============================================================================

#[test_case("items", ShellCommand::Items ; "items")]
#[test_case("LIST", ShellCommand::Items ; "list uppercase")]
#[test_case("search tea", ShellCommand::Search("tea".to_string()) ; "search")]
#[test_case("tag #fruit", ShellCommand::Tag("fruit".to_string()) ; "tag with hash")]
#[test_case("tag fruit", ShellCommand::Tag("fruit".to_string()) ; "tag without hash")]
#[test_case("add cherry tomato", ShellCommand::Add("cherry tomato".to_string()) ; "add keeps spaces")]
#[test_case("rm mango", ShellCommand::Remove("mango".to_string()) ; "rm alias")]
#[test_case("cart", ShellCommand::Cart ; "cart")]
#[test_case("checkout", ShellCommand::Checkout ; "checkout")]
#[test_case("?", ShellCommand::Help ; "question mark")]
#[test_case("exit", ShellCommand::Quit ; "exit")]
fn test_parse_command(line: &str, expected: ShellCommand) {
    assert_eq!(line.parse::<ShellCommand>().unwrap(), expected);
}

#[test_case("search", SessionError::MissingArgument { command: "search" } ; "search without text")]
#[test_case("remove   ", SessionError::MissingArgument { command: "remove" } ; "remove without text")]
#[test_case("purchase apple", SessionError::UnknownCommand("purchase".to_string()) ; "unknown word")]
fn test_parse_command_error(line: &str, expected: SessionError) {
    assert_eq!(line.parse::<ShellCommand>().unwrap_err(), expected);
}

// =============================================================================
// Name Search Tests
// =============================================================================

#[test_case("", 6 ; "empty query matches everything")]
#[test_case("an", 2 ; "substring in two names")]
#[test_case("yellow", 1 ; "tag text is not a name")]
#[test_case("Apple", 0 ; "case sensitive")]
#[test_case("cherry tomato", 1 ; "full name with space")]
fn test_search_by_name_count(query: &str, expected: usize) {
    let store = Store::new(grocery_catalog()).unwrap();
    assert_eq!(store.search_by_name(query).len(), expected);
}
