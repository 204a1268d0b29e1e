//! Enum instances at the JSON boundary.

mod common;

use common::{Mixed, Priority, Status};
use constenum::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Ticket {
    id: i64,
    status: Enum<Status>,
    priority: Enum<Priority>,
}

#[test]
fn payload_embeds_string_form() {
    let ticket = Ticket {
        id: 7,
        status: Status::active().unwrap(),
        priority: Priority::medium().unwrap(),
    };
    insta::assert_json_snapshot!(ticket, @r#"
    {
      "id": 7,
      "status": "active",
      "priority": "5"
    }
    "#);
}

#[test]
fn unset_instances_serialize_as_null() {
    let ticket = Ticket {
        id: 1,
        status: Enum::<Status>::new().unwrap(),
        priority: Enum::<Priority>::new().unwrap(),
    };
    assert_eq!(
        ticket.to_json().unwrap(),
        r#"{"id":1,"status":"draft","priority":null}"#
    );
}

#[test]
fn payload_round_trips_for_string_values() {
    let json = r#"{"id":3,"status":"archived","priority":9}"#;
    let ticket = Ticket::from_json(json).unwrap();
    assert_eq!(ticket.status.ordinal(), Some(2));
    assert_eq!(ticket.priority.key(), Some("high"));

    // Integer-valued members serialize as strings, which no longer match strictly.
    let reserialized = ticket.to_json().unwrap();
    assert_eq!(reserialized, r#"{"id":3,"status":"archived","priority":"9"}"#);
    assert!(Ticket::from_json(&reserialized).is_err());
}

#[test]
fn null_takes_the_no_value_path() {
    let ticket = Ticket::from_json(r#"{"id":2,"status":null,"priority":null}"#).unwrap();
    assert_eq!(ticket.status, Enum::<Status>::new().unwrap());
    assert!(ticket.priority.is_unset());

    let mixed = Enum::<Mixed>::from_json("null").unwrap();
    assert_eq!(mixed.key(), Some("zero_text"));
}

#[test]
fn unknown_values_are_rejected() {
    let err = Enum::<Status>::from_json(r#""nope""#).unwrap_err();
    assert!(err.to_string().contains("not found in enum `Status`"), "{err}");

    let err = Enum::<Status>::from_json("[]").unwrap_err();
    assert!(err.is_data(), "{err}");
}

#[test]
fn pretty_output_uses_the_same_string_form() {
    let status = Status::cancelled().unwrap();
    assert_eq!(status.to_json_pretty().unwrap(), r#""cancelled""#);
}
