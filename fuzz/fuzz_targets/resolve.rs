#![no_main]

use constenum::prelude::*;
use libfuzzer_sys::fuzz_target;

#[derive(ConstEnum)]
#[const_enum(default = draft)]
#[constants(draft = "draft", active = "active", archived = "archived", cancelled = "cancelled", zero = 0)]
struct Status;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Name-or-value resolution: success must land on a declared key.
        if let Ok(member) = Enum::<Status>::from_name(s) {
            let key = member.key().expect("resolved member has a key");
            assert!(Enum::<Status>::keys().contains(&key));
            assert_eq!(Enum::<Status>::ordinals()[key], member.ordinal().expect("resolved member has an ordinal"));
        }
        // JSON boundary: whatever parses must be a declared member.
        if let Ok(member) = serde_json::from_str::<Enum<Status>>(s) {
            assert!(!member.is_unset());
        }
    }
});
