//! Enum types shared by the integration tests.

#![allow(dead_code)]

use constenum::prelude::*;

/// Route `tracing` output through the test harness; `RUST_LOG=constenum=debug` shows descriptor builds.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

#[derive(ConstEnum)]
#[const_enum(default = draft)]
#[constants(draft = "draft", active = "active", archived = "archived", cancelled = "cancelled")]
pub struct Status;

/// Shares `Status`'s constants, adds `processing`, and declares no default.
#[derive(ConstEnum)]
#[const_enum(extends = Status)]
#[constants(processing = "processing")]
pub struct StatusNoDefault;

#[derive(ConstEnum)]
#[const_enum(nullable)]
#[constants(low = 1, medium = 5, high = 9)]
pub struct Priority;

#[derive(ConstEnum)]
#[const_enum(default = "0")]
#[constants(zero_text = "0", zero = 0, negative = -1, half = 0.5, yes = true)]
pub struct Mixed;

/// Two names share one value; value lookups land on the first.
#[derive(ConstEnum)]
#[constants(colour = "colour", color = "colour", grey = "grey")]
pub struct Spelling;

#[derive(ConstEnum)]
pub struct Empty;
