#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod action;
pub mod bus;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod toast;
pub mod widget;

pub type Result<T> = std::result::Result<T, error::Error>;
