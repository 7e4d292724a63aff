#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod articles;
pub mod daily;
pub mod entry;
pub mod stats;
