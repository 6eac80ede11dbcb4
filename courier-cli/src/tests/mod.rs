//! Shared test harness modules for the Courier CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod compare_unit;
mod helpers;
