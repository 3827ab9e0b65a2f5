// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod error;
pub mod filter;
pub mod literal;
pub mod log;
pub mod render;
pub mod types;

pub use error::Error;
pub use filter::{self_originated, RouteTable};
pub use render::{load, render, Format};
pub use types::*;

#[cfg(test)]
mod proptest;


pub const COMPONENT_RFILTER: &str = "rfilter";
pub const MOD_TABLE: &str = "table";
