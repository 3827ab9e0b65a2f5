// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    error::Error,
    types::{netmask_is_contiguous, Route},
};
#[cfg(feature = "clap")]
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
pub enum Format {
    /// Rust debug rendering of the route list.
    #[default]
    Debug,
    /// Compact JSON array.
    Json,
}

/// Render a route list as a single line.
pub fn render(routes: &[Route], format: Format) -> Result<String, Error> {
    match format {
        Format::Debug => Ok(format!("{:?}", routes)),
        Format::Json => Ok(serde_json::to_string(routes)?),
    }
}

/// Load a JSON array of routes from `path`. Every route must carry all of
/// its fields and a contiguous netmask.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Route>, Error> {
    let text = std::fs::read_to_string(path)?;
    let routes: Vec<Route> = serde_json::from_str(&text)?;
    if let Some(r) = routes.iter().find(|r| !netmask_is_contiguous(r.netmask))
    {
        return Err(Error::Netmask(r.netmask.to_string()));
    }
    Ok(routes)
}
