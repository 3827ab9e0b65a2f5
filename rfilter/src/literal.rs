// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The built-in record table.

use crate::{error::Error, types::Route};

/// network, netmask, localpref, ASPath, origin, selfOrigin, peer
type Row = (
    &'static str,
    &'static str,
    u32,
    &'static [u32],
    &'static str,
    bool,
    &'static str,
);

const ROUTES: [Row; 3] = [
    (
        "192.168.1.0",
        "255.255.255.0",
        100,
        &[1],
        "EGP",
        true,
        "192.168.0.2",
    ),
    ("172.169.0.0", "255.255.0.0", 100, &[2], "EGP", true, "172.168.0.2"),
    ("11.0.0.0", "255.0.0.0", 100, &[3], "EGP", false, "10.0.0.2"),
];

/// Parse the built-in table, in table order.
pub fn routes() -> Result<Vec<Route>, Error> {
    ROUTES
        .iter()
        .map(|&(network, netmask, local_pref, as_path, origin, so, peer)| {
            Route::parse(network, netmask, local_pref, as_path, origin, so, peer)
        })
        .collect()
}
