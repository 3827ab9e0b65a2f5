// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A single route-like record. Every field is always present; the
/// serialized keys keep the names the record table was written with.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Route {
    pub network: Ipv4Addr,
    pub netmask: Ipv4Addr,
    #[serde(rename = "localpref")]
    pub local_pref: u32,
    #[serde(rename = "ASPath")]
    pub as_path: Vec<u32>,
    pub origin: Origin,
    #[serde(rename = "selfOrigin")]
    pub self_origin: bool,
    pub peer: Ipv4Addr,
}

impl Route {
    /// Build a route from the text form used by literal record tables.
    /// ```
    /// use rfilter::{Origin, Route};
    /// let r = Route::parse(
    ///     "10.1.0.0", "255.255.0.0", 100, &[64500], "egp", true, "10.0.0.1",
    /// ).unwrap();
    /// assert_eq!(r.origin, Origin::Egp);
    /// assert!(r.self_origin);
    /// ```
    pub fn parse(
        network: &str,
        netmask: &str,
        local_pref: u32,
        as_path: &[u32],
        origin: &str,
        self_origin: bool,
        peer: &str,
    ) -> Result<Self, Error> {
        let netmask = parse_addr(netmask)?;
        if !netmask_is_contiguous(netmask) {
            return Err(Error::Netmask(netmask.to_string()));
        }
        Ok(Self {
            network: parse_addr(network)?,
            netmask,
            local_pref,
            as_path: as_path.to_vec(),
            origin: origin.parse()?,
            self_origin,
            peer: parse_addr(peer)?,
        })
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[network={}, netmask={}, peer={}, self_origin={}]",
            self.network, self.netmask, self.peer, self.self_origin
        )
    }
}

fn parse_addr(s: &str) -> Result<Ipv4Addr, Error> {
    s.parse().map_err(|_| Error::Address(s.to_string()))
}

/// A netmask is contiguous when all of its one bits precede all of its
/// zero bits.
pub fn netmask_is_contiguous(mask: Ipv4Addr) -> bool {
    let inverted = !u32::from(mask);
    inverted & inverted.wrapping_add(1) == 0
}

#[derive(
    Debug, Copy, Clone, Serialize, Deserialize, Eq, PartialEq, Hash,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Origin {
    Igp,
    Egp,
    Incomplete,
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Igp => write!(f, "IGP"),
            Origin::Egp => write!(f, "EGP"),
            Origin::Incomplete => write!(f, "INCOMPLETE"),
        }
    }
}

impl FromStr for Origin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IGP" => Ok(Self::Igp),
            "EGP" => Ok(Self::Egp),
            "INCOMPLETE" => Ok(Self::Incomplete),
            _ => Err(Error::Origin(s.to_string())),
        }
    }
}
