// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("malformed address {0}")]
    Address(String),

    #[error("non-contiguous netmask {0}")]
    Netmask(String),

    #[error("unknown origin {0}, must be IGP, EGP or INCOMPLETE")]
    Origin(String),

    #[error("io error {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error {0}")]
    Serialization(#[from] serde_json::Error),
}
