// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{error::Error, literal, log::rfilter_log, types::Route};
use slog::Logger;

/// An ordered table of routes. The table has no uniqueness constraint and
/// keeps routes in the order they were given.
#[derive(Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    log: Logger,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>, log: Logger) -> Self {
        Self { routes, log }
    }

    /// A table holding the built-in records.
    pub fn literal(log: Logger) -> Result<Self, Error> {
        Ok(Self::new(literal::routes()?, log))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Remove, in place, every route for which `keep` returns false.
    ///
    /// Each route is visited exactly once, so adjacent removals never cause
    /// a route to be skipped. Surviving routes keep their relative order and
    /// their field values. Returns the number of routes removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Route) -> bool,
    {
        let before = self.routes.len();
        self.routes.retain(|r| {
            let k = keep(r);
            if !k {
                rfilter_log!(self, trace, "dropping route {}", r;
                    "network" => r.network.to_string()
                );
            }
            k
        });
        let removed = before - self.routes.len();
        rfilter_log!(self, debug, "filtered route table";
            "before" => before,
            "after" => self.routes.len(),
            "removed" => removed
        );
        removed
    }

    /// Keep only routes that were originated by this router.
    pub fn retain_self_originated(&mut self) -> usize {
        self.retain(|r| r.self_origin)
    }
}

/// Select the self-originated routes into a new vector, leaving `routes`
/// untouched.
pub fn self_originated(routes: &[Route]) -> Vec<Route> {
    routes.iter().filter(|r| r.self_origin).cloned().collect()
}
