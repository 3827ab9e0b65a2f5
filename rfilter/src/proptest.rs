// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property-based tests for route table filtering using proptest

#[cfg(test)]
mod proptest {
    use crate::filter::{self_originated, RouteTable};
    use crate::test::logger;
    use crate::types::{Origin, Route};
    use proptest::prelude::*;
    use std::net::Ipv4Addr;

    fn origin_strategy() -> impl Strategy<Value = Origin> {
        prop_oneof![
            Just(Origin::Igp),
            Just(Origin::Egp),
            Just(Origin::Incomplete),
        ]
    }

    // Routes with arbitrary field values. The netmask is always contiguous.
    fn route_strategy() -> impl Strategy<Value = Route> {
        (
            any::<u32>(),
            0u32..=32u32,
            any::<u32>(),
            prop::collection::vec(any::<u32>(), 0..6),
            origin_strategy(),
            any::<bool>(),
            any::<u32>(),
        )
            .prop_map(|(network, len, local_pref, as_path, origin, so, peer)| {
                let mask = if len == 0 { 0 } else { u32::MAX << (32 - len) };
                Route {
                    network: Ipv4Addr::from(network),
                    netmask: Ipv4Addr::from(mask),
                    local_pref,
                    as_path,
                    origin,
                    self_origin: so,
                    peer: Ipv4Addr::from(peer),
                }
            })
    }

    // Route lists where each route's position is recorded in its local_pref,
    // so the original order can be recovered from the survivors.
    fn indexed_routes_strategy() -> impl Strategy<Value = Vec<Route>> {
        prop::collection::vec(route_strategy(), 0..32).prop_map(|routes| {
            routes
                .into_iter()
                .enumerate()
                .map(|(i, mut r)| {
                    r.local_pref = i as u32;
                    r
                })
                .collect()
        })
    }

    proptest! {
        /// Property: survivors are exactly the self-originated routes, in
        /// their original relative order
        #[test]
        fn prop_order_preserved(routes in indexed_routes_strategy()) {
            let expected: Vec<u32> = routes
                .iter()
                .filter(|r| r.self_origin)
                .map(|r| r.local_pref)
                .collect();

            let mut table = RouteTable::new(routes, logger());
            table.retain_self_originated();
            let got: Vec<u32> =
                table.routes().iter().map(|r| r.local_pref).collect();

            prop_assert_eq!(got, expected);
        }

        /// Property: filtering never alters the fields of a surviving route
        #[test]
        fn prop_fields_unchanged(routes in indexed_routes_strategy()) {
            let mut table = RouteTable::new(routes.clone(), logger());
            table.retain_self_originated();

            for r in table.routes() {
                let original = &routes[r.local_pref as usize];
                prop_assert_eq!(r, original);
            }
        }

        /// Property: in-place filtering and copying selection agree
        #[test]
        fn prop_in_place_matches_copy(routes in prop::collection::vec(route_strategy(), 0..32)) {
            let copied = self_originated(&routes);

            let mut table = RouteTable::new(routes.clone(), logger());
            let removed = table.retain_self_originated();

            prop_assert_eq!(removed, routes.len() - copied.len());
            prop_assert_eq!(table.into_routes(), copied);
        }

        /// Property: filtering an already filtered table removes nothing
        #[test]
        fn prop_refilter_noop(routes in prop::collection::vec(route_strategy(), 0..32)) {
            let mut table = RouteTable::new(routes, logger());
            table.retain_self_originated();
            let once = table.routes().to_vec();

            prop_assert_eq!(table.retain_self_originated(), 0);
            prop_assert_eq!(table.routes(), &once[..]);
            prop_assert!(table.routes().iter().all(|r| r.self_origin));
        }
    }
}
