// Copyright (C) 2025 The pascal-rs Authors.
//
// client/endpoint_selector.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::{RpcError, RpcResult};
use pascal_config::EndPoint;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::trace;

/// Picks the endpoint each request is sent to.
///
/// With a single endpoint it is always used; with several, one is chosen
/// uniformly at random per request.
#[derive(Clone, Debug, Default)]
pub struct EndpointSelector {
    endpoints: Arc<[EndPoint]>,
}

impl EndpointSelector {
    #[must_use]
    pub fn new(endpoints: Vec<EndPoint>) -> Self {
        Self {
            endpoints: endpoints.into(),
        }
    }

    /// Returns `overrides` as a selector when non empty, otherwise a clone of `self`.
    #[must_use]
    pub fn or_overrides(&self, overrides: &[EndPoint]) -> Self {
        if overrides.is_empty() {
            self.clone()
        } else {
            Self::new(overrides.to_vec())
        }
    }

    #[must_use]
    pub fn endpoints(&self) -> &[EndPoint] {
        &self.endpoints
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Chooses the endpoint for the next request.
    ///
    /// # Errors
    ///
    /// Returns `RpcError::NoEndPoint` when the list is empty.
    pub fn select(&self) -> RpcResult<&EndPoint> {
        let endpoint = match self.endpoints.as_ref() {
            [] => return Err(RpcError::NoEndPoint),
            [single] => single,
            many => many.choose(&mut rand::thread_rng()).ok_or(RpcError::NoEndPoint)?,
        };
        trace!(target: "pascal_rpc::endpoint", endpoint = %endpoint, "endpoint selected");
        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn endpoint(host: &str) -> EndPoint {
        EndPoint::with_host(host).expect("endpoint")
    }

    #[test]
    fn empty_list_fails() {
        let selector = EndpointSelector::new(Vec::new());
        assert!(matches!(selector.select(), Err(RpcError::NoEndPoint)));
    }

    #[test]
    fn single_endpoint_is_always_used() {
        let selector = EndpointSelector::new(vec![endpoint("10.0.0.1")]);
        for _ in 0..10 {
            assert_eq!(selector.select().expect("endpoint").host(), "10.0.0.1");
        }
    }

    #[test]
    fn several_endpoints_are_all_reachable() {
        let selector = EndpointSelector::new(vec![
            endpoint("10.0.0.1"),
            endpoint("10.0.0.2"),
            endpoint("10.0.0.3"),
        ]);
        let seen: HashSet<String> = (0..300)
            .map(|_| selector.select().expect("endpoint").host().to_string())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn overrides_replace_defaults_only_when_given() {
        let selector = EndpointSelector::new(vec![endpoint("10.0.0.1")]);
        let same = selector.or_overrides(&[]);
        assert_eq!(same.endpoints(), selector.endpoints());

        let other = selector.or_overrides(&[endpoint("10.0.0.9")]);
        assert_eq!(other.select().expect("endpoint").host(), "10.0.0.9");
    }
}
