// Copyright (C) 2025 The pascal-rs Authors.
//
// client/mod.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! PascalCoin RPC client.
//!
//! The dispatch path is `RawApi -> RpcDispatcher -> EndpointSelector -> Transport`.
//! Rich facades sit on top of [`RawApi`] and map its results into entities.

mod dispatcher;
mod endpoint_selector;
mod fields;
pub mod models;
mod pascal_client;
pub mod params;
mod raw_api;
pub mod rich;
mod transport;

#[cfg(test)]
pub(crate) mod fixture;

pub use dispatcher::{next_request_id, RpcDispatcher};
pub use endpoint_selector::EndpointSelector;
pub use pascal_client::PascalClient;
pub use raw_api::RawApi;
pub use transport::{HttpTransport, Transport, TransportError};
