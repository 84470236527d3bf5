// Copyright (C) 2025 The pascal-rs Authors.
//
// models/mod.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Wire envelopes and the entities the rich API maps node results into.

mod account;
mod block;
mod connection;
mod error;
mod operation;
mod operation_parts;
mod public_key;
mod rpc_request;
mod rpc_response;
mod status;

pub use account::Account;
pub use block::Block;
pub use connection::Connection;
pub use error::{ModelError, ModelResult};
pub use operation::Operation;
pub use operation_parts::{Changer, Receiver, Sender};
pub use public_key::PublicKey;
pub use rpc_request::RpcRequest;
pub use rpc_response::{RpcResponse, RpcResponseError};
pub use status::{NetStats, NodeServer, Status};

/// A JSON object as received from the node.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
