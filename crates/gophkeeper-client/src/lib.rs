//! Client-side RPC connection and local token persistence for GophKeeper
//! (C5 TokenStore, C12 RpcClient).

pub mod client;
pub mod error;
pub mod token_store;

pub use client::GophKeeperClient;
pub use error::{Error, Result};
pub use token_store::TokenStore;
