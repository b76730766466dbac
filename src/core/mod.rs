//! Core credential generation logic.

pub mod rpcauth;
