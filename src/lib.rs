//! Fence exchange messages.
//!
//! One side announces fence validity with [`FenceRequest`], the other answers
//! completion with [`FenceResponse`]. Both carry a single boolean at field 1
//! of the `Fence` protobuf schema; [`wire`] holds the codec entry points.

pub mod wire;

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct FenceRequest {
    #[prost(bool, tag = "1")]
    pub valid: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct FenceResponse {
    #[prost(bool, tag = "1")]
    pub complete: bool,
}

/// Pairs a request with the message type that answers it.
pub trait Request
where
    Self: prost::Message + Default,
{
    type Response: prost::Message + Default;
}

impl Request for FenceRequest {
    type Response = FenceResponse;
}
