// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

const REPLENISH_PER_SECOND: u64 = 2;
const BURST_SIZE: u32 = 10;

pub type AuthRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter for the credential endpoints. Keys come from
/// forwarding headers first and the peer address otherwise, so the server must
/// be run with connect info.
pub fn rate_limit_layer() -> Option<AuthRateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(REPLENISH_PER_SECOND);
    builder.burst_size(BURST_SIZE);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
