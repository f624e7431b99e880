mod chain;
pub use chain::{ChainOutcome, MiddlewareChain};

pub mod cors;
pub use cors::{CorsConfig, CorsMiddleware, CorsNegotiation};

mod static_assets;
pub use static_assets::StaticAssets;

mod logger;
pub use logger::LoggerMiddleware;

// Re-export core traits
pub use crate::traits_helpers::middleware::{
    Flow, FunctionalMiddleware, Middleware, MiddlewareFn, MiddlewareResult,
};
