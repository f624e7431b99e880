pub mod middleware;

mod handler;
pub use handler::{BoxFuture, ErrorHandler, NotFoundHandler, RouteHandler};
