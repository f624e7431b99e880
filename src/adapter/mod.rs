mod route_adapter;
pub use route_adapter::RouteAdapter;

mod http_adapter;
pub use http_adapter::HttpAdapter;

mod axum_adapter;
pub use axum_adapter::AxumAdapter;

mod axum_route_adapter;
pub use axum_route_adapter::AxumRouteAdapter;
