mod path_pattern;
pub use path_pattern::{PathPattern, Segment};

mod route_table;
pub use route_table::RouteTable;
