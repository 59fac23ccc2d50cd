mod common;
pub use self::common::Query;

mod options;
pub use self::options::{Filter, OrderBy, PrintType, Projection, SearchOptions};

mod volume;
pub use self::volume::{build_query, SearchCategory, SearchQuery, VOLUMES_ENDPOINT, VOLUMES_PATH};
