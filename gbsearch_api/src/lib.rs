mod client;
mod errors;
mod query;
mod transport;
pub mod types;
pub use self::client::{search, Client, API_BASE_URL};
pub use self::errors::{DecodeError, Error, TransportError};
pub use self::query::{
    build_query, Filter, OrderBy, PrintType, Projection, Query, SearchCategory, SearchOptions,
    SearchQuery, VOLUMES_ENDPOINT, VOLUMES_PATH,
};
pub use self::transport::{HttpResponse, HttpTransport, Transport};
