mod de;

mod response;
pub use self::response::{Item, SearchInfo, SearchResponse};

mod volume;
pub use self::volume::{Dimensions, ImageLinks, IndustryIdentifier, VolumeInfo};

mod sale;
pub use self::sale::{Offer, Price, SaleInfo};

mod access;
pub use self::access::{AccessInfo, Availability};
