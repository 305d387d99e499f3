pub mod changes;
pub mod listing;

pub use changes::find_new_listings;
pub use listing::{Listing, Snapshot};
