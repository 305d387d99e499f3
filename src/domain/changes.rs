// src/domain/changes.rs

use crate::domain::{Listing, Snapshot};

/// Returns the listings of `current` whose id is not in `prior`, in `current` order.
pub fn find_new_listings(current: &[Listing], prior: &Snapshot) -> Vec<Listing> {
    current
        .iter()
        .filter(|listing| !prior.contains_key(&listing.id))
        .cloned()
        .collect()
}
