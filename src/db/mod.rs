pub mod snapshots;

pub use snapshots::SnapshotStore;
