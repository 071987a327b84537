// Snapshot persistence for the active match
// JSON or MessagePack + LZ4 + SHA-256, behind an injected key-value store

pub mod error;
pub mod format;
pub mod store;

pub use error::SaveError;
pub use format::{
    decode_snapshot, decompress_and_deserialize, encode_snapshot, serialize_and_compress,
    SnapshotFormat,
};
pub use store::{FileSnapshotStore, InMemorySnapshotStore, SnapshotStore};
