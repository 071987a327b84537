use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};

use super::error::SaveError;
use crate::models::MatchState;

const CHECKSUM_LEN: usize = 32;
const SIZE_PREFIX_LEN: usize = 4;

/// On-disk encoding of a [`MatchState`] snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotFormat {
    /// Plain JSON in the browser snapshot layout.
    #[default]
    Json,
    /// MessagePack, LZ4-compressed, with a SHA-256 trailer.
    Packed,
}

pub fn encode_snapshot(state: &MatchState, format: SnapshotFormat) -> Result<Vec<u8>, SaveError> {
    match format {
        SnapshotFormat::Json => Ok(serde_json::to_vec(state)?),
        SnapshotFormat::Packed => serialize_and_compress(state),
    }
}

pub fn decode_snapshot(bytes: &[u8], format: SnapshotFormat) -> Result<MatchState, SaveError> {
    match format {
        SnapshotFormat::Json => Ok(serde_json::from_slice(bytes)?),
        SnapshotFormat::Packed => decompress_and_deserialize(bytes),
    }
}

/// Packed frame: `[u32 size][lz4(msgpack)][sha256 of everything before it]`.
pub fn serialize_and_compress(state: &MatchState) -> Result<Vec<u8>, SaveError> {
    let msgpack = to_vec_named(state).map_err(SaveError::Serialization)?;
    let mut frame = compress_prepend_size(&msgpack);
    let digest = Sha256::digest(&frame);
    frame.extend_from_slice(&digest);
    Ok(frame)
}

/// Inverse of [`serialize_and_compress`]; the trailer is verified before
/// anything is decompressed.
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<MatchState, SaveError> {
    let Some(body_len) = bytes.len().checked_sub(CHECKSUM_LEN) else {
        return Err(SaveError::Corrupted);
    };
    if body_len < SIZE_PREFIX_LEN {
        return Err(SaveError::Corrupted);
    }

    let (body, trailer) = bytes.split_at(body_len);
    if Sha256::digest(body).as_slice() != trailer {
        return Err(SaveError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(body).map_err(|_| SaveError::Decompression)?;
    from_slice(&msgpack).map_err(SaveError::Deserialization)
}
