use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{error::TransferError, types::PlaylistId};

const PLAYLIST_SEGMENT: &str = "playlist/";

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn generate_state() -> String {
    random_alphanumeric(32)
}

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Extracts the playlist id from a Spotify playlist URL.
///
/// The id is everything between the first `playlist/` that is followed by a
/// non-empty id and the next `?` (or the end of the input), so
/// `https://open.spotify.com/playlist/37i9dQZF1DX9tPFwDMOaN1?si=03ab` yields
/// `37i9dQZF1DX9tPFwDMOaN1`.
pub fn parse_playlist_id(url: &str) -> Result<PlaylistId, TransferError> {
    url.match_indices(PLAYLIST_SEGMENT)
        .map(|(start, _)| &url[start + PLAYLIST_SEGMENT.len()..])
        .map(|rest| rest.split('?').next().unwrap_or_default())
        .find(|id| !id.is_empty())
        .map(|id| PlaylistId(id.to_string()))
        .ok_or_else(|| TransferError::Parse(url.to_string()))
}
