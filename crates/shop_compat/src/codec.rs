//! # Item Token Codec
//!
//! Serializes an item descriptor to a portable Base64 text token and back.
//!
//! The token wraps the item as the single field `i` of a TOML document and
//! Base64-encodes the rendered text. The document grammar is an internal
//! detail; callers treat tokens as opaque and only rely on the round trip
//! preserving similarity.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

#[derive(Serialize)]
struct EncodeDocument<'a, T: Serialize> {
    i: &'a T,
}

#[derive(Deserialize)]
struct DecodeDocument<T> {
    i: Option<T>,
}

/// Errors raised while encoding or decoding an item token.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to render item document: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("invalid base64 token: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("item document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to parse item document: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Encodes an item descriptor as a Base64 text token.
///
/// # Examples
///
/// ```rust
/// use shop_compat::{decode_item, encode_item, ItemStack};
///
/// let token = encode_item(&ItemStack::new("emerald", 16))?;
/// let back: ItemStack = decode_item(&token).unwrap();
/// assert_eq!(back.material, "emerald");
/// # Ok::<(), shop_compat::CodecError>(())
/// ```
pub fn encode_item<T: Serialize>(item: &T) -> Result<String, CodecError> {
    let text = toml::to_string(&EncodeDocument { i: item })?;
    Ok(STANDARD.encode(text.as_bytes()))
}

/// Decodes an item token, surfacing failures as a typed error.
///
/// `Ok(None)` means the token carried a well-formed document with no item
/// field in it.
pub fn try_decode_item<T: DeserializeOwned>(token: &str) -> Result<Option<T>, CodecError> {
    let bytes = STANDARD.decode(token)?;
    let text = String::from_utf8(bytes)?;
    let document: DecodeDocument<T> = toml::from_str(&text)?;
    Ok(document.i)
}

/// Decodes an item token, converting any failure into a logged `None`.
///
/// This is the soft-failure entry point for plugin call sites: it never
/// panics and never propagates an error.
pub fn decode_item<T: DeserializeOwned>(token: &str) -> Option<T> {
    match try_decode_item(token) {
        Ok(item) => item,
        Err(err) => {
            error!("Failed to decode item token: {}", err);
            None
        }
    }
}
