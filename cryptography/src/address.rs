//! Derive 20-byte account addresses from secp256k1 public keys.
//!
//! An address is the last 20 bytes of the Keccak-256 hash of the uncompressed
//! public key body (both coordinates, without the `0x04` prefix).

use sha3::{Digest, Keccak256};

use crate::secp256k1::UNCOMPRESSED_PUBLIC_KEY_LENGTH;

/// Length of an account address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// A 20-byte account address.
pub type Address = [u8; ADDRESS_LENGTH];

/// Derive the address of a public key.
///
/// Accepts the 65-byte uncompressed SEC 1 encoding (the prefix byte is
/// skipped) or the 64-byte raw `x || y` coordinate pair. Any other length
/// yields `None`.
///
/// The input is hashed as-is with no curve validation; callers holding
/// untrusted key material should validate it first (for example with
/// [crate::secp256k1::Context::reencode]).
pub fn public_key_to_address(public_key: &[u8]) -> Option<Address> {
    let body = match public_key.len() {
        UNCOMPRESSED_PUBLIC_KEY_LENGTH => &public_key[1..],
        len if len == UNCOMPRESSED_PUBLIC_KEY_LENGTH - 1 => public_key,
        _ => return None,
    };
    let hash = Keccak256::digest(body);
    let mut address = [0u8; ADDRESS_LENGTH];
    address.copy_from_slice(&hash[hash.len() - ADDRESS_LENGTH..]);
    Some(address)
}
