//! ECDSA signature recovery, verification, and public key reencoding over
//! secp256k1.
//!
//! This module operates on the compact wire encodings used by
//! recovery-capable ECDSA systems: 64-byte `r || s` signatures, 65-byte
//! `r || s || v` recoverable signatures, and SEC 1 public keys in compressed
//! (33-byte) or uncompressed (65-byte) form. Signatures produced by [sign](Context::sign)
//! are deterministic as specified in [RFC 6979](https://datatracker.ietf.org/doc/html/rfc6979)
//! and low-S normalized.
//!
//! The curve arithmetic itself lives in the `k256` crate and is reached only
//! through the private `engine` module. Operations borrow a shared [Context];
//! none of them retain state between calls.
//!
//! # Example
//! ```rust
//! use plasma_cryptography::secp256k1::{Context, KeyEncoding};
//!
//! let ctx = Context::new();
//! let digest = [0x07u8; 32];
//! let mut private_key = [0u8; 32];
//! private_key[31] = 0x01;
//!
//! let signature = ctx.sign(&digest, &private_key).unwrap();
//! let public_key = ctx.recover(&signature, &digest).unwrap();
//! assert!(ctx.verify(&signature[..64], &digest, &public_key).is_ok());
//!
//! // Reencode the recovered key in compressed form.
//! let compressed = ctx.reencode(&public_key, KeyEncoding::Compressed).unwrap();
//! assert_eq!(compressed.len(), 33);
//! ```

mod engine;

use thiserror::Error;

/// Length of a message digest in bytes.
pub const DIGEST_LENGTH: usize = 32;
/// Length of a private scalar in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;
/// Length of a compact `r || s` signature in bytes.
pub const SIGNATURE_LENGTH: usize = 64;
/// Length of a recoverable `r || s || v` signature in bytes.
pub const RECOVERABLE_SIGNATURE_LENGTH: usize = 65;
/// Length of a compressed SEC 1 public key in bytes.
pub const COMPRESSED_PUBLIC_KEY_LENGTH: usize = 33;
/// Length of an uncompressed SEC 1 public key in bytes.
pub const UNCOMPRESSED_PUBLIC_KEY_LENGTH: usize = 65;

/// A message digest, opaque to this module.
pub type Digest = [u8; DIGEST_LENGTH];

/// Errors returned by the operations in this module.
///
/// All of these are deterministic functions of the input; retrying changes
/// nothing, and none are fatal to the caller.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Signature bytes do not decode to two in-range non-zero scalars, have
    /// the wrong length, or carry an out-of-range recovery id.
    #[error("signature bytes do not decode to a compact signature")]
    MalformedSignature,
    /// The signature decodes but no curve point satisfies the recovery
    /// equation for the given recovery id and digest.
    #[error("no public key is recoverable from the signature")]
    RecoveryFailed,
    /// Public key length is not one of the two supported SEC 1 encodings.
    #[error("public key length {0} is not 33 or 65")]
    InvalidKeyLength(usize),
    /// Public key bytes do not decode to a point on the curve.
    #[error("public key bytes do not decode to a curve point")]
    InvalidPublicKey,
    /// Signature and key both parse but the ECDSA equation does not hold.
    /// This is a normal negative result, not a defect.
    #[error("signature is not valid for the public key and digest")]
    VerificationFailed,
    /// Private key bytes are not a scalar in `[1, order - 1]`.
    #[error("private key bytes are not a valid scalar")]
    InvalidPrivateKey,
    /// The engine failed to produce a signature.
    #[error("signing failed")]
    SigningFailed,
}

/// Serialized form of a public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEncoding {
    /// 33 bytes: parity prefix (`0x02`/`0x03`) followed by the x-coordinate.
    Compressed,
    /// 65 bytes: `0x04` followed by the x- and y-coordinates.
    Uncompressed,
}

impl KeyEncoding {
    /// Length of a public key serialized in this encoding.
    pub const fn serialized_len(&self) -> usize {
        match self {
            Self::Compressed => COMPRESSED_PUBLIC_KEY_LENGTH,
            Self::Uncompressed => UNCOMPRESSED_PUBLIC_KEY_LENGTH,
        }
    }

    /// Translate the legacy length-driven mode selection into an encoding.
    ///
    /// Only the two supported lengths are accepted. The length-based
    /// convention this shim replaces fell back to uncompressed output for any
    /// length other than 33; that tolerance is deliberately not preserved.
    pub fn from_serialized_len(len: usize) -> Result<Self, Error> {
        match len {
            COMPRESSED_PUBLIC_KEY_LENGTH => Ok(Self::Compressed),
            UNCOMPRESSED_PUBLIC_KEY_LENGTH => Ok(Self::Uncompressed),
            _ => Err(Error::InvalidKeyLength(len)),
        }
    }
}

/// Handle to the curve engine's shared state.
///
/// The engine precomputes its curve tables at compile time, so the handle
/// itself is zero-sized; it exists to keep the borrow-a-context calling
/// convention explicit rather than hiding engine access behind module-level
/// state. A single context may be borrowed concurrently by any number of
/// threads: every operation is a read-only, bounded-time computation and the
/// context is never mutated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Context {
    _opaque: (),
}

impl Context {
    /// Create a context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recover the signer's public key from a 65-byte recoverable signature
    /// and the signed digest.
    ///
    /// Returns the recovered key in uncompressed SEC 1 form. Fails with
    /// [Error::MalformedSignature] if the signature bytes or recovery id do
    /// not parse, and [Error::RecoveryFailed] if no valid point satisfies the
    /// recovery equation.
    pub fn recover(
        &self,
        signature: &[u8],
        digest: &Digest,
    ) -> Result<[u8; UNCOMPRESSED_PUBLIC_KEY_LENGTH], Error> {
        let (signature, recovery_id) = engine::parse_recoverable_signature(signature)?;
        let point = engine::recover_point(&signature, recovery_id, digest)?;
        let serialized = engine::serialize_point(&point, KeyEncoding::Uncompressed);
        let mut out = [0u8; UNCOMPRESSED_PUBLIC_KEY_LENGTH];
        out.copy_from_slice(&serialized);
        Ok(out)
    }

    /// Check a 64-byte compact signature against a serialized public key and
    /// the signed digest.
    ///
    /// The public key may be compressed or uncompressed. A signature that
    /// parses but does not satisfy the ECDSA equation yields
    /// [Error::VerificationFailed]; inputs that do not parse yield
    /// [Error::MalformedSignature], [Error::InvalidKeyLength], or
    /// [Error::InvalidPublicKey] so that malformed input remains
    /// distinguishable from logical invalidity.
    pub fn verify(&self, signature: &[u8], digest: &Digest, public_key: &[u8]) -> Result<(), Error> {
        let signature = engine::parse_compact_signature(signature)?;
        let point = engine::parse_point(public_key)?;
        engine::verify_point(&point, digest, &signature)
    }

    /// Reencode a serialized public key in the requested encoding.
    ///
    /// Parsing validates the input fully, so this doubles as an on-curve
    /// check for untrusted key material.
    pub fn reencode(&self, public_key: &[u8], encoding: KeyEncoding) -> Result<Vec<u8>, Error> {
        let point = engine::parse_point(public_key)?;
        Ok(engine::serialize_point(&point, encoding))
    }

    /// Sign a digest, producing a 65-byte `r || s || v` recoverable
    /// signature.
    ///
    /// The digest is signed as-is; hashing the message is the caller's
    /// responsibility, and the caller must ensure the digest cannot be chosen
    /// directly by an attacker.
    pub fn sign(
        &self,
        digest: &Digest,
        private_key: &[u8],
    ) -> Result<[u8; RECOVERABLE_SIGNATURE_LENGTH], Error> {
        engine::sign_recoverable(digest, private_key)
    }
}
