//! Narrow interface to the curve engine (`k256`).
//!
//! Everything above this module speaks fixed-size byte buffers and the opaque
//! engine types re-exported here; nothing else in the crate touches `k256`
//! directly. Each primitive either returns a fully valid value or fails, so
//! partially parsed signatures and off-curve points never escape.

use super::{
    Error, KeyEncoding, DIGEST_LENGTH, PRIVATE_KEY_LENGTH, RECOVERABLE_SIGNATURE_LENGTH,
    SIGNATURE_LENGTH,
};
use k256::ecdsa::{
    signature::hazmat::PrehashVerifier, RecoveryId, Signature, SigningKey, VerifyingKey,
};

/// Parse a 64-byte `r || s` compact signature into the engine representation.
///
/// Fails if either scalar is zero or not below the curve order.
pub(super) fn parse_compact_signature(bytes: &[u8]) -> Result<Signature, Error> {
    if bytes.len() != SIGNATURE_LENGTH {
        return Err(Error::MalformedSignature);
    }
    Signature::from_slice(bytes).map_err(|_| Error::MalformedSignature)
}

/// Parse a 65-byte `r || s || v` recoverable compact signature.
pub(super) fn parse_recoverable_signature(
    bytes: &[u8],
) -> Result<(Signature, RecoveryId), Error> {
    if bytes.len() != RECOVERABLE_SIGNATURE_LENGTH {
        return Err(Error::MalformedSignature);
    }
    let signature = parse_compact_signature(&bytes[..SIGNATURE_LENGTH])?;
    let recovery_id =
        RecoveryId::from_byte(bytes[SIGNATURE_LENGTH]).ok_or(Error::MalformedSignature)?;
    Ok((signature, recovery_id))
}

/// Compute the unique curve point consistent with `(r, s, v, digest)`.
///
/// Fails if `r` (after the transform implied by the recovery id) is not a
/// valid x-coordinate or the recovered point is the identity.
pub(super) fn recover_point(
    signature: &Signature,
    recovery_id: RecoveryId,
    digest: &[u8; DIGEST_LENGTH],
) -> Result<VerifyingKey, Error> {
    VerifyingKey::recover_from_prehash(digest, signature, recovery_id)
        .map_err(|_| Error::RecoveryFailed)
}

/// Check the ECDSA verification equation for a parsed signature and point.
///
/// High-S/low-S acceptance is the engine default and is not altered here.
pub(super) fn verify_point(
    point: &VerifyingKey,
    digest: &[u8; DIGEST_LENGTH],
    signature: &Signature,
) -> Result<(), Error> {
    point
        .verify_prehash(digest, signature)
        .map_err(|_| Error::VerificationFailed)
}

/// Parse a SEC 1 serialized public key (compressed or uncompressed).
///
/// The supported lengths are validated here so that a bad length and bad
/// bytes surface as distinct errors. The prefix byte is checked explicitly
/// before handing off to the engine: the engine's SEC 1 parser also accepts
/// the compact encoding (tag `0x05`), which is not a supported form.
pub(super) fn parse_point(bytes: &[u8]) -> Result<VerifyingKey, Error> {
    let prefix_ok = match KeyEncoding::from_serialized_len(bytes.len())? {
        KeyEncoding::Compressed => bytes[0] == 0x02 || bytes[0] == 0x03,
        KeyEncoding::Uncompressed => bytes[0] == 0x04,
    };
    if !prefix_ok {
        return Err(Error::InvalidPublicKey);
    }
    VerifyingKey::from_sec1_bytes(bytes).map_err(|_| Error::InvalidPublicKey)
}

/// Serialize a point in the requested encoding.
pub(super) fn serialize_point(point: &VerifyingKey, encoding: KeyEncoding) -> Vec<u8> {
    point
        .to_encoded_point(matches!(encoding, KeyEncoding::Compressed))
        .as_bytes()
        .to_vec()
}

/// Produce a recoverable `r || s || v` signature over `digest`.
///
/// Signatures are deterministic (RFC 6979) and low-S normalized, with the
/// recovery id adjusted to match.
pub(super) fn sign_recoverable(
    digest: &[u8; DIGEST_LENGTH],
    private_key: &[u8],
) -> Result<[u8; RECOVERABLE_SIGNATURE_LENGTH], Error> {
    if private_key.len() != PRIVATE_KEY_LENGTH {
        return Err(Error::InvalidPrivateKey);
    }
    let signer = SigningKey::from_slice(private_key).map_err(|_| Error::InvalidPrivateKey)?;
    let (signature, recovery_id) = signer
        .sign_prehash_recoverable(digest)
        .map_err(|_| Error::SigningFailed)?;
    let mut out = [0u8; RECOVERABLE_SIGNATURE_LENGTH];
    out[..SIGNATURE_LENGTH].copy_from_slice(signature.to_bytes().as_slice());
    out[SIGNATURE_LENGTH] = recovery_id.to_byte();
    Ok(out)
}
