//! Recover, verify, and reencode secp256k1 ECDSA signatures and public keys.
//!
//! All operations are per-call stateless: a caller creates one long-lived
//! [secp256k1::Context] and borrows it into each call. The context is safe to
//! share across threads.
//!
//! # Example
//! ```rust
//! use plasma_cryptography::secp256k1::Context;
//!
//! let ctx = Context::new();
//! let digest = [0x42u8; 32];
//! let private_key = [0x01u8; 32];
//!
//! // Sign the digest, producing a 65-byte recoverable signature.
//! let signature = ctx.sign(&digest, &private_key).unwrap();
//!
//! // Recover the signer's public key and check the signature against it.
//! let public_key = ctx.recover(&signature, &digest).unwrap();
//! assert!(ctx.verify(&signature[..64], &digest, &public_key).is_ok());
//! ```

pub mod address;
pub mod secp256k1;
