#![no_std]

//! Groth16 (BN254) verifier for commit-reveal moves.
//!
//! A player commits `keccak256(be32(move) || salt)` and later reveals `move`
//! together with a Groth16 proof of knowledge of `salt`. The relation's public
//! inputs are the commitment, split into two 128-bit limbs so that any 32-byte
//! digest is a canonical scalar, followed by the move:
//!
//! ```text
//! [ commitment[0..16], commitment[16..32], move ]
//! ```
//!
//! Points and scalars are decoded and validated with `ark-bn254`; the
//! multi-scalar step and the pairing check run on the Soroban BN254 host
//! functions.

pub mod commitment;
pub mod encoding;
pub mod verifier;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod test;

pub use commitment::commit;
pub use encoding::{Proof, VerificationKey, PROOF_SIZE, PUBLIC_INPUTS, VK_SIZE};
pub use verifier::{verify, CommitVerifier, VerifyError};
