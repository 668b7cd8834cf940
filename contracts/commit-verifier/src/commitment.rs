//! Reference move commitment.
//!
//! ```text
//! commitment = keccak256(be32(move) || salt)
//! ```
//!
//! The same binding is computed inside the reveal circuit. The contract never
//! calls this; it only stores digests and checks proofs against them. It is
//! exposed for off-chain tooling and tests.

use soroban_sdk::{Bytes, BytesN, Env};

pub fn commit(env: &Env, move_val: u32, salt: &BytesN<32>) -> BytesN<32> {
    let mut preimage = Bytes::from_array(env, &move_val.to_be_bytes());
    preimage.append(&Bytes::from_array(env, &salt.to_array()));
    env.crypto().keccak256(&preimage).into()
}
