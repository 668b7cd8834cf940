//! Deterministic verification keys and proofs for unit tests.
//!
//! The key is a degenerate "trapdoor" setup: α = G1 and β = γ = δ = G2, so
//! the Groth16 equation reduces to
//!
//! ```text
//! e(A, G2) = e(α + vk_x + C, G2)
//! ```
//!
//! and `A = α + vk_x`, `B = G2`, `C = O` is accepted exactly for the public
//! inputs that produced `vk_x`. A proof built for one (commitment, move) pair
//! therefore fails for any other pair, which is all the contract can observe
//! of a real circuit. Never deploy this key.

use soroban_sdk::{
    crypto::bn254::{Bn254G1Affine, Fr},
    Bytes, BytesN, Env,
};

use crate::encoding::{public_inputs, G1_SIZE, G2_SIZE, PUBLIC_INPUTS};

/// G1 generator (1, 2).
pub fn g1_generator() -> [u8; G1_SIZE] {
    let mut bytes = [0u8; G1_SIZE];
    bytes[31] = 1;
    bytes[63] = 2;
    bytes
}

/// The G1 point at infinity.
pub const G1_ZERO: [u8; G1_SIZE] = [0u8; G1_SIZE];

/// G2 generator from EIP-197, `be(X.c1) || be(X.c0) || be(Y.c1) || be(Y.c0)`.
pub const G2_GENERATOR: [u8; G2_SIZE] = [
    // X.c1
    0x19, 0x8e, 0x93, 0x93, 0x92, 0x0d, 0x48, 0x3a, 0x72, 0x60, 0xbf, 0xb7, 0x31, 0xfb, 0x5d, 0x25,
    0xf1, 0xaa, 0x49, 0x33, 0x35, 0xa9, 0xe7, 0x12, 0x97, 0xe4, 0x85, 0xb7, 0xae, 0xf3, 0x12, 0xc2,
    // X.c0
    0x18, 0x00, 0xde, 0xef, 0x12, 0x1f, 0x1e, 0x76, 0x42, 0x6a, 0x00, 0x66, 0x5e, 0x5c, 0x44, 0x79,
    0x67, 0x43, 0x22, 0xd4, 0xf7, 0x5e, 0xda, 0xdd, 0x46, 0xde, 0xbd, 0x5c, 0xd9, 0x92, 0xf6, 0xed,
    // Y.c1
    0x09, 0x06, 0x89, 0xd0, 0x58, 0x5f, 0xf0, 0x75, 0xec, 0x9e, 0x99, 0xad, 0x69, 0x0c, 0x33, 0x95,
    0xbc, 0x4b, 0x31, 0x33, 0x70, 0xb3, 0x8e, 0xf3, 0x55, 0xac, 0xda, 0xdc, 0xd1, 0x22, 0x97, 0x5b,
    // Y.c0
    0x12, 0xc8, 0x5e, 0xa5, 0xdb, 0x8c, 0x6d, 0xeb, 0x4a, 0xab, 0x71, 0x80, 0x8d, 0xcb, 0x40, 0x8f,
    0xe3, 0xd1, 0xe7, 0x69, 0x0c, 0x43, 0xd3, 0x7b, 0x4c, 0xe6, 0xcc, 0x01, 0x66, 0xfa, 0x7d, 0xaa,
];

pub struct TestKey {
    env: Env,
    ic: [[u8; G1_SIZE]; PUBLIC_INPUTS + 1],
}

impl TestKey {
    /// IC = [O, G1, 2·G1, 3·G1].
    pub fn new(env: &Env) -> Self {
        let bn254 = env.crypto().bn254();
        let g = Bn254G1Affine::from_bytes(BytesN::from_array(env, &g1_generator()));
        let two_g = bn254.g1_add(&g, &g);
        let three_g = bn254.g1_add(&two_g, &g);
        Self {
            env: env.clone(),
            ic: [
                G1_ZERO,
                g1_generator(),
                two_g.to_bytes().to_array(),
                three_g.to_bytes().to_array(),
            ],
        }
    }

    /// Serialized key in the layout `CommitVerifier::new` expects.
    pub fn to_bytes(&self) -> Bytes {
        let env = &self.env;
        let mut out = Bytes::from_array(env, &g1_generator());
        for _ in 0..3 {
            out.append(&Bytes::from_array(env, &G2_GENERATOR));
        }
        for point in self.ic.iter() {
            out.append(&Bytes::from_array(env, point));
        }
        out
    }

    /// A proof that verifies for exactly `(commitment, move_val)`.
    pub fn prove(&self, commitment: &BytesN<32>, move_val: u32) -> Bytes {
        let env = &self.env;
        let bn254 = env.crypto().bn254();

        let mut vk_x = Bn254G1Affine::from_bytes(BytesN::from_array(env, &self.ic[0]));
        let inputs = public_inputs(&commitment.to_array(), move_val);
        for (input, ic) in inputs.iter().zip(self.ic[1..].iter()) {
            let point = Bn254G1Affine::from_bytes(BytesN::from_array(env, ic));
            let scalar = Fr::from_bytes(BytesN::from_array(env, input));
            vk_x = bn254.g1_add(&vk_x, &bn254.g1_mul(&point, &scalar));
        }
        let alpha = Bn254G1Affine::from_bytes(BytesN::from_array(env, &g1_generator()));
        let a = bn254.g1_add(&alpha, &vk_x);

        let mut out = Bytes::from_array(env, &a.to_bytes().to_array());
        out.append(&Bytes::from_array(env, &G2_GENERATOR));
        out.append(&Bytes::from_array(env, &G1_ZERO));
        out
    }
}
