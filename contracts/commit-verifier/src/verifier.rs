//! Groth16 reveal verifier
//!
//! Given VK = (α₁, β₂, γ₂, δ₂, IC[0..4]) and proof = (A₁, B₂, C₁):
//!
//! 1. Compute  vk_x = IC[0] + Σ(input[i] · IC[i+1])
//! 2. Check    e(A, B) · e(−α, β) · e(−vk_x, γ) · e(−C, δ) = 1
//!
//! The last step is a single call to `bn254::pairing_check`.

use soroban_sdk::{
    crypto::bn254::{Bn254G1Affine, Bn254G2Affine, Fr},
    log, vec, Bytes, BytesN, Env, Vec,
};

use crate::encoding::{public_inputs, Proof, VerificationKey};

/// Error type describing the specific reason verification failed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VerifyError {
    /// Key has the wrong length or contains an invalid point.
    InvalidKey,
    /// Proof is too short or contains an invalid point.
    InvalidProof,
    /// Well-formed proof that does not satisfy the pairing equation.
    PairingCheckFailed,
}

pub struct CommitVerifier {
    env: Env,
    vk: VerificationKey,
}

impl CommitVerifier {
    /// Decode and validate a verification key.
    pub fn new(env: &Env, vk_bytes: &Bytes) -> Result<Self, VerifyError> {
        let vk = VerificationKey::from_bytes(vk_bytes)?;
        Ok(Self {
            env: env.clone(),
            vk,
        })
    }

    pub fn vk(&self) -> &VerificationKey {
        &self.vk
    }

    /// Check that `proof` attests to knowledge of a salt opening `commitment`
    /// to `move_val`.
    pub fn verify(
        &self,
        commitment: &BytesN<32>,
        move_val: u32,
        proof_bytes: &Bytes,
    ) -> Result<(), VerifyError> {
        let proof = Proof::from_bytes(proof_bytes).map_err(|e| {
            log!(&self.env, "reveal proof rejected", proof_bytes.len());
            e
        })?;

        let env = &self.env;
        let bn254 = env.crypto().bn254();

        let inputs = public_inputs(&commitment.to_array(), move_val);
        let mut vk_x = self.g1(&self.vk.ic[0]);
        for (input, ic) in inputs.iter().zip(self.vk.ic[1..].iter()) {
            let scalar = Fr::from_bytes(BytesN::from_array(env, input));
            let term = bn254.g1_mul(&self.g1(ic), &scalar);
            vk_x = bn254.g1_add(&vk_x, &term);
        }

        let a = self.g1(&proof.a);
        let b = self.g2(&proof.b);
        let c = self.g1(&proof.c);

        let neg_alpha = -self.g1(&self.vk.alpha_g1);
        let neg_vk_x = -vk_x;
        let neg_c = -c;

        let g1_vec: Vec<Bn254G1Affine> = vec![env, a, neg_alpha, neg_vk_x, neg_c];
        let g2_vec: Vec<Bn254G2Affine> = vec![
            env,
            b,
            self.g2(&self.vk.beta_g2),
            self.g2(&self.vk.gamma_g2),
            self.g2(&self.vk.delta_g2),
        ];

        if bn254.pairing_check(g1_vec, g2_vec) {
            Ok(())
        } else {
            log!(env, "pairing check failed", move_val);
            Err(VerifyError::PairingCheckFailed)
        }
    }

    fn g1(&self, raw: &[u8; 64]) -> Bn254G1Affine {
        Bn254G1Affine::from_bytes(BytesN::from_array(&self.env, raw))
    }

    fn g2(&self, raw: &[u8; 128]) -> Bn254G2Affine {
        Bn254G2Affine::from_bytes(BytesN::from_array(&self.env, raw))
    }
}

/// One-shot form of [`CommitVerifier::verify`].
pub fn verify(
    env: &Env,
    vk_bytes: &Bytes,
    commitment: &BytesN<32>,
    move_val: u32,
    proof: &Bytes,
) -> Result<(), VerifyError> {
    CommitVerifier::new(env, vk_bytes)?.verify(commitment, move_val, proof)
}
