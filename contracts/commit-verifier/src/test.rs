#![cfg(test)]

use crate::encoding::{is_valid_g1, is_valid_g2, public_inputs};
use crate::testutils::{g1_generator, TestKey, G1_ZERO, G2_GENERATOR};
use crate::{commit, verify, CommitVerifier, VerifyError, PROOF_SIZE, VK_SIZE};
use soroban_sdk::{Bytes, BytesN, Env};

/// BN254 base-field modulus p, big-endian.
const FQ_MODULUS_HEX: &str = "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47";

fn salt(env: &Env, fill: u8) -> BytesN<32> {
    BytesN::from_array(env, &[fill; 32])
}

fn setup() -> (Env, TestKey) {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    let key = TestKey::new(&env);
    (env, key)
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn generators_and_identity_are_valid_points() {
    assert!(is_valid_g1(&g1_generator()));
    assert!(is_valid_g1(&G1_ZERO));
    assert!(is_valid_g2(&G2_GENERATOR));
    assert!(is_valid_g2(&[0u8; 128]));
}

#[test]
fn off_curve_points_are_rejected() {
    // (1, 3) is not on y² = x³ + 3.
    let mut g1 = g1_generator();
    g1[63] = 3;
    assert!(!is_valid_g1(&g1));

    let mut g2 = G2_GENERATOR;
    g2[127] ^= 0x01;
    assert!(!is_valid_g2(&g2));
}

#[test]
fn non_canonical_coordinates_are_rejected() {
    // x = p is congruent to 0 but is not a canonical encoding.
    let modulus = hex::decode(FQ_MODULUS_HEX).unwrap();
    let mut g1 = g1_generator();
    g1[..32].copy_from_slice(&modulus);
    assert!(!is_valid_g1(&g1));
}

#[test]
fn public_inputs_split_commitment_into_limbs() {
    let mut commitment = [0u8; 32];
    commitment[0] = 0xAA;
    commitment[31] = 0xBB;
    let [hi, lo, mv] = public_inputs(&commitment, 1);

    assert_eq!(&hi[..16], &[0u8; 16]);
    assert_eq!(hi[16], 0xAA);
    assert_eq!(&lo[..16], &[0u8; 16]);
    assert_eq!(lo[31], 0xBB);
    assert_eq!(mv[31], 1);
    assert!(mv[..31].iter().all(|b| *b == 0));
}

#[test]
fn test_key_has_expected_size() {
    let (_env, key) = setup();
    assert_eq!(key.to_bytes().len() as usize, VK_SIZE);
}

// ============================================================================
// Commitment
// ============================================================================

#[test]
fn commitment_is_deterministic_and_binding() {
    let env = Env::default();
    let c0 = commit(&env, 0, &salt(&env, 1));
    assert_eq!(c0, commit(&env, 0, &salt(&env, 1)));
    assert_ne!(c0, commit(&env, 1, &salt(&env, 1)));
    assert_ne!(c0, commit(&env, 0, &salt(&env, 2)));
}

// ============================================================================
// Verification
// ============================================================================

#[test]
fn honest_proof_verifies_for_both_moves() {
    let (env, key) = setup();
    let verifier = CommitVerifier::new(&env, &key.to_bytes()).unwrap();

    for move_val in [0u32, 1u32] {
        let commitment = commit(&env, move_val, &salt(&env, 9));
        let proof = key.prove(&commitment, move_val);
        assert_eq!(proof.len() as usize, PROOF_SIZE);
        assert_eq!(verifier.verify(&commitment, move_val, &proof), Ok(()));
    }
}

#[test]
fn proof_for_other_move_is_rejected() {
    let (env, key) = setup();
    let commitment = commit(&env, 0, &salt(&env, 9));
    let proof = key.prove(&commitment, 0);

    let res = verify(&env, &key.to_bytes(), &commitment, 1, &proof);
    assert_eq!(res, Err(VerifyError::PairingCheckFailed));
}

#[test]
fn proof_for_other_salt_is_rejected() {
    let (env, key) = setup();
    let stored = commit(&env, 0, &salt(&env, 1));
    let other = commit(&env, 0, &salt(&env, 2));
    let proof = key.prove(&other, 0);

    let res = verify(&env, &key.to_bytes(), &stored, 0, &proof);
    assert_eq!(res, Err(VerifyError::PairingCheckFailed));
}

#[test]
fn arbitrary_digests_are_usable_as_commitments() {
    let (env, key) = setup();
    let commitment = BytesN::from_array(&env, &[0xFF; 32]);
    let proof = key.prove(&commitment, 1);
    assert_eq!(verify(&env, &key.to_bytes(), &commitment, 1, &proof), Ok(()));
}

#[test]
fn proof_with_leading_header_is_accepted() {
    let (env, key) = setup();
    let commitment = commit(&env, 1, &salt(&env, 3));
    let mut blob = Bytes::from_array(&env, &[0x11; 96]);
    blob.append(&key.prove(&commitment, 1));

    assert_eq!(verify(&env, &key.to_bytes(), &commitment, 1, &blob), Ok(()));
}

#[test]
fn short_proof_is_rejected() {
    let (env, key) = setup();
    let commitment = commit(&env, 1, &salt(&env, 3));
    let proof = Bytes::from_array(&env, &[0u8; 64]);

    let res = verify(&env, &key.to_bytes(), &commitment, 1, &proof);
    assert_eq!(res, Err(VerifyError::InvalidProof));
}

#[test]
fn proof_with_off_curve_point_is_rejected() {
    let (env, key) = setup();
    let commitment = commit(&env, 0, &salt(&env, 4));
    let mut raw = [0u8; PROOF_SIZE];
    key.prove(&commitment, 0).copy_into_slice(&mut raw);
    raw[63] ^= 0x01;

    let res = verify(&env, &key.to_bytes(), &commitment, 0, &Bytes::from_array(&env, &raw));
    assert_eq!(res, Err(VerifyError::InvalidProof));
}

#[test]
fn truncated_key_is_rejected() {
    let (env, key) = setup();
    let vk = key.to_bytes();
    let truncated = vk.slice(0..vk.len() - 64);

    assert_eq!(
        CommitVerifier::new(&env, &truncated).err(),
        Some(VerifyError::InvalidKey)
    );
    assert!(CommitVerifier::new(&env, &Bytes::new(&env)).is_err());
}

#[test]
fn key_with_invalid_point_is_rejected() {
    let (env, key) = setup();
    let mut raw = [0u8; VK_SIZE];
    key.to_bytes().copy_into_slice(&mut raw);
    // Corrupt β.
    raw[64 + 127] ^= 0x01;

    assert_eq!(
        CommitVerifier::new(&env, &Bytes::from_array(&env, &raw)).err(),
        Some(VerifyError::InvalidKey)
    );
}

#[test]
fn proof_is_rejected_under_a_different_key() {
    let (env, key) = setup();
    let commitment = commit(&env, 1, &salt(&env, 5));
    let proof = key.prove(&commitment, 1);

    // Same shape, IC₁ and IC₂ swapped: vk_x differs for any non-trivial input.
    let mut raw = [0u8; VK_SIZE];
    key.to_bytes().copy_into_slice(&mut raw);
    let ic1 = 448 + 64;
    let ic2 = ic1 + 64;
    let mut tmp = [0u8; 64];
    tmp.copy_from_slice(&raw[ic1..ic1 + 64]);
    raw.copy_within(ic2..ic2 + 64, ic1);
    raw[ic2..ic2 + 64].copy_from_slice(&tmp);

    let res = verify(&env, &Bytes::from_array(&env, &raw), &commitment, 1, &proof);
    assert_eq!(res, Err(VerifyError::PairingCheckFailed));
}
