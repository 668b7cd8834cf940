//! Byte layouts for verification keys and proofs, plus curve-point validation.
//!
//! Serialization (Ethereum / Soroban convention, uncompressed, big-endian):
//! - G1 point: 64 bytes  (be(X) || be(Y))
//! - G2 point: 128 bytes (be(X.c1) || be(X.c0) || be(Y.c1) || be(Y.c0))
//! - Scalar:   32 bytes
//!
//! The all-zero encoding is the point at infinity.

use ark_bn254::{Fq, Fq2, G1Affine, G2Affine};
use ark_ff::{BigInt, PrimeField};
use soroban_sdk::Bytes;

use crate::verifier::VerifyError;

pub const FIELD_SIZE: usize = 32;
pub const G1_SIZE: usize = 64;
pub const G2_SIZE: usize = 128;

/// `[commitment_hi, commitment_lo, move]`
pub const PUBLIC_INPUTS: usize = 3;

/// α, β, γ, δ and one IC point per public input plus the constant term.
pub const VK_SIZE: usize = G1_SIZE + 3 * G2_SIZE + (PUBLIC_INPUTS + 1) * G1_SIZE;

/// A, B, C.
pub const PROOF_SIZE: usize = G1_SIZE + G2_SIZE + G1_SIZE;

/// A decoded, curve-checked Groth16 verification key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationKey {
    pub alpha_g1: [u8; G1_SIZE],
    pub beta_g2: [u8; G2_SIZE],
    pub gamma_g2: [u8; G2_SIZE],
    pub delta_g2: [u8; G2_SIZE],
    pub ic: [[u8; G1_SIZE]; PUBLIC_INPUTS + 1],
}

impl VerificationKey {
    pub fn from_bytes(bytes: &Bytes) -> Result<Self, VerifyError> {
        if bytes.len() as usize != VK_SIZE {
            return Err(VerifyError::InvalidKey);
        }
        let mut cur = 0u32;
        let alpha_g1 = read_g1(bytes, &mut cur).ok_or(VerifyError::InvalidKey)?;
        let beta_g2 = read_g2(bytes, &mut cur).ok_or(VerifyError::InvalidKey)?;
        let gamma_g2 = read_g2(bytes, &mut cur).ok_or(VerifyError::InvalidKey)?;
        let delta_g2 = read_g2(bytes, &mut cur).ok_or(VerifyError::InvalidKey)?;
        let mut ic = [[0u8; G1_SIZE]; PUBLIC_INPUTS + 1];
        for point in ic.iter_mut() {
            *point = read_g1(bytes, &mut cur).ok_or(VerifyError::InvalidKey)?;
        }
        Ok(Self {
            alpha_g1,
            beta_g2,
            gamma_g2,
            delta_g2,
            ic,
        })
    }
}

/// A decoded, curve-checked Groth16 proof.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proof {
    pub a: [u8; G1_SIZE],
    pub b: [u8; G2_SIZE],
    pub c: [u8; G1_SIZE],
}

impl Proof {
    /// Decode the trailing `PROOF_SIZE` bytes of `bytes`.
    ///
    /// Provers that export `public_inputs || proof` as one blob can be passed
    /// through unchanged; the leading bytes are ignored since the public
    /// inputs are always rebuilt from contract state.
    pub fn from_bytes(bytes: &Bytes) -> Result<Self, VerifyError> {
        let len = bytes.len();
        if (len as usize) < PROOF_SIZE {
            return Err(VerifyError::InvalidProof);
        }
        let mut cur = len - PROOF_SIZE as u32;
        let a = read_g1(bytes, &mut cur).ok_or(VerifyError::InvalidProof)?;
        let b = read_g2(bytes, &mut cur).ok_or(VerifyError::InvalidProof)?;
        let c = read_g1(bytes, &mut cur).ok_or(VerifyError::InvalidProof)?;
        Ok(Self { a, b, c })
    }
}

fn read_bytes<const N: usize>(bytes: &Bytes, idx: &mut u32) -> [u8; N] {
    let mut out = [0u8; N];
    let end = *idx + N as u32;
    bytes.slice(*idx..end).copy_into_slice(&mut out);
    *idx = end;
    out
}

fn read_g1(bytes: &Bytes, idx: &mut u32) -> Option<[u8; G1_SIZE]> {
    let raw = read_bytes::<G1_SIZE>(bytes, idx);
    is_valid_g1(&raw).then_some(raw)
}

fn read_g2(bytes: &Bytes, idx: &mut u32) -> Option<[u8; G2_SIZE]> {
    let raw = read_bytes::<G2_SIZE>(bytes, idx);
    is_valid_g2(&raw).then_some(raw)
}

/// Big-endian 32 bytes to little-endian 64-bit limbs.
fn be_limbs(bytes: &[u8]) -> BigInt<4> {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = FIELD_SIZE - (i + 1) * 8;
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&bytes[start..start + 8]);
        *limb = u64::from_be_bytes(chunk);
    }
    BigInt::new(limbs)
}

/// Base-field element, `None` unless strictly below the modulus.
fn fq(bytes: &[u8]) -> Option<Fq> {
    Fq::from_bigint(be_limbs(bytes))
}

/// On-curve check. BN254 G1 has cofactor 1, so this is also the subgroup check.
pub fn is_valid_g1(raw: &[u8; G1_SIZE]) -> bool {
    if raw.iter().all(|b| *b == 0) {
        return true;
    }
    let (Some(x), Some(y)) = (fq(&raw[..32]), fq(&raw[32..])) else {
        return false;
    };
    G1Affine::new_unchecked(x, y).is_on_curve()
}

/// On-curve and prime-order subgroup check.
pub fn is_valid_g2(raw: &[u8; G2_SIZE]) -> bool {
    if raw.iter().all(|b| *b == 0) {
        return true;
    }
    let coords = (
        fq(&raw[0..32]),
        fq(&raw[32..64]),
        fq(&raw[64..96]),
        fq(&raw[96..128]),
    );
    let (Some(x_c1), Some(x_c0), Some(y_c1), Some(y_c0)) = coords else {
        return false;
    };
    let point = G2Affine::new_unchecked(Fq2::new(x_c0, x_c1), Fq2::new(y_c0, y_c1));
    point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve()
}

/// Public inputs for a reveal, each as a 32-byte big-endian scalar.
pub fn public_inputs(commitment: &[u8; 32], move_val: u32) -> [[u8; FIELD_SIZE]; PUBLIC_INPUTS] {
    let mut hi = [0u8; FIELD_SIZE];
    hi[16..].copy_from_slice(&commitment[..16]);
    let mut lo = [0u8; FIELD_SIZE];
    lo[16..].copy_from_slice(&commitment[16..]);
    [hi, lo, scalar_from_u32(move_val)]
}

pub fn scalar_from_u32(v: u32) -> [u8; FIELD_SIZE] {
    let mut out = [0u8; FIELD_SIZE];
    out[28..].copy_from_slice(&v.to_be_bytes());
    out
}
