use crate::collections::allowlist::{hash_pair, is_open_key, leaf_hash, verify_membership};
use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

fn setup_env() {
    testing_env!(context(owner()).build());
}

/// Two-leaf tree over [buyer, other]; returns (root_hex, proof_for_buyer).
fn two_leaf_tree() -> (String, Vec<String>) {
    let leaf_buyer = leaf_hash(&buyer());
    let leaf_other = leaf_hash(&other());
    let root = hash_pair(&leaf_buyer, &leaf_other);
    (hex::encode(root), vec![hex::encode(leaf_other)])
}

/// Four-leaf tree over [owner, creator, buyer, other]; returns
/// (root_hex, proof_for_buyer).
fn four_leaf_tree() -> (String, Vec<String>) {
    let leaves = [
        leaf_hash(&owner()),
        leaf_hash(&creator()),
        leaf_hash(&buyer()),
        leaf_hash(&other()),
    ];
    let left = hash_pair(&leaves[0], &leaves[1]);
    let right = hash_pair(&leaves[2], &leaves[3]);
    let root = hash_pair(&left, &right);
    (
        hex::encode(root),
        vec![hex::encode(leaves[3]), hex::encode(left)],
    )
}

#[test]
fn zero_key_is_open() {
    assert!(is_open_key(ZERO_KEY));
    assert!(!is_open_key("00"));
    assert!(!is_open_key(
        "1000000000000000000000000000000000000000000000000000000000000000"
    ));
}

#[test]
fn valid_proof_verifies() {
    setup_env();
    let (root, proof) = two_leaf_tree();
    assert!(verify_membership(&buyer(), &root, &proof).is_ok());
}

#[test]
fn valid_deep_proof_verifies() {
    setup_env();
    let (root, proof) = four_leaf_tree();
    assert!(verify_membership(&buyer(), &root, &proof).is_ok());
}

#[test]
fn substituted_address_fails() {
    setup_env();
    let (root, proof) = two_leaf_tree();
    let err = verify_membership(&creator(), &root, &proof).unwrap_err();
    assert_eq!(err, ArchetypeError::WalletUnauthorizedToMint);
}

#[test]
fn mutated_proof_fails() {
    setup_env();
    let (root, mut proof) = four_leaf_tree();
    // Flip one nibble of the first proof element.
    let mut bytes = hex::decode(&proof[0]).unwrap();
    bytes[0] ^= 0x01;
    proof[0] = hex::encode(bytes);
    let err = verify_membership(&buyer(), &root, &proof).unwrap_err();
    assert_eq!(err, ArchetypeError::WalletUnauthorizedToMint);
}

#[test]
fn truncated_proof_fails() {
    setup_env();
    let (root, proof) = four_leaf_tree();
    let err = verify_membership(&buyer(), &root, &proof[..1]).unwrap_err();
    assert_eq!(err, ArchetypeError::WalletUnauthorizedToMint);
}

#[test]
fn empty_proof_against_leaf_root_verifies() {
    setup_env();
    // A single-member list: the root is the member's leaf hash.
    let root = hex::encode(leaf_hash(&buyer()));
    assert!(verify_membership(&buyer(), &root, &[]).is_ok());
}

#[test]
fn malformed_proof_element_rejected() {
    setup_env();
    let (root, _) = two_leaf_tree();
    let err = verify_membership(&buyer(), &root, &["zz".to_string()]).unwrap_err();
    assert!(matches!(err, ArchetypeError::InvalidInput(_)));
}

#[test]
fn pair_hash_is_commutative() {
    setup_env();
    let a = leaf_hash(&buyer());
    let b = leaf_hash(&other());
    assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
}
