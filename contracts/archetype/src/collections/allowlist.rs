use crate::validation::decode_hash32;
use crate::*;

/// The all-zero invite key is the open list: no proof required.
pub(crate) fn is_open_key(key: &str) -> bool {
    key == ZERO_KEY
}

/// Commutative pair hash: sha256 over the two nodes in sorted order, so the
/// prover does not need to encode left/right positions.
pub(crate) fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut buf = [0u8; 64];
    if a <= b {
        buf[..32].copy_from_slice(a);
        buf[32..].copy_from_slice(b);
    } else {
        buf[..32].copy_from_slice(b);
        buf[32..].copy_from_slice(a);
    }
    env::sha256_array(&buf)
}

pub(crate) fn leaf_hash(account_id: &AccountId) -> [u8; 32] {
    env::sha256_array(account_id.as_bytes())
}

/// Recompute the Merkle root from `account_id`'s leaf and the sibling path,
/// and require it to match the invite key.
pub(crate) fn verify_membership(
    account_id: &AccountId,
    key: &str,
    proof: &[String],
) -> Result<(), ArchetypeError> {
    let root = decode_hash32(key)?;
    let mut node = leaf_hash(account_id);
    for element in proof {
        let sibling = decode_hash32(element)?;
        node = hash_pair(&node, &sibling);
    }
    if node != root {
        return Err(ArchetypeError::WalletUnauthorizedToMint);
    }
    Ok(())
}
