use crate::validation::decode_hash32;
use crate::*;

/// Verify an affiliate credential: an ed25519 signature by the configured
/// `affiliate_signer` over `sha256(affiliate account id)`. The credential is
/// issued off-chain and binds attribution to the trusted signer, preventing
/// self-declared affiliates.
pub(crate) fn verify_affiliate(
    affiliate_signer: &str,
    affiliate: &AccountId,
    signature: Option<&str>,
) -> Result<(), ArchetypeError> {
    let public_key = decode_hash32(affiliate_signer)
        .map_err(|_| ArchetypeError::InvalidConfig("Malformed affiliate_signer".into()))?;

    let signature = signature.ok_or(ArchetypeError::InvalidSignature)?;
    let sig_bytes: [u8; 64] = hex::decode(signature)
        .ok()
        .and_then(|b| b.try_into().ok())
        .ok_or(ArchetypeError::InvalidSignature)?;

    let message = env::sha256(affiliate.as_bytes());
    if !env::ed25519_verify(&sig_bytes, &message, &public_key) {
        return Err(ArchetypeError::InvalidSignature);
    }
    Ok(())
}
