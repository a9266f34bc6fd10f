use crate::*;

pub(crate) fn validate_collection_id(collection_id: &str) -> Result<(), ArchetypeError> {
    if collection_id.is_empty() || collection_id.len() > MAX_COLLECTION_ID_LEN {
        return Err(ArchetypeError::InvalidInput(format!(
            "Collection ID must be 1-{} characters",
            MAX_COLLECTION_ID_LEN
        )));
    }
    // Storage key invariant: reject separators used in composite keys to prevent keyspace collisions.
    if collection_id.contains(':') || collection_id.contains('\0') {
        return Err(ArchetypeError::InvalidInput(
            "Collection ID cannot contain ':' or null characters".into(),
        ));
    }
    Ok(())
}

/// Decode a 32-byte lowercase hex string (invite keys, Merkle roots, proof elements).
pub(crate) fn decode_hash32(value: &str) -> Result<[u8; 32], ArchetypeError> {
    let bytes = hex::decode(value)
        .map_err(|_| ArchetypeError::InvalidInput("Expected a 32-byte hex string".into()))?;
    bytes
        .try_into()
        .map_err(|_| ArchetypeError::InvalidInput("Expected a 32-byte hex string".into()))
}

pub(crate) fn validate_discounts(discounts: &Discounts) -> Result<(), ArchetypeError> {
    if discounts.affiliate_discount_bps > BASIS_POINTS {
        return Err(ArchetypeError::InvalidConfig(
            "affiliate_discount_bps cannot exceed 10000".into(),
        ));
    }
    if discounts.mint_tiers.len() > MAX_MINT_TIERS {
        return Err(ArchetypeError::InvalidConfig(format!(
            "At most {} mint tiers",
            MAX_MINT_TIERS
        )));
    }
    let mut max_tier_bps: u16 = 0;
    for (i, tier) in discounts.mint_tiers.iter().enumerate() {
        if tier.num_mints == 0 {
            return Err(ArchetypeError::InvalidConfig(
                "Tier num_mints must be > 0".into(),
            ));
        }
        if tier.mint_discount_bps > BASIS_POINTS {
            return Err(ArchetypeError::InvalidConfig(
                "mint_discount_bps cannot exceed 10000".into(),
            ));
        }
        for other in &discounts.mint_tiers[..i] {
            if other.num_mints == tier.num_mints {
                return Err(ArchetypeError::InvalidConfig(
                    "Tier thresholds must be unique".into(),
                ));
            }
        }
        max_tier_bps = max_tier_bps.max(tier.mint_discount_bps);
    }
    // Price invariant: the combined discount can never push the unit price negative.
    if discounts.affiliate_discount_bps + max_tier_bps > BASIS_POINTS {
        return Err(ArchetypeError::InvalidConfig(
            "Combined affiliate and tier discount cannot exceed 10000".into(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_config(config: &Config) -> Result<(), ArchetypeError> {
    if config.base_uri.len() > MAX_URI_LEN || config.unrevealed_uri.len() > MAX_URI_LEN {
        return Err(ArchetypeError::InvalidConfig(format!(
            "URIs must be at most {} characters",
            MAX_URI_LEN
        )));
    }
    let signer = decode_hash32(&config.affiliate_signer)
        .map_err(|_| ArchetypeError::InvalidConfig("affiliate_signer must be a 32-byte hex public key".into()))?;
    if signer == [0u8; 32] {
        return Err(ArchetypeError::InvalidConfig(
            "affiliate_signer cannot be the zero key".into(),
        ));
    }
    if config.max_supply == 0 || config.max_supply > MAX_COLLECTION_SUPPLY {
        return Err(ArchetypeError::InvalidConfig(format!(
            "max_supply must be 1-{}",
            MAX_COLLECTION_SUPPLY
        )));
    }
    if config.max_batch_size == 0 {
        return Err(ArchetypeError::InvalidConfig(
            "max_batch_size must be > 0".into(),
        ));
    }
    // Widened: the raw u16 sum can exceed u16::MAX before the bound check.
    if config.affiliate_fee_bps as u32 + config.platform_fee_bps as u32 > BASIS_POINTS as u32 {
        return Err(ArchetypeError::InvalidConfig(
            "affiliate_fee_bps + platform_fee_bps cannot exceed 10000".into(),
        ));
    }
    validate_discounts(&config.discounts)
}

pub(crate) fn validate_invite_input(input: &InviteInput) -> Result<(), ArchetypeError> {
    decode_hash32(&input.key)?;
    if input.cid.len() > MAX_CID_LEN {
        return Err(ArchetypeError::InvalidInput(format!(
            "CID must be at most {} characters",
            MAX_CID_LEN
        )));
    }
    if let Some(cap) = input.invite.max_per_wallet {
        if cap == 0 {
            return Err(ArchetypeError::InvalidInput(
                "max_per_wallet must be > 0 when set".into(),
            ));
        }
    }
    Ok(())
}
