use crate::collections::LockField;
use crate::tests::test_utils::*;
use crate::*;

#[test]
fn setters_work_while_open() {
    let (mut contract, col) = setup_collection(default_config());

    contract
        .set_base_uri(&creator(), &col, "ipfs://revealed/".to_string())
        .unwrap();
    contract.set_max_supply(&creator(), &col, 1_000).unwrap();
    contract.set_max_batch_size(&creator(), &col, 50).unwrap();
    contract.set_affiliate_fee(&creator(), &col, 2_000).unwrap();
    contract
        .set_discounts(
            &creator(),
            &col,
            Discounts {
                affiliate_discount_bps: 500,
                mint_tiers: vec![],
            },
        )
        .unwrap();

    let config = contract.get_config(col).unwrap();
    assert_eq!(config.base_uri, "ipfs://revealed/");
    assert_eq!(config.max_supply, 1_000);
    assert_eq!(config.max_batch_size, 50);
    assert_eq!(config.affiliate_fee_bps, 2_000);
    assert_eq!(config.discounts.affiliate_discount_bps, 500);
}

#[test]
fn only_collection_owner_mutates_config() {
    let (mut contract, col) = setup_collection(default_config());
    let err = contract
        .set_base_uri(&other(), &col, "ipfs://x/".to_string())
        .unwrap_err();
    assert!(matches!(err, ArchetypeError::Unauthorized(_)));
    let err = contract
        .lock_field(&other(), &col, LockField::Uri)
        .unwrap_err();
    assert!(matches!(err, ArchetypeError::Unauthorized(_)));
}

#[test]
fn locked_field_rejects_its_setter_forever() {
    let (mut contract, col) = setup_collection(default_config());
    contract.lock_field(&creator(), &col, LockField::Uri).unwrap();

    let err = contract
        .set_base_uri(&creator(), &col, "ipfs://x/".to_string())
        .unwrap_err();
    assert!(matches!(err, ArchetypeError::LockedForever(_)));
    // Not even the collection owner can reopen; retry fails identically.
    let err = contract
        .set_base_uri(&creator(), &col, "ipfs://y/".to_string())
        .unwrap_err();
    assert!(matches!(err, ArchetypeError::LockedForever(_)));
}

#[test]
fn locks_are_independent() {
    let (mut contract, col) = setup_collection(default_config());
    contract
        .lock_field(&creator(), &col, LockField::MaxSupply)
        .unwrap();

    assert!(contract.set_max_supply(&creator(), &col, 100).is_err());
    // Every other field is still mutable.
    assert!(contract
        .set_base_uri(&creator(), &col, "ipfs://x/".to_string())
        .is_ok());
    assert!(contract.set_max_batch_size(&creator(), &col, 5).is_ok());
    assert!(contract.set_affiliate_fee(&creator(), &col, 100).is_ok());
    assert!(contract
        .set_discounts(&creator(), &col, Discounts::default())
        .is_ok());

    let locks = contract.get_locks(col).unwrap();
    assert_eq!(locks.max_supply, Lock::Locked);
    assert_eq!(locks.uri, Lock::Open);
}

#[test]
fn locking_twice_is_a_no_op() {
    let (mut contract, col) = setup_collection(default_config());
    contract
        .lock_field(&creator(), &col, LockField::Discounts)
        .unwrap();
    contract
        .lock_field(&creator(), &col, LockField::Discounts)
        .unwrap();
    assert_eq!(contract.get_locks(col).unwrap().discounts, Lock::Locked);
}

#[test]
fn all_fields_lockable() {
    let (mut contract, col) = setup_collection(default_config());
    for field in [
        LockField::Uri,
        LockField::MaxSupply,
        LockField::MaxBatchSize,
        LockField::AffiliateFee,
        LockField::Discounts,
    ] {
        contract.lock_field(&creator(), &col, field).unwrap();
    }
    let locks = contract.get_locks(col).unwrap();
    assert_eq!(
        *locks,
        Locks {
            uri: Lock::Locked,
            max_supply: Lock::Locked,
            max_batch_size: Lock::Locked,
            affiliate_fee: Lock::Locked,
            discounts: Lock::Locked,
        }
    );
}

#[test]
fn max_supply_cannot_drop_below_minted() {
    let (mut contract, col) = setup_public_collection(default_config(), 0, 100);
    mint_public(&mut contract, &buyer(), &col, 10, 0).unwrap();

    let err = contract.set_max_supply(&creator(), &col, 9).unwrap_err();
    assert!(matches!(err, ArchetypeError::InvalidConfig(_)));
    assert!(contract.set_max_supply(&creator(), &col, 10).is_ok());
}

#[test]
fn setter_validation_still_applies() {
    let (mut contract, col) = setup_collection(default_config());
    assert!(contract
        .set_base_uri(&creator(), &col, "u".repeat(MAX_URI_LEN + 1))
        .is_err());
    assert!(contract.set_max_supply(&creator(), &col, 0).is_err());
    assert!(contract
        .set_max_supply(&creator(), &col, MAX_COLLECTION_SUPPLY + 1)
        .is_err());
    assert!(contract.set_max_batch_size(&creator(), &col, 0).is_err());
    // platform fee is 500 bps; 9501 would push the sum past 100%.
    assert!(contract.set_affiliate_fee(&creator(), &col, 9_501).is_err());
    assert!(contract.set_affiliate_fee(&creator(), &col, 9_500).is_ok());
    assert!(contract
        .set_discounts(
            &creator(),
            &col,
            Discounts {
                affiliate_discount_bps: 10_001,
                mint_tiers: vec![],
            },
        )
        .is_err());
}

#[test]
fn affiliate_fee_sum_past_u16_range_rejected() {
    let config = Config {
        affiliate_fee_bps: 0,
        platform_fee_bps: 10_000,
        ..default_config()
    };
    let (mut contract, col) = setup_collection(config);

    // 60000 + 10000 wraps a u16; the setter must reject, not panic.
    let err = contract.set_affiliate_fee(&creator(), &col, 60_000).unwrap_err();
    assert!(matches!(err, ArchetypeError::InvalidConfig(_)));
    assert_eq!(contract.get_config(col).unwrap().affiliate_fee_bps, 0);
}

#[test]
fn unknown_collection_rejected() {
    let mut contract = new_contract();
    let err = contract
        .set_base_uri(&creator(), "nope", "ipfs://x/".to_string())
        .unwrap_err();
    assert!(matches!(err, ArchetypeError::NotFound(_)));
    let err = contract
        .lock_field(&creator(), "nope", LockField::Uri)
        .unwrap_err();
    assert!(matches!(err, ArchetypeError::NotFound(_)));
}
