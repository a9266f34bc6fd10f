use crate::tests::test_utils::*;
use crate::*;

const PRICE: u128 = 100_000_000_000_000_000_000_000; // 0.1 N

/// One affiliate-attributed sale of 0.1 N: owner 0.08, platform 0.005,
/// affiliate 0.015.
fn funded_collection(config: Config) -> (Contract, String) {
    let (mut contract, col) = setup_public_collection(config, PRICE, 100);
    mint_with_affiliate(&mut contract, &buyer(), &col, 1, PRICE).unwrap();
    (contract, col)
}

#[test]
fn owner_withdraws_owner_share() {
    let (mut contract, col) = funded_collection(default_config());
    let amount = contract.withdraw(&creator(), &col).unwrap();
    assert_eq!(amount, 80_000_000_000_000_000_000_000);

    let collection = contract.get_collection(col.clone()).unwrap();
    assert_eq!(collection.owner_balance, 0);
    assert_eq!(collection.total_withdrawn, amount);
    // Platform and affiliate shares are untouched.
    assert_eq!(collection.platform_balance, 5_000_000_000_000_000_000_000);
    assert_eq!(
        contract.affiliate_balance(col, affiliate()).0,
        15_000_000_000_000_000_000_000
    );
}

#[test]
fn platform_withdraws_platform_share() {
    let (mut contract, col) = funded_collection(default_config());
    // owner() is also the platform account in the fixtures.
    let amount = contract.withdraw(&owner(), &col).unwrap();
    assert_eq!(amount, 5_000_000_000_000_000_000_000);
    assert_eq!(contract.get_collection(col).unwrap().platform_balance, 0);
}

#[test]
fn affiliate_withdraws_credited_share() {
    let (mut contract, col) = funded_collection(default_config());
    let amount = contract.withdraw(&affiliate(), &col).unwrap();
    assert_eq!(amount, 15_000_000_000_000_000_000_000);
    assert_eq!(contract.affiliate_balance(col, affiliate()).0, 0);
}

#[test]
fn second_withdrawal_finds_nothing() {
    let (mut contract, col) = funded_collection(default_config());
    contract.withdraw(&creator(), &col).unwrap();
    let err = contract.withdraw(&creator(), &col).unwrap_err();
    assert_eq!(err, ArchetypeError::BalanceEmpty);
}

#[test]
fn stranger_has_no_balance() {
    let (mut contract, col) = funded_collection(default_config());
    let err = contract.withdraw(&other(), &col).unwrap_err();
    assert_eq!(err, ArchetypeError::BalanceEmpty);
}

#[test]
fn unknown_collection_rejected() {
    let mut contract = new_contract();
    let err = contract.withdraw(&creator(), "nope").unwrap_err();
    assert!(matches!(err, ArchetypeError::NotFound(_)));
}

#[test]
fn alt_payout_may_pull_the_owner_share() {
    let config = Config {
        owner_alt_payout: Some(other()),
        ..default_config()
    };
    let (mut contract, col) = funded_collection(config);

    // The alt payout account withdraws the owner balance itself.
    let amount = contract.withdraw(&other(), &col).unwrap();
    assert_eq!(amount, 80_000_000_000_000_000_000_000);
    assert_eq!(contract.get_collection(col).unwrap().owner_balance, 0);
}

#[test]
fn owner_withdrawal_pays_the_alt_payout() {
    let config = Config {
        owner_alt_payout: Some(other()),
        ..default_config()
    };
    let (mut contract, col) = funded_collection(config);

    // The owner triggers it, but the funds route to the alt payout; the
    // owner cannot then pull the same share again.
    let amount = contract.withdraw(&creator(), &col).unwrap();
    assert_eq!(amount, 80_000_000_000_000_000_000_000);
    let err = contract.withdraw(&other(), &col).unwrap_err();
    assert_eq!(err, ArchetypeError::BalanceEmpty);
}

#[test]
fn super_affiliate_withdraws_like_an_affiliate() {
    let config = Config {
        super_affiliate_payout: Some(other()),
        ..default_config()
    };
    let (mut contract, col) = funded_collection(config);

    let amount = contract.withdraw(&other(), &col).unwrap();
    assert_eq!(amount, 2_500_000_000_000_000_000_000);
    // Platform keeps its halved share.
    let amount = contract.withdraw(&owner(), &col).unwrap();
    assert_eq!(amount, 2_500_000_000_000_000_000_000);
}

#[test]
fn withdrawals_conserve_revenue() {
    let (mut contract, col) = funded_collection(default_config());
    mint_public(&mut contract, &buyer(), &col, 2, 2 * PRICE).unwrap();

    let owner_amount = contract.withdraw(&creator(), &col).unwrap();
    let platform_amount = contract.withdraw(&owner(), &col).unwrap();
    let affiliate_amount = contract.withdraw(&affiliate(), &col).unwrap();

    let collection = contract.get_collection(col).unwrap();
    assert_eq!(collection.total_revenue, 3 * PRICE);
    assert_eq!(
        owner_amount + platform_amount + affiliate_amount,
        collection.total_revenue
    );
    assert_eq!(collection.total_withdrawn, collection.total_revenue);
    assert_eq!(collection.owner_balance, 0);
    assert_eq!(collection.platform_balance, 0);
}

#[test]
fn balances_are_scoped_per_collection() {
    let (mut contract, col) = funded_collection(default_config());
    contract
        .create_collection(
            &creator(),
            "col2".to_string(),
            creator(),
            "Second".to_string(),
            "SEC".to_string(),
            default_config(),
        )
        .unwrap();

    // Nothing sold under col2 yet.
    let err = contract.withdraw(&creator(), "col2").unwrap_err();
    assert_eq!(err, ArchetypeError::BalanceEmpty);
    let err = contract.withdraw(&affiliate(), "col2").unwrap_err();
    assert_eq!(err, ArchetypeError::BalanceEmpty);
    assert!(contract.withdraw(&creator(), &col).is_ok());
}
