use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::nep171;
use super::COLLECTION;
use crate::collections::Invite;

pub fn emit_collection_created(
    creator_id: &AccountId,
    owner_id: &AccountId,
    collection_id: &str,
    logic_version: u32,
) {
    EventBuilder::new(COLLECTION, "create", creator_id)
        .field("owner_id", owner_id)
        .field("collection_id", collection_id)
        .field("logic_version", logic_version)
        .emit();
}

pub fn emit_invite_set(
    actor_id: &AccountId,
    collection_id: &str,
    key: &str,
    cid: &str,
    invite: &Invite,
) {
    EventBuilder::new(COLLECTION, "invite_set", actor_id)
        .field("collection_id", collection_id)
        .field("key", key)
        .field("cid", cid)
        .field("price", invite.price)
        .field("start", invite.start)
        .field("limit", invite.limit)
        .emit();
}

pub struct MintEvent<'a> {
    pub minter_id: &'a AccountId,
    pub collection_id: &'a str,
    pub invite_key: &'a str,
    pub quantity: u32,
    pub total_price: u128,
    pub affiliate: Option<&'a AccountId>,
    pub owner_share: u128,
    pub platform_share: u128,
    pub affiliate_share: u128,
    pub super_affiliate_share: u128,
    pub token_ids: &'a [String],
}

pub fn emit_mint(e: &MintEvent) {
    EventBuilder::new(COLLECTION, "mint", e.minter_id)
        .field("collection_id", e.collection_id)
        .field("invite_key", e.invite_key)
        .field("quantity", e.quantity)
        .field("total_price", U128(e.total_price))
        .field("affiliate", e.affiliate)
        .field("owner_share", U128(e.owner_share))
        .field("platform_share", U128(e.platform_share))
        .field("affiliate_share", U128(e.affiliate_share))
        .field("super_affiliate_share", U128(e.super_affiliate_share))
        .field("token_ids", e.token_ids)
        .emit();
    nep171::emit_mint(e.minter_id.as_str(), e.token_ids);
}

pub fn emit_withdrawal(actor_id: &AccountId, collection_id: &str, payee: &AccountId, amount: u128) {
    EventBuilder::new(COLLECTION, "withdraw", actor_id)
        .field("collection_id", collection_id)
        .field("payee", payee)
        .field("amount", U128(amount))
        .emit();
}

pub fn emit_config_updated(actor_id: &AccountId, collection_id: &str, field: &str) {
    EventBuilder::new(COLLECTION, "config_update", actor_id)
        .field("collection_id", collection_id)
        .field("field", field)
        .emit();
}

pub fn emit_field_locked(actor_id: &AccountId, collection_id: &str, field: &str) {
    EventBuilder::new(COLLECTION, "lock", actor_id)
        .field("collection_id", collection_id)
        .field("field", field)
        .emit();
}

pub fn emit_token_msg_set(actor_id: &AccountId, token_id: &str) {
    EventBuilder::new(COLLECTION, "token_msg_set", actor_id)
        .field("token_id", token_id)
        .emit();
}
