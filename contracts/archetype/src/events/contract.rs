use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::CONTRACT;

pub fn emit_archetype_changed(actor_id: &AccountId, old_version: u32, new_version: u32) {
    EventBuilder::new(CONTRACT, "archetype_changed", actor_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_platform_account_changed(
    actor_id: &AccountId,
    old_account: &AccountId,
    new_account: &AccountId,
) {
    EventBuilder::new(CONTRACT, "platform_account_changed", actor_id)
        .field("old_account", old_account)
        .field("new_account", new_account)
        .emit();
}
