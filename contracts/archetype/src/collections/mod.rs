pub(crate) mod affiliate;
pub(crate) mod allowlist;
mod invites;
mod manage;
mod mint;
mod types;
mod views;

pub(crate) use manage::LockField;
pub use types::{
    Collection, Config, Discounts, Invite, InviteInput, InviteRecord, Lock, Locks, MintTier,
};
