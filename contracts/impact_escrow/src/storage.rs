use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Campaign, DonationPolicy, Receipt};

const INSTANCE_TTL_THRESHOLD: u32 = 17_280;
const INSTANCE_TTL_EXTEND: u32 = 518_400;
const PERSISTENT_TTL_THRESHOLD: u32 = 17_280;
const PERSISTENT_TTL_EXTEND: u32 = 518_400;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,             // -> Address
    Token,             // -> Address
    NextCampaignId,    // -> u64
    DonationPolicy,    // -> DonationPolicy
    Campaign(u64),     // campaign_id -> Campaign
    Oracle(Address),   // -> bool
    Receipt(u64, u32), // (campaign_id, receipt_id) -> Receipt
}

// --- Owner / token ---

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance_ttl(env);
}

pub fn get_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Token)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    extend_instance_ttl(env);
}

// --- Campaign counter ---

/// Ids start at 1, so an uninitialized counter reads as 1.
pub fn get_next_campaign_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(1)
}

pub fn set_next_campaign_id(env: &Env, next_id: u64) {
    env.storage()
        .instance()
        .set(&DataKey::NextCampaignId, &next_id);
    extend_instance_ttl(env);
}

// --- Policy ---

pub fn get_donation_policy(env: &Env) -> DonationPolicy {
    env.storage()
        .instance()
        .get(&DataKey::DonationPolicy)
        .unwrap_or_default()
}

pub fn set_donation_policy(env: &Env, policy: &DonationPolicy) {
    env.storage()
        .instance()
        .set(&DataKey::DonationPolicy, policy);
    extend_instance_ttl(env);
}

// --- Campaigns ---

pub fn get_campaign(env: &Env, campaign_id: u64) -> Option<Campaign> {
    let key = DataKey::Campaign(campaign_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent_ttl(env, &key);
}

// --- Oracles ---

pub fn is_oracle(env: &Env, principal: &Address) -> bool {
    let key = DataKey::Oracle(principal.clone());
    let result: Option<bool> = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result.unwrap_or(false)
}

pub fn set_oracle(env: &Env, principal: &Address, enabled: bool) {
    let key = DataKey::Oracle(principal.clone());
    env.storage().persistent().set(&key, &enabled);
    extend_persistent_ttl(env, &key);
}

// --- Receipts ---

pub fn get_receipt(env: &Env, campaign_id: u64, receipt_id: u32) -> Option<Receipt> {
    let key = DataKey::Receipt(campaign_id, receipt_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_receipt(env: &Env, receipt: &Receipt) {
    let key = DataKey::Receipt(receipt.campaign_id, receipt.receipt_id);
    env.storage().persistent().set(&key, receipt);
    extend_persistent_ttl(env, &key);
}

// --- TTL ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
