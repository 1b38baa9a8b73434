use soroban_sdk::{Address, Env, String};

use crate::storage_types::{
    Config, DataKey, Ticket, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
    PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};
use crate::Error;

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn read_config(e: &Env) -> Result<Config, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn write_config(e: &Env, config: &Config) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn read_sold(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::Sold).unwrap_or(0)
}

pub fn write_sold(e: &Env, sold: u32) {
    e.storage().instance().set(&DataKey::Sold, &sold);
}

pub fn read_verified(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::Verified).unwrap_or(0)
}

pub fn write_verified(e: &Env, verified: u32) {
    e.storage().instance().set(&DataKey::Verified, &verified);
}

pub fn read_escrow(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::Escrow).unwrap_or(0)
}

pub fn write_escrow(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::Escrow, &amount);
}

pub fn read_ticket(e: &Env, ticket_id: u32) -> Result<Ticket, Error> {
    e.storage()
        .persistent()
        .get(&DataKey::Ticket(ticket_id))
        .ok_or(Error::DoesNotExist)
}

pub fn write_ticket(e: &Env, ticket: &Ticket) {
    let key = DataKey::Ticket(ticket.id);
    e.storage().persistent().set(&key, ticket);
    extend_persistent(e, &key);
}

pub fn read_owner_ticket(e: &Env, owner: &Address) -> Option<u32> {
    e.storage()
        .persistent()
        .get(&DataKey::Owner(owner.clone()))
}

pub fn has_owner_ticket(e: &Env, owner: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Owner(owner.clone()))
}

pub fn write_owner_ticket(e: &Env, owner: &Address, ticket_id: u32) {
    let key = DataKey::Owner(owner.clone());
    e.storage().persistent().set(&key, &ticket_id);
    extend_persistent(e, &key);
}

pub fn remove_owner_ticket(e: &Env, owner: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::Owner(owner.clone()));
}

pub fn is_user_id_bound(e: &Env, user_id: &String) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::UserId(user_id.clone()))
}

pub fn bind_user_id(e: &Env, user_id: &String, ticket_id: u32) {
    let key = DataKey::UserId(user_id.clone());
    e.storage().persistent().set(&key, &ticket_id);
    extend_persistent(e, &key);
}

pub fn read_approval(e: &Env, ticket_id: u32) -> Option<Address> {
    e.storage()
        .persistent()
        .get(&DataKey::Approval(ticket_id))
}

pub fn write_approval(e: &Env, ticket_id: u32, operator: &Address) {
    let key = DataKey::Approval(ticket_id);
    e.storage().persistent().set(&key, operator);
    extend_persistent(e, &key);
}

pub fn remove_approval(e: &Env, ticket_id: u32) {
    e.storage().persistent().remove(&DataKey::Approval(ticket_id));
}
