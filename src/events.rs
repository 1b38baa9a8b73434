use soroban_sdk::{symbol_short, Address, Env, Symbol};

const PURCHASE: Symbol = symbol_short!("purchase");
const ENABLE: Symbol = symbol_short!("enable");
const ENABLE_ALL: Symbol = symbol_short!("enableall");
const APPROVE: Symbol = symbol_short!("approve");
const TRANSFER: Symbol = symbol_short!("transfer");
const VERIFY: Symbol = symbol_short!("verify");
const WITHDRAW: Symbol = symbol_short!("withdraw");

pub fn purchased(e: &Env, buyer: &Address, ticket_id: u32, payment: i128) {
    e.events()
        .publish((PURCHASE, buyer.clone()), (ticket_id, payment));
}

pub fn transfer_enabled(e: &Env, ticket_id: u32) {
    e.events().publish((ENABLE, ticket_id), ());
}

pub fn transfer_enabled_all(e: &Env, issued: u32) {
    e.events().publish((ENABLE_ALL,), issued);
}

pub fn approved(e: &Env, owner: &Address, operator: Option<Address>, ticket_id: u32) {
    e.events()
        .publish((APPROVE, owner.clone()), (operator, ticket_id));
}

pub fn transferred(e: &Env, from: &Address, to: &Address, ticket_id: u32) {
    e.events()
        .publish((TRANSFER, from.clone(), to.clone()), ticket_id);
}

pub fn verified(e: &Env, owner: &Address, ticket_id: u32) {
    e.events().publish((VERIFY, owner.clone()), ticket_id);
}

pub fn withdrawn(e: &Env, admin: &Address, amount: i128) {
    e.events().publish((WITHDRAW, admin.clone()), amount);
}
