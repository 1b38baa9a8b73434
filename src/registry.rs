//! Registry state machine.
//!
//! Every function here assumes the calling principal has already been
//! authenticated by the contract entrypoint. All preconditions are checked
//! before the first storage write, so a rejected call leaves no trace even
//! when invoked in-process.

use soroban_sdk::{log, token, Address, Env, String};

use crate::events;
use crate::storage;
use crate::storage_types::{Admission, Config, Ticket, TransferState};
use crate::Error;

/// Sends funds out of the registry.
///
/// The payout may call back into the registry; `withdraw` zeroes escrow
/// before handing the amount over.
pub trait Payout {
    fn pay(&self, e: &Env, to: &Address, amount: i128);
}

/// Pays out through the payment token configured at initialization.
pub struct TokenPayout {
    pub token: Address,
}

impl Payout for TokenPayout {
    fn pay(&self, e: &Env, to: &Address, amount: i128) {
        token::Client::new(e, &self.token).transfer(&e.current_contract_address(), to, &amount);
    }
}

pub fn initialize(e: &Env, config: Config) -> Result<(), Error> {
    if storage::has_config(e) {
        return Err(Error::AlreadyInitialized);
    }
    if config.total_supply == 0 {
        return Err(Error::InvalidSupply);
    }
    if config.price <= 0 {
        return Err(Error::InvalidPrice);
    }

    storage::write_config(e, &config);
    storage::write_sold(e, 0);
    storage::write_verified(e, 0);
    storage::write_escrow(e, 0);

    log!(e, "registry initialized", config.total_supply, config.price);
    Ok(())
}

fn require_admin(config: &Config, caller: &Address) -> Result<(), Error> {
    if *caller != config.admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn purchase(
    e: &Env,
    buyer: &Address,
    metadata_ref: String,
    user_id: String,
    payment: i128,
) -> Result<u32, Error> {
    let config = storage::read_config(e)?;
    let sold = storage::read_sold(e);

    if sold >= config.total_supply {
        return Err(Error::SoldOut);
    }
    if storage::has_owner_ticket(e, buyer) {
        log!(e, "address already used", buyer.clone());
        return Err(Error::AddressAlreadyUsed);
    }
    if storage::is_user_id_bound(e, &user_id) {
        log!(e, "user id already used", buyer.clone());
        return Err(Error::UserIdAlreadyUsed);
    }
    if payment < config.price {
        return Err(Error::InsufficientBalance);
    }

    let next_sold = sold.checked_add(1).ok_or(Error::NumericOverflow)?;
    let escrow = storage::read_escrow(e)
        .checked_add(payment)
        .ok_or(Error::NumericOverflow)?;

    // The full attached amount is captured; overpayment is not returned.
    token::Client::new(e, &config.payment_token).transfer(
        buyer,
        &e.current_contract_address(),
        &payment,
    );

    let ticket_id = sold;
    let ticket = Ticket {
        id: ticket_id,
        owner: buyer.clone(),
        user_id: user_id.clone(),
        metadata_ref,
        admission: Admission::Unused,
        transfer: TransferState::Locked,
    };
    storage::write_ticket(e, &ticket);
    storage::write_sold(e, next_sold);
    storage::write_owner_ticket(e, buyer, ticket_id);
    storage::bind_user_id(e, &user_id, ticket_id);
    storage::write_escrow(e, escrow);

    events::purchased(e, buyer, ticket_id, payment);
    Ok(ticket_id)
}

pub fn enable_transfer(e: &Env, caller: &Address, ticket_id: u32) -> Result<(), Error> {
    let config = storage::read_config(e)?;
    require_admin(&config, caller)?;

    let mut ticket = storage::read_ticket(e, ticket_id)?;
    ticket.transfer = ticket.transfer.enable()?;
    storage::write_ticket(e, &ticket);

    events::transfer_enabled(e, ticket_id);
    Ok(())
}

pub fn enable_transfer_all(e: &Env, caller: &Address) -> Result<u32, Error> {
    let config = storage::read_config(e)?;
    require_admin(&config, caller)?;

    let sold = storage::read_sold(e);
    for ticket_id in 0..sold {
        let mut ticket = storage::read_ticket(e, ticket_id)?;
        if !ticket.transfer.is_enabled() {
            ticket.transfer = TransferState::Enabled;
            storage::write_ticket(e, &ticket);
        }
    }

    events::transfer_enabled_all(e, sold);
    Ok(sold)
}

pub fn approve(
    e: &Env,
    owner: &Address,
    operator: Option<Address>,
    ticket_id: u32,
) -> Result<(), Error> {
    let ticket = storage::read_ticket(e, ticket_id)?;
    if ticket.owner != *owner {
        return Err(Error::NotOwner);
    }

    match &operator {
        Some(operator) => storage::write_approval(e, ticket_id, operator),
        None => storage::remove_approval(e, ticket_id),
    }

    events::approved(e, owner, operator, ticket_id);
    Ok(())
}

pub fn transfer(
    e: &Env,
    caller: &Address,
    from: &Address,
    to: &Address,
    ticket_id: u32,
) -> Result<(), Error> {
    let mut ticket = storage::read_ticket(e, ticket_id)?;
    if !ticket.transfer.is_enabled() {
        log!(e, "ticket not for sale", from.clone(), ticket_id);
        return Err(Error::NotForSale);
    }
    if ticket.owner != *from {
        return Err(Error::NotOwner);
    }
    if caller != from && storage::read_approval(e, ticket_id).as_ref() != Some(caller) {
        return Err(Error::NotApproved);
    }

    ticket.owner = to.clone();
    storage::write_ticket(e, &ticket);
    // A recipient that already holds a ticket is re-pointed at this one.
    storage::remove_owner_ticket(e, from);
    storage::write_owner_ticket(e, to, ticket_id);
    storage::remove_approval(e, ticket_id);

    events::transferred(e, from, to, ticket_id);
    Ok(())
}

pub fn verify(e: &Env, caller: &Address) -> Result<u32, Error> {
    let ticket_id = match storage::read_owner_ticket(e, caller) {
        Some(ticket_id) => ticket_id,
        None => {
            log!(e, "no ticket held", caller.clone());
            return Err(Error::DoesNotExist);
        }
    };

    let mut ticket = storage::read_ticket(e, ticket_id)?;
    ticket.admission = match ticket.admission.consume() {
        Ok(admission) => admission,
        Err(err) => {
            log!(e, "ticket already used", caller.clone(), ticket_id);
            return Err(err);
        }
    };
    let verified = storage::read_verified(e)
        .checked_add(1)
        .ok_or(Error::NumericOverflow)?;

    storage::write_ticket(e, &ticket);
    storage::write_verified(e, verified);

    events::verified(e, caller, ticket_id);
    Ok(ticket_id)
}

pub fn withdraw(e: &Env, caller: &Address, payout: &impl Payout) -> Result<i128, Error> {
    let config = storage::read_config(e)?;
    require_admin(&config, caller)?;

    let amount = storage::read_escrow(e);
    if amount == 0 {
        return Err(Error::NoFunds);
    }

    // Zero before paying so a re-entrant withdraw sees nothing to take.
    storage::write_escrow(e, 0);
    payout.pay(e, &config.admin, amount);

    events::withdrawn(e, &config.admin, amount);
    Ok(amount)
}
