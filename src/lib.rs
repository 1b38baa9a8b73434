#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

mod events;
mod registry;
mod storage;
mod storage_types;

pub use registry::{Payout, TokenPayout};
pub use storage_types::{Admission, Config, Ticket, TransferState};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    SoldOut = 4,
    AddressAlreadyUsed = 5,
    UserIdAlreadyUsed = 6,
    InsufficientBalance = 7,
    DoesNotExist = 8,
    AlreadyEnabledForSale = 9,
    NotForSale = 10,
    IsUsed = 11,
    NoFunds = 12,
    InvalidSupply = 13,
    InvalidPrice = 14,
    NotOwner = 15,
    NotApproved = 16,
    NumericOverflow = 17,
}

#[contract]
pub struct TicketRegistryContract;

#[contractimpl]
impl TicketRegistryContract {
    /// Create the registry. Only can be called once, and the authorizing
    /// `admin` becomes the permanent administrator.
    ///
    /// # Arguments
    /// * `admin` - Administrator; receives withdrawals and gates transfers
    /// * `payment_token` - Token contract used for ticket payments
    /// * `total_supply` - Number of tickets that will ever exist (> 0)
    /// * `price` - Minimum payment per ticket in token base units (> 0)
    /// * `name` - Collection name
    /// * `symbol` - Collection symbol
    pub fn initialize(
        e: Env,
        admin: Address,
        payment_token: Address,
        total_supply: u32,
        price: i128,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        admin.require_auth();

        registry::initialize(
            &e,
            Config {
                admin,
                payment_token,
                total_supply,
                price,
                name,
                symbol,
            },
        )?;
        storage::extend_instance(&e);
        Ok(())
    }

    /// Buy the next ticket. Each address and each external user id may buy
    /// at most once; the whole `payment` is taken into escrow.
    ///
    /// # Arguments
    /// * `buyer` - Address paying for and receiving the ticket
    /// * `metadata_ref` - Opaque reference describing the ticket
    /// * `user_id` - Real-world identity bound to the ticket for good
    /// * `payment` - Amount of the payment token to pay, at least `price`
    ///
    /// # Returns
    /// The id of the new ticket
    pub fn purchase(
        e: Env,
        buyer: Address,
        metadata_ref: String,
        user_id: String,
        payment: i128,
    ) -> Result<u32, Error> {
        buyer.require_auth();

        let ticket_id = registry::purchase(&e, &buyer, metadata_ref, user_id, payment)?;
        storage::extend_instance(&e);
        Ok(ticket_id)
    }

    /// Allow a single ticket to be transferred. Admin only.
    pub fn enable_transfer(e: Env, caller: Address, ticket_id: u32) -> Result<(), Error> {
        caller.require_auth();

        registry::enable_transfer(&e, &caller, ticket_id)?;
        storage::extend_instance(&e);
        Ok(())
    }

    /// Allow every issued ticket to be transferred. Admin only.
    ///
    /// # Returns
    /// The number of tickets swept
    pub fn enable_transfer_all(e: Env, caller: Address) -> Result<u32, Error> {
        caller.require_auth();

        let swept = registry::enable_transfer_all(&e, &caller)?;
        storage::extend_instance(&e);
        Ok(swept)
    }

    /// Let `operator` move `owner`'s ticket.
    pub fn approve(e: Env, owner: Address, operator: Address, ticket_id: u32) -> Result<(), Error> {
        owner.require_auth();

        registry::approve(&e, &owner, Some(operator), ticket_id)?;
        storage::extend_instance(&e);
        Ok(())
    }

    /// Drop any operator approval on `owner`'s ticket.
    pub fn revoke(e: Env, owner: Address, ticket_id: u32) -> Result<(), Error> {
        owner.require_auth();

        registry::approve(&e, &owner, None, ticket_id)?;
        storage::extend_instance(&e);
        Ok(())
    }

    /// Move a ticket from `from` to `to`. The ticket must have been enabled
    /// for transfer, and `caller` must be the owner or its approved operator.
    ///
    /// # Arguments
    /// * `caller` - Owner or approved operator
    /// * `from` - Current owner
    /// * `to` - New owner; any ticket it already holds stops being indexed
    /// * `ticket_id` - Ticket to move
    pub fn transfer(
        e: Env,
        caller: Address,
        from: Address,
        to: Address,
        ticket_id: u32,
    ) -> Result<(), Error> {
        caller.require_auth();

        registry::transfer(&e, &caller, &from, &to, ticket_id)?;
        storage::extend_instance(&e);
        Ok(())
    }

    /// Check in the ticket held by `caller`. Succeeds once per ticket.
    ///
    /// # Returns
    /// The id of the ticket that was checked in
    pub fn verify(e: Env, caller: Address) -> Result<u32, Error> {
        caller.require_auth();

        let ticket_id = registry::verify(&e, &caller)?;
        storage::extend_instance(&e);
        Ok(ticket_id)
    }

    /// Send the whole escrow balance to the admin. Admin only.
    ///
    /// # Returns
    /// The amount paid out
    pub fn withdraw(e: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let payout = TokenPayout {
            token: storage::read_config(&e)?.payment_token,
        };
        let amount = registry::withdraw(&e, &caller, &payout)?;
        storage::extend_instance(&e);
        Ok(amount)
    }

    /// Collection name set at initialization
    pub fn name(e: Env) -> Result<String, Error> {
        Ok(storage::read_config(&e)?.name)
    }

    /// Collection symbol set at initialization
    pub fn symbol(e: Env) -> Result<String, Error> {
        Ok(storage::read_config(&e)?.symbol)
    }

    /// Number of tickets that will ever exist
    pub fn total_supply(e: Env) -> Result<u32, Error> {
        Ok(storage::read_config(&e)?.total_supply)
    }

    /// Minimum payment per ticket
    pub fn price(e: Env) -> Result<i128, Error> {
        Ok(storage::read_config(&e)?.price)
    }

    /// Administrator fixed at initialization
    pub fn admin(e: Env) -> Result<Address, Error> {
        Ok(storage::read_config(&e)?.admin)
    }

    /// Token contract that payments and payouts move through
    pub fn payment_token(e: Env) -> Result<Address, Error> {
        Ok(storage::read_config(&e)?.payment_token)
    }

    /// Number of tickets issued so far
    pub fn sold(e: Env) -> u32 {
        storage::read_sold(&e)
    }

    /// Number of tickets checked in so far
    pub fn verified_count(e: Env) -> u32 {
        storage::read_verified(&e)
    }

    /// Payments held by the registry and not yet withdrawn
    pub fn escrow_balance(e: Env) -> i128 {
        storage::read_escrow(&e)
    }

    /// Id of the ticket currently held by `owner`
    pub fn ticket_of(e: Env, owner: Address) -> Result<u32, Error> {
        storage::read_owner_ticket(&e, &owner).ok_or(Error::DoesNotExist)
    }

    pub fn balance_of(e: Env, owner: Address) -> u32 {
        if storage::has_owner_ticket(&e, &owner) {
            1
        } else {
            0
        }
    }

    pub fn owner_of(e: Env, ticket_id: u32) -> Result<Address, Error> {
        Ok(storage::read_ticket(&e, ticket_id)?.owner)
    }

    pub fn get_ticket(e: Env, ticket_id: u32) -> Result<Ticket, Error> {
        storage::read_ticket(&e, ticket_id)
    }

    pub fn token_uri(e: Env, ticket_id: u32) -> Result<String, Error> {
        Ok(storage::read_ticket(&e, ticket_id)?.metadata_ref)
    }

    pub fn is_used(e: Env, ticket_id: u32) -> Result<bool, Error> {
        Ok(storage::read_ticket(&e, ticket_id)?.admission.is_used())
    }

    pub fn is_transfer_enabled(e: Env, ticket_id: u32) -> Result<bool, Error> {
        Ok(storage::read_ticket(&e, ticket_id)?.transfer.is_enabled())
    }

    pub fn get_approved(e: Env, ticket_id: u32) -> Result<Option<Address>, Error> {
        storage::read_ticket(&e, ticket_id)?;
        Ok(storage::read_approval(&e, ticket_id))
    }

    /// Whether `user_id` has ever been bound to a ticket
    pub fn is_user_id_used(e: Env, user_id: String) -> bool {
        storage::is_user_id_bound(&e, &user_id)
    }
}
