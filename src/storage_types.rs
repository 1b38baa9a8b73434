use soroban_sdk::{contracttype, Address, String};

use crate::Error;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Creation parameters, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub payment_token: Address,
    pub total_supply: u32,
    pub price: i128,
    pub name: String,
    pub symbol: String,
}

/// Whether a ticket may change hands. Starts `Locked`, can only move to `Enabled`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransferState {
    Locked,
    Enabled,
}

impl TransferState {
    pub fn enable(self) -> Result<Self, Error> {
        match self {
            TransferState::Locked => Ok(TransferState::Enabled),
            TransferState::Enabled => Err(Error::AlreadyEnabledForSale),
        }
    }

    pub fn is_enabled(self) -> bool {
        self == TransferState::Enabled
    }
}

/// Check-in status. `Unused` moves to `Used` exactly once.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Admission {
    Unused,
    Used,
}

impl Admission {
    pub fn consume(self) -> Result<Self, Error> {
        match self {
            Admission::Unused => Ok(Admission::Used),
            Admission::Used => Err(Error::IsUsed),
        }
    }

    pub fn is_used(self) -> bool {
        self == Admission::Used
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ticket {
    pub id: u32,
    pub owner: Address,
    pub user_id: String,
    pub metadata_ref: String,
    pub admission: Admission,
    pub transfer: TransferState,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Sold,
    Verified,
    Escrow,
    Ticket(u32),
    Owner(Address),
    UserId(String),
    Approval(u32),
}
