use anchor_lang::prelude::*;

#[event]
pub struct VaultInitializedEvent {
    pub house_vault: Pubkey,
    pub house_authority: Pubkey,
    pub funding_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct BetPlacedEvent {
    pub bet: Pubkey,
    pub player: Pubkey,
    pub house_vault: Pubkey,
    pub seed: u128,
    pub amount: u64,
    pub threshold: u8,
    pub potential_payout: u64,
    pub timestamp: i64,
}

#[event]
pub struct BetResolvedEvent {
    pub bet: Pubkey,
    pub player: Pubkey,
    pub house_vault: Pubkey,
    pub roll: u8,
    pub threshold: u8,
    pub won: bool,
    pub payout: u64,
    pub timestamp: i64,
}

#[event]
pub struct BetRefundedEvent {
    pub bet: Pubkey,
    pub player: Pubkey,
    pub house_vault: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct BetClosedEvent {
    pub bet: Pubkey,
    pub player: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct HouseWithdrawEvent {
    pub house_vault: Pubkey,
    pub house_authority: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct HouseLockToggledEvent {
    pub house_vault: Pubkey,
    pub house_authority: Pubkey,
    pub locked: bool,
    pub timestamp: i64,
}
