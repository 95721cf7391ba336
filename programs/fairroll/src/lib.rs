//! Provably fair, escrow-backed betting resolved by house signatures.
//!
//! A house funds a vault PDA with pooled liquidity; players escrow stakes
//! into per-wager bet PDAs derived from a player-chosen seed. A bet is
//! settled by the house signing the bet's canonical message with the native
//! Ed25519 program in the same transaction; the verified signature bytes
//! double as the entropy that decides win/loss and the payout.

use anchor_lang::prelude::*;

pub mod ed25519;
pub mod entropy;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod payout;
pub mod states;

use instructions::*;

declare_id!("9EsL8RYn3qGqBZrRoE9RejW8fGcqLU5t92wMwuEo3QvY");

#[program]
pub mod fairroll {
    use super::*;

    pub fn initialize_vault(ctx: Context<InitializeVault>, funding_amount: u64) -> Result<()> {
        instructions::initialize_vault(ctx, funding_amount)
    }

    pub fn place_bet(
        ctx: Context<PlaceBet>,
        seed: u128,
        threshold: u8,
        amount: u64,
    ) -> Result<()> {
        instructions::place_bet(ctx, seed, threshold, amount)
    }

    pub fn resolve_bet(ctx: Context<ResolveBet>, signature: [u8; 64]) -> Result<()> {
        instructions::resolve_bet(ctx, signature)
    }

    pub fn refund_bet(ctx: Context<RefundBet>) -> Result<()> {
        instructions::refund_bet(ctx)
    }

    pub fn close_bet(ctx: Context<CloseBet>) -> Result<()> {
        instructions::close_bet(ctx)
    }

    pub fn withdraw_house(ctx: Context<WithdrawHouse>, amount: u64) -> Result<()> {
        instructions::withdraw_house(ctx, amount)
    }

    pub fn toggle_house_lock(ctx: Context<ToggleHouseLock>) -> Result<()> {
        instructions::toggle_house_lock(ctx)
    }
}
