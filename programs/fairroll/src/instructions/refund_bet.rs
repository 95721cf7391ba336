use anchor_lang::prelude::*;

use crate::errors::BetError;
use crate::events::BetRefundedEvent;
use crate::payout;
use crate::states::*;

/// Refund timeout in slots, ~1 hour at 400ms per slot.
pub const TIMEOUT_SLOTS: u64 = 9_000;

/// Lets the player reclaim the stake of a bet the house never resolved.
///
/// Without this escape hatch a house that refuses to sign would keep the
/// escrowed stake locked forever. The timeout gives the house ample time to
/// resolve first; afterwards the stake returns to the player, the vault's
/// reservation is released and the bet account closes to the player.
pub fn refund_bet(ctx: Context<RefundBet>) -> Result<()> {
    let bet = &ctx.accounts.bet;
    let house_vault = &mut ctx.accounts.house_vault;
    let clock = Clock::get()?;

    bet.ensure_pending()?;

    let slots_elapsed = clock
        .slot
        .checked_sub(bet.placed_slot)
        .ok_or(BetError::ArithmeticOverflow)?;
    require!(slots_elapsed > TIMEOUT_SLOTS, BetError::TimeoutNotReached);

    // Release the exposure reserved at placement
    house_vault.release(payout::reserved_exposure(bet.amount, bet.threshold)?)?;

    // Return the escrowed stake vault -> player
    let vault_info = house_vault.to_account_info();
    require!(
        vault_info.lamports() >= bet.amount,
        BetError::InsufficientLiquidity
    );
    **vault_info.try_borrow_mut_lamports()? -= bet.amount;
    **ctx.accounts.player.to_account_info().try_borrow_mut_lamports()? += bet.amount;

    emit!(BetRefundedEvent {
        bet: bet.key(),
        player: bet.player,
        house_vault: bet.house_vault,
        amount: bet.amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RefundBet<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    /// CHECK: Only used for vault seeds verification
    pub house_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        has_one = house_authority,
        seeds = [VAULT_SEED.as_bytes(), house_authority.key().as_ref()],
        bump = house_vault.bump
    )]
    pub house_vault: Account<'info, HouseVault>,

    #[account(
        mut,
        has_one = player,
        has_one = house_vault,
        close = player,
        seeds = [
            BET_SEED.as_bytes(),
            house_vault.key().as_ref(),
            bet.seed.to_le_bytes().as_ref()
        ],
        bump = bet.bump
    )]
    pub bet: Account<'info, Bet>,
}
