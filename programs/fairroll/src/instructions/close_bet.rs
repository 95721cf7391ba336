use anchor_lang::prelude::*;

use crate::errors::BetError;
use crate::events::BetClosedEvent;
use crate::states::*;

/// Reclaims the rent of a resolved bet record. Pending bets cannot be
/// closed this way; they settle through `resolve_bet` or `refund_bet`.
pub fn close_bet(ctx: Context<CloseBet>) -> Result<()> {
    let bet = &ctx.accounts.bet;
    let clock = Clock::get()?;

    require!(bet.status == BetStatus::Resolved, BetError::BetStillPending);

    emit!(BetClosedEvent {
        bet: bet.key(),
        player: bet.player,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CloseBet<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        has_one = player,
        close = player,
    )]
    pub bet: Account<'info, Bet>,
}
