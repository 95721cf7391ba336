use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::BetError;
use crate::events::BetPlacedEvent;
use crate::payout;
use crate::states::*;

/// Escrows the player's stake and creates the bet record.
///
/// The bet PDA is derived from `(vault, seed)`, so the player-chosen seed
/// structurally guarantees per-bet uniqueness: placing twice with the same
/// seed collides on the same address and account creation aborts. The bet's
/// full settlement exposure (win payout, or the stake a timed-out refund
/// owes, whichever is larger) is reserved against the vault up front, above
/// the vault's rent-exempt floor, keeping the vault solvent for the
/// aggregate exposure of all pending bets.
pub fn place_bet(
    ctx: Context<PlaceBet>,
    seed: u128,
    threshold: u8,
    amount: u64,
) -> Result<()> {
    let house_vault = &mut ctx.accounts.house_vault;
    let bet = &mut ctx.accounts.bet;
    let clock = Clock::get()?;

    require!(!house_vault.locked, BetError::HouseLocked);
    payout::validate_threshold(threshold)?;
    require!(amount > 0, BetError::InvalidAmount);

    // Exposure this bet adds to the vault: the win payout or the stake
    // refund, whichever is larger
    let potential_payout = payout::win_payout(amount, threshold)?;
    let exposure = payout::reserved_exposure(amount, threshold)?;

    // Escrow the stake player -> vault
    let transfer_ix = system_program::Transfer {
        from: ctx.accounts.player.to_account_info(),
        to: house_vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), transfer_ix);
    system_program::transfer(cpi_ctx, amount)?;

    // Check liquidity above prior reservations and the vault's rent floor
    // (post-escrow balance) covers the new exposure
    let vault_info = house_vault.to_account_info();
    let rent_exempt = Rent::get()?.minimum_balance(vault_info.data_len());
    require!(
        house_vault.available_for(vault_info.lamports(), rent_exempt) >= exposure,
        BetError::InsufficientLiquidity
    );
    house_vault.reserve(exposure)?;

    bet.seed = seed;
    bet.player = ctx.accounts.player.key();
    bet.house_vault = house_vault.key();
    bet.amount = amount;
    bet.threshold = threshold;
    bet.status = BetStatus::Pending;
    bet.bump = ctx.bumps.bet;
    bet.placed_slot = clock.slot;

    emit!(BetPlacedEvent {
        bet: bet.key(),
        player: bet.player,
        house_vault: bet.house_vault,
        seed,
        amount,
        threshold,
        potential_payout,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(seed: u128)]
pub struct PlaceBet<'info> {
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
        init,
        payer = player,
        space = 8 + Bet::INIT_SPACE,
        seeds = [
            BET_SEED.as_bytes(),
            house_vault.key().as_ref(),
            seed.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub bet: Account<'info, Bet>,

    pub system_program: Program<'info, System>,
}
