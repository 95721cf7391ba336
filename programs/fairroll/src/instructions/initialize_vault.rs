use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::BetError;
use crate::events::VaultInitializedEvent;
use crate::states::*;

/// Creates the house vault PDA and funds it with the house's initial
/// liquidity. One vault per house authority; a second call fails because the
/// PDA already exists.
pub fn initialize_vault(ctx: Context<InitializeVault>, funding_amount: u64) -> Result<()> {
    let house_vault = &mut ctx.accounts.house_vault;
    let clock = Clock::get()?;

    require!(funding_amount > 0, BetError::InvalidAmount);

    house_vault.house_authority = ctx.accounts.house_authority.key();
    house_vault.locked = false;
    house_vault.total_reserved = 0;
    house_vault.bump = ctx.bumps.house_vault;

    // Move initial liquidity from the house into the vault
    let transfer_ix = system_program::Transfer {
        from: ctx.accounts.house_authority.to_account_info(),
        to: house_vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), transfer_ix);
    system_program::transfer(cpi_ctx, funding_amount)?;

    emit!(VaultInitializedEvent {
        house_vault: house_vault.key(),
        house_authority: house_vault.house_authority,
        funding_amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub house_authority: Signer<'info>,

    #[account(
        init,
        payer = house_authority,
        space = 8 + HouseVault::INIT_SPACE,
        seeds = [VAULT_SEED.as_bytes(), house_authority.key().as_ref()],
        bump
    )]
    pub house_vault: Account<'info, HouseVault>,

    pub system_program: Program<'info, System>,
}
