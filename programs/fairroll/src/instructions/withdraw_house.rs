use anchor_lang::prelude::*;

use crate::errors::BetError;
use crate::events::HouseWithdrawEvent;
use crate::states::*;

/// Lets the house authority withdraw profits from the vault.
///
/// Only unreserved liquidity above the vault's rent-exempt minimum can
/// leave, so pending bets stay fully covered no matter how much the house
/// withdraws.
pub fn withdraw_house(ctx: Context<WithdrawHouse>, amount: u64) -> Result<()> {
    let house_vault = &mut ctx.accounts.house_vault;
    let vault_info = house_vault.to_account_info();
    let clock = Clock::get()?;

    require!(amount > 0, BetError::InvalidAmount);

    let rent_exempt = Rent::get()?.minimum_balance(vault_info.data_len());
    let available = house_vault.available_for(vault_info.lamports(), rent_exempt);
    require!(amount <= available, BetError::InsufficientLiquidity);

    **vault_info.try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.house_authority.try_borrow_mut_lamports()? += amount;

    msg!(
        "House withdrawal: {} lamports, {} still reserved",
        amount,
        house_vault.total_reserved
    );

    emit!(HouseWithdrawEvent {
        house_vault: house_vault.key(),
        house_authority: house_vault.house_authority,
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawHouse<'info> {
    #[account(mut)]
    pub house_authority: Signer<'info>,

    #[account(
        mut,
        has_one = house_authority,
        seeds = [VAULT_SEED.as_bytes(), house_authority.key().as_ref()],
        bump = house_vault.bump
    )]
    pub house_vault: Account<'info, HouseVault>,
}
