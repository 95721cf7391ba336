use anchor_lang::prelude::*;

use crate::events::HouseLockToggledEvent;
use crate::states::*;

/// Flips the vault lock. A locked vault rejects new bets but still allows
/// resolution and refunds, so locking can never strand escrowed stakes.
pub fn toggle_house_lock(ctx: Context<ToggleHouseLock>) -> Result<()> {
    let house_vault = &mut ctx.accounts.house_vault;
    let clock = Clock::get()?;

    house_vault.locked = !house_vault.locked;

    emit!(HouseLockToggledEvent {
        house_vault: house_vault.key(),
        house_authority: house_vault.house_authority,
        locked: house_vault.locked,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ToggleHouseLock<'info> {
    pub house_authority: Signer<'info>,

    #[account(
        mut,
        has_one = house_authority,
    )]
    pub house_vault: Account<'info, HouseVault>,
}
