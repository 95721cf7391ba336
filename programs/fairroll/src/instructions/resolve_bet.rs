use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::load_instruction_at_checked;
use solana_sdk_ids::ed25519_program;

use crate::ed25519::Ed25519Entry;
use crate::entropy;
use crate::errors::BetError;
use crate::events::BetResolvedEvent;
use crate::payout;
use crate::states::*;

/// Resolves a pending bet from the house's signature over its canonical
/// message.
///
/// The transaction must carry a native Ed25519 verification instruction at
/// index 0, checked here through the Instructions sysvar. Binding that
/// verification to this exact bet (house key, signature argument, canonical
/// message bytes) makes the resolution un-replayable: the signature fits no
/// other bet, and the Pending -> Resolved transition fires exactly once.
///
/// The verified signature bytes are then the entropy source for the roll.
pub fn resolve_bet(ctx: Context<ResolveBet>, signature: [u8; 64]) -> Result<()> {
    let bet = &mut ctx.accounts.bet;
    let house_vault = &mut ctx.accounts.house_vault;
    let clock = Clock::get()?;

    bet.ensure_pending()?;
    verify_house_signature(
        &ctx.accounts.instruction_sysvar,
        &house_vault.house_authority,
        &signature,
        &bet.to_signed_bytes(),
    )?;

    let roll = entropy::roll_from_signature(&signature);
    let won = entropy::is_win(roll, bet.threshold);

    // Exposure reserved at placement is settled either way
    let potential_payout = payout::win_payout(bet.amount, bet.threshold)?;
    house_vault.release(payout::reserved_exposure(bet.amount, bet.threshold)?)?;

    let payout = if won { potential_payout } else { 0 };
    if won {
        let vault_info = house_vault.to_account_info();
        require!(
            vault_info.lamports() >= payout,
            BetError::InsufficientLiquidity
        );
        **vault_info.try_borrow_mut_lamports()? -= payout;
        **ctx.accounts.player.try_borrow_mut_lamports()? += payout;
    }

    bet.mark_resolved()?;

    msg!(
        "Bet resolved: roll={} threshold={} won={} payout={}",
        roll,
        bet.threshold,
        won,
        payout
    );

    emit!(BetResolvedEvent {
        bet: bet.key(),
        player: bet.player,
        house_vault: bet.house_vault,
        roll,
        threshold: bet.threshold,
        won,
        payout,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Cross-checks the companion Ed25519 instruction against this bet.
fn verify_house_signature(
    instruction_sysvar: &AccountInfo,
    house_authority: &Pubkey,
    signature: &[u8; 64],
    message: &[u8],
) -> Result<()> {
    let ix = load_instruction_at_checked(0, instruction_sysvar)?;

    require_keys_eq!(ix.program_id, ed25519_program::ID, BetError::Ed25519Program);
    require!(ix.accounts.is_empty(), BetError::Ed25519Accounts);

    let entry = Ed25519Entry::parse_single(&ix.data)?;
    require_keys_eq!(entry.public_key, *house_authority, BetError::UnauthorizedHouse);
    require!(&entry.signature == signature, BetError::InvalidSignature);
    require!(entry.message == message, BetError::InvalidSignature);

    Ok(())
}

#[derive(Accounts)]
pub struct ResolveBet<'info> {
    #[account(mut)]
    pub house_authority: Signer<'info>,

    /// CHECK: Payout destination, validated against the bet record
    #[account(mut)]
    pub player: UncheckedAccount<'info>,

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
        seeds = [
            BET_SEED.as_bytes(),
            house_vault.key().as_ref(),
            bet.seed.to_le_bytes().as_ref()
        ],
        bump = bet.bump
    )]
    pub bet: Account<'info, Bet>,

    /// CHECK: Instructions sysvar, address-constrained
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instruction_sysvar: AccountInfo<'info>,
}
