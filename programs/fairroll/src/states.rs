use anchor_lang::prelude::*;

use crate::errors::BetError;

// PDA seeds
pub const VAULT_SEED: &str = "vault";
pub const BET_SEED: &str = "bet";

/// Length of the canonical bet message the house signs:
/// seed (16) + player (32) + house_vault (32) + amount (8) + threshold (1)
/// + status tag (1).
pub const SIGNED_MESSAGE_LEN: usize = 90;

#[derive(AnchorDeserialize, AnchorSerialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum BetStatus {
    Pending,
    Resolved,
}

/// Pooled house liquidity. The PDA's lamports are the pool; `total_reserved`
/// tracks the aggregate settlement exposure of all pending bets, so the
/// liquidity free for new bets or withdrawal is what remains above both the
/// reservations and the account's rent-exempt floor.
#[account]
#[derive(InitSpace)]
pub struct HouseVault {
    pub house_authority: Pubkey,
    pub locked: bool,
    pub total_reserved: u64, // lamports reserved for pending bets
    pub bump: u8,
}

impl HouseVault {
    /// Liquidity not reserved for pending bets and not part of the rent
    /// floor that must stay in the account.
    pub fn available_for(&self, lamports: u64, rent_exempt: u64) -> u64 {
        lamports
            .saturating_sub(self.total_reserved)
            .saturating_sub(rent_exempt)
    }

    pub fn reserve(&mut self, amount: u64) -> Result<()> {
        self.total_reserved = self
            .total_reserved
            .checked_add(amount)
            .ok_or(BetError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn release(&mut self, amount: u64) -> Result<()> {
        self.total_reserved = self
            .total_reserved
            .checked_sub(amount)
            .ok_or(BetError::ArithmeticOverflow)?;
        Ok(())
    }
}

/// Per-wager escrow record. Field order up to `status` is load-bearing: it is
/// the canonical message layout (minus the account discriminator) that the
/// house signs. `bump` and `placed_slot` are PDA metadata and are excluded.
#[account]
#[derive(InitSpace)]
pub struct Bet {
    pub seed: u128,
    pub player: Pubkey,
    pub house_vault: Pubkey,
    pub amount: u64,
    pub threshold: u8, // win chance in percent, 1..=99
    pub status: BetStatus,
    pub bump: u8,
    pub placed_slot: u64,
}

impl Bet {
    /// Serializes the canonical message the house must sign to resolve this
    /// bet. Little-endian integers, account field order, no discriminator.
    pub fn to_signed_bytes(&self) -> [u8; SIGNED_MESSAGE_LEN] {
        let mut msg = [0u8; SIGNED_MESSAGE_LEN];
        msg[0..16].copy_from_slice(&self.seed.to_le_bytes());
        msg[16..48].copy_from_slice(self.player.as_ref());
        msg[48..80].copy_from_slice(self.house_vault.as_ref());
        msg[80..88].copy_from_slice(&self.amount.to_le_bytes());
        msg[88] = self.threshold;
        msg[89] = self.status as u8;
        msg
    }

    pub fn ensure_pending(&self) -> Result<()> {
        require!(self.status == BetStatus::Pending, BetError::AlreadyResolved);
        Ok(())
    }

    pub fn mark_resolved(&mut self) -> Result<()> {
        self.ensure_pending()?;
        self.status = BetStatus::Resolved;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bet() -> Bet {
        Bet {
            seed: 0x0102_0304_0506_0708_090a_0b0c_0d0e_0f10,
            player: Pubkey::new_unique(),
            house_vault: Pubkey::new_unique(),
            amount: 1_000_000,
            threshold: 50,
            status: BetStatus::Pending,
            bump: 254,
            placed_slot: 42,
        }
    }

    #[test]
    fn signed_message_layout() {
        let bet = sample_bet();
        let msg = bet.to_signed_bytes();
        assert_eq!(msg.len(), SIGNED_MESSAGE_LEN);
        assert_eq!(&msg[0..16], &bet.seed.to_le_bytes());
        assert_eq!(&msg[16..48], bet.player.as_ref());
        assert_eq!(&msg[48..80], bet.house_vault.as_ref());
        assert_eq!(&msg[80..88], &bet.amount.to_le_bytes());
        assert_eq!(msg[88], 50);
        assert_eq!(msg[89], 0); // Pending
    }

    #[test]
    fn signed_message_binds_every_field() {
        let bet = sample_bet();
        let base = bet.to_signed_bytes();

        let mut tampered = sample_bet();
        tampered.player = bet.player;
        tampered.house_vault = bet.house_vault;
        tampered.amount += 1;
        assert_ne!(base, tampered.to_signed_bytes());

        tampered.amount = bet.amount;
        tampered.seed ^= 1;
        assert_ne!(base, tampered.to_signed_bytes());

        tampered.seed = bet.seed;
        tampered.threshold = 51;
        assert_ne!(base, tampered.to_signed_bytes());

        tampered.threshold = bet.threshold;
        tampered.player = Pubkey::new_unique();
        assert_ne!(base, tampered.to_signed_bytes());
    }

    #[test]
    fn signed_message_excludes_pda_metadata() {
        let bet = sample_bet();
        let mut other = sample_bet();
        other.player = bet.player;
        other.house_vault = bet.house_vault;
        other.bump = 200;
        other.placed_slot = 9_999;
        assert_eq!(bet.to_signed_bytes(), other.to_signed_bytes());
    }

    #[test]
    fn reserve_release_round_trip() {
        let mut vault = HouseVault {
            house_authority: Pubkey::new_unique(),
            locked: false,
            total_reserved: 0,
            bump: 255,
        };
        vault.reserve(500).unwrap();
        vault.reserve(250).unwrap();
        assert_eq!(vault.total_reserved, 750);
        assert_eq!(vault.available_for(1_000, 0), 250);
        vault.release(750).unwrap();
        assert_eq!(vault.total_reserved, 0);
        assert!(vault.release(1).is_err());
    }

    #[test]
    fn available_liquidity_keeps_rent_floor() {
        let mut vault = HouseVault {
            house_authority: Pubkey::new_unique(),
            locked: false,
            total_reserved: 0,
            bump: 255,
        };
        vault.reserve(750).unwrap();
        // Rent lamports are never lendable against bets or withdrawals
        assert_eq!(vault.available_for(1_000, 200), 50);
        assert_eq!(vault.available_for(1_000, 300), 0);
        // Saturates instead of underflowing when the pool is depleted
        assert_eq!(vault.available_for(600, 300), 0);
    }

    #[test]
    fn pending_to_resolved_is_one_way() {
        let mut bet = sample_bet();
        bet.ensure_pending().unwrap();
        bet.mark_resolved().unwrap();
        assert!(bet.ensure_pending().is_err());
        assert!(bet.mark_resolved().is_err());
    }
}
