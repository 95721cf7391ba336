//! Parsing of native Ed25519 program instruction payloads, as read back
//! through the Instructions sysvar during bet resolution.
//!
//! Layout: `[count: u8, padding: u8]`, then `count` packed offset tables of
//! 14 bytes each, then the referenced data. Resolution only ever accepts a
//! payload with exactly one entry whose pubkey, signature and message all
//! live inline in the same instruction; entries referencing other
//! instructions cannot be trusted from introspection and are rejected.

use anchor_lang::prelude::*;

use crate::errors::BetError;

pub const PUBKEY_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 64;
pub const OFFSETS_LEN: usize = 14;
pub const OFFSETS_START: usize = 2;
pub const DATA_START: usize = OFFSETS_START + OFFSETS_LEN;

/// Instruction index marking "this instruction" in an offsets table.
const INLINE: u16 = u16::MAX;

/// Offsets table of one Ed25519 verification entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519Offsets {
    pub signature_offset: u16,
    pub signature_instruction_index: u16,
    pub public_key_offset: u16,
    pub public_key_instruction_index: u16,
    pub message_data_offset: u16,
    pub message_data_size: u16,
    pub message_instruction_index: u16,
}

impl Ed25519Offsets {
    /// Offsets for the standard single-signature payload shape produced by
    /// SDK clients: pubkey at 16, signature at 48, message at 112.
    pub fn for_single(message_len: u16) -> Self {
        Self {
            signature_offset: (DATA_START + PUBKEY_LEN) as u16,
            signature_instruction_index: INLINE,
            public_key_offset: DATA_START as u16,
            public_key_instruction_index: INLINE,
            message_data_offset: (DATA_START + PUBKEY_LEN + SIGNATURE_LEN) as u16,
            message_data_size: message_len,
            message_instruction_index: INLINE,
        }
    }

    pub fn pack(&self) -> [u8; OFFSETS_LEN] {
        let mut out = [0u8; OFFSETS_LEN];
        out[0..2].copy_from_slice(&self.signature_offset.to_le_bytes());
        out[2..4].copy_from_slice(&self.signature_instruction_index.to_le_bytes());
        out[4..6].copy_from_slice(&self.public_key_offset.to_le_bytes());
        out[6..8].copy_from_slice(&self.public_key_instruction_index.to_le_bytes());
        out[8..10].copy_from_slice(&self.message_data_offset.to_le_bytes());
        out[10..12].copy_from_slice(&self.message_data_size.to_le_bytes());
        out[12..14].copy_from_slice(&self.message_instruction_index.to_le_bytes());
        out
    }

    pub fn unpack(data: &[u8]) -> Result<Self> {
        require_eq!(data.len(), OFFSETS_LEN, BetError::Ed25519Payload);
        let word = |i: usize| u16::from_le_bytes([data[i], data[i + 1]]);
        Ok(Self {
            signature_offset: word(0),
            signature_instruction_index: word(2),
            public_key_offset: word(4),
            public_key_instruction_index: word(6),
            message_data_offset: word(8),
            message_data_size: word(10),
            message_instruction_index: word(12),
        })
    }

    fn all_inline(&self) -> bool {
        self.signature_instruction_index == INLINE
            && self.public_key_instruction_index == INLINE
            && self.message_instruction_index == INLINE
    }
}

/// One fully resolved Ed25519 verification entry.
pub struct Ed25519Entry {
    pub public_key: Pubkey,
    pub signature: [u8; SIGNATURE_LEN],
    pub message: Vec<u8>,
}

impl Ed25519Entry {
    /// Parses a payload that must contain exactly one inline entry.
    pub fn parse_single(data: &[u8]) -> Result<Self> {
        let count = *data.first().ok_or(BetError::Ed25519Payload)? as usize;
        require_eq!(count, 1, BetError::Ed25519Payload);

        let offsets = Ed25519Offsets::unpack(
            data.get(OFFSETS_START..DATA_START)
                .ok_or(BetError::Ed25519Payload)?,
        )?;
        require!(offsets.all_inline(), BetError::Ed25519Header);

        let public_key = Pubkey::try_from(field(data, offsets.public_key_offset, PUBKEY_LEN)?)
            .map_err(|_| error!(BetError::Ed25519Payload))?;

        let mut signature = [0u8; SIGNATURE_LEN];
        signature.copy_from_slice(field(data, offsets.signature_offset, SIGNATURE_LEN)?);

        let message = field(
            data,
            offsets.message_data_offset,
            offsets.message_data_size as usize,
        )?
        .to_vec();

        Ok(Self {
            public_key,
            signature,
            message,
        })
    }
}

/// Bounds-checked slice of `len` bytes at `offset`.
fn field(data: &[u8], offset: u16, len: usize) -> Result<&[u8]> {
    let start = offset as usize;
    let end = start
        .checked_add(len)
        .ok_or(BetError::Ed25519Payload)?;
    data.get(start..end)
        .ok_or_else(|| error!(BetError::Ed25519Payload))
}
