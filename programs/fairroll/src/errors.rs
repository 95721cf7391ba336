use anchor_lang::prelude::*;

#[error_code]
pub enum BetError {
    #[msg("A bet already exists for this vault and seed")]
    SeedCollision,
    #[msg("Insufficient free vault liquidity")]
    InsufficientLiquidity,
    #[msg("Signature does not match the bet's canonical message")]
    InvalidSignature,
    #[msg("Signature was not produced by the vault's house authority")]
    UnauthorizedHouse,
    #[msg("Bet has already been resolved")]
    AlreadyResolved,
    #[msg("Threshold must be between 1 and 99")]
    ThresholdOutOfRange,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("House vault is locked")]
    HouseLocked,
    #[msg("Refund timeout not yet reached")]
    TimeoutNotReached,
    #[msg("Bet is still pending resolution")]
    BetStillPending,
    #[msg("Companion instruction is not the Ed25519 program")]
    Ed25519Program,
    #[msg("Ed25519 instruction must not reference accounts")]
    Ed25519Accounts,
    #[msg("Malformed Ed25519 instruction payload")]
    Ed25519Payload,
    #[msg("Ed25519 entry references data outside its own instruction")]
    Ed25519Header,
}
