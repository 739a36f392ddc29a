//! Two-slot mutual matching ledger.
//!
//! Each crush pair lives in its own PDA, addressed by a routing tag the
//! counterparties derive off-chain. The account accepts exactly two
//! submissions, one per side, and rejects everything after that. Nothing
//! on-chain ties the tag or either cipher to a wallet identity: the
//! submitting signer is a one-off stealth key and rent is paid by a relay
//! operator.
//!
//! ## Flow
//! 1. A submitter derives the routing tag and a 48-byte cipher off-chain.
//! 2. `submit_crush` creates the pair account on first use and stores the
//!    cipher in slot one.
//! 3. The counterparty's submission to the same tag fills slot two.
//! 4. Any later submission fails: the pair is terminal at two fills and
//!    slots are never cleared or overwritten.

use anchor_lang::prelude::*;

declare_id!("BXYvz9iasM3rWTE4aJepmaQ4hgFhbf1keSewhhhoEt1B");

#[error_code]
pub enum CrushError {
    #[msg("Already reciprocated - this crush pair holds two submissions")]
    AlreadyMutual,
}

#[program]
pub mod crush {
    use super::*;

    /// Record one side's cipher under the given routing tag.
    ///
    /// The tag only routes: it selects the PDA and is never interpreted.
    /// Slot order is submission order, so a reconciling client can find
    /// its own cipher by byte equality and decrypt the other slot.
    pub fn submit_crush(ctx: Context<SubmitCrush>, _tag: [u8; 32], cipher: [u8; 48]) -> Result<()> {
        let account = &mut ctx.accounts.crush_account;

        account.record(cipher)?;
        account.bump = ctx.bumps.crush_account;

        msg!("Crush recorded, fill {}/2", account.filled);
        Ok(())
    }
}

#[derive(Accounts)]
#[instruction(tag: [u8; 32])]
pub struct SubmitCrush<'info> {
    #[account(
        init_if_needed,
        payer = relayer,
        space = CrushAccount::SIZE,
        seeds = [CrushAccount::SEED, tag.as_ref()],
        bump,
    )]
    pub crush_account: Account<'info, CrushAccount>,

    /// One-off stealth key authorizing this submission
    #[account(mut)]
    pub user_signer: Signer<'info>,

    /// Relay operator covering rent and transaction fees
    #[account(mut)]
    pub relayer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Pair state for one routing tag.
///
/// `filled` walks 0 -> 1 -> 2 and never moves again. Slots hold the raw
/// 48-byte ciphers in submission order; the program never looks inside
/// them.
#[account]
pub struct CrushAccount {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Submissions recorded: 0 = empty, 1 = one-sided, 2 = mutual
    pub filled: u8,

    /// First submission's cipher
    pub cipher_one: [u8; 48],

    /// Second submission's cipher
    pub cipher_two: [u8; 48],
}

impl CrushAccount {
    pub const SEED: &'static [u8] = b"crush";

    /// Account discriminator (8) + bump (1) + filled (1) + cipher_one (48)
    /// + cipher_two (48)
    pub const SIZE: usize = 8 + 1 + 1 + 48 + 48;

    /// Append a cipher if capacity remains.
    ///
    /// The first write lands in slot one, the second in slot two, and any
    /// further write is rejected with the account left untouched.
    pub fn record(&mut self, cipher: [u8; 48]) -> Result<()> {
        require!(self.filled < 2, CrushError::AlreadyMutual);

        if self.filled == 0 {
            self.cipher_one = cipher;
        } else {
            self.cipher_two = cipher;
        }
        self.filled += 1;

        Ok(())
    }
}

mod tests;
