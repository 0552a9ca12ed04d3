use anchor_lang::prelude::*;
use crate::errors::DuelError;

/// Collateral owed to `owner` on one bet. Keyed by `["credit", bet_id, owner]`.
#[account]
#[derive(Debug)]
pub struct UserCredit {
    pub owner: Pubkey,
    pub bet_id: u64,
    pub amount: u64,
    pub bump: u8,
}

impl UserCredit {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1;

    pub fn address(bet_id: u64, owner: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(
            &[b"credit", bet_id.to_le_bytes().as_ref(), owner.as_ref()],
            &crate::ID,
        )
        .0
    }

    pub fn bind(&mut self, owner: Pubkey, bet_id: u64, bump: u8) {
        self.owner = owner;
        self.bet_id = bet_id;
        self.bump = bump;
    }

    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, DuelError::AmountZero);
        self.amount = self.amount
            .checked_add(amount)
            .ok_or(DuelError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Zeroes the credit and returns what was owed.
    pub fn take(&mut self) -> Result<u64> {
        require!(self.amount > 0, DuelError::NoCredit);
        let owed = self.amount;
        self.amount = 0;
        Ok(owed)
    }
}

/// Folds both stakes into the winner's credit. Returns the pot.
pub fn award_pot(
    creator: &mut UserCredit,
    joiner: &mut UserCredit,
    creator_wins: bool,
) -> Result<u64> {
    let pot = creator.amount
        .checked_add(joiner.amount)
        .ok_or(DuelError::ArithmeticOverflow)?;
    creator.amount = 0;
    joiner.amount = 0;
    if creator_wins {
        creator.amount = pot;
    } else {
        joiner.amount = pot;
    }
    Ok(pot)
}
