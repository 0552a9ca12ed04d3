use anchor_lang::prelude::*;
use crate::errors::DuelError;

#[account]
pub struct Engine {
    pub admin: Pubkey,              // 32
    pub collateral_mint: Pubkey,    // 32
    pub vault: Pubkey,              // 32 (token account owned by this PDA)
    pub price_feed_id: [u8; 32],    // 32 (Pyth feed id)
    pub next_bet_id: u64,           // 8
    pub total_credit: u64,          // 8 (sum of every UserCredit.amount)
    pub locked: bool,               // 1
    pub bump: u8,                   // 1
    pub vault_bump: u8,             // 1
}

impl Engine {
    pub const LEN: usize = 8 + 32 * 4 + 8 + 8 + 1 + 1 + 1;

    /// Hands out the next bet id. Ids are never reused, even for cancelled bets.
    pub fn assign_bet_id(&mut self) -> Result<u64> {
        let id = self.next_bet_id;
        self.next_bet_id = id.checked_add(1).ok_or(DuelError::ArithmeticOverflow)?;
        Ok(id)
    }

    pub fn add_credit(&mut self, amount: u64) -> Result<()> {
        self.total_credit = self.total_credit
            .checked_add(amount)
            .ok_or(DuelError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn release_credit(&mut self, amount: u64) -> Result<()> {
        self.total_credit = self.total_credit
            .checked_sub(amount)
            .ok_or(DuelError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Takes the engine-wide non-reentrant lock. The caller persists the
    /// account before any CPI so a nested entry observes the flag.
    pub fn lock(&mut self) -> Result<()> {
        require!(!self.locked, DuelError::ReentrantCall);
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn engine() -> Engine {
        Engine {
            admin: Pubkey::new_from_array([1; 32]),
            collateral_mint: Pubkey::new_from_array([2; 32]),
            vault: Pubkey::new_from_array([3; 32]),
            price_feed_id: [4; 32],
            next_bet_id: 0,
            total_credit: 0,
            locked: false,
            bump: 255,
            vault_bump: 254,
        }
    }

    #[test]
    fn bet_ids_are_monotonic() {
        let mut e = engine();
        assert_eq!(e.assign_bet_id().unwrap(), 0);
        assert_eq!(e.assign_bet_id().unwrap(), 1);
        assert_eq!(e.assign_bet_id().unwrap(), 2);
        assert_eq!(e.next_bet_id, 3);
    }

    #[test]
    fn bet_id_overflow_is_reported() {
        let mut e = engine();
        e.next_bet_id = u64::MAX;
        assert_eq!(e.assign_bet_id().unwrap_err(), Error::from(DuelError::ArithmeticOverflow));
    }

    #[test]
    fn nested_lock_is_refused() {
        let mut e = engine();
        e.lock().unwrap();
        assert_eq!(e.lock().unwrap_err(), Error::from(DuelError::ReentrantCall));
        e.unlock();
        assert!(e.lock().is_ok());
    }

    #[test]
    fn releasing_more_than_outstanding_fails() {
        let mut e = engine();
        e.add_credit(1_000).unwrap();
        assert_eq!(e.release_credit(1_001).unwrap_err(), Error::from(DuelError::ArithmeticOverflow));
        e.release_credit(1_000).unwrap();
        assert_eq!(e.total_credit, 0);
    }
}
