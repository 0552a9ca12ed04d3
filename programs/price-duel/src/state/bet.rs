use anchor_lang::prelude::*;
use crate::errors::DuelError;

const DAY: i64 = 24 * 60 * 60;

#[account]
#[derive(Debug)]
pub struct Bet {
    pub bet_id: u64,
    pub amount: u64,                    // stake per side
    pub opening_price: i128,            // 18 decimals, zero until joined
    pub creator_position: Position,
    pub expiration: ExpirationWindow,   // deadline for a counterparty to join
    pub closing: ClosingWindow,         // settlement allowed from here on
    pub status: BetStatus,
    pub creator: Pubkey,
    pub joiner: Pubkey,
    pub winner: Pubkey,
    pub created_at: i64,
    pub bump: u8,
}

impl Bet {
    // 8 (discriminator)
    // 8 (bet_id) + 8 (amount) + 16 (opening_price)
    // 1 (creator_position) + 1 (expiration) + 1 (closing) + 1 (status)
    // 32 (creator) + 32 (joiner) + 32 (winner)
    // 8 (created_at) + 1 (bump)
    pub const LEN: usize = 8 + 8 + 8 + 16 + 1 + 1 + 1 + 1 + 32 * 3 + 8 + 1;

    #[allow(clippy::too_many_arguments)]
    pub fn open(
        &mut self,
        bet_id: u64,
        creator: Pubkey,
        amount: u64,
        position: Position,
        expiration: ExpirationWindow,
        closing: ClosingWindow,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(creator != Pubkey::default(), DuelError::AddressZero);
        require!(amount > 0, DuelError::AmountZero);

        self.bet_id = bet_id;
        self.amount = amount;
        self.opening_price = 0;
        self.creator_position = position;
        self.expiration = expiration;
        self.closing = closing;
        self.status = BetStatus::Pending;
        self.creator = creator;
        self.joiner = Pubkey::default();
        self.winner = Pubkey::default();
        self.created_at = now;
        self.bump = bump;
        Ok(())
    }

    /// The creator doubles as the existence sentinel.
    pub fn ensure_exists(&self) -> Result<()> {
        require!(self.creator != Pubkey::default(), DuelError::BetNotFound);
        Ok(())
    }

    pub fn expiration_deadline(&self) -> Result<i64> {
        self.created_at
            .checked_add(self.expiration.duration_secs())
            .ok_or(Error::from(DuelError::ArithmeticOverflow))
    }

    pub fn closing_deadline(&self) -> Result<i64> {
        self.created_at
            .checked_add(self.closing.duration_secs())
            .ok_or(Error::from(DuelError::ArithmeticOverflow))
    }

    pub fn is_expired(&self, now: i64) -> Result<bool> {
        Ok(now >= self.expiration_deadline()?)
    }

    pub fn is_closed(&self, now: i64) -> Result<bool> {
        Ok(now >= self.closing_deadline()?)
    }

    pub fn check_join(
        &self,
        joiner: &Pubkey,
        amount: u64,
        position: Position,
        joiner_credit: u64,
        now: i64,
    ) -> Result<()> {
        self.ensure_exists()?;
        require!(self.status == BetStatus::Pending, DuelError::BetNotPending);
        require!(!self.is_expired(now)?, DuelError::BetExpired);
        require!(position != self.creator_position, DuelError::CannotJoinSamePosition);
        require!(amount == self.amount, DuelError::AmountMismatch);
        require!(*joiner != self.creator, DuelError::CannotJoinOwnBet);
        // Unreachable while the pending check above holds; kept as a backstop.
        require!(joiner_credit == 0, DuelError::CannotJoinBetTwice);
        Ok(())
    }

    pub fn activate(&mut self, joiner: Pubkey, opening_price: i128) -> Result<()> {
        require!(joiner != Pubkey::default(), DuelError::AddressZero);
        self.joiner = joiner;
        self.opening_price = opening_price;
        self.status = BetStatus::Active;
        Ok(())
    }

    pub fn check_settle(&self, now: i64) -> Result<()> {
        self.ensure_exists()?;
        require!(self.status == BetStatus::Active, DuelError::BetNotActive);
        require!(self.is_closed(now)?, DuelError::BetNotClosed);
        Ok(())
    }

    /// Ties go to the creator on either side: a LONG creator wins when the
    /// price did not fall, a SHORT creator wins when it did not rise.
    pub fn creator_wins(&self, closing_price: i128) -> bool {
        match self.creator_position {
            Position::Long => closing_price >= self.opening_price,
            Position::Short => closing_price <= self.opening_price,
        }
    }

    /// Records the winner and moves the bet to its terminal state.
    pub fn settle(&mut self, closing_price: i128) -> Pubkey {
        self.winner = if self.creator_wins(closing_price) {
            self.creator
        } else {
            self.joiner
        };
        self.status = BetStatus::Closed;
        self.winner
    }

    pub fn check_withdraw(&self, caller: &Pubkey) -> Result<()> {
        self.ensure_exists()?;
        require!(
            self.winner != Pubkey::default() && *caller == self.winner,
            DuelError::NotWinner
        );
        Ok(())
    }

    pub fn check_cancel(&self, caller: &Pubkey) -> Result<()> {
        self.ensure_exists()?;
        require!(*caller == self.creator, DuelError::NotCreator);
        require!(self.status == BetStatus::Pending, DuelError::BetNotPending);
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum Position {
    Long,
    Short,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum BetStatus {
    Pending,
    Active,
    Closed,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum ExpirationWindow {
    OneDay,
    OneWeek,
    TwoWeeks,
}

impl ExpirationWindow {
    pub fn duration_secs(self) -> i64 {
        match self {
            ExpirationWindow::OneDay => DAY,
            ExpirationWindow::OneWeek => 7 * DAY,
            ExpirationWindow::TwoWeeks => 14 * DAY,
        }
    }
}

impl TryFrom<u8> for ExpirationWindow {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(ExpirationWindow::OneDay),
            1 => Ok(ExpirationWindow::OneWeek),
            2 => Ok(ExpirationWindow::TwoWeeks),
            _ => err!(DuelError::InvalidExpirationEnum),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum ClosingWindow {
    ThirtyDays,
    SixtyDays,
    NinetyDays,
}

impl ClosingWindow {
    pub fn duration_secs(self) -> i64 {
        match self {
            ClosingWindow::ThirtyDays => 30 * DAY,
            ClosingWindow::SixtyDays => 60 * DAY,
            ClosingWindow::NinetyDays => 90 * DAY,
        }
    }
}

impl TryFrom<u8> for ClosingWindow {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(ClosingWindow::ThirtyDays),
            1 => Ok(ClosingWindow::SixtyDays),
            2 => Ok(ClosingWindow::NinetyDays),
            _ => err!(DuelError::InvalidClosingEnum),
        }
    }
}
