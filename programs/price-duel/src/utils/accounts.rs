use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program;
use crate::errors::DuelError;
use crate::state::{Bet, UserCredit};

/// Deserializes a program-owned account, or `None` when the address holds
/// nothing this program wrote (never created, closed, or foreign).
pub fn read<T: AccountDeserialize>(info: &AccountInfo) -> Option<T> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return None;
    }
    let data = info.try_borrow_data().ok()?;
    T::try_deserialize(&mut &data[..]).ok()
}

pub fn write<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut cursor: &mut [u8] = &mut data[..];
    value.try_serialize(&mut cursor)
}

pub fn load_bet(info: &AccountInfo) -> Result<Bet> {
    let bet: Bet = read(info).ok_or(DuelError::BetNotFound)?;
    bet.ensure_exists()?;
    Ok(bet)
}

/// Loads the credit of `owner` on `bet_id`, checking the account sits at its PDA.
pub fn load_credit(info: &AccountInfo, bet_id: u64, owner: &Pubkey) -> Result<UserCredit> {
    require_keys_eq!(
        *info.key,
        UserCredit::address(bet_id, owner),
        DuelError::InvalidCreditAccount
    );
    read(info).ok_or(error!(DuelError::NoCredit))
}

/// Drains rent to `destination` and hands the account back to the system program.
pub fn close<'info>(info: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<()> {
    let refunded = destination
        .lamports()
        .checked_add(info.lamports())
        .ok_or(DuelError::ArithmeticOverflow)?;
    **destination.try_borrow_mut_lamports()? = refunded;
    **info.try_borrow_mut_lamports()? = 0;
    info.assign(&system_program::ID);
    info.resize(0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use crate::state::{BetStatus, ClosingWindow, ExpirationWindow, Position};

    fn bet(creator: Pubkey) -> Bet {
        Bet {
            bet_id: 3,
            amount: 500,
            opening_price: 0,
            creator_position: Position::Long,
            expiration: ExpirationWindow::OneDay,
            closing: ClosingWindow::ThirtyDays,
            status: BetStatus::Pending,
            creator,
            joiner: Pubkey::default(),
            winner: Pubkey::default(),
            created_at: 1_700_000_000,
            bump: 254,
        }
    }

    fn encode<T: AccountSerialize>(value: &T) -> Vec<u8> {
        let mut data = Vec::new();
        value.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn stored_bet_loads() {
        let key = Pubkey::new_unique();
        let creator = Pubkey::new_from_array([7; 32]);
        let mut lamports = 1_000_000;
        let mut data = encode(&bet(creator));
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);

        let loaded = load_bet(&info).unwrap();
        assert_eq!(loaded.creator, creator);
        assert_eq!(loaded.amount, 500);
    }

    #[test]
    fn erased_bet_is_not_found() {
        let key = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &system_program::ID, false, 0);
        assert_eq!(load_bet(&info).unwrap_err(), Error::from(DuelError::BetNotFound));
    }

    #[test]
    fn foreign_owner_is_not_found() {
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let mut data = encode(&bet(Pubkey::new_from_array([7; 32])));
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &system_program::ID, false, 0);
        assert_eq!(load_bet(&info).unwrap_err(), Error::from(DuelError::BetNotFound));
    }

    #[test]
    fn empty_program_account_is_not_found() {
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);
        assert_eq!(load_bet(&info).unwrap_err(), Error::from(DuelError::BetNotFound));
    }

    #[test]
    fn zeroed_creator_is_not_found() {
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let mut data = encode(&bet(Pubkey::default()));
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);
        assert_eq!(load_bet(&info).unwrap_err(), Error::from(DuelError::BetNotFound));
    }

    #[test]
    fn credit_at_wrong_address_is_refused() {
        let owner = Pubkey::new_from_array([7; 32]);
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let mut data = encode(&UserCredit { owner, bet_id: 3, amount: 500, bump: 255 });
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);
        assert_eq!(
            load_credit(&info, 3, &owner).unwrap_err(),
            Error::from(DuelError::InvalidCreditAccount)
        );
    }

    #[test]
    fn credit_round_trips_through_its_account() {
        let owner = Pubkey::new_from_array([7; 32]);
        let key = UserCredit::address(3, &owner);
        let mut lamports = 1_000_000;
        let mut data = encode(&UserCredit { owner, bet_id: 3, amount: 500, bump: 255 });
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);

        let mut credit = load_credit(&info, 3, &owner).unwrap();
        assert_eq!(credit.take().unwrap(), 500);
        write(&info, &credit).unwrap();
        assert_eq!(load_credit(&info, 3, &owner).unwrap().amount, 0);
    }

    #[test]
    fn stored_bet_state_errors_come_before_any_credit_lookup() {
        let key = Pubkey::new_unique();
        let creator = Pubkey::new_from_array([7; 32]);
        let mut lamports = 1_000_000;
        let mut data = encode(&bet(creator));
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);

        // a pending bet past its closing window: nobody holds a joiner credit yet
        let loaded = load_bet(&info).unwrap();
        let after_close = loaded.created_at + 31 * 24 * 60 * 60;
        assert_eq!(loaded.check_settle(after_close).unwrap_err(), Error::from(DuelError::BetNotActive));
        // no winner yet, so the credit address would be derived from nothing
        assert_eq!(loaded.check_withdraw(&creator).unwrap_err(), Error::from(DuelError::NotWinner));
        assert_eq!(
            loaded.check_cancel(&Pubkey::new_from_array([9; 32])).unwrap_err(),
            Error::from(DuelError::NotCreator)
        );
    }

    #[test]
    fn settled_bet_written_back_reads_as_closed() {
        let key = Pubkey::new_unique();
        let creator = Pubkey::new_from_array([7; 32]);
        let mut lamports = 1_000_000;
        let mut data = encode(&bet(creator));
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);

        let mut stored = load_bet(&info).unwrap();
        stored.activate(Pubkey::new_from_array([9; 32]), 100).unwrap();
        assert_eq!(stored.settle(100), creator);
        write(&info, &stored).unwrap();

        let reloaded = load_bet(&info).unwrap();
        assert_eq!(reloaded.status, BetStatus::Closed);
        assert_eq!(reloaded.winner, creator);
    }
}
