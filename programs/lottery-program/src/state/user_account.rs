use anchor_lang::prelude::*;

use crate::error::LotteryError;

pub const MAX_NAME_LEN: usize = 32;

// 8 discriminator + 32 owner + 8 balance + 8 total_spent + 8 total_tickets
// + 37 username (Option + length prefix + 32) + 36 first_name (length prefix + 32)
// + 8 registered_at + 1 bump
pub const USER_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 8 + 8 + (1 + 4 + MAX_NAME_LEN) + (4 + MAX_NAME_LEN) + 8 + 1;

/// Per-user star ledger. Created on first interaction, never deleted.
/// `balance` can only rise through an operator grant and only fall through
/// a ticket purchase; `total_spent` and `total_tickets` are monotone.
#[account]
pub struct UserAccount {
    pub owner: Pubkey,
    pub balance: u64,
    pub total_spent: u64,
    pub total_tickets: u64,
    pub username: Option<String>,
    pub first_name: String,
    pub registered_at: i64,
    pub bump: u8,
}

impl UserAccount {
    /// Exchange `price` stars for one ticket. Debit and counters move
    /// together or not at all; the caller records the ticket itself.
    pub fn debit_for_ticket(&mut self, price: u64) -> Result<()> {
        let balance = self
            .balance
            .checked_sub(price)
            .ok_or(LotteryError::InsufficientFunds)?;
        let total_spent = self
            .total_spent
            .checked_add(price)
            .ok_or(LotteryError::Overflow)?;
        let total_tickets = self
            .total_tickets
            .checked_add(1)
            .ok_or(LotteryError::Overflow)?;

        self.balance = balance;
        self.total_spent = total_spent;
        self.total_tickets = total_tickets;
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LotteryError::Overflow)?;
        Ok(())
    }
}
