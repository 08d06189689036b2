use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::random::SplitMix64;
use crate::state::user_account::MAX_NAME_LEN;

/// Hard capacity bounds. Account space is fixed at init, so both the ticket
/// collection and the winner list must have a known maximum.
pub const MAX_TICKETS: usize = 48;
pub const MAX_PRIZES: usize = 10;
pub const MAX_ANNOUNCEMENT_LEN: usize = 256;

// 4 number + 32 owner + 37 username (Option + length prefix + 32)
// + 36 first_name + 8 purchased_at
const TICKET_SIZE: usize = 4 + 32 + (1 + 4 + MAX_NAME_LEN) + (4 + MAX_NAME_LEN) + 8;

// 32 user + 4 vec length; the ticket numbers themselves are bounded by
// MAX_TICKETS across the whole index, not per participant
const PARTICIPANT_BASE_SIZE: usize = 32 + 4;

// 32 user + 37 username + 36 first_name + 4 ticket_number
const WINNER_SIZE: usize = 32 + (1 + 4 + MAX_NAME_LEN) + (4 + MAX_NAME_LEN) + 4;

// Space calculation (worst case):
// 8 (discriminator) +
// 8 (id) +
// 1 (prize_count) +
// 8 (ticket_price) +
// 4 + 256 (announcement) +
// 8 (created_at) +
// 8 (ends_at) +
// 9 (ended_at: Option<i64>) +
// 8 (sold_tickets) +
// 1 (is_active) +
// 4 + 48 * TICKET_SIZE (tickets) +
// 4 + 48 * PARTICIPANT_BASE_SIZE + 48 * 4 (participants index) +
// 4 + 10 * WINNER_SIZE (winners) +
// 1 (bump)
pub const LOTTERY_ACCOUNT_SIZE: usize = 8
    + 8
    + 1
    + 8
    + (4 + MAX_ANNOUNCEMENT_LEN)
    + 8
    + 8
    + 9
    + 8
    + 1
    + (4 + MAX_TICKETS * TICKET_SIZE)
    + (4 + MAX_TICKETS * PARTICIPANT_BASE_SIZE + MAX_TICKETS * 4)
    + (4 + MAX_PRIZES * WINNER_SIZE)
    + 1;

/// A purchased entry. The display fields are a snapshot taken at purchase
/// time; the ticket itself is immutable once recorded.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub number: u32,
    pub owner: Pubkey,
    pub username: Option<String>,
    pub first_name: String,
    pub purchased_at: i64,
}

/// Denormalized user -> ticket-number index over the ticket collection.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ParticipantTickets {
    pub user: Pubkey,
    pub ticket_numbers: Vec<u32>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Winner {
    pub user: Pubkey,
    pub username: Option<String>,
    pub first_name: String,
    pub ticket_number: u32,
}

#[account]
pub struct Lottery {
    pub id: u64,
    pub prize_count: u8,
    pub ticket_price: u64,
    /// Announcement text, stored verbatim as entered in the wizard.
    pub announcement: String,
    pub created_at: i64,
    /// Informational deadline (created_at + configured duration). Closure
    /// is an explicit operator action and does not wait for it.
    pub ends_at: i64,
    pub ended_at: Option<i64>,
    pub sold_tickets: u64,
    /// True exactly while the lottery is in the active set. Flips to false
    /// once, at closure, and never back.
    pub is_active: bool,
    pub tickets: Vec<Ticket>,
    pub participants: Vec<ParticipantTickets>,
    /// Populated only at closure; at most `prize_count` entries.
    pub winners: Vec<Winner>,
    pub bump: u8,
}

impl Lottery {
    /// Append a freshly minted ticket to the collection and the
    /// participants index, keeping both consistent with `sold_tickets`.
    pub fn record_ticket(&mut self, ticket: Ticket) -> Result<()> {
        require!(self.is_active, LotteryError::LotteryNotActive);
        require!(self.tickets.len() < MAX_TICKETS, LotteryError::SoldOut);

        match self
            .participants
            .iter_mut()
            .find(|entry| entry.user == ticket.owner)
        {
            Some(entry) => entry.ticket_numbers.push(ticket.number),
            None => self.participants.push(ParticipantTickets {
                user: ticket.owner,
                ticket_numbers: vec![ticket.number],
            }),
        }

        self.tickets.push(ticket);
        self.sold_tickets = self
            .sold_tickets
            .checked_add(1)
            .ok_or(LotteryError::Overflow)?;
        Ok(())
    }

    /// Close the lottery and draw winners.
    ///
    /// Samples `min(prize_count, sold_tickets)` tickets without replacement
    /// via a partial Fisher-Yates shuffle over ticket indices, so every
    /// C(n, k) subset is equally likely and no ticket can win twice even
    /// when two tickets share a display number. A user holding several
    /// tickets can win several prizes.
    ///
    /// Terminal: flips `is_active` off and stamps `ended_at`. A second call
    /// fails with `LotteryNotActive` and changes nothing.
    pub fn close(&mut self, rng: &mut SplitMix64, now: i64) -> Result<()> {
        require!(self.is_active, LotteryError::LotteryNotActive);

        let n = self.tickets.len();
        let k = n.min(self.prize_count as usize);

        let mut indices: Vec<usize> = (0..n).collect();
        let mut winners = Vec::with_capacity(k);
        for i in 0..k {
            let j = i + rng.gen_range((n - i) as u64) as usize;
            indices.swap(i, j);
            let ticket = &self.tickets[indices[i]];
            winners.push(Winner {
                user: ticket.owner,
                username: ticket.username.clone(),
                first_name: ticket.first_name.clone(),
                ticket_number: ticket.number,
            });
        }

        self.winners = winners;
        self.is_active = false;
        self.ended_at = Some(now);
        Ok(())
    }

    /// Ticket numbers held by `user`, from the participants index.
    pub fn tickets_for(&self, user: &Pubkey) -> Vec<u32> {
        self.participants
            .iter()
            .find(|entry| entry.user == *user)
            .map(|entry| entry.ticket_numbers.clone())
            .unwrap_or_default()
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}
