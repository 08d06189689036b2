use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    random::{self, SplitMix64},
    state::{Config, Lottery, Winner},
};

/// Event emitted when a lottery is closed and winners are drawn
#[event]
pub struct LotteryClosed {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The lottery's ledger id
    pub lottery_id: u64,
    pub prize_count: u8,
    /// Final number of tickets sold
    pub sold_tickets: u64,
    /// Number of distinct participants
    pub participant_count: u64,
    /// The drawn winners, at most prize_count entries
    pub winners: Vec<Winner>,
}

/// Closes a lottery and draws winners using on-chain randomness from block
/// hashes. The draw is a simple random sample without replacement over the
/// ticket collection, so every subset of `min(prize_count, sold_tickets)`
/// tickets is equally likely and no ticket can win twice. A user holding
/// several tickets can win several prizes.
///
/// Execution requirements:
/// 1. The caller must be the operator
/// 2. The lottery must be in the active set
///
/// After execution:
/// - The winners list is stored in the lottery account
/// - The lottery moves to the archived set; further purchases and repeat
///   closures fail, and the lottery is never reactivated
///
/// # Errors
/// - `NotOperator` if the caller is not the configured operator
/// - `LotteryNotActive` if the lottery was already closed
/// - `InvalidSlotHashesAccount` if the provided SlotHashes account is invalid
pub fn close_lottery(ctx: Context<CloseLottery>) -> Result<()> {
    random::verify_slothashes(&ctx.accounts.recent_slothashes)?;

    let now = Clock::get()?.unix_timestamp;

    let data = ctx.accounts.recent_slothashes.data.borrow();
    let mut seed = random::entropy_seed(&data, now)?;
    seed = random::mix(seed, ctx.accounts.lottery.id);
    let mut rng = SplitMix64::new(seed);

    let lottery = &mut ctx.accounts.lottery;
    Lottery::close(lottery, &mut rng, now)?;

    let config = &mut ctx.accounts.config;
    config.active_lotteries = config
        .active_lotteries
        .checked_sub(1)
        .ok_or(LotteryError::Overflow)?;
    config.archived_lotteries = config
        .archived_lotteries
        .checked_add(1)
        .ok_or(LotteryError::Overflow)?;

    emit!(LotteryClosed {
        lottery: lottery.key(),
        lottery_id: lottery.id,
        prize_count: lottery.prize_count,
        sold_tickets: lottery.sold_tickets,
        participant_count: lottery.participant_count() as u64,
        winners: lottery.winners.clone(),
    });

    Ok(())
}

/// Accounts required for the close_lottery instruction
#[derive(Accounts)]
pub struct CloseLottery<'info> {
    /// The lottery to close. Must still be in the active set; a repeat
    /// closure attempt fails here with no state change
    #[account(
        mut,
        seeds = [
            b"lottery",
            lottery.id.to_le_bytes().as_ref(),
        ],
        bump = lottery.bump,
        constraint = lottery.is_active @ LotteryError::LotteryNotActive,
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = operator @ LotteryError::NotOperator,
    )]
    pub config: Account<'info, Config>,

    pub operator: Signer<'info>,

    /// The SlotHashes sysvar contains the most recent block hashes
    /// This is used as a source of randomness
    /// CHECK: Using UncheckedAccount because we manually validate the
    /// correct sysvar in the handler.
    pub recent_slothashes: UncheckedAccount<'info>,
}
