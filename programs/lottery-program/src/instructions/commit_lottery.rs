use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Config, Lottery, LotteryDraft, LOTTERY_ACCOUNT_SIZE, MAX_ANNOUNCEMENT_LEN},
};

/// Event emitted when a lottery is committed from the wizard
#[event]
pub struct LotteryCreated {
    /// The pubkey of the created lottery
    pub lottery: Pubkey,
    /// The lottery's ledger id
    pub id: u64,
    pub prize_count: u8,
    /// Price per ticket in stars
    pub ticket_price: u64,
    /// When ticket sales are meant to end
    pub ends_at: i64,
    pub created_at: i64,
}

/// The wizard's final step: the announcement text arrives, the assembled
/// parameters become a live lottery, and the draft session is destroyed.
///
/// # Security Considerations
/// 1. Validates caller is the operator via the config PDA
/// 2. Requires the draft to have completed every earlier step
/// 3. Requires non-empty announcement text within the stored capacity
/// 4. Lottery id is taken from the config counter, so ids never repeat
///
/// # Implementation Notes
/// - The new lottery starts in the active set with zero tickets sold
/// - `ends_at` is computed as now + the configured duration
/// - The draft account is closed, returning rent to the operator
pub fn commit_lottery(ctx: Context<CommitLottery>, announcement: String) -> Result<()> {
    require!(
        !announcement.trim().is_empty(),
        LotteryError::EmptyAnnouncement
    );
    require!(
        announcement.len() <= MAX_ANNOUNCEMENT_LEN,
        LotteryError::AnnouncementTooLong
    );

    let (prize_count, ticket_price, duration_secs) = ctx.accounts.draft.params()?;
    let now = Clock::get()?.unix_timestamp;
    let ends_at = now
        .checked_add(duration_secs)
        .ok_or(LotteryError::Overflow)?;

    let config = &mut ctx.accounts.config;
    let lottery = &mut ctx.accounts.lottery;
    lottery.id = config.lottery_counter;
    lottery.prize_count = prize_count;
    lottery.ticket_price = ticket_price;
    lottery.announcement = announcement;
    lottery.created_at = now;
    lottery.ends_at = ends_at;
    lottery.ended_at = None;
    lottery.sold_tickets = 0;
    lottery.is_active = true;
    lottery.tickets = Vec::new();
    lottery.participants = Vec::new();
    lottery.winners = Vec::new();
    lottery.bump = ctx.bumps.lottery;

    config.lottery_counter = config
        .lottery_counter
        .checked_add(1)
        .ok_or(LotteryError::Overflow)?;
    config.active_lotteries = config
        .active_lotteries
        .checked_add(1)
        .ok_or(LotteryError::Overflow)?;

    emit!(LotteryCreated {
        lottery: lottery.key(),
        id: lottery.id,
        prize_count,
        ticket_price,
        ends_at,
        created_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CommitLottery<'info> {
    #[account(
        init,
        payer = operator,
        space = LOTTERY_ACCOUNT_SIZE,
        seeds = [
            b"lottery",
            config.lottery_counter.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        close = operator,
        seeds = [b"draft", operator.key().as_ref()],
        bump = draft.bump,
    )]
    pub draft: Account<'info, LotteryDraft>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = operator @ LotteryError::NotOperator,
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}
