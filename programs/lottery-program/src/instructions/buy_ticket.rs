use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    random::{self, SplitMix64},
    state::{Config, Lottery, Ticket, UserAccount, MAX_TICKETS, USER_ACCOUNT_SIZE},
};

use super::register_user::validate_display_names;

/// Event emitted when a ticket is purchased. This is the admin
/// notification feed: delivery to the operator is best-effort and happens
/// off-chain, so a missed event never affects the ledger.
#[event]
pub struct TicketPurchased {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The lottery's ledger id
    pub lottery_id: u64,
    /// The buyer's address
    pub buyer: Pubkey,
    /// Buyer's username snapshot, if any
    pub username: Option<String>,
    /// The minted ticket display number
    pub ticket_number: u32,
    /// Price paid in stars
    pub price: u64,
    /// Buyer's balance after the purchase
    pub remaining_balance: u64,
}

/// Instruction to exchange stars for one lottery ticket
///
/// # Arguments
/// * `username` / `first_name` - display metadata, snapshotted onto the
///   ticket and used to auto-create the buyer's ledger account if absent
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates the lottery is in the active set through account constraints
/// 2. Auto-creates a zero-balance ledger account for first-time buyers
/// 3. Ensures the buyer's star balance covers the ticket price
/// 4. Rejects the purchase once all ticket slots are taken
/// 5. Uses checked arithmetic for every counter move
///
/// # Implementation Notes
/// - Debit, counters, ticket mint and index update land in one transaction;
///   on any failure none of them commit
/// - The ticket number is an independent uniform draw in [100000, 999999]
///   seeded from SlotHashes entropy; numbers are not checked for
///   uniqueness against other tickets
pub fn buy_ticket(
    ctx: Context<BuyTicket>,
    username: Option<String>,
    first_name: String,
) -> Result<()> {
    validate_display_names(&username, &first_name)?;

    require!(
        ctx.accounts.lottery.tickets.len() < MAX_TICKETS,
        LotteryError::SoldOut
    );

    random::verify_slothashes(&ctx.accounts.recent_slothashes)?;

    let now = Clock::get()?.unix_timestamp;

    // First interaction creates the ledger account with a zero balance
    let user_account = &mut ctx.accounts.user_account;
    if user_account.registered_at == 0 {
        user_account.owner = ctx.accounts.signer.key();
        user_account.balance = 0;
        user_account.total_spent = 0;
        user_account.total_tickets = 0;
        user_account.registered_at = now;
        user_account.bump = ctx.bumps.user_account;

        ctx.accounts.config.user_count = ctx
            .accounts
            .config
            .user_count
            .checked_add(1)
            .ok_or(LotteryError::Overflow)?;
    }
    user_account.username = username.clone();
    user_account.first_name = first_name.clone();

    let price = ctx.accounts.lottery.ticket_price;
    user_account.debit_for_ticket(price)?;

    // Mint the ticket number. The per-lottery ticket count is folded into
    // the seed so purchases landing in the same slot draw differently.
    let data = ctx.accounts.recent_slothashes.data.borrow();
    let mut seed = random::entropy_seed(&data, now)?;
    seed = random::mix(seed, ctx.accounts.lottery.sold_tickets);
    let mut rng = SplitMix64::new(seed);
    let number = random::ticket_number(&mut rng);

    let lottery = &mut ctx.accounts.lottery;
    lottery.record_ticket(Ticket {
        number,
        owner: ctx.accounts.signer.key(),
        username: username.clone(),
        first_name,
        purchased_at: now,
    })?;

    let config = &mut ctx.accounts.config;
    config.stars_outstanding = config
        .stars_outstanding
        .checked_sub(price)
        .ok_or(LotteryError::Overflow)?;
    config.stars_spent = config
        .stars_spent
        .checked_add(price)
        .ok_or(LotteryError::Overflow)?;

    emit!(TicketPurchased {
        lottery: lottery.key(),
        lottery_id: lottery.id,
        buyer: ctx.accounts.signer.key(),
        username,
        ticket_number: number,
        price,
        remaining_balance: user_account.balance,
    });

    Ok(())
}

/// Accounts required for the buy_ticket instruction
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The lottery tickets are being purchased for.
    /// Must be in the active set
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

    /// The buyer's star ledger account, created with a zero balance on
    /// first interaction
    #[account(
        init_if_needed,
        payer = signer,
        space = USER_ACCOUNT_SIZE,
        seeds = [b"user", signer.key().as_ref()],
        bump,
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// The account purchasing the ticket
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The SlotHashes sysvar, entropy source for the ticket number
    /// CHECK: Using UncheckedAccount because we manually validate the
    /// correct sysvar in the handler.
    pub recent_slothashes: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
