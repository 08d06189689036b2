use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Config, UserAccount, MAX_NAME_LEN, USER_ACCOUNT_SIZE},
};

/// Creates the caller's star ledger account on first interaction.
/// The account starts with a zero balance and is never deleted. Calling
/// again is harmless: it only refreshes the stored display metadata.
///
/// # Account Structure
/// - `user_account` (PDA): seeds ["user", signer.key()]
/// - `config`: global counters, user_count is bumped on first creation
pub fn register_user(
    ctx: Context<RegisterUser>,
    username: Option<String>,
    first_name: String,
) -> Result<()> {
    validate_display_names(&username, &first_name)?;

    let user_account = &mut ctx.accounts.user_account;
    if user_account.registered_at == 0 {
        user_account.owner = ctx.accounts.signer.key();
        user_account.balance = 0;
        user_account.total_spent = 0;
        user_account.total_tickets = 0;
        user_account.registered_at = Clock::get()?.unix_timestamp;
        user_account.bump = ctx.bumps.user_account;

        ctx.accounts.config.user_count = ctx
            .accounts
            .config
            .user_count
            .checked_add(1)
            .ok_or(LotteryError::Overflow)?;
    }
    user_account.username = username;
    user_account.first_name = first_name;

    Ok(())
}

pub fn validate_display_names(username: &Option<String>, first_name: &str) -> Result<()> {
    if let Some(name) = username {
        require!(name.len() <= MAX_NAME_LEN, LotteryError::NameTooLong);
    }
    require!(first_name.len() <= MAX_NAME_LEN, LotteryError::NameTooLong);
    Ok(())
}

#[derive(Accounts)]
pub struct RegisterUser<'info> {
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

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
