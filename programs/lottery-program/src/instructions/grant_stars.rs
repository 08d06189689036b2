use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Config, UserAccount},
};

/// Operator-only balance credit. Stars are a virtual currency with no
/// on-chain payment leg, so the operator account is the sole mint.
///
/// # Account Validations
/// * Config - has_one check against the operator signer
/// * UserAccount - must already exist for the recipient
pub fn grant_stars(ctx: Context<GrantStars>, amount: u64) -> Result<()> {
    require!(amount > 0, LotteryError::NumberOutOfRange);

    ctx.accounts.user_account.credit(amount)?;
    ctx.accounts.config.stars_outstanding = ctx
        .accounts
        .config
        .stars_outstanding
        .checked_add(amount)
        .ok_or(LotteryError::Overflow)?;

    msg!(
        "granted {} stars to {}",
        amount,
        ctx.accounts.recipient.key()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct GrantStars<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = operator @ LotteryError::NotOperator,
    )]
    pub config: Account<'info, Config>,

    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [b"user", recipient.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,

    pub recipient: SystemAccount<'info>,
}
