use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Config, DraftStep, LotteryDraft, DRAFT_ACCOUNT_SIZE},
};

/// Opens the creation wizard for the operator. The draft account is the
/// wizard session: it accumulates parameters step by step and is closed on
/// commit or cancellation. The PDA seed allows one draft per operator, so a
/// fresh `start_draft` is only possible after the previous session ended.
pub fn start_draft(ctx: Context<StartDraft>) -> Result<()> {
    let draft = &mut ctx.accounts.draft;
    draft.operator = ctx.accounts.operator.key();
    draft.step = DraftStep::CollectingPrizeCount;
    draft.prize_count = None;
    draft.ticket_price = None;
    draft.duration_secs = None;
    draft.started_at = Clock::get()?.unix_timestamp;
    draft.bump = ctx.bumps.draft;
    Ok(())
}

#[derive(Accounts)]
pub struct StartDraft<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = operator @ LotteryError::NotOperator,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = operator,
        space = DRAFT_ACCOUNT_SIZE,
        seeds = [b"draft", operator.key().as_ref()],
        bump,
    )]
    pub draft: Account<'info, LotteryDraft>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}
