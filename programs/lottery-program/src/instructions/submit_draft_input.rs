use anchor_lang::prelude::*;

use crate::state::LotteryDraft;

/// Feeds one raw admin input into the wizard. Which parameter it sets is
/// decided by the draft's current step: prize count, then ticket price,
/// then duration (menu label or free text). A validation failure aborts the
/// transaction, leaving the draft on the same step for a retry.
pub fn submit_draft_input(ctx: Context<SubmitDraftInput>, input: String) -> Result<()> {
    let draft = &mut ctx.accounts.draft;
    draft.apply_input(&input)?;
    msg!("draft advanced to step {:?}", draft.step);
    Ok(())
}

#[derive(Accounts)]
pub struct SubmitDraftInput<'info> {
    #[account(
        mut,
        seeds = [b"draft", operator.key().as_ref()],
        bump = draft.bump,
    )]
    pub draft: Account<'info, LotteryDraft>,

    pub operator: Signer<'info>,
}
