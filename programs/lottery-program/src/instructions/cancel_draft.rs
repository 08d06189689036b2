use anchor_lang::prelude::*;

use crate::state::LotteryDraft;

/// Abandons the wizard session without committing. Closing the account
/// returns its rent to the operator and frees the draft slot.
pub fn cancel_draft(_ctx: Context<CancelDraft>) -> Result<()> {
    Ok(())
}

#[derive(Accounts)]
pub struct CancelDraft<'info> {
    #[account(
        mut,
        close = operator,
        seeds = [b"draft", operator.key().as_ref()],
        bump = draft.bump,
    )]
    pub draft: Account<'info, LotteryDraft>,

    #[account(mut)]
    pub operator: Signer<'info>,
}
