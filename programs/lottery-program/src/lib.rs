use anchor_lang::prelude::*;
use instructions::*;

pub mod duration;
pub mod error;
pub mod instructions;
pub mod random;
pub mod state;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod lottery_program {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>) -> Result<()> {
        instructions::init_config::init_config(ctx)
    }

    pub fn register_user(
        ctx: Context<RegisterUser>,
        username: Option<String>,
        first_name: String,
    ) -> Result<()> {
        instructions::register_user::register_user(ctx, username, first_name)
    }

    pub fn grant_stars(ctx: Context<GrantStars>, amount: u64) -> Result<()> {
        instructions::grant_stars::grant_stars(ctx, amount)
    }

    pub fn start_draft(ctx: Context<StartDraft>) -> Result<()> {
        instructions::start_draft::start_draft(ctx)
    }

    pub fn submit_draft_input(ctx: Context<SubmitDraftInput>, input: String) -> Result<()> {
        instructions::submit_draft_input::submit_draft_input(ctx, input)
    }

    pub fn cancel_draft(ctx: Context<CancelDraft>) -> Result<()> {
        instructions::cancel_draft::cancel_draft(ctx)
    }

    pub fn commit_lottery(ctx: Context<CommitLottery>, announcement: String) -> Result<()> {
        instructions::commit_lottery::commit_lottery(ctx, announcement)
    }

    pub fn buy_ticket(
        ctx: Context<BuyTicket>,
        username: Option<String>,
        first_name: String,
    ) -> Result<()> {
        instructions::buy_ticket::buy_ticket(ctx, username, first_name)
    }

    pub fn close_lottery(ctx: Context<CloseLottery>) -> Result<()> {
        instructions::close_lottery::close_lottery(ctx)
    }
}
