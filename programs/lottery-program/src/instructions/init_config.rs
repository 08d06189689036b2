use crate::state::{Config, CONFIG_ACCOUNT_SIZE};
use anchor_lang::prelude::*;

/// Instruction to initialize the program configuration
/// This should be called once during program deployment
///
/// # Security Considerations
/// - Creates a PDA with seed "config" to store the operator identity
/// - Only needs to be called once during deployment
/// - The operator identity is set and locked; every privileged
///   instruction (wizard, star grants, closure) checks against it
///
/// # Account Validations
/// * Config - New PDA initialized with proper space allocation
/// * Payer - Signer funding the config account
/// * Operator - Account that becomes the single privileged identity
pub fn init_config(ctx: Context<InitConfig>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.operator = ctx.accounts.operator.key();
    config.lottery_counter = 0;
    config.user_count = 0;
    config.active_lotteries = 0;
    config.archived_lotteries = 0;
    config.stars_outstanding = 0;
    config.stars_spent = 0;
    config.bump = ctx.bumps.config;
    Ok(())
}

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(
        init,
        payer = payer,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub payer: Signer<'info>,
    pub operator: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
