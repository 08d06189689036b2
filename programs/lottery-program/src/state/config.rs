use anchor_lang::prelude::*;

// 8 discriminator + 32 operator + 8 lottery_counter + 8 user_count
// + 8 active_lotteries + 8 archived_lotteries + 8 stars_outstanding
// + 8 stars_spent + 1 bump
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 8 + 8 + 8 + 8 + 8 + 1;

#[account]
pub struct Config {
    /// The single privileged identity. Only this key may run the creation
    /// wizard, grant stars, and close lotteries.
    pub operator: Pubkey,
    /// Source of lottery ids; incremented on every commit.
    pub lottery_counter: u64,
    pub user_count: u64,
    pub active_lotteries: u64,
    pub archived_lotteries: u64,
    /// Sum of all user balances currently held.
    pub stars_outstanding: u64,
    /// Sum of all stars ever spent on tickets.
    pub stars_spent: u64,
    pub bump: u8,
}

/// Global statistics projection, a pure read over [`Config`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct GlobalStats {
    pub active_lotteries: u64,
    pub archived_lotteries: u64,
    pub user_count: u64,
    pub stars_outstanding: u64,
    pub stars_spent: u64,
}

impl Config {
    pub fn stats(&self) -> GlobalStats {
        GlobalStats {
            active_lotteries: self.active_lotteries,
            archived_lotteries: self.archived_lotteries,
            user_count: self.user_count,
            stars_outstanding: self.stars_outstanding,
            stars_spent: self.stars_spent,
        }
    }
}
