use anchor_lang::prelude::*;

use crate::duration::parse_duration;
use crate::error::LotteryError;
use crate::state::lottery::MAX_PRIZES;

// 8 discriminator + 32 operator + 1 step + 2 prize_count (Option<u8>)
// + 9 ticket_price (Option<u64>) + 9 duration_secs (Option<i64>)
// + 8 started_at + 1 bump
pub const DRAFT_ACCOUNT_SIZE: usize = 8 + 32 + 1 + 2 + 9 + 9 + 8 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftStep {
    CollectingPrizeCount = 0,
    CollectingTicketPrice = 1,
    CollectingDuration = 2,
    CollectingAnnouncementText = 3,
}

/// The creation wizard's session state. One draft per operator at a time;
/// the account is closed on commit or explicit cancellation, so it never
/// outlives the dialog it belongs to.
#[account]
pub struct LotteryDraft {
    pub operator: Pubkey,
    pub step: DraftStep,
    pub prize_count: Option<u8>,
    pub ticket_price: Option<u64>,
    pub duration_secs: Option<i64>,
    pub started_at: i64,
    pub bump: u8,
}

impl LotteryDraft {
    /// Feed one raw input into the current step. On success the draft
    /// advances to the next step; on any validation error nothing is
    /// written, so the operator simply retries the same step.
    pub fn apply_input(&mut self, input: &str) -> Result<()> {
        match self.step {
            DraftStep::CollectingPrizeCount => {
                let count = parse_positive_int(input)?;
                require!(count <= MAX_PRIZES as u64, LotteryError::TooManyPrizes);
                self.prize_count = Some(count as u8);
                self.step = DraftStep::CollectingTicketPrice;
            }
            DraftStep::CollectingTicketPrice => {
                let price = parse_positive_int(input)?;
                self.ticket_price = Some(price);
                self.step = DraftStep::CollectingDuration;
            }
            DraftStep::CollectingDuration => {
                let secs = parse_duration(input)?;
                self.duration_secs = Some(secs);
                self.step = DraftStep::CollectingAnnouncementText;
            }
            // The announcement is delivered through commit_lottery, which
            // needs the lottery account in scope to initialize it.
            DraftStep::CollectingAnnouncementText => {
                return Err(LotteryError::WrongDraftStep.into());
            }
        }
        Ok(())
    }

    /// The assembled parameters, available once every collecting step
    /// before the announcement has completed.
    pub fn params(&self) -> Result<(u8, u64, i64)> {
        require!(
            self.step == DraftStep::CollectingAnnouncementText,
            LotteryError::WrongDraftStep
        );
        let prize_count = self.prize_count.ok_or(LotteryError::DraftIncomplete)?;
        let ticket_price = self.ticket_price.ok_or(LotteryError::DraftIncomplete)?;
        let duration_secs = self.duration_secs.ok_or(LotteryError::DraftIncomplete)?;
        Ok((prize_count, ticket_price, duration_secs))
    }
}

/// Strict integer parse for the numeric wizard steps: the whole trimmed
/// input must be a number, and it must be greater than zero. Signed parse
/// first so that "-5" fails range validation rather than looking like
/// garbage input.
fn parse_positive_int(input: &str) -> Result<u64> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| LotteryError::InvalidNumber)?;
    require!(value > 0, LotteryError::NumberOutOfRange);
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> LotteryDraft {
        LotteryDraft {
            operator: Pubkey::new_unique(),
            step: DraftStep::CollectingPrizeCount,
            prize_count: None,
            ticket_price: None,
            duration_secs: None,
            started_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn walks_all_steps_in_order() {
        let mut d = draft();
        d.apply_input("3").unwrap();
        assert_eq!(d.step, DraftStep::CollectingTicketPrice);
        d.apply_input("5").unwrap();
        assert_eq!(d.step, DraftStep::CollectingDuration);
        d.apply_input("1h").unwrap();
        assert_eq!(d.step, DraftStep::CollectingAnnouncementText);
        assert_eq!(d.params().unwrap(), (3, 5, 3600));
    }

    #[test]
    fn rejects_zero_and_negative_prize_count_without_advancing() {
        let mut d = draft();
        assert!(d.apply_input("0").is_err());
        assert!(d.apply_input("-5").is_err());
        assert!(d.apply_input("three").is_err());
        assert_eq!(d.step, DraftStep::CollectingPrizeCount);
        assert_eq!(d.prize_count, None);
    }

    #[test]
    fn rejects_zero_ticket_price_without_advancing() {
        let mut d = draft();
        d.apply_input("3").unwrap();
        assert!(d.apply_input("0").is_err());
        assert_eq!(d.step, DraftStep::CollectingTicketPrice);
        assert_eq!(d.ticket_price, None);
    }

    #[test]
    fn rejects_sub_minute_duration_without_advancing() {
        let mut d = draft();
        d.apply_input("3").unwrap();
        d.apply_input("5").unwrap();
        assert!(d.apply_input("0 minutes").is_err());
        assert!(d.apply_input("gibberish").is_err());
        assert_eq!(d.step, DraftStep::CollectingDuration);
        assert_eq!(d.duration_secs, None);
    }

    #[test]
    fn rejects_prize_count_above_slot_capacity() {
        let mut d = draft();
        assert!(d.apply_input("11").is_err());
        assert_eq!(d.step, DraftStep::CollectingPrizeCount);
    }

    #[test]
    fn params_unavailable_before_duration_is_set() {
        let mut d = draft();
        assert!(d.params().is_err());
        d.apply_input("3").unwrap();
        d.apply_input("5").unwrap();
        assert!(d.params().is_err());
    }

    #[test]
    fn text_step_does_not_accept_plain_input() {
        let mut d = draft();
        d.apply_input("3").unwrap();
        d.apply_input("5").unwrap();
        d.apply_input("1d").unwrap();
        assert!(d.apply_input("anything").is_err());
        assert_eq!(d.step, DraftStep::CollectingAnnouncementText);
    }
}
