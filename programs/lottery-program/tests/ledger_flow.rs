//! End-to-end ledger flow over the state core: wizard -> commit -> purchase
//! -> closure, checking the money-conservation and draw invariants along
//! the way.

use anchor_lang::prelude::Pubkey;

use lottery_program::random::{self, SplitMix64};
use lottery_program::state::{
    Config, DraftStep, Lottery, LotteryDraft, Ticket, UserAccount,
};

const NOW: i64 = 1_700_000_000;

fn committed_lottery(draft: &LotteryDraft, id: u64, announcement: &str) -> Lottery {
    let (prize_count, ticket_price, duration_secs) = draft.params().unwrap();
    Lottery {
        id,
        prize_count,
        ticket_price,
        announcement: announcement.to_string(),
        created_at: NOW,
        ends_at: NOW + duration_secs,
        ended_at: None,
        sold_tickets: 0,
        is_active: true,
        tickets: vec![],
        participants: vec![],
        winners: vec![],
        bump: 255,
    }
}

#[test]
fn wizard_purchase_and_draw_scenario() {
    // Wizard: 3 prizes, 5 stars per ticket, one hour, announcement "Go!".
    let mut draft = LotteryDraft {
        operator: Pubkey::new_unique(),
        step: DraftStep::CollectingPrizeCount,
        prize_count: None,
        ticket_price: None,
        duration_secs: None,
        started_at: NOW,
        bump: 255,
    };
    draft.apply_input("3").unwrap();
    draft.apply_input("5").unwrap();
    draft.apply_input("1h").unwrap();

    let mut lottery = committed_lottery(&draft, 0, "Go!");
    assert!(lottery.is_active);
    assert_eq!(lottery.sold_tickets, 0);
    assert_eq!(lottery.ends_at, NOW + 3_600);

    // Purchase by a user holding 10 stars.
    let buyer = Pubkey::new_unique();
    let mut account = UserAccount {
        owner: buyer,
        balance: 10,
        total_spent: 0,
        total_tickets: 0,
        username: Some("alice".to_string()),
        first_name: "Alice".to_string(),
        registered_at: NOW,
        bump: 255,
    };

    let pre_balance = account.balance;
    account.debit_for_ticket(lottery.ticket_price).unwrap();
    let mut rng = SplitMix64::new(1234);
    let number = random::ticket_number(&mut rng);
    lottery
        .record_ticket(Ticket {
            number,
            owner: buyer,
            username: account.username.clone(),
            first_name: account.first_name.clone(),
            purchased_at: NOW + 60,
        })
        .unwrap();

    assert_eq!(account.balance, pre_balance - lottery.ticket_price);
    assert_eq!(account.balance, 5);
    assert_eq!(lottery.sold_tickets, 1);
    assert_eq!(lottery.sold_tickets as usize, lottery.tickets.len());
    assert_eq!(lottery.tickets_for(&buyer), vec![number]);

    // Closure: one ticket, three prize slots -> exactly one winner.
    let mut draw_rng = SplitMix64::new(777);
    lottery.close(&mut draw_rng, NOW + 7_200).unwrap();

    assert_eq!(lottery.winners.len(), 1);
    assert_eq!(lottery.winners[0].user, buyer);
    assert_eq!(lottery.winners[0].ticket_number, number);
    assert!(!lottery.is_active);
    assert_eq!(lottery.ended_at, Some(NOW + 7_200));

    // Archived lotteries accept neither purchases nor another closure.
    assert!(lottery
        .record_ticket(Ticket {
            number: 123_456,
            owner: buyer,
            username: None,
            first_name: "Late".to_string(),
            purchased_at: NOW + 7_300,
        })
        .is_err());
    assert!(lottery.close(&mut draw_rng, NOW + 7_400).is_err());
}

#[test]
fn config_counters_back_the_stats_view() {
    let mut config = Config {
        operator: Pubkey::new_unique(),
        lottery_counter: 0,
        user_count: 0,
        active_lotteries: 0,
        archived_lotteries: 0,
        stars_outstanding: 0,
        stars_spent: 0,
        bump: 255,
    };

    // One committed lottery, one registered user with a 10-star grant,
    // one 5-star purchase, then closure.
    config.lottery_counter += 1;
    config.active_lotteries += 1;
    config.user_count += 1;
    config.stars_outstanding += 10;
    config.stars_outstanding -= 5;
    config.stars_spent += 5;
    config.active_lotteries -= 1;
    config.archived_lotteries += 1;

    let stats = config.stats();
    assert_eq!(stats.active_lotteries, 0);
    assert_eq!(stats.archived_lotteries, 1);
    assert_eq!(stats.user_count, 1);
    assert_eq!(stats.stars_outstanding, 5);
    assert_eq!(stats.stars_spent, 5);
}
