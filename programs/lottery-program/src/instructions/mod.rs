pub use buy_ticket::*;
pub use cancel_draft::*;
pub use close_lottery::*;
pub use commit_lottery::*;
pub use grant_stars::*;
pub use init_config::*;
pub use register_user::*;
pub use start_draft::*;
pub use submit_draft_input::*;

pub mod buy_ticket;
pub mod cancel_draft;
pub mod close_lottery;
pub mod commit_lottery;
pub mod grant_stars;
pub mod init_config;
pub mod register_user;
pub mod start_draft;
pub mod submit_draft_input;
