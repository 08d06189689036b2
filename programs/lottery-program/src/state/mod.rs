pub use config::*;
pub use draft::*;
pub use lottery::*;
pub use user_account::*;

pub mod config;
pub mod draft;
pub mod lottery;
pub mod user_account;
