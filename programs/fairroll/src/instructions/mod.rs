pub mod close_bet;
pub mod initialize_vault;
pub mod place_bet;
pub mod refund_bet;
pub mod resolve_bet;
pub mod toggle_house_lock;
pub mod withdraw_house;

pub use close_bet::*;
pub use initialize_vault::*;
pub use place_bet::*;
pub use refund_bet::*;
pub use resolve_bet::*;
pub use toggle_house_lock::*;
pub use withdraw_house::*;
