pub mod deal;
pub mod play;
pub mod rng;

pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
