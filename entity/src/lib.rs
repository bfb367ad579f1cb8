pub mod prelude;

pub mod clan;
pub mod clan_member;
pub mod player;
pub mod player_history;
