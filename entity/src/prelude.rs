pub use super::clan::Entity as Clan;
pub use super::clan_member::Entity as ClanMember;
pub use super::player::Entity as Player;
pub use super::player_history::Entity as PlayerHistory;
