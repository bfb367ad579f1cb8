use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: i64,
    #[sea_orm(indexed)]
    pub account_name: String,
    /// `account_name` folded to lowercase for case-insensitive lookups.
    #[sea_orm(indexed)]
    pub account_name_lower: String,
    pub has_clan: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_history::Entity")]
    PlayerHistory,
}

impl Related<super::player_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
