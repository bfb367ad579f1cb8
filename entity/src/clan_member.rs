use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clan_member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub clan_id: i64,
    #[sea_orm(primary_key, auto_increment = false, indexed)]
    pub account_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clan::Entity",
        from = "Column::ClanId",
        to = "super::clan::Column::ClanId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Clan,
}

impl Related<super::clan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
