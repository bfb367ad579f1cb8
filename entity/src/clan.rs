use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clan")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub clan_id: i64,
    pub name: String,
    pub tag: String,
    pub members_count: i32,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::clan_member::Entity")]
    ClanMember,
}

impl Related<super::clan_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClanMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
