//! Tracking event entity for the append-only hit log

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tracking_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Externally minted tracking id, canonical UUID text form
    pub tracking_id: String,
    pub captured_at: DateTimeUtc,
    pub client_ip: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub user_agent: Option<String>,
    /// Raw request headers serialized as a JSON object (audit only)
    #[sea_orm(column_type = "Text")]
    pub headers: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
