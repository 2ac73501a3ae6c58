//! Tracking events table migration
//!
//! Creates the append-only `tracking_events` table. One row per observed
//! pixel fetch: capture time, client IP, user agent and the raw header
//! snapshot, keyed by the externally minted tracking id.
//!
//! The surrogate auto-increment primary key is intentional: duplicate
//! `(tracking_id, captured_at)` pairs are legal (sub-second collisions
//! across concurrent fetches) and both rows must be retained.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackingEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackingEvents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TrackingEvents::TrackingId)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrackingEvents::CapturedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrackingEvents::ClientIp)
                            .string_len(45)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TrackingEvents::UserAgent).text().null())
                    .col(ColumnDef::new(TrackingEvents::Headers).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Composite index for the per-id time-ordered listing path
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tracking_events_id_time")
                    .table(TrackingEvents::Table)
                    .col(TrackingEvents::TrackingId)
                    .col(TrackingEvents::CapturedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_tracking_events_id_time")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrackingEvents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TrackingEvents {
    #[sea_orm(iden = "tracking_events")]
    Table,
    Id,
    TrackingId,
    CapturedAt,
    ClientIp,
    UserAgent,
    Headers,
}
