use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Summary {
    Table,
    Id,
    Content,
    SentToSlack,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Summary::Table)
                    .if_not_exists()
                    .col(pk_auto(Summary::Id))
                    .col(text(Summary::Content))
                    .col(boolean(Summary::SentToSlack).default(false))
                    .col(
                        timestamp_with_time_zone(Summary::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Summary::Table).to_owned())
            .await
    }
}
