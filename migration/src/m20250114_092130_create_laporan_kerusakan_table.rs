use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LaporanKerusakan::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LaporanKerusakan::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LaporanKerusakan::Day)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(LaporanKerusakan::Vessel).string().not_null())
                    .col(
                        ColumnDef::new(LaporanKerusakan::Permasalahan)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LaporanKerusakan::Penyelesaian)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(LaporanKerusakan::Unit)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(LaporanKerusakan::IssuedDate)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(LaporanKerusakan::ClosedDate)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(LaporanKerusakan::Keterangan)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(LaporanKerusakan::Status)
                            .string()
                            .not_null()
                            .default("OPEN"),
                    )
                    .col(
                        ColumnDef::new(LaporanKerusakan::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(LaporanKerusakan::UpdatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vessel")
                    .table(LaporanKerusakan::Table)
                    .col(LaporanKerusakan::Vessel)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_status")
                    .table(LaporanKerusakan::Table)
                    .col(LaporanKerusakan::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_unit")
                    .table(LaporanKerusakan::Table)
                    .col(LaporanKerusakan::Unit)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LaporanKerusakan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LaporanKerusakan {
    Table,
    Id, // Primary key, autoincrement
    Day,
    Vessel,
    Permasalahan,
    Penyelesaian,
    Unit,
    IssuedDate,
    ClosedDate,
    Keterangan,
    Status,
    CreatedAt,
    UpdatedAt,
}
