use sea_orm_migration::prelude::*;

// Each name carries its column so a violation can be traced back to the field.
const UQ_EMPLOYEE_ID: &str = "uq_employees_employee_id";
const UQ_EMAIL: &str = "uq_employees_email";
const UQ_PHONE_NUMBER: &str = "uq_employees_phone_number";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Employees::Table)
                    .col(Employees::EmployeeId)
                    .name(UQ_EMPLOYEE_ID)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Employees::Table)
                    .col(Employees::Email)
                    .name(UQ_EMAIL)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Employees::Table)
                    .col(Employees::PhoneNumber)
                    .name(UQ_PHONE_NUMBER)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [UQ_PHONE_NUMBER, UQ_EMAIL, UQ_EMPLOYEE_ID] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    EmployeeId,
    Email,
    PhoneNumber,
}
