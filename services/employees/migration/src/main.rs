use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(roster_employees_migration::Migrator).await;
}
