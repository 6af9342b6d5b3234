pub use sea_orm_migration::prelude::*;

mod m20250426_000001_player;
mod m20250426_000002_star;
mod m20250426_000003_participation;
mod m20250426_000004_corporation;
mod m20250426_000005_white_star;
mod m20250426_000006_ws_participation;
mod m20250426_000007_ws_respawn;
mod m20250426_000008_var;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250426_000001_player::Migration),
            Box::new(m20250426_000002_star::Migration),
            Box::new(m20250426_000003_participation::Migration),
            Box::new(m20250426_000004_corporation::Migration),
            Box::new(m20250426_000005_white_star::Migration),
            Box::new(m20250426_000006_ws_participation::Migration),
            Box::new(m20250426_000007_ws_respawn::Migration),
            Box::new(m20250426_000008_var::Migration),
        ]
    }
}
