//! Declarative test builder.
//!
//! The builder pattern allows chaining table and fixture configuration, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_red_star_tables: bool,
    include_white_star_tables: bool,
    include_var_table: bool,

    // Database fixtures to insert
    players: Vec<String>,
    corporations: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_red_star_tables: false,
            include_white_star_tables: false,
            include_var_table: false,
            players: Vec::new(),
            corporations: Vec::new(),
        }
    }

    /// Add the players, stars, and participation tables.
    pub fn with_red_star_tables(mut self) -> Self {
        self.include_red_star_tables = true;
        self
    }

    /// Add the players, corporations, white stars, white star participation, and respawn tables.
    pub fn with_white_star_tables(mut self) -> Self {
        self.include_white_star_tables = true;
        self
    }

    /// Add the key/value `vars` table.
    pub fn with_var_table(mut self) -> Self {
        self.include_var_table = true;
        self
    }

    /// Add every table of the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_red_star_tables()
            .with_white_star_tables()
            .with_var_table()
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables. Tables are created after the
    /// table groups enabled with the `with_*_tables` methods.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use starlog_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), starlog_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Player)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock player into the database during `build()`.
    pub fn with_mock_player(mut self, player_id: impl Into<String>) -> Self {
        self.players.push(player_id.into());
        self
    }

    /// Insert a mock corporation into the database during `build()`.
    pub fn with_mock_corporation(mut self, corporation_id: impl Into<String>) -> Self {
        self.corporations.push(corporation_id.into());
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_red_star_tables || self.include_white_star_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Player));
        }

        if self.include_red_star_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Star),
                schema.create_table_from_entity(entity::prelude::Participation),
            ]);
        }

        if self.include_white_star_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Corporation),
                schema.create_table_from_entity(entity::prelude::WhiteStar),
                schema.create_table_from_entity(entity::prelude::WsParticipation),
                schema.create_table_from_entity(entity::prelude::WsRespawn),
            ]);
        }

        if self.include_var_table {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Var));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for player_id in self.players {
            setup.red_star().insert_mock_player(&player_id).await?;
        }

        for corporation_id in self.corporations {
            setup
                .white_star()
                .insert_mock_corporation(&corporation_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
