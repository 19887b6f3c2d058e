//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture records. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_tournament_tables: bool,

    // Database fixtures to insert
    institutions: Vec<String>,
    teams: Vec<(String, String)>, // (institution name, team name)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_tournament_tables: false,
            institutions: Vec::new(),
            teams: Vec::new(),
        }
    }

    /// Add every table of the scheduling schema to the test database.
    ///
    /// Creates Institution, Team, Season, Tournament and TournamentMatch, in foreign key order.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_tournament_tables(mut self) -> Self {
        self.include_tournament_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use torneo_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), torneo_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Institution)
    ///     .with_table(Team)
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

    /// Insert an active institution into the database.
    ///
    /// # Arguments
    /// - `name` - Unique institution name
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_institution(mut self, name: impl Into<String>) -> Self {
        self.institutions.push(name.into());
        self
    }

    /// Insert an active team owned by the named institution.
    ///
    /// The institution is created if no institution queued with `with_institution` or a
    /// previous `with_team` call has that name.
    ///
    /// # Arguments
    /// - `institution` - Name of the owning institution
    /// - `name` - Unique team name
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_team(mut self, institution: impl Into<String>, name: impl Into<String>) -> Self {
        self.teams.push((institution.into(), name.into()));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (scheduling tables if specified, then custom tables)
    /// 2. Inserts institutions, then teams
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_tournament_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Institution),
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::Season),
                schema.create_table_from_entity(entity::prelude::Tournament),
                schema.create_table_from_entity(entity::prelude::TournamentMatch),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.institutions {
            setup.institution().insert_institution(&name).await?;
        }

        for (institution, name) in self.teams {
            let institution = setup.institution().get_or_insert(&institution).await?;
            setup.team().insert_team(institution.id, &name).await?;
        }

        Ok(setup)
    }
}
