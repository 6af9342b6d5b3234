//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each and are generic over
//! [`sea_orm::ConnectionTrait`], so the same repository runs against the connection pool or
//! inside a transaction opened by a service.

pub mod player;
pub mod red_star;
pub mod var;
pub mod white_star;
