//! `SeaORM` entities for the Vigil persistence schema

pub mod namespace;
