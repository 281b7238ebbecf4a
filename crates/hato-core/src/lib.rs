//! # hato-core
//!
//! Core types shared across all Hato crates.
//!
//! This crate provides the foundational types for the livestock records
//! system: domain entity structs (animals, calves, pens, owners, users),
//! the logbook (bitácora) entry, the immutable session identity with its
//! actor-resolution chain, module/action tag constants, gestation date
//! arithmetic, and cross-cutting error types.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod gestation;
pub mod session;
pub mod tags;
