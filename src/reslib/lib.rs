//! # Reslib Architecture
//!
//! Reslib is a **UI-agnostic resource catalog library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, render.rs, styles.rs)         │
//! │  - Parses arguments, formats cards, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - `Library`: owns the catalog and the current FilterState  │
//! │  - One method per user action; each replaces the state and  │
//! │    synchronously re-evaluates the pipeline                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pipeline Layer (pipeline.rs, state.rs)                     │
//! │  - Pure filter predicates and the sort stage                │
//! │  - Total functions: over-constrained filters yield an empty │
//! │    result, never an error                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Layer (catalog.rs, model.rs)                          │
//! │  - Read-only `Catalog` of `Resource` records                │
//! │  - No mutation, no persistence, no external source          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, and never assumes a terminal.
//! The same core could sit behind a web UI or any other client.
//!
//! ## The FilterState Contract
//!
//! `FilterState` is an immutable-per-version value: every transition consumes
//! the current value and returns the next one, so the holder replaces it
//! wholesale. `PartialEq` on two versions tells a client whether a re-render
//! is needed. See `state.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The `Library` facade—entry point for a filtering session
//! - [`pipeline`]: Filter predicates and sort stage
//! - [`state`]: The `FilterState` value type and its transitions
//! - [`catalog`]: The read-only resource collection and its facets
//! - [`model`]: Core data types (`Resource`, `ResourceType`, `SortKey`)
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod state;
