//! # Vetclinic Architecture
//!
//! Vetclinic keeps the patient listing and appointment book of a single
//! veterinary clinic. It is a **UI-agnostic records library** with an
//! interactive terminal client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Argument parsing, prompts, menus, table rendering        │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns both stores, dispatches to commands                 │
//! │  - Returns structured `Result<CmdResult>` values            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Booking, cancelling, patient edits, listings             │
//! │  - Cross-store validation (patient exists, slot is free)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, schedule.rs)                        │
//! │  - Fixed-capacity slot arenas                               │
//! │  - Appointment book kept in (date, time) order              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data enters through [`loader`], which reads the clinic's flat files once at
//! startup. Edits live in memory only; nothing is written back.
//!
//! ## Invariants
//!
//! - Occupied patient slots have unique, positive patient numbers.
//! - No two booked appointments share a (date, time), whoever the patient.
//! - After every booking or cancellation the appointment book is sorted.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Patient and appointment stores
//! - [`schedule`]: Date/time ordering and calendar rules
//! - [`model`]: Core data types (`Patient`, `Appointment`, `Date`, `Time`)
//! - [`loader`]: Bulk import of the flat data files
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod schedule;
pub mod store;
