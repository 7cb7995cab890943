//! # Gridz Architecture
//!
//! Gridz is a **UI-agnostic crossword editing library**. This is not an
//! application that happens to expose some library code: it is an editing
//! engine that expects a UI client (terminal, web, native) to drive it.
//!
//! The engine keeps three interdependent facts consistent after every
//! edit: which cells are blockers versus fillable, the sequential
//! numbering of word starts, and the identity of each clue as the grid's
//! geometry changes underneath it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facade (api.rs)                                            │
//! │  - Owns the current Crossword and the undo/redo History     │
//! │  - Runs the execute/undo/redo control loop                  │
//! │  - No editing logic of its own                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per edit; commands are plain values           │
//! │  - execute(Crossword) -> Success { next, inverse } | NoOp   │
//! │  - Every success carries the command that reverses it       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Consistency Engines (grid.rs, reconcile.rs)                │
//! │  - Numbering: pure function of cell colors and positions    │
//! │  - Reconciler: matches old clues to new word groups,        │
//! │    reports the ones that didn't survive                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs)                                           │
//! │  - Square / Crossword / ClueSet value types                 │
//! │  - Immutable-value discipline: commands never mutate a      │
//! │    crossword in place, they produce the next version        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage (`store/`) sits beside the stack behind the `PuzzleStore`
//! trait: the core never performs I/O, it only requires that an encoding
//! round-trips every `Crossword` field losslessly.
//!
//! ## Key Principle: Commands Carry Their Own Undo
//!
//! A mutator is only correct together with its inverse, so the two are
//! built in the same place. Executing a command returns the inverse
//! command directly; executing *that* returns an inverse again. The
//! history stacks therefore never inspect commands; they just move boxes
//! between two bounded stacks.
//!
//! ## Error Model
//!
//! Expected rejections (out-of-range size or index, unknown clue key) are
//! `NoOperation` results, not errors: the caller can tell "did nothing"
//! from "did something" without unwinding. `Result` is reserved for the
//! fallible edges (storage, config I/O). Invariant breaches are
//! programming errors and only checked with debug assertions.
//!
//! ## Module Overview
//!
//! - [`api`]: The editor facade—entry point for all operations
//! - [`commands`]: One module per edit, plus the inverse commands
//! - [`grid`]: Word-start numbering
//! - [`reconcile`]: Word groups and clue identity across mutations
//! - [`history`]: Bounded undo/redo stacks
//! - [`cursor`]: Pure index arithmetic for grid navigation
//! - [`model`]: Core value types
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Editor defaults
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod history;
pub mod model;
pub mod reconcile;
pub mod store;
