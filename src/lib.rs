//! Taskboard: reactive core for a single-page task board.
//!
//! This crate implements the state layer behind a two-list ("active" /
//! "finished") task board: an observable in-memory task store that is the
//! single source of truth for task records, and the drag-and-drop state
//! machines that translate a drop gesture into a status transition.
//! Rendering, DOM templates, and form widgets are external collaborators;
//! the core exposes `subscribe` and `snapshot` and never formats or
//! displays anything itself.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces consumed by view bindings
//! - **Stores and controllers**: Concrete state owners driven by UI events
//!
//! # Modules
//!
//! - [`board`]: Task records, the observable task store, and the
//!   subscriber port
//! - [`drag`]: Drag gesture state machines and the typed drag payload
//! - [`input`]: Form input collection under a configurable field policy
//! - [`validation`]: Pure field-constraint predicate

pub mod board;
pub mod drag;
pub mod input;
pub mod validation;
