//! # Notz Architecture
//!
//! Notz is a **UI-agnostic note manager core**: the in-memory note
//! collection, its CRUD and search operations, the editor-session state
//! machine, and the persistence contract. There is deliberately no rendering,
//! no input handling, and no CLI here; a client (terminal, desktop, web
//! view) drives this library and draws the results.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (external)                                          │
//! │  - Renders lists, forwards user intent, owns focus          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session + Store (session.rs, notes.rs)                     │
//! │  - EditorSession drives NoteStore mutations                 │
//! │  - NoteStore is the single writer of the collection         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (persist.rs over store/)                       │
//! │  - Flushes after every mutation; absorbs every failure      │
//! │  - BlobStore trait: FileBlob (prod), MemoryBlob (tests)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Persistence Is Advisory
//!
//! The in-memory collection is authoritative. Every save failure (quota,
//! permissions, corrupt medium) is caught and logged at the persistence
//! boundary, never propagated. The application keeps working on a broken
//! medium; only durability across restarts is lost. The flip side: a failed
//! write must leave the previous blob fully intact, which is the
//! [`store::BlobStore::set`] all-or-nothing contract.
//!
//! ## Key Principle: No Hidden Reactivity
//!
//! [`search::filter`] and the [`session::EditorSession`] are plain functions
//! of current state plus explicit inputs. Clients recompute views after each
//! mutation; nothing in the core polls, notifies, or caches.
//!
//! ## Module Overview
//!
//! - [`notes`]: `NoteStore`, the canonical collection and its mutations
//! - [`session`]: the Idle/Creating/Editing editor state machine
//! - [`search`]: order-preserving free-text filtering
//! - [`persist`]: serialization and defensive deserialization of the blob
//! - [`store`]: the durable blob abstraction and its two backends
//! - [`model`]: the `Note` entity
//! - [`id`]: collision-resistant note identifiers
//! - [`timefmt`]: timestamp display formatting
//! - [`error`]: error types

pub mod error;
pub mod id;
pub mod model;
pub mod notes;
pub mod persist;
pub mod search;
pub mod session;
pub mod store;
pub mod timefmt;
