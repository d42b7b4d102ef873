//! # Restaurant Ops
//!
//! > **Menu and order backend for a small restaurant.**
//!
//! Two resources, menu items and orders, each kept in a
//! [`document_store::Collection`] that runs in its own Tokio task and exposed over a JSON
//! HTTP API.
//!
//! ## 🏗️ Layers
//!
//! ### 1. The Store ([`document_store`])
//! The generic collection task: sequential request processing, insertion-order listing,
//! `memory://` or `file://<dir>` persistence.
//!
//! ### 2. The Resources ([`menu_items`], [`orders`], [`model`])
//! The [`Document`](document_store::Document) implementations: validation, partial
//! updates, the atomic availability toggle and the order [`TransitionPolicy`](orders::TransitionPolicy).
//!
//! ### 3. The Interface ([`managers`])
//! [`MenuManager`](managers::MenuManager) and [`OrderManager`](managers::OrderManager)
//! turn store errors into typed resource errors.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`RestaurantSystem`](lifecycle::RestaurantSystem) opens the collections, wires their
//! contexts and shuts them down.
//!
//! ### 5. The Surface ([`http`])
//! axum routes under `/api`, CORS for any origin, `{"message"}` error bodies.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 4000 --store-uri file://./data
//! ```
//!
//! Every flag can also be given through its environment variable (`PORT`, `STORE_URI`,
//! `ORDER_TRANSITIONS`, ...). See [`config::Config`].

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod managers;
pub mod menu_items;
pub mod model;
pub mod orders;
