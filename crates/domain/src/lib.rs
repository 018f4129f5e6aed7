//! # smarthome-domain
//!
//! Pure domain model for the smarthome hierarchy.
//!
//! ## Responsibilities
//! - Foundational types: typed integer identifiers, the error taxonomy
//! - Define **Users** (owners of houses)
//! - Define the containment tree: **Houses** → **Floors** → **Rooms** /
//!   **Hallways** → **Devices**
//! - Define **containment paths** that name an entity through its ancestors
//! - Define **patches** (partial updates) and the serialized **views** that
//!   embed an entity's derived children
//! - Enforce field-level invariants (name lengths, device types)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Storage and cascade logic live in the `app` crate.

pub mod error;
pub mod id;
pub mod path;

pub mod device;
pub mod floor;
pub mod hallway;
pub mod house;
pub mod patch;
pub mod room;
pub mod user;
pub mod view;
