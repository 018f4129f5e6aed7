//! # smarthome-app
//!
//! Application layer — the entity registry, use-cases and **port
//! definitions** (traits).
//!
//! ## Responsibilities
//! - Hold the **entity registry**: six flat keyed collections (users, houses,
//!   floors, rooms, hallways, devices) where every child records its parent
//!   id, plus containment validation and cascading deletion
//! - Define the **storage port** (`RegistryStore`) that decides how the
//!   registry is shared and locked
//! - Define **driving/inbound ports** as one service per entity kind:
//!   `UserService`, `HouseService`, `FloorService`, `RoomService`,
//!   `HallwayService`, `DeviceService`
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod registry;
pub mod services;

#[cfg(test)]
mod test_support;
