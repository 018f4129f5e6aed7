//! Application services — use-case implementations.
//!
//! Each service struct accepts a [`RegistryStore`](crate::ports::RegistryStore)
//! implementation via a generic parameter (constructor injection), keeping
//! this layer decoupled from concrete adapters.

pub mod device_service;
pub mod floor_service;
pub mod hallway_service;
pub mod house_service;
pub mod room_service;
pub mod user_service;
