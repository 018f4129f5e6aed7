//! Entity registry — the single source of truth for the home hierarchy.
//!
//! Each kind lives in one flat collection keyed by its id. A child records
//! its parent id and nothing else records the relationship: "the rooms of
//! floor F" is always computed by filtering the room collection, so there is
//! no second copy to keep in sync.
//!
//! Deletion cascades depth-first, children before parents. Child ids are
//! collected into a `Vec` before anything is removed, so no collection is
//! mutated while it is being iterated.

use std::collections::BTreeMap;
use std::fmt;

use smarthome_domain::device::Device;
use smarthome_domain::error::{ConflictError, InconsistencyError, NotFoundError, SmartHomeError};
use smarthome_domain::floor::Floor;
use smarthome_domain::hallway::Hallway;
use smarthome_domain::house::House;
use smarthome_domain::id::{DeviceId, FloorId, HallwayId, HouseId, RoomId, UserId};
use smarthome_domain::patch::{DevicePatch, NamePatch};
use smarthome_domain::path::{
    DeviceHolder, DevicePath, FloorPath, HallwayPath, HolderPath, RoomPath,
};
use smarthome_domain::room::Room;
use smarthome_domain::user::User;
use smarthome_domain::view::{FloorView, HallwayView, HouseView, RoomView};

/// The six kinds of entity held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    House,
    Floor,
    Room,
    Hallway,
    Device,
}

impl EntityKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::House => "House",
            Self::Floor => "Floor",
            Self::Room => "Room",
            Self::Hallway => "Hallway",
            Self::Device => "Device",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a delete removed, target included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub houses: usize,
    pub floors: usize,
    pub rooms: usize,
    pub hallways: usize,
    pub devices: usize,
}

impl CascadeReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.houses + self.floors + self.rooms + self.hallways + self.devices
    }
}

/// A stored child: the entity, its parent, and its insertion order.
#[derive(Debug)]
struct Node<P, T> {
    parent: P,
    seq: u64,
    value: T,
}

/// In-memory registry of every entity, keyed per kind.
#[derive(Debug, Default)]
pub struct Registry {
    users: BTreeMap<UserId, User>,
    houses: BTreeMap<HouseId, House>,
    floors: BTreeMap<FloorId, Node<HouseId, Floor>>,
    rooms: BTreeMap<RoomId, Node<FloorId, Room>>,
    hallways: BTreeMap<HallwayId, Node<FloorId, Hallway>>,
    devices: BTreeMap<DeviceId, Node<DeviceHolder, Device>>,
    next_seq: u64,
}

fn not_found(kind: EntityKind, id: impl fmt::Display) -> SmartHomeError {
    NotFoundError::new(kind.as_str(), id).into()
}

fn conflict(kind: EntityKind, id: impl fmt::Display) -> SmartHomeError {
    ConflictError::new(kind.as_str(), id).into()
}

/// Find `id` in `map`, but only if it is recorded under `parent`.
fn lookup<'a, K: Ord, P: PartialEq, T>(
    map: &'a BTreeMap<K, Node<P, T>>,
    id: &K,
    parent: &P,
) -> Option<&'a Node<P, T>> {
    map.get(id).filter(|node| node.parent == *parent)
}

fn lookup_mut<'a, K: Ord, P: PartialEq, T>(
    map: &'a mut BTreeMap<K, Node<P, T>>,
    id: &K,
    parent: &P,
) -> Option<&'a mut Node<P, T>> {
    map.get_mut(id).filter(|node| node.parent == *parent)
}

/// Ids of every node recorded under `parent`, in insertion order.
fn children_of<K: Copy, P: PartialEq, T>(map: &BTreeMap<K, Node<P, T>>, parent: &P) -> Vec<K> {
    let mut children: Vec<(u64, K)> = map
        .iter()
        .filter(|(_, node)| node.parent == *parent)
        .map(|(id, node)| (node.seq, *id))
        .collect();
    children.sort_unstable_by_key(|(seq, _)| *seq);
    children.into_iter().map(|(_, id)| id).collect()
}

/// Insert `value` under `parent` unless `id` is already taken.
fn insert_child<K, P, T>(
    map: &mut BTreeMap<K, Node<P, T>>,
    next_seq: &mut u64,
    kind: EntityKind,
    id: K,
    parent: P,
    value: T,
) -> Result<T, SmartHomeError>
where
    K: Ord + Copy + fmt::Display,
    T: Clone,
{
    if map.contains_key(&id) {
        return Err(conflict(kind, id));
    }
    *next_seq += 1;
    map.insert(
        id,
        Node {
            parent,
            seq: *next_seq,
            value: value.clone(),
        },
    );
    Ok(value)
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entities of `kind`.
    #[must_use]
    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::User => self.users.len(),
            EntityKind::House => self.houses.len(),
            EntityKind::Floor => self.floors.len(),
            EntityKind::Room => self.rooms.len(),
            EntityKind::Hallway => self.hallways.len(),
            EntityKind::Device => self.devices.len(),
        }
    }

    /// `true` when no entity of any kind is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.houses.is_empty()
            && self.floors.is_empty()
            && self.rooms.is_empty()
            && self.hallways.is_empty()
            && self.devices.is_empty()
    }

    // -- Containment resolution ---------------------------------------------

    fn resolve_floor(&self, path: FloorPath) -> Result<&Node<HouseId, Floor>, SmartHomeError> {
        self.get_house(path.house_id)?;
        lookup(&self.floors, &path.floor_id, &path.house_id)
            .ok_or_else(|| not_found(EntityKind::Floor, path.floor_id))
    }

    fn resolve_room(&self, path: RoomPath) -> Result<&Node<FloorId, Room>, SmartHomeError> {
        self.resolve_floor(path.floor)?;
        lookup(&self.rooms, &path.room_id, &path.floor.floor_id)
            .ok_or_else(|| not_found(EntityKind::Room, path.room_id))
    }

    fn resolve_hallway(
        &self,
        path: HallwayPath,
    ) -> Result<&Node<FloorId, Hallway>, SmartHomeError> {
        self.resolve_floor(path.floor)?;
        lookup(&self.hallways, &path.hallway_id, &path.floor.floor_id)
            .ok_or_else(|| not_found(EntityKind::Hallway, path.hallway_id))
    }

    fn resolve_holder(&self, path: HolderPath) -> Result<(), SmartHomeError> {
        match path.holder {
            DeviceHolder::Room(room_id) => self.resolve_room(path.floor.room(room_id)).map(drop),
            DeviceHolder::Hallway(hallway_id) => {
                self.resolve_hallway(path.floor.hallway(hallway_id)).map(drop)
            }
        }
    }

    fn resolve_device(&self, path: DevicePath) -> Result<&Node<DeviceHolder, Device>, SmartHomeError> {
        self.resolve_holder(path.holder)?;
        lookup(&self.devices, &path.device_id, &path.holder.holder)
            .ok_or_else(|| not_found(EntityKind::Device, path.device_id))
    }

    // -- Derived child listings ---------------------------------------------

    /// Floors of `house_id`, in creation order.
    #[must_use]
    pub fn floors_of(&self, house_id: HouseId) -> Vec<FloorId> {
        children_of(&self.floors, &house_id)
    }

    /// Rooms on `floor_id`, in creation order.
    #[must_use]
    pub fn rooms_of(&self, floor_id: FloorId) -> Vec<RoomId> {
        children_of(&self.rooms, &floor_id)
    }

    /// Hallways on `floor_id`, in creation order.
    #[must_use]
    pub fn hallways_of(&self, floor_id: FloorId) -> Vec<HallwayId> {
        children_of(&self.hallways, &floor_id)
    }

    /// Devices attached to `holder`, in creation order.
    #[must_use]
    pub fn devices_of(&self, holder: DeviceHolder) -> Vec<DeviceId> {
        children_of(&self.devices, &holder)
    }

    // -- Users --------------------------------------------------------------

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Conflict`] when the id is taken.
    pub fn create_user(&mut self, user: User) -> Result<User, SmartHomeError> {
        if self.users.contains_key(&user.user_id) {
            return Err(conflict(EntityKind::User, user.user_id));
        }
        self.users.insert(user.user_id, user.clone());
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no user has this id.
    pub fn get_user(&self, id: UserId) -> Result<&User, SmartHomeError> {
        self.users
            .get(&id)
            .ok_or_else(|| not_found(EntityKind::User, id))
    }

    /// Patch a user and rewrite the owner snapshot of every house it owns.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no user has this id, or
    /// [`SmartHomeError::Validation`] when the new name is invalid.
    pub fn patch_user(&mut self, id: UserId, patch: &NamePatch) -> Result<User, SmartHomeError> {
        let updated = self.get_user(id)?.patched(patch)?;
        for house in self
            .houses
            .values_mut()
            .filter(|house| house.owner.user_id == id)
        {
            house.owner.clone_from(&updated);
        }
        self.users.insert(id, updated.clone());
        Ok(updated)
    }

    /// Remove a user. Houses keep their owner snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no user has this id.
    pub fn delete_user(&mut self, id: UserId) -> Result<User, SmartHomeError> {
        self.users
            .remove(&id)
            .ok_or_else(|| not_found(EntityKind::User, id))
    }

    // -- Houses -------------------------------------------------------------

    /// Register a house owned by an existing user.
    ///
    /// # Errors
    ///
    /// - [`SmartHomeError::Conflict`] when the house id is taken
    /// - [`SmartHomeError::Inconsistent`] when the owner is not registered,
    ///   or registered under a different name
    pub fn create_house(&mut self, house: House) -> Result<House, SmartHomeError> {
        if self.houses.contains_key(&house.house_id) {
            return Err(conflict(EntityKind::House, house.house_id));
        }
        let owner_id = house.owner.user_id;
        let registered = self
            .users
            .get(&owner_id)
            .ok_or(InconsistencyError::OwnerMissing { user_id: owner_id })?;
        if registered.name != house.owner.name {
            return Err(InconsistencyError::OwnerNameMismatch {
                user_id: owner_id,
                expected: registered.name.clone(),
                actual: house.owner.name,
            }
            .into());
        }
        self.houses.insert(house.house_id, house.clone());
        Ok(house)
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no house has this id.
    pub fn get_house(&self, id: HouseId) -> Result<&House, SmartHomeError> {
        self.houses
            .get(&id)
            .ok_or_else(|| not_found(EntityKind::House, id))
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no house has this id.
    pub fn patch_house(&mut self, id: HouseId, patch: &NamePatch) -> Result<House, SmartHomeError> {
        let house = self
            .houses
            .get_mut(&id)
            .ok_or_else(|| not_found(EntityKind::House, id))?;
        house.apply(patch);
        Ok(house.clone())
    }

    /// Delete a house and everything it contains.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no house has this id.
    pub fn delete_house(&mut self, id: HouseId) -> Result<CascadeReport, SmartHomeError> {
        self.get_house(id)?;
        let mut report = CascadeReport::default();
        for floor_id in self.floors_of(id) {
            self.remove_floor(floor_id, &mut report);
        }
        if self.houses.remove(&id).is_some() {
            report.houses += 1;
        }
        Ok(report)
    }

    /// The house with its floors, rooms, hallways and devices.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no house has this id.
    pub fn house_view(&self, id: HouseId) -> Result<HouseView, SmartHomeError> {
        let house = self.get_house(id)?.clone();
        let floors = self
            .floors_of(id)
            .into_iter()
            .filter_map(|floor_id| self.build_floor_view(floor_id))
            .collect();
        Ok(HouseView { house, floors })
    }

    // -- Floors -------------------------------------------------------------

    /// # Errors
    ///
    /// - [`SmartHomeError::NotFound`] when the house does not exist
    /// - [`SmartHomeError::Conflict`] when the floor id is taken
    pub fn create_floor(&mut self, house_id: HouseId, floor: Floor) -> Result<Floor, SmartHomeError> {
        self.get_house(house_id)?;
        insert_child(
            &mut self.floors,
            &mut self.next_seq,
            EntityKind::Floor,
            floor.floor_id,
            house_id,
            floor,
        )
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the house is missing or the
    /// floor is not in it.
    pub fn get_floor(&self, path: FloorPath) -> Result<&Floor, SmartHomeError> {
        self.resolve_floor(path).map(|node| &node.value)
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the house is missing or the
    /// floor is not in it.
    pub fn patch_floor(&mut self, path: FloorPath, patch: &NamePatch) -> Result<Floor, SmartHomeError> {
        self.get_house(path.house_id)?;
        let node = lookup_mut(&mut self.floors, &path.floor_id, &path.house_id)
            .ok_or_else(|| not_found(EntityKind::Floor, path.floor_id))?;
        node.value.apply(patch);
        Ok(node.value.clone())
    }

    /// Delete a floor with its rooms, hallways and their devices.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the house is missing or the
    /// floor is not in it.
    pub fn delete_floor(&mut self, path: FloorPath) -> Result<CascadeReport, SmartHomeError> {
        self.resolve_floor(path)?;
        let mut report = CascadeReport::default();
        self.remove_floor(path.floor_id, &mut report);
        Ok(report)
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the house is missing or the
    /// floor is not in it.
    pub fn floor_view(&self, path: FloorPath) -> Result<FloorView, SmartHomeError> {
        self.resolve_floor(path)?;
        self.build_floor_view(path.floor_id)
            .ok_or_else(|| not_found(EntityKind::Floor, path.floor_id))
    }

    fn build_floor_view(&self, id: FloorId) -> Option<FloorView> {
        let node = self.floors.get(&id)?;
        Some(FloorView {
            floor: node.value.clone(),
            rooms: self
                .rooms_of(id)
                .into_iter()
                .filter_map(|room_id| self.build_room_view(room_id))
                .collect(),
            hallways: self
                .hallways_of(id)
                .into_iter()
                .filter_map(|hallway_id| self.build_hallway_view(hallway_id))
                .collect(),
        })
    }

    fn remove_floor(&mut self, id: FloorId, report: &mut CascadeReport) {
        for room_id in self.rooms_of(id) {
            self.remove_room(room_id, report);
        }
        for hallway_id in self.hallways_of(id) {
            self.remove_hallway(hallway_id, report);
        }
        if self.floors.remove(&id).is_some() {
            report.floors += 1;
        }
    }

    // -- Rooms --------------------------------------------------------------

    /// # Errors
    ///
    /// - [`SmartHomeError::NotFound`] when the house or floor does not resolve
    /// - [`SmartHomeError::Conflict`] when the room id is taken
    pub fn create_room(&mut self, floor: FloorPath, room: Room) -> Result<Room, SmartHomeError> {
        self.resolve_floor(floor)?;
        insert_child(
            &mut self.rooms,
            &mut self.next_seq,
            EntityKind::Room,
            room.room_id,
            floor.floor_id,
            room,
        )
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    pub fn get_room(&self, path: RoomPath) -> Result<&Room, SmartHomeError> {
        self.resolve_room(path).map(|node| &node.value)
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    pub fn patch_room(&mut self, path: RoomPath, patch: &NamePatch) -> Result<Room, SmartHomeError> {
        self.resolve_floor(path.floor)?;
        let node = lookup_mut(&mut self.rooms, &path.room_id, &path.floor.floor_id)
            .ok_or_else(|| not_found(EntityKind::Room, path.room_id))?;
        node.value.apply(patch);
        Ok(node.value.clone())
    }

    /// Delete a room and its devices.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    pub fn delete_room(&mut self, path: RoomPath) -> Result<CascadeReport, SmartHomeError> {
        self.resolve_room(path)?;
        let mut report = CascadeReport::default();
        self.remove_room(path.room_id, &mut report);
        Ok(report)
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    pub fn room_view(&self, path: RoomPath) -> Result<RoomView, SmartHomeError> {
        self.resolve_room(path)?;
        self.build_room_view(path.room_id)
            .ok_or_else(|| not_found(EntityKind::Room, path.room_id))
    }

    fn build_room_view(&self, id: RoomId) -> Option<RoomView> {
        let node = self.rooms.get(&id)?;
        Some(RoomView {
            room: node.value.clone(),
            devices: self.devices_in(DeviceHolder::Room(id)),
        })
    }

    fn remove_room(&mut self, id: RoomId, report: &mut CascadeReport) {
        self.remove_devices(DeviceHolder::Room(id), report);
        if self.rooms.remove(&id).is_some() {
            report.rooms += 1;
        }
    }

    // -- Hallways -----------------------------------------------------------

    /// # Errors
    ///
    /// - [`SmartHomeError::NotFound`] when the house or floor does not resolve
    /// - [`SmartHomeError::Conflict`] when the hallway id is taken
    pub fn create_hallway(
        &mut self,
        floor: FloorPath,
        hallway: Hallway,
    ) -> Result<Hallway, SmartHomeError> {
        self.resolve_floor(floor)?;
        insert_child(
            &mut self.hallways,
            &mut self.next_seq,
            EntityKind::Hallway,
            hallway.hallway_id,
            floor.floor_id,
            hallway,
        )
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    pub fn get_hallway(&self, path: HallwayPath) -> Result<&Hallway, SmartHomeError> {
        self.resolve_hallway(path).map(|node| &node.value)
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    pub fn patch_hallway(
        &mut self,
        path: HallwayPath,
        patch: &NamePatch,
    ) -> Result<Hallway, SmartHomeError> {
        self.resolve_floor(path.floor)?;
        let node = lookup_mut(&mut self.hallways, &path.hallway_id, &path.floor.floor_id)
            .ok_or_else(|| not_found(EntityKind::Hallway, path.hallway_id))?;
        node.value.apply(patch);
        Ok(node.value.clone())
    }

    /// Delete a hallway and its devices.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    pub fn delete_hallway(&mut self, path: HallwayPath) -> Result<CascadeReport, SmartHomeError> {
        self.resolve_hallway(path)?;
        let mut report = CascadeReport::default();
        self.remove_hallway(path.hallway_id, &mut report);
        Ok(report)
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    pub fn hallway_view(&self, path: HallwayPath) -> Result<HallwayView, SmartHomeError> {
        self.resolve_hallway(path)?;
        self.build_hallway_view(path.hallway_id)
            .ok_or_else(|| not_found(EntityKind::Hallway, path.hallway_id))
    }

    fn build_hallway_view(&self, id: HallwayId) -> Option<HallwayView> {
        let node = self.hallways.get(&id)?;
        Some(HallwayView {
            hallway: node.value.clone(),
            devices: self.devices_in(DeviceHolder::Hallway(id)),
        })
    }

    fn remove_hallway(&mut self, id: HallwayId, report: &mut CascadeReport) {
        self.remove_devices(DeviceHolder::Hallway(id), report);
        if self.hallways.remove(&id).is_some() {
            report.hallways += 1;
        }
    }

    // -- Devices ------------------------------------------------------------

    /// Attach a new device to a room or hallway.
    ///
    /// # Errors
    ///
    /// - [`SmartHomeError::NotFound`] when any segment of `holder` does not
    ///   resolve
    /// - [`SmartHomeError::Conflict`] when the device id is taken, whichever
    ///   holder it is attached to
    pub fn create_device(
        &mut self,
        holder: HolderPath,
        device: Device,
    ) -> Result<Device, SmartHomeError> {
        self.resolve_holder(holder)?;
        insert_child(
            &mut self.devices,
            &mut self.next_seq,
            EntityKind::Device,
            device.device_id,
            holder.holder,
            device,
        )
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    pub fn get_device(&self, path: DevicePath) -> Result<&Device, SmartHomeError> {
        self.resolve_device(path).map(|node| &node.value)
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    pub fn patch_device(
        &mut self,
        path: DevicePath,
        patch: DevicePatch,
    ) -> Result<Device, SmartHomeError> {
        self.resolve_holder(path.holder)?;
        let node = lookup_mut(&mut self.devices, &path.device_id, &path.holder.holder)
            .ok_or_else(|| not_found(EntityKind::Device, path.device_id))?;
        node.value.apply(patch);
        Ok(node.value.clone())
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when any segment of `path` does
    /// not resolve.
    pub fn delete_device(&mut self, path: DevicePath) -> Result<Device, SmartHomeError> {
        self.resolve_device(path)?;
        self.devices
            .remove(&path.device_id)
            .map(|node| node.value)
            .ok_or_else(|| not_found(EntityKind::Device, path.device_id))
    }

    fn devices_in(&self, holder: DeviceHolder) -> Vec<Device> {
        self.devices_of(holder)
            .into_iter()
            .filter_map(|id| self.devices.get(&id))
            .map(|node| node.value.clone())
            .collect()
    }

    fn remove_devices(&mut self, holder: DeviceHolder, report: &mut CascadeReport) {
        for device_id in self.devices_of(holder) {
            if self.devices.remove(&device_id).is_some() {
                report.devices += 1;
            }
        }
    }
}
