use std::collections::HashMap;
use std::ops::{Index, IndexMut};
use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Handle-addressed storage for bodies
#[derive(Debug)]
pub struct BodyStorage<T> {
    items: HashMap<BodyHandle, T>,
    next_id: u32,
}

impl<T> BodyStorage<T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1, // Start at 1, so 0 can represent invalid handle
        }
    }

    /// Adds an item to the storage and returns its handle
    pub fn add(&mut self, item: T) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id += 1;
        self.items.insert(handle, item);
        handle
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        self.items.get(&handle)
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        self.items.get_mut(&handle)
    }

    /// Removes an item from the storage
    pub fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        self.items.remove(&handle)
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.items.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over all items, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> + '_ {
        self.items.iter().map(|(h, item)| (*h, item))
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<BodyHandle> for BodyStorage<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the handle does not refer to a live body.
    fn index(&self, handle: BodyHandle) -> &T {
        match self.items.get(&handle) {
            Some(item) => item,
            None => panic!("body {:?} is not in the scene", handle),
        }
    }
}

impl<T> IndexMut<BodyHandle> for BodyStorage<T> {
    fn index_mut(&mut self, handle: BodyHandle) -> &mut T {
        match self.items.get_mut(&handle) {
            Some(item) => item,
            None => panic!("body {:?} is not in the scene", handle),
        }
    }
}
