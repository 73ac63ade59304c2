//! Self-balancing ordered map, the collision-proof alternative to the
//! chained hash map: worst-case logarithmic lookups whatever the key
//! distribution, so hostile key choices cannot degrade it.
//!
//! Values live in the leaves. Internal nodes are pure routing: each holds a
//! copy of the largest key of its left subtree and both children, never a
//! value. Keys at or below the routing key descend left, larger keys right.

use alloc::boxed::Box;
use core::cmp::Ordering;

use types::error::MapError;

struct AvlNode<K, V> {
    height: i32,
    key: K,
    value: Option<V>,
    left: Option<Box<AvlNode<K, V>>>,
    right: Option<Box<AvlNode<K, V>>>,
}

/// Ordered map over a caller-supplied total order.
pub struct AvlMap<K, V> {
    root: Option<Box<AvlNode<K, V>>>,
    cmp: fn(&K, &K) -> Ordering,
}

impl<K: Clone, V> AvlMap<K, V> {
    pub fn new(cmp: fn(&K, &K) -> Ordering) -> Self {
        Self { root: None, cmp }
    }

    /// Inserts `key -> value`; an equal key's leaf is replaced with a fresh
    /// one. Every touched ancestor is rebalanced on the way back up.
    pub fn set(&mut self, key: K, value: V) {
        self.root = match self.root.take() {
            None => Some(Box::new(AvlNode::leaf(key, value))),
            Some(root) => Some(root.set(key, value, self.cmp)),
        };
    }

    pub fn get(&self, key: &K) -> Result<&V, MapError> {
        match &self.root {
            None => Err(MapError::EmptyMap),
            Some(root) => root.get(key, self.cmp),
        }
    }

    pub fn has(&self, key: &K) -> bool {
        match &self.root {
            None => false,
            Some(root) => root.has(key, self.cmp),
        }
    }

    /// Removes the entry with an equal key, if present; removing from an
    /// empty map is an error, removing an absent key from a non-empty map
    /// is not.
    pub fn remove(&mut self, key: &K) -> Result<(), MapError> {
        match self.root.take() {
            None => Err(MapError::EmptyMap),
            Some(root) => {
                self.root = root.remove(key, self.cmp);
                Ok(())
            }
        }
    }

    /// Visits every entry in key order.
    pub fn for_each<F: FnMut(&K, &V)>(&self, mut f: F) {
        if let Some(root) = &self.root {
            root.for_each(&mut f);
        }
    }
}

impl<K: Clone, V> AvlNode<K, V> {
    fn leaf(key: K, value: V) -> Self {
        Self { height: 0, key, value: Some(value), left: None, right: None }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn balance_factor(&self) -> i32 {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => left.height - right.height,
            _ => 0,
        }
    }

    // Internal-node height sums the children rather than taking their max;
    // the balance factor therefore weighs subtree populations, and the
    // rotation rules below are tuned to that measure.
    fn update(&mut self) {
        self.height = match (&self.left, &self.right) {
            (Some(left), Some(right)) => left.height + right.height + 1,
            _ => 0,
        };
    }

    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut old_right = self.right.take().unwrap();
        self.right = old_right.left.take();
        self.update();
        old_right.left = Some(self);
        old_right.update();
        old_right
    }

    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut old_left = self.left.take().unwrap();
        self.left = old_left.right.take();
        self.update();
        old_left.right = Some(self);
        old_left.update();
        old_left
    }

    fn rebalance(mut self: Box<Self>) -> Box<Self> {
        self.update();
        let balance = self.balance_factor();
        if balance > 1 {
            if self.left.as_ref().unwrap().balance_factor() > 0 {
                let left = self.left.take().unwrap();
                self.left = Some(left.rotate_left());
            }
            self.rotate_right()
        } else if balance < -1 {
            if self.right.as_ref().unwrap().balance_factor() > 0 {
                let right = self.right.take().unwrap();
                self.right = Some(right.rotate_right());
            }
            self.rotate_left()
        } else {
            self
        }
    }

    fn has(&self, key: &K, cmp: fn(&K, &K) -> Ordering) -> bool {
        let ord = cmp(key, &self.key);

        if self.is_leaf() {
            return ord == Ordering::Equal;
        }

        if ord == Ordering::Greater {
            self.right.as_ref().unwrap().has(key, cmp)
        } else {
            self.left.as_ref().unwrap().has(key, cmp)
        }
    }

    fn get(&self, key: &K, cmp: fn(&K, &K) -> Ordering) -> Result<&V, MapError> {
        let ord = cmp(key, &self.key);

        if self.is_leaf() {
            return if ord == Ordering::Equal {
                Ok(self.value.as_ref().unwrap())
            } else {
                Err(MapError::KeyNotFound)
            };
        }

        if ord == Ordering::Greater {
            self.right.as_ref().unwrap().get(key, cmp)
        } else {
            self.left.as_ref().unwrap().get(key, cmp)
        }
    }

    fn set(mut self: Box<Self>, key: K, value: V, cmp: fn(&K, &K) -> Ordering) -> Box<Self> {
        let ord = cmp(&key, &self.key);

        if !self.is_leaf() {
            if ord == Ordering::Greater {
                let right = self.right.take().unwrap();
                self.right = Some(right.set(key, value, cmp));
            } else {
                let left = self.left.take().unwrap();
                self.left = Some(left.set(key, value, cmp));
            }
            return self.rebalance();
        }

        match ord {
            Ordering::Equal => Box::new(AvlNode::leaf(key, value)),
            Ordering::Less => {
                let new_leaf = Box::new(AvlNode::leaf(key, value));
                let mut node = Box::new(AvlNode {
                    height: 0,
                    key: new_leaf.key.clone(),
                    value: None,
                    left: Some(new_leaf),
                    right: Some(self),
                });
                node.update();
                node
            }
            Ordering::Greater => {
                let new_leaf = Box::new(AvlNode::leaf(key, value));
                let mut node = Box::new(AvlNode {
                    height: 0,
                    key: self.key.clone(),
                    value: None,
                    left: Some(self),
                    right: Some(new_leaf),
                });
                node.update();
                node
            }
        }
    }

    fn remove(mut self: Box<Self>, key: &K, cmp: fn(&K, &K) -> Ordering) -> Option<Box<Self>> {
        let ord = cmp(key, &self.key);

        if self.is_leaf() {
            return if ord == Ordering::Equal { None } else { Some(self) };
        }

        if ord == Ordering::Greater {
            let right = self.right.take().unwrap();
            self.right = right.remove(key, cmp);
            if self.right.is_none() {
                // Collapsed child: the surviving sibling takes this node's place.
                return self.left.take();
            }
        } else {
            let left = self.left.take().unwrap();
            self.left = left.remove(key, cmp);
            if self.left.is_none() {
                return self.right.take();
            }
        }

        Some(self.rebalance())
    }

    fn for_each<F: FnMut(&K, &V)>(&self, f: &mut F) {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => {
                left.for_each(f);
                right.for_each(f);
            }
            _ => f(&self.key, self.value.as_ref().unwrap()),
        }
    }
}
