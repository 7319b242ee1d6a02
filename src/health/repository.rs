// 📚 List-backed repository
// Lookups are predicate-based; first match wins.

/// Ordered in-memory collection with predicate lookup and removal
#[derive(Debug, Clone)]
pub struct Repository<T> {
    items: Vec<T>,
}

impl<T: Clone> Repository<T> {
    pub fn new() -> Self {
        Repository { items: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Snapshot of all items in insertion order
    pub fn get_all(&self) -> Vec<T> {
        self.items.clone()
    }

    /// First item matching the predicate
    pub fn get_by<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(*item))
    }

    /// Remove the first item matching the predicate; false if nothing matched
    pub fn remove_by<P>(&mut self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        match self.items.iter().position(|item| predicate(item)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}
