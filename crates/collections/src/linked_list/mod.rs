use crate::boxnode;

/// Singly linked chain of key/value entries, owned head first.
///
/// Every bucket of a [`HashTable`](crate::HashTable) is one of these.
pub struct List<V> {
    head: Option<Box<Node<V>>>,
    len: usize,
}

impl<V> Default for List<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> List<V> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Prepends a new entry, it does not look for an existing one with the same key
    pub fn push<K: Into<String>, T: Into<V>>(&mut self, key: K, value: T) {
        self.push_boxed(boxnode!(key, value));
    }

    pub(crate) fn push_boxed(&mut self, mut boxed: Box<Node<V>>) {
        boxed.next = self.head.take();
        self.head = Some(boxed);
        self.len += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Node<V>> {
        self.pop_boxed().map(|node| *node)
    }

    /// Detaches the head while keeping its allocation
    pub(crate) fn pop_boxed(&mut self) -> Option<Box<Node<V>>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some(node)
    }

    pub fn peek(&self) -> Option<&Node<V>> {
        self.head.as_deref()
    }

    pub fn peek_mut(&mut self) -> Option<&mut Node<V>> {
        self.head.as_deref_mut()
    }

    /// Returns the first entry whose key equals `key`
    pub fn find(&self, key: &str) -> Option<&Node<V>> {
        self.iter().find(|node| node.key == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Node<V>> {
        let mut curr = self.head.as_deref_mut();
        while let Some(node) = curr {
            if node.key == key {
                return Some(node);
            }
            curr = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the entry with the given key and hands it back
    ///
    /// The link pointing at the match (the head, or the previous entry's `next`)
    /// is rewired to the match's successor.
    pub fn remove(&mut self, key: &str) -> Option<Node<V>> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key != key) {
            link = &mut link.as_mut()?.next;
        }

        let mut node = link.take()?;
        *link = node.next.take();
        self.len -= 1;

        Some(*node)
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut::new(self)
    }
}

impl<V> Drop for List<V> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            // node goes out of scope here, calling drop
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for List<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V> IntoIterator for List<V> {
    type Item = <IterOwn<V> as Iterator>::Item;
    type IntoIter = IterOwn<V>;

    fn into_iter(self) -> Self::IntoIter {
        IterOwn::new(self)
    }
}

/// One key/value pair in a chain
pub struct Node<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    pub(crate) next: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}
impl<V: Eq> Eq for Node<V> {}

impl<V: std::fmt::Debug> std::fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {:?}>", self.key, self.value)
    }
}

// [iterators]

pub struct Iter<'a, V> {
    current: Option<&'a Node<V>>,
    len: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Node<V>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.current.take() {
            None => None,
            Some(node) => {
                self.current = node.next.as_deref();
                self.len -= 1;
                Some(node)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, V> Iter<'a, V> {
    pub fn new(list: &'a List<V>) -> Self {
        Self {
            current: list.head.as_deref(),
            len: list.len,
        }
    }
}

/// Yields each key with a mutable handle on its value, keys stay read only
pub struct IterMut<'a, V> {
    current: Option<&'a mut Node<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);
    fn next(&mut self) -> Option<Self::Item> {
        let Node { key, value, next } = self.current.take()?;
        self.current = next.as_deref_mut();
        Some((key.as_str(), value))
    }
}

impl<'a, V> IterMut<'a, V> {
    pub fn new(list: &'a mut List<V>) -> Self {
        Self {
            current: list.head.as_deref_mut(),
        }
    }
}

pub struct IterOwn<V>(List<V>);

impl<V> Iterator for IterOwn<V> {
    type Item = Node<V>;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<V> IterOwn<V> {
    pub fn new(list: List<V>) -> Self {
        Self(list)
    }
}
