use std::{
    cell::Cell,
    cmp::Ordering,
};

/// This provides the tree information about a given element of a weighted disjoint set.
///
/// For each element we store a `Metadata`.
#[derive(Clone, Debug)]
pub(crate) struct Metadata {
    /// The parent of the element in its sets tree.
    /// These form an upside down tree where each child has the index of its parent.
    parent: Cell<usize>,
    /// The amount of elements in the tree below this element.
    /// This is only kept up to date for roots.
    size: Cell<usize>,
}

impl Metadata {
    /// Create a new `Metadata` for an element with the given index.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            size: Cell::new(1),
        }
    }

    /// Return the `parent` variable.
    #[inline]
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    #[inline]
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `size` variable.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size.get()
    }

    /// Set the `size` variable.
    #[inline]
    pub(crate) fn set_size(&self, value: usize) {
        self.size.set(value);
    }
}

/// Walks the parents of `index` until it reaches a root, without changing anything.
pub(crate) fn find_root(meta: &[Metadata], mut index: usize) -> usize {
    while index != meta[index].parent() {
        index = meta[index].parent();
    }

    index
}

/// Joins the trees with the roots `i` and `j`, which must be different.
///
/// The smaller tree is added below the root of the larger tree.
/// On equal sizes the tree of `i` goes below `j`.
pub(crate) fn link_roots(meta: &[Metadata], i: usize, j: usize) {
    let size = meta[i].size() + meta[j].size();

    match Ord::cmp(&meta[i].size(), &meta[j].size()) {
        Ordering::Less | Ordering::Equal => {
            meta[i].set_parent(j);
            meta[j].set_size(size);
        },
        Ordering::Greater => {
            meta[j].set_parent(i);
            meta[i].set_size(size);
        },
    }
}
