use crate::entry::Entry;
use crate::node::Node;
use crate::Comparator;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

/// Restructures the subtree rooted at `node` so that the node holding `key`, or the last node
/// visited by a search for `key`, becomes its root.
///
/// This is a top-down splay: two fragments accumulate the subtrees known to be less than and
/// greater than `key` while the search descends, and the final node is reassembled with the
/// fragments as its children. Every key in the less fragment stays below every key still reachable
/// from the working node, and symmetrically for the greater fragment.
pub fn splay<T, U>(node: &mut Box<Node<T, U>>, key: &T, cmp: Comparator<T>) {
    let mut less_subtree: Tree<T, U> = None;
    let mut greater_subtree: Tree<T, U> = None;
    let mut less_len = 0;
    let mut greater_len = 0;
    {
        // `less` is the rightmost open slot of the less fragment, `greater` the leftmost open
        // slot of the greater fragment.
        let mut less = &mut less_subtree;
        let mut greater = &mut greater_subtree;
        loop {
            match cmp(key, &node.entry.key) {
                Ordering::Less => {
                    let should_rotate = match node.left {
                        Some(ref child) => cmp(key, &child.entry.key) == Ordering::Less,
                        None => break,
                    };
                    if should_rotate {
                        node.rotate_right();
                    }

                    let child = match node.left.take() {
                        Some(child) => child,
                        None => break,
                    };
                    *greater = Some(mem::replace(node, child));
                    greater_len += 1;
                    greater = &mut { greater }
                        .as_mut()
                        .expect("Expected non-empty greater fragment.")
                        .left;
                },
                Ordering::Greater => {
                    let should_rotate = match node.right {
                        Some(ref child) => cmp(key, &child.entry.key) == Ordering::Greater,
                        None => break,
                    };
                    if should_rotate {
                        node.rotate_left();
                    }

                    let child = match node.right.take() {
                        Some(child) => child,
                        None => break,
                    };
                    *less = Some(mem::replace(node, child));
                    less_len += 1;
                    less = &mut { less }
                        .as_mut()
                        .expect("Expected non-empty less fragment.")
                        .right;
                },
                Ordering::Equal => break,
            }
        }

        mem::swap(less, &mut node.left);
        mem::swap(greater, &mut node.right);
    }

    node.left = less_subtree;
    node.right = greater_subtree;

    // Only nodes appended to a fragment carry stale heights; the subtrees below them moved
    // whole, so the repair walks one spine level per append.
    update_right_spine(&mut node.left, less_len);
    update_left_spine(&mut node.right, greater_len);
    node.update();
}

fn update_left_spine<T, U>(tree: &mut Tree<T, U>, depth: usize) {
    if depth == 0 {
        return;
    }
    if let Some(ref mut node) = tree {
        update_left_spine(&mut node.left, depth - 1);
        node.update();
    }
}

fn update_right_spine<T, U>(tree: &mut Tree<T, U>, depth: usize) {
    if depth == 0 {
        return;
    }
    if let Some(ref mut node) = tree {
        update_right_spine(&mut node.right, depth - 1);
        node.update();
    }
}

/// Inserts `new_node` unless its key is already present, splaying so that the affected key ends up
/// at the root either way. Returns `true` when a node was added; a duplicate key is a no-op that
/// leaves the stored entry untouched.
pub fn insert<T, U>(tree: &mut Tree<T, U>, mut new_node: Node<T, U>, cmp: Comparator<T>) -> bool {
    match tree {
        Some(ref mut node) => {
            splay(node, &new_node.entry.key, cmp);
            match cmp(&new_node.entry.key, &node.entry.key) {
                Ordering::Less => {
                    new_node.left = node.left.take();
                    mem::swap(&mut **node, &mut new_node);
                    new_node.update();
                    node.right = Some(Box::new(new_node));
                    node.update();
                    true
                },
                Ordering::Greater => {
                    new_node.right = node.right.take();
                    mem::swap(&mut **node, &mut new_node);
                    new_node.update();
                    node.left = Some(Box::new(new_node));
                    node.update();
                    true
                },
                Ordering::Equal => false,
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            true
        },
    }
}

/// Removes the entry for `key` if it is present. Removing an absent key is a well-defined no-op,
/// although the failed search still splays the last visited node to the root.
pub fn remove<T, U>(tree: &mut Tree<T, U>, key: &T, cmp: Comparator<T>) -> Option<Entry<T, U>> {
    match tree {
        Some(ref mut node) => {
            splay(node, key, cmp);
            if cmp(key, &node.entry.key) != Ordering::Equal {
                return None;
            }
        },
        None => return None,
    }

    let unboxed_node = *tree.take().expect("Expected non-empty tree.");
    let Node {
        entry, left, right, ..
    } = unboxed_node;
    *tree = match left {
        Some(mut left_child) => {
            // `key` is absent from the left subtree, so this splay promotes its maximum, which
            // therefore has no right child to displace.
            splay(&mut left_child, key, cmp);
            left_child.right = right;
            left_child.update();
            Some(left_child)
        },
        None => right,
    };
    Some(entry)
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

pub fn floor<'a, T, U>(tree: &'a Tree<T, U>, key: &T, cmp: Comparator<T>) -> Option<&'a Entry<T, U>> {
    tree.as_ref().and_then(|node| {
        match cmp(key, &node.entry.key) {
            Ordering::Less => floor(&node.left, key, cmp),
            Ordering::Greater => {
                match floor(&node.right, key, cmp) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn ceil<'a, T, U>(tree: &'a Tree<T, U>, key: &T, cmp: Comparator<T>) -> Option<&'a Entry<T, U>> {
    tree.as_ref().and_then(|node| {
        match cmp(key, &node.entry.key) {
            Ordering::Greater => ceil(&node.right, key, cmp),
            Ordering::Less => {
                match ceil(&node.left, key, cmp) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}
