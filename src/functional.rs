//! A Functional BST of string keys. This is modeled after a BST one would
//! see in a functional language like Haskell. `insert` never modifies the
//! tree it is called on - it returns a new tree that references most of the
//! nodes of the original.
//!
//! The tree is deliberately left unbalanced: its shape depends entirely on
//! insertion order.
//!
//! # Examples
//!
//! ```
//! use exercises::functional::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains("m"));
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert("m");
//!
//! // The new tree has this key but the old one doesn't.
//! assert!(new_tree.contains("m"));
//! assert!(!tree.contains("m"));
//!
//! // Every version is still around and prints in order.
//! let newer_tree = new_tree.insert("c").insert("x");
//! assert_eq!(tree.to_string(), "()");
//! assert_eq!(new_tree.to_string(), "(()m())");
//! assert_eq!(newer_tree.to_string(), "((()c())m(()x()))");
//! ```

use std::cmp;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::mem;
use std::sync::Arc;

/// A Binary Search Tree holding unique strings. Note that this data
/// structure is functional - operations that would modify the tree instead
/// return a new tree.
///
/// Cloning a `Tree` is cheap: the clone shares every node with the original.
///
/// Nothing here recurses, so a tree built from sorted input (which is as deep
/// as it is big) can be walked, compared, printed and dropped on any stack.
#[derive(Clone)]
pub enum Tree {
    /// The tree with no keys. Also marks the bottom of every subtree.
    Empty,
    /// A shared pointer to a [`Node`]. Several versions of a tree may point
    /// at the same `Node`.
    Node(Arc<Node>),
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Returns `true` if this tree holds no keys.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Counts the keys in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::functional::Tree;
    ///
    /// let tree: Tree = vec!["b", "a", "c", "a"].into_iter().collect();
    /// assert_eq!(tree.size(), 3);
    /// assert_eq!(Tree::new().size(), 0);
    /// ```
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns whether `value` is stored somewhere in this tree.
    pub fn contains(&self, value: &str) -> bool {
        let mut tree = self;
        while let Self::Node(n) = tree {
            tree = match value.cmp(n.value()) {
                cmp::Ordering::Less => &n.left,
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => &n.right,
            };
        }
        false
    }

    /// Returns a new tree that also holds `value`. Only the nodes on the
    /// path from the root down to `value` are new; every other subtree is
    /// shared with `self`. Inserting a key that is already present gives back
    /// a tree sharing all of its nodes with this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::functional::Tree;
    ///
    /// let tree = Tree::new().insert("m");
    /// let new_tree = tree.insert("a");
    /// let same_tree = new_tree.insert("a");
    ///
    /// // All history is preserved.
    /// assert!(new_tree.contains("a"));
    /// assert!(!tree.contains("a"));
    /// assert_eq!(same_tree, new_tree);
    /// ```
    pub fn insert<S>(&self, value: S) -> Self
    where
        S: Into<String>,
    {
        let value = value.into();

        // Every node we pass on the way down, and which side we went.
        let mut path = Vec::new();
        let mut tree = self;
        while let Self::Node(n) = tree {
            let side = value.as_str().cmp(n.value());
            tree = match side {
                cmp::Ordering::Less => &n.left,
                cmp::Ordering::Equal => return self.clone(),
                cmp::Ordering::Greater => &n.right,
            };
            path.push((n, side));
        }

        path.into_iter()
            .rev()
            .fold(Node::leaf(value), |child, (parent, side)| {
                parent.with_child(side, child)
            })
    }

    /// Iterates over the keys of this tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::functional::Tree;
    ///
    /// let tree: Tree = vec!["pear", "apple", "fig"].into_iter().collect();
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), ["apple", "fig", "pear"]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

/// One step of printing a tree: either a subtree still to expand or text
/// ready to write.
enum Piece<'a> {
    Tree(&'a Tree),
    Text(&'a str),
}

impl fmt::Display for Tree {
    /// Writes the fully parenthesized in-order form: `()` for an empty tree
    /// and `(<left><value><right>)` for a node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Tree(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Tree(Tree::Empty) => f.write_str("()")?,
                Piece::Tree(Tree::Node(n)) => {
                    f.write_str("(")?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Tree(&n.right));
                    pending.push(Piece::Text(n.value()));
                    pending.push(Piece::Tree(&n.left));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tree")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl PartialEq for Tree {
    /// Structural equality: same keys in the same shape.
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Tree::Empty, Tree::Empty) => {}
                (Tree::Node(a), Tree::Node(b)) => {
                    if Arc::ptr_eq(a, b) {
                        continue;
                    }
                    if a.value != b.value {
                        return false;
                    }
                    pending.push((&a.left, &b.left));
                    pending.push((&a.right, &b.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Tree {}

impl Hash for Tree {
    /// Hashes the pre-order walk with a marker per subtree, which pins down
    /// both the keys and the shape.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            match tree {
                Tree::Empty => state.write_u8(0),
                Tree::Node(n) => {
                    state.write_u8(1);
                    n.value.hash(state);
                    pending.push(&n.right);
                    pending.push(&n.left);
                }
            }
        }
    }
}

impl<S> FromIterator<S> for Tree
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, value| tree.insert(value))
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` holds one key of the tree. It always has two children although
/// those children may be [`Empty`][Tree::Empty].
#[derive(Debug)]
pub struct Node {
    value: Arc<str>,
    left: Tree,
    right: Tree,
}

impl Node {
    /// A tree of just `value`.
    fn leaf(value: String) -> Tree {
        Tree::Node(Arc::new(Self {
            value: Arc::from(value),
            left: Tree::Empty,
            right: Tree::Empty,
        }))
    }

    /// The key stored at this node.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The subtree of keys smaller than this node's.
    pub fn left(&self) -> &Tree {
        &self.left
    }

    /// The subtree of keys larger than this node's.
    pub fn right(&self) -> &Tree {
        &self.right
    }

    /// A copy of this node with the child on `side` replaced. The other
    /// child and the key are shared.
    fn with_child(&self, side: cmp::Ordering, child: Tree) -> Tree {
        let (left, right) = match side {
            cmp::Ordering::Less => (child, self.right.clone()),
            _ => (self.left.clone(), child),
        };
        Tree::Node(Arc::new(Self {
            value: Arc::clone(&self.value),
            left,
            right,
        }))
    }
}

impl Drop for Node {
    // Dropping the children the default way recurses once per level, so
    // unlink them here and free every node we hold the last reference to.
    fn drop(&mut self) {
        if self.left.is_empty() && self.right.is_empty() {
            return;
        }

        let mut pending = vec![mem::take(&mut self.left), mem::take(&mut self.right)];
        while let Some(tree) = pending.pop() {
            if let Tree::Node(node) = tree {
                if let Some(mut node) = Arc::into_inner(node) {
                    pending.push(mem::take(&mut node.left));
                    pending.push(mem::take(&mut node.right));
                }
            }
        }
    }
}

/// In-order iterator over the keys of a [`Tree`], created by [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    /// Nodes whose key and right subtree haven't been visited yet. The top
    /// of the stack is the next key to yield.
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(tree: &'a Tree) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = n.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl std::iter::FusedIterator for Iter<'_> {}
