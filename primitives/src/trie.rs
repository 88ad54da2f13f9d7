//! In-memory Merkle-Patricia trie.
//!
//! A radix-16 trie over nibble keys. The node structure is canonical for
//! a given key-value set — branches exist only where paths diverge and
//! collapse again on removal — so the root hash is a deterministic
//! commitment to the entries regardless of the order they were inserted
//! or deleted in.
//!
//! Node hashes are blake2b-256 over a tagged encoding with SCALE compact
//! length prefixes. The empty trie hashes to [`ZERO_HASH`].

use codec::{Compact, Encode};

use crate::hashing::blake2_256;
use crate::types::{Hash, ZERO_HASH};

/// Encoding tag for leaf nodes.
const LEAF_TAG: u8 = 0x01;
/// Encoding tag for branch nodes.
const BRANCH_TAG: u8 = 0x02;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Leaf {
        partial: Vec<u8>,
        value: Vec<u8>,
    },
    Branch {
        partial: Vec<u8>,
        children: Box<[Option<Node>; 16]>,
        value: Option<Vec<u8>>,
    },
}

/// A Merkle-Patricia key-value trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: Option<Node>,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value under `key`.
    pub fn insert(&mut self, key: &[u8], value: &[u8]) {
        let nibbles = key_to_nibbles(key);
        let root = self.root.take();
        self.root = Some(insert_at(root, &nibbles, value.to_vec()));
    }

    /// Look up the value under `key`.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        let nibbles = key_to_nibbles(key);
        let mut node = self.root.as_ref()?;
        let mut offset = 0;
        loop {
            match node {
                Node::Leaf { partial, value } => {
                    return (nibbles[offset..] == partial[..]).then_some(value.as_slice());
                }
                Node::Branch {
                    partial,
                    children,
                    value,
                } => {
                    if !nibbles[offset..].starts_with(partial) {
                        return None;
                    }
                    offset += partial.len();
                    if offset == nibbles.len() {
                        return value.as_deref();
                    }
                    node = children[nibbles[offset] as usize].as_ref()?;
                    offset += 1;
                }
            }
        }
    }

    /// Remove the entry under `key`. Returns whether an entry was removed.
    pub fn remove(&mut self, key: &[u8]) -> bool {
        let nibbles = key_to_nibbles(key);
        let Some(root) = self.root.take() else {
            return false;
        };
        let (root, removed) = remove_at(root, &nibbles);
        self.root = root;
        removed
    }

    /// Remove every entry whose key starts with `prefix`.
    pub fn clear_prefix(&mut self, prefix: &[u8]) {
        let doomed: Vec<Vec<u8>> = self
            .entries()
            .into_iter()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with(prefix))
            .collect();
        for key in doomed {
            self.remove(&key);
        }
    }

    /// All `(key, value)` pairs in lexicographic key order.
    pub fn entries(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            collect_entries(root, Vec::new(), &mut out);
        }
        out
    }

    /// Whether the trie holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The Merkle root of the current key-value set.
    pub fn root(&self) -> Hash {
        match &self.root {
            None => ZERO_HASH,
            Some(node) => node_hash(node),
        }
    }
}

/// Root of the trie mapping each value's SCALE compact-encoded index to
/// the value itself. Used for the enumerated trie root host call.
pub fn enumerated_trie_root(values: &[&[u8]]) -> Hash {
    let mut trie = Trie::new();
    for (index, value) in values.iter().enumerate() {
        trie.insert(&Compact(index as u32).encode(), value);
    }
    trie.root()
}

fn key_to_nibbles(key: &[u8]) -> Vec<u8> {
    key.iter().flat_map(|b| [b >> 4, b & 0x0f]).collect()
}

fn nibbles_to_key(nibbles: &[u8]) -> Vec<u8> {
    nibbles
        .chunks(2)
        .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(0))
        .collect()
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn empty_children() -> Box<[Option<Node>; 16]> {
    Box::default()
}

fn insert_at(node: Option<Node>, key: &[u8], value: Vec<u8>) -> Node {
    match node {
        None => Node::Leaf {
            partial: key.to_vec(),
            value,
        },
        Some(Node::Leaf {
            partial,
            value: existing,
        }) => {
            let common = common_prefix_len(&partial, key);
            if common == partial.len() && common == key.len() {
                return Node::Leaf { partial, value };
            }
            // Diverging paths: split into a branch at the shared prefix.
            let mut children = empty_children();
            let mut branch_value = None;
            if common == partial.len() {
                branch_value = Some(existing);
            } else {
                children[partial[common] as usize] = Some(Node::Leaf {
                    partial: partial[common + 1..].to_vec(),
                    value: existing,
                });
            }
            let branch = Node::Branch {
                partial: partial[..common].to_vec(),
                children,
                value: branch_value,
            };
            insert_at(Some(branch), key, value)
        }
        Some(Node::Branch {
            partial,
            mut children,
            value: branch_value,
        }) => {
            let common = common_prefix_len(&partial, key);
            if common == partial.len() {
                if key.len() == common {
                    return Node::Branch {
                        partial,
                        children,
                        value: Some(value),
                    };
                }
                let index = key[common] as usize;
                let child = children[index].take();
                children[index] = Some(insert_at(child, &key[common + 1..], value));
                return Node::Branch {
                    partial,
                    children,
                    value: branch_value,
                };
            }
            // The branch's own partial diverges from the key: split it.
            let mut outer_children = empty_children();
            outer_children[partial[common] as usize] = Some(Node::Branch {
                partial: partial[common + 1..].to_vec(),
                children,
                value: branch_value,
            });
            let outer = Node::Branch {
                partial: partial[..common].to_vec(),
                children: outer_children,
                value: None,
            };
            insert_at(Some(outer), key, value)
        }
    }
}

fn remove_at(node: Node, key: &[u8]) -> (Option<Node>, bool) {
    match node {
        Node::Leaf { partial, value } => {
            if partial == key {
                (None, true)
            } else {
                (Some(Node::Leaf { partial, value }), false)
            }
        }
        Node::Branch {
            partial,
            mut children,
            value,
        } => {
            if !key.starts_with(&partial) {
                return (
                    Some(Node::Branch {
                        partial,
                        children,
                        value,
                    }),
                    false,
                );
            }
            let rest = &key[partial.len()..];
            if rest.is_empty() {
                if value.is_none() {
                    return (
                        Some(Node::Branch {
                            partial,
                            children,
                            value,
                        }),
                        false,
                    );
                }
                return (collapse_branch(partial, children, None), true);
            }
            let index = rest[0] as usize;
            let Some(child) = children[index].take() else {
                return (
                    Some(Node::Branch {
                        partial,
                        children,
                        value,
                    }),
                    false,
                );
            };
            let (new_child, removed) = remove_at(child, &rest[1..]);
            children[index] = new_child;
            if removed {
                (collapse_branch(partial, children, value), true)
            } else {
                (
                    Some(Node::Branch {
                        partial,
                        children,
                        value,
                    }),
                    false,
                )
            }
        }
    }
}

/// Restore the canonical shape of a branch after a removal below it.
///
/// A branch with no children carrying only a value becomes a leaf; a
/// valueless branch with a single child merges into that child. Both
/// rules keep the structure — and therefore the root — a function of the
/// key set alone.
fn collapse_branch(
    partial: Vec<u8>,
    mut children: Box<[Option<Node>; 16]>,
    value: Option<Vec<u8>>,
) -> Option<Node> {
    let child_count = children.iter().filter(|c| c.is_some()).count();
    if child_count == 0 {
        return value.map(|value| Node::Leaf { partial, value });
    }
    if child_count == 1 && value.is_none() {
        for (index, slot) in children.iter_mut().enumerate() {
            if let Some(child) = slot.take() {
                let mut joined = partial;
                joined.push(index as u8);
                return Some(match child {
                    Node::Leaf {
                        partial: rest,
                        value,
                    } => {
                        joined.extend_from_slice(&rest);
                        Node::Leaf {
                            partial: joined,
                            value,
                        }
                    }
                    Node::Branch {
                        partial: rest,
                        children,
                        value,
                    } => {
                        joined.extend_from_slice(&rest);
                        Node::Branch {
                            partial: joined,
                            children,
                            value,
                        }
                    }
                });
            }
        }
    }
    Some(Node::Branch {
        partial,
        children,
        value,
    })
}

fn collect_entries(node: &Node, mut prefix: Vec<u8>, out: &mut Vec<(Vec<u8>, Vec<u8>)>) {
    match node {
        Node::Leaf { partial, value } => {
            prefix.extend_from_slice(partial);
            out.push((nibbles_to_key(&prefix), value.clone()));
        }
        Node::Branch {
            partial,
            children,
            value,
        } => {
            prefix.extend_from_slice(partial);
            if let Some(value) = value {
                out.push((nibbles_to_key(&prefix), value.clone()));
            }
            for (index, child) in children.iter().enumerate() {
                if let Some(child) = child {
                    let mut child_prefix = prefix.clone();
                    child_prefix.push(index as u8);
                    collect_entries(child, child_prefix, out);
                }
            }
        }
    }
}

fn node_hash(node: &Node) -> Hash {
    blake2_256(&encode_node(node))
}

fn encode_node(node: &Node) -> Vec<u8> {
    let mut enc = Vec::new();
    match node {
        Node::Leaf { partial, value } => {
            enc.push(LEAF_TAG);
            encode_nibbles(partial, &mut enc);
            Compact(value.len() as u32).encode_to(&mut enc);
            enc.extend_from_slice(value);
        }
        Node::Branch {
            partial,
            children,
            value,
        } => {
            enc.push(BRANCH_TAG);
            encode_nibbles(partial, &mut enc);
            let bitmap = children
                .iter()
                .enumerate()
                .fold(0u16, |map, (i, c)| {
                    if c.is_some() {
                        map | (1 << i)
                    } else {
                        map
                    }
                });
            enc.extend_from_slice(&bitmap.to_le_bytes());
            match value {
                Some(value) => {
                    enc.push(0x01);
                    Compact(value.len() as u32).encode_to(&mut enc);
                    enc.extend_from_slice(value);
                }
                None => enc.push(0x00),
            }
            for child in children.iter().flatten() {
                enc.extend_from_slice(&node_hash(child));
            }
        }
    }
    enc
}

/// Nibble count followed by the nibbles packed two per byte, high first.
/// The count disambiguates a trailing odd nibble.
fn encode_nibbles(nibbles: &[u8], enc: &mut Vec<u8>) {
    Compact(nibbles.len() as u32).encode_to(enc);
    enc.extend(nibbles.chunks(2).map(|pair| {
        (pair[0] << 4) | pair.get(1).copied().unwrap_or(0)
    }));
}
