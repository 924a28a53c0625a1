//!
//! A value-keyed adjacency map: every key is associated with an ordered list
//! of neighbour values. There is no separate vertex identity — the value
//! *is* the vertex — and neighbour values are not required to be keys
//! themselves. A value that only ever appears inside a neighbour list is a
//! dead end: it can be visited but has no outgoing arcs of its own.

use std::hash::Hash;

use fxhash::FxHashMap;

use crate::graph::Digraph;

/// A directed graph represented as a map from value to neighbour list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<V> where V: Hash + Eq + Clone {
    adj: FxHashMap<V, Vec<V>>,
    m: usize
}

impl<V> Digraph<V> for AdjacencyGraph<V> where V: Hash + Eq + Clone {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_arcs(&self) -> usize {
        self.m
    }

    fn contains(&self, u:&V) -> bool {
        self.adj.contains_key(u)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&V> + 'a> {
        Box::new(self.adj.keys())
    }

    fn out_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&V> + 'a> {
        match self.adj.get(u) {
            Some(N) => Box::new(N.iter()),
            None => Box::new(std::iter::empty())
        }
    }
}

impl<V> AdjacencyGraph<V> where V: Hash + Eq + Clone {
    pub fn new() -> AdjacencyGraph<V> {
        AdjacencyGraph{adj: FxHashMap::default(), m: 0}
    }

    pub fn with_capacity(n_guess:usize) -> Self {
        AdjacencyGraph {
            adj: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            m: 0
        }
    }

    /// Adds `u` as a key with an empty neighbour list. Returns `false` if
    /// the key was already present.
    pub fn add_vertex(&mut self, u:&V) -> bool {
        if !self.adj.contains_key(u) {
            self.adj.insert(u.clone(), Vec::new());
            true
        } else {
            false
        }
    }

    /// Appends the arc `u -> v`, making `u` a key if necessary. The target
    /// `v` is only recorded inside the neighbour list and does not become
    /// a key.
    pub fn add_arc(&mut self, u:&V, v:&V) {
        self.add_vertex(u);
        self.adj.get_mut(u).unwrap().push(v.clone());
        self.m += 1;
    }
}

impl<V> FromIterator<(V, Vec<V>)> for AdjacencyGraph<V> where V: Hash + Eq + Clone {
    fn from_iter<I: IntoIterator<Item=(V, Vec<V>)>>(iter: I) -> Self {
        let mut res = AdjacencyGraph::new();
        for (u, neighbours) in iter {
            res.add_vertex(&u);
            for v in neighbours {
                res.add_arc(&u, &v);
            }
        }
        res
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn basic_operations() {
        let mut G = AdjacencyGraph::new();
        assert!(G.add_vertex(&"A"));
        assert!(!G.add_vertex(&"A"));

        G.add_arc(&"A", &"B");
        G.add_arc(&"A", &"B");
        assert_eq!(G.num_vertices(), 1);
        assert_eq!(G.num_arcs(), 2);
        assert_eq!(G.out_neighbours(&"A").collect::<Vec<_>>(), vec![&"B", &"B"]);
    }

    #[test]
    fn dangling_neighbours() {
        let mut G = AdjacencyGraph::new();
        G.add_arc(&"A", &"B");

        // "B" never became a key: it has no outgoing arcs of its own
        assert!(G.contains(&"A"));
        assert!(!G.contains(&"B"));
        assert_eq!(G.out_degree(&"B"), 0);
        assert_eq!(G.out_neighbours(&"B").count(), 0);
    }

    #[test]
    fn from_pairs() {
        let G = AdjacencyGraph::from_iter([
            ("A", vec!["B", "C"]),
            ("B", vec![]),
        ]);

        assert_eq!(G.num_vertices(), 2);
        assert_eq!(G.num_arcs(), 2);
        assert_eq!(G.out_neighbours(&"A").collect::<Vec<_>>(), vec![&"B", &"C"]);
        assert!(!G.contains(&"C"));
    }

    #[test]
    fn loops() {
        let G = AdjacencyGraph::from_iter([
            ("A", vec!["A", "B"]),
            ("B", vec![]),
        ]);

        assert!(G.has_loop(&"A"));
        assert!(!G.has_loop(&"B"));
    }
}
