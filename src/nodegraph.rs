//!
//! An arena-backed directed graph in which every vertex carries a payload
//! value. Vertices are identified by sequential integer handles, so graphs
//! may freely contain cycles, self-loops and parallel arcs without any
//! ownership entanglement between nodes.
//!
//! ```rust
//! use graphquery::graph::*;
//! use graphquery::nodegraph::NodeGraph;
//!
//! fn main() {
//!     let mut graph = NodeGraph::new();
//!     let fra = graph.add_node("FRA");
//!     let lhr = graph.add_node("LHR");
//!     let jfk = graph.add_node("JFK");
//!     graph.add_arc(&fra, &lhr);
//!     graph.add_arc(&lhr, &jfk);
//!
//!     assert_eq!(graph.num_vertices(), 3);
//!     assert_eq!(graph.num_arcs(), 2);
//!     assert_eq!(graph.value(&fra), Some(&"FRA"));
//! }
//! ```
//!
//! The `chain` and `ring` constructors build a graph directly from a payload
//! sequence, handing out identifiers in input order:
//!
//! ```rust
//! use graphquery::graph::*;
//! use graphquery::nodegraph::NodeGraph;
//!
//! fn main() {
//!     let graph = NodeGraph::chain(vec!["hi", "world", "a"]);
//!     assert_eq!(graph.out_neighbours(&0).collect::<Vec<_>>(), vec![&1]);
//!     assert_eq!(graph.value(&2), Some(&"a"));
//! }
//! ```

use itertools::Itertools;

use crate::graph::*;

/// An arena of payload-carrying nodes with ordered out-neighbour lists.
#[derive(Debug, Clone)]
pub struct NodeGraph<T> {
    values: VertexMap<T>,
    adj: VertexMap<Vec<Vertex>>,
    next_id: Vertex,
    m: usize
}

impl<T: PartialEq> PartialEq for NodeGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() {
            return false
        }
        if self.num_arcs() != other.num_arcs() {
            return false
        }
        if self.values != other.values {
            return false
        }
        self.adj == other.adj
    }
}
impl<T: Eq> Eq for NodeGraph<T> {}

impl<T> Digraph<Vertex> for NodeGraph<T> {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_arcs(&self) -> usize {
        self.m
    }

    fn contains(&self, u:&Vertex) -> bool {
        self.adj.contains_key(u)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&Vertex> + 'a> {
        Box::new(self.adj.keys())
    }

    fn out_neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=&Vertex> + 'a> {
        match self.adj.get(u) {
            Some(N) => Box::new(N.iter()),
            None => Box::new(std::iter::empty())
        }
    }
}

impl<T> NodeGraph<T> {
    pub fn new() -> NodeGraph<T> {
        NodeGraph{values: VertexMap::default(),
              adj: VertexMap::default(),
              next_id: 0,
              m: 0}
    }

    pub fn with_capacity(n_guess:usize) -> Self {
        NodeGraph {
            values: VertexMap::with_capacity_and_hasher(n_guess, Default::default()),
            adj: VertexMap::with_capacity_and_hasher(n_guess, Default::default()),
            next_id: 0,
            m: 0
        }
    }

    /// Adds a node carrying `value` and returns its fresh identifier.
    /// Identifiers are handed out sequentially starting at 0.
    pub fn add_node(&mut self, value:T) -> Vertex {
        let u = self.next_id;
        self.next_id += 1;
        self.values.insert(u, value);
        self.adj.insert(u, Vec::new());
        u
    }

    /// Appends the arc `u -> v` to `u`'s neighbour list. Both endpoints must
    /// already exist; parallel arcs and self-loops accumulate in list order.
    pub fn add_arc(&mut self, u:&Vertex, v:&Vertex) -> bool {
        if !self.contains(u) || !self.contains(v) {
            false
        } else {
            self.adj.get_mut(u).unwrap().push(*v);
            self.m += 1;
            true
        }
    }

    /// Returns the payload of `u`, or `None` if the vertex does not exist.
    pub fn value(&self, u:&Vertex) -> Option<&T> {
        self.values.get(u)
    }

    /// Builds the chain `v0 -> v1 -> ... -> vn` from a payload sequence,
    /// handing out identifiers `0..=n` in input order.
    pub fn chain<I>(values:I) -> NodeGraph<T> where I: IntoIterator<Item=T> {
        let mut res = NodeGraph::new();
        let ids:Vec<Vertex> = values.into_iter().map(|x| res.add_node(x)).collect();
        for (u,v) in ids.iter().tuple_windows() {
            res.add_arc(u, v);
        }

        res
    }

    /// Builds a directed cycle from a payload sequence; like
    /// [`NodeGraph::chain`] with the closing arc `vn -> v0` added.
    /// A single payload yields a self-loop.
    pub fn ring<I>(values:I) -> NodeGraph<T> where I: IntoIterator<Item=T> {
        let mut res = NodeGraph::chain(values);
        let n = res.num_vertices() as Vertex;
        if n > 0 {
            res.add_arc(&(n-1), &0);
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
        let mut G = NodeGraph::new();
        let u = G.add_node("u");
        let v = G.add_node("v");
        let w = G.add_node("w");
        assert_eq!((u,v,w), (0,1,2));
        assert_eq!(G.num_vertices(), 3);
        assert_eq!(G.num_arcs(), 0);

        assert!(G.add_arc(&u, &v));
        assert!(G.add_arc(&u, &w));
        assert_eq!(G.num_arcs(), 2);
        assert_eq!(G.out_degree(&u), 2);
        assert_eq!(G.out_degree(&v), 0);
        assert_eq!(G.out_neighbours(&u).collect::<Vec<_>>(), vec![&v, &w]);

        // Arcs to or from vertices that do not exist are rejected
        assert!(!G.add_arc(&u, &99));
        assert!(!G.add_arc(&99, &u));
        assert_eq!(G.num_arcs(), 2);
    }

    #[test]
    fn parallel_arcs_and_loops() {
        let mut G = NodeGraph::new();
        let u = G.add_node(0);
        let v = G.add_node(1);

        assert!(G.add_arc(&u, &v));
        assert!(G.add_arc(&u, &v));
        assert!(G.add_arc(&u, &u));
        assert_eq!(G.num_arcs(), 3);
        assert_eq!(G.out_degree(&u), 3);
        assert_eq!(G.out_neighbours(&u).collect::<Vec<_>>(), vec![&v, &v, &u]);

        assert!(G.has_loop(&u));
        assert!(!G.has_loop(&v));
        assert!(!G.has_loop(&42));
    }

    #[test]
    fn values() {
        let mut G = NodeGraph::new();
        let u = G.add_node("hello");
        assert_eq!(G.value(&u), Some(&"hello"));
        assert_eq!(G.value(&1), None);
    }

    #[test]
    fn chain() {
        let G = NodeGraph::chain(vec!["a", "b", "c"]);
        assert_eq!(G.num_vertices(), 3);
        assert_eq!(G.num_arcs(), 2);
        assert_eq!(G.out_neighbours(&0).collect::<Vec<_>>(), vec![&1]);
        assert_eq!(G.out_neighbours(&1).collect::<Vec<_>>(), vec![&2]);
        assert_eq!(G.out_degree(&2), 0);

        let G:NodeGraph<&str> = NodeGraph::chain(vec![]);
        assert_eq!(G.num_vertices(), 0);
    }

    #[test]
    fn ring() {
        let G = NodeGraph::ring(vec!["a", "b", "c"]);
        assert_eq!(G.num_arcs(), 3);
        assert_eq!(G.out_neighbours(&2).collect::<Vec<_>>(), vec![&0]);

        // A one-element ring is a self-loop
        let G = NodeGraph::ring(vec!["a"]);
        assert!(G.has_loop(&0));
    }

    #[test]
    fn equality() {
        let G = NodeGraph::chain(vec!["a", "b"]);
        let mut H = NodeGraph::new();
        H.add_node("a");
        H.add_node("b");
        assert_ne!(G, H);
        H.add_arc(&0, &1);
        assert_eq!(G, H);
    }
}
