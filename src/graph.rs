use fxhash::{FxHashMap, FxHashSet};

use std::hash::Hash;

pub type Vertex = u32;
pub type VertexSet = FxHashSet<Vertex>;
pub type VertexMap<T> = FxHashMap<Vertex, T>;

/// A directed graph over vertices of type `V`.
///
/// Out-neighbour lists are ordered and may contain duplicates, self-loops
/// and references to vertices the graph does not contain. Dangling
/// references act as dead ends during traversal.
pub trait Digraph<V> where V: Hash + Eq + Clone {
    fn num_vertices(&self) -> usize;
    fn num_arcs(&self) -> usize;

    fn contains(&self, u:&V) -> bool;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&V> + 'a>;

    /// Returns the out-neighbours of `u` in list order. For a vertex not
    /// contained in the graph this is an empty iterator.
    fn out_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&V> + 'a>;

    fn out_degree(&self, u:&V) -> usize {
        self.out_neighbours(u).count()
    }

    /// Whether `u` lists itself among its own out-neighbours.
    fn has_loop(&self, u:&V) -> bool {
        self.out_neighbours(u).any(|v| v == u)
    }
}
