//!
//! Reachability queries over the graph representations of this crate. The
//! structural queries are available on every [Digraph] through the
//! [ReachQueries] extension trait; queries that inspect payload values are
//! implemented on [NodeGraph] directly.
//!
//! All queries traverse depth-first with a per-call seen-set, so they
//! terminate on cyclic inputs and consider every reachable vertex exactly
//! once. Absent roots and dangling references never fail: they degrade to
//! a neutral result (empty collection, empty string or `false`).

use std::hash::Hash;

use fxhash::FxHashSet;

use crate::graph::*;
use crate::iterators::DepthFirst;
use crate::nodegraph::NodeGraph;

/// Depth-first reachability queries, available on every [Digraph].
pub trait ReachQueries<V>: Digraph<V> where V: Hash + Eq + Clone {
    /// Returns an iterator over all vertices discoverable from `root`, the
    /// root itself first, in depth-first first-visit order.
    fn depth_first<'a>(&'a self, root:&V) -> DepthFirst<'a, Self, V> where Self: Sized;

    /// Collects the set of vertices reachable from `root` via zero or more
    /// arcs. The root itself is always a member, whether or not the graph
    /// contains it.
    fn reachable(&self, root:&V) -> FxHashSet<V>;

    /// Whether `destination` can be reached from `start` via zero or more
    /// arcs. A vertex can always reach itself; if either endpoint is not
    /// contained in the graph the answer is `false`. The search stops as
    /// soon as the destination is found.
    fn can_reach(&self, start:&V, destination:&V) -> bool;

    /// Returns all vertices of the graph that are *not* reachable from
    /// `starting`. If `starting` is not contained in the graph nothing is
    /// reachable, so every vertex of the graph is reported.
    fn unreachable(&self, starting:&V) -> FxHashSet<V>;
}

impl<G, V> ReachQueries<V> for G where G: Digraph<V>, V: Hash + Eq + Clone {
    fn depth_first<'a>(&'a self, root:&V) -> DepthFirst<'a, G, V> {
        DepthFirst::new(self, root)
    }

    fn reachable(&self, root:&V) -> FxHashSet<V> {
        self.depth_first(root).collect()
    }

    fn can_reach(&self, start:&V, destination:&V) -> bool {
        if !self.contains(start) || !self.contains(destination) {
            return false
        }

        self.depth_first(start).any(|v| v == *destination)
    }

    fn unreachable(&self, starting:&V) -> FxHashSet<V> {
        let reachable = self.reachable(starting);

        self.vertices()
            .filter(|u| !reachable.contains(*u))
            .cloned()
            .collect()
    }
}

impl<T> NodeGraph<T> {
    /// Collects the payloads of all vertices reachable from `root` that
    /// list themselves among their own out-neighbours, in first-visit
    /// order. A vertex is reported once no matter how many loop arcs it
    /// carries. An absent root yields nothing.
    pub fn self_loopers(&self, root:&Vertex) -> Vec<&T> {
        self.depth_first(root)
            .filter(|v| self.has_loop(v))
            .filter_map(|v| self.value(&v))
            .collect()
    }
}

impl<T> NodeGraph<T> where T: AsRef<str> {
    /// Collects, in first-visit order, every payload reachable from `root`
    /// whose length is strictly less than `k`. An absent root yields
    /// nothing.
    pub fn short_words(&self, root:&Vertex, k:usize) -> Vec<&str> {
        self.depth_first(root)
            .filter_map(|v| self.value(&v))
            .map(|word| word.as_ref())
            .filter(|word| word.len() < k)
            .collect()
    }

    /// Returns the longest payload reachable from `root`, the root's own
    /// payload included. Of several candidates with maximal length the one
    /// visited first wins. An absent root yields the empty string.
    pub fn longest_word(&self, root:&Vertex) -> &str {
        let mut longest = "";
        for v in self.depth_first(root) {
            let word = match self.value(&v) {
                Some(word) => word.as_ref(),
                None => continue
            };
            if word.len() > longest.len() {
                longest = word;
            }
        }

        longest
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
