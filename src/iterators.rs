use std::hash::Hash;

use fxhash::FxHashSet;

use crate::graph::Digraph;

/*
    Depth-first vertex iterator. Yields every vertex discoverable from the
    root exactly once, in the order a recursive traversal would first visit
    them. Vertices the graph does not contain are yielded but not expanded,
    so dangling references terminate their branch.
*/
pub struct DepthFirst<'a, G, V> where G: Digraph<V>, V: Hash + Eq + Clone {
    graph: &'a G,
    stack: Vec<V>,
    seen: FxHashSet<V>,
}

impl<'a, G, V> DepthFirst<'a, G, V> where G: Digraph<V>, V: Hash + Eq + Clone {
    pub fn new(graph: &'a G, root: &V) -> DepthFirst<'a, G, V> {
        DepthFirst {
            graph,
            stack: vec![root.clone()],
            seen: FxHashSet::default(),
        }
    }
}

impl<'a, G, V> Iterator for DepthFirst<'a, G, V> where G: Digraph<V>, V: Hash + Eq + Clone {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(v) = self.stack.pop() {
            if !self.seen.insert(v.clone()) {
                continue;
            }

            // Neighbours go onto the stack in reverse list order so that
            // the pop order matches the recursive first-visit order.
            let mut frame:Vec<V> = self.graph.out_neighbours(&v)
                        .filter(|u| !self.seen.contains(*u))
                        .cloned().collect();
            frame.reverse();
            self.stack.extend(frame);

            return Some(v);
        }

        None
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
