//! Text rendering of morphology trees for debugging output.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::MorphologyArena;

pub trait MorphologyTreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl MorphologyTreeConvert for MorphologyArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let Some(root_idx) = self.root() else {
            return Tree::new("Empty tree".to_string());
        };

        fn build_tree(arena: &MorphologyArena, node_idx: Index) -> Tree<String> {
            match arena.get_node(node_idx) {
                Some(node) => {
                    let leaves: Vec<_> = node
                        .children
                        .iter()
                        .map(|&child| build_tree(arena, child))
                        .collect();
                    Tree::new(node.data.to_string()).with_leaves(leaves)
                }
                None => Tree::new(format!("{node_idx:?}")),
            }
        }

        build_tree(self, root_idx)
    }
}
