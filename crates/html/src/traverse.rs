use crate::{Id, Node};

pub fn assign_node_ids(root: &mut Node) {
    fn max_id(node: &Node) -> u32 {
        node.children()
            .iter()
            .map(max_id)
            .fold(node.id().0, u32::max)
    }

    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        if node.id() == Id(0) {
            let id = Id(*next);
            *next = next.wrapping_add(1);
            node.set_id(id);
        }

        for c in node.children_mut() {
            walk(c, next);
        }
    }

    // Documents keep id 0 so fresh ids never collide with preassigned ones.
    let mut next = max_id(root).wrapping_add(1).max(1);
    if let Node::Document { children, .. } = root {
        for c in children {
            walk(c, &mut next);
        }
    } else {
        walk(root, &mut next);
    }
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children_mut()
        .iter_mut()
        .find_map(|c| find_node_by_id_mut(c, id))
}
