// Visitor over a small closed node hierarchy. Each node kind knows its
// lineage (C derives from A, then B), and a visitor answers for the kinds it
// cares about; anything it skips falls through to `generic_visit`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    A,
    B,
    C,
}

impl NodeKind {
    /// The kind itself followed by its ancestors, most specific first.
    pub fn lineage(self) -> &'static [NodeKind] {
        match self {
            NodeKind::A => &[NodeKind::A],
            NodeKind::B => &[NodeKind::B],
            NodeKind::C => &[NodeKind::C, NodeKind::A, NodeKind::B],
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::A => "A",
            NodeKind::B => "B",
            NodeKind::C => "C",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn accept(&self, visitor: &dyn NodeVisitor) -> String {
        visitor.visit(self)
    }
}

pub trait NodeVisitor {
    fn visit_a(&self, _node: &Node) -> Option<String> {
        None
    }

    fn visit_b(&self, _node: &Node) -> Option<String> {
        None
    }

    fn visit_c(&self, _node: &Node) -> Option<String> {
        None
    }

    fn generic_visit(&self, node: &Node) -> String {
        format!("generic_visit {}", node.kind())
    }

    fn visit(&self, node: &Node) -> String {
        node.kind()
            .lineage()
            .iter()
            .find_map(|kind| match kind {
                NodeKind::A => self.visit_a(node),
                NodeKind::B => self.visit_b(node),
                NodeKind::C => self.visit_c(node),
            })
            .unwrap_or_else(|| self.generic_visit(node))
    }
}

pub struct ConcreteVisitor1;

impl NodeVisitor for ConcreteVisitor1 {
    fn visit_b(&self, node: &Node) -> Option<String> {
        Some(format!("ConcreteVisitor1 visit_B {}", node.kind()))
    }

    fn visit_c(&self, node: &Node) -> Option<String> {
        Some(format!("ConcreteVisitor1 visit_C {}", node.kind()))
    }
}

pub struct ConcreteVisitor2;

impl NodeVisitor for ConcreteVisitor2 {
    fn visit_a(&self, node: &Node) -> Option<String> {
        Some(format!("ConcreteVisitor2 visit_A {}", node.kind()))
    }

    fn visit_c(&self, node: &Node) -> Option<String> {
        Some(format!("ConcreteVisitor2 visit_C {}", node.kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyA;

    impl NodeVisitor for OnlyA {
        fn visit_a(&self, node: &Node) -> Option<String> {
            Some(format!("OnlyA visit_A {}", node.kind()))
        }
    }

    struct OnlyB;

    impl NodeVisitor for OnlyB {
        fn visit_b(&self, node: &Node) -> Option<String> {
            Some(format!("OnlyB visit_B {}", node.kind()))
        }
    }

    fn nodes() -> [Node; 3] {
        [
            Node::new(NodeKind::A),
            Node::new(NodeKind::B),
            Node::new(NodeKind::C),
        ]
    }

    #[test]
    fn test_concrete_visitors() {
        let mut lines = Vec::new();
        for visitor in [&ConcreteVisitor1 as &dyn NodeVisitor, &ConcreteVisitor2] {
            for node in nodes() {
                lines.push(node.accept(visitor));
            }
        }

        assert_eq!(
            lines,
            vec![
                "generic_visit A",
                "ConcreteVisitor1 visit_B B",
                "ConcreteVisitor1 visit_C C",
                "ConcreteVisitor2 visit_A A",
                "generic_visit B",
                "ConcreteVisitor2 visit_C C",
            ]
        );
    }

    #[test]
    fn test_c_falls_back_along_lineage() {
        let c = Node::new(NodeKind::C);
        assert_eq!(c.accept(&OnlyA), "OnlyA visit_A C");
        assert_eq!(c.accept(&OnlyB), "OnlyB visit_B C");
    }

    #[test]
    fn test_lineage() {
        assert_eq!(NodeKind::A.lineage(), &[NodeKind::A]);
        assert_eq!(
            NodeKind::C.lineage(),
            &[NodeKind::C, NodeKind::A, NodeKind::B]
        );
    }
}
