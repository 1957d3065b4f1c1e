// Pattern 3: Visitor Pattern
// Demonstrates dispatch over a closed set of node kinds, falling back along
// each kind's lineage before the generic handler.

use colored::Colorize;
use pattern_catalog::visitor::{ConcreteVisitor1, ConcreteVisitor2, Node, NodeKind, NodeVisitor};

fn visit_all(visitor: &dyn NodeVisitor) {
    let a = Node::new(NodeKind::A);
    let b = Node::new(NodeKind::B);
    let c = Node::new(NodeKind::C);

    for node in [a, b, c] {
        println!("{}", node.accept(visitor));
    }
}

fn main() {
    println!("Pattern 3: Visitor Pattern");
    println!("==========================\n");

    println!("{}", "=== ConcreteVisitor1 ===".bold());
    visit_all(&ConcreteVisitor1);
    println!();

    println!("{}", "=== ConcreteVisitor2 ===".bold());
    visit_all(&ConcreteVisitor2);
    println!();

    println!("{}", "=== Lineage ===".bold());
    for kind in [NodeKind::A, NodeKind::B, NodeKind::C] {
        let lineage: Vec<String> = kind.lineage().iter().map(ToString::to_string).collect();
        println!("{kind}: {}", lineage.join(" -> "));
    }
}
