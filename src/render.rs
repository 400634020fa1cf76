//! Textual dumps of a tree's shape, meant for debugging. The format is not stable.

use crate::{Point, Quadtree};
use std::fmt::Write;

/// One line per node describing its boundary, followed by the points it holds directly.
pub fn render_tree(tree: &Quadtree) -> String {
    let mut out = String::new();
    render_node(tree, 0, &mut out);
    out
}

/// One line per node, listing only the points it holds directly.
pub fn render_tree_short(tree: &Quadtree) -> String {
    let mut out = String::new();
    render_node_short(tree, 0, &mut out);
    out
}

fn render_node(tree: &Quadtree, depth: usize, out: &mut String) {
    indent(depth, out);
    // writing into a String can not fail
    let _ = write!(
        out,
        "Tree(x: {}, y: {}; w: {}, h: {}, points: {}, has subsections: {})",
        tree.x(),
        tree.y(),
        tree.w(),
        tree.h(),
        tree.points().len(),
        if tree.has_children() { "yes" } else { "no" },
    );

    match tree.children() {
        None => {
            out.push_str("  ");
            write_points(tree.points(), out);
            out.push('\n');
        }
        Some(children) => {
            out.push('\n');
            indent(depth + 1, out);
            out.push_str("Points: ");
            write_points(tree.points(), out);
            out.push('\n');
            for child in children.iter() {
                render_node(child, depth + 1, out);
            }
        }
    }
}

fn render_node_short(tree: &Quadtree, depth: usize, out: &mut String) {
    indent(depth, out);
    out.push('|');
    write_points(tree.points(), out);
    out.push('\n');
    if let Some(children) = tree.children() {
        for child in children.iter() {
            render_node_short(child, depth + 1, out);
        }
    }
}

fn write_points(points: &[Point], out: &mut String) {
    out.push('[');
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", p);
    }
    out.push(']');
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> Quadtree {
        let mut tree = Quadtree::from_xywh(0.0, 0.0, 10.0, 10.0, 1).unwrap();
        tree.extend(vec![Point::new(1.0, 1.0), Point::new(-5.0, -5.0)])
            .unwrap();
        tree
    }

    #[test]
    fn short_rendering() {
        let out = render_tree_short(&small_tree());

        assert_eq!(out, "|[(1, 1)]\n  |[(-5, -5)]\n  |[]\n  |[]\n  |[]\n");
    }

    #[test]
    fn full_rendering() {
        let out = render_tree(&small_tree());
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "Tree(x: 0, y: 0; w: 10, h: 10, points: 1, has subsections: yes)"
        );
        assert_eq!(lines[1], "  Points: [(1, 1)]");
        assert_eq!(
            lines[2],
            "  Tree(x: -5, y: -5; w: 5, h: 5, points: 1, has subsections: no)  [(-5, -5)]"
        );
    }

    #[test]
    fn empty_tree() {
        let tree = Quadtree::from_xywh(0.0, 0.0, 1.0, 1.0, 4).unwrap();

        assert_eq!(render_tree_short(&tree), "|[]\n");
        assert_eq!(
            render_tree(&tree),
            "Tree(x: 0, y: 0; w: 1, h: 1, points: 0, has subsections: no)  []\n"
        );
    }
}
