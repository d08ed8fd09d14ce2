//! Block wrapping.

use shade_ir::{Block, Node};

/// Make sure a statement position holds a block.
///
/// `None` stays `None`, a block is returned as-is, and any other node is
/// wrapped in a single-statement block that takes over its span.
pub fn ensure_block(node: Option<Node>) -> Option<Block> {
    match node? {
        Node::Block(block) => Some(block),
        other => Some(Block {
            span: other.span(),
            statements: vec![other],
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use shade_ir::{Declaration, Span};

    use super::*;
    use crate::bool_node;

    #[test]
    fn none_stays_none() {
        assert_eq!(ensure_block(None), None);
    }

    #[test]
    fn wraps_statement_and_copies_span() {
        let stmt = Node::from(bool_node(true).with_span(Span::new(12, 16)));
        let block = ensure_block(Some(stmt.clone()));
        assert_eq!(
            block,
            Some(Block {
                statements: vec![stmt],
                span: Span::new(12, 16),
            })
        );
    }

    #[test]
    fn block_is_returned_unchanged() {
        let mut inner = Block::new();
        inner.push(Declaration::new());
        inner.span = Span::new(1, 2);
        assert_eq!(ensure_block(Some(Node::from(inner.clone()))), Some(inner));
    }

    #[test]
    fn idempotent() {
        let once = ensure_block(Some(Node::from(bool_node(false))));
        let twice = ensure_block(once.clone().map(Node::from));
        assert_eq!(once, twice);
    }
}
