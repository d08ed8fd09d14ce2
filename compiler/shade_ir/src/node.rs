//! IR tree nodes.
//!
//! The tree has two layers:
//!
//! - [`Node`]: statement-level nodes: function prototypes and
//!   definitions, blocks, declarations, and expression statements
//! - [`Expr`]: typed expressions: symbol references, constants, binary and
//!   unary operations, and aggregates (constructors and calls)
//!
//! Every node owns its children. Symbols are referenced through
//! [`VariableId`]/[`FunctionId`] handles into the
//! [`SymbolTable`](crate::SymbolTable).

use crate::{ConstantUnion, FunctionId, Operator, Span, TypeDesc, VariableId};

// ── Expressions ─────────────────────────────────────────────────────

/// Typed expression node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: TypeDesc,
    pub span: Span,
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// Reference to a variable.
    Symbol(VariableId),
    /// Flat constant value; one slot per scalar component of the type.
    Constant(Vec<ConstantUnion>),
    Binary {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Unary operation. `function` is set when the operation came from a
    /// builtin function and keeps the resolved symbol for later passes.
    Unary {
        op: Operator,
        operand: Box<Expr>,
        function: Option<FunctionId>,
    },
    /// Constructor or call. `function` is set for calls.
    Aggregate {
        op: Operator,
        args: Vec<Expr>,
        function: Option<FunctionId>,
    },
}

impl Expr {
    /// Create an expression with a dummy span.
    pub fn new(kind: ExprKind, ty: TypeDesc) -> Self {
        Expr {
            kind,
            ty,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Constant slots, if this is a constant.
    pub fn as_constant(&self) -> Option<&[ConstantUnion]> {
        match &self.kind {
            ExprKind::Constant(values) => Some(values),
            _ => None,
        }
    }

    /// Referenced variable, if this is a symbol reference.
    pub fn as_symbol(&self) -> Option<VariableId> {
        match self.kind {
            ExprKind::Symbol(id) => Some(id),
            _ => None,
        }
    }

    /// Aggregate operator and arguments, if this is an aggregate.
    pub fn as_aggregate(&self) -> Option<(Operator, &[Expr])> {
        match &self.kind {
            ExprKind::Aggregate { op, args, .. } => Some((*op, args)),
            _ => None,
        }
    }
}

// ── Statements ──────────────────────────────────────────────────────

/// A sequence of statements.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Block {
    pub statements: Vec<Node>,
    pub span: Span,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: impl Into<Node>) {
        self.statements.push(statement.into());
    }
}

/// Variable declaration. Each declarator is either a bare symbol reference
/// or an `Initialize` binary whose left side is the symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Declaration {
    pub declarators: Vec<Expr>,
    pub span: Span,
}

impl Declaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, declarator: Expr) {
        self.declarators.push(declarator);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionPrototype {
    pub function: FunctionId,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionDefinition {
    pub prototype: FunctionPrototype,
    pub body: Block,
    pub span: Span,
}

/// Statement-level IR node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    FunctionPrototype(FunctionPrototype),
    FunctionDefinition(FunctionDefinition),
    Block(Block),
    Declaration(Declaration),
    Expr(Expr),
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::FunctionPrototype(p) => p.span,
            Node::FunctionDefinition(d) => d.span,
            Node::Block(b) => b.span,
            Node::Declaration(d) => d.span,
            Node::Expr(e) => e.span,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Node::Block(b) => Some(b),
            _ => None,
        }
    }
}

impl From<Expr> for Node {
    fn from(expr: Expr) -> Self {
        Node::Expr(expr)
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Block(block)
    }
}

impl From<Declaration> for Node {
    fn from(decl: Declaration) -> Self {
        Node::Declaration(decl)
    }
}

impl From<FunctionPrototype> for Node {
    fn from(proto: FunctionPrototype) -> Self {
        Node::FunctionPrototype(proto)
    }
}

impl From<FunctionDefinition> for Node {
    fn from(def: FunctionDefinition) -> Self {
        Node::FunctionDefinition(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BasicType;

    fn int_const(v: i32) -> Expr {
        Expr::new(
            ExprKind::Constant(vec![ConstantUnion::Int(v)]),
            TypeDesc::scalar(BasicType::Int),
        )
    }

    #[test]
    fn test_node_span() {
        let expr = int_const(1).with_span(Span::new(4, 9));
        let node = Node::from(expr);
        assert_eq!(node.span(), Span::new(4, 9));
        assert!(node.as_block().is_none());
    }

    #[test]
    fn test_block_push() {
        let mut block = Block::new();
        block.push(int_const(1));
        block.push(Declaration::new());
        assert_eq!(block.statements.len(), 2);
        assert!(matches!(block.statements[1], Node::Declaration(_)));
    }

    #[test]
    fn test_accessors() {
        let c = int_const(7);
        assert_eq!(c.as_constant(), Some(&[ConstantUnion::Int(7)][..]));
        assert_eq!(c.as_symbol(), None);
        assert!(c.as_aggregate().is_none());

        let sym = Expr::new(ExprKind::Symbol(VariableId::new(3)), c.ty.clone());
        assert_eq!(sym.as_symbol(), Some(VariableId::new(3)));
    }
}
