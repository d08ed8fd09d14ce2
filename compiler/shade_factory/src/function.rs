//! Function prototype and definition nodes for internal helper functions.

use shade_ir::{Block, Function, FunctionDefinition, FunctionPrototype, Span};

pub fn function_prototype_node(function: &Function) -> FunctionPrototype {
    FunctionPrototype {
        function: function.id,
        span: Span::DUMMY,
    }
}

/// Definition of `function` with `body`. The definition owns a fresh
/// prototype.
pub fn function_definition_node(function: &Function, body: Block) -> FunctionDefinition {
    FunctionDefinition {
        prototype: function_prototype_node(function),
        body,
        span: Span::DUMMY,
    }
}
