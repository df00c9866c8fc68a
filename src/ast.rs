use std::fmt;

/// Kinds of source nodes. Used as dispatch-table keys and as the parent kind
/// handed to each visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    CallExpression,
    NumberLiteral,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Program => "Program",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::NumberLiteral => "NumberLiteral",
        };
        f.write_str(name)
    }
}

// ---- source tree (parser output) ----

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceProgram {
    pub body: Vec<SourceNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNode {
    NumberLiteral { value: String },
    CallExpression { name: String, params: Vec<SourceNode> },
}

impl SourceNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            SourceNode::NumberLiteral { .. } => NodeKind::NumberLiteral,
            SourceNode::CallExpression { .. } => NodeKind::CallExpression,
        }
    }

    /// Children the traversal descends into, in source order.
    pub fn children(&self) -> &[SourceNode] {
        match self {
            SourceNode::NumberLiteral { .. } => &[],
            SourceNode::CallExpression { params, .. } => params,
        }
    }
}

// ---- target tree (transformer output) ----

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetProgram {
    pub body: Vec<TargetNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetNode {
    NumberLiteral { value: String },
    Identifier(Identifier),
    CallExpression {
        callee: Identifier,
        arguments: Vec<TargetNode>,
    },
    ExpressionStatement { expression: Box<TargetNode> },
}

impl TargetNode {
    pub fn call(name: impl Into<String>, arguments: Vec<TargetNode>) -> Self {
        TargetNode::CallExpression {
            callee: Identifier { name: name.into() },
            arguments,
        }
    }

    pub fn number(value: impl Into<String>) -> Self {
        TargetNode::NumberLiteral { value: value.into() }
    }

    pub fn statement(expression: TargetNode) -> Self {
        TargetNode::ExpressionStatement {
            expression: Box::new(expression),
        }
    }

    /// The collection this node's transformed children are pushed into: a
    /// call's argument list, looking through a statement wrapper.
    pub fn context_mut(&mut self) -> Option<&mut Vec<TargetNode>> {
        match self {
            TargetNode::CallExpression { arguments, .. } => Some(arguments),
            TargetNode::ExpressionStatement { expression } => expression.context_mut(),
            TargetNode::NumberLiteral { .. } | TargetNode::Identifier(_) => None,
        }
    }
}
