use std::collections::HashMap;

use crate::ast::{Identifier, NodeKind, SourceNode, SourceProgram, TargetNode, TargetProgram};
use crate::debug::{log_debug, DebugInfo};
use crate::error::CompileError;

/// A visit turns one source node into its target counterpart, given the kind
/// of its parent. Children are not visited here; the traversal pushes their
/// results into the returned node's [`TargetNode::context_mut`].
pub type VisitFn = fn(&SourceNode, NodeKind) -> Result<TargetNode, CompileError>;

/// Dispatch table from source node kind to visit function.
#[derive(Clone, Default)]
pub struct Visitor {
    handlers: HashMap<NodeKind, VisitFn>,
}

impl Visitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table used by [`transform`].
    pub fn standard() -> Self {
        Self::new()
            .on(NodeKind::NumberLiteral, visit_number_literal)
            .on(NodeKind::CallExpression, visit_call_expression)
    }

    /// Register `visit` for `kind`, replacing any earlier handler.
    pub fn on(mut self, kind: NodeKind, visit: VisitFn) -> Self {
        self.handlers.insert(kind, visit);
        self
    }

    fn handler(&self, kind: NodeKind) -> Option<VisitFn> {
        self.handlers.get(&kind).copied()
    }
}

pub fn transform(program: &SourceProgram) -> Result<TargetProgram, CompileError> {
    traverse(program, &Visitor::standard(), None)
}

/// Preorder walk of `program`. The root's context is the output body.
pub fn traverse(
    program: &SourceProgram,
    visitor: &Visitor,
    mut debug: Option<&mut DebugInfo>,
) -> Result<TargetProgram, CompileError> {
    let mut body = Vec::with_capacity(program.body.len());
    for node in &program.body {
        traverse_node(node, NodeKind::Program, visitor, &mut body, debug.as_deref_mut())?;
    }
    Ok(TargetProgram { body })
}

fn traverse_node(
    node: &SourceNode,
    parent: NodeKind,
    visitor: &Visitor,
    context: &mut Vec<TargetNode>,
    mut debug: Option<&mut DebugInfo>,
) -> Result<(), CompileError> {
    let kind = node.kind();
    let visit = visitor
        .handler(kind)
        .ok_or_else(|| CompileError::internal(format!("no visitor registered for {kind}")))?;
    log_debug(debug.as_deref_mut(), || match node {
        SourceNode::CallExpression { name, .. } => format!("visit {kind} `{name}` (parent {parent})"),
        SourceNode::NumberLiteral { value } => format!("visit {kind} {value} (parent {parent})"),
    });

    let mut produced = visit(node, parent)?;
    let children = node.children();
    if !children.is_empty() {
        let own_context = produced.context_mut().ok_or_else(|| {
            CompileError::internal(format!("{kind} visit produced a node with no argument list"))
        })?;
        for child in children {
            traverse_node(child, kind, visitor, own_context, debug.as_deref_mut())?;
        }
    }
    context.push(produced);
    Ok(())
}

fn visit_number_literal(node: &SourceNode, _parent: NodeKind) -> Result<TargetNode, CompileError> {
    match node {
        SourceNode::NumberLiteral { value } => Ok(TargetNode::number(value.clone())),
        other => Err(mismatch(NodeKind::NumberLiteral, other)),
    }
}

/// Top-level calls become statements; calls used as arguments stay bare.
fn visit_call_expression(node: &SourceNode, parent: NodeKind) -> Result<TargetNode, CompileError> {
    let SourceNode::CallExpression { name, .. } = node else {
        return Err(mismatch(NodeKind::CallExpression, node));
    };
    let call = TargetNode::CallExpression {
        callee: Identifier { name: name.clone() },
        arguments: Vec::new(),
    };
    if parent == NodeKind::CallExpression {
        Ok(call)
    } else {
        Ok(TargetNode::statement(call))
    }
}

fn mismatch(expected: NodeKind, found: &SourceNode) -> CompileError {
    CompileError::internal(format!("{expected} visitor called on {}", found.kind()))
}
