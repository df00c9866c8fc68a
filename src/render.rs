use crate::ast::{TargetNode, TargetProgram};

/// Render a whole program, one top-level entry per line.
pub fn generate(program: &TargetProgram) -> String {
    let lines: Vec<String> = program.body.iter().map(render_node).collect();
    lines.join("\n")
}

pub fn render_node(node: &TargetNode) -> String {
    match node {
        TargetNode::NumberLiteral { value } => value.clone(),
        TargetNode::Identifier(id) => id.name.clone(),
        TargetNode::ExpressionStatement { expression } => format!("{};", render_node(expression)),
        TargetNode::CallExpression { callee, arguments } => {
            let rendered_args: Vec<String> = arguments.iter().map(render_node).collect();
            format!("{}({})", callee.name, rendered_args.join(", "))
        }
    }
}
