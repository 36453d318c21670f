//! Document assembly: function records into the `api` markup tree.

use crate::markup::Node;
use crate::model::{Field, FunctionRecord};

/// Render records as the final document text.
pub fn render(records: &[FunctionRecord]) -> String {
    format!("{}\n", assemble(records))
}

/// Build the `api` tree. Functions without a module go directly under the
/// root in record order; the rest are grouped under `module` nodes, created
/// on first use and appended after all plain functions, in first-use order.
pub fn assemble(records: &[FunctionRecord]) -> Node {
    let mut api = Node::new("api");
    let mut modules: Vec<(String, Node)> = Vec::new();

    for record in records {
        if record.name.is_empty() {
            continue;
        }

        let mut function = Node::new("function");
        function.set("name", &record.name);
        if let Some(ref desc) = record.description {
            function.set("desc", desc);
        }

        for param in &record.params {
            if param.name.is_empty() {
                continue;
            }
            let mut input = field_node("input", param);
            if param.optional {
                input.set("optional", "true");
            }
            function.append(input);
        }

        for ret in &record.returns {
            if ret.name.is_empty() {
                continue;
            }
            function.append(field_node("output", ret));
        }

        if record.module.is_empty() {
            api.append(function);
        } else {
            let index = match modules.iter().position(|(name, _)| *name == record.module) {
                Some(index) => index,
                None => {
                    let mut node = Node::new("module");
                    node.set("name", &record.module);
                    modules.push((record.module.clone(), node));
                    modules.len() - 1
                }
            };
            modules[index].1.append(function);
        }
    }

    for (_, node) in modules {
        api.append(node);
    }

    api
}

fn field_node(name: &str, field: &Field) -> Node {
    let mut node = Node::new(name);
    node.set("name", &field.name);
    node.set("type", &field.type_name);
    if let Some(ref desc) = field.description {
        node.set("desc", desc);
    }
    node
}
