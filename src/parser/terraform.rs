//! Terraform (*.tf) parser

use tracing::{debug, warn};

use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::RequiredVersion;

/// Parser for Terraform configuration files
///
/// Extracts `required_version` from top-level `terraform { ... }` blocks.
pub struct TerraformParser;

impl TerraformParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerraformParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for TerraformParser {
    fn can_parse(&self, path: &str) -> bool {
        path.ends_with(".tf")
    }

    fn parse(&self, content: &str) -> Result<Option<RequiredVersion>, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_hcl::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set HCL language for tree-sitter: {}", e);
            ParseError::TreeSitter(e.to_string())
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            warn!("Failed to parse HCL content");
            ParseError::ParseFailed("Failed to parse HCL".to_string())
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let position = first_error_position(root);
            return Err(ParseError::InvalidSyntax(format!(
                "HCL syntax error at line {}, column {}",
                position.row + 1,
                position.column + 1
            )));
        }

        let mut cursor = root.walk();
        for body in root.named_children(&mut cursor) {
            if body.kind() != "body" {
                continue;
            }
            let mut body_cursor = body.walk();
            for block in body.named_children(&mut body_cursor) {
                if !self.is_terraform_block(block, content) {
                    continue;
                }
                if let Some(required) = self.extract_required_version(block, content) {
                    return Ok(Some(required));
                }
            }
        }

        Ok(None)
    }
}

impl TerraformParser {
    const ATTRIBUTE: &'static str = "required_version";

    /// Whether a node is an unlabeled `terraform` block
    fn is_terraform_block(&self, node: tree_sitter::Node, content: &str) -> bool {
        if node.kind() != "block" {
            return false;
        }

        let mut cursor = node.walk();
        let mut children = node.named_children(&mut cursor);

        let Some(name) = children.next() else {
            return false;
        };
        if name.kind() != "identifier" || &content[name.byte_range()] != "terraform" {
            return false;
        }

        // The block name is followed directly by `{`; any label in between disqualifies it
        children
            .next()
            .is_some_and(|next| next.kind() == "block_start")
    }

    /// Find `required_version = "..."` in the body of a terraform block
    fn extract_required_version(
        &self,
        block: tree_sitter::Node,
        content: &str,
    ) -> Option<RequiredVersion> {
        let mut cursor = block.walk();
        let body = block
            .named_children(&mut cursor)
            .find(|child| child.kind() == "body")?;

        let mut cursor = body.walk();
        for attribute in body.named_children(&mut cursor) {
            if attribute.kind() != "attribute" {
                continue;
            }

            let mut attr_cursor = attribute.walk();
            let mut key = None;
            let mut expression = None;
            for child in attribute.named_children(&mut attr_cursor) {
                match child.kind() {
                    "identifier" if key.is_none() => key = Some(&content[child.byte_range()]),
                    "expression" => expression = Some(child),
                    _ => {}
                }
            }

            if key != Some(Self::ATTRIBUTE) {
                continue;
            }
            let Some(expression) = expression else {
                continue;
            };

            match self.string_literal(expression, content) {
                Some(required) if !required.constraint.trim().is_empty() => {
                    return Some(required);
                }
                Some(_) => debug!("Skipping empty required_version"),
                None => debug!(
                    "Skipping non-literal required_version: {}",
                    &content[expression.byte_range()]
                ),
            }
        }

        None
    }

    /// Unwrap an expression down to a plain string literal (no interpolation)
    fn string_literal(
        &self,
        expression: tree_sitter::Node,
        content: &str,
    ) -> Option<RequiredVersion> {
        let mut node = expression;
        while node.kind() != "string_lit" {
            if node.named_child_count() != 1 {
                return None;
            }
            node = node.named_child(0)?;
        }

        let mut cursor = node.walk();
        let mut open = None;
        let mut close = None;
        for child in node.children(&mut cursor) {
            match child.kind() {
                "quoted_template_start" => open = Some(child),
                "quoted_template_end" => close = Some(child),
                _ => {}
            }
        }
        let (open, close) = (open?, close?);

        let start_offset = open.end_byte();
        let end_offset = close.start_byte();
        let position = open.end_position();

        Some(RequiredVersion {
            constraint: content[start_offset..end_offset].to_string(),
            path: Default::default(),
            start_offset,
            end_offset,
            line: position.row,
            column: position.column,
        })
    }
}

fn first_error_position(node: tree_sitter::Node) -> tree_sitter::Point {
    if node.is_error() || node.is_missing() {
        return node.start_position();
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            return first_error_position(child);
        }
    }
    node.start_position()
}
