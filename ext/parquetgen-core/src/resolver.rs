//! Rebuilds leaf column paths from a flattened, pre-order schema array.

use crate::field::{Level, Resolution};
use crate::schema::{identifier_case, PrimitiveType, Repetition, SchemaNode};
use crate::walk::{walk, WalkEvent};
use crate::{Result, SchemaError};

/// Decodes the footer representation of a schema into Fields.
#[derive(Debug, Clone, Default)]
pub struct SchemaTreeResolver {
    type_name: Option<String>,
}

impl SchemaTreeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner recorded on every Field; defaults to the root's name
    pub fn with_type_name<S: Into<String>>(mut self, type_name: S) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Resolve every leaf of `nodes` in document order.
    ///
    /// A malformed array (no root child count, an unmapped physical type,
    /// a truncated or overlong array) yields no Fields and a single error.
    pub fn parse(&self, nodes: &[SchemaNode]) -> Resolution {
        let Some(root) = nodes.first() else {
            return Resolution::failed(SchemaError::EmptySchema);
        };
        let owner = match &self.type_name {
            Some(type_name) => type_name.clone(),
            None => identifier_case(&root.name),
        };
        walk(&owner, FlattenedNodes::new(nodes))
    }
}

/// Event stream over a flattened array, driven by a stack of
/// remaining-children counts.
struct FlattenedNodes<'a> {
    nodes: &'a [SchemaNode],
    pos: usize,
    /// Remaining children per open frame; index 0 is the root
    frames: Vec<usize>,
    pending_exits: usize,
    done: bool,
}

impl<'a> FlattenedNodes<'a> {
    fn new(nodes: &'a [SchemaNode]) -> Self {
        Self {
            nodes,
            pos: 0,
            frames: Vec::new(),
            pending_exits: 0,
            done: false,
        }
    }

    fn fail(&mut self, err: SchemaError) -> Option<Result<WalkEvent>> {
        self.done = true;
        Some(Err(err))
    }

    /// Count one child against the innermost frame and pop every frame
    /// that has no children left.
    fn consume_child(&mut self) {
        if let Some(remaining) = self.frames.last_mut() {
            *remaining -= 1;
        }
        self.pop_finished();
    }

    fn pop_finished(&mut self) {
        while let Some(&0) = self.frames.last() {
            self.frames.pop();
            if !self.frames.is_empty() {
                self.pending_exits += 1;
            }
        }
    }

    fn level(node: &SchemaNode, type_name: String) -> Level {
        Level {
            name: identifier_case(&node.name),
            column: node.name.clone(),
            type_name,
            repetition: node.repetition.unwrap_or(Repetition::Required),
        }
    }
}

impl Iterator for FlattenedNodes<'_> {
    type Item = Result<WalkEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.pending_exits > 0 {
            self.pending_exits -= 1;
            return Some(Ok(WalkEvent::Exit));
        }

        if self.pos == 0 {
            let root = self.nodes.first()?;
            let Some(children) = root.num_children.filter(|_| !root.is_leaf()) else {
                return self.fail(SchemaError::MissingRootChildren(root.name.clone()));
            };
            self.pos = 1;
            self.frames.push(children);
            self.pop_finished();
        }

        if self.frames.is_empty() {
            self.done = true;
            let trailing = self.nodes.len() - self.pos;
            return (trailing > 0).then(|| Err(SchemaError::TrailingNodes(trailing)));
        }

        let nodes = self.nodes;
        let Some(node) = nodes.get(self.pos) else {
            let missing: usize = self.frames.iter().sum();
            return self.fail(SchemaError::TruncatedSchema { missing });
        };
        self.pos += 1;

        match (node.physical_type, node.num_children) {
            (Some(physical_type), _) => {
                let Some(primitive_type) =
                    PrimitiveType::from_physical(physical_type, node.converted_type)
                else {
                    return self.fail(SchemaError::UnmappedPhysicalType {
                        column: node.name.clone(),
                        physical_type: format!("{:?}", physical_type),
                    });
                };
                self.consume_child();
                let level = Self::level(node, primitive_type.rust_type().to_string());
                Some(Ok(WalkEvent::Leaf(level, primitive_type)))
            }
            (None, Some(children)) => {
                if let Some(remaining) = self.frames.last_mut() {
                    *remaining -= 1;
                }
                self.frames.push(children);
                self.pop_finished();
                let level = Self::level(node, identifier_case(&node.name));
                Some(Ok(WalkEvent::Enter(level)))
            }
            (None, None) => self.fail(SchemaError::MalformedNode(node.name.clone())),
        }
    }
}
