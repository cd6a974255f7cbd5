//! Source map between template expressions and generated code.
//!
//! Every expression the generator emits is copied verbatim, so a mapping
//! between its source range and its generated range translates any position
//! inside the snippet exactly in both directions.

use serde::{Deserialize, Serialize};

use crate::ast::{Expression, Position, Range};

/// A single mapping entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMapping {
    /// Range of the expression in the template source.
    pub source: Range,
    /// Range the expression occupies in the generated code.
    pub generated: Range,
}

/// Source map produced by one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMap {
    /// Mappings in generated order.
    mappings: Vec<SourceMapping>,
}

impl SourceMap {
    /// Create an empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `expression` was emitted at `generated`.
    pub fn add(&mut self, expression: &Expression, generated: Range) {
        self.mappings.push(SourceMapping {
            source: expression.range,
            generated,
        });
    }

    pub fn mappings(&self) -> &[SourceMapping] {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Find the mapping whose source range contains `source`.
    pub fn mapping_at_source(&self, source: Position) -> Option<&SourceMapping> {
        self.mappings.iter().find(|m| m.source.contains(source))
    }

    /// Find the mapping whose generated range contains `generated`.
    ///
    /// Generated ranges are recorded in output order and never overlap, so
    /// this is a binary search.
    pub fn mapping_at_generated(&self, generated: Position) -> Option<&SourceMapping> {
        let idx = self
            .mappings
            .partition_point(|m| m.generated.to.index < generated.index);
        self.mappings
            .get(idx)
            .filter(|m| m.generated.contains(generated))
    }

    /// Translate a template position to the generated position.
    pub fn generated_position(&self, source: Position) -> Option<Position> {
        self.mapping_at_source(source)
            .map(|m| translate(source, m.source.from, m.generated.from))
    }

    /// Translate a generated position back to the template position.
    pub fn source_position(&self, generated: Position) -> Option<Position> {
        self.mapping_at_generated(generated)
            .map(|m| translate(generated, m.generated.from, m.source.from))
    }
}

/// Move `position` from a snippet starting at `from` to the copy of the same
/// snippet starting at `to`.
fn translate(position: Position, from: Position, to: Position) -> Position {
    let index = to.index + (position.index - from.index);
    if position.line == from.line {
        Position::new(index, to.line, to.col + (position.col - from.col))
    } else {
        // Later lines of a verbatim copy keep their columns.
        Position::new(index, to.line + (position.line - from.line), position.col)
    }
}
