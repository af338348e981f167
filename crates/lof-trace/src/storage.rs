//! Arena storage for the traced lines of one pass.
//!
//! All vertices live in one contiguous `Vec<DVec2>`; each line is a
//! [`LineSpan`] into it. A line is appended by pushing vertices through a
//! [`LineWriter`] and sealing it with [`LineWriter::finish`], after which
//! it is never mutated, only replaced by the next [`LineStorage::clear`].

use glam::DVec2;
use lof_core::LineId;

/// How a traced line ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The line entered the capture radius of this sink.
    Sink {
        /// Index of the sink in the particle slice.
        particle: usize,
    },
    /// The step budget ran out first.
    Open,
}

impl Termination {
    /// Whether the line reached a sink.
    pub fn is_terminated(self) -> bool {
        matches!(self, Self::Sink { .. })
    }
}

/// Location of one line's vertices in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSpan {
    /// First vertex index.
    pub start: u32,
    /// Number of vertices.
    pub len: u32,
    /// How the line ended.
    pub termination: Termination,
}

/// A borrowed view of one stored line.
#[derive(Clone, Copy, Debug)]
pub struct FieldLine<'a> {
    /// The line's ID.
    pub id: LineId,
    /// Recorded vertices in path order.
    pub vertices: &'a [DVec2],
    /// How the line ended.
    pub termination: Termination,
}

/// Vertex arena plus per-line spans.
#[derive(Clone, Debug, Default)]
pub struct LineStorage {
    vertices: Vec<DVec2>,
    spans: Vec<LineSpan>,
}

impl LineStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Release every stored line and size the span table for exactly
    /// `line_count` lines.
    pub fn reset(&mut self, line_count: u32) {
        self.vertices = Vec::new();
        self.spans = Vec::with_capacity(line_count as usize);
    }

    /// Release every stored line.
    pub fn clear(&mut self) {
        self.reset(0);
    }

    /// Trim the vertex arena to its final length once a pass is complete.
    pub fn shrink_to_fit(&mut self) {
        self.vertices.shrink_to_fit();
    }

    /// Start appending a new line.
    pub fn begin_line(&mut self) -> LineWriter<'_> {
        let start = self.vertices.len();
        LineWriter {
            storage: self,
            start,
            sealed: false,
        }
    }

    /// Number of stored lines.
    pub fn line_count(&self) -> usize {
        self.spans.len()
    }

    /// Total vertices across all lines.
    pub fn vertex_total(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices of `line`, or `None` if no such line is stored.
    pub fn vertices_of(&self, line: LineId) -> Option<&[DVec2]> {
        let span = self.spans.get(line.index())?;
        let start = span.start as usize;
        Some(&self.vertices[start..start + span.len as usize])
    }

    /// Vertex count of `line`.
    pub fn vertex_count_of(&self, line: LineId) -> Option<usize> {
        self.spans.get(line.index()).map(|s| s.len as usize)
    }

    /// Span record of `line`.
    pub fn span_of(&self, line: LineId) -> Option<LineSpan> {
        self.spans.get(line.index()).copied()
    }

    /// Iterate stored lines in ID order.
    pub fn iter(&self) -> impl Iterator<Item = FieldLine<'_>> {
        self.spans.iter().enumerate().map(move |(i, span)| {
            let start = span.start as usize;
            FieldLine {
                id: LineId(i as u32),
                vertices: &self.vertices[start..start + span.len as usize],
                termination: span.termination,
            }
        })
    }
}

/// Appends the vertices of one line to a [`LineStorage`].
///
/// Dropping a writer without calling [`finish`](LineWriter::finish)
/// discards the vertices pushed so far.
pub struct LineWriter<'a> {
    storage: &'a mut LineStorage,
    start: usize,
    sealed: bool,
}

impl LineWriter<'_> {
    /// Append one vertex.
    pub fn push(&mut self, vertex: DVec2) {
        self.storage.vertices.push(vertex);
    }

    /// Vertices pushed to this line so far.
    pub fn len(&self) -> usize {
        self.storage.vertices.len() - self.start
    }

    /// Whether no vertex has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Seal the line and return its ID.
    pub fn finish(mut self, termination: Termination) -> LineId {
        let id = LineId(self.storage.spans.len() as u32);
        let len = self.len() as u32;
        self.storage.spans.push(LineSpan {
            start: self.start as u32,
            len,
            termination,
        });
        self.sealed = true;
        id
    }
}

impl Drop for LineWriter<'_> {
    fn drop(&mut self) {
        if !self.sealed {
            self.storage.vertices.truncate(self.start);
        }
    }
}
