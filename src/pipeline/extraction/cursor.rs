/// Read position over an immutable line slice.
///
/// Extractors walk a zone body with one cursor; look-ahead goes through
/// [`LineCursor::window`] so the scan length is always explicit.
#[derive(Debug, Clone, Copy)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, pos: 0 }
    }

    pub fn current(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    pub fn advance(&mut self) {
        self.skip(1);
    }

    pub fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.lines.len());
    }

    /// The current line plus up to `forward` following lines, cut before the
    /// first following line for which `stop` holds.
    pub fn window(&self, forward: usize, stop: impl Fn(&str) -> bool) -> &'a [&'a str] {
        if self.pos >= self.lines.len() {
            return &[];
        }
        let limit = (self.pos + forward + 1).min(self.lines.len());
        let end = (self.pos + 1..limit)
            .find(|&i| stop(self.lines[i]))
            .unwrap_or(limit);
        &self.lines[self.pos..end]
    }

    /// All lines after the current one, up to (not including) the first for
    /// which `stop` holds.
    pub fn rest_until(&self, stop: impl Fn(&str) -> bool) -> &'a [&'a str] {
        let start = (self.pos + 1).min(self.lines.len());
        let end = (start..self.lines.len())
            .find(|&i| stop(self.lines[i]))
            .unwrap_or(self.lines.len());
        &self.lines[start..end]
    }
}
