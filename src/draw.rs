/// Ephemeral state of an in-progress freehand stroke: pointer samples
/// in scene space, held until the draw ends and the path is either
/// committed as a node or discarded. Never persisted.
///
/// Two states, `idle` and `drawing`. `start` enters `drawing` and
/// discards any unfinished path; `push` grows the path while drawing;
/// `finish` returns to `idle`, handing back the points when there are
/// enough of them to commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingSession {
    is_drawing: bool,
    current_path: Vec<f64>,
}

impl DrawingSession {
    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// The samples collected so far, alternating x,y.
    pub fn current_path(&self) -> &[f64] {
        &self.current_path
    }

    pub(crate) fn start(&mut self) {
        self.is_drawing = true;
        self.current_path.clear();
    }

    /// Append one sample. No-op while idle.
    pub(crate) fn push(&mut self, x: f64, y: f64) {
        if self.is_drawing {
            self.current_path.push(x);
            self.current_path.push(y);
        }
    }

    /// End the session. Returns the collected points when the path
    /// holds more than 2 numbers (at least two full samples); a
    /// single clicked point is a degenerate path and yields `None`.
    pub(crate) fn finish(&mut self) -> Option<Vec<f64>> {
        let commit = self.current_path.len() > 2;
        let points = std::mem::take(&mut self.current_path);
        self.is_drawing = false;
        commit.then_some(points)
    }

    pub(crate) fn reset(&mut self) {
        self.is_drawing = false;
        self.current_path.clear();
    }
}
