use crate::*;
use rand::{rngs::StdRng, SeedableRng};

/// One set cover session: the plane, the sets drawn on it, the undo history, and the solver.
///
/// Every edit records an [`Action`] in the [`History`] so [`Engine::undo`] can reverse it. Any
/// edit also abandons a solver run in flight.
#[derive(Clone)]
pub struct Engine<N: Notifier = ()> {
    config: EngineConfig,
    notifier: N,
    points: PointStore,
    /// Vertices of the polygon being drawn.
    vertices: Vec<Point>,
    /// Edges of the polygon being drawn.
    lines: Vec<Line>,
    sets: Vec<CoverSet>,
    history: History,
    selector: CoverSelector,
    /// Colour given to the next set.
    color: Color,
    rng: StdRng,
    auto_run: bool,
}

impl<N: Notifier> Engine<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_rng(notifier, StdRng::from_entropy())
    }

    /// An engine whose set colours are reproducible.
    pub fn seeded(notifier: N, seed: u64) -> Self {
        Self::with_rng(notifier, StdRng::seed_from_u64(seed))
    }

    fn with_rng(notifier: N, mut rng: StdRng) -> Self {
        let color = Color::pastel(&mut rng);
        Self {
            config: EngineConfig::default(),
            notifier,
            points: PointStore::new(),
            vertices: Vec::new(),
            lines: Vec::new(),
            sets: Vec::new(),
            history: History::new(),
            selector: CoverSelector::new(),
            color,
            rng,
            auto_run: false,
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn points(&self) -> &PointStore {
        &self.points
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn sets(&self) -> &[CoverSet] {
        &self.sets
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selector(&self) -> &CoverSelector {
        &self.selector
    }

    pub fn summaries(&self) -> Vec<SetSummary> {
        self.sets.iter().map(CoverSet::summary).collect()
    }

    /// The colour the next set will get.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the colour for the next set from a `#rrggbb` string.
    pub fn set_color(&mut self, hex: &str) -> Result<(), &'static str> {
        self.color = Color::from_hex(hex)?;
        Ok(())
    }

    /// Place a point. It joins every set whose polygon contains it.
    pub fn add_point(&mut self, at: Point) -> PointId {
        self.history.push(Action::AddPoint);
        let id = self.points.push(at);

        let joined = self
            .sets
            .iter_mut()
            .map(|set| set.admit(id, at))
            .filter(|&x| x)
            .count();
        log::debug!("added point {} to {} sets", at, joined);

        self.abandon_run();
        if !self.sets.is_empty() {
            self.notify_sets();
        }
        id
    }

    /// Add a vertex to the polygon being drawn.
    ///
    /// The first vertex just starts the polygon; later vertices also draw an edge from the
    /// previous one.
    pub fn add_vertex(&mut self, at: Point) {
        match self.vertices.last() {
            Some(&from) => self.draw_line(Line::new(from, at)),
            None => self.push_vertex(at),
        }
    }

    /// Would a click at `at` close the polygon being drawn?
    ///
    /// True when it lands near the first vertex.
    pub fn is_closing_click(&self, at: Point) -> bool {
        self.vertices
            .first()
            .map(|first| first.near(at, self.config.closing_reach()))
            .unwrap_or(false)
    }

    /// Close the polygon being drawn back to its first vertex and turn it into a set.
    ///
    /// Returns the index of the new set, or `None` if no polygon is being drawn.
    pub fn close_polygon(&mut self) -> Option<usize> {
        let (&first, &last) = (self.vertices.first()?, self.vertices.last()?);
        self.draw_line(Line::new(last, first));
        let idx = self.create_set();
        self.color = Color::pastel(&mut self.rng);
        Some(idx)
    }

    fn push_vertex(&mut self, at: Point) {
        self.history.push(Action::AddVertex);
        self.vertices.push(at);
    }

    /// An edge is recorded as a line followed by its end vertex, and undone as one step.
    fn draw_line(&mut self, line: Line) {
        self.history.push(Action::DrawLine);
        self.push_vertex(line.end);
        self.lines.push(line);
    }

    fn create_set(&mut self) -> usize {
        // the set's drawing edits are folded into its creation
        self.history
            .remove_until(&[Action::CreateSet, Action::AddPoint]);
        self.history.push(Action::CreateSet);

        let name = format!("Set {}", self.sets.len() + 1);
        let polygon = Polygon::new(std::mem::take(&mut self.lines));
        self.vertices.clear();

        let set = CoverSet::new(name, self.color, polygon, &self.points);
        log::debug!("created {} with {} edges", set.display_name(), set.polygon().len());
        self.sets.push(set);

        self.abandon_run();
        self.notify_sets();
        self.sets.len() - 1
    }

    /// Undo the most recent edit. With nothing to undo, resets everything.
    pub fn undo(&mut self) {
        let Ok(action) = self.history.pop() else {
            self.clear();
            return;
        };

        match action {
            Action::AddPoint => {
                if let Some((id, site)) = self.points.pop() {
                    self.sets.iter_mut().for_each(|s| {
                        s.detach(id);
                    });
                    log::debug!("undo: removed point {}", site.at);
                }
            }
            Action::AddVertex => {
                if self.vertices.pop().is_some() {
                    match self.history.last() {
                        Some(Action::DrawLine) if !self.lines.is_empty() => {
                            self.history.pop().ok();
                            self.lines.pop();
                            log::debug!("undo: removed edge");
                        }
                        _ => log::debug!("undo: removed vertex"),
                    }
                }
            }
            Action::CreateSet => {
                if let Some(set) = self.sets.pop() {
                    log::debug!("undo: removed {}", set.display_name());
                }
            }
            Action::DrawLine => (),
        }

        self.abandon_run();
        self.notify_sets();
    }

    /// Remove everything and stop auto-running.
    pub fn clear(&mut self) {
        self.history.clear();
        self.vertices.clear();
        self.lines.clear();
        self.points.clear();
        self.sets.clear();
        self.selector.reset();
        self.stop_auto_run();
        log::debug!("cleared");
        self.notify_sets();
    }

    /// Run one solver step.
    ///
    /// The selected set is highlighted. When the run finishes, auto-run stops and the result is
    /// reported through [`Notifier::solve_complete`] (unless nothing was selected).
    pub fn step(&mut self) -> Step {
        let step = self.selector.step(&self.sets, &mut self.points);

        self.sets.iter_mut().for_each(|s| s.set_highlighted(false));
        match &step {
            Step::Selected { source, .. } => {
                if let Some(s) = self.sets.get_mut(*source) {
                    s.set_highlighted(true);
                }
            }
            Step::Done(report) => {
                self.stop_auto_run();
                log::info!("solved with {} sets", report.selected.len());
                if !report.is_empty() {
                    self.notifier.solve_complete(&report.result_text());
                }
            }
        }

        self.notify_sets();
        step
    }

    /// Arm auto-run. Idempotent.
    ///
    /// The engine keeps no timer. Some external scheduler calls [`Engine::tick`] every
    /// [`EngineConfig::auto_run_interval`]; see [`run_auto`].
    pub fn start_auto_run(&mut self) {
        self.auto_run = true;
    }

    /// Disarm auto-run. Idempotent.
    pub fn stop_auto_run(&mut self) {
        self.auto_run = false;
    }

    pub fn is_auto_running(&self) -> bool {
        self.auto_run
    }

    /// One scheduled auto-run tick: steps if armed. Returns if the scheduler should keep ticking.
    pub fn tick(&mut self) -> bool {
        if self.auto_run {
            self.step();
        }
        self.auto_run
    }

    /// Drop the working copy of a run in flight, and the colours it left on the live points.
    fn abandon_run(&mut self) {
        if self.selector.state() == State::Stepping {
            self.points.clear_colors();
            self.sets.iter_mut().for_each(|s| s.set_highlighted(false));
        }
        self.selector.reset();
    }

    fn notify_sets(&mut self) {
        let summaries = self.summaries();
        self.notifier.sets_changed(&summaries);
    }

    /// Take every set away, and their creation from the history. Points stay.
    pub(crate) fn discard_sets(&mut self) {
        self.sets.clear();
        self.history.remove_until(&[Action::AddPoint]);
        self.abandon_run();
        self.notify_sets();
    }
}

impl Default for Engine<()> {
    fn default() -> Self {
        Engine::new(())
    }
}
