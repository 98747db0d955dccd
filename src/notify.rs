use crate::*;

/// How the engine tells the view layer about changes.
///
/// Both calls are synchronous and the engine ignores anything done in them. The defaults do
/// nothing, so implement only what you need.
pub trait Notifier {
    /// The collection of sets changed, or needs redrawing. Passes every set in order.
    fn sets_changed(&mut self, sets: &[SetSummary]) {
        let _ = sets;
    }

    /// A solver run finished. `result` is the selected set names, newline joined, in order.
    fn solve_complete(&mut self, result: &str) {
        let _ = result;
    }
}

/// Ignores everything.
impl Notifier for () {}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn sets_changed(&mut self, sets: &[SetSummary]) {
        (**self).sets_changed(sets)
    }

    fn solve_complete(&mut self, result: &str) {
        (**self).solve_complete(result)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn sets_changed(&mut self, sets: &[SetSummary]) {
        (**self).sets_changed(sets)
    }

    fn solve_complete(&mut self, result: &str) {
        (**self).solve_complete(result)
    }
}

/// Keeps every notification, for inspection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    /// Each `sets_changed` call, in order.
    pub set_changes: Vec<Vec<SetSummary>>,
    /// Each `solve_complete` result, in order.
    pub results: Vec<String>,
}

impl Recorder {
    pub fn last_sets(&self) -> Option<&[SetSummary]> {
        self.set_changes.last().map(Vec::as_slice)
    }
}

impl Notifier for Recorder {
    fn sets_changed(&mut self, sets: &[SetSummary]) {
        self.set_changes.push(sets.to_vec());
    }

    fn solve_complete(&mut self, result: &str) {
        self.results.push(result.to_string());
    }
}
