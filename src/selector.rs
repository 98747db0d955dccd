use crate::*;
use std::cmp::Reverse;

/// Where a [`CoverSelector`] is in a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// No run in flight.
    #[default]
    Idle,
    /// A run is in flight; the working copy exists.
    Stepping,
    /// The last run finished. The next step starts a new run.
    Done,
}

/// The outcome of one [`CoverSelector::step`].
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// A set was selected.
    Selected {
        /// Display name, with member count.
        name: String,
        /// Index of the set in the live collection.
        source: usize,
    },
    /// Nothing is left to cover; the run is over.
    Done(SolveReport),
}

/// The result of a finished run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolveReport {
    /// Display names of the selected sets, in selection order.
    pub selected: Vec<String>,
    /// Each covered live point and its colour, as they stood before the run reset them.
    pub coverage: Vec<(PointId, Color)>,
}

impl SolveReport {
    /// The selected names, newline joined.
    pub fn result_text(&self) -> String {
        self.selected.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn color_of(&self, id: PointId) -> Option<Color> {
        self.coverage
            .iter()
            .find_map(|&(p, c)| (p == id).then_some(c))
    }
}

#[derive(Clone, Debug)]
struct Candidate {
    set: CoverSet,
    /// Index into the live sets.
    source: usize,
}

/// Greedy set cover, one selection per [`step`](CoverSelector::step).
///
/// The first step of a run snapshots the live sets into a private working copy. Every member of
/// every working set is a _fresh_ point, so a run does not disturb the live colours except where
/// it chooses to: each selection writes the chosen set's colours back onto the live points.
///
/// Each step picks the set with the most uncoloured members (ties to the earlier set), colours
/// them, and colours the same coordinates in every other set still in the running. Sets left
/// with nothing to cover are dropped silently. When no set has anything left to cover the run
/// finishes: the live colours are reset and a [`SolveReport`] is returned.
#[derive(Clone, Debug, Default)]
pub struct CoverSelector {
    state: State,
    working: Vec<Candidate>,
    scratch: PointStore,
    /// Scratch id -> live id.
    origin: Vec<PointId>,
    selected: Vec<String>,
}

impl CoverSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Names selected so far in the current run.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Drop any run in flight and go back to idle.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.discard();
        self.selected.clear();
    }

    /// Select the next set, or finish the run.
    ///
    /// A run over `n` sets finishes within `n + 1` steps: each step that does not finish takes at
    /// least one set out of the running.
    pub fn step(&mut self, sets: &[CoverSet], live: &mut PointStore) -> Step {
        if self.state != State::Stepping {
            self.snapshot(sets, live);
            self.state = State::Stepping;
        }

        let exhausted = self
            .working
            .iter()
            .all(|c| c.set.is_removed() || c.set.uncolored_count(&self.scratch) == 0);
        if exhausted {
            return Step::Done(self.finish(live));
        }

        let scratch = &self.scratch;
        self.working
            .sort_by_key(|c| Reverse(c.set.uncolored_count(scratch)));

        let mut chosen = None;
        for (i, c) in self.working.iter_mut().enumerate() {
            if c.set.uncolored_count(&self.scratch) == 0 {
                c.set.mark_covered(true, &mut self.scratch);
            }
            if !c.set.is_removed() {
                chosen = Some(i);
                break;
            }
        }
        let Some(i) = chosen else {
            return Step::Done(self.finish(live));
        };

        let (name, source) = self.select(i, live);
        log::trace!("selected {} ({} selected so far)", name, self.selected.len());
        Step::Selected { name, source }
    }

    fn select(&mut self, i: usize, live: &mut PointStore) -> (String, usize) {
        let chosen = &mut self.working[i];
        chosen.set.mark_covered(true, &mut self.scratch);
        let name = chosen.set.display_name();
        let source = chosen.source;
        let color = chosen.set.color();

        let covered = chosen
            .set
            .members()
            .iter()
            .map(|&id| self.scratch.at(id))
            .collect::<HashSet<_>>();

        // the same coordinates in the other sets are now covered, by the chosen set's colour
        // unless they already have one
        for (j, other) in self.working.iter().enumerate() {
            if j == i || other.set.is_removed() {
                continue;
            }
            let hits = other
                .set
                .uncolored_members(&self.scratch)
                .filter(|&id| covered.contains(&self.scratch.at(id)))
                .collect::<Vec<_>>();
            for id in hits {
                self.scratch.paint(id, color);
            }
        }

        for &id in self.working[i].set.members() {
            if let Some(c) = self.scratch.color(id) {
                live.paint(self.origin[id.index()], c);
            }
        }

        self.selected.push(name.clone());
        (name, source)
    }

    fn snapshot(&mut self, sets: &[CoverSet], live: &PointStore) {
        self.discard();
        self.selected.clear();

        for (source, set) in sets.iter().enumerate() {
            let mut members = Vec::with_capacity(set.len());
            for &id in set.members() {
                if let Some(&site) = live.get(id) {
                    members.push(self.scratch.push_site(site));
                    self.origin.push(id);
                }
            }

            let set = CoverSet::from_parts(
                set.name(),
                set.color(),
                set.polygon().clone(),
                members,
            );
            self.working.push(Candidate { set, source });
        }
    }

    fn finish(&mut self, live: &mut PointStore) -> SolveReport {
        let coverage = live
            .iter()
            .filter_map(|(id, site)| site.color.map(|c| (id, c)))
            .collect();
        live.clear_colors();

        self.discard();
        self.state = State::Done;

        SolveReport {
            selected: std::mem::take(&mut self.selected),
            coverage,
        }
    }

    fn discard(&mut self) {
        self.working.clear();
        self.scratch.clear();
        self.origin.clear();
    }
}
