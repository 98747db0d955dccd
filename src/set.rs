use crate::*;

/// A polygon drawn on the plane, and the placed points inside it.
///
/// Membership is computed against every stored point when the set is built, and then kept in
/// sync as points are added or undone. Members are [`PointId`]s, so colouring a member colours
/// it for every other set sharing it.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverSet {
    name: String,
    color: Color,
    polygon: Polygon,
    members: Vec<PointId>,
    /// Logically taken out of the running by the selector.
    removed: bool,
    highlighted: bool,
}

impl CoverSet {
    /// Build a set, testing every point in `store` against the polygon.
    pub fn new(name: impl Into<String>, color: Color, polygon: Polygon, store: &PointStore) -> Self {
        use rayon::prelude::*;

        // indexed parallel collect keeps store order
        let members = store
            .sites()
            .par_iter()
            .enumerate()
            .filter(|(_, site)| polygon.envelops(site.at))
            .map(|(i, _)| PointId(i as u32))
            .collect();

        Self::from_parts(name, color, polygon, members)
    }

    pub(crate) fn from_parts(
        name: impl Into<String>,
        color: Color,
        polygon: Polygon,
        members: Vec<PointId>,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            polygon,
            members,
            removed: false,
            highlighted: false,
        }
    }

    /// The name as given, without the member count.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name with the current member count, eg `Set 1 (4 Point)`.
    pub fn display_name(&self) -> String {
        format!("{} ({} Point)", self.name, self.members.len())
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn members(&self) -> &[PointId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.members.contains(&id)
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Add a newly placed point if the polygon contains it. Returns if it was admitted.
    pub fn admit(&mut self, id: PointId, at: Point) -> bool {
        let inside = self.polygon.envelops(at);
        if inside {
            self.members.push(id);
        }
        inside
    }

    /// Forget a point. Returns if it was a member.
    pub fn detach(&mut self, id: PointId) -> bool {
        let len = self.members.len();
        self.members.retain(|&m| m != id);
        self.members.len() != len
    }

    /// Flag the set as covered (removed from the running) or not.
    ///
    /// Turning on paints every member that has no colour yet with this set's colour. Colours
    /// already given by an earlier set stay. Turning off clears the colour of **every** member.
    ///
    /// Members are shared, so this changes what other sets see too.
    pub fn mark_covered(&mut self, on: bool, store: &mut PointStore) {
        self.removed = on;
        if on {
            for &id in &self.members {
                store.paint(id, self.color);
            }
        } else {
            for &id in &self.members {
                store.set_color(id, None);
            }
        }
    }

    /// Members with no colour, the set's remaining contribution to a cover.
    pub fn uncolored_members<'a>(
        &'a self,
        store: &'a PointStore,
    ) -> impl Iterator<Item = PointId> + 'a {
        self.members
            .iter()
            .copied()
            .filter(move |&id| !store.is_colored(id))
    }

    pub fn uncolored_count(&self, store: &PointStore) -> usize {
        self.uncolored_members(store).count()
    }

    pub fn summary(&self) -> SetSummary {
        SetSummary {
            name: self.display_name(),
            color: self.color,
            member_count: self.members.len(),
            highlighted: self.highlighted,
        }
    }
}

/// What the view layer gets to know about a set.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetSummary {
    pub name: String,
    pub color: Color,
    pub member_count: usize,
    pub highlighted: bool,
}
