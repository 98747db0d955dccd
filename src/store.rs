use crate::*;

/// Handle to a placed point in a [`PointStore`].
///
/// This is the point's _identity_. Two sets referencing the same id see the same colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub(crate) u32);

impl PointId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A placed point and the colour of whichever set covered it first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Site {
    pub at: Point,
    /// `None` when uncovered.
    pub color: Option<Color>,
}

/// The canonical store of placed points.
///
/// Sets hold [`PointId`]s into the store rather than copies, so colouring a point through one set
/// is visible through every other set containing it. Only the most recently pushed point can be
/// removed, which keeps every handed out id stable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointStore {
    sites: Vec<Site>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(&mut self, at: Point) -> PointId {
        self.push_site(Site { at, color: None })
    }

    pub(crate) fn push_site(&mut self, site: Site) -> PointId {
        let id = PointId(self.sites.len() as u32);
        self.sites.push(site);
        id
    }

    /// Remove the most recently pushed point.
    pub fn pop(&mut self) -> Option<(PointId, Site)> {
        self.sites
            .pop()
            .map(|site| (PointId(self.sites.len() as u32), site))
    }

    pub fn clear(&mut self) {
        self.sites.clear();
    }

    pub fn get(&self, id: PointId) -> Option<&Site> {
        self.sites.get(id.index())
    }

    /// The coordinate of a point.
    ///
    /// # Panics
    /// Panics if the id was not handed out by this store (or has since been popped).
    pub fn at(&self, id: PointId) -> Point {
        self.sites[id.index()].at
    }

    pub fn color(&self, id: PointId) -> Option<Color> {
        self.sites[id.index()].color
    }

    pub fn is_colored(&self, id: PointId) -> bool {
        self.color(id).is_some()
    }

    pub fn set_color(&mut self, id: PointId, color: Option<Color>) {
        self.sites[id.index()].color = color;
    }

    /// Colour the point only if it has no colour yet. Returns if it was painted.
    pub fn paint(&mut self, id: PointId, color: Color) -> bool {
        let site = &mut self.sites[id.index()];
        if site.color.is_some() {
            false
        } else {
            site.color = Some(color);
            true
        }
    }

    /// Uncover every point.
    pub fn clear_colors(&mut self) {
        self.sites.iter_mut().for_each(|s| s.color = None);
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (PointId, &Site)> + '_ {
        self.sites
            .iter()
            .enumerate()
            .map(|(i, s)| (PointId(i as u32), s))
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.sites.iter().map(|s| s.at)
    }

    pub(crate) fn sites(&self) -> &[Site] {
        &self.sites
    }
}
