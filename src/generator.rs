use crate::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Corner offsets for the random quadrilaterals of a generated scenario.
///
/// Around an anchor `(x, y)` the corners are, in drawing order:
/// 1. up and left by at least `reach`, jittered out toward the region's top left,
/// 2. up and right by `far + jitter(spread)`,
/// 3. down and right by `near + jitter(spread)`,
/// 4. left by at least `reach` and down by at least `near`, jittered toward the region's edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuadShape {
    pub reach: i32,
    pub far: i32,
    pub near: i32,
    pub spread: i32,
}

impl Default for QuadShape {
    fn default() -> Self {
        Self {
            reach: 100,
            far: 80,
            near: 50,
            spread: 50,
        }
    }
}

impl QuadShape {
    /// The four corners around `anchor`.
    pub fn corners<R: Rng + ?Sized>(&self, anchor: Point, region: Extents, rng: &mut R) -> [Point; 4] {
        let (x, y) = (anchor.x as i64, anchor.y as i64);
        let room_left = x - region.origin.x as i64;
        let room_up = y - region.origin.y as i64;
        let room_down = region.max().y as i64 - y;
        let (reach, far, near) = (self.reach as i64, self.far as i64, self.near as i64);
        let spread = self.spread as i64;

        let mut jitter = |n: i64| rng.gen_range(0..n.max(1));
        let p = |x: i64, y: i64| Point::new(clamp(x), clamp(y));

        [
            p(x - (reach + jitter(room_left - reach)), y - (reach + jitter(room_up - reach))),
            p(x + (far + jitter(spread)), y - (far + jitter(spread))),
            p(x + (near + jitter(spread)), y + (near + jitter(spread))),
            p(x - (reach + jitter(room_left - reach)), y + (near + jitter(room_down - reach))),
        ]
    }
}

fn clamp(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Builds random scenarios in which every point is covered by at least one set.
///
/// Sets are random quadrilaterals; any that capture nothing are undone. If the number of sets
/// passes a soft cap while points are still uncovered, all the sets are thrown away and
/// generation starts over on the same points. The result is a cover, not a minimal one.
pub struct ScenarioGenerator {
    rng: StdRng,
    shape: QuadShape,
    cap: Option<usize>,
}

impl Default for ScenarioGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            shape: QuadShape::default(),
            cap: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            shape: QuadShape::default(),
            cap: None,
        }
    }

    pub fn with_shape(mut self, shape: QuadShape) -> Self {
        self.shape = shape;
        self
    }

    /// Start over once more than `cap` sets are on the plane with points still uncovered.
    ///
    /// Without one, each call picks a random cap between a quarter and three quarters of the
    /// point count.
    pub fn with_set_cap(mut self, cap: usize) -> Self {
        self.cap = Some(cap);
        self
    }

    /// Clear `engine` and fill it with `count` distinct points inside `region`, and sets that
    /// cover them.
    ///
    /// Everything goes through the engine's edit operations, so the history stays consistent:
    /// it ends as one point addition per point followed by one set creation per set.
    pub fn generate<N: Notifier>(
        &mut self,
        engine: &mut Engine<N>,
        count: usize,
        region: Extents,
    ) -> Result<(), &'static str> {
        if region.is_empty() {
            return Err("region is empty");
        }
        if count as u64 > region.area() {
            return Err("region cannot hold that many distinct points");
        }

        engine.clear();

        let mut placed = HashSet::default();
        while placed.len() < count {
            let p = self.random_point(region);
            if placed.insert(p) {
                engine.add_point(p);
            }
        }

        let mut uncovered: HashSet<PointId> = engine.points().iter().map(|(id, _)| id).collect();
        let cap = match self.cap {
            Some(cap) => cap,
            None => count / 4 + self.rng.gen_range(0..(count / 2).max(1)),
        };

        while !uncovered.is_empty() {
            let anchor = self.random_point(region);
            for v in self.shape.corners(anchor, region, &mut self.rng) {
                engine.add_vertex(v);
            }
            let Some(idx) = engine.close_polygon() else {
                continue;
            };

            let members = engine.sets()[idx].members().to_vec();
            if members.is_empty() {
                log::debug!("discarding empty set around {}", anchor);
                engine.undo();
            } else {
                members.iter().for_each(|id| {
                    uncovered.remove(id);
                });
            }

            if engine.sets().len() > cap && !uncovered.is_empty() {
                log::debug!(
                    "{} sets leave {} points uncovered, starting over",
                    engine.sets().len(),
                    uncovered.len()
                );
                engine.discard_sets();
                uncovered = engine.points().iter().map(|(id, _)| id).collect();
            }
        }

        log::debug!("generated {} points in {} sets", count, engine.sets().len());
        Ok(())
    }

    fn random_point(&mut self, region: Extents) -> Point {
        let (w, h) = region.reachable_size();
        let x = region.origin.x as i64 + self.rng.gen_range(0..w as i64);
        let y = region.origin.y as i64 + self.rng.gen_range(0..h as i64);
        Point::new(clamp(x), clamp(y))
    }
}
