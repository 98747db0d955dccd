use std::time::Duration;

/// Engine parameters.
///
/// The marker sizes are for the view layer; the engine only uses `point_radius` for its closing
/// click hit test.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Diameter of a placed point marker.
    pub point_radius: i32,
    /// Diameter of a polygon vertex marker.
    pub vertex_radius: i32,
    /// Stroke width of polygon edges.
    pub line_thickness: i32,
    /// Delay between solver steps while auto-running.
    pub auto_run_interval: Duration,
}

impl EngineConfig {
    /// Stroke width of the most recently selected set.
    pub fn highlighted_line_thickness(&self) -> i32 {
        self.line_thickness * 3
    }

    /// How close (per axis) a click must be to the first vertex to close the polygon.
    pub fn closing_reach(&self) -> i32 {
        2 * self.point_radius
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            point_radius: 10,
            vertex_radius: 5,
            line_thickness: 3,
            auto_run_interval: Duration::from_millis(1000),
        }
    }
}
