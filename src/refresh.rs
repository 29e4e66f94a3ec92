use ilattice3::Point;

pub const DEFAULT_REFRESH_INTERVAL_SECS: f32 = 5.0;

/// Decides when to request a fresh highlight: after the player has stood on the same block for
/// `interval_secs`, and then again every `interval_secs` while they stay put.
pub struct AutoRefresh {
    enabled: bool,
    interval_secs: f32,
    last_position: Option<Point>,
    idle_secs: f32,
}

impl Default for AutoRefresh {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL_SECS)
    }
}

impl AutoRefresh {
    /// Starts disabled.
    pub fn new(interval_secs: f32) -> Self {
        AutoRefresh {
            enabled: false,
            interval_secs,
            last_position: None,
            idle_secs: 0.0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.last_position = None;
            self.idle_secs = 0.0;
        }
    }

    /// Returns true when a refresh should be requested.
    pub fn tick(&mut self, position: Point, dt_secs: f32) -> bool {
        if !self.enabled {
            return false;
        }

        if self.last_position != Some(position) {
            self.last_position = Some(position);
            self.idle_secs = 0.0;
            return false;
        }

        self.idle_secs += dt_secs;
        if self.idle_secs >= self.interval_secs {
            self.idle_secs = 0.0;
            log::debug!("Player idle at {:?}, requesting room refresh", position);
            return true;
        }

        false
    }
}
