//! Volume slider handling

/// Directory the volume icons are served from
pub const DEFAULT_ICON_DIR: &str = "icons";

/// Icon level shown next to the volume slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VolumeLevel {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeLevel {
    /// Level for a slider value in percent
    ///
    /// Thresholds are exclusive: 0 is muted, 1-33 low, 34-66 medium,
    /// anything above 66 high.
    pub fn from_percent(percent: f64) -> Self {
        if percent > 66.0 {
            VolumeLevel::High
        } else if percent > 33.0 {
            VolumeLevel::Medium
        } else if percent > 0.0 {
            VolumeLevel::Low
        } else {
            VolumeLevel::Muted
        }
    }

    /// Numeric level (0-3) used in icon file names
    pub fn index(&self) -> u8 {
        match self {
            VolumeLevel::Muted => 0,
            VolumeLevel::Low => 1,
            VolumeLevel::Medium => 2,
            VolumeLevel::High => 3,
        }
    }

    /// Path of the icon for this level, e.g. `icons/volume-level-2.svg`
    pub fn icon_path(&self, icon_dir: &str) -> String {
        let dir = icon_dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("volume-level-{}.svg", self.index())
        } else {
            format!("{}/volume-level-{}.svg", dir, self.index())
        }
    }

    /// Alt text for the icon
    pub fn alt_text(&self) -> String {
        format!("Volume Level {}", self.index())
    }

    /// Speech gain (0.0 - 1.0) for a slider value in percent
    pub fn gain(percent: f64) -> f64 {
        if percent.is_nan() {
            return 0.0;
        }
        (percent / 100.0).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(VolumeLevel::from_percent(0.0), VolumeLevel::Muted);
        assert_eq!(VolumeLevel::from_percent(1.0), VolumeLevel::Low);
        assert_eq!(VolumeLevel::from_percent(33.0), VolumeLevel::Low);
        assert_eq!(VolumeLevel::from_percent(34.0), VolumeLevel::Medium);
        assert_eq!(VolumeLevel::from_percent(66.0), VolumeLevel::Medium);
        assert_eq!(VolumeLevel::from_percent(67.0), VolumeLevel::High);
        assert_eq!(VolumeLevel::from_percent(100.0), VolumeLevel::High);
    }

    #[test]
    fn test_negative_is_muted() {
        assert_eq!(VolumeLevel::from_percent(-5.0), VolumeLevel::Muted);
        assert_eq!(VolumeLevel::from_percent(f64::NAN), VolumeLevel::Muted);
    }

    #[test]
    fn test_icon_path() {
        assert_eq!(VolumeLevel::High.icon_path("icons"), "icons/volume-level-3.svg");
        assert_eq!(VolumeLevel::Muted.icon_path("assets/"), "assets/volume-level-0.svg");
        assert_eq!(VolumeLevel::Low.icon_path(""), "volume-level-1.svg");
        assert_eq!(VolumeLevel::Medium.alt_text(), "Volume Level 2");
    }

    #[test]
    fn test_gain() {
        assert_eq!(VolumeLevel::gain(100.0), 1.0);
        assert_eq!(VolumeLevel::gain(50.0), 0.5);
        assert_eq!(VolumeLevel::gain(250.0), 1.0);
        assert_eq!(VolumeLevel::gain(-1.0), 0.0);
        assert_eq!(VolumeLevel::gain(f64::NAN), 0.0);
    }
}
