//! Fan speed levels.

define_coded_enum!(
    /// Discrete fan speed, ordered `Off < Low < High`.
    SpeedState {
        Off = 0 => "OFF",
        Low = 1 => "LOW",
        High = 2 => "HIGH",
    }
);

impl SpeedState {
    /// The next level up, or `None` when already at [`High`](Self::High).
    #[must_use]
    pub fn faster(self) -> Option<Self> {
        match self {
            Self::Off => Some(Self::Low),
            Self::Low => Some(Self::High),
            Self::High => None,
        }
    }

    /// The next level down, or `None` when already [`Off`](Self::Off).
    #[must_use]
    pub fn slower(self) -> Option<Self> {
        match self {
            Self::Off => None,
            Self::Low => Some(Self::Off),
            Self::High => Some(Self::Low),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_order_levels_by_code() {
        assert!(SpeedState::Off < SpeedState::Low);
        assert!(SpeedState::Low < SpeedState::High);
    }

    #[test]
    fn should_expose_stable_codes() {
        assert_eq!(SpeedState::Off.code(), 0);
        assert_eq!(SpeedState::Low.code(), 1);
        assert_eq!(SpeedState::High.code(), 2);
    }

    #[test]
    fn should_step_up_one_level_at_a_time() {
        assert_eq!(SpeedState::Off.faster(), Some(SpeedState::Low));
        assert_eq!(SpeedState::Low.faster(), Some(SpeedState::High));
        assert_eq!(SpeedState::High.faster(), None);
    }

    #[test]
    fn should_step_down_one_level_at_a_time() {
        assert_eq!(SpeedState::High.slower(), Some(SpeedState::Low));
        assert_eq!(SpeedState::Low.slower(), Some(SpeedState::Off));
        assert_eq!(SpeedState::Off.slower(), None);
    }

    #[test]
    fn should_display_upper_case_name() {
        assert_eq!(SpeedState::High.to_string(), "HIGH");
    }

    #[test]
    fn should_parse_name_case_insensitively() {
        assert_eq!(SpeedState::from_name("low"), Some(SpeedState::Low));
        assert_eq!(SpeedState::from_name("Medium"), None);
    }

    #[test]
    fn should_reject_unknown_code() {
        assert_eq!(SpeedState::from_code(2), Some(SpeedState::High));
        assert_eq!(SpeedState::from_code(3), None);
    }
}
