//! Project card interaction.

/// Divisor turning pointer offset (px) into tilt degrees
const TILT_DAMPING: f64 = 15.0;

/// What a click on a project card landed on
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardTarget {
    /// Anywhere on the card that is not an outbound link
    Body,
    /// An outbound link nested in the card; it navigates on its own
    Link,
}

/// Project id a card click should open, if any
pub fn activation_target(project_id: Option<&str>, target: CardTarget) -> Option<&str> {
    match target {
        CardTarget::Link => None,
        CardTarget::Body => project_id.filter(|id| !id.is_empty()),
    }
}

/// 3D tilt applied to a card under the pointer
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at (`x`, `y`) inside a card of `width` x `height`
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            rotate_x: (y - height / 2.0) / TILT_DAMPING,
            rotate_y: (width / 2.0 - x) / TILT_DAMPING,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    /// CSS `transform` value
    pub fn transform(&self) -> String {
        if self.is_flat() {
            return "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)".to_string();
        }
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ(10px)",
            self.rotate_x, self.rotate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_click_opens_project() {
        assert_eq!(activation_target(Some("pacman"), CardTarget::Body), Some("pacman"));
    }

    #[test]
    fn test_link_click_does_not_open() {
        assert_eq!(activation_target(Some("pacman"), CardTarget::Link), None);
    }

    #[test]
    fn test_card_without_id() {
        assert_eq!(activation_target(None, CardTarget::Body), None);
        assert_eq!(activation_target(Some(""), CardTarget::Body), None);
    }

    #[test]
    fn test_tilt_centered_is_flat() {
        let tilt = Tilt::from_pointer(150.0, 100.0, 300.0, 200.0);
        assert!(tilt.is_flat());
        assert!(tilt.transform().ends_with("translateZ(0)"));
    }

    #[test]
    fn test_tilt_corner() {
        let tilt = Tilt::from_pointer(0.0, 0.0, 300.0, 150.0);
        assert_eq!(tilt.rotate_x, -5.0);
        assert_eq!(tilt.rotate_y, 10.0);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(-5.00deg) rotateY(10.00deg) translateZ(10px)"
        );
    }
}
