//! Cosmetic timed effects: the hero typing reveal and floating shape jitter.

use std::time::Duration;

use rand::Rng;

/// Max shape displacement in px on either axis
const JITTER_OFFSET_PX: f64 = 10.0;
/// Max shape rotation in degrees either way
const JITTER_ROTATION_DEG: f64 = 10.0;
const JITTER_BASE_INTERVAL_MS: u64 = 3000;
const JITTER_STEP_INTERVAL_MS: u64 = 1000;

/// Frames of the typing reveal.
///
/// Each item is the delay to wait and the text to show after it: the first
/// character after `start_delay`, then one more every `char_delay`.
#[derive(Debug, Clone)]
pub struct TypingFrames {
    chars: Vec<char>,
    shown: usize,
    start_delay: Duration,
    char_delay: Duration,
}

impl TypingFrames {
    pub fn new(text: &str, start_delay: Duration, char_delay: Duration) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            start_delay,
            char_delay,
        }
    }
}

impl Iterator for TypingFrames {
    type Item = (Duration, String);

    fn next(&mut self) -> Option<Self::Item> {
        if self.shown >= self.chars.len() {
            return None;
        }
        let delay = if self.shown == 0 {
            self.start_delay
        } else {
            self.char_delay
        };
        self.shown += 1;
        Some((delay, self.chars[..self.shown].iter().collect()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.chars.len() - self.shown;
        (left, Some(left))
    }
}

impl ExactSizeIterator for TypingFrames {}

/// Random displacement of one floating shape
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeJitter {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl ShapeJitter {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(-JITTER_OFFSET_PX..=JITTER_OFFSET_PX),
            y: rng.random_range(-JITTER_OFFSET_PX..=JITTER_OFFSET_PX),
            rotation: rng.random_range(-JITTER_ROTATION_DEG..=JITTER_ROTATION_DEG),
        }
    }

    /// How often shape `index` moves; later shapes move more slowly
    pub fn interval(index: usize) -> Duration {
        Duration::from_millis(JITTER_BASE_INTERVAL_MS + index as u64 * JITTER_STEP_INTERVAL_MS)
    }

    /// CSS `transform` value
    pub fn transform(&self) -> String {
        format!(
            "translate({:.1}px, {:.1}px) rotate({:.1}deg)",
            self.x, self.y, self.rotation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_typing_frames() {
        let frames: Vec<_> = TypingFrames::new(
            "Riwa",
            Duration::from_millis(1000),
            Duration::from_millis(150),
        )
        .collect();

        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], (Duration::from_millis(1000), "R".to_string()));
        assert_eq!(frames[1], (Duration::from_millis(150), "Ri".to_string()));
        assert_eq!(frames[3].1, "Riwa");
    }

    #[test]
    fn test_typing_multibyte() {
        let last = TypingFrames::new("né→", Duration::ZERO, Duration::ZERO)
            .last()
            .unwrap();
        assert_eq!(last.1, "né→");
    }

    #[test]
    fn test_typing_empty_text() {
        let mut frames = TypingFrames::new("", Duration::ZERO, Duration::ZERO);
        assert_eq!(frames.len(), 0);
        assert!(frames.next().is_none());
    }

    #[test]
    fn test_jitter_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let j = ShapeJitter::sample(&mut rng);
            assert!(j.x.abs() <= 10.0);
            assert!(j.y.abs() <= 10.0);
            assert!(j.rotation.abs() <= 10.0);
        }
    }

    #[test]
    fn test_jitter_interval() {
        assert_eq!(ShapeJitter::interval(0), Duration::from_millis(3000));
        assert_eq!(ShapeJitter::interval(2), Duration::from_millis(5000));
    }

    #[test]
    fn test_jitter_transform() {
        let j = ShapeJitter {
            x: 1.5,
            y: -3.0,
            rotation: 4.0,
        };
        assert_eq!(j.transform(), "translate(1.5px, -3.0px) rotate(4.0deg)");
    }
}
