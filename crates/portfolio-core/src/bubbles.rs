//! Ambient bubble field for the animated background.
//!
//! The field owns population lifecycle only: an initial batch at mount,
//! one spawn per tick, and front-pruning once the collection grows past
//! its cap. Motion is purely presentational (a CSS keyframe loop driven
//! by each bubble's duration and delay), so nothing here interpolates.

use rand::Rng;

/// Bubbles created by [`BubbleField::initialize`].
pub const INITIAL_BUBBLES: usize = 30;

/// Milliseconds between spawn ticks.
pub const SPAWN_INTERVAL_MS: u64 = 2000;

/// Population cap; exceeding it triggers a prune.
pub const MAX_BUBBLES: usize = 50;

/// Population after a prune, keeping the newest bubbles.
pub const PRUNE_TO: usize = 40;

/// Color pairing for a bubble: fill plus glow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleTint {
    Blue,
    White,
}

impl BubbleTint {
    /// CSS fill color.
    pub fn fill(&self) -> &'static str {
        match self {
            BubbleTint::Blue => "rgba(0, 128, 255, 0.2)",
            BubbleTint::White => "rgba(255, 255, 255, 0.2)",
        }
    }

    /// CSS glow (box-shadow) color.
    pub fn glow(&self) -> &'static str {
        match self {
            BubbleTint::Blue => "rgba(0, 128, 255, 0.4)",
            BubbleTint::White => "rgba(255, 255, 255, 0.3)",
        }
    }
}

/// A single decorative bubble. Attributes are drawn once at creation and
/// never mutated; the id is a monotonic counter, so it doubles as
/// creation order.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub id: u64,
    pub size: f32,
    pub left_pct: f32,
    pub opacity: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
    pub tint: BubbleTint,
}

impl Bubble {
    fn sample(id: u64, rng: &mut impl Rng) -> Self {
        let is_blue = rng.random::<f32>() > 0.6;
        Self {
            id,
            size: rng.random_range(5.0..40.0),
            left_pct: rng.random_range(0.0..100.0),
            opacity: rng.random_range(0.1..0.3),
            duration_secs: rng.random_range(10.0..25.0),
            delay_secs: rng.random_range(0.0..15.0),
            tint: if is_blue {
                BubbleTint::Blue
            } else {
                BubbleTint::White
            },
        }
    }
}

/// Ordered collection of background bubbles, oldest first.
#[derive(Clone, Debug, Default)]
pub struct BubbleField {
    bubbles: Vec<Bubble>,
    next_id: u64,
}

impl BubbleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the initial batch. Called once when the background view
    /// mounts.
    pub fn initialize(&mut self, rng: &mut impl Rng) {
        self.bubbles.clear();
        for _ in 0..INITIAL_BUBBLES {
            self.spawn(rng);
        }
    }

    /// Appends one new bubble, then prunes from the front if the count
    /// exceeds [`MAX_BUBBLES`], retaining the newest [`PRUNE_TO`].
    /// The cap check runs post-append so the prune never lags a tick
    /// behind the spawn.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        self.spawn(rng);
        if self.bubbles.len() > MAX_BUBBLES {
            let excess = self.bubbles.len() - PRUNE_TO;
            self.bubbles.drain(..excess);
        }
    }

    /// Current bubbles in creation order.
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    fn spawn(&mut self, rng: &mut impl Rng) {
        let id = self.next_id;
        self.next_id += 1;
        self.bubbles.push(Bubble::sample(id, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_initialize_populates_batch() {
        let mut rng = rng();
        let mut field = BubbleField::new();
        assert!(field.is_empty());
        field.initialize(&mut rng);
        assert_eq!(field.len(), INITIAL_BUBBLES);
    }

    #[test]
    fn test_tick_appends_one() {
        let mut rng = rng();
        let mut field = BubbleField::new();
        field.initialize(&mut rng);
        for n in 1..=10 {
            field.tick(&mut rng);
            assert_eq!(field.len(), INITIAL_BUBBLES + n);
        }
    }

    #[test]
    fn test_prune_keeps_newest_forty() {
        let mut rng = rng();
        let mut field = BubbleField::new();
        field.initialize(&mut rng);

        // 30 + 20 ticks = 50: still under the cap.
        for _ in 0..20 {
            field.tick(&mut rng);
        }
        assert_eq!(field.len(), MAX_BUBBLES);

        // The 21st tick would reach 51, triggering a prune to 40.
        field.tick(&mut rng);
        assert_eq!(field.len(), PRUNE_TO);

        // Retained bubbles are the last 40 created, in insertion order:
        // ids 11..=50 out of the 51 ever spawned.
        let ids: Vec<u64> = field.bubbles().iter().map(|b| b.id).collect();
        let expected: Vec<u64> = (11..=50).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_prune_discards_oldest_first() {
        let mut rng = rng();
        let mut field = BubbleField::new();
        field.initialize(&mut rng);
        for _ in 0..40 {
            field.tick(&mut rng);
        }
        // Every surviving bubble is newer than every discarded one: the
        // survivors form a contiguous run ending at the newest spawn.
        let last = field.bubbles().last().unwrap().id;
        let ids: Vec<u64> = field.bubbles().iter().map(|b| b.id).collect();
        let expected: Vec<u64> = (last + 1 - field.len() as u64..=last).collect();
        assert_eq!(ids, expected);
        assert!(field.len() <= MAX_BUBBLES);
    }

    #[test]
    fn test_attributes_within_ranges() {
        let mut rng = rng();
        let mut field = BubbleField::new();
        field.initialize(&mut rng);
        for _ in 0..50 {
            field.tick(&mut rng);
        }
        for bubble in field.bubbles() {
            assert!((5.0..40.0).contains(&bubble.size));
            assert!((0.0..100.0).contains(&bubble.left_pct));
            assert!((0.1..0.3).contains(&bubble.opacity));
            assert!((10.0..25.0).contains(&bubble.duration_secs));
            assert!((0.0..15.0).contains(&bubble.delay_secs));
        }
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut rng = rng();
        let mut field = BubbleField::new();
        field.initialize(&mut rng);
        for _ in 0..30 {
            field.tick(&mut rng);
        }
        let ids: Vec<u64> = field.bubbles().iter().map(|b| b.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }
}
