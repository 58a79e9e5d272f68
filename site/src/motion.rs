//! Pointer and layout math for the decorative effects. Every function here
//! is a pure mapping to a CSS value; the view owns no state beyond what it
//! re-derives from the latest pointer event.

/// Client-space bounding box of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// ── Magnetic links ──────────────────────────────────────────────────────

const MAGNETIC_PULL: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn css(&self) -> String {
        format!("transform: translate({:.2}px, {:.2}px)", self.x, self.y)
    }
}

/// Nudge toward the pointer by a fraction of its distance from the centre.
pub fn magnetic_offset(rect: Rect, pointer_x: f64, pointer_y: f64) -> Offset {
    let (cx, cy) = rect.center();
    Offset {
        x: (pointer_x - cx) * MAGNETIC_PULL,
        y: (pointer_y - cy) * MAGNETIC_PULL,
    }
}

// ── Tilt cards ───────────────────────────────────────────────────────────

const TILT_DEGREES: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn css(&self) -> String {
        format!(
            "transform: perspective(900px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

pub fn tilt(rect: Rect, pointer_x: f64, pointer_y: f64) -> Tilt {
    if rect.is_empty() {
        return Tilt::default();
    }
    let px = (pointer_x - rect.left) / rect.width;
    let py = (pointer_y - rect.top) / rect.height;
    Tilt {
        rotate_x: (py - 0.5) * -TILT_DEGREES,
        rotate_y: (px - 0.5) * TILT_DEGREES,
    }
}

// ── Background layout ────────────────────────────────────────────────────

pub const ORB_COUNT: usize = 8;
pub const SPARKLE_COUNT: usize = 60;

/// A blurred orb drifting in place. Positions are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub top: f64,
    pub left: f64,
    pub period_secs: f64,
}

impl Orb {
    pub fn css(&self) -> String {
        format!(
            "top: {}%; left: {}%; animation-duration: {}s",
            self.top, self.left, self.period_secs
        )
    }
}

pub fn orbs() -> Vec<Orb> {
    (0..ORB_COUNT)
        .map(|i| Orb {
            top: ((i * 13) % 90) as f64,
            left: ((i * 19) % 90) as f64,
            period_secs: 12.0 + i as f64,
        })
        .collect()
}

/// A twinkling dot. Positions are percentages, size in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub period_secs: f64,
    pub delay_secs: f64,
}

impl Sparkle {
    pub fn css(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s",
            self.x, self.y, self.size, self.size, self.period_secs, self.delay_secs
        )
    }
}

/// Scattered but stable across renders: each value is hashed from the
/// sparkle's index rather than drawn from a live RNG.
pub fn sparkles() -> Vec<Sparkle> {
    (0..SPARKLE_COUNT as u64)
        .map(|i| Sparkle {
            x: unit(i * 4) * 100.0,
            y: unit(i * 4 + 1) * 100.0,
            size: unit(i * 4 + 2) * 2.0 + 0.5,
            period_secs: unit(i * 4 + 3) * 6.0 + 3.0,
            delay_secs: i as f64 * 0.13,
        })
        .collect()
}

/// splitmix64 finalizer mapped to [0, 1).
fn unit(seed: u64) -> f64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}
