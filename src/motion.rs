//! Scroll reveal presets. Components render these as CSS custom properties and
//! the stylesheet does the actual transition once an element becomes visible.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    /// Starting offset in px; the element slides from here to its resting place.
    pub x: i32,
    pub y: i32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Extra delay per item index for lists.
    pub stagger_ms: u32,
}

impl Motion {
    const fn slide_y(y: i32, duration_ms: u32) -> Self {
        Self {
            x: 0,
            y,
            duration_ms,
            delay_ms: 0,
            stagger_ms: 0,
        }
    }

    const fn slide_x(x: i32, duration_ms: u32) -> Self {
        Self {
            x,
            y: 0,
            duration_ms,
            delay_ms: 0,
            stagger_ms: 0,
        }
    }

    const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    const fn staggered(self, stagger_ms: u32) -> Self {
        Self { stagger_ms, ..self }
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_ms
            .saturating_add(self.stagger_ms.saturating_mul(index))
    }

    pub fn style(&self, index: usize) -> String {
        format!(
            "--reveal-x: {}px; --reveal-y: {}px; --reveal-duration: {}ms; --reveal-delay: {}ms;",
            self.x,
            self.y,
            self.duration_ms,
            self.delay_for(index)
        )
    }
}

pub const HERO_TEXT: Motion = Motion::slide_x(-50, 1000);
pub const HERO_IMAGE: Motion = Motion::slide_x(50, 1000).delayed(150);
pub const SECTION: Motion = Motion::slide_y(60, 1000);
pub const EXPERIENCE_CARD: Motion = Motion::slide_y(50, 800).staggered(150);
pub const PROJECT_CARD: Motion = Motion::slide_y(20, 350);
pub const TECH_ITEM: Motion = Motion::slide_y(18, 350).staggered(40);
pub const CONTACT_CARD: Motion = Motion::slide_y(20, 350).staggered(80);

/// Timeline entries come in from alternating sides.
pub fn timeline_entry(index: usize) -> Motion {
    if index % 2 == 0 {
        Motion::slide_x(-100, 800)
    } else {
        Motion::slide_x(100, 800)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger() {
        assert_eq!(EXPERIENCE_CARD.delay_for(0), 0);
        assert_eq!(EXPERIENCE_CARD.delay_for(3), 450);
        assert_eq!(HERO_IMAGE.delay_for(0), 150);
        assert_eq!(HERO_IMAGE.delay_for(5), 150);
        assert_eq!(TECH_ITEM.delay_for(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_style() {
        assert_eq!(
            TECH_ITEM.style(2),
            "--reveal-x: 0px; --reveal-y: 18px; --reveal-duration: 350ms; --reveal-delay: 80ms;"
        );
    }

    #[test]
    fn test_timeline_alternates() {
        assert_eq!(timeline_entry(0).x, -100);
        assert_eq!(timeline_entry(1).x, 100);
        assert_eq!(timeline_entry(2), timeline_entry(0));
    }
}
