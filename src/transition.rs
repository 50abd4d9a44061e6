//! Inline styles for the fade-and-rise transitions.

/// A fade-in paired with a vertical slide, interpolated by CSS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub offset_px: u32,
    pub duration_ms: u32,
}

/// Content blocks revealed on scroll.
pub const REVEAL: Transition = Transition {
    offset_px: 32,
    duration_ms: 700,
};

/// Hero copy animated in after first paint.
pub const ENTRANCE: Transition = Transition {
    offset_px: 40,
    duration_ms: 800,
};

impl Transition {
    pub fn style(&self, visible: bool, delay_ms: u32) -> String {
        let (opacity, transform) = if visible {
            (1, "translateY(0)".to_string())
        } else {
            (0, format!("translateY({}px)", self.offset_px))
        };
        format!(
            "opacity: {}; transform: {}; transition: opacity {d}ms ease {delay}ms, transform {d}ms ease {delay}ms;",
            opacity,
            transform,
            d = self.duration_ms,
            delay = delay_ms,
        )
    }
}

/// The "×" badge sitting between the two hero panels.
pub fn divider_style(loaded: bool, left: &str) -> String {
    let (opacity, scale) = if loaded { (1, 1) } else { (0, 0) };
    format!(
        "opacity: {}; left: {}; transform: translate(-50%, -50%) scale({}); \
         transition: opacity 500ms ease 600ms, transform 500ms ease 600ms, left 600ms cubic-bezier(0.4, 0, 0.2, 1);",
        opacity, left, scale
    )
}

/// Delay for the `index`-th item of a staggered list.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_block_rests_below_and_transparent() {
        let style = REVEAL.style(false, 0);
        assert!(style.starts_with("opacity: 0; transform: translateY(32px);"));
        assert!(style.contains("opacity 700ms ease 0ms"));
    }

    #[test]
    fn visible_block_settles_with_delay() {
        let style = REVEAL.style(true, 200);
        assert_eq!(
            style,
            "opacity: 1; transform: translateY(0); transition: opacity 700ms ease 200ms, transform 700ms ease 200ms;"
        );
    }

    #[test]
    fn entrance_uses_longer_travel() {
        assert!(ENTRANCE.style(false, 350).contains("translateY(40px)"));
        assert!(ENTRANCE.style(false, 350).contains("transform 800ms ease 350ms"));
    }

    #[test]
    fn stagger_is_exact() {
        let delays: Vec<u32> = (0..3).map(|i| stagger(i, 120)).collect();
        assert_eq!(delays, vec![0, 120, 240]);
    }

    #[test]
    fn divider_follows_hover_and_load() {
        let style = divider_style(true, "70%");
        assert!(style.contains("left: 70%"));
        assert!(style.contains("scale(1)"));
        assert!(divider_style(false, "50%").starts_with("opacity: 0;"));
    }
}
