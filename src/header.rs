/// Inline style of the sticky header, a pure function of scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub padding: &'static str,
    pub background: &'static str,
}

impl HeaderStyle {
    pub const SCROLLED: Self = Self {
        padding: "5px 0",
        background: "rgba(15, 23, 42, 0.9)",
    };

    pub const TOP: Self = Self {
        padding: "0",
        background: "rgba(15, 23, 42, 0.7)",
    };

    pub fn for_scroll(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px {
            Self::SCROLLED
        } else {
            Self::TOP
        }
    }

    pub fn to_css(&self) -> String {
        format!("padding: {}; background: {};", self.padding, self.background)
    }
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self::TOP
    }
}
