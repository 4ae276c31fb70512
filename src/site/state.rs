use super::config::TrackerConfig;
use super::glow::GlowTracker;
use super::sections::{active_section_for, ActiveSection, Section};

/// All mutable UI state of the page, owned by the mounted page and updated
/// only from event handlers.
#[derive(Clone, Debug)]
pub struct PageState {
    pub config: TrackerConfig,
    pub active: ActiveSection,
    pub scroll_y: f64,
    pub glow: GlowTracker,
    pub menu_open: bool,
}

impl PageState {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            active: ActiveSection::default(),
            scroll_y: 0.0,
            glow: GlowTracker::new(),
            menu_open: false,
        }
    }

    /// Recompute the active section from scratch for `scroll_y`.
    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        top_of: impl FnMut(Section) -> Option<f64>,
    ) -> &ActiveSection {
        let section = active_section_for(scroll_y, self.config.section_lookahead_px, top_of);
        self.active = ActiveSection::Section(section);
        self.scroll_y = scroll_y;
        &self.active
    }

    #[inline]
    pub fn navbar_solid(&self) -> bool {
        self.scroll_y > self.config.navbar_solid_threshold_px
    }

    /// Optimistic navigation: marks `name` active and closes the menu. Returns
    /// the element id to scroll to.
    pub fn navigate(&mut self, name: &str) -> String {
        self.active = ActiveSection::from_name(name);
        self.menu_open = false;
        self.active.id().to_string()
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
