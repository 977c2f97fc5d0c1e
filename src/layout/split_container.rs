//! Split container state.
//!
//! A split container holds an ordered set of panels separated by splitter
//! handles. Each panel owns a relative size (a stretch value; the normalized
//! shares always sum to 1.0), a collapsed flag, the visibility of its content
//! region and the visibility of the handle that follows it.
//!
//! The collapsed flag is only written by
//! [`PanelCollapseController`](crate::layout::PanelCollapseController); the
//! container reads it when sizes are recomputed.

/// Relative size given to a collapsed panel.
///
/// Small but non-zero so the panel header stays on screen.
pub const COLLAPSED_RELATIVE_SIZE: f32 = 0.008;

/// Relative size given to an expanded panel by the two-tier policy.
pub const EXPANDED_RELATIVE_SIZE: f32 = 0.1;

/// Identifier of a panel inside a [`SplitContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u32);

/// One panel entry of a split container.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSlot {
    id: PanelId,
    title: String,
    /// Raw stretch value, normalized against the sum of all slots
    relative_size: f32,
    collapsed: bool,
    content_visible: bool,
    /// Visual state of the splitter handle after this panel
    handle_hidden: bool,
}

impl PanelSlot {
    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw (un-normalized) relative size last applied to this panel.
    pub fn relative_size(&self) -> f32 {
        self.relative_size
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Whether the content region below the header is shown.
    pub fn is_content_visible(&self) -> bool {
        self.content_visible
    }

    /// Whether the splitter handle following this panel is hidden.
    pub fn is_handle_hidden(&self) -> bool {
        self.handle_hidden
    }
}

/// Ordered set of sibling panels sharing one axis of space.
#[derive(Debug, Clone, Default)]
pub struct SplitContainer {
    panels: Vec<PanelSlot>,
    next_id: u32,
}

impl SplitContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            panels: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends an expanded panel and returns its identifier.
    ///
    /// New panels start with [`EXPANDED_RELATIVE_SIZE`], so a freshly built
    /// container shares its extent equally.
    pub fn add_panel(&mut self, title: impl Into<String>) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        self.panels.push(PanelSlot {
            id,
            title: title.into(),
            relative_size: EXPANDED_RELATIVE_SIZE,
            collapsed: false,
            content_visible: true,
            handle_hidden: false,
        });
        id
    }

    // ===== Queries =====

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panels(&self) -> &[PanelSlot] {
        &self.panels
    }

    /// Returns the position of a panel in the container, if present.
    pub fn index_of(&self, id: PanelId) -> Option<usize> {
        self.panels.iter().position(|p| p.id == id)
    }

    pub fn panel(&self, id: PanelId) -> Option<&PanelSlot> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Returns the collapsed flag of a panel, or `None` for an unknown id.
    pub fn is_collapsed(&self, id: PanelId) -> Option<bool> {
        self.panel(id).map(PanelSlot::is_collapsed)
    }

    /// Number of panels that are not collapsed.
    pub fn visible_count(&self) -> usize {
        self.panels.iter().filter(|p| !p.collapsed).count()
    }

    /// Raw relative sizes in panel order, as last applied.
    pub fn raw_sizes(&self) -> Vec<f32> {
        self.panels.iter().map(|p| p.relative_size).collect()
    }

    /// Normalized relative sizes in panel order. Always sums to 1.0 for a
    /// non-empty container.
    pub fn relative_sizes(&self) -> Vec<f32> {
        let total: f32 = self.panels.iter().map(|p| p.relative_size).sum();
        if total <= 0.0 {
            let share = 1.0 / self.panels.len().max(1) as f32;
            return vec![share; self.panels.len()];
        }
        self.panels.iter().map(|p| p.relative_size / total).collect()
    }

    /// Splits `total_extent` among the panels according to their shares.
    pub fn extents(&self, total_extent: f32) -> Vec<f32> {
        self.relative_sizes()
            .into_iter()
            .map(|share| share * total_extent.max(0.0))
            .collect()
    }

    // ===== Mutations =====

    /// Applies a full set of relative sizes in one update.
    ///
    /// The update is rejected (and nothing changes) unless there is exactly
    /// one finite, non-negative value per panel and their sum is positive.
    pub fn set_relative_sizes(&mut self, sizes: &[f32]) -> bool {
        if sizes.len() != self.panels.len() {
            log::debug!(
                "ignoring relative sizes: expected {} values, got {}",
                self.panels.len(),
                sizes.len()
            );
            return false;
        }
        if sizes.iter().any(|s| !s.is_finite() || *s < 0.0) || sizes.iter().sum::<f32>() <= 0.0 {
            log::debug!("ignoring invalid relative sizes {:?}", sizes);
            return false;
        }
        for (panel, size) in self.panels.iter_mut().zip(sizes) {
            panel.relative_size = *size;
        }
        true
    }

    /// Moves the splitter handle after panel `index` by `delta_fraction` of
    /// the container extent.
    ///
    /// Space is borrowed between the panel and its right/lower neighbour so
    /// their combined share is unchanged. Hidden handles, collapsed
    /// neighbours and the trailing handle are not draggable.
    pub fn drag_handle(&mut self, index: usize, delta_fraction: f32) -> bool {
        let next = index + 1;
        if next >= self.panels.len() || !delta_fraction.is_finite() {
            return false;
        }
        if self.panels[index].handle_hidden
            || self.panels[index].collapsed
            || self.panels[next].collapsed
        {
            return false;
        }

        let mut sizes = self.relative_sizes();
        let pair_total = sizes[index] + sizes[next];
        let current = sizes[index];
        let target = (current + delta_fraction)
            .max(COLLAPSED_RELATIVE_SIZE)
            .min(pair_total - COLLAPSED_RELATIVE_SIZE);
        if target < COLLAPSED_RELATIVE_SIZE || (target - current).abs() <= f32::EPSILON {
            return false;
        }

        sizes[index] = target;
        sizes[next] = pair_total - target;
        self.set_relative_sizes(&sizes)
    }

    pub(crate) fn set_collapsed(&mut self, index: usize, collapsed: bool) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.collapsed = collapsed;
        }
    }

    /// Brings content and handle visibility in line with the collapsed flags.
    pub(crate) fn sync_visibility(&mut self) {
        for panel in &mut self.panels {
            panel.content_visible = !panel.collapsed;
            panel.handle_hidden = panel.collapsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(n: usize) -> SplitContainer {
        let mut c = SplitContainer::new();
        for i in 0..n {
            c.add_panel(format!("panel {}", i));
        }
        c
    }

    #[test]
    fn test_new_panels_share_equally() {
        let c = container(3);
        for share in c.relative_sizes() {
            assert!((share - 1.0 / 3.0).abs() < 1e-6);
        }
        assert_eq!(c.visible_count(), 3);
    }

    #[test]
    fn test_set_relative_sizes_rejects_bad_input() {
        let mut c = container(2);
        assert!(!c.set_relative_sizes(&[0.5]));
        assert!(!c.set_relative_sizes(&[0.5, f32::NAN]));
        assert!(!c.set_relative_sizes(&[-1.0, 2.0]));
        assert!(!c.set_relative_sizes(&[0.0, 0.0]));
        assert_eq!(c.raw_sizes(), vec![EXPANDED_RELATIVE_SIZE; 2]);

        assert!(c.set_relative_sizes(&[3.0, 1.0]));
        let shares = c.relative_sizes();
        assert!((shares[0] - 0.75).abs() < 1e-6);
        assert!((shares[1] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_extents_follow_shares() {
        let mut c = container(2);
        c.set_relative_sizes(&[1.0, 3.0]);
        assert_eq!(c.extents(400.0), vec![100.0, 300.0]);
    }

    #[test]
    fn test_drag_handle_conserves_pair() {
        let mut c = container(3);
        assert!(c.drag_handle(0, 0.1));
        let shares = c.relative_sizes();
        assert!((shares[0] - (1.0 / 3.0 + 0.1)).abs() < 1e-5);
        assert!((shares[1] - (1.0 / 3.0 - 0.1)).abs() < 1e-5);
        assert!((shares[2] - 1.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_drag_handle_clamps_to_minimum() {
        let mut c = container(2);
        assert!(c.drag_handle(0, 5.0));
        let shares = c.relative_sizes();
        assert!((shares[1] - COLLAPSED_RELATIVE_SIZE).abs() < 1e-5);
    }

    #[test]
    fn test_drag_trailing_or_hidden_handle_is_refused() {
        let mut c = container(2);
        assert!(!c.drag_handle(1, 0.1));

        c.set_collapsed(0, true);
        c.sync_visibility();
        assert!(c.panels()[0].is_handle_hidden());
        assert!(!c.drag_handle(0, 0.1));
    }
}
