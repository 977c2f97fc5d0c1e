//! Collapse/expand control for panels of a split container.
//!
//! A [`PanelCollapseController`] sits behind the caret in a panel header.
//! Toggling it flips the panel between expanded and collapsed, recomputes the
//! relative sizes of every sibling, syncs content and handle visibility and
//! swaps the caret icon. The container is handed in explicitly on every
//! toggle.

use crate::layout::split_container::{
    PanelId, SplitContainer, COLLAPSED_RELATIVE_SIZE, EXPANDED_RELATIVE_SIZE,
};

/// Collapse state of a single panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Expanded,
    Collapsed,
}

/// Icon shown by the caret toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretIcon {
    /// Panel is expanded
    Down,
    /// Panel is collapsed
    Left,
}

impl CaretIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            CaretIcon::Down => "▼",
            CaretIcon::Left => "◀",
        }
    }
}

/// How relative sizes are recomputed after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedistributionPolicy {
    /// Collapsed panels get [`COLLAPSED_RELATIVE_SIZE`], expanded panels get
    /// [`EXPANDED_RELATIVE_SIZE`], regardless of their previous sizes.
    #[default]
    TwoTier,
    /// Collapsed panels get [`COLLAPSED_RELATIVE_SIZE`]; the rest of the unit
    /// extent is shared among expanded panels in proportion to their current
    /// shares. A panel that was just expanded receives the mean share of the
    /// other expanded panels.
    Proportional,
}

impl RedistributionPolicy {
    /// Computes the sizes for every panel after the panel at `toggled` has
    /// changed state. Collapsed flags must already be updated.
    fn compute(self, container: &SplitContainer, toggled: usize) -> Vec<f32> {
        match self {
            RedistributionPolicy::TwoTier => container
                .panels()
                .iter()
                .map(|p| {
                    if p.is_collapsed() {
                        COLLAPSED_RELATIVE_SIZE
                    } else {
                        EXPANDED_RELATIVE_SIZE
                    }
                })
                .collect(),
            RedistributionPolicy::Proportional => proportional_sizes(container, toggled),
        }
    }
}

fn proportional_sizes(container: &SplitContainer, toggled: usize) -> Vec<f32> {
    let panels = container.panels();
    let shares = container.relative_sizes();

    let others: Vec<f32> = panels
        .iter()
        .zip(&shares)
        .enumerate()
        .filter(|(i, (p, _))| !p.is_collapsed() && *i != toggled)
        .map(|(_, (_, share))| *share)
        .collect();
    let mean = if others.is_empty() {
        1.0
    } else {
        others.iter().sum::<f32>() / others.len() as f32
    };

    let weights: Vec<f32> = panels
        .iter()
        .zip(&shares)
        .enumerate()
        .map(|(i, (p, share))| match (p.is_collapsed(), i == toggled) {
            (true, _) => 0.0,
            (false, true) => mean,
            (false, false) => *share,
        })
        .collect();

    let collapsed = panels.iter().filter(|p| p.is_collapsed()).count();
    let free = (1.0 - collapsed as f32 * COLLAPSED_RELATIVE_SIZE).max(COLLAPSED_RELATIVE_SIZE);
    let weight_total: f32 = weights.iter().sum();

    panels
        .iter()
        .zip(&weights)
        .map(|(p, w)| {
            if p.is_collapsed() {
                COLLAPSED_RELATIVE_SIZE
            } else if weight_total > 0.0 {
                free * w / weight_total
            } else {
                free / (panels.len() - collapsed).max(1) as f32
            }
        })
        .collect()
}

/// Caret toggle bound to one panel of a split container.
#[derive(Debug, Clone)]
pub struct PanelCollapseController {
    panel: PanelId,
    state: PanelState,
    policy: RedistributionPolicy,
}

impl PanelCollapseController {
    /// Creates an expanded controller using the two-tier size policy.
    pub fn new(panel: PanelId) -> Self {
        Self::with_policy(panel, RedistributionPolicy::TwoTier)
    }

    pub fn with_policy(panel: PanelId, policy: RedistributionPolicy) -> Self {
        Self {
            panel,
            state: PanelState::Expanded,
            policy,
        }
    }

    pub fn panel(&self) -> PanelId {
        self.panel
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn policy(&self) -> RedistributionPolicy {
        self.policy
    }

    pub fn is_collapsed(&self) -> bool {
        self.state == PanelState::Collapsed
    }

    /// Icon matching the current state.
    pub fn icon(&self) -> CaretIcon {
        match self.state {
            PanelState::Expanded => CaretIcon::Down,
            PanelState::Collapsed => CaretIcon::Left,
        }
    }

    /// Flips the panel between expanded and collapsed.
    ///
    /// Collapsing the last expanded panel of the container is refused, as is
    /// toggling a panel the container does not hold. Returns whether the
    /// state changed.
    pub fn toggle(&mut self, container: &mut SplitContainer) -> bool {
        let Some(index) = container.index_of(self.panel) else {
            log::debug!("panel {:?} is not part of the split container", self.panel);
            return false;
        };

        let collapsing = !container.panels()[index].is_collapsed();
        if collapsing && container.visible_count() <= 1 {
            log::debug!("refusing to collapse the last visible panel {:?}", self.panel);
            return false;
        }

        container.set_collapsed(index, collapsing);
        let sizes = self.policy.compute(container, index);
        container.sync_visibility();
        container.set_relative_sizes(&sizes);

        self.state = if collapsing {
            PanelState::Collapsed
        } else {
            PanelState::Expanded
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(n: usize) -> (SplitContainer, Vec<PanelCollapseController>) {
        let mut container = SplitContainer::new();
        let controllers = (0..n)
            .map(|i| PanelCollapseController::new(container.add_panel(format!("p{}", i))))
            .collect();
        (container, controllers)
    }

    #[test]
    fn test_initial_state_is_expanded() {
        let (_, controllers) = setup(2);
        assert_eq!(controllers[0].state(), PanelState::Expanded);
        assert_eq!(controllers[0].icon(), CaretIcon::Down);
    }

    #[test]
    fn test_collapse_assigns_two_tier_sizes() {
        let (mut container, mut controllers) = setup(3);
        assert!(controllers[1].toggle(&mut container));

        assert_eq!(
            container.raw_sizes(),
            vec![EXPANDED_RELATIVE_SIZE, COLLAPSED_RELATIVE_SIZE, EXPANDED_RELATIVE_SIZE]
        );
        assert_eq!(controllers[1].icon(), CaretIcon::Left);
        assert!(!container.panels()[1].is_content_visible());
        assert!(container.panels()[1].is_handle_hidden());
        assert!(container.panels()[0].is_content_visible());
    }

    #[test]
    fn test_parity_over_many_toggles() {
        let (mut container, mut controllers) = setup(2);
        for n in 1..=7 {
            controllers[0].toggle(&mut container);
            assert_eq!(controllers[0].is_collapsed(), n % 2 == 1);
            assert_eq!(container.is_collapsed(controllers[0].panel()), Some(n % 2 == 1));
        }
    }

    #[test]
    fn test_last_visible_panel_stays_open() {
        let (mut container, mut controllers) = setup(2);
        assert!(controllers[0].toggle(&mut container));
        let before = container.raw_sizes();

        assert!(!controllers[1].toggle(&mut container));
        assert_eq!(controllers[1].state(), PanelState::Expanded);
        assert_eq!(container.visible_count(), 1);
        assert_eq!(container.raw_sizes(), before);
    }

    #[test]
    fn test_collapsed_panel_can_always_expand() {
        let (mut container, mut controllers) = setup(2);
        controllers[0].toggle(&mut container);
        assert!(controllers[0].toggle(&mut container));
        assert_eq!(container.visible_count(), 2);
        assert!(container.panels().iter().all(|p| p.is_content_visible() && !p.is_handle_hidden()));
    }

    #[test]
    fn test_unknown_panel_is_noop() {
        let (mut container, _) = setup(2);
        let mut stray = PanelCollapseController::new(PanelId(99));
        assert!(!stray.toggle(&mut container));
        assert_eq!(stray.state(), PanelState::Expanded);
    }

    #[test]
    fn test_proportional_policy_keeps_ratios() {
        let mut container = SplitContainer::new();
        let ids: Vec<_> = (0..3).map(|i| container.add_panel(format!("p{}", i))).collect();
        container.set_relative_sizes(&[0.5, 0.3, 0.2]);

        let mut middle = PanelCollapseController::with_policy(ids[1], RedistributionPolicy::Proportional);
        assert!(middle.toggle(&mut container));

        let sizes = container.raw_sizes();
        assert!((sizes[1] - COLLAPSED_RELATIVE_SIZE).abs() < 1e-6);
        assert!((sizes[0] / sizes[2] - 2.5).abs() < 1e-4);
        assert!((sizes.iter().sum::<f32>() - 1.0).abs() < 1e-5);

        assert!(middle.toggle(&mut container));
        let sizes = container.raw_sizes();
        assert!(sizes.iter().all(|s| *s > COLLAPSED_RELATIVE_SIZE));
        assert!((sizes.iter().sum::<f32>() - 1.0).abs() < 1e-5);
    }
}
