use crate::artifacts::alignment::Side;
use tokio::sync::watch;

/// Last rendered pixel height reported by each panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelHeights {
    pub left: Option<u32>,
    pub right: Option<u32>,
}

impl PanelHeights {
    pub fn side(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Option<u32> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Height both panels should pad to so their lines stay level.
    pub fn tallest(&self) -> Option<u32> {
        self.left.max(self.right)
    }
}

/// Shares panel heights between two independently rendered panels.
///
/// Each panel reports its own height and subscribes to the combined view;
/// subscribers are only woken when a height actually changes.
#[derive(Debug)]
pub struct HeightCoordinator {
    sender: watch::Sender<PanelHeights>,
}

impl Default for HeightCoordinator {
    fn default() -> Self {
        HeightCoordinator::new()
    }
}

impl HeightCoordinator {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(PanelHeights::default());
        HeightCoordinator { sender }
    }

    pub fn report_height(&self, side: Side, px: u32) {
        self.sender.send_if_modified(|heights| {
            let slot = heights.side_mut(side);
            if *slot == Some(px) {
                return false;
            }
            *slot = Some(px);
            true
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<PanelHeights> {
        self.sender.subscribe()
    }

    pub fn heights(&self) -> PanelHeights {
        *self.sender.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn subscribers_see_reported_heights() {
        let coordinator = HeightCoordinator::new();
        let mut receiver = coordinator.subscribe();

        coordinator.report_height(Side::Left, 1_200);
        receiver.changed().await.unwrap();

        assert_eq!(receiver.borrow_and_update().side(Side::Left), Some(1_200));
        assert_eq!(coordinator.heights().right, None);
    }

    #[tokio::test]
    async fn unchanged_height_does_not_notify() {
        let coordinator = HeightCoordinator::new();
        coordinator.report_height(Side::Right, 800);
        let receiver = coordinator.subscribe();

        coordinator.report_height(Side::Right, 800);

        assert!(!receiver.has_changed().unwrap());
    }

    #[test]
    fn tallest_panel_wins() {
        let coordinator = HeightCoordinator::default();
        coordinator.report_height(Side::Left, 900);
        coordinator.report_height(Side::Right, 1_400);

        assert_eq!(coordinator.heights().tallest(), Some(1_400));
    }
}
