// Chart controller - owns the single live chart on a surface
use crate::application::view::{ChartId, ChartSurface};
use crate::domain::chart::ChartSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    pub id: ChartId,
    pub spec: ChartSpec,
}

pub struct ChartController {
    surface: Box<dyn ChartSurface>,
    live: Option<ChartHandle>,
}

impl ChartController {
    pub fn new(surface: Box<dyn ChartSurface>) -> Self {
        Self {
            surface,
            live: None,
        }
    }

    /// Replace the live chart. The previous chart is destroyed before the
    /// new one is created, so a failed create leaves the slot empty.
    pub fn render(&mut self, spec: ChartSpec) -> anyhow::Result<&ChartHandle> {
        self.clear();

        let id = self.surface.create(&spec)?;
        tracing::debug!("Created chart {:?} with {} series", id, spec.series.len());
        let handle: &ChartHandle = self.live.insert(ChartHandle { id, spec });
        Ok(handle)
    }

    /// Destroy the live chart, if any. Returns whether one was destroyed.
    pub fn clear(&mut self) -> bool {
        match self.live.take() {
            Some(handle) => {
                tracing::debug!("Destroying chart {:?}", handle.id);
                self.surface.destroy(handle.id);
                true
            }
            None => false,
        }
    }

    pub fn live(&self) -> Option<&ChartHandle> {
        self.live.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::RecordingSurface;
    use crate::domain::history::SensorHistory;
    use crate::domain::time_label::TimeLabeler;

    fn spec(date: &str) -> ChartSpec {
        let history = SensorHistory {
            timestamps: vec!["2024-03-01T10:00:00Z".into()],
            ir: vec![Some(1.0)],
            ultrasonic: vec![Some(2.0)],
            speed: vec![Some(3.0)],
        };
        ChartSpec::sensor_history(date, &history, &TimeLabeler::default())
    }

    #[test]
    fn test_render_replaces_previous_chart() {
        let surface = RecordingSurface::default();
        let mut controller = ChartController::new(Box::new(surface.clone()));

        let first = controller.render(spec("2024-03-01")).unwrap().id;
        let second = controller.render(spec("2024-03-02")).unwrap().id;

        assert_ne!(first, second);
        assert_eq!(surface.live_ids(), vec![second]);
        assert_eq!(surface.destroyed(), vec![first]);
        assert_eq!(controller.live().unwrap().spec.title, "Sensor Data for 2024-03-02");
    }

    #[test]
    fn test_clear() {
        let surface = RecordingSurface::default();
        let mut controller = ChartController::new(Box::new(surface.clone()));

        assert!(!controller.clear());
        controller.render(spec("2024-03-01")).unwrap();
        assert!(controller.clear());
        assert!(controller.live().is_none());
        assert!(surface.live_ids().is_empty());
    }

    #[test]
    fn test_failed_create_leaves_slot_empty() {
        let surface = RecordingSurface::default();
        let mut controller = ChartController::new(Box::new(surface.clone()));

        controller.render(spec("2024-03-01")).unwrap();
        surface.fail_next_create();

        assert!(controller.render(spec("2024-03-02")).is_err());
        assert!(controller.live().is_none());
        assert!(surface.live_ids().is_empty());
    }
}
