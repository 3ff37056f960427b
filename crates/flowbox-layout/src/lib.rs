// crates/flowbox-layout/src/lib.rs

use flowbox_core::{DisplayMetrics, EdgeInsets, FlowChild, FlowError, Rect, Result};
use glam::IVec2;
use serde::Serialize;
use tracing::debug;

pub mod constraints;
pub mod flow;

pub use constraints::*;
pub use flow::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub index: usize,
    pub rect: Rect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutResult {
    pub placements: Vec<Placement>,
}

impl LayoutResult {
    pub fn rect_of(&self, index: usize) -> Option<Rect> {
        self.placements
            .iter()
            .find(|placement| placement.index == index)
            .map(|placement| placement.rect)
    }

    pub fn positions(&self) -> impl Iterator<Item = (usize, IVec2)> + '_ {
        self.placements.iter().map(|placement| (placement.index, placement.rect.origin()))
    }

    /// Box around every placed child, if any.
    pub fn bounds(&self) -> Option<Rect> {
        self.placements
            .iter()
            .map(|placement| placement.rect)
            .reduce(|acc, rect| acc.union(&rect))
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Two-phase container layout. `layout` only sees what `measure` returned.
pub trait LayoutEngine {
    fn measure<C: FlowChild>(&self, constraints: ConstraintBox, children: &mut [C]) -> Measurement;

    fn layout(&self, measurement: &Measurement, frame: Rect) -> LayoutResult;
}

#[derive(Debug, Clone)]
pub struct FlowLayoutEngine {
    config: FlowConfig,
    spacing: FlowSpacing,
    debug: bool,
}

impl FlowLayoutEngine {
    /// Resolves the configured dp spacing against `metrics` once, up front.
    pub fn new(config: FlowConfig, metrics: &DisplayMetrics) -> Result<Self> {
        let spacing = config.spacing(metrics)?;
        Ok(Self { config, spacing, debug: false })
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.config.padding = padding;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn padding(&self) -> EdgeInsets {
        self.config.padding
    }

    pub fn spacing(&self) -> FlowSpacing {
        self.spacing
    }

    /// Hands each placement to its child.
    ///
    /// Fails without placing anything if the children no longer match the
    /// set `measurement` was taken from.
    pub fn commit<C: FlowChild>(
        &self,
        measurement: &Measurement,
        result: &LayoutResult,
        children: &mut [C],
    ) -> Result<()> {
        let current: Vec<bool> = children.iter().map(|child| child.visibility().takes_space()).collect();
        if current != measurement.laid_out {
            return Err(FlowError::StaleMeasurement {
                measured: measurement.item_count(),
                current: current.iter().filter(|&&laid_out| laid_out).count(),
            });
        }

        if let Some(placement) = result.placements.iter().find(|p| p.index >= children.len()) {
            return Err(FlowError::ChildOutOfRange {
                index: placement.index,
                len: children.len(),
            });
        }

        for placement in &result.placements {
            children[placement.index].place(placement.rect);
        }

        Ok(())
    }

    /// Measures, places into a frame of the measured size and commits.
    pub fn measure_and_layout<C: FlowChild>(
        &self,
        constraints: ConstraintBox,
        children: &mut [C],
    ) -> Result<(Measurement, LayoutResult)> {
        let measurement = self.measure(constraints, children);
        let frame = Rect::from_origin_size(IVec2::ZERO, measurement.size);
        let result = self.layout(&measurement, frame);
        self.commit(&measurement, &result, children)?;
        Ok((measurement, result))
    }
}

impl Default for FlowLayoutEngine {
    fn default() -> Self {
        Self {
            config: FlowConfig::default(),
            spacing: FlowSpacing::new(DEFAULT_HORIZONTAL_SPACING_DP, DEFAULT_VERTICAL_SPACING_DP),
            debug: false,
        }
    }
}

impl LayoutEngine for FlowLayoutEngine {
    fn measure<C: FlowChild>(&self, constraints: ConstraintBox, children: &mut [C]) -> Measurement {
        let measurement = flow::measure(constraints, self.padding(), self.spacing, children);

        if self.debug {
            debug!(
                "Measured {} of {} children into {} lines under [{}, {}]: size={}",
                measurement.item_count(),
                children.len(),
                measurement.line_count(),
                constraints.width,
                constraints.height,
                measurement.size
            );
            for (i, line) in measurement.lines.iter().enumerate() {
                debug!("Line {}: height={}, children={:?}", i, line.height, line.indices().collect::<Vec<_>>());
            }
        }

        measurement
    }

    fn layout(&self, measurement: &Measurement, frame: Rect) -> LayoutResult {
        let result = flow::place(measurement, frame, self.padding(), self.spacing);

        if self.debug {
            debug!("Placed {} children in frame {}, bounds={:?}", result.len(), frame, result.bounds());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowbox_core::{LayoutParams, MeasureSpec, Size, Visibility};

    struct Tile {
        size: Size,
        visibility: Visibility,
        placed: Option<Rect>,
    }

    impl Tile {
        fn new(width: i32, height: i32) -> Self {
            Self { size: Size::new(width, height), visibility: Visibility::Visible, placed: None }
        }
    }

    impl FlowChild for Tile {
        fn visibility(&self) -> Visibility {
            self.visibility
        }

        fn layout_params(&self) -> LayoutParams {
            LayoutParams::fixed(self.size.width, self.size.height)
        }

        fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
            Size::new(width.resolve(self.size.width), height.resolve(self.size.height))
        }

        fn place(&mut self, rect: Rect) {
            self.placed = Some(rect);
        }
    }

    fn tiles() -> Vec<Tile> {
        vec![Tile::new(100, 40), Tile::new(100, 20), Tile::new(100, 40)]
    }

    #[test]
    fn test_engine_resolves_spacing_from_density() {
        let metrics = DisplayMetrics::new(3.0).unwrap();
        let engine = FlowLayoutEngine::new(FlowConfig::default(), &metrics).unwrap();
        assert_eq!(engine.spacing(), FlowSpacing::new(48, 24));

        let default = FlowLayoutEngine::default();
        assert_eq!(default.spacing(), FlowSpacing::new(16, 8));
    }

    #[test]
    fn test_measure_and_layout_commits_every_child() {
        let engine = FlowLayoutEngine::default().with_padding(EdgeInsets::uniform(4));
        let mut children = tiles();
        let constraints = ConstraintBox::new(MeasureSpec::exactly(300), MeasureSpec::unspecified());

        let (measurement, result) = engine.measure_and_layout(constraints, &mut children).unwrap();

        assert_eq!(measurement.line_count(), 2);
        assert_eq!(engine.padding(), EdgeInsets::uniform(4));
        assert_eq!(measurement.size, Size::new(300 + 8, 4 + 40 + 8 + 40 + 4));
        assert_eq!(result.len(), 3);
        assert_eq!(children[0].placed, Some(Rect::new(4, 4, 104, 44)));
        assert_eq!(children[1].placed, Some(Rect::new(120, 14, 220, 34)));
        assert_eq!(children[2].placed, Some(Rect::new(4, 52, 104, 92)));
        assert_eq!(result.bounds(), Some(Rect::new(4, 4, 220, 92)));
    }

    #[test]
    fn test_empty_container_places_nothing() {
        let engine = FlowLayoutEngine::default().with_padding(EdgeInsets::uniform(10));
        let mut children: Vec<Tile> = Vec::new();
        let (measurement, result) = engine
            .measure_and_layout(ConstraintBox::default(), &mut children)
            .unwrap();

        assert_eq!(measurement.size, Size::new(20, 20));
        assert!(result.is_empty());
        assert_eq!(result.bounds(), None);
    }

    #[test]
    fn test_commit_rejects_changed_child_set() {
        let engine = FlowLayoutEngine::default();
        let mut children = tiles();
        let constraints = ConstraintBox::with_max_size(300, 300);
        let measurement = engine.measure(constraints, &mut children);
        let result = engine.layout(&measurement, Rect::new(0, 0, 300, 300));

        children.push(Tile::new(10, 10));
        assert_eq!(
            engine.commit(&measurement, &result, &mut children),
            Err(FlowError::StaleMeasurement { measured: 3, current: 4 })
        );
        assert!(children.iter().all(|child| child.placed.is_none()));

        children.pop();
        children[1].visibility = Visibility::Gone;
        assert!(matches!(
            engine.commit(&measurement, &result, &mut children),
            Err(FlowError::StaleMeasurement { measured: 3, current: 2 })
        ));
    }

    #[test]
    fn test_commit_rejects_out_of_range_placement() {
        let engine = FlowLayoutEngine::default();
        let mut children = tiles();
        let measurement = engine.measure(ConstraintBox::with_max_size(300, 300), &mut children);
        let mut result = engine.layout(&measurement, Rect::new(0, 0, 300, 300));
        result.placements.push(Placement { index: 7, rect: Rect::default() });

        assert_eq!(
            engine.commit(&measurement, &result, &mut children),
            Err(FlowError::ChildOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_layout_works_with_trait_objects() {
        let engine = FlowLayoutEngine::default().with_debug(true);
        let mut children: Vec<Box<dyn FlowChild>> = vec![Box::new(Tile::new(60, 30)), Box::new(Tile::new(60, 30))];
        let (measurement, result) = engine
            .measure_and_layout(ConstraintBox::with_max_size(100, 100), &mut children)
            .unwrap();

        assert_eq!(measurement.line_count(), 2);
        let positions: Vec<_> = result.positions().collect();
        assert_eq!(positions, vec![(0, IVec2::new(0, 0)), (1, IVec2::new(0, 38))]);
    }
}
