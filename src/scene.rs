// src/scene.rs
//! JSON scene descriptions: a container's constraints plus static children.

use anyhow::{Context, Result};
use flowbox_core::{DisplayMetrics, FlowChild, LayoutParams, MeasureSpec, Rect, Size, Visibility};
use flowbox_layout::{ConstraintBox, FlowConfig, FlowLayoutEngine};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::report::SceneReport;

fn default_density() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "default_density")]
    pub density: f32,
    #[serde(default)]
    pub width: MeasureSpec,
    #[serde(default)]
    pub height: MeasureSpec,
    #[serde(default)]
    pub config: FlowConfig,
    #[serde(default)]
    pub children: Vec<SceneChild>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneChild {
    pub name: String,
    /// Intrinsic size reported when the child wraps its content.
    #[serde(default)]
    pub content: Size,
    #[serde(default)]
    pub layout: LayoutParams,
    #[serde(default)]
    pub visibility: Visibility,
}

/// A leaf that sizes itself from a fixed content size.
#[derive(Debug, Clone)]
pub struct StaticChild {
    pub spec: SceneChild,
    pub measured: Option<Size>,
    pub placed: Option<Rect>,
}

impl StaticChild {
    pub fn new(spec: SceneChild) -> Self {
        Self { spec, measured: None, placed: None }
    }
}

impl FlowChild for StaticChild {
    fn visibility(&self) -> Visibility {
        self.spec.visibility
    }

    fn layout_params(&self) -> LayoutParams {
        self.spec.layout
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let size = Size::new(
            width.resolve(self.spec.content.width),
            height.resolve(self.spec.content.height),
        );
        self.measured = Some(size);
        size
    }

    fn place(&mut self, rect: Rect) {
        self.placed = Some(rect);
    }
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse scene JSON")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid scene file: {}", path.display()))
    }

    pub fn constraints(&self) -> ConstraintBox {
        ConstraintBox::new(self.width, self.height)
    }

    pub fn engine(&self) -> Result<FlowLayoutEngine> {
        let metrics = DisplayMetrics::new(self.density).context("Invalid scene density")?;
        FlowLayoutEngine::new(self.config, &metrics).context("Invalid flow configuration")
    }

    /// Lays the scene out and returns the committed children with a report.
    pub fn layout(&self, debug: bool) -> Result<(Vec<StaticChild>, SceneReport)> {
        let engine = self.engine()?.with_debug(debug);
        let mut children: Vec<StaticChild> =
            self.children.iter().cloned().map(StaticChild::new).collect();

        info!(
            "Laying out {} children under [{}, {}] at density {:.2}",
            children.len(),
            self.width,
            self.height,
            self.density
        );

        let (measurement, _) = engine.measure_and_layout(self.constraints(), &mut children)?;
        let report = SceneReport::new(&measurement, &children);
        Ok((children, report))
    }

    pub fn run(&self, debug: bool) -> Result<SceneReport> {
        self.layout(debug).map(|(_, report)| report)
    }
}
