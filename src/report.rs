// src/report.rs

use anyhow::{Context, Result};
use flowbox_core::{Rect, Size, Visibility};
use flowbox_layout::Measurement;
use serde::Serialize;

use crate::scene::StaticChild;

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    pub name: String,
    pub rect: Rect,
    #[serde(skip_serializing_if = "is_false")]
    pub invisible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub height: i32,
    pub items: Vec<ItemReport>,
}

/// What a scene laid out to, by child name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneReport {
    pub size: Size,
    pub lines: Vec<LineReport>,
    pub gone: Vec<String>,
}

impl SceneReport {
    pub fn new(measurement: &Measurement, children: &[StaticChild]) -> Self {
        let lines = measurement
            .lines
            .iter()
            .map(|line| LineReport {
                height: line.height,
                items: line
                    .items
                    .iter()
                    .filter_map(|item| children.get(item.index))
                    .map(|child| ItemReport {
                        name: child.spec.name.clone(),
                        rect: child.placed.unwrap_or_default(),
                        invisible: child.spec.visibility == Visibility::Invisible,
                    })
                    .collect(),
            })
            .collect();

        let gone = children
            .iter()
            .filter(|child| child.spec.visibility == Visibility::Gone)
            .map(|child| child.spec.name.clone())
            .collect();

        Self { size: measurement.size, lines, gone }
    }

    pub fn line_names(&self) -> Vec<Vec<&str>> {
        self.lines
            .iter()
            .map(|line| line.items.iter().map(|item| item.name.as_str()).collect())
            .collect()
    }

    pub fn rect_of(&self, name: &str) -> Option<Rect> {
        self.lines
            .iter()
            .flat_map(|line| &line.items)
            .find(|item| item.name == name)
            .map(|item| item.rect)
    }

    pub fn render_tree(&self) -> String {
        let mut output = format!("FlowLayout {} ({} lines)\n", self.size, self.lines.len());

        for (i, line) in self.lines.iter().enumerate() {
            let last_line = i + 1 == self.lines.len();
            let (branch, stem) = if last_line { ("└── ", "    ") } else { ("├── ", "│   ") };
            output.push_str(&format!("{}Line {} height={}\n", branch, i, line.height));

            for (j, item) in line.items.iter().enumerate() {
                let leaf = if j + 1 == line.items.len() { "└── " } else { "├── " };
                output.push_str(&format!("{}{}{} {}", stem, leaf, item.name, item.rect));
                if item.invisible {
                    output.push_str(" [invisible]");
                }
                output.push('\n');
            }
        }

        if !self.gone.is_empty() {
            output.push_str(&format!("Gone: {}\n", self.gone.join(", ")));
        }

        output
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize layout report")
    }
}
