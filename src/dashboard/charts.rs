//! Chart configurations and the create-or-replace charting seam
//!
//! The controller builds declarative [`ChartConfig`]s and hands them to a
//! [`ChartRenderer`] through a [`ChartBoard`], which guarantees that a slot
//! never holds more than one live chart instance.

use crate::api::types::StatsSnapshot;
use crate::dashboard::format::{capitalize, humanize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

#[cfg(test)]
use mockall::automock;

/// A named place in the view holding at most one chart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
pub enum ChartSlot {
    #[strum(to_string = "Predictions by Class")]
    PredictionsByClass,
    #[strum(to_string = "Predictions by Model")]
    PredictionsByModel,
    #[strum(to_string = "Confidence Distribution")]
    ConfidenceDistribution,
    #[strum(to_string = "Model Comparison")]
    ModelComparison,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 4] = [
        ChartSlot::PredictionsByClass,
        ChartSlot::PredictionsByModel,
        ChartSlot::ConfidenceDistribution,
        ChartSlot::ModelComparison,
    ];
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum ChartKind {
    Bar,
    Doughnut,
    Pie,
}

/// An RGBA color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

pub mod palette {
    use super::Rgba;

    pub const INDIGO: Rgba = Rgba::new(102, 126, 234, 0.8);
    pub const PURPLE: Rgba = Rgba::new(118, 75, 162, 0.8);
    pub const PINK: Rgba = Rgba::new(237, 100, 166, 0.8);
    pub const GREEN: Rgba = Rgba::new(40, 167, 69, 0.8);
    pub const AMBER: Rgba = Rgba::new(255, 193, 7, 0.8);
    pub const RED: Rgba = Rgba::new(220, 53, 69, 0.8);

    pub const CLASSES: [Rgba; 3] = [INDIGO, PURPLE, PINK];
    pub const MODELS: [Rgba; 2] = [INDIGO, PURPLE];
    pub const CONFIDENCE: [Rgba; 3] = [GREEN, AMBER, RED];
    pub const COMPARISON: [Rgba; 1] = [INDIGO];
}

/// Declarative description of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub title: String,
    /// Dataset label, if the chart shows one.
    pub dataset_label: Option<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Colors, cycled over the values.
    pub palette: Vec<Rgba>,
    pub show_legend: bool,
    /// Fixed upper bound of the value axis.
    pub y_max: Option<f64>,
}

impl ChartConfig {
    /// Color of the value at `index`.
    pub fn color_at(&self, index: usize) -> Option<Rgba> {
        if self.palette.is_empty() {
            return None;
        }
        Some(self.palette[index % self.palette.len()])
    }

    /// `(label, value)` pairs in display order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Build a config for every slot whose series is present in the snapshot.
///
/// A present but empty series still yields a (empty) chart; an absent one
/// yields nothing, leaving the slot as it was.
pub fn build_chart_configs(snapshot: &StatsSnapshot) -> Vec<(ChartSlot, ChartConfig)> {
    let mut configs = Vec::with_capacity(ChartSlot::ALL.len());

    if let Some(classes) = &snapshot.predictions_by_class {
        configs.push((
            ChartSlot::PredictionsByClass,
            ChartConfig {
                kind: ChartKind::Bar,
                title: ChartSlot::PredictionsByClass.to_string(),
                dataset_label: Some("Count".to_string()),
                labels: classes.iter().map(|c| capitalize(&c.id)).collect(),
                values: classes.iter().map(|c| c.count as f64).collect(),
                palette: palette::CLASSES.to_vec(),
                show_legend: false,
                y_max: None,
            },
        ));
    }

    if let Some(models) = &snapshot.predictions_by_model {
        configs.push((
            ChartSlot::PredictionsByModel,
            ChartConfig {
                kind: ChartKind::Doughnut,
                title: ChartSlot::PredictionsByModel.to_string(),
                dataset_label: None,
                labels: models.iter().map(|m| humanize(&m.id)).collect(),
                values: models.iter().map(|m| m.count as f64).collect(),
                palette: palette::MODELS.to_vec(),
                show_legend: true,
                y_max: None,
            },
        ));
    }

    if let Some(buckets) = &snapshot.confidence_distribution {
        configs.push((
            ChartSlot::ConfidenceDistribution,
            ChartConfig {
                kind: ChartKind::Pie,
                title: ChartSlot::ConfidenceDistribution.to_string(),
                dataset_label: None,
                labels: buckets.iter().map(|b| b.id.clone()).collect(),
                values: buckets.iter().map(|b| b.count as f64).collect(),
                palette: palette::CONFIDENCE.to_vec(),
                show_legend: true,
                y_max: None,
            },
        ));
    }

    if let Some(averages) = &snapshot.avg_confidence_by_model {
        configs.push((
            ChartSlot::ModelComparison,
            ChartConfig {
                kind: ChartKind::Bar,
                title: ChartSlot::ModelComparison.to_string(),
                dataset_label: Some("Avg Confidence (%)".to_string()),
                labels: averages.iter().map(|a| humanize(&a.id)).collect(),
                values: averages
                    .iter()
                    .map(|a| round_to_hundredths(a.avg_confidence * 100.0))
                    .collect(),
                palette: palette::COMPARISON.to_vec(),
                show_legend: true,
                y_max: Some(100.0),
            },
        ));
    }

    configs
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A slot bound to one rendered chart instance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChartHandle {
    pub slot: ChartSlot,
    pub instance: u64,
}

/// The charting capability.
#[cfg_attr(test, automock)]
pub trait ChartRenderer: Send + Sync {
    /// Create a new chart instance for `slot`.
    fn render(&self, slot: ChartSlot, config: &ChartConfig) -> ChartHandle;

    /// Release a chart instance.
    fn dispose(&self, handle: ChartHandle);
}

/// Slot-to-instance bookkeeping on top of a [`ChartRenderer`].
pub struct ChartBoard {
    renderer: Arc<dyn ChartRenderer>,
    handles: HashMap<ChartSlot, ChartHandle>,
}

impl ChartBoard {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self {
            renderer,
            handles: HashMap::new(),
        }
    }

    /// Dispose whatever is bound to `slot`, then render `config` into it.
    pub fn create_or_replace(&mut self, slot: ChartSlot, config: &ChartConfig) -> ChartHandle {
        if let Some(previous) = self.handles.remove(&slot) {
            self.renderer.dispose(previous);
        }
        let handle = self.renderer.render(slot, config);
        self.handles.insert(slot, handle);
        handle
    }

    /// Dispose every bound chart.
    pub fn dispose_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            self.renderer.dispose(handle);
        }
    }
}

impl std::fmt::Debug for ChartBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartBoard")
            .field("handles", &self.handles)
            .finish()
    }
}

/// A chart instance held by the [`ChartStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct LiveChart {
    pub slot: ChartSlot,
    pub config: ChartConfig,
}

#[derive(Debug, Default)]
struct StoreInner {
    next_instance: u64,
    instances: BTreeMap<u64, LiveChart>,
}

/// In-process charting backend.
///
/// Like a canvas charting library, it happily keeps several instances for
/// the same slot; [`ChartBoard`] is what prevents that. Hosts draw the most
/// recent instance of each slot.
#[derive(Debug, Clone, Default)]
pub struct ChartStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ChartStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Latest live chart of `slot`.
    pub fn current(&self, slot: ChartSlot) -> Option<ChartConfig> {
        self.lock()
            .instances
            .values()
            .rev()
            .find(|chart| chart.slot == slot)
            .map(|chart| chart.config.clone())
    }

    /// Number of live instances bound to `slot`.
    pub fn live_count(&self, slot: ChartSlot) -> usize {
        self.lock()
            .instances
            .values()
            .filter(|chart| chart.slot == slot)
            .count()
    }

    /// Number of live instances across all slots.
    pub fn total_live(&self) -> usize {
        self.lock().instances.len()
    }
}

impl ChartRenderer for ChartStore {
    fn render(&self, slot: ChartSlot, config: &ChartConfig) -> ChartHandle {
        let mut inner = self.lock();
        inner.next_instance += 1;
        let instance = inner.next_instance;
        inner.instances.insert(
            instance,
            LiveChart {
                slot,
                config: config.clone(),
            },
        );
        ChartHandle { slot, instance }
    }

    fn dispose(&self, handle: ChartHandle) {
        self.lock().instances.remove(&handle.instance);
    }
}
