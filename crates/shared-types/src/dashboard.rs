use serde::{Deserialize, Serialize};

use crate::Glyph;

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// Direction shown next to a stat card's detail line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

/// A headline metric card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub detail: String,
    #[serde(default)]
    pub trend: Trend,
    pub glyph: Glyph,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoadStatus {
    Delivered,
    InTransit,
    Loaded,
}

impl LoadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LoadStatus::Delivered => "Delivered",
            LoadStatus::InTransit => "In Transit",
            LoadStatus::Loaded => "Loaded",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadRecord {
    pub id: String,
    pub vendor: String,
    pub route: String,
    pub truck: String,
    pub driver: String,
    pub status: LoadStatus,
    pub amount: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::High => "High",
            TaskPriority::Medium => "Medium",
            TaskPriority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingTask {
    pub id: u32,
    pub task: String,
    pub priority: TaskPriority,
    pub vendor: String,
    pub due: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub action: String,
    pub actor: String,
    pub time: String,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TruckState {
    InTransit,
    Loading,
    Available,
    Maintenance,
}

impl TruckState {
    pub fn label(&self) -> &'static str {
        match self {
            TruckState::InTransit => "In Transit",
            TruckState::Loading => "Loading",
            TruckState::Available => "Available",
            TruckState::Maintenance => "Maintenance",
        }
    }
}

/// Current position of one truck. `route` and `eta` are absent when idle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TruckStatus {
    pub truck: String,
    pub driver: String,
    pub state: TruckState,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub eta: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickAction {
    pub label: String,
    pub glyph: Glyph,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: ActivityKind,
    pub title: String,
    pub time: String,
}

// ---------------------------------------------------------------------------
// Per-view bundles
// ---------------------------------------------------------------------------

/// Everything the admin dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminOverview {
    pub stats: Vec<StatCard>,
    pub recent_loads: Vec<LoadRecord>,
    pub alerts: Vec<Alert>,
    pub quick_actions: Vec<QuickAction>,
}

/// Everything the operations (sub-admin) dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OperationsOverview {
    pub stats: Vec<StatCard>,
    pub pending_tasks: Vec<PendingTask>,
    pub activities: Vec<Activity>,
    pub trucks: Vec<TruckStatus>,
    pub quick_actions: Vec<QuickAction>,
}

/// Quick stats and notifications shown in the header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HeaderSummary {
    pub active_trucks: u32,
    pub open_issues: u32,
    pub notifications: Vec<Notification>,
}

/// Source of dashboard records consumed by the view layer.
///
/// Views never build records themselves; a fixture or a backend client can
/// stand behind this trait without changing the views.
pub trait DashboardDataSource {
    fn admin_overview(&self) -> AdminOverview;
    fn operations_overview(&self) -> OperationsOverview;
    fn header_summary(&self) -> HeaderSummary;
}
