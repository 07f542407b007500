//! Sample records shown until a real data source is wired in.

use crate::{
    ActivityKind, AdminOverview, Alert, AlertLevel, Activity, DashboardDataSource, Glyph,
    HeaderSummary, LoadRecord, LoadStatus, Notification, OperationsOverview, PendingTask,
    QuickAction, StatCard, TaskPriority, Trend, TruckState, TruckStatus,
};

/// [`DashboardDataSource`] backed by fixed literal records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticDashboardSource;

fn stat(title: &str, value: &str, detail: &str, trend: Trend, glyph: Glyph) -> StatCard {
    StatCard {
        title: title.into(),
        value: value.into(),
        detail: detail.into(),
        trend,
        glyph,
    }
}

fn load(
    id: &str,
    vendor: &str,
    route: &str,
    truck: &str,
    driver: &str,
    status: LoadStatus,
    amount: &str,
) -> LoadRecord {
    LoadRecord {
        id: id.into(),
        vendor: vendor.into(),
        route: route.into(),
        truck: truck.into(),
        driver: driver.into(),
        status,
        amount: amount.into(),
    }
}

fn task(id: u32, text: &str, priority: TaskPriority, vendor: &str, due: &str) -> PendingTask {
    PendingTask {
        id,
        task: text.into(),
        priority,
        vendor: vendor.into(),
        due: due.into(),
    }
}

fn activity(action: &str, actor: &str, time: &str, kind: ActivityKind) -> Activity {
    Activity {
        action: action.into(),
        actor: actor.into(),
        time: time.into(),
        kind,
    }
}

fn truck(
    plate: &str,
    driver: &str,
    state: TruckState,
    route: Option<&str>,
    eta: Option<&str>,
) -> TruckStatus {
    TruckStatus {
        truck: plate.into(),
        driver: driver.into(),
        state,
        route: route.map(Into::into),
        eta: eta.map(Into::into),
    }
}

fn action(label: &str, glyph: Glyph) -> QuickAction {
    QuickAction {
        label: label.into(),
        glyph,
    }
}

impl DashboardDataSource for StaticDashboardSource {
    fn admin_overview(&self) -> AdminOverview {
        AdminOverview {
            stats: vec![
                stat("Total Revenue", "₹2,45,000", "+12.5%", Trend::Up, Glyph::Money),
                stat("Active Trucks", "15/19", "4 in maintenance", Trend::Stable, Glyph::Truck),
                stat("Total Loads", "127", "+8 this week", Trend::Up, Glyph::Package),
                stat("Total Drivers", "22", "3 on leave", Trend::Stable, Glyph::Users),
            ],
            recent_loads: vec![
                load(
                    "L001",
                    "Mahindra Industries",
                    "Shivpuri → Mumbai",
                    "TN01AB1234",
                    "Rajesh Kumar",
                    LoadStatus::Delivered,
                    "₹25,000",
                ),
                load(
                    "L002",
                    "Tata Steel",
                    "Shivpuri → Delhi",
                    "TN01AB5678",
                    "Suresh Yadav",
                    LoadStatus::InTransit,
                    "₹32,000",
                ),
                load(
                    "L003",
                    "Reliance Ltd",
                    "Shivpuri → Pune",
                    "TN01AB9012",
                    "Amit Singh",
                    LoadStatus::Loaded,
                    "₹28,000",
                ),
            ],
            alerts: vec![
                Alert {
                    level: AlertLevel::Critical,
                    message: "Truck TN01AB3456 overdue for maintenance".into(),
                    time: "2 hours ago".into(),
                },
                Alert {
                    level: AlertLevel::Warning,
                    message: "Driver license expiring in 15 days - Mohan Lal".into(),
                    time: "4 hours ago".into(),
                },
                Alert {
                    level: AlertLevel::Info,
                    message: "New load assignment from Bajaj Auto".into(),
                    time: "6 hours ago".into(),
                },
            ],
            quick_actions: vec![
                action("Add Truck", Glyph::Truck),
                action("Add Driver", Glyph::Users),
                action("New Load", Glyph::Package),
                action("Add Payment", Glyph::Money),
                action("Reports", Glyph::Chart),
                action("Fuel Entry", Glyph::Fuel),
            ],
        }
    }

    fn operations_overview(&self) -> OperationsOverview {
        OperationsOverview {
            stats: vec![
                stat("Today's Loads", "8", "3 pending assignment", Trend::Stable, Glyph::Package),
                stat("Available Trucks", "6", "9 in transit", Trend::Stable, Glyph::Truck),
                stat("Active Drivers", "18", "4 on break", Trend::Stable, Glyph::Users),
                stat("Fuel Entries", "12", "Today's entries", Trend::Stable, Glyph::Fuel),
            ],
            pending_tasks: vec![
                task(1, "Assign truck to Load #L004", TaskPriority::High, "Bajaj Auto", "2 hours"),
                task(
                    2,
                    "Update fuel entry for TN01AB1234",
                    TaskPriority::Medium,
                    "Shell Petrol Pump",
                    "4 hours",
                ),
                task(3, "Upload Billty for Load #L002", TaskPriority::High, "Tata Steel", "1 hour"),
                task(
                    4,
                    "Process driver expense - Rajesh Kumar",
                    TaskPriority::Low,
                    "Driver Advance",
                    "End of day",
                ),
            ],
            activities: vec![
                activity("Load #L003 marked as delivered", "You", "30 minutes ago", ActivityKind::Success),
                activity("Fuel entry added for TN01AB5678", "You", "1 hour ago", ActivityKind::Info),
                activity(
                    "Driver expense approved - Amit Singh",
                    "You",
                    "2 hours ago",
                    ActivityKind::Success,
                ),
                activity("New load assigned from Mahindra", "System", "3 hours ago", ActivityKind::Info),
            ],
            trucks: vec![
                truck(
                    "TN01AB1234",
                    "Rajesh Kumar",
                    TruckState::InTransit,
                    Some("Shivpuri → Mumbai"),
                    Some("6 hours"),
                ),
                truck(
                    "TN01AB5678",
                    "Suresh Yadav",
                    TruckState::Loading,
                    Some("Shivpuri → Delhi"),
                    Some("1 hour"),
                ),
                truck("TN01AB9012", "Amit Singh", TruckState::Available, None, None),
                truck("TN01AB3456", "Mohan Lal", TruckState::Maintenance, None, Some("2 days")),
            ],
            quick_actions: vec![
                action("New Load", Glyph::Package),
                action("Fuel Entry", Glyph::Fuel),
                action("Upload Billty", Glyph::Document),
                action("Track Load", Glyph::MapPin),
                action("Schedule", Glyph::Calendar),
                action("Reports", Glyph::Trend),
            ],
        }
    }

    fn header_summary(&self) -> HeaderSummary {
        HeaderSummary {
            active_trucks: 15,
            open_issues: 2,
            notifications: vec![
                Notification {
                    id: 1,
                    kind: ActivityKind::Warning,
                    title: "Truck TN01AB1234 Maintenance Due".into(),
                    time: "2 hours ago".into(),
                },
                Notification {
                    id: 2,
                    kind: ActivityKind::Success,
                    title: "Load #L001 Delivered Successfully".into(),
                    time: "4 hours ago".into(),
                },
                Notification {
                    id: 3,
                    kind: ActivityKind::Info,
                    title: "New Load Assignment Available".into(),
                    time: "6 hours ago".into(),
                },
            ],
        }
    }
}
