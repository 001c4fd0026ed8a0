//! Console example: list views over seeded demo data

use civic::domain::verification::FlaggedSummary;
use civic::prelude::*;
use civic::report::{category_counts, issues_csv_string, resolution_trend};
use tracing_subscriber::EnvFilter;

fn print_page(title: &str, model: &ViewModel, columns: &[&str]) {
    let view = model.view();
    println!(
        "\n📋 {} (page {}/{}, {} matched)",
        title, view.current_page, view.total_pages, view.total_matched
    );
    for record in &view.visible_records {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| match record.get(column) {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => "-".to_string(),
            })
            .collect();
        println!("   {}", cells.join(" | "));
    }
    if let Some((first, last)) = view.visible_range() {
        println!("   Showing {}-{} of {}", first, last, view.total_matched);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("civic=debug")),
        )
        .init();

    println!("🚀 Civic View Console Example");
    println!("=============================");

    let config = ConsoleConfig::default_config();

    let mut generator = DemoDataGenerator::seeded(42);
    let officers = generator.officers(8);
    let issues = generator.issues(60, &officers);
    let inventory = generator.inventory(25);
    let requests = generator.inventory_requests(12, &issues, &officers);

    let state = [
        ConsoleAction::Set(Collection::Issues, issues),
        ConsoleAction::Set(Collection::Officers, officers),
        ConsoleAction::Set(Collection::Inventory, inventory),
        ConsoleAction::Set(Collection::InventoryRequests, requests),
    ]
    .into_iter()
    .fold(ConsoleState::default(), ConsoleState::reduce);

    // Dashboard
    let stats = DashboardStats::from_collections(&state.issues, &state.officers, &state.inventory_requests);
    println!("\n📊 Dashboard");
    println!("   Total issues:     {}", stats.total_issues);
    println!("   Resolved:         {} ({}%)", stats.resolved_issues, stats.resolution_rate());
    println!("   Pending:          {}", stats.pending_issues);
    println!("   Critical:         {}", stats.critical_issues);
    println!("   Active officers:  {}", stats.active_officers);
    println!("   Pending requests: {}", stats.pending_requests);

    // Issues: filter, search, sort, paginate
    let mut issues_view = config.view_model("issues", state.issues.clone())?;
    print_page("Issues", &issues_view, &["title", "status", "priority", "createdAt"]);

    issues_view.set_filter("category", "Roads");
    issues_view.set_sort("priority");
    issues_view.set_sort("priority");
    print_page("Road issues by priority", &issues_view, &["title", "status", "priority"]);

    issues_view.set_search_term("pothole");
    issues_view.set_page_size(5);
    issues_view.next_page();
    print_page("Potholes, page size 5", &issues_view, &["title", "wardId", "priority"]);

    issues_view.clear_filters();
    println!(
        "\n🔄 Filters cleared: {} matched, {} recomputes so far",
        issues_view.view().total_matched,
        issues_view.recompute_count()
    );

    // Flagged issues
    let flagged: Vec<Record> = state
        .issues
        .iter()
        .filter(|issue| issue.get("verification.status").and_then(|v| v.as_str()) == Some("flagged"))
        .cloned()
        .collect();
    let summary = FlaggedSummary::from_issues(&flagged);
    println!(
        "\n🚩 Flagged: {} total, {} high priority, {} low confidence",
        summary.total, summary.high_priority, summary.low_confidence
    );
    let mut flagged_view = config.view_model("flagged_issues", flagged)?;
    flagged_view.set_sort_direction("verification.confidenceScore", SortDirection::Ascending);
    print_page("Least trusted first", &flagged_view, &["title", "verification.confidenceScore"]);

    // Inventory with derived stock status
    let mut inventory_view = config.view_model("inventory", enrich_inventory(state.inventory.clone()))?;
    inventory_view.set_filter("stockStatus", StockStatus::LowStock.as_str());
    print_page("Low stock", &inventory_view, &["name", "availableCount", "stockStatus"]);

    // Officers with workload statistics
    let mut officers_view = config.view_model("officers", enrich_officers(state.officers.clone(), &state.issues))?;
    officers_view.set_sort_direction("efficiency", SortDirection::Descending);
    print_page("Officers by efficiency", &officers_view, &["fullName", "officerProfile.department", "efficiency"]);

    // Unknown filter fields are ignored
    if !officers_view.set_filter("salary", "high") {
        println!("\n⚠️  'salary' is not a filter of the officers view");
    }

    // Reports
    println!("\n📈 Issues per category");
    for count in category_counts(&state.issues) {
        println!("   {:<14} {}", count.name, count.count);
    }
    println!("\n⏱️  Average resolution hours");
    for point in resolution_trend(&state.issues) {
        println!("   {:<9} {}", point.month, point.avg_hours);
    }

    let csv = issues_csv_string(&state.issues)?;
    println!("\n📄 CSV export: {} lines", csv.lines().count());

    // Session
    let mut session = Session::new(InMemorySessionStorage::new());
    session.restore()?;
    session.login_started();
    session.login_succeeded(serde_json::json!({"fullName": "Admin User", "role": "admin"}), "demo-token")?;
    println!("\n🔐 Logged in: {}", session.is_authenticated());
    session.logout()?;
    println!("🔓 Logged out: {}", !session.is_authenticated());

    Ok(())
}
