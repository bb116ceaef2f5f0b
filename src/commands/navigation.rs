use tracing::debug;

use crate::services::display_service::{self, Tab};

use super::Session;

pub fn execute_tab(session: &mut Session<'_>, args: &str) -> Result<String, String> {
    let name = args.trim();
    if name.is_empty() {
        return Err(format!("Usage: tab <name> (current: {})", session.active_tab));
    }

    let tab: Tab = name.parse()?;
    switch_to(session, tab)
}

pub fn switch_to(session: &mut Session<'_>, tab: Tab) -> Result<String, String> {
    debug!("Switching tab: {} -> {}", session.active_tab, tab);
    session.active_tab = tab;
    Ok(display_service::render_tab(session.store, tab, &session.search_query))
}

/// Remembers the query for display; listings are not filtered
pub fn execute_search(session: &mut Session<'_>, args: &str) -> Result<String, String> {
    session.search_query = args.trim().to_string();
    debug!("Search query set to '{}'", session.search_query);
    switch_to(session, Tab::Marketplace)
}

pub fn execute_filter(_session: &mut Session<'_>) -> Result<String, String> {
    debug!("Filter button pressed");
    Ok("No filters are available yet.".to_string())
}
