use crate::services::purchase_service::PurchaseError;
use crate::store;

use super::Session;

pub fn execute_buy(session: &mut Session<'_>, args: &str) -> Result<String, String> {
    let id_arg = args.trim().trim_start_matches('#');
    if id_arg.is_empty() {
        return Err("Usage: buy <listing #>".to_string());
    }

    let id: u32 = id_arg
        .parse()
        .map_err(|_| format!("'{}' is not a listing number", id_arg))?;
    let listing = store::catalog::get_listing_by_id(session.store, id)
        .ok_or_else(|| format!("Listing #{} not found", id))?;

    session.workflow.open(listing).map_err(|e| e.to_string())?;
    Ok(String::new())
}

/// Everything after `amount` is taken verbatim, including an empty value
pub fn execute_amount(session: &mut Session<'_>, args: &str) -> Result<String, String> {
    session
        .workflow
        .set_amount(args.trim())
        .map_err(|e| e.to_string())?;
    Ok(String::new())
}

pub fn execute_confirm(session: &mut Session<'_>) -> Result<String, String> {
    let submission = session.workflow.confirm().map_err(|e| match e {
        PurchaseError::InvalidAmount(_) => "Confirm is disabled: enter a positive amount first".to_string(),
        other => other.to_string(),
    })?;
    session.pending = Some(submission);
    Ok(String::new())
}

pub fn execute_cancel(session: &mut Session<'_>) -> Result<String, String> {
    if !session.workflow.is_open() {
        return Ok("No purchase dialog is open.".to_string());
    }

    session.workflow.cancel().map_err(|e| e.to_string())?;
    Ok("Purchase cancelled.".to_string())
}
