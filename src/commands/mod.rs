pub mod help;
pub mod navigation;
pub mod purchase;

use tokio::time::Instant;
use tracing::{debug, error, warn};

use crate::services::display_service::{self, Tab};
use crate::services::purchase_service::{PurchaseError, PurchaseWorkflow, Submission};
use crate::store::Store;

/// State of one interactive page session
pub struct Session<'a> {
    pub store: &'a Store,
    pub active_tab: Tab,
    /// Text typed into the marketplace search box
    pub search_query: String,
    pub workflow: PurchaseWorkflow<'a>,
    pending: Option<Submission>,
}

/// What the shell should print after a line, and whether to stop
#[derive(Debug, Default)]
pub struct CommandOutput {
    pub text: String,
    pub quit: bool,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a Store, workflow: PurchaseWorkflow<'a>) -> Self {
        Session {
            store,
            active_tab: Tab::default(),
            search_query: String::new(),
            workflow,
            pending: None,
        }
    }

    /// The page as it looks right now: active tab plus the dialog when open
    pub fn render(&self) -> String {
        let page = display_service::render_tab(self.store, self.active_tab, &self.search_query);
        match self.workflow.dialog() {
            Some(view) => format!("{}\n\n{}", page, display_service::render_dialog(&view)),
            None => page,
        }
    }

    /// When the in-flight purchase finishes processing
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|submission| submission.deadline())
    }

    /// Resolve the in-flight purchase once its delay has elapsed
    pub fn resolve_pending(&mut self) -> Option<String> {
        let submission = self.pending.take()?;
        match self.workflow.complete(&submission) {
            Ok(notification) => {
                debug!("Resolved purchase, toast {}", notification.id);
                Some(self.render())
            }
            Err(PurchaseError::NotSettled) => {
                self.pending = Some(submission);
                None
            }
            Err(e) => {
                error!("Failed to resolve purchase: {}", e);
                None
            }
        }
    }

    pub fn handle_line(&mut self, line: &str) -> CommandOutput {
        let line = line.trim();
        if line.is_empty() {
            return CommandOutput::default();
        }

        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args),
            None => (line, ""),
        };
        let command = command.to_lowercase();

        let result = match command.as_str() {
            "help" | "?" => help::execute(),
            "tab" => navigation::execute_tab(self, args),
            "home" => navigation::switch_to(self, Tab::Home),
            "market" | "marketplace" => navigation::switch_to(self, Tab::Marketplace),
            "wallet" => navigation::switch_to(self, Tab::Wallet),
            "tx" | "transactions" => navigation::switch_to(self, Tab::Transactions),
            "profile" => navigation::switch_to(self, Tab::Profile),
            "search" => navigation::execute_search(self, args),
            "filter" | "filters" => navigation::execute_filter(self),
            "buy" => purchase::execute_buy(self, args),
            "amount" => purchase::execute_amount(self, args),
            "confirm" | "pay" => purchase::execute_confirm(self),
            "cancel" | "close" => purchase::execute_cancel(self),
            "quit" | "exit" => {
                return CommandOutput {
                    text: "Goodbye!".to_string(),
                    quit: true,
                }
            }
            other => Err(format!("Unknown command '{}'. Type `help` for the list.", other)),
        };

        let mut text = match result {
            Ok(text) => text,
            Err(e) => {
                warn!("Command {} failed: {}", command, e);
                format!("❌ {}", e)
            }
        };

        if let Some(view) = self.workflow.dialog() {
            if !text.is_empty() {
                text.push_str("\n\n");
            }
            text.push_str(&display_service::render_dialog(&view));
        }

        CommandOutput { text, quit: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notification_service::{self, NotificationReceiver};
    use crate::services::purchase_service::PurchaseState;
    use crate::store::init_store;
    use std::time::Duration;

    fn session(store: &Store) -> (Session<'_>, NotificationReceiver) {
        let (notifier, rx) = notification_service::channel();
        let workflow = PurchaseWorkflow::new(notifier, Duration::from_millis(2000), 5000);
        (Session::new(store, workflow), rx)
    }

    #[test]
    fn test_tab_switching() {
        let store = init_store(None).unwrap();
        let (mut session, _rx) = session(&store);

        let out = session.handle_line("tab wallet");
        assert_eq!(session.active_tab, Tab::Wallet);
        assert!(out.text.contains("12,500 ⭐"));

        session.handle_line("tx");
        assert_eq!(session.active_tab, Tab::Transactions);

        let out = session.handle_line("tab nowhere");
        assert!(out.text.starts_with("❌ Unknown tab"));
        assert_eq!(session.active_tab, Tab::Transactions);
    }

    #[test]
    fn test_unknown_command_and_quit() {
        let store = init_store(None).unwrap();
        let (mut session, _rx) = session(&store);

        assert!(session.handle_line("dance").text.contains("Unknown command"));
        assert!(!session.handle_line("   ").quit);
        assert!(session.handle_line("QUIT").quit);
    }

    #[test]
    fn test_search_and_filter_do_not_filter() {
        let store = init_store(None).unwrap();
        let (mut session, _rx) = session(&store);

        let out = session.handle_line("search Mega");
        assert_eq!(session.search_query, "Mega");
        assert!(out.text.contains("CryptoWhale"));
        assert!(out.text.contains("QuickStar"));

        assert!(session.handle_line("filter").text.contains("No filters"));
    }

    #[test]
    fn test_buy_opens_dialog_with_listing_amount() {
        let store = init_store(None).unwrap();
        let (mut session, _rx) = session(&store);

        let out = session.handle_line("buy #4");

        assert!(out.text.contains("Confirm purchase"));
        assert!(out.text.contains("QuickStar"));
        assert!(out.text.contains("Quantity: 2500 ⭐"));
        assert!(out.text.contains("Total: $242.00"));
    }

    #[test]
    fn test_buy_unknown_listing() {
        let store = init_store(None).unwrap();
        let (mut session, _rx) = session(&store);

        assert!(session.handle_line("buy 42").text.contains("Listing #42 not found"));
        assert!(session.handle_line("buy two").text.contains("not a listing number"));
        assert!(!session.workflow.is_open());
    }

    #[test]
    fn test_amount_editing_and_cancel() {
        let store = init_store(None).unwrap();
        let (mut session, _rx) = session(&store);
        session.handle_line("buy 1");

        let out = session.handle_line("amount 500");
        assert!(out.text.contains("Total: $49.99"));

        let out = session.handle_line("amount");
        assert!(out.text.contains("Total: $0.00"));
        assert!(out.text.contains("disabled"));

        let out = session.handle_line("confirm");
        assert!(out.text.contains("Confirm is disabled"));
        assert!(session.pending_deadline().is_none());

        let out = session.handle_line("cancel");
        assert_eq!(out.text, "Purchase cancelled.");
        assert_eq!(session.workflow.state(), &PurchaseState::Idle);
    }

    #[test]
    fn test_confirm_rejects_non_numeric_and_zero_amounts() {
        let store = init_store(None).unwrap();
        let (mut session, _rx) = session(&store);
        session.handle_line("buy 2");

        for amount in ["amount abc", "amount 0", "amount -5"] {
            session.handle_line(amount);
            let out = session.handle_line("confirm");
            assert!(out.text.contains("Confirm is disabled"), "{}", out.text);
            assert!(session.pending_deadline().is_none());
            assert!(!session.workflow.is_submitting());
        }

        assert!(session.handle_line("cancel").text.contains("cancelled"));
        let out = session.handle_line("confirm");
        assert!(!out.text.contains("Confirm is disabled"));
        assert!(out.text.contains("❌"));
    }

    #[test]
    fn test_amount_without_dialog() {
        let store = init_store(None).unwrap();
        let (mut session, _rx) = session(&store);

        assert!(session.handle_line("amount 5").text.contains("No purchase dialog is open"));
        assert_eq!(session.handle_line("cancel").text, "No purchase dialog is open.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_then_resolve_publishes_once() {
        let store = init_store(None).unwrap();
        let (mut session, mut rx) = session(&store);
        session.handle_line("buy 1");
        session.handle_line("amount 500");

        let out = session.handle_line("confirm");
        assert!(out.text.contains("Processing..."));
        let deadline = session.pending_deadline().expect("purchase in flight");

        assert!(session.handle_line("cancel").text.contains("already being processed"));
        assert!(session.handle_line("confirm").text.contains("already being processed"));

        tokio::time::sleep_until(deadline).await;
        let page = session.resolve_pending().expect("purchase resolves");

        assert!(!page.contains("Confirm purchase"));
        assert!(!session.workflow.is_open());
        assert!(session.pending_deadline().is_none());
        assert!(session.resolve_pending().is_none());

        let toast = rx.try_recv().expect("one toast");
        assert_eq!(toast.description, "You bought 500 ⭐ for $49.99.");
        assert!(rx.try_recv().is_err());
    }
}
