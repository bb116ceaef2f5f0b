use std::fmt;
use std::str::FromStr;

use crate::models::TransactionStatus;
use crate::services::purchase_service::DialogView;
use crate::store::{self, Store};
use crate::utils::{format_stars, format_usd, Table};

/// The five views of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Marketplace,
    Wallet,
    Transactions,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Marketplace,
        Tab::Wallet,
        Tab::Transactions,
        Tab::Profile,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Marketplace => "marketplace",
            Tab::Wallet => "wallet",
            Tab::Transactions => "transactions",
            Tab::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Marketplace => "Marketplace",
            Tab::Wallet => "Wallet",
            Tab::Transactions => "Transactions",
            Tab::Profile => "Profile",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Tab::Home),
            "marketplace" | "market" => Ok(Tab::Marketplace),
            "wallet" => Ok(Tab::Wallet),
            "transactions" | "tx" | "history" => Ok(Tab::Transactions),
            "profile" => Ok(Tab::Profile),
            other => Err(format!(
                "Unknown tab '{}'. Available: home, marketplace, wallet, transactions, profile",
                other
            )),
        }
    }
}

/// Tab strip with the active tab bracketed
pub fn render_tab_bar(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.title())
            } else {
                format!(" {} ", tab.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_tab(store: &Store, tab: Tab, search_query: &str) -> String {
    let body = match tab {
        Tab::Home => render_home(store),
        Tab::Marketplace => render_marketplace(store, search_query),
        Tab::Wallet => render_wallet(store),
        Tab::Transactions => render_transactions(store),
        Tab::Profile => render_profile(store),
    };

    format!("⭐ StarMarket\n{}\n\n{}", render_tab_bar(tab), body)
}

fn render_home(store: &Store) -> String {
    let mut out = String::from(
        "Trade Telegram Stars safely\n\
         A marketplace for buying and selling Telegram Stars with instant delivery.\n\n\
         ⚡ Instant: transactions settle in seconds\n\
         🛡 Secure: escrow and verified sellers\n\
         🔔 Notifications: live status for every trade\n\n",
    );

    let mut table = Table::new(vec!["Metric", "Value", "Change"]);
    for stat in store.home_stats() {
        table.add_row(vec![stat.label.clone(), stat.value.clone(), stat.change.clone()]);
    }
    out.push_str(&table.render());
    out
}

fn render_marketplace(store: &Store, search_query: &str) -> String {
    let mut out = String::new();
    if !search_query.is_empty() {
        out.push_str(&format!("Search: \"{}\"\n\n", search_query));
    }

    // The search box and filter button are not wired; every listing is shown
    let mut table = Table::new(vec!["#", "Seller", "Rating", "Trades", "Amount", "Price"]);
    for listing in store::catalog::get_listings(store) {
        table.add_row(vec![
            listing.id.to_string(),
            format!("({}) {} ✔", listing.initial(), listing.seller),
            format!("★ {}", listing.rating),
            listing.trades.to_string(),
            format_stars(listing.amount),
            format_usd(listing.price),
        ]);
    }
    out.push_str(&table.render());
    out.push_str("\n\nType `buy <#>` to purchase from a seller.");
    out
}

fn render_wallet(store: &Store) -> String {
    let wallet = store.wallet();
    let filled = usize::from(wallet.weekly_activity_percent.min(100)) / 5;

    format!(
        "My wallet\n\
         Available balance: {}\n\
         ≈ {} USD\n\n\
         Weekly activity: [{}{}] {}% of limit\n\n\
         Bought: +{}   Sold: -{}   Fees: {}",
        format_stars(wallet.balance),
        format_usd(wallet.usd_estimate),
        "#".repeat(filled),
        ".".repeat(20 - filled),
        wallet.weekly_activity_percent,
        format_stars(wallet.bought),
        format_stars(wallet.sold),
        format_stars(wallet.fees),
    )
}

fn render_transactions(store: &Store) -> String {
    let mut table = Table::new(vec!["", "Type", "Amount", "Price", "Status", "When"]);
    for record in store::transaction::get_recent_transactions(store) {
        let status = match record.status {
            TransactionStatus::Completed => format!("✔ {}", record.status.label()),
            TransactionStatus::Pending => format!("… {}", record.status.label()),
        };
        table.add_row(vec![
            record.kind.arrow().to_string(),
            record.kind.label().to_string(),
            format_stars(record.amount),
            format_usd(record.price),
            status,
            record.time_label(),
        ]);
    }

    format!("Transaction history\n\n{}", table.render())
}

fn render_profile(store: &Store) -> String {
    let profile = store.profile();
    let mut out = format!(
        "@{}\n{}\n\nRating: ★ {}\nTrades: {}\nVolume: {}\n\nNotification settings:",
        profile.username,
        profile.member_since_label(),
        profile.rating,
        profile.trades,
        profile.volume,
    );

    for setting in &profile.notification_settings {
        out.push_str(&format!("\n  [on] {}", setting));
    }
    out
}

/// Render the purchase confirmation dialog
pub fn render_dialog(view: &DialogView) -> String {
    let confirm = if view.processing {
        "Processing...".to_string()
    } else if view.confirm_enabled {
        format!("[ Pay ${} ]", view.total)
    } else {
        format!("( Pay ${} ) disabled", view.total)
    };
    let cancel = if view.cancel_enabled {
        "[ Cancel ]"
    } else {
        "( Cancel ) disabled"
    };

    format!(
        "=== Confirm purchase ===\n\
         Seller: {} ★ {} • {} trades\n\
         Amount: {}\n\
         Available: {}\n\n\
         Price per ⭐: ${}\n\
         Quantity: {} ⭐\n\
         Total: ${}\n\n\
         {}   {}",
        view.seller,
        view.rating,
        view.trades,
        if view.requested_amount.is_empty() {
            "<enter amount>"
        } else {
            view.requested_amount.as_str()
        },
        format_stars(view.available),
        view.unit_price,
        view.quantity_label,
        view.total,
        cancel,
        confirm,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::init_store;

    #[test]
    fn test_tab_parsing() {
        assert_eq!("market".parse::<Tab>(), Ok(Tab::Marketplace));
        assert_eq!("TX".parse::<Tab>(), Ok(Tab::Transactions));
        assert_eq!("Profile".parse::<Tab>(), Ok(Tab::Profile));
        assert!("settings".parse::<Tab>().is_err());
        assert_eq!(Tab::default(), Tab::Home);
    }

    #[test]
    fn test_tab_bar_marks_active() {
        let bar = render_tab_bar(Tab::Wallet);
        assert!(bar.contains("[Wallet]"));
        assert!(bar.contains(" Home "));
    }

    #[test]
    fn test_marketplace_lists_every_listing_regardless_of_search() {
        let store = init_store(None).unwrap();
        let page = render_tab(&store, Tab::Marketplace, "Whale");

        assert!(page.contains("Search: \"Whale\""));
        for seller in ["CryptoWhale", "StarTrader", "MegaDeals", "QuickStar"] {
            assert!(page.contains(seller), "missing {}", seller);
        }
        assert!(page.contains("5,000 ⭐"));
        assert!(page.contains("$485.00"));
    }

    #[test]
    fn test_transactions_tab() {
        let store = init_store(None).unwrap();
        let page = render_tab(&store, Tab::Transactions, "");

        assert!(page.contains("2 min ago"));
        assert!(page.contains("3 hours ago"));
        assert!(page.contains("Processing"));
        assert!(page.contains("$78.75"));
    }

    #[test]
    fn test_wallet_and_profile_tabs() {
        let store = init_store(None).unwrap();

        let wallet = render_tab(&store, Tab::Wallet, "");
        assert!(wallet.contains("12,500 ⭐"));
        assert!(wallet.contains("$1,287.50"));
        assert!(wallet.contains("75% of limit"));

        let profile = render_tab(&store, Tab::Profile, "");
        assert!(profile.contains("Active since January 2025"));
        assert!(profile.contains("Trades: 127"));
    }

    #[test]
    fn test_dialog_rendering_states() {
        let mut view = DialogView {
            listing_id: 1,
            seller: "CryptoWhale".to_string(),
            rating: 4.8,
            trades: 342,
            available: 1000,
            requested_amount: String::new(),
            quantity_label: "0".to_string(),
            unit_price: "0.100".to_string(),
            total: "0.00".to_string(),
            confirm_enabled: false,
            cancel_enabled: true,
            processing: false,
        };

        let idle = render_dialog(&view);
        assert!(idle.contains("<enter amount>"));
        assert!(idle.contains("( Pay $0.00 ) disabled"));
        assert!(idle.contains("Available: 1,000 ⭐"));

        view.processing = true;
        view.cancel_enabled = false;
        let busy = render_dialog(&view);
        assert!(busy.contains("Processing..."));
        assert!(busy.contains("( Cancel ) disabled"));
    }
}
