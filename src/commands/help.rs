pub fn execute() -> Result<String, String> {
    Ok("📖 StarMarket commands\n\
        \n\
        🧭 Navigation\n\
        \x20 tab <name>      Switch tab (home, marketplace, wallet, transactions, profile)\n\
        \x20 home | market | wallet | tx | profile   Shortcuts for `tab`\n\
        \n\
        🛒 Marketplace\n\
        \x20 search [text]   Search sellers\n\
        \x20 filter          Open filters\n\
        \x20 buy <#>         Open the purchase dialog for a listing\n\
        \n\
        💳 Purchase dialog\n\
        \x20 amount [text]   Set the number of stars to buy\n\
        \x20 confirm         Pay and submit the purchase\n\
        \x20 cancel          Close the dialog\n\
        \n\
        ⚙ General\n\
        \x20 help            Show this message\n\
        \x20 quit            Leave StarMarket"
        .to_string())
}
