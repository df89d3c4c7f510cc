/// Coin ids priced on every refresh.
pub const DEFAULT_COIN_IDS: &[&str] = &[
    "bitcoin",
    "ethereum",
    "ripple",
    "solana",
    "dogecoin",
    "cardano",
    "shiba-inu",
];

/// Quote currency for every price on the board.
pub const QUOTE_CURRENCY: &str = "usd";

/// File name of the CSV snapshot and of the download attachment.
pub const SNAPSHOT_FILE_NAME: &str = "crypto_data.csv";

/// Header row of the CSV snapshot.
pub const CSV_HEADERS: [&str; 4] = ["Name", "Symbol", "Price (USD)", "24h Change"];
