// src/config/consts.rs

// Catalog
pub const CATALOG_FILE: &str = "products.json";
pub const CATALOG_ENV: &str = "PRODUCT_CATALOG";
pub const ALL_CATEGORIES: &str = "All";
pub const CURRENCY: &str = "₹";

// Local state (logs, settings)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "explorer.cfg";

// Export
pub const DEFAULT_EXPORT_STEM: &str = "products";
pub const EXPORT_COLUMNS: [&str; 4] = ["name", "price", "rating", "category"];

// Extractor
pub const SCRAPE_INPUT: &str = "dummy_ecommerce.html";
pub const SCRAPE_OUTPUT: &str = "products.csv";
pub const SCRAPE_HEADERS: [&str; 3] = ["Product Name", "Price", "Rating"];
pub const SCRAPE_DEFAULT_CATEGORY: &str = "Uncategorized";

// Window
pub const APP_TITLE: &str = "Smart Product Explorer 🛍️";
pub const WINDOW_W: u32 = 950;
pub const WINDOW_H: u32 = 600;

// Robo-Assistant
pub const ASSISTANT_TITLE: &str = "Robo-Assistant";
pub const DEAL_TITLE: &str = "🎉 Deal of the Day 🎉";
pub const ASSISTANT_MESSAGES: &[&str] = &[
    "💡 Tip: Always compare ratings before buying!",
    "🎉 Fun Fact: Online shopping grows 20% every year!",
    "🛒 Robo says: Don’t forget to check today’s deals!",
    "🤖 I can help you filter faster. Try categories!",
];
