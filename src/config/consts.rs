// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://en.wikipedia.org/wiki/List_of_countries_by_oil_production";
pub const USER_AGENT: &str = "oil_map/0.1 (choropleth scraper)";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Source table
pub const TABLE_INDEX: usize = 0;
pub const EXPECTED_COLUMNS: usize = 4;
pub const OPEC_MARKER: &str = "OPEC";
pub const OPEC_ANNOTATION: &str = "(OPEC)";
pub const THOUSANDS_SEPARATORS: &[char] = &[',', '\u{a0}', '\u{202f}', '\u{2009}'];

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "oil_map.log";
pub const DEFAULT_MAP_FILE: &str = "data/world.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "oil_production";
pub const NA: &str = "NA";

// Gradient: anchor values (bbl/day) and their colours
pub const BREAKS: [f64; 5] = [100.0, 96_581.0, 822_675.0, 3_190_373.0, 10_000_000.0];
pub const PALETTE: [&str; 5] = ["#fff7bc", "#fec44f", "#fe9929", "#d95f0e", "#7f2704"];
pub const NA_COLOR: &str = "#4a4a4a";
pub const BACKGROUND: &str = "#1d2330";
pub const OUTLINE: &str = "#12161f";
pub const TEXT_COLOR: &str = "#f0f0f0";
pub const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

// Figure text
pub const TITLE: &str = "Oil Production by Country";
pub const SUBTITLE: &str = "Barrels per day, 2019";
pub const CAPTION: &str = "Source: Wikipedia, List of countries by oil production";
pub const LEGEND_TITLE: &str = "bbl/day";

// Figure size (px)
pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 700;

// Breakpoint derivation
pub const SPLIT_THRESHOLD: i64 = 822_675;
