//! Application-wide constants.
//!
//! The defaults describe the site layout the tool was first written for:
//! a flat set of pages next to an `images/` directory and one stylesheet.

/// Output format constants
pub mod output_formats {
    /// Human-readable report
    pub const TEXT: &str = "text";
    /// Structured output for automation
    pub const JSON: &str = "json";
    /// Unused image paths only, one per line
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Default site layout
pub mod defaults {
    /// Directory holding the candidate images
    pub const IMAGES_DIR: &str = "images";

    /// Pages scanned for references, in scan order
    pub const HTML_FILES: [&str; 7] = [
        "index.html",
        "cennik.html",
        "kontakt.html",
        "o-nas.html",
        "ochrana-osobnych-udajov.html",
        "sluzby.html",
        "404.html",
    ];

    /// Stylesheets scanned for references
    pub const STYLESHEETS: [&str; 1] = ["css/custom.css"];

    /// Config file looked up in the site root
    pub const CONFIG_FILE: &str = ".imgsweep.toml";
}

/// Reference pattern templates. `{prefix}` is replaced with the escaped
/// reference prefix; each pattern captures the path after it in group 1.
pub mod patterns {
    /// Placeholder substituted with the reference prefix
    pub const PREFIX_PLACEHOLDER: &str = "{prefix}";

    /// Unquoted token in a page
    pub const HTML_UNQUOTED: &str = r#"{prefix}/([^\s"'<>)]+)"#;
    /// Double-quoted attribute value
    pub const HTML_DOUBLE_QUOTED: &str = r#""{prefix}/([^"]+)""#;
    /// Single-quoted attribute value
    pub const HTML_SINGLE_QUOTED: &str = r#"'{prefix}/([^']+)'"#;

    /// Unquoted token in a stylesheet
    pub const CSS_UNQUOTED: &str = r#"{prefix}/([^\s'"<>)]+)"#;
    /// `url(../{prefix}/...)` with optional quote
    pub const CSS_URL: &str = r#"url\(['"]?\.\./{prefix}/([^'"\s)]+)"#;

    /// Page patterns, in match order
    pub const HTML: [&str; 3] = [HTML_UNQUOTED, HTML_DOUBLE_QUOTED, HTML_SINGLE_QUOTED];
    /// Stylesheet patterns, in match order
    pub const CSS: [&str; 2] = [CSS_UNQUOTED, CSS_URL];
}

/// Report layout
pub mod display {
    /// Width of the `=` and `-` rules
    pub const RULE_WIDTH: usize = 60;
    /// Indent before each listed path
    pub const ITEM_INDENT: &str = "  ";
}
