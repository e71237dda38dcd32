// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub clean: CleanOptions,
    pub join: JoinOptions,
    pub render: RenderOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Map,
    Production,
    Unmatched,
}

/// Where the production table comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    /// Saved copy of the page; parsed as-is, never written.
    HtmlFile(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub source: Source,
    pub table_index: usize,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            source: Source::Url(s!(SOURCE_URL)),
            table_index: TABLE_INDEX,
            user_agent: s!(USER_AGENT),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanOptions {
    /// Check header text of the positional columns before renaming.
    pub strict_headers: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self { strict_headers: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinOptions {
    pub map_file: PathBuf,
    /// Two-column CSV of `source name,region name`. None = no correction.
    pub aliases_file: Option<PathBuf>,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            map_file: PathBuf::from(DEFAULT_MAP_FILE),
            aliases_file: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub breaks: [f64; 5],
    pub palette: [String; 5],
    pub na_color: String,
    pub background: String,
    pub outline: Option<String>,
    pub text_color: String,
    pub font_family: String,
    pub title: String,
    pub subtitle: String,
    pub caption: String,
    pub legend_title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            breaks: BREAKS,
            palette: PALETTE.map(String::from),
            na_color: s!(NA_COLOR),
            background: s!(BACKGROUND),
            outline: Some(s!(OUTLINE)),
            text_color: s!(TEXT_COLOR),
            font_family: s!(FONT_FAMILY),
            title: s!(TITLE),
            subtitle: s!(SUBTITLE),
            caption: s!(CAPTION),
            legend_title: s!(LEGEND_TITLE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    /// Field separator for the tabular formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Svg | ExportFormat::Png => None,
        }
    }

    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "svg" => Some(ExportFormat::Svg),
            "png" => Some(ExportFormat::Png),
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Svg,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, extension from the format unless the user typed one.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.user_ext {
            Some(e) => e.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        self.out_path.dir.join(join!(&*stem, ".", &ext))
    }

    /// Parse GUI/CLI text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p.extension().map(|e| e.to_os_string());
        if let Some(fmt) = self.out_path.user_ext.as_ref().and_then(|e| ExportFormat::from_ext(&e.to_string_lossy())) {
            self.format = fmt;
        }
    }

    /// Switching format drops an extension that named another known format.
    pub fn set_format(&mut self, fmt: ExportFormat) {
        let known = self
            .out_path
            .user_ext
            .as_ref()
            .and_then(|e| ExportFormat::from_ext(&e.to_string_lossy()))
            .is_some();
        if known {
            self.out_path.user_ext = None;
        }
        self.format = fmt;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    user_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}
