use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeTable {
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
}

impl FileTypeTable {
    #[must_use]
    pub fn video_extensions_set(&self) -> HashSet<String> {
        self.video_file
            .iter()
            .map(|ext| normalize_extension(ext))
            .collect()
    }
}

/// 將 `mp4`、`.MP4` 等寫法統一成 `.mp4`
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    format!(".{}", ext.trim().trim_start_matches('.').to_lowercase())
}

/// 檢查路徑的副檔名是否在集合內（不分大小寫）
#[must_use]
pub fn has_extension_in(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&normalize_extension(ext)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::ZhTw => write!(f, "繁體中文"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    /// 自訂要掃描的副檔名，空白時使用內建影片清單
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file_type_table: FileTypeTable,
    pub settings: UserSettings,
}

impl Config {
    /// 決定本次掃描使用的副檔名集合
    ///
    /// 優先順序：命令列 `--ext` > settings.json 的 `extensions` > 內建影片清單
    #[must_use]
    pub fn scan_extensions(&self, cli_override: &[String]) -> HashSet<String> {
        if !cli_override.is_empty() {
            return cli_override.iter().map(|e| normalize_extension(e)).collect();
        }
        if !self.settings.extensions.is_empty() {
            return self
                .settings
                .extensions
                .iter()
                .map(|e| normalize_extension(e))
                .collect();
        }
        self.file_type_table.video_extensions_set()
    }
}
