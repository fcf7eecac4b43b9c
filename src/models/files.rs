use serde::{Deserialize, Serialize};

/// File categories reported by the scanner, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Schemas,
    Documentation,
    Examples,
    CliTools,
    Planning,
    GuiViewer,
    Tracker,
}

impl FileCategory {
    pub const ALL: [FileCategory; 7] = [
        Self::Schemas,
        Self::Documentation,
        Self::Examples,
        Self::CliTools,
        Self::Planning,
        Self::GuiViewer,
        Self::Tracker,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Schemas => "Schemas",
            Self::Documentation => "Documentation",
            Self::Examples => "Examples",
            Self::CliTools => "CLI Tools",
            Self::Planning => "Planning",
            Self::GuiViewer => "GUI Viewer",
            Self::Tracker => "Tracker",
        }
    }
}

/// File names found per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileDetails {
    pub schemas: Vec<String>,
    pub docs: Vec<String>,
    pub examples: Vec<String>,
    pub tools: Vec<String>,
    pub planning: Vec<String>,
    pub gui: Vec<String>,
    pub tracker: Vec<String>,
}

/// Count per category, serialized with the display labels as keys.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCounts {
    #[serde(rename = "Schemas")]
    pub schemas: usize,
    #[serde(rename = "Documentation")]
    pub documentation: usize,
    #[serde(rename = "Examples")]
    pub examples: usize,
    #[serde(rename = "CLI Tools")]
    pub cli_tools: usize,
    #[serde(rename = "Planning")]
    pub planning: usize,
    #[serde(rename = "GUI Viewer")]
    pub gui_viewer: usize,
    #[serde(rename = "Tracker")]
    pub tracker: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: FileCategory) -> usize {
        match category {
            FileCategory::Schemas => self.schemas,
            FileCategory::Documentation => self.documentation,
            FileCategory::Examples => self.examples,
            FileCategory::CliTools => self.cli_tools,
            FileCategory::Planning => self.planning,
            FileCategory::GuiViewer => self.gui_viewer,
            FileCategory::Tracker => self.tracker,
        }
    }

    /// `(label, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        FileCategory::ALL
            .into_iter()
            .map(move |category| (category.label(), self.get(category)))
    }

    pub fn total(&self) -> usize {
        FileCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

impl From<&FileDetails> for CategoryCounts {
    fn from(details: &FileDetails) -> Self {
        Self {
            schemas: details.schemas.len(),
            documentation: details.docs.len(),
            examples: details.examples.len(),
            cli_tools: details.tools.len(),
            planning: details.planning.len(),
            gui_viewer: details.gui.len(),
            tracker: details.tracker.len(),
        }
    }
}

/// Result of scanning a project root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanReport {
    pub total: usize,
    pub by_category: CategoryCounts,
    pub details: FileDetails,
}

impl From<FileDetails> for ScanReport {
    fn from(details: FileDetails) -> Self {
        let by_category = CategoryCounts::from(&details);
        Self {
            total: by_category.total(),
            by_category,
            details,
        }
    }
}
