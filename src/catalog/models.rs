use serde::{Deserialize, Serialize};

/// The closed set of curriculum dimensions a section can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "intro")]
    Introduction,
    Environmental,
    Political,
    Economic,
    Social,
    Technological,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Category; 6] = [
        Category::Introduction,
        Category::Environmental,
        Category::Political,
        Category::Economic,
        Category::Social,
        Category::Technological,
    ];

    /// Canonical lowercase tag, as stored in catalog files.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Category::Introduction => "introduction",
            Category::Environmental => "environmental",
            Category::Political => "political",
            Category::Economic => "economic",
            Category::Social => "social",
            Category::Technological => "technological",
        }
    }

    /// Short Arabic label used in navigation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Introduction => "المقدمة",
            Category::Environmental => "البيئي",
            Category::Political => "السياسي",
            Category::Economic => "الاقتصادي",
            Category::Social => "الاجتماعي",
            Category::Technological => "التكنولوجي",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Localized badge text. Introductory sections describe states, not hazards,
    /// so they drop the "risk" prefix.
    #[must_use]
    pub fn label(self, intro: bool) -> &'static str {
        match (self, intro) {
            (RiskLevel::Critical, false) => "خطر حرج",
            (RiskLevel::Critical, true) => "حرج",
            (RiskLevel::High, false) => "خطر مرتفع",
            (RiskLevel::High, true) => "مرتفع",
            (RiskLevel::Medium, false) => "خطر متوسط",
            (RiskLevel::Medium, true) => "متوسط",
            (RiskLevel::Low, false) => "خطر مستقر",
            (RiskLevel::Low, true) => "مستقر",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FocusKind {
    River,
    #[default]
    Region,
    Arctic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalImpact {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub description: String,
}

/// Geographic anchor attached to a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoFocus {
    pub region_name: String,
    pub lat: f64,
    pub lng: f64,
    /// Falls back to the configured default zoom when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub narrative: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_color: Option<String>,
    #[serde(default)]
    pub kind: FocusKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detailed_impacts: Vec<RegionalImpact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub landmarks: Vec<Landmark>,
}

impl GeoFocus {
    /// Find a landmark by exact name.
    #[must_use]
    pub fn landmark(&self, name: &str) -> Option<&Landmark> {
        self.landmarks.iter().find(|l| l.name == name)
    }
}

/// One sub-topic within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub impacts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_examples: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_info: Option<GeoFocus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    pub task: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activities {
    pub individual: Activity,
    pub group: Activity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}

/// One top-level curriculum unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Activities>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub is_map_section: bool,
}

impl Section {
    /// Whether the section has any point detail to render.
    #[must_use]
    pub fn has_detail(&self) -> bool {
        !self.points.is_empty()
    }

    #[must_use]
    pub fn is_intro(&self) -> bool {
        self.category == Category::Introduction
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }
}
