//! Static category-keyword table.
//!
//! Each entry ties a topic trigger word to its canonical [`Category`] and to
//! the domain synonyms that signal the same topic in a query. The table is
//! fixed at compile time and never mutated.
use crate::catalog::Category;

#[derive(Debug, Clone, Copy)]
pub struct CategoryKeywords {
    /// Topic trigger word as a student would type it.
    pub trigger: &'static str,
    /// Canonical tag a section must carry to surface for this topic.
    pub category: Category,
    /// Synonym terms, led by the English canonical token.
    pub synonyms: &'static [&'static str],
}

impl CategoryKeywords {
    /// Whether a normalized query mentions this topic.
    #[must_use]
    pub fn signalled_by(&self, query: &str) -> bool {
        query.contains(self.trigger) || self.synonyms.iter().any(|k| query.contains(k))
    }
}

pub static CATEGORY_KEYWORDS: &[CategoryKeywords] = &[
    CategoryKeywords {
        trigger: "سياسة",
        category: Category::Political,
        synonyms: &[
            "political",
            "حكم",
            "دول",
            "صندوق",
            "دبلوماسية",
            "نزاع",
            "قانون",
        ],
    },
    CategoryKeywords {
        trigger: "بيئة",
        category: Category::Environmental,
        synonyms: &[
            "environmental",
            "طبيعة",
            "مناخ",
            "بحر",
            "تصحر",
            "تلوث",
            "كربون",
            "مياه",
            "شح",
            "نيل",
        ],
    },
    CategoryKeywords {
        trigger: "اجتماع",
        category: Category::Social,
        synonyms: &[
            "social", "ناس", "بشر", "حقوق", "نساء", "صحة", "هجرة", "فقر", "مجتمع",
        ],
    },
    CategoryKeywords {
        trigger: "اقتصاد",
        category: Category::Economic,
        synonyms: &[
            "economic",
            "مال",
            "تمويل",
            "دين",
            "وظائف",
            "سوق",
            "استثمار",
            "بنوك",
        ],
    },
    CategoryKeywords {
        trigger: "تكنولوجيا",
        category: Category::Technological,
        synonyms: &[
            "technological",
            "تقنية",
            "ذكاء",
            "رقمي",
            "ابتكار",
            "نظام",
            "تطبيق",
        ],
    },
    CategoryKeywords {
        trigger: "مقدمة",
        category: Category::Introduction,
        synonyms: &["intro", "أساس", "مفهوم", "تعريف", "مبادئ", "تاريخ"],
    },
];

/// Categories a normalized query signals, in table order.
#[must_use]
pub fn signalled_categories(query: &str) -> Vec<Category> {
    let mut out: Vec<Category> = Vec::new();
    for entry in CATEGORY_KEYWORDS {
        if entry.signalled_by(query) && !out.contains(&entry.category) {
            out.push(entry.category);
        }
    }
    out
}
