//! URL categorization
//!
//! Maps a URL string to one of a fixed set of content categories by testing
//! an ordered keyword rule table against the lowercased URL. The first rule
//! with any substring hit wins; rule order is a priority list, not a vote.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content category assigned to a crawled page
///
/// The category is derived from the URL alone and selects which structured
/// extractor (if any) runs over the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Degree program pages (bachelor, master, PhD, associate)
    AcademicProgram,
    /// Academic staff profile pages
    FacultyMember,
    /// Application and registration pages
    Admission,
    /// Tuition and fee pages
    FeeStructure,
    /// Events, seminars, academic calendar
    Event,
    /// News and announcements
    News,
    /// Research centers, projects, publications
    Research,
    /// Student services, clubs, facilities
    StudentService,
    /// Department landing pages; no URL rule maps here, but records can
    /// carry the value and downstream consumers key on it
    Department,
    /// Everything else
    General,
}

/// Ordered rule table: first category with any keyword substring match wins.
/// Academic-program keywords are checked before admission keywords so a URL
/// like `/basvuru/lisans-programlari` resolves deterministically.
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::AcademicProgram,
        &[
            "program",
            "bolum",
            "department",
            "lisans",
            "master",
            "doktora",
            "phd",
        ],
    ),
    (
        Category::FacultyMember,
        &["akademisyen", "faculty", "staff", "ogretim-uyesi", "personel"],
    ),
    (
        Category::Admission,
        &["basvuru", "admission", "kayit", "registration", "kabul"],
    ),
    (
        Category::FeeStructure,
        &["ucret", "fee", "tuition", "harc", "odeme", "payment"],
    ),
    (
        Category::Event,
        &["etkinlik", "event", "takvim", "calendar", "seminer", "seminar"],
    ),
    (
        Category::News,
        &["haber", "news", "duyuru", "announcement"],
    ),
    (
        Category::Research,
        &[
            "arastirma",
            "research",
            "proje",
            "project",
            "yayin",
            "publication",
        ],
    ),
    (
        Category::StudentService,
        &["ogrenci", "student", "servis", "service", "kulupler", "clubs"],
    ),
];

impl Category {
    /// All category values, for stats display and exhaustive iteration
    pub const ALL: [Category; 10] = [
        Category::AcademicProgram,
        Category::FacultyMember,
        Category::Admission,
        Category::FeeStructure,
        Category::Event,
        Category::News,
        Category::Research,
        Category::StudentService,
        Category::Department,
        Category::General,
    ];

    /// Categorize a URL
    ///
    /// Pure function: lowercases the URL and walks the rule table in order.
    /// Empty or malformed input returns [`Category::General`], never an error.
    pub fn from_url(url: &str) -> Category {
        let url = url.to_lowercase();
        for (category, keywords) in CATEGORY_RULES {
            if keywords.iter().any(|kw| url.contains(kw)) {
                return *category;
            }
        }
        Category::General
    }

    /// Stable snake_case name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AcademicProgram => "academic_program",
            Category::FacultyMember => "faculty_member",
            Category::Admission => "admission",
            Category::FeeStructure => "fee_structure",
            Category::Event => "event",
            Category::News => "news",
            Category::Research => "research",
            Category::StudentService => "student_service",
            Category::Department => "department",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
