//! Structured payload types
//!
//! A tagged union over the categories that have a registered extractor. A
//! payload is only attached to a record when the extractor found at least
//! the fields its emission gate requires; degenerate payloads are never
//! emitted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Academic degree level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeType {
    /// Two-year associate degree (ön lisans)
    Associate,
    /// Four-year bachelor degree (lisans)
    Bachelor,
    /// Master degree (yüksek lisans)
    Master,
    /// Doctorate (doktora)
    Phd,
}

/// Language of instruction for a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeachingLanguage {
    /// Instruction in Turkish
    Turkish,
    /// Instruction in English
    English,
    /// Mixed Turkish/English instruction
    Bilingual,
}

/// Degree program details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicProgram {
    /// Program name, from the primary heading
    pub program_name: Option<String>,
    /// Meta description, when present
    pub description: Option<String>,
    /// Degree level inferred from page text
    pub degree_type: Option<DegreeType>,
    /// Faculty, from the second breadcrumb entry
    pub faculty: Option<String>,
    /// Department, from the third breadcrumb entry
    pub department: Option<String>,
    /// Program duration in years
    pub duration_years: Option<f32>,
    /// Language of instruction
    pub teaching_language: Option<TeachingLanguage>,
    /// First currency-tagged amount on the page
    pub tuition_fee: Option<String>,
    /// Items of the list following an admission-requirements heading
    pub admission_requirements: Vec<String>,
    /// Course names following a curriculum heading
    pub curriculum: Vec<String>,
}

impl AcademicProgram {
    pub(crate) fn is_empty(&self) -> bool {
        self.program_name.is_none()
            && self.description.is_none()
            && self.degree_type.is_none()
            && self.faculty.is_none()
            && self.department.is_none()
            && self.duration_years.is_none()
            && self.teaching_language.is_none()
            && self.tuition_fee.is_none()
            && self.admission_requirements.is_empty()
            && self.curriculum.is_empty()
    }
}

/// Academic staff profile details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacultyMember {
    /// Full name, from the primary heading; required for emission
    pub name: String,
    /// Academic title (Prof. Dr., Doç. Dr., ...)
    pub title: Option<String>,
    /// First email found on the page
    pub email: Option<String>,
    /// First phone number found on the page
    pub phone: Option<String>,
    /// Research areas listed under a matching heading
    pub research_areas: Vec<String>,
    /// Education history listed under a matching heading
    pub education: Vec<String>,
    /// Courses taught, listed under a matching heading
    pub courses: Vec<String>,
}

/// Application and registration details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdmissionInfo {
    /// Admission requirements list
    pub requirements: Vec<String>,
    /// Required application documents
    pub required_documents: Vec<String>,
    /// First date-like token on the page
    pub application_deadline: Option<String>,
    /// Application process steps
    pub application_process: Vec<String>,
    /// Entrance exams mentioned anywhere in the text (YKS, ALES, TOEFL, ...)
    pub entrance_exams: Vec<String>,
}

impl AdmissionInfo {
    pub(crate) fn is_empty(&self) -> bool {
        self.requirements.is_empty()
            && self.required_documents.is_empty()
            && self.application_deadline.is_none()
            && self.application_process.is_empty()
            && self.entrance_exams.is_empty()
    }
}

/// Tuition and fee details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeStructure {
    /// First currency-tagged amount on the page
    pub tuition_fee: Option<String>,
    /// Fee name to amount, parsed from tables with fee-related headers
    pub other_fees: BTreeMap<String, String>,
    /// Set when a scholarship section heading was found
    pub scholarship_available: Option<bool>,
    /// List or paragraph following the scholarship heading
    pub scholarship_details: Vec<String>,
}

/// University event details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event title, from the primary heading; required for emission
    pub title: String,
    /// First date-like token on the page
    pub date: Option<String>,
    /// First HH:MM token on the page
    pub time: Option<String>,
    /// Text following a location label (location:, venue:, ...)
    pub location: Option<String>,
    /// Meta description or first paragraph
    pub description: Option<String>,
}

/// News article details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Article title, from the primary heading; required for emission
    pub title: String,
    /// Publication date, from a time element or the first date token
    pub date: Option<String>,
    /// News category, from the last breadcrumb entry
    pub category: Option<String>,
    /// First paragraph of the article body
    pub summary: Option<String>,
    /// Full article body text
    pub content: Option<String>,
    /// Featured image URL
    pub image_url: Option<String>,
}

/// Category-specific payload attached to a [`super::PageRecord`]
///
/// Internally tagged so the serialized form carries its variant name, the
/// way downstream consumers key on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuredData {
    /// Degree program page
    AcademicProgram(AcademicProgram),
    /// Staff profile page
    FacultyMember(FacultyMember),
    /// Admission information page
    Admission(AdmissionInfo),
    /// Fee information page
    FeeStructure(FeeStructure),
    /// Event page
    Event(Event),
    /// News article page
    News(NewsItem),
}
