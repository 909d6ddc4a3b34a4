//! Academic-program extraction strategy

use crate::crawler::page::{OutlineBlock, ParsedPage};
use crate::crawler::structured::{AcademicProgram, StructuredData};
use crate::crawler::text;

const REQUIREMENT_KEYWORDS: &[&str] = &["gereklilik", "şart", "requirement", "admission", "başvuru"];
const CURRICULUM_KEYWORDS: &[&str] = &["müfredat", "ders", "curriculum", "course"];

pub(super) fn extract(page: &ParsedPage) -> Option<StructuredData> {
    let page_text = page.text();

    let mut program = AcademicProgram {
        program_name: page.primary_heading(),
        description: page.meta_description(),
        degree_type: text::infer_degree_type(&page_text),
        duration_years: text::infer_duration_years(&page_text),
        teaching_language: text::infer_teaching_language(&page_text),
        tuition_fee: text::extract_price(&page_text),
        ..Default::default()
    };

    // faculty and department sit at fixed breadcrumb positions:
    // home / faculty / department / program
    let breadcrumb = page.breadcrumb();
    program.faculty = breadcrumb.get(1).cloned();
    program.department = breadcrumb.get(2).cloned();

    if let Some(OutlineBlock::List(items)) = page.heading_block(REQUIREMENT_KEYWORDS, &["ul", "ol"])
    {
        program.admission_requirements = items;
    }

    match page.heading_block(CURRICULUM_KEYWORDS, &["ul", "ol", "table"]) {
        Some(OutlineBlock::List(items)) => program.curriculum = items,
        Some(OutlineBlock::Table(rows)) => {
            // course name is the first cell of each data row
            program.curriculum = rows
                .into_iter()
                .skip(1)
                .filter_map(|row| row.into_iter().next())
                .filter(|course| !course.is_empty())
                .collect();
        }
        _ => {}
    }

    (!program.is_empty()).then_some(StructuredData::AcademicProgram(program))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::structured::{DegreeType, TeachingLanguage};

    const HTML: &str = r#"<html><head>
        <meta name="description" content="Four-year software engineering program">
      </head><body>
        <nav class="breadcrumb"><a href="/">Home</a><a href="/f">Faculty of Engineering</a><a href="/d">Software Engineering</a></nav>
        <main>
          <h1>Software Engineering Bachelor Program</h1>
          <p>The program takes 4 years and is taught 100% English. Tuition is 180.000 TL.</p>
          <h2>Admission Requirements</h2>
          <ul><li>High school diploma</li><li>Placement exam score</li></ul>
          <h2>Curriculum</h2>
          <table>
            <tr><th>Course</th><th>Credits</th></tr>
            <tr><td>Programming I</td><td>6</td></tr>
            <tr><td>Discrete Mathematics</td><td>5</td></tr>
          </table>
        </main>
      </body></html>"#;

    #[test]
    fn test_full_program_page() {
        let page = ParsedPage::new("https://www.izu.edu.tr/en/software-engineering", HTML).unwrap();
        let Some(StructuredData::AcademicProgram(program)) = extract(&page) else {
            panic!("expected a program payload");
        };

        assert_eq!(
            program.program_name.as_deref(),
            Some("Software Engineering Bachelor Program")
        );
        assert_eq!(program.degree_type, Some(DegreeType::Bachelor));
        assert_eq!(program.duration_years, Some(4.0));
        assert_eq!(program.teaching_language, Some(TeachingLanguage::English));
        assert_eq!(program.tuition_fee.as_deref(), Some("180.000 TRY"));
        assert_eq!(program.faculty.as_deref(), Some("Faculty of Engineering"));
        assert_eq!(program.department.as_deref(), Some("Software Engineering"));
        assert_eq!(
            program.admission_requirements,
            vec!["High school diploma", "Placement exam score"]
        );
        assert_eq!(program.curriculum, vec!["Programming I", "Discrete Mathematics"]);
    }

    #[test]
    fn test_curriculum_from_list() {
        let html = r#"<html><body><main>
            <h3>Dersler</h3>
            <ul><li>Algoritmalar</li><li>Veri Yapilari</li></ul>
        </main></body></html>"#;
        let page = ParsedPage::new("https://www.izu.edu.tr/tr/program", html).unwrap();
        let Some(StructuredData::AcademicProgram(program)) = extract(&page) else {
            panic!("expected a program payload");
        };
        assert_eq!(program.curriculum, vec!["Algoritmalar", "Veri Yapilari"]);
    }

    #[test]
    fn test_bare_page_yields_none() {
        let page = ParsedPage::new("https://www.izu.edu.tr/x", "<html><body></body></html>")
            .unwrap();
        assert!(extract(&page).is_none());
    }
}
