/// Grade table rows for the listing page

use crate::presentation::{pagination::ListingState, templates};
use minijinja::context;
use serde::Serialize;

const COURSE_SEPARATOR: &str = " - ";

/// Placeholder text for an empty record set
pub const EMPTY_TABLE_TEXT: &str = "No grade records yet";

/// Course name shown in the table
///
/// `"CS101 - Data Structures"` becomes `"Data Structures"`. Values without a
/// separator (or with nothing after it) are shown unchanged.
pub fn course_display_name(course: &str) -> &str {
    match course.split(COURSE_SEPARATOR).nth(1) {
        Some(name) if !name.is_empty() => name,
        _ => course,
    }
}

/// One table row as the templates see it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView<'a> {
    /// 1-based position across the whole record set
    pub number: usize,
    pub student_name: &'a str,
    pub student_id: &'a str,
    pub course: &'a str,
    pub score: String,
}

/// Rows for the current page of `state`, numbered globally
pub fn row_views(state: &ListingState) -> Vec<RowView<'_>> {
    let first = state.first_index();
    state
        .visible()
        .iter()
        .enumerate()
        .map(|(offset, grade)| {
            let record = &grade.record;
            RowView {
                number: first + offset + 1,
                student_name: &record.student_name,
                student_id: &record.student_id,
                course: course_display_name(&record.course),
                // f64 Display drops a trailing ".0"
                score: record.score.to_string(),
            }
        })
        .collect()
}

/// `<tr>` rows for the current page of `state`
pub fn render_rows(state: &ListingState) -> Result<String, minijinja::Error> {
    templates::render(
        "rows.html",
        &context! { rows => row_views(state), empty_text => EMPTY_TABLE_TEXT },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        grade::{GradeRecord, StoredGrade},
        store::DocumentId,
    };
    use chrono::Utc;

    fn grade(i: usize, course: &str, score: f64) -> StoredGrade {
        StoredGrade {
            id: DocumentId::new(format!("doc-{i}")),
            record: GradeRecord {
                student_name: format!("Student {i}"),
                student_id: format!("{}", 20230000 + i),
                course: course.to_string(),
                score,
                created_at: Utc::now(),
            },
        }
    }

    #[test]
    fn course_name_is_the_part_after_the_separator() {
        assert_eq!(course_display_name("CS101 - Data Structures"), "Data Structures");
        assert_eq!(course_display_name("CS101"), "CS101");
        assert_eq!(course_display_name("CS101 - "), "CS101 - ");
        assert_eq!(course_display_name("A - B - C"), "B");
        assert_eq!(course_display_name("CS101-Data"), "CS101-Data");
    }

    #[test]
    fn empty_state_renders_placeholder_row() {
        let html = render_rows(&ListingState::default()).unwrap();
        assert!(html.contains(r#"colspan="5""#));
        assert!(html.contains(EMPTY_TABLE_TEXT));
    }

    #[test]
    fn rows_are_numbered_across_pages() {
        let grades: Vec<_> = (1..=12).map(|i| grade(i, "CS101 - Data Structures", 88.0)).collect();
        let page_two = ListingState::loaded(grades).navigate(2).unwrap();

        let html = render_rows(&page_two).unwrap();
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.starts_with("<tr><td>11</td><td>Student 11</td><td>20230011</td><td>Data Structures</td>"));
        assert!(html.contains("<td>12</td>"));
    }

    #[test]
    fn scores_render_without_trailing_zeroes() {
        let state = ListingState::loaded(vec![grade(1, "CS101", 88.0), grade(2, "CS101", 88.5)]);
        let html = render_rows(&state).unwrap();
        assert!(html.contains(r#"<span class="badge bg-primary">88</span>"#));
        assert!(html.contains(r#"<span class="badge bg-primary">88.5</span>"#));
        assert!(html.contains("<td>CS101</td>"));
    }

    #[test]
    fn user_values_are_escaped() {
        let mut g = grade(1, "CS101 - <i>Data</i>", 50.0);
        g.record.student_name = "<b>Jane</b>".to_string();
        let html = render_rows(&ListingState::loaded(vec![g])).unwrap();
        assert!(html.contains("<td>&lt;b&gt;Jane&lt;"));
        assert!(html.contains("<td>&lt;i&gt;Data&lt;"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<i>"));
    }
}
