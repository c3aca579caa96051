/// Page renderers for the input form and the listing
///
/// Both pages extend the `base.html` shell; the views built here are the only
/// data the templates see.

use crate::{
    grade::COURSE_CATALOG,
    presentation::{
        form::FormValues,
        notification::Notification,
        pagination::{control_views, ListingState},
        table::{row_views, EMPTY_TABLE_TEXT},
        templates,
    },
};
use minijinja::context;
use serde::Serialize;

/// Which navigation entry is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Nav {
    Input,
    Listing,
}

/// Grade input page with `values` prefilled
pub fn render_form_page(
    values: &FormValues,
    notification: Option<&Notification>,
) -> Result<String, minijinja::Error> {
    templates::render(
        "form.html",
        &context! {
            nav => Nav::Input,
            notification => notification.map(Notification::view),
            form => values,
            courses => COURSE_CATALOG,
        },
    )
}

/// Listing page for `state`; page links go through `href`
pub fn render_listing_page(
    state: &ListingState,
    notification: Option<&Notification>,
    href: impl Fn(usize) -> String,
) -> Result<String, minijinja::Error> {
    templates::render(
        "listing.html",
        &context! {
            nav => Nav::Listing,
            notification => notification.map(Notification::view),
            total => state.total(),
            rows => row_views(state),
            empty_text => EMPTY_TABLE_TEXT,
            controls => control_views(&state.controls(), href),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_holds_at_most_one_alert() {
        let notification = Notification::success("Grade saved successfully!");
        let html = render_form_page(&FormValues::default(), Some(&notification)).unwrap();
        assert_eq!(html.matches(r#"role="alert""#).count(), 1);
        assert!(html.contains(r#"<strong>Success!</strong> Grade saved successfully!"#));

        let quiet = render_form_page(&FormValues::default(), None).unwrap();
        assert!(quiet.contains(r#"<div id="alertContainer"></div>"#));
    }

    #[test]
    fn active_nav_entry_follows_the_page() {
        let form = render_form_page(&FormValues::default(), None).unwrap();
        assert!(form.contains(r#"<a class="active" href="/">Input Grade</a>"#));

        let listing = render_listing_page(&ListingState::default(), None, |p| format!("?page={p}")).unwrap();
        assert!(listing.contains(r#"<a class="active" href="/grades">View Data</a>"#));
        assert!(listing.contains("<title>Student Grades</title>"));
    }

    #[test]
    fn form_page_prefills_values_and_selects_course() {
        let values = FormValues {
            student_name: "Jane \"JD\" Doe".to_string(),
            student_id: "20231234".to_string(),
            course: "CS101 - Data Structures".to_string(),
            score: "88".to_string(),
        };
        let html = render_form_page(&values, None).unwrap();
        assert!(html.contains(r#"value="Jane &quot;JD&quot; Doe""#));
        assert!(html.contains(r#"value="20231234""#));
        assert!(html.contains(
            r#"<option value="CS101 - Data Structures" selected>CS101 - Data Structures</option>"#
        ));
        assert!(html.contains(r#"value="88""#));
    }

    #[test]
    fn cleared_form_selects_placeholder() {
        let html = render_form_page(&FormValues::default(), None).unwrap();
        assert!(html.contains(r#"<option value="" selected>-- Select course --</option>"#));
        assert_eq!(html.matches(" selected>").count(), 1);
    }

    #[test]
    fn empty_listing_shows_placeholder_without_controls() {
        let html = render_listing_page(&ListingState::default(), None, |p| format!("?page={p}")).unwrap();
        assert!(html.contains(r#"<span id="totalData" class="badge">0</span>"#));
        assert!(html.contains("No grade records yet"));
        assert!(html.contains(r#"<div id="paginationContainer"></div>"#));
    }
}
