/// Listing page controller
///
/// Owns the listing view state. Every load or navigation swaps the whole
/// `ListingState` through `ArcSwap`; nothing is ever updated in place. Until
/// the first load there is no state at all, so a page link followed before
/// any plain visit loads from the store instead of paging an empty set.

use crate::{
    grade::{GradeGateway, StoredGrade},
    presentation::{notification::Notification, pagination::ListingState},
    store::DocumentStore,
};
use arc_swap::ArcSwapOption;
use std::sync::Arc;

pub const EMPTY_MESSAGE: &str = "No grade records yet. Please add some first.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please refresh the page.";

#[derive(Debug)]
pub struct ListingController<S> {
    gateway: Arc<GradeGateway<S>>,
    state: ArcSwapOption<ListingState>,
}

impl<S: DocumentStore> ListingController<S> {
    pub fn new(gateway: Arc<GradeGateway<S>>) -> Self {
        Self {
            gateway,
            state: ArcSwapOption::empty(),
        }
    }

    /// Current view state, loading it on first use
    ///
    /// The notification is set only when this call had to load.
    pub async fn current(&self) -> (Arc<ListingState>, Option<Notification>) {
        match self.state.load_full() {
            Some(state) => (state, None),
            None => {
                let (state, notification) = self.reload().await;
                (state, Some(notification))
            }
        }
    }

    /// Load every record, sort it and show page 1
    ///
    /// A load failure degrades to an empty listing; the returned notification
    /// tells the user which of the three outcomes happened.
    pub async fn reload(&self) -> (Arc<ListingState>, Notification) {
        let (records, notification) = match self.gateway.try_load_all().await {
            Ok(mut records) => {
                sort_for_display(&mut records);
                let notification = if records.is_empty() {
                    Notification::info(EMPTY_MESSAGE)
                } else {
                    Notification::success(format!("Loaded {} grade records", records.len()))
                };
                (records, notification)
            }
            Err(e) => {
                tracing::error!(
                    collection = %self.gateway.collection(),
                    error = %e,
                    "❌ Failed to load grade listing"
                );
                (Vec::new(), Notification::danger(LOAD_FAILED_MESSAGE))
            }
        };

        let state = Arc::new(ListingState::loaded(records));
        self.state.store(Some(Arc::clone(&state)));
        tracing::debug!(total = state.total(), "📋 Listing state reloaded");

        (state, notification)
    }

    /// Move to `page` of the cached record set
    ///
    /// Pages outside `[1, total_pages]` are ignored and the current state is
    /// returned untouched. Loads first when nothing has been loaded yet.
    pub async fn navigate(&self, page: usize) -> (Arc<ListingState>, Option<Notification>) {
        let (current, notification) = self.current().await;
        match current.navigate(page) {
            Some(next) => {
                let next = Arc::new(next);
                self.state.store(Some(Arc::clone(&next)));
                (next, notification)
            }
            None => {
                tracing::debug!(
                    page,
                    total_pages = current.total_pages(),
                    "page request out of range, ignored"
                );
                (current, notification)
            }
        }
    }
}

/// Oldest first; ties broken by document id so pages are stable across loads
pub fn sort_for_display(records: &mut [StoredGrade]) {
    records.sort_by(|a, b| {
        a.record
            .created_at
            .cmp(&b.record.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        grade::{GradeRecord, DEFAULT_COLLECTION},
        presentation::notification::NotificationKind,
        store::MemoryDocumentStore,
    };
    use chrono::{Duration, TimeZone, Utc};

    fn controller() -> (
        MemoryDocumentStore,
        Arc<GradeGateway<MemoryDocumentStore>>,
        ListingController<MemoryDocumentStore>,
    ) {
        let store = MemoryDocumentStore::new();
        let gateway = Arc::new(GradeGateway::new(store.clone(), DEFAULT_COLLECTION));
        let controller = ListingController::new(Arc::clone(&gateway));
        (store, gateway, controller)
    }

    fn record(i: i64) -> GradeRecord {
        GradeRecord {
            student_name: format!("Student {i}"),
            student_id: format!("{}", 20230000 + i),
            course: "CS101 - Data Structures".to_string(),
            score: 75.0,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(i),
        }
    }

    #[tokio::test]
    async fn reload_sorts_by_creation_time_and_starts_on_page_one() {
        let (_, gateway, controller) = controller();
        for i in [3, 1, 2] {
            assert!(gateway.save(&record(i)).await);
        }

        let (state, notification) = controller.reload().await;

        let names: Vec<_> = state.records().iter().map(|g| g.record.student_name.as_str()).collect();
        assert_eq!(names, vec!["Student 1", "Student 2", "Student 3"]);
        assert_eq!(state.current_page(), 1);
        assert_eq!(notification, Notification::success("Loaded 3 grade records"));
    }

    #[tokio::test]
    async fn navigation_swaps_state_and_ignores_out_of_range() {
        let (_, gateway, controller) = controller();
        for i in 1..=25 {
            gateway.save(&record(i)).await;
        }
        controller.reload().await;

        assert_eq!(controller.navigate(3).await.0.current_page(), 3);
        assert_eq!(controller.current().await.0.visible().len(), 5);

        let (before, _) = controller.current().await;
        let (after_zero, zero_notification) = controller.navigate(0).await;
        let (after_four, _) = controller.navigate(4).await;
        assert!(Arc::ptr_eq(&before, &after_zero));
        assert!(Arc::ptr_eq(&before, &after_four));
        assert_eq!(zero_notification, None);
        assert_eq!(controller.current().await.0.current_page(), 3);
    }

    #[tokio::test]
    async fn navigation_uses_cached_records_until_reload() {
        let (_, gateway, controller) = controller();
        for i in 1..=11 {
            gateway.save(&record(i)).await;
        }
        controller.reload().await;
        gateway.save(&record(12)).await;

        assert_eq!(controller.navigate(2).await.0.total(), 11);
        assert_eq!(controller.reload().await.0.total(), 12);
    }

    #[tokio::test]
    async fn first_navigation_loads_from_the_store() {
        let (store, gateway, controller) = controller();
        for i in 1..=15 {
            gateway.save(&record(i)).await;
        }

        let (state, notification) = controller.navigate(2).await;

        assert_eq!(store.len(DEFAULT_COLLECTION), 15);
        assert_eq!(state.total(), 15);
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.visible().len(), 5);
        assert_eq!(notification, Some(Notification::success("Loaded 15 grade records")));

        let (again, notification) = controller.navigate(1).await;
        assert_eq!(again.total(), 15);
        assert_eq!(notification, None);
    }

    #[tokio::test]
    async fn empty_store_reports_info() {
        let (_, _, controller) = controller();
        let (state, notification) = controller.reload().await;
        assert_eq!(state.total(), 0);
        assert_eq!(notification, Notification::info(EMPTY_MESSAGE));
    }

    #[tokio::test]
    async fn load_failure_degrades_to_empty_with_danger() {
        let (store, gateway, controller) = controller();
        gateway.save(&record(1)).await;
        controller.reload().await;
        store.fail_lists(true);

        let (state, notification) = controller.reload().await;
        assert_eq!(state.total(), 0);
        assert_eq!(notification.kind, NotificationKind::Danger);
        assert_eq!(notification.message, LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn ties_fall_back_to_document_id() {
        use crate::store::DocumentId;
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let grade = |id: &str| StoredGrade {
            id: DocumentId::new(id),
            record: GradeRecord { created_at: at, ..record(1) },
        };
        let mut records = vec![grade("b"), grade("a"), grade("c")];
        sort_for_display(&mut records);
        let ids: Vec<_> = records.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
