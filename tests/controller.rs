mod common;

use contact_list::domain::contact::NewContact;
use contact_list::dto::api::ContactsQuery;
use contact_list::forms::contact::{AddContactForm, ContactField};
use contact_list::notifications::NotificationKind;
use contact_list::repository::{ContactReader, InMemoryRepository};
use contact_list::services::contacts::{
    CREATE_SUCCESS_MESSAGE, ContactsController, DELETE_SUCCESS_MESSAGE, FETCH_ERROR_MESSAGE,
    FetchOutcome,
};

use common::{GatedRepository, RecordingNotifier, controller, limit};

#[tokio::test]
async fn third_page_of_twelve_holds_two_contacts() {
    let controller = controller(12);
    controller.request_page(1).await.expect("should load page");

    let outcome = controller.request_page(3).await.expect("should load page");

    assert_eq!(outcome, FetchOutcome::Loaded { page: 3 });
    let window = controller.window();
    assert_eq!(controller.contacts().len(), 2);
    assert_eq!(window.page(), 3);
    assert_eq!(window.total_pages(), 3);
    assert_eq!(window.total(), 12);
}

#[tokio::test]
async fn unknown_bounds_clamp_before_first_load() {
    let controller = controller(12);

    let outcome = controller.request_page(3).await.expect("should clamp");

    assert_eq!(outcome, FetchOutcome::Clamped { page: 1 });
    assert_eq!(controller.repo().list_calls(), 0);
}

#[tokio::test]
async fn pages_past_the_end_never_reach_the_backend() {
    let controller = controller(12);
    controller.request_page(2).await.expect("should clamp");
    controller.request_page(1).await.expect("should load page");
    let shown = controller.contacts();

    for requested in [4, 5, 100, u32::MAX] {
        let outcome = controller.request_page(requested).await.expect("should clamp");
        assert_eq!(outcome, FetchOutcome::Clamped { page: 3 });
        assert_eq!(controller.page(), 3);
    }

    assert_eq!(controller.repo().list_calls(), 1);
    assert_eq!(controller.contacts(), shown);
    assert!(controller.notifier().take().is_empty());
}

#[tokio::test]
async fn snapshot_is_replaced_by_backend_page() {
    let controller = controller(12);
    controller.request_page(1).await.expect("should load page");
    controller.request_page(2).await.expect("should load page");

    let expected = controller
        .repo()
        .list_contacts(ContactsQuery::new(2, limit(5)))
        .await
        .expect("should list");

    assert_eq!(controller.contacts(), expected.contacts);
}

#[tokio::test]
async fn reloading_the_same_page_is_idempotent() {
    let controller = controller(12);
    controller.request_page(1).await.expect("should load page");
    controller.request_page(2).await.expect("should load page");
    let first = controller.view();

    controller.refresh().await.expect("should reload");
    let second = controller.view();

    assert_eq!(first.contacts, second.contacts);
    assert_eq!(first.window, second.window);
}

#[tokio::test]
async fn deleting_last_contact_on_page_steps_back() {
    let controller = controller(11);
    controller.request_page(1).await.expect("should load page");
    controller.request_page(3).await.expect("should load page");
    assert_eq!(controller.contacts().len(), 1);
    let id = controller.contacts()[0].id.clone();

    controller.remove(&id).await.expect("should delete");

    let window = controller.window();
    assert_eq!(window.page(), 2);
    assert_eq!(window.total_pages(), 2);
    assert_eq!(window.total(), 10);
    assert_eq!(controller.contacts().len(), 5);
    assert_eq!(controller.repo().list_calls(), 3);
    assert!(controller.notifier().take().is_empty());
}

#[tokio::test]
async fn deleting_only_contact_on_first_page_stays_on_first_page() {
    let controller = controller(1);
    controller.request_page(1).await.expect("should load page");
    let id = controller.contacts()[0].id.clone();

    controller.remove(&id).await.expect("should delete");

    let window = controller.window();
    assert_eq!(window.page(), 1);
    assert_eq!(window.total_pages(), 0);
    assert_eq!(window.total(), 0);
    assert!(controller.contacts().is_empty());
}

#[tokio::test]
async fn deleting_from_a_fuller_page_reloads_it() {
    let controller = controller(6);
    controller.request_page(1).await.expect("should load page");
    let id = controller.contacts()[2].id.clone();

    controller.remove(&id).await.expect("should delete");

    assert_eq!(controller.page(), 1);
    assert_eq!(controller.contacts().len(), 5);
    assert!(controller.contacts().iter().all(|contact| contact.id != id));
    assert_eq!(
        controller.notifier().take(),
        vec![(DELETE_SUCCESS_MESSAGE.to_string(), NotificationKind::Success)]
    );
}

#[tokio::test]
async fn submitting_the_form_creates_and_resets() {
    let controller = controller(4);
    controller.request_page(1).await.expect("should load page");
    controller.toggle_form();
    controller.set_form_field(ContactField::Name, "A");
    controller.set_form_field(ContactField::Email, "a@a.com");
    controller.set_form_field(ContactField::Phone, "1");

    controller.submit_form().await.expect("should create");

    assert_eq!(controller.form(), AddContactForm::default());
    assert_eq!(controller.repo().len(), 5);
    assert_eq!(controller.repo().list_calls(), 2);
    assert_eq!(controller.window().total(), 5);
    assert_eq!(controller.contacts().len(), 5);
    assert_eq!(
        controller.notifier().take(),
        vec![(CREATE_SUCCESS_MESSAGE.to_string(), NotificationKind::Success)]
    );
}

#[tokio::test]
async fn create_accepts_unvalidated_input() {
    let controller = controller(0);

    controller
        .create(&NewContact::new("", "not an email", ""))
        .await
        .expect("should create");

    assert_eq!(controller.repo().len(), 1);
}

#[tokio::test]
async fn failed_list_leaves_everything_unchanged() {
    let controller = controller(12);
    controller.request_page(1).await.expect("should load page");
    let before = controller.view();
    controller.repo().fail_next(500, None);

    controller.request_page(3).await.unwrap_err();

    let after = controller.view();
    assert_eq!(after.contacts, before.contacts);
    assert_eq!(after.window, before.window);
    assert!(!after.loading);
    assert_eq!(
        controller.notifier().take(),
        vec![(FETCH_ERROR_MESSAGE.to_string(), NotificationKind::Error)]
    );
}

#[tokio::test]
async fn next_and_previous_walk_the_pages() {
    let controller = controller(12);
    controller.refresh().await.expect("should load page");

    controller.next_page().await.expect("enabled").expect("should load");
    controller.next_page().await.expect("enabled").expect("should load");
    assert_eq!(controller.page(), 3);
    assert!(controller.next_page().await.is_none());

    controller.previous_page().await.expect("enabled").expect("should load");
    assert_eq!(controller.page(), 2);
    assert_eq!(controller.contacts().len(), 5);
}

#[tokio::test]
async fn superseded_response_is_dropped() {
    let controller = ContactsController::new(
        GatedRepository::new(InMemoryRepository::seeded(12), 3),
        RecordingNotifier::default(),
        limit(5),
    );
    controller.request_page(1).await.expect("should load page");

    let (slow, fast) = tokio::join!(controller.request_page(3), async {
        let outcome = controller.request_page(2).await;
        controller.repo().release();
        outcome
    });

    assert_eq!(slow.expect("stale request"), FetchOutcome::Superseded);
    assert_eq!(fast.expect("latest request"), FetchOutcome::Loaded { page: 2 });
    assert_eq!(controller.page(), 2);
    assert_eq!(controller.contacts().len(), 5);
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn loading_flag_tracks_the_request_in_flight() {
    let controller = ContactsController::new(
        GatedRepository::new(InMemoryRepository::seeded(12), 2),
        RecordingNotifier::default(),
        limit(5),
    );
    controller.request_page(1).await.expect("should load page");
    assert!(!controller.is_loading());

    let (outcome, was_loading) = tokio::join!(controller.request_page(2), async {
        let loading = controller.is_loading();
        controller.repo().release();
        loading
    });

    assert!(was_loading);
    assert_eq!(outcome.expect("should load"), FetchOutcome::Loaded { page: 2 });
    assert!(!controller.is_loading());
}
