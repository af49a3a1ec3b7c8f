use chrono::NaiveDate;

use sangihe_trip::domain::alert::{AlertLevel, AlertStatus, NewAlert};
use sangihe_trip::domain::article::{NewArticle, UpdateArticle};
use sangihe_trip::domain::destination::{
    NewDestination, NewDestinationActivity, UpdateDestination,
};
use sangihe_trip::domain::review::{NewReview, ReviewStatus};
use sangihe_trip::domain::trip::{Budget, NewScheduleEntry, NewTrip, TripType, UpdateTrip};
use sangihe_trip::domain::user::NewUser;
use sangihe_trip::domain::activity_log::NewActivityLog;
use sangihe_trip::repository::{
    ActivityLogListQuery, ActivityLogReader, ActivityLogWriter, AlertListQuery, AlertReader,
    AlertWriter, ArticleListQuery, ArticleReader, ArticleWriter, DestinationListQuery,
    DestinationReader, DestinationWriter, DieselRepository, ReviewListQuery, ReviewReader,
    ReviewWriter, TripListQuery, TripReader, TripWriter, UserListQuery, UserReader, UserWriter,
};

mod common;

fn new_destination(name: &str, category: &str) -> NewDestination {
    NewDestination::new(
        name.to_string(),
        "Kepulauan Sangihe".to_string(),
        category.to_string(),
        "Deskripsi singkat.".to_string(),
        None,
        4.5,
        Some(25_000),
    )
}

fn new_trip(user_email: &str, destinations: Vec<i32>, schedule: Vec<NewScheduleEntry>) -> NewTrip {
    NewTrip {
        user_email: user_email.to_string(),
        name: "Jelajah Sangihe".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 12, 22).unwrap(),
        people_count: 2,
        trip_type: TripType::Couple,
        budget: Budget {
            transport: 500_000,
            lodging: 800_000,
            food: 400_000,
            activities: 300_000,
        },
        notes: "Catatan".to_string(),
        packing_list: vec!["sunblock".to_string(), "tiket kapal".to_string()],
        is_public: false,
        destinations,
        schedule,
    }
}

#[test]
fn test_destination_repository_crud() {
    let test_db = common::TestDb::new("test_destination_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let beach = repo
        .create_destination(&new_destination("Pantai Mahoro", "Pantai"))
        .unwrap();
    let volcano = repo
        .create_destination(&new_destination("Gunung Awu", "gunung"))
        .unwrap();

    // Categories are normalized to lowercase on construction.
    assert_eq!(beach.category, "pantai");

    let (total, items) = repo.list_destinations(DestinationListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);

    let (search_total, search_items) = repo
        .list_destinations(DestinationListQuery::new().search("Mahoro"))
        .unwrap();
    assert_eq!(search_total, 1);
    assert_eq!(search_items[0].name, "Pantai Mahoro");

    let (category_total, _) = repo
        .list_destinations(DestinationListQuery::new().category("gunung"))
        .unwrap();
    assert_eq!(category_total, 1);

    let categories = repo.list_destination_categories().unwrap();
    assert_eq!(categories, vec!["gunung".to_string(), "pantai".to_string()]);

    let updated = repo
        .update_destination(
            beach.id,
            &UpdateDestination::new(
                "Pantai Mahoro".to_string(),
                "Pulau Mahoro".to_string(),
                "Pantai".to_string(),
                "Deskripsi baru.".to_string(),
                None,
                4.8,
                None,
            ),
        )
        .unwrap();
    assert_eq!(updated.location, "Pulau Mahoro");
    assert!(updated.is_free());

    repo.replace_destination_activities(
        beach.id,
        &[
            NewDestinationActivity {
                label: "Snorkeling".to_string(),
                start_time: "09:00".to_string(),
                end_time: "11:00".to_string(),
            },
            NewDestinationActivity {
                label: "Sunset".to_string(),
                start_time: "17:00".to_string(),
                end_time: "18:30".to_string(),
            },
        ],
    )
    .unwrap();

    let activities = repo.list_destination_activities(beach.id).unwrap();
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].label, "Snorkeling");

    repo.delete_destination(volcano.id).unwrap();
    assert!(repo.get_destination_by_id(volcano.id).unwrap().is_none());
}

#[test]
fn test_article_repository_crud() {
    let test_db = common::TestDb::new("test_article_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let article = repo
        .create_article(&NewArticle::new(
            "Pesona Sangihe".to_string(),
            "<p>Isi artikel</p>".to_string(),
            None,
            "admin@example.com".to_string(),
        ))
        .unwrap();
    assert!(!article.published);

    // Draft articles are invisible to the published-only listing.
    let (published_total, _) = repo
        .list_articles(ArticleListQuery::new().published_only())
        .unwrap();
    assert_eq!(published_total, 0);

    let published = repo.set_article_published(article.id, true).unwrap();
    assert!(published.published);
    let (published_total, published_items) = repo
        .list_articles(ArticleListQuery::new().published_only())
        .unwrap();
    assert_eq!(published_total, 1);
    assert_eq!(published_items[0].title, "Pesona Sangihe");

    let updated = repo
        .update_article(
            article.id,
            &UpdateArticle::new(
                "Pesona Sangihe Raya".to_string(),
                "<p>Isi baru</p>".to_string(),
                None,
            ),
        )
        .unwrap();
    assert_eq!(updated.title, "Pesona Sangihe Raya");

    repo.delete_article(article.id).unwrap();
    assert!(repo.get_article_by_id(article.id).unwrap().is_none());
}

#[test]
fn test_review_repository_moderation_flow() {
    let test_db = common::TestDb::new("test_review_repository_moderation_flow.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let destination = repo
        .create_destination(&new_destination("Pulau Bukide", "pulau"))
        .unwrap();

    let review = repo
        .create_review(&NewReview::new(
            destination.id,
            "User@Example.com".to_string(),
            7,
            "  Sangat indah.  ".to_string(),
        ))
        .unwrap();
    assert_eq!(review.status, ReviewStatus::Pending);
    assert_eq!(review.rating, 5); // clamped
    assert_eq!(review.author_email, "user@example.com");
    assert_eq!(review.comment, "Sangat indah.");

    let (approved_total, _) = repo
        .list_reviews(ReviewListQuery::new().status(ReviewStatus::Approved))
        .unwrap();
    assert_eq!(approved_total, 0);

    let approved = repo
        .set_review_status(review.id, ReviewStatus::Approved)
        .unwrap();
    assert_eq!(approved.status, ReviewStatus::Approved);

    let (approved_total, approved_items) = repo
        .list_reviews(
            ReviewListQuery::new()
                .destination(destination.id)
                .status(ReviewStatus::Approved),
        )
        .unwrap();
    assert_eq!(approved_total, 1);
    assert_eq!(approved_items[0].1.name, "Pulau Bukide");

    repo.delete_review(review.id).unwrap();
    let (total, _) = repo.list_reviews(ReviewListQuery::new()).unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_trip_repository_preserves_visit_order() {
    let test_db = common::TestDb::new("test_trip_repository_preserves_visit_order.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let a = repo
        .create_destination(&new_destination("Pantai Mahoro", "pantai"))
        .unwrap();
    let b = repo
        .create_destination(&new_destination("Air Terjun Kadadima", "air terjun"))
        .unwrap();

    let schedule = vec![NewScheduleEntry {
        destination_id: b.id,
        day: 1,
        start_time: "09:00".to_string(),
        end_time: "11:00".to_string(),
        label: "Trekking".to_string(),
        note: None,
    }];
    // Visit order deliberately differs from insertion order.
    let trip = repo
        .create_trip(&new_trip("user@example.com", vec![b.id, a.id], schedule))
        .unwrap();
    assert!(!trip.public_id.is_nil());

    let detail = repo.get_trip_by_id(trip.id).unwrap().unwrap();
    assert_eq!(
        detail
            .destinations
            .iter()
            .map(|d| d.id)
            .collect::<Vec<_>>(),
        vec![b.id, a.id]
    );
    assert_eq!(detail.schedule.len(), 1);
    assert_eq!(detail.trip.packing_list.len(), 2);

    // Updating replaces the destination links and schedule wholesale.
    let mut updates = UpdateTrip::from(new_trip("user@example.com", vec![a.id], vec![]));
    updates.is_public = true;
    let updated = repo.update_trip(trip.id, &updates).unwrap();
    assert!(updated.is_public);

    let detail = repo.get_trip_by_id(trip.id).unwrap().unwrap();
    assert_eq!(detail.destinations.len(), 1);
    assert!(detail.schedule.is_empty());

    let by_public_id = repo
        .get_trip_by_public_id(&trip.public_id.to_string())
        .unwrap()
        .unwrap();
    assert_eq!(by_public_id.trip.id, trip.id);

    repo.delete_trip(trip.id).unwrap();
    assert!(repo.get_trip_by_id(trip.id).unwrap().is_none());
}

#[test]
fn test_trip_repository_list_filters() {
    let test_db = common::TestDb::new("test_trip_repository_list_filters.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_trip(&new_trip("alice@example.com", vec![], vec![]))
        .unwrap();
    let mut public_trip = new_trip("bob@example.com", vec![], vec![]);
    public_trip.is_public = true;
    repo.create_trip(&public_trip).unwrap();

    let (alice_total, alice_trips) = repo
        .list_trips(TripListQuery::new().user_email("alice@example.com"))
        .unwrap();
    assert_eq!(alice_total, 1);
    assert_eq!(alice_trips[0].user_email, "alice@example.com");

    let (public_total, public_trips) = repo.list_trips(TripListQuery::new().public_only()).unwrap();
    assert_eq!(public_total, 1);
    assert_eq!(public_trips[0].user_email, "bob@example.com");
}

#[test]
fn test_user_repository_upsert() {
    let test_db = common::TestDb::new("test_user_repository_upsert.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let user = repo
        .create_or_update_user(&NewUser::new(
            "User@Example.com".to_string(),
            "User".to_string(),
            vec!["trips".to_string()],
        ))
        .unwrap();
    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.roles, vec!["trips".to_string()]);

    // Same email updates the record instead of inserting another one.
    let updated = repo
        .create_or_update_user(&NewUser::new(
            "user@example.com".to_string(),
            "Renamed".to_string(),
            vec!["trips".to_string(), "trips_admin".to_string()],
        ))
        .unwrap();
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.roles.len(), 2);

    let (total, _) = repo.list_users(UserListQuery::new()).unwrap();
    assert_eq!(total, 1);

    let found = repo.get_user_by_email("user@example.com").unwrap();
    assert!(found.is_some());

    repo.delete_user(user.id).unwrap();
    let (total, _) = repo.list_users(UserListQuery::new()).unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_activity_log_repository_append() {
    let test_db = common::TestDb::new("test_activity_log_repository_append.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.log_activity(&NewActivityLog::new(
        "admin@example.com",
        "approved",
        "review",
        Some(3),
    ))
    .unwrap();
    repo.log_activity(&NewActivityLog::new(
        "admin@example.com",
        "delete",
        "article",
        None,
    ))
    .unwrap();

    let (total, logs) = repo.list_activity_logs(ActivityLogListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().any(|l| l.action == "approved" && l.entity_id == Some(3)));
}

#[test]
fn test_alert_repository_lifecycle() {
    let test_db = common::TestDb::new("test_alert_repository_lifecycle.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alert = repo
        .create_alert(&NewAlert {
            message: "Lonjakan ulasan ditolak".to_string(),
            level: AlertLevel::Warning,
        })
        .unwrap();
    assert_eq!(alert.status, AlertStatus::Active);

    let acknowledged = repo
        .set_alert_status(alert.id, AlertStatus::Acknowledged)
        .unwrap();
    assert_eq!(acknowledged.status, AlertStatus::Acknowledged);

    let (active_total, _) = repo
        .list_alerts(AlertListQuery::new().status(AlertStatus::Active))
        .unwrap();
    assert_eq!(active_total, 0);

    let resolved = repo.set_alert_status(alert.id, AlertStatus::Resolved).unwrap();
    assert_eq!(resolved.status, AlertStatus::Resolved);
}
