//! Integration tests for the animal and event listings.
//!
//! Exercises the query builder and repositories against a real database:
//! - Filter predicates and status restriction
//! - Newest-first / soonest-first ordering
//! - Offset/limit windows
//! - The id lookup on events

use chrono::{Duration, Utc};
use pawprint_core::filter::{AnimalFilter, AnimalSize, AnimalType, EventFilter, PageType};
use pawprint_core::pagination::Page;
use pawprint_db::models::animal::{Animal, CreateAnimal};
use pawprint_db::models::event::CreateEvent;
use pawprint_db::repositories::{AnimalRepo, EventRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_animal(
    pool: &PgPool,
    name: &str,
    animal_type: &str,
    size: &str,
    minutes_ago: i64,
) -> Animal {
    let mut input = CreateAnimal::available(name, animal_type);
    input.size = Some(size.to_string());
    input.created_at = Some(Utc::now() - Duration::minutes(minutes_ago));
    AnimalRepo::create(pool, &input).await.unwrap()
}

fn names(animals: &[Animal]) -> Vec<&str> {
    animals.iter().map(|a| a.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Animals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dogs_of_one_size_come_back_newest_first(pool: PgPool) {
    seed_animal(&pool, "m-oldest", "dog", "m", 50).await;
    seed_animal(&pool, "g-1", "dog", "g", 40).await;
    seed_animal(&pool, "m-middle", "dog", "m", 30).await;
    seed_animal(&pool, "g-2", "dog", "g", 20).await;
    seed_animal(&pool, "m-newest", "dog", "m", 10).await;
    seed_animal(&pool, "cat-m", "cat", "m", 5).await;

    let filter = AnimalFilter {
        animal_type: Some(AnimalType::Dog),
        size: Some(AnimalSize::Medium),
        ..Default::default()
    };
    let rows = AnimalRepo::list_available(&pool, &filter, Page { limit: 2, offset: 0 })
        .await
        .unwrap();

    assert_eq!(names(&rows), vec!["m-newest", "m-middle"]);
    assert!(rows.iter().all(|a| a.size.as_deref() == Some("m")));
    assert!(rows.iter().all(|a| a.animal_type == "dog"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_available_animals_are_listed(pool: PgPool) {
    seed_animal(&pool, "here", "dog", "p", 10).await;
    let mut adopted = CreateAnimal::available("gone", "dog");
    adopted.status = "adopted".to_string();
    AnimalRepo::create(&pool, &adopted).await.unwrap();

    let rows = AnimalRepo::list_available(&pool, &AnimalFilter::default(), Page { limit: 12, offset: 0 })
        .await
        .unwrap();

    assert_eq!(names(&rows), vec!["here"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_type_selects_availability_flag(pool: PgPool) {
    let adopt_only = CreateAnimal::available("adopt-only", "cat");
    AnimalRepo::create(&pool, &adopt_only).await.unwrap();

    let mut sponsor_only = CreateAnimal::available("sponsor-only", "cat");
    sponsor_only.available_for_adoption = false;
    sponsor_only.available_for_sponsorship = true;
    AnimalRepo::create(&pool, &sponsor_only).await.unwrap();

    let page = Page { limit: 12, offset: 0 };
    let sponsorship = AnimalFilter {
        page_type: Some(PageType::Sponsorship),
        ..Default::default()
    };
    let rows = AnimalRepo::list_available(&pool, &sponsorship, page).await.unwrap();
    assert_eq!(names(&rows), vec!["sponsor-only"]);

    let adoption = AnimalFilter {
        page_type: Some(PageType::Adoption),
        ..Default::default()
    };
    let rows = AnimalRepo::list_available(&pool, &adoption, page).await.unwrap();
    assert_eq!(names(&rows), vec!["adopt-only"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn explicit_false_puppy_filter_excludes_puppies(pool: PgPool) {
    let mut puppy = CreateAnimal::available("puppy", "dog");
    puppy.is_puppy = true;
    AnimalRepo::create(&pool, &puppy).await.unwrap();
    AnimalRepo::create(&pool, &CreateAnimal::available("adult", "dog"))
        .await
        .unwrap();

    let filter = AnimalFilter {
        is_puppy: Some(false),
        ..Default::default()
    };
    let rows = AnimalRepo::list_available(&pool, &filter, Page { limit: 12, offset: 0 })
        .await
        .unwrap();
    assert_eq!(names(&rows), vec!["adult"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn consecutive_pages_are_disjoint_and_keep_global_order(pool: PgPool) {
    for i in 0..7 {
        seed_animal(&pool, &format!("dog-{i}"), "dog", "m", 100 - i).await;
    }
    let filter = AnimalFilter::default();

    let all = AnimalRepo::list_available(&pool, &filter, Page { limit: 100, offset: 0 })
        .await
        .unwrap();
    let first = AnimalRepo::list_available(&pool, &filter, Page { limit: 3, offset: 0 })
        .await
        .unwrap();
    let second = AnimalRepo::list_available(&pool, &filter, Page { limit: 3, offset: 3 })
        .await
        .unwrap();
    let last = AnimalRepo::list_available(&pool, &filter, Page { limit: 3, offset: 6 })
        .await
        .unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 3);
    assert_eq!(last.len(), 1);

    let mut paged: Vec<&str> = names(&first);
    paged.extend(names(&second));
    paged.extend(names(&last));
    assert_eq!(paged, names(&all));
    assert!(first.iter().all(|a| second.iter().all(|b| a.id != b.id)));
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn id_lookup_returns_private_event(pool: PgPool) {
    let mut private = CreateEvent::public("Board meeting", Utc::now() + Duration::days(3));
    private.id = Some("evt-1".to_string());
    private.is_public = false;
    EventRepo::create(&pool, &private).await.unwrap();

    let by_id = EventFilter {
        id: Some("evt-1".to_string()),
        ..Default::default()
    };
    let rows = EventRepo::list(&pool, &by_id, Page { limit: 20, offset: 0 })
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "evt-1");
    assert!(!rows[0].is_public);

    let listing = EventRepo::list(&pool, &EventFilter::default(), Page { limit: 20, offset: 0 })
        .await
        .unwrap();
    assert!(listing.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn events_are_soonest_first_and_upcoming_hides_past(pool: PgPool) {
    let now = Utc::now();
    EventRepo::create(&pool, &CreateEvent::public("past", now - Duration::days(2)))
        .await
        .unwrap();
    EventRepo::create(&pool, &CreateEvent::public("later", now + Duration::days(10)))
        .await
        .unwrap();
    EventRepo::create(&pool, &CreateEvent::public("soon", now + Duration::days(1)))
        .await
        .unwrap();

    let page = Page { limit: 20, offset: 0 };
    let all = EventRepo::list(&pool, &EventFilter::default(), page).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["past", "soon", "later"]);

    let upcoming = EventFilter {
        upcoming: Some(true),
        ..Default::default()
    };
    let rows = EventRepo::list(&pool, &upcoming, page).await.unwrap();
    let titles: Vec<&str> = rows.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["soon", "later"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_title_or_description_case_insensitively(pool: PgPool) {
    let start = Utc::now() + Duration::days(1);
    EventRepo::create(&pool, &CreateEvent::public("Feira de Adoção", start))
        .await
        .unwrap();
    let mut described = CreateEvent::public("Bazar", start);
    described.description = Some("Renda revertida para a FEIRA".to_string());
    EventRepo::create(&pool, &described).await.unwrap();
    EventRepo::create(&pool, &CreateEvent::public("Palestra", start))
        .await
        .unwrap();

    let filter = EventFilter {
        search: Some("feira".to_string()),
        ..Default::default()
    };
    let rows = EventRepo::list(&pool, &filter, Page { limit: 20, offset: 0 })
        .await
        .unwrap();
    let mut titles: Vec<&str> = rows.iter().map(|e| e.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["Bazar", "Feira de Adoção"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_wildcards_match_literally(pool: PgPool) {
    let start = Utc::now() + Duration::days(1);
    EventRepo::create(&pool, &CreateEvent::public("100% adoption day", start))
        .await
        .unwrap();
    EventRepo::create(&pool, &CreateEvent::public("Cat day", start))
        .await
        .unwrap();

    let filter = EventFilter {
        search: Some("%".to_string()),
        ..Default::default()
    };
    let rows = EventRepo::list(&pool, &filter, Page { limit: 20, offset: 0 })
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "100% adoption day");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn venue_and_date_range_filters(pool: PgPool) {
    let base = Utc::now() + Duration::days(30);
    let mut park = CreateEvent::public("park", base);
    park.venue = Some("Parque Ibirapuera".to_string());
    EventRepo::create(&pool, &park).await.unwrap();

    let mut park_late = CreateEvent::public("park-late", base + Duration::days(20));
    park_late.venue = Some("Parque Ibirapuera".to_string());
    EventRepo::create(&pool, &park_late).await.unwrap();

    let mut mall = CreateEvent::public("mall", base);
    mall.venue = Some("Shopping".to_string());
    EventRepo::create(&pool, &mall).await.unwrap();

    let filter = EventFilter {
        venue: Some("Parque Ibirapuera".to_string()),
        start: Some(base - Duration::days(1)),
        end: Some(base + Duration::days(1)),
        ..Default::default()
    };
    let rows = EventRepo::list(&pool, &filter, Page { limit: 20, offset: 0 })
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "park");
}
