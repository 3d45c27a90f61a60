use user_registry::domain::{User, UserPatch};
use user_registry::lifecycle::UserSystem;
use user_registry::user_actor::{BirthDatePolicy, UserError};

use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A system whose calendar is pinned to 2024-06-15.
fn start(min_age: u32) -> UserSystem {
    UserSystem::start(
        BirthDatePolicy::with_clock(min_age, || date(2024, 6, 15)),
        32,
    )
}

fn user(email: &str, birth_date: NaiveDate) -> User {
    User::new(email, "A", "B", birth_date)
}

/// Save, patch one field, delete: the store's round trip through real actors.
#[tokio::test]
async fn test_save_patch_delete_scenario() {
    let system = start(18);
    let users = &system.user_client;

    users
        .save(user("a@x.com", date(2000, 1, 1)))
        .await
        .expect("Failed to save user");
    assert_eq!(users.find_all().await.unwrap().len(), 1);

    let patched = users
        .patch("a@x.com", UserPatch::default().with_first_name("C"))
        .await
        .expect("Failed to patch user");
    assert_eq!(patched.first_name, "C");
    assert_eq!(patched.last_name, "B", "Unset fields must survive a patch");
    assert_eq!(users.find_by_email("a@x.com").await.unwrap(), patched);

    users.delete_by_email("a@x.com").await.unwrap();
    assert!(users.find_all().await.unwrap().is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_saved_user_is_found_and_counted() {
    let system = start(18);
    let users = &system.user_client;

    let ada = User {
        address: Some("12 St James's Square".into()),
        ..User::new("ada@example.com", "Ada", "Lovelace", date(1990, 12, 10))
    };
    let saved = users.save(ada.clone()).await.unwrap();

    assert_eq!(saved, ada);
    assert_eq!(users.find_by_email("ada@example.com").await.unwrap(), ada);
    assert_eq!(users.find_all().await.unwrap(), vec![ada]);
}

#[tokio::test]
async fn test_duplicate_save_is_rejected_and_store_unchanged() {
    let system = start(18);
    let users = &system.user_client;

    let original = user("a@x.com", date(2000, 1, 1));
    users.save(original.clone()).await.unwrap();

    let impostor = User::new("a@x.com", "Someone", "Else", date(1980, 5, 5));
    assert_eq!(
        users.save(impostor).await,
        Err(UserError::AlreadyExists("a@x.com".into()))
    );
    assert_eq!(users.find_all().await.unwrap(), vec![original]);
}

#[tokio::test]
async fn test_invalid_birth_dates_leave_store_unchanged() {
    let system = start(18);
    let users = &system.user_client;

    let original = user("a@x.com", date(2000, 1, 1));
    users.save(original.clone()).await.unwrap();

    // today, the future, and one day short of eighteen
    for birth_date in [date(2024, 6, 15), date(2030, 1, 1), date(2006, 6, 16)] {
        let saved = users.save(user("b@x.com", birth_date)).await;
        assert!(
            matches!(saved, Err(UserError::ValidationFailed(_))),
            "save with {birth_date} should fail, got {saved:?}"
        );

        let updated = users.update("a@x.com", user("a@x.com", birth_date)).await;
        assert!(matches!(updated, Err(UserError::ValidationFailed(_))));

        let patched = users
            .patch("a@x.com", UserPatch::default().with_birth_date(birth_date))
            .await;
        assert!(matches!(patched, Err(UserError::ValidationFailed(_))));
    }

    assert_eq!(users.find_all().await.unwrap(), vec![original]);
}

#[tokio::test]
async fn test_eighteenth_birthday_is_old_enough() {
    let system = start(18);

    let saved = system
        .user_client
        .save(user("a@x.com", date(2006, 6, 15)))
        .await;

    assert!(saved.is_ok());
}

#[tokio::test]
async fn test_min_age_is_injected_per_system() {
    let strict = start(21);
    let lenient = start(0);
    let twenty = user("a@x.com", date(2004, 1, 1));

    assert!(matches!(
        strict.user_client.save(twenty.clone()).await,
        Err(UserError::ValidationFailed(_))
    ));
    assert!(lenient.user_client.save(twenty).await.is_ok());
    // zero minimum still requires a past date
    assert!(matches!(
        lenient
            .user_client
            .save(user("b@x.com", date(2024, 6, 15)))
            .await,
        Err(UserError::ValidationFailed(_))
    ));
}

#[tokio::test]
async fn test_birth_date_range_excludes_both_bounds() {
    let system = start(18);
    let users = &system.user_client;

    users.save(user("lower@x.com", date(1990, 1, 1))).await.unwrap();
    users.save(user("inside@x.com", date(1995, 6, 1))).await.unwrap();
    users.save(user("upper@x.com", date(2000, 1, 1))).await.unwrap();

    let found = users
        .find_in_birth_date_range(date(1990, 1, 1), date(2000, 1, 1))
        .await
        .unwrap();
    let emails: Vec<_> = found.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["inside@x.com"]);

    let reversed = users
        .find_in_birth_date_range(date(2000, 1, 1), date(1990, 1, 1))
        .await
        .unwrap();
    assert!(reversed.is_empty());

    let empty = users
        .find_in_birth_date_range(date(1995, 6, 1), date(1995, 6, 1))
        .await
        .unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_delete_removes_exactly_one_entry() {
    let system = start(18);
    let users = &system.user_client;

    users.save(user("a@x.com", date(2000, 1, 1))).await.unwrap();
    let b = users.save(user("b@x.com", date(2000, 1, 1))).await.unwrap();

    assert_eq!(
        users.delete_by_email("nobody@x.com").await,
        Err(UserError::NotFound("nobody@x.com".into()))
    );

    users.delete_by_email("a@x.com").await.unwrap();
    assert_eq!(users.find_all().await.unwrap(), vec![b]);
    assert_eq!(
        users.find_by_email("a@x.com").await,
        Err(UserError::NotFound("a@x.com".into()))
    );
}

#[tokio::test]
async fn test_delete_all_empties_the_store() {
    let system = start(18);
    let users = &system.user_client;

    for i in 0..5 {
        users
            .save(user(&format!("u{i}@x.com"), date(2000, 1, 1)))
            .await
            .unwrap();
    }
    users.delete_all().await.unwrap();

    assert!(users.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_patch_moves_and_guards_the_email_key() {
    let system = start(18);
    let users = &system.user_client;

    users.save(user("a@x.com", date(2000, 1, 1))).await.unwrap();
    users.save(user("b@x.com", date(2001, 1, 1))).await.unwrap();

    assert_eq!(
        users
            .patch("a@x.com", UserPatch::default().with_email("b@x.com"))
            .await,
        Err(UserError::AlreadyExists("b@x.com".into()))
    );
    assert_eq!(users.find_all().await.unwrap().len(), 2);

    let moved = users
        .patch("a@x.com", UserPatch::default().with_email("c@x.com"))
        .await
        .unwrap();
    assert_eq!(moved.email, "c@x.com");
    assert_eq!(moved.birth_date, date(2000, 1, 1));
    assert!(users.find_by_email("a@x.com").await.is_err());
    assert_eq!(users.find_by_email("c@x.com").await.unwrap(), moved);

    assert_eq!(
        users
            .patch("nobody@x.com", UserPatch::default().with_first_name("X"))
            .await,
        Err(UserError::NotFound("nobody@x.com".into()))
    );
}

#[tokio::test]
async fn test_update_of_missing_email_inserts() {
    let system = start(18);
    let users = &system.user_client;

    let stored = users
        .update("ghost@x.com", user("ghost@x.com", date(2000, 1, 1)))
        .await
        .unwrap();

    assert_eq!(users.find_all().await.unwrap(), vec![stored]);
}

#[tokio::test]
async fn test_update_can_change_the_email() {
    let system = start(18);
    let users = &system.user_client;

    users.save(user("a@x.com", date(2000, 1, 1))).await.unwrap();
    let replacement = User::new("z@x.com", "Zed", "Zulu", date(1999, 9, 9));
    users.update("a@x.com", replacement.clone()).await.unwrap();

    assert_eq!(users.find_all().await.unwrap(), vec![replacement]);
}

/// Many clients hammering one store: every write is applied exactly once.
#[tokio::test]
async fn test_concurrent_saves_are_serialized() {
    let system = start(18);

    let mut handles = Vec::new();
    for i in 0..50 {
        let users = system.user_client.clone();
        handles.push(tokio::spawn(async move {
            users.save(user(&format!("u{i}@x.com"), date(2000, 1, 1))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(system.user_client.find_all().await.unwrap().len(), 50);

    let mut racers = Vec::new();
    for _ in 0..10 {
        let users = system.user_client.clone();
        racers.push(tokio::spawn(async move {
            users.save(user("race@x.com", date(2000, 1, 1))).await
        }));
    }
    let mut winners = 0;
    for racer in racers {
        match racer.await.unwrap() {
            Ok(_) => winners += 1,
            Err(e) => assert_eq!(e, UserError::AlreadyExists("race@x.com".into())),
        }
    }
    assert_eq!(winners, 1, "Exactly one save of the same email may win");
}

#[tokio::test]
async fn test_shutdown_after_clients_are_dropped() {
    let system = start(18);
    let extra = system.user_client.clone();
    extra.save(user("a@x.com", date(2000, 1, 1))).await.unwrap();
    drop(extra);

    assert!(system.shutdown().await.is_ok());
}
