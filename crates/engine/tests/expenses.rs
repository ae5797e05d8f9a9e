use sea_orm::{Database, DatabaseConnection};

use engine::{AccountId, Engine, EngineError, ExpenseNewCmd, ExpensePatch};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

async fn engine_with_alice() -> (Engine, AccountId) {
    let (engine, _db) = engine_with_db().await;
    let alice = engine.create_account("alice", "password").await.unwrap();
    (engine, alice)
}

#[tokio::test]
async fn register_then_login() {
    let (engine, _db) = engine_with_db().await;

    let id = engine.create_account("alice", "password").await.unwrap();
    assert_eq!(engine.authenticate("alice", "password").await.unwrap(), id);
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let (engine, _db) = engine_with_db().await;

    engine.create_account("alice", "password").await.unwrap();
    let err = engine.create_account("alice", "other").await.unwrap_err();
    assert_eq!(err, EngineError::ExistingKey("alice".to_string()));

    // The first account still works.
    assert!(engine.authenticate("alice", "password").await.is_ok());
}

#[tokio::test]
async fn registration_requires_name_and_secret() {
    let (engine, _db) = engine_with_db().await;

    assert_eq!(
        engine.create_account("", "password").await.unwrap_err(),
        EngineError::MissingField("username".to_string())
    );
    assert_eq!(
        engine.create_account("alice", "").await.unwrap_err(),
        EngineError::MissingField("password".to_string())
    );
}

#[tokio::test]
async fn login_failures_look_the_same() {
    let (engine, _alice) = engine_with_alice().await;

    let wrong_secret = engine.authenticate("alice", "nope").await.unwrap_err();
    let wrong_name = engine.authenticate("bob", "password").await.unwrap_err();
    let both_wrong = engine.authenticate("bob", "nope").await.unwrap_err();

    assert_eq!(wrong_secret, EngineError::InvalidCredentials);
    assert_eq!(wrong_name, EngineError::InvalidCredentials);
    assert_eq!(both_wrong, EngineError::InvalidCredentials);
    assert_eq!(wrong_secret.to_string(), wrong_name.to_string());
}

#[tokio::test]
async fn created_expense_round_trips() {
    let (engine, alice) = engine_with_alice().await;

    let id = engine
        .create_expense(
            ExpenseNewCmd::new(alice, "2024-03-09", "Food", 12.5).description("Lunch"),
        )
        .await
        .unwrap();

    let expenses = engine.list_expenses(alice).await.unwrap();
    assert_eq!(expenses.len(), 1);
    let expense = &expenses[0];
    assert_eq!(expense.id, id);
    assert_eq!(expense.account_id, alice);
    assert_eq!(expense.date, "2024-03-09");
    assert_eq!(expense.category, "Food");
    assert_eq!(expense.amount, 12.5);
    assert_eq!(expense.description.as_deref(), Some("Lunch"));
}

#[tokio::test]
async fn list_keeps_insertion_order_and_owner() {
    let (engine, alice) = engine_with_alice().await;
    let bob = engine.create_account("bob", "secret").await.unwrap();

    let first = engine
        .create_expense(ExpenseNewCmd::new(alice, "2024-03-01", "Rent", 800.0))
        .await
        .unwrap();
    engine
        .create_expense(ExpenseNewCmd::new(bob, "2024-03-02", "Food", 5.0))
        .await
        .unwrap();
    let second = engine
        .create_expense(ExpenseNewCmd::new(alice, "2024-03-03", "Food", "7.25"))
        .await
        .unwrap();

    let ids: Vec<_> = engine
        .list_expenses(alice)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![first, second]);
    assert!(engine.list_expenses(4242).await.unwrap().is_empty());
}

#[tokio::test]
async fn non_numeric_amount_is_invalid() {
    let (engine, alice) = engine_with_alice().await;

    let err = engine
        .create_expense(ExpenseNewCmd::new(alice, "2024-03-09", "Food", "abc"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
    assert!(engine.list_expenses(alice).await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_category_is_missing_field() {
    let (engine, alice) = engine_with_alice().await;

    let cmd = ExpenseNewCmd {
        category: None,
        ..ExpenseNewCmd::new(alice, "2024-03-09", "Food", 10.0)
    };
    assert_eq!(
        engine.create_expense(cmd).await.unwrap_err(),
        EngineError::MissingField("category".to_string())
    );

    let cmd = ExpenseNewCmd {
        category: Some(String::new()),
        ..ExpenseNewCmd::new(alice, "2024-03-09", "Food", 10.0)
    };
    assert_eq!(
        engine.create_expense(cmd).await.unwrap_err(),
        EngineError::MissingField("category".to_string())
    );
}

#[tokio::test]
async fn zero_amount_is_accepted() {
    let (engine, alice) = engine_with_alice().await;

    engine
        .create_expense(ExpenseNewCmd::new(alice, "2024-03-09", "Gift", 0.0))
        .await
        .unwrap();
    assert_eq!(engine.list_expenses(alice).await.unwrap()[0].amount, 0.0);
}

#[tokio::test]
async fn expense_needs_an_existing_account() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .create_expense(ExpenseNewCmd::new(99, "2024-03-09", "Food", 1.0))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("account".to_string()));
}

#[tokio::test]
async fn malformed_date_is_rejected() {
    let (engine, alice) = engine_with_alice().await;

    let err = engine
        .create_expense(ExpenseNewCmd::new(alice, "09/03/2024", "Food", 1.0))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidDate(_)));
}

#[tokio::test]
async fn partial_update_changes_only_supplied_fields() {
    let (engine, alice) = engine_with_alice().await;
    let id = engine
        .create_expense(
            ExpenseNewCmd::new(alice, "2024-03-09", "Food", 12.5).description("Lunch"),
        )
        .await
        .unwrap();

    engine
        .update_expense(id, ExpensePatch::default().amount(20.0))
        .await
        .unwrap();

    let expense = engine.expense(id).await.unwrap();
    assert_eq!(expense.amount, 20.0);
    assert_eq!(expense.date, "2024-03-09");
    assert_eq!(expense.category, "Food");
    assert_eq!(expense.description.as_deref(), Some("Lunch"));

    engine
        .update_expense(
            id,
            ExpensePatch::default()
                .category("Groceries")
                .date("2024-03-10")
                .description(None),
        )
        .await
        .unwrap();

    let expense = engine.expense(id).await.unwrap();
    assert_eq!(expense.amount, 20.0);
    assert_eq!(expense.date, "2024-03-10");
    assert_eq!(expense.category, "Groceries");
    assert_eq!(expense.description, None);
}

#[tokio::test]
async fn invalid_update_leaves_record_untouched() {
    let (engine, alice) = engine_with_alice().await;
    let id = engine
        .create_expense(ExpenseNewCmd::new(alice, "2024-03-09", "Food", 12.5))
        .await
        .unwrap();

    let err = engine
        .update_expense(id, ExpensePatch::default().category("Fun").amount("lots"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let expense = engine.expense(id).await.unwrap();
    assert_eq!(expense.category, "Food");
    assert_eq!(expense.amount, 12.5);
}

#[tokio::test]
async fn update_unknown_expense_is_not_found() {
    let (engine, _alice) = engine_with_alice().await;

    let not_found = EngineError::KeyNotFound("expense".to_string());
    let err = engine
        .update_expense(7, ExpensePatch::default().amount(1.0))
        .await
        .unwrap_err();
    assert_eq!(err, not_found);

    // Existence is checked before the patch itself.
    for patch in [
        ExpensePatch::default(),
        ExpensePatch::default().amount("abc"),
        ExpensePatch::default().date("tomorrow"),
        ExpensePatch::default().category(""),
    ] {
        assert_eq!(engine.update_expense(7, patch).await.unwrap_err(), not_found);
    }
}

#[tokio::test]
async fn delete_removes_expense() {
    let (engine, alice) = engine_with_alice().await;
    let keep = engine
        .create_expense(ExpenseNewCmd::new(alice, "2024-03-09", "Food", 1.0))
        .await
        .unwrap();
    let gone = engine
        .create_expense(ExpenseNewCmd::new(alice, "2024-03-09", "Fun", 2.0))
        .await
        .unwrap();

    engine.delete_expense(gone).await.unwrap();

    let ids: Vec<_> = engine
        .list_expenses(alice)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![keep]);

    let not_found = EngineError::KeyNotFound("expense".to_string());
    assert_eq!(engine.delete_expense(gone).await.unwrap_err(), not_found);
    assert_eq!(engine.expense(gone).await.unwrap_err(), not_found);
    assert_eq!(
        engine
            .update_expense(gone, ExpensePatch::default().amount(3.0))
            .await
            .unwrap_err(),
        not_found
    );
}

#[tokio::test]
async fn summarize_account_groups_current_expenses() {
    let (engine, alice) = engine_with_alice().await;

    assert_eq!(
        engine.summarize_account(alice).await.unwrap_err(),
        EngineError::NoData
    );

    for (category, amount) in [("Food", 100.0), ("Food", 50.0), ("Transport", 30.0)] {
        engine
            .create_expense(ExpenseNewCmd::new(alice, "2024-03-09", category, amount))
            .await
            .unwrap();
    }

    let summary = engine.summarize_account(alice).await.unwrap();
    assert_eq!(summary.total_spent(), 180.0);
    assert_eq!(summary.biggest_category().category, "Food");

    let (categories, amounts) = summary.into_parts();
    assert_eq!(categories, vec!["Food", "Transport"]);
    assert_eq!(amounts, vec![150.0, 30.0]);
}

/// Engine over a fresh SQLite file, so several pooled connections share it.
async fn engine_on_file(name: &str) -> (Engine, std::path::PathBuf) {
    let path = std::env::temp_dir().join(format!("ledger-{name}-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let db = Database::connect(format!("sqlite:{}?mode=rwc", path.display()))
        .await
        .unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();
    (engine, path)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_registrations_have_one_winner() {
    let (engine, path) = engine_on_file("registrations").await;

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let engine = engine.clone();
            tokio::spawn(async move { engine.create_account("alice", &format!("pw{n}")).await })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(err) => assert_eq!(err, EngineError::ExistingKey("alice".to_string())),
        }
    }
    assert_eq!(winners, 1);

    let _ = std::fs::remove_file(path);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_updates_never_mix_fields() {
    let (engine, path) = engine_on_file("updates").await;
    let alice = engine.create_account("alice", "password").await.unwrap();
    let id = engine
        .create_expense(ExpenseNewCmd::new(alice, "2024-03-09", "C0", 0.0))
        .await
        .unwrap();

    let handles: Vec<_> = (1..=16)
        .map(|n| {
            let engine = engine.clone();
            tokio::spawn(async move {
                let patch = ExpensePatch::default()
                    .category(format!("C{n}"))
                    .amount(f64::from(n));
                engine.update_expense(id, patch).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // Category and amount always come from the same update.
    let expense = engine.expense(id).await.unwrap();
    assert_eq!(expense.category, format!("C{}", expense.amount));
    assert_ne!(expense.category, "C0");
    assert_eq!(engine.list_expenses(alice).await.unwrap().len(), 1);

    let _ = std::fs::remove_file(path);
}
