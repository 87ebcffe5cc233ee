use engine::{
    CategoryScope, Engine, EngineError, MoneyCents, TransactionDraft, TransactionKind,
};
use migration::MigratorTrait;
use sea_orm::Database;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build()
}

fn draft(
    description: &str,
    cents: i64,
    kind: TransactionKind,
    person_id: i32,
    category_id: i32,
) -> TransactionDraft {
    TransactionDraft {
        description: description.to_string(),
        value: MoneyCents::new(cents),
        kind,
        person_id,
        category_id,
    }
}

#[tokio::test]
async fn new_person_assigns_id_and_trims_name() {
    let engine = engine_with_db().await;

    let person = engine.new_person("  Maria ", 30).await.unwrap();
    assert_eq!(person.name, "Maria");
    assert_eq!(person.age, 30);

    let fetched = engine.person(person.id).await.unwrap();
    assert_eq!(fetched, person);
}

#[tokio::test]
async fn new_person_rejects_invalid_fields() {
    let engine = engine_with_db().await;

    assert_eq!(
        engine.new_person("  ", 30).await,
        Err(EngineError::Validation(
            "name must not be empty".to_string()
        ))
    );
    assert!(matches!(
        engine.new_person("Maria", 121).await,
        Err(EngineError::Validation(_))
    ));
    assert!(matches!(
        engine.new_person("Maria", -1).await,
        Err(EngineError::Validation(_))
    ));
    assert!(engine.people().await.unwrap().is_empty());
}

#[tokio::test]
async fn new_category_rejects_blank_description() {
    let engine = engine_with_db().await;

    assert!(matches!(
        engine.new_category("   ", CategoryScope::Both).await,
        Err(EngineError::Validation(_))
    ));

    let category = engine
        .new_category("Snacks", CategoryScope::Expense)
        .await
        .unwrap();
    assert_eq!(engine.category(category.id).await.unwrap(), category);
}

#[tokio::test]
async fn minors_cannot_register_income() {
    let engine = engine_with_db().await;
    let minor = engine.new_person("Ana", 17).await.unwrap();
    let category = engine
        .new_category("Allowance", CategoryScope::Both)
        .await
        .unwrap();

    let rejected = engine
        .new_transaction(draft(
            "Pocket money",
            100_00,
            TransactionKind::Income,
            minor.id,
            category.id,
        ))
        .await;
    assert_eq!(
        rejected,
        Err(EngineError::DomainRule(
            "minors may only register expenses".to_string()
        ))
    );

    // The same person may still register an expense.
    let accepted = engine
        .new_transaction(draft(
            "Candy",
            5_00,
            TransactionKind::Expense,
            minor.id,
            category.id,
        ))
        .await
        .unwrap();
    assert_eq!(accepted.value, MoneyCents::new(5_00));
}

#[tokio::test]
async fn expense_scope_rejects_income_regardless_of_age() {
    let engine = engine_with_db().await;
    let adult = engine.new_person("Carlos", 40).await.unwrap();
    let category = engine
        .new_category("Snacks", CategoryScope::Expense)
        .await
        .unwrap();

    let rejected = engine
        .new_transaction(draft(
            "Refund",
            10_00,
            TransactionKind::Income,
            adult.id,
            category.id,
        ))
        .await;
    assert_eq!(
        rejected,
        Err(EngineError::DomainRule(
            "category 'Snacks' does not accept income transactions".to_string()
        ))
    );
}

#[tokio::test]
async fn income_scope_rejects_expense() {
    let engine = engine_with_db().await;
    let adult = engine.new_person("Carlos", 40).await.unwrap();
    let category = engine
        .new_category("Salary", CategoryScope::Income)
        .await
        .unwrap();

    assert!(matches!(
        engine
            .new_transaction(draft(
                "Lunch",
                10_00,
                TransactionKind::Expense,
                adult.id,
                category.id,
            ))
            .await,
        Err(EngineError::DomainRule(_))
    ));
}

#[tokio::test]
async fn both_scope_accepts_either_kind() {
    let engine = engine_with_db().await;
    let adult = engine.new_person("Carlos", 40).await.unwrap();
    let category = engine
        .new_category("Misc", CategoryScope::Both)
        .await
        .unwrap();

    for (description, kind) in [
        ("Bonus", TransactionKind::Income),
        ("Taxi", TransactionKind::Expense),
    ] {
        engine
            .new_transaction(draft(description, 25_00, kind, adult.id, category.id))
            .await
            .unwrap();
    }

    assert_eq!(engine.transactions().await.unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_references_are_not_found() {
    let engine = engine_with_db().await;
    let adult = engine.new_person("Carlos", 40).await.unwrap();
    let category = engine
        .new_category("Misc", CategoryScope::Both)
        .await
        .unwrap();

    assert_eq!(
        engine
            .new_transaction(draft("x", 1_00, TransactionKind::Expense, 999, category.id))
            .await,
        Err(EngineError::KeyNotFound("person not exists".to_string()))
    );
    assert_eq!(
        engine
            .new_transaction(draft("x", 1_00, TransactionKind::Expense, adult.id, 999))
            .await,
        Err(EngineError::KeyNotFound("category not exists".to_string()))
    );

    // Person resolution happens first, so an unknown person wins even when
    // the category is unknown too.
    assert_eq!(
        engine
            .new_transaction(draft("x", 1_00, TransactionKind::Expense, 999, 999))
            .await,
        Err(EngineError::KeyNotFound("person not exists".to_string()))
    );
}

#[tokio::test]
async fn rejected_drafts_leave_no_trace() {
    let engine = engine_with_db().await;
    let minor = engine.new_person("Ana", 17).await.unwrap();
    let category = engine
        .new_category("Snacks", CategoryScope::Expense)
        .await
        .unwrap();

    let attempts = [
        draft("", 1_00, TransactionKind::Expense, minor.id, category.id),
        draft("Zero", 0, TransactionKind::Expense, minor.id, category.id),
        draft("Negative", -5, TransactionKind::Expense, minor.id, category.id),
        draft("Minor income", 1_00, TransactionKind::Income, minor.id, category.id),
        draft("Unknown person", 1_00, TransactionKind::Expense, 999, category.id),
    ];
    for attempt in attempts {
        assert!(engine.new_transaction(attempt).await.is_err());
    }

    assert!(engine.transactions().await.unwrap().is_empty());
}

#[tokio::test]
async fn listing_resolves_person_and_category() {
    let engine = engine_with_db().await;
    let person = engine.new_person("Maria", 30).await.unwrap();
    let category = engine
        .new_category("Groceries", CategoryScope::Expense)
        .await
        .unwrap();

    let created = engine
        .new_transaction(draft(
            "Market",
            123_45,
            TransactionKind::Expense,
            person.id,
            category.id,
        ))
        .await
        .unwrap();

    let records = engine.transactions().await.unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.transaction, created);
    assert_eq!(record.transaction.description, "Market");
    assert_eq!(record.transaction.value, MoneyCents::new(123_45));
    assert_eq!(record.transaction.kind, TransactionKind::Expense);
    assert_eq!(record.person, person);
    assert_eq!(record.category, category);
}

#[tokio::test]
async fn deleting_a_person_cascades_to_its_transactions() {
    let engine = engine_with_db().await;
    let maria = engine.new_person("Maria", 30).await.unwrap();
    let carlos = engine.new_person("Carlos", 40).await.unwrap();
    let category = engine
        .new_category("Misc", CategoryScope::Both)
        .await
        .unwrap();

    for person_id in [maria.id, maria.id, carlos.id] {
        engine
            .new_transaction(draft(
                "Entry",
                10_00,
                TransactionKind::Expense,
                person_id,
                category.id,
            ))
            .await
            .unwrap();
    }

    engine.delete_person(maria.id).await.unwrap();

    assert_eq!(
        engine.person(maria.id).await,
        Err(EngineError::KeyNotFound("person not exists".to_string()))
    );
    let remaining = engine.transactions().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|r| r.person.id == carlos.id));
}

#[tokio::test]
async fn deleting_missing_ids_reports_not_found() {
    let engine = engine_with_db().await;

    assert_eq!(
        engine.delete_person(1).await,
        Err(EngineError::KeyNotFound("person not exists".to_string()))
    );
    assert_eq!(
        engine.delete_transaction(1).await,
        Err(EngineError::KeyNotFound(
            "transaction not exists".to_string()
        ))
    );
}

#[tokio::test]
async fn deleting_a_transaction_twice_reports_not_found() {
    let engine = engine_with_db().await;
    let person = engine.new_person("Maria", 30).await.unwrap();
    let category = engine
        .new_category("Misc", CategoryScope::Both)
        .await
        .unwrap();
    let tx = engine
        .new_transaction(draft(
            "Lunch",
            10_00,
            TransactionKind::Expense,
            person.id,
            category.id,
        ))
        .await
        .unwrap();

    engine.delete_transaction(tx.id).await.unwrap();
    assert_eq!(
        engine.delete_transaction(tx.id).await,
        Err(EngineError::KeyNotFound(
            "transaction not exists".to_string()
        ))
    );
}
