// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashbook::models::{NewTransaction, TransactionType};
use cashbook::notify::RecordingNotifier;
use cashbook::storage::MemoryStorage;
use cashbook::store::TransactionStore;
use cashbook::validation::ValidationError;
use cashbook::{cli, commands::transactions};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn run(
    store: &mut TransactionStore<MemoryStorage, &RecordingNotifier>,
    args: &[&str],
) -> anyhow::Result<()> {
    let mut argv = vec!["cashbook", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(store, tx_m)
    } else {
        panic!("no tx subcommand");
    }
}

fn seed(store: &mut TransactionStore<MemoryStorage, &RecordingNotifier>) -> Vec<String> {
    let rows = [
        (5, "Salário", "3000", TransactionType::Income, Some("Trabalho")),
        (10, "Mercado", "250.40", TransactionType::Expense, Some("Casa")),
        (12, "Salgado", "8", TransactionType::Expense, None),
    ];
    rows.into_iter()
        .map(|(d, desc, amount, ty, cat)| {
            store.add(NewTransaction {
                date: NaiveDate::from_ymd_opt(2025, 1, d)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
                description: desc.into(),
                amount: amount.parse().unwrap(),
                r#type: ty,
                category: cat.map(str::to_string),
            })
        })
        .collect()
}

#[test]
fn add_records_a_validated_transaction() {
    let notifier = RecordingNotifier::new();
    let mut store = TransactionStore::open(MemoryStorage::new(), &notifier);
    run(
        &mut store,
        &[
            "add",
            "--date",
            "2025-01-05T09:15",
            "--description",
            " Salário ",
            "--amount",
            " 100.50 ",
            "--type",
            "income",
            "--category",
            "Trabalho",
        ],
    )
    .unwrap();

    let t = &store.snapshot()[0];
    assert_eq!(t.description, "Salário");
    assert_eq!(t.amount, "100.5".parse::<Decimal>().unwrap());
    assert_eq!(t.date.to_string(), "2025-01-05 09:15:00");
    assert_eq!(t.category.as_deref(), Some("Trabalho"));
    assert_eq!(notifier.titles(), vec!["Receita adicionada"]);
}

#[test]
fn add_rejects_empty_description_before_the_store() {
    let notifier = RecordingNotifier::new();
    let mut store = TransactionStore::open(MemoryStorage::new(), &notifier);
    let err = run(
        &mut store,
        &[
            "add",
            "--date",
            "2025-01-05",
            "--description",
            "   ",
            "--amount",
            "10",
            "--type",
            "expense",
        ],
    )
    .unwrap_err();

    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::EmptyDescription)
    );
    assert!(store.is_empty());
    assert!(notifier.notifications().is_empty());
}

#[test]
fn add_rejects_non_positive_amount() {
    let notifier = RecordingNotifier::new();
    let mut store = TransactionStore::open(MemoryStorage::new(), &notifier);
    let err = run(
        &mut store,
        &["add", "--description", "Estorno", "--amount", "0", "--type", "income"],
    )
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::NonPositiveAmount)
    );
    assert!(store.is_empty());
}

#[test]
fn edit_replaces_only_given_fields() {
    let notifier = RecordingNotifier::new();
    let mut store = TransactionStore::open(MemoryStorage::new(), &notifier);
    let ids = seed(&mut store);
    let before = store.get(&ids[1]).unwrap().clone();

    run(&mut store, &["edit", "--id", &format!(" {} ", ids[1]), "--amount", "275"]).unwrap();

    let after = store.get(&ids[1]).unwrap();
    assert_eq!(after.amount, "275".parse::<Decimal>().unwrap());
    assert_eq!(after.description, before.description);
    assert_eq!(after.date, before.date);
    assert_eq!(after.category, before.category);
    assert_eq!(store.snapshot()[1].id, ids[1]);

    run(&mut store, &["edit", "--id", &ids[1], "--category", ""]).unwrap();
    assert_eq!(store.get(&ids[1]).unwrap().category, None);
}

#[test]
fn edit_of_unknown_id_is_an_error() {
    let notifier = RecordingNotifier::new();
    let mut store = TransactionStore::open(MemoryStorage::new(), &notifier);
    seed(&mut store);
    let err = run(&mut store, &["edit", "--id", "nope", "--amount", "1"]).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn rm_twice_is_harmless() {
    let notifier = RecordingNotifier::new();
    let mut store = TransactionStore::open(MemoryStorage::new(), &notifier);
    let ids = seed(&mut store);

    run(&mut store, &["rm", "--id", &ids[0]]).unwrap();
    run(&mut store, &["rm", "--id", &ids[0]]).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.get(&ids[0]).is_none());
}

#[test]
fn list_applies_filters() {
    let notifier = RecordingNotifier::new();
    let mut store = TransactionStore::open(MemoryStorage::new(), &notifier);
    seed(&mut store);

    let matches = cli::build_cli().get_matches_from([
        "cashbook", "tx", "list", "--type", "expense", "--search", "SAL", "--to", "2025-01-12",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(store.snapshot(), list_m).unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].description, "Salgado");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}
