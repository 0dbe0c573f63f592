mod support;

use pocketwise_client::commands::{bills, budgets, goals, transactions};
use pocketwise_client::model::{BillStatus, ExpenseCategory, GoalStatus, TransactionKind};
use support::testkit::{
    bill, budget, envelope_data, expense, goal, income, seed_bills, seed_budgets, seed_goals,
    seed_transactions, temp_home,
};

#[test]
fn adding_a_transaction_auto_categorizes_from_the_description() {
    let created = temp_home("pocketwise-txn-add");
    assert!(created.is_ok());
    let Ok((_dir, home)) = created else {
        return;
    };

    let response = transactions::add_with_options(transactions::TxnAddOptions {
        amount: 25_000.0,
        kind: Some(TransactionKind::Expense),
        category: None,
        description: "makan siang di warteg".to_string(),
        home_override: Some(&home),
    });
    assert!(response.is_ok());
    let Ok(envelope) = response else {
        return;
    };

    let data = envelope_data(&envelope);
    assert_eq!(data["row"]["category"], "Makanan");
    assert_eq!(data["auto_categorized"], true);
    assert_eq!(data["confidence"], 100);

    // The stamped month index agrees with the stamped date.
    let date = data["row"]["date"].as_str().unwrap_or_default().to_string();
    let month_from_date = date
        .get(5..7)
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(0);
    assert_eq!(data["row"]["month"], month_from_date - 1);
}

#[test]
fn uncategorizable_descriptions_are_rejected_with_suggestions() {
    let created = temp_home("pocketwise-txn-reject");
    assert!(created.is_ok());
    let Ok((_dir, home)) = created else {
        return;
    };

    let response = transactions::add_with_options(transactions::TxnAddOptions {
        amount: 10_000.0,
        kind: Some(TransactionKind::Expense),
        category: None,
        description: "xyzzy plugh".to_string(),
        home_override: Some(&home),
    });
    assert!(response.is_err());
    if let Err(error) = response {
        assert_eq!(error.code, "uncategorized_description");
    }

    // Nothing was written.
    let listing = transactions::list_with_options(transactions::TxnListOptions {
        month: None,
        home_override: Some(&home),
    });
    assert!(listing.is_ok());
    if let Ok(envelope) = listing {
        let data = envelope_data(&envelope);
        assert_eq!(data["rows"].as_array().map(Vec::len), Some(0));
    }
}

#[test]
fn explicit_categories_are_validated_per_kind() {
    let created = temp_home("pocketwise-txn-category");
    assert!(created.is_ok());
    let Ok((_dir, home)) = created else {
        return;
    };

    let response = transactions::add_with_options(transactions::TxnAddOptions {
        amount: 50_000.0,
        kind: Some(TransactionKind::Income),
        category: Some("Makanan".to_string()),
        description: "kiriman".to_string(),
        home_override: Some(&home),
    });
    assert!(response.is_err());
    if let Err(error) = response {
        assert_eq!(error.code, "unknown_category");
    }
}

#[test]
fn list_filters_by_month_and_totals_the_rest() {
    let created = temp_home("pocketwise-txn-list");
    assert!(created.is_ok());
    let Ok((_dir, home)) = created else {
        return;
    };

    seed_transactions(
        &home,
        &[
            income("txn_1", 1000.0, "2026-07-01", 6),
            expense("txn_2", 400.0, ExpenseCategory::Makanan, "2026-07-02", 6),
            expense("txn_3", 100.0, ExpenseCategory::Transport, "2026-06-15", 5),
        ],
    );

    let listing = transactions::list_with_options(transactions::TxnListOptions {
        month: Some(6),
        home_override: Some(&home),
    });
    assert!(listing.is_ok());
    if let Ok(envelope) = listing {
        let data = envelope_data(&envelope);
        assert_eq!(data["rows"].as_array().map(Vec::len), Some(2));
        assert_eq!(data["totals"]["income"], 1000.0);
        assert_eq!(data["totals"]["expense"], 400.0);
        assert_eq!(data["totals"]["balance"], 600.0);
    }
}

#[test]
fn deleting_a_missing_transaction_is_an_error() {
    let created = temp_home("pocketwise-txn-delete");
    assert!(created.is_ok());
    let Ok((_dir, home)) = created else {
        return;
    };

    let response = transactions::delete_with_options(transactions::TxnDeleteOptions {
        id: "txn_missing".to_string(),
        home_override: Some(&home),
    });
    assert!(response.is_err());
    if let Err(error) = response {
        assert_eq!(error.code, "transaction_not_found");
    }
}

#[test]
fn duplicate_budget_categories_are_rejected() {
    let created = temp_home("pocketwise-budget-dup");
    assert!(created.is_ok());
    let Ok((_dir, home)) = created else {
        return;
    };

    seed_budgets(&home, &[budget("bud_1", ExpenseCategory::Makanan, 500.0)]);

    let response = budgets::set_with_options(budgets::BudgetSetOptions {
        category: "Makanan".to_string(),
        amount: 800.0,
        home_override: Some(&home),
    });
    assert!(response.is_err());
    if let Err(error) = response {
        assert_eq!(error.code, "duplicate_budget");
    }
}

#[test]
fn budget_list_reports_spend_status_for_the_current_month() {
    let created = temp_home("pocketwise-budget-list");
    assert!(created.is_ok());
    let Ok((_dir, home)) = created else {
        return;
    };

    seed_budgets(
        &home,
        &[
            budget("bud_1", ExpenseCategory::Makanan, 100.0),
            budget("bud_2", ExpenseCategory::Transport, 100.0),
        ],
    );
    seed_transactions(
        &home,
        &[
            expense("txn_1", 150.0, ExpenseCategory::Makanan, "2026-08-02", 7),
            expense("txn_2", 85.0, ExpenseCategory::Transport, "2026-08-03", 7),
        ],
    );

    let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 7);
    assert!(today.is_some());
    let listing = budgets::list_with_options(budgets::BudgetListOptions {
        today,
        home_override: Some(&home),
    });
    assert!(listing.is_ok());
    if let Ok(envelope) = listing {
        let data = envelope_data(&envelope);
        let rows = data["rows"].as_array().cloned().unwrap_or_default();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["status"], "exceeded");
        assert_eq!(rows[0]["remaining"], -50.0);
        assert_eq!(rows[1]["status"], "warning");
    }
}

#[test]
fn goal_contributions_complete_the_goal_exactly_once() {
    let created = temp_home("pocketwise-goal");
    assert!(created.is_ok());
    let Ok((_dir, home)) = created else {
        return;
    };

    seed_goals(&home, &[goal("goal_1", "Laptop", 100.0, 90.0, GoalStatus::Active)]);

    let response = goals::contribute_with_options(goals::GoalContributeOptions {
        id: "goal_1".to_string(),
        amount: 15.0,
        home_override: Some(&home),
    });
    assert!(response.is_ok());
    if let Ok(envelope) = response {
        let data = envelope_data(&envelope);
        assert_eq!(data["completed"], true);
        assert_eq!(data["row"]["status"], "completed");
        assert_eq!(data["row"]["currentAmount"], 105.0);
    }

    // A further contribution still lands but does not re-complete.
    let again = goals::contribute_with_options(goals::GoalContributeOptions {
        id: "goal_1".to_string(),
        amount: 5.0,
        home_override: Some(&home),
    });
    assert!(again.is_ok());
    if let Ok(envelope) = again {
        let data = envelope_data(&envelope);
        assert_eq!(data["completed"], false);
        assert_eq!(data["row"]["currentAmount"], 110.0);
    }
}

#[test]
fn paying_a_bill_twice_is_an_error() {
    let created = temp_home("pocketwise-bill");
    assert!(created.is_ok());
    let Ok((_dir, home)) = created else {
        return;
    };

    seed_bills(
        &home,
        &[bill("bill_1", "Internet", 300.0, "2026-08-10", BillStatus::Pending)],
    );

    let paid = bills::pay_with_options(bills::BillPayOptions {
        id: "bill_1".to_string(),
        home_override: Some(&home),
    });
    assert!(paid.is_ok());
    if let Ok(envelope) = paid {
        let data = envelope_data(&envelope);
        assert_eq!(data["row"]["status"], "paid");
        assert!(data["row"]["paidAt"].is_string());
    }

    let again = bills::pay_with_options(bills::BillPayOptions {
        id: "bill_1".to_string(),
        home_override: Some(&home),
    });
    assert!(again.is_err());
    if let Err(error) = again {
        assert_eq!(error.code, "bill_already_paid");
    }
}

#[test]
fn upcoming_bills_respect_the_due_window() {
    let created = temp_home("pocketwise-bill-window");
    assert!(created.is_ok());
    let Ok((_dir, home)) = created else {
        return;
    };

    seed_bills(
        &home,
        &[
            bill("bill_1", "Rent", 900.0, "2026-08-01", BillStatus::Pending),
            bill("bill_2", "Internet", 300.0, "2026-08-10", BillStatus::Pending),
            bill("bill_3", "Phone", 100.0, "2026-08-30", BillStatus::Pending),
        ],
    );

    let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 7);
    assert!(today.is_some());
    let listing = bills::list_with_options(bills::BillListOptions {
        due_within_days: Some(7),
        today,
        home_override: Some(&home),
    });
    assert!(listing.is_ok());
    if let Ok(envelope) = listing {
        let data = envelope_data(&envelope);
        let rows = data["rows"].as_array().cloned().unwrap_or_default();
        // Only the bill due inside [today, today+7] qualifies; the overdue
        // one is reported through the counter instead.
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "bill_2");
        assert_eq!(data["overdue_count"], 1);
        assert_eq!(data["pending_count"], 3);
    }
}
