use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// Income category vocabulary. Declaration order is the categorizer's
/// tie-break order and must stay aligned with the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncomeCategory {
    #[serde(rename = "Uang Saku")]
    UangSaku,
    #[serde(rename = "Kerja Sampingan")]
    KerjaSampingan,
    Beasiswa,
    Lainnya,
}

impl IncomeCategory {
    pub const ALL: [Self; 4] = [
        Self::UangSaku,
        Self::KerjaSampingan,
        Self::Beasiswa,
        Self::Lainnya,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::UangSaku => "Uang Saku",
            Self::KerjaSampingan => "Kerja Sampingan",
            Self::Beasiswa => "Beasiswa",
            Self::Lainnya => "Lainnya",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| value.eq_ignore_ascii_case(category.label()))
    }

    pub fn labels() -> [&'static str; 4] {
        [
            Self::UangSaku.label(),
            Self::KerjaSampingan.label(),
            Self::Beasiswa.label(),
            Self::Lainnya.label(),
        ]
    }
}

/// Expense category vocabulary. Same ordering contract as `IncomeCategory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Makanan,
    Transport,
    Kuliah,
    Hiburan,
    Kebutuhan,
    Lainnya,
}

impl ExpenseCategory {
    pub const ALL: [Self; 6] = [
        Self::Makanan,
        Self::Transport,
        Self::Kuliah,
        Self::Hiburan,
        Self::Kebutuhan,
        Self::Lainnya,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Makanan => "Makanan",
            Self::Transport => "Transport",
            Self::Kuliah => "Kuliah",
            Self::Hiburan => "Hiburan",
            Self::Kebutuhan => "Kebutuhan",
            Self::Lainnya => "Lainnya",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| value.eq_ignore_ascii_case(category.label()))
    }

    pub fn labels() -> [&'static str; 6] {
        [
            Self::Makanan.label(),
            Self::Transport.label(),
            Self::Kuliah.label(),
            Self::Hiburan.label(),
            Self::Kebutuhan.label(),
            Self::Lainnya.label(),
        ]
    }
}

/// A category tagged by the transaction kind it belongs to. Income and
/// expense vocabularies are disjoint types; the shared display form is the
/// label string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl Category {
    pub const fn kind(self) -> TransactionKind {
        match self {
            Self::Income(_) => TransactionKind::Income,
            Self::Expense(_) => TransactionKind::Expense,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Income(category) => category.label(),
            Self::Expense(category) => category.label(),
        }
    }

    pub fn parse(value: &str, kind: TransactionKind) -> Option<Self> {
        match kind {
            TransactionKind::Income => IncomeCategory::parse(value).map(Self::Income),
            TransactionKind::Expense => ExpenseCategory::parse(value).map(Self::Expense),
        }
    }

    pub fn as_expense(self) -> Option<ExpenseCategory> {
        match self {
            Self::Expense(category) => Some(category),
            Self::Income(_) => None,
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Immutable once created; deletable, never edited in place. `month` is
/// stamped from the creation clock alongside `date` and stays the
/// bucketing key everywhere, never re-derived on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTransaction")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    pub description: String,
    pub date: String,
    pub month: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    id: String,
    amount: f64,
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: String,
    description: String,
    date: String,
    month: u32,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = String;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let Some(category) = Category::parse(&raw.category, raw.kind) else {
            return Err(format!(
                "`{}` is not a {} category",
                raw.category,
                raw.kind.as_str()
            ));
        };
        Ok(Self {
            id: raw.id,
            amount: raw.amount,
            kind: raw.kind,
            category,
            description: raw.description,
            date: raw.date,
            month: raw.month,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
}

impl GoalStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub status: GoalStatus,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Paid,
}

impl BillStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub due_date: String,
    pub category: ExpenseCategory,
    pub status: BillStatus,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
}
