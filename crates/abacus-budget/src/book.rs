use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::BudgetError;
use crate::ledger::Category;

/// A serialised budget session: the categories to open and what to do with them.
///
/// ```json
/// {
///   "categories": ["Food", "Auto"],
///   "operations": [
///     { "op": "deposit", "category": "Food", "amount": 500, "description": "Paycheck" },
///     { "op": "transfer", "from": "Food", "to": "Auto", "amount": 50 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetScript {
    pub categories: Vec<String>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Deposit {
        category: String,
        amount: Decimal,
        #[serde(default)]
        description: String,
    },
    Withdraw {
        category: String,
        amount: Decimal,
        #[serde(default)]
        description: String,
    },
    Transfer {
        from: String,
        to: String,
        amount: Decimal,
    },
}

impl BudgetScript {
    pub fn from_json(text: &str) -> Result<Self, BudgetError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Food, Clothing and Auto with a paycheck each and a few expenses.
    pub fn demo() -> Self {
        fn deposit(category: &str, amount: Decimal, description: &str) -> Operation {
            Operation::Deposit {
                category: category.to_string(),
                amount,
                description: description.to_string(),
            }
        }
        fn withdraw(category: &str, amount: Decimal, description: &str) -> Operation {
            Operation::Withdraw {
                category: category.to_string(),
                amount,
                description: description.to_string(),
            }
        }

        Self {
            categories: vec!["Food".into(), "Clothing".into(), "Auto".into()],
            operations: vec![
                deposit("Food", dec!(500), "Paycheck"),
                withdraw("Food", dec!(120), "Groceries"),
                withdraw("Food", dec!(40), "Takeout"),
                deposit("Clothing", dec!(200), "Paycheck"),
                withdraw("Clothing", dec!(75), "Shoes"),
                deposit("Auto", dec!(300), "Paycheck"),
                withdraw("Auto", dec!(100), "Gas"),
                withdraw("Auto", dec!(60), "Repairs"),
            ],
        }
    }
}

/// Categories in the order they were opened.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Book {
    categories: Vec<Category>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn demo() -> Result<Self, BudgetError> {
        Self::from_script(&BudgetScript::demo())
    }

    /// Open every category in the script, then apply its operations in order.
    ///
    /// Declined withdrawals and transfers are skipped; anything malformed
    /// aborts the whole script.
    pub fn from_script(script: &BudgetScript) -> Result<Self, BudgetError> {
        let mut book = Self::new();
        for name in &script.categories {
            book.add_category(name)?;
        }
        for op in &script.operations {
            book.apply(op)?;
        }
        Ok(book)
    }

    pub fn load_script(path: &Path) -> Result<Self, BudgetError> {
        let text = std::fs::read_to_string(path)?;
        let script = BudgetScript::from_json(&text)?;
        tracing::debug!(
            path = %path.display(),
            operations = script.operations.len(),
            "loaded budget script"
        );
        Self::from_script(&script)
    }

    pub fn add_category(&mut self, name: &str) -> Result<&mut Category, BudgetError> {
        if self.position(name).is_some() {
            return Err(BudgetError::DuplicateCategory(name.to_string()));
        }
        self.categories.push(Category::new(name));
        let last = self.categories.len() - 1;
        Ok(&mut self.categories[last])
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name() == name)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Apply one operation. Returns whether it was recorded.
    pub fn apply(&mut self, op: &Operation) -> Result<bool, BudgetError> {
        let applied = match op {
            Operation::Deposit {
                category,
                amount,
                description,
            } => {
                self.lookup_mut(category)?.deposit(*amount, description)?;
                true
            }
            Operation::Withdraw {
                category,
                amount,
                description,
            } => self.lookup_mut(category)?.withdraw(*amount, description)?,
            Operation::Transfer { from, to, amount } => {
                let (source, target) = self.pair_mut(from, to)?;
                source.transfer(*amount, target)?
            }
        };
        if !applied {
            tracing::info!(?op, "operation declined for insufficient funds");
        }
        Ok(applied)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name() == name)
    }

    fn lookup_mut(&mut self, name: &str) -> Result<&mut Category, BudgetError> {
        self.category_mut(name)
            .ok_or_else(|| BudgetError::UnknownCategory(name.to_string()))
    }

    fn pair_mut(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<(&mut Category, &mut Category), BudgetError> {
        let i = self
            .position(from)
            .ok_or_else(|| BudgetError::UnknownCategory(from.to_string()))?;
        let j = self
            .position(to)
            .ok_or_else(|| BudgetError::UnknownCategory(to.to_string()))?;
        if i == j {
            return Err(BudgetError::SelfTransfer(from.to_string()));
        }
        if i < j {
            let (left, right) = self.categories.split_at_mut(j);
            Ok((&mut left[i], &mut right[0]))
        } else {
            let (left, right) = self.categories.split_at_mut(i);
            Ok((&mut right[0], &mut left[j]))
        }
    }
}
