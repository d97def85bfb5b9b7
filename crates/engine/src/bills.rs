//! The module contains the `Bill` type, one recorded expense, and its table.
//!
//! Bills are immutable once stored: they can only be inserted or deleted.
use core::fmt;

use sea_orm::{ActiveValue, entity::prelude::*};

use crate::{EngineError, Money, ResultEngine};

/// A stored bill: description and amount plus the id assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bill {
    pub id: i32,
    pub description: String,
    pub amount: Money,
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {}", self.id, self.description, self.amount)
    }
}

impl From<Model> for Bill {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            amount: Money::new(model.amount),
        }
    }
}

/// A validated bill that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBill {
    description: String,
    amount: Money,
}

impl NewBill {
    /// Build a new bill. The description is trimmed and must not be empty.
    pub fn new(description: &str, amount: Money) -> ResultEngine<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(EngineError::InvalidDescription(
                "description must not be empty".to_string(),
            ));
        }
        Ok(Self {
            description: description.to_string(),
            amount,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bill_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub amount: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&NewBill> for ActiveModel {
    fn from(bill: &NewBill) -> Self {
        Self {
            id: ActiveValue::NotSet,
            description: ActiveValue::Set(bill.description.clone()),
            amount: ActiveValue::Set(bill.amount.minor()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bill_trims_description() {
        let bill = NewBill::new("  Coffee \n", Money::new(350)).unwrap();
        assert_eq!(bill.description(), "Coffee");
        assert_eq!(bill.amount(), Money::new(350));
    }

    #[test]
    fn new_bill_rejects_blank_description() {
        let err = NewBill::new(" \t ", Money::new(100)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidDescription("description must not be empty".to_string())
        );
    }

    #[test]
    fn new_bill_accepts_negative_amounts() {
        let bill = NewBill::new("Refund", Money::new(-1250)).unwrap();
        assert!(bill.amount().is_negative());
    }

    #[test]
    fn active_model_leaves_id_to_the_store() {
        let bill = NewBill::new("Rent", Money::new(80_000)).unwrap();
        let active = ActiveModel::from(&bill);
        assert!(matches!(active.id, ActiveValue::NotSet));
        assert!(matches!(active.amount, ActiveValue::Set(80_000)));
    }

    #[test]
    fn model_converts_to_bill() {
        let bill = Bill::from(Model {
            id: 7,
            description: "Tea".to_string(),
            amount: 220,
        });
        assert_eq!(bill.amount, Money::new(220));
        assert_eq!(bill.to_string(), "#7 Tea 2.20");
    }
}
