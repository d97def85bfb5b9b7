use sea_orm::{QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*};

use crate::{Bill, BillStore, EngineError, Money, NewBill, ResultEngine, bills};

use super::{Engine, with_tx};

impl BillStore for Engine {
    async fn list_all(&self) -> ResultEngine<Vec<Bill>> {
        let models = bills::Entity::find()
            .order_by_asc(bills::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Bill::from).collect())
    }

    async fn load_by_ids(&self, ids: &[i32]) -> ResultEngine<Vec<Bill>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = bills::Entity::find()
            .filter(bills::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(bills::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Bill::from).collect())
    }

    async fn sum_amount(&self) -> ResultEngine<Money> {
        // SUM over an empty table is NULL.
        let total: Option<Option<i64>> = bills::Entity::find()
            .select_only()
            .column_as(bills::Column::Amount.sum(), "total")
            .into_tuple::<Option<i64>>()
            .one(&self.database)
            .await?;
        Ok(total.flatten().map(Money::new).unwrap_or(Money::ZERO))
    }

    async fn max_id(&self) -> ResultEngine<Option<i32>> {
        let max: Option<Option<i32>> = bills::Entity::find()
            .select_only()
            .column_as(bills::Column::Id.max(), "max_id")
            .into_tuple::<Option<i32>>()
            .one(&self.database)
            .await?;
        Ok(max.flatten())
    }

    async fn insert(&self, bill: NewBill) -> ResultEngine<Bill> {
        let model = bills::ActiveModel::from(&bill)
            .insert(&self.database)
            .await?;
        Ok(model.into())
    }

    async fn insert_many(&self, new_bills: Vec<NewBill>) -> ResultEngine<Vec<Bill>> {
        with_tx!(self, |db_tx| {
            let mut stored = Vec::with_capacity(new_bills.len());
            for bill in &new_bills {
                let model = bills::ActiveModel::from(bill).insert(&db_tx).await?;
                stored.push(Bill::from(model));
            }
            Ok::<_, EngineError>(stored)
        })
    }

    async fn delete(&self, bill: &Bill) -> ResultEngine<bool> {
        let res = bills::Entity::delete_by_id(bill.id)
            .exec(&self.database)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
