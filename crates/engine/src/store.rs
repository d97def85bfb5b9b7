//! Storage interface for bills.
//!
//! [`Engine`](crate::Engine) implements it on top of sea-orm; the TUI is
//! generic over it so it can run against any backend.

use std::future::Future;

use crate::{Bill, Money, NewBill, ResultEngine};

pub trait BillStore {
    /// Every stored bill, in insertion order.
    fn list_all(&self) -> impl Future<Output = ResultEngine<Vec<Bill>>> + Send;

    /// Bills whose id is in `ids`, in insertion order. Unknown ids are ignored.
    fn load_by_ids(&self, ids: &[i32]) -> impl Future<Output = ResultEngine<Vec<Bill>>> + Send;

    /// Sum of all amounts, [`Money::ZERO`] when the store is empty.
    fn sum_amount(&self) -> impl Future<Output = ResultEngine<Money>> + Send;

    /// Highest id among stored bills, `None` when empty.
    fn max_id(&self) -> impl Future<Output = ResultEngine<Option<i32>>> + Send;

    /// Persist a bill and return it with its freshly assigned id.
    fn insert(&self, bill: NewBill) -> impl Future<Output = ResultEngine<Bill>> + Send;

    /// Persist all bills atomically: either every bill is stored or none is.
    fn insert_many(
        &self,
        bills: Vec<NewBill>,
    ) -> impl Future<Output = ResultEngine<Vec<Bill>>> + Send;

    /// Remove the bill with the same id. Returns `false` if it was already gone.
    fn delete(&self, bill: &Bill) -> impl Future<Output = ResultEngine<bool>> + Send;
}
