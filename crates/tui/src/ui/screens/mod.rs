pub mod add_bill;
pub mod bills;
