use engine::{Money, NewBill};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogField {
    #[default]
    Description,
    Amount,
}

/// Modal form collecting a description and an amount for a new bill.
#[derive(Debug, Default)]
pub struct AddBillDialog {
    pub state: DialogState,
    pub description: String,
    pub amount: String,
    pub focus: DialogField,
    pub error: Option<String>,
}

impl AddBillDialog {
    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn open(&mut self) {
        self.state = DialogState::Open;
        self.focus = DialogField::Description;
        self.error = None;
    }

    /// Close and forget whatever was typed.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Called once the bill has been stored.
    pub fn complete(&mut self) {
        self.reset();
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            DialogField::Description => DialogField::Amount,
            DialogField::Amount => DialogField::Description,
        };
    }

    pub fn push(&mut self, ch: char) {
        self.active_field_mut().push(ch);
        self.error = None;
    }

    pub fn pop(&mut self) {
        self.active_field_mut().pop();
        self.error = None;
    }

    /// Validate the fields. On failure the dialog stays open with `error` set.
    pub fn submit(&mut self) -> Option<NewBill> {
        match self.parse() {
            Ok(bill) => {
                self.error = None;
                Some(bill)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    fn parse(&self) -> Result<NewBill, String> {
        if self.description.trim().is_empty() {
            return Err("Description must not be empty.".to_string());
        }
        let amount: Money = self.amount.parse().map_err(|err| format!("{err}."))?;
        NewBill::new(&self.description, amount).map_err(|err| err.to_string())
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            DialogField::Description => &mut self.description,
            DialogField::Amount => &mut self.amount,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
