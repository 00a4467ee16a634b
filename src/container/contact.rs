use std::fmt;

/// A contact record stored in the table.
///
/// `name` always echoes the key the contact was inserted under; only
/// `number` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    number: String,
}

impl Contact {
    pub fn new(name: &str, number: &str) -> Self {
        Self {
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_number(&self) -> &str {
        &self.number
    }

    pub(crate) fn set_number(&mut self, number: &str) {
        self.number = number.to_string();
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}
