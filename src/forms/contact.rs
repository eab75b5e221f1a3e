use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::contact::NewContact;
use crate::forms::FormError;

/// Editable field of [`AddContactForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl FromStr for ContactField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "phone" => Ok(ContactField::Phone),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Add-contact form: the three inputs plus whether the form is shown.
///
/// Input is kept verbatim; nothing is validated before submission.
pub struct AddContactForm {
    #[serde(default)]
    pub open: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl AddContactForm {
    /// Shows a hidden form or hides a shown one; typed values survive.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
        }
    }

    /// Empties every input and closes the form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl From<&AddContactForm> for NewContact {
    fn from(form: &AddContactForm) -> Self {
        NewContact::new(form.name.clone(), form.email.clone(), form.phone.clone())
    }
}
