//! Form buffers
//!
//! The four text inputs bound to the create/edit form. They are scratch
//! buffers: filled from a row when editing starts, typed into by the user,
//! read on submit and cleared afterwards.

use roster_core::UserFields;

/// One input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Username,
    Website,
}

impl FormField {
    /// All inputs, in display order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Username,
        FormField::Website,
    ];

    /// Input name attribute, matching the wire field name.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Username => "username",
            FormField::Website => "website",
        }
    }

    /// Placeholder / label text.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Username => "Username",
            FormField::Website => "Website",
        }
    }

    /// Inputs that must be filled before a create is sent.
    pub fn required(self) -> bool {
        matches!(self, FormField::Name | FormField::Email)
    }
}

/// Current contents of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    fields: UserFields,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of one input.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Email => &self.fields.email,
            FormField::Username => &self.fields.username,
            FormField::Website => &self.fields.website,
        }
    }

    /// Replace the value of one input.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.fields.name,
            FormField::Email => &mut self.fields.email,
            FormField::Username => &mut self.fields.username,
            FormField::Website => &mut self.fields.website,
        };
        *slot = value.into();
    }

    /// Replace every input at once.
    pub fn fill(&mut self, fields: UserFields) {
        self.fields = fields;
    }

    pub fn clear(&mut self) {
        self.fields = UserFields::default();
    }

    pub fn fields(&self) -> &UserFields {
        &self.fields
    }

    pub fn is_blank(&self) -> bool {
        self.fields.is_blank()
    }

    /// First required input left blank, if any.
    pub fn missing_required(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|&field| field.required() && self.get(field).trim().is_empty())
    }
}
