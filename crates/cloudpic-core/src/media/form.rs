//! Inspectable multipart form model.

use reqwest::multipart;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File { file_name: String, bytes: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub value: FieldValue,
}

/// Ordered multipart fields for one signed request.
///
/// Kept as plain data so request shape can be asserted without a network
/// round trip; [`SignedForm::into_multipart`] produces the wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignedForm {
    fields: Vec<FormField>,
}

impl SignedForm {
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    #[must_use]
    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push(FormField {
            name,
            value: FieldValue::Text(value.into()),
        });
        self
    }

    #[must_use]
    pub fn file(
        mut self,
        name: &'static str,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.fields.push(FormField {
            name,
            value: FieldValue::File {
                file_name: file_name.into(),
                bytes,
            },
        });
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }

    /// First text value for `name`, if any.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|field| match &field.value {
            FieldValue::Text(value) if field.name == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn into_multipart(self) -> multipart::Form {
        self.fields
            .into_iter()
            .fold(multipart::Form::new(), |form, field| match field.value {
                FieldValue::Text(value) => form.text(field.name, value),
                FieldValue::File { file_name, bytes } => {
                    form.part(field.name, multipart::Part::bytes(bytes).file_name(file_name))
                }
            })
    }
}
